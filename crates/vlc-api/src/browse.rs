use serde::{Deserialize, Serialize};

use crate::client::{ApiError, Transport};
use crate::command::{BROWSE_ENDPOINT, Param, params};
use crate::vlc::VlcClient;

/// Directory listing returned by `requests/browse.json`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Browse {
    #[serde(default, rename = "element")]
    pub elements: Vec<File>,
}

/// One entry of a directory listing. Times are Unix seconds.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct File {
    /// `"file"` or `"dir"`.
    #[serde(default, rename = "type")]
    pub file_type: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub mode: u32,
    #[serde(default)]
    pub uid: u32,
    #[serde(default)]
    pub gid: u32,
    #[serde(default)]
    pub access_time: i64,
    #[serde(default)]
    pub creation_time: i64,
    #[serde(default)]
    pub modification_time: i64,
}

impl File {
    pub fn is_dir(&self) -> bool {
        self.file_type == "dir"
    }
}

impl<T: Transport> VlcClient<T> {
    /// List a directory by filesystem path.
    ///
    /// VLC deprecates the `dir` parameter; prefer [`Self::browse_uri`].
    pub async fn browse_path(&self, directory: &str) -> Result<Browse, ApiError> {
        self.fetch_json(BROWSE_ENDPOINT, &params([(Param::Dir, directory)]))
            .await
    }

    /// List a directory by URI, e.g. `file:///home/user/Music`.
    pub async fn browse_uri(&self, uri: &str) -> Result<Browse, ApiError> {
        self.fetch_json(BROWSE_ENDPOINT, &params([(Param::Uri, uri)]))
            .await
    }
}
