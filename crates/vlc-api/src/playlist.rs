use serde::{Deserialize, Serialize};

use crate::client::{ApiError, Transport};
use crate::command::PLAYLIST_ENDPOINT;
use crate::query::ParamMap;
use crate::vlc::VlcClient;

/// A node of the playlist tree returned by `requests/playlist.json`.
///
/// The root holds the "Playlist" and "Media Library" nodes; items are
/// leaves carrying a `uri`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PlaylistNode {
    #[serde(default)]
    pub ro: String,
    #[serde(default, rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// Set (to `"current"`) on the item being played.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<PlaylistNode>,
    /// Seconds; `-1` for streams of unknown length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
}

impl PlaylistNode {
    pub fn is_leaf(&self) -> bool {
        self.node_type == "leaf"
    }

    pub fn is_current(&self) -> bool {
        self.current.is_some()
    }

    /// All leaf items below (and including) this node, depth first.
    pub fn leaves(&self) -> Vec<&PlaylistNode> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.is_leaf() {
                out.push(node);
            }
            stack.extend(node.children.iter().rev());
        }
        out
    }

    /// The item currently being played, if any.
    pub fn current_item(&self) -> Option<&PlaylistNode> {
        self.leaves().into_iter().find(|n| n.is_current())
    }
}

impl<T: Transport> VlcClient<T> {
    /// Fetch the whole playlist tree.
    pub async fn playlist(&self) -> Result<PlaylistNode, ApiError> {
        self.fetch_json(PLAYLIST_ENDPOINT, &ParamMap::new()).await
    }
}
