use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::client::{ApiError, Transport};
use crate::command::{Param, VLM_COMMAND_ENDPOINT, VLM_ENDPOINT, params};
use crate::query::ParamMap;
use crate::vlc::VlcClient;

/// Response of the VLM (VideoLAN Manager) endpoints.
///
/// VLC reports a rejected command inside the document rather than with an
/// HTTP error, so a successful request may still carry a non-empty `error`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename = "vlm")]
pub struct Vlm {
    #[serde(default)]
    pub error: String,
}

impl Vlm {
    /// Root element of every VLM response document.
    pub const ROOT: &'static str = "vlm";

    pub fn is_error(&self) -> bool {
        !self.error.trim().is_empty()
    }

    /// Turn a reported VLM error into [`ApiError::Vlm`].
    pub fn into_result(self) -> Result<Self, ApiError> {
        if self.is_error() {
            Err(ApiError::Vlm(self.error))
        } else {
            Ok(self)
        }
    }
}

impl<T: Transport> VlcClient<T> {
    /// Fetch the list of VLM elements.
    pub async fn vlm_elements(&self) -> Result<Vlm, ApiError> {
        self.fetch_xml(VLM_ENDPOINT, &ParamMap::new(), Vlm::ROOT).await
    }

    /// Run a VLM command such as `show` or `new chan broadcast enabled`.
    ///
    /// The command is form-encoded before it is placed in the query.
    pub async fn run_vlm_command(&self, command: &str) -> Result<Vlm, ApiError> {
        let query = params([(Param::Command, encode_command(command))]);
        self.fetch_xml(VLM_COMMAND_ENDPOINT, &query, Vlm::ROOT).await
    }
}

pub(crate) fn encode_command(command: &str) -> String {
    form_urlencoded::byte_serialize(command.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(raw: &[u8]) -> Result<Vlm, ApiError> {
        crate::decode::decode_xml(raw, Vlm::ROOT)
    }

    #[test]
    fn command_is_form_encoded() {
        assert_eq!(encode_command("show"), "show");
        assert_eq!(encode_command("new chan broadcast"), "new+chan+broadcast");
        assert_eq!(
            encode_command("setup a input file:///x"),
            "setup+a+input+file%3A%2F%2F%2Fx"
        );
    }

    #[test]
    fn decode_error_document() {
        let vlm = decode(
            b"<?xml version=\"1.0\" encoding=\"utf-8\"?><vlm><error>unknown: unknown command</error></vlm>",
        )
        .unwrap();
        assert!(vlm.is_error());
        assert!(matches!(
            vlm.into_result(),
            Err(ApiError::Vlm(msg)) if msg == "unknown: unknown command"
        ));
    }

    #[test]
    fn decode_empty_error_document() {
        let vlm = decode(b"<vlm><error></error></vlm>").unwrap();
        assert!(!vlm.is_error());
        assert_eq!(vlm.into_result().unwrap(), Vlm::default());
    }

    #[test]
    fn unknown_elements_ignored() {
        let vlm = decode(
            b"<vlm><broadcasts><broadcast name=\"chan\" enabled=\"yes\"/></broadcasts><vods/><schedules/></vlm>",
        )
        .unwrap();
        assert_eq!(vlm.error, "");
    }

    #[test]
    fn non_vlm_document_is_decode_error() {
        for raw in [
            &b"<html/>"[..],
            b"<foo/>",
            b"<html><body><error>x</error></body></html>",
            b"<?xml version=\"1.0\"?><root><error>x</error></root>",
        ] {
            let err = decode(raw).unwrap_err();
            assert!(matches!(err, ApiError::Xml(_)), "got: {err}");
        }
    }
}
