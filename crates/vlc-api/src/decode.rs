use quick_xml::Reader;
use quick_xml::de::DeError;
use quick_xml::events::Event;
use serde::de::{DeserializeOwned, Error as _};

use crate::client::ApiError;

/// Deserialize a JSON response body into `T`.
pub fn decode_json<T: DeserializeOwned>(raw: &[u8]) -> Result<T, ApiError> {
    Ok(serde_json::from_slice(raw)?)
}

/// Deserialize an XML response body into `T`.
///
/// The document's root element must be named `root`. The serde decoder
/// ignores the root name, so without this check an unrelated page (an HTML
/// error page from a proxy, say) would decode into an all-default `T`.
pub fn decode_xml<T: DeserializeOwned>(raw: &[u8], root: &str) -> Result<T, ApiError> {
    expect_root(raw, root)?;
    Ok(quick_xml::de::from_reader(raw)?)
}

fn expect_root(raw: &[u8], root: &str) -> Result<(), DeError> {
    let mut reader = Reader::from_reader(raw);
    loop {
        match reader.read_event().map_err(DeError::custom)? {
            Event::Start(e) | Event::Empty(e) => {
                let name = e.local_name();
                if name.as_ref() == root.as_bytes() {
                    return Ok(());
                }
                return Err(DeError::custom(format!(
                    "expected <{root}> root element, found <{}>",
                    String::from_utf8_lossy(name.as_ref())
                )));
            }
            Event::Eof => return Err(DeError::custom(format!("missing <{root}> root element"))),
            // Declaration, comments, doctype and whitespace before the root.
            _ => {}
        }
    }
}
