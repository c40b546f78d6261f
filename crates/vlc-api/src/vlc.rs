use serde::de::DeserializeOwned;
use tracing::debug;

use crate::client::{ApiError, Credentials, HttpClient, Transport};
use crate::decode::{decode_json, decode_xml};
use crate::query::{ParamMap, build_endpoint};

/// High-level client for a running VLC instance.
///
/// Each method maps to one request against VLC's Lua HTTP interface
/// (`requests/status.json`, `requests/playlist.json`, `requests/browse.json`,
/// `requests/vlm.xml`, `requests/vlm_cmd.xml`). Arguments are validated
/// locally first; an invalid argument returns [`ApiError::Validation`]
/// without touching the network.
///
/// The client holds no mutable state and can be cloned and shared across
/// tasks freely.
#[derive(Debug, Clone)]
pub struct VlcClient<T = HttpClient> {
    transport: T,
}

impl VlcClient<HttpClient> {
    /// Connect over HTTP to `base_url` (e.g. `http://localhost:8080`).
    pub fn connect(base_url: &str, credentials: Credentials) -> Result<Self, ApiError> {
        Ok(Self::new(HttpClient::new(base_url, credentials)?))
    }
}

impl<T: Transport> VlcClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub(crate) async fn fetch_json<R: DeserializeOwned>(
        &self,
        base: &str,
        params: &ParamMap,
    ) -> Result<R, ApiError> {
        let raw = self.fetch(base, params).await?;
        decode_json(&raw)
    }

    pub(crate) async fn fetch_xml<R: DeserializeOwned>(
        &self,
        base: &str,
        params: &ParamMap,
        root: &str,
    ) -> Result<R, ApiError> {
        let raw = self.fetch(base, params).await?;
        decode_xml(&raw, root)
    }

    async fn fetch(&self, base: &str, params: &ParamMap) -> Result<Vec<u8>, ApiError> {
        let endpoint = build_endpoint(base, params);
        let raw = self.transport.get(&endpoint).await?;
        debug!(%endpoint, bytes = raw.len(), "received VLC response");
        Ok(raw)
    }
}
