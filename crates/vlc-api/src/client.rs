use std::future::Future;

use tracing::debug;
use url::Url;

use crate::validate::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("VLC returned {status}: {body}")]
    ApiResponse { status: u16, body: String },
    #[error("Unable to decode JSON response: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unable to decode XML response: {0}")]
    Xml(#[from] quick_xml::de::DeError),
    #[error("VLM command failed: {0}")]
    Vlm(String),
}

/// Moves raw bytes between the command facade and a VLC instance.
///
/// [`HttpClient`] is the production implementation. Tests swap in an
/// in-memory transport that records endpoints and returns canned bodies.
pub trait Transport: Send + Sync {
    /// GET `endpoint` (relative to the transport's base URL) and return the
    /// full response body.
    fn get(&self, endpoint: &str) -> impl Future<Output = Result<Vec<u8>, ApiError>> + Send;
}

/// HTTP Basic credentials for the VLC web interface.
///
/// VLC only checks the password; the username is normally left empty.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Credentials with an empty username, which is what VLC expects.
    pub fn password(password: impl Into<String>) -> Self {
        Self::new(String::new(), password)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// HTTP transport for a VLC instance.
///
/// Wraps [`reqwest::Client`] with a base URL and Basic credentials. Every
/// request targets `{base_url}/{endpoint}`.
#[derive(Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl HttpClient {
    /// Create a new transport for the given base URL (e.g.
    /// `http://localhost:8080`).
    pub fn new(base_url: &str, credentials: Credentials) -> Result<Self, ApiError> {
        Self::with_client(reqwest::Client::builder().build()?, base_url, credentials)
    }

    /// Create a transport around a caller-configured [`reqwest::Client`],
    /// e.g. one with request timeouts.
    pub fn with_client(
        inner: reqwest::Client,
        base_url: &str,
        credentials: Credentials,
    ) -> Result<Self, ApiError> {
        Url::parse(base_url)?;

        Ok(Self {
            inner,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    /// Return the base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Return a reference to the underlying [`reqwest::Client`].
    pub fn inner(&self) -> &reqwest::Client {
        &self.inner
    }

    fn target(&self, endpoint: &str) -> Result<Url, ApiError> {
        Ok(Url::parse(&format!("{}/{}", self.base_url, endpoint))?)
    }

    async fn handle_response(resp: reqwest::Response) -> Result<Vec<u8>, ApiError> {
        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            debug!(status, "VLC returned non-success status");
            return Err(ApiError::ApiResponse { status, body });
        }
        Ok(resp.bytes().await?.to_vec())
    }
}

impl Transport for HttpClient {
    async fn get(&self, endpoint: &str) -> Result<Vec<u8>, ApiError> {
        let url = self.target(endpoint)?;
        debug!(%endpoint, "sending VLC request");
        let resp = self
            .inner
            .get(url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .send()
            .await?;
        Self::handle_response(resp).await
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}
