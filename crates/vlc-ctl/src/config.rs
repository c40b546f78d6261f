use tracing::debug;
use vlc_api::Credentials;

pub const DEFAULT_URL: &str = "http://localhost:8080";

/// Connection settings. Command-line flags win over `VLC_URL`, `VLC_USER`
/// and `VLC_PASSWORD`.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub url: String,
    pub credentials: Credentials,
}

impl Config {
    pub fn resolve(url: Option<String>, user: Option<String>, password: Option<String>) -> Self {
        let url = url.or_else(|| env("VLC_URL")).unwrap_or_else(|| {
            debug!("VLC_URL not set, using {DEFAULT_URL}");
            DEFAULT_URL.to_string()
        });
        let user = user.or_else(|| env("VLC_USER")).unwrap_or_default();
        let password = password.or_else(|| env("VLC_PASSWORD")).unwrap_or_default();

        Self {
            url,
            credentials: Credentials::new(user, password),
        }
    }
}

fn env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
