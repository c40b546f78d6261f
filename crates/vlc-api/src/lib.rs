//! Client for the VLC media player's HTTP control interface.
//!
//! ```no_run
//! # async fn run() -> Result<(), vlc_api::ApiError> {
//! use vlc_api::{Credentials, VlcClient};
//!
//! let vlc = VlcClient::connect("http://localhost:8080", Credentials::password("secret"))?;
//! let status = vlc.set_volume("+20").await?;
//! println!("{} at volume {}", status.state, status.volume);
//! # Ok(())
//! # }
//! ```

pub mod browse;
pub mod client;
pub mod command;
pub mod decode;
pub mod playlist;
pub mod query;
pub mod status;
pub mod validate;
pub mod vlc;
pub mod vlm;

pub use browse::{Browse, File};
pub use client::{ApiError, Credentials, HttpClient, Transport};
pub use command::{Command, Param, PlayOption};
pub use playlist::PlaylistNode;
pub use query::{ParamMap, build_endpoint};
pub use status::{Equalizer, Information, PlaybackState, Stats, Status, StreamTable, VideoEffects};
pub use validate::ValidationError;
pub use vlc::VlcClient;
pub use vlm::Vlm;
