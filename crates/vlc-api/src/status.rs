use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::client::{ApiError, Transport};
use crate::command::{Command, Param, PlayOption, STATUS_ENDPOINT, command_params};
use crate::query::ParamMap;
use crate::validate;
use crate::vlc::VlcClient;

// --- Response types ---

/// Player state as reported by `requests/status.json`.
///
/// Every command on the status endpoint answers with a fresh snapshot of
/// this shape.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Status {
    #[serde(default, rename = "audiofilters")]
    pub audio_filters: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub information: Option<Information>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<Stats>,
    #[serde(default, rename = "aspectratio", skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub state: String,
    #[serde(default, deserialize_with = "one_or_many")]
    pub equalizer: Vec<Equalizer>,
    #[serde(default, rename = "videoeffects")]
    pub video_effects: VideoEffects,
    #[serde(default, deserialize_with = "bool_or_int")]
    pub fullscreen: bool,
    #[serde(default)]
    pub length: i64,
    #[serde(default, rename = "apiversion")]
    pub api_version: u32,
    #[serde(default)]
    pub rate: f64,
    #[serde(default)]
    pub volume: i64,
    #[serde(default)]
    pub time: i64,
    #[serde(default)]
    pub seek_sec: i64,
    #[serde(default, rename = "currentplid")]
    pub current_plid: i64,
    #[serde(default)]
    pub position: f64,
    #[serde(default, rename = "audiodelay")]
    pub audio_delay: f64,
    #[serde(default, rename = "subtitledelay")]
    pub subtitle_delay: f64,
    #[serde(default)]
    pub repeat: bool,
    #[serde(default, rename = "loop")]
    pub looping: bool,
    #[serde(default)]
    pub random: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Playing,
    Paused,
    Stopped,
    Unknown,
}

impl Status {
    pub fn playback_state(&self) -> PlaybackState {
        match self.state.as_str() {
            "playing" => PlaybackState::Playing,
            "paused" => PlaybackState::Paused,
            "stopped" => PlaybackState::Stopped,
            _ => PlaybackState::Unknown,
        }
    }

    /// Stream table for the given category (e.g. `"meta"`, `"Stream 0"`).
    pub fn category(&self, name: &str) -> Option<&StreamTable> {
        self.information.as_ref()?.category.get(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct VideoEffects {
    #[serde(default)]
    pub hue: f64,
    #[serde(default)]
    pub saturation: f64,
    #[serde(default)]
    pub contrast: f64,
    #[serde(default)]
    pub brightness: f64,
    #[serde(default)]
    pub gamma: f64,
}

/// Equalizer settings. Band keys look like `band id="0"`, preset keys like
/// `preset id="0"`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Equalizer {
    #[serde(default, deserialize_with = "gain_map")]
    pub bands: BTreeMap<String, f64>,
    #[serde(default)]
    pub presets: BTreeMap<String, String>,
    #[serde(default)]
    pub preamp: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Information {
    #[serde(default)]
    pub chapters: serde_json::Value,
    #[serde(default)]
    pub titles: serde_json::Value,
    #[serde(default)]
    pub chapter: i64,
    #[serde(default)]
    pub title: i64,
    #[serde(default)]
    pub category: BTreeMap<String, StreamTable>,
}

/// One `information.category` entry: either the `meta` table or a
/// `Stream N` description.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct StreamTable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, rename = "Decoded_format", skip_serializing_if = "Option::is_none")]
    pub decoded_format: Option<String>,
    #[serde(default, rename = "Color_transfer_function", skip_serializing_if = "Option::is_none")]
    pub color_transfer_function: Option<String>,
    #[serde(default, rename = "Chroma_location", skip_serializing_if = "Option::is_none")]
    pub chroma_location: Option<String>,
    #[serde(default, rename = "Video_resolution", skip_serializing_if = "Option::is_none")]
    pub video_resolution: Option<String>,
    #[serde(default, rename = "Frame_rate", skip_serializing_if = "Option::is_none")]
    pub frame_rate: Option<String>,
    #[serde(default, rename = "Codec", skip_serializing_if = "Option::is_none")]
    pub codec: Option<String>,
    #[serde(default, rename = "Orientation", skip_serializing_if = "Option::is_none")]
    pub orientation: Option<String>,
    #[serde(default, rename = "Color_space", skip_serializing_if = "Option::is_none")]
    pub color_space: Option<String>,
    #[serde(default, rename = "Type", skip_serializing_if = "Option::is_none")]
    pub stream_type: Option<String>,
    #[serde(default, rename = "Color_primaries", skip_serializing_if = "Option::is_none")]
    pub color_primaries: Option<String>,
    #[serde(default, rename = "Buffer_dimensions", skip_serializing_if = "Option::is_none")]
    pub buffer_dimensions: Option<String>,
    #[serde(default, rename = "Channels", skip_serializing_if = "Option::is_none")]
    pub channels: Option<String>,
    #[serde(default, rename = "Bits_per_sample", skip_serializing_if = "Option::is_none")]
    pub bits_per_sample: Option<String>,
    #[serde(default, rename = "Sample_rate", skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<String>,
    /// Everything else, e.g. `title`, `artist` and `album` in the `meta` table.
    #[serde(flatten)]
    pub other: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Stats {
    #[serde(default, rename = "inputbitrate")]
    pub input_bitrate: f64,
    #[serde(default, rename = "averagedemuxbitrate")]
    pub average_demux_bitrate: f64,
    #[serde(default, rename = "demuxbitrate")]
    pub demux_bitrate: f64,
    #[serde(default, rename = "averageinputbitrate")]
    pub average_input_bitrate: f64,
    #[serde(default, rename = "sendbitrate")]
    pub send_bitrate: f64,
    #[serde(default, rename = "lostabuffers")]
    pub lost_audio_buffers: i64,
    #[serde(default, rename = "readpackets")]
    pub read_packets: i64,
    #[serde(default, rename = "sentbytes")]
    pub sent_bytes: i64,
    #[serde(default, rename = "displayedpictures")]
    pub displayed_pictures: i64,
    #[serde(default, rename = "demuxreadpackets")]
    pub demux_read_packets: i64,
    #[serde(default, rename = "sentpackets")]
    pub sent_packets: i64,
    #[serde(default, rename = "demuxreadbytes")]
    pub demux_read_bytes: i64,
    #[serde(default, rename = "decodedaudio")]
    pub decoded_audio: i64,
    #[serde(default, rename = "playedabuffers")]
    pub played_audio_buffers: i64,
    #[serde(default, rename = "demuxdiscontinuity")]
    pub demux_discontinuity: i64,
    #[serde(default, rename = "lostpictures")]
    pub lost_pictures: i64,
    #[serde(default, rename = "decodedvideo")]
    pub decoded_video: i64,
    #[serde(default, rename = "readbytes")]
    pub read_bytes: i64,
    #[serde(default, rename = "demuxcorrupted")]
    pub demux_corrupted: i64,
}

// --- Lenient field decoding ---

// VLC 2.x reports fullscreen as 0/1, 3.x as a boolean.
fn bool_or_int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(i) => i != 0,
    })
}

// An empty Lua table encodes as `[]`; an enabled equalizer as one object.
fn one_or_many<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Equalizer>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        Many(Vec<Equalizer>),
        One(Equalizer),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::Many(v) => v,
        OneOrMany::One(eq) => vec![eq],
    })
}

fn gain_map<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<BTreeMap<String, f64>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Gain {
        Number(f64),
        Text(String),
    }

    BTreeMap::<String, Gain>::deserialize(deserializer)?
        .into_iter()
        .map(|(band, gain)| -> Result<(String, f64), D::Error> {
            let value = match gain {
                Gain::Number(n) => n,
                Gain::Text(s) => s.trim().parse::<f64>().map_err(|_| {
                    <D::Error as serde::de::Error>::custom(format!(
                        "invalid gain {s:?} for {band}"
                    ))
                })?,
            };
            Ok((band, value))
        })
        .collect()
}

// --- Commands ---

impl<T: Transport> VlcClient<T> {
    async fn status_request(&self, params: ParamMap) -> Result<Status, ApiError> {
        self.fetch_json(STATUS_ENDPOINT, &params).await
    }

    async fn status_command<const N: usize>(
        &self,
        command: Command,
        extra: [(Param, String); N],
    ) -> Result<Status, ApiError> {
        self.status_request(command_params(command, extra)).await
    }

    /// Current status, including the playing item's info and metadata.
    pub async fn status(&self) -> Result<Status, ApiError> {
        self.status_request(ParamMap::new()).await
    }

    pub async fn empty_playlist(&self) -> Result<Status, ApiError> {
        self.status_command(Command::Empty, []).await
    }

    /// Add `source` (an MRL such as `file:///music/a.mp3`) to the playlist
    /// and start playing it.
    pub async fn play_source(
        &self,
        source: &str,
        option: Option<PlayOption>,
    ) -> Result<Status, ApiError> {
        let mut params = command_params(Command::InPlay, [(Param::Input, source.to_string())]);
        if let Some(option) = option {
            params.insert(Param::Option.as_str().to_string(), option.as_str().to_string());
        }
        self.status_request(params).await
    }

    pub async fn add_to_playlist(&self, source: &str) -> Result<Status, ApiError> {
        self.status_command(Command::InEnqueue, [(Param::Input, source.to_string())])
            .await
    }

    pub async fn play_last_active(&self) -> Result<Status, ApiError> {
        self.status_command(Command::Play, []).await
    }

    pub async fn play_item(&self, id: i64) -> Result<Status, ApiError> {
        self.status_command(Command::Play, [(Param::Id, id.to_string())])
            .await
    }

    /// Toggle pause. From the stopped state this plays the current item, or
    /// the first playlist item if nothing is current.
    pub async fn pause_last_active(&self) -> Result<Status, ApiError> {
        self.status_command(Command::Pause, []).await
    }

    /// Toggle pause. From the stopped state this plays item `id`.
    pub async fn pause_item(&self, id: i64) -> Result<Status, ApiError> {
        self.status_command(Command::Pause, [(Param::Id, id.to_string())])
            .await
    }

    /// Resume if paused, otherwise do nothing.
    pub async fn force_resume(&self) -> Result<Status, ApiError> {
        self.status_command(Command::ForceResume, []).await
    }

    /// Pause if playing, otherwise do nothing.
    pub async fn force_pause(&self) -> Result<Status, ApiError> {
        self.status_command(Command::ForcePause, []).await
    }

    pub async fn stop(&self) -> Result<Status, ApiError> {
        self.status_command(Command::Stop, []).await
    }

    pub async fn next(&self) -> Result<Status, ApiError> {
        self.status_command(Command::Next, []).await
    }

    pub async fn previous(&self) -> Result<Status, ApiError> {
        self.status_command(Command::Previous, []).await
    }

    pub async fn delete_item(&self, id: i64) -> Result<Status, ApiError> {
        self.status_command(Command::Delete, [(Param::Id, id.to_string())])
            .await
    }

    /// Sort the playlist. `order` is `0` for ascending, `1` for descending.
    ///
    /// Known modes: `0` id, `1` name, `3` author, `5` random, `7` track
    /// number.
    pub async fn sort_playlist(&self, order: i64, mode: i64) -> Result<Status, ApiError> {
        validate::sort_order(order)?;
        self.status_command(
            Command::Sort,
            [(Param::Id, order.to_string()), (Param::Val, mode.to_string())],
        )
        .await
    }

    pub async fn toggle_random(&self) -> Result<Status, ApiError> {
        self.status_command(Command::Random, []).await
    }

    pub async fn toggle_loop(&self) -> Result<Status, ApiError> {
        self.status_command(Command::Loop, []).await
    }

    pub async fn toggle_repeat(&self) -> Result<Status, ApiError> {
        self.status_command(Command::Repeat, []).await
    }

    /// Enable a service discovery module, typically `sap`, `shoutcast`,
    /// `podcast` or `hal`.
    pub async fn enable_service_discovery(&self, module: &str) -> Result<Status, ApiError> {
        self.status_command(Command::ServiceDiscovery, [(Param::Val, module.to_string())])
            .await
    }

    pub async fn toggle_fullscreen(&self) -> Result<Status, ApiError> {
        self.status_command(Command::Fullscreen, []).await
    }

    /// Save a snapshot of the current video frame on the VLC host.
    pub async fn take_snapshot(&self) -> Result<Status, ApiError> {
        self.status_command(Command::Snapshot, []).await
    }

    /// Set the volume: `+<int>`, `-<int>`, `<int>` or `<int>%`.
    pub async fn set_volume(&self, volume: &str) -> Result<Status, ApiError> {
        validate::volume(volume)?;
        self.status_command(Command::Volume, [(Param::Val, volume.to_string())])
            .await
    }

    /// Seek within the current item.
    ///
    /// Accepts `[+-][<int>H:][<int>M:][<int>[S]]` or `[+-]<int>[%]`, e.g.
    /// `1000` (to second 1000), `+1H:2M` (forward 1h 2m) or `-10%`. An
    /// empty value is rejected with `InvalidSeekValue` rather than sent.
    pub async fn seek(&self, value: &str) -> Result<Status, ApiError> {
        validate::seek(value)?;
        self.status_command(Command::Seek, [(Param::Val, value.to_string())])
            .await
    }

    pub async fn add_subtitle(&self, subtitle_uri: &str) -> Result<Status, ApiError> {
        self.status_command(Command::AddSubtitle, [(Param::Val, subtitle_uri.to_string())])
            .await
    }

    /// Set the preamp gain in dB, within `-20..=20`.
    pub async fn set_preamp(&self, gain: i32) -> Result<Status, ApiError> {
        validate::gain(gain)?;
        self.status_command(Command::Preamp, [(Param::Val, gain.to_string())])
            .await
    }

    /// Set the gain of one equalizer band in dB, within `-20..=20`.
    ///
    /// Bands: 0 60 Hz, 1 170 Hz, 2 310 Hz, 3 600 Hz, 4 1 kHz, 5 3 kHz,
    /// 6 6 kHz, 7 12 kHz, 8 14 kHz, 9 16 kHz.
    pub async fn set_eq(&self, band: u32, gain: i32) -> Result<Status, ApiError> {
        validate::gain(gain)?;
        self.status_command(
            Command::Equalizer,
            [(Param::Band, band.to_string()), (Param::Val, gain.to_string())],
        )
        .await
    }

    pub async fn enable_eq(&self, enabled: bool) -> Result<Status, ApiError> {
        let value = if enabled { "1" } else { "0" };
        self.status_command(Command::EnableEq, [(Param::Val, value.to_string())])
            .await
    }

    pub async fn set_eq_preset(&self, id: i64) -> Result<Status, ApiError> {
        self.status_command(Command::SetPreset, [(Param::Id, id.to_string())])
            .await
    }

    pub async fn select_title(&self, id: i64) -> Result<Status, ApiError> {
        self.status_command(Command::Title, [(Param::Val, id.to_string())])
            .await
    }

    pub async fn select_chapter(&self, id: i64) -> Result<Status, ApiError> {
        self.status_command(Command::Chapter, [(Param::Val, id.to_string())])
            .await
    }

    /// Select an audio track by its stream number.
    pub async fn select_audio_track(&self, id: i64) -> Result<Status, ApiError> {
        self.status_command(Command::AudioTrack, [(Param::Val, id.to_string())])
            .await
    }

    /// Select a video track by its stream number.
    pub async fn select_video_track(&self, id: i64) -> Result<Status, ApiError> {
        self.status_command(Command::VideoTrack, [(Param::Val, id.to_string())])
            .await
    }

    /// Select a subtitle track by its stream number.
    pub async fn select_subtitle_track(&self, id: i64) -> Result<Status, ApiError> {
        self.status_command(Command::SubtitleTrack, [(Param::Val, id.to_string())])
            .await
    }

    /// Audio delay in seconds. NaN and infinities are rejected.
    pub async fn set_audio_delay(&self, delay: f64) -> Result<Status, ApiError> {
        validate::delay(delay)?;
        self.status_command(Command::AudioDelay, [(Param::Val, delay.to_string())])
            .await
    }

    /// Subtitle delay in seconds. NaN and infinities are rejected.
    pub async fn set_subtitle_delay(&self, delay: f64) -> Result<Status, ApiError> {
        validate::delay(delay)?;
        self.status_command(Command::SubtitleDelay, [(Param::Val, delay.to_string())])
            .await
    }

    /// Playback rate; must be finite and greater than zero.
    pub async fn set_playback_rate(&self, rate: f64) -> Result<Status, ApiError> {
        validate::playback_rate(rate)?;
        self.status_command(Command::Rate, [(Param::Val, rate.to_string())])
            .await
    }

    /// Set the aspect ratio. VLC understands `1:1`, `4:3`, `5:4`, `16:9`,
    /// `16:10`, `221:100`, `235:100` and `239:100`; anything else resets it
    /// to the default.
    pub async fn set_aspect_ratio(&self, ratio: &str) -> Result<Status, ApiError> {
        self.status_command(Command::AspectRatio, [(Param::Val, ratio.to_string())])
            .await
    }
}
