use std::fmt;
use std::str::FromStr;

use crate::query::ParamMap;
use crate::validate::ValidationError;

// VLC's Lua HTTP interface endpoints.
pub const STATUS_ENDPOINT: &str = "requests/status.json";
pub const PLAYLIST_ENDPOINT: &str = "requests/playlist.json";
pub const BROWSE_ENDPOINT: &str = "requests/browse.json";
pub const VLM_ENDPOINT: &str = "requests/vlm.xml";
pub const VLM_COMMAND_ENDPOINT: &str = "requests/vlm_cmd.xml";

/// Query parameter keys understood by the `requests/*` handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Param {
    Command,
    Input,
    Id,
    Val,
    Option,
    Band,
    Dir,
    Uri,
}

impl Param {
    pub fn as_str(self) -> &'static str {
        match self {
            Param::Command => "command",
            Param::Input => "input",
            Param::Id => "id",
            Param::Val => "val",
            Param::Option => "option",
            Param::Band => "band",
            Param::Dir => "dir",
            Param::Uri => "uri",
        }
    }
}

/// Values of the `command` parameter on `requests/status.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // Playlist
    Stop,
    Empty,
    Play,
    Pause,
    Next,
    Previous,
    Delete,
    Sort,
    Random,
    Loop,
    Repeat,
    ServiceDiscovery,
    ForceResume,
    ForcePause,

    // Input
    InPlay,
    InEnqueue,

    // General
    Fullscreen,
    Snapshot,
    Volume,
    Seek,
    AddSubtitle,
    Preamp,
    Equalizer,
    EnableEq,
    SetPreset,
    Title,
    Chapter,
    AudioTrack,
    VideoTrack,
    SubtitleTrack,
    AudioDelay,
    SubtitleDelay,
    Rate,
    AspectRatio,
}

impl Command {
    pub fn as_str(self) -> &'static str {
        match self {
            Command::Stop => "pl_stop",
            Command::Empty => "pl_empty",
            Command::Play => "pl_play",
            Command::Pause => "pl_pause",
            Command::Next => "pl_next",
            Command::Previous => "pl_previous",
            Command::Delete => "pl_delete",
            Command::Sort => "pl_sort",
            Command::Random => "pl_random",
            Command::Loop => "pl_loop",
            Command::Repeat => "pl_repeat",
            Command::ServiceDiscovery => "pl_sd",
            Command::ForceResume => "pl_forceresume",
            Command::ForcePause => "pl_forcepause",
            Command::InPlay => "in_play",
            Command::InEnqueue => "in_enqueue",
            Command::Fullscreen => "fullscreen",
            Command::Snapshot => "snapshot",
            Command::Volume => "volume",
            Command::Seek => "seek",
            Command::AddSubtitle => "addsubtitle",
            Command::Preamp => "preamp",
            Command::Equalizer => "equalizer",
            Command::EnableEq => "enableeq",
            Command::SetPreset => "setpreset",
            Command::Title => "title",
            Command::Chapter => "chapter",
            Command::AudioTrack => "audio_track",
            Command::VideoTrack => "video_track",
            Command::SubtitleTrack => "subtitle_track",
            Command::AudioDelay => "audiodelay",
            Command::SubtitleDelay => "subdelay",
            Command::Rate => "rate",
            Command::AspectRatio => "aspectratio",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output restriction for [`crate::VlcClient::play_source`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOption {
    NoAudio,
    NoVideo,
}

impl PlayOption {
    pub fn as_str(self) -> &'static str {
        match self {
            PlayOption::NoAudio => "noaudio",
            PlayOption::NoVideo => "novideo",
        }
    }
}

impl FromStr for PlayOption {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "noaudio" => Ok(PlayOption::NoAudio),
            "novideo" => Ok(PlayOption::NoVideo),
            _ => Err(ValidationError::InvalidPlayOption),
        }
    }
}

/// Build a [`ParamMap`] from typed keys.
pub fn params<I, V>(pairs: I) -> ParamMap
where
    I: IntoIterator<Item = (Param, V)>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(key, value)| (key.as_str().to_string(), value.into()))
        .collect()
}

/// Shorthand for a `command=<token>` map with extra parameters.
pub(crate) fn command_params<const N: usize>(
    command: Command,
    extra: [(Param, String); N],
) -> ParamMap {
    let mut map = params(extra);
    map.insert(Param::Command.as_str().to_string(), command.as_str().to_string());
    map
}
