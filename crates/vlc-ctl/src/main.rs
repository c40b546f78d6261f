mod config;
mod telemetry;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::to_string_pretty;
use tracing::{info, warn};
use vlc_api::{PlayOption, VlcClient};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "vlc-ctl", about = "Control a VLC instance over its HTTP interface")]
struct Cli {
    /// Base URL of the VLC web interface [env: VLC_URL]
    #[arg(long, global = true)]
    url: Option<String>,

    /// Basic auth username, usually empty [env: VLC_USER]
    #[arg(long, global = true)]
    user: Option<String>,

    /// Basic auth password [env: VLC_PASSWORD]
    #[arg(long, global = true)]
    password: Option<String>,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the current status.
    Status,
    /// Print the playlist tree.
    Playlist,
    /// Play a media URI, adding it to the playlist.
    Play {
        uri: String,
        /// `noaudio` or `novideo`.
        #[arg(long)]
        option: Option<String>,
    },
    /// Append a media URI to the playlist.
    Enqueue { uri: String },
    /// Toggle pause.
    Pause,
    Stop,
    Next,
    Previous,
    /// Set the volume: `+<int>`, `-<int>`, `<int>` or `<int>%`.
    Volume { value: String },
    /// Seek, e.g. `1000`, `+1H:2M` or `-10%`.
    Seek { value: String },
    /// Set the playback rate.
    Rate { rate: f64 },
    /// List a directory by URI.
    Browse { uri: String },
    /// Run a VLM command, or list VLM elements when none is given.
    Vlm { command: Option<String> },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init(cli.log_json);

    let config = Config::resolve(cli.url, cli.user, cli.password);
    info!(url = %config.url, "connecting to VLC");
    let vlc = VlcClient::connect(&config.url, config.credentials)
        .with_context(|| format!("invalid VLC URL {}", config.url))?;

    let output = match cli.command {
        Commands::Status => to_string_pretty(&vlc.status().await?)?,
        Commands::Playlist => to_string_pretty(&vlc.playlist().await?)?,
        Commands::Play { uri, option } => {
            let option = option
                .map(|o| o.parse::<PlayOption>())
                .transpose()
                .context("option must be noaudio or novideo")?;
            to_string_pretty(&vlc.play_source(&uri, option).await?)?
        }
        Commands::Enqueue { uri } => to_string_pretty(&vlc.add_to_playlist(&uri).await?)?,
        Commands::Pause => to_string_pretty(&vlc.pause_last_active().await?)?,
        Commands::Stop => to_string_pretty(&vlc.stop().await?)?,
        Commands::Next => to_string_pretty(&vlc.next().await?)?,
        Commands::Previous => to_string_pretty(&vlc.previous().await?)?,
        Commands::Volume { value } => to_string_pretty(&vlc.set_volume(&value).await?)?,
        Commands::Seek { value } => to_string_pretty(&vlc.seek(&value).await?)?,
        Commands::Rate { rate } => to_string_pretty(&vlc.set_playback_rate(rate).await?)?,
        Commands::Browse { uri } => to_string_pretty(&vlc.browse_uri(&uri).await?)?,
        Commands::Vlm { command } => {
            let vlm = match command {
                Some(command) => vlc.run_vlm_command(&command).await?,
                None => vlc.vlm_elements().await?,
            };
            if vlm.is_error() {
                warn!(error = %vlm.error, "VLM reported an error");
            }
            to_string_pretty(&vlm.into_result()?)?
        }
    };

    println!("{output}");
    Ok(())
}
