//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};

use crate::commands::{
    apis::ApisArgs, cameras::CamerasArgs, devices::DevicesArgs, live_streams::LiveStreamsArgs,
    playback_uri::PlaybackUriArgs, profile::ProfileCommand, recordings::RecordingsArgs,
};

/// Synology NAS web API explorer.
#[derive(Parser, Debug)]
#[command(name = "syno")]
#[command(author, version = env!("SYNO_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where and as whom to connect.
///
/// Host and account fall back to the saved profile; the password never does.
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// NAS base URL, e.g. https://nas.local:5001
    #[arg(long, env = "SYNO_HOST", global = true)]
    pub host: Option<String>,

    /// Account name
    #[arg(long, env = "SYNO_ACCOUNT", global = true)]
    pub account: Option<String>,

    /// Account password
    #[arg(long, env = "SYNO_PASSWORD", hide_env_values = true, global = true)]
    pub password: Option<String>,

    /// Login session name (defaults to "Default")
    #[arg(long, global = true)]
    pub session: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the web APIs the NAS advertises
    Apis(ApisArgs),

    /// List devices connected to the router
    Devices(DevicesArgs),

    /// List Surveillance Station cameras
    Cameras(CamerasArgs),

    /// Show live view paths for cameras
    LiveStreams(LiveStreamsArgs),

    /// List recordings for cameras
    Recordings(RecordingsArgs),

    /// Print the playback URL of a recording
    PlaybackUri(PlaybackUriArgs),

    /// Manage the saved connection profile
    Profile(ProfileCommand),
}
