//! syno - CLI tool for Synology NAS web API exploration.
//!
//! This is a thin wrapper over the `synoapi` library, intended for manual
//! exploration and debugging against a NAS.

mod cli;
mod commands;
mod output;
mod profile;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use commands::{
    apis, cameras, devices, live_streams, playback_uri, profile as profile_cmd, recordings,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    let conn = cli.connection;
    match cli.command {
        Commands::Apis(args) => apis::run(&conn, args).await,
        Commands::Devices(args) => devices::run(&conn, args).await,
        Commands::Cameras(args) => cameras::run(&conn, args).await,
        Commands::LiveStreams(args) => live_streams::run(&conn, args).await,
        Commands::Recordings(args) => recordings::run(&conn, args).await,
        Commands::PlaybackUri(args) => playback_uri::run(&conn, args).await,
        Commands::Profile(cmd) => profile_cmd::handle(&conn, cmd),
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    // Logs go to stderr so stdout stays machine-readable.
    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
