//! Playback URL command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::ConnectionArgs;
use crate::output;

use super::NasSession;

#[derive(Args, Debug)]
pub struct PlaybackUriArgs {
    /// Recording id
    #[arg(long)]
    pub recording: i64,

    /// Leave the session open so the printed URL stays usable
    #[arg(long)]
    pub keep_session: bool,
}

/// The URL embeds the session id, which signing out invalidates.
pub async fn run(conn: &ConnectionArgs, args: PlaybackUriArgs) -> Result<()> {
    let nas = NasSession::open(conn).await?;

    let result = nas
        .client()
        .surveillance()
        .playback_uri(args.recording)
        .await
        .context("Failed to build playback URL");

    let uri = match result {
        Ok(uri) if args.keep_session => {
            output::warning("Session left open; the URL expires with it.");
            uri
        }
        result => nas.close(result).await?,
    };

    println!("{}", uri);
    Ok(())
}
