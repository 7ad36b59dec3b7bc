//! Live stream paths command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::ConnectionArgs;
use crate::output;

use super::NasSession;

#[derive(Args, Debug)]
pub struct LiveStreamsArgs {
    /// Camera id (repeatable)
    #[arg(long = "camera", required = true, num_args = 1..)]
    pub cameras: Vec<i64>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(conn: &ConnectionArgs, args: LiveStreamsArgs) -> Result<()> {
    let nas = NasSession::open(conn).await?;

    let result = nas
        .client()
        .surveillance()
        .live_streams(&args.cameras)
        .await
        .context("Failed to get live streams");
    let streams = nas.close(result).await?;

    output::json_lines(&streams, args.pretty, "No live streams found.")
}
