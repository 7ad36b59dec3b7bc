//! Recording listing command implementation.

use anyhow::{Context, Result};
use clap::Args;

use synoapi::Page;

use crate::cli::ConnectionArgs;
use crate::output;

use super::NasSession;

#[derive(Args, Debug)]
pub struct RecordingsArgs {
    /// Camera id (repeatable)
    #[arg(long = "camera", required = true, num_args = 1..)]
    pub cameras: Vec<i64>,

    /// Index of the first recording to return
    #[arg(long, default_value_t = 0)]
    pub offset: u32,

    /// Maximum number of recordings to return
    #[arg(long, default_value_t = Page::DEFAULT_LIMIT)]
    pub limit: u32,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(conn: &ConnectionArgs, args: RecordingsArgs) -> Result<()> {
    let nas = NasSession::open(conn).await?;

    let result = nas
        .client()
        .surveillance()
        .recordings(&args.cameras, Page::new(args.offset, args.limit))
        .await
        .context("Failed to list recordings");
    let recordings = nas.close(result).await?;

    output::json_lines(&recordings, args.pretty, "No recordings found.")
}
