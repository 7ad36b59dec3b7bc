//! Camera listing command implementation.

use anyhow::{Context, Result};
use clap::Args;

use synoapi::Page;

use crate::cli::ConnectionArgs;
use crate::output;

use super::NasSession;

#[derive(Args, Debug)]
pub struct CamerasArgs {
    /// Index of the first camera to return
    #[arg(long, default_value_t = 0)]
    pub offset: u32,

    /// Maximum number of cameras to return
    #[arg(long, default_value_t = Page::DEFAULT_LIMIT)]
    pub limit: u32,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(conn: &ConnectionArgs, args: CamerasArgs) -> Result<()> {
    let nas = NasSession::open(conn).await?;

    let result = nas
        .client()
        .surveillance()
        .cameras(Page::new(args.offset, args.limit))
        .await
        .context("Failed to list cameras");
    let cameras = nas.close(result).await?;

    output::json_lines(&cameras, args.pretty, "No cameras found.")
}
