//! Connected devices command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::ConnectionArgs;
use crate::output;

use super::NasSession;

#[derive(Args, Debug)]
pub struct DevicesArgs {
    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(conn: &ConnectionArgs, args: DevicesArgs) -> Result<()> {
    let nas = NasSession::open(conn).await?;

    let result = nas
        .client()
        .router()
        .connected_devices()
        .await
        .context("Failed to list connected devices");
    let devices = nas.close(result).await?;

    output::json_lines(&devices, args.pretty, "No devices found.")
}
