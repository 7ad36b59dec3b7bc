//! API listing command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::ConnectionArgs;
use crate::output;

use super::Target;

#[derive(Args, Debug)]
pub struct ApisArgs {
    /// Only show this API name
    #[arg(long)]
    pub filter: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Discovery needs no session, so this command does not sign in.
pub async fn run(conn: &ConnectionArgs, args: ApisArgs) -> Result<()> {
    let client = Target::resolve(conn)?.client()?;

    let apis = client
        .query_apis(args.filter.as_deref())
        .await
        .context("Failed to query APIs")?;

    output::json(&apis, args.pretty)
}
