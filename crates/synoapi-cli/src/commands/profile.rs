//! Profile subcommand implementations.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;

use synoapi::HostUrl;

use crate::cli::ConnectionArgs;
use crate::output;
use crate::profile::{self, Profile};

#[derive(Args, Debug)]
pub struct ProfileCommand {
    #[command(subcommand)]
    pub command: ProfileSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ProfileSubcommand {
    /// Save --host and --account as defaults (the password is not saved)
    Save,

    /// Display the saved profile
    Show,
}

pub fn handle(conn: &ConnectionArgs, cmd: ProfileCommand) -> Result<()> {
    match cmd.command {
        ProfileSubcommand::Save => save(conn),
        ProfileSubcommand::Show => show(),
    }
}

fn save(conn: &ConnectionArgs) -> Result<()> {
    let host = conn
        .host
        .as_deref()
        .context("Nothing to save. Pass --host (and optionally --account).")?;
    let host = HostUrl::new(host).context("Invalid host URL")?;

    let path = profile::save(&Profile {
        host: host.to_string(),
        account: conn.account.clone(),
    })?;

    output::success(&format!("Profile saved to {}", path.display()));
    Ok(())
}

fn show() -> Result<()> {
    let Some(saved) = profile::load()? else {
        eprintln!("{}", "No saved profile.".dimmed());
        return Ok(());
    };

    output::field("Host", &saved.host);
    output::field("Account", saved.account.as_deref().unwrap_or("-"));
    Ok(())
}
