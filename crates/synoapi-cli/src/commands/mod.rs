//! Subcommand implementations.

pub mod apis;
pub mod cameras;
pub mod devices;
pub mod live_streams;
pub mod playback_uri;
pub mod profile;
pub mod recordings;

use std::time::Duration;

use anyhow::{Context, Result, bail};
use tracing::warn;

use synoapi::{
    CachedResolver, Credentials, DiscoveryResolver, HostUrl, HttpTransport, SynologyClient,
};

use crate::cli::ConnectionArgs;
use crate::profile as stored;

/// Client type used by commands that sign in.
pub type NasClient =
    SynologyClient<HttpTransport, CachedResolver<DiscoveryResolver<HttpTransport>>>;

/// Connection settings after applying the saved profile.
#[derive(Debug)]
pub struct Target {
    pub host: HostUrl,
    pub account: Option<String>,
    pub timeout: Option<Duration>,
}

impl Target {
    /// Merge flags and environment with the saved profile.
    pub fn resolve(conn: &ConnectionArgs) -> Result<Self> {
        let saved = stored::load()?;

        let host = conn
            .host
            .clone()
            .or_else(|| saved.as_ref().map(|p| p.host.clone()))
            .context("No NAS host. Pass --host, set SYNO_HOST or run 'syno profile save'.")?;
        let host = HostUrl::new(&host).context("Invalid host URL")?;

        let account = conn
            .account
            .clone()
            .or_else(|| saved.and_then(|p| p.account));

        Ok(Self {
            host,
            account,
            timeout: conn.timeout.map(Duration::from_secs),
        })
    }

    /// Build a client for this target.
    pub fn client(&self) -> Result<SynologyClient> {
        let mut builder = HttpTransport::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let transport = builder.build().context("Failed to build HTTP client")?;
        Ok(SynologyClient::with_transport(self.host.clone(), transport))
    }
}

/// A signed-in client, to be closed with [`NasSession::close`].
pub struct NasSession {
    client: NasClient,
    session: Option<String>,
}

impl NasSession {
    /// Resolve the target and sign in.
    pub async fn open(conn: &ConnectionArgs) -> Result<Self> {
        let target = Target::resolve(conn)?;
        let Some(account) = target.account.clone() else {
            bail!("No account. Pass --account, set SYNO_ACCOUNT or run 'syno profile save'.");
        };
        let Some(password) = conn.password.clone() else {
            bail!("No password. Pass --password or set SYNO_PASSWORD.");
        };

        let client = target.client()?.with_cached_discovery();
        client
            .sign_in(&Credentials::new(account, password), conn.session.as_deref())
            .await
            .context("Sign-in failed")?;

        Ok(Self {
            client,
            session: conn.session.clone(),
        })
    }

    pub fn client(&self) -> &NasClient {
        &self.client
    }

    /// Sign out, then hand back the command's own result.
    ///
    /// A sign-out failure after a failed command is only logged so the
    /// command's error is the one reported.
    pub async fn close<T>(self, result: Result<T>) -> Result<T> {
        let signed_out = self
            .client
            .sign_out(self.session.as_deref())
            .await
            .context("Sign-out failed");

        match (result, signed_out) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(e)) => Err(e),
            (Err(e), Ok(())) => Err(e),
            (Err(e), Err(logout)) => {
                warn!(error = %logout, "Sign-out after failed command also failed");
                Err(e)
            }
        }
    }
}
