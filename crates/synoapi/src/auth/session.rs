//! Sign-in / sign-out lifecycle.

use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use super::credentials::Credentials;
use super::tokens::SessionId;
use crate::Result;
use crate::discovery::ApiResolver;
use crate::envelope::{Envelope, decode_data};
use crate::error::Error;
use crate::transport::Transport;
use crate::types::HostUrl;
use crate::webapi::{ApiRequest, AUTH_API, DEFAULT_SESSION, METHOD_LOGIN, METHOD_LOGOUT};

const SIGN_IN: &str = "SignIn";
const SIGN_OUT: &str = "SignOut";

#[derive(Debug, Deserialize)]
struct LoginData {
    sid: String,
}

/// Holds at most one session id and owns every change to it.
///
/// The manager starts logged out. [`sign_in`](Self::sign_in) moves it to
/// logged in, [`sign_out`](Self::sign_out) back again; the cycle may repeat.
/// Both transitions hold the write lock for their whole exchange, so
/// concurrent sign-ins on one manager cannot both succeed.
#[derive(Default)]
pub struct SessionManager {
    sid: RwLock<Option<SessionId>>,
}

impl SessionManager {
    /// Create a logged-out manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a session id is held.
    pub async fn is_signed_in(&self) -> bool {
        self.sid.read().await.is_some()
    }

    /// The current session id.
    ///
    /// # Errors
    ///
    /// [`Error::NotLoggedIn`] when no session is held. Feature calls check
    /// this before any network I/O.
    pub async fn current(&self) -> Result<SessionId> {
        self.sid.read().await.clone().ok_or(Error::NotLoggedIn)
    }

    /// Sign in and store the issued session id.
    ///
    /// `session` names the login session; `None` or an empty name means
    /// `"Default"`.
    ///
    /// # Errors
    ///
    /// - [`Error::AlreadyLoggedIn`] if a session id is already held
    /// - [`Error::InvalidArgument`] if the account or password is empty
    /// - [`Error::Authentication`] if the service rejects the login
    ///
    /// No session id is stored on any failure.
    #[instrument(skip_all, fields(host = %host, account = %credentials.account()))]
    pub async fn sign_in<R, T>(
        &self,
        host: &HostUrl,
        resolver: &R,
        transport: &T,
        credentials: &Credentials,
        session: Option<&str>,
    ) -> Result<()>
    where
        R: ApiResolver + ?Sized,
        T: Transport + ?Sized,
    {
        let mut sid = self.sid.write().await;
        if sid.is_some() {
            return Err(Error::AlreadyLoggedIn);
        }
        credentials.validate()?;
        let session = session_name(session);

        info!(session, "Signing in");

        let descriptor = resolver.resolve(AUTH_API).await?;
        let url = ApiRequest::new(&descriptor, AUTH_API, METHOD_LOGIN)
            .param("account", credentials.account())
            .param("passwd", credentials.password())
            .param("session", session)
            .param("format", "sid")
            .url(host)?;

        let body = transport.get(&url).await?;
        let data = Envelope::parse(&body)
            .map_err(|e| decode_error(SIGN_IN, e))?
            .into_data()
            .map_err(|code| Error::Authentication { code })?;

        let login: LoginData = decode_data(data, None).map_err(|e| decode_error(SIGN_IN, e))?;
        if login.sid.is_empty() {
            return Err(decode_error(SIGN_IN, "empty sid"));
        }

        *sid = Some(SessionId::new(login.sid));
        debug!("Session established");
        Ok(())
    }

    /// Sign out and forget the session id.
    ///
    /// # Errors
    ///
    /// - [`Error::NotLoggedIn`] if no session id is held
    /// - [`Error::Logout`] if the service rejects the logout; the session id
    ///   is kept so the call can be retried
    #[instrument(skip_all, fields(host = %host))]
    pub async fn sign_out<R, T>(
        &self,
        host: &HostUrl,
        resolver: &R,
        transport: &T,
        session: Option<&str>,
    ) -> Result<()>
    where
        R: ApiResolver + ?Sized,
        T: Transport + ?Sized,
    {
        let mut held = self.sid.write().await;
        let Some(sid) = held.as_ref() else {
            return Err(Error::NotLoggedIn);
        };
        let session = session_name(session);

        info!(session, "Signing out");

        let descriptor = resolver.resolve(AUTH_API).await?;
        let url = ApiRequest::new(&descriptor, AUTH_API, METHOD_LOGOUT)
            .param("session", session)
            .sid(sid)
            .url(host)?;

        let body = transport.get(&url).await?;
        let envelope = Envelope::parse(&body).map_err(|e| decode_error(SIGN_OUT, e))?;
        if let Err(code) = envelope.into_data() {
            warn!(?code, "Logout rejected, keeping session");
            return Err(Error::Logout { code });
        }

        *held = None;
        debug!("Session closed");
        Ok(())
    }
}

// Custom Debug impl that hides sensitive data
impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("sid", &"[REDACTED]")
            .finish()
    }
}

fn session_name(session: Option<&str>) -> &str {
    session.filter(|s| !s.is_empty()).unwrap_or(DEFAULT_SESSION)
}

fn decode_error(operation: &'static str, reason: impl ToString) -> Error {
    Error::Decode {
        operation,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::discovery::DiscoveryResolver;
    use crate::error::InvalidArgumentError;
    use crate::transport::testing::StubTransport;
    use crate::webapi::INFO_API;

    const DISCOVERY: &str = r#"{"data":{"SYNO.API.Auth":{"path":"auth.cgi","maxVersion":6}}}"#;
    const LOGIN_OK: &str = r#"{"success":true,"data":{"sid":"abc123"}}"#;
    const LOGOUT_OK: &str = r#"{"success":true}"#;

    struct Fixture {
        host: HostUrl,
        transport: Arc<StubTransport>,
        resolver: DiscoveryResolver<StubTransport>,
        manager: SessionManager,
    }

    impl Fixture {
        fn new(transport: StubTransport) -> Self {
            let host = HostUrl::new("https://nas.local:5001").unwrap();
            let transport = Arc::new(transport);
            let resolver = DiscoveryResolver::new(host.clone(), transport.clone());
            Self {
                host,
                transport,
                resolver,
                manager: SessionManager::new(),
            }
        }

        async fn sign_in(&self, account: &str, password: &str) -> Result<()> {
            self.manager
                .sign_in(
                    &self.host,
                    &self.resolver,
                    &*self.transport,
                    &Credentials::new(account, password),
                    None,
                )
                .await
        }

        async fn sign_out(&self) -> Result<()> {
            self.manager
                .sign_out(&self.host, &self.resolver, &*self.transport, None)
                .await
        }
    }

    fn auth_transport(login: &str, logout: &str) -> StubTransport {
        StubTransport::new()
            .on(INFO_API, DISCOVERY)
            .on_method(AUTH_API, METHOD_LOGIN, login)
            .on_method(AUTH_API, METHOD_LOGOUT, logout)
    }

    #[tokio::test]
    async fn sign_in_stores_sid() {
        let fx = Fixture::new(auth_transport(LOGIN_OK, LOGOUT_OK));
        fx.sign_in("u", "p").await.unwrap();

        assert_eq!(fx.manager.current().await.unwrap().as_str(), "abc123");

        let login = fx.transport.last_call().unwrap();
        assert_eq!(login.url.path(), "/webapi/auth.cgi");
        assert_eq!(login.param("version").as_deref(), Some("6"));
        assert_eq!(login.param("account").as_deref(), Some("u"));
        assert_eq!(login.param("passwd").as_deref(), Some("p"));
        assert_eq!(login.param("session").as_deref(), Some("Default"));
        assert_eq!(login.param("format").as_deref(), Some("sid"));
    }

    #[tokio::test]
    async fn second_sign_in_is_rejected_without_io() {
        let fx = Fixture::new(auth_transport(LOGIN_OK, LOGOUT_OK));
        fx.sign_in("u", "p").await.unwrap();
        let calls = fx.transport.call_count();

        let err = fx.sign_in("other", "pw").await.unwrap_err();
        assert!(matches!(err, Error::AlreadyLoggedIn));
        assert_eq!(fx.transport.call_count(), calls);
        assert_eq!(fx.manager.current().await.unwrap().as_str(), "abc123");
    }

    #[tokio::test]
    async fn empty_credentials_are_rejected_without_io() {
        let fx = Fixture::new(auth_transport(LOGIN_OK, LOGOUT_OK));
        let err = fx.sign_in("", "p").await.unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidArgument(InvalidArgumentError::Empty { .. })
        ));
        assert_eq!(fx.transport.call_count(), 0);
    }

    #[tokio::test]
    async fn rejected_login_leaves_no_sid() {
        let fx = Fixture::new(auth_transport(
            r#"{"success":false,"error":{"code":400}}"#,
            LOGOUT_OK,
        ));
        let err = fx.sign_in("u", "wrong").await.unwrap_err();
        assert!(matches!(err, Error::Authentication { code: Some(c) } if c.0 == 400));
        assert!(!fx.manager.is_signed_in().await);
    }

    #[tokio::test]
    async fn sign_out_without_session_is_rejected() {
        let fx = Fixture::new(auth_transport(LOGIN_OK, LOGOUT_OK));
        assert!(matches!(fx.sign_out().await, Err(Error::NotLoggedIn)));
        assert_eq!(fx.transport.call_count(), 0);
    }

    #[tokio::test]
    async fn sign_out_clears_sid_and_allows_new_sign_in() {
        let fx = Fixture::new(auth_transport(LOGIN_OK, LOGOUT_OK));
        fx.sign_in("u", "p").await.unwrap();
        fx.sign_out().await.unwrap();

        let logout = fx.transport.last_call().unwrap();
        assert_eq!(logout.param("method").as_deref(), Some("logout"));
        assert_eq!(logout.param("_sid").as_deref(), Some("abc123"));
        assert!(!fx.manager.is_signed_in().await);

        fx.sign_in("u", "p").await.unwrap();
        assert!(fx.manager.is_signed_in().await);
    }

    #[tokio::test]
    async fn failed_sign_out_keeps_sid() {
        let fx = Fixture::new(auth_transport(LOGIN_OK, r#"{"success":false}"#));
        fx.sign_in("u", "p").await.unwrap();

        let err = fx.sign_out().await.unwrap_err();
        assert!(matches!(err, Error::Logout { code: None }));
        assert_eq!(fx.manager.current().await.unwrap().as_str(), "abc123");
    }
}
