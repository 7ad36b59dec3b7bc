//! Login credentials type.

use std::fmt;

use crate::error::{Error, InvalidArgumentError};

/// Account name and password for `SYNO.API.Auth`.
///
/// # Security
///
/// The password is never exposed in Debug output to prevent accidental logging.
///
/// # Example
///
/// ```
/// use synoapi::Credentials;
///
/// let creds = Credentials::new("admin", "secret");
/// assert_eq!(creds.account(), "admin");
/// ```
#[derive(Clone)]
pub struct Credentials {
    account: String,
    password: String,
}

impl Credentials {
    /// Create new credentials.
    pub fn new(account: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            password: password.into(),
        }
    }

    /// Returns the account name.
    pub fn account(&self) -> &str {
        &self.account
    }

    /// Returns the password.
    ///
    /// Use this only when constructing the login request.
    pub(crate) fn password(&self) -> &str {
        &self.password
    }

    /// Reject empty account names and passwords.
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.account.is_empty() {
            return Err(InvalidArgumentError::Empty { field: "account" }.into());
        }
        if self.password.is_empty() {
            return Err(InvalidArgumentError::Empty { field: "password" }.into());
        }
        Ok(())
    }
}

// Intentionally hide password in Debug output
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("account", &self.account)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_hides_password_in_debug() {
        let creds = Credentials::new("admin", "secret123");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("admin"));
        assert!(!debug.contains("secret123"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn empty_fields_are_rejected() {
        assert!(matches!(
            Credentials::new("", "pw").validate(),
            Err(Error::InvalidArgument(InvalidArgumentError::Empty { field: "account" }))
        ));
        assert!(matches!(
            Credentials::new("admin", "").validate(),
            Err(Error::InvalidArgument(InvalidArgumentError::Empty { field: "password" }))
        ));
        assert!(Credentials::new("admin", "pw").validate().is_ok());
    }
}
