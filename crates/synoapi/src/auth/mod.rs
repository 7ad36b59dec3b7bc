//! Authentication types and session management.
//!
//! Every feature call requires the session id held by a [`SessionManager`].

mod credentials;
mod session;
mod tokens;

pub use credentials::Credentials;
pub use session::SessionManager;
pub use tokens::SessionId;
