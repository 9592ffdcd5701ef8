//! Driving port for caller login.
//!
//! Inbound adapters authenticate through this port and store the resulting
//! [`CallerSession`] in the session cookie; handler tests substitute a mock.

use async_trait::async_trait;
use subtle::ConstantTimeEq;
use tracing::warn;
use zeroize::Zeroizing;

use crate::domain::{CallerSession, Error, LoginCredentials};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated caller.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<CallerSession, Error>;
}

/// Single operator account configured at start-up.
#[derive(Clone)]
pub struct OperatorAccount {
    username: String,
    password: Zeroizing<String>,
}

impl OperatorAccount {
    /// Build an operator account; blank values yield `None`.
    #[must_use]
    pub fn new(username: &str, password: &str) -> Option<Self> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return None;
        }
        Some(Self {
            username: username.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Compare both fields in constant time; both are always checked.
    fn matches(&self, username: &str, password: &str) -> bool {
        let username_ok = self.username.as_bytes().ct_eq(username.as_bytes());
        let password_ok = self.password.as_bytes().ct_eq(password.as_bytes());
        (username_ok & password_ok).into()
    }
}

impl std::fmt::Debug for OperatorAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperatorAccount")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Authenticates against the configured operator account.
///
/// With no operator configured every attempt is rejected.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredLoginService {
    operator: Option<OperatorAccount>,
}

impl ConfiguredLoginService {
    /// Build the service from an optional operator account.
    #[must_use]
    pub const fn new(operator: Option<OperatorAccount>) -> Self {
        Self { operator }
    }
}

#[async_trait]
impl LoginService for ConfiguredLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<CallerSession, Error> {
        let Some(operator) = &self.operator else {
            warn!("login attempted but no operator account is configured");
            return Err(Error::unauthorized("Invalid credentials"));
        };
        if operator.matches(credentials.username(), credentials.password()) {
            Ok(CallerSession::from(credentials))
        } else {
            Err(Error::unauthorized("Invalid credentials"))
        }
    }
}
