//! Caller authentication primitives.
//!
//! The caller session identifies who is using this backend. It is unrelated to
//! the TMDB account the backend acts on, which is represented by
//! [`RemoteAccountToken`](crate::domain::RemoteAccountToken).

use std::fmt;

use zeroize::Zeroizing;

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Username was missing or blank once trimmed.
    EmptyUsername,
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Validated login credentials.
///
/// ## Invariants
/// - `username` is trimmed and non-empty.
/// - `password` is non-empty and keeps caller-provided whitespace.
///
/// # Examples
/// ```
/// use moviebox::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" ada ", "pw").unwrap();
/// assert_eq!(creds.username(), "ada");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        let normalized = username.trim();
        if normalized.is_empty() {
            return Err(LoginValidationError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }
        Ok(Self {
            username: normalized.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Username supplied by the caller.
    #[must_use]
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Password supplied by the caller.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Authenticated local caller, persisted in the session cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerSession {
    username: String,
}

impl CallerSession {
    /// Rebuild a caller session from a stored username.
    ///
    /// Returns `None` for blank values so a tampered cookie reads as
    /// unauthenticated.
    #[must_use]
    pub fn from_username(username: &str) -> Option<Self> {
        let trimmed = username.trim();
        (!trimmed.is_empty()).then(|| Self {
            username: trimmed.to_owned(),
        })
    }

    /// Username of the signed-in caller.
    #[must_use]
    pub fn username(&self) -> &str {
        self.username.as_str()
    }
}

impl From<&LoginCredentials> for CallerSession {
    fn from(credentials: &LoginCredentials) -> Self {
        Self {
            username: credentials.username().to_owned(),
        }
    }
}
