//! Upstream credentials held by the process.
//!
//! Both values are secrets: they are zeroed on drop and never printed by
//! `Debug`. They are read once at start-up and handed to the gateway and
//! catalog service explicitly.

use std::fmt;

use zeroize::Zeroizing;

/// Validation failures for credential values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    /// The API key was blank.
    #[error("TMDB API key must not be empty")]
    EmptyApiKey,
    /// The account session token was blank.
    #[error("TMDB session id must not be empty")]
    EmptyAccountToken,
}

/// Application-level API key sent as the `api_key` query parameter.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(Zeroizing<String>);

impl ApiKey {
    /// Wrap a raw key, trimming surrounding whitespace.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, CredentialError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(CredentialError::EmptyApiKey);
        }
        Ok(Self(Zeroizing::new(trimmed.to_owned())))
    }

    /// Raw key for query serialisation.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Pre-provisioned TMDB session id identifying the remote account.
///
/// Unrelated to the caller's own login; see
/// [`CallerSession`](crate::domain::CallerSession).
#[derive(Clone, PartialEq, Eq)]
pub struct RemoteAccountToken(Zeroizing<String>);

impl RemoteAccountToken {
    /// Wrap a raw session id, trimming surrounding whitespace.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, CredentialError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(CredentialError::EmptyAccountToken);
        }
        Ok(Self(Zeroizing::new(trimmed.to_owned())))
    }

    /// Raw token for query serialisation.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for RemoteAccountToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RemoteAccountToken(<redacted>)")
    }
}

/// Credential bundle resolved from configuration.
///
/// Either value may be absent; callers surface the absence as a
/// configuration failure at call time rather than refusing to start.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    api_key: Option<ApiKey>,
    account_token: Option<RemoteAccountToken>,
}

impl Credentials {
    /// Bundle already validated credentials.
    #[must_use]
    pub const fn new(api_key: Option<ApiKey>, account_token: Option<RemoteAccountToken>) -> Self {
        Self {
            api_key,
            account_token,
        }
    }

    /// Build credentials from optional raw strings, treating blank values as
    /// absent.
    #[must_use]
    pub fn from_raw(api_key: Option<&str>, account_token: Option<&str>) -> Self {
        Self {
            api_key: api_key.and_then(|raw| ApiKey::new(raw).ok()),
            account_token: account_token.and_then(|raw| RemoteAccountToken::new(raw).ok()),
        }
    }

    /// Configured API key.
    #[must_use]
    pub const fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    /// Configured remote account token.
    #[must_use]
    pub const fn account_token(&self) -> Option<&RemoteAccountToken> {
        self.account_token.as_ref()
    }

    /// Split into owned parts for the gateway and the catalog service.
    #[must_use]
    pub fn into_parts(self) -> (Option<ApiKey>, Option<RemoteAccountToken>) {
        (self.api_key, self.account_token)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_api_key_is_rejected(#[case] raw: &str) {
        assert_eq!(ApiKey::new(raw), Err(CredentialError::EmptyApiKey));
    }

    #[rstest]
    fn account_token_is_trimmed() {
        let token = RemoteAccountToken::new("  abc123 ").expect("valid token");
        assert_eq!(token.expose(), "abc123");
    }

    #[rstest]
    fn debug_output_is_redacted() {
        let credentials = Credentials::from_raw(Some("secret-key"), Some("secret-session"));
        let rendered = format!("{credentials:?}");
        assert!(!rendered.contains("secret-key"));
        assert!(!rendered.contains("secret-session"));
    }

    #[rstest]
    fn blank_raw_values_are_treated_as_absent() {
        let credentials = Credentials::from_raw(Some(" "), None);
        assert!(credentials.api_key().is_none());
        assert!(credentials.account_token().is_none());
    }
}
