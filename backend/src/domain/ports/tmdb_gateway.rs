//! Driven port for calling the TMDB API.
//!
//! The domain hands over a fully described [`TmdbRequest`]; the adapter owns
//! the base URL, API key injection, transport and status mapping.

use async_trait::async_trait;
use serde_json::Value;

use super::define_port_error;
use crate::domain::TmdbRequest;

define_port_error! {
    /// Failures surfaced by the gateway.
    pub enum TmdbError {
        /// Credentials or settings are missing; no request was sent.
        Configuration { message: String } =>
            "TMDB configuration error: {message}",
        /// Upstream answered with a non-success status.
        Upstream { status: u16, status_text: String } =>
            "TMDB request failed: {status} {status_text}",
        /// The request never produced a response.
        Transport { message: String } =>
            "TMDB transport failed: {message}",
        /// A success response carried an unreadable body.
        Decode { message: String } =>
            "TMDB response decode failed: {message}",
    }
}

impl TmdbError {
    /// Whether the failure happened before any network I/O.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}

/// Port for dispatching one upstream call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TmdbGateway: Send + Sync {
    /// Send `request` and return the parsed JSON body of a 2xx response.
    async fn call(&self, request: TmdbRequest) -> Result<Value, TmdbError>;
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn upstream_message_includes_status_line() {
        let err = TmdbError::upstream(401_u16, "Unauthorized");
        assert_eq!(err.to_string(), "TMDB request failed: 401 Unauthorized");
    }

    #[rstest]
    #[case(TmdbError::configuration("missing key"), true)]
    #[case(TmdbError::transport("reset"), false)]
    #[case(TmdbError::decode("eof"), false)]
    fn configuration_is_detected(#[case] error: TmdbError, #[case] expected: bool) {
        assert_eq!(error.is_configuration(), expected);
    }
}
