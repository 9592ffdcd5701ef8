//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use moviebox::domain::Credentials;
use moviebox::domain::ports::OperatorAccount;
use moviebox::inbound::http::session_config::SessionSettings;
use moviebox::outbound::tmdb::DEFAULT_BASE_URL;
use url::Url;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) session: SessionSettings,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) tmdb_base_url: Url,
    pub(crate) credentials: Credentials,
    pub(crate) operator: Option<OperatorAccount>,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Construct a configuration with no upstream credentials and no operator.
    ///
    /// # Errors
    /// Returns a parse error if the built-in TMDB URL is rejected.
    pub fn new(session: SessionSettings, bind_addr: SocketAddr) -> Result<Self, url::ParseError> {
        Ok(Self {
            session,
            bind_addr,
            tmdb_base_url: Url::parse(DEFAULT_BASE_URL)?,
            credentials: Credentials::default(),
            operator: None,
            #[cfg(feature = "metrics")]
            prometheus: None,
        })
    }

    /// Point the gateway at `base_url` and attach the upstream credentials.
    #[must_use]
    pub fn with_upstream(mut self, base_url: Url, credentials: Credentials) -> Self {
        self.tmdb_base_url = base_url;
        self.credentials = credentials;
        self
    }

    /// Attach the operator account allowed to sign in.
    #[must_use]
    pub fn with_operator(mut self, operator: Option<OperatorAccount>) -> Self {
        self.operator = operator;
        self
    }

    /// Whether upstream calls can succeed at all.
    #[must_use]
    pub fn upstream_configured(&self) -> bool {
        self.credentials.api_key().is_some()
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware to the configuration.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }
}
