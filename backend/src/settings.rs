//! Application settings loaded via OrthoConfig.
//!
//! Values layer from CLI flags, `MOVIEBOX_*` environment variables and an
//! optional configuration file. Everything is optional: a missing TMDB key or
//! account token is reported per request rather than refusing to start.

use std::net::{AddrParseError, IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::domain::Credentials;
use crate::domain::ports::OperatorAccount;
use crate::outbound::tmdb::DEFAULT_BASE_URL;

const DEFAULT_HOST: &str = "0.0.0.0";

/// Runtime configuration for the HTTP server.
#[derive(Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "MOVIEBOX")]
pub struct AppSettings {
    /// TMDB API key attached to every upstream call.
    pub tmdb_api_key: Option<String>,
    /// Session token of the linked TMDB account.
    pub tmdb_session_id: Option<String>,
    /// Override for the TMDB API root.
    pub tmdb_base_url: Option<String>,
    /// Interface to listen on.
    pub host: Option<String>,
    /// Port to listen on.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// Username of the operator allowed to sign in.
    pub operator_username: Option<String>,
    /// Password of the operator allowed to sign in.
    pub operator_password: Option<String>,
}

impl std::fmt::Debug for AppSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppSettings")
            .field("tmdb_api_key", &self.tmdb_api_key.as_ref().map(|_| "<redacted>"))
            .field(
                "tmdb_session_id",
                &self.tmdb_session_id.as_ref().map(|_| "<redacted>"),
            )
            .field("tmdb_base_url", &self.tmdb_base_url)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("operator_username", &self.operator_username)
            .finish_non_exhaustive()
    }
}

impl AppSettings {
    /// Upstream credentials; blank values count as absent.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials::from_raw(
            self.tmdb_api_key.as_deref(),
            self.tmdb_session_id.as_deref(),
        )
    }

    /// TMDB API root, falling back to the production URL.
    ///
    /// # Errors
    /// Returns a parse error when the configured override is not a URL.
    pub fn tmdb_base_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(self.tmdb_base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))
    }

    /// Socket address to bind; the host defaults to `0.0.0.0`.
    ///
    /// # Errors
    /// Returns a parse error when `host` is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let host: IpAddr = self.host.as_deref().unwrap_or(DEFAULT_HOST).parse()?;
        Ok(SocketAddr::new(host, self.port))
    }

    /// Operator account allowed to sign in, when fully configured.
    #[must_use]
    pub fn operator(&self) -> Option<OperatorAccount> {
        OperatorAccount::new(
            self.operator_username.as_deref()?,
            self.operator_password.as_deref()?,
        )
    }
}
