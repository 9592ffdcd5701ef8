//! Reqwest-backed TMDB gateway.
//!
//! This adapter owns transport details only: URL construction, API key
//! injection, status mapping and JSON decoding. The full URL carries the key,
//! so it is never logged and is stripped from transport errors.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::ports::{TmdbError, TmdbGateway};
use crate::domain::{API_KEY_PARAM, ApiKey, HttpMethod, TmdbRequest};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Gateway sending [`TmdbRequest`]s over HTTPS.
pub struct HttpTmdbGateway {
    client: Client,
    base_url: Url,
    api_key: Option<ApiKey>,
}

impl HttpTmdbGateway {
    /// Build a gateway with a default reqwest client.
    ///
    /// A missing `api_key` is accepted here and reported on every call.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, api_key: Option<ApiKey>) -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, base_url, api_key))
    }

    /// Build a gateway over an existing client.
    #[must_use]
    pub const fn with_client(client: Client, base_url: Url, api_key: Option<ApiKey>) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl TmdbGateway for HttpTmdbGateway {
    async fn call(&self, request: TmdbRequest) -> Result<Value, TmdbError> {
        let Some(api_key) = self.api_key.as_ref() else {
            return Err(TmdbError::configuration("TMDB API key is not configured"));
        };
        let route_path = request.route().path();
        let url = build_url(&self.base_url, &route_path, &request, api_key);

        let builder = match request.method() {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
        }
        .header(ACCEPT, "application/json");
        let builder = match request.body() {
            Some(body) => builder.json(body),
            None => builder,
        };

        let response = builder.send().await.map_err(map_transport_error)?;
        let status = response.status();
        if !status.is_success() {
            warn!(
                method = request.method().as_str(),
                path = %route_path,
                status = status.as_u16(),
                "TMDB returned a non-success status"
            );
            return Err(map_status_error(status));
        }

        let body = response.bytes().await.map_err(map_transport_error)?;
        debug!(
            method = request.method().as_str(),
            path = %route_path,
            status = status.as_u16(),
            bytes = body.len(),
            "TMDB call completed"
        );
        parse_body(body.as_ref())
    }
}

/// Join the route onto the base path, then append the key followed by the
/// request's own parameters. Any `api_key` in the request is ignored.
fn build_url(base_url: &Url, route_path: &str, request: &TmdbRequest, api_key: &ApiKey) -> Url {
    let mut url = base_url.clone();
    let path = format!("{}{route_path}", base_url.path().trim_end_matches('/'));
    url.set_path(&path);
    url.set_query(None);
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair(API_KEY_PARAM, api_key.expose());
        for (name, value) in request.params().iter() {
            if name != API_KEY_PARAM {
                pairs.append_pair(name, &value.to_string());
            }
        }
    }
    url
}

fn parse_body(body: &[u8]) -> Result<Value, TmdbError> {
    if body.is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body)
        .map_err(|error| TmdbError::decode(format!("invalid TMDB JSON payload: {error}")))
}

fn map_transport_error(error: reqwest::Error) -> TmdbError {
    TmdbError::transport(error.without_url().to_string())
}

fn map_status_error(status: StatusCode) -> TmdbError {
    TmdbError::upstream(
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown Status"),
    )
}
