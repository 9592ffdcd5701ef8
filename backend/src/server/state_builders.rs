//! Builders for the HTTP state from server configuration.

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};

use moviebox::domain::ports::{ConfiguredLoginService, TmdbGateway};
use moviebox::domain::TmdbCatalogService;
use moviebox::inbound::http::state::HttpState;
use moviebox::outbound::tmdb::HttpTmdbGateway;

use super::ServerConfig;

/// Wire the reqwest gateway, the catalog service and the login service.
///
/// Missing credentials are logged once here and reported per request later.
///
/// # Errors
/// Returns [`std::io::Error`] when the HTTP client cannot be built.
pub(super) fn build_http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    let (api_key, account_token) = config.credentials.clone().into_parts();
    if api_key.is_none() {
        warn!("TMDB API key is not configured; catalog requests will fail");
    }
    if account_token.is_none() {
        warn!("TMDB session id is not configured; account requests will fail");
    }
    if config.operator.is_none() {
        warn!("no operator account configured; logins will be rejected");
    }

    let gateway = HttpTmdbGateway::new(config.tmdb_base_url.clone(), api_key)
        .map_err(|err| std::io::Error::other(format!("TMDB client construction failed: {err}")))?;
    info!(base_url = %config.tmdb_base_url, "TMDB gateway ready");
    let gateway: Arc<dyn TmdbGateway> = Arc::new(gateway);

    let catalog = Arc::new(TmdbCatalogService::new(gateway, account_token));
    let login = Arc::new(ConfiguredLoginService::new(config.operator.clone()));
    Ok(web::Data::new(HttpState::from_service(login, catalog)))
}
