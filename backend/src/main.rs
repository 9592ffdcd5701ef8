//! Backend entry-point: loads settings, wires the TMDB gateway and serves the API.

mod server;

use actix_web::web;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};

use moviebox::AppSettings;
use moviebox::inbound::http::health::HealthState;
use moviebox::inbound::http::session_config::{BuildMode, session_settings_from_env};
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os()).map_err(|e| {
        error!(error = %e, "failed to load settings");
        std::io::Error::other(format!("failed to load settings: {e}"))
    })?;
    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .map_err(|e| {
            error!(error = %e, "invalid session configuration");
            std::io::Error::other(e)
        })?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|e| std::io::Error::other(format!("invalid bind address: {e}")))?;
    let base_url = settings
        .tmdb_base_url()
        .map_err(|e| std::io::Error::other(format!("invalid TMDB base URL: {e}")))?;

    let config = ServerConfig::new(session, bind_addr)
        .map_err(std::io::Error::other)?
        .with_upstream(base_url, settings.credentials())
        .with_operator(settings.operator());
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(Some(server::make_metrics()?));

    let health_state =
        web::Data::new(HealthState::new().with_upstream_configured(config.upstream_configured()));
    let server = create_server(health_state, config)?;
    server.await
}
