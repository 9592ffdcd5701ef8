//! Server construction and middleware wiring.

mod config;
#[cfg(feature = "metrics")]
mod metrics;
mod state_builders;

pub use config::ServerConfig;

#[cfg(feature = "metrics")]
pub use metrics::make_metrics;
#[cfg(feature = "metrics")]
use metrics::MetricsLayer;
use state_builders::build_http_state;

use actix_session::{
    SessionMiddleware,
    config::{CookieContentSecurity, PersistentSession},
    storage::CookieSessionStore,
};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use moviebox::Trace;
#[cfg(debug_assertions)]
use moviebox::doc::ApiDoc;
use moviebox::inbound::http::configure;
use moviebox::inbound::http::health::{HealthState, live, ready};
use moviebox::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

const SESSION_TTL_HOURS: i64 = 2;

/// Cookie parameters shared by every worker's session middleware.
#[derive(Clone)]
struct SessionCookie {
    key: Key,
    secure: bool,
    same_site: SameSite,
}

impl SessionCookie {
    fn middleware(&self) -> SessionMiddleware<CookieSessionStore> {
        SessionMiddleware::builder(CookieSessionStore::default(), self.key.clone())
            .cookie_name("session".into())
            .cookie_path("/".into())
            .cookie_secure(self.secure)
            .cookie_http_only(true)
            .cookie_content_security(CookieContentSecurity::Private)
            .cookie_same_site(self.same_site)
            .session_lifecycle(PersistentSession::default().session_ttl(
                actix_web::cookie::time::Duration::hours(SESSION_TTL_HOURS),
            ))
            .build()
    }
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    cookie: SessionCookie,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api")
        .wrap(cookie.middleware())
        .configure(configure);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// The readiness check reports `unconfigured` when no TMDB API key is set.
///
/// # Errors
/// Propagates [`std::io::Error`] when building the upstream client, binding
/// the socket or starting the server fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = build_http_state(&config)?;
    let ServerConfig {
        session,
        bind_addr,
        #[cfg(feature = "metrics")]
        prometheus,
        ..
    } = config;
    info!(key_source = %session.key_source, "session key loaded");
    let cookie = SessionCookie {
        key: session.key,
        secure: session.cookie_secure,
        same_site: session.same_site,
    };

    #[cfg(feature = "metrics")]
    let metrics_layer = MetricsLayer::from_option(prometheus);

    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        let app = build_app(server_health_state.clone(), http_state.clone(), cookie.clone());

        #[cfg(feature = "metrics")]
        let app = app.wrap(metrics_layer.clone());

        app
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "listening");
    health_state.mark_ready();
    Ok(server)
}
