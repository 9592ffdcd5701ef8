//! Test helpers for inbound HTTP components.
//!
//! Shared by unit tests and the integration suite (behind the
//! `test-support` feature).

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, test, web};
use serde_json::json;

use super::state::HttpState;
use crate::domain::TmdbCatalogService;
use crate::domain::ports::{ConfiguredLoginService, OperatorAccount, TmdbGateway};
use crate::domain::RemoteAccountToken;

/// Operator username accepted by [`recording_state`].
pub const OPERATOR_USERNAME: &str = "operator";
/// Operator password accepted by [`recording_state`].
pub const OPERATOR_PASSWORD: &str = "correct horse";
/// Remote session token configured by [`recording_state`].
pub const ACCOUNT_TOKEN: &str = "tmdb-session-token";

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Handler state backed by the real catalog service over `gateway`.
///
/// Pass `None` as the token to exercise the unconfigured-account path.
pub fn recording_state(gateway: Arc<dyn TmdbGateway>, token: Option<&str>) -> HttpState {
    let token = token.and_then(|raw| RemoteAccountToken::new(raw).ok());
    let operator = OperatorAccount::new(OPERATOR_USERNAME, OPERATOR_PASSWORD);
    HttpState::from_service(
        Arc::new(ConfiguredLoginService::new(operator)),
        Arc::new(TmdbCatalogService::new(gateway, token)),
    )
}

/// App serving the full `/api` surface with a test session middleware.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new().app_data(web::Data::new(state)).service(
        web::scope("/api")
            .wrap(test_session_middleware())
            .configure(super::configure),
    )
}

/// Login request for the configured operator.
pub fn login_request() -> test::TestRequest {
    test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({
            "username": OPERATOR_USERNAME,
            "password": OPERATOR_PASSWORD,
        }))
}

/// Extract the session cookie set on a response.
///
/// # Panics
/// Panics when the response sets no session cookie.
pub fn session_cookie<B>(response: &ServiceResponse<B>) -> Cookie<'static> {
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned)
        .expect("session cookie set")
}
