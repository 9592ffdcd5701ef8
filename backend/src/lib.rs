//! Moviebox backend: a session-authenticated HTTP facade over the TMDB API.
//!
//! Inbound actix-web handlers validate requests and delegate to domain
//! services, which describe upstream calls as typed values executed by the
//! outbound reqwest gateway.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
pub use settings::AppSettings;
