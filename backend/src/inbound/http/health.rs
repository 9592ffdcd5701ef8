//! Liveness and readiness checks for orchestrators and load balancers.
//!
//! Readiness also reflects whether a TMDB API key is configured: without one
//! every catalog call fails, so the instance should not receive traffic.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use serde::Serialize;

/// Shared health state.
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
    upstream_configured: AtomicBool,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
            upstream_configured: AtomicBool::new(true),
        }
    }
}

#[derive(Debug, Serialize)]
struct HealthBody {
    status: &'static str,
}

impl HealthState {
    /// Create a new health state starting as not ready but live.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record whether TMDB credentials are available.
    #[must_use]
    pub fn with_upstream_configured(self, configured: bool) -> Self {
        self.upstream_configured.store(configured, Ordering::Release);
        self
    }

    /// Mark the server as bound and serving.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Flag the process as draining so liveness checks fail fast.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Current readiness label.
    fn readiness(&self) -> &'static str {
        if !self.ready.load(Ordering::Acquire) {
            "starting"
        } else if !self.upstream_configured.load(Ordering::Acquire) {
            "unconfigured"
        } else {
            "ready"
        }
    }

    /// Whether readiness checks should pass.
    pub fn is_ready(&self) -> bool {
        self.readiness() == "ready"
    }

    /// Whether liveness checks should pass.
    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    fn health_response(healthy: bool, status: &'static str) -> HttpResponse {
        let mut response = if healthy {
            HttpResponse::Ok()
        } else {
            HttpResponse::ServiceUnavailable()
        };

        response
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .json(HealthBody { status })
    }
}

/// Readiness check. `200` once the server is bound with TMDB credentials,
/// `503` otherwise.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    security([]),
    responses(
        (status = 200, description = "Server is ready to handle traffic"),
        (status = 503, description = "Server is starting or TMDB is unconfigured")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    let status = state.readiness();
    HealthState::health_response(status == "ready", status)
}

/// Liveness check. `200` while alive, `503` once draining.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    security([]),
    responses(
        (status = 200, description = "Server is alive"),
        (status = 503, description = "Server is shutting down")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    let alive = state.is_alive();
    HealthState::health_response(alive, if alive { "alive" } else { "draining" })
}
