//! Trending titles across movies and TV.

use actix_web::{get, web};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use utoipa::IntoParams;

use crate::domain::{Error, MediaType, TimeWindow};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::downstream_failure;
use crate::inbound::http::normalize;
use crate::inbound::http::schemas::{ErrorSchema, UpstreamPayloadSchema};
use crate::inbound::http::state::HttpState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TrendingQuery {
    /// `day` or `week`. Defaults to `week`.
    #[param(example = "week")]
    pub time_window: Option<String>,
}

fn parse_window(raw: Option<&str>) -> Result<TimeWindow, Error> {
    match raw {
        None => Ok(TimeWindow::default()),
        Some(value) => value.parse().map_err(|reason: String| {
            debug!(value, reason = %reason, "rejected time window");
            Error::invalid_request("time_window must be 'day' or 'week'")
        }),
    }
}

/// Trending movies, shows and people.
///
/// Results keep their upstream `media_type`.
#[utoipa::path(
    get,
    path = "/api/tmdb/trending",
    params(TrendingQuery),
    responses(
        (status = 200, description = "Trending page", body = UpstreamPayloadSchema),
        (status = 400, description = "Invalid time window", body = ErrorSchema),
        (status = 500, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["catalog"],
    operation_id = "trending",
    security([])
)]
#[get("/trending")]
pub async fn trending(
    state: web::Data<HttpState>,
    query: web::Query<TrendingQuery>,
) -> ApiResult<web::Json<Value>> {
    let window = parse_window(query.time_window.as_deref())?;
    let raw = state
        .catalog
        .trending(window)
        .await
        .map_err(|err| downstream_failure("Failed to fetch trending content", &err))?;
    Ok(web::Json(normalize::mixed_page(raw, MediaType::Movie)))
}
