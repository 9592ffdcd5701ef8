//! Streaming, rental and purchase availability per region.

use actix_web::{get, web};
use serde_json::Value;

use crate::domain::MediaType;
use crate::inbound::http::ApiResult;
use crate::inbound::http::details::fetch_by_id;
use crate::inbound::http::schemas::{ErrorSchema, UpstreamPayloadSchema};
use crate::inbound::http::state::HttpState;

#[utoipa::path(
    get,
    path = "/api/tmdb/providers/movie/{movie_id}",
    params(("movie_id" = u64, Path, description = "TMDB movie id")),
    responses(
        (status = 200, description = "Watch providers by region", body = UpstreamPayloadSchema),
        (status = 400, description = "Invalid movie id", body = ErrorSchema),
        (status = 500, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["movies"],
    operation_id = "movieWatchProviders",
    security([])
)]
#[get("/providers/movie/{movie_id:[^/]*}")]
pub async fn movie_providers(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Value>> {
    fetch_by_id(
        &path,
        "Invalid movie id",
        "Failed to fetch movie watch providers",
        |id| state.catalog.watch_providers(MediaType::Movie, id),
    )
    .await
}

#[utoipa::path(
    get,
    path = "/api/tmdb/providers/tv/{tv_id}",
    params(("tv_id" = u64, Path, description = "TMDB show id")),
    responses(
        (status = 200, description = "Watch providers by region", body = UpstreamPayloadSchema),
        (status = 400, description = "Invalid TV id", body = ErrorSchema),
        (status = 500, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["tv"],
    operation_id = "tvWatchProviders",
    security([])
)]
#[get("/providers/tv/{tv_id:[^/]*}")]
pub async fn tv_providers(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Value>> {
    fetch_by_id(
        &path,
        "Invalid TV id",
        "Failed to fetch TV watch providers",
        |id| state.catalog.watch_providers(MediaType::Tv, id),
    )
    .await
}
