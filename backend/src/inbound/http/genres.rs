//! Genre catalogs.

use actix_web::{get, web};
use serde_json::Value;

use crate::domain::MediaType;
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::downstream_failure;
use crate::inbound::http::schemas::{ErrorSchema, UpstreamPayloadSchema};
use crate::inbound::http::state::HttpState;

async fn genres(
    state: &HttpState,
    media_type: MediaType,
    failure: &'static str,
) -> ApiResult<web::Json<Value>> {
    state
        .catalog
        .genres(media_type)
        .await
        .map(web::Json)
        .map_err(|err| downstream_failure(failure, &err))
}

#[utoipa::path(
    get,
    path = "/api/tmdb/genres/movies",
    responses(
        (status = 200, description = "Movie genres", body = UpstreamPayloadSchema),
        (status = 500, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["catalog"],
    operation_id = "movieGenres",
    security([])
)]
#[get("/genres/movies")]
pub async fn movie_genres(state: web::Data<HttpState>) -> ApiResult<web::Json<Value>> {
    genres(&state, MediaType::Movie, "Failed to fetch movie genres").await
}

#[utoipa::path(
    get,
    path = "/api/tmdb/genres/tv",
    responses(
        (status = 200, description = "TV genres", body = UpstreamPayloadSchema),
        (status = 500, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["catalog"],
    operation_id = "tvGenres",
    security([])
)]
#[get("/genres/tv")]
pub async fn tv_genres(state: web::Data<HttpState>) -> ApiResult<web::Json<Value>> {
    genres(&state, MediaType::Tv, "Failed to fetch TV genres").await
}
