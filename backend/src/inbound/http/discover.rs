//! Discover endpoints.
//!
//! Every query option is forwarded to TMDB as given, so new upstream filters
//! work without a code change. Credential parameters are the exception and
//! are always dropped.

use actix_web::{get, web};

use crate::domain::{MediaSummary, MediaType, Paged, QueryParams};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::downstream_failure;
use crate::inbound::http::normalize;
use crate::inbound::http::schemas::{ErrorSchema, MediaPageSchema};
use crate::inbound::http::state::HttpState;

type RawQuery = web::Query<Vec<(String, String)>>;

async fn discover(
    state: &HttpState,
    media_type: MediaType,
    query: RawQuery,
    failure: &'static str,
) -> ApiResult<web::Json<Paged<MediaSummary>>> {
    let options: QueryParams = query.into_inner().into_iter().collect();
    let raw = state
        .catalog
        .discover(media_type, options)
        .await
        .map_err(|err| downstream_failure(failure, &err))?;
    normalize::media_page(raw, media_type)
        .map(web::Json)
        .map_err(|err| downstream_failure(failure, &err))
}

/// Filter movies with any TMDB discover option (`with_genres`, `year`, ...).
#[utoipa::path(
    get,
    path = "/api/tmdb/discover/movie",
    responses(
        (status = 200, description = "Movies", body = MediaPageSchema),
        (status = 500, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["discover"],
    operation_id = "discoverMovies",
    security([])
)]
#[get("/discover/movie")]
pub async fn discover_movies(
    state: web::Data<HttpState>,
    query: RawQuery,
) -> ApiResult<web::Json<Paged<MediaSummary>>> {
    discover(&state, MediaType::Movie, query, "Failed to discover movies").await
}

/// Filter shows with any TMDB discover option.
#[utoipa::path(
    get,
    path = "/api/tmdb/discover/tv",
    responses(
        (status = 200, description = "Shows", body = MediaPageSchema),
        (status = 500, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["discover"],
    operation_id = "discoverTv",
    security([])
)]
#[get("/discover/tv")]
pub async fn discover_tv(
    state: web::Data<HttpState>,
    query: RawQuery,
) -> ApiResult<web::Json<Paged<MediaSummary>>> {
    discover(&state, MediaType::Tv, query, "Failed to discover TV shows").await
}
