//! TV list and detail endpoints.

use actix_web::{get, web};

use crate::domain::{MediaSummary, MediaType, Paged, TvList};
use crate::inbound::http::ApiResult;
use crate::inbound::http::details::{DetailsQuery, DetailsResponse, fetch_details};
use crate::inbound::http::error::downstream_failure;
use crate::inbound::http::normalize;
use crate::inbound::http::schemas::{DetailsResponseSchema, ErrorSchema, MediaPageSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{PageQuery, parse_id, parse_page};

async fn tv_list(
    state: &HttpState,
    list: TvList,
    query: &PageQuery,
    failure: &'static str,
) -> ApiResult<web::Json<Paged<MediaSummary>>> {
    let page = parse_page(query.page.as_deref())?;
    let raw = state
        .catalog
        .tv_list(list, page)
        .await
        .map_err(|err| downstream_failure(failure, &err))?;
    normalize::media_page(raw, MediaType::Tv)
        .map(web::Json)
        .map_err(|err| downstream_failure(failure, &err))
}

#[utoipa::path(
    get,
    path = "/api/tmdb/tv/popular",
    params(PageQuery),
    responses(
        (status = 200, description = "Shows", body = MediaPageSchema),
        (status = 400, description = "Invalid page", body = ErrorSchema),
        (status = 500, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["tv"],
    operation_id = "popularTv",
    security([])
)]
#[get("/tv/popular")]
pub async fn popular_tv(
    state: web::Data<HttpState>,
    query: web::Query<PageQuery>,
) -> ApiResult<web::Json<Paged<MediaSummary>>> {
    tv_list(&state, TvList::Popular, &query, "Failed to fetch popular TV shows").await
}

#[utoipa::path(
    get,
    path = "/api/tmdb/tv/top-rated",
    params(PageQuery),
    responses(
        (status = 200, description = "Shows", body = MediaPageSchema),
        (status = 400, description = "Invalid page", body = ErrorSchema),
        (status = 500, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["tv"],
    operation_id = "topRatedTv",
    security([])
)]
#[get("/tv/top-rated")]
pub async fn top_rated_tv(
    state: web::Data<HttpState>,
    query: web::Query<PageQuery>,
) -> ApiResult<web::Json<Paged<MediaSummary>>> {
    tv_list(&state, TvList::TopRated, &query, "Failed to fetch top rated TV shows").await
}

/// Shows with an episode airing in the next week.
#[utoipa::path(
    get,
    path = "/api/tmdb/tv/on-the-air",
    params(PageQuery),
    responses(
        (status = 200, description = "Shows", body = MediaPageSchema),
        (status = 400, description = "Invalid page", body = ErrorSchema),
        (status = 500, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["tv"],
    operation_id = "onTheAirTv",
    security([])
)]
#[get("/tv/on-the-air")]
pub async fn on_the_air_tv(
    state: web::Data<HttpState>,
    query: web::Query<PageQuery>,
) -> ApiResult<web::Json<Paged<MediaSummary>>> {
    tv_list(&state, TvList::OnTheAir, &query, "Failed to fetch TV shows on the air").await
}

/// One show, optionally with its videos.
///
/// Registered after the list routes so `popular` and friends never parse
/// as ids.
#[utoipa::path(
    get,
    path = "/api/tmdb/tv/{tv_id}",
    params(
        ("tv_id" = u64, Path, description = "TMDB show id"),
        DetailsQuery
    ),
    responses(
        (status = 200, description = "Show details", body = DetailsResponseSchema),
        (status = 400, description = "Invalid TV id", body = ErrorSchema),
        (status = 500, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["tv"],
    operation_id = "tvDetails",
    security([])
)]
#[get("/tv/{tv_id:[^/]*}")]
pub async fn tv_details(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<DetailsQuery>,
) -> ApiResult<web::Json<DetailsResponse>> {
    let id = parse_id(&path, "Invalid TV id")?;
    fetch_details(&state, MediaType::Tv, id, &query, "Failed to fetch TV details")
        .await
        .map(web::Json)
}
