//! Movie list and detail endpoints.
//!
//! ```text
//! GET /api/tmdb/movies/popular?page=2
//! GET /api/tmdb/movie/550?include=videos
//! ```

use actix_web::{get, web};

use crate::domain::{MediaSummary, MediaType, MovieList, Paged};
use crate::inbound::http::ApiResult;
use crate::inbound::http::details::{DetailsQuery, DetailsResponse, fetch_details};
use crate::inbound::http::error::downstream_failure;
use crate::inbound::http::normalize;
use crate::inbound::http::schemas::{DetailsResponseSchema, ErrorSchema, MediaPageSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{PageQuery, parse_id, parse_page};

async fn movie_list(
    state: &HttpState,
    list: MovieList,
    query: &PageQuery,
    failure: &'static str,
) -> ApiResult<web::Json<Paged<MediaSummary>>> {
    let page = parse_page(query.page.as_deref())?;
    let raw = state
        .catalog
        .movie_list(list, page)
        .await
        .map_err(|err| downstream_failure(failure, &err))?;
    normalize::media_page(raw, MediaType::Movie)
        .map(web::Json)
        .map_err(|err| downstream_failure(failure, &err))
}

/// Popular movies.
#[utoipa::path(
    get,
    path = "/api/tmdb/movies/popular",
    params(PageQuery),
    responses(
        (status = 200, description = "Movies", body = MediaPageSchema),
        (status = 400, description = "Invalid page", body = ErrorSchema),
        (status = 500, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["movies"],
    operation_id = "popularMovies",
    security([])
)]
#[get("/movies/popular")]
pub async fn popular_movies(
    state: web::Data<HttpState>,
    query: web::Query<PageQuery>,
) -> ApiResult<web::Json<Paged<MediaSummary>>> {
    movie_list(&state, MovieList::Popular, &query, "Failed to fetch popular movies").await
}

/// Top rated movies.
#[utoipa::path(
    get,
    path = "/api/tmdb/movies/top-rated",
    params(PageQuery),
    responses(
        (status = 200, description = "Movies", body = MediaPageSchema),
        (status = 400, description = "Invalid page", body = ErrorSchema),
        (status = 500, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["movies"],
    operation_id = "topRatedMovies",
    security([])
)]
#[get("/movies/top-rated")]
pub async fn top_rated_movies(
    state: web::Data<HttpState>,
    query: web::Query<PageQuery>,
) -> ApiResult<web::Json<Paged<MediaSummary>>> {
    movie_list(&state, MovieList::TopRated, &query, "Failed to fetch top rated movies").await
}

/// Movies now in theatres.
#[utoipa::path(
    get,
    path = "/api/tmdb/movies/now-playing",
    params(PageQuery),
    responses(
        (status = 200, description = "Movies", body = MediaPageSchema),
        (status = 400, description = "Invalid page", body = ErrorSchema),
        (status = 500, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["movies"],
    operation_id = "nowPlayingMovies",
    security([])
)]
#[get("/movies/now-playing")]
pub async fn now_playing_movies(
    state: web::Data<HttpState>,
    query: web::Query<PageQuery>,
) -> ApiResult<web::Json<Paged<MediaSummary>>> {
    movie_list(&state, MovieList::NowPlaying, &query, "Failed to fetch now playing movies").await
}

#[utoipa::path(
    get,
    path = "/api/tmdb/movies/upcoming",
    params(PageQuery),
    responses(
        (status = 200, description = "Movies", body = MediaPageSchema),
        (status = 400, description = "Invalid page", body = ErrorSchema),
        (status = 500, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["movies"],
    operation_id = "upcomingMovies",
    security([])
)]
#[get("/movies/upcoming")]
pub async fn upcoming_movies(
    state: web::Data<HttpState>,
    query: web::Query<PageQuery>,
) -> ApiResult<web::Json<Paged<MediaSummary>>> {
    movie_list(&state, MovieList::Upcoming, &query, "Failed to fetch upcoming movies").await
}

/// One movie, optionally with its videos.
#[utoipa::path(
    get,
    path = "/api/tmdb/movie/{movie_id}",
    params(
        ("movie_id" = u64, Path, description = "TMDB movie id"),
        DetailsQuery
    ),
    responses(
        (status = 200, description = "Movie details", body = DetailsResponseSchema),
        (status = 400, description = "Invalid movie id", body = ErrorSchema),
        (status = 500, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["movies"],
    operation_id = "movieDetails",
    security([])
)]
#[get("/movie/{movie_id:[^/]*}")]
pub async fn movie_details(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<DetailsQuery>,
) -> ApiResult<web::Json<DetailsResponse>> {
    let id = parse_id(&path, "Invalid movie id")?;
    fetch_details(&state, MediaType::Movie, id, &query, "Failed to fetch movie details")
        .await
        .map(web::Json)
}
