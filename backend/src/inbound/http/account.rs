//! Account-scoped endpoints: details, favorites, watchlist and ratings.
//!
//! ```text
//! GET  /api/tmdb/account/favorites?media_type=tv&page=2
//! POST /api/tmdb/account/favorites {"media_type":"movie","media_id":550,"favorite":true}
//! POST /api/tmdb/account/ratings {"mediaType":"movie","id":550,"rating":8.5}
//! ```
//!
//! Every handler validates its input, then requires a caller session, and
//! only then touches the account port. Responses are marked private.

use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;
use serde_json::Value;
use utoipa::IntoParams;

use crate::domain::ports::TmdbError;
use crate::domain::{Error, FavoriteToggle, MediaType, Rating, TmdbId, WatchlistToggle};
use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::private_json;
use crate::inbound::http::error::downstream_failure;
use crate::inbound::http::normalize;
use crate::inbound::http::schemas::{ErrorSchema, MediaPageSchema, UpstreamPayloadSchema};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{body_id, body_number, parse_media_type, parse_page};

const RATING_FIELDS_REQUIRED: &str = "mediaType, id and rating are required";

/// Query for account collection pages.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CollectionQuery {
    /// `movie` or `tv`. Defaults to `movie`.
    #[param(example = "movie")]
    pub media_type: Option<String>,
    /// 1-based page number.
    #[param(value_type = Option<u32>)]
    pub page: Option<String>,
}

/// Body for favorite and watchlist toggles.
///
/// The flag is read from `favorite` or `watchlist` depending on the route.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct ToggleRequest {
    #[schema(value_type = Option<String>, example = "movie")]
    pub media_type: Option<String>,
    #[schema(value_type = Option<u64>, example = 550)]
    pub media_id: Option<Value>,
    #[schema(value_type = Option<bool>)]
    pub favorite: Option<Value>,
    #[schema(value_type = Option<bool>)]
    pub watchlist: Option<Value>,
}

/// Body for `POST /api/tmdb/account/ratings`.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RatingRequest {
    #[schema(value_type = Option<String>, example = "movie")]
    pub media_type: Option<String>,
    #[schema(value_type = Option<u64>, example = 550)]
    pub id: Option<Value>,
    #[schema(value_type = Option<f64>, example = 8.5)]
    pub rating: Option<Value>,
}

struct ToggleFields {
    media_type: MediaType,
    media_id: TmdbId,
    flag: bool,
}

fn toggle_fields(
    request: &ToggleRequest,
    flag: Option<&Value>,
    message: &'static str,
) -> Result<ToggleFields, Error> {
    let media_type = request
        .media_type
        .as_deref()
        .and_then(|raw| raw.parse::<MediaType>().ok());
    let media_id = body_id(request.media_id.as_ref());
    let flag = flag.and_then(Value::as_bool);
    match (media_type, media_id, flag) {
        (Some(media_type), Some(media_id), Some(flag)) => Ok(ToggleFields {
            media_type,
            media_id,
            flag,
        }),
        _ => Err(Error::invalid_request(message)),
    }
}

impl TryFrom<&RatingRequest> for Rating {
    type Error = Error;

    fn try_from(value: &RatingRequest) -> Result<Self, Self::Error> {
        let media_type = value
            .media_type
            .as_deref()
            .and_then(|raw| raw.parse::<MediaType>().ok());
        let id = body_id(value.id.as_ref());
        let rating = body_number(value.rating.as_ref());
        match (media_type, id, rating) {
            (Some(media_type), Some(id), Some(rating)) => Rating::new(media_type, id, rating)
                .map_err(|_| Error::invalid_request(RATING_FIELDS_REQUIRED)),
            _ => Err(Error::invalid_request(RATING_FIELDS_REQUIRED)),
        }
    }
}

fn collection_args(query: &CollectionQuery) -> Result<(MediaType, u32), Error> {
    let media_type = parse_media_type(query.media_type.as_deref(), MediaType::Movie)?;
    let page = parse_page(query.page.as_deref())?;
    Ok((media_type, page))
}

/// Remote account behind the configured session.
#[utoipa::path(
    get,
    path = "/api/tmdb/account/details",
    responses(
        (status = 200, description = "Account", body = UpstreamPayloadSchema),
        (status = 401, description = "No caller session", body = ErrorSchema),
        (status = 500, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["account"],
    operation_id = "accountDetails"
)]
#[get("/account/details")]
pub async fn account_details(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    session.require_caller()?;
    let account = state
        .account
        .account_details()
        .await
        .map_err(|err| downstream_failure("Failed to fetch account details", &err))?;
    Ok(private_json(&account))
}

#[utoipa::path(
    get,
    path = "/api/tmdb/account/favorites",
    params(CollectionQuery),
    responses(
        (status = 200, description = "Favorites page", body = MediaPageSchema),
        (status = 400, description = "Invalid query", body = ErrorSchema),
        (status = 401, description = "No caller session", body = ErrorSchema),
        (status = 500, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["account"],
    operation_id = "listFavorites"
)]
#[get("/account/favorites")]
pub async fn favorites(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<CollectionQuery>,
) -> ApiResult<HttpResponse> {
    let (media_type, page) = collection_args(&query)?;
    session.require_caller()?;
    let fail = |err: TmdbError| downstream_failure("Failed to fetch favorites", &err);
    let raw = state
        .account
        .favorites(media_type, page)
        .await
        .map_err(fail)?;
    let page = normalize::media_page(raw, media_type).map_err(fail)?;
    Ok(private_json(&page))
}

#[utoipa::path(
    post,
    path = "/api/tmdb/account/favorites",
    request_body = ToggleRequest,
    responses(
        (status = 200, description = "Upstream acknowledgement", body = UpstreamPayloadSchema),
        (status = 400, description = "Invalid body", body = ErrorSchema),
        (status = 401, description = "No caller session", body = ErrorSchema),
        (status = 500, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["account"],
    operation_id = "toggleFavorite"
)]
#[post("/account/favorites")]
pub async fn toggle_favorite(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<ToggleRequest>,
) -> ApiResult<HttpResponse> {
    let fields = toggle_fields(
        &payload,
        payload.favorite.as_ref(),
        "media_type, media_id and favorite are required",
    )?;
    session.require_caller()?;
    let ack = state
        .account
        .set_favorite(FavoriteToggle {
            media_type: fields.media_type,
            media_id: fields.media_id,
            favorite: fields.flag,
        })
        .await
        .map_err(|err| downstream_failure("Failed to update favorites", &err))?;
    Ok(private_json(&ack))
}

#[utoipa::path(
    get,
    path = "/api/tmdb/account/watchlist",
    params(CollectionQuery),
    responses(
        (status = 200, description = "Watchlist page", body = MediaPageSchema),
        (status = 400, description = "Invalid query", body = ErrorSchema),
        (status = 401, description = "No caller session", body = ErrorSchema),
        (status = 500, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["account"],
    operation_id = "listWatchlist"
)]
#[get("/account/watchlist")]
pub async fn watchlist(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<CollectionQuery>,
) -> ApiResult<HttpResponse> {
    let (media_type, page) = collection_args(&query)?;
    session.require_caller()?;
    let fail = |err: TmdbError| downstream_failure("Failed to fetch watchlist", &err);
    let raw = state
        .account
        .watchlist(media_type, page)
        .await
        .map_err(fail)?;
    let page = normalize::media_page(raw, media_type).map_err(fail)?;
    Ok(private_json(&page))
}

#[utoipa::path(
    post,
    path = "/api/tmdb/account/watchlist",
    request_body = ToggleRequest,
    responses(
        (status = 200, description = "Upstream acknowledgement", body = UpstreamPayloadSchema),
        (status = 400, description = "Invalid body", body = ErrorSchema),
        (status = 401, description = "No caller session", body = ErrorSchema),
        (status = 500, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["account"],
    operation_id = "toggleWatchlist"
)]
#[post("/account/watchlist")]
pub async fn toggle_watchlist(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<ToggleRequest>,
) -> ApiResult<HttpResponse> {
    let fields = toggle_fields(
        &payload,
        payload.watchlist.as_ref(),
        "media_type, media_id and watchlist are required",
    )?;
    session.require_caller()?;
    let ack = state
        .account
        .set_watchlist(WatchlistToggle {
            media_type: fields.media_type,
            media_id: fields.media_id,
            watchlist: fields.flag,
        })
        .await
        .map_err(|err| downstream_failure("Failed to update watchlist", &err))?;
    Ok(private_json(&ack))
}

/// Rate a movie or show. `rating` must be a JSON number.
#[utoipa::path(
    post,
    path = "/api/tmdb/account/ratings",
    request_body = RatingRequest,
    responses(
        (status = 200, description = "Upstream acknowledgement", body = UpstreamPayloadSchema),
        (status = 400, description = "Invalid body", body = ErrorSchema),
        (status = 401, description = "No caller session", body = ErrorSchema),
        (status = 500, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["account"],
    operation_id = "rateMedia"
)]
#[post("/account/ratings")]
pub async fn rate_media(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<RatingRequest>,
) -> ApiResult<HttpResponse> {
    let rating = Rating::try_from(&*payload)?;
    session.require_caller()?;
    let ack = state
        .account
        .rate(rating)
        .await
        .map_err(|err| downstream_failure("Failed to rate media", &err))?;
    Ok(private_json(&ack))
}
