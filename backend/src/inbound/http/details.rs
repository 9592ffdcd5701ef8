//! Shared movie/TV detail lookup.
//!
//! A detail request makes one upstream call, or two when `include` names
//! `videos`. Videos are fetched only after the details succeed. Plain
//! id-addressed resources (people, companies, lists) share
//! [`fetch_by_id`].

use actix_web::web;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::IntoParams;

use crate::domain::ports::TmdbError;
use crate::domain::{Error, MediaDetail, MediaType, MediaVideo, TmdbId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::downstream_failure;
use crate::inbound::http::normalize;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_id;

const VIDEOS: &str = "videos";

/// Optional `include` selector for detail endpoints.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DetailsQuery {
    /// Comma-separated extras; only `videos` is recognised.
    #[param(example = "videos")]
    pub include: Option<String>,
}

impl DetailsQuery {
    fn wants_videos(&self) -> bool {
        self.include
            .as_deref()
            .is_some_and(|raw| raw.split(',').any(|part| part.trim() == VIDEOS))
    }
}

/// `{details}` or `{details, videos}`.
#[derive(Debug, Serialize)]
pub struct DetailsResponse {
    pub details: MediaDetail,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub videos: Option<Vec<MediaVideo>>,
}

/// Fetch one record and, on request, its videos.
///
/// `failure` is the endpoint's fixed message for any downstream error.
pub(crate) async fn fetch_details(
    state: &HttpState,
    media_type: MediaType,
    id: TmdbId,
    query: &DetailsQuery,
    failure: &'static str,
) -> ApiResult<DetailsResponse> {
    let fail = |err: TmdbError| -> Error { downstream_failure(failure, &err) };

    let raw = state.catalog.details(media_type, id).await.map_err(fail)?;
    let details = normalize::media_detail(raw, media_type).map_err(fail)?;

    let videos = if query.wants_videos() {
        let raw = state.catalog.videos(media_type, id).await.map_err(fail)?;
        Some(normalize::videos(raw).map_err(fail)?)
    } else {
        None
    };

    Ok(DetailsResponse { details, videos })
}

/// Validate a path id, then relay the upstream record unchanged.
pub(crate) async fn fetch_by_id<F, Fut>(
    raw_id: &str,
    invalid: &'static str,
    failure: &'static str,
    fetch: F,
) -> ApiResult<web::Json<Value>>
where
    F: FnOnce(TmdbId) -> Fut,
    Fut: Future<Output = Result<Value, TmdbError>>,
{
    let id = parse_id(raw_id, invalid)?;
    fetch(id)
        .await
        .map(web::Json)
        .map_err(|err| downstream_failure(failure, &err))
}
