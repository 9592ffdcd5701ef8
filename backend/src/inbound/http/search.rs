//! Multi search across movies, shows and people.

use actix_web::{get, web};
use serde::Deserialize;
use serde_json::Value;
use utoipa::IntoParams;

use crate::domain::MediaType;
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::downstream_failure;
use crate::inbound::http::normalize;
use crate::inbound::http::schemas::{ErrorSchema, UpstreamPayloadSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_optional_page, required_text};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Free text; must not be blank.
    #[param(example = "fight club")]
    pub query: Option<String>,
    /// 1-based page number.
    #[param(value_type = Option<u32>)]
    pub page: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/tmdb/search/multi",
    params(SearchQuery),
    responses(
        (status = 200, description = "Mixed results", body = UpstreamPayloadSchema),
        (status = 400, description = "Missing query", body = ErrorSchema),
        (status = 500, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["catalog"],
    operation_id = "searchMulti",
    security([])
)]
#[get("/search/multi")]
pub async fn search_multi(
    state: web::Data<HttpState>,
    query: web::Query<SearchQuery>,
) -> ApiResult<web::Json<Value>> {
    let text = required_text(query.query.as_deref(), "Query parameter 'query' is required")?;
    let page = parse_optional_page(query.page.as_deref())?;
    let raw = state
        .catalog
        .search_multi(text, page)
        .await
        .map_err(|err| downstream_failure("Failed to search media", &err))?;
    Ok(web::Json(normalize::mixed_page(raw, MediaType::Movie)))
}
