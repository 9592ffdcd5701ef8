//! Production company and TV network lookups.

use actix_web::{get, web};
use serde_json::Value;

use crate::inbound::http::ApiResult;
use crate::inbound::http::details::fetch_by_id;
use crate::inbound::http::schemas::{ErrorSchema, UpstreamPayloadSchema};
use crate::inbound::http::state::HttpState;

#[utoipa::path(
    get,
    path = "/api/tmdb/companies/{company_id}",
    params(("company_id" = u64, Path, description = "TMDB company id")),
    responses(
        (status = 200, description = "Company", body = UpstreamPayloadSchema),
        (status = 400, description = "Invalid company id", body = ErrorSchema),
        (status = 500, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["catalog"],
    operation_id = "companyDetails",
    security([])
)]
#[get("/companies/{company_id:[^/]*}")]
pub async fn company_details(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Value>> {
    fetch_by_id(
        &path,
        "Invalid company id",
        "Failed to fetch company details",
        |id| state.catalog.company(id),
    )
    .await
}

#[utoipa::path(
    get,
    path = "/api/tmdb/networks/{network_id}",
    params(("network_id" = u64, Path, description = "TMDB network id")),
    responses(
        (status = 200, description = "Network", body = UpstreamPayloadSchema),
        (status = 400, description = "Invalid network id", body = ErrorSchema),
        (status = 500, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["catalog"],
    operation_id = "networkDetails",
    security([])
)]
#[get("/networks/{network_id:[^/]*}")]
pub async fn network_details(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Value>> {
    fetch_by_id(
        &path,
        "Invalid network id",
        "Failed to fetch network details",
        |id| state.catalog.network(id),
    )
    .await
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ports::TmdbError;
    use crate::inbound::http::test_utils::{recording_state, test_app};
    use crate::test_support::RecordingTmdbGateway;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::json;
    use std::sync::Arc;

    async fn call(gateway: &RecordingTmdbGateway, uri: &str) -> (StatusCode, Value) {
        let app = actix_test::init_service(test_app(recording_state(
            Arc::new(gateway.clone()),
            None,
        )))
        .await;
        let res =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                .await;
        let status = res.status();
        (status, actix_test::read_body_json(res).await)
    }

    #[rstest]
    #[case("/api/tmdb/companies/420", "/company/420")]
    #[case("/api/tmdb/networks/213", "/network/213")]
    #[actix_web::test]
    async fn lookups_relay_upstream(#[case] uri: &str, #[case] upstream: &str) {
        let gateway =
            RecordingTmdbGateway::new().with_response(upstream, json!({"id": 1, "name": "X"}));

        let (status, body) = call(&gateway, uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], json!("X"));
    }

    #[rstest]
    #[case("/api/tmdb/companies/0", "Invalid company id")]
    #[case("/api/tmdb/companies/", "Invalid company id")]
    #[case("/api/tmdb/networks/abc", "Invalid network id")]
    #[case("/api/tmdb/networks/-5", "Invalid network id")]
    #[actix_web::test]
    async fn invalid_ids_are_rejected(#[case] uri: &str, #[case] message: &str) {
        let gateway = RecordingTmdbGateway::new();

        let (status, body) = call(&gateway, uri).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": message}));
        assert_eq!(gateway.call_count(), 0);
    }

    #[rstest]
    #[actix_web::test]
    async fn decode_failure_uses_the_lookup_message() {
        let gateway = RecordingTmdbGateway::new()
            .with_failure("/network/213", TmdbError::decode("expected value"));

        let (status, body) = call(&gateway, "/api/tmdb/networks/213").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Failed to fetch network details"}));
    }
}
