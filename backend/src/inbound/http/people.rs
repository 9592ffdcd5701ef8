//! Person details and combined credits.

use actix_web::{get, web};
use serde_json::Value;

use crate::inbound::http::ApiResult;
use crate::inbound::http::details::fetch_by_id;
use crate::inbound::http::schemas::{ErrorSchema, UpstreamPayloadSchema};
use crate::inbound::http::state::HttpState;

const INVALID_PERSON_ID: &str = "Invalid person id";

#[utoipa::path(
    get,
    path = "/api/tmdb/people/{person_id}",
    params(("person_id" = u64, Path, description = "TMDB person id")),
    responses(
        (status = 200, description = "Person", body = UpstreamPayloadSchema),
        (status = 400, description = "Invalid person id", body = ErrorSchema),
        (status = 500, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["people"],
    operation_id = "personDetails",
    security([])
)]
#[get("/people/{person_id:[^/]*}")]
pub async fn person_details(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Value>> {
    fetch_by_id(&path, INVALID_PERSON_ID, "Failed to fetch person details", |id| {
        state.catalog.person(id)
    })
    .await
}

/// Movie and TV credits in one payload, cast and crew.
#[utoipa::path(
    get,
    path = "/api/tmdb/people/{person_id}/credits",
    params(("person_id" = u64, Path, description = "TMDB person id")),
    responses(
        (status = 200, description = "Combined credits", body = UpstreamPayloadSchema),
        (status = 400, description = "Invalid person id", body = ErrorSchema),
        (status = 500, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["people"],
    operation_id = "personCredits",
    security([])
)]
#[get("/people/{person_id:[^/]*}/credits")]
pub async fn person_credits(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Value>> {
    fetch_by_id(&path, INVALID_PERSON_ID, "Failed to fetch person credits", |id| {
        state.catalog.person_credits(id)
    })
    .await
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
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
    #[case("/api/tmdb/people/287", "/person/287")]
    #[case("/api/tmdb/people/287/credits", "/person/287/combined_credits")]
    #[actix_web::test]
    async fn person_routes_relay_upstream(#[case] uri: &str, #[case] upstream: &str) {
        let payload = json!({"id": 287, "cast": [{"id": 550, "media_type": "movie"}]});
        let gateway = RecordingTmdbGateway::new().with_response(upstream, payload.clone());

        let (status, body) = call(&gateway, uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, payload);
        assert_eq!(gateway.paths(), vec![upstream]);
    }

    #[rstest]
    #[case("/api/tmdb/people/0")]
    #[case("/api/tmdb/people/abc/credits")]
    #[case("/api/tmdb/people//credits")]
    #[case("/api/tmdb/people/-5")]
    #[actix_web::test]
    async fn invalid_person_ids_are_rejected(#[case] uri: &str) {
        let gateway = RecordingTmdbGateway::new();

        let (status, body) = call(&gateway, uri).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Invalid person id"}));
        assert_eq!(gateway.call_count(), 0);
    }
}
