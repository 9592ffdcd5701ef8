//! User lists: public lookup plus create, add and remove.
//!
//! ```text
//! GET    /api/tmdb/lists/{listId}
//! POST   /api/tmdb/lists {"name":"Heist films","description":"..."}
//! PUT    /api/tmdb/lists {"listId":8123,"mediaId":550}
//! DELETE /api/tmdb/lists {"listId":8123,"mediaId":550}
//! ```
//!
//! Mutations validate the body first, then require a caller session.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::Deserialize;
use serde_json::Value;

use crate::domain::{Error, ListItemChange, NewList};
use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::private_json;
use crate::inbound::http::details::fetch_by_id;
use crate::inbound::http::error::downstream_failure;
use crate::inbound::http::schemas::{ErrorSchema, UpstreamPayloadSchema};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::body_id;

const ITEM_FIELDS_REQUIRED: &str = "listId and mediaId are required";

/// Body for `POST /api/tmdb/lists`.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateListRequest {
    #[schema(example = "Heist films")]
    pub name: Option<String>,
    pub description: Option<String>,
    #[schema(example = "en")]
    pub language: Option<String>,
}

impl TryFrom<CreateListRequest> for NewList {
    type Error = Error;

    fn try_from(value: CreateListRequest) -> Result<Self, Self::Error> {
        NewList::new(
            value.name.as_deref().unwrap_or_default(),
            value.description,
            value.language,
        )
        .map_err(|_| Error::invalid_request("name is required"))
    }
}

/// Body for adding or removing a list item.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListItemRequest {
    #[schema(value_type = Option<u64>, example = 8123)]
    pub list_id: Option<Value>,
    #[schema(value_type = Option<u64>, example = 550)]
    pub media_id: Option<Value>,
}

impl TryFrom<&ListItemRequest> for ListItemChange {
    type Error = Error;

    fn try_from(value: &ListItemRequest) -> Result<Self, Self::Error> {
        match (body_id(value.list_id.as_ref()), body_id(value.media_id.as_ref())) {
            (Some(list_id), Some(media_id)) => Ok(Self { list_id, media_id }),
            _ => Err(Error::invalid_request(ITEM_FIELDS_REQUIRED)),
        }
    }
}

/// Public list with its items.
#[utoipa::path(
    get,
    path = "/api/tmdb/lists/{list_id}",
    params(("list_id" = u64, Path, description = "TMDB list id")),
    responses(
        (status = 200, description = "List", body = UpstreamPayloadSchema),
        (status = 400, description = "Invalid list id", body = ErrorSchema),
        (status = 500, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["lists"],
    operation_id = "listDetails",
    security([])
)]
#[get("/lists/{list_id:[^/]*}")]
pub async fn list_details(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Value>> {
    fetch_by_id(&path, "Invalid list id", "Failed to fetch list", |id| {
        state.catalog.list(id)
    })
    .await
}

#[utoipa::path(
    post,
    path = "/api/tmdb/lists",
    request_body = CreateListRequest,
    responses(
        (status = 200, description = "Upstream acknowledgement", body = UpstreamPayloadSchema),
        (status = 400, description = "Missing name", body = ErrorSchema),
        (status = 401, description = "No caller session", body = ErrorSchema),
        (status = 500, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["lists"],
    operation_id = "createList"
)]
#[post("/lists")]
pub async fn create_list(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CreateListRequest>,
) -> ApiResult<HttpResponse> {
    let list = NewList::try_from(payload.into_inner())?;
    session.require_caller()?;
    let ack = state
        .account
        .create_list(list)
        .await
        .map_err(|err| downstream_failure("Failed to create list", &err))?;
    Ok(private_json(&ack))
}

#[utoipa::path(
    put,
    path = "/api/tmdb/lists",
    request_body = ListItemRequest,
    responses(
        (status = 200, description = "Upstream acknowledgement", body = UpstreamPayloadSchema),
        (status = 400, description = "Missing ids", body = ErrorSchema),
        (status = 401, description = "No caller session", body = ErrorSchema),
        (status = 500, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["lists"],
    operation_id = "addListItem"
)]
#[put("/lists")]
pub async fn add_list_item(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<ListItemRequest>,
) -> ApiResult<HttpResponse> {
    let change = ListItemChange::try_from(&*payload)?;
    session.require_caller()?;
    let ack = state
        .account
        .add_to_list(change)
        .await
        .map_err(|err| downstream_failure("Failed to add to list", &err))?;
    Ok(private_json(&ack))
}

#[utoipa::path(
    delete,
    path = "/api/tmdb/lists",
    request_body = ListItemRequest,
    responses(
        (status = 200, description = "Upstream acknowledgement", body = UpstreamPayloadSchema),
        (status = 400, description = "Missing ids", body = ErrorSchema),
        (status = 401, description = "No caller session", body = ErrorSchema),
        (status = 500, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["lists"],
    operation_id = "removeListItem"
)]
#[delete("/lists")]
pub async fn remove_list_item(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<ListItemRequest>,
) -> ApiResult<HttpResponse> {
    let change = ListItemChange::try_from(&*payload)?;
    session.require_caller()?;
    let ack = state
        .account
        .remove_from_list(change)
        .await
        .map_err(|err| downstream_failure("Failed to remove from list", &err))?;
    Ok(private_json(&ack))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::inbound::http::test_utils::{
        ACCOUNT_TOKEN, login_request, recording_state, session_cookie, test_app,
    };
    use crate::test_support::RecordingTmdbGateway;
    use actix_web::cookie::Cookie;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::json;
    use std::sync::Arc;

    fn request(method: &str, body: Value, cookie: Option<Cookie<'static>>) -> actix_test::TestRequest {
        let builder = match method {
            "POST" => actix_test::TestRequest::post(),
            "PUT" => actix_test::TestRequest::put(),
            _ => actix_test::TestRequest::delete(),
        };
        let builder = builder.uri("/api/tmdb/lists").set_json(body);
        match cookie {
            Some(cookie) => builder.cookie(cookie),
            None => builder,
        }
    }

    #[rstest]
    #[case("PUT", "/list/8123/add_item")]
    #[case("DELETE", "/list/8123/remove_item")]
    #[actix_web::test]
    async fn item_changes_post_with_the_session(#[case] method: &str, #[case] upstream: &str) {
        let gateway = RecordingTmdbGateway::new()
            .with_response(upstream, json!({"status_code": 12, "success": true}));
        let app = actix_test::init_service(test_app(recording_state(
            Arc::new(gateway.clone()),
            Some(ACCOUNT_TOKEN),
        )))
        .await;
        let signed_in = actix_test::call_service(&app, login_request().to_request()).await;
        let cookie = session_cookie(&signed_in);

        let res = actix_test::call_service(
            &app,
            request(method, json!({"listId": 8123, "mediaId": 550}), Some(cookie)).to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
        let calls = gateway.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, "POST");
        assert_eq!(calls[0].path, upstream);
        assert_eq!(calls[0].param("session_id"), Some(ACCOUNT_TOKEN));
        assert_eq!(calls[0].body, Some(json!({"media_id": 550})));
    }

    #[rstest]
    #[case("PUT", json!({"listId": 8123}))]
    #[case("DELETE", json!({"mediaId": 550}))]
    #[case("PUT", json!({"listId": "8123", "mediaId": 550}))]
    #[case("DELETE", json!({"listId": 0, "mediaId": 550}))]
    #[actix_web::test]
    async fn missing_ids_are_rejected_before_auth(#[case] method: &str, #[case] body: Value) {
        let gateway = RecordingTmdbGateway::new();
        let app = actix_test::init_service(test_app(recording_state(
            Arc::new(gateway.clone()),
            Some(ACCOUNT_TOKEN),
        )))
        .await;

        let res = actix_test::call_service(&app, request(method, body, None).to_request()).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body, json!({"error": ITEM_FIELDS_REQUIRED}));
        assert_eq!(gateway.call_count(), 0);
    }

    #[rstest]
    #[case("POST", json!({"name": "Heist films"}))]
    #[case("PUT", json!({"listId": 8123, "mediaId": 550}))]
    #[case("DELETE", json!({"listId": 8123, "mediaId": 550}))]
    #[actix_web::test]
    async fn mutations_require_a_caller(#[case] method: &str, #[case] body: Value) {
        let gateway = RecordingTmdbGateway::new();
        let app = actix_test::init_service(test_app(recording_state(
            Arc::new(gateway.clone()),
            Some(ACCOUNT_TOKEN),
        )))
        .await;

        let res = actix_test::call_service(&app, request(method, body, None).to_request()).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(gateway.call_count(), 0);
    }

    #[rstest]
    #[actix_web::test]
    async fn create_list_forwards_optional_fields() {
        let gateway = RecordingTmdbGateway::new()
            .with_response("/list", json!({"list_id": 8123, "success": true}));
        let app = actix_test::init_service(test_app(recording_state(
            Arc::new(gateway.clone()),
            Some(ACCOUNT_TOKEN),
        )))
        .await;
        let signed_in = actix_test::call_service(&app, login_request().to_request()).await;
        let cookie = session_cookie(&signed_in);

        let res = actix_test::call_service(
            &app,
            request("POST", json!({"name": " Heist films ", "language": "en"}), Some(cookie))
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["list_id"], json!(8123));
        assert_eq!(
            gateway.calls()[0].body,
            Some(json!({"name": "Heist films", "language": "en"}))
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn blank_name_is_rejected() {
        let gateway = RecordingTmdbGateway::new();
        let app = actix_test::init_service(test_app(recording_state(
            Arc::new(gateway.clone()),
            Some(ACCOUNT_TOKEN),
        )))
        .await;

        let res = actix_test::call_service(
            &app,
            request("POST", json!({"name": "  "}), None).to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(gateway.call_count(), 0);
    }

    #[rstest]
    #[case("/api/tmdb/lists/0")]
    #[case("/api/tmdb/lists/abc")]
    #[case("/api/tmdb/lists/-5")]
    #[actix_web::test]
    async fn invalid_list_ids_are_rejected(#[case] uri: &str) {
        let gateway = RecordingTmdbGateway::new();
        let app = actix_test::init_service(test_app(recording_state(
            Arc::new(gateway.clone()),
            None,
        )))
        .await;

        let res =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                .await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body, json!({"error": "Invalid list id"}));
        assert_eq!(gateway.call_count(), 0);
    }
}
