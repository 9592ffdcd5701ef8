//! End-to-end account scenarios: caller sessions, favorites, ratings and
//! list mutations against a recording gateway.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::http::header::CACHE_CONTROL;
use actix_web::test;
use moviebox::domain::ports::TmdbError;
use moviebox::inbound::http::test_utils::{
    ACCOUNT_TOKEN, login_request, recording_state, session_cookie, test_app,
};
use moviebox::test_support::RecordingTmdbGateway;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

fn acknowledged() -> Value {
    json!({"status_code": 1, "status_message": "Success."})
}

macro_rules! signed_in {
    ($app:expr) => {{
        let res = test::call_service($app, login_request().to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
        session_cookie(&res)
    }};
}

#[fixture]
fn gateway() -> RecordingTmdbGateway {
    RecordingTmdbGateway::new()
        .with_response(
            "/account",
            json!({"id": 548, "name": "", "username": "cinephile"}),
        )
        .with_response("/account/548/favorite", acknowledged())
        .with_response("/movie/27205/rating", acknowledged())
        .with_response("/list/8210/add_item", acknowledged())
}

#[rstest]
#[actix_web::test]
async fn favorite_toggle_resolves_the_account_once_then_toggles(gateway: RecordingTmdbGateway) {
    let app = test::init_service(test_app(recording_state(
        Arc::new(gateway.clone()),
        Some(ACCOUNT_TOKEN),
    )))
    .await;
    let cookie = signed_in!(&app);

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/tmdb/account/favorites")
            .cookie(cookie)
            .set_json(json!({"media_type": "movie", "media_id": 27205, "favorite": true}))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert!(
        res.headers()
            .get(CACHE_CONTROL)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.contains("private"))
    );
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, acknowledged());
    assert_eq!(gateway.paths(), vec!["/account", "/account/548/favorite"]);
}

#[rstest]
#[actix_web::test]
async fn rating_given_as_string_is_rejected_without_calls(gateway: RecordingTmdbGateway) {
    let app = test::init_service(test_app(recording_state(
        Arc::new(gateway.clone()),
        Some(ACCOUNT_TOKEN),
    )))
    .await;
    let cookie = signed_in!(&app);

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/tmdb/account/ratings")
            .cookie(cookie)
            .set_json(json!({"mediaType": "movie", "id": 27205, "rating": "8"}))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!({"error": "mediaType, id and rating are required"}));
    assert_eq!(gateway.call_count(), 0);
}

#[rstest]
#[actix_web::test]
async fn numeric_rating_is_posted_as_value(gateway: RecordingTmdbGateway) {
    let app = test::init_service(test_app(recording_state(
        Arc::new(gateway.clone()),
        Some(ACCOUNT_TOKEN),
    )))
    .await;
    let cookie = signed_in!(&app);

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/tmdb/account/ratings")
            .cookie(cookie)
            .set_json(json!({"mediaType": "movie", "id": 27205, "rating": 8.5}))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let calls = gateway.calls();
    assert_eq!(gateway.paths(), vec!["/movie/27205/rating"]);
    assert_eq!(calls[0].method, "POST");
    assert_eq!(calls[0].body, Some(json!({"value": 8.5})));
    assert_eq!(calls[0].param("session_id"), Some(ACCOUNT_TOKEN));
}

#[rstest]
#[case::favorites_read("GET", "/api/tmdb/account/favorites?media_type=movie", None)]
#[case::favorite_toggle(
    "POST",
    "/api/tmdb/account/favorites",
    Some(json!({"media_type": "movie", "media_id": 27205, "favorite": true}))
)]
#[case::watchlist_toggle(
    "POST",
    "/api/tmdb/account/watchlist",
    Some(json!({"media_type": "tv", "media_id": 1399, "watchlist": false}))
)]
#[case::rating(
    "POST",
    "/api/tmdb/account/ratings",
    Some(json!({"mediaType": "movie", "id": 27205, "rating": 7}))
)]
#[case::list_add("PUT", "/api/tmdb/lists", Some(json!({"listId": 8210, "mediaId": 550})))]
#[actix_web::test]
async fn account_actions_without_a_session_are_unauthorised(
    gateway: RecordingTmdbGateway,
    #[case] method: &str,
    #[case] uri: &str,
    #[case] body: Option<Value>,
) {
    let app = test::init_service(test_app(recording_state(
        Arc::new(gateway.clone()),
        Some(ACCOUNT_TOKEN),
    )))
    .await;

    let req = match method {
        "GET" => test::TestRequest::get(),
        "PUT" => test::TestRequest::put(),
        _ => test::TestRequest::post(),
    }
    .uri(uri);
    let req = match body {
        Some(body) => req.set_json(body),
        None => req,
    };
    let res = test::call_service(&app, req.to_request()).await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!({"error": "Unauthorized"}));
    assert_eq!(gateway.call_count(), 0);
}

#[rstest]
#[actix_web::test]
async fn account_resolution_failure_aborts_the_toggle() {
    let gateway = RecordingTmdbGateway::new()
        .with_failure("/account", TmdbError::upstream(401_u16, "Unauthorized"))
        .with_response("/account/548/favorite", acknowledged());
    let app = test::init_service(test_app(recording_state(
        Arc::new(gateway.clone()),
        Some(ACCOUNT_TOKEN),
    )))
    .await;
    let cookie = signed_in!(&app);

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/tmdb/account/favorites")
            .cookie(cookie)
            .set_json(json!({"media_type": "movie", "media_id": 27205, "favorite": true}))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!({"error": "Failed to update favorites"}));
    assert_eq!(gateway.paths(), vec!["/account"]);
}

#[rstest]
#[actix_web::test]
async fn missing_account_token_fails_without_calls(gateway: RecordingTmdbGateway) {
    let app =
        test::init_service(test_app(recording_state(Arc::new(gateway.clone()), None))).await;
    let cookie = signed_in!(&app);

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/tmdb/account/details")
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!({"error": "Failed to fetch account details"}));
    assert_eq!(gateway.call_count(), 0);
}

#[rstest]
#[actix_web::test]
async fn list_item_is_added_with_the_account_token(gateway: RecordingTmdbGateway) {
    let app = test::init_service(test_app(recording_state(
        Arc::new(gateway.clone()),
        Some(ACCOUNT_TOKEN),
    )))
    .await;
    let cookie = signed_in!(&app);

    let res = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/api/tmdb/lists")
            .cookie(cookie)
            .set_json(json!({"listId": 8210, "mediaId": 550}))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let calls = gateway.calls();
    assert_eq!(gateway.paths(), vec!["/list/8210/add_item"]);
    assert_eq!(calls[0].body, Some(json!({"media_id": 550})));
    assert_eq!(calls[0].param("session_id"), Some(ACCOUNT_TOKEN));
}

#[rstest]
#[actix_web::test]
async fn logout_ends_the_caller_session(gateway: RecordingTmdbGateway) {
    let app = test::init_service(test_app(recording_state(
        Arc::new(gateway.clone()),
        Some(ACCOUNT_TOKEN),
    )))
    .await;
    let cookie = signed_in!(&app);

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/logout")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let cleared = res
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(actix_web::cookie::Cookie::into_owned)
        .expect("removal cookie");

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/auth/session")
            .cookie(cleared)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}
