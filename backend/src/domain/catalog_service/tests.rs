//! Service behaviour against a recording gateway.

use super::*;
use crate::test_support::RecordingTmdbGateway;
use rstest::{fixture, rstest};
use serde_json::json;

fn id(value: u64) -> TmdbId {
    TmdbId::new(value).expect("positive id")
}

#[fixture]
fn token() -> RemoteAccountToken {
    RemoteAccountToken::new("session-abc").expect("token")
}

fn service(gateway: &RecordingTmdbGateway, token: Option<RemoteAccountToken>) -> TmdbCatalogService {
    TmdbCatalogService::new(Arc::new(gateway.clone()), token)
}

#[rstest]
#[tokio::test]
async fn movie_list_forwards_page() {
    let gateway = RecordingTmdbGateway::new().with_response("/movie/upcoming", json!({"page": 3}));
    let body = service(&gateway, None)
        .movie_list(MovieList::Upcoming, 3)
        .await
        .expect("list succeeds");

    assert_eq!(body, json!({"page": 3}));
    let calls = gateway.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls.first().and_then(|c| c.param("page")), Some("3"));
}

#[rstest]
#[tokio::test]
async fn discover_forwards_options_in_order() {
    let gateway = RecordingTmdbGateway::new().with_response("/discover/movie", json!({}));
    let options: QueryParams = [("with_genres", "28"), ("page", "2")].into_iter().collect();

    service(&gateway, None)
        .discover(MediaType::Movie, options)
        .await
        .expect("discover succeeds");

    let calls = gateway.calls();
    let call = calls.first().expect("one call");
    assert_eq!(
        call.params,
        vec![
            ("with_genres".to_owned(), "28".to_owned()),
            ("page".to_owned(), "2".to_owned())
        ]
    );
}

#[rstest]
#[tokio::test]
async fn search_omits_absent_page() {
    let gateway = RecordingTmdbGateway::new().with_response("/search/multi", json!({}));
    service(&gateway, None)
        .search_multi("heat".to_owned(), None)
        .await
        .expect("search succeeds");

    let calls = gateway.calls();
    let call = calls.first().expect("one call");
    assert_eq!(call.params, vec![("query".to_owned(), "heat".to_owned())]);
}

#[rstest]
#[tokio::test]
async fn favorite_toggle_uses_resolved_account(token: RemoteAccountToken) {
    let gateway = RecordingTmdbGateway::new()
        .with_response("/account", json!({"id": 548, "username": "travis"}))
        .with_response(
            "/account/548/favorite",
            json!({"success": true, "status_code": 1}),
        );
    let toggle = FavoriteToggle {
        media_type: MediaType::Movie,
        media_id: id(27205),
        favorite: true,
    };

    let body = service(&gateway, Some(token))
        .set_favorite(toggle)
        .await
        .expect("toggle succeeds");

    assert_eq!(body, json!({"success": true, "status_code": 1}));
    let calls = gateway.calls();
    assert_eq!(gateway.paths(), vec!["/account", "/account/548/favorite"]);
    let toggle_call = calls.get(1).expect("scoped call");
    assert_eq!(toggle_call.method, "POST");
    assert_eq!(toggle_call.param("session_id"), Some("session-abc"));
    assert_eq!(
        toggle_call.body,
        Some(json!({"media_type": "movie", "media_id": 27205, "favorite": true}))
    );
}

#[rstest]
#[tokio::test]
async fn watchlist_listing_is_not_sent_when_lookup_fails(token: RemoteAccountToken) {
    let gateway = RecordingTmdbGateway::new()
        .with_failure("/account", TmdbError::upstream(401_u16, "Unauthorized"));

    let err = service(&gateway, Some(token))
        .watchlist(MediaType::Tv, 1)
        .await
        .expect_err("lookup failure propagates");

    assert_eq!(err, TmdbError::upstream(401_u16, "Unauthorized"));
    assert_eq!(gateway.paths(), vec!["/account"]);
}

#[rstest]
#[tokio::test]
async fn rating_posts_value_without_account_lookup(token: RemoteAccountToken) {
    let gateway =
        RecordingTmdbGateway::new().with_response("/tv/1399/rating", json!({"success": true}));
    let rating = Rating::new(MediaType::Tv, id(1399), 9.0).expect("rating");

    service(&gateway, Some(token))
        .rate(rating)
        .await
        .expect("rating succeeds");

    let calls = gateway.calls();
    assert_eq!(gateway.paths(), vec!["/tv/1399/rating"]);
    assert_eq!(calls.first().and_then(|c| c.body.clone()), Some(json!({"value": 9.0})));
}

#[rstest]
#[case::favorites(true)]
#[case::list(false)]
#[tokio::test]
async fn missing_token_is_a_configuration_error(#[case] favorites: bool) {
    let gateway = RecordingTmdbGateway::new();
    let svc = service(&gateway, None);
    let result = if favorites {
        svc.favorites(MediaType::Movie, 1).await
    } else {
        svc.add_to_list(ListItemChange {
            list_id: id(8),
            media_id: id(550),
        })
        .await
    };

    assert!(result.expect_err("must fail").is_configuration());
    assert_eq!(gateway.call_count(), 0);
}
