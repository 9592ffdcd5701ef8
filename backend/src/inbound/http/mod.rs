//! HTTP inbound adapter exposing the `/api` REST surface.
//!
//! [`configure`] registers every handler relative to the `/api` scope; the
//! caller wraps that scope with the session middleware.

pub mod account;
pub mod auth;
pub mod cache_control;
pub mod details;
pub mod discover;
pub mod error;
pub mod genres;
pub mod health;
pub mod lists;
pub mod movies;
mod normalize;
pub mod organisations;
pub mod people;
pub mod providers;
pub mod schemas;
pub mod search;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;
pub mod trending;
pub mod tv;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

/// JSON body extractor settings routed through the shared error envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(error::json_error_handler)
}

/// Query string extractor settings routed through the shared error envelope.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(error::query_error_handler)
}

/// Path extractor settings routed through the shared error envelope.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(error::path_error_handler)
}

/// Register the caller-session and TMDB routes.
///
/// Static TV list routes are registered ahead of `/tv/{id}` so they never
/// parse as identifiers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .app_data(path_config())
        .service(auth::login)
        .service(auth::logout)
        .service(auth::current_session)
        .service(
            web::scope("/tmdb")
                .service(trending::trending)
                .service(movies::popular_movies)
                .service(movies::top_rated_movies)
                .service(movies::now_playing_movies)
                .service(movies::upcoming_movies)
                .service(movies::movie_details)
                .service(tv::popular_tv)
                .service(tv::top_rated_tv)
                .service(tv::on_the_air_tv)
                .service(tv::tv_details)
                .service(discover::discover_movies)
                .service(discover::discover_tv)
                .service(search::search_multi)
                .service(genres::movie_genres)
                .service(genres::tv_genres)
                .service(people::person_details)
                .service(people::person_credits)
                .service(organisations::company_details)
                .service(organisations::network_details)
                .service(providers::movie_providers)
                .service(providers::tv_providers)
                .service(lists::list_details)
                .service(lists::create_list)
                .service(lists::add_list_item)
                .service(lists::remove_list_item)
                .service(account::account_details)
                .service(account::favorites)
                .service(account::toggle_favorite)
                .service(account::watchlist)
                .service(account::toggle_watchlist)
                .service(account::rate_media),
        );
}
