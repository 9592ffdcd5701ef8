//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every endpoint of the inbound HTTP layer, the schema
//! wrappers from [`crate::inbound::http::schemas`] and the session cookie
//! security scheme. The document backs Swagger UI in debug builds and is
//! printed by the `openapi-dump` binary.

use crate::inbound::http::auth::{LoginRequest, SessionResponse};
use crate::inbound::http::schemas::{
    DetailsResponseSchema, ErrorSchema, GenreSchema, MediaDetailSchema, MediaPageSchema,
    MediaSummarySchema, MediaTypeSchema, MediaVideoSchema, UpstreamPayloadSchema,
};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/auth/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Moviebox backend API",
        description = "Movie and TV catalog proxied from TMDB, plus the account actions of a single linked TMDB account.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::auth::login,
        crate::inbound::http::auth::logout,
        crate::inbound::http::auth::current_session,
        crate::inbound::http::trending::trending,
        crate::inbound::http::search::search_multi,
        crate::inbound::http::genres::movie_genres,
        crate::inbound::http::genres::tv_genres,
        crate::inbound::http::movies::popular_movies,
        crate::inbound::http::movies::top_rated_movies,
        crate::inbound::http::movies::now_playing_movies,
        crate::inbound::http::movies::upcoming_movies,
        crate::inbound::http::movies::movie_details,
        crate::inbound::http::tv::popular_tv,
        crate::inbound::http::tv::top_rated_tv,
        crate::inbound::http::tv::on_the_air_tv,
        crate::inbound::http::tv::tv_details,
        crate::inbound::http::discover::discover_movies,
        crate::inbound::http::discover::discover_tv,
        crate::inbound::http::providers::movie_providers,
        crate::inbound::http::providers::tv_providers,
        crate::inbound::http::people::person_details,
        crate::inbound::http::people::person_credits,
        crate::inbound::http::organisations::company_details,
        crate::inbound::http::organisations::network_details,
        crate::inbound::http::lists::list_details,
        crate::inbound::http::lists::create_list,
        crate::inbound::http::lists::add_list_item,
        crate::inbound::http::lists::remove_list_item,
        crate::inbound::http::account::account_details,
        crate::inbound::http::account::favorites,
        crate::inbound::http::account::toggle_favorite,
        crate::inbound::http::account::watchlist,
        crate::inbound::http::account::toggle_watchlist,
        crate::inbound::http::account::rate_media,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        MediaTypeSchema,
        MediaSummarySchema,
        MediaPageSchema,
        GenreSchema,
        MediaDetailSchema,
        MediaVideoSchema,
        DetailsResponseSchema,
        UpstreamPayloadSchema,
        LoginRequest,
        SessionResponse,
    )),
    tags(
        (name = "auth", description = "Caller login and session"),
        (name = "catalog", description = "Trending, search and genre lookups"),
        (name = "movies", description = "Movie lists and details"),
        (name = "tv", description = "TV lists and details"),
        (name = "discover", description = "Filtered discovery"),
        (name = "people", description = "People, companies and networks"),
        (name = "lists", description = "TMDB user lists"),
        (name = "account", description = "Favorites, watchlist and ratings of the linked account"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the registered paths and schema shapes.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("ErrorBody", "error")]
    #[case("MediaSummary", "media_type")]
    #[case("MediaPage", "total_pages")]
    #[case("MediaVideo", "key")]
    #[case("DetailsResponse", "details")]
    fn schemas_expose_wire_fields(#[case] name: &str, #[case] field: &str) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get(name).expect("schema registered");
        assert_object_schema_has_field(schema, field);
    }

    #[rstest]
    #[case("/api/auth/login")]
    #[case("/api/tmdb/trending")]
    #[case("/api/tmdb/movie/{movie_id}")]
    #[case("/api/tmdb/tv/{tv_id}")]
    #[case("/api/tmdb/discover/movie")]
    #[case("/api/tmdb/lists")]
    #[case("/api/tmdb/account/favorites")]
    #[case("/api/tmdb/account/ratings")]
    #[case("/health/ready")]
    fn paths_are_registered(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[test]
    fn session_cookie_scheme_is_declared() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("SessionCookie"));
    }
}
