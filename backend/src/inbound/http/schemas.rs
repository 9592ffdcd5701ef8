//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their wire shape and exist only for documentation.

use utoipa::ToSchema;

/// Error envelope returned by every failing endpoint.
#[derive(ToSchema)]
#[schema(as = ErrorBody)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ErrorSchema {
    /// Human-readable message.
    #[schema(example = "Invalid movie id")]
    error: String,
}

/// Kind of catalog entry.
#[derive(ToSchema)]
#[schema(as = MediaType)]
pub enum MediaTypeSchema {
    #[schema(rename = "movie")]
    Movie,
    #[schema(rename = "tv")]
    Tv,
}

/// Movie or show as it appears in a result page.
///
/// Unlisted upstream fields are passed through unchanged.
#[derive(ToSchema)]
#[schema(as = MediaSummary)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct MediaSummarySchema {
    #[schema(example = 550)]
    id: u64,
    media_type: MediaTypeSchema,
    #[schema(example = "Fight Club")]
    title: Option<String>,
    name: Option<String>,
    overview: Option<String>,
    #[schema(example = "/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg")]
    poster_path: Option<String>,
    backdrop_path: Option<String>,
    #[schema(example = "1999-10-15")]
    release_date: Option<String>,
    first_air_date: Option<String>,
    vote_average: Option<f64>,
}

/// One page of movies or shows.
#[derive(ToSchema)]
#[schema(as = MediaPage)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct MediaPageSchema {
    results: Vec<MediaSummarySchema>,
    #[schema(example = 1)]
    page: u32,
    total_pages: Option<u32>,
    total_results: Option<u64>,
}

/// Genre tag.
#[derive(ToSchema)]
#[schema(as = Genre)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct GenreSchema {
    #[schema(example = 18)]
    id: u64,
    #[schema(example = "Drama")]
    name: String,
}

/// Full movie or show record.
#[derive(ToSchema)]
#[schema(as = MediaDetail)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct MediaDetailSchema {
    id: u64,
    media_type: MediaTypeSchema,
    title: Option<String>,
    name: Option<String>,
    overview: Option<String>,
    poster_path: Option<String>,
    backdrop_path: Option<String>,
    release_date: Option<String>,
    first_air_date: Option<String>,
    vote_average: Option<f64>,
    runtime: Option<u32>,
    number_of_seasons: Option<u32>,
    tagline: Option<String>,
    genres: Option<Vec<GenreSchema>>,
}

/// Trailer, teaser or clip.
#[derive(ToSchema)]
#[schema(as = MediaVideo)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct MediaVideoSchema {
    id: Option<String>,
    #[schema(example = "SUXWAEX2jlg")]
    key: Option<String>,
    name: Option<String>,
    #[schema(example = "YouTube")]
    site: Option<String>,
    #[schema(example = "Trailer")]
    r#type: Option<String>,
}

/// Detail response; `videos` is present only when requested.
#[derive(ToSchema)]
#[schema(as = DetailsResponse)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct DetailsResponseSchema {
    details: MediaDetailSchema,
    videos: Option<Vec<MediaVideoSchema>>,
}

/// Upstream JSON relayed without reshaping.
#[derive(ToSchema)]
#[schema(as = UpstreamPayload)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct UpstreamPayloadSchema(serde_json::Value);
