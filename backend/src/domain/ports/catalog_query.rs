//! Driving port for public catalog reads.

use async_trait::async_trait;
use serde_json::Value;

use super::TmdbError;
use crate::domain::{MediaType, MovieList, QueryParams, TimeWindow, TmdbId, TvList};

/// Read-only catalog use-cases.
///
/// Each method performs exactly one upstream call and returns the upstream
/// JSON unchanged; inbound adapters normalise it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogQuery: Send + Sync {
    /// Trending movies, shows and people.
    async fn trending(&self, window: TimeWindow) -> Result<Value, TmdbError>;

    /// One page of a curated movie collection.
    async fn movie_list(&self, list: MovieList, page: u32) -> Result<Value, TmdbError>;

    /// One page of a curated TV collection.
    async fn tv_list(&self, list: TvList, page: u32) -> Result<Value, TmdbError>;

    /// Full record for one movie or show.
    async fn details(&self, media_type: MediaType, id: TmdbId) -> Result<Value, TmdbError>;

    /// Videos attached to one movie or show.
    async fn videos(&self, media_type: MediaType, id: TmdbId) -> Result<Value, TmdbError>;

    /// Streaming and purchase providers for one movie or show.
    async fn watch_providers(&self, media_type: MediaType, id: TmdbId)
    -> Result<Value, TmdbError>;

    /// Filtered discovery; `options` are forwarded verbatim.
    async fn discover(&self, media_type: MediaType, options: QueryParams)
    -> Result<Value, TmdbError>;

    /// Search across movies, shows and people.
    async fn search_multi(&self, query: String, page: Option<u32>) -> Result<Value, TmdbError>;

    /// Genre catalogue for one media type.
    async fn genres(&self, media_type: MediaType) -> Result<Value, TmdbError>;

    /// Person record.
    async fn person(&self, id: TmdbId) -> Result<Value, TmdbError>;

    /// Combined movie and TV credits for one person.
    async fn person_credits(&self, id: TmdbId) -> Result<Value, TmdbError>;

    /// Production company record.
    async fn company(&self, id: TmdbId) -> Result<Value, TmdbError>;

    /// Broadcast network record.
    async fn network(&self, id: TmdbId) -> Result<Value, TmdbError>;

    /// Public user list.
    async fn list(&self, id: TmdbId) -> Result<Value, TmdbError>;
}
