//! Driving port for operations acting on the remote TMDB account.

use async_trait::async_trait;
use serde_json::Value;

use super::TmdbError;
use crate::domain::{
    FavoriteToggle, ListItemChange, MediaType, NewList, Rating, WatchlistToggle,
};

/// Account-scoped use-cases.
///
/// Implementations fail with [`TmdbError::Configuration`] when no remote
/// account token is configured. Favorites and watchlist operations resolve
/// the account id first and never issue the scoped call if that fails.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountCollections: Send + Sync {
    /// Remote account profile.
    async fn account_details(&self) -> Result<Value, TmdbError>;

    /// One page of favorite movies or shows.
    async fn favorites(&self, media_type: MediaType, page: u32) -> Result<Value, TmdbError>;

    /// Mark or unmark a favorite.
    async fn set_favorite(&self, toggle: FavoriteToggle) -> Result<Value, TmdbError>;

    /// One page of the watchlist.
    async fn watchlist(&self, media_type: MediaType, page: u32) -> Result<Value, TmdbError>;

    /// Add to or remove from the watchlist.
    async fn set_watchlist(&self, toggle: WatchlistToggle) -> Result<Value, TmdbError>;

    /// Rate a movie or show.
    async fn rate(&self, rating: Rating) -> Result<Value, TmdbError>;

    /// Create a list owned by the account.
    async fn create_list(&self, list: NewList) -> Result<Value, TmdbError>;

    /// Add one title to a list.
    async fn add_to_list(&self, change: ListItemChange) -> Result<Value, TmdbError>;

    /// Remove one title from a list.
    async fn remove_from_list(&self, change: ListItemChange) -> Result<Value, TmdbError>;
}
