//! Catalog and account use-cases backed by the TMDB gateway.
//!
//! The service turns each use-case into exactly one [`TmdbRequest`] (or the
//! resolver's two-step sequence) and returns the upstream JSON unchanged.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::ports::{AccountCollections, CatalogQuery, TmdbError, TmdbGateway};
use super::{
    AccountCollection, AccountResolver, FavoriteToggle, ListItemChange, MediaType, MovieList,
    NewList, QueryParams, Rating, RemoteAccountToken, TimeWindow, TmdbId, TmdbRequest, TmdbRoute,
    TvList, WatchlistToggle,
};

const PAGE_PARAM: &str = "page";

/// Implements [`CatalogQuery`] and [`AccountCollections`] over a gateway.
#[derive(Clone)]
pub struct TmdbCatalogService {
    gateway: Arc<dyn TmdbGateway>,
    resolver: AccountResolver,
    account_token: Option<RemoteAccountToken>,
}

impl TmdbCatalogService {
    /// Build the service. `account_token` may be absent; account operations
    /// then fail with a configuration error.
    #[must_use]
    pub fn new(gateway: Arc<dyn TmdbGateway>, account_token: Option<RemoteAccountToken>) -> Self {
        Self {
            resolver: AccountResolver::new(Arc::clone(&gateway)),
            gateway,
            account_token,
        }
    }

    fn token(&self) -> Result<&RemoteAccountToken, TmdbError> {
        self.account_token
            .as_ref()
            .ok_or_else(|| TmdbError::configuration("TMDB session id is not configured"))
    }

    async fn fetch(&self, route: TmdbRoute) -> Result<Value, TmdbError> {
        self.gateway.call(TmdbRequest::get(route)).await
    }

    async fn account_items(
        &self,
        collection: AccountCollection,
        media_type: MediaType,
        page: u32,
    ) -> Result<Value, TmdbError> {
        let token = self.token()?;
        self.resolver
            .with_account(token, |account| {
                TmdbRequest::get(TmdbRoute::AccountItems {
                    account_id: account.id,
                    collection,
                    media_type,
                })
                .with_param(PAGE_PARAM, page)
            })
            .await
    }

    async fn account_toggle(
        &self,
        collection: AccountCollection,
        body: Value,
    ) -> Result<Value, TmdbError> {
        let token = self.token()?;
        self.resolver
            .with_account(token, |account| {
                TmdbRequest::post(
                    TmdbRoute::AccountToggle {
                        account_id: account.id,
                        collection,
                    },
                    body,
                )
            })
            .await
    }

    async fn session_post(&self, route: TmdbRoute, body: Value) -> Result<Value, TmdbError> {
        let token = self.token()?;
        self.gateway
            .call(TmdbRequest::post(route, body).with_session(token))
            .await
    }
}

#[async_trait]
impl CatalogQuery for TmdbCatalogService {
    async fn trending(&self, window: TimeWindow) -> Result<Value, TmdbError> {
        self.fetch(TmdbRoute::Trending(window)).await
    }

    async fn movie_list(&self, list: MovieList, page: u32) -> Result<Value, TmdbError> {
        self.gateway
            .call(TmdbRequest::get(TmdbRoute::MovieList(list)).with_param(PAGE_PARAM, page))
            .await
    }

    async fn tv_list(&self, list: TvList, page: u32) -> Result<Value, TmdbError> {
        self.gateway
            .call(TmdbRequest::get(TmdbRoute::TvList(list)).with_param(PAGE_PARAM, page))
            .await
    }

    async fn details(&self, media_type: MediaType, id: TmdbId) -> Result<Value, TmdbError> {
        self.fetch(TmdbRoute::Details(media_type, id)).await
    }

    async fn videos(&self, media_type: MediaType, id: TmdbId) -> Result<Value, TmdbError> {
        self.fetch(TmdbRoute::Videos(media_type, id)).await
    }

    async fn watch_providers(
        &self,
        media_type: MediaType,
        id: TmdbId,
    ) -> Result<Value, TmdbError> {
        self.fetch(TmdbRoute::WatchProviders(media_type, id)).await
    }

    async fn discover(
        &self,
        media_type: MediaType,
        options: QueryParams,
    ) -> Result<Value, TmdbError> {
        self.gateway
            .call(TmdbRequest::get(TmdbRoute::Discover(media_type)).with_params(options))
            .await
    }

    async fn search_multi(&self, query: String, page: Option<u32>) -> Result<Value, TmdbError> {
        self.gateway
            .call(
                TmdbRequest::get(TmdbRoute::SearchMulti)
                    .with_param("query", query)
                    .with_opt_param(PAGE_PARAM, page),
            )
            .await
    }

    async fn genres(&self, media_type: MediaType) -> Result<Value, TmdbError> {
        self.fetch(TmdbRoute::Genres(media_type)).await
    }

    async fn person(&self, id: TmdbId) -> Result<Value, TmdbError> {
        self.fetch(TmdbRoute::Person(id)).await
    }

    async fn person_credits(&self, id: TmdbId) -> Result<Value, TmdbError> {
        self.fetch(TmdbRoute::PersonCredits(id)).await
    }

    async fn company(&self, id: TmdbId) -> Result<Value, TmdbError> {
        self.fetch(TmdbRoute::Company(id)).await
    }

    async fn network(&self, id: TmdbId) -> Result<Value, TmdbError> {
        self.fetch(TmdbRoute::Network(id)).await
    }

    async fn list(&self, id: TmdbId) -> Result<Value, TmdbError> {
        self.fetch(TmdbRoute::List(id)).await
    }
}

#[async_trait]
impl AccountCollections for TmdbCatalogService {
    async fn account_details(&self) -> Result<Value, TmdbError> {
        let token = self.token()?;
        self.gateway
            .call(TmdbRequest::get(TmdbRoute::Account).with_session(token))
            .await
    }

    async fn favorites(&self, media_type: MediaType, page: u32) -> Result<Value, TmdbError> {
        self.account_items(AccountCollection::Favorite, media_type, page)
            .await
    }

    async fn set_favorite(&self, toggle: FavoriteToggle) -> Result<Value, TmdbError> {
        self.account_toggle(AccountCollection::Favorite, toggle.to_body())
            .await
    }

    async fn watchlist(&self, media_type: MediaType, page: u32) -> Result<Value, TmdbError> {
        self.account_items(AccountCollection::Watchlist, media_type, page)
            .await
    }

    async fn set_watchlist(&self, toggle: WatchlistToggle) -> Result<Value, TmdbError> {
        self.account_toggle(AccountCollection::Watchlist, toggle.to_body())
            .await
    }

    async fn rate(&self, rating: Rating) -> Result<Value, TmdbError> {
        self.session_post(
            TmdbRoute::Rating(rating.media_type(), rating.media_id()),
            rating.to_body(),
        )
        .await
    }

    async fn create_list(&self, list: NewList) -> Result<Value, TmdbError> {
        self.session_post(TmdbRoute::CreateList, list.to_body()).await
    }

    async fn add_to_list(&self, change: ListItemChange) -> Result<Value, TmdbError> {
        self.session_post(TmdbRoute::ListAddItem(change.list_id), change.to_body())
            .await
    }

    async fn remove_from_list(&self, change: ListItemChange) -> Result<Value, TmdbError> {
        self.session_post(TmdbRoute::ListRemoveItem(change.list_id), change.to_body())
            .await
    }
}

#[cfg(test)]
mod tests;
