//! Two-step account resolution.
//!
//! TMDB scopes favorites and watchlist routes by numeric account id, but the
//! backend only holds a session token. The resolver looks the account up on
//! every call and only then builds and sends the scoped request.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use super::ports::{TmdbError, TmdbGateway};
use super::{AccountIdentity, RemoteAccountToken, TmdbRequest, TmdbRoute};

/// Resolves the remote account before account-scoped calls.
#[derive(Clone)]
pub struct AccountResolver {
    gateway: Arc<dyn TmdbGateway>,
}

impl AccountResolver {
    /// Build a resolver over `gateway`.
    #[must_use]
    pub fn new(gateway: Arc<dyn TmdbGateway>) -> Self {
        Self { gateway }
    }

    /// Look up the account behind `token`.
    pub async fn resolve(&self, token: &RemoteAccountToken) -> Result<AccountIdentity, TmdbError> {
        let raw = self
            .gateway
            .call(TmdbRequest::get(TmdbRoute::Account).with_session(token))
            .await?;
        serde_json::from_value(raw)
            .map_err(|err| TmdbError::decode(format!("account payload: {err}")))
    }

    /// Resolve the account, then send the request `build` makes for it.
    ///
    /// The scoped request is never sent when resolution fails; that failure
    /// is returned unchanged.
    pub async fn with_account<F>(
        &self,
        token: &RemoteAccountToken,
        build: F,
    ) -> Result<Value, TmdbError>
    where
        F: FnOnce(&AccountIdentity) -> TmdbRequest + Send,
    {
        let account = self.resolve(token).await?;
        debug!(account_id = account.id, "resolved TMDB account");
        let request = build(&account).with_session(token);
        self.gateway.call(request).await
    }
}
