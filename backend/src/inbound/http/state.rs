//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{AccountCollections, CatalogQuery, LoginService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub catalog: Arc<dyn CatalogQuery>,
    pub account: Arc<dyn AccountCollections>,
}

impl HttpState {
    /// Bundle the ports handlers call.
    pub fn new(
        login: Arc<dyn LoginService>,
        catalog: Arc<dyn CatalogQuery>,
        account: Arc<dyn AccountCollections>,
    ) -> Self {
        Self {
            login,
            catalog,
            account,
        }
    }

    /// Build state where one service backs both catalog and account ports.
    pub fn from_service<S>(login: Arc<dyn LoginService>, service: Arc<S>) -> Self
    where
        S: CatalogQuery + AccountCollections + 'static,
    {
        Self {
            login,
            catalog: service.clone(),
            account: service,
        }
    }
}
