//! Domain ports for the hexagonal boundary.
//!
//! Driving ports ([`CatalogQuery`], [`AccountCollections`], [`LoginService`])
//! are called by inbound adapters. The driven port [`TmdbGateway`] is
//! implemented by the outbound reqwest adapter and by test doubles.

mod macros;
pub(crate) use macros::define_port_error;

mod account_collections;
mod catalog_query;
mod login_service;
mod tmdb_gateway;

#[cfg(test)]
pub use account_collections::MockAccountCollections;
pub use account_collections::AccountCollections;
#[cfg(test)]
pub use catalog_query::MockCatalogQuery;
pub use catalog_query::CatalogQuery;
pub use login_service::{ConfiguredLoginService, LoginService, OperatorAccount};
#[cfg(test)]
pub use tmdb_gateway::MockTmdbGateway;
pub use tmdb_gateway::{TmdbError, TmdbGateway};
