//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **tmdb**: reqwest-backed [`TmdbGateway`](crate::domain::ports::TmdbGateway)
//!
//! Adapters are thin translators between domain values and wire formats. They
//! contain no business logic.

pub mod tmdb;
