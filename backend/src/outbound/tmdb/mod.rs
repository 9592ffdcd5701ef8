//! TMDB HTTP adapter.

mod http_gateway;

pub use http_gateway::{DEFAULT_BASE_URL, HttpTmdbGateway};
