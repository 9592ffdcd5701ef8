//! Domain model for the TMDB catalog.
//!
//! Purpose: describe upstream calls as typed values ([`TmdbRequest`]), hold
//! credentials explicitly, and implement the catalog and account use-cases
//! behind ports so adapters stay thin.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure envelope.
//! - TmdbRequest / TmdbRoute / QueryParams: logical upstream requests.
//! - Credentials / ApiKey / RemoteAccountToken: upstream secrets.
//! - CallerSession / LoginCredentials: the local caller.
//! - AccountResolver / TmdbCatalogService: use-case implementations.

pub mod account;
pub mod auth;
pub mod catalog_service;
pub mod credentials;
pub mod error;
pub mod ids;
pub mod media;
pub mod ports;
pub mod request;
pub mod resolver;
pub mod trace_id;

pub use self::account::{
    AccountIdentity, FavoriteToggle, ListItemChange, NewList, NewListValidationError, Rating,
    RatingValidationError, WatchlistToggle,
};
pub use self::auth::{CallerSession, LoginCredentials, LoginValidationError};
pub use self::catalog_service::TmdbCatalogService;
pub use self::credentials::{ApiKey, CredentialError, Credentials, RemoteAccountToken};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::ids::{IdValidationError, TmdbId};
pub use self::media::{
    Genre, IMAGE_BASE_URL, ImageSize, MediaDetail, MediaSummary, MediaType, MediaTypeParseError,
    MediaVideo, Paged, VideoList, image_url,
};
pub use self::request::{
    API_KEY_PARAM, AccountCollection, HttpMethod, MovieList, QueryParams, QueryValue,
    RESERVED_PARAMS, SESSION_ID_PARAM, TimeWindow, TmdbRequest, TmdbRoute, TvList,
};
pub use self::resolver::AccountResolver;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
