//! Shared validation helpers for inbound HTTP adapters.
//!
//! Everything here runs before a handler touches a port, so a rejected
//! request never reaches TMDB.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use utoipa::IntoParams;

use crate::domain::{Error, MediaType, TmdbId};

/// Optional `page` query parameter shared by paginated endpoints.
///
/// Kept as raw text so a malformed value maps onto the shared `400` body
/// rather than an extractor failure.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page number. Defaults to 1.
    #[param(value_type = Option<u32>, example = 1)]
    pub page: Option<String>,
}

/// Parse a path identifier, rejecting anything but a positive integer.
///
/// `message` is the endpoint's fixed rejection text, e.g. `"Invalid movie id"`.
pub(crate) fn parse_id(raw: &str, message: &'static str) -> Result<TmdbId, Error> {
    TmdbId::parse(raw).map_err(|err| {
        debug!(value = raw, reason = %err, "rejected identifier");
        Error::invalid_request(message)
    })
}

/// Parse an optional page number; absence means page 1.
pub(crate) fn parse_page(raw: Option<&str>) -> Result<u32, Error> {
    Ok(parse_optional_page(raw)?.unwrap_or(1))
}

/// Parse an optional page number, keeping absence distinct.
pub(crate) fn parse_optional_page(raw: Option<&str>) -> Result<Option<u32>, Error> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    match raw.trim().parse::<u32>() {
        Ok(page) if page > 0 => Ok(Some(page)),
        _ => {
            debug!(value = raw, "rejected page number");
            Err(Error::invalid_request("Invalid page"))
        }
    }
}

/// Parse a `media_type` selector, falling back to `default` when absent.
pub(crate) fn parse_media_type(raw: Option<&str>, default: MediaType) -> Result<MediaType, Error> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|err| {
            debug!(value, reason = %err, "rejected media type");
            Error::invalid_request("media_type must be 'movie' or 'tv'")
        }),
    }
}

/// Return a required parameter exactly as sent, or `message` as a `400`.
///
/// Whitespace-only values count as missing; accepted values keep their
/// surrounding whitespace.
pub(crate) fn required_text(raw: Option<&str>, message: &'static str) -> Result<String, Error> {
    raw.filter(|value| !value.trim().is_empty())
        .map(str::to_owned)
        .ok_or_else(|| Error::invalid_request(message))
}

/// Read a positive integer identifier from a JSON body field.
///
/// Only JSON numbers qualify; strings such as `"550"` are rejected.
pub(crate) fn body_id(value: Option<&Value>) -> Option<TmdbId> {
    value
        .and_then(Value::as_u64)
        .and_then(|id| TmdbId::new(id).ok())
}

/// Read a JSON number from a body field.
pub(crate) fn body_number(value: Option<&Value>) -> Option<f64> {
    value.filter(|value| value.is_number()).and_then(Value::as_f64)
}
