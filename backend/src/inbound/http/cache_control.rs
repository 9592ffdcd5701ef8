//! Shared cache-control policies for HTTP handlers.

use actix_web::HttpResponse;
use serde::Serialize;

/// Account-scoped responses must always be revalidated before reuse.
pub const PRIVATE_NO_CACHE_MUST_REVALIDATE: &str = "private, no-cache, must-revalidate";

/// Build the standard cache-control header tuple for private API responses.
pub const fn private_no_cache_header() -> (&'static str, &'static str) {
    ("Cache-Control", PRIVATE_NO_CACHE_MUST_REVALIDATE)
}

/// `200 OK` JSON response that shared caches must not store.
pub(crate) fn private_json<T: Serialize>(body: &T) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(private_no_cache_header())
        .json(body)
}
