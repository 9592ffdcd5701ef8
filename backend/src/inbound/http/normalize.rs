//! Response shaping for upstream media payloads.
//!
//! Every movie or show a client sees carries a `media_type`. Records that
//! already name one (including `person` results from mixed searches) keep
//! it; the rest are inferred from `first_air_date` or the route's default.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::ports::TmdbError;
use crate::domain::{MediaDetail, MediaSummary, MediaType, MediaVideo, Paged, VideoList};

const MEDIA_TYPE: &str = "media_type";
const FIRST_AIR_DATE: &str = "first_air_date";
const RESULTS: &str = "results";

/// Tag one record in place.
pub(crate) fn tag_media_type(record: &mut Value, default: MediaType) {
    let Some(map) = record.as_object_mut() else {
        return;
    };
    if map.get(MEDIA_TYPE).is_some_and(Value::is_string) {
        return;
    }
    let has_first_air_date = map.get(FIRST_AIR_DATE).is_some_and(|value| !value.is_null());
    let kind = MediaType::infer(None, has_first_air_date, default);
    map.insert(MEDIA_TYPE.to_owned(), Value::from(kind.as_str()));
}

/// Tag every entry of a paged payload's `results` array in place.
pub(crate) fn tag_results(page: &mut Value, default: MediaType) {
    if let Some(results) = page.get_mut(RESULTS).and_then(Value::as_array_mut) {
        for record in results {
            tag_media_type(record, default);
        }
    }
}

/// Tag a mixed payload (trending, search) without narrowing its shape.
pub(crate) fn mixed_page(mut raw: Value, default: MediaType) -> Value {
    tag_results(&mut raw, default);
    raw
}

/// Decode a page of movies or shows.
pub(crate) fn media_page(
    mut raw: Value,
    default: MediaType,
) -> Result<Paged<MediaSummary>, TmdbError> {
    tag_results(&mut raw, default);
    decode(raw)
}

/// Decode a single movie or show record.
pub(crate) fn media_detail(mut raw: Value, kind: MediaType) -> Result<MediaDetail, TmdbError> {
    tag_media_type(&mut raw, kind);
    decode(raw)
}

/// Decode an upstream video listing into its entries.
pub(crate) fn videos(raw: Value) -> Result<Vec<MediaVideo>, TmdbError> {
    decode::<VideoList>(raw).map(|list| list.results)
}

fn decode<T: DeserializeOwned>(raw: Value) -> Result<T, TmdbError> {
    serde_json::from_value(raw).map_err(|err| TmdbError::decode(err.to_string()))
}
