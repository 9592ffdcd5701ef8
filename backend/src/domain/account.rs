//! Account-scoped payloads: favorites, watchlist, ratings and lists.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::{MediaType, TmdbId};

/// Remote account resolved from the session token.
///
/// Only the fields the backend needs are decoded; the id is what scopes
/// favorites and watchlist routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountIdentity {
    /// Numeric account id.
    pub id: u64,
    /// Display name, often empty upstream.
    #[serde(default)]
    pub name: Option<String>,
    /// Account username.
    #[serde(default)]
    pub username: String,
}

/// Mark or unmark a title as a favorite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FavoriteToggle {
    pub media_type: MediaType,
    pub media_id: TmdbId,
    pub favorite: bool,
}

impl FavoriteToggle {
    /// Upstream request body.
    #[must_use]
    pub fn to_body(&self) -> Value {
        json!({
            "media_type": self.media_type,
            "media_id": self.media_id,
            "favorite": self.favorite,
        })
    }
}

/// Add a title to, or remove it from, the watchlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchlistToggle {
    pub media_type: MediaType,
    pub media_id: TmdbId,
    pub watchlist: bool,
}

impl WatchlistToggle {
    /// Upstream request body.
    #[must_use]
    pub fn to_body(&self) -> Value {
        json!({
            "media_type": self.media_type,
            "media_id": self.media_id,
            "watchlist": self.watchlist,
        })
    }
}

/// Rating validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("rating must be a finite number")]
pub struct RatingValidationError;

/// Rating submitted for one title.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rating {
    media_type: MediaType,
    media_id: TmdbId,
    value: f64,
}

impl Rating {
    /// Build a rating; the value must be finite.
    pub fn new(
        media_type: MediaType,
        media_id: TmdbId,
        value: f64,
    ) -> Result<Self, RatingValidationError> {
        if !value.is_finite() {
            return Err(RatingValidationError);
        }
        Ok(Self {
            media_type,
            media_id,
            value,
        })
    }

    /// Rated media type.
    #[must_use]
    pub const fn media_type(&self) -> MediaType {
        self.media_type
    }

    /// Rated title.
    #[must_use]
    pub const fn media_id(&self) -> TmdbId {
        self.media_id
    }

    /// Upstream request body, `{"value": <rating>}`.
    #[must_use]
    pub fn to_body(&self) -> Value {
        json!({ "value": self.value })
    }
}

/// New user list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewList {
    name: String,
    description: Option<String>,
    language: Option<String>,
}

/// List validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("list name must not be empty")]
pub struct NewListValidationError;

impl NewList {
    /// Build a list request; the name must be non-blank.
    pub fn new(
        name: &str,
        description: Option<String>,
        language: Option<String>,
    ) -> Result<Self, NewListValidationError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(NewListValidationError);
        }
        Ok(Self {
            name: trimmed.to_owned(),
            description,
            language,
        })
    }

    /// List name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Upstream request body; absent optional fields are omitted.
    #[must_use]
    pub fn to_body(&self) -> Value {
        let mut body = json!({ "name": self.name });
        if let Some(map) = body.as_object_mut() {
            if let Some(description) = &self.description {
                map.insert("description".to_owned(), json!(description));
            }
            if let Some(language) = &self.language {
                map.insert("language".to_owned(), json!(language));
            }
        }
        body
    }
}

/// Add or remove one title on a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListItemChange {
    pub list_id: TmdbId,
    pub media_id: TmdbId,
}

impl ListItemChange {
    /// Upstream request body, `{"media_id": <id>}`.
    #[must_use]
    pub fn to_body(&self) -> Value {
        json!({ "media_id": self.media_id })
    }
}
