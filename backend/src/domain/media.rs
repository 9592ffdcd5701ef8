//! Media records returned by the catalog.
//!
//! Records keep every upstream field: the typed fields are the ones the
//! backend reasons about, everything else rides along in `extra`.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Base URL of the TMDB image CDN.
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

const UNKNOWN_TITLE: &str = "Unknown";

/// Kind of catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// Feature film.
    Movie,
    /// Television series.
    Tv,
}

/// Raised when a caller-supplied media type is not `movie` or `tv`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("media type must be 'movie' or 'tv', got '{0}'")]
pub struct MediaTypeParseError(pub String);

impl MediaType {
    /// Wire value and upstream path segment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Tv => "tv",
        }
    }

    /// Account collection segment (`movies` or `tv`).
    #[must_use]
    pub const fn collection_segment(self) -> &'static str {
        match self {
            Self::Movie => "movies",
            Self::Tv => "tv",
        }
    }

    /// Decide the media type of an upstream record.
    ///
    /// An explicit upstream value wins; otherwise a `first_air_date` marks a
    /// show; otherwise the route's default applies.
    ///
    /// # Examples
    /// ```
    /// use moviebox::domain::MediaType;
    ///
    /// assert_eq!(MediaType::infer(None, true, MediaType::Movie), MediaType::Tv);
    /// assert_eq!(
    ///     MediaType::infer(Some(MediaType::Movie), true, MediaType::Tv),
    ///     MediaType::Movie
    /// );
    /// ```
    #[must_use]
    pub const fn infer(
        explicit: Option<Self>,
        has_first_air_date: bool,
        default: Self,
    ) -> Self {
        match explicit {
            Some(kind) => kind,
            None if has_first_air_date => Self::Tv,
            None => default,
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = MediaTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "movie" => Ok(Self::Movie),
            "tv" => Ok(Self::Tv),
            other => Err(MediaTypeParseError(other.to_owned())),
        }
    }
}

/// Poster and backdrop sizes offered by the image CDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageSize {
    /// 300 pixels wide.
    W300,
    /// 500 pixels wide.
    #[default]
    W500,
    /// 780 pixels wide.
    W780,
    /// Source resolution.
    Original,
}

impl ImageSize {
    const fn as_str(self) -> &'static str {
        match self {
            Self::W300 => "w300",
            Self::W500 => "w500",
            Self::W780 => "w780",
            Self::Original => "original",
        }
    }
}

/// Absolute image URL for an upstream image path.
///
/// # Examples
/// ```
/// use moviebox::domain::{image_url, ImageSize};
///
/// assert_eq!(
///     image_url(Some("/abc.jpg"), ImageSize::W300).as_deref(),
///     Some("https://image.tmdb.org/t/p/w300/abc.jpg")
/// );
/// assert_eq!(image_url(None, ImageSize::W500), None);
/// ```
#[must_use]
pub fn image_url(path: Option<&str>, size: ImageSize) -> Option<String> {
    path.filter(|p| !p.is_empty())
        .map(|p| format!("{IMAGE_BASE_URL}/{}{p}", size.as_str()))
}

fn display_title<'a>(title: Option<&'a str>, name: Option<&'a str>) -> &'a str {
    title
        .filter(|t| !t.is_empty())
        .or_else(|| name.filter(|n| !n.is_empty()))
        .unwrap_or(UNKNOWN_TITLE)
}

fn release_year(release_date: Option<&str>, first_air_date: Option<&str>) -> Option<i32> {
    let date = release_date
        .filter(|d| !d.is_empty())
        .or_else(|| first_air_date.filter(|d| !d.is_empty()))?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .map(|parsed| parsed.year())
}

/// Genre tag attached to detail records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    /// Upstream genre id.
    pub id: u64,
    /// Display name.
    pub name: String,
}

/// Entry in a browsable collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaSummary {
    pub id: u64,
    pub media_type: MediaType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backdrop_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_air_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_average: Option<f64>,
    /// Remaining upstream fields, untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MediaSummary {
    /// Title for display, falling back to the show name and then `Unknown`.
    #[must_use]
    pub fn display_title(&self) -> &str {
        display_title(self.title.as_deref(), self.name.as_deref())
    }

    /// Year of first release or first broadcast.
    #[must_use]
    pub fn release_year(&self) -> Option<i32> {
        release_year(self.release_date.as_deref(), self.first_air_date.as_deref())
    }
}

/// Full record for one movie or show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaDetail {
    pub id: u64,
    pub media_type: MediaType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backdrop_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_air_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_average: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_seasons: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<Genre>>,
    /// Remaining upstream fields, untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MediaDetail {
    /// Title for display, falling back to the show name and then `Unknown`.
    #[must_use]
    pub fn display_title(&self) -> &str {
        display_title(self.title.as_deref(), self.name.as_deref())
    }

    /// Year of first release or first broadcast.
    #[must_use]
    pub fn release_year(&self) -> Option<i32> {
        release_year(self.release_date.as_deref(), self.first_air_date.as_deref())
    }
}

/// Trailer, teaser or clip attached to a movie or show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaVideo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Upstream envelope around a video listing.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoList {
    /// Videos in upstream order.
    #[serde(default)]
    pub results: Vec<MediaVideo>,
}

/// One page of results using the upstream wire names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paged<T> {
    pub results: Vec<T>,
    pub page: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_results: Option<u64>,
}
