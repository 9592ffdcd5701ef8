//! Logical upstream requests.
//!
//! A [`TmdbRequest`] names a closed [`TmdbRoute`], an ordered set of scalar
//! query parameters, a method and an optional JSON body. The gateway turns it
//! into an HTTP call and adds the API key; nothing here knows about URLs.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use super::{MediaType, RemoteAccountToken, TmdbId};

/// Query parameter carrying the API key. Only the gateway may set it.
pub const API_KEY_PARAM: &str = "api_key";
/// Query parameter carrying the remote account token.
pub const SESSION_ID_PARAM: &str = "session_id";

/// Names callers may never supply directly.
pub const RESERVED_PARAMS: [&str; 2] = [API_KEY_PARAM, SESSION_ID_PARAM];

/// Trending window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeWindow {
    Day,
    #[default]
    Week,
}

impl TimeWindow {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
        }
    }
}

impl FromStr for TimeWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            other => Err(format!("time_window must be 'day' or 'week', got '{other}'")),
        }
    }
}

/// Curated movie collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieList {
    Popular,
    TopRated,
    NowPlaying,
    Upcoming,
}

impl MovieList {
    const fn segment(self) -> &'static str {
        match self {
            Self::Popular => "popular",
            Self::TopRated => "top_rated",
            Self::NowPlaying => "now_playing",
            Self::Upcoming => "upcoming",
        }
    }
}

/// Curated TV collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TvList {
    Popular,
    TopRated,
    OnTheAir,
}

impl TvList {
    const fn segment(self) -> &'static str {
        match self {
            Self::Popular => "popular",
            Self::TopRated => "top_rated",
            Self::OnTheAir => "on_the_air",
        }
    }
}

/// Account-scoped collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountCollection {
    Favorite,
    Watchlist,
}

impl AccountCollection {
    const fn segment(self) -> &'static str {
        match self {
            Self::Favorite => "favorite",
            Self::Watchlist => "watchlist",
        }
    }
}

/// Every upstream route the backend may call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TmdbRoute {
    Trending(TimeWindow),
    MovieList(MovieList),
    TvList(TvList),
    Details(MediaType, TmdbId),
    Videos(MediaType, TmdbId),
    WatchProviders(MediaType, TmdbId),
    Rating(MediaType, TmdbId),
    Discover(MediaType),
    SearchMulti,
    Genres(MediaType),
    Person(TmdbId),
    PersonCredits(TmdbId),
    Company(TmdbId),
    Network(TmdbId),
    List(TmdbId),
    CreateList,
    ListAddItem(TmdbId),
    ListRemoveItem(TmdbId),
    Account,
    AccountItems {
        account_id: u64,
        collection: AccountCollection,
        media_type: MediaType,
    },
    AccountToggle {
        account_id: u64,
        collection: AccountCollection,
    },
}

impl TmdbRoute {
    /// Path relative to the API base URL, with a leading slash.
    ///
    /// # Examples
    /// ```
    /// use moviebox::domain::{MediaType, TmdbId, TmdbRoute};
    ///
    /// let id = TmdbId::new(550).unwrap();
    /// assert_eq!(TmdbRoute::Videos(MediaType::Movie, id).path(), "/movie/550/videos");
    /// ```
    #[must_use]
    pub fn path(&self) -> String {
        match *self {
            Self::Trending(window) => format!("/trending/all/{}", window.as_str()),
            Self::MovieList(list) => format!("/movie/{}", list.segment()),
            Self::TvList(list) => format!("/tv/{}", list.segment()),
            Self::Details(media, id) => format!("/{media}/{id}"),
            Self::Videos(media, id) => format!("/{media}/{id}/videos"),
            Self::WatchProviders(media, id) => format!("/{media}/{id}/watch/providers"),
            Self::Rating(media, id) => format!("/{media}/{id}/rating"),
            Self::Discover(media) => format!("/discover/{media}"),
            Self::SearchMulti => "/search/multi".to_owned(),
            Self::Genres(media) => format!("/genre/{media}/list"),
            Self::Person(id) => format!("/person/{id}"),
            Self::PersonCredits(id) => format!("/person/{id}/combined_credits"),
            Self::Company(id) => format!("/company/{id}"),
            Self::Network(id) => format!("/network/{id}"),
            Self::List(id) => format!("/list/{id}"),
            Self::CreateList => "/list".to_owned(),
            Self::ListAddItem(id) => format!("/list/{id}/add_item"),
            Self::ListRemoveItem(id) => format!("/list/{id}/remove_item"),
            Self::Account => "/account".to_owned(),
            Self::AccountItems {
                account_id,
                collection,
                media_type,
            } => format!(
                "/account/{account_id}/{}/{}",
                collection.segment(),
                media_type.collection_segment()
            ),
            Self::AccountToggle {
                account_id,
                collection,
            } => format!("/account/{account_id}/{}", collection.segment()),
        }
    }
}

/// Scalar query value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Text(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Unsigned(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        Self::Unsigned(u64::from(value))
    }
}

impl From<u64> for QueryValue {
    fn from(value: u64) -> Self {
        Self::Unsigned(value)
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<TmdbId> for QueryValue {
    fn from(value: TmdbId) -> Self {
        Self::Unsigned(value.get())
    }
}

/// Ordered query parameters with unique names.
///
/// Setting an existing name replaces its value in place; absent optional
/// values are never recorded.
///
/// # Examples
/// ```
/// use moviebox::domain::QueryParams;
///
/// let mut params = QueryParams::new();
/// params.set("genre", "28");
/// params.set_opt("year", None::<u32>);
/// params.set("genre", "18");
/// assert_eq!(params.len(), 1);
/// assert_eq!(params.get("genre").map(ToString::to_string).as_deref(), Some("18"));
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct QueryParams(Vec<(String, QueryValue)>);

impl QueryParams {
    /// Empty parameter set.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert or replace a parameter.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<QueryValue>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name, value)),
        }
    }

    /// Insert or replace a parameter when a value is present.
    pub fn set_opt<V: Into<QueryValue>>(&mut self, name: impl Into<String>, value: Option<V>) {
        if let Some(present) = value {
            self.set(name, present);
        }
    }

    /// Remove a parameter, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<QueryValue> {
        let index = self.0.iter().position(|(existing, _)| existing == name)?;
        Some(self.0.remove(index).1)
    }

    /// Value recorded for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&QueryValue> {
        self.0
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of recorded parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no parameters are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<QueryValue>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.set(name, value);
        }
        params
    }
}

impl fmt::Debug for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, value) in &self.0 {
            if RESERVED_PARAMS.contains(&name.as_str()) {
                map.entry(name, &"<redacted>");
            } else {
                map.entry(name, value);
            }
        }
        map.finish()
    }
}

/// HTTP method used upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    /// Method name for logging.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// One upstream call, built fresh per invocation and consumed by dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct TmdbRequest {
    route: TmdbRoute,
    params: QueryParams,
    method: HttpMethod,
    body: Option<Value>,
}

impl TmdbRequest {
    /// `GET` request without parameters.
    #[must_use]
    pub const fn get(route: TmdbRoute) -> Self {
        Self {
            route,
            params: QueryParams::new(),
            method: HttpMethod::Get,
            body: None,
        }
    }

    /// `POST` request carrying a JSON body.
    #[must_use]
    pub const fn post(route: TmdbRoute, body: Value) -> Self {
        Self {
            route,
            params: QueryParams::new(),
            method: HttpMethod::Post,
            body: Some(body),
        }
    }

    /// Add or replace one query parameter.
    #[must_use]
    pub fn with_param(mut self, name: &str, value: impl Into<QueryValue>) -> Self {
        self.params.set(name, value);
        self
    }

    /// Add a query parameter when the value is present.
    #[must_use]
    pub fn with_opt_param<V: Into<QueryValue>>(mut self, name: &str, value: Option<V>) -> Self {
        self.params.set_opt(name, value);
        self
    }

    /// Merge caller parameters, skipping reserved credential names.
    #[must_use]
    pub fn with_params(mut self, params: QueryParams) -> Self {
        for (name, value) in params.0 {
            if !RESERVED_PARAMS.contains(&name.as_str()) {
                self.params.set(name, value);
            }
        }
        self
    }

    /// Scope the request to the remote account.
    #[must_use]
    pub fn with_session(mut self, token: &RemoteAccountToken) -> Self {
        self.params.set(SESSION_ID_PARAM, token.expose());
        self
    }

    /// Target route.
    #[must_use]
    pub const fn route(&self) -> &TmdbRoute {
        &self.route
    }

    /// Query parameters, excluding the API key.
    #[must_use]
    pub const fn params(&self) -> &QueryParams {
        &self.params
    }

    /// Upstream method.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// JSON body, if any.
    #[must_use]
    pub const fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn id(value: u64) -> TmdbId {
        TmdbId::new(value).expect("positive id")
    }

    #[rstest]
    #[case(TmdbRoute::Trending(TimeWindow::default()), "/trending/all/week")]
    #[case(TmdbRoute::MovieList(MovieList::NowPlaying), "/movie/now_playing")]
    #[case(TmdbRoute::TvList(TvList::OnTheAir), "/tv/on_the_air")]
    #[case(TmdbRoute::Details(MediaType::Tv, id(1399)), "/tv/1399")]
    #[case(TmdbRoute::WatchProviders(MediaType::Movie, id(550)), "/movie/550/watch/providers")]
    #[case(TmdbRoute::Rating(MediaType::Movie, id(550)), "/movie/550/rating")]
    #[case(TmdbRoute::Genres(MediaType::Tv), "/genre/tv/list")]
    #[case(TmdbRoute::PersonCredits(id(287)), "/person/287/combined_credits")]
    #[case(TmdbRoute::ListRemoveItem(id(8)), "/list/8/remove_item")]
    #[case(
        TmdbRoute::AccountItems {
            account_id: 548,
            collection: AccountCollection::Favorite,
            media_type: MediaType::Movie,
        },
        "/account/548/favorite/movies"
    )]
    #[case(
        TmdbRoute::AccountItems {
            account_id: 548,
            collection: AccountCollection::Watchlist,
            media_type: MediaType::Tv,
        },
        "/account/548/watchlist/tv"
    )]
    #[case(
        TmdbRoute::AccountToggle { account_id: 548, collection: AccountCollection::Watchlist },
        "/account/548/watchlist"
    )]
    fn routes_render_upstream_paths(#[case] route: TmdbRoute, #[case] expected: &str) {
        assert_eq!(route.path(), expected);
    }

    #[rstest]
    fn set_replaces_in_place_and_keeps_order() {
        let mut params = QueryParams::new();
        params.set("genre", "28");
        params.set("page", 2_u32);
        params.set("genre", "18");
        let rendered: Vec<(String, String)> = params
            .iter()
            .map(|(name, value)| (name.to_owned(), value.to_string()))
            .collect();
        assert_eq!(
            rendered,
            vec![
                ("genre".to_owned(), "18".to_owned()),
                ("page".to_owned(), "2".to_owned())
            ]
        );
    }

    #[rstest]
    fn absent_values_are_omitted() {
        let request = TmdbRequest::get(TmdbRoute::SearchMulti)
            .with_param("query", "heat")
            .with_opt_param("page", None::<u32>);
        assert_eq!(request.params().len(), 1);
        assert!(request.params().get("page").is_none());
    }

    #[rstest]
    fn with_params_drops_reserved_names() {
        let caller: QueryParams = [("api_key", "stolen"), ("session_id", "x"), ("genre", "28")]
            .into_iter()
            .collect();
        let request = TmdbRequest::get(TmdbRoute::Discover(MediaType::Movie)).with_params(caller);
        assert!(request.params().get(API_KEY_PARAM).is_none());
        assert!(request.params().get(SESSION_ID_PARAM).is_none());
        assert_eq!(request.params().len(), 1);
    }

    #[rstest]
    fn debug_output_redacts_session_id() {
        let token = RemoteAccountToken::new("secret-session").expect("token");
        let request = TmdbRequest::post(TmdbRoute::CreateList, json!({"name": "x"}))
            .with_session(&token);
        let rendered = format!("{request:?}");
        assert!(!rendered.contains("secret-session"));
        assert!(rendered.contains("<redacted>"));
    }

    #[rstest]
    #[case("day", Ok(TimeWindow::Day))]
    #[case("week", Ok(TimeWindow::Week))]
    fn time_window_parses_known_values(
        #[case] raw: &str,
        #[case] expected: Result<TimeWindow, String>,
    ) {
        assert_eq!(raw.parse::<TimeWindow>(), expected);
    }

    #[rstest]
    fn time_window_rejects_unknown_values() {
        assert!("month".parse::<TimeWindow>().is_err());
    }
}
