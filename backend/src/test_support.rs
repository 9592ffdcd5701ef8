//! Test utilities shared by unit tests (in `src/`) and integration tests (in
//! `tests/`). Compiled for tests and behind the `test-support` feature.

use std::collections::{HashMap, VecDeque};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use serde_json::Value;
use tempfile::NamedTempFile;

use crate::domain::ports::{TmdbError, TmdbGateway};
use crate::domain::{API_KEY_PARAM, TmdbRequest};

/// One call observed by [`RecordingTmdbGateway`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    /// `GET` or `POST`.
    pub method: &'static str,
    /// Upstream path, e.g. `/movie/550`.
    pub path: String,
    /// Query parameters rendered as strings, in order.
    pub params: Vec<(String, String)>,
    /// JSON body, if any.
    pub body: Option<Value>,
}

impl RecordedCall {
    /// Rendered value of one query parameter.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

type Scripted = HashMap<String, VecDeque<Result<Value, TmdbError>>>;

/// Gateway double that records every call and replays scripted responses.
///
/// Responses are keyed by upstream path and consumed in order; the last
/// scripted response for a path is reused once the queue drains. Unscripted
/// paths answer `404 Not Found`.
///
/// # Examples
/// ```
/// use moviebox::test_support::RecordingTmdbGateway;
/// use serde_json::json;
///
/// let gateway = RecordingTmdbGateway::new().with_response("/movie/550", json!({"id": 550}));
/// assert_eq!(gateway.call_count(), 0);
/// ```
#[derive(Clone, Default)]
pub struct RecordingTmdbGateway {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    scripted: Arc<Mutex<Scripted>>,
}

impl RecordingTmdbGateway {
    /// Gateway with nothing scripted.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a success body for `path`.
    #[must_use]
    pub fn with_response(self, path: &str, body: Value) -> Self {
        self.push(path, Ok(body));
        self
    }

    /// Script a failure for `path`.
    #[must_use]
    pub fn with_failure(self, path: &str, error: TmdbError) -> Self {
        self.push(path, Err(error));
        self
    }

    fn push(&self, path: &str, outcome: Result<Value, TmdbError>) {
        self.scripted
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(path.to_owned())
            .or_default()
            .push_back(outcome);
    }

    /// Every call observed so far.
    #[must_use]
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of calls observed so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Paths called so far, in order.
    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        self.calls().into_iter().map(|call| call.path).collect()
    }

    fn next_outcome(&self, path: &str) -> Result<Value, TmdbError> {
        let mut scripted = self.scripted.lock().unwrap_or_else(PoisonError::into_inner);
        match scripted.get_mut(path) {
            Some(queue) if queue.len() > 1 => queue
                .pop_front()
                .unwrap_or_else(|| Err(TmdbError::upstream(404_u16, "Not Found"))),
            Some(queue) => queue
                .front()
                .cloned()
                .unwrap_or_else(|| Err(TmdbError::upstream(404_u16, "Not Found"))),
            None => Err(TmdbError::upstream(404_u16, "Not Found")),
        }
    }
}

#[async_trait]
impl TmdbGateway for RecordingTmdbGateway {
    async fn call(&self, request: TmdbRequest) -> Result<Value, TmdbError> {
        let path = request.route().path();
        let call = RecordedCall {
            method: request.method().as_str(),
            path: path.clone(),
            params: request
                .params()
                .iter()
                .filter(|(name, _)| *name != API_KEY_PARAM)
                .map(|(name, value)| (name.to_owned(), value.to_string()))
                .collect(),
            body: request.body().cloned(),
        };
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
        self.next_outcome(&path)
    }
}

/// Session key written to a temporary file, removed on drop.
pub struct SessionKeyFile {
    file: NamedTempFile,
}

impl SessionKeyFile {
    /// Write `len` bytes of key material to a fresh temporary file.
    ///
    /// # Errors
    /// Returns any I/O error raised while creating or writing the file.
    pub fn with_len(len: usize) -> io::Result<Self> {
        let mut file = NamedTempFile::new()?;
        file.write_all(&vec![b'k'; len])?;
        file.flush()?;
        Ok(Self { file })
    }

    /// Location of the key file.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
