//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Provides a thin wrapper around Actix sessions so handlers only deal with
//! the signed-in caller, never with cookie keys.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;

use crate::domain::{CallerSession, Error};

pub(crate) const CALLER_KEY: &str = "caller";

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Persist the signed-in caller in the session cookie.
    pub fn persist_caller(&self, caller: &CallerSession) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(CALLER_KEY, caller.username())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Fetch the current caller, if any.
    pub fn caller(&self) -> Result<Option<CallerSession>, Error> {
        let stored = self
            .0
            .get::<String>(CALLER_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))?;
        Ok(stored.and_then(|raw| {
            let caller = CallerSession::from_username(&raw);
            if caller.is_none() {
                tracing::warn!("blank caller in session cookie");
            }
            caller
        }))
    }

    /// Require a signed-in caller or return `401 Unauthorized`.
    pub fn require_caller(&self) -> Result<CallerSession, Error> {
        self.caller()?
            .ok_or_else(|| Error::unauthorized("Unauthorized"))
    }

    /// Drop the caller and every other session entry.
    pub fn clear(&self) {
        self.0.purge();
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
