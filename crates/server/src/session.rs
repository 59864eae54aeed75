//! Typed access to the per-visitor session.
//!
//! Handlers never touch raw session keys; every read and write goes
//! through [`SessionState`], which pins the key names and value shapes
//! in one place. The state lives in the session store behind the
//! client-held cookie and disappears with it.
//!
//! The `database` scratch record is reset to empty on every visit to
//! `/` and `/login`, wiping any login credentials stored in it. The
//! top-level `logged_in_status` flag is display data only; the gate for
//! the logged-in view is the nested credentials record.

use axum::{extract::FromRequestParts, http::request::Parts};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::ServerError;

const NAME_KEY: &str = "name";
const MESSAGES_KEY: &str = "messages";
const KNOWN_KEY: &str = "known";
const SCRATCH_KEY: &str = "database";
const LOGGED_IN_KEY: &str = "logged_in_status";
const FLASH_KEY: &str = "flash";

/// Plaintext credentials captured by the login form, echoed back as-is
/// on the logged-in view. Not hardened by design.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// The session's scratch record.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Scratch {
    pub logged_in_status: Option<Credentials>,
}

/// Read/write accessors over one visitor's session.
#[derive(Clone, Debug)]
pub struct SessionState {
    inner: Session,
}

impl SessionState {
    pub fn new(inner: Session) -> Self {
        Self { inner }
    }

    /// The last submitted name, if any.
    pub async fn name(&self) -> Result<Option<String>, ServerError> {
        self.inner.get(NAME_KEY).await.map_err(Into::into)
    }

    pub async fn set_name(&self, name: &str) -> Result<(), ServerError> {
        self.inner.insert(NAME_KEY, name).await.map_err(Into::into)
    }

    /// All messages submitted during this session, oldest first.
    pub async fn messages(&self) -> Result<Vec<String>, ServerError> {
        Ok(self.inner.get(MESSAGES_KEY).await?.unwrap_or_default())
    }

    /// Append a message. The sequence only ever grows within a session.
    pub async fn push_message(&self, message: &str) -> Result<(), ServerError> {
        let mut messages = self.messages().await?;
        messages.push(message.to_owned());
        self.inner
            .insert(MESSAGES_KEY, &messages)
            .await
            .map_err(Into::into)
    }

    /// Whether the last username submitted on the homepage was already
    /// registered.
    pub async fn known(&self) -> Result<bool, ServerError> {
        Ok(self.inner.get(KNOWN_KEY).await?.unwrap_or(false))
    }

    pub async fn set_known(&self, known: bool) -> Result<(), ServerError> {
        self.inner
            .insert(KNOWN_KEY, known)
            .await
            .map_err(Into::into)
    }

    /// Overwrite the scratch record with an empty one.
    pub async fn reset_scratch(&self) -> Result<(), ServerError> {
        self.inner
            .insert(SCRATCH_KEY, Scratch::default())
            .await
            .map_err(Into::into)
    }

    pub async fn scratch(&self) -> Result<Option<Scratch>, ServerError> {
        self.inner.get(SCRATCH_KEY).await.map_err(Into::into)
    }

    /// Record a successful login: credentials go into the scratch
    /// record, the top-level flag mirrors them for display.
    pub async fn store_login(&self, credentials: Credentials) -> Result<(), ServerError> {
        let mut scratch = self.scratch().await?.unwrap_or_default();
        scratch.logged_in_status = Some(credentials);
        self.inner.insert(SCRATCH_KEY, &scratch).await?;
        self.inner
            .insert(LOGGED_IN_KEY, true)
            .await
            .map_err(Into::into)
    }

    pub async fn logged_in(&self) -> Result<bool, ServerError> {
        Ok(self.inner.get(LOGGED_IN_KEY).await?.unwrap_or(false))
    }

    /// Queue a one-shot notice for the next rendered view.
    pub async fn push_flash(&self, notice: &str) -> Result<(), ServerError> {
        let mut flashes: Vec<String> = self.inner.get(FLASH_KEY).await?.unwrap_or_default();
        flashes.push(notice.to_owned());
        self.inner
            .insert(FLASH_KEY, &flashes)
            .await
            .map_err(Into::into)
    }

    /// Drain the queued notices. Each notice is displayed once.
    pub async fn take_flashes(&self) -> Result<Vec<String>, ServerError> {
        Ok(self.inner.remove(FLASH_KEY).await?.unwrap_or_default())
    }
}

impl<S> FromRequestParts<S> for SessionState
where
    S: Send + Sync,
{
    type Rejection = <Session as FromRequestParts<S>>::Rejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Session::from_request_parts(parts, state).await.map(Self::new)
    }
}
