#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use thiserror::Error;

use crate::net::types::User;
use crate::util::storage::{SessionStorage, TOKEN_KEY, USER_KEY};

/// An authenticated session. Token and user are always paired: there is no
/// partial session, which the type makes structural.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Rejected `sign_in` arguments.
///
/// Signals a caller bug rather than a user-facing failure: callers are
/// expected to hold a verified `{token, user}` pair from the backend before
/// committing it here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("sign-in token must be non-empty")]
    EmptyToken,
    #[error("sign-in user must have an id")]
    MissingUserId,
}

/// Authentication state: the single source of truth for "who is logged in".
///
/// Held in an `RwSignal` provided via context so every page observes the
/// same session and re-renders on mutation. All mutations run synchronously
/// on the UI thread and write through to the injected [`SessionStorage`] so
/// the session survives reloads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    session: Option<Session>,
    initialized: bool,
}

impl AuthState {
    /// Rehydrate the session from persisted storage.
    ///
    /// Runs once before the first route render, so no guard evaluation ever
    /// observes a pre-initialize state. Malformed persisted state (missing
    /// token, missing or unparsable user, user without an id) is recovered
    /// locally as "no session", never surfaced as an error. Idempotent: a
    /// second call leaves the state unchanged.
    pub fn initialize(&mut self, storage: &dyn SessionStorage) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        self.session = load_session(storage);
        if self.session.is_some() {
            log::debug!("restored persisted session");
        }
    }

    /// Commit a verified `{token, user}` pair as the active session.
    ///
    /// This is the commit step only: credential verification happened on the
    /// caller's side and no network is touched here. Both values are written
    /// through to persisted storage before the in-memory session changes.
    ///
    /// # Errors
    ///
    /// Rejects an empty token or a user without an id, leaving state and
    /// storage untouched.
    pub fn sign_in(
        &mut self,
        storage: &dyn SessionStorage,
        token: String,
        user: User,
    ) -> Result<(), AuthError> {
        if token.is_empty() {
            return Err(AuthError::EmptyToken);
        }
        if user.id.is_empty() {
            return Err(AuthError::MissingUserId);
        }
        storage.set(TOKEN_KEY, &token);
        match serde_json::to_string(&user) {
            Ok(json) => storage.set(USER_KEY, &json),
            Err(err) => log::warn!("failed to serialize user for persistence: {err}"),
        }
        self.initialized = true;
        self.session = Some(Session { token, user });
        Ok(())
    }

    /// Clear the session and remove it from persisted storage.
    ///
    /// Always succeeds, regardless of prior state, and performs no
    /// navigation: callers redirect afterward as a separate explicit step.
    /// Also used as the forced sign-out when an API call reports the token
    /// is no longer valid.
    pub fn sign_out(&mut self, storage: &dyn SessionStorage) {
        storage.remove(TOKEN_KEY);
        storage.remove(USER_KEY);
        self.session = None;
    }

    /// The current user, if a session is active. Pure read.
    pub fn current_user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    /// The bearer token for authenticated API calls, if a session is active.
    /// Pure read.
    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    /// Whether a session is active. Pure read.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

/// Read a persisted session, requiring a non-empty token and a user record
/// with an id. Anything less yields no session. Corrupt keys are left in
/// place: storage is cleared only by an explicit sign-out.
fn load_session(storage: &dyn SessionStorage) -> Option<Session> {
    let token = storage.get(TOKEN_KEY)?;
    if token.is_empty() {
        return None;
    }
    let raw = storage.get(USER_KEY)?;
    let user: User = match serde_json::from_str(&raw) {
        Ok(user) => user,
        Err(err) => {
            log::warn!("discarding unparsable persisted user: {err}");
            return None;
        }
    };
    if user.id.is_empty() {
        return None;
    }
    Some(Session { token, user })
}
