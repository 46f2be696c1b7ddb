//! Session context: who is signed in, if anyone.
//!
//! `login` asks the `Authenticator` for a user and wraps it in a `Session`.
//! The session enters application state through `Event::SignedIn`, so the
//! reducer stays free of service calls.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use medresearch_contracts::{error::DashResult, user::User};

use crate::{
    state::{reduce, AppState, Event, Transition},
    traits::Authenticator,
};

/// What the login form submits.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Unique identifier for one signed-in session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

/// An authenticated user and when they signed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub user: User,
    pub started_at: DateTime<Utc>,
}

impl Session {
    pub fn start(user: User) -> Self {
        Self {
            id: SessionId::new(),
            user,
            started_at: Utc::now(),
        }
    }
}

/// Verify `credentials` and open a session.
pub fn login(authenticator: &dyn Authenticator, credentials: &Credentials) -> DashResult<Session> {
    match authenticator.authenticate(credentials) {
        Ok(user) => {
            let session = Session::start(user);
            info!(
                session_id = %session.id.0,
                user_id = %session.user.id,
                role = session.user.role.label(),
                "user signed in"
            );
            Ok(session)
        }
        Err(e) => {
            warn!(email = %credentials.email, error = %e, "login refused");
            Err(e)
        }
    }
}

/// Log in and apply the resulting `Event::SignedIn`.
///
/// A refused login comes back as `Transition::Rejected` with `state` intact.
pub fn sign_in(
    state: AppState,
    authenticator: &dyn Authenticator,
    credentials: &Credentials,
) -> Transition {
    match login(authenticator, credentials) {
        Ok(session) => reduce(state, Event::SignedIn(session)),
        Err(reason) => Transition::Rejected { reason, state },
    }
}
