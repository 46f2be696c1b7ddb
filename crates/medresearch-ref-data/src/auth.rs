//! Mocked login.

use tracing::info;

use medresearch_contracts::{error::DashResult, user::User};
use medresearch_core::{session::Credentials, traits::Authenticator};

use crate::mock_data;

/// Accepts any credentials and signs in as one fixed user.
#[derive(Debug, Clone)]
pub struct MockAuthenticator {
    user: User,
}

impl MockAuthenticator {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub fn user(&self) -> &User {
        &self.user
    }
}

impl Default for MockAuthenticator {
    fn default() -> Self {
        Self::new(mock_data::demo_user())
    }
}

impl Authenticator for MockAuthenticator {
    fn authenticate(&self, credentials: &Credentials) -> DashResult<User> {
        info!(
            email = %credentials.email,
            user_id = %self.user.id,
            "mock login accepted"
        );
        Ok(self.user.clone())
    }
}
