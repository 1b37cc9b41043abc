//! Authenticated session
//!
//! Holds the logged-in user and its type for the lifetime of a login. The
//! root view owns one `Session`; it is filled on login and cleared on
//! logout. Every begin and end bumps the generation, so work started under
//! one login can be told apart from work started under the next.

use shared::{AuthenticatedUser, UserType};

/// Session data stored in memory during the client's lifecycle.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<AuthenticatedUser>,
    generation: u64,
}

impl Session {
    /// Creates a new empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the session after a successful login, replacing any previous one.
    pub fn begin(&mut self, user: AuthenticatedUser) {
        self.generation += 1;
        tracing::info!(
            tipo = %user.user_type(),
            id = user.tax_id(),
            generation = self.generation,
            "session started"
        );
        self.user = Some(user);
    }

    /// Clears the session on logout, returning the user that was logged in.
    pub fn end(&mut self) -> Option<AuthenticatedUser> {
        let user = self.user.take();
        self.generation += 1;
        if let Some(u) = &user {
            tracing::info!(tipo = %u.user_type(), id = u.tax_id(), "session ended");
        }
        user
    }

    pub fn user(&self) -> Option<&AuthenticatedUser> {
        self.user.as_ref()
    }

    pub fn user_type(&self) -> Option<UserType> {
        self.user.as_ref().map(AuthenticatedUser::user_type)
    }

    pub fn is_active(&self) -> bool {
        self.user.is_some()
    }

    /// Counter bumped on every begin and end
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
