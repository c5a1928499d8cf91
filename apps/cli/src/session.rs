//! # Session
//!
//! The authenticated identity for one interactive session.
//!
//! A `Session` only exists after a successful login and is passed explicitly
//! to every command - there is no process-wide login state. Logging out
//! drops the session; nothing else needs invalidating.
//!
//! ## Role Freshness
//! The role is NOT stored on the session. Every gated command re-reads it
//! through [`Session::current_role`], so an administrative role change takes
//! effect on the target's very next command, mid-session.

use tracing::info;

use crate::error::{CliError, CliResult};
use slice_core::{CoreError, Role};
use slice_db::UserRepository;

/// The authenticated identity held for the lifetime of a login.
#[derive(Debug, Clone)]
pub struct Session {
    login: String,
}

impl Session {
    /// Checks credentials and opens a session.
    ///
    /// The comparison is exact and case-sensitive against the stored
    /// plaintext credential.
    ///
    /// ## Returns
    /// * `Err(CoreError::InvalidCredentials)` - no user row matches both
    ///   fields
    pub async fn authenticate(
        users: &UserRepository,
        login: &str,
        password: &str,
    ) -> CliResult<Session> {
        if users.verify_credentials(login, password).await? {
            info!(login = %login, "Login successful");
            Ok(Session {
                login: login.to_string(),
            })
        } else {
            Err(CliError::Core(CoreError::InvalidCredentials))
        }
    }

    /// The login this session acts as.
    pub fn login(&self) -> &str {
        &self.login
    }

    /// Reads the session's CURRENT role from the data store.
    ///
    /// Deliberately uncached - see the module docs.
    pub async fn current_role(&self, users: &UserRepository) -> CliResult<Role> {
        Ok(users.role_of(&self.login).await?)
    }
}
