//! # Command-Boundary Error Type
//!
//! Unified error type for menu commands.
//!
//! Domain and data store errors are reported as one console message at the
//! dispatch boundary and the menu continues; I/O errors (a closed input
//! stream) end the session.

use std::io;
use thiserror::Error;

use slice_core::CoreError;
use slice_db::DbError;

/// Everything a menu command can fail with.
#[derive(Debug, Error)]
pub enum CliError {
    /// Domain rule violation - rendered verbatim to the user.
    #[error("{0}")]
    Core(#[from] CoreError),

    /// Data store failure - logged, rendered generically.
    #[error("{0}")]
    Db(#[from] DbError),

    /// Console I/O failure - ends the session.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// The message shown on the console when the command aborts.
    ///
    /// Domain errors carry user-appropriate text already; raw data store
    /// errors are summarized rather than dumped.
    pub fn user_message(&self) -> String {
        match self {
            CliError::Core(err) => err.to_string(),
            CliError::Db(DbError::Unavailable(_)) => {
                "The data store is unavailable. Please try again.".to_string()
            }
            CliError::Db(_) => "The data store reported an error. Please try again.".to_string(),
            CliError::Io(err) => format!("I/O error: {err}"),
        }
    }
}

/// Result type for menu commands.
pub type CliResult<T> = Result<T, CliError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_render_verbatim() {
        let err: CliError = CoreError::StoreNotFound(7).into();
        assert_eq!(err.user_message(), "Store not found: 7");
    }

    #[test]
    fn test_store_errors_render_generically() {
        let err: CliError = DbError::QueryFailed("syntax error near SELECT".to_string()).into();
        assert!(!err.user_message().contains("SELECT"));
    }
}
