//! Startup configuration.
//!
//! Configuration is resolved from the command line with fallback to the
//! environment and a development default. The data store is an embedded
//! SQLite file, so bootstrap is just a path.

use std::env;
use std::path::PathBuf;

/// Environment variable naming the database file.
pub const DATABASE_ENV: &str = "SLICE_DATABASE";

/// Default database file for development.
const DEFAULT_DATABASE: &str = "./slice.db";

/// Resolved application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,
}

impl AppConfig {
    /// Resolves the configuration.
    ///
    /// ## Priority Order
    /// 1. Command-line argument
    /// 2. `SLICE_DATABASE` environment variable
    /// 3. `./slice.db`
    pub fn resolve(database_arg: Option<PathBuf>) -> Self {
        let database_path = database_arg
            .or_else(|| env::var(DATABASE_ENV).ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE));

        AppConfig { database_path }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_wins() {
        let config = AppConfig::resolve(Some(PathBuf::from("/tmp/custom.db")));
        assert_eq!(config.database_path, PathBuf::from("/tmp/custom.db"));
    }

    #[test]
    fn test_default_path() {
        // The env var is not set under `cargo test`; absent both sources the
        // development default applies.
        if env::var(DATABASE_ENV).is_err() {
            let config = AppConfig::resolve(None);
            assert_eq!(config.database_path, PathBuf::from(DEFAULT_DATABASE));
        }
    }
}
