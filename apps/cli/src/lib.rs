//! # slice-cli: Text-Menu Client for Slice
//!
//! The interactive layer: everything between the keyboard and the domain.
//!
//! ## Module Organization
//!
//! - [`config`] - Startup configuration (database path)
//! - [`console`] - The console I/O boundary; the only code that touches the
//!   terminal
//! - [`session`] - The authenticated session object passed to every command
//! - [`commands`] - One module per menu area, plus the dispatch loops
//! - [`error`] - The command-boundary error type
//!
//! ## Error Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  input-format problem   → re-prompt at the console, never an error     │
//! │  domain error           → one message, command aborts, menu continues  │
//! │  data store fault       → logged + one message, menu continues         │
//! │  data store fault at    → fatal: report and exit                       │
//! │    startup                                                             │
//! │  I/O error (EOF)        → session ends                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod session;

pub use config::AppConfig;
pub use console::Console;
pub use error::{CliError, CliResult};
pub use session::Session;
