//! # Slice
//!
//! Text-menu client for the Slice pizza-ordering database.
//!
//! ## Startup
//! ```text
//! parse args ──► resolve config ──► open data store ──► run menu loop
//!                                        │
//!                                        └── failure here is FATAL:
//!                                            report the cause and exit
//! ```
//!
//! Everything after startup survives command failures; see
//! [`slice_cli::commands`].

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use slice_cli::{commands, AppConfig, CliError, Console};
use slice_db::{Database, DbConfig};

#[derive(Debug, Parser)]
#[command(
    name = "slice",
    about = "Text-menu client for the Slice pizza-ordering database",
    version
)]
struct Cli {
    /// Path to the SQLite database file.
    /// Falls back to $SLICE_DATABASE, then ./slice.db
    #[arg(value_name = "DATABASE")]
    database: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so they never interleave with the menu.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::resolve(cli.database);

    println!("Connecting to database...");
    let db = match Database::new(DbConfig::new(&config.database_path)).await {
        Ok(db) => db,
        Err(err) => {
            eprintln!("Error - unable to open the data store: {err}");
            return ExitCode::FAILURE;
        }
    };
    println!("Done");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    let result = commands::run(&mut console, &db).await;
    db.close().await;

    match result {
        Ok(()) => ExitCode::SUCCESS,
        // Input stream closed; treat as a clean exit.
        Err(CliError::Io(err)) if err.kind() == io::ErrorKind::UnexpectedEof => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Session ended: {err}");
            ExitCode::FAILURE
        }
    }
}
