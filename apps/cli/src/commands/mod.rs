//! # Menu Commands
//!
//! One module per menu area plus the two dispatch loops.
//!
//! ## Dispatch Boundary
//! Every command returns `CliResult<()>`. The loops here are the error
//! boundary: a domain or data store error is logged, rendered as one
//! message, and the menu continues. Only I/O errors (the input stream
//! closing) propagate out and end the session. A single failing command
//! never crashes the session.

pub mod admin;
pub mod auth;
pub mod menu;
pub mod orders;
pub mod profile;
pub mod stores;

use std::io::{BufRead, Write};

use tracing::{error, info};

use crate::console::Console;
use crate::error::{CliError, CliResult};
use crate::session::Session;
use slice_db::Database;

const GREETING: &str = "\n*******************************************************\n              Slice - Pizza Ordering\n*******************************************************";

/// Runs the interactive session: the pre-auth menu, and the user menu for
/// each successful login.
pub async fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    db: &Database,
) -> CliResult<()> {
    console.write_line(GREETING)?;

    loop {
        console.write_line("\nMAIN MENU")?;
        console.write_line("---------")?;
        console.write_line("1. Create user")?;
        console.write_line("2. Log in")?;
        console.write_line("9. < EXIT")?;

        match console.prompt_integer("Please make your choice: ", "Choice")? {
            1 => {
                let result = auth::register(console, db).await;
                report(console, result)?;
            }
            2 => match auth::log_in(console, db).await {
                Ok(session) => user_menu(console, db, &session).await?,
                Err(err) => report_err(console, err)?,
            },
            9 => break,
            _ => console.write_line("Unrecognized choice!")?,
        }
    }

    console.write_line("\nBye!")?;
    Ok(())
}

/// The post-auth menu loop, run once per login.
async fn user_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    db: &Database,
    session: &Session,
) -> CliResult<()> {
    loop {
        console.write_line("\nMAIN MENU")?;
        console.write_line("---------")?;
        console.write_line("1. View Profile")?;
        console.write_line("2. Update Profile")?;
        console.write_line("3. View Menu")?;
        console.write_line("4. Place Order")?;
        console.write_line("5. View Full Order ID History")?;
        console.write_line("6. View Past 5 Order IDs")?;
        console.write_line("7. View Order Information")?;
        console.write_line("8. View Stores")?;
        console.write_line("9. Update Order Status")?;
        console.write_line("10. Update Menu")?;
        console.write_line("11. Update User")?;
        console.write_line(".........................")?;
        console.write_line("20. Log out")?;

        let choice = console.prompt_integer("Please make your choice: ", "Choice")?;
        let result = match choice {
            1 => profile::view_profile(console, db, session).await,
            2 => profile::update_profile(console, db, session).await,
            3 => menu::view_menu(console, db).await,
            4 => orders::place_order(console, db, session).await,
            5 => orders::view_all_orders(console, db, session).await,
            6 => orders::view_recent_orders(console, db, session).await,
            7 => orders::view_order_info(console, db, session).await,
            8 => stores::view_stores(console, db).await,
            9 => orders::update_order_status(console, db, session).await,
            10 => menu::update_menu(console, db, session).await,
            11 => admin::update_user(console, db, session).await,
            20 => {
                info!(login = %session.login(), "Logged out");
                break;
            }
            _ => {
                console.write_line("Unrecognized choice!")?;
                Ok(())
            }
        };
        report(console, result)?;
    }

    Ok(())
}

/// Reports a command result at the boundary: errors become one message and
/// the loop continues, except I/O errors which end the session.
fn report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    result: CliResult<()>,
) -> CliResult<()> {
    match result {
        Ok(()) => Ok(()),
        Err(err) => report_err(console, err),
    }
}

fn report_err<R: BufRead, W: Write>(console: &mut Console<R, W>, err: CliError) -> CliResult<()> {
    if matches!(err, CliError::Io(_)) {
        return Err(err);
    }
    error!(error = %err, "command failed");
    console.write_line(&err.user_message())?;
    Ok(())
}
