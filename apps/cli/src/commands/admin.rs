//! # User Administration
//!
//! Manager-only: renaming logins and changing roles. A manager can never
//! target their own account - a different manager has to do it.

use std::io::{BufRead, Write};

use tracing::info;

use crate::console::Console;
use crate::error::{CliError, CliResult};
use crate::session::Session;
use slice_core::{access, CoreError};
use slice_db::{Database, DbError};

pub async fn update_user<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    db: &Database,
    session: &Session,
) -> CliResult<()> {
    let role = session.current_role(&db.users()).await?;
    access::ensure_manager(role)?;

    console.write_line("\nOPTIONS:")?;
    console.write_line("1. Update user's login")?;
    console.write_line("2. Update user's role")?;
    console.write_line("3. Back")?;

    match console.prompt_choice_within("Please make your choice: ", 1, 3)? {
        1 => update_user_login(console, db, session).await,
        2 => update_user_role(console, db, session).await,
        _ => Ok(()),
    }
}

async fn update_user_login<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    db: &Database,
    session: &Session,
) -> CliResult<()> {
    let target = console.prompt_nonempty("Enter user's login: ", "Login")?;
    access::ensure_other_user(session.login(), &target)?;
    if !db.users().login_exists(&target).await? {
        return Err(CoreError::UserNotFound(target).into());
    }

    let new_login = console.prompt_nonempty("Enter user's new login: ", "Login")?;
    if db.users().login_exists(&new_login).await? {
        return Err(CoreError::LoginTaken(new_login).into());
    }

    db.users()
        .update_login(&target, &new_login)
        .await
        .map_err(|e| match e {
            DbError::UniqueViolation { .. } => {
                CliError::Core(CoreError::LoginTaken(new_login.clone()))
            }
            other => CliError::Db(other),
        })?;

    info!(target = %target, new_login = %new_login, acting = %session.login(), "Login updated");
    console.write_line("User login updated!")?;
    Ok(())
}

async fn update_user_role<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    db: &Database,
    session: &Session,
) -> CliResult<()> {
    let target = console.prompt_nonempty("Enter user's login: ", "Login")?;
    access::ensure_other_user(session.login(), &target)?;
    if !db.users().login_exists(&target).await? {
        return Err(CoreError::UserNotFound(target).into());
    }

    let new_role =
        console.prompt_role("Enter user's new role (customer, driver, manager): ")?;
    db.users().update_role(&target, new_role).await?;

    info!(target = %target, role = %new_role, acting = %session.login(), "Role updated");
    console.write_line("User role updated!")?;
    Ok(())
}
