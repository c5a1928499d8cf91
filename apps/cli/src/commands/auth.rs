//! # Registration and Login

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::console::Console;
use crate::error::{CliError, CliResult};
use crate::session::Session;
use slice_core::{CoreError, Role, User};
use slice_db::{Database, DbError};

/// Self-registration. Always creates a customer with no favorite item.
pub async fn register<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    db: &Database,
) -> CliResult<()> {
    debug!("register command");

    let login = console.prompt_nonempty("\nEnter login: ", "Login")?;
    if db.users().login_exists(&login).await? {
        return Err(CoreError::LoginTaken(login).into());
    }

    let password = console.prompt_nonempty("\nEnter password: ", "Password")?;
    let phone_num = console.prompt_phone("\nEnter phone number: ")?;

    let user = User {
        login,
        password,
        role: Role::Customer,
        favorite_item: None,
        phone_num,
    };

    // The primary key backstops the pre-check if another registration slips
    // in between.
    db.users().insert(&user).await.map_err(|e| match e {
        DbError::UniqueViolation { .. } => CliError::Core(CoreError::LoginTaken(user.login.clone())),
        other => CliError::Db(other),
    })?;

    info!(login = %user.login, "User created");
    console.write_line("\nUser successfully created!")?;
    Ok(())
}

/// Credential check; opens the session the user menu runs under.
pub async fn log_in<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    db: &Database,
) -> CliResult<Session> {
    debug!("log_in command");

    let login = console.prompt_nonempty("\nEnter login: ", "Login")?;
    let password = console.prompt_nonempty("\nEnter password: ", "Password")?;

    let session = Session::authenticate(&db.users(), &login, &password).await?;
    console.write_line("\nLogin successful!")?;
    Ok(session)
}
