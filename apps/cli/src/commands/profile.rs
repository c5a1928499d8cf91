//! # Profile Commands
//!
//! Self-service: viewing the profile and updating password, phone number,
//! and favorite item. Password and phone updates re-verify the current
//! password first; the favorite-item update does not, but the item must
//! exist on the menu.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::console::Console;
use crate::error::CliResult;
use crate::session::Session;
use slice_core::CoreError;
use slice_db::Database;

pub async fn view_profile<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    db: &Database,
    session: &Session,
) -> CliResult<()> {
    debug!("view_profile command");

    let user = db
        .users()
        .get_by_login(session.login())
        .await?
        .ok_or_else(|| CoreError::UserNotFound(session.login().to_string()))?;

    console.write_line("\nProfile details:")?;
    console.write_line(&format!(
        "    Favorite item: {}",
        user.favorite_item.as_deref().unwrap_or("(none)")
    ))?;
    console.write_line(&format!("    Phone number: {}", user.phone_num))?;
    Ok(())
}

pub async fn update_profile<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    db: &Database,
    session: &Session,
) -> CliResult<()> {
    console.write_line("\nOPTIONS:")?;
    console.write_line("1. Update password")?;
    console.write_line("2. Update phone number")?;
    console.write_line("3. Update favorite item")?;
    console.write_line("4. Back")?;

    match console.prompt_choice_within("Please make your choice: ", 1, 4)? {
        1 => update_password(console, db, session).await,
        2 => update_phone_number(console, db, session).await,
        3 => update_favorite_item(console, db, session).await,
        _ => Ok(()),
    }
}

async fn update_password<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    db: &Database,
    session: &Session,
) -> CliResult<()> {
    let current = console.prompt_nonempty("Enter your current password: ", "Password")?;
    if !db
        .users()
        .verify_credentials(session.login(), &current)
        .await?
    {
        return Err(CoreError::InvalidCredentials.into());
    }

    let new_password = console.prompt_nonempty("Enter your new password: ", "Password")?;
    db.users()
        .update_password(session.login(), &new_password)
        .await?;

    info!(login = %session.login(), "Password updated");
    console.write_line("Password successfully updated!")?;
    Ok(())
}

async fn update_phone_number<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    db: &Database,
    session: &Session,
) -> CliResult<()> {
    let current = console.prompt_nonempty("Enter your password: ", "Password")?;
    if !db
        .users()
        .verify_credentials(session.login(), &current)
        .await?
    {
        return Err(CoreError::InvalidCredentials.into());
    }

    let phone_num = console.prompt_phone("Enter your new phone number: ")?;
    db.users().update_phone(session.login(), &phone_num).await?;

    info!(login = %session.login(), "Phone number updated");
    console.write_line("Phone number successfully updated!")?;
    Ok(())
}

async fn update_favorite_item<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    db: &Database,
    session: &Session,
) -> CliResult<()> {
    let item = console.prompt_nonempty("Enter your new favorite item: ", "Item name")?;
    if !db.items().exists(&item).await? {
        return Err(CoreError::ItemNotFound(item).into());
    }

    db.users()
        .update_favorite_item(session.login(), &item)
        .await?;

    console.write_line("Favorite item updated!")?;
    Ok(())
}
