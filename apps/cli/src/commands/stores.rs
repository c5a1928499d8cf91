//! # Store Listing

use std::io::{BufRead, Write};

use crate::console::Console;
use crate::error::CliResult;
use slice_db::Database;

/// Lists every store location, ordered by id.
pub async fn view_stores<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    db: &Database,
) -> CliResult<()> {
    let stores = db.stores().list_all().await?;

    console.write_line("\nSTORES:")?;
    for store in &stores {
        console.write_line(&format!("\nStore ID: {}", store.store_id))?;
        console.write_line(&format!("    Address: {}", store.address))?;
        console.write_line(&format!("    City: {}", store.city))?;
        console.write_line(&format!("    State: {}", store.state))?;
        console.write_line(&format!(
            "    Is open: {}",
            if store.is_open { "yes" } else { "no" }
        ))?;
        console.write_line(&format!("    Review score: {:.1}", store.review_score))?;
    }
    Ok(())
}
