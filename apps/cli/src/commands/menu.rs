//! # Menu Commands
//!
//! Browsing for everyone; item administration for managers.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::console::Console;
use crate::error::{CliError, CliResult};
use crate::session::Session;
use slice_core::{
    access, CoreError, ItemField, ItemUpdate, MenuFilter, MenuItem, PriceOrder, TYPE_FILTER_ALL,
};
use slice_db::{Database, DbError};

/// Interactive menu browser: optional type filter, optional price cap,
/// chosen sort direction.
///
/// The console keeps the historical conventions - `all` for every type,
/// `0` for no price cap - and maps them to absent filters.
pub async fn view_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    db: &Database,
) -> CliResult<()> {
    debug!("view_menu command");

    let type_input = console.prompt_nonempty(
        "\nEnter the type of items you want to see (e.g. \"entree\"),\n\
         or \"all\" to see items of every type: ",
        "Item type",
    )?;
    let item_type = if type_input == TYPE_FILTER_ALL {
        None
    } else {
        Some(type_input)
    };

    let price_input = console.prompt_price(
        "\nEnter the maximum price of items you want to see,\n\
         or 0 to see items of every price: ",
    )?;
    let max_price = if price_input.is_zero() {
        None
    } else {
        Some(price_input)
    };

    console.write_line("\nWhat order do you want to see the items in?")?;
    console.write_line("1. Ascending price order")?;
    console.write_line("2. Descending price order")?;
    let order = match console.prompt_choice_within("Please make your choice: ", 1, 2)? {
        1 => PriceOrder::Ascending,
        _ => PriceOrder::Descending,
    };

    let filter = MenuFilter {
        item_type,
        max_price,
        order,
    };
    let items = db.items().list(&filter).await?;

    if items.is_empty() {
        let mut message = String::from("No items found");
        if let Some(item_type) = &filter.item_type {
            message.push_str(&format!(" of type \"{item_type}\""));
        }
        if let Some(max_price) = filter.max_price {
            message.push_str(&format!(" at or under {max_price}"));
        }
        message.push('.');
        console.write_line(&message)?;
        return Ok(());
    }

    for item in &items {
        console.write_line(&format!("\nItem: {}", item.item_name))?;
        console.write_line(&format!("    Type of item: {}", item.type_of_item.trim()))?;
        console.write_line(&format!("    Price: {}", item.price()))?;
        console.write_line(&format!("    Description: {}", item.description))?;
        console.write_line(&format!("    Ingredients: {}", item.ingredients))?;
    }
    Ok(())
}

/// Manager-only menu administration submenu.
pub async fn update_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    db: &Database,
    session: &Session,
) -> CliResult<()> {
    let role = session.current_role(&db.users()).await?;
    access::ensure_manager(role)?;

    console.write_line("\nOPTIONS:")?;
    console.write_line("1. Update item")?;
    console.write_line("2. Add item")?;
    console.write_line("3. Back")?;

    match console.prompt_choice_within("Please make your choice: ", 1, 3)? {
        1 => update_menu_item(console, db).await,
        2 => add_menu_item(console, db).await,
        _ => Ok(()),
    }
}

/// Updates one field of an existing item. The field is chosen from a fixed
/// allow-list and the value is read with the matching typed prompt.
async fn update_menu_item<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    db: &Database,
) -> CliResult<()> {
    let item = console.prompt_nonempty("Enter item to update: ", "Item name")?;
    if !db.items().exists(&item).await? {
        return Err(CoreError::ItemNotFound(item).into());
    }

    let field_input = console.prompt_nonempty(
        "Enter field to update (ingredients, type, price, description): ",
        "Field",
    )?;
    let field = ItemField::parse(&field_input).map_err(CoreError::InvalidField)?;

    let update = match field {
        ItemField::Ingredients => ItemUpdate::Ingredients(
            console.prompt_nonempty("Enter the new ingredients: ", "Ingredients")?,
        ),
        ItemField::TypeOfItem => {
            ItemUpdate::TypeOfItem(console.prompt_nonempty("Enter the new type: ", "Type")?)
        }
        ItemField::Price => ItemUpdate::Price(console.prompt_price("Enter the new price: ")?),
        ItemField::Description => {
            ItemUpdate::Description(console.prompt_line("Enter the new description: ")?)
        }
    };

    db.items().apply_update(&item, &update).await?;

    info!(item = %item, "Menu item updated");
    console.write_line("Menu item updated!")?;
    Ok(())
}

/// Adds a new item. All fields except the description are required; a
/// negative price never gets past the prompt.
async fn add_menu_item<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    db: &Database,
) -> CliResult<()> {
    let item_name = console.prompt_nonempty("Enter item to add: ", "Item name")?;
    if db.items().exists(&item_name).await? {
        return Err(CoreError::DuplicateItem(item_name).into());
    }

    let ingredients = console.prompt_nonempty("Enter item ingredients: ", "Ingredients")?;
    let type_of_item = console.prompt_nonempty("Enter type of item: ", "Type")?;
    let price = console.prompt_price("Enter item price: ")?;
    let description = console.prompt_line("Enter description: ")?;

    let item = MenuItem {
        item_name,
        ingredients,
        type_of_item,
        price_cents: price.cents(),
        description,
    };

    db.items().insert(&item).await.map_err(|e| match e {
        DbError::UniqueViolation { .. } => {
            CliError::Core(CoreError::DuplicateItem(item.item_name.clone()))
        }
        other => CliError::Db(other),
    })?;

    info!(item = %item.item_name, "Menu item added");
    console.write_line("Menu item added!")?;
    Ok(())
}
