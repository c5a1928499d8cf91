//! # Seed Data Generator
//!
//! Populates the database with development data: a handful of stores, a
//! small menu, and one user per role.
//!
//! ## Usage
//! ```bash
//! cargo run -p slice-db --bin seed
//!
//! # Specify database path
//! cargo run -p slice-db --bin seed -- --db ./slice_dev.db
//! ```
//!
//! ## Seeded Accounts
//! | login | password | role     |
//! |-------|----------|----------|
//! | alice | alice    | customer |
//! | dan   | dan      | driver   |
//! | mia   | mia      | manager  |

use std::env;

use slice_core::{MenuItem, Role, StoreLocation, User};
use slice_db::{Database, DbConfig};

const STORES: &[(i64, &str, &str, &str, bool, f64)] = &[
    (1, "900 University Ave", "Riverside", "CA", true, 4.5),
    (2, "41 Mission Inn Ave", "Riverside", "CA", true, 4.1),
    (3, "12 Harbor Blvd", "Fullerton", "CA", false, 3.8),
];

const MENU: &[(&str, &str, &str, i64, &str)] = &[
    (
        "Pepperoni",
        "dough, tomato sauce, mozzarella, pepperoni",
        "entree",
        1000,
        "The classic.",
    ),
    (
        "Margherita",
        "dough, tomato sauce, mozzarella, basil",
        "entree",
        850,
        "Fresh basil, simple and right.",
    ),
    (
        "Veggie Supreme",
        "dough, tomato sauce, mozzarella, peppers, onion, olives",
        "entree",
        1150,
        "Everything from the garden.",
    ),
    (
        "Garlic Knots",
        "dough, garlic, butter, parsley",
        "side",
        450,
        "Six to an order.",
    ),
    ("Caesar Salad", "romaine, croutons, parmesan", "side", 600, ""),
    ("Soda", "carbonated water, syrup", "drink", 200, "Fountain, 20oz."),
    ("Iced Tea", "black tea, ice", "drink", 250, ""),
    (
        "Cannoli",
        "pastry shell, ricotta, chocolate chips",
        "dessert",
        550,
        "Two per order.",
    ),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./slice_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Slice Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./slice_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Slice Seed Data Generator");
    println!("=========================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    // Don't double-seed.
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM stores")
        .fetch_one(db.pool())
        .await?;
    if existing > 0 {
        println!("⚠ Database already has {} stores", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Seeding stores...");
    for &(store_id, address, city, state, is_open, review_score) in STORES {
        let store = StoreLocation {
            store_id,
            address: address.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            is_open,
            review_score,
        };
        if let Err(e) = db.stores().insert(&store).await {
            eprintln!("Failed to insert store {}: {}", store_id, e);
        }
    }

    println!("Seeding menu...");
    for &(item_name, ingredients, type_of_item, price_cents, description) in MENU {
        let item = MenuItem {
            item_name: item_name.to_string(),
            ingredients: ingredients.to_string(),
            type_of_item: type_of_item.to_string(),
            price_cents,
            description: description.to_string(),
        };
        if let Err(e) = db.items().insert(&item).await {
            eprintln!("Failed to insert item {}: {}", item_name, e);
        }
    }

    println!("Seeding users...");
    for (login, role) in [
        ("alice", Role::Customer),
        ("dan", Role::Driver),
        ("mia", Role::Manager),
    ] {
        let user = User {
            login: login.to_string(),
            password: login.to_string(),
            role,
            favorite_item: None,
            phone_num: "9515551234".to_string(),
        };
        if let Err(e) = db.users().insert(&user).await {
            eprintln!("Failed to insert user {}: {}", login, e);
        }
    }

    println!();
    println!(
        "✓ Seed complete: {} stores, {} menu items, 3 users",
        STORES.len(),
        MENU.len()
    );

    Ok(())
}
