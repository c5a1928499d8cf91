//! End-to-end menu flows over an in-memory database.
//!
//! Each test scripts a whole session - every line a user would type - runs
//! the real dispatch loop against real repositories, and then checks both
//! the captured console output and the resulting database state.

use std::io::Cursor;

use slice_cli::{commands, Console};
use slice_core::{Cart, MenuItem, Money, OrderStatus, Role, StoreLocation, User};
use slice_db::{Database, DbConfig};

async fn test_db() -> Database {
    Database::new(DbConfig::in_memory()).await.unwrap()
}

async fn seed_store_and_menu(db: &Database) {
    db.stores()
        .insert(&StoreLocation {
            store_id: 1,
            address: "900 University Ave".to_string(),
            city: "Riverside".to_string(),
            state: "CA".to_string(),
            is_open: true,
            review_score: 4.5,
        })
        .await
        .unwrap();

    for (name, price) in [("Pepperoni", 1000), ("Soda", 200)] {
        db.items()
            .insert(&MenuItem {
                item_name: name.to_string(),
                ingredients: "various".to_string(),
                type_of_item: "entree".to_string(),
                price_cents: price,
                description: String::new(),
            })
            .await
            .unwrap();
    }
}

async fn seed_user(db: &Database, login: &str, role: Role) {
    db.users()
        .insert(&User {
            login: login.to_string(),
            password: "secret".to_string(),
            role,
            favorite_item: None,
            phone_num: "9515551234".to_string(),
        })
        .await
        .unwrap();
}

/// Runs a scripted session to completion and returns the console output.
async fn run_script(db: &Database, script: &str) -> String {
    let mut console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    commands::run(&mut console, db).await.unwrap();
    String::from_utf8(console.into_writer()).unwrap()
}

#[tokio::test]
async fn register_login_order_and_view_detail() {
    let db = test_db().await;
    seed_store_and_menu(&db).await;

    // Register alice, log in, order 2×Pepperoni + 1×Soda (with one typo
    // along the way), then view the order's detail.
    let script = "1\nalice\nsecret\n1234567890\n\
                  2\nalice\nsecret\n\
                  4\n1\nPepperoni\n2\nSodaa\nSoda\n1\ndone\n\
                  7\n1\n\
                  20\n9\n";
    let output = run_script(&db, script).await;

    assert!(output.contains("User successfully created!"));
    assert!(output.contains("Login successful!"));
    // The typo was reported and skipped, not fatal.
    assert!(output.contains("Item not found: Sodaa"));
    assert!(output.contains("Order 1 successfully placed! Total: $22.00"));
    assert!(output.contains("Total price: $22.00"));
    assert!(output.contains("Order status: incomplete"));
    assert!(output.contains("Pepperoni x2"));

    // One header row, two line rows, exact total.
    let order = db.orders().get_by_id(1).await.unwrap().unwrap();
    assert_eq!(order.login, "alice");
    assert_eq!(order.total_price_cents, 2200);
    assert_eq!(order.order_status, OrderStatus::Incomplete);
    assert_eq!(db.orders().items_for(1).await.unwrap().len(), 2);
}

#[tokio::test]
async fn visibility_and_status_gates_across_roles() {
    let db = test_db().await;
    seed_store_and_menu(&db).await;
    seed_user(&db, "alice", Role::Customer).await;
    seed_user(&db, "bob", Role::Customer).await;
    seed_user(&db, "dan", Role::Driver).await;

    // Alice owns order 1.
    let mut cart = Cart::new();
    cart.add("Soda", 1, Money::from_cents(200));
    db.orders().create("alice", 1, &cart).await.unwrap();

    // Bob (customer): detail of alice's order is forbidden, status updates
    // are forbidden, and his own history is empty without being prompted
    // for a scope. Dan (driver): sees the detail, completes the order, and
    // lists every customer's recent orders.
    let script = "2\nbob\nsecret\n\
                  7\n1\n\
                  9\n\
                  5\n\
                  20\n\
                  2\ndan\nsecret\n\
                  7\n1\n\
                  9\n1\n1\n\
                  6\nall\n\
                  20\n9\n";
    let output = run_script(&db, script).await;

    assert!(output.contains("this order does not belong to you"));
    assert!(output.contains("order status updates require a driver or manager"));
    assert!(output.contains("(no orders)"));
    assert!(output.contains("Customer login: alice"));
    assert!(output.contains("Order '1' was updated!"));

    let order = db.orders().get_by_id(1).await.unwrap().unwrap();
    assert_eq!(order.order_status, OrderStatus::Completed);
}

#[tokio::test]
async fn manager_administration_flow() {
    let db = test_db().await;
    seed_store_and_menu(&db).await;
    seed_user(&db, "bob", Role::Customer).await;
    seed_user(&db, "mia", Role::Manager).await;

    // Mia: denied on her own role, promotes bob, adds an item (negative
    // price re-prompted, empty description allowed), is rejected on a
    // duplicate add and an unknown field, then reprices the new item.
    let script = "2\nmia\nsecret\n\
                  11\n2\nmia\n\
                  11\n2\nbob\ndriver\n\
                  10\n2\nCalzone\ndough, ricotta\nentree\n-1\n7.50\n\n\
                  10\n2\nCalzone\n\
                  10\n1\nCalzone\ncost\n\
                  10\n1\nCalzone\nprice\n8.25\n\
                  20\n9\n";
    let output = run_script(&db, script).await;

    assert!(output.contains("you cannot update your own login or role"));
    assert!(output.contains("User role updated!"));
    assert!(output.contains("Price must be a non-negative amount"));
    assert!(output.contains("Menu item added!"));
    assert!(output.contains("Item 'Calzone' already exists"));
    assert!(output.contains("'cost' is not an updatable field"));

    // Mia's own role untouched, bob promoted.
    assert_eq!(db.users().role_of("mia").await.unwrap(), Role::Manager);
    assert_eq!(db.users().role_of("bob").await.unwrap(), Role::Driver);

    let calzone = db.items().get_by_name("Calzone").await.unwrap().unwrap();
    assert_eq!(calzone.price_cents, 825);
}

#[tokio::test]
async fn order_aborts_cleanly_on_bad_store_and_empty_cart() {
    let db = test_db().await;
    seed_store_and_menu(&db).await;
    seed_user(&db, "alice", Role::Customer).await;

    // Unknown store aborts before anything is collected; an immediately
    // finished cart is rejected. Neither attempt writes a row.
    let script = "2\nalice\nsecret\n\
                  4\n99\n\
                  4\n1\ndone\n\
                  20\n9\n";
    let output = run_script(&db, script).await;

    assert!(output.contains("Store not found: 99"));
    assert!(output.contains("Order contains no items"));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM food_orders")
        .fetch_one(db.pool())
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn role_changes_take_effect_next_command() {
    let db = test_db().await;
    seed_store_and_menu(&db).await;
    seed_user(&db, "bob", Role::Customer).await;

    let mut cart = Cart::new();
    cart.add("Soda", 1, Money::from_cents(200));
    db.orders().create("bob", 1, &cart).await.unwrap();

    // Bob is denied a status update, promoted mid-session by a direct
    // role change, and his very next attempt succeeds - the session never
    // caches the role.
    let script_denied = "2\nbob\nsecret\n9\n20\n9\n";
    let output = run_script(&db, script_denied).await;
    assert!(output.contains("order status updates require a driver or manager"));

    db.users().update_role("bob", Role::Driver).await.unwrap();

    let script_allowed = "2\nbob\nsecret\n9\n1\n1\n20\n9\n";
    let output = run_script(&db, script_allowed).await;
    assert!(output.contains("Order '1' was updated!"));
}
