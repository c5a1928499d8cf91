//! # Order Repository
//!
//! Database operations for food orders and their line items.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Order Lifecycle                                   │
//! │                                                                         │
//! │  1. CREATE (one transaction)                                           │
//! │     ├── BEGIN                                                          │
//! │     ├── INSERT food_orders  → store generates order_id                 │
//! │     ├── INSERT order_items  (one row per distinct cart line)           │
//! │     └── COMMIT   ── any failure in between rolls everything back       │
//! │                                                                         │
//! │  2. STATUS UPDATES (driver/manager only, gated upstream)               │
//! │     └── incomplete ◄──► completed, idempotent                          │
//! │                                                                         │
//! │  Orders are never deleted and nothing else ever mutates them.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use slice_core::{Cart, FoodOrder, OrderItem, OrderScope, OrderStatus, RECENT_ORDER_LIMIT};

/// Repository for order database operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Persists an order header plus all its line items as one transaction.
    ///
    /// The header is inserted `incomplete` with a server-assigned timestamp;
    /// the store generates the order id and it is returned on commit. If any
    /// line insert fails the transaction rolls back and no trace of the
    /// order remains.
    ///
    /// The caller has already validated the store id and resolved every cart
    /// line against the menu; an empty cart is rejected upstream.
    pub async fn create(&self, login: &str, store_id: i64, cart: &Cart) -> DbResult<i64> {
        let now = Utc::now();
        let total = cart.total();

        debug!(login = %login, store_id, total = %total, lines = cart.lines().len(), "Creating order");

        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO food_orders (login, store_id, total_price_cents, order_timestamp, order_status)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(login)
        .bind(store_id)
        .bind(total.cents())
        .bind(now)
        .bind(OrderStatus::Incomplete)
        .execute(&mut *tx)
        .await?;

        let order_id = result.last_insert_rowid();

        for line in cart.lines() {
            sqlx::query(
                r#"
                INSERT INTO order_items (order_id, item_name, quantity)
                VALUES (?1, ?2, ?3)
                "#,
            )
            .bind(order_id)
            .bind(&line.item_name)
            .bind(line.quantity)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        debug!(order_id, "Order committed");
        Ok(order_id)
    }

    /// Gets an order header by id.
    pub async fn get_by_id(&self, order_id: i64) -> DbResult<Option<FoodOrder>> {
        let order = sqlx::query_as::<_, FoodOrder>(
            r#"
            SELECT order_id, login, store_id, total_price_cents, order_timestamp, order_status
            FROM food_orders
            WHERE order_id = ?1
            "#,
        )
        .bind(order_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(order)
    }

    /// Lists the full order history for a scope, newest first.
    ///
    /// The scope has already been resolved against the session's role; a
    /// customer can only ever arrive here scoped to themselves.
    pub async fn list(&self, scope: &OrderScope) -> DbResult<Vec<FoodOrder>> {
        let orders = match scope {
            OrderScope::All => {
                sqlx::query_as::<_, FoodOrder>(
                    r#"
                    SELECT order_id, login, store_id, total_price_cents, order_timestamp, order_status
                    FROM food_orders
                    ORDER BY order_timestamp DESC, order_id DESC
                    "#,
                )
                .fetch_all(&self.pool)
                .await?
            }
            OrderScope::Customer(login) => {
                sqlx::query_as::<_, FoodOrder>(
                    r#"
                    SELECT order_id, login, store_id, total_price_cents, order_timestamp, order_status
                    FROM food_orders
                    WHERE login = ?1
                    ORDER BY order_timestamp DESC, order_id DESC
                    "#,
                )
                .bind(login)
                .fetch_all(&self.pool)
                .await?
            }
        };

        debug!(count = orders.len(), "Listed orders");
        Ok(orders)
    }

    /// Like [`list`](Self::list) but bounded to the five most recent orders.
    pub async fn list_recent(&self, scope: &OrderScope) -> DbResult<Vec<FoodOrder>> {
        let orders = match scope {
            OrderScope::All => {
                sqlx::query_as::<_, FoodOrder>(
                    r#"
                    SELECT order_id, login, store_id, total_price_cents, order_timestamp, order_status
                    FROM food_orders
                    ORDER BY order_timestamp DESC, order_id DESC
                    LIMIT ?1
                    "#,
                )
                .bind(RECENT_ORDER_LIMIT)
                .fetch_all(&self.pool)
                .await?
            }
            OrderScope::Customer(login) => {
                sqlx::query_as::<_, FoodOrder>(
                    r#"
                    SELECT order_id, login, store_id, total_price_cents, order_timestamp, order_status
                    FROM food_orders
                    WHERE login = ?1
                    ORDER BY order_timestamp DESC, order_id DESC
                    LIMIT ?2
                    "#,
                )
                .bind(login)
                .bind(RECENT_ORDER_LIMIT)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(orders)
    }

    /// Gets the line items of an order, in a stable order.
    pub async fn items_for(&self, order_id: i64) -> DbResult<Vec<OrderItem>> {
        let items = sqlx::query_as::<_, OrderItem>(
            r#"
            SELECT order_id, item_name, quantity
            FROM order_items
            WHERE order_id = ?1
            ORDER BY item_name ASC
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Sets an order's status. Setting the status it already has is a no-op
    /// in effect.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - no such order
    pub async fn update_status(&self, order_id: i64, status: OrderStatus) -> DbResult<()> {
        debug!(order_id, %status, "Updating order status");

        let result = sqlx::query("UPDATE food_orders SET order_status = ?2 WHERE order_id = ?1")
            .bind(order_id)
            .bind(status)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Order", order_id));
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use slice_core::{MenuItem, Money, Role, StoreLocation, User};

    async fn seeded_db() -> Database {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        db.stores()
            .insert(&StoreLocation {
                store_id: 1,
                address: "1 Main St".to_string(),
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

        for login in ["alice", "bob"] {
            db.users()
                .insert(&User {
                    login: login.to_string(),
                    password: "secret".to_string(),
                    role: Role::Customer,
                    favorite_item: None,
                    phone_num: "1234567890".to_string(),
                })
                .await
                .unwrap();
        }

        db
    }

    fn alice_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add("Pepperoni", 2, Money::from_cents(1000));
        cart.add("Soda", 1, Money::from_cents(200));
        cart
    }

    #[tokio::test]
    async fn test_create_persists_exact_total_and_lines() {
        let db = seeded_db().await;

        let order_id = db.orders().create("alice", 1, &alice_cart()).await.unwrap();

        let order = db.orders().get_by_id(order_id).await.unwrap().unwrap();
        assert_eq!(order.login, "alice");
        assert_eq!(order.store_id, 1);
        assert_eq!(order.total_price_cents, 2200); // 2 × $10.00 + 1 × $2.00
        assert_eq!(order.order_status, OrderStatus::Incomplete);

        let lines = db.orders().items_for(order_id).await.unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].item_name, "Pepperoni");
        assert_eq!(lines[0].quantity, 2);
        assert_eq!(lines[1].item_name, "Soda");
        assert_eq!(lines[1].quantity, 1);
    }

    #[tokio::test]
    async fn test_create_rolls_back_on_line_failure() {
        let db = seeded_db().await;

        // One valid line, one violating the item foreign key.
        let mut cart = Cart::new();
        cart.add("Pepperoni", 1, Money::from_cents(1000));
        cart.add("Unlisted", 1, Money::from_cents(100));

        let err = db.orders().create("alice", 1, &cart).await.unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));

        // The header must not have survived the rollback.
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM food_orders")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_status_transitions_are_idempotent() {
        let db = seeded_db().await;
        let orders = db.orders();

        let order_id = orders.create("alice", 1, &alice_cart()).await.unwrap();

        orders
            .update_status(order_id, OrderStatus::Completed)
            .await
            .unwrap();
        // Completing an already-completed order changes nothing.
        orders
            .update_status(order_id, OrderStatus::Completed)
            .await
            .unwrap();

        let order = orders.get_by_id(order_id).await.unwrap().unwrap();
        assert_eq!(order.order_status, OrderStatus::Completed);

        orders
            .update_status(order_id, OrderStatus::Incomplete)
            .await
            .unwrap();
        let order = orders.get_by_id(order_id).await.unwrap().unwrap();
        assert_eq!(order.order_status, OrderStatus::Incomplete);
    }

    #[tokio::test]
    async fn test_update_status_unknown_order() {
        let db = seeded_db().await;

        let err = db
            .orders()
            .update_status(404, OrderStatus::Completed)
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_scopes() {
        let db = seeded_db().await;
        let orders = db.orders();

        let mut cart = Cart::new();
        cart.add("Soda", 1, Money::from_cents(200));

        orders.create("alice", 1, &cart).await.unwrap();
        orders.create("alice", 1, &cart).await.unwrap();
        orders.create("bob", 1, &cart).await.unwrap();

        let alice = orders
            .list(&OrderScope::Customer("alice".to_string()))
            .await
            .unwrap();
        assert_eq!(alice.len(), 2);
        assert!(alice.iter().all(|o| o.login == "alice"));

        let all = orders.list(&OrderScope::All).await.unwrap();
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn test_recent_orders_bounded_and_newest_first() {
        let db = seeded_db().await;
        let orders = db.orders();

        let mut cart = Cart::new();
        cart.add("Soda", 1, Money::from_cents(200));

        let mut ids = Vec::new();
        for _ in 0..6 {
            ids.push(orders.create("alice", 1, &cart).await.unwrap());
        }

        let recent = orders
            .list_recent(&OrderScope::Customer("alice".to_string()))
            .await
            .unwrap();

        assert_eq!(recent.len(), 5);
        let recent_ids: Vec<i64> = recent.iter().map(|o| o.order_id).collect();
        let mut expected: Vec<i64> = ids[1..].to_vec();
        expected.reverse();
        assert_eq!(recent_ids, expected);

        // Newest first by timestamp as well.
        for pair in recent.windows(2) {
            assert!(pair[0].order_timestamp >= pair[1].order_timestamp);
        }
    }
}
