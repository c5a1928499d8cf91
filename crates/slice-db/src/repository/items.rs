//! # Menu Item Repository
//!
//! Database operations for the menu: filtered browsing for everyone, and
//! manager-only inserts and field updates.
//!
//! ## Catalog Filtering
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Filter Assembly                                    │
//! │                                                                         │
//! │  MenuFilter { item_type, max_price, order }                            │
//! │       │                                                                 │
//! │       ├── item_type: Some(t) ──► AND TRIM(type_of_item) = ?  (bound)   │
//! │       ├── max_price: Some(p) ──► AND price_cents <= ?        (bound)   │
//! │       └── order ───────────────► ORDER BY price_cents ASC|DESC         │
//! │                                                                         │
//! │  The SQL text is chosen from fixed fragments; every value is a bound   │
//! │  parameter. TRIM keeps the historical tolerance for stray leading      │
//! │  whitespace in stored type tags while staying case-sensitive.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use slice_core::{ItemUpdate, MenuFilter, MenuItem, PriceOrder};

/// Repository for menu item database operations.
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: SqlitePool,
}

impl ItemRepository {
    /// Creates a new ItemRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ItemRepository { pool }
    }

    /// Lists menu items matching the filter, sorted by price.
    ///
    /// An empty result is an empty Vec, not an error; the caller renders
    /// the empty-result message.
    pub async fn list(&self, filter: &MenuFilter) -> DbResult<Vec<MenuItem>> {
        let mut sql = String::from(
            "SELECT item_name, ingredients, type_of_item, price_cents, description \
             FROM menu_items WHERE 1=1",
        );
        if filter.item_type.is_some() {
            sql.push_str(" AND TRIM(type_of_item) = ?");
        }
        if filter.max_price.is_some() {
            sql.push_str(" AND price_cents <= ?");
        }
        sql.push_str(match filter.order {
            PriceOrder::Ascending => " ORDER BY price_cents ASC, item_name ASC",
            PriceOrder::Descending => " ORDER BY price_cents DESC, item_name ASC",
        });

        let mut query = sqlx::query_as::<_, MenuItem>(&sql);
        if let Some(item_type) = &filter.item_type {
            query = query.bind(item_type);
        }
        if let Some(max_price) = filter.max_price {
            query = query.bind(max_price.cents());
        }

        let items = query.fetch_all(&self.pool).await?;

        debug!(count = items.len(), "Listed menu items");
        Ok(items)
    }

    /// Gets a menu item by name.
    pub async fn get_by_name(&self, item_name: &str) -> DbResult<Option<MenuItem>> {
        let item = sqlx::query_as::<_, MenuItem>(
            r#"
            SELECT item_name, ingredients, type_of_item, price_cents, description
            FROM menu_items
            WHERE item_name = ?1
            "#,
        )
        .bind(item_name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    /// Checks whether an item name exists.
    pub async fn exists(&self, item_name: &str) -> DbResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM menu_items WHERE item_name = ?1)")
                .bind(item_name)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    /// Inserts a new menu item.
    ///
    /// ## Returns
    /// * `Err(DbError::UniqueViolation)` - item name already exists
    pub async fn insert(&self, item: &MenuItem) -> DbResult<()> {
        debug!(item = %item.item_name, "Inserting menu item");

        sqlx::query(
            r#"
            INSERT INTO menu_items (item_name, ingredients, type_of_item, price_cents, description)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&item.item_name)
        .bind(&item.ingredients)
        .bind(&item.type_of_item)
        .bind(item.price_cents)
        .bind(&item.description)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Applies one typed field update to an existing item.
    ///
    /// The field is selected by enum, never by caller-supplied SQL text.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - no such item
    pub async fn apply_update(&self, item_name: &str, update: &ItemUpdate) -> DbResult<()> {
        debug!(item = %item_name, ?update, "Updating menu item");

        let result = match update {
            ItemUpdate::Ingredients(value) => {
                sqlx::query("UPDATE menu_items SET ingredients = ?2 WHERE item_name = ?1")
                    .bind(item_name)
                    .bind(value)
                    .execute(&self.pool)
                    .await?
            }
            ItemUpdate::TypeOfItem(value) => {
                sqlx::query("UPDATE menu_items SET type_of_item = ?2 WHERE item_name = ?1")
                    .bind(item_name)
                    .bind(value)
                    .execute(&self.pool)
                    .await?
            }
            ItemUpdate::Price(value) => {
                sqlx::query("UPDATE menu_items SET price_cents = ?2 WHERE item_name = ?1")
                    .bind(item_name)
                    .bind(value.cents())
                    .execute(&self.pool)
                    .await?
            }
            ItemUpdate::Description(value) => {
                sqlx::query("UPDATE menu_items SET description = ?2 WHERE item_name = ?1")
                    .bind(item_name)
                    .bind(value)
                    .execute(&self.pool)
                    .await?
            }
        };

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Item", item_name));
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
    use slice_core::Money;

    fn item(name: &str, type_of_item: &str, price_cents: i64) -> MenuItem {
        MenuItem {
            item_name: name.to_string(),
            ingredients: "various".to_string(),
            type_of_item: type_of_item.to_string(),
            price_cents,
            description: String::new(),
        }
    }

    async fn seeded_db() -> Database {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let items = db.items();
        items.insert(&item("Pepperoni", "entree", 1000)).await.unwrap();
        items.insert(&item("Margherita", "entree", 850)).await.unwrap();
        items.insert(&item("Soda", " drink", 200)).await.unwrap(); // stray leading space
        items.insert(&item("Garlic Knots", "side", 450)).await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_unrestricted_listing_sorts_by_price() {
        let db = seeded_db().await;

        let ascending = db
            .items()
            .list(&MenuFilter::unrestricted(PriceOrder::Ascending))
            .await
            .unwrap();
        let prices: Vec<i64> = ascending.iter().map(|i| i.price_cents).collect();
        assert_eq!(prices, vec![200, 450, 850, 1000]);

        let descending = db
            .items()
            .list(&MenuFilter::unrestricted(PriceOrder::Descending))
            .await
            .unwrap();
        let prices: Vec<i64> = descending.iter().map(|i| i.price_cents).collect();
        assert_eq!(prices, vec![1000, 850, 450, 200]);
    }

    #[tokio::test]
    async fn test_type_filter_tolerates_stored_whitespace() {
        let db = seeded_db().await;

        let drinks = db
            .items()
            .list(&MenuFilter {
                item_type: Some("drink".to_string()),
                max_price: None,
                order: PriceOrder::Ascending,
            })
            .await
            .unwrap();

        assert_eq!(drinks.len(), 1);
        assert_eq!(drinks[0].item_name, "Soda");
    }

    #[tokio::test]
    async fn test_price_cap_filter() {
        let db = seeded_db().await;

        let cheap = db
            .items()
            .list(&MenuFilter {
                item_type: None,
                max_price: Some(Money::from_cents(500)),
                order: PriceOrder::Ascending,
            })
            .await
            .unwrap();

        let names: Vec<&str> = cheap.iter().map(|i| i.item_name.as_str()).collect();
        assert_eq!(names, vec!["Soda", "Garlic Knots"]);
    }

    #[tokio::test]
    async fn test_no_match_is_empty_not_error() {
        let db = seeded_db().await;

        let none = db
            .items()
            .list(&MenuFilter {
                item_type: Some("dessert".to_string()),
                max_price: None,
                order: PriceOrder::Ascending,
            })
            .await
            .unwrap();

        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_item_rejected() {
        let db = seeded_db().await;

        let err = db
            .items()
            .insert(&item("Pepperoni", "entree", 1200))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }

    #[tokio::test]
    async fn test_typed_field_updates() {
        let db = seeded_db().await;
        let items = db.items();

        items
            .apply_update("Soda", &ItemUpdate::Price(Money::from_cents(250)))
            .await
            .unwrap();
        items
            .apply_update("Soda", &ItemUpdate::Description("cold".to_string()))
            .await
            .unwrap();

        let soda = items.get_by_name("Soda").await.unwrap().unwrap();
        assert_eq!(soda.price_cents, 250);
        assert_eq!(soda.description, "cold");

        let err = items
            .apply_update("Ghost", &ItemUpdate::Price(Money::zero()))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
