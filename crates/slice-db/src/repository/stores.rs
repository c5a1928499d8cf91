//! # Store Repository
//!
//! Read-only access to store locations. Stores are reference data populated
//! by the seed tooling; nothing in the menu client mutates them.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use slice_core::StoreLocation;

/// Repository for store lookups.
#[derive(Debug, Clone)]
pub struct StoreRepository {
    pool: SqlitePool,
}

impl StoreRepository {
    /// Creates a new StoreRepository.
    pub fn new(pool: SqlitePool) -> Self {
        StoreRepository { pool }
    }

    /// Lists every store, ordered by id.
    pub async fn list_all(&self) -> DbResult<Vec<StoreLocation>> {
        let stores = sqlx::query_as::<_, StoreLocation>(
            r#"
            SELECT store_id, address, city, state, is_open, review_score
            FROM stores
            ORDER BY store_id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = stores.len(), "Listed stores");
        Ok(stores)
    }

    /// Checks whether a store id exists.
    ///
    /// Order placement calls this before writing anything.
    pub async fn exists(&self, store_id: i64) -> DbResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM stores WHERE store_id = ?1)")
                .bind(store_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    /// Inserts a store row (seed tooling only).
    pub async fn insert(&self, store: &StoreLocation) -> DbResult<()> {
        sqlx::query(
            r#"
            INSERT INTO stores (store_id, address, city, state, is_open, review_score)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(store.store_id)
        .bind(&store.address)
        .bind(&store.city)
        .bind(&store.state)
        .bind(store.is_open)
        .bind(store.review_score)
        .execute(&self.pool)
        .await?;

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

    #[tokio::test]
    async fn test_exists_and_listing_order() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let stores = db.stores();

        for id in [3, 1, 2] {
            stores
                .insert(&StoreLocation {
                    store_id: id,
                    address: format!("{id} Main St"),
                    city: "Riverside".to_string(),
                    state: "CA".to_string(),
                    is_open: true,
                    review_score: 4.0,
                })
                .await
                .unwrap();
        }

        assert!(stores.exists(1).await.unwrap());
        assert!(!stores.exists(99).await.unwrap());

        let listed = stores.list_all().await.unwrap();
        let ids: Vec<i64> = listed.iter().map(|s| s.store_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
