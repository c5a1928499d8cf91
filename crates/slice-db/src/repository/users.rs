//! # User Repository
//!
//! Database operations for user accounts: registration, credential checks,
//! self-service profile updates, and manager-only login/role updates.
//!
//! The role is always read fresh from the store - it is never cached - so an
//! administrative role change takes effect on the target's next gated
//! command.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use slice_core::{Role, User};

/// Repository for user database operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Creates a new UserRepository.
    pub fn new(pool: SqlitePool) -> Self {
        UserRepository { pool }
    }

    /// Gets a user by login.
    pub async fn get_by_login(&self, login: &str) -> DbResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT login, password, role, favorite_item, phone_num
            FROM users
            WHERE login = ?1
            "#,
        )
        .bind(login)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Checks whether a login is taken.
    pub async fn login_exists(&self, login: &str) -> DbResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE login = ?1)")
                .bind(login)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    /// Checks a login/password pair against the stored credential.
    ///
    /// The comparison is exact and case-sensitive; there is no hashing in
    /// this system.
    pub async fn verify_credentials(&self, login: &str, password: &str) -> DbResult<bool> {
        let matched: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM users WHERE login = ?1 AND password = ?2)",
        )
        .bind(login)
        .bind(password)
        .fetch_one(&self.pool)
        .await?;

        Ok(matched)
    }

    /// Reads the current role of a user.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - no such login
    pub async fn role_of(&self, login: &str) -> DbResult<Role> {
        let role: Option<Role> = sqlx::query_scalar("SELECT role FROM users WHERE login = ?1")
            .bind(login)
            .fetch_optional(&self.pool)
            .await?;

        role.ok_or_else(|| DbError::not_found("User", login))
    }

    /// Inserts a new user row.
    ///
    /// ## Returns
    /// * `Err(DbError::UniqueViolation)` - login already taken
    pub async fn insert(&self, user: &User) -> DbResult<()> {
        debug!(login = %user.login, "Inserting user");

        sqlx::query(
            r#"
            INSERT INTO users (login, password, role, favorite_item, phone_num)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&user.login)
        .bind(&user.password)
        .bind(user.role)
        .bind(&user.favorite_item)
        .bind(&user.phone_num)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Updates a user's password.
    pub async fn update_password(&self, login: &str, new_password: &str) -> DbResult<()> {
        debug!(login = %login, "Updating password");

        let result = sqlx::query("UPDATE users SET password = ?2 WHERE login = ?1")
            .bind(login)
            .bind(new_password)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("User", login));
        }

        Ok(())
    }

    /// Updates a user's phone number.
    pub async fn update_phone(&self, login: &str, phone_num: &str) -> DbResult<()> {
        debug!(login = %login, "Updating phone number");

        let result = sqlx::query("UPDATE users SET phone_num = ?2 WHERE login = ?1")
            .bind(login)
            .bind(phone_num)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("User", login));
        }

        Ok(())
    }

    /// Updates a user's favorite item reference.
    ///
    /// The caller verifies the item exists first; the foreign key backstops
    /// it.
    pub async fn update_favorite_item(&self, login: &str, item_name: &str) -> DbResult<()> {
        debug!(login = %login, item = %item_name, "Updating favorite item");

        let result = sqlx::query("UPDATE users SET favorite_item = ?2 WHERE login = ?1")
            .bind(login)
            .bind(item_name)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("User", login));
        }

        Ok(())
    }

    /// Renames a user's login. Order rows follow via ON UPDATE CASCADE.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - no such login
    /// * `Err(DbError::UniqueViolation)` - the new login is taken
    pub async fn update_login(&self, login: &str, new_login: &str) -> DbResult<()> {
        debug!(login = %login, new_login = %new_login, "Updating login");

        let result = sqlx::query("UPDATE users SET login = ?2 WHERE login = ?1")
            .bind(login)
            .bind(new_login)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("User", login));
        }

        Ok(())
    }

    /// Changes a user's role.
    pub async fn update_role(&self, login: &str, role: Role) -> DbResult<()> {
        debug!(login = %login, role = %role, "Updating role");

        let result = sqlx::query("UPDATE users SET role = ?2 WHERE login = ?1")
            .bind(login)
            .bind(role)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("User", login));
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

    fn customer(login: &str) -> User {
        User {
            login: login.to_string(),
            password: "secret".to_string(),
            role: Role::Customer,
            favorite_item: None,
            phone_num: "1234567890".to_string(),
        }
    }

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_register_and_verify() {
        let db = test_db().await;
        let users = db.users();

        users.insert(&customer("alice")).await.unwrap();

        assert!(users.login_exists("alice").await.unwrap());
        assert!(users.verify_credentials("alice", "secret").await.unwrap());
        assert!(!users.verify_credentials("alice", "wrong").await.unwrap());
        assert!(!users.verify_credentials("Alice", "secret").await.unwrap());

        let row = users.get_by_login("alice").await.unwrap().unwrap();
        assert_eq!(row.role, Role::Customer);
        assert_eq!(row.favorite_item, None);
    }

    #[tokio::test]
    async fn test_duplicate_login_rejected() {
        let db = test_db().await;
        let users = db.users();

        users.insert(&customer("alice")).await.unwrap();
        let err = users.insert(&customer("alice")).await.unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));

        // Still exactly one row.
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE login = 'alice'")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_role_is_read_fresh() {
        let db = test_db().await;
        let users = db.users();

        users.insert(&customer("bob")).await.unwrap();
        assert_eq!(users.role_of("bob").await.unwrap(), Role::Customer);

        users.update_role("bob", Role::Driver).await.unwrap();
        assert_eq!(users.role_of("bob").await.unwrap(), Role::Driver);
    }

    #[tokio::test]
    async fn test_updates_on_missing_user() {
        let db = test_db().await;
        let users = db.users();

        assert!(matches!(
            users.update_password("ghost", "x").await.unwrap_err(),
            DbError::NotFound { .. }
        ));
        assert!(matches!(
            users.role_of("ghost").await.unwrap_err(),
            DbError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_login_rename_collision() {
        let db = test_db().await;
        let users = db.users();

        users.insert(&customer("alice")).await.unwrap();
        users.insert(&customer("bob")).await.unwrap();

        let err = users.update_login("bob", "alice").await.unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));

        users.update_login("bob", "robert").await.unwrap();
        assert!(users.login_exists("robert").await.unwrap());
        assert!(!users.login_exists("bob").await.unwrap());
    }
}
