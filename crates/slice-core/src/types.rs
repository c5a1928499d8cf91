//! # Domain Types
//!
//! Core domain types used throughout Slice.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      User       │   │    MenuItem     │   │    FoodOrder    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  login (key)    │   │  item_name(key) │   │  order_id (gen) │       │
//! │  │  password       │   │  type_of_item   │   │  login (owner)  │       │
//! │  │  role           │   │  price_cents    │   │  total_price    │       │
//! │  │  favorite_item  │   │  description    │   │  order_status   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Role       │   │   OrderStatus   │   │   OrderScope    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Customer       │   │  Incomplete     │   │  All            │       │
//! │  │  Driver         │   │  Completed      │   │  Customer(login)│       │
//! │  │  Manager        │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Identity here is natural keys: `login` for users, `item_name` for menu
//! items, `store_id` for stores. Order ids are generated by the data store
//! at insert time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Role
// =============================================================================

/// The role attached to a user account.
///
/// Self-registration always produces `Customer`; only a manager promotes
/// accounts to `Driver` or `Manager` (and never their own, see
/// [`crate::access`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Driver,
    Manager,
}

impl Role {
    /// Stable lowercase name, matching the stored representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Driver => "driver",
            Role::Manager => "manager",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "customer" => Ok(Role::Customer),
            "driver" => Ok(Role::Driver),
            "manager" => Ok(Role::Manager),
            _ => Err(ValidationError::InvalidRole),
        }
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// Lifecycle of a food order.
///
/// Orders are created `Incomplete` and move between the two states only
/// through an explicit driver/manager update. Orders are never deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Incomplete,
    Completed,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OrderStatus::Incomplete => "incomplete",
            OrderStatus::Completed => "completed",
        })
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Incomplete
    }
}

// =============================================================================
// User
// =============================================================================

/// A user account.
///
/// `password` is the stored credential compared verbatim at login; there is
/// deliberately no hashing in this system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct User {
    /// Unique login name - the primary identity everywhere.
    pub login: String,

    /// Plaintext credential.
    pub password: String,

    /// Role gating privileged commands.
    pub role: Role,

    /// Optional reference to a menu item name. Unset at registration.
    pub favorite_item: Option<String>,

    /// Exactly ten ASCII digits.
    pub phone_num: String,
}

// =============================================================================
// Store
// =============================================================================

/// A physical store location. Read-only reference data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct StoreLocation {
    pub store_id: i64,
    pub address: String,
    pub city: String,
    pub state: String,
    pub is_open: bool,
    pub review_score: f64,
}

// =============================================================================
// Menu Item
// =============================================================================

/// An orderable menu item. Created and mutated only by managers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct MenuItem {
    /// Unique item name - referenced by carts, order lines, and favorites.
    pub item_name: String,

    /// Free-text ingredient list.
    pub ingredients: String,

    /// Category tag used by the menu browser's type filter.
    pub type_of_item: String,

    /// Price in cents. Never negative.
    pub price_cents: i64,

    /// Free text; may be empty.
    pub description: String,
}

impl MenuItem {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Food Order
// =============================================================================

/// An order header.
///
/// Immutable after creation except for `order_status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct FoodOrder {
    /// Store-generated id.
    pub order_id: i64,

    /// Owning customer.
    pub login: String,

    /// Store the order was placed against.
    pub store_id: i64,

    /// Exact sum of quantity × unit price over the line items, in cents.
    pub total_price_cents: i64,

    /// Server time at creation.
    pub order_timestamp: DateTime<Utc>,

    pub order_status: OrderStatus,
}

impl FoodOrder {
    /// Returns the total as a Money type.
    #[inline]
    pub fn total_price(&self) -> Money {
        Money::from_cents(self.total_price_cents)
    }
}

/// One line of an order: a distinct item and its quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct OrderItem {
    pub order_id: i64,
    pub item_name: String,
    pub quantity: i64,
}

// =============================================================================
// Menu Filter
// =============================================================================

/// Sort direction for menu listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceOrder {
    Ascending,
    Descending,
}

/// Criteria for a menu listing.
///
/// Absent fields mean "unrestricted" - there are no sentinel values at this
/// level. The console layer maps the `all` / `0` conventions users type into
/// `None` before the filter reaches the catalog.
#[derive(Debug, Clone)]
pub struct MenuFilter {
    /// Match against the stored item type (whitespace-trimmed, exact).
    pub item_type: Option<String>,

    /// Keep items priced at or below this cap.
    pub max_price: Option<Money>,

    pub order: PriceOrder,
}

impl MenuFilter {
    /// An unrestricted listing in the given direction.
    pub fn unrestricted(order: PriceOrder) -> Self {
        MenuFilter {
            item_type: None,
            max_price: None,
            order,
        }
    }
}

// =============================================================================
// Menu Item Updates
// =============================================================================

/// The fields of a menu item a manager may update.
///
/// The item's name is deliberately absent: it is the key that order lines
/// and favorites reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Ingredients,
    TypeOfItem,
    Price,
    Description,
}

impl ItemField {
    /// Parses a field name typed at the console.
    ///
    /// Returns the unrecognized input on failure so the caller can build an
    /// `InvalidField` error with context.
    pub fn parse(input: &str) -> Result<ItemField, String> {
        match input.trim() {
            "ingredients" => Ok(ItemField::Ingredients),
            "type" => Ok(ItemField::TypeOfItem),
            "price" => Ok(ItemField::Price),
            "description" => Ok(ItemField::Description),
            other => Err(other.to_string()),
        }
    }
}

/// A typed update to one field of a menu item.
#[derive(Debug, Clone)]
pub enum ItemUpdate {
    Ingredients(String),
    TypeOfItem(String),
    Price(Money),
    Description(String),
}

// =============================================================================
// Order Scope
// =============================================================================

/// Whose orders a listing covers.
///
/// Produced by [`crate::access::resolve_order_scope`]; customers can never
/// obtain `All`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderScope {
    /// No login filter - every customer's orders.
    All,
    /// Orders owned by one login.
    Customer(String),
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in [Role::Customer, Role::Driver, Role::Manager] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        assert!("admin".parse::<Role>().is_err());
        assert!(" driver ".parse::<Role>().unwrap() == Role::Driver);
    }

    #[test]
    fn test_item_field_parse() {
        assert_eq!(ItemField::parse("price"), Ok(ItemField::Price));
        assert_eq!(ItemField::parse(" type "), Ok(ItemField::TypeOfItem));
        assert_eq!(ItemField::parse("itemName"), Err("itemName".to_string()));
    }

    #[test]
    fn test_menu_item_price_accessor() {
        let item = MenuItem {
            item_name: "Pepperoni".to_string(),
            ingredients: "dough, tomato, pepperoni".to_string(),
            type_of_item: "entree".to_string(),
            price_cents: 1000,
            description: String::new(),
        };
        assert_eq!(item.price(), Money::from_cents(1000));
    }
}
