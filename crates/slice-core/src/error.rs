//! # Error Types
//!
//! Domain-specific error types for slice-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  slice-core errors (this file)                                         │
//! │  ├── CoreError        - Domain rule violations                         │
//! │  └── ValidationError  - Input-format failures                          │
//! │                                                                         │
//! │  slice-db errors (separate crate)                                      │
//! │  └── DbError          - Data store operation failures                  │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── CliError         - What the menu loop reports                     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → rendered message       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (login, item name, order id)
//! 3. Errors are enum variants, never String
//! 4. Each variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Domain rule violations.
///
/// These abort the current command with a message; they never terminate the
/// session and never leave partial state behind.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No user row matches the given login and password exactly.
    #[error("A user with that login and password does not exist")]
    InvalidCredentials,

    /// The requested store does not exist. Checked before any order write.
    #[error("Store not found: {0}")]
    StoreNotFound(i64),

    /// The named menu item does not exist.
    ///
    /// ## When This Occurs
    /// - A cart entry names an unknown item (soft: the entry is skipped)
    /// - A favorite-item update names an unknown item
    /// - A menu update targets an unknown item
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// The targeted user login does not exist.
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// No order row matches the given id.
    #[error("Order not found: {0}")]
    OrderNotFound(i64),

    /// A menu item with that name already exists.
    #[error("Item '{0}' already exists")]
    DuplicateItem(String),

    /// A user with that login already exists.
    #[error("Login '{0}' is already taken")]
    LoginTaken(String),

    /// The acting session's role (or identity) does not permit the
    /// operation.
    #[error("Insufficient privileges: {0}")]
    Forbidden(&'static str),

    /// The order transaction failed after validation; everything was rolled
    /// back and nothing was persisted.
    #[error("Order could not be placed: {0}")]
    OrderPlacementFailed(String),

    /// Checkout was attempted with no successfully resolved line items.
    #[error("Order contains no items")]
    EmptyOrder,

    /// A menu-item update named a field outside the updatable set.
    #[error("'{0}' is not an updatable field")]
    InvalidField(String),

    /// Input-format failure (wraps ValidationError).
    #[error("{0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input-format failures.
///
/// The console boundary recovers from these by re-prompting; they only
/// surface as errors when a value arrives through a non-interactive path.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} cannot be empty")]
    Required { field: &'static str },

    /// Phone numbers must be exactly ten consecutive digits.
    #[error("Phone number must be 10 consecutive digits (Ex: 1234567890)")]
    InvalidPhone,

    /// The value is not an integer.
    #[error("{field} must be a whole number")]
    NotAnInteger { field: &'static str },

    /// A numeric choice fell outside the offered range.
    #[error("Please enter a number between {min} and {max}")]
    OutOfRange { min: i64, max: i64 },

    /// Quantities must be positive.
    #[error("Quantity must be a positive whole number")]
    InvalidQuantity,

    /// Prices must be non-negative decimals with at most two places.
    #[error("Price must be a non-negative amount such as 9.99")]
    InvalidPrice,

    /// The value is not a recognized role name.
    #[error("Role must be one of: customer, driver, manager")]
    InvalidRole,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
