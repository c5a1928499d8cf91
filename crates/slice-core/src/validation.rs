//! # Validation Module
//!
//! Validate-or-fail parsers for console input.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console boundary (apps/cli)                                  │
//! │  ├── Calls THIS MODULE once per line of input                          │
//! │  └── Re-prompts on Err - format problems never escape the prompt       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Domain rules (slice-core)                                    │
//! │  └── Role gates, existence checks, duplicate checks                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Data store (SQLite)                                          │
//! │  ├── NOT NULL / CHECK constraints                                      │
//! │  ├── UNIQUE (primary key) constraints                                  │
//! │  └── Foreign key constraints                                           │
//! │                                                                         │
//! │  Defense in depth: each layer catches what the one above missed        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function here is a single attempt on a single string: no looping,
//! no prompting, no I/O. The interactive retry loop lives at the console
//! boundary and is a thin caller.

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::PHONE_DIGITS;

// =============================================================================
// String Parsers
// =============================================================================

/// Validates a required free-text field (login, password, item name, ...).
///
/// ## Rules
/// - Must not be empty after trimming
///
/// ## Returns
/// The trimmed value.
///
/// ## Example
/// ```rust
/// use slice_core::validation::parse_nonempty;
///
/// assert_eq!(parse_nonempty(" alice ", "Login").unwrap(), "alice");
/// assert!(parse_nonempty("   ", "Login").is_err());
/// ```
pub fn parse_nonempty(input: &str, field: &'static str) -> ValidationResult<String> {
    let value = input.trim();
    if value.is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(value.to_string())
}

/// Validates a phone number: exactly ten consecutive ASCII digits.
pub fn parse_phone(input: &str) -> ValidationResult<String> {
    let value = input.trim();
    if value.len() != PHONE_DIGITS || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidPhone);
    }
    Ok(value.to_string())
}

// =============================================================================
// Numeric Parsers
// =============================================================================

/// Parses a whole-number choice or id.
pub fn parse_integer(input: &str, field: &'static str) -> ValidationResult<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::NotAnInteger { field })
}

/// Parses a whole number and requires it to fall within `min..=max`.
pub fn parse_integer_within(input: &str, min: i64, max: i64) -> ValidationResult<i64> {
    let value = parse_integer(input, "Choice")?;
    if value < min || value > max {
        return Err(ValidationError::OutOfRange { min, max });
    }
    Ok(value)
}

/// Parses an order-line quantity: a positive whole number.
pub fn parse_quantity(input: &str) -> ValidationResult<i64> {
    let value = input
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidQuantity)?;
    if value <= 0 {
        return Err(ValidationError::InvalidQuantity);
    }
    Ok(value)
}

/// Parses a non-negative decimal price into Money.
///
/// Negative amounts are rejected here (not at the Money level) so the
/// console can re-prompt with the price-specific message.
pub fn parse_price(input: &str) -> ValidationResult<Money> {
    let amount = Money::parse(input).ok_or(ValidationError::InvalidPrice)?;
    if amount.is_negative() {
        return Err(ValidationError::InvalidPrice);
    }
    Ok(amount)
}

// =============================================================================
// Unit Tests
// =============================================================================
