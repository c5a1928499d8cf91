//! # Order Cart
//!
//! The in-progress cart built while a customer places an order.
//!
//! ## Price Freezing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Line Lifecycle                                  │
//! │                                                                         │
//! │  "Pepperoni"  ──lookup──►  current price: $10.00                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CartLine { item_name: "Pepperoni", quantity: 2,                       │
//! │             unit_price_cents: 1000 }   ◄── price FROZEN here           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  total = Σ quantity × unit_price  (exact integer cents)                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  One food_orders row + one order_items row per line                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The price each line carries is the menu price at the moment the line was
//! added; a concurrent menu update does not change an in-progress cart.
//!
//! ## Merge Invariant
//! Order lines are keyed by (order id, item name), so a cart may hold at
//! most one line per item name. Adding a name already in the cart increases
//! that line's quantity instead of appending a second line.

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// One distinct item in the cart, with its quantity and frozen unit price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    pub item_name: String,

    /// Always positive; validated at the console boundary.
    pub quantity: i64,

    /// Menu price at the moment the line was added.
    pub unit_price_cents: i64,
}

impl CartLine {
    /// Line subtotal: quantity × unit price.
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.unit_price_cents).multiply_quantity(self.quantity)
    }
}

/// The cart being assembled during order placement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds a resolved item to the cart, freezing its unit price.
    ///
    /// If the item name is already present the quantities merge, keeping the
    /// price frozen when the line was first added.
    pub fn add(&mut self, item_name: &str, quantity: i64, unit_price: Money) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.item_name == item_name) {
            line.quantity += quantity;
            return;
        }
        self.lines.push(CartLine {
            item_name: item_name.to_string(),
            quantity,
            unit_price_cents: unit_price.cents(),
        });
    }

    /// The distinct lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Exact order total: Σ quantity × unit price over every line.
    pub fn total(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(), |acc, line| acc + line.line_total())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
