//! # Repository Implementations
//!
//! One repository per table, each holding a clone of the connection pool.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Command layer                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  db.users() ────► UserRepository  ────► users                          │
//! │  db.stores() ───► StoreRepository ────► stores                         │
//! │  db.items() ────► ItemRepository  ────► menu_items                     │
//! │  db.orders() ───► OrderRepository ────► food_orders + order_items      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every statement binds its parameters; no user input is ever spliced into
//! SQL text. The only dynamic SQL is the catalog filter's WHERE/ORDER BY
//! assembly, which chooses among fixed fragments and still binds the values.

pub mod items;
pub mod orders;
pub mod stores;
pub mod users;
