//! # Authorization Gates
//!
//! Every role- or identity-based rule in one place, as pure functions.
//!
//! ## Who May Do What
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Operation                       customer      driver      manager     │
//! │  ─────────────────────────       ────────      ──────      ───────     │
//! │  browse menu / stores               ✓             ✓           ✓        │
//! │  place order                        ✓             ✓           ✓        │
//! │  view own orders                    ✓             ✓           ✓        │
//! │  view any customer's orders         ✗             ✓           ✓        │
//! │  update order status                ✗             ✓           ✓        │
//! │  update menu items                  ✗             ✗           ✓        │
//! │  update other users' login/role     ✗             ✗           ✓        │
//! │  update OWN login/role              ✗             ✗           ✗ (*)    │
//! │                                                                         │
//! │  (*) self-modification of login/role always requires another manager   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The command layer calls these before touching the data store, so a denial
//! never leaves partial state.

use crate::error::{CoreError, CoreResult};
use crate::types::{OrderScope, Role};

/// Whether the role may look past its own order history.
#[inline]
pub fn can_view_all_orders(role: Role) -> bool {
    matches!(role, Role::Driver | Role::Manager)
}

/// Resolves the scope an order listing actually runs with.
///
/// Drivers and managers get whatever they asked for; everyone else is forced
/// to their own login no matter what was requested.
pub fn resolve_order_scope(session_login: &str, role: Role, requested: OrderScope) -> OrderScope {
    if can_view_all_orders(role) {
        requested
    } else {
        OrderScope::Customer(session_login.to_string())
    }
}

/// Whether the session may read one specific order.
///
/// Drivers and managers see any order; a customer only their own.
#[inline]
pub fn can_view_order(session_login: &str, role: Role, order_login: &str) -> bool {
    can_view_all_orders(role) || order_login == session_login
}

/// Gate for order-status updates: the role must be driver OR manager.
pub fn ensure_can_update_order_status(role: Role) -> CoreResult<()> {
    if role == Role::Driver || role == Role::Manager {
        Ok(())
    } else {
        Err(CoreError::Forbidden(
            "order status updates require a driver or manager",
        ))
    }
}

/// Gate for manager-only operations (menu and user administration).
pub fn ensure_manager(role: Role) -> CoreResult<()> {
    if role == Role::Manager {
        Ok(())
    } else {
        Err(CoreError::Forbidden("this operation requires a manager"))
    }
}

/// Gate for admin mutations of login/role: a manager may never target
/// themselves. A different manager must do it.
pub fn ensure_other_user(session_login: &str, target_login: &str) -> CoreResult<()> {
    if session_login == target_login {
        Err(CoreError::Forbidden(
            "you cannot update your own login or role; ask another manager",
        ))
    } else {
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_scope_forced_for_customers() {
        let scope = resolve_order_scope("alice", Role::Customer, OrderScope::All);
        assert_eq!(scope, OrderScope::Customer("alice".to_string()));

        let scope = resolve_order_scope(
            "alice",
            Role::Customer,
            OrderScope::Customer("bob".to_string()),
        );
        assert_eq!(scope, OrderScope::Customer("alice".to_string()));
    }

    #[test]
    fn test_order_scope_honored_for_staff() {
        for role in [Role::Driver, Role::Manager] {
            let scope = resolve_order_scope("dan", role, OrderScope::All);
            assert_eq!(scope, OrderScope::All);

            let scope =
                resolve_order_scope("dan", role, OrderScope::Customer("bob".to_string()));
            assert_eq!(scope, OrderScope::Customer("bob".to_string()));
        }
    }

    #[test]
    fn test_order_detail_visibility() {
        assert!(can_view_order("alice", Role::Customer, "alice"));
        assert!(!can_view_order("alice", Role::Customer, "bob"));
        assert!(can_view_order("dan", Role::Driver, "bob"));
        assert!(can_view_order("mia", Role::Manager, "bob"));
    }

    /// The status gate must PASS for drivers and managers and DENY
    /// customers - each of the three roles checked explicitly.
    #[test]
    fn test_status_update_gate() {
        assert!(ensure_can_update_order_status(Role::Driver).is_ok());
        assert!(ensure_can_update_order_status(Role::Manager).is_ok());
        assert!(matches!(
            ensure_can_update_order_status(Role::Customer),
            Err(CoreError::Forbidden(_))
        ));
    }

    #[test]
    fn test_manager_gate() {
        assert!(ensure_manager(Role::Manager).is_ok());
        assert!(ensure_manager(Role::Driver).is_err());
        assert!(ensure_manager(Role::Customer).is_err());
    }

    #[test]
    fn test_self_modification_denied() {
        assert!(ensure_other_user("mia", "bob").is_ok());
        assert!(matches!(
            ensure_other_user("mia", "mia"),
            Err(CoreError::Forbidden(_))
        ));
    }
}
