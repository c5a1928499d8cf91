//! # Order Commands
//!
//! Placing orders, the two history listings, order detail, and the
//! driver/manager status update.

use std::io::{BufRead, Write};

use tracing::{debug, error, info};

use crate::console::Console;
use crate::error::{CliError, CliResult};
use crate::session::Session;
use slice_core::{access, Cart, CoreError, FoodOrder, OrderScope, OrderStatus, CART_DONE};
use slice_db::{Database, DbError};

/// Sentinel a driver/manager types to list every customer's orders.
const SCOPE_ALL: &str = "all";

/// The interactive checkout.
///
/// The store is validated before anything else; an unknown store aborts
/// with zero writes. Unknown item names are reported and skipped - the
/// customer can correct the spelling and continue. The collected cart is
/// persisted as one transaction.
pub async fn place_order<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    db: &Database,
    session: &Session,
) -> CliResult<()> {
    debug!("place_order command");

    let store_id =
        console.prompt_integer("\nEnter the ID of the store you want to order from: ", "Store ID")?;
    if !db.stores().exists(store_id).await? {
        return Err(CoreError::StoreNotFound(store_id).into());
    }

    let mut cart = Cart::new();
    loop {
        let name = console.prompt_nonempty(
            "\nEnter the name of the item you want to order,\n\
             or \"done\" if you are finished adding items: ",
            "Item name",
        )?;
        if name == CART_DONE {
            break;
        }

        // Soft failure: report, skip the entry, keep collecting.
        let Some(item) = db.items().get_by_name(&name).await? else {
            console.write_line(&CoreError::ItemNotFound(name).to_string())?;
            continue;
        };

        let quantity = console.prompt_quantity("Enter desired quantity: ")?;
        cart.add(&item.item_name, quantity, item.price());
    }

    if cart.is_empty() {
        return Err(CoreError::EmptyOrder.into());
    }

    let total = cart.total();
    let order_id = db
        .orders()
        .create(session.login(), store_id, &cart)
        .await
        .map_err(|e| {
            error!(error = %e, "order transaction failed");
            CoreError::OrderPlacementFailed(e.to_string())
        })?;

    info!(order_id, login = %session.login(), %total, "Order placed");
    console.write_line(&format!(
        "\nOrder {order_id} successfully placed! Total: {total}"
    ))?;
    Ok(())
}

/// Full order-id history for the resolved scope.
pub async fn view_all_orders<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    db: &Database,
    session: &Session,
) -> CliResult<()> {
    let scope = prompt_scope(console, db, session).await?;
    let orders = db.orders().list(&scope).await?;
    render_order_ids(console, &orders)
}

/// The five most recent orders for the resolved scope.
pub async fn view_recent_orders<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    db: &Database,
    session: &Session,
) -> CliResult<()> {
    let scope = prompt_scope(console, db, session).await?;
    let orders = db.orders().list_recent(&scope).await?;
    render_order_ids(console, &orders)
}

/// Resolves whose orders a listing covers.
///
/// Drivers and managers are asked for a target (a login, or `all`);
/// customers are never asked and always get their own history. The access
/// gate re-resolves the answer, so even a bad prompt path could not widen a
/// customer's scope.
async fn prompt_scope<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    db: &Database,
    session: &Session,
) -> CliResult<OrderScope> {
    let role = session.current_role(&db.users()).await?;

    let requested = if access::can_view_all_orders(role) {
        let target = console.prompt_nonempty(
            "\nEnter the login of the customer whose orders you want to see,\n\
             or \"all\" to see the orders of all customers: ",
            "Login",
        )?;
        if target == SCOPE_ALL {
            OrderScope::All
        } else {
            OrderScope::Customer(target)
        }
    } else {
        OrderScope::Customer(session.login().to_string())
    };

    Ok(access::resolve_order_scope(session.login(), role, requested))
}

fn render_order_ids<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    orders: &[FoodOrder],
) -> CliResult<()> {
    console.write_line("\nORDER IDS:")?;
    if orders.is_empty() {
        console.write_line("(no orders)")?;
        return Ok(());
    }
    for order in orders {
        console.write_line(&order.order_id.to_string())?;
    }
    Ok(())
}

/// Full detail for one order, visibility-gated.
pub async fn view_order_info<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    db: &Database,
    session: &Session,
) -> CliResult<()> {
    let order_id = console.prompt_integer("\nEnter the order ID you want to see: ", "Order ID")?;

    let order = db
        .orders()
        .get_by_id(order_id)
        .await?
        .ok_or(CoreError::OrderNotFound(order_id))?;

    let role = session.current_role(&db.users()).await?;
    if !access::can_view_order(session.login(), role, &order.login) {
        return Err(CoreError::Forbidden("this order does not belong to you").into());
    }

    console.write_line("\nORDER INFO")?;
    console.write_line(&format!("Order ID: {}", order.order_id))?;
    console.write_line(&format!("Customer login: {}", order.login))?;
    console.write_line(&format!("Store ID: {}", order.store_id))?;
    console.write_line(&format!("Total price: {}", order.total_price()))?;
    console.write_line(&format!("Order timestamp: {}", order.order_timestamp))?;
    console.write_line(&format!("Order status: {}", order.order_status))?;

    let lines = db.orders().items_for(order_id).await?;
    if !lines.is_empty() {
        console.write_line("Items:")?;
        for line in &lines {
            console.write_line(&format!("    {} x{}", line.item_name, line.quantity))?;
        }
    }
    Ok(())
}

/// Driver/manager status transition.
pub async fn update_order_status<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    db: &Database,
    session: &Session,
) -> CliResult<()> {
    let role = session.current_role(&db.users()).await?;
    access::ensure_can_update_order_status(role)?;

    let order_id = console.prompt_integer("Enter order ID to update: ", "Order ID")?;

    console.write_line("Is the order complete?")?;
    console.write_line("1. Yes")?;
    console.write_line("2. No")?;
    let status = match console.prompt_choice_within("Please make your choice: ", 1, 2)? {
        1 => OrderStatus::Completed,
        _ => OrderStatus::Incomplete,
    };

    db.orders()
        .update_status(order_id, status)
        .await
        .map_err(|e| match e {
            DbError::NotFound { .. } => CliError::Core(CoreError::OrderNotFound(order_id)),
            other => CliError::Db(other),
        })?;

    info!(order_id, %status, acting = %session.login(), "Order status updated");
    console.write_line(&format!("Order '{order_id}' was updated!"))?;
    Ok(())
}
