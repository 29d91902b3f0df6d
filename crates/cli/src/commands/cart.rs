//! Cart commands: mutate one line or show the drawer.

use std::io::Write;

use shopping_cart::CartView;
use shopping_cart_core::ItemId;

use super::Session;

/// Add one unit of `id`.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved or output fails.
pub fn add(session: &mut Session, id: ItemId, out: &mut impl Write) -> shopping_cart::Result<()> {
    session.store.increase_cart_quantity(id);
    session.persist()?;
    line_status(session, id, out)
}

/// Remove one unit of `id`.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved or output fails.
pub fn decrease(
    session: &mut Session,
    id: ItemId,
    out: &mut impl Write,
) -> shopping_cart::Result<()> {
    let changed = session.store.decrease_cart_quantity(id);
    session.persist()?;
    if !changed {
        writeln!(out, "Item {id} is not in the cart")?;
        return Ok(());
    }
    line_status(session, id, out)
}

/// Remove the line for `id`.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved or output fails.
pub fn remove(
    session: &mut Session,
    id: ItemId,
    out: &mut impl Write,
) -> shopping_cart::Result<()> {
    let changed = session.store.remove_from_cart(id);
    session.persist()?;
    if !changed {
        writeln!(out, "Item {id} is not in the cart")?;
        return Ok(());
    }
    line_status(session, id, out)
}

/// Print the quantity of `id`.
///
/// # Errors
///
/// Returns an error if output fails.
pub fn quantity(session: &Session, id: ItemId, out: &mut impl Write) -> shopping_cart::Result<()> {
    writeln!(out, "{}", session.store.get_item_quantity(id))?;
    Ok(())
}

/// Open the drawer and print its contents.
///
/// # Errors
///
/// Returns an error if output fails.
pub fn show(session: &mut Session, out: &mut impl Write) -> shopping_cart::Result<()> {
    session.store.open_cart();
    let view = CartView::from_store(&session.store, &session.catalog, session.currency);

    if view.item_count == 0 {
        writeln!(out, "Cart is empty")?;
        return Ok(());
    }

    writeln!(out, "Cart ({} items)", view.item_count)?;
    for line in &view.lines {
        writeln!(
            out,
            "  [{}] {} x{}  {}  {}",
            line.id, line.title, line.quantity, line.price, line.line_price
        )?;
    }
    writeln!(out, "Subtotal: {}", view.subtotal)?;
    Ok(())
}

fn line_status(session: &Session, id: ItemId, out: &mut impl Write) -> shopping_cart::Result<()> {
    let name = session
        .catalog
        .get(id)
        .map_or_else(|| format!("Item {id} (not in catalog)"), |item| item.name.clone());
    writeln!(
        out,
        "{name}: {} in cart ({} total)",
        session.store.get_item_quantity(id),
        session.store.cart_quantity()
    )?;
    Ok(())
}
