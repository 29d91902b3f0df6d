//! Store listing command.

use std::io::Write;

use shopping_cart::StoreView;

use super::Session;

/// Print every catalog item with its price and in-cart quantity.
///
/// # Errors
///
/// Returns an error if output fails.
pub fn list(session: &Session, out: &mut impl Write) -> shopping_cart::Result<()> {
    let view = StoreView::build(&session.catalog, &session.store, session.currency);

    for item in &view.items {
        let in_cart = if item.quantity == 0 {
            String::new()
        } else {
            format!("  ({} in cart)", item.quantity)
        };
        writeln!(out, "[{}] {}  {}{in_cart}", item.id, item.name, item.price)?;
    }
    writeln!(out, "Cart: {} items", view.cart_quantity)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use shopping_cart::{CartConfig, CartStore, FileStorage};
    use shopping_cart_core::{Catalog, CurrencyCode, ItemId};

    use super::*;

    #[test]
    fn test_list() {
        let dir = tempfile::tempdir().unwrap();
        let config = CartConfig {
            storage_dir: dir.path().to_path_buf(),
            ..CartConfig::default()
        };
        let catalog = Catalog::from_json(
            r#"[
                { "id": 1, "name": "Book", "price": 10.99, "imgUrl": "/imgs/book.jpg" },
                { "id": 2, "name": "Car", "price": 14000, "imgUrl": "/imgs/car.jpg" }
            ]"#,
        )
        .unwrap();

        let mut session = Session {
            catalog,
            currency: CurrencyCode::USD,
            store: CartStore::load(FileStorage::new(&config.storage_dir)),
        };
        session.store.increase_cart_quantity(ItemId::new(2));

        let mut buf = Vec::new();
        list(&session, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "[1] Book  $10.99\n[2] Car  $14000.00  (1 in cart)\nCart: 1 items\n"
        );
    }
}
