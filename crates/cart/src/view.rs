//! Display models for the store listing and the cart drawer.
//!
//! Views join cart entries with the catalog and preformat prices so the
//! presentation layer only has to lay out strings.

use shopping_cart_core::{CartItem, Catalog, CurrencyCode, Price, StoreItem};

use crate::storage::KeyValueStore;
use crate::store::CartStore;

/// One cart line as shown in the drawer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView {
    pub id: i32,
    pub title: String,
    pub image_url: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

/// Cart drawer contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub subtotal: String,
    pub item_count: u64,
    pub is_open: bool,
}

/// One catalog item as listed in the store, with its in-cart quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreItemView {
    pub id: i32,
    pub name: String,
    pub image_url: String,
    pub price: String,
    pub quantity: u32,
}

/// Store listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreView {
    pub items: Vec<StoreItemView>,
    pub cart_quantity: u64,
}

// =============================================================================
// Builders
// =============================================================================

fn unit_price(item: &StoreItem, currency: CurrencyCode) -> Price {
    Price::new(item.price, currency)
}

impl CartView {
    /// An empty, closed drawer.
    #[must_use]
    pub fn empty(currency: CurrencyCode) -> Self {
        Self {
            lines: Vec::new(),
            subtotal: Price::zero(currency).display(),
            item_count: 0,
            is_open: false,
        }
    }

    /// Build the drawer from cart lines.
    ///
    /// Lines whose item is missing from the catalog are not shown and add
    /// nothing to the subtotal, but still count toward `item_count`.
    #[must_use]
    pub fn build(items: &[CartItem], catalog: &Catalog, currency: CurrencyCode) -> Self {
        let mut subtotal = Price::zero(currency);
        let mut lines = Vec::with_capacity(items.len());

        for entry in items {
            let Some(item) = catalog.get(entry.id) else {
                tracing::debug!(item_id = %entry.id, "Cart line not in catalog, skipping");
                continue;
            };
            let price = unit_price(item, currency);
            let line_price = price.times(entry.quantity);
            subtotal = subtotal.plus(&line_price);

            lines.push(CartLineView {
                id: entry.id.as_i32(),
                title: item.name.clone(),
                image_url: item.img_url.clone(),
                quantity: entry.quantity,
                price: price.display(),
                line_price: line_price.display(),
            });
        }

        Self {
            lines,
            subtotal: subtotal.display(),
            item_count: items.iter().map(|entry| u64::from(entry.quantity)).sum(),
            is_open: false,
        }
    }

    /// Build the drawer from a store, carrying its open flag.
    #[must_use]
    pub fn from_store<S: KeyValueStore>(
        store: &CartStore<S>,
        catalog: &Catalog,
        currency: CurrencyCode,
    ) -> Self {
        Self {
            is_open: store.is_open(),
            ..Self::build(store.cart_items(), catalog, currency)
        }
    }
}

impl StoreView {
    /// List every catalog item with its quantity in `store`.
    #[must_use]
    pub fn build<S: KeyValueStore>(
        catalog: &Catalog,
        store: &CartStore<S>,
        currency: CurrencyCode,
    ) -> Self {
        Self {
            items: catalog
                .iter()
                .map(|item| StoreItemView {
                    id: item.id.as_i32(),
                    name: item.name.clone(),
                    image_url: item.img_url.clone(),
                    price: unit_price(item, currency).display(),
                    quantity: store.get_item_quantity(item.id),
                })
                .collect(),
            cart_quantity: store.cart_quantity(),
        }
    }
}
