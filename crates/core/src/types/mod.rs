//! Core types for the shopping cart.
//!
//! This module provides type-safe wrappers for cart and catalog concepts.

pub mod cart;
pub mod catalog;
pub mod id;
pub mod price;

pub use cart::CartItem;
pub use catalog::{Catalog, CatalogError, StoreItem};
pub use id::*;
pub use price::{CurrencyCode, CurrencyCodeError, Price};
