//! Shopping Cart Core - Shared types library.
//!
//! This crate provides the types shared by every shopping cart component:
//! - `shopping-cart` - Cart store, persistence bridge, and storage backends
//! - `shopping-cart-cli` - Command-line driver for the cart
//!
//! # Architecture
//!
//! The core crate contains only types - no storage access, no logging setup.
//! This keeps it lightweight and allows it to be used anywhere, including
//! from UI code that only needs to render cart entries.
//!
//! # Modules
//!
//! - [`types`] - Item IDs, cart entries, prices, and the read-only catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
