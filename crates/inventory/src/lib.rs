//! Inventory store: products grouped by category, stock sales, and
//! per-category aggregates.
//!
//! Everything here is in-memory and synchronous; console rendering lives in
//! `stockroom-cli`.

pub mod product;
pub mod sale;
pub mod store;

pub use product::{Product, ProductIndex};
pub use sale::{SaleError, SaleRecord};
pub use store::{CategorySummary, InventoryStore};
