//! `stockroom-core` — domain primitives shared by the inventory store.
//!
//! This crate contains **pure domain** building blocks (no IO).

pub mod error;
pub mod id;
pub mod money;

pub use error::{DomainError, DomainResult};
pub use id::SaleId;
pub use money::Money;
