//! Console front-end for the inventory store.
//!
//! - `report`: renders store state and sale outcomes as text lines
//! - `demo`: the fixed seeding/sales script run by the `stockroom` binary

pub mod demo;
pub mod report;
