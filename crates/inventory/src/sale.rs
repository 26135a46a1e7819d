use serde::{Deserialize, Serialize};
use thiserror::Error;

use stockroom_core::{Money, SaleId};

/// Immutable entry in the sale log.
///
/// Captures the product's name, category and unit price as they were when
/// the sale happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub id: SaleId,
    pub name: String,
    pub category: String,
    pub unit_price: Money,
    pub quantity_sold: i64,
}

impl SaleRecord {
    /// Revenue of this sale (`unit_price × quantity_sold`).
    pub fn total(&self) -> Money {
        self.unit_price.times(self.quantity_sold)
    }
}

/// Why a sale was rejected. Rejected sales leave the store untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SaleError {
    #[error("product not found: {name}")]
    ProductNotFound { name: String },

    #[error("insufficient stock for {name}: requested {requested}, available {available}")]
    InsufficientStock {
        name: String,
        requested: i64,
        available: i64,
    },

    /// `available - requested` does not fit the stock counter.
    #[error("quantity {requested} out of range for {name} (available {available})")]
    QuantityOutOfRange {
        name: String,
        requested: i64,
        available: i64,
    },
}

impl SaleError {
    pub fn product_not_found(name: impl Into<String>) -> Self {
        Self::ProductNotFound { name: name.into() }
    }
}
