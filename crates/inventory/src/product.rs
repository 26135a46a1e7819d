use serde::{Deserialize, Serialize};

use stockroom_core::Money;

/// Handle to a product held by an `InventoryStore`.
///
/// Products are never removed, so a handle stays valid for the lifetime of
/// the store that issued it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductIndex(pub(crate) usize);

impl ProductIndex {
    pub fn position(self) -> usize {
        self.0
    }
}

/// A stocked product. Looked up by `name`; names are not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub category: String,
    pub unit_price: Money,
    pub stock_quantity: i64,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        unit_price: Money,
        stock_quantity: i64,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            unit_price,
            stock_quantity,
        }
    }

    /// Value of the stock on hand (`unit_price × stock_quantity`).
    pub fn stock_value(&self) -> Money {
        self.unit_price.times(self.stock_quantity)
    }
}
