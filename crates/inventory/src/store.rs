//! In-memory inventory store.
//!
//! Owns the product sequence plus three derived structures that are kept in
//! step by a single private method (`track`):
//! - the set of known categories (ordered by name),
//! - the number of `add_product` calls per category,
//! - the running stock value per category (added on insert, reduced on sale).
//!
//! The running value is incremental. Every mutation goes through `track` with
//! the exact `price × quantity` delta, so it agrees with
//! `recomputed_category_value` as long as category totals stay within the
//! range of `Money` (±`i128::MAX` cents).

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use stockroom_core::{Money, SaleId};

use crate::product::{Product, ProductIndex};
use crate::sale::{SaleError, SaleRecord};

/// Per-category aggregate, as reported by `InventoryStore::category_summary`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    /// Number of products ever added to the category (sales do not reduce it).
    pub count: usize,
    pub total_value: Money,
}

#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    products: Vec<Product>,
    categories: BTreeSet<String>,
    count_by_category: HashMap<String, usize>,
    value_by_category: HashMap<String, Money>,
    sale_log: Vec<SaleRecord>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a product. No validation: empty or duplicate names are accepted.
    pub fn add_product(&mut self, product: Product) {
        tracing::debug!(
            product = %product.name,
            category = %product.category,
            stock = product.stock_quantity,
            "product added"
        );

        self.track(&product.category, 1, product.stock_value());
        self.products.push(product);
    }

    /// Index of the first product (in insertion order) named exactly `name`.
    pub fn find(&self, name: &str) -> Option<ProductIndex> {
        self.products
            .iter()
            .position(|p| p.name == name)
            .map(ProductIndex)
    }

    pub fn find_product(&self, name: &str) -> Option<&Product> {
        self.find(name).and_then(|index| self.product(index))
    }

    pub fn product(&self, index: ProductIndex) -> Option<&Product> {
        self.products.get(index.0)
    }

    /// Products in `category`, in insertion order. Unknown categories yield nothing.
    pub fn list_by_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a Product> + 'a {
        self.products.iter().filter(move |p| p.category == category)
    }

    /// Value of all stock on hand, recomputed from the current products.
    pub fn total_inventory_value(&self) -> Money {
        self.products.iter().map(Product::stock_value).sum()
    }

    /// Value of one category's stock, recomputed from the current products.
    pub fn recomputed_category_value(&self, category: &str) -> Money {
        self.list_by_category(category).map(Product::stock_value).sum()
    }

    /// Sell `quantity` units of the first product named `name`.
    ///
    /// The quantity is only checked against the stock on hand; zero and
    /// negative quantities are accepted as long as the new stock still fits
    /// in an `i64`. On failure nothing changes.
    pub fn record_sale(&mut self, name: &str, quantity: i64) -> Result<&SaleRecord, SaleError> {
        let Some(index) = self.find(name) else {
            tracing::warn!(product = name, quantity, "sale rejected: product not found");
            return Err(SaleError::product_not_found(name));
        };

        let product = &mut self.products[index.0];
        if quantity > product.stock_quantity {
            tracing::warn!(
                product = name,
                quantity,
                available = product.stock_quantity,
                "sale rejected: insufficient stock"
            );
            return Err(SaleError::InsufficientStock {
                name: name.to_string(),
                requested: quantity,
                available: product.stock_quantity,
            });
        }

        let Some(remaining) = product.stock_quantity.checked_sub(quantity) else {
            tracing::warn!(
                product = name,
                quantity,
                available = product.stock_quantity,
                "sale rejected: quantity out of range"
            );
            return Err(SaleError::QuantityOutOfRange {
                name: name.to_string(),
                requested: quantity,
                available: product.stock_quantity,
            });
        };

        product.stock_quantity = remaining;
        let record = SaleRecord {
            id: SaleId::new(),
            name: product.name.clone(),
            category: product.category.clone(),
            unit_price: product.unit_price,
            quantity_sold: quantity,
        };

        self.track(&record.category, 0, -record.total());

        tracing::info!(
            sale_id = %record.id,
            product = %record.name,
            quantity,
            remaining,
            "sale recorded"
        );

        self.sale_log.push(record);
        Ok(&self.sale_log[self.sale_log.len() - 1])
    }

    /// Recorded sales, oldest first.
    pub fn sales_history(&self) -> impl Iterator<Item = &SaleRecord> + '_ {
        self.sale_log.iter()
    }

    /// One summary per category, ordered by category name.
    pub fn category_summary(&self) -> impl Iterator<Item = CategorySummary> + '_ {
        self.categories.iter().map(|category| CategorySummary {
            category: category.clone(),
            count: self.count_by_category.get(category).copied().unwrap_or(0),
            total_value: self
                .value_by_category
                .get(category)
                .copied()
                .unwrap_or(Money::ZERO),
        })
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> + '_ {
        self.products.iter()
    }

    /// Known categories, ordered by name.
    pub fn categories(&self) -> impl Iterator<Item = &str> + '_ {
        self.categories.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn sale_count(&self) -> usize {
        self.sale_log.len()
    }

    fn track(&mut self, category: &str, added: usize, value_delta: Money) {
        if !self.categories.contains(category) {
            self.categories.insert(category.to_string());
        }
        *self.count_by_category.entry(category.to_string()).or_default() += added;
        *self.value_by_category.entry(category.to_string()).or_default() += value_delta;
    }
}
