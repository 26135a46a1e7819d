//! Fixed demo script: seed three products, sell twice, print the reports.

use std::io::Write;

use stockroom_core::{DomainResult, Money};
use stockroom_inventory::{InventoryStore, Product};

use crate::report;

pub const ELECTRONICS: &str = "Eletrônicos";
pub const CLOTHING: &str = "Vestuário";

/// (name, category, unit price, stock)
const DEMO_PRODUCTS: [(&str, &str, &str, i64); 3] = [
    ("TV Samsung", ELECTRONICS, "2500.00", 5),
    ("Notebook Dell", ELECTRONICS, "4200.00", 3),
    ("Camisa Polo", CLOTHING, "120.00", 20),
];

const DEMO_SALES: [(&str, i64); 2] = [("Camisa Polo", 3), ("TV Samsung", 1)];

/// Store holding the three demo products.
pub fn seed_store() -> DomainResult<InventoryStore> {
    let mut store = InventoryStore::new();
    for (name, category, price, stock) in DEMO_PRODUCTS {
        let unit_price: Money = price.parse()?;
        store.add_product(Product::new(name, category, unit_price, stock));
    }
    Ok(store)
}

/// Run the demo against `out` and hand back the final store.
///
/// Rejected sales are reported on `out`, never returned as errors; only
/// seeding and write failures are.
pub fn run<W: Write>(out: &mut W) -> anyhow::Result<InventoryStore> {
    let mut store = seed_store()?;

    report::write_total_value(out, &store)?;
    report::write_category_listing(out, &store, ELECTRONICS)?;

    for (name, quantity) in DEMO_SALES {
        let outcome = store.record_sale(name, quantity).map(|_| ());
        report::write_sale_outcome(out, &outcome)?;
    }

    report::write_sales_history(out, &store)?;
    report::write_category_summary(out, &store)?;

    tracing::info!(
        products = store.len(),
        sales = store.sale_count(),
        total_value = %store.total_inventory_value(),
        "demo complete"
    );

    Ok(store)
}
