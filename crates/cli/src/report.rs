//! Text reports over an `InventoryStore`.
//!
//! Every writer takes any `io::Write`, so the binary prints to stdout and the
//! tests render into a `Vec<u8>`.

use std::io::{self, Write};

use stockroom_inventory::{InventoryStore, SaleError};

pub const SALE_RECORDED: &str = "Venda registrada!";
pub const PRODUCT_NOT_FOUND: &str = "Produto não encontrado!";
pub const INSUFFICIENT_STOCK: &str = "Estoque insuficiente!";
pub const QUANTITY_OUT_OF_RANGE: &str = "Quantidade inválida!";

pub fn write_total_value<W: Write>(out: &mut W, store: &InventoryStore) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Valor total do inventário: R${}", store.total_inventory_value())
}

pub fn write_category_listing<W: Write>(
    out: &mut W,
    store: &InventoryStore,
    category: &str,
) -> io::Result<()> {
    writeln!(out, "Produtos da categoria '{category}':")?;
    for product in store.list_by_category(category) {
        writeln!(
            out,
            "- {} | R${} | Estoque: {}",
            product.name, product.unit_price, product.stock_quantity
        )?;
    }
    Ok(())
}

/// Status line for the outcome of `InventoryStore::record_sale`.
pub fn write_sale_outcome<W: Write, T>(
    out: &mut W,
    outcome: &Result<T, SaleError>,
) -> io::Result<()> {
    let line = match outcome {
        Ok(_) => SALE_RECORDED,
        Err(SaleError::ProductNotFound { .. }) => PRODUCT_NOT_FOUND,
        Err(SaleError::InsufficientStock { .. }) => INSUFFICIENT_STOCK,
        Err(SaleError::QuantityOutOfRange { .. }) => QUANTITY_OUT_OF_RANGE,
    };
    writeln!(out, "{line}")
}

pub fn write_sales_history<W: Write>(out: &mut W, store: &InventoryStore) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== HISTÓRICO DE VENDAS ===")?;
    for sale in store.sales_history() {
        writeln!(
            out,
            "{} | Categoria: {} | Qtd: {} | Preço: R${}",
            sale.name, sale.category, sale.quantity_sold, sale.unit_price
        )?;
    }
    Ok(())
}

pub fn write_category_summary<W: Write>(out: &mut W, store: &InventoryStore) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== RESUMO POR CATEGORIA ===")?;
    for summary in store.category_summary() {
        writeln!(out, "Categoria: {}", summary.category)?;
        writeln!(out, "  Produtos: {}", summary.count)?;
        writeln!(out, "  Valor total: R${}", summary.total_value)?;
    }
    Ok(())
}
