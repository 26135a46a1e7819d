use stockroom_cli::demo;
use stockroom_core::Money;

const EXPECTED_OUTPUT: &str = "
Valor total do inventário: R$27500.00
Produtos da categoria 'Eletrônicos':
- TV Samsung | R$2500.00 | Estoque: 5
- Notebook Dell | R$4200.00 | Estoque: 3
Venda registrada!
Venda registrada!

=== HISTÓRICO DE VENDAS ===
Camisa Polo | Categoria: Vestuário | Qtd: 3 | Preço: R$120.00
TV Samsung | Categoria: Eletrônicos | Qtd: 1 | Preço: R$2500.00

=== RESUMO POR CATEGORIA ===
Categoria: Eletrônicos
  Produtos: 2
  Valor total: R$22600.00
Categoria: Vestuário
  Produtos: 1
  Valor total: R$2040.00
";

#[test]
fn demo_prints_the_full_report() {
    let mut buf = Vec::new();
    demo::run(&mut buf).unwrap();

    assert_eq!(String::from_utf8(buf).unwrap(), EXPECTED_OUTPUT);
}

#[test]
fn demo_leaves_store_in_expected_state() {
    let mut sink = Vec::new();
    let store = demo::run(&mut sink).unwrap();

    assert_eq!(store.sale_count(), 2);
    assert_eq!(store.find_product("Camisa Polo").unwrap().stock_quantity, 17);
    assert_eq!(store.find_product("TV Samsung").unwrap().stock_quantity, 4);
    assert_eq!(store.total_inventory_value(), Money::from_units(24_640));
}

#[test]
fn seeded_store_has_two_categories() {
    let store = demo::seed_store().unwrap();
    assert_eq!(store.len(), 3);
    assert_eq!(
        store.find_product("Notebook Dell").unwrap().unit_price,
        Money::from_units(4200)
    );
    assert_eq!(
        store.categories().collect::<Vec<_>>(),
        vec![demo::ELECTRONICS, demo::CLOTHING]
    );
}
