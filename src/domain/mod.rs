pub mod product;
pub mod product_prices;
pub mod tax_rules_group;
