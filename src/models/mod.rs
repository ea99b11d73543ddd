pub mod product;
pub mod tax_rules_group;
