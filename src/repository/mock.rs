use mockall::mock;

use super::{ProductReader, ProductWriter, TaxRulesGroupReader};
use crate::domain::{
    product::{FieldsToUpdate, NewProduct, Product},
    tax_rules_group::TaxRulesGroup,
};
use pushkind_common::repository::errors::RepositoryResult;

mock! {
    pub ProductReader {}

    impl ProductReader for ProductReader {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
    }
}

mock! {
    pub ProductWriter {}

    impl ProductWriter for ProductWriter {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn update_product_prices(&self, product: &Product, fields: &FieldsToUpdate) -> RepositoryResult<usize>;
    }
}

mock! {
    pub TaxRulesGroupReader {}

    impl TaxRulesGroupReader for TaxRulesGroupReader {
        fn get_tax_rules_group_by_id(&self, id: i32) -> RepositoryResult<Option<TaxRulesGroup>>;
    }
}
