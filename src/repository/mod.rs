use pushkind_common::db::{DbConnection, DbPool};
use pushkind_common::repository::errors::RepositoryResult;

use crate::domain::product::{FieldsToUpdate, NewProduct, Product};
use crate::domain::tax_rules_group::{NewTaxRulesGroup, TaxRulesGroup};

pub mod product;
pub mod tax_rules_group;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over product records.
pub trait ProductReader {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
}

/// Write operations over product records.
pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    /// Persist the columns listed in `fields` and return the number of rows written.
    fn update_product_prices(
        &self,
        product: &Product,
        fields: &FieldsToUpdate,
    ) -> RepositoryResult<usize>;
}

/// Read-only operations over tax rules groups.
pub trait TaxRulesGroupReader {
    fn get_tax_rules_group_by_id(&self, id: i32) -> RepositoryResult<Option<TaxRulesGroup>>;
}

/// Write operations over tax rules groups.
pub trait TaxRulesGroupWriter {
    fn create_tax_rules_group(
        &self,
        new_group: &NewTaxRulesGroup,
    ) -> RepositoryResult<TaxRulesGroup>;
}
