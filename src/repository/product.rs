use diesel::prelude::*;
use pushkind_common::repository::errors::RepositoryResult;

use crate::{
    domain::product::{FieldsToUpdate, NewProduct as DomainNewProduct, Product as DomainProduct},
    models::product::{
        NewProduct as DbNewProduct, Product as DbProduct,
        UpdateProductPrices as DbUpdateProductPrices,
    },
    repository::{DieselRepository, ProductReader, ProductWriter},
};

impl ProductReader for DieselRepository {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<DomainProduct>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let product = products::table
            .filter(products::id.eq(id))
            .first::<DbProduct>(&mut conn)
            .optional()?;

        Ok(product.map(DomainProduct::try_from).transpose()?)
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, new_product: &DomainNewProduct) -> RepositoryResult<DomainProduct> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let db_new = DbNewProduct::from(new_product);

        let created = diesel::insert_into(products::table)
            .values(&db_new)
            .get_result::<DbProduct>(&mut conn)?;

        Ok(DomainProduct::try_from(created)?)
    }

    fn update_product_prices(
        &self,
        product: &DomainProduct,
        fields: &FieldsToUpdate,
    ) -> RepositoryResult<usize> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let now = chrono::Local::now().naive_utc();
        let changes = DbUpdateProductPrices::new(product, fields, now);

        let updated = diesel::update(products::table.filter(products::id.eq(product.id)))
            .set(&changes)
            .execute(&mut conn)?;

        Ok(updated)
    }
}
