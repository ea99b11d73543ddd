use diesel::prelude::*;
use pushkind_common::repository::errors::RepositoryResult;

use crate::{
    domain::tax_rules_group::{
        NewTaxRulesGroup as DomainNewTaxRulesGroup, TaxRulesGroup as DomainTaxRulesGroup,
    },
    models::tax_rules_group::{
        NewTaxRulesGroup as DbNewTaxRulesGroup, TaxRulesGroup as DbTaxRulesGroup,
    },
    repository::{DieselRepository, TaxRulesGroupReader, TaxRulesGroupWriter},
};

impl TaxRulesGroupReader for DieselRepository {
    fn get_tax_rules_group_by_id(&self, id: i32) -> RepositoryResult<Option<DomainTaxRulesGroup>> {
        use crate::schema::tax_rules_groups;

        let mut conn = self.conn()?;
        let group = tax_rules_groups::table
            .filter(tax_rules_groups::id.eq(id))
            .first::<DbTaxRulesGroup>(&mut conn)
            .optional()?;

        Ok(group.map(Into::into))
    }
}

impl TaxRulesGroupWriter for DieselRepository {
    fn create_tax_rules_group(
        &self,
        new_group: &DomainNewTaxRulesGroup,
    ) -> RepositoryResult<DomainTaxRulesGroup> {
        use crate::schema::tax_rules_groups;

        let mut conn = self.conn()?;
        let db_new = DbNewTaxRulesGroup::from(new_group);

        let created = diesel::insert_into(tax_rules_groups::table)
            .values(&db_new)
            .get_result::<DbTaxRulesGroup>(&mut conn)?;

        Ok(created.into())
    }
}
