use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::tax_rules_group::{
    NewTaxRulesGroup as DomainNewTaxRulesGroup, TaxRulesGroup as DomainTaxRulesGroup,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::tax_rules_groups)]
pub struct TaxRulesGroup {
    pub id: i32,
    pub name: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::tax_rules_groups)]
pub struct NewTaxRulesGroup<'a> {
    pub name: &'a str,
    pub is_active: bool,
}

impl From<TaxRulesGroup> for DomainTaxRulesGroup {
    fn from(value: TaxRulesGroup) -> Self {
        Self {
            id: value.id,
            name: value.name,
            is_active: value.is_active,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewTaxRulesGroup> for NewTaxRulesGroup<'a> {
    fn from(value: &'a DomainNewTaxRulesGroup) -> Self {
        Self {
            name: value.name.as_str(),
            is_active: value.is_active,
        }
    }
}
