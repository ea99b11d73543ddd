use std::str::FromStr;

use chrono::NaiveDateTime;
use diesel::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::product::{
    FieldsToUpdate, NewProduct as DomainNewProduct, Product as DomainProduct, ProductField,
};

/// Fractional digits kept for decimal columns.
pub const STORED_DECIMAL_SCALE: u32 = 6;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub unit_price_ratio: String,
    pub unity: String,
    pub ecotax: String,
    pub tax_rules_group_id: i32,
    pub on_sale: bool,
    pub wholesale_price: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub name: &'a str,
    pub price: String,
    pub unit_price_ratio: String,
    pub unity: &'a str,
    pub ecotax: String,
    pub tax_rules_group_id: i32,
    pub on_sale: bool,
    pub wholesale_price: String,
}

/// Changeset touching only the staged pricing columns; `None` columns are skipped.
#[derive(Debug, Default, AsChangeset)]
#[diesel(table_name = crate::schema::products)]
pub struct UpdateProductPrices<'a> {
    pub price: Option<String>,
    pub unit_price_ratio: Option<String>,
    pub unity: Option<&'a str>,
    pub ecotax: Option<String>,
    pub tax_rules_group_id: Option<i32>,
    pub on_sale: Option<bool>,
    pub wholesale_price: Option<String>,
    pub updated_at: Option<NaiveDateTime>,
}

impl<'a> UpdateProductPrices<'a> {
    /// Collect the columns listed in `fields` from `product`.
    ///
    /// `unit_price` has no column: only its ratio is stored.
    pub fn new(
        product: &'a DomainProduct,
        fields: &FieldsToUpdate,
        updated_at: NaiveDateTime,
    ) -> Self {
        let mut changes = Self {
            updated_at: Some(updated_at),
            ..Self::default()
        };

        for field in fields.iter() {
            match field {
                ProductField::Price => changes.price = Some(encode_decimal(product.price)),
                ProductField::UnitPriceRatio => {
                    changes.unit_price_ratio = Some(encode_decimal(product.unit_price_ratio))
                }
                ProductField::Unity => changes.unity = Some(product.unity.as_str()),
                ProductField::Ecotax => changes.ecotax = Some(encode_decimal(product.ecotax)),
                ProductField::TaxRulesGroupId => {
                    changes.tax_rules_group_id = Some(product.tax_rules_group_id)
                }
                ProductField::OnSale => changes.on_sale = Some(product.on_sale),
                ProductField::WholesalePrice => {
                    changes.wholesale_price = Some(encode_decimal(product.wholesale_price))
                }
                ProductField::UnitPrice => {}
            }
        }

        changes
    }
}

impl TryFrom<Product> for DomainProduct {
    type Error = diesel::result::Error;

    fn try_from(value: Product) -> Result<Self, Self::Error> {
        let price = decode_decimal("price", &value.price)?;
        let unit_price_ratio = decode_decimal("unit_price_ratio", &value.unit_price_ratio)?;

        Ok(Self {
            id: value.id,
            name: value.name,
            price,
            unit_price: DomainProduct::derived_unit_price(price, unit_price_ratio),
            unit_price_ratio,
            unity: value.unity,
            ecotax: decode_decimal("ecotax", &value.ecotax)?,
            tax_rules_group_id: value.tax_rules_group_id,
            on_sale: value.on_sale,
            wholesale_price: decode_decimal("wholesale_price", &value.wholesale_price)?,
            created_at: value.created_at,
            updated_at: value.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(value: &'a DomainNewProduct) -> Self {
        Self {
            name: value.name.as_str(),
            price: encode_decimal(value.price),
            unit_price_ratio: encode_decimal(value.unit_price_ratio),
            unity: value.unity.as_str(),
            ecotax: encode_decimal(value.ecotax),
            tax_rules_group_id: value.tax_rules_group_id,
            on_sale: value.on_sale,
            wholesale_price: encode_decimal(value.wholesale_price),
        }
    }
}

/// Render a decimal the way a DECIMAL(20,6) column would keep it.
pub fn encode_decimal(value: Decimal) -> String {
    value
        .round_dp_with_strategy(STORED_DECIMAL_SCALE, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string()
}

fn decode_decimal(column: &str, raw: &str) -> Result<Decimal, diesel::result::Error> {
    Decimal::from_str(raw.trim()).map_err(|err| {
        diesel::result::Error::DeserializationError(
            format!("invalid decimal `{raw}` in products.{column}: {err}").into(),
        )
    })
}
