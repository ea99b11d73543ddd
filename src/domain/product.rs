use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::tax_rules_group::NO_TAX_RULES_GROUP_ID;

/// Prices are limited to ten integer digits.
const PRICE_INTEGER_LIMIT: i64 = 10_000_000_000;

/// Domain representation of a product together with its pricing attributes.
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Human-readable name of the product.
    pub name: String,
    /// Base price excluding taxes.
    #[validate(custom(function = "is_price"))]
    pub price: Decimal,
    /// Price per `unity`. Derived from `price` and `unit_price_ratio`, never stored.
    pub unit_price: Decimal,
    /// Ratio between `price` and `unit_price`.
    pub unit_price_ratio: Decimal,
    /// Label of the unit the unit price refers to (for example "per kg").
    pub unity: String,
    /// Ecological tax included in the price.
    #[validate(custom(function = "is_price"))]
    pub ecotax: Decimal,
    /// Assigned tax rules group or [`NO_TAX_RULES_GROUP_ID`].
    #[validate(custom(function = "is_unsigned_id"))]
    pub tax_rules_group_id: i32,
    /// Whether the product is flagged as being on sale.
    pub on_sale: bool,
    /// Purchase price paid to the supplier.
    #[validate(custom(function = "is_price"))]
    pub wholesale_price: Decimal,
    /// Timestamp for when the product record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the product record.
    pub updated_at: NaiveDateTime,
}

impl Product {
    /// Unit price implied by `price` and `unit_price_ratio`.
    ///
    /// A ratio that is zero or negative means no unit price is configured.
    pub fn derived_unit_price(price: Decimal, unit_price_ratio: Decimal) -> Decimal {
        if unit_price_ratio <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        price.checked_div(unit_price_ratio).unwrap_or(Decimal::ZERO)
    }

    /// Run the entity validation rules and keep only the failures for `field`.
    pub fn validate_field(&self, field: ProductField) -> Result<(), Vec<ValidationError>> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };

        match errors.field_errors().get(field.as_str()) {
            Some(field_errors) if !field_errors.is_empty() => Err(field_errors.to_vec()),
            _ => Ok(()),
        }
    }
}

/// Payload required to insert a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
    pub unit_price_ratio: Decimal,
    pub unity: String,
    pub ecotax: Decimal,
    pub tax_rules_group_id: i32,
    pub on_sale: bool,
    pub wholesale_price: Decimal,
}

impl NewProduct {
    /// Build a new product payload with the given name and base price.
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
            unit_price_ratio: Decimal::ZERO,
            unity: String::new(),
            ecotax: Decimal::ZERO,
            tax_rules_group_id: NO_TAX_RULES_GROUP_ID,
            on_sale: false,
            wholesale_price: Decimal::ZERO,
        }
    }

    /// Attach a unit price ratio and the unit label it refers to.
    pub fn with_unit_price_ratio(mut self, ratio: Decimal, unity: impl Into<String>) -> Self {
        self.unit_price_ratio = ratio;
        self.unity = unity.into();
        self
    }

    pub fn with_ecotax(mut self, ecotax: Decimal) -> Self {
        self.ecotax = ecotax;
        self
    }

    pub fn with_tax_rules_group(mut self, tax_rules_group_id: i32) -> Self {
        self.tax_rules_group_id = tax_rules_group_id;
        self
    }

    pub fn with_wholesale_price(mut self, wholesale_price: Decimal) -> Self {
        self.wholesale_price = wholesale_price;
        self
    }

    pub fn on_sale(mut self, on_sale: bool) -> Self {
        self.on_sale = on_sale;
        self
    }
}

/// Pricing attributes of a product that can be changed independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductField {
    Price,
    UnitPrice,
    UnitPriceRatio,
    Unity,
    Ecotax,
    TaxRulesGroupId,
    OnSale,
    WholesalePrice,
}

impl ProductField {
    /// Attribute name as used by validation and storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductField::Price => "price",
            ProductField::UnitPrice => "unit_price",
            ProductField::UnitPriceRatio => "unit_price_ratio",
            ProductField::Unity => "unity",
            ProductField::Ecotax => "ecotax",
            ProductField::TaxRulesGroupId => "tax_rules_group_id",
            ProductField::OnSale => "on_sale",
            ProductField::WholesalePrice => "wholesale_price",
        }
    }
}

impl fmt::Display for ProductField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of product attributes touched while handling a single update.
///
/// Storage consults it to write only these columns, so values loaded but
/// never staged are not written back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldsToUpdate(BTreeSet<ProductField>);

impl FieldsToUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: ProductField) {
        self.0.insert(field);
    }

    pub fn contains(&self, field: ProductField) -> bool {
        self.0.contains(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = ProductField> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<ProductField> for FieldsToUpdate {
    fn from_iter<I: IntoIterator<Item = ProductField>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for FieldsToUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(|field| field.as_str()).collect();
        write!(f, "{}", names.join(", "))
    }
}

fn is_price(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO {
        return Err(ValidationError::new("negative_price"));
    }
    if *value >= Decimal::from(PRICE_INTEGER_LIMIT) {
        return Err(ValidationError::new("price_too_large"));
    }
    Ok(())
}

fn is_unsigned_id(value: i32) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(ValidationError::new("negative_id"));
    }
    Ok(())
}
