use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product_prices::UpdateProductPricesCommand;

/// Result type returned by the product price form helpers.
pub type ProductPricesFormResult<T> = Result<T, ProductPricesFormError>;

/// Errors that can occur while processing product price forms.
#[derive(Debug, Error)]
pub enum ProductPricesFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// A decimal field could not be parsed.
    #[error("invalid decimal `{value}` for {field}")]
    InvalidDecimal { field: &'static str, value: String },
}

/// Payload submitted to change the prices of a product.
///
/// Decimal amounts travel as strings so no precision is lost in transit.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateProductPricesForm {
    /// Product to update.
    #[validate(range(min = 1))]
    pub product_id: i32,
    pub price: Option<String>,
    pub unit_price: Option<String>,
    pub unity: Option<String>,
    pub ecotax: Option<String>,
    pub tax_rules_group_id: Option<i32>,
    pub on_sale: Option<bool>,
    pub wholesale_price: Option<String>,
}

impl UpdateProductPricesForm {
    /// Validates the payload and parses it into an `UpdateProductPricesCommand`.
    ///
    /// Blank amounts count as not provided. Value ranges are checked when the
    /// command is applied.
    pub fn into_command(self) -> ProductPricesFormResult<UpdateProductPricesCommand> {
        self.validate()?;

        let mut command = UpdateProductPricesCommand::new(self.product_id);

        if let Some(price) = parse_decimal("price", self.price.as_deref())? {
            command = command.price(price);
        }

        if let Some(unit_price) = parse_decimal("unit_price", self.unit_price.as_deref())? {
            command = command.unit_price(unit_price);
        }

        if let Some(unity) = self.unity {
            command = command.unity(unity.trim());
        }

        if let Some(ecotax) = parse_decimal("ecotax", self.ecotax.as_deref())? {
            command = command.ecotax(ecotax);
        }

        if let Some(tax_rules_group_id) = self.tax_rules_group_id {
            command = command.tax_rules_group_id(tax_rules_group_id);
        }

        if let Some(on_sale) = self.on_sale {
            command = command.on_sale(on_sale);
        }

        if let Some(wholesale_price) =
            parse_decimal("wholesale_price", self.wholesale_price.as_deref())?
        {
            command = command.wholesale_price(wholesale_price);
        }

        Ok(command)
    }
}

fn parse_decimal(
    field: &'static str,
    input: Option<&str>,
) -> ProductPricesFormResult<Option<Decimal>> {
    let Some(raw) = input.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(None);
    };

    Decimal::from_str(raw)
        .map(Some)
        .map_err(|_| ProductPricesFormError::InvalidDecimal {
            field,
            value: raw.to_string(),
        })
}
