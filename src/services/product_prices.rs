use rust_decimal::Decimal;

use crate::domain::product::{FieldsToUpdate, Product, ProductField};
use crate::domain::product_prices::UpdateProductPricesCommand;
use crate::domain::tax_rules_group::NO_TAX_RULES_GROUP_ID;
use crate::repository::{ProductReader, ProductWriter, TaxRulesGroupReader};
use crate::services::errors::{
    CannotUpdateProductCode, ProductConstraintCode, ProductPriceError, ProductPriceResult,
};

/// Applies the pricing attributes present in `command` to the stored product.
///
/// Attributes are validated one by one in a fixed order and the first failure
/// aborts the update. Only the staged columns are written, and nothing is
/// written when the command carries no effective change.
pub fn update_product_prices<R>(
    repo: &R,
    command: &UpdateProductPricesCommand,
) -> ProductPriceResult<()>
where
    R: ProductReader + ProductWriter + TaxRulesGroupReader + ?Sized,
{
    let mut product = load_product(repo, command.product_id)?;
    let fields = stage_prices(repo, &mut product, command)?;

    if fields.is_empty() {
        log::debug!(
            "No price changes for product {}, skipping update",
            command.product_id
        );
        return Ok(());
    }

    persist_prices(repo, &product, &fields)
}

fn load_product<R>(repo: &R, product_id: i32) -> ProductPriceResult<Product>
where
    R: ProductReader + ?Sized,
{
    match repo.get_product_by_id(product_id) {
        Ok(Some(product)) => Ok(product),
        Ok(None) => Err(ProductPriceError::ProductNotFound(product_id)),
        Err(err) => {
            log::error!("Failed to load product {product_id}: {err}");
            Err(ProductPriceError::Product {
                message: format!("failed to load product #{product_id}"),
                source: err,
            })
        }
    }
}

fn stage_prices<R>(
    repo: &R,
    product: &mut Product,
    command: &UpdateProductPricesCommand,
) -> ProductPriceResult<FieldsToUpdate>
where
    R: TaxRulesGroupReader + ?Sized,
{
    let mut fields = FieldsToUpdate::new();

    if let Some(price) = command.price {
        product.price = price;
        validate_field(product, ProductField::Price, ProductConstraintCode::InvalidPrice)?;
        fields.insert(ProductField::Price);
    }

    if let Some(unit_price) = command.unit_price {
        stage_unit_price(product, unit_price, command.price, &mut fields)?;
    }

    if let Some(unity) = command.unity.as_ref() {
        product.unity = unity.clone();
        fields.insert(ProductField::Unity);
    }

    if let Some(ecotax) = command.ecotax {
        product.ecotax = ecotax;
        validate_field(product, ProductField::Ecotax, ProductConstraintCode::InvalidEcotax)?;
        fields.insert(ProductField::Ecotax);
    }

    if let Some(tax_rules_group_id) = command.tax_rules_group_id {
        product.tax_rules_group_id = tax_rules_group_id;
        validate_field(
            product,
            ProductField::TaxRulesGroupId,
            ProductConstraintCode::InvalidTaxRulesGroupId,
        )?;
        assert_tax_rules_group_exists(repo, tax_rules_group_id)?;
        fields.insert(ProductField::TaxRulesGroupId);
    }

    if let Some(on_sale) = command.on_sale {
        product.on_sale = on_sale;
        fields.insert(ProductField::OnSale);
    }

    if let Some(wholesale_price) = command.wholesale_price {
        product.wholesale_price = wholesale_price;
        validate_field(
            product,
            ProductField::WholesalePrice,
            ProductConstraintCode::InvalidWholesalePrice,
        )?;
        fields.insert(ProductField::WholesalePrice);
    }

    Ok(fields)
}

/// Stores the unit price as a ratio against the effective price.
///
/// A zero unit price leaves the product untouched.
fn stage_unit_price(
    product: &mut Product,
    unit_price: Decimal,
    price: Option<Decimal>,
    fields: &mut FieldsToUpdate,
) -> ProductPriceResult<()> {
    if unit_price < Decimal::ZERO {
        return Err(ProductPriceError::constraint(
            ProductConstraintCode::InvalidUnitPrice,
            format!("unit price {unit_price} must not be negative"),
        ));
    }

    if unit_price.is_zero() {
        return Ok(());
    }

    let price = price.unwrap_or(product.price);
    if price.is_zero() {
        return Err(ProductPriceError::constraint(
            ProductConstraintCode::InvalidUnitPrice,
            "cannot set unit price when product price is 0",
        ));
    }

    let Some(ratio) = price.checked_div(unit_price) else {
        return Err(ProductPriceError::constraint(
            ProductConstraintCode::InvalidUnitPrice,
            format!("unit price {unit_price} is out of range for price {price}"),
        ));
    };

    product.unit_price_ratio = ratio;
    product.unit_price = unit_price;
    fields.insert(ProductField::UnitPriceRatio);
    fields.insert(ProductField::UnitPrice);

    Ok(())
}

fn validate_field(
    product: &Product,
    field: ProductField,
    code: ProductConstraintCode,
) -> ProductPriceResult<()> {
    product.validate_field(field).map_err(|errors| {
        let reasons: Vec<&str> = errors.iter().map(|error| &*error.code).collect();
        ProductPriceError::constraint(
            code,
            format!("invalid product {field}: {}", reasons.join(", ")),
        )
    })
}

fn assert_tax_rules_group_exists<R>(repo: &R, tax_rules_group_id: i32) -> ProductPriceResult<()>
where
    R: TaxRulesGroupReader + ?Sized,
{
    if tax_rules_group_id == NO_TAX_RULES_GROUP_ID {
        return Ok(());
    }

    match repo.get_tax_rules_group_by_id(tax_rules_group_id) {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(ProductPriceError::constraint(
            ProductConstraintCode::InvalidTaxRulesGroupId,
            format!("tax rules group #{tax_rules_group_id} does not exist"),
        )),
        Err(err) => {
            log::error!("Failed to load tax rules group {tax_rules_group_id}: {err}");
            Err(ProductPriceError::Product {
                message: format!("failed to load tax rules group #{tax_rules_group_id}"),
                source: err,
            })
        }
    }
}

fn persist_prices<R>(repo: &R, product: &Product, fields: &FieldsToUpdate) -> ProductPriceResult<()>
where
    R: ProductWriter + ?Sized,
{
    match repo.update_product_prices(product, fields) {
        Ok(0) => {
            log::error!("Product {} prices were not written", product.id);
            Err(ProductPriceError::CannotUpdate {
                product_id: product.id,
                code: CannotUpdateProductCode::FailedUpdatePrices,
                source: None,
            })
        }
        Ok(_) => {
            log::info!("Updated product {} prices: {fields}", product.id);
            Ok(())
        }
        Err(err) => {
            log::error!("Failed to update product {} prices: {err}", product.id);
            Err(ProductPriceError::CannotUpdate {
                product_id: product.id,
                code: CannotUpdateProductCode::FailedUpdatePrices,
                source: Some(err),
            })
        }
    }
}
