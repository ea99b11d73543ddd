use std::fmt;

use pushkind_common::repository::errors::RepositoryError;
use thiserror::Error;

/// Result type returned by the product price services.
pub type ProductPriceResult<T> = Result<T, ProductPriceError>;

/// Field-level reasons a product price update is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductConstraintCode {
    InvalidPrice,
    InvalidUnitPrice,
    InvalidEcotax,
    InvalidTaxRulesGroupId,
    InvalidWholesalePrice,
}

impl ProductConstraintCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductConstraintCode::InvalidPrice => "INVALID_PRICE",
            ProductConstraintCode::InvalidUnitPrice => "INVALID_UNIT_PRICE",
            ProductConstraintCode::InvalidEcotax => "INVALID_ECOTAX",
            ProductConstraintCode::InvalidTaxRulesGroupId => "INVALID_TAX_RULES_GROUP_ID",
            ProductConstraintCode::InvalidWholesalePrice => "INVALID_WHOLESALE_PRICE",
        }
    }
}

impl fmt::Display for ProductConstraintCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reasons a product could not be written back to storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CannotUpdateProductCode {
    FailedUpdatePrices,
}

impl CannotUpdateProductCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CannotUpdateProductCode::FailedUpdatePrices => "FAILED_UPDATE_PRICES",
        }
    }
}

impl fmt::Display for CannotUpdateProductCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while updating product prices.
#[derive(Debug, Error)]
pub enum ProductPriceError {
    /// A submitted value failed validation.
    #[error("{code}: {message}")]
    Constraint {
        code: ProductConstraintCode,
        message: String,
    },
    /// The product to update does not exist.
    #[error("product #{0} was not found")]
    ProductNotFound(i32),
    /// Loading the product or one of its references failed.
    #[error("{message}")]
    Product {
        message: String,
        #[source]
        source: RepositoryError,
    },
    /// Storage refused or failed to write the staged changes.
    #[error("{code}: could not update prices of product #{product_id}")]
    CannotUpdate {
        product_id: i32,
        code: CannotUpdateProductCode,
        #[source]
        source: Option<RepositoryError>,
    },
}

impl ProductPriceError {
    pub(crate) fn constraint(code: ProductConstraintCode, message: impl Into<String>) -> Self {
        Self::Constraint {
            code,
            message: message.into(),
        }
    }

    /// Constraint code carried by validation failures.
    pub fn constraint_code(&self) -> Option<ProductConstraintCode> {
        match self {
            Self::Constraint { code, .. } => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn constraint_error_displays_code_and_message() {
        let err = ProductPriceError::constraint(
            ProductConstraintCode::InvalidEcotax,
            "ecotax must not be negative",
        );

        assert_eq!(
            err.to_string(),
            "INVALID_ECOTAX: ecotax must not be negative"
        );
        assert_eq!(
            err.constraint_code(),
            Some(ProductConstraintCode::InvalidEcotax)
        );
    }

    #[test]
    fn cannot_update_error_exposes_its_cause() {
        let err = ProductPriceError::CannotUpdate {
            product_id: 9,
            code: CannotUpdateProductCode::FailedUpdatePrices,
            source: Some(RepositoryError::NotFound),
        };

        assert_eq!(
            err.to_string(),
            "FAILED_UPDATE_PRICES: could not update prices of product #9"
        );
        assert!(err.source().is_some());
        assert_eq!(err.constraint_code(), None);
    }
}
