use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Reserved tax rules group id meaning that no group is assigned.
pub const NO_TAX_RULES_GROUP_ID: i32 = 0;

/// Domain representation of a tax rules group a product can be attached to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaxRulesGroup {
    /// Unique identifier of the tax rules group.
    pub id: i32,
    /// Human-readable name of the group.
    pub name: String,
    /// Whether the group can still be selected for products.
    pub is_active: bool,
    /// Timestamp for when the group record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the group record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new tax rules group.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTaxRulesGroup {
    pub name: String,
    pub is_active: bool,
}

impl NewTaxRulesGroup {
    /// Construct an active tax rules group payload with a trimmed name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into().trim().to_string();
        Self {
            name,
            is_active: true,
        }
    }

    /// Mark the group as inactive.
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}
