use rust_decimal::Decimal;

/// Partial update of the pricing attributes of a single product.
///
/// Every optional attribute left as `None` keeps its stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateProductPricesCommand {
    /// Product whose prices are updated.
    pub product_id: i32,
    /// New base price excluding taxes.
    pub price: Option<Decimal>,
    /// New unit price; stored as a ratio against the price.
    pub unit_price: Option<Decimal>,
    /// New unit label.
    pub unity: Option<String>,
    /// New ecological tax.
    pub ecotax: Option<Decimal>,
    /// New tax rules group, `NO_TAX_RULES_GROUP_ID` to detach the product.
    pub tax_rules_group_id: Option<i32>,
    /// New on-sale flag.
    pub on_sale: Option<bool>,
    /// New wholesale price.
    pub wholesale_price: Option<Decimal>,
}

impl UpdateProductPricesCommand {
    /// Create a command for `product_id` with no changes applied yet.
    pub fn new(product_id: i32) -> Self {
        Self {
            product_id,
            ..Self::default()
        }
    }

    pub fn price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    pub fn unit_price(mut self, unit_price: Decimal) -> Self {
        self.unit_price = Some(unit_price);
        self
    }

    pub fn unity(mut self, unity: impl Into<String>) -> Self {
        self.unity = Some(unity.into());
        self
    }

    pub fn ecotax(mut self, ecotax: Decimal) -> Self {
        self.ecotax = Some(ecotax);
        self
    }

    pub fn tax_rules_group_id(mut self, tax_rules_group_id: i32) -> Self {
        self.tax_rules_group_id = Some(tax_rules_group_id);
        self
    }

    pub fn on_sale(mut self, on_sale: bool) -> Self {
        self.on_sale = Some(on_sale);
        self
    }

    pub fn wholesale_price(mut self, wholesale_price: Decimal) -> Self {
        self.wholesale_price = Some(wholesale_price);
        self
    }
}
