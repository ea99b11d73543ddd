pub mod errors;
pub mod product_prices;

pub use errors::{ProductPriceError, ProductPriceResult};
