pub mod product_prices;
