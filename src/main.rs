use std::env;
use std::io::Read;

use dotenvy::dotenv;
use pushkind_common::db::establish_connection_pool;

use pushkind_pricing::forms::product_prices::UpdateProductPricesForm;
use pushkind_pricing::repository::DieselRepository;
use pushkind_pricing::services::product_prices::update_product_prices;

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let database_url = env::var("DATABASE_URL").unwrap_or("app.db".to_string());

    // The update payload comes from the file given as the first argument or stdin.
    let payload = match env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path).map_err(|e| format!("{path}: {e}")),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map(|_| buffer)
                .map_err(|e| format!("stdin: {e}"))
        }
    };
    let payload = match payload {
        Ok(payload) => payload,
        Err(e) => {
            log::error!("Failed to read update payload from {e}");
            std::process::exit(1);
        }
    };

    let form: UpdateProductPricesForm = match serde_json::from_str(&payload) {
        Ok(form) => form,
        Err(e) => {
            log::error!("Failed to parse update payload: {e}");
            std::process::exit(1);
        }
    };

    let command = match form.into_command() {
        Ok(command) => command,
        Err(e) => {
            log::error!("Invalid update payload: {e}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    if let Err(e) = update_product_prices(&repo, &command) {
        log::error!("Failed to update product {} prices: {e}", command.product_id);
        std::process::exit(1);
    }
}
