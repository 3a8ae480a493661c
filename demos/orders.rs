//! Lists the account's orders and balance.
//!
//! Expects a key file with the API id on the first line and the key on the second:
//! ```sh
//! NICEHASH_KEY_FILE=nicehash.key RUST_LOG=info cargo run --example orders
//! ```

use nicehash_client_sdk::types::Location;
use nicehash_client_sdk::types::request::OrdersRequest;
use nicehash_client_sdk::{Client, Config, DEFAULT_HOST};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

const KEY_FILE_VAR: &str = "NICEHASH_KEY_FILE";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let key_path = std::env::var(KEY_FILE_VAR)?;
    let config = Config::builder().key_path(key_path).build();
    let client = Client::new(DEFAULT_HOST, config)?;

    match client.balance().await {
        Ok(balance) => info!(endpoint = "balance", %balance),
        Err(e) => error!(endpoint = "balance", error = %e),
    }

    for location in [Location::Europe, Location::Us] {
        let request = OrdersRequest::builder()
            .location(location)
            .algorithm("DaggerHashimoto")
            .build();

        match client.list_orders(&request).await {
            Ok(orders) => info!(endpoint = "orders", %location, %orders),
            Err(e) => error!(endpoint = "orders", %location, error = %e),
        }
    }

    Ok(())
}
