//! Prints current marketplace prices for every algorithm.
//!
//! ```sh
//! RUST_LOG=info,hyper_util=off,reqwest=off cargo run --example profitability -- europe
//! ```

use nicehash_client_sdk::Client;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let location = std::env::args().nth(1).unwrap_or_else(|| "global".to_owned());
    let client = Client::default();

    match client.api_version().await {
        Ok(version) => info!(endpoint = "api_version", %version),
        Err(e) => error!(endpoint = "api_version", error = %e),
    }

    let profitability = client.profitability(location.as_str()).await?;

    let mut algorithms: Vec<_> = profitability.iter().collect();
    algorithms.sort_by_key(|(name, _)| name.as_str());
    for (algorithm, stats) in algorithms {
        info!(
            %algorithm,
            price = %stats.get("price").map(ToString::to_string).unwrap_or_default(),
            speed = %stats.get("speed").map(ToString::to_string).unwrap_or_default(),
        );
    }

    Ok(())
}
