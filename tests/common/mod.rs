#![allow(
    unused,
    reason = "Each test binary uses a different subset of these helpers"
)]

use httpmock::MockServer;
use nicehash_client_sdk::pool::Pool;
use nicehash_client_sdk::{Client, Config};

pub const ID: &str = "12345";
pub const KEY: &str = "aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee";

pub fn create_authenticated(server: &MockServer) -> anyhow::Result<Client> {
    let config = Config::builder().id(ID).key(KEY).build();

    Ok(Client::new(&server.base_url(), config)?)
}

pub fn create_unauthenticated(server: &MockServer) -> anyhow::Result<Client> {
    Ok(Client::new(&server.base_url(), Config::default())?)
}

#[must_use]
pub fn pool() -> Pool {
    Pool::new("stratum.example.com", 3333, "wallet.rig1", "x")
}
