//! Client for the NiceHash hashpower marketplace API.
//!
//! Every operation is a single `GET` against `<host>api` with the method name and its
//! parameters in the query string. Public methods need no credentials; the order and balance
//! methods send the account id and API key with each call.
//!
//! # Example
//!
//! ```no_run
//! use nicehash_client_sdk::{Client, Config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::default();
//!
//! let profitability = client.profitability("europe").await?;
//! for (algorithm, stats) in &profitability {
//!     println!("{algorithm}: {:?}", stats.get("price"));
//! }
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;
use std::time::Duration;

use bon::Builder;
use reqwest::{
    Client as ReqwestClient, Method,
    header::{HeaderMap, HeaderValue},
};
use secrecy::SecretString;
use serde_json::Value;
use url::Url;

use crate::auth::Credentials;
use crate::error::Error;
use crate::query::Query;
use crate::types::request::{
    CreateOrderRequest, DecreaseOrderPriceRequest, OrdersRequest, PrivateMethod,
    RefillOrderRequest, RemoveOrderRequest, SetOrderLimitRequest, SetOrderPriceRequest,
};
use crate::types::response::{ApiVersion, GlobalStats, Profitability};
use crate::types::LocationParam;
use crate::{API_PATH, DEFAULT_HOST, Result};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for [`Client`].
///
/// Credentials come from exactly one of two sources: a two-line key file (`key_path`), or an
/// `id` together with a `key`. Supplying neither yields a client limited to public methods;
/// any other combination is rejected by [`Client::new`].
#[derive(Clone, Debug, Builder)]
pub struct Config {
    /// Plain-text file with the account id on the first line and the API key on the second.
    #[builder(into)]
    key_path: Option<PathBuf>,
    #[builder(into)]
    id: Option<String>,
    #[builder(with = |key: impl Into<String>| SecretString::from(key.into()))]
    key: Option<SecretString>,
    /// Applied to every request; expiry surfaces as [`crate::error::Kind::RemoteRequest`].
    #[builder(default = DEFAULT_TIMEOUT)]
    timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config::builder().build()
    }
}

/// NiceHash API client.
///
/// # Example
///
/// ```no_run
/// use nicehash_client_sdk::{Client, Config, DEFAULT_HOST};
/// use nicehash_client_sdk::types::request::OrdersRequest;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config::builder().key_path("nicehash.key").build();
/// let client = Client::new(DEFAULT_HOST, config)?;
///
/// let request = OrdersRequest::builder()
///     .location("europe")
///     .algorithm("DaggerHashimoto")
///     .build();
/// let orders = client.list_orders(&request).await?;
/// println!("{orders}");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    host: Url,
    client: ReqwestClient,
    credentials: Option<Credentials>,
}

impl Default for Client {
    fn default() -> Self {
        Client::new(DEFAULT_HOST, Config::default())
            .expect("Client with default endpoint should succeed")
    }
}

impl Client {
    /// Creates a client against `host`, resolving credentials from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Kind::InvalidCredentialConfiguration`] if credentials are given
    /// in an unsupported combination or the key file cannot be used, and an internal error if
    /// the host URL is invalid or the HTTP client fails to build.
    pub fn new(host: &str, config: Config) -> Result<Client> {
        let credentials = match (config.key_path, config.id, config.key) {
            (Some(path), None, None) => Some(Credentials::from_file(path)?),
            (None, Some(id), Some(key)) => Some(Credentials { id, key }),
            (None, None, None) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("only public queries are allowed without credentials");
                None
            }
            _ => {
                return Err(Error::credentials(
                    "need a key file path, or an id *and* a key",
                ));
            }
        };

        let mut headers = HeaderMap::new();

        headers.insert("User-Agent", HeaderValue::from_static("nicehash_client_sdk"));
        headers.insert("Accept", HeaderValue::from_static("application/json"));
        headers.insert("Connection", HeaderValue::from_static("keep-alive"));
        let client = ReqwestClient::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        let mut host = Url::parse(host)?;
        if !host.path().ends_with('/') {
            let path = format!("{}/", host.path());
            host.set_path(&path);
        }

        Ok(Self {
            host,
            client,
            credentials,
        })
    }

    /// Returns the host URL for the client. It always ends with `/`, so a host given as
    /// `https://proxy.example/nicehash` sends requests to `https://proxy.example/nicehash/api`.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    /// Whether this client carries credentials. Private methods on a client without them are
    /// still sent, and rejected by the API.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }

    #[must_use]
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    async fn get(&self, query: Option<Query>) -> Result<Value> {
        let mut url = self.host.join(API_PATH)?;
        let method = match &query {
            Some(query) => {
                url.set_query(Some(&query.encode()?));
                query.method_name().to_owned()
            }
            None => "api_version".to_owned(),
        };

        let request = self.client.request(Method::GET, url).build()?;

        crate::request(&self.client, request, &method).await
    }

    async fn private<R: PrivateMethod>(&self, request: &R) -> Result<Value> {
        // Validate before building anything so a bad parameter never reaches the network
        let params = request.params()?;

        let mut query = Query::method(R::METHOD);
        if let Some(flag) = R::FLAG {
            query = query.flag(flag);
        }
        let query = query
            .credentials(self.credentials.as_ref())
            .extend(params);

        self.get(Some(query)).await
    }

    /// Returns the version string of the remote API.
    pub async fn api_version(&self) -> Result<String> {
        let body = self.get(None).await?;
        let version: ApiVersion = crate::into_result(body)?;

        Ok(version.api_version)
    }

    /// Current price and speed statistics for every algorithm in `location`, keyed by
    /// algorithm name.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::error::Kind::UnknownLocation`] before any request is made if
    /// `location` is invalid, and with [`crate::error::Kind::RemoteResponse`] if a statistics
    /// record names an algorithm this client does not know.
    pub async fn profitability<L: Into<LocationParam>>(
        &self,
        location: L,
    ) -> Result<Profitability> {
        let location = location.into().resolve()?;
        let query = Query::method("stats.global.current").param("location", location.wire_token());

        let body = self.get(Some(query)).await?;
        let stats: GlobalStats = crate::into_result(body)?;

        stats.into_profitability()
    }

    /// Lists this account's orders in one market. Returns the raw response.
    pub async fn list_orders(&self, request: &OrdersRequest) -> Result<Value> {
        self.private(request).await
    }

    /// Places a new order. Returns the raw response.
    pub async fn create_order(&self, request: &CreateOrderRequest) -> Result<Value> {
        self.private(request).await
    }

    /// Adds funds to an order. Returns the raw response.
    pub async fn refill_order(&self, request: &RefillOrderRequest) -> Result<Value> {
        self.private(request).await
    }

    /// Cancels an order. Returns the raw response.
    pub async fn remove_order(&self, request: &RemoveOrderRequest) -> Result<Value> {
        self.private(request).await
    }

    /// Raises an order's price. Returns the raw response.
    pub async fn set_order_price(&self, request: &SetOrderPriceRequest) -> Result<Value> {
        self.private(request).await
    }

    /// Lowers an order's price by one step. Returns the raw response.
    pub async fn decrease_order_price(
        &self,
        request: &DecreaseOrderPriceRequest,
    ) -> Result<Value> {
        self.private(request).await
    }

    /// Changes an order's speed limit. Returns the raw response.
    pub async fn set_order_limit(&self, request: &SetOrderLimitRequest) -> Result<Value> {
        self.private(request).await
    }

    /// Returns the account balance as the raw response.
    pub async fn balance(&self) -> Result<Value> {
        let query = Query::method("balance").credentials(self.credentials.as_ref());

        self.get(Some(query)).await
    }
}
