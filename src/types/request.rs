#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

//! Requests for the private (authenticated) order methods.
//!
//! Every request is built unvalidated; its location and algorithm are checked when the
//! client turns it into query parameters, before anything is sent.

use bon::Builder;

use crate::Result;
use crate::pool::Pool;
use crate::types::{AlgorithmParam, Decimal, LocationParam, OrderId};

pub(crate) type Params = Vec<(&'static str, String)>;

/// A private API method whose parameters can be validated into query parameters.
pub(crate) trait PrivateMethod {
    const METHOD: &'static str;
    /// Bare flag sent immediately after the method name.
    const FLAG: Option<&'static str> = None;

    fn params(&self) -> Result<Params>;
}

fn market(location: &LocationParam, algorithm: &AlgorithmParam) -> Result<Params> {
    let location = location.resolve()?;
    let algorithm = algorithm.resolve()?;

    Ok(vec![
        ("location", location.wire_token().to_owned()),
        ("algo", algorithm.to_string()),
    ])
}

/// Lists the caller's own orders in one market.
#[non_exhaustive]
#[derive(Clone, Debug, Builder)]
#[builder(on(LocationParam, into), on(AlgorithmParam, into))]
pub struct OrdersRequest {
    pub location: LocationParam,
    pub algorithm: AlgorithmParam,
}

impl PrivateMethod for OrdersRequest {
    const METHOD: &'static str = "orders.get";
    const FLAG: Option<&'static str> = Some("my");

    fn params(&self) -> Result<Params> {
        market(&self.location, &self.algorithm)
    }
}

/// Creates a new order.
///
/// # Example
///
/// ```
/// use nicehash_client_sdk::pool::Pool;
/// use nicehash_client_sdk::types::dec;
/// use nicehash_client_sdk::types::request::CreateOrderRequest;
///
/// let request = CreateOrderRequest::builder()
///     .location("europe")
///     .algorithm("X11")
///     .amount(dec!(0.01))
///     .price(dec!(0.25))
///     .limit(dec!(0))
///     .pool(Pool::new("stratum.example.com", 3333, "worker", "x"))
///     .build();
/// ```
#[non_exhaustive]
#[derive(Clone, Debug, Builder)]
#[builder(on(LocationParam, into), on(AlgorithmParam, into))]
pub struct CreateOrderRequest {
    pub location: LocationParam,
    pub algorithm: AlgorithmParam,
    /// Amount in BTC to fund the order with
    pub amount: Decimal,
    /// Price in BTC per unit of hashing speed per day
    pub price: Decimal,
    /// Speed limit; zero means unlimited
    pub limit: Decimal,
    pub pool: Pool,
}

impl PrivateMethod for CreateOrderRequest {
    const METHOD: &'static str = "orders.create";

    fn params(&self) -> Result<Params> {
        let mut params = market(&self.location, &self.algorithm)?;
        params.extend([
            ("amount", self.amount.to_string()),
            ("price", self.price.to_string()),
            ("limit", self.limit.to_string()),
            ("pool_host", self.pool.hostname().to_owned()),
            ("pool_port", self.pool.port().to_owned()),
            ("pool_user", self.pool.user().to_owned()),
            ("pool_pass", self.pool.password().to_owned()),
        ]);
        Ok(params)
    }
}

/// Adds funds to an existing order.
#[non_exhaustive]
#[derive(Clone, Debug, Builder)]
#[builder(on(LocationParam, into), on(AlgorithmParam, into))]
pub struct RefillOrderRequest {
    pub location: LocationParam,
    pub algorithm: AlgorithmParam,
    pub order: OrderId,
    pub amount: Decimal,
}

impl PrivateMethod for RefillOrderRequest {
    const METHOD: &'static str = "orders.refill";

    fn params(&self) -> Result<Params> {
        let mut params = market(&self.location, &self.algorithm)?;
        params.push(("order", self.order.to_string()));
        params.push(("amount", self.amount.to_string()));
        Ok(params)
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Builder)]
#[builder(on(LocationParam, into), on(AlgorithmParam, into))]
pub struct RemoveOrderRequest {
    pub location: LocationParam,
    pub algorithm: AlgorithmParam,
    pub order: OrderId,
}

impl PrivateMethod for RemoveOrderRequest {
    const METHOD: &'static str = "orders.remove";

    fn params(&self) -> Result<Params> {
        let mut params = market(&self.location, &self.algorithm)?;
        params.push(("order", self.order.to_string()));
        Ok(params)
    }
}

/// Sets a new price. The marketplace only allows increases through this method; use
/// [`DecreaseOrderPriceRequest`] to lower it.
#[non_exhaustive]
#[derive(Clone, Debug, Builder)]
#[builder(on(LocationParam, into), on(AlgorithmParam, into))]
pub struct SetOrderPriceRequest {
    pub location: LocationParam,
    pub algorithm: AlgorithmParam,
    pub order: OrderId,
    pub price: Decimal,
}

impl PrivateMethod for SetOrderPriceRequest {
    const METHOD: &'static str = "orders.set.price";

    fn params(&self) -> Result<Params> {
        let mut params = market(&self.location, &self.algorithm)?;
        params.push(("order", self.order.to_string()));
        params.push(("price", self.price.to_string()));
        Ok(params)
    }
}

/// Lowers the price by the algorithm's fixed decrease step.
#[non_exhaustive]
#[derive(Clone, Debug, Builder)]
#[builder(on(LocationParam, into), on(AlgorithmParam, into))]
pub struct DecreaseOrderPriceRequest {
    pub location: LocationParam,
    pub algorithm: AlgorithmParam,
    pub order: OrderId,
}

impl PrivateMethod for DecreaseOrderPriceRequest {
    const METHOD: &'static str = "orders.set.price.decrease";

    fn params(&self) -> Result<Params> {
        let mut params = market(&self.location, &self.algorithm)?;
        params.push(("order", self.order.to_string()));
        Ok(params)
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Builder)]
#[builder(on(LocationParam, into), on(AlgorithmParam, into))]
pub struct SetOrderLimitRequest {
    pub location: LocationParam,
    pub algorithm: AlgorithmParam,
    pub order: OrderId,
    pub limit: Decimal,
}

impl PrivateMethod for SetOrderLimitRequest {
    const METHOD: &'static str = "orders.set.limit";

    fn params(&self) -> Result<Params> {
        let mut params = market(&self.location, &self.algorithm)?;
        params.push(("order", self.order.to_string()));
        params.push(("limit", self.limit.to_string()));
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::error::Kind;
    use crate::types::Location;

    #[test]
    fn create_params_should_be_ordered() {
        let request = CreateOrderRequest::builder()
            .location(Location::Us)
            .algorithm("Equihash")
            .amount(dec!(0.05))
            .price(dec!(1.2))
            .limit(dec!(0))
            .pool(Pool::new("zec.example.org", 3357, "t1abc.rig", "x"))
            .build();

        let params = request.params().unwrap();
        let keys: Vec<&str> = params.iter().map(|(k, _)| *k).collect();

        assert_eq!(
            keys,
            [
                "location",
                "algo",
                "amount",
                "price",
                "limit",
                "pool_host",
                "pool_port",
                "pool_user",
                "pool_pass"
            ]
        );
        assert_eq!(params[0].1, "1");
        assert_eq!(params[1].1, "24");
        assert_eq!(params[2].1, "0.05");
        assert_eq!(params[6].1, "3357");
    }

    #[test]
    fn integer_algorithm_should_normalize() {
        let request = RemoveOrderRequest::builder()
            .location(0)
            .algorithm(3)
            .order(77)
            .build();

        assert_eq!(
            request.params().unwrap(),
            vec![
                ("location", "0".to_owned()),
                ("algo", "3".to_owned()),
                ("order", "77".to_owned()),
            ]
        );
    }

    #[test]
    fn invalid_market_should_fail() {
        let request = SetOrderLimitRequest::builder()
            .location("mars")
            .algorithm("X11")
            .order(1)
            .limit(dec!(1))
            .build();
        assert_eq!(request.params().unwrap_err().kind(), Kind::UnknownLocation);

        let request = DecreaseOrderPriceRequest::builder()
            .location("us")
            .algorithm(99)
            .order(1)
            .build();
        assert_eq!(request.params().unwrap_err().kind(), Kind::InvalidAlgorithm);
    }
}
