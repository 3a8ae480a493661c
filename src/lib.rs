#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod auth;
pub mod client;
pub mod error;
pub mod pool;
mod query;
pub mod registry;
pub(crate) mod serde_helpers;
pub mod types;

use reqwest::Request;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub use client::{Client, Config};

use crate::error::{ApiError, Error};

pub type Result<T> = std::result::Result<T, Error>;

/// Public NiceHash API host.
pub const DEFAULT_HOST: &str = "https://api.nicehash.com/";

/// Path of the single RPC-style endpoint, relative to the host.
pub(crate) const API_PATH: &str = "api";

/// Sends `request` and returns the parsed JSON body.
///
/// `method` is the API method name carried in the query string; it only labels logs and
/// errors, since every call shares one path.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        level = "debug",
        skip_all,
        fields(method = %method, status_code)
    )
)]
async fn request(client: &reqwest::Client, request: Request, method: &str) -> Result<Value> {
    let http_method = request.method().clone();
    let path = request.url().path().to_owned();

    let response = client.execute(request).await?;
    let status_code = response.status();

    #[cfg(feature = "tracing")]
    tracing::Span::current().record("status_code", status_code.as_u16());

    if !status_code.is_success() {
        let message = response.text().await.unwrap_or_default();

        #[cfg(feature = "tracing")]
        tracing::warn!(
            status = %status_code,
            method = %method,
            message = %message,
            "API request failed"
        );

        return Err(Error::status(
            status_code,
            http_method,
            format!("{path}?method={method}"),
            message,
        ));
    }

    let json_value = response.json::<Value>().await?;

    Ok(json_value)
}

/// Extracts and deserializes the `result` payload, failing if the API reported an error in it.
fn into_result<T: DeserializeOwned>(body: Value) -> Result<T> {
    if let Some(message) = body
        .get("result")
        .and_then(|result| result.get("error"))
        .and_then(Value::as_str)
    {
        return Err(ApiError {
            message: message.to_owned(),
        }
        .into());
    }

    let envelope: types::response::Envelope<T> = serde_helpers::deserialize_with_warnings(body)?;
    Ok(envelope.result)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::Kind;
    use crate::types::response::ApiVersion;

    #[test]
    fn into_result_should_unwrap_envelope() {
        let version: ApiVersion = into_result(json!({
            "result": {"api_version": "1.2.7"},
            "method": null
        }))
        .unwrap();

        assert_eq!(version.api_version, "1.2.7");
    }

    #[test]
    fn into_result_should_surface_api_errors() {
        let err = into_result::<ApiVersion>(json!({
            "result": {"error": "Method not supported"},
            "method": "nope"
        }))
        .unwrap_err();

        assert_eq!(err.kind(), Kind::RemoteResponse);
        let api_error = err.downcast_ref::<ApiError>().unwrap();
        assert_eq!(api_error.message, "Method not supported");
    }

    #[test]
    fn into_result_without_result_should_fail() {
        let err = into_result::<ApiVersion>(json!({"api_version": "1.2.7"})).unwrap_err();

        assert_eq!(err.kind(), Kind::RemoteResponse);
    }
}
