//! Parameter types shared by every operation, and their validation into wire tokens.
//!
//! The API accepts algorithms and locations either by name or by integer code. Both forms are
//! captured in a sum type ([`AlgorithmParam`], [`LocationParam`]) so callers can pass whichever
//! they have, and both are validated locally before any request is sent.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::Display;

use crate::Result;
use crate::error::{InvalidAlgorithm, InvalidParameterType, UnknownLocation};
use crate::registry;

pub mod request;
pub mod response;

/// Arbitrary precision decimal type for amounts, prices and limits.
pub use rust_decimal::Decimal;
/// Macro for creating [`Decimal`] literals at compile time.
///
/// # Example
/// ```
/// use nicehash_client_sdk::types::dec;
/// let price = dec!(2.5);
/// ```
pub use rust_decimal_macros::dec;

/// Server-assigned identifier of a hashpower order.
pub type OrderId = u64;

/// Marketplace region an order is placed in.
#[non_exhaustive]
#[derive(
    Clone, Copy, Debug, Default, Display, Eq, Hash, PartialEq, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Location {
    /// All locations; only meaningful for queries
    #[default]
    Global,
    Europe,
    Us,
}

impl Location {
    /// The value the API expects for the `location` parameter.
    #[must_use]
    pub const fn wire_token(self) -> &'static str {
        match self {
            Location::Global => "",
            Location::Europe => "0",
            Location::Us => "1",
        }
    }
}

/// A location as supplied by a caller: a name, a numeric region code, or an already
/// resolved [`Location`].
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LocationParam {
    Name(String),
    Code(i64),
    Resolved(Location),
}

impl LocationParam {
    /// Resolves this parameter, accepting `"global"`, `"europe"`, `"us"`, `0` (europe)
    /// and `1` (us).
    pub fn resolve(&self) -> Result<Location> {
        match self {
            LocationParam::Resolved(location) => Ok(*location),
            LocationParam::Name(name) => match name.as_str() {
                "global" => Ok(Location::Global),
                "europe" => Ok(Location::Europe),
                "us" => Ok(Location::Us),
                other => Err(UnknownLocation {
                    value: other.to_owned(),
                }
                .into()),
            },
            LocationParam::Code(0) => Ok(Location::Europe),
            LocationParam::Code(1) => Ok(Location::Us),
            LocationParam::Code(other) => Err(UnknownLocation {
                value: other.to_string(),
            }
            .into()),
        }
    }
}

impl From<Location> for LocationParam {
    fn from(location: Location) -> Self {
        LocationParam::Resolved(location)
    }
}

impl From<&str> for LocationParam {
    fn from(name: &str) -> Self {
        LocationParam::Name(name.to_owned())
    }
}

impl From<String> for LocationParam {
    fn from(name: String) -> Self {
        LocationParam::Name(name)
    }
}

impl From<i64> for LocationParam {
    fn from(code: i64) -> Self {
        LocationParam::Code(code)
    }
}

impl From<i32> for LocationParam {
    fn from(code: i32) -> Self {
        LocationParam::Code(i64::from(code))
    }
}

impl From<u8> for LocationParam {
    fn from(code: u8) -> Self {
        LocationParam::Code(i64::from(code))
    }
}

impl TryFrom<&Value> for LocationParam {
    type Error = crate::error::Error;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::String(name) => Ok(LocationParam::Name(name.clone())),
            Value::Number(n) => n.as_i64().map(LocationParam::Code).ok_or_else(|| {
                UnknownLocation {
                    value: n.to_string(),
                }
                .into()
            }),
            other => Err(UnknownLocation {
                value: other.to_string(),
            }
            .into()),
        }
    }
}

/// Validates `location` and returns its wire token: `""` for global, `"0"` for europe and
/// `"1"` for us.
///
/// # Example
///
/// ```
/// use nicehash_client_sdk::types::validate_location;
///
/// assert_eq!(validate_location("global").unwrap(), "");
/// assert_eq!(validate_location(0).unwrap(), "0");
/// assert!(validate_location("mars").is_err());
/// ```
pub fn validate_location<L: Into<LocationParam>>(location: L) -> Result<&'static str> {
    Ok(location.into().resolve()?.wire_token())
}

/// A registry entry, identified by its position in [`registry::ALGORITHMS`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct AlgorithmId(usize);

impl AlgorithmId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        // Only constructed from a registry index that has been bounds checked.
        registry::ALGORITHMS[self.0]
    }
}

/// Displays as the wire token, i.e. the decimal index.
impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An algorithm as supplied by a caller, either by registry name or by wire index.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AlgorithmParam {
    Name(String),
    Index(i64),
}

impl AlgorithmParam {
    pub fn resolve(&self) -> Result<AlgorithmId> {
        match self {
            AlgorithmParam::Name(name) => registry::index_of(name).map(AlgorithmId),
            AlgorithmParam::Index(index) => usize::try_from(*index)
                .ok()
                .filter(|i| *i < registry::len())
                .map(AlgorithmId)
                .ok_or_else(|| {
                    InvalidAlgorithm {
                        index: *index,
                        len: registry::len(),
                    }
                    .into()
                }),
        }
    }
}

impl From<&str> for AlgorithmParam {
    fn from(name: &str) -> Self {
        AlgorithmParam::Name(name.to_owned())
    }
}

impl From<String> for AlgorithmParam {
    fn from(name: String) -> Self {
        AlgorithmParam::Name(name)
    }
}

impl From<i64> for AlgorithmParam {
    fn from(index: i64) -> Self {
        AlgorithmParam::Index(index)
    }
}

impl From<i32> for AlgorithmParam {
    fn from(index: i32) -> Self {
        AlgorithmParam::Index(i64::from(index))
    }
}

impl From<u32> for AlgorithmParam {
    fn from(index: u32) -> Self {
        AlgorithmParam::Index(i64::from(index))
    }
}

impl From<usize> for AlgorithmParam {
    fn from(index: usize) -> Self {
        AlgorithmParam::Index(i64::try_from(index).unwrap_or(i64::MAX))
    }
}

impl From<AlgorithmId> for AlgorithmParam {
    fn from(id: AlgorithmId) -> Self {
        AlgorithmParam::from(id.index())
    }
}

impl TryFrom<&Value> for AlgorithmParam {
    type Error = crate::error::Error;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::String(name) => Ok(AlgorithmParam::Name(name.clone())),
            Value::Number(n) if n.is_i64() || n.is_u64() => Ok(AlgorithmParam::Index(
                n.as_i64().unwrap_or(i64::MAX),
            )),
            other => Err(InvalidParameterType {
                found: json_type_name(other),
            }
            .into()),
        }
    }
}

/// Validates `algorithm` against the registry and returns its wire token, the decimal
/// string form of its index.
///
/// # Example
///
/// ```
/// use nicehash_client_sdk::types::validate_algorithm;
///
/// assert_eq!(validate_algorithm("X11").unwrap(), "3");
/// assert_eq!(validate_algorithm(3).unwrap(), "3");
/// ```
pub fn validate_algorithm<A: Into<AlgorithmParam>>(algorithm: A) -> Result<String> {
    Ok(algorithm.into().resolve()?.to_string())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
