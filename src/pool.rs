//! Mining pool description attached to hashpower orders.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::error::{Error, Kind, MalformedPoolRecord};

pub const POOL_HOSTNAME: &str = "pool_hostname";
pub const POOL_PORT: &str = "pool_port";
pub const POOL_USER: &str = "pool_user";
pub const POOL_PASSWORD: &str = "pool_password";

/// Field-name to value mapping a [`Pool`] is persisted as.
pub type PoolRecord = BTreeMap<String, String>;

/// The stratum endpoint purchased hashpower is pointed at.
///
/// Every field is stored in its string form, so a port given as `3333_u16` and one given as
/// `"3333"` produce equal pools.
///
/// # Example
///
/// ```
/// use nicehash_client_sdk::pool::Pool;
///
/// let pool = Pool::new("stratum.example.com", 3333, "worker.1", "x");
/// assert_eq!(pool.port(), "3333");
///
/// let restored = Pool::from_record(&pool.record()).unwrap();
/// assert_eq!(restored, pool);
/// ```
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Pool {
    #[serde(rename = "pool_hostname")]
    hostname: String,
    #[serde(rename = "pool_port")]
    port: String,
    #[serde(rename = "pool_user")]
    user: String,
    #[serde(rename = "pool_password")]
    password: String,
}

impl Pool {
    #[must_use]
    pub fn new<H, P, U, W>(hostname: H, port: P, user: U, password: W) -> Self
    where
        H: Display,
        P: Display,
        U: Display,
        W: Display,
    {
        Self {
            hostname: hostname.to_string(),
            port: port.to_string(),
            user: user.to_string(),
            password: password.to_string(),
        }
    }

    #[must_use]
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    #[must_use]
    pub fn port(&self) -> &str {
        &self.port
    }

    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Returns the persisted form: exactly the four keys `pool_hostname`, `pool_port`,
    /// `pool_user` and `pool_password`.
    #[must_use]
    pub fn record(&self) -> PoolRecord {
        BTreeMap::from([
            (POOL_HOSTNAME.to_owned(), self.hostname.clone()),
            (POOL_PORT.to_owned(), self.port.clone()),
            (POOL_USER.to_owned(), self.user.clone()),
            (POOL_PASSWORD.to_owned(), self.password.clone()),
        ])
    }

    /// Rebuilds a pool from its persisted form. Keys other than the four pool fields are
    /// ignored.
    pub fn from_record(record: &PoolRecord) -> Result<Self> {
        let field = |name: &'static str| {
            record
                .get(name)
                .cloned()
                .ok_or(MalformedPoolRecord { field: name })
        };

        Ok(Self {
            hostname: field(POOL_HOSTNAME)?,
            port: field(POOL_PORT)?,
            user: field(POOL_USER)?,
            password: field(POOL_PASSWORD)?,
        })
    }

    /// Writes the record to `path` as a JSON object.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.record())
            .map_err(|e| Error::with_source(Kind::Internal, e))?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Reads a pool previously written by [`Pool::save`]. A file that is not a JSON object of
    /// strings fails with [`Kind::MalformedPoolRecord`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let record: PoolRecord = serde_json::from_str(&contents)
            .map_err(|e| Error::with_source(Kind::MalformedPoolRecord, e))?;

        #[cfg(feature = "tracing")]
        tracing::debug!(keys = record.len(), "loaded pool record");

        Self::from_record(&record)
    }
}
