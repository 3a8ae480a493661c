use std::fs;
use std::path::Path;

/// Secret string types that redact values in debug output for security.
pub use secrecy::{ExposeSecret, SecretString};

use crate::Result;
use crate::error::Error;

/// API credentials: the account id and its secret API key. Both are sent as query parameters
/// on every private method.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub(crate) id: String,
    pub(crate) key: SecretString,
}

impl Credentials {
    #[must_use]
    pub fn new<I: Into<String>>(id: I, key: String) -> Self {
        Self {
            id: id.into(),
            key: SecretString::from(key),
        }
    }

    /// Reads credentials from a plain-text file: the id on the first line, the key on the
    /// second. Surrounding whitespace on each line is ignored.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use nicehash_client_sdk::auth::Credentials;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let credentials = Credentials::from_file("nicehash.key")?;
    /// println!("id: {}", credentials.id());
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            Error::credentials(format!("unable to read {}: {e}", path.display()))
        })?;

        let mut lines = contents.lines().map(str::trim);
        match (lines.next(), lines.next()) {
            (Some(id), Some(key)) if !id.is_empty() && !key.is_empty() => {
                Ok(Self::new(id, key.to_owned()))
            }
            _ => Err(Error::credentials(format!(
                "{} must contain the id on the first line and the key on the second",
                path.display()
            ))),
        }
    }

    /// Returns the account id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the API key.
    #[must_use]
    pub fn key(&self) -> &SecretString {
        &self.key
    }
}
