//! Query string assembly for the API's `?method=...` style calls.

use std::fmt::Display;

use crate::Result;
use crate::auth::{Credentials, ExposeSecret as _};

/// Ordered query parameters of one API call. `method` always comes first, followed by the
/// credentials (when present) and then the operation parameters in insertion order.
///
/// A parameter without a value is a flag and is encoded as its bare name.
#[derive(Clone, Debug, Default)]
pub(crate) struct Query {
    pairs: Vec<(&'static str, Option<String>)>,
}

impl Query {
    pub(crate) fn method(method: &'static str) -> Self {
        Self {
            pairs: vec![("method", Some(method.to_owned()))],
        }
    }

    /// Adds a value-less flag, such as `my` on `orders.get`.
    pub(crate) fn flag(mut self, name: &'static str) -> Self {
        self.pairs.push((name, None));
        self
    }

    pub(crate) fn param<V: Display>(mut self, name: &'static str, value: V) -> Self {
        self.pairs.push((name, Some(value.to_string())));
        self
    }

    pub(crate) fn credentials(self, credentials: Option<&Credentials>) -> Self {
        match credentials {
            Some(c) => self
                .param("id", &c.id)
                .param("key", c.key.expose_secret()),
            None => self,
        }
    }

    pub(crate) fn extend(mut self, params: Vec<(&'static str, String)>) -> Self {
        self.pairs
            .extend(params.into_iter().map(|(name, value)| (name, Some(value))));
        self
    }

    /// The method name, used to label logs and errors.
    pub(crate) fn method_name(&self) -> &str {
        self.pairs
            .first()
            .and_then(|(_, method)| method.as_deref())
            .unwrap_or_default()
    }

    /// URL-encodes the parameters, joined with `&`. Flags are written without `=`.
    pub(crate) fn encode(&self) -> Result<String> {
        let mut encoded = Vec::with_capacity(self.pairs.len());
        for (name, value) in &self.pairs {
            match value {
                Some(value) => {
                    encoded.push(serde_html_form::to_string(&[(*name, value.as_str())][..])?);
                }
                None => encoded.push((*name).to_owned()),
            }
        }

        Ok(encoded.join("&"))
    }
}
