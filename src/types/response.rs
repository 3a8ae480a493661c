use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::Result;
use crate::error::Error;
use crate::registry;

/// Statistics for one algorithm, keyed by the API's own field names (e.g. `price`, `speed`).
pub type AlgorithmStats = Map<String, Value>;

/// Current marketplace statistics keyed by algorithm name. Iteration order is unspecified.
pub type Profitability = HashMap<String, AlgorithmStats>;

/// Every response wraps its payload in `result`.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub result: T,
    /// Echo of the requested method, present on most responses
    #[serde(default)]
    #[expect(dead_code, reason = "Deserialized so it is not reported as an unknown field")]
    pub method: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiVersion {
    pub api_version: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GlobalStats {
    pub stats: Vec<AlgorithmStats>,
}

impl GlobalStats {
    /// Keys each record by the name of its `algo` index, removing `algo` from the record.
    ///
    /// A record without an integer `algo`, or whose `algo` is not in the registry, makes the
    /// whole response malformed rather than being skipped.
    pub(crate) fn into_profitability(self) -> Result<Profitability> {
        let mut profitability = HashMap::with_capacity(self.stats.len());

        for mut record in self.stats {
            let algo = record
                .remove("algo")
                .ok_or_else(|| Error::response("stats record without algo"))?;
            let index = algo
                .as_u64()
                .and_then(|i| usize::try_from(i).ok())
                .ok_or_else(|| Error::response(format!("algo {algo} is not an index")))?;
            let name = registry::name_of(index)
                .map_err(|e| Error::response(format!("unrecognized algo in stats: {e}")))?;

            profitability.insert(name.to_owned(), record);
        }

        Ok(profitability)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::Kind;

    fn stats(value: Value) -> GlobalStats {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn records_should_be_keyed_by_name() {
        let profitability = stats(json!({
            "stats": [{"algo": 0, "price": 1.5}, {"algo": 3, "price": 2.0}]
        }))
        .into_profitability()
        .unwrap();

        assert_eq!(
            serde_json::to_value(&profitability).unwrap(),
            json!({"Scrypt": {"price": 1.5}, "X11": {"price": 2.0}})
        );
    }

    #[test]
    fn out_of_range_algo_should_fail() {
        let err = stats(json!({"stats": [{"algo": 0}, {"algo": 300, "price": "1"}]}))
            .into_profitability()
            .unwrap_err();

        assert_eq!(err.kind(), Kind::RemoteResponse);
    }

    #[test]
    fn missing_or_non_integer_algo_should_fail() {
        for record in [json!({"price": "1"}), json!({"algo": "X11"}), json!({"algo": -1})] {
            let err = stats(json!({ "stats": [record] }))
                .into_profitability()
                .unwrap_err();
            assert_eq!(err.kind(), Kind::RemoteResponse);
        }
    }

    #[test]
    fn empty_stats_should_succeed() {
        let profitability = stats(json!({"stats": []})).into_profitability().unwrap();
        assert!(profitability.is_empty());
    }
}
