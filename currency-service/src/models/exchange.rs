use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw `/exchange` query parameters. Every field is optional so that missing
/// values surface as a validation error instead of an extractor rejection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExchangeParams {
    pub from: Option<String>,
    pub to: Option<String>,
    pub amount: Option<String>,
}

impl ExchangeParams {
    /// Build from decoded query pairs. A repeated key keeps its first value.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "from" => &mut params.from,
                "to" => &mut params.to,
                "amount" => &mut params.amount,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

/// Result of converting an amount between two currencies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    pub converted_amount: f64,
    /// Destination units per one source unit.
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeResponse {
    pub from: String,
    pub to: String,
    pub amount: f64,
    pub converted_amount: f64,
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatesResponse {
    pub base: String,
    pub rates: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }

    pub fn ready() -> Self {
        Self {
            status: "ready".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn repeated_keys_keep_first_value() {
        let params = ExchangeParams::from_pairs(pairs(&[
            ("from", "USD"),
            ("from", "EUR"),
            ("to", "GBP"),
            ("amount", "10"),
            ("amount", "20"),
        ]));

        assert_eq!(params.from.as_deref(), Some("USD"));
        assert_eq!(params.to.as_deref(), Some("GBP"));
        assert_eq!(params.amount.as_deref(), Some("10"));
    }

    #[test]
    fn empty_first_value_is_kept() {
        let params = ExchangeParams::from_pairs(pairs(&[("from", ""), ("from", "USD")]));
        assert_eq!(params.from.as_deref(), Some(""));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let params = ExchangeParams::from_pairs(pairs(&[("currency", "USD"), ("to", "EUR")]));
        assert_eq!(
            params,
            ExchangeParams {
                from: None,
                to: Some("EUR".to_string()),
                amount: None,
            }
        );
    }
}
