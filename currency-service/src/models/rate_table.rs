//! Fixed exchange rates expressed against one unit of the base currency.

use crate::error::ExchangeError;
use std::collections::BTreeMap;

/// Reference currency every table entry is quoted against.
pub const BASE_CURRENCY: &str = "USD";

const SEED_RATES: [(&str, f64); 10] = [
    ("USD", 1.0),
    ("EUR", 0.85),
    ("GBP", 0.73),
    ("JPY", 110.0),
    ("CAD", 1.25),
    ("AUD", 1.35),
    ("CHF", 0.92),
    ("CNY", 6.45),
    ("INR", 74.5),
    ("BRL", 5.2),
];

/// Read-only mapping from uppercase currency code to units per base unit.
///
/// Built once at startup and shared behind an `Arc`; nothing mutates it
/// afterwards, so concurrent readers need no locking.
#[derive(Debug, Clone)]
pub struct RateTable {
    base: &'static str,
    rates: BTreeMap<String, f64>,
}

impl RateTable {
    /// The ten-currency table the service ships with.
    pub fn seeded() -> Self {
        let rates = SEED_RATES
            .iter()
            .map(|(code, value)| (code.to_string(), *value))
            .collect();

        Self {
            base: BASE_CURRENCY,
            rates,
        }
    }

    /// Case-insensitive lookup of a currency's value in base units.
    pub fn lookup(&self, code: &str) -> Result<f64, ExchangeError> {
        self.rates
            .get(&code.to_uppercase())
            .copied()
            .ok_or_else(|| ExchangeError::UnsupportedCurrency(code.to_string()))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.rates.contains_key(&code.to_uppercase())
    }

    pub fn entries(&self) -> &BTreeMap<String, f64> {
        &self.rates
    }

    pub fn base(&self) -> &str {
        self.base
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::seeded()
    }
}
