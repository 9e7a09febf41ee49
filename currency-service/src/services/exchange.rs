//! Conversion arithmetic and `/exchange` request validation.

use crate::error::ExchangeError;
use crate::models::{Conversion, ExchangeParams, ExchangeResponse, RateTable};
use crate::services::metrics::record_conversion;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct CurrencyService {
    rates: Arc<RateTable>,
}

impl CurrencyService {
    pub fn new(rates: Arc<RateTable>) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Convert `amount` of `from` into `to`.
    ///
    /// `from` is checked first, so when both codes are unknown the error
    /// names `from`. The amount itself is not validated here.
    pub fn convert(&self, from: &str, to: &str, amount: f64) -> Result<Conversion, ExchangeError> {
        let from_rate = self.rates.lookup(from)?;
        let to_rate = self.rates.lookup(to)?;

        let base_amount = amount / from_rate;
        let converted_amount = base_amount * to_rate;
        // Computed from the two table values alone; deriving it from
        // converted_amount / amount would pick up the amount's rounding.
        let rate = to_rate / from_rate;

        Ok(Conversion {
            converted_amount,
            rate,
        })
    }

    /// Validate raw query parameters and run the conversion.
    ///
    /// Checks run in order and the first failure wins: missing parameters,
    /// then the amount, then currency lookup.
    pub fn exchange(&self, params: &ExchangeParams) -> Result<ExchangeResponse, ExchangeError> {
        let (from, to, raw_amount) = match (
            non_empty(params.from.as_deref()),
            non_empty(params.to.as_deref()),
            non_empty(params.amount.as_deref()),
        ) {
            (Some(from), Some(to), Some(amount)) => (from, to, amount),
            _ => return Err(ExchangeError::MissingParameter),
        };

        let amount = parse_amount(raw_amount)?;
        tracing::debug!(from = %from, to = %to, amount, "Converting currency");

        let conversion = self.convert(from, to, amount)?;

        let from = from.to_uppercase();
        let to = to.to_uppercase();
        record_conversion(&from, &to);

        Ok(ExchangeResponse {
            from,
            to,
            amount,
            converted_amount: conversion.converted_amount,
            rate: conversion.rate,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Amounts must parse as a finite number strictly greater than zero.
fn parse_amount(raw: &str) -> Result<f64, ExchangeError> {
    match raw.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => Ok(amount),
        _ => Err(ExchangeError::InvalidAmount),
    }
}
