use service_core::error::AppError;
use thiserror::Error;

/// Failures a conversion request can run into.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExchangeError {
    /// Carries the code exactly as the caller sent it.
    #[error("currency {0} not supported")]
    UnsupportedCurrency(String),

    #[error("Invalid amount parameter")]
    InvalidAmount,

    #[error("Missing required parameters: from, to, amount")]
    MissingParameter,

    #[error("Only GET method is allowed")]
    MethodNotAllowed,
}

impl From<ExchangeError> for AppError {
    fn from(err: ExchangeError) -> Self {
        match err {
            ExchangeError::MethodNotAllowed => AppError::MethodNotAllowed(err.to_string()),
            other => AppError::BadRequest(anyhow::Error::new(other)),
        }
    }
}
