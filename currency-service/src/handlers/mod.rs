//! HTTP handlers for currency-service.

pub mod exchange;
pub mod health;
pub mod metrics;
pub mod rates;

pub use exchange::{exchange, method_not_allowed};
pub use health::{health_check, readiness_check};
pub use rates::list_rates;
