pub mod exchange;
pub mod rate_table;

pub use exchange::{Conversion, ExchangeParams, ExchangeResponse, HealthResponse, RatesResponse};
pub use rate_table::RateTable;
