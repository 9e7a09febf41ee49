pub mod exchange;
pub mod metrics;

pub use exchange::CurrencyService;
pub use self::metrics::{get_metrics, init_metrics, record_conversion};
