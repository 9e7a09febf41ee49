use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone)]
pub struct CurrencyConfig {
    pub common: core_config::Config,
    pub log_level: String,
    /// OTLP collector for trace export; local JSON logs only when unset.
    pub otlp_endpoint: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            common: core_config::Config::default(),
            log_level: default_log_level(),
            otlp_endpoint: None,
        }
    }
}

impl CurrencyConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env and APP__ prefix)
        let common = core_config::Config::load()?;

        Ok(CurrencyConfig {
            common,
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| default_log_level()),
            otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|s| !s.is_empty()),
        })
    }

    pub fn port(&self) -> u16 {
        self.common.port
    }
}
