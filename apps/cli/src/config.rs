use std::path::PathBuf;
use std::time::Duration;

use fxtext_rates::provider::DEFAULT_RATES_URL;

pub struct Config {
    pub rates_file: PathBuf,
    pub rates_url: String,
    pub request_timeout: Duration,
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let rates_file = std::env::var("FXTEXT_RATES_FILE")
            .unwrap_or_else(|_| "exchange_rates.json".into())
            .into();
        let rates_url =
            std::env::var("FXTEXT_RATES_URL").unwrap_or_else(|_| DEFAULT_RATES_URL.into());
        let timeout_ms: u64 = std::env::var("FXTEXT_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let log_format = std::env::var("FXTEXT_LOG_FORMAT").unwrap_or_else(|_| "text".into());
        Self {
            rates_file,
            rates_url,
            request_timeout: Duration::from_millis(timeout_ms),
            log_format,
        }
    }
}
