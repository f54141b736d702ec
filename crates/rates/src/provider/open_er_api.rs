//! open.er-api.com provider.
//!
//! The free endpoint needs no key and publishes USD-based rates once a day,
//! announcing the time of the next update in each response.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::RateSource;
use crate::errors::{RatesError, Result};
use crate::models::RateSnapshot;

/// Provider ID constant
const PROVIDER_ID: &str = "OPEN_ER_API";

/// Latest USD-based rates
pub const DEFAULT_RATES_URL: &str = "https://open.er-api.com/v6/latest/USD";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct OpenErApiClient {
    client: Client,
    url: String,
}

impl OpenErApiClient {
    pub fn new() -> Self {
        Self::with_url(DEFAULT_RATES_URL, REQUEST_TIMEOUT)
    }

    /// Create a client for another endpoint serving the same payload.
    pub fn with_url(url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            url: url.into(),
        }
    }
}

impl Default for OpenErApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateSource for OpenErApiClient {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_latest(&self) -> Result<RateSnapshot> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RatesError::Fetch(format!("Error Code {}", status.as_u16())));
        }
        log::info!(
            "Successfully retrieved exchange rates. Status code: {}",
            status.as_u16()
        );

        let snapshot: RateSnapshot = response.json().await?;
        if !snapshot.is_success() {
            return Err(RatesError::Fetch(format!(
                "provider answered with result '{}'",
                snapshot.result
            )));
        }
        Ok(snapshot)
    }
}
