//! Sources of exchange-rate snapshots.

mod open_er_api;

pub use open_er_api::{OpenErApiClient, DEFAULT_RATES_URL};

use async_trait::async_trait;

use crate::errors::Result;
use crate::models::RateSnapshot;

/// Fetches the latest published rates.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Unique identifier used in log messages.
    fn id(&self) -> &'static str;

    async fn fetch_latest(&self) -> Result<RateSnapshot>;
}
