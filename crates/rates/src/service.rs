use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::cache::RateCache;
use crate::errors::Result;
use crate::models::{format_update_time, RateSnapshot};
use crate::provider::RateSource;

/// Keeps the cached snapshot current.
///
/// The provider publishes once a day, so a cached snapshot is served until
/// its announced next update time has passed.
pub struct RateService {
    source: Arc<dyn RateSource>,
    cache: RateCache,
}

impl RateService {
    pub fn new(source: Arc<dyn RateSource>, cache: RateCache) -> Self {
        Self { source, cache }
    }

    /// Returns current rates, refreshing the cache when it is outdated.
    pub async fn latest(&self) -> Result<RateSnapshot> {
        self.latest_at(Utc::now()).await
    }

    /// Same as [`latest`](Self::latest) with an explicit clock.
    pub async fn latest_at(&self, now: DateTime<Utc>) -> Result<RateSnapshot> {
        let cached = match self.cache.load().await {
            Ok(cached) => cached,
            Err(e) => {
                log::warn!(
                    "Ignoring unreadable rate cache {}: {}",
                    self.cache.path().display(),
                    e
                );
                None
            }
        };

        let last_update = format_update_time(cached.as_ref().and_then(|s| s.last_update()));
        match cached {
            Some(snapshot) if !snapshot.is_outdated(now) => {
                log::info!(
                    "Exchange rates are up to date. Last updated: {}. Next available update: {}",
                    last_update,
                    format_update_time(snapshot.next_update())
                );
                Ok(snapshot)
            }
            Some(stale) => {
                log::info!("Exchange rates are outdated. Last updated: {}.", last_update);
                match self.refresh().await {
                    Ok(fresh) => Ok(fresh),
                    Err(e) => {
                        log::warn!(
                            "{} refresh failed, using rates from {}: {}",
                            self.source.id(),
                            last_update,
                            e
                        );
                        Ok(stale)
                    }
                }
            }
            None => {
                log::info!("Exchange rates are outdated. Last updated: {}.", last_update);
                self.refresh().await
            }
        }
    }

    async fn refresh(&self) -> Result<RateSnapshot> {
        let snapshot = self.source.fetch_latest().await?;
        self.cache.store(&snapshot).await?;
        Ok(snapshot)
    }
}
