//! Exchange-rate snapshots for fxtext.
//!
//! Rates are quoted against USD by open.er-api.com and refreshed at most once
//! per publication cycle: a snapshot on disk is reused until the provider's
//! announced next update time has passed.

pub mod cache;
pub mod errors;
pub mod models;
pub mod provider;
pub mod service;

pub use cache::RateCache;
pub use errors::RatesError;
pub use models::RateSnapshot;
pub use provider::{OpenErApiClient, RateSource};
pub use service::RateService;
