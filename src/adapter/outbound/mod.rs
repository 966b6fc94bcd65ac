//! Outbound adapters (driven side).

pub mod cache;
pub mod odds_api;

pub use cache::JsonFileCache;
pub use odds_api::OddsApiClient;
