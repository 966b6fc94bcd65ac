//! Infrastructure configuration modules.

pub mod cache;
pub mod logging;
pub mod odds_api;
pub mod settings;

pub use cache::CacheConfig;
pub use logging::LoggingConfig;
pub use odds_api::OddsApiConfig;
pub use settings::Config;
