//! Arbitrage detection and stake allocation.
//!
//! Three pure stages run per event:
//!
//! - [`selector`]: best price per outcome across bookmakers
//! - [`evaluator`]: implied probability, arbitrable flag, margin
//! - [`allocator`]: stake split that equalizes the payout
//!
//! [`engine::ArbitrageEngine`] composes them with an explicit
//! [`config::AnalysisConfig`].

pub mod allocator;
pub mod config;
pub mod engine;
pub mod evaluator;
pub mod selector;

pub use allocator::allocate;
pub use config::AnalysisConfig;
pub use engine::{analyze_event, ArbitrageEngine};
pub use evaluator::{evaluate, implied_probability, is_arbitrable, margin, total_implied_probability};
pub use selector::{select_best_prices, OutcomeAlignment};
