//! Surebet - sports bookmaker arbitrage detection and stake allocation.
//!
//! For each sporting event the crate picks the best price offered for every
//! outcome across bookmakers, decides whether backing all outcomes at those
//! prices locks in a profit, and if so splits a total stake so that every
//! outcome pays out the same.
//!
//! # Architecture
//!
//! - [`domain`] - Quotes, events, best prices, evaluations and allocations.
//!   No I/O.
//! - [`application`] - The arbitrage pipeline (selector, evaluator,
//!   allocator, engine) and the scan use case.
//! - [`port`] - Traits for the odds feed and the odds cache.
//! - [`adapter`] - The Odds API client, the JSON file cache and the CLI.
//! - [`infrastructure`] - Configuration loading and logging setup.
//! - [`error`] - Error types for the crate.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use surebet::application::arbitrage::{analyze_event, AnalysisConfig};
//! use surebet::domain::{BookmakerQuotes, Event, EventId, OutcomeQuote};
//!
//! let event = Event::new(
//!     EventId::from("match-1"),
//!     "Home",
//!     "Away",
//!     vec![
//!         BookmakerQuotes::new("X", vec![
//!             OutcomeQuote::new("Home", dec!(2.10)),
//!             OutcomeQuote::new("Away", dec!(1.70)),
//!         ]),
//!         BookmakerQuotes::new("Y", vec![
//!             OutcomeQuote::new("Home", dec!(1.80)),
//!             OutcomeQuote::new("Away", dec!(2.20)),
//!         ]),
//!     ],
//! );
//!
//! let analysis = analyze_event(&event, &AnalysisConfig::default()).unwrap();
//! assert!(analysis.is_arbitrable());
//! assert_eq!(analysis.evaluation.margin_pct, dec!(6.93));
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
