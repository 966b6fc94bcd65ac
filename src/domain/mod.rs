//! Exchange-agnostic domain types. No I/O, no configuration.

pub mod allocation;
pub mod analysis;
pub mod best_price;
pub mod error;
pub mod evaluation;
pub mod event;
pub mod id;
pub mod money;
pub mod quote;
pub mod sport;

pub use allocation::{Allocation, StakeLeg};
pub use analysis::{EventAnalysis, EventSummary, Priority};
pub use best_price::{BestPrice, BestPriceVector, UNQUOTED_PLATFORM};
pub use evaluation::Evaluation;
pub use event::Event;
pub use id::{EventId, SportKey};
pub use money::{Price, Probability, Stake};
pub use quote::{BookmakerQuotes, OutcomeQuote};
pub use sport::Sport;
