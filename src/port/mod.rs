//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! The arbitrage engine is pure; everything it needs from the outside world
//! comes through these traits.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!     ┌──────────────┤  Domain + Port          ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     ▼                                                       ▼
//! ┌──────────┐                                         ┌────────────┐
//! │ OddsFeed │                                         │ OddsCache  │
//! │ Adapter  │                                         │  Adapter   │
//! └──────────┘                                         └────────────┘
//! ```

pub mod outbound;

pub use outbound::cache::OddsCache;
pub use outbound::odds::OddsFeed;
