//! Domain validation errors for core domain types.
//!
//! Returned by `try_new` constructors that validate their inputs. The
//! arbitrage engine itself never fails; the feed decoder uses these to drop
//! quote sets it cannot use.
//!
//! # Examples
//!
//! ```
//! use surebet::domain::error::DomainError;
//! use surebet::domain::quote::BookmakerQuotes;
//!
//! let result = BookmakerQuotes::try_new("Unibet", vec![]);
//! assert_eq!(result, Err(DomainError::EmptyOutcomes));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A bookmaker must quote at least one outcome.
    #[error("outcomes cannot be empty")]
    EmptyOutcomes,
}
