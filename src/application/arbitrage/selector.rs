//! Best-price selection across bookmakers.
//!
//! Walks an event's quote sets in order and keeps a running maximum per
//! outcome. The first quote set fixes how many outcomes the event has; sets
//! with a different count are partial markets and are skipped.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::domain::{BestPrice, BestPriceVector, BookmakerQuotes, OutcomeQuote};

/// How outcomes of different bookmakers are matched up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeAlignment {
    /// Position `i` means the same outcome for every bookmaker.
    #[default]
    Positional,
    /// Match outcomes by name against the first bookmaker's list. A set
    /// missing any of those names is skipped.
    ByName,
}

/// Select the best valid price for every outcome position.
///
/// Returns an empty vector when `quote_sets` is empty or the first set has
/// no outcomes. Ties keep the bookmaker seen first. Quotes priced at or
/// below `1.0` never win.
#[must_use]
pub fn select_best_prices(
    quote_sets: &[BookmakerQuotes],
    alignment: OutcomeAlignment,
) -> BestPriceVector {
    let Some(first) = quote_sets.first() else {
        return BestPriceVector::default();
    };

    let mut best: BestPriceVector = first
        .outcomes()
        .iter()
        .map(|o| BestPrice::unquoted(o.name()))
        .collect();

    if best.is_empty() {
        return best;
    }

    for quotes in quote_sets {
        if quotes.outcome_count() != best.len() {
            trace!(
                platform = quotes.platform(),
                outcomes = quotes.outcome_count(),
                expected = best.len(),
                "Skipping quote set with mismatched outcome count"
            );
            continue;
        }

        let Some(aligned) = align(quotes, &best, alignment) else {
            trace!(
                platform = quotes.platform(),
                "Skipping quote set with unmatched outcome names"
            );
            continue;
        };

        for (entry, quote) in best.entries_mut().iter_mut().zip(aligned) {
            if quote.is_valid() && quote.price() > entry.price() {
                entry.replace(quotes.platform(), quote.price());
            }
        }

        trace!(platform = quotes.platform(), quotes = %describe(quotes), "Compared quote set");
    }

    best
}

/// Order a bookmaker's quotes to match the canonical outcome order.
fn align<'a>(
    quotes: &'a BookmakerQuotes,
    canonical: &BestPriceVector,
    alignment: OutcomeAlignment,
) -> Option<Vec<&'a OutcomeQuote>> {
    match alignment {
        OutcomeAlignment::Positional => Some(quotes.outcomes().iter().collect()),
        OutcomeAlignment::ByName => canonical
            .entries()
            .iter()
            .map(|entry| quotes.find(entry.outcome()))
            .collect(),
    }
}

fn describe(quotes: &BookmakerQuotes) -> String {
    quotes
        .outcomes()
        .iter()
        .map(|o| format!("{}[{}]", o.name(), o.price()))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UNQUOTED_PLATFORM;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn book(platform: &str, prices: &[(&str, Decimal)]) -> BookmakerQuotes {
        BookmakerQuotes::new(
            platform,
            prices
                .iter()
                .map(|(name, price)| OutcomeQuote::new(*name, *price))
                .collect(),
        )
    }

    #[test]
    fn picks_highest_price_per_outcome() {
        let sets = vec![
            book("X", &[("Home", dec!(2.10)), ("Away", dec!(2.05))]),
            book("Y", &[("Home", dec!(1.95)), ("Away", dec!(2.20))]),
        ];

        let best = select_best_prices(&sets, OutcomeAlignment::Positional);

        assert_eq!(best.len(), 2);
        assert_eq!(best.entries()[0].platform(), "X");
        assert_eq!(best.entries()[0].price(), dec!(2.10));
        assert_eq!(best.entries()[1].platform(), "Y");
        assert_eq!(best.entries()[1].price(), dec!(2.20));
    }

    #[test]
    fn tie_keeps_first_bookmaker() {
        let sets = vec![
            book("First", &[("Home", dec!(2.00)), ("Away", dec!(1.90))]),
            book("Second", &[("Home", dec!(2.00)), ("Away", dec!(1.90))]),
        ];

        let best = select_best_prices(&sets, OutcomeAlignment::Positional);

        assert!(best.entries().iter().all(|e| e.platform() == "First"));
    }

    #[test]
    fn empty_input_yields_empty_vector() {
        let best = select_best_prices(&[], OutcomeAlignment::Positional);
        assert!(best.is_empty());
    }

    #[test]
    fn first_set_without_outcomes_yields_empty_vector() {
        let sets = vec![
            book("Empty", &[]),
            book("Full", &[("Home", dec!(2.10)), ("Away", dec!(2.05))]),
        ];

        assert!(select_best_prices(&sets, OutcomeAlignment::Positional).is_empty());
    }

    #[test]
    fn mismatched_outcome_count_is_skipped() {
        let sets = vec![
            book("Two", &[("Home", dec!(2.10)), ("Away", dec!(2.05))]),
            book(
                "Three",
                &[("Home", dec!(5.00)), ("Draw", dec!(5.00)), ("Away", dec!(5.00))],
            ),
        ];

        let best = select_best_prices(&sets, OutcomeAlignment::Positional);

        assert_eq!(best.len(), 2);
        assert!(best.entries().iter().all(|e| e.platform() == "Two"));
    }

    #[test]
    fn invalid_prices_never_win() {
        let sets = vec![
            book("Broken", &[("Home", dec!(0)), ("Away", dec!(-1.5))]),
            book("Flat", &[("Home", dec!(1.0)), ("Away", dec!(1.80))]),
        ];

        let best = select_best_prices(&sets, OutcomeAlignment::Positional);

        assert_eq!(best.entries()[0].platform(), UNQUOTED_PLATFORM);
        assert!(!best.entries()[0].is_quoted());
        assert_eq!(best.entries()[1].platform(), "Flat");
        assert!(!best.is_complete());
    }

    #[test]
    fn by_name_realigns_swapped_outcomes() {
        let sets = vec![
            book("X", &[("Lakers", dec!(2.10)), ("Celtics", dec!(1.70))]),
            book("Y", &[("Celtics", dec!(2.25)), ("Lakers", dec!(1.65))]),
        ];

        let positional = select_best_prices(&sets, OutcomeAlignment::Positional);
        assert_eq!(positional.entries()[0].price(), dec!(2.10));
        assert_eq!(positional.entries()[1].price(), dec!(1.70));

        let by_name = select_best_prices(&sets, OutcomeAlignment::ByName);
        assert_eq!(by_name.entries()[0].outcome(), "Lakers");
        assert_eq!(by_name.entries()[0].price(), dec!(2.10));
        assert_eq!(by_name.entries()[1].outcome(), "Celtics");
        assert_eq!(by_name.entries()[1].platform(), "Y");
        assert_eq!(by_name.entries()[1].price(), dec!(2.25));
    }

    #[test]
    fn by_name_skips_sets_with_unknown_outcomes() {
        let sets = vec![
            book("X", &[("Lakers", dec!(2.10)), ("Celtics", dec!(1.70))]),
            book("Y", &[("LA Lakers", dec!(3.00)), ("Celtics", dec!(3.00))]),
        ];

        let best = select_best_prices(&sets, OutcomeAlignment::ByName);

        assert!(best.entries().iter().all(|e| e.platform() == "X"));
    }
}
