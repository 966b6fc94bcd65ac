//! Rendering of analysed events.
//!
//! An event is shown when its report level is within the `-v` count:
//! arbitrages above the threshold always, other arbitrages from `-v`, every
//! evaluated event with its best prices from `-vv`.

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::json;
use tabled::{Table, Tabled};

use super::output;
use crate::domain::money::round_dp;
use crate::domain::{Allocation, EventAnalysis, Priority};
use crate::error::Result;

/// Counters accumulated over everything a command analysed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportTotals {
    /// Events present in the payloads.
    pub events: usize,
    /// Events with a complete best-price vector.
    pub analysed: usize,
    pub arbitrable: usize,
    pub above_threshold: usize,
    /// Events printed at the current verbosity.
    pub shown: usize,
}

impl ReportTotals {
    pub fn add(&mut self, events_seen: usize, analyses: &[EventAnalysis]) {
        self.events += events_seen;
        self.analysed += analyses.len();
        self.arbitrable += analyses.iter().filter(|a| a.is_arbitrable()).count();
        self.above_threshold += analyses.iter().filter(|a| a.above_threshold).count();
    }
}

#[derive(Tabled)]
struct PriceRow {
    #[tabled(rename = "Outcome")]
    outcome: String,
    #[tabled(rename = "Bookmaker")]
    platform: String,
    #[tabled(rename = "Price")]
    price: Decimal,
}

#[derive(Tabled)]
struct LegRow {
    #[tabled(rename = "Outcome")]
    outcome: String,
    #[tabled(rename = "Bookmaker")]
    platform: String,
    #[tabled(rename = "Price")]
    price: Decimal,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "Stake")]
    stake: Decimal,
    #[tabled(rename = "Payout")]
    gross_payout: Decimal,
    #[tabled(rename = "Net")]
    net_gain: Decimal,
}

/// Whether `analysis` is shown at `verbosity`.
#[must_use]
pub fn is_visible(analysis: &EventAnalysis, verbosity: u8) -> bool {
    analysis.report_level() <= verbosity
}

/// Print every analysis visible at `verbosity`. Returns how many were shown.
///
/// # Errors
///
/// Returns [`crate::error::Error::Json`] if an analysis cannot be serialized.
pub fn analyses(analyses: &[EventAnalysis], verbosity: u8) -> Result<usize> {
    let mut shown = 0;
    for analysis in analyses.iter().filter(|a| is_visible(a, verbosity)) {
        output::record("analysis", serde_json::to_value(analysis)?, &render(analysis));
        shown += 1;
    }
    Ok(shown)
}

/// Human-readable block for one event.
#[must_use]
pub fn render(analysis: &EventAnalysis) -> String {
    let mut out = String::new();

    let mut title = format!("[{}]", analysis.event.label());
    if let Some(sport) = &analysis.event.sport_key {
        title.push_str(&format!("  {sport}"));
    }
    if let Some(time) = analysis.event.commence_time {
        title.push_str(&format!("  {}", time.format("%Y-%m-%d %H:%M UTC")));
    }
    out.push_str(&output::highlight(title));
    out.push('\n');

    let margin = format!("{}%", analysis.evaluation.margin_pct);
    let status = match analysis.priority() {
        Priority::AboveThreshold => format!("ARBITRABLE  margin {}", output::positive(margin)),
        Priority::Arbitrable => format!(
            "ARBITRABLE  margin {} {}",
            output::positive(margin),
            output::muted("(below threshold)")
        ),
        Priority::Evaluated => format!("no arbitrage  margin {}", output::negative(margin)),
    };
    out.push_str(&status);
    out.push('\n');

    match &analysis.allocation {
        Some(allocation) => out.push_str(&render_allocation(allocation)),
        None => {
            let rows = analysis.best_prices.entries().iter().map(|entry| PriceRow {
                outcome: entry.outcome().to_string(),
                platform: entry.platform().to_string(),
                price: entry.price(),
            });
            out.push_str(&Table::new(rows).to_string());
            out.push('\n');
        }
    }

    out
}

fn render_allocation(allocation: &Allocation) -> String {
    let rows = allocation.legs.iter().map(|leg| LegRow {
        outcome: leg.outcome.clone(),
        platform: leg.platform.clone(),
        price: leg.price,
        share: format!("{}%", round_dp(leg.fraction * Decimal::ONE_HUNDRED, 2)),
        stake: leg.stake,
        gross_payout: leg.gross_payout,
        net_gain: leg.net_gain,
    });

    let mut out = Table::new(rows).to_string();
    out.push('\n');
    out.push_str(&format!(
        "expected profit {} on {} staked\n",
        output::positive(allocation.expected_profit),
        allocation.total_stake
    ));
    out
}

/// Print the closing counters.
pub fn totals(totals: &ReportTotals) {
    if output::is_json() {
        output::json_output(json!({ "type": "summary", "payload": totals }));
        return;
    }

    output::section("Summary");
    output::field("Events", totals.events);
    output::field("Analysed", totals.analysed);
    output::field("Arbitrable", totals.arbitrable);
    output::field("Above threshold", totals.above_threshold);
    if totals.shown == 0 && totals.arbitrable > 0 {
        output::hint("arbitrages below the threshold are shown with -v");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::arbitrage::{analyze_event, AnalysisConfig};
    use crate::domain::{BookmakerQuotes, Event, EventId, OutcomeQuote};
    use rust_decimal_macros::dec;

    fn analysis(a: Decimal, b: Decimal) -> EventAnalysis {
        let event = Event::new(
            EventId::from("e"),
            "Lions",
            "Tigers",
            vec![
                BookmakerQuotes::new(
                    "X",
                    vec![OutcomeQuote::new("Lions", a), OutcomeQuote::new("Tigers", dec!(1.5))],
                ),
                BookmakerQuotes::new(
                    "Y",
                    vec![OutcomeQuote::new("Lions", dec!(1.5)), OutcomeQuote::new("Tigers", b)],
                ),
            ],
        );
        analyze_event(&event, &AnalysisConfig::default()).unwrap()
    }

    #[test]
    fn visibility_follows_priority() {
        let above = analysis(dec!(2.10), dec!(2.20));
        let none = analysis(dec!(1.80), dec!(1.80));

        assert!(is_visible(&above, 0));
        assert!(!is_visible(&none, 1));
        assert!(is_visible(&none, 2));
    }

    #[test]
    fn arbitrage_renders_stake_legs() {
        let text = render(&analysis(dec!(2.10), dec!(2.20)));
        assert!(text.contains("Lions VS Tigers"));
        assert!(text.contains("ARBITRABLE"));
        assert!(text.contains("51.16"));
        assert!(text.contains("48.84"));
        assert!(text.contains("6.93"));
    }

    #[test]
    fn non_arbitrage_renders_best_prices() {
        let text = render(&analysis(dec!(1.80), dec!(1.80)));
        assert!(text.contains("no arbitrage"));
        assert!(text.contains("Bookmaker"));
        assert!(!text.contains("Stake"));
    }

    #[test]
    fn totals_count_arbitrages() {
        let mut totals = ReportTotals::default();
        totals.add(
            3,
            &[
                analysis(dec!(2.10), dec!(2.20)),
                analysis(dec!(1.80), dec!(1.80)),
            ],
        );
        assert_eq!(totals.events, 3);
        assert_eq!(totals.analysed, 2);
        assert_eq!(totals.arbitrable, 1);
        assert_eq!(totals.above_threshold, 1);
    }
}
