//! Per-event orchestration of selector, evaluator and allocator.

use tracing::{debug, info};

use super::allocator::allocate;
use super::config::AnalysisConfig;
use super::evaluator::evaluate;
use super::selector::select_best_prices;
use crate::domain::{Event, EventAnalysis, EventSummary};

/// Runs the three arbitrage stages over events with one configuration.
#[derive(Debug, Clone, Default)]
pub struct ArbitrageEngine {
    config: AnalysisConfig,
}

impl ArbitrageEngine {
    #[must_use]
    pub const fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyse a single event. See [`analyze_event`].
    #[must_use]
    pub fn analyze_event(&self, event: &Event) -> Option<EventAnalysis> {
        analyze_event(event, &self.config)
    }

    /// Analyse every event, dropping those with nothing to evaluate.
    #[must_use]
    pub fn analyze_events(&self, events: &[Event]) -> Vec<EventAnalysis> {
        events
            .iter()
            .filter_map(|event| self.analyze_event(event))
            .collect()
    }
}

/// Analyse one event.
///
/// Returns `None` when the event has no usable quotes: no bookmakers, an
/// empty first market, or an outcome nobody priced validly.
#[must_use]
pub fn analyze_event(event: &Event, config: &AnalysisConfig) -> Option<EventAnalysis> {
    let best_prices = select_best_prices(event.bookmakers(), config.alignment);
    if best_prices.is_empty() {
        debug!(event = %event.label(), "No quotes to evaluate");
        return None;
    }

    let Some(evaluation) = evaluate(&best_prices) else {
        debug!(event = %event.label(), "Outcome without a valid quote, skipping");
        return None;
    };

    let mut above_threshold = false;
    let mut allocation = None;

    if evaluation.arbitrable {
        above_threshold = evaluation.margin_pct >= config.threshold;
        allocation = allocate(&best_prices, config.stake);

        info!(
            event = %event.label(),
            margin_pct = %evaluation.margin_pct,
            above_threshold,
            "Arbitrage found"
        );
    } else {
        debug!(
            event = %event.label(),
            margin_pct = %evaluation.margin_pct,
            "No arbitrage"
        );
    }

    Some(EventAnalysis {
        event: EventSummary::from(event),
        best_prices,
        evaluation,
        above_threshold,
        allocation,
    })
}
