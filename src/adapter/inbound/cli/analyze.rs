//! Handler for `analyze`: offline analysis of stored odds payloads.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::command::AnalyzeArgs;
use super::config::load_config;
use super::output;
use super::report::{self, ReportTotals};
use crate::adapter::outbound::odds_api::dto::decode_events;
use crate::application::arbitrage::ArbitrageEngine;
use crate::error::Result;

/// Execute `analyze`.
///
/// Files are analysed in the order given; the first unreadable or
/// malformed file aborts the command.
pub fn execute(args: &AnalyzeArgs) -> Result<()> {
    let config = load_config(args.config.config.as_deref())?;
    let analysis = args.analysis.apply(config.analysis.clone());
    analysis.validate()?;

    let engine = ArbitrageEngine::new(analysis);
    let market = config.odds_api.markets.as_str();
    let verbosity = output::verbosity();
    let mut totals = ReportTotals::default();

    for path in &args.files {
        let (events_seen, shown) = analyze_file(&engine, path, market, verbosity, &mut totals)?;
        debug!(path = %path.display(), events_seen, shown, "Analysed file");
    }

    report::totals(&totals);
    Ok(())
}

fn analyze_file(
    engine: &ArbitrageEngine,
    path: &Path,
    market: &str,
    verbosity: u8,
    totals: &mut ReportTotals,
) -> Result<(usize, usize)> {
    let payload = fs::read_to_string(path)?;
    let events = decode_events(&payload, market)?;
    let analyses = engine.analyze_events(&events);

    output::section(&path.display().to_string());
    totals.add(events.len(), &analyses);
    let shown = report::analyses(&analyses, verbosity)?;
    totals.shown += shown;

    Ok((events.len(), shown))
}
