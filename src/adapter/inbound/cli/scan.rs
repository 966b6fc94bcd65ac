//! Handler for `scan`: fetch what is not cached, analyse, report.

use std::sync::Arc;

use super::command::ScanArgs;
use super::config::load_config;
use super::report::{self, ReportTotals};
use super::{output, paths};
use crate::adapter::outbound::{JsonFileCache, OddsApiClient};
use crate::application::arbitrage::ArbitrageEngine;
use crate::application::{PayloadSource, ScanService};
use crate::domain::SportKey;
use crate::error::Result;

/// Execute `scan`.
pub async fn execute(args: &ScanArgs) -> Result<()> {
    let config = load_config(args.config.config.as_deref())?;
    let analysis = args.analysis.apply(config.analysis.clone());
    analysis.validate()?;

    let feed = OddsApiClient::from_config(&config.odds_api)?;
    let cache = JsonFileCache::new(paths::cache_dir(&config.cache));
    let service = ScanService::new(
        Arc::new(feed),
        Arc::new(cache),
        ArbitrageEngine::new(analysis),
    );

    output::header(env!("CARGO_PKG_VERSION"));

    let sports: Vec<SportKey> = if args.sports.is_empty() {
        let pb = output::spinner("Listing sports");
        match service.sports().await {
            Ok(sports) => {
                output::spinner_success(&pb, &format!("{} sports", sports.len()));
                sports.into_iter().map(|s| s.key).collect()
            }
            Err(err) => {
                output::spinner_fail(&pb, "Could not list sports");
                return Err(err);
            }
        }
    } else {
        args.sports.iter().map(|s| SportKey::from(s.as_str())).collect()
    };

    let verbosity = output::verbosity();
    let mut totals = ReportTotals::default();

    for sport in &sports {
        let pb = output::spinner(&format!("Scanning {sport}"));
        match service.scan_sport(sport, args.refresh).await {
            Ok(scan) => {
                let origin = match scan.source {
                    PayloadSource::Cache => "cached",
                    PayloadSource::Feed => "fetched",
                };
                output::spinner_success(
                    &pb,
                    &format!(
                        "{sport}: {} events ({origin}), {} arbitrable",
                        scan.events_seen,
                        scan.arbitrable_count()
                    ),
                );
                totals.add(scan.events_seen, &scan.analyses);
                totals.shown += report::analyses(&scan.analyses, verbosity)?;
            }
            Err(err) => {
                output::spinner_fail(&pb, &format!("{sport}: {err}"));
            }
        }
    }

    report::totals(&totals);
    Ok(())
}
