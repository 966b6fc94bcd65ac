//! Scan use case: make sure odds are cached, then analyse them.
//!
//! Cached payloads are reused as-is; a sport is only fetched when nothing
//! readable is stored for it or a refresh is requested.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::arbitrage::ArbitrageEngine;
use crate::domain::{Event, EventAnalysis, Sport, SportKey};
use crate::error::Result;
use crate::port::{OddsCache, OddsFeed};

/// Where the analysed payload came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadSource {
    Cache,
    Feed,
}

/// Result of scanning one sport.
#[derive(Debug, Clone)]
pub struct SportScan {
    pub sport: SportKey,
    pub source: PayloadSource,
    /// Events in the payload, analysable or not.
    pub events_seen: usize,
    pub analyses: Vec<EventAnalysis>,
}

impl SportScan {
    /// Number of arbitrable events.
    #[must_use]
    pub fn arbitrable_count(&self) -> usize {
        self.analyses.iter().filter(|a| a.is_arbitrable()).count()
    }
}

/// Fetches, caches and analyses odds sport by sport.
pub struct ScanService {
    feed: Arc<dyn OddsFeed>,
    cache: Arc<dyn OddsCache>,
    engine: ArbitrageEngine,
}

impl ScanService {
    pub fn new(feed: Arc<dyn OddsFeed>, cache: Arc<dyn OddsCache>, engine: ArbitrageEngine) -> Self {
        Self {
            feed,
            cache,
            engine,
        }
    }

    /// Sports offered by the feed, in feed order.
    ///
    /// # Errors
    ///
    /// Propagates feed errors.
    pub async fn sports(&self) -> Result<Vec<Sport>> {
        let sports = self.feed.sports().await?;
        debug!(count = sports.len(), "Fetched sports list");
        Ok(sports)
    }

    /// Scan one sport.
    ///
    /// A cached payload that no longer decodes is removed and refetched. A
    /// fetched payload is only stored once it decodes.
    ///
    /// # Errors
    ///
    /// Returns feed, cache or decode errors for this sport.
    pub async fn scan_sport(&self, sport: &SportKey, refresh: bool) -> Result<SportScan> {
        if !refresh {
            if let Some(payload) = self.cache.load(sport)? {
                match self.feed.decode(&payload) {
                    Ok(events) => {
                        debug!(sport = %sport, "Using cached odds, remove the file to refresh");
                        return Ok(self.analyze(sport, PayloadSource::Cache, &events));
                    }
                    Err(err) => {
                        warn!(sport = %sport, error = %err, "Discarding unreadable cached odds");
                        self.cache.remove(sport)?;
                    }
                }
            }
        }

        let payload = self.feed.odds(sport).await?;
        let events = self.feed.decode(&payload)?;
        self.cache.store(sport, &payload)?;
        Ok(self.analyze(sport, PayloadSource::Feed, &events))
    }

    /// Scan several sports sequentially.
    ///
    /// A sport that fails is logged and left out; the others still run.
    pub async fn scan_sports(&self, sports: &[SportKey], refresh: bool) -> Vec<SportScan> {
        let mut scans = Vec::with_capacity(sports.len());
        for sport in sports {
            match self.scan_sport(sport, refresh).await {
                Ok(scan) => scans.push(scan),
                Err(err) => warn!(sport = %sport, error = %err, "Failed to scan sport"),
            }
        }
        scans
    }

    fn analyze(&self, sport: &SportKey, source: PayloadSource, events: &[Event]) -> SportScan {
        let scan = SportScan {
            sport: sport.clone(),
            source,
            events_seen: events.len(),
            analyses: self.engine.analyze_events(events),
        };

        info!(
            sport = %sport,
            events = scan.events_seen,
            arbitrable = scan.arbitrable_count(),
            "Scanned sport"
        );

        scan
    }
}
