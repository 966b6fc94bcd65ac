#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use rust_decimal::Decimal;

use surebet::adapter::outbound::odds_api::dto::decode_events;
use surebet::domain::{BookmakerQuotes, Event, EventId, OutcomeQuote, Sport, SportKey};
use surebet::error::{Error, Result};
use surebet::port::{OddsCache, OddsFeed};

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn fixture(name: &str) -> String {
    fs::read_to_string(fixture_path(name)).expect("read fixture")
}

pub fn quotes(platform: &str, outcomes: &[(&str, Decimal)]) -> BookmakerQuotes {
    BookmakerQuotes::new(
        platform,
        outcomes
            .iter()
            .map(|(name, price)| OutcomeQuote::new(*name, *price))
            .collect(),
    )
}

pub fn event(id: &str, bookmakers: Vec<BookmakerQuotes>) -> Event {
    Event::new(EventId::from(id), "Home", "Away", bookmakers)
}

pub fn sport(key: &str) -> Sport {
    Sport {
        key: SportKey::from(key),
        title: key.to_uppercase(),
        group: "Test".into(),
        active: true,
        has_outrights: false,
    }
}

/// Feed serving canned payloads; unknown sports answer 404.
#[derive(Default)]
pub struct MockFeed {
    pub sports: Vec<Sport>,
    pub payloads: HashMap<String, String>,
    odds_calls: AtomicUsize,
}

impl MockFeed {
    pub fn with_payload(mut self, key: &str, payload: impl Into<String>) -> Self {
        self.sports.push(sport(key));
        self.payloads.insert(key.to_string(), payload.into());
        self
    }

    pub fn odds_calls(&self) -> usize {
        self.odds_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OddsFeed for MockFeed {
    async fn sports(&self) -> Result<Vec<Sport>> {
        Ok(self.sports.clone())
    }

    async fn odds(&self, sport: &SportKey) -> Result<String> {
        self.odds_calls.fetch_add(1, Ordering::SeqCst);
        self.payloads
            .get(sport.as_str())
            .cloned()
            .ok_or_else(|| Error::Api {
                status: 404,
                body: format!("unknown sport {sport}"),
            })
    }

    fn decode(&self, payload: &str) -> Result<Vec<Event>> {
        decode_events(payload, "h2h")
    }
}

#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryCache {
    pub fn with_entry(self, sport: &str, payload: impl Into<String>) -> Self {
        self.entries
            .lock()
            .unwrap()
            .insert(sport.to_string(), payload.into());
        self
    }
}

impl OddsCache for MemoryCache {
    fn load(&self, sport: &SportKey) -> Result<Option<String>> {
        Ok(self.entries.lock().unwrap().get(sport.as_str()).cloned())
    }

    fn store(&self, sport: &SportKey, payload: &str) -> Result<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(sport.as_str().to_string(), payload.to_string());
        Ok(())
    }

    fn remove(&self, sport: &SportKey) -> Result<bool> {
        Ok(self.entries.lock().unwrap().remove(sport.as_str()).is_some())
    }
}
