//! The Odds API REST client.
//!
//! Every request spends API quota, so the client logs the quota headers the
//! API returns and only retries transport failures (timeouts, refused
//! connections), never error statuses.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::Client as HttpClient;
use tokio::time::sleep;
use tracing::{debug, info, warn};
use url::Url;

use super::dto::{decode_events, OddsApiSport};
use crate::domain::{Event, Sport, SportKey};
use crate::error::{Error, Result};
use crate::infrastructure::config::OddsApiConfig;
use crate::port::OddsFeed;

const REMAINING_HEADER: &str = "x-requests-remaining";
const USED_HEADER: &str = "x-requests-used";

/// HTTP client for The Odds API v4.
pub struct OddsApiClient {
    http: HttpClient,
    base_url: Url,
    api_key: String,
    regions: String,
    markets: String,
    odds_format: String,
    date_format: String,
    retry_max_attempts: u32,
    retry_backoff_ms: u64,
}

impl OddsApiClient {
    /// Build a client from config with an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Url`] if `base_url` does not parse.
    pub fn new(config: &OddsApiConfig, api_key: impl Into<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Ok(Self {
            http,
            base_url: Url::parse(&config.base_url)?,
            api_key: api_key.into(),
            regions: config.regions.clone(),
            markets: config.markets.clone(),
            odds_format: config.odds_format.clone(),
            date_format: config.date_format.clone(),
            retry_max_attempts: config.retry_max_attempts,
            retry_backoff_ms: config.retry_backoff_ms,
        })
    }

    /// Build a client, resolving the API key from the environment or key file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingApiKey`] when no key is configured.
    pub fn from_config(config: &OddsApiConfig) -> Result<Self> {
        let api_key = config.api_key()?;
        Self::new(config, api_key)
    }

    /// Market key whose quotes [`OddsFeed::decode`] keeps.
    #[must_use]
    pub fn market(&self) -> &str {
        &self.markets
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(segments);
        url.query_pairs_mut().append_pair("apiKey", &self.api_key);
        Ok(url)
    }

    pub(crate) fn sports_url(&self) -> Result<Url> {
        self.endpoint(&["v4", "sports"])
    }

    pub(crate) fn odds_url(&self, sport: &SportKey) -> Result<Url> {
        let mut url = self.endpoint(&["v4", "sports", sport.as_str(), "odds"])?;
        url.query_pairs_mut()
            .append_pair("regions", &self.regions)
            .append_pair("markets", &self.markets)
            .append_pair("oddsFormat", &self.odds_format)
            .append_pair("dateFormat", &self.date_format);
        Ok(url)
    }

    async fn get_with_retry(&self, url: &Url) -> Result<String> {
        let mut attempt = 0;
        let max_attempts = self.retry_max_attempts.max(1);

        loop {
            attempt += 1;
            debug!(path = url.path(), attempt, "GET");

            let response = match self.http.get(url.clone()).send().await {
                Ok(response) => response,
                Err(err) => {
                    if attempt >= max_attempts || !Self::should_retry(&err) {
                        return Err(err.into());
                    }
                    self.backoff(attempt, max_attempts, &err).await;
                    continue;
                }
            };

            Self::log_quota(response.headers());

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(Error::Api {
                    status: status.as_u16(),
                    body,
                });
            }

            match response.text().await {
                Ok(body) => return Ok(body),
                Err(err) => {
                    if attempt >= max_attempts || !Self::should_retry(&err) {
                        return Err(err.into());
                    }
                    self.backoff(attempt, max_attempts, &err).await;
                }
            }
        }
    }

    fn should_retry(err: &reqwest::Error) -> bool {
        err.is_timeout() || err.is_connect()
    }

    async fn backoff(&self, attempt: u32, max_attempts: u32, err: &reqwest::Error) {
        warn!(
            attempt,
            max_attempts,
            error = %err,
            "HTTP request failed, retrying"
        );
        if self.retry_backoff_ms > 0 {
            let factor = 1u64 << (attempt - 1).min(6);
            sleep(Duration::from_millis(self.retry_backoff_ms.saturating_mul(factor))).await;
        }
    }

    fn log_quota(headers: &HeaderMap) {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned)
        };
        if let (Some(remaining), Some(used)) = (header(REMAINING_HEADER), header(USED_HEADER)) {
            info!(%remaining, %used, "Odds API quota");
        }
    }
}

#[async_trait]
impl OddsFeed for OddsApiClient {
    async fn sports(&self) -> Result<Vec<Sport>> {
        let url = self.sports_url()?;
        info!("Fetching sports list");
        let body = self.get_with_retry(&url).await?;
        let sports: Vec<OddsApiSport> = serde_json::from_str(&body)?;
        Ok(sports.into_iter().map(Sport::from).collect())
    }

    async fn odds(&self, sport: &SportKey) -> Result<String> {
        let url = self.odds_url(sport)?;
        info!(sport = %sport, "Fetching odds");
        self.get_with_retry(&url).await
    }

    fn decode(&self, payload: &str) -> Result<Vec<Event>> {
        decode_events(payload, &self.markets)
    }
}
