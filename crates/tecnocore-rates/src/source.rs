//! # Rate Sources
//!
//! One [`RateSource`] per external endpoint. Each source is queried
//! independently and treated as unreliable: timeouts, non-200 answers and
//! malformed bodies are all normal operating conditions, isolated from the
//! other sources by the provider.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::config::RateSourceConfig;
use crate::error::SourceError;

/// Currency code looked up in source responses.
const RATE_CURRENCY: &str = "ARS";

// =============================================================================
// Quote
// =============================================================================

/// One successful answer from one source.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceQuote {
    /// Source display name.
    pub source: String,

    /// Quoted price, ARS per USDT, as reported (not yet rounded).
    pub price: f64,

    /// 24h change in percent, when the source reports one.
    pub change24h: Option<f64>,
}

// =============================================================================
// Source Seam
// =============================================================================

/// An external price source.
///
/// Implementations must be cheap to query concurrently; the provider fires
/// all sources on every poll and collects whatever succeeds.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Display name, used in logs and as the snapshot `source_name`.
    fn name(&self) -> &str;

    /// Fetches one quote.
    async fn fetch(&self) -> Result<SourceQuote, SourceError>;
}

// =============================================================================
// HTTP JSON Source
// =============================================================================

/// Response shape of the exchange-rate endpoints:
/// `{ "rates": { "ARS": 1298.5, ... } }`.
#[derive(Debug, Deserialize)]
struct RatesResponse {
    rates: HashMap<String, f64>,
}

/// A source speaking the `{ "rates": { ... } }` JSON dialect over HTTP.
#[derive(Debug, Clone)]
pub struct HttpJsonSource {
    name: String,
    url: String,
    client: reqwest::Client,
}

impl HttpJsonSource {
    /// Creates a source from its configuration, sharing the given client.
    pub fn new(config: &RateSourceConfig, client: reqwest::Client) -> Self {
        HttpJsonSource {
            name: config.name.clone(),
            url: config.url.clone(),
            client,
        }
    }

    /// Builds a client suitable for rate queries (short timeout, no retries
    /// - a missed poll is cheaper than a stalled one).
    pub fn build_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
        reqwest::Client::builder().timeout(timeout).build()
    }
}

#[async_trait]
impl RateSource for HttpJsonSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<SourceQuote, SourceError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed: RatesResponse = serde_json::from_str(&body)?;

        let price = parsed
            .rates
            .get(RATE_CURRENCY)
            .copied()
            .ok_or_else(|| SourceError::MissingRate {
                currency: RATE_CURRENCY.to_string(),
            })?;

        debug!(source = %self.name, price, "rate source answered");

        Ok(SourceQuote {
            source: self.name.clone(),
            price,
            // This endpoint family reports spot rates only.
            change24h: None,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
