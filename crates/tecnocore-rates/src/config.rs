//! # Rates Configuration
//!
//! Configuration for the exchange rate provider.
//!
//! ## Configuration File Format
//! ```toml
//! # rates.toml
//! poll_interval_secs = 180
//! request_timeout_secs = 10
//! fallback_base_price = 1290
//!
//! [[sources]]
//! name = "ExchangeRate-API"
//! url = "https://api.exchangerate-api.com/v4/latest/USD"
//! ```
//!
//! Every field is optional; defaults reproduce the storefront's production
//! behavior (one public source, three-minute polls, fallback around 1290).

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{RatesError, RatesResult};

// =============================================================================
// Defaults
// =============================================================================

/// Default poll cadence: every 3 minutes.
const DEFAULT_POLL_INTERVAL_SECS: u64 = 180;

/// Default per-request timeout.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Base price the fallback quotes are synthesized around, ARS per USDT.
const DEFAULT_FALLBACK_BASE_PRICE: i64 = 1290;

// =============================================================================
// Source Configuration
// =============================================================================

/// One external price source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSourceConfig {
    /// Display name, surfaced as the snapshot's `source_name` when this
    /// source wins the max-price pick.
    pub name: String,

    /// Endpoint expected to answer `{ "rates": { "ARS": <number> } }`.
    pub url: String,
}

// =============================================================================
// Rates Configuration
// =============================================================================

/// Exchange rate provider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatesConfig {
    /// Sources to query on every poll. Order matters only for max-price tie
    /// breaking (first seen wins). An empty list is legal: the provider then
    /// always serves fallback data.
    pub sources: Vec<RateSourceConfig>,

    /// Seconds between scheduled polls.
    pub poll_interval_secs: u64,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Base price the deterministic fallback quotes are built around.
    pub fallback_base_price: i64,
}

impl Default for RatesConfig {
    fn default() -> Self {
        RatesConfig {
            sources: vec![RateSourceConfig {
                name: "ExchangeRate-API".to_string(),
                url: "https://api.exchangerate-api.com/v4/latest/USD".to_string(),
            }],
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            fallback_base_price: DEFAULT_FALLBACK_BASE_PRICE,
        }
    }
}

impl RatesConfig {
    /// Parses a configuration from a TOML string, falling back to defaults
    /// for absent fields.
    pub fn from_toml_str(input: &str) -> RatesResult<Self> {
        let config: RatesConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> RatesResult<()> {
        if self.poll_interval_secs == 0 {
            return Err(RatesError::InvalidConfig(
                "poll_interval_secs must be greater than zero".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(RatesError::InvalidConfig(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.fallback_base_price <= 0 {
            return Err(RatesError::InvalidConfig(
                "fallback_base_price must be positive".to_string(),
            ));
        }
        for source in &self.sources {
            if source.name.trim().is_empty() {
                return Err(RatesError::InvalidConfig(
                    "source name must not be empty".to_string(),
                ));
            }
            if source.url.trim().is_empty() {
                return Err(RatesError::InvalidConfig(format!(
                    "source '{}' has an empty url",
                    source.name
                )));
            }
        }
        Ok(())
    }

    /// Poll cadence as a Duration.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    /// Request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = RatesConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.poll_interval(), Duration::from_secs(180));
        assert_eq!(config.fallback_base_price, 1290);
        assert_eq!(config.sources.len(), 1);
    }

    #[test]
    fn test_from_toml_partial() {
        let config = RatesConfig::from_toml_str(
            r#"
            poll_interval_secs = 60

            [[sources]]
            name = "Binance P2P"
            url = "https://example.test/binance"

            [[sources]]
            name = "Buenbit"
            url = "https://example.test/buenbit"
            "#,
        )
        .unwrap();

        assert_eq!(config.poll_interval_secs, 60);
        assert_eq!(config.request_timeout_secs, 10); // default kept
        assert_eq!(config.sources.len(), 2);
        assert_eq!(config.sources[0].name, "Binance P2P");
    }

    #[test]
    fn test_zero_interval_rejected() {
        let err = RatesConfig::from_toml_str("poll_interval_secs = 0").unwrap_err();
        assert!(matches!(err, RatesError::InvalidConfig(_)));
    }

    #[test]
    fn test_empty_source_url_rejected() {
        let config = RatesConfig {
            sources: vec![RateSourceConfig {
                name: "Broken".to_string(),
                url: "  ".to_string(),
            }],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_source_list_is_legal() {
        let config = RatesConfig {
            sources: Vec::new(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
