//! Configuration for advisor operations

use crate::error::{AdvisorError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for advisor operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// Length of the daily history window requested from the provider
    pub history_days: i64,

    /// Cache TTL for price/indicator tables
    pub cache_ttl: Duration,

    /// Number of news headlines to return
    pub news_count: usize,

    /// Trailing window (in rows) for support/resistance levels
    pub sr_window: usize,

    /// Request timeout for the news feed fetch
    pub request_timeout: Duration,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            history_days: 730, // 2 years of daily bars
            cache_ttl: Duration::from_secs(60),
            news_count: 8,
            sr_window: 60,
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl AdvisorConfig {
    /// Create a new configuration builder
    pub fn builder() -> AdvisorConfigBuilder {
        AdvisorConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.history_days <= 0 {
            return Err(AdvisorError::Config(
                "history_days must be greater than 0".to_string(),
            ));
        }

        if self.sr_window == 0 {
            return Err(AdvisorError::Config(
                "sr_window must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for AdvisorConfig
#[derive(Debug, Default)]
pub struct AdvisorConfigBuilder {
    history_days: Option<i64>,
    cache_ttl: Option<Duration>,
    news_count: Option<usize>,
    sr_window: Option<usize>,
    request_timeout: Option<Duration>,
}

impl AdvisorConfigBuilder {
    /// Set the daily history window length
    pub fn history_days(mut self, days: i64) -> Self {
        self.history_days = Some(days);
        self
    }

    /// Set the cache TTL for price/indicator tables
    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = Some(ttl);
        self
    }

    /// Set the number of news headlines to return
    pub fn news_count(mut self, count: usize) -> Self {
        self.news_count = Some(count);
        self
    }

    /// Set the support/resistance trailing window
    pub fn sr_window(mut self, rows: usize) -> Self {
        self.sr_window = Some(rows);
        self
    }

    /// Set the news feed request timeout
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AdvisorConfig> {
        let defaults = AdvisorConfig::default();

        let config = AdvisorConfig {
            history_days: self.history_days.unwrap_or(defaults.history_days),
            cache_ttl: self.cache_ttl.unwrap_or(defaults.cache_ttl),
            news_count: self.news_count.unwrap_or(defaults.news_count),
            sr_window: self.sr_window.unwrap_or(defaults.sr_window),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AdvisorConfig::default();
        assert_eq!(config.history_days, 730);
        assert_eq!(config.news_count, 8);
        assert_eq!(config.sr_window, 60);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = AdvisorConfig::builder()
            .news_count(5)
            .cache_ttl(Duration::from_secs(120))
            .build()
            .unwrap();

        assert_eq!(config.news_count, 5);
        assert_eq!(config.cache_ttl, Duration::from_secs(120));
        assert_eq!(config.sr_window, 60);
    }

    #[test]
    fn test_validation_rejects_zero_window() {
        let config = AdvisorConfig {
            sr_window: 0,
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_negative_history() {
        assert!(AdvisorConfig::builder().history_days(-1).build().is_err());
    }
}
