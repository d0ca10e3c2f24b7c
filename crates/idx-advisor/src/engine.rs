//! Advisor engine: wires the normalizer, cached data loader, trade-plan rule
//! and news fetcher into a single report per request

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::analysis::{IndicatorTable, TradePlan, trade_plan};
use crate::api::{NewsClient, NewsItem, PriceHistoryClient};
use crate::cache::TableCache;
use crate::config::AdvisorConfig;
use crate::error::{AdvisorError, Result};
use crate::ticker::normalize_ticker;

/// Everything rendered for one analyze request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorReport {
    pub ticker: String,
    pub generated_at: DateTime<Utc>,
    pub plan: TradePlan,
    pub news: Vec<NewsItem>,
}

/// Advisor engine
pub struct AdvisorEngine {
    config: Arc<AdvisorConfig>,
    prices: PriceHistoryClient,
    news: NewsClient,
    cache: TableCache,
}

impl AdvisorEngine {
    /// Create an engine from a validated configuration
    pub fn new(config: AdvisorConfig) -> Result<Self> {
        config.validate()?;
        let news = NewsClient::new(config.request_timeout)?;
        let cache = TableCache::new(config.cache_ttl);

        Ok(Self {
            config: Arc::new(config),
            prices: PriceHistoryClient::new(),
            news,
            cache,
        })
    }

    /// Analyze raw user input: normalize, load the cached indicator table,
    /// derive the plan, attach headlines.
    ///
    /// News failures are absorbed into an empty list; only the price path
    /// can fail the request.
    pub async fn analyze(&self, raw_input: &str) -> Result<AdvisorReport> {
        let ticker = normalize_ticker(raw_input);

        let table = self.load_table(&ticker).await?;
        let plan = trade_plan(&table, self.config.sr_window);

        let news = match self.news.headlines(&ticker, self.config.news_count).await {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(%ticker, error = %e, "news fetch failed, continuing without headlines");
                Vec::new()
            }
        };

        Ok(AdvisorReport {
            ticker,
            generated_at: Utc::now(),
            plan,
            news,
        })
    }

    /// Load the indicator table for a normalized ticker, memoized for the
    /// configured TTL.
    async fn load_table(&self, ticker: &str) -> Result<IndicatorTable> {
        self.cache
            .get_or_fetch(ticker, || async {
                tracing::info!(%ticker, days = self.config.history_days, "fetching price history");

                let bars = self
                    .prices
                    .daily_history(ticker, self.config.history_days)
                    .await?;

                if bars.is_empty() {
                    return Err(AdvisorError::NoData {
                        symbol: ticker.to_string(),
                    });
                }

                IndicatorTable::from_bars(ticker, &bars)
            })
            .await
    }

    /// The engine's configuration
    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }
}
