//! Yahoo Finance price-history client

use crate::error::{AdvisorError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use yahoo_finance_api as yahoo;

/// One daily price bar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// Yahoo Finance client for daily history
pub struct PriceHistoryClient {}

impl PriceHistoryClient {
    /// Create a new price-history client
    pub fn new() -> Self {
        Self {}
    }

    /// Fetch daily bars for a symbol covering the trailing `days` window.
    ///
    /// Bars come back in provider order, which is chronological ascending.
    /// An unknown symbol surfaces as a not-found fetch error, which is
    /// mapped to the same [`AdvisorError::NoData`] an empty history
    /// produces, so the user sees the example-ticker hint either way.
    pub async fn daily_history(&self, symbol: &str, days: i64) -> Result<Vec<Bar>> {
        let provider = yahoo::YahooConnector::new()
            .map_err(|e| AdvisorError::Provider(e.to_string()))?;

        let end = Utc::now();
        let start = end - chrono::Duration::days(days);

        // Convert chrono DateTime to time OffsetDateTime
        let start_odt = OffsetDateTime::from_unix_timestamp(start.timestamp())
            .map_err(|e| AdvisorError::Provider(format!("Invalid start timestamp: {e}")))?;
        let end_odt = OffsetDateTime::from_unix_timestamp(end.timestamp())
            .map_err(|e| AdvisorError::Provider(format!("Invalid end timestamp: {e}")))?;

        let response = provider
            .get_quote_history(symbol, start_odt, end_odt)
            .await
            .map_err(|e| map_fetch_error(symbol, &e.to_string()))?;

        let quotes = response
            .quotes()
            .map_err(|e| map_fetch_error(symbol, &e.to_string()))?;

        Ok(quotes
            .iter()
            .map(|q| Bar {
                timestamp: DateTime::from_timestamp(q.timestamp as i64, 0)
                    .unwrap_or_else(Utc::now),
                open: q.open,
                high: q.high,
                low: q.low,
                close: q.close,
                volume: q.volume,
            })
            .collect())
    }
}

/// Map a provider failure, turning the not-found case into [`AdvisorError::NoData`]
fn map_fetch_error(symbol: &str, err: &str) -> AdvisorError {
    let msg = err.to_lowercase();
    if msg.contains("404") || msg.contains("not found") || msg.contains("no quotes") {
        AdvisorError::NoData {
            symbol: symbol.to_string(),
        }
    } else {
        AdvisorError::Provider(err.to_string())
    }
}

impl Default for PriceHistoryClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for PriceHistoryClient {
    fn clone(&self) -> Self {
        Self::new()
    }
}
