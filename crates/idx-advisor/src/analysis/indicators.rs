//! Indicator-augmented price table
//!
//! Takes raw daily bars and attaches EMA20/EMA50/EMA200, RSI14 and ATR14.
//! Rows inside the longest warm-up window (EMA200) are dropped, so every row
//! of the resulting table carries all five indicator values.

use crate::api::Bar;
use crate::error::{AdvisorError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ta::indicators::{AverageTrueRange, ExponentialMovingAverage, RelativeStrengthIndex};
use ta::{DataItem, Next};

/// Spans for the attached indicators
pub const EMA_SHORT: usize = 20;
pub const EMA_MID: usize = 50;
pub const EMA_LONG: usize = 200;
pub const RSI_SPAN: usize = 14;
pub const ATR_SPAN: usize = 14;

/// One daily bar with its indicator values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorRow {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
    pub ema20: f64,
    pub ema50: f64,
    pub ema200: f64,
    pub rsi14: f64,
    pub atr14: f64,
}

/// Chronologically ordered, indicator-complete price table.
///
/// Invariant: never empty, ascending by timestamp, every row has all five
/// indicator values populated. Constructors enforce this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorTable {
    rows: Vec<IndicatorRow>,
}

impl IndicatorTable {
    /// Build a table from raw bars for `symbol`.
    ///
    /// Fails with [`AdvisorError::NoData`] when the bars do not cover the
    /// EMA200 warm-up window, which is also the empty-input case.
    pub fn from_bars(symbol: &str, bars: &[Bar]) -> Result<Self> {
        if bars.len() < EMA_LONG {
            return Err(AdvisorError::NoData {
                symbol: symbol.to_string(),
            });
        }

        let mut ema20 = ExponentialMovingAverage::new(EMA_SHORT)
            .map_err(|e| AdvisorError::Indicator(e.to_string()))?;
        let mut ema50 = ExponentialMovingAverage::new(EMA_MID)
            .map_err(|e| AdvisorError::Indicator(e.to_string()))?;
        let mut ema200 = ExponentialMovingAverage::new(EMA_LONG)
            .map_err(|e| AdvisorError::Indicator(e.to_string()))?;
        let mut rsi14 = RelativeStrengthIndex::new(RSI_SPAN)
            .map_err(|e| AdvisorError::Indicator(e.to_string()))?;
        let mut atr14 = AverageTrueRange::new(ATR_SPAN)
            .map_err(|e| AdvisorError::Indicator(e.to_string()))?;

        let mut rows = Vec::with_capacity(bars.len() - EMA_LONG + 1);
        for (i, bar) in bars.iter().enumerate() {
            let item = DataItem::builder()
                .open(bar.open)
                .high(bar.high)
                .low(bar.low)
                .close(bar.close)
                .volume(bar.volume as f64)
                .build()
                .map_err(|e| AdvisorError::Indicator(format!("bad bar for {symbol}: {e}")))?;

            let e20 = ema20.next(bar.close);
            let e50 = ema50.next(bar.close);
            let e200 = ema200.next(bar.close);
            let rsi = rsi14.next(bar.close);
            let atr = atr14.next(&item);

            // Streaming indicators emit values from the first bar; only rows
            // past the longest warm-up window are meaningful.
            if i + 1 < EMA_LONG {
                continue;
            }

            rows.push(IndicatorRow {
                timestamp: bar.timestamp,
                open: bar.open,
                high: bar.high,
                low: bar.low,
                close: bar.close,
                volume: bar.volume,
                ema20: e20,
                ema50: e50,
                ema200: e200,
                rsi14: rsi,
                atr14: atr,
            });
        }

        Self::from_rows(rows)
    }

    /// Build a table from pre-computed rows. Fails on empty input.
    pub fn from_rows(rows: Vec<IndicatorRow>) -> Result<Self> {
        if rows.is_empty() {
            return Err(AdvisorError::Indicator(
                "indicator table is empty".to_string(),
            ));
        }
        Ok(Self { rows })
    }

    /// All rows, chronological ascending
    pub fn rows(&self) -> &[IndicatorRow] {
        &self.rows
    }

    /// The most recent row. Safe to index: the table is never empty.
    pub fn last(&self) -> &IndicatorRow {
        &self.rows[self.rows.len() - 1]
    }

    /// The trailing `n` rows, or everything when the table is shorter
    pub fn tail(&self, n: usize) -> &[IndicatorRow] {
        let start = self.rows.len().saturating_sub(n);
        &self.rows[start..]
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Conventional pairing with [`len`](Self::len); constructors reject
    /// empty tables
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
