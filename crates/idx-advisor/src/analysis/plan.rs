//! The trade-plan rule
//!
//! A pure function of the table's last row plus a trailing high/low window.
//! Two branches: price confirmed above EMA50 buys the pullback toward EMA20;
//! anything else waits for a setup near support.

use serde::{Deserialize, Serialize};

use super::indicators::IndicatorTable;

/// Recommendation label for the uptrend branch
pub const RECO_BUY: &str = "BUY / ACCUMULATE (terukur)";
/// Recommendation label for the wait/range branch
pub const RECO_WAIT: &str = "WAIT (tunggu setup)";

const WHY_BUY: &str = "Uptrend (di atas EMA50). Entry ideal saat pullback dekat EMA20.";
const WHY_WAIT: &str =
    "Belum kuat di atas EMA50. Jika entry, lakukan dekat support dengan cutloss ketat.";

/// Rule-based trade plan for the most recent session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradePlan {
    pub close: f64,
    pub entry: f64,
    pub target1: f64,
    pub target2: f64,
    pub cutloss: f64,
    pub support: f64,
    pub resistance: f64,
    pub recommendation: String,
    pub rationale: String,
}

/// Derive a trade plan from the table's last row and the trailing
/// `sr_window` rows of highs/lows.
///
/// Tables shorter than the window use whatever rows exist; there is
/// deliberately no minimum-history guard for thin listings. Deterministic
/// for identical input.
pub fn trade_plan(table: &IndicatorTable, sr_window: usize) -> TradePlan {
    let last = table.last();
    let close = last.close;
    let atr = last.atr14;

    let tail = table.tail(sr_window);
    let support = tail.iter().map(|r| r.low).fold(f64::INFINITY, f64::min);
    let resistance = tail.iter().map(|r| r.high).fold(f64::NEG_INFINITY, f64::max);

    let (entry, cutloss, target1, target2, recommendation, rationale) = if close > last.ema50 {
        let entry = last.ema20;
        (
            entry,
            (entry - 1.2 * atr).min(support * 0.995),
            entry + 1.5 * atr,
            resistance.min(entry + 3.0 * atr),
            RECO_BUY,
            WHY_BUY,
        )
    } else {
        let entry = support * 1.01;
        (
            entry,
            support * 0.985,
            resistance.min(entry + 1.2 * atr),
            resistance,
            RECO_WAIT,
            WHY_WAIT,
        )
    };

    TradePlan {
        close,
        entry,
        target1,
        target2,
        cutloss,
        support,
        resistance,
        recommendation: recommendation.to_string(),
        rationale: rationale.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::indicators::IndicatorRow;
    use chrono::{TimeZone, Utc};

    fn row(i: usize, high: f64, low: f64, close: f64) -> IndicatorRow {
        IndicatorRow {
            timestamp: Utc.timestamp_opt(1_600_000_000 + i as i64 * 86_400, 0).unwrap(),
            open: close,
            high,
            low,
            close,
            volume: 1_000,
            ema20: close,
            ema50: close,
            ema200: close,
            rsi14: 50.0,
            atr14: 1.0,
        }
    }

    /// 59 filler rows spanning the given extremes, then one caller-shaped row
    fn fixture(
        low_min: f64,
        high_max: f64,
        close: f64,
        ema20: f64,
        ema50: f64,
        atr14: f64,
    ) -> IndicatorTable {
        let mut rows: Vec<IndicatorRow> = (0..59)
            .map(|i| row(i, high_max - 1.0, low_min + 1.0, (low_min + high_max) / 2.0))
            .collect();
        // Pin the window extremes on two interior rows
        rows[10].low = low_min;
        rows[20].high = high_max;

        let mut last = row(59, close, close - 1.0, close);
        last.ema20 = ema20;
        last.ema50 = ema50;
        last.atr14 = atr14;
        rows.push(last);

        IndicatorTable::from_rows(rows).unwrap()
    }

    #[test]
    fn test_uptrend_branch() {
        // close 110 > ema50 100: buy the pullback toward EMA20
        let table = fixture(90.0, 120.0, 110.0, 105.0, 100.0, 2.0);
        let plan = trade_plan(&table, 60);

        assert_eq!(plan.recommendation, RECO_BUY);
        assert!((plan.entry - 105.0).abs() < 1e-9);
        assert!((plan.target1 - 107.5).abs() < 1e-9);
        // min(resistance 120, entry + 3*atr = 111) = 111
        assert!((plan.target2 - 111.0).abs() < 1e-9);
        // min(entry - 1.2*atr = 102.6, support * 0.995 = 89.55) = 89.55
        assert!((plan.cutloss - 89.55).abs() < 1e-9);
        assert!((plan.support - 90.0).abs() < 1e-9);
        assert!((plan.resistance - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_wait_branch() {
        // close 90 below ema50 100: wait, entry near support
        let table = fixture(85.0, 130.0, 90.0, 95.0, 100.0, 3.0);
        let plan = trade_plan(&table, 60);

        assert_eq!(plan.recommendation, RECO_WAIT);
        assert!((plan.entry - 85.85).abs() < 1e-9);
        assert!((plan.cutloss - 83.725).abs() < 1e-9);
        // min(resistance 130, entry + 1.2*atr = 89.45) = 89.45
        assert!((plan.target1 - 89.45).abs() < 1e-9);
        assert!((plan.target2 - 130.0).abs() < 1e-9);
    }

    #[test]
    fn test_close_equal_to_ema50_waits() {
        let table = fixture(85.0, 130.0, 100.0, 98.0, 100.0, 3.0);
        let plan = trade_plan(&table, 60);
        assert_eq!(plan.recommendation, RECO_WAIT);
    }

    #[test]
    fn test_plan_serde_round_trip() {
        let plan = trade_plan(&fixture(90.0, 120.0, 110.0, 105.0, 100.0, 2.0), 60);

        let json = serde_json::to_string(&plan).unwrap();
        let back: TradePlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plan);
    }

    #[test]
    fn test_deterministic() {
        let table = fixture(90.0, 120.0, 110.0, 105.0, 100.0, 2.0);
        assert_eq!(trade_plan(&table, 60), trade_plan(&table, 60));
    }

    #[test]
    fn test_window_limits_to_trailing_rows() {
        // Extremes sit outside the trailing window and must be ignored
        let mut rows: Vec<IndicatorRow> =
            (0..30).map(|i| row(i, 500.0, 10.0, 100.0)).collect();
        rows.extend((30..100).map(|i| row(i, 120.0, 90.0, 110.0)));
        let table = IndicatorTable::from_rows(rows).unwrap();

        let plan = trade_plan(&table, 60);
        assert!((plan.support - 90.0).abs() < 1e-9);
        assert!((plan.resistance - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_short_table_uses_available_rows() {
        // 5 rows only: window min/max computed over what exists
        let rows: Vec<IndicatorRow> = (0..5).map(|i| row(i, 110.0, 95.0, 100.0)).collect();
        let table = IndicatorTable::from_rows(rows).unwrap();

        let plan = trade_plan(&table, 60);
        assert!((plan.support - 95.0).abs() < 1e-9);
        assert!((plan.resistance - 110.0).abs() < 1e-9);
    }
}
