//! Indicator computation and the trade-plan rule

pub mod indicators;
pub mod plan;

pub use indicators::{IndicatorRow, IndicatorTable};
pub use plan::{TradePlan, trade_plan};
