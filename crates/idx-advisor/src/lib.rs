//! IDX stock advisor
//!
//! Fetches two years of daily history for an Indonesian stock ticker,
//! attaches EMA20/EMA50/EMA200, RSI14 and ATR14, derives a rule-based trade
//! plan (entry / targets / cutloss around 60-day support and resistance) and
//! lists recent headlines from a Google News search feed.
//!
//! # Example
//!
//! ```rust,ignore
//! use idx_advisor::{AdvisorConfig, AdvisorEngine, CliFormatter};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let engine = AdvisorEngine::new(AdvisorConfig::default())?;
//!     let report = engine.analyze("bbni").await?;
//!     println!("{}", CliFormatter.format_report(&report));
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod api;
pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod interface;
pub mod ticker;

// Re-export main types for convenience
pub use analysis::{IndicatorRow, IndicatorTable, TradePlan, trade_plan};
pub use api::{Bar, NewsItem};
pub use config::AdvisorConfig;
pub use engine::{AdvisorEngine, AdvisorReport};
pub use error::{AdvisorError, Result};
pub use interface::CliFormatter;
pub use ticker::normalize_ticker;
