//! Error types for advisor operations

use thiserror::Error;

/// Example tickers shown to the user when a symbol yields no price data.
pub const TICKER_HINT: &str = "Coba kode seperti BBNI / BBCA / TLKM.";

/// Advisor specific errors
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// The upstream provider returned no price data for the symbol
    #[error("Data harga tidak ditemukan untuk {symbol}. {TICKER_HINT}")]
    NoData { symbol: String },

    /// Price-history provider error
    #[error("Provider error: {0}")]
    Provider(String),

    /// Technical indicator calculation error
    #[error("Indicator error: {0}")]
    Indicator(String),

    /// Network or HTTP error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type alias for advisor operations
pub type Result<T> = std::result::Result<T, AdvisorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_data_carries_hint() {
        let err = AdvisorError::NoData {
            symbol: "XXXX.JK".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("XXXX.JK"));
        assert!(msg.contains("BBNI / BBCA / TLKM"));
    }

    #[test]
    fn test_error_display() {
        let err = AdvisorError::Provider("timeout".to_string());
        assert_eq!(err.to_string(), "Provider error: timeout");
    }
}
