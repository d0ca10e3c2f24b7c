//! Ticker symbol normalization for the IDX market
//!
//! User input is free text; the upstream provider expects an exchange suffix
//! (".JK" for Jakarta). The news feed wants the bare code back.

/// Default exchange suffix appended to bare IDX tickers.
pub const DEFAULT_SUFFIX: &str = ".JK";

/// Normalize raw user input into a provider-ready ticker.
///
/// Trims whitespace, uppercases, and appends [`DEFAULT_SUFFIX`] when the
/// input carries no exchange suffix of its own. Idempotent.
pub fn normalize_ticker(raw: &str) -> String {
    let mut ticker = raw.trim().to_uppercase();
    if !ticker.contains('.') {
        ticker.push_str(DEFAULT_SUFFIX);
    }
    ticker
}

/// Strip the default exchange suffix, yielding the bare code used in news
/// search queries.
pub fn strip_suffix(ticker: &str) -> &str {
    ticker.strip_suffix(DEFAULT_SUFFIX).unwrap_or(ticker)
}
