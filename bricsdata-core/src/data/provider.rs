//! Provider traits and structured error types.
//!
//! The provider traits abstract over the two HTTP sources (World Bank for annual
//! indicators, Yahoo Finance for daily closes) so collectors can be driven by
//! fakes in tests.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One non-null annual observation of an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub year: i32,
    pub value: f64,
}

/// One daily closing price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyClose {
    pub date: NaiveDate,
    pub close: f64,
}

/// Structured error types for provider requests.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("network unreachable: {0}")]
    Network(String),

    #[error("HTTP {status} from {url}")]
    Http { status: u16, url: String },

    #[error("response format changed: {0}")]
    ResponseFormat(String),

    #[error("symbol not found: {symbol}")]
    SymbolNotFound { symbol: String },
}

impl From<reqwest::Error> for DataError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            DataError::ResponseFormat(e.to_string())
        } else {
            DataError::Network(e.to_string())
        }
    }
}

/// Source of annual macroeconomic indicators keyed by country.
pub trait IndicatorProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch all non-null observations of `indicator` for `country_code`.
    ///
    /// An empty vector means the provider answered but holds no data.
    fn fetch_observations(
        &self,
        indicator: &str,
        country_code: &str,
    ) -> Result<Vec<Observation>, DataError>;
}

/// Source of daily closing prices keyed by ticker symbol.
pub trait PriceProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch daily closes for `symbol` between `start` and `end` (inclusive), sorted by date.
    fn fetch_closes(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyClose>, DataError>;
}
