//! Data providers and series alignment

pub mod join;
pub mod provider;
pub mod worldbank;
pub mod yahoo;

pub use join::{join_closes, CommoditySeries};
pub use provider::{DailyClose, DataError, IndicatorProvider, Observation, PriceProvider};
pub use worldbank::WorldBankProvider;
pub use yahoo::YahooProvider;
