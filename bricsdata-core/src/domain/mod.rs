//! Domain types for BricsData

pub mod record;
pub mod universe;

pub use record::{EconomicDataset, IndicatorRecord};
pub use universe::{Commodity, Country, Indicator, BRICS, COMMODITIES, INDICATORS};
