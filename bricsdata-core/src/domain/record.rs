//! IndicatorRecord: one (country, year) observation of a World Bank series.

use super::universe::{Country, Indicator};
use serde::{Deserialize, Serialize};

/// One row of an indicator table.
///
/// `indicator` holds the provider code (e.g. `NY.GDP.MKTP.CD`), not the short name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRecord {
    pub year: i32,
    pub value: f64,
    pub country: String,
    pub country_code: String,
    pub indicator: String,
}

impl IndicatorRecord {
    pub fn new(year: i32, value: f64, country: &Country, indicator_code: &str) -> Self {
        Self {
            year,
            value,
            country: country.name.to_string(),
            country_code: country.code.to_string(),
            indicator: indicator_code.to_string(),
        }
    }
}

/// Indicator short name → records across all countries, in collection order.
///
/// Indicators are kept in insertion order so output and summaries follow the
/// order in which series were collected.
#[derive(Debug, Clone, Default)]
pub struct EconomicDataset {
    entries: Vec<(Indicator, Vec<IndicatorRecord>)>,
}

impl EconomicDataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the records for an indicator.
    pub fn insert(&mut self, indicator: Indicator, records: Vec<IndicatorRecord>) {
        match self.entries.iter_mut().find(|(i, _)| i.name == indicator.name) {
            Some(entry) => entry.1 = records,
            None => self.entries.push((indicator, records)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Indicator, &[IndicatorRecord])> {
        self.entries.iter().map(|(i, r)| (i, r.as_slice()))
    }

    /// Number of indicators that hold at least one record.
    pub fn non_empty_count(&self) -> usize {
        self.entries.iter().filter(|(_, r)| !r.is_empty()).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
