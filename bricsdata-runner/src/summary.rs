//! Run summaries for the CLI: per-indicator coverage and commodity diagnostics.

use bricsdata_core::data::CommoditySeries;
use bricsdata_core::domain::{EconomicDataset, IndicatorRecord};
use chrono::NaiveDate;
use std::collections::HashSet;
use std::fmt;

/// Coverage of one indicator across the country set.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSummary {
    pub name: String,
    /// Distinct countries with at least one record.
    pub countries_with_data: usize,
    /// Size of the country set the run targeted.
    pub countries_total: usize,
    pub total_records: usize,
    pub latest_year: Option<i32>,
}

impl IndicatorSummary {
    pub fn from_records(name: &str, records: &[IndicatorRecord], countries_total: usize) -> Self {
        let countries: HashSet<&str> = records.iter().map(|r| r.country.as_str()).collect();
        Self {
            name: name.to_string(),
            countries_with_data: countries.len(),
            countries_total,
            total_records: records.len(),
            latest_year: records.iter().map(|r| r.year).max(),
        }
    }
}

impl fmt::Display for IndicatorSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}/{} countries, {} records",
            self.name.to_uppercase(),
            self.countries_with_data,
            self.countries_total,
            self.total_records
        )?;
        if let Some(year) = self.latest_year {
            write!(f, ", up to {year}")?;
        }
        Ok(())
    }
}

/// Summaries for every indicator that holds data, in dataset order.
pub fn summarize(dataset: &EconomicDataset, countries_total: usize) -> Vec<IndicatorSummary> {
    dataset
        .iter()
        .filter(|(_, records)| !records.is_empty())
        .map(|(indicator, records)| {
            IndicatorSummary::from_records(indicator.name, records, countries_total)
        })
        .collect()
}

/// Closing lines of an economic run: a completion banner when anything was
/// collected, a failure notice otherwise.
pub fn final_report(dataset: &EconomicDataset) -> Vec<String> {
    if dataset.is_empty() {
        vec!["❌ No data was collected. Please check your internet connection.".to_string()]
    } else {
        vec![
            "🎉 BRICS economic data collection completed!".to_string(),
            format!("📊 Collected {} economic indicators", dataset.non_empty_count()),
        ]
    }
}

/// Shape of the joined commodity table.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesDiagnostics {
    pub rows: usize,
    pub columns: Vec<String>,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}

impl SeriesDiagnostics {
    pub fn from_series(series: &CommoditySeries) -> Self {
        Self {
            rows: series.len(),
            columns: series.columns().to_vec(),
            first_date: series.first_date(),
            last_date: series.last_date(),
        }
    }
}

/// Fixed-width table of the first `n` rows, for a quick look at the data.
pub fn format_head(series: &CommoditySeries, n: usize) -> String {
    let mut out = format!("{:<12}", "Date");
    for col in series.columns() {
        out.push_str(&format!(" {col:>12}"));
    }
    out.push('\n');

    for (date, row) in series.head(n) {
        out.push_str(&format!("{:<12}", date.to_string()));
        for v in row {
            out.push_str(&format!(" {v:>12.4}"));
        }
        out.push('\n');
    }
    out
}
