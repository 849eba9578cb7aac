//! Multi-series date alignment.
//!
//! Given closing-price series for several commodities, align them on the union
//! of their dates and keep only dates where every series has a finite close.
//! There is no forward-fill: a gap in any one series removes the whole row.

use super::provider::DailyClose;
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Date-indexed table of closing prices, one column per commodity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommoditySeries {
    columns: Vec<String>,
    /// Each row holds one value per column, in column order.
    rows: BTreeMap<NaiveDate, Vec<f64>>,
}

impl CommoditySeries {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of complete rows (trading days).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.rows.keys().next().copied()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.rows.keys().next_back().copied()
    }

    /// Rows in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &[f64])> {
        self.rows.iter().map(|(d, v)| (*d, v.as_slice()))
    }

    /// The first `n` rows.
    pub fn head(&self, n: usize) -> impl Iterator<Item = (NaiveDate, &[f64])> {
        self.iter().take(n)
    }

    /// Closing price of `column` on `date`, if that row survived the join.
    pub fn price(&self, date: NaiveDate, column: &str) -> Option<f64> {
        let idx = self.columns.iter().position(|c| c == column)?;
        self.rows.get(&date).map(|row| row[idx])
    }
}

/// Outer-join named close series on date, then drop incomplete rows.
///
/// Columns appear in the order of `series`. If a name repeats a date, the last
/// close for that date wins.
pub fn join_closes(series: Vec<(String, Vec<DailyClose>)>) -> CommoditySeries {
    let mut all_dates = BTreeSet::new();
    for (_, closes) in &series {
        for c in closes {
            all_dates.insert(c.date);
        }
    }

    let lookups: Vec<HashMap<NaiveDate, f64>> = series
        .iter()
        .map(|(_, closes)| closes.iter().map(|c| (c.date, c.close)).collect())
        .collect();

    let mut rows = BTreeMap::new();
    for date in all_dates {
        let row: Option<Vec<f64>> = lookups
            .iter()
            .map(|m| m.get(&date).copied().filter(|v| v.is_finite()))
            .collect();
        if let Some(row) = row {
            rows.insert(date, row);
        }
    }

    CommoditySeries {
        columns: series.into_iter().map(|(name, _)| name).collect(),
        rows,
    }
}
