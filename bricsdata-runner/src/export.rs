//! CSV export for indicator tables and the commodity price table.
//!
//! Every run overwrites the previous files:
//! - `{dir}/brics_{indicator}.csv`: year, value, country, country_code, indicator
//! - `{dir}/commodity_prices.csv`: Date plus one column per commodity

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bricsdata_core::data::CommoditySeries;
use bricsdata_core::domain::{EconomicDataset, IndicatorRecord};

pub const INDICATOR_COLUMNS: [&str; 5] = ["year", "value", "country", "country_code", "indicator"];

pub const COMMODITY_FILE: &str = "commodity_prices.csv";

/// File name for an indicator table.
pub fn indicator_file_name(indicator_name: &str) -> String {
    format!("brics_{indicator_name}.csv")
}

// ─── CSV rendering ──────────────────────────────────────────────────

/// Render indicator records as CSV, one row per record in the given order.
pub fn export_indicator_csv(records: &[IndicatorRecord]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(INDICATOR_COLUMNS)?;

    for r in records {
        wtr.write_record([
            &r.year.to_string(),
            &r.value.to_string(),
            &r.country,
            &r.country_code,
            &r.indicator,
        ])?;
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

/// Render the joined commodity table as CSV with a leading `Date` column.
pub fn export_commodity_csv(series: &CommoditySeries) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    let mut header = vec!["Date".to_string()];
    header.extend(series.columns().iter().cloned());
    wtr.write_record(&header)?;

    for (date, row) in series.iter() {
        let mut record = vec![date.to_string()];
        record.extend(row.iter().map(|v| v.to_string()));
        wtr.write_record(&record)?;
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

// ─── Files ──────────────────────────────────────────────────────────

/// Write one CSV per indicator with data. Returns (indicator name, path) per file written.
pub fn save_dataset(dataset: &EconomicDataset, output_dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output dir: {}", output_dir.display()))?;

    let mut written = Vec::new();
    for (indicator, records) in dataset.iter() {
        if records.is_empty() {
            continue;
        }
        let path = output_dir.join(indicator_file_name(indicator.name));
        let csv = export_indicator_csv(records)?;
        std::fs::write(&path, csv)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!(indicator = indicator.name, path = %path.display(), rows = records.len(), "indicator saved");
        written.push((indicator.name.to_string(), path));
    }
    Ok(written)
}

/// Write the commodity table to `commodity_prices.csv`.
pub fn save_commodities(series: &CommoditySeries, output_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output dir: {}", output_dir.display()))?;

    let path = output_dir.join(COMMODITY_FILE);
    let csv = export_commodity_csv(series)?;
    std::fs::write(&path, csv).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), rows = series.len(), "commodity prices saved");
    Ok(path)
}
