//! Progress callbacks for the collectors.
//!
//! Collectors never print directly; they report through `CollectProgress` so
//! the CLI gets the familiar status lines and tests stay quiet.

use bricsdata_core::data::DataError;
use bricsdata_core::domain::{Commodity, Country, Indicator};
use std::fmt;
use std::io::{self, Write};
use std::sync::Mutex;

/// Progress callback for indicator and commodity collection.
pub trait CollectProgress: Send + Sync {
    /// Called before the countries of an indicator are fetched.
    fn on_indicator_start(&self, indicator: &Indicator);

    /// Called when a single (indicator, country) request failed and was downgraded to no data.
    fn on_fetch_error(&self, indicator: &Indicator, country: &Country, error: &DataError);

    /// Called after each country with the number of non-null records it produced.
    fn on_country_complete(&self, country: &Country, records: usize);

    /// Called when an indicator is done; `collected` is false when no country had data.
    fn on_indicator_complete(&self, indicator: &Indicator, collected: bool);

    /// Called before a commodity series is downloaded.
    fn on_commodity_start(&self, commodity: &Commodity);

    /// Called when a commodity download failed or returned nothing.
    fn on_commodity_error(&self, commodity: &Commodity, error: &DataError);

    /// Called after the join with the number of complete rows (0 = nothing received).
    fn on_commodities_complete(&self, rows: usize);
}

/// Status-line reporter writing one line per event to `W`.
pub struct LineProgress<W> {
    out: Mutex<W>,
}

/// The reporter the CLI uses.
pub type StdoutProgress = LineProgress<io::Stdout>;

impl LineProgress<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> LineProgress<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }

    fn line(&self, args: fmt::Arguments<'_>) {
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        // Status lines are best effort; a closed stdout must not abort collection.
        let _ = writeln!(out, "{args}");
    }
}

impl<W: Write + Send> CollectProgress for LineProgress<W> {
    fn on_indicator_start(&self, indicator: &Indicator) {
        self.line(format_args!(
            "\n--- Collecting {}: {} ---",
            indicator.name.to_uppercase(),
            indicator.description
        ));
        self.line(format_args!("Fetching {} from World Bank...", indicator.name));
    }

    fn on_fetch_error(&self, indicator: &Indicator, country: &Country, error: &DataError) {
        self.line(format_args!(
            "✗ Error fetching {} for {}: {error}",
            indicator.code, country.name
        ));
    }

    fn on_country_complete(&self, country: &Country, records: usize) {
        if records > 0 {
            self.line(format_args!("✓ {} - {records} years of data", country.name));
        } else {
            self.line(format_args!("✗ {} - No data available", country.name));
        }
    }

    fn on_indicator_complete(&self, indicator: &Indicator, collected: bool) {
        if collected {
            self.line(format_args!("✅ {} collected successfully", indicator.name));
        } else {
            self.line(format_args!("❌ Failed to collect {}", indicator.name));
        }
    }

    fn on_commodity_start(&self, commodity: &Commodity) {
        self.line(format_args!("Downloading {}...", commodity.name));
    }

    fn on_commodity_error(&self, commodity: &Commodity, error: &DataError) {
        self.line(format_args!(
            "✗ {} ({}): {error}",
            commodity.name, commodity.symbol
        ));
    }

    fn on_commodities_complete(&self, rows: usize) {
        if rows > 0 {
            self.line(format_args!("✓ Commodity prices fetched successfully"));
        } else {
            self.line(format_args!("✗ No data received"));
        }
    }
}

/// Reporter that discards everything.
pub struct SilentProgress;

impl CollectProgress for SilentProgress {
    fn on_indicator_start(&self, _indicator: &Indicator) {}
    fn on_fetch_error(&self, _indicator: &Indicator, _country: &Country, _error: &DataError) {}
    fn on_country_complete(&self, _country: &Country, _records: usize) {}
    fn on_indicator_complete(&self, _indicator: &Indicator, _collected: bool) {}
    fn on_commodity_start(&self, _commodity: &Commodity) {}
    fn on_commodity_error(&self, _commodity: &Commodity, _error: &DataError) {}
    fn on_commodities_complete(&self, _rows: usize) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use bricsdata_core::domain::{BRICS, COMMODITIES, INDICATORS};

    fn captured(progress: LineProgress<Vec<u8>>) -> Vec<String> {
        String::from_utf8(progress.into_inner())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn country_lines() {
        let progress = LineProgress::new(Vec::new());
        progress.on_country_complete(&BRICS[0], 12);
        progress.on_country_complete(&BRICS[1], 0);

        assert_eq!(
            captured(progress),
            vec!["✓ Brazil - 12 years of data", "✗ Russia - No data available"]
        );
    }

    #[test]
    fn indicator_lines() {
        let progress = LineProgress::new(Vec::new());
        progress.on_indicator_start(&INDICATORS[0]);
        progress.on_indicator_complete(&INDICATORS[0], true);
        progress.on_indicator_complete(&INDICATORS[3], false);

        assert_eq!(
            captured(progress),
            vec![
                "",
                "--- Collecting GDP: GDP (current US$) ---",
                "Fetching gdp from World Bank...",
                "✅ gdp collected successfully",
                "❌ Failed to collect trade",
            ]
        );
    }

    #[test]
    fn fetch_error_names_code_and_country() {
        let progress = LineProgress::new(Vec::new());
        let err = DataError::Http {
            status: 404,
            url: "http://x".into(),
        };
        progress.on_fetch_error(&INDICATORS[2], &BRICS[3], &err);

        let lines = captured(progress);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("✗ Error fetching FP.CPI.TOTL.ZG for China: "));
    }

    #[test]
    fn commodity_lines() {
        let progress = LineProgress::new(Vec::new());
        progress.on_commodity_start(&COMMODITIES[1]);
        progress.on_commodities_complete(0);
        progress.on_commodities_complete(250);

        assert_eq!(
            captured(progress),
            vec![
                "Downloading Gold...",
                "✗ No data received",
                "✓ Commodity prices fetched successfully",
            ]
        );
    }
}
