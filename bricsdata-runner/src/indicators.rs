//! Indicator collection: every (indicator, country) pair, one request each.
//!
//! Requests run strictly one after another with a fixed pause after each call.
//! A failed request never aborts the run: it is logged, reported through the
//! progress callback and counted as "no data" for that country.

use crate::progress::CollectProgress;
use bricsdata_core::data::IndicatorProvider;
use bricsdata_core::domain::{
    Country, EconomicDataset, Indicator, IndicatorRecord, BRICS, INDICATORS,
};
use std::time::Duration;

/// Sequential World Bank collector over a fixed country set.
pub struct IndicatorCollector<'a> {
    provider: &'a dyn IndicatorProvider,
    progress: &'a dyn CollectProgress,
    countries: Vec<Country>,
    indicators: Vec<Indicator>,
    throttle: Duration,
}

impl<'a> IndicatorCollector<'a> {
    /// Collector over the BRICS countries and the six stock indicators.
    pub fn new(
        provider: &'a dyn IndicatorProvider,
        progress: &'a dyn CollectProgress,
        throttle: Duration,
    ) -> Self {
        Self {
            provider,
            progress,
            countries: BRICS.to_vec(),
            indicators: INDICATORS.to_vec(),
            throttle,
        }
    }

    /// Restrict collection to a subset of indicators.
    pub fn with_indicators(mut self, indicators: Vec<Indicator>) -> Self {
        self.indicators = indicators;
        self
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// Fetch one indicator for one country.
    ///
    /// Any provider error (transport, non-200 status, malformed body) is
    /// downgraded to an empty result.
    pub fn fetch(&self, indicator: &Indicator, country: &Country) -> Vec<IndicatorRecord> {
        match self.provider.fetch_observations(indicator.code, country.code) {
            Ok(observations) => observations
                .into_iter()
                .map(|obs| IndicatorRecord::new(obs.year, obs.value, country, indicator.code))
                .collect(),
            Err(e) => {
                tracing::warn!(
                    provider = self.provider.name(),
                    indicator = indicator.code,
                    country = country.code,
                    error = %e,
                    "indicator request failed"
                );
                self.progress.on_fetch_error(indicator, country, &e);
                Vec::new()
            }
        }
    }

    /// Fetch one indicator for every country, pausing after each request.
    pub fn fetch_all_countries(&self, indicator: &Indicator) -> Vec<IndicatorRecord> {
        let mut all = Vec::new();
        for country in &self.countries {
            let records = self.fetch(indicator, country);
            self.progress.on_country_complete(country, records.len());
            all.extend(records);

            if !self.throttle.is_zero() {
                std::thread::sleep(self.throttle);
            }
        }
        all
    }

    /// Collect every indicator. Indicators with no data in any country are left out.
    pub fn collect_all(&self) -> EconomicDataset {
        let mut dataset = EconomicDataset::new();
        for indicator in &self.indicators {
            self.progress.on_indicator_start(indicator);
            let records = self.fetch_all_countries(indicator);
            let collected = !records.is_empty();
            self.progress.on_indicator_complete(indicator, collected);
            if collected {
                dataset.insert(*indicator, records);
            }
        }
        tracing::debug!(indicators = dataset.len(), "indicator collection finished");
        dataset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::SilentProgress;
    use bricsdata_core::data::{DataError, Observation};
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Canned responses keyed by (indicator code, country code); anything else is a 404.
    struct FakeProvider {
        responses: HashMap<(&'static str, &'static str), Vec<Observation>>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeProvider {
        fn new() -> Self {
            Self {
                responses: HashMap::new(),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn with(mut self, indicator: &'static str, country: &'static str, obs: &[(i32, f64)]) -> Self {
            self.responses.insert(
                (indicator, country),
                obs.iter().map(|&(year, value)| Observation { year, value }).collect(),
            );
            self
        }
    }

    impl IndicatorProvider for FakeProvider {
        fn name(&self) -> &str {
            "fake"
        }

        fn fetch_observations(
            &self,
            indicator: &str,
            country_code: &str,
        ) -> Result<Vec<Observation>, DataError> {
            self.calls.lock().unwrap().push(format!("{indicator}/{country_code}"));
            self.responses
                .iter()
                .find(|((i, c), _)| *i == indicator && *c == country_code)
                .map(|(_, obs)| obs.clone())
                .ok_or_else(|| DataError::Http {
                    status: 404,
                    url: format!("fake://{country_code}/{indicator}"),
                })
        }
    }

    #[test]
    fn fetch_tags_rows_with_country_and_indicator() {
        let provider = FakeProvider::new().with("NY.GDP.MKTP.CD", "BR", &[(2020, 5.1)]);
        let collector = IndicatorCollector::new(&provider, &SilentProgress, Duration::ZERO);

        let rows = collector.fetch(&INDICATORS[0], &BRICS[0]);
        assert_eq!(
            rows,
            vec![IndicatorRecord {
                year: 2020,
                value: 5.1,
                country: "Brazil".into(),
                country_code: "BR".into(),
                indicator: "NY.GDP.MKTP.CD".into(),
            }]
        );
    }

    #[test]
    fn fetch_error_is_empty_not_panic() {
        let provider = FakeProvider::new();
        let collector = IndicatorCollector::new(&provider, &SilentProgress, Duration::ZERO);
        assert!(collector.fetch(&INDICATORS[0], &BRICS[1]).is_empty());
    }

    #[test]
    fn failing_country_does_not_stop_the_rest() {
        // Russia answers 404; the other four still get requested.
        let provider = FakeProvider::new()
            .with("FP.CPI.TOTL.ZG", "BR", &[(2023, 4.6), (2022, 9.3)])
            .with("FP.CPI.TOTL.ZG", "IN", &[(2023, 5.6)])
            .with("FP.CPI.TOTL.ZG", "CN", &[])
            .with("FP.CPI.TOTL.ZG", "ZA", &[(2023, 6.1)]);
        let collector = IndicatorCollector::new(&provider, &SilentProgress, Duration::ZERO);

        let rows = collector.fetch_all_countries(&INDICATORS[2]);
        assert_eq!(rows.len(), 4);
        assert_eq!(provider.calls.lock().unwrap().len(), 5);
        assert!(rows.iter().all(|r| r.country_code != "RU"));
        // Country order, then API order within a country.
        assert_eq!(rows[0].year, 2023);
        assert_eq!(rows[1].year, 2022);
        assert_eq!(rows[2].country, "India");
    }

    #[test]
    fn collect_all_skips_indicators_without_data() {
        let provider = FakeProvider::new()
            .with("NY.GDP.MKTP.CD", "CN", &[(2023, 1.78e13)])
            .with("FI.RES.TOTL.CD", "ZA", &[(2023, 6.2e10)]);
        let collector = IndicatorCollector::new(&provider, &SilentProgress, Duration::ZERO);

        let dataset = collector.collect_all();
        let names: Vec<_> = dataset.iter().map(|(i, _)| i.name).collect();
        assert_eq!(names, vec!["gdp", "reserves"]);
        assert_eq!(provider.calls.lock().unwrap().len(), 6 * 5);
    }

    #[test]
    fn pauses_after_every_country_request() {
        let provider = FakeProvider::new().with("NY.GDP.MKTP.CD", "BR", &[(2020, 5.1)]);
        let throttle = Duration::from_millis(20);
        let collector = IndicatorCollector::new(&provider, &SilentProgress, throttle);

        let started = std::time::Instant::now();
        collector.fetch_all_countries(&INDICATORS[0]);
        let elapsed = started.elapsed();

        assert!(
            elapsed >= throttle * BRICS.len() as u32,
            "expected at least {:?}, took {elapsed:?}",
            throttle * BRICS.len() as u32
        );
    }

    #[test]
    fn with_indicators_limits_requests() {
        let provider = FakeProvider::new();
        let collector = IndicatorCollector::new(&provider, &SilentProgress, Duration::ZERO)
            .with_indicators(vec![INDICATORS[1]]);

        let dataset = collector.collect_all();
        assert!(dataset.is_empty());
        let calls = provider.calls.lock().unwrap();
        assert_eq!(calls.len(), 5);
        assert!(calls.iter().all(|c| c.starts_with("NY.GDP.MKTP.KD.ZG/")));
    }
}
