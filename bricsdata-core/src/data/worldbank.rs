//! World Bank indicators API provider.
//!
//! Fetches annual series from the v2 REST API. The response body is a
//! two-element JSON array: `[metadata, [observation, ...]]`. Observations with
//! a null `value` are dropped; the remaining ones keep the API's order
//! (newest year first).

use super::provider::{DataError, IndicatorProvider, Observation};
use serde_json::Value;

/// Default API root. Plain HTTP, as published in the World Bank docs.
pub const DEFAULT_BASE_URL: &str = "http://api.worldbank.org/v2";

/// Page size requested per call; enough for every annual series since 1960.
pub const PER_PAGE: u32 = 100;

/// World Bank data provider.
pub struct WorldBankProvider {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl WorldBankProvider {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the provider at a different API root (used by tests and mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Build the indicator URL for one country.
    pub fn indicator_url(&self, indicator: &str, country_code: &str) -> String {
        format!(
            "{}/country/{country_code}/indicator/{indicator}?format=json&per_page={PER_PAGE}",
            self.base_url
        )
    }

    /// Parse a `[metadata, records]` body into observations.
    ///
    /// A body with fewer than two elements, or whose second element is null or
    /// an empty array, holds no data and yields an empty vector. A `date` that
    /// is not an integer year fails the whole response.
    pub fn parse_observations(json: &Value) -> Result<Vec<Observation>, DataError> {
        let outer = json.as_array().ok_or_else(|| {
            DataError::ResponseFormat("expected a top-level JSON array".into())
        })?;

        let records = match outer.get(1) {
            None | Some(Value::Null) => return Ok(Vec::new()),
            Some(Value::Array(records)) => records,
            Some(other) => {
                return Err(DataError::ResponseFormat(format!(
                    "expected an array of observations, got {other}"
                )))
            }
        };

        let mut observations = Vec::with_capacity(records.len());
        for entry in records {
            let value = match &entry["value"] {
                Value::Null => continue,
                Value::Number(n) => n.as_f64(),
                // Some series serialise values as strings.
                Value::String(s) => s.trim().parse::<f64>().ok(),
                _ => None,
            }
            .ok_or_else(|| {
                DataError::ResponseFormat(format!("non-numeric value: {}", entry["value"]))
            })?;

            let year = entry["date"]
                .as_str()
                .and_then(|d| d.trim().parse::<i32>().ok())
                .ok_or_else(|| {
                    DataError::ResponseFormat(format!("invalid year: {}", entry["date"]))
                })?;

            observations.push(Observation { year, value });
        }

        Ok(observations)
    }
}

impl Default for WorldBankProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl IndicatorProvider for WorldBankProvider {
    fn name(&self) -> &str {
        "worldbank"
    }

    fn fetch_observations(
        &self,
        indicator: &str,
        country_code: &str,
    ) -> Result<Vec<Observation>, DataError> {
        let url = self.indicator_url(indicator, country_code);
        tracing::debug!(%url, "requesting World Bank indicator");

        let resp = self.client.get(&url).send()?;
        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            return Err(DataError::Http {
                status: status.as_u16(),
                url,
            });
        }

        let json: Value = resp.json()?;
        Self::parse_observations(&json)
    }
}
