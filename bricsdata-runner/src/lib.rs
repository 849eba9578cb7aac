//! BricsData Runner — collection drivers built on `bricsdata-core`.
//!
//! This crate provides:
//! - Sequential indicator collection over the BRICS countries
//! - Commodity price download and date join
//! - Progress reporting (stdout status lines or silent)
//! - TOML configuration with stock defaults
//! - CSV export and run summaries

pub mod commodities;
pub mod config;
pub mod export;
pub mod indicators;
pub mod progress;
pub mod summary;

pub use commodities::fetch_prices;
pub use config::{CollectorConfig, ConfigError};
pub use export::{save_commodities, save_dataset};
pub use indicators::IndicatorCollector;
pub use progress::{CollectProgress, LineProgress, SilentProgress, StdoutProgress};
pub use summary::{final_report, format_head, summarize, IndicatorSummary, SeriesDiagnostics};
