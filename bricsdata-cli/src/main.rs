//! BricsData CLI — collect BRICS macro indicators and commodity prices to CSV.
//!
//! Commands:
//! - `economic`: World Bank indicators for the five BRICS countries
//! - `commodities`: Yahoo Finance daily closes for crude oil, gold, copper and corn
//! - `all`: both, one after the other

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bricsdata_core::data::{WorldBankProvider, YahooProvider};
use bricsdata_core::domain::COMMODITIES;
use bricsdata_runner::{
    fetch_prices, final_report, format_head, save_commodities, save_dataset, summarize,
    CollectorConfig, IndicatorCollector, SeriesDiagnostics, StdoutProgress,
};

#[derive(Parser)]
#[command(
    name = "bricsdata",
    about = "BricsData CLI — BRICS economic indicators and commodity prices to CSV",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a TOML config file. Defaults apply for anything it leaves out.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output directory for CSV files. Overrides the config file.
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    /// Log level for diagnostics (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Collect World Bank indicators, save one CSV per indicator, print a summary.
    Economic,
    /// Download commodity closes, print diagnostics and save them to CSV.
    Commodities,
    /// Run both collections.
    All,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("bricsdata={0},bricsdata_core={0},bricsdata_runner={0}", cli.log_level)
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = match &cli.config {
        Some(path) => CollectorConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => CollectorConfig::default(),
    };
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Economic => run_economic(&config),
        Commands::Commodities => run_commodities(&config),
        Commands::All => {
            run_economic(&config)?;
            println!();
            run_commodities(&config)
        }
    }
}

fn run_economic(config: &CollectorConfig) -> Result<()> {
    println!("Starting comprehensive BRICS economic data collection...");

    let provider = WorldBankProvider::with_base_url(&config.worldbank_base_url);
    let progress = StdoutProgress::stdout();
    let collector = IndicatorCollector::new(&provider, &progress, config.throttle());

    let dataset = collector.collect_all();

    println!("\n--- Saving Economic Data ---");
    for (name, path) in save_dataset(&dataset, &config.output_dir)? {
        println!("✓ {name} saved to {}", path.display());
    }

    println!("\n--- Economic Data Summary ---");
    for summary in summarize(&dataset, collector.countries().len()) {
        println!("{summary}");
    }

    println!();
    for line in final_report(&dataset) {
        println!("{line}");
    }

    Ok(())
}

fn run_commodities(config: &CollectorConfig) -> Result<()> {
    println!("Testing connection to financial data sources...");
    println!("Fetching commodity prices from Yahoo Finance...");

    let provider = YahooProvider::with_base_url(&config.yahoo_base_url);
    let progress = StdoutProgress::stdout();
    let end = chrono::Local::now().date_naive();

    let series = fetch_prices(&provider, &progress, &COMMODITIES, config.start_date, end);

    if series.is_empty() {
        println!("❌ Failed to collect data");
        return Ok(());
    }

    print_diagnostics(&SeriesDiagnostics::from_series(&series));
    println!("\nFirst few rows:");
    print!("{}", format_head(&series, 5));

    let path = save_commodities(&series, &config.output_dir)?;
    println!("✓ Data saved to '{}'", path.display());

    Ok(())
}

fn print_diagnostics(diag: &SeriesDiagnostics) {
    println!("✅ Success! Collected {} days of data", diag.rows);
    println!("Commodities: {:?}", diag.columns);
    if let (Some(first), Some(last)) = (diag.first_date, diag.last_date) {
        println!("Date range: {first} to {last}");
    }
}
