// Engine main entry point: estimates a photovoltaic system for one monthly consumption.
use anyhow::Result;
use clap::Parser;
use engine::config::settings::{EngineSettings, OutputFormat};
use engine::services::{report, validation};
use engine::{CalculationService, MemoryPreferences, SettingsStore};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "engine")]
#[command(about = "Estimate size, cost and payback of a residential photovoltaic system", long_about = None)]
struct Cli {
    /// Monthly consumption in kWh, with ',' or '.' as decimal separator (e.g. 450 or 450,5)
    #[arg(allow_hyphen_values = true)]
    consumption: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = EngineSettings::from_env()?;

    // RUST_LOG wins over SOLAR_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_filter)))
        .with_writer(std::io::stderr)
        .init();

    info!(output = ?settings.output, precision = ?settings.precision, "Starting solar calculator engine");

    let store = Arc::new(SettingsStore::with_precision(MemoryPreferences::new(), settings.precision));
    let applied = settings.apply_overrides(&store)?;
    info!(applied, "Unit constants ready");

    let service = CalculationService::new(store);
    let result = validation::calculate_checked(&service, &cli.consumption)?;

    match settings.output {
        OutputFormat::Text => println!("{}", report::summary(&result)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_takes_consumption_as_text() {
        let cli = Cli::try_parse_from(["engine", "450,5"]).unwrap();
        assert_eq!(cli.consumption, "450,5");
    }

    #[test]
    fn test_cli_passes_negative_values_to_validation() {
        let cli = Cli::try_parse_from(["engine", "-10"]).unwrap();
        assert_eq!(cli.consumption, "-10");
    }

    #[test]
    fn test_cli_requires_consumption() {
        assert!(Cli::try_parse_from(["engine"]).is_err());
    }
}
