pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod roster;
pub mod scan;
pub mod store;

use std::time::Duration;

use anyhow::{Context, Result, ensure};
use tracing::info;

use cli::Cli;
use config::ScannerConfig;
use scan::MonitoringScanner;
use store::{JsonlEventStore, StormEventStore};

pub async fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => ScannerConfig::load(path)?,
        None => ScannerConfig::from_env()?,
    };

    if let Some(url) = &cli.provider_url {
        config.provider_base_url = url.clone();
    }
    if let Some(city) = &cli.city {
        config
            .monitored_locations
            .retain(|location| location.city.eq_ignore_ascii_case(city));
        ensure!(
            !config.monitored_locations.is_empty(),
            "no monitored location named {city}"
        );
    }

    let store = JsonlEventStore::create(&cli.events_out)
        .with_context(|| format!("opening event log {}", cli.events_out.display()))?;
    let scanner = MonitoringScanner::new(config, store);

    if cli.one_shot {
        run_sweep(&scanner).await;
        return Ok(());
    }

    let mut ticker = tokio::time::interval(Duration::from_secs(cli.scan_interval.max(1)));
    loop {
        tokio::select! {
            _ = ticker.tick() => run_sweep(&scanner).await,
            _ = tokio::signal::ctrl_c() => {
                info!("shutting down");
                return Ok(());
            }
        }
    }
}

async fn run_sweep<S: StormEventStore>(scanner: &MonitoringScanner<S>) {
    let outcomes = scanner.scan_all().await;
    let events: usize = outcomes
        .iter()
        .filter_map(|scan| scan.outcome.as_ref().ok())
        .map(Vec::len)
        .sum();
    let failures = outcomes.iter().filter(|scan| scan.outcome.is_err()).count();
    info!(
        locations = outcomes.len(),
        events, failures, "sweep complete"
    );
}
