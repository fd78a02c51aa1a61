use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "stormscout",
    version,
    about = "Storm detection and service-demand forecasting engine"
)]
pub struct Cli {
    /// Scanner configuration file (JSON); falls back to STORMSCOUT_* env vars
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Run a single sweep and exit
    #[arg(long)]
    pub one_shot: bool,

    /// Seconds between monitoring sweeps
    #[arg(long, default_value_t = 10_800)]
    pub scan_interval: u64,

    /// Restrict the sweep to one monitored city
    #[arg(long)]
    pub city: Option<String>,

    /// Weather provider base URL override
    #[arg(long)]
    pub provider_url: Option<String>,

    /// Append storm events and observations to this JSONL file
    #[arg(long, default_value = "storm_events.jsonl")]
    pub events_out: PathBuf,
}
