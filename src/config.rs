use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::provider::DEFAULT_BASE_URL;
use crate::domain::model::Location;
use crate::roster;

pub const DEFAULT_FORECAST_POINTS: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnitSystem {
    // Fahrenheit/mph throughout; the demand thresholds are calibrated to it.
    #[default]
    Imperial,
}

impl UnitSystem {
    #[must_use]
    pub fn query_value(self) -> &'static str {
        match self {
            UnitSystem::Imperial => "imperial",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerConfig {
    #[serde(default = "default_base_url")]
    pub provider_base_url: String,
    pub api_key: String,
    #[serde(default)]
    pub unit_system: UnitSystem,
    #[serde(default = "roster::default_locations")]
    pub monitored_locations: Vec<Location>,
    #[serde(default = "default_forecast_points")]
    pub forecast_point_count: usize,
}

impl ScannerConfig {
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("STORMSCOUT_API_KEY")
            .context("STORMSCOUT_API_KEY is not set and no config file was given")?;
        let provider_base_url =
            std::env::var("STORMSCOUT_BASE_URL").unwrap_or_else(|_| default_base_url());

        Ok(Self {
            provider_base_url,
            api_key,
            unit_system: UnitSystem::Imperial,
            monitored_locations: roster::default_locations(),
            forecast_point_count: DEFAULT_FORECAST_POINTS,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading scanner config {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("parsing scanner config {}", path.display()))
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_forecast_points() -> usize {
    DEFAULT_FORECAST_POINTS
}
