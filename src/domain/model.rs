use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub state: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(
        city: impl Into<String>,
        state: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            city: city.into(),
            state: Some(state.into()),
            latitude,
            longitude,
        }
    }

    pub fn from_coords(latitude: f64, longitude: f64) -> Self {
        Self {
            city: format!("{latitude:.4}, {longitude:.4}"),
            state: None,
            latitude,
            longitude,
        }
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        match &self.state {
            Some(state) => format!("{}, {}", self.city, state),
            None => self.city.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    Thunderstorm,
    Tornado,
    Squall,
    Drizzle,
    Rain,
    Snow,
    Clear,
    Clouds,
    Fog,
    Other,
}

impl Condition {
    #[must_use]
    pub fn from_provider(main: &str) -> Self {
        match main {
            "Thunderstorm" => Condition::Thunderstorm,
            "Tornado" => Condition::Tornado,
            "Squall" => Condition::Squall,
            "Drizzle" => Condition::Drizzle,
            "Rain" => Condition::Rain,
            "Snow" => Condition::Snow,
            "Clear" => Condition::Clear,
            "Clouds" => Condition::Clouds,
            "Mist" | "Smoke" | "Haze" | "Fog" | "Dust" | "Sand" | "Ash" => Condition::Fog,
            _ => Condition::Other,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Condition::Thunderstorm => "Thunderstorm",
            Condition::Tornado => "Tornado",
            Condition::Squall => "Squall",
            Condition::Drizzle => "Drizzle",
            Condition::Rain => "Rain",
            Condition::Snow => "Snow",
            Condition::Clear => "Clear",
            Condition::Clouds => "Clouds",
            Condition::Fog => "Fog",
            Condition::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherSample {
    pub location: Location,
    pub observed_at: DateTime<Utc>,
    pub condition: Condition,
    pub description: String,
    pub temperature_f: f64,
    pub humidity_pct: f64,
    pub pressure_hpa: f64,
    pub wind_speed_mph: f64,
    pub wind_direction_deg: f64,
    pub wind_gust_mph: Option<f64>,
    pub precip_last_hour_in: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SeverityTier {
    Low,
    Medium,
    High,
    Severe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StormKind {
    Tornado,
    Thunderstorm,
    #[serde(rename = "High Wind Event")]
    HighWind,
    #[serde(rename = "Wind Advisory")]
    WindAdvisory,
    #[serde(rename = "Weather Event")]
    General,
}

impl StormKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            StormKind::Tornado => "Tornado",
            StormKind::Thunderstorm => "Thunderstorm",
            StormKind::HighWind => "High Wind Event",
            StormKind::WindAdvisory => "Wind Advisory",
            StormKind::General => "Weather Event",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedSample {
    pub sample: WeatherSample,
    pub is_storm: bool,
    pub storm_kind: Option<StormKind>,
    pub severity: SeverityTier,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StormPeriod {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub max_wind_mph: f64,
    pub kind: StormKind,
    pub severity: SeverityTier,
    pub samples: Vec<ClassifiedSample>,
}

impl StormPeriod {
    #[must_use]
    pub fn duration_hours(&self) -> f64 {
        (self.end_time - self.start_time).num_seconds() as f64 / 3600.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DamageLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DemandLevel {
    Low,
    Medium,
    High,
    Extreme,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StormEvent {
    pub id: Uuid,
    pub kind: StormKind,
    pub severity: SeverityTier,
    pub affected_states: BTreeSet<String>,
    pub affected_cities: BTreeSet<String>,
    pub affected_zip_codes: BTreeSet<String>,
    pub center_latitude: f64,
    pub center_longitude: f64,
    pub impact_radius_miles: f64,
    pub max_wind_speed_mph: f64,
    pub expected_duration_hours: f64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub predicted_damage: DamageLevel,
    pub predicted_service_demand: DemandLevel,
}
