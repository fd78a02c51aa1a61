#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use stormscout::config::{ScannerConfig, UnitSystem};
use stormscout::domain::classify::classify;
use stormscout::domain::model::{ClassifiedSample, Condition, Location, WeatherSample};

pub const BASE_EPOCH: i64 = 1_754_000_000;

pub fn base_time() -> DateTime<Utc> {
    DateTime::from_timestamp(BASE_EPOCH, 0).expect("valid base epoch")
}

pub fn austin() -> Location {
    Location::new("Austin", "TX", 30.2672, -97.7431)
}

pub fn dallas() -> Location {
    Location::new("Dallas", "TX", 32.7767, -96.797)
}

pub fn tulsa() -> Location {
    Location::new("Tulsa", "OK", 36.154, -95.9928)
}

pub fn scanner_config(base_url: &str, locations: Vec<Location>) -> ScannerConfig {
    ScannerConfig {
        provider_base_url: base_url.to_string(),
        api_key: "test-key".to_string(),
        unit_system: UnitSystem::Imperial,
        monitored_locations: locations,
        forecast_point_count: 8,
    }
}

pub fn sample(hour: i64, condition: Condition, wind_mph: f64, temperature_f: f64) -> WeatherSample {
    WeatherSample {
        location: austin(),
        observed_at: base_time() + Duration::hours(hour),
        condition,
        description: condition.label().to_ascii_lowercase(),
        temperature_f,
        humidity_pct: 60.0,
        pressure_hpa: 1010.0,
        wind_speed_mph: wind_mph,
        wind_direction_deg: 200.0,
        wind_gust_mph: None,
        precip_last_hour_in: 0.0,
    }
}

pub fn classified(hour: i64, condition: Condition, wind_mph: f64) -> ClassifiedSample {
    classify(sample(hour, condition, wind_mph, 70.0))
}

// Hourly forecast payload in the provider's wire shape.
pub fn forecast_payload(points: &[(&str, f64)]) -> serde_json::Value {
    let list: Vec<_> = points
        .iter()
        .enumerate()
        .map(|(idx, (condition, wind_mph))| point_payload(idx as i64, condition, *wind_mph))
        .collect();
    serde_json::json!({ "list": list })
}

pub fn point_payload(hour: i64, condition: &str, wind_mph: f64) -> serde_json::Value {
    serde_json::json!({
        "dt": BASE_EPOCH + hour * 3600,
        "weather": [{"main": condition, "description": condition.to_ascii_lowercase()}],
        "main": {"temp": 70.0, "humidity": 60.0, "pressure": 1010.0},
        "wind": {"speed": wind_mph, "deg": 200.0}
    })
}
