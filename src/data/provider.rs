use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::config::UnitSystem;
use crate::domain::model::{Condition, Location, WeatherSample};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("weather request failed")]
    Request(#[from] reqwest::Error),
    #[error("weather response missing {0}")]
    Malformed(&'static str),
}

#[derive(Debug, Clone)]
pub struct ProviderClient {
    client: Client,
    base_url: String,
    api_key: String,
    unit_system: UnitSystem,
}

impl ProviderClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, unit_system: UnitSystem) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .expect("reqwest client"),
            base_url: base_url.into(),
            api_key: api_key.into(),
            unit_system,
        }
    }

    pub async fn fetch_current(&self, location: &Location) -> Result<WeatherSample, ProviderError> {
        let payload: PointPayload = self
            .client
            .get(format!("{}/weather", self.base_url))
            .query(&self.location_query(location))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        parse_point(payload, location)
    }

    pub async fn fetch_forecast(
        &self,
        location: &Location,
        point_count: usize,
    ) -> Result<Vec<WeatherSample>, ProviderError> {
        let payload: ForecastPayload = self
            .client
            .get(format!("{}/forecast", self.base_url))
            .query(&self.location_query(location))
            .query(&[("cnt", point_count.to_string())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if payload.list.is_empty() {
            return Err(ProviderError::Malformed("forecast list"));
        }

        // Points without a usable condition block are dropped rather than
        // failing the whole window.
        Ok(payload
            .list
            .into_iter()
            .filter_map(|point| parse_point(point, location).ok())
            .collect())
    }

    fn location_query(&self, location: &Location) -> [(&'static str, String); 4] {
        [
            ("lat", location.latitude.to_string()),
            ("lon", location.longitude.to_string()),
            ("units", self.unit_system.query_value().to_string()),
            ("appid", self.api_key.clone()),
        ]
    }
}

fn parse_point(point: PointPayload, location: &Location) -> Result<WeatherSample, ProviderError> {
    let observed_at = DateTime::<Utc>::from_timestamp(point.dt, 0)
        .ok_or(ProviderError::Malformed("observation timestamp"))?;
    let condition = point
        .weather
        .into_iter()
        .next()
        .ok_or(ProviderError::Malformed("weather conditions"))?;

    Ok(WeatherSample {
        location: location.clone(),
        observed_at,
        condition: Condition::from_provider(&condition.main),
        description: condition.description,
        temperature_f: point.main.temp,
        humidity_pct: point.main.humidity,
        pressure_hpa: point.main.pressure,
        wind_speed_mph: point.wind.speed,
        wind_direction_deg: point.wind.deg,
        wind_gust_mph: point.wind.gust,
        precip_last_hour_in: last_hour_in(&point.rain) + last_hour_in(&point.snow),
    })
}

fn last_hour_in(block: &Option<PrecipPayload>) -> f64 {
    block.as_ref().and_then(|b| b.last_hour).unwrap_or(0.0)
}

#[derive(Debug, Deserialize)]
struct ForecastPayload {
    list: Vec<PointPayload>,
}

#[derive(Debug, Deserialize)]
struct PointPayload {
    dt: i64,
    weather: Vec<ConditionPayload>,
    main: MainPayload,
    wind: WindPayload,
    #[serde(default)]
    rain: Option<PrecipPayload>,
    #[serde(default)]
    snow: Option<PrecipPayload>,
}

#[derive(Debug, Deserialize)]
struct ConditionPayload {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct MainPayload {
    temp: f64,
    humidity: f64,
    pressure: f64,
}

#[derive(Debug, Deserialize)]
struct WindPayload {
    speed: f64,
    #[serde(default)]
    deg: f64,
    #[serde(default)]
    gust: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct PrecipPayload {
    #[serde(rename = "1h", default)]
    last_hour: Option<f64>,
}
