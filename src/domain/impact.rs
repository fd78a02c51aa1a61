use std::collections::BTreeSet;

use uuid::Uuid;

use crate::domain::model::{
    DamageLevel, DemandLevel, Location, SeverityTier, StormEvent, StormPeriod,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactForecast {
    pub impact_radius_miles: f64,
    pub predicted_damage: DamageLevel,
    pub predicted_service_demand: DemandLevel,
}

#[must_use]
pub fn forecast(period: &StormPeriod) -> ImpactForecast {
    ImpactForecast {
        impact_radius_miles: impact_radius_miles(period.severity),
        predicted_damage: predicted_damage(period),
        predicted_service_demand: predicted_service_demand(period),
    }
}

// Radius is keyed on severity alone; wind feeds in only through the tier.
fn impact_radius_miles(severity: SeverityTier) -> f64 {
    match severity {
        SeverityTier::Severe => 50.0,
        SeverityTier::High => 30.0,
        SeverityTier::Medium => 15.0,
        SeverityTier::Low => 10.0,
    }
}

fn predicted_damage(period: &StormPeriod) -> DamageLevel {
    if period.max_wind_mph > 50.0 || period.severity == SeverityTier::Severe {
        DamageLevel::High
    } else if period.max_wind_mph > 35.0 || period.severity == SeverityTier::High {
        DamageLevel::Medium
    } else {
        DamageLevel::Low
    }
}

fn predicted_service_demand(period: &StormPeriod) -> DemandLevel {
    if period.max_wind_mph > 50.0 || period.severity == SeverityTier::Severe {
        DemandLevel::Extreme
    } else if period.max_wind_mph > 35.0 || period.severity == SeverityTier::High {
        DemandLevel::High
    } else if period.max_wind_mph > 25.0 || period.severity == SeverityTier::Medium {
        DemandLevel::Medium
    } else {
        DemandLevel::Low
    }
}

#[must_use]
pub fn build_event(period: &StormPeriod, location: &Location) -> StormEvent {
    let impact = forecast(period);

    let mut affected_cities = BTreeSet::new();
    affected_cities.insert(location.city.clone());
    let mut affected_states = BTreeSet::new();
    if let Some(state) = &location.state {
        affected_states.insert(state.clone());
    }

    StormEvent {
        id: Uuid::new_v4(),
        kind: period.kind,
        severity: period.severity,
        affected_states,
        affected_cities,
        // TODO: populate from the zip-code geocoding lookup once that service is wired up
        affected_zip_codes: BTreeSet::new(),
        center_latitude: location.latitude,
        center_longitude: location.longitude,
        impact_radius_miles: impact.impact_radius_miles,
        max_wind_speed_mph: period.max_wind_mph,
        expected_duration_hours: period.duration_hours(),
        start_time: period.start_time,
        end_time: period.end_time,
        predicted_damage: impact.predicted_damage,
        predicted_service_demand: impact.predicted_service_demand,
    }
}
