use crate::domain::model::{ClassifiedSample, Condition, SeverityTier, StormKind, WeatherSample};

#[must_use]
pub fn classify(sample: WeatherSample) -> ClassifiedSample {
    let is_storm = is_storm_sample(&sample);
    let storm_kind = is_storm.then(|| storm_kind(sample.condition, sample.wind_speed_mph));
    // Severity is graded for every sample, storm or not: sub-freezing
    // temperatures raise the tier of samples the storm gate never sees.
    let severity = severity_tier(
        sample.condition,
        sample.wind_speed_mph,
        sample.temperature_f,
    );

    ClassifiedSample {
        sample,
        is_storm,
        storm_kind,
        severity,
    }
}

fn is_storm_sample(sample: &WeatherSample) -> bool {
    matches!(
        sample.condition,
        Condition::Thunderstorm | Condition::Tornado | Condition::Squall
    ) || sample.wind_speed_mph > 25.0
}

fn storm_kind(condition: Condition, wind_mph: f64) -> StormKind {
    match condition {
        Condition::Tornado => StormKind::Tornado,
        Condition::Thunderstorm => StormKind::Thunderstorm,
        _ if wind_mph > 40.0 => StormKind::HighWind,
        _ if wind_mph > 25.0 => StormKind::WindAdvisory,
        _ => StormKind::General,
    }
}

#[must_use]
pub fn severity_tier(condition: Condition, wind_mph: f64, temperature_f: f64) -> SeverityTier {
    if condition == Condition::Tornado || wind_mph > 50.0 {
        SeverityTier::Severe
    } else if condition == Condition::Thunderstorm || wind_mph > 35.0 {
        SeverityTier::High
    } else if wind_mph > 20.0 || temperature_f < 32.0 {
        SeverityTier::Medium
    } else {
        SeverityTier::Low
    }
}
