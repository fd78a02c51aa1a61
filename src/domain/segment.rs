use crate::domain::model::{ClassifiedSample, StormKind, StormPeriod};

// Samples must arrive in ascending `observed_at` order; the scanner sorts
// before calling in.
#[must_use]
pub fn segment(samples: &[ClassifiedSample]) -> Vec<StormPeriod> {
    let mut periods = Vec::new();
    let mut open: Option<StormPeriod> = None;

    for sample in samples {
        if sample.is_storm {
            match open.as_mut() {
                Some(period) => absorb(period, sample),
                None => open = Some(open_period(sample)),
            }
        } else if let Some(period) = open.take() {
            // A non-storm sample closes the run without starting a new one.
            periods.push(period);
        }
    }

    if let Some(period) = open {
        periods.push(period);
    }

    periods
}

fn open_period(sample: &ClassifiedSample) -> StormPeriod {
    StormPeriod {
        start_time: sample.sample.observed_at,
        end_time: sample.sample.observed_at,
        max_wind_mph: sample.sample.wind_speed_mph,
        // The opening sample's kind sticks for the whole period.
        kind: sample.storm_kind.unwrap_or(StormKind::General),
        severity: sample.severity,
        samples: vec![sample.clone()],
    }
}

fn absorb(period: &mut StormPeriod, sample: &ClassifiedSample) {
    period.end_time = sample.sample.observed_at;
    period.max_wind_mph = period.max_wind_mph.max(sample.sample.wind_speed_mph);
    period.severity = period.severity.max(sample.severity);
    period.samples.push(sample.clone());
}
