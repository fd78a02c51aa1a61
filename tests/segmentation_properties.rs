mod common;

use proptest::collection::vec;
use proptest::prelude::*;
use stormscout::domain::impact::build_event;
use stormscout::domain::model::{ClassifiedSample, Condition};
use stormscout::domain::segment::segment;

use common::{austin, classified, sample};
use stormscout::domain::classify::classify;

const CONDITIONS: [Condition; 6] = [
    Condition::Clear,
    Condition::Clouds,
    Condition::Rain,
    Condition::Snow,
    Condition::Thunderstorm,
    Condition::Squall,
];

fn sequence() -> impl Strategy<Value = Vec<ClassifiedSample>> {
    vec((0usize..CONDITIONS.len(), 0.0f64..80.0, -10.0f64..100.0), 0..60).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(hour, (condition, wind, temp))| {
                classify(sample(hour as i64, CONDITIONS[condition], wind, temp))
            })
            .collect()
    })
}

fn storm_run_count(samples: &[ClassifiedSample]) -> usize {
    let mut runs = 0;
    let mut in_run = false;
    for sample in samples {
        if sample.is_storm && !in_run {
            runs += 1;
        }
        in_run = sample.is_storm;
    }
    runs
}

proptest! {
    #[test]
    fn one_period_per_maximal_storm_run(samples in sequence()) {
        prop_assert_eq!(segment(&samples).len(), storm_run_count(&samples));
    }

    #[test]
    fn periods_cover_exactly_the_storm_samples(samples in sequence()) {
        let periods = segment(&samples);

        let member_times: Vec<_> = periods
            .iter()
            .flat_map(|p| p.samples.iter().map(|s| s.sample.observed_at))
            .collect();
        let storm_times: Vec<_> = samples
            .iter()
            .filter(|s| s.is_storm)
            .map(|s| s.sample.observed_at)
            .collect();

        prop_assert_eq!(member_times, storm_times);
    }

    #[test]
    fn period_aggregates_match_their_members(samples in sequence()) {
        for period in segment(&samples) {
            let first = period.samples.first().expect("period has members");
            let last = period.samples.last().expect("period has members");
            prop_assert_eq!(period.start_time, first.sample.observed_at);
            prop_assert_eq!(period.end_time, last.sample.observed_at);
            prop_assert_eq!(period.kind, first.storm_kind.expect("storm member"));

            let max_severity = period.samples.iter().map(|s| s.severity).max().expect("members");
            prop_assert_eq!(period.severity, max_severity);

            let max_wind = period
                .samples
                .iter()
                .map(|s| s.sample.wind_speed_mph)
                .fold(f64::MIN, f64::max);
            prop_assert!((period.max_wind_mph - max_wind).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn segment_and_forecast_are_idempotent(samples in sequence()) {
        let location = austin();

        let first = payloads_without_ids(&samples, &location);
        let second = payloads_without_ids(&samples, &location);
        prop_assert_eq!(first, second);
    }
}

fn payloads_without_ids(
    samples: &[ClassifiedSample],
    location: &stormscout::domain::model::Location,
) -> Vec<String> {
    segment(samples)
        .iter()
        .map(|period| {
            let mut value =
                serde_json::to_value(build_event(period, location)).expect("event serializes");
            value.as_object_mut().expect("event object").remove("id");
            value.to_string()
        })
        .collect()
}

#[test]
fn isolated_storm_samples_each_get_a_period() {
    let samples: Vec<_> = (0..7)
        .map(|hour| {
            if hour % 2 == 0 {
                classified(hour, Condition::Thunderstorm, 30.0)
            } else {
                classified(hour, Condition::Clear, 5.0)
            }
        })
        .collect();

    let periods = segment(&samples);
    assert_eq!(periods.len(), 4);
    assert!(periods.iter().all(|p| p.start_time == p.end_time));
}
