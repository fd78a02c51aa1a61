use futures::future::join_all;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::config::ScannerConfig;
use crate::data::provider::{ProviderClient, ProviderError};
use crate::domain::classify::classify;
use crate::domain::impact::build_event;
use crate::domain::model::{ClassifiedSample, Location, StormEvent};
use crate::domain::segment::segment;
use crate::store::{StoreError, StormEventStore};

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("weather provider unavailable")]
    Provider(#[from] ProviderError),
    #[error("failed to persist {} storm events", .events.len())]
    Persist {
        // The computed events ride along so the caller can decide on a retry.
        events: Vec<StormEvent>,
        source: StoreError,
    },
    #[error("failed to record current conditions")]
    Record { source: StoreError },
}

#[derive(Debug)]
pub struct LocationScan {
    pub location: Location,
    pub outcome: Result<Vec<StormEvent>, ScanError>,
}

#[derive(Debug)]
pub struct MonitoringScanner<S> {
    config: ScannerConfig,
    provider: ProviderClient,
    store: S,
}

impl<S: StormEventStore> MonitoringScanner<S> {
    pub fn new(config: ScannerConfig, store: S) -> Self {
        let provider = ProviderClient::new(
            config.provider_base_url.clone(),
            config.api_key.clone(),
            config.unit_system,
        );
        Self {
            config,
            provider,
            store,
        }
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    // One location per future; a failure is captured in that location's
    // outcome and never aborts the siblings.
    pub async fn scan_all(&self) -> Vec<LocationScan> {
        let sweeps = self
            .config
            .monitored_locations
            .iter()
            .map(|location| self.scan_location(location));
        let outcomes = join_all(sweeps).await;

        self.config
            .monitored_locations
            .iter()
            .cloned()
            .zip(outcomes)
            .map(|(location, outcome)| {
                if let Err(err) = &outcome {
                    warn!(city = %location.city, error = %err, "location scan skipped");
                }
                LocationScan { location, outcome }
            })
            .collect()
    }

    pub async fn scan_location(&self, location: &Location) -> Result<Vec<StormEvent>, ScanError> {
        debug!(city = %location.city, "fetching forecast window");
        let mut samples = self
            .provider
            .fetch_forecast(location, self.config.forecast_point_count)
            .await?;
        // Segmentation requires strict chronological order per location.
        samples.sort_by_key(|sample| sample.observed_at);

        let classified: Vec<ClassifiedSample> = samples.into_iter().map(classify).collect();
        let periods = segment(&classified);
        debug!(city = %location.city, periods = periods.len(), "segmented forecast window");

        let events: Vec<StormEvent> = periods
            .iter()
            .map(|period| build_event(period, location))
            .collect();

        for event in &events {
            if let Err(source) = self.store.insert_event(event) {
                error!(city = %location.city, error = %source, "storm event write failed");
                return Err(ScanError::Persist {
                    events: events.clone(),
                    source,
                });
            }
        }

        Ok(events)
    }

    // Companion dashboard path: one classified observation, no segmentation.
    // Provider trouble degrades to `None` with the same skip-and-log
    // semantics as a scan fetch failure.
    pub async fn observe_current_conditions(
        &self,
        location: &Location,
    ) -> Result<Option<ClassifiedSample>, ScanError> {
        let sample = match self.provider.fetch_current(location).await {
            Ok(sample) => sample,
            Err(err) => {
                warn!(city = %location.city, error = %err, "current conditions unavailable");
                return Ok(None);
            }
        };

        let observation = classify(sample);
        self.store
            .record_conditions(&observation)
            .map_err(|source| ScanError::Record { source })?;

        Ok(Some(observation))
    }
}
