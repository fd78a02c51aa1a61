use std::sync::Mutex;

use crate::domain::model::{ClassifiedSample, StormEvent};
use crate::store::{StoreError, StormEventStore};

#[derive(Debug, Default)]
pub struct MemoryEventStore {
    events: Mutex<Vec<StormEvent>>,
    observations: Mutex<Vec<ClassifiedSample>>,
}

impl MemoryEventStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> Vec<StormEvent> {
        self.events.lock().expect("events lock").clone()
    }

    #[must_use]
    pub fn observations(&self) -> Vec<ClassifiedSample> {
        self.observations.lock().expect("observations lock").clone()
    }
}

impl StormEventStore for MemoryEventStore {
    fn insert_event(&self, event: &StormEvent) -> Result<(), StoreError> {
        self.events.lock().expect("events lock").push(event.clone());
        Ok(())
    }

    fn record_conditions(&self, observation: &ClassifiedSample) -> Result<(), StoreError> {
        self.observations
            .lock()
            .expect("observations lock")
            .push(observation.clone());
        Ok(())
    }
}
