use thiserror::Error;

use crate::domain::model::{ClassifiedSample, StormEvent};

pub mod jsonl;
pub mod memory;

pub use jsonl::JsonlEventStore;
pub use memory::MemoryEventStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("event store I/O failed")]
    Io(#[from] std::io::Error),
    #[error("event payload could not be encoded")]
    Encode(#[from] serde_json::Error),
}

/// Persistence boundary for finalized storm events and current-conditions
/// observations. Implementations own no classification logic.
pub trait StormEventStore {
    fn insert_event(&self, event: &StormEvent) -> Result<(), StoreError>;

    fn record_conditions(&self, observation: &ClassifiedSample) -> Result<(), StoreError>;
}
