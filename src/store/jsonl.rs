use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::Serialize;

use crate::domain::model::{ClassifiedSample, StormEvent};
use crate::store::{StoreError, StormEventStore};

// Append-only JSON-lines log; every line carries a `record` tag so storm
// events and condition observations can share one file.
#[derive(Debug)]
pub struct JsonlEventStore {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlEventStore {
    pub fn create(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append<T: Serialize>(&self, record: &'static str, body: &T) -> Result<(), StoreError> {
        let line = serde_json::to_string(&Line { record, body })?;
        let mut writer = self.writer.lock().expect("event log lock");
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

impl StormEventStore for JsonlEventStore {
    fn insert_event(&self, event: &StormEvent) -> Result<(), StoreError> {
        self.append("storm_event", event)
    }

    fn record_conditions(&self, observation: &ClassifiedSample) -> Result<(), StoreError> {
        self.append("observation", observation)
    }
}

#[derive(Serialize)]
struct Line<'a, T: Serialize> {
    record: &'static str,
    #[serde(flatten)]
    body: &'a T,
}
