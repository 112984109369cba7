//! Station records grouped under the `"Event"` key of a JSON file:
//!
//! ```json
//! { "Event": [ { "name": "THE", "coord": [40.63, 22.95], "ptime": "08:01:10",
//!                "stime": "08:01:14", "max_amp": 2.0 } ] }
//! ```

use std::io;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::SeismicModel;
use crate::station::{RawRecord, StationReading};

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct EventFile {
    #[serde(rename = "Event")]
    pub records: Vec<RawRecord>,
}

impl EventFile {
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .with_context(|| format!("could not open {}", path.display()))?;
        let reader = io::BufReader::new(file);
        serde_json::from_reader(reader)
            .with_context(|| format!("could not deserialize {}", path.display()))
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).context("could not deserialize event file")
    }

    /// Build readings for every record
    pub fn readings(&self, model: &SeismicModel) -> Result<Vec<StationReading>> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, rec)| {
                StationReading::from_record(rec, model)
                    .with_context(|| format!("record #{} is invalid", i + 1))
            })
            .collect()
    }

    /// Build readings for the records at the given 1-based positions
    pub fn select(&self, positions: &[usize], model: &SeismicModel) -> Result<Vec<StationReading>> {
        positions
            .iter()
            .map(|&pos| {
                let Some(rec) = pos.checked_sub(1).and_then(|i| self.records.get(i)) else {
                    bail!(
                        "no record #{pos}, the file has {} record(s)",
                        self.records.len()
                    );
                };
                StationReading::from_record(rec, model)
                    .with_context(|| format!("record #{pos} is invalid"))
            })
            .collect()
    }
}
