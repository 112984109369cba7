//! A single seismograph station's reading and the quantities derived from it

use std::fmt;

use chrono::{NaiveTime, Timelike};
use log::debug;
use serde::{Deserialize, Serialize};

use common::constants::DELTA_SYM;
use common::maths::log10_checked;
use common::structs::GeoPoint;

use crate::error::{Error, Result};
use crate::model::SeismicModel;

const TIME_FORMAT: &str = "%H:%M:%S";

/// The station record as it is in the file
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RawRecord {
    pub name: String,
    /// Latitude, longitude
    pub coord: [f64; 2],
    pub ptime: String,
    pub stime: String,
    pub max_amp: f64,
}

/// Validated station reading. Derived values are computed once on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct StationReading {
    name: String,
    coordinate: GeoPoint,
    p_arrival: NaiveTime,
    s_arrival: NaiveTime,
    peak_amplitude: f64,

    delta_seconds: i64,
    distance_km: f64,
    local_magnitude: f64,
}

impl StationReading {
    /// Construct a reading using the default seismic model
    pub fn new(
        name: impl Into<String>,
        coordinate: (f64, f64),
        p_arrival: &str,
        s_arrival: &str,
        peak_amplitude: f64,
    ) -> Result<Self> {
        Self::with_model(
            name,
            coordinate,
            p_arrival,
            s_arrival,
            peak_amplitude,
            &SeismicModel::default(),
        )
    }

    /// Construct a reading. Both arrival times are `HH:MM:SS` clock times of the same day.
    pub fn with_model(
        name: impl Into<String>,
        (lat, lon): (f64, f64),
        p_arrival: &str,
        s_arrival: &str,
        peak_amplitude: f64,
        model: &SeismicModel,
    ) -> Result<Self> {
        model.validate()?;

        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::MalformedInput("station name is empty".into()));
        }
        let coordinate = GeoPoint::new(lat, lon).ok_or_else(|| {
            Error::MalformedInput(format!("{name}: coordinate ({lat}, {lon}) is out of range"))
        })?;

        let p_arrival = parse_time(&name, "P", p_arrival)?;
        let s_arrival = parse_time(&name, "S", s_arrival)?;

        // Same day is assumed: an S arrival "before" P is bad data, not a midnight rollover
        let delta_seconds = s_arrival.signed_duration_since(p_arrival).num_seconds();
        if delta_seconds <= 0 {
            return Err(Error::DomainError(format!(
                "{name}: S arrival {s_arrival} must be later than P arrival {p_arrival}"
            )));
        }

        let distance_km = model.distance_km(delta_seconds as f64);

        let log_amplitude = log10_checked(peak_amplitude).ok_or_else(|| {
            Error::DomainError(format!(
                "{name}: peak amplitude must be positive, got {peak_amplitude}"
            ))
        })?;
        let correction = model
            .magnitude_correction(delta_seconds as f64)
            .ok_or_else(|| {
                Error::DomainError(format!(
                    "{name}: distance correction undefined for {DELTA_SYM}t = {delta_seconds} s"
                ))
            })?;
        let local_magnitude = log_amplitude + correction;

        debug!(
            "{name}: {DELTA_SYM}t = {delta_seconds} s, distance = {distance_km:.3} km, ML = {local_magnitude:.3}"
        );

        Ok(Self {
            name,
            coordinate,
            p_arrival,
            s_arrival,
            peak_amplitude,
            delta_seconds,
            distance_km,
            local_magnitude,
        })
    }

    pub fn from_record(record: &RawRecord, model: &SeismicModel) -> Result<Self> {
        Self::with_model(
            record.name.clone(),
            (record.coord[0], record.coord[1]),
            &record.ptime,
            &record.stime,
            record.max_amp,
            model,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coordinate(&self) -> GeoPoint {
        self.coordinate
    }

    pub fn p_arrival(&self) -> NaiveTime {
        self.p_arrival
    }

    pub fn s_arrival(&self) -> NaiveTime {
        self.s_arrival
    }

    pub fn peak_amplitude(&self) -> f64 {
        self.peak_amplitude
    }

    /// Whole seconds between the S and P arrivals, always positive
    pub fn delta_seconds(&self) -> i64 {
        self.delta_seconds
    }

    /// Estimated distance to the source, km
    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn local_magnitude(&self) -> f64 {
        self.local_magnitude
    }
}

impl TryFrom<RawRecord> for StationReading {
    type Error = Error;

    fn try_from(record: RawRecord) -> Result<Self> {
        Self::from_record(&record, &SeismicModel::default())
    }
}

impl fmt::Display for StationReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: P {} S {}, {DELTA_SYM}t = {} s, distance = {:.1} km, ML = {:.2}",
            self.name,
            self.coordinate,
            self.p_arrival,
            self.s_arrival,
            self.delta_seconds,
            self.distance_km,
            self.local_magnitude,
        )
    }
}

fn parse_time(name: &str, wave: &str, s: &str) -> Result<NaiveTime> {
    let malformed = |why: &dyn fmt::Display| {
        Error::MalformedInput(format!(
            "{name}: {wave} arrival \"{s}\" is not HH:MM:SS ({why})"
        ))
    };
    if s.trim() != s {
        return Err(malformed(&"surrounding whitespace"));
    }
    let time = NaiveTime::parse_from_str(s, TIME_FORMAT).map_err(|e| malformed(&e))?;
    // chrono reads second 60 as a leap second
    if time.nanosecond() >= 1_000_000_000 {
        return Err(malformed(&"second out of range"));
    }
    Ok(time)
}
