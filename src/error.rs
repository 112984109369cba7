use std::fmt;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error("undefined logarithm: {0}")]
    DomainError(String),
    #[error("expected exactly 3 stations, got {0}")]
    InvalidStationCount(usize),
    #[error("degenerate station geometry: {0} is zero")]
    DegenerateGeometry(Denominator),
    #[error("invalid seismic model: {0}")]
    InvalidModel(String),
}

/// The trilateration term that vanished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denominator {
    /// Distance between the first two stations
    Baseline,
    /// Offset of the third station from the line through the first two
    Ordinate,
}

impl fmt::Display for Denominator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Baseline => f.write_str("distance between stations 1 and 2"),
            Self::Ordinate => f.write_str("offset of station 3 from the baseline"),
        }
    }
}
