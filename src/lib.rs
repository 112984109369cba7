//! Estimate an earthquake's epicenter and magnitude from seismograph readings.
//!
//! Every station reports when the P and S waves arrived and the peak ground
//! displacement. The lag between the two arrivals gives the distance to the
//! source and, together with the amplitude, a local magnitude. Three such
//! distances pin down the epicenter by trilateration.

pub mod data;
pub mod error;
pub mod model;
pub mod solver;
pub mod station;

pub use error::{Denominator, Error, Result};
pub use model::SeismicModel;
pub use solver::{Candidates, EpicenterResult, EpicenterSolver};
pub use station::{RawRecord, StationReading};
