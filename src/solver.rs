//! The implementation itself
//!
//! Each station is projected onto a spherical Earth. The estimated distance to
//! the source becomes the radius of a sphere around the station, and the
//! epicenter is where the three spheres intersect.

use std::fmt;

use log::{debug, warn};
use serde::Serialize;

use common::maths::round_to;
use common::structs::{GeoPoint, UnitVec3, Vec3, Vec3Ext};

use crate::error::{Denominator, Error, Result};
use crate::model::SeismicModel;
use crate::station::StationReading;

/// Relative to the Earth's radius. Anything shorter is treated as zero length.
const DEGENERATE_EPS: f64 = 1e-9;

/// Contains all necessary information to solve the problem
#[derive(Debug, Clone, Default)]
pub struct EpicenterSolver {
    model: SeismicModel,
}

/// The answer
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct EpicenterResult {
    pub coordinate: GeoPoint,
    /// Mean of the stations' local magnitudes
    pub magnitude: f64,
}

/// Both intersection points of the three spheres.
///
/// `upper` lies on the side of the stations' plane given by the right-handed
/// normal `(P1 - P0) x (P2 - P0)`, `lower` on the opposite side. They coincide
/// when the distances are exactly consistent with a point in that plane.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Candidates {
    pub upper: GeoPoint,
    pub lower: GeoPoint,
    /// `r0^2 - x^2 - y^2`. Negative means the distance estimates do not agree and
    /// its absolute value was used.
    pub residual: f64,
}

/// The answer formatted for display
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FormattedResult {
    pub latitude: String,
    pub longitude: String,
    pub magnitude: String,
}

impl EpicenterSolver {
    pub fn new(model: SeismicModel) -> Result<Self> {
        model.validate()?;
        Ok(Self { model })
    }

    pub fn model(&self) -> &SeismicModel {
        &self.model
    }

    /// Locate the epicenter and average the magnitude. Takes the non-negative root.
    pub fn solve(&self, stations: &[StationReading]) -> Result<EpicenterResult> {
        let candidates = self.candidates(stations)?;
        Ok(EpicenterResult {
            coordinate: candidates.upper,
            magnitude: mean_magnitude(stations),
        })
    }

    /// Trilaterate. The first station is the origin of the local frame.
    pub fn candidates(&self, stations: &[StationReading]) -> Result<Candidates> {
        let [s0, s1, s2] = stations else {
            return Err(Error::InvalidStationCount(stations.len()));
        };

        let earth_r = self.model.earth_radius;
        let min_len = earth_r * DEGENERATE_EPS;

        let p0 = s0.coordinate().to_cartesian(earth_r);
        let p1 = s1.coordinate().to_cartesian(earth_r);
        let p2 = s2.coordinate().to_cartesian(earth_r);
        let (r0, r1, r2) = (s0.distance_km(), s1.distance_km(), s2.distance_km());

        let baseline = p1 - p0;
        let d = baseline.norm();
        let ex = UnitVec3::try_new(baseline, min_len)
            .ok_or(Error::DegenerateGeometry(Denominator::Baseline))?;

        let p2p0 = p2 - p0;
        let i = p2p0.component_along(ex);
        let ordinate = p2p0.reject_from(ex);
        let j = ordinate.norm();
        let ey = UnitVec3::try_new(ordinate, min_len)
            .ok_or(Error::DegenerateGeometry(Denominator::Ordinate))?;
        let ez: Vec3 = ex.cross(&*ey);

        let x = (r0 * r0 - r1 * r1 + d * d) / (2.0 * d);
        let y = (r0 * r0 - r2 * r2 + i * i + j * j) / (2.0 * j) - (i / j) * x;
        let residual = r0 * r0 - x * x - y * y;
        debug!("local frame: d = {d:.3}, i = {i:.3}, j = {j:.3}; x = {x:.3}, y = {y:.3}, z^2 = {residual:.3}");
        if residual < 0.0 {
            warn!(
                "distances of {}, {} and {} do not intersect (z^2 = {residual:.3} km^2), using |z^2|",
                s0.name(),
                s1.name(),
                s2.name(),
            );
        }
        let z = residual.abs().sqrt();

        let in_plane = p0 + ex.into_inner() * x + ey.into_inner() * y;
        Ok(Candidates {
            upper: GeoPoint::from(in_plane + ez * z),
            lower: GeoPoint::from(in_plane - ez * z),
            residual,
        })
    }
}

/// Arithmetic mean of the local magnitudes
fn mean_magnitude(stations: &[StationReading]) -> f64 {
    stations.iter().map(StationReading::local_magnitude).sum::<f64>() / stations.len() as f64
}

impl EpicenterResult {
    pub fn latitude_str(&self) -> String {
        format!("{:.4}", round_to(self.coordinate.lat, 4))
    }

    pub fn longitude_str(&self) -> String {
        format!("{:.4}", round_to(self.coordinate.lon, 4))
    }

    pub fn magnitude_str(&self) -> String {
        format!("{:.2}", round_to(self.magnitude, 2))
    }

    pub fn formatted(&self) -> FormattedResult {
        FormattedResult {
            latitude: self.latitude_str(),
            longitude: self.longitude_str(),
            magnitude: self.magnitude_str(),
        }
    }
}

impl fmt::Display for EpicenterResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Latitude = {} and longitude = {}, magnitude = {}",
            self.latitude_str(),
            self.longitude_str(),
            self.magnitude_str()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    // True source at (40.6, 23.0); deltas 4, 5 and 6 s give 38.4, 48.0 and 57.6 km
    fn stations() -> Vec<StationReading> {
        vec![
            StationReading::new("A", (40.9453, 23.0), "12:00:00", "12:00:04", 2.0).unwrap(),
            StationReading::new("B", (40.6, 23.5685), "12:00:01", "12:00:06", 1.5).unwrap(),
            StationReading::new("C", (40.2337, 22.5176), "12:00:02", "12:00:08", 1.0).unwrap(),
        ]
    }

    #[test]
    fn locates_source() {
        let result = EpicenterSolver::default().solve(&stations()).unwrap();
        assert_approx_eq!(result.coordinate.lat, 40.6, 1e-3);
        assert_approx_eq!(result.coordinate.lon, 23.0, 1e-3);
    }

    #[test]
    fn averages_magnitude() {
        let stations = stations();
        let result = EpicenterSolver::default().solve(&stations).unwrap();
        let expected = stations.iter().map(|s| s.local_magnitude()).sum::<f64>() / 3.0;
        assert_approx_eq!(result.magnitude, expected);
        assert_approx_eq!(mean_magnitude(&stations), expected);
        assert_eq!(result.magnitude_str(), "2.03");
    }

    #[test]
    fn candidates_are_close_for_nearly_consistent_input() {
        // Distances are along the surface, the solve works with chords, so the
        // spheres miss each other by a little
        let c = EpicenterSolver::default().candidates(&stations()).unwrap();
        assert!(c.residual.abs() < 10.0);
        assert_approx_eq!(c.upper.lat, c.lower.lat, 1e-3);
        assert_approx_eq!(c.upper.lon, c.lower.lon, 1e-3);
        assert_ne!(c.upper, c.lower);
    }

    #[test]
    fn station_count() {
        let solver = EpicenterSolver::default();
        let mut stations = stations();
        stations.push(stations[0].clone());
        assert_eq!(
            solver.solve(&stations),
            Err(Error::InvalidStationCount(4))
        );
        assert_eq!(
            solver.solve(&stations[..2]),
            Err(Error::InvalidStationCount(2))
        );
        assert_eq!(solver.solve(&[]), Err(Error::InvalidStationCount(0)));
    }

    #[test]
    fn duplicate_first_pair() {
        let mut stations = stations();
        stations[1] =
            StationReading::new("B", (40.9453, 23.0), "12:00:01", "12:00:06", 1.5).unwrap();
        assert_eq!(
            EpicenterSolver::default().solve(&stations),
            Err(Error::DegenerateGeometry(Denominator::Baseline))
        );
    }

    #[test]
    fn third_station_on_baseline() {
        let mut stations = stations();
        stations[2] =
            StationReading::new("C", (40.6, 23.5685), "12:00:02", "12:00:08", 1.0).unwrap();
        assert_eq!(
            EpicenterSolver::default().solve(&stations),
            Err(Error::DegenerateGeometry(Denominator::Ordinate))
        );
    }

    #[test]
    fn inconsistent_distances_still_solve() {
        let stations = vec![
            StationReading::new("A", (40.9453, 23.0), "12:00:00", "12:00:01", 2.0).unwrap(),
            StationReading::new("B", (40.6, 23.5685), "12:00:00", "12:00:01", 1.5).unwrap(),
            StationReading::new("C", (40.2337, 22.5176), "12:00:00", "12:00:01", 1.0).unwrap(),
        ];
        // 9.6 km spheres around stations ~50 km apart never meet
        let c = EpicenterSolver::default().candidates(&stations).unwrap();
        assert!(c.residual < 0.0);
        assert!(c.upper.lat.is_finite() && c.upper.lon.is_finite());
    }

    #[test]
    fn invalid_model() {
        let model = SeismicModel {
            earth_radius: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            EpicenterSolver::new(model),
            Err(Error::InvalidModel(_))
        ));
    }

    #[test]
    fn formatting() {
        let result = EpicenterResult {
            coordinate: GeoPoint::new_unchecked(40.599_652_9, -22.999_607),
            magnitude: 2.027_491,
        };
        assert_eq!(result.latitude_str(), "40.5997");
        assert_eq!(result.longitude_str(), "-22.9996");
        assert_eq!(
            result.formatted(),
            FormattedResult {
                latitude: "40.5997".into(),
                longitude: "-22.9996".into(),
                magnitude: "2.03".into(),
            }
        );
        assert_eq!(
            result.to_string(),
            "Latitude = 40.5997 and longitude = -22.9996, magnitude = 2.03"
        );
    }
}
