use std::fmt;

use serde::Serialize;

use super::{Spherical, Vec3};
use crate::constants::DEGREE_SYM;

/// A point on the Earth's surface. Angles are in decimal degrees.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Returns `None` unless `lat` is in `[-90, 90]` and `lon` is in `[-180, 180]`
    pub fn new(lat: f64, lon: f64) -> Option<Self> {
        ((-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon))
            .then_some(Self { lat, lon })
    }

    pub fn new_unchecked(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn to_spherical(self, r: f64) -> Spherical {
        Spherical {
            lat: self.lat.to_radians(),
            lon: self.lon.to_radians(),
            r,
        }
    }

    /// Project onto a sphere of radius `r` centered at the origin
    pub fn to_cartesian(self, r: f64) -> Vec3 {
        self.to_spherical(r).into()
    }
}

impl From<Spherical> for GeoPoint {
    fn from(s: Spherical) -> Self {
        Self {
            lat: s.lat.to_degrees(),
            lon: s.lon.to_degrees(),
        }
    }
}

impl From<Vec3> for GeoPoint {
    fn from(v: Vec3) -> Self {
        Spherical::from(v).into()
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lat_dir = if self.lat >= 0. { 'N' } else { 'S' };
        let lon_dir = if self.lon >= 0. { 'E' } else { 'W' };
        write!(
            f,
            "({:.4}{DEGREE_SYM}{lat_dir}, {:.4}{DEGREE_SYM}{lon_dir})",
            self.lat.abs(),
            self.lon.abs(),
        )
    }
}
