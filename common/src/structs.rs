//! Basic structures such as Vec3

use std::f64::consts::{PI, TAU};
use std::fmt::{self, Display};

use crate::constants::DEGREE_SYM;

mod vec3;
pub use vec3::*;

mod geo_point;
pub use geo_point::GeoPoint;

/// Spherical coordinates triple
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    /// Positive latitude means North, negative means South
    pub lat: f64,
    /// Positive longitude means East, negative means West
    pub lon: f64,
    /// Relative to the center of the Earth
    pub r: f64,
}

impl Display for Spherical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lon = self.lon;
        if lon > PI {
            lon -= TAU;
        }

        let lat_dir = if self.lat >= 0. { 'N' } else { 'S' };
        let lon_dir = if lon >= 0. { 'E' } else { 'W' };
        write!(
            f,
            "({:.4}{DEGREE_SYM}{}, {:.4}{DEGREE_SYM}{}, r = {:.3} KM)",
            self.lat.to_degrees().abs(),
            lat_dir,
            lon.to_degrees().abs(),
            lon_dir,
            self.r,
        )
    }
}

//
// Convertations
//

/// Inverse projection. Latitude comes from `asin`, so any point off the sphere
/// is first scaled back onto it. The zero vector has no direction and yields `NaN`s.
impl From<Vec3> for Spherical {
    fn from(val: Vec3) -> Self {
        let r = val.norm();
        Spherical {
            lat: f64::asin((val.z / r).clamp(-1.0, 1.0)),
            lon: f64::atan2(val.y, val.x),
            r,
        }
    }
}

impl From<Spherical> for Vec3 {
    fn from(s: Spherical) -> Self {
        let (sin_lat, cos_lat) = s.lat.sin_cos();
        let (sin_lon, cos_lon) = s.lon.sin_cos();
        Self::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat) * s.r
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::EARTH_R;
    use assert_approx_eq::assert_approx_eq;
    use proptest::prelude::*;

    #[test]
    fn axes() {
        let v = Vec3::from(Spherical {
            lat: 0.0,
            lon: 0.0,
            r: EARTH_R,
        });
        assert_approx_eq!(v.x, EARTH_R);
        assert_approx_eq!(v.y, 0.0);
        assert_approx_eq!(v.z, 0.0);

        let v = Vec3::from(Spherical {
            lat: PI / 2.0,
            lon: 1.0,
            r: EARTH_R,
        });
        assert_approx_eq!(v.z, EARTH_R);
        assert_approx_eq!(v.norm(), EARTH_R);
    }

    #[test]
    fn off_sphere_point() {
        // A point inside the sphere keeps its direction
        let s = Spherical::from(Vec3::new(0.0, 3.0, 3.0));
        assert_approx_eq!(s.lat.to_degrees(), 45.0);
        assert_approx_eq!(s.lon.to_degrees(), 90.0);
        assert_approx_eq!(s.r, f64::hypot(3.0, 3.0));
    }

    #[test]
    fn display() {
        let s = Spherical {
            lat: (-33.5f64).to_radians(),
            lon: (200f64).to_radians(),
            r: EARTH_R,
        };
        assert_eq!(
            s.to_string(),
            format!("(33.5000{DEGREE_SYM}S, 160.0000{DEGREE_SYM}W, r = 6371.000 KM)")
        );
    }

    proptest! {
        #[test]
        fn round_trip(lat in -89.0f64..89.0, lon in -179.0f64..179.0) {
            let s = Spherical {
                lat: lat.to_radians(),
                lon: lon.to_radians(),
                r: EARTH_R,
            };
            let back = Spherical::from(Vec3::from(s));
            prop_assert!((back.lat.to_degrees() - lat).abs() < 1e-6);
            prop_assert!((back.lon.to_degrees() - lon).abs() < 1e-6);
            prop_assert!((back.r - EARTH_R).abs() < 1e-6);
        }
    }
}
