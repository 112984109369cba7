//! Physical constants of the seismic model
//!
//! The wave velocities are representative of one region only, so every
//! constant can be overridden from a TOML file:
//!
//! ```toml
//! p_velocity = 6.0
//! s_velocity = 3.5
//! ```

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use common::constants::EARTH_R;

use crate::error::{Error, Result};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SeismicModel {
    /// P-wave velocity, km/s
    pub p_velocity: f64,
    /// S-wave velocity, km/s
    pub s_velocity: f64,
    /// Radius of the spherical Earth, km
    pub earth_radius: f64,
    /// Magnitude correction is `distance_coefficient * log10(delta_scale * delta) - offset`
    pub distance_coefficient: f64,
    pub delta_scale: f64,
    pub offset: f64,
}

impl Default for SeismicModel {
    fn default() -> Self {
        Self {
            p_velocity: 6.4,
            s_velocity: 3.84,
            earth_radius: EARTH_R,
            distance_coefficient: 3.0,
            delta_scale: 8.0,
            offset: 2.92,
        }
    }
}

impl SeismicModel {
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        let model: Self = toml::from_str(s).context("could not deserialize seismic model")?;
        model.validate()?;
        Ok(model)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        let all_finite = [
            self.p_velocity,
            self.s_velocity,
            self.earth_radius,
            self.distance_coefficient,
            self.delta_scale,
            self.offset,
        ]
        .iter()
        .all(|x| x.is_finite());
        if !all_finite {
            return Err(Error::InvalidModel("all constants must be finite".into()));
        }
        if !(self.s_velocity > 0.0 && self.p_velocity > self.s_velocity) {
            return Err(Error::InvalidModel(format!(
                "need p_velocity > s_velocity > 0, got {} and {}",
                self.p_velocity, self.s_velocity
            )));
        }
        if self.earth_radius <= 0.0 {
            return Err(Error::InvalidModel("earth_radius must be positive".into()));
        }
        if self.delta_scale <= 0.0 {
            return Err(Error::InvalidModel("delta_scale must be positive".into()));
        }
        Ok(())
    }

    /// Distance (km) a P/S arrival lag of `delta` seconds corresponds to
    ///
    /// From `d = Vp * Tp = Vs * Ts` and `Ts - Tp = delta`.
    pub fn distance_km(&self, delta: f64) -> f64 {
        delta * (self.s_velocity * self.p_velocity) / (self.p_velocity - self.s_velocity)
    }

    /// Empirical distance correction added to `log10(amplitude)`.
    /// `None` when the logarithm is undefined.
    pub fn magnitude_correction(&self, delta: f64) -> Option<f64> {
        common::maths::log10_checked(self.delta_scale * delta)
            .map(|lg| self.distance_coefficient * lg - self.offset)
    }
}
