//! Geometry shared by the epicenter solver: a spherical Earth, its Cartesian
//! projection and a few numeric helpers.

pub mod constants;
pub mod maths;
pub mod structs;
