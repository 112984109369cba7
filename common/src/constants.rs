//! Useful constants to have

/// The mean radius of the Earth in kilometers
///
/// More prescription is useless
/// since the Earth is treated as a sphere anyway.
pub const EARTH_R: f64 = 6_371.;

/// Unicode's degree symbol
pub const DEGREE_SYM: char = '\u{00b0}';

/// Unicode's delta symbol
pub const DELTA_SYM: char = '\u{0394}';
