// plain functions instead of `f64::` methods everywhere, reads closer to the math
use std::f64::consts::PI;

pub const R2D: f64 = 180.0 / PI;
pub const D2R: f64 = PI / 180.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * D2R
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * R2D
}

// one-argument arctangent, result is always in (-π/2, π/2)
pub fn atan(x: f64) -> f64 {
    x.atan()
}
