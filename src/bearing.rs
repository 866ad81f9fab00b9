use crate::trig::atan;
use std::f64::consts::FRAC_PI_2;
use vecmath::{vec2_sub, Vector2};

pub type Pt = Vector2<f64>;

/// Angle in radians of the vector from `center` to `p`.
///
/// Uses `atan(dy/dx)`, not `atan2`, so the result stays in [-π/2, π/2] and
/// opposite quadrants alias (a point at (-1,-1) reads the same as (1,1)).
/// A vertical delta gives ±π/2 depending on which side of the center `p` is.
pub fn bearing(p: Pt, center: Pt) -> f64 {
    let [dx, dy] = vec2_sub(p, center);
    if dx == 0.0 {
        if p[1] < center[1] {
            -FRAC_PI_2
        } else {
            FRAC_PI_2
        }
    } else {
        atan(dy / dx)
    }
}
