//! One-dimensional spherical quantities: chord angles and circular intervals.

mod chord_angle;
mod interval;

pub use chord_angle::ChordAngle;
pub use interval::S1Interval;

/// Rounding error of a single `f64` operation (half an ulp at 1.0).
pub const DBL_ERROR: f64 = 0.5 * f64::EPSILON;

/// IEEE remainder of `x` by 2π, in [-π, π].
///
/// For the magnitudes produced in this crate (|x| <= 3π) the subtraction is
/// exact by Sterbenz' lemma, so this matches a correctly rounded remainder.
#[inline]
pub(crate) fn remainder_2pi(x: f64) -> f64 {
    use std::f64::consts::TAU;
    x - (x / TAU).round_ties_even() * TAU
}
