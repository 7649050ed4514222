use crate::Point;
use std::f64::consts::PI;

/// Largest squared chord length between two unit points (antipodal).
const MAX_LENGTH2: f64 = 4.0;

/// An angle represented by the squared length of the chord it subtends.
///
/// `length2 = (2 sin(θ/2))²`, so comparisons between chord angles are
/// monotone in the true angle and need no trigonometry. Values are clamped to
/// `[0, 4]`; the special value `NEGATIVE` sorts below every real angle and
/// `INFINITY` above.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ChordAngle(f64);

impl ChordAngle {
    pub const ZERO: ChordAngle = ChordAngle(0.0);
    /// 90 degrees.
    pub const RIGHT: ChordAngle = ChordAngle(2.0);
    /// 180 degrees.
    pub const STRAIGHT: ChordAngle = ChordAngle(MAX_LENGTH2);
    pub const NEGATIVE: ChordAngle = ChordAngle(-1.0);
    pub const INFINITY: ChordAngle = ChordAngle(f64::INFINITY);

    /// Chord angle from a squared chord length, clamped to the straight angle.
    #[inline]
    pub fn from_length2(length2: f64) -> Self {
        ChordAngle(length2.min(MAX_LENGTH2))
    }

    /// Chord angle between two (approximately) unit points.
    #[inline]
    pub fn between(a: Point, b: Point) -> Self {
        Self::from_length2((a.to_glam() - b.to_glam()).length_squared())
    }

    pub fn from_radians(radians: f64) -> Self {
        if radians < 0.0 {
            ChordAngle::NEGATIVE
        } else if radians.is_infinite() {
            ChordAngle::INFINITY
        } else {
            let length = 2.0 * (0.5 * radians.min(PI)).sin();
            ChordAngle(length * length)
        }
    }

    #[inline]
    pub fn from_degrees(degrees: f64) -> Self {
        Self::from_radians(degrees.to_radians())
    }

    #[inline]
    pub fn length2(self) -> f64 {
        self.0
    }

    pub fn to_radians(self) -> f64 {
        if self.0 < 0.0 {
            -1.0
        } else if self.0.is_infinite() {
            f64::INFINITY
        } else {
            2.0 * (0.5 * self.0.sqrt()).asin()
        }
    }

    #[inline]
    pub fn to_degrees(self) -> f64 {
        self.to_radians().to_degrees()
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.0 < 0.0
    }
}
