use super::remainder_2pi;
use std::f64::consts::PI;

/// Slack allowed by `expanded` when deciding whether the result is full or empty.
const EXPANSION_SLACK: f64 = 1e-15;

/// A closed interval on the unit circle, with endpoints in `[-π, π]`.
///
/// The interval runs counter-clockwise from `lo` to `hi`. When `lo > hi` the
/// interval is *inverted* and wraps through ±π. The point -π is normalized to
/// π everywhere except in the full interval `[-π, π]`; the empty interval is
/// `[π, -π]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct S1Interval {
    lo: f64,
    hi: f64,
}

impl Default for S1Interval {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Counter-clockwise distance from `a` to `b` in `[0, 2π]`.
#[inline]
fn positive_distance(a: f64, b: f64) -> f64 {
    let d = b - a;
    if d >= 0.0 {
        d
    } else {
        // Evaluated this way so that the result is exactly 2π when a = b.
        (b + PI) - (a - PI)
    }
}

impl S1Interval {
    pub const EMPTY: S1Interval = S1Interval { lo: PI, hi: -PI };
    pub const FULL: S1Interval = S1Interval { lo: -PI, hi: PI };

    /// Interval from its endpoints, normalizing -π to π unless the interval is full.
    pub fn from_endpoints(lo: f64, hi: f64) -> Self {
        let mut i = S1Interval { lo, hi };
        if lo == -PI && hi != PI {
            i.lo = PI;
        }
        if hi == -PI && lo != PI {
            i.hi = PI;
        }
        i
    }

    /// Degenerate interval containing a single angle.
    #[inline]
    pub fn from_point(p: f64) -> Self {
        let p = if p == -PI { PI } else { p };
        S1Interval { lo: p, hi: p }
    }

    /// Minimal interval containing both angles.
    pub fn from_point_pair(a: f64, b: f64) -> Self {
        let a = if a == -PI { PI } else { a };
        let b = if b == -PI { PI } else { b };
        if positive_distance(a, b) <= PI {
            S1Interval { lo: a, hi: b }
        } else {
            S1Interval { lo: b, hi: a }
        }
    }

    #[inline]
    pub fn lo(&self) -> f64 {
        self.lo
    }

    #[inline]
    pub fn hi(&self) -> f64 {
        self.hi
    }

    pub fn is_valid(&self) -> bool {
        self.lo.abs() <= PI
            && self.hi.abs() <= PI
            && !(self.lo == -PI && self.hi != PI)
            && !(self.hi == -PI && self.lo != PI)
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.lo == -PI && self.hi == PI
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lo == PI && self.hi == -PI
    }

    #[inline]
    pub fn is_inverted(&self) -> bool {
        self.lo > self.hi
    }

    /// Midpoint of the interval. Undefined for empty intervals.
    pub fn center(&self) -> f64 {
        let c = 0.5 * (self.lo + self.hi);
        if !self.is_inverted() {
            c
        } else if c <= 0.0 {
            c + PI
        } else {
            c - PI
        }
    }

    /// Length of the interval; negative for the empty interval.
    pub fn length(&self) -> f64 {
        let mut l = self.hi - self.lo;
        if l >= 0.0 {
            return l;
        }
        l += 2.0 * PI;
        if l > 0.0 {
            l
        } else {
            -1.0
        }
    }

    /// Containment test for a point already known not to be -π.
    #[inline]
    fn fast_contains(&self, p: f64) -> bool {
        if self.is_inverted() {
            (p >= self.lo || p <= self.hi) && !self.is_empty()
        } else {
            p >= self.lo && p <= self.hi
        }
    }

    /// Whether the angle `p` (in `[-π, π]`) lies in the closed interval.
    #[inline]
    pub fn contains(&self, p: f64) -> bool {
        let p = if p == -PI { PI } else { p };
        self.fast_contains(p)
    }

    /// Whether `p` lies in the interior of the interval.
    pub fn interior_contains(&self, p: f64) -> bool {
        let p = if p == -PI { PI } else { p };
        if self.is_inverted() {
            p > self.lo || p < self.hi
        } else {
            (p > self.lo && p < self.hi) || self.is_full()
        }
    }

    pub fn contains_interval(&self, other: &S1Interval) -> bool {
        if self.is_inverted() {
            if other.is_inverted() {
                return other.lo >= self.lo && other.hi <= self.hi;
            }
            (other.lo >= self.lo || other.hi <= self.hi) && !self.is_empty()
        } else {
            if other.is_inverted() {
                return self.is_full() || other.is_empty();
            }
            other.lo >= self.lo && other.hi <= self.hi
        }
    }

    pub fn intersects(&self, other: &S1Interval) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        if self.is_inverted() {
            return other.is_inverted() || other.lo <= self.hi || other.hi >= self.lo;
        }
        if other.is_inverted() {
            return other.lo <= self.hi || other.hi >= self.lo;
        }
        other.lo <= self.hi && other.hi >= self.lo
    }

    /// Smallest interval containing both intervals.
    pub fn union(&self, other: &S1Interval) -> S1Interval {
        if other.is_empty() {
            return *self;
        }
        if self.fast_contains(other.lo) {
            if self.fast_contains(other.hi) {
                if self.contains_interval(other) {
                    return *self;
                }
                return S1Interval::FULL;
            }
            return S1Interval {
                lo: self.lo,
                hi: other.hi,
            };
        }
        if self.fast_contains(other.hi) {
            return S1Interval {
                lo: other.lo,
                hi: self.hi,
            };
        }

        // Neither endpoint of `other` is in `self`: either `self` is inside
        // `other`, or the two are disjoint.
        if self.is_empty() || other.fast_contains(self.lo) {
            return *other;
        }

        // Disjoint: join across the smaller gap.
        let dlo = positive_distance(other.hi, self.lo);
        let dhi = positive_distance(self.hi, other.lo);
        if dlo < dhi {
            S1Interval {
                lo: other.lo,
                hi: self.hi,
            }
        } else {
            S1Interval {
                lo: self.lo,
                hi: other.hi,
            }
        }
    }

    /// Smallest interval containing the intersection of both intervals.
    ///
    /// The true intersection may be two disjoint pieces; in that case the
    /// shorter of the two operands is returned.
    pub fn intersection(&self, other: &S1Interval) -> S1Interval {
        if other.is_empty() {
            return S1Interval::EMPTY;
        }
        if self.fast_contains(other.lo) {
            if self.fast_contains(other.hi) {
                if other.length() < self.length() {
                    return *other;
                }
                return *self;
            }
            return S1Interval {
                lo: other.lo,
                hi: self.hi,
            };
        }
        if self.fast_contains(other.hi) {
            return S1Interval {
                lo: self.lo,
                hi: other.hi,
            };
        }
        if other.fast_contains(self.lo) {
            return *self;
        }
        S1Interval::EMPTY
    }

    /// Complement of the interior: the result shares the endpoints of `self`.
    ///
    /// The complement of a single point is the full interval.
    pub fn complement(&self) -> S1Interval {
        if self.lo == self.hi {
            return S1Interval::FULL;
        }
        S1Interval {
            lo: self.hi,
            hi: self.lo,
        }
    }

    /// Interval grown by `margin` on each side (shrunk when negative).
    pub fn expanded(&self, margin: f64) -> S1Interval {
        if margin >= 0.0 {
            if self.is_empty() {
                return *self;
            }
            if self.length() + 2.0 * margin + 2.0 * EXPANSION_SLACK >= 2.0 * PI {
                return S1Interval::FULL;
            }
        } else {
            if self.is_full() {
                return *self;
            }
            if self.length() + 2.0 * margin - 2.0 * EXPANSION_SLACK <= 0.0 {
                return S1Interval::EMPTY;
            }
        }
        let mut result = S1Interval::from_endpoints(
            remainder_2pi(self.lo - margin),
            remainder_2pi(self.hi + margin),
        );
        if result.lo <= -PI {
            result.lo = PI;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn quad1() -> S1Interval {
        S1Interval::from_endpoints(0.0, FRAC_PI_2)
    }
    fn quad2() -> S1Interval {
        S1Interval::from_endpoints(FRAC_PI_2, -PI)
    }
    fn quad3() -> S1Interval {
        S1Interval::from_endpoints(PI, -FRAC_PI_2)
    }
    fn quad23() -> S1Interval {
        S1Interval::from_endpoints(FRAC_PI_2, -FRAC_PI_2)
    }

    #[test]
    fn test_constructors_normalize_minus_pi() {
        let q2 = quad2();
        assert_eq!(q2.hi(), PI);
        let q3 = quad3();
        assert_eq!(q3.lo(), PI);
        assert!(S1Interval::FULL.is_valid());
        assert!(S1Interval::EMPTY.is_valid());
        assert_eq!(S1Interval::from_point(-PI), S1Interval::from_point(PI));
        assert!(!S1Interval { lo: -PI, hi: 0.0 }.is_valid());
    }

    #[test]
    fn test_full_empty() {
        assert!(S1Interval::FULL.is_full());
        assert!(!S1Interval::FULL.is_empty());
        assert!(S1Interval::EMPTY.is_empty());
        assert!(S1Interval::EMPTY.is_inverted());
        assert!(S1Interval::EMPTY.length() < 0.0);
        assert_eq!(S1Interval::FULL.length(), 2.0 * PI);
        assert_eq!(S1Interval::default(), S1Interval::EMPTY);
    }

    #[test]
    fn test_center_and_length() {
        assert_eq!(quad1().center(), FRAC_PI_2 / 2.0);
        assert_eq!(quad1().length(), FRAC_PI_2);
        // quad23 is inverted, spanning π through ±π.
        assert!(quad23().is_inverted());
        assert!((quad23().center() - PI).abs() < 1e-15);
        assert!((quad23().length() - PI).abs() < 1e-15);
    }

    #[test]
    fn test_contains() {
        let q23 = quad23();
        assert!(q23.contains(PI));
        assert!(q23.contains(-PI));
        assert!(q23.contains(FRAC_PI_2));
        assert!(!q23.contains(0.0));
        assert!(!q23.interior_contains(FRAC_PI_2));
        assert!(q23.interior_contains(PI));

        assert!(quad1().contains(0.0));
        assert!(!quad1().interior_contains(0.0));
        assert!(!S1Interval::EMPTY.contains(PI));
        assert!(S1Interval::FULL.interior_contains(-PI));
    }

    #[test]
    fn test_contains_interval() {
        assert!(S1Interval::FULL.contains_interval(&quad23()));
        assert!(S1Interval::FULL.contains_interval(&S1Interval::EMPTY));
        assert!(quad23().contains_interval(&quad2()));
        assert!(quad23().contains_interval(&quad3()));
        assert!(!quad23().contains_interval(&quad1()));
        assert!(!quad1().contains_interval(&quad23()));
        assert!(quad1().contains_interval(&S1Interval::EMPTY));
    }

    #[test]
    fn test_intersects() {
        assert!(quad1().intersects(&quad2()));
        assert!(!quad1().intersects(&quad3()));
        assert!(quad23().intersects(&quad3()));
        assert!(!S1Interval::EMPTY.intersects(&S1Interval::FULL));
    }

    #[test]
    fn test_union() {
        let u = quad1().union(&quad2());
        assert_eq!(u.lo(), 0.0);
        assert_eq!(u.hi(), PI);
        assert_eq!(
            quad2().union(&quad3()),
            S1Interval::from_endpoints(FRAC_PI_2, -FRAC_PI_2)
        );
        assert_eq!(S1Interval::EMPTY.union(&quad1()), quad1());
        assert_eq!(
            quad23().union(&quad1()),
            S1Interval::from_endpoints(0.0, -FRAC_PI_2)
        );
        let small_a = S1Interval::from_endpoints(0.0, 0.1);
        let small_b = S1Interval::from_endpoints(0.5, 0.6);
        assert_eq!(small_a.union(&small_b), S1Interval::from_endpoints(0.0, 0.6));
    }

    #[test]
    fn test_intersection() {
        assert_eq!(quad23().intersection(&quad2()), quad2());
        assert_eq!(
            quad1().intersection(&quad2()),
            S1Interval::from_point(FRAC_PI_2)
        );
        assert!(quad1().intersection(&quad3()).is_empty());
        assert_eq!(S1Interval::FULL.intersection(&quad1()), quad1());
        assert!(quad1().intersection(&S1Interval::EMPTY).is_empty());

        let wrap = S1Interval::from_endpoints(3.0, -3.0);
        let x = S1Interval::from_endpoints(2.5, 3.1);
        assert_eq!(wrap.intersection(&x), S1Interval::from_endpoints(3.0, 3.1));
    }

    #[test]
    fn test_complement() {
        assert!(S1Interval::FULL.complement().is_empty());
        assert!(S1Interval::EMPTY.complement().is_full());
        assert!(S1Interval::from_point(1.0).complement().is_full());
        let c = quad1().complement();
        assert!(c.is_inverted());
        assert!(c.contains(PI));
        assert!(!c.interior_contains(0.25));
    }

    #[test]
    fn test_expanded() {
        assert!(S1Interval::EMPTY.expanded(1.0).is_empty());
        assert!(S1Interval::FULL.expanded(-1.0).is_full());
        assert!(quad1().expanded(PI).is_full());
        assert!(quad1().expanded(-FRAC_PI_2).is_empty());

        let e = S1Interval::from_point(0.0).expanded(0.25);
        assert_eq!(e, S1Interval::from_endpoints(-0.25, 0.25));

        // Expansion across ±π produces an inverted interval.
        let w = S1Interval::from_point(3.0).expanded(0.5);
        assert!(w.is_inverted());
        assert!(w.contains(PI));
        assert!(w.contains(-3.0));
        assert!((w.length() - 1.0).abs() < 1e-14);

        let shrunk = S1Interval::from_endpoints(-1.0, 1.0).expanded(-0.5);
        assert_eq!(shrunk, S1Interval::from_endpoints(-0.5, 0.5));
    }

    #[test]
    fn test_from_point_pair() {
        assert_eq!(
            S1Interval::from_point_pair(-PI, PI),
            S1Interval::from_point(PI)
        );
        assert_eq!(
            S1Interval::from_point_pair(0.5, 0.2),
            S1Interval::from_endpoints(0.2, 0.5)
        );
        let wrap = S1Interval::from_point_pair(3.0, -3.0);
        assert!(wrap.is_inverted());
    }
}
