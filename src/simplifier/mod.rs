//! Constrained edge simplification from a fixed source vertex.
//!
//! A `PolylineSimplifier` answers one question: can an output edge starting
//! at `source` and ending at some destination pass through every *target*
//! disc while staying clear of every *avoid* disc? Each candidate direction
//! is a bearing angle in a tangent frame at the source, and each constraint
//! narrows a circular interval of acceptable bearings (the *window*).
//!
//! The simplification loop typically looks like:
//!
//! ```
//! use s2_geocore::{s1::ChordAngle, Point, PolylineSimplifier};
//!
//! let ll = |lat: f64, lng: f64| Point::from_lat_lng_degrees(lat, lng);
//! let tolerance = ChordAngle::from_degrees(1.0);
//! let mut simplifier = PolylineSimplifier::new(ll(0.0, 0.0));
//!
//! // Input vertices the output edge must stay close to, nearest first.
//! assert!(simplifier.target_disc(ll(0.5, 1.0), tolerance));
//! assert!(simplifier.target_disc(ll(0.0, 2.0), tolerance));
//!
//! assert!(simplifier.can_extend(ll(0.2, 3.0)));
//! assert!(!simplifier.can_extend(ll(5.0, 3.0)));
//! ```
//!
//! Constraints must be registered in non-decreasing order of their minimum
//! distance from the source (disc distance minus radius). The side-selection
//! rule used when an avoid range falls inside the window relies on it; out of
//! order registrations give conservative but unspecified answers.
//!
//! Edges longer than 90 degrees are not supported.
//!
//! All floating-point error is accounted for: a `true` from
//! [`can_extend`](PolylineSimplifier::can_extend) is a guarantee under
//! rounding, while a `false` may be a near miss.

mod window;

pub use window::{Phase, RangeToAvoid};

use crate::s1::{remainder_2pi, ChordAngle, S1Interval, DBL_ERROR};
use crate::types::Axis;
use crate::Point;
use std::f64::consts::{FRAC_PI_2, PI};
use window::{avoid_range, Window};

/// Direction in which to round a conservative semiwidth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Round {
    Down,
    Up,
}

impl Round {
    #[inline]
    fn sign(self) -> f64 {
        match self {
            Round::Down => -1.0,
            Round::Up => 1.0,
        }
    }
}

/// Narrows the set of acceptable directions for an output edge from `source`.
///
/// One instance serves one output edge. Once a constraint empties the window
/// the simplifier is [`Phase::Exhausted`] and every later call reports
/// failure; create a new instance for the next edge.
#[derive(Debug, Clone)]
pub struct PolylineSimplifier {
    source: Point,
    // Tangent frame at the source. Not unit length, but orthogonal to each
    // other and to the source, with matching lengths.
    x_dir: Point,
    y_dir: Point,
    window: Window,
    #[cfg(feature = "ordering-check")]
    ordering: OrderingCheck,
}

impl PolylineSimplifier {
    /// Simplifier for edges starting at the unit point `source`.
    pub fn new(source: Point) -> Self {
        let s = source;
        // y_dir = source x e_i and x_dir = y_dir x source for the axis e_i
        // of the smallest component, written out to keep the frame exact.
        let (x_dir, y_dir) = match s.smallest_component() {
            Axis::X => (
                Point::new(s.y * s.y + s.z * s.z, -s.y * s.x, -s.z * s.x),
                Point::new(0.0, s.z, -s.y),
            ),
            Axis::Y => (
                Point::new(-s.x * s.y, s.z * s.z + s.x * s.x, -s.z * s.y),
                Point::new(-s.z, 0.0, s.x),
            ),
            Axis::Z => (
                Point::new(-s.x * s.z, -s.y * s.z, s.x * s.x + s.y * s.y),
                Point::new(s.y, -s.x, 0.0),
            ),
        };
        Self {
            source,
            x_dir,
            y_dir,
            window: Window::default(),
            #[cfg(feature = "ordering-check")]
            ordering: OrderingCheck::default(),
        }
    }

    #[inline]
    pub fn source(&self) -> Point {
        self.source
    }

    /// Current window of acceptable bearings: full until the first target
    /// disc narrows it, empty once exhausted.
    ///
    /// Pending avoid ranges are not reflected here; see [`pending`](Self::pending).
    #[inline]
    pub fn window(&self) -> S1Interval {
        self.window.interval()
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.window.phase()
    }

    /// Avoid ranges queued while the window is still the full circle.
    #[inline]
    pub fn pending(&self) -> &[RangeToAvoid] {
        self.window.pending()
    }

    #[inline]
    pub fn num_pending(&self) -> usize {
        self.pending().len()
    }

    /// Require the output edge to pass through the disc of `radius` around `point`.
    ///
    /// Returns whether some direction still satisfies every constraint. A
    /// disc that contains the source is always satisfied and changes nothing.
    pub fn target_disc(&mut self, point: Point, radius: ChordAngle) -> bool {
        if self.window == Window::Exhausted {
            return false;
        }
        self.check_order(point, radius);

        let semiwidth = self.semiwidth(point, radius, Round::Down);
        if semiwidth >= PI {
            return true;
        }
        if semiwidth < 0.0 {
            log::debug!("target disc cannot be reached within error bounds; window exhausted");
            self.window = Window::Exhausted;
            return false;
        }

        let center = self.direction(point);
        let target = S1Interval::from_point(center).expanded(semiwidth);
        self.window = match std::mem::take(&mut self.window) {
            Window::Unconstrained { pending } => {
                // First narrowing: the window now has two ends, so queued
                // ranges can be applied. They are consumed here.
                let narrowed = pending
                    .into_iter()
                    .fold(target, |w, range| avoid_range(w, range));
                Window::from_interval(narrowed)
            }
            Window::Constrained(window) => Window::from_interval(window.intersection(&target)),
            Window::Exhausted => Window::Exhausted,
        };
        self.report_exhausted("target disc")
    }

    /// Require the output edge to avoid the disc of `radius` around `point`,
    /// and to pass it on the given side if the disc lies ahead of the source.
    ///
    /// Returns whether some direction still satisfies every constraint. A
    /// disc that contains the source cannot be avoided and exhausts the
    /// simplifier.
    pub fn can_avoid_disc(&mut self, point: Point, radius: ChordAngle, disc_on_left: bool) -> bool {
        if self.window == Window::Exhausted {
            return false;
        }
        self.check_order(point, radius);

        let semiwidth = self.semiwidth(point, radius, Round::Up);
        if semiwidth >= PI {
            log::debug!("avoid disc contains the source; window exhausted");
            self.window = Window::Exhausted;
            return false;
        }

        // Directions turning away from the disc by more than 90 degrees are
        // fine on either side, so the far bound is a quarter turn.
        let center = self.direction(point);
        let (d_left, d_right) = if disc_on_left {
            (FRAC_PI_2, semiwidth)
        } else {
            (semiwidth, FRAC_PI_2)
        };
        let range = RangeToAvoid {
            interval: S1Interval::from_endpoints(
                remainder_2pi(center - d_right),
                remainder_2pi(center + d_left),
            ),
            disc_on_left,
        };

        if let Window::Unconstrained { pending } = &mut self.window {
            pending.push(range);
            return true;
        }
        self.window = Window::from_interval(avoid_range(self.window.interval(), range));
        self.report_exhausted("avoid disc")
    }

    /// Whether the edge from the source to `dst` satisfies every constraint
    /// registered so far.
    ///
    /// Always false for edges longer than 90 degrees.
    pub fn can_extend(&self, dst: Point) -> bool {
        if ChordAngle::between(self.source, dst) > ChordAngle::RIGHT {
            return false;
        }
        let dir = self.direction(dst);
        match &self.window {
            Window::Unconstrained { pending } => {
                !pending.iter().any(|range| range.interval.contains(dir))
            }
            Window::Constrained(window) => window.contains(dir),
            Window::Exhausted => false,
        }
    }

    /// Bearing of `p` in the tangent frame at the source.
    ///
    /// The absolute error is at most `10 * DBL_ERROR` for points within 90
    /// degrees of the source.
    #[inline]
    fn direction(&self, p: Point) -> f64 {
        p.dot(self.y_dir).atan2(p.dot(self.x_dir))
    }

    /// Half-width of the range of bearings that hit the disc, rounded so the
    /// result is conservative in the requested direction.
    ///
    /// Returns π when the disc contains the source. A result rounded down may
    /// be negative.
    fn semiwidth(&self, p: Point, r: ChordAngle, round: Round) -> f64 {
        let round = round.sign();
        // The squared chord distance has absolute error 64 * DBL_ERROR^2 or less.
        let r2 = r.length2();
        let a2 = ChordAngle::between(self.source, p).length2() - 64.0 * DBL_ERROR * DBL_ERROR * round;
        if a2 <= r2 {
            return PI;
        }

        // sin^2 of an angle from its squared chord: sin^2 = c2 * (1 - c2 / 4).
        let sin2_r = r2 * (1.0 - 0.25 * r2);
        let sin2_a = a2 * (1.0 - 0.25 * a2);
        let semiwidth = (sin2_r / sin2_a).sqrt().asin();

        // Direction error counts twice (interval center and tested direction),
        // plus 4 * DBL_ERROR for center +/- semiwidth and a 17 * DBL_ERROR
        // relative error in the semiwidth itself.
        let err = (2.0 * 10.0 + 4.0) * DBL_ERROR + 17.0 * DBL_ERROR * semiwidth;
        semiwidth + round * err
    }

    /// Returns whether the window is non-empty, logging if it just became empty.
    fn report_exhausted(&self, what: &str) -> bool {
        if self.window == Window::Exhausted {
            log::debug!("{} emptied the window; simplifier exhausted", what);
            return false;
        }
        true
    }

    #[cfg(feature = "ordering-check")]
    #[inline]
    fn check_order(&mut self, point: Point, radius: ChordAngle) {
        let min_distance = ChordAngle::between(self.source, point).to_radians() - radius.to_radians();
        self.ordering.observe(min_distance);
    }

    #[cfg(not(feature = "ordering-check"))]
    #[inline(always)]
    fn check_order(&mut self, _point: Point, _radius: ChordAngle) {}

    /// Number of discs registered closer to the source than an earlier one.
    #[cfg(feature = "ordering-check")]
    pub fn ordering_violations(&self) -> u64 {
        self.ordering.violations
    }
}

/// Tracks the largest minimum distance registered so far.
#[cfg(feature = "ordering-check")]
#[derive(Debug, Clone, Copy)]
struct OrderingCheck {
    max_min_distance: f64,
    violations: u64,
}

#[cfg(feature = "ordering-check")]
impl Default for OrderingCheck {
    fn default() -> Self {
        Self {
            max_min_distance: f64::NEG_INFINITY,
            violations: 0,
        }
    }
}

#[cfg(feature = "ordering-check")]
impl OrderingCheck {
    fn observe(&mut self, min_distance: f64) {
        if min_distance < self.max_min_distance {
            self.violations += 1;
            log::warn!(
                "simplifier disc registered out of order: min distance {:.3e} rad after {:.3e} rad",
                min_distance,
                self.max_min_distance
            );
        } else {
            self.max_min_distance = min_distance;
        }
    }
}
