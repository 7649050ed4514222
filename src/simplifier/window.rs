use crate::s1::S1Interval;

/// A forbidden range of bearings, queued until the window is first narrowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeToAvoid {
    pub(super) interval: S1Interval,
    pub(super) disc_on_left: bool,
}

impl RangeToAvoid {
    #[inline]
    pub fn interval(&self) -> S1Interval {
        self.interval
    }

    /// Whether the avoided disc must lie to the left of the output edge.
    #[inline]
    pub fn disc_on_left(&self) -> bool {
        self.disc_on_left
    }
}

/// Which stage of narrowing a simplifier is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No target disc has narrowed the window yet; avoid discs are queued.
    Unconstrained,
    /// The window is a proper, non-empty interval.
    Constrained,
    /// The window is empty. Nothing can make it non-empty again.
    Exhausted,
}

/// Acceptable bearings for the output edge.
///
/// Subtracting an interval from the full circle has no unique answer (the
/// complement of a closed arc on a circle is open), so avoid constraints wait
/// in `pending` until the first target disc gives the window two ends.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Window {
    Unconstrained { pending: Vec<RangeToAvoid> },
    Constrained(S1Interval),
    Exhausted,
}

impl Default for Window {
    fn default() -> Self {
        Window::Unconstrained {
            pending: Vec::new(),
        }
    }
}

impl Window {
    /// Wrap a narrowed interval, collapsing empty results to `Exhausted`.
    #[inline]
    pub(super) fn from_interval(interval: S1Interval) -> Self {
        if interval.is_empty() {
            Window::Exhausted
        } else {
            Window::Constrained(interval)
        }
    }

    pub(super) fn phase(&self) -> Phase {
        match self {
            Window::Unconstrained { .. } => Phase::Unconstrained,
            Window::Constrained(_) => Phase::Constrained,
            Window::Exhausted => Phase::Exhausted,
        }
    }

    /// The window as a plain interval (full, proper or empty).
    pub(super) fn interval(&self) -> S1Interval {
        match self {
            Window::Unconstrained { .. } => S1Interval::FULL,
            Window::Constrained(interval) => *interval,
            Window::Exhausted => S1Interval::EMPTY,
        }
    }

    pub(super) fn pending(&self) -> &[RangeToAvoid] {
        match self {
            Window::Unconstrained { pending } => pending,
            _ => &[],
        }
    }
}

/// Remove `avoid` from `window`.
///
/// When `avoid` lies strictly inside the window, its complement within the
/// window has two pieces. Only the piece on the side `disc_on_left` asks for
/// is kept: with discs registered in order of distance, the other side can
/// never hold a valid next vertex.
pub(super) fn avoid_range(window: S1Interval, avoid: RangeToAvoid) -> S1Interval {
    if window.contains_interval(&avoid.interval) {
        if avoid.disc_on_left {
            S1Interval::from_endpoints(window.lo(), avoid.interval.lo())
        } else {
            S1Interval::from_endpoints(avoid.interval.hi(), window.hi())
        }
    } else {
        window.intersection(&avoid.interval.complement())
    }
}
