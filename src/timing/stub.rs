use std::time::Duration;

/// Dummy timer when `timing` is disabled (zero-sized).
pub struct Timer;

impl Timer {
    #[inline(always)]
    pub fn start() -> Self {
        Self
    }

    #[inline(always)]
    pub fn elapsed(&self) -> Duration {
        Duration::ZERO
    }
}

/// Dummy decode counters when `timing` is disabled (zero-sized).
#[derive(Debug, Clone, Copy, Default)]
pub struct DecodeTimings;

impl DecodeTimings {
    #[inline(always)]
    pub fn record_cache_hit(&mut self) {}

    #[inline(always)]
    pub fn record_decode(&mut self, _edges: usize, _elapsed: Duration) {}

    #[inline(always)]
    pub fn merge(&mut self, _other: &DecodeTimings) {}

    #[inline(always)]
    pub fn report(&self) {}
}
