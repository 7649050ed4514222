use std::time::{Duration, Instant};

/// Timer that tracks elapsed time when timing is enabled.
pub struct Timer(Instant);

impl Timer {
    #[inline]
    pub fn start() -> Self {
        Self(Instant::now())
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }
}

/// Counters for `IndexCellData::load_cell`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecodeTimings {
    /// Total calls to `load_cell`, including cache hits.
    pub loads: u64,
    /// Calls that matched the already-loaded cell and did no work.
    pub cache_hits: u64,
    /// Edges materialized into the buffer over all decodes.
    pub edges_decoded: u64,
    /// Time spent decoding (cache hits excluded).
    pub decode_time: Duration,
}

impl DecodeTimings {
    #[inline]
    pub fn record_cache_hit(&mut self) {
        self.loads += 1;
        self.cache_hits += 1;
    }

    #[inline]
    pub fn record_decode(&mut self, edges: usize, elapsed: Duration) {
        self.loads += 1;
        self.edges_decoded += edges as u64;
        self.decode_time += elapsed;
    }

    /// Fold in counters from another decoder (e.g. a parallel worker).
    pub fn merge(&mut self, other: &DecodeTimings) {
        self.loads += other.loads;
        self.cache_hits += other.cache_hits;
        self.edges_decoded += other.edges_decoded;
        self.decode_time += other.decode_time;
    }

    pub fn report(&self) {
        let decodes = self.loads - self.cache_hits;
        let per_decode_us = if decodes > 0 {
            self.decode_time.as_secs_f64() * 1e6 / decodes as f64
        } else {
            0.0
        };
        log::info!(
            "cell decode: loads={} cache_hits={} edges={} time={:.3}ms ({:.2}us/decode)",
            self.loads,
            self.cache_hits,
            self.edges_decoded,
            self.decode_time.as_secs_f64() * 1e3,
            per_decode_us
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_merge() {
        let mut a = DecodeTimings::default();
        a.record_cache_hit();
        a.record_decode(5, Duration::from_micros(3));
        let mut b = DecodeTimings::default();
        b.record_decode(2, Duration::from_micros(1));
        a.merge(&b);
        assert_eq!(a.loads, 3);
        assert_eq!(a.cache_hits, 1);
        assert_eq!(a.edges_decoded, 7);
        assert_eq!(a.decode_time, Duration::from_micros(4));
    }
}
