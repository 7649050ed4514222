//! Zero-cost instrumentation for cell decoding.
//!
//! When the `timing` feature is enabled, `IndexCellData` counts loads, cache
//! hits and decoded edges, and accumulates time spent decoding.
//!
//! When disabled, all types become zero-sized and all methods compile away.

#[cfg(feature = "timing")]
mod real;
#[cfg(not(feature = "timing"))]
mod stub;

#[cfg(feature = "timing")]
pub use real::*;
#[cfg(not(feature = "timing"))]
pub use stub::*;
