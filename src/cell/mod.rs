//! Cube-map cell hierarchy: cell identifiers and decoded cell geometry.
//!
//! Points are projected onto the six faces of a cube (with an S2-style
//! quadratic transform to equalize cell areas), and each face is recursively
//! split into four children per level.

mod cell;
mod cell_id;
mod projection;

pub use cell::Cell;
pub use cell_id::{CellId, MAX_LEVEL, NUM_FACES};
