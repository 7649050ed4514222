//! Error types for constructing geometry.

use std::fmt;

/// Errors that can occur while building points, shapes or cell ids.
///
/// The simplifier and the cell decoder never return errors; their failure
/// modes are boolean outcomes. These errors are reserved for construction
/// paths that take untrusted input.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A `lat:lng` token could not be parsed, or was out of range.
    InvalidLatLng(String),

    /// Raw cell id parts do not name a cell.
    InvalidCellId { face: u8, level: u8, i: u32, j: u32 },

    /// A shape description was malformed (e.g. a polyline with one vertex).
    InvalidShape(String),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::InvalidLatLng(token) => {
                write!(f, "invalid lat:lng token {:?}", token)
            }
            GeometryError::InvalidCellId { face, level, i, j } => {
                write!(
                    f,
                    "invalid cell id: face={} level={} i={} j={}",
                    face, level, i, j
                )
            }
            GeometryError::InvalidShape(msg) => {
                write!(f, "invalid shape: {}", msg)
            }
        }
    }
}

impl std::error::Error for GeometryError {}
