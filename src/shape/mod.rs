//! Shapes: collections of edges organized into chains.
//!
//! A shape exposes its edges both by a flat edge id and by (chain, offset).
//! Resolving an edge id to its chain can require a search, so callers that
//! need both (such as `IndexCellData`) resolve the chain once and then fetch
//! the edge by position.

mod lax_polygon;
mod point_vector;
mod polyline;

pub use lax_polygon::LaxPolygon;
pub use point_vector::PointVector;
pub use polyline::Polyline;

use crate::Point;
use std::fmt;

/// Identifier of a shape within an index.
pub type ShapeId = u32;

/// Identifier of an edge within its shape.
pub type EdgeId = u32;

/// Topological dimension of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dimension {
    Point = 0,
    Polyline = 1,
    Polygon = 2,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::Point, Dimension::Polyline, Dimension::Polygon];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(dim: usize) -> Option<Self> {
        Self::ALL.get(dim).copied()
    }
}

/// A geodesic edge between two points. Point shapes use degenerate edges `(p, p)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Edge {
    pub v0: Point,
    pub v1: Point,
}

impl Edge {
    #[inline]
    pub fn new(v0: Point, v1: Point) -> Self {
        Self { v0, v1 }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.v0 == self.v1
    }
}

/// A contiguous range of edge ids `[start, start + length)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Chain {
    pub start: usize,
    pub length: usize,
}

/// Location of an edge as (chain id, offset within chain).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChainPosition {
    pub chain_id: usize,
    pub offset: usize,
}

/// A collection of edges that can be stored in a shape index.
///
/// Edge ids run from 0 to `num_edges() - 1` and are grouped into chains in
/// order: chain `c` holds edge ids `chain(c).start .. chain(c).start +
/// chain(c).length`. Methods taking ids or positions may panic when given
/// values out of range.
pub trait Shape: fmt::Debug + Send + Sync {
    fn num_edges(&self) -> usize;

    fn edge(&self, edge_id: usize) -> Edge;

    fn dimension(&self) -> Dimension;

    fn num_chains(&self) -> usize;

    fn chain(&self, chain_id: usize) -> Chain;

    /// Edge at `offset` within chain `chain_id`.
    fn chain_edge(&self, chain_id: usize, offset: usize) -> Edge;

    /// Chain and offset of the given edge id.
    fn chain_position(&self, edge_id: usize) -> ChainPosition;
}
