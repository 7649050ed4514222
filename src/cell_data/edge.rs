use crate::shape::{ChainPosition, Edge, EdgeId, ShapeId};
use std::cmp::Ordering;
use std::ops::Range;

/// An edge bundled with its edge id, chain id and offset within the chain.
///
/// Equality and ordering look only at the endpoint coordinates (v0 first,
/// then v1); two records for the same geometry from different shapes compare
/// equal.
#[derive(Debug, Clone, Copy)]
pub struct EdgeAndIdChain {
    edge: Edge,
    edge_id: EdgeId,
    chain_id: usize,
    offset: usize,
}

impl EdgeAndIdChain {
    #[inline]
    pub fn new(edge: Edge, edge_id: EdgeId, pos: ChainPosition) -> Self {
        Self {
            edge,
            edge_id,
            chain_id: pos.chain_id,
            offset: pos.offset,
        }
    }

    #[inline]
    pub fn edge(&self) -> Edge {
        self.edge
    }

    #[inline]
    pub fn edge_id(&self) -> EdgeId {
        self.edge_id
    }

    #[inline]
    pub fn chain_id(&self) -> usize {
        self.chain_id
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn chain_position(&self) -> ChainPosition {
        ChainPosition {
            chain_id: self.chain_id,
            offset: self.offset,
        }
    }
}

impl PartialEq for EdgeAndIdChain {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for EdgeAndIdChain {}

impl PartialOrd for EdgeAndIdChain {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EdgeAndIdChain {
    fn cmp(&self, other: &Self) -> Ordering {
        self.edge
            .v0
            .cmp_coords(&other.edge.v0)
            .then_with(|| self.edge.v1.cmp_coords(&other.edge.v1))
    }
}

/// A `[start, start + len)` span of the decoded edge buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    pub start: usize,
    pub len: usize,
}

impl Region {
    #[inline]
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// The region of the edge buffer holding one shape's edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeRegion {
    pub shape_id: ShapeId,
    pub region: Region,
}
