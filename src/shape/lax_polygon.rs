use super::{Chain, ChainPosition, Dimension, Edge, Shape};
use crate::Point;

/// A polygon made of loops, with no validity requirements on the loops.
///
/// Each loop of `n` vertices contributes `n` edges (including the closing
/// edge) and is one chain. Degenerate loops of one or two vertices are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct LaxPolygon {
    loops: Vec<Vec<Point>>,
    /// `cumulative_edges[i]` is the number of edges in loops `0..i`.
    cumulative_edges: Vec<usize>,
}

impl LaxPolygon {
    pub fn new(loops: Vec<Vec<Point>>) -> Self {
        let mut cumulative_edges = Vec::with_capacity(loops.len() + 1);
        let mut total = 0;
        cumulative_edges.push(0);
        for l in &loops {
            total += l.len();
            cumulative_edges.push(total);
        }
        Self {
            loops,
            cumulative_edges,
        }
    }

    pub fn num_loops(&self) -> usize {
        self.loops.len()
    }

    pub fn loop_vertices(&self, i: usize) -> &[Point] {
        &self.loops[i]
    }
}

impl Default for LaxPolygon {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Shape for LaxPolygon {
    fn num_edges(&self) -> usize {
        self.cumulative_edges.last().copied().unwrap_or(0)
    }

    fn edge(&self, edge_id: usize) -> Edge {
        let pos = self.chain_position(edge_id);
        self.chain_edge(pos.chain_id, pos.offset)
    }

    fn dimension(&self) -> Dimension {
        Dimension::Polygon
    }

    fn num_chains(&self) -> usize {
        self.loops.len()
    }

    fn chain(&self, chain_id: usize) -> Chain {
        Chain {
            start: self.cumulative_edges[chain_id],
            length: self.loops[chain_id].len(),
        }
    }

    fn chain_edge(&self, chain_id: usize, offset: usize) -> Edge {
        let l = &self.loops[chain_id];
        let next = if offset + 1 == l.len() { 0 } else { offset + 1 };
        Edge::new(l[offset], l[next])
    }

    fn chain_position(&self, edge_id: usize) -> ChainPosition {
        // Last loop whose first edge id is <= edge_id. Empty loops share a
        // start with their successor and are skipped by the partition.
        let chain_id = self.cumulative_edges[1..].partition_point(|&end| end <= edge_id);
        ChainPosition {
            chain_id,
            offset: edge_id - self.cumulative_edges[chain_id],
        }
    }
}
