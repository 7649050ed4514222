use super::{Chain, ChainPosition, Dimension, Edge, Shape};
use crate::Point;

/// An open chain of vertices. A polyline with fewer than two vertices has no edges.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    vertices: Vec<Point>,
}

impl Polyline {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }
}

impl Shape for Polyline {
    fn num_edges(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    fn edge(&self, edge_id: usize) -> Edge {
        Edge::new(self.vertices[edge_id], self.vertices[edge_id + 1])
    }

    fn dimension(&self) -> Dimension {
        Dimension::Polyline
    }

    fn num_chains(&self) -> usize {
        self.num_edges().min(1)
    }

    fn chain(&self, chain_id: usize) -> Chain {
        debug_assert_eq!(chain_id, 0);
        Chain {
            start: 0,
            length: self.num_edges(),
        }
    }

    fn chain_edge(&self, chain_id: usize, offset: usize) -> Edge {
        debug_assert_eq!(chain_id, 0);
        self.edge(offset)
    }

    fn chain_position(&self, edge_id: usize) -> ChainPosition {
        ChainPosition {
            chain_id: 0,
            offset: edge_id,
        }
    }
}
