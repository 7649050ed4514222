use super::{Chain, ChainPosition, Dimension, Edge, Shape};
use crate::Point;

/// A set of points. Each point is a degenerate edge in its own chain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointVector {
    points: Vec<Point>,
}

impl PointVector {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl Shape for PointVector {
    fn num_edges(&self) -> usize {
        self.points.len()
    }

    fn edge(&self, edge_id: usize) -> Edge {
        let p = self.points[edge_id];
        Edge::new(p, p)
    }

    fn dimension(&self) -> Dimension {
        Dimension::Point
    }

    fn num_chains(&self) -> usize {
        self.points.len()
    }

    fn chain(&self, chain_id: usize) -> Chain {
        Chain {
            start: chain_id,
            length: 1,
        }
    }

    fn chain_edge(&self, chain_id: usize, offset: usize) -> Edge {
        debug_assert_eq!(offset, 0);
        self.edge(chain_id)
    }

    fn chain_position(&self, edge_id: usize) -> ChainPosition {
        ChainPosition {
            chain_id: edge_id,
            offset: 0,
        }
    }
}
