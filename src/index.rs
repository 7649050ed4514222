//! The shape-index abstraction consumed by `IndexCellData`.
//!
//! An index owns shapes (addressed by `ShapeId`) and, for each of its cells,
//! the list of clipped shapes: which edges of which shapes intersect the
//! cell. Building those cell contents is the index's job; this module only
//! defines the types and a simple owning index.

use crate::shape::{EdgeId, Shape, ShapeId};

/// Read access to the shapes of an index.
pub trait ShapeIndex {
    /// The shape with the given id, or `None` if the id is unused.
    fn shape(&self, id: ShapeId) -> Option<&dyn Shape>;

    /// One past the largest shape id in use.
    fn num_shape_ids(&self) -> usize;
}

/// The part of a shape that intersects one index cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClippedShape {
    shape_id: ShapeId,
    /// Whether the cell center is inside the shape (always false without an interior).
    contains_center: bool,
    /// Edge ids intersecting the cell, in the order the index stored them.
    edges: Vec<EdgeId>,
}

impl ClippedShape {
    pub fn new(shape_id: ShapeId, contains_center: bool, edges: Vec<EdgeId>) -> Self {
        Self {
            shape_id,
            contains_center,
            edges,
        }
    }

    #[inline]
    pub fn shape_id(&self) -> ShapeId {
        self.shape_id
    }

    #[inline]
    pub fn contains_center(&self) -> bool {
        self.contains_center
    }

    #[inline]
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_edge(&self, id: EdgeId) -> bool {
        // Clipped shapes rarely hold more than a handful of edges.
        self.edges.contains(&id)
    }
}

/// Contents of one index cell: its clipped shapes in storage order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexCell {
    shapes: Vec<ClippedShape>,
}

impl IndexCell {
    pub fn new(shapes: Vec<ClippedShape>) -> Self {
        Self { shapes }
    }

    pub fn add(&mut self, clipped: ClippedShape) {
        self.shapes.push(clipped);
    }

    #[inline]
    pub fn shapes(&self) -> &[ClippedShape] {
        &self.shapes
    }

    #[inline]
    pub fn num_clipped(&self) -> usize {
        self.shapes.len()
    }

    /// Total number of clipped edges over all shapes.
    pub fn num_edges(&self) -> usize {
        self.shapes.iter().map(ClippedShape::num_edges).sum()
    }

    pub fn find_by_shape_id(&self, shape_id: ShapeId) -> Option<&ClippedShape> {
        self.shapes.iter().find(|c| c.shape_id == shape_id)
    }
}

/// An index that owns its shapes in a vector; shape ids are insertion positions.
#[derive(Debug, Default)]
pub struct VecShapeIndex {
    shapes: Vec<Box<dyn Shape>>,
}

impl VecShapeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shape and return its id.
    pub fn add(&mut self, shape: Box<dyn Shape>) -> ShapeId {
        self.shapes.push(shape);
        (self.shapes.len() - 1) as ShapeId
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn num_edges(&self) -> usize {
        self.shapes.iter().map(|s| s.num_edges()).sum()
    }

    /// A single cell holding every edge of every shape, in id order.
    ///
    /// Stands in for a real index when a whole small dataset fits in one cell.
    pub fn whole_cell(&self) -> IndexCell {
        let shapes = self
            .shapes
            .iter()
            .enumerate()
            .filter(|(_, s)| s.num_edges() > 0)
            .map(|(id, s)| {
                let edges = (0..s.num_edges() as EdgeId).collect();
                ClippedShape::new(id as ShapeId, false, edges)
            })
            .collect();
        IndexCell::new(shapes)
    }
}

impl ShapeIndex for VecShapeIndex {
    fn shape(&self, id: ShapeId) -> Option<&dyn Shape> {
        self.shapes.get(id as usize).map(|s| s.as_ref())
    }

    fn num_shape_ids(&self) -> usize {
        self.shapes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Dimension, PointVector, Polyline};
    use crate::Point;

    #[test]
    fn test_vec_index_ids_and_whole_cell() {
        let mut index = VecShapeIndex::new();
        let a = index.add(Box::new(PointVector::new(vec![Point::new(1.0, 0.0, 0.0)])));
        let empty = index.add(Box::new(Polyline::default()));
        let b = index.add(Box::new(Polyline::new(vec![
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
            Point::new(0.0, 0.0, 1.0),
        ])));
        assert_eq!((a, empty, b), (0, 1, 2));
        assert_eq!(index.num_shape_ids(), 3);
        assert_eq!(index.num_edges(), 3);
        assert_eq!(index.shape(b).map(|s| s.dimension()), Some(Dimension::Polyline));
        assert!(index.shape(3).is_none());

        let cell = index.whole_cell();
        assert_eq!(cell.num_clipped(), 2);
        assert_eq!(cell.num_edges(), 3);
        assert!(cell.find_by_shape_id(empty).is_none());
        let clipped = cell.find_by_shape_id(b).unwrap();
        assert_eq!(clipped.edges(), &[0, 1]);
        assert!(clipped.contains_edge(1));
        assert!(!clipped.contains_edge(2));
    }
}
