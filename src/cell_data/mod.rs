//! Decoding of index cells into flat, grouped edge buffers.
//!
//! Queries that walk an index cell by cell (validation in particular) look
//! up the same edges many times, and often need the edge geometry together
//! with its edge id, chain and offset. `IndexCellData` decodes a cell once
//! into a single buffer so that all of these are plain slice reads:
//!
//! ```text
//! |     0D Shapes     |     1D Shapes     |     2D Shapes     |  Dimensions
//! |  5  |   1   |  3  |  2  |   7   |  0  |  6  |   4   |  8  |  Shapes
//! [ ......................... Edges ..........................]  Edges
//! ```
//!
//! Within a dimension, shapes keep the order of the index cell; within a
//! shape, edges keep the order of the clipped shape's edge list.

mod edge;
#[cfg(feature = "parallel")]
mod parallel;

pub use edge::{EdgeAndIdChain, Region, ShapeRegion};
#[cfg(feature = "parallel")]
pub use parallel::for_each_cell_par;

use crate::cell::{Cell, CellId};
use crate::index::{ClippedShape, IndexCell, ShapeIndex};
use crate::shape::{Dimension, ShapeId};
use crate::timing::{DecodeTimings, Timer};
use crate::Point;
use std::cell::OnceCell;

/// Configuration for cell decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeConfig {
    /// Dimensions whose shapes are decoded, indexed by `Dimension::index()`.
    pub dim_wanted: [bool; 3],
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            dim_wanted: [true; 3],
        }
    }
}

impl DecodeConfig {
    /// Decode only the listed dimensions.
    pub fn only(dims: &[Dimension]) -> Self {
        let mut dim_wanted = [false; 3];
        for dim in dims {
            dim_wanted[dim.index()] = true;
        }
        Self { dim_wanted }
    }
}

/// Decoded contents of the currently loaded index cell.
///
/// One instance is meant to be reused across a traversal: call
/// [`load_cell`](Self::load_cell) for each visited cell and read the edge
/// views in between. Loading the cell that is already loaded (same index
/// object, same cell id) does nothing.
///
/// The cached cell and center use `OnceCell`, so this type is not `Sync`.
/// Give each worker thread its own instance.
#[derive(Debug)]
pub struct IndexCellData<'a, I: ShapeIndex + ?Sized> {
    index: Option<&'a I>,
    cell: Option<&'a IndexCell>,
    cell_id: CellId,

    // Computing these can cost as much as decoding the edges, so they are
    // built on first use and kept until a different cell is loaded.
    s2_cell: OnceCell<Cell>,
    center: OnceCell<Point>,

    dim_wanted: [bool; 3],

    edges: Vec<EdgeAndIdChain>,
    shape_regions: Vec<ShapeRegion>,
    dim_regions: [Region; 3],

    timings: DecodeTimings,
}

impl<'a, I: ShapeIndex + ?Sized> Default for IndexCellData<'a, I> {
    fn default() -> Self {
        Self::with_config(DecodeConfig::default())
    }
}

impl<'a, I: ShapeIndex + ?Sized> IndexCellData<'a, I> {
    /// Decoder for all three dimensions.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DecodeConfig) -> Self {
        Self {
            index: None,
            cell: None,
            cell_id: CellId::default(),
            s2_cell: OnceCell::new(),
            center: OnceCell::new(),
            dim_wanted: config.dim_wanted,
            edges: Vec::new(),
            shape_regions: Vec::new(),
            dim_regions: [Region::default(); 3],
            timings: DecodeTimings::default(),
        }
    }

    /// Decode `cell`, the contents of cell `id` in `index`.
    ///
    /// The caller must pass the contents that belong to `(index, id)`; they
    /// are not checked. If `index` is the same object and `id` the same cell
    /// as in the previous call, nothing is recomputed.
    ///
    /// Clipped shapes whose id is unknown to the index are skipped.
    pub fn load_cell(&mut self, index: &'a I, id: CellId, cell: &'a IndexCell) {
        if let Some(prev) = self.index {
            if std::ptr::addr_eq(prev, index) && self.cell_id == id {
                self.timings.record_cache_hit();
                return;
            }
        }

        let timer = Timer::start();
        self.index = Some(index);
        self.cell = Some(cell);
        self.cell_id = id;

        self.s2_cell.take();
        self.center.take();

        self.edges.clear();
        self.shape_regions.clear();
        self.dim_regions = [Region::default(); 3];

        let (Some(min_dim), Some(max_dim)) = (
            self.dim_wanted.iter().position(|&w| w),
            self.dim_wanted.iter().rposition(|&w| w),
        ) else {
            // No dimensions wanted.
            self.timings.record_decode(0, timer.elapsed());
            return;
        };

        for dim in min_dim..=max_dim {
            let dim_start = self.edges.len();

            // E.g. dimensions 0 and 2 wanted but not 1.
            if self.dim_wanted[dim] {
                for clipped in cell.shapes() {
                    let Some(shape) = index.shape(clipped.shape_id()) else {
                        if dim == min_dim {
                            log::warn!(
                                "cell {}: clipped shape {} is not in the index",
                                id,
                                clipped.shape_id()
                            );
                        }
                        continue;
                    };
                    if shape.dimension().index() != dim {
                        continue;
                    }

                    let shape_start = self.edges.len();
                    for &edge_id in clipped.edges() {
                        // Resolve the chain once and fetch the edge by
                        // position, instead of letting edge() search again.
                        let pos = shape.chain_position(edge_id as usize);
                        let edge = shape.chain_edge(pos.chain_id, pos.offset);
                        self.edges.push(EdgeAndIdChain::new(edge, edge_id, pos));
                    }

                    self.shape_regions.push(ShapeRegion {
                        shape_id: clipped.shape_id(),
                        region: Region::new(shape_start, self.edges.len() - shape_start),
                    });
                }
            }

            self.dim_regions[dim] = Region::new(dim_start, self.edges.len() - dim_start);
        }
        // Dimensions past the last wanted one are empty at the end of the buffer.
        for region in &mut self.dim_regions[max_dim + 1..] {
            *region = Region::new(self.edges.len(), 0);
        }

        self.timings.record_decode(self.edges.len(), timer.elapsed());
    }

    #[inline]
    pub fn cell_id(&self) -> CellId {
        self.cell_id
    }

    /// The loaded cell, built on first call and cached until the next new load.
    ///
    /// Before any load this describes `CellId::default()`.
    pub fn cell(&self) -> Cell {
        *self.s2_cell.get_or_init(|| Cell::from_cell_id(self.cell_id))
    }

    /// Center of the loaded cell, computed on first call and cached.
    pub fn center(&self) -> Point {
        *self.center.get_or_init(|| self.cell_id.to_point())
    }

    /// Whether `cell()` has been computed for the current load.
    #[inline]
    pub fn is_cell_cached(&self) -> bool {
        self.s2_cell.get().is_some()
    }

    /// Whether `center()` has been computed for the current load.
    #[inline]
    pub fn is_center_cached(&self) -> bool {
        self.center.get().is_some()
    }

    #[inline]
    pub fn index(&self) -> Option<&'a I> {
        self.index
    }

    #[inline]
    pub fn index_cell(&self) -> Option<&'a IndexCell> {
        self.cell
    }

    /// Clipped shapes of the loaded cell, in storage order.
    pub fn clipped_shapes(&self) -> &'a [ClippedShape] {
        self.cell.map(IndexCell::shapes).unwrap_or(&[])
    }

    pub fn num_clipped(&self) -> usize {
        self.clipped_shapes().len()
    }

    #[inline]
    pub fn dim_wanted(&self, dim: Dimension) -> bool {
        self.dim_wanted[dim.index()]
    }

    /// All decoded edges.
    #[inline]
    pub fn edges(&self) -> &[EdgeAndIdChain] {
        &self.edges
    }

    /// Per-shape regions, ordered by dimension and then cell storage order.
    #[inline]
    pub fn shape_regions(&self) -> &[ShapeRegion] {
        &self.shape_regions
    }

    pub fn shape_region(&self, shape_id: ShapeId) -> Option<Region> {
        self.shape_regions
            .iter()
            .find(|r| r.shape_id == shape_id)
            .map(|r| r.region)
    }

    /// Edges of one shape; empty if the shape is not in the cell or not wanted.
    pub fn shape_edges(&self, shape_id: ShapeId) -> &[EdgeAndIdChain] {
        match self.shape_region(shape_id) {
            Some(region) => &self.edges[region.range()],
            None => &[],
        }
    }

    #[inline]
    pub fn dim_region(&self, dim: Dimension) -> Region {
        self.dim_regions[dim.index()]
    }

    /// Edges of every shape of the given dimension.
    pub fn dim_edges(&self, dim: Dimension) -> &[EdgeAndIdChain] {
        &self.edges[self.dim_region(dim).range()]
    }

    /// Edges of every shape with dimension in `lo..=hi`.
    pub fn dim_range_edges(&self, lo: Dimension, hi: Dimension) -> &[EdgeAndIdChain] {
        if lo > hi {
            return &[];
        }
        let mut start = self.dim_regions[lo.index()].start;
        let mut len = 0;
        for region in &self.dim_regions[lo.index()..=hi.index()] {
            start = start.min(region.start);
            len += region.len;
        }
        &self.edges[start..start + len]
    }

    /// Decode counters (zero-sized unless the `timing` feature is enabled).
    #[inline]
    pub fn timings(&self) -> &DecodeTimings {
        &self.timings
    }
}
