//! Edge-level building blocks for spatial indexing on the unit sphere (S2).
//!
//! Two components sit on top of a small set of geometry primitives:
//!
//! - [`IndexCellData`] decodes the contents of one index cell into a flat,
//!   dimension-grouped buffer of edges with their ids and chain positions,
//!   and is reused cheaply as a traversal moves from cell to cell.
//! - [`PolylineSimplifier`] decides whether an output edge from a fixed
//!   source vertex can pass through a set of target discs while avoiding a
//!   set of other discs, with all floating-point error accounted for.
//!
//! # Example
//!
//! ```
//! use s2_geocore::{textformat, CellId, Dimension, IndexCellData};
//!
//! let index = textformat::make_index("1:1 # 0:0, 0:1, 1:1 # 0:0, 0:3, 3:0").unwrap();
//! let cell = index.whole_cell();
//! let id = CellId::from_face(0).unwrap();
//!
//! let mut data = IndexCellData::new();
//! data.load_cell(&index, id, &cell);
//!
//! assert_eq!(data.edges().len(), 1 + 2 + 3);
//! assert_eq!(data.dim_edges(Dimension::Polyline).len(), 2);
//! assert_eq!(data.shape_edges(2)[0].chain_id(), 0);
//! ```

mod error;
mod types;

pub mod cell;
pub mod cell_data;
pub mod index;
pub mod s1;
pub mod shape;
pub mod simplifier;
pub mod textformat;

// Instrumentation (zero-sized unless the `timing` feature is enabled)
pub(crate) mod timing;

pub use cell::{Cell, CellId};
pub use cell_data::{DecodeConfig, EdgeAndIdChain, IndexCellData, Region, ShapeRegion};
pub use error::GeometryError;
pub use index::{ClippedShape, IndexCell, ShapeIndex, VecShapeIndex};
pub use shape::{Dimension, Edge, EdgeId, Shape, ShapeId};
pub use simplifier::{Phase, PolylineSimplifier};
pub use timing::DecodeTimings;
pub use types::{Axis, Point, PointLike};
