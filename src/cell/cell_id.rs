use super::projection::{face_uv_to_3d, point_to_face_uv, st_to_uv, uv_to_st};
use crate::{GeometryError, Point};
use std::fmt;

/// Deepest subdivision level. Each face is split into `2^MAX_LEVEL` cells per side.
pub const MAX_LEVEL: u8 = 28;

pub const NUM_FACES: u8 = 6;

const IJ_BITS: u32 = 28;
const IJ_MASK: u64 = (1 << IJ_BITS) - 1;
const LEVEL_SHIFT: u32 = 2 * IJ_BITS;
const FACE_SHIFT: u32 = LEVEL_SHIFT + 5;

/// Identifier of a cell in the cube-map hierarchy.
///
/// Layout (high to low bits): face (3), level (5), i (28), j (28). The (i, j)
/// coordinates index the cell within its face at its own level, in ST space
/// (after the quadratic UV→ST transform), so a cell at level `L` covers
/// `[i, i + 1) / 2^L` along s and `[j, j + 1) / 2^L` along t.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CellId(u64);

impl CellId {
    /// The level-0 cell covering a whole cube face.
    pub fn from_face(face: u8) -> Result<Self, GeometryError> {
        Self::from_face_ij(face, 0, 0, 0)
    }

    pub fn from_face_ij(face: u8, level: u8, i: u32, j: u32) -> Result<Self, GeometryError> {
        let side = 1u64 << level.min(MAX_LEVEL);
        if face >= NUM_FACES || level > MAX_LEVEL || i as u64 >= side || j as u64 >= side {
            return Err(GeometryError::InvalidCellId { face, level, i, j });
        }
        Ok(Self::pack(face, level, i, j))
    }

    #[inline]
    fn pack(face: u8, level: u8, i: u32, j: u32) -> Self {
        CellId(
            ((face as u64) << FACE_SHIFT)
                | ((level as u64) << LEVEL_SHIFT)
                | ((i as u64) << IJ_BITS)
                | j as u64,
        )
    }

    /// Cell at `level` containing `p`. Levels past `MAX_LEVEL` are clamped.
    pub fn from_point(p: Point, level: u8) -> Self {
        let level = level.min(MAX_LEVEL);
        let (face, u, v) = point_to_face_uv(p.to_glam());
        let side = (1u64 << level) as f64;
        let max_ij = (1u32 << level) - 1;
        let to_ij = |st: f64| ((st * side).max(0.0) as u32).min(max_ij);
        Self::pack(face, level, to_ij(uv_to_st(u)), to_ij(uv_to_st(v)))
    }

    /// Rebuild from a raw id, rejecting bit patterns that name no cell.
    pub fn from_raw(raw: u64) -> Option<Self> {
        let id = CellId(raw);
        id.is_valid().then_some(id)
    }

    #[inline]
    pub fn raw(self) -> u64 {
        self.0
    }

    #[inline]
    pub fn face(self) -> u8 {
        (self.0 >> FACE_SHIFT) as u8
    }

    #[inline]
    pub fn level(self) -> u8 {
        ((self.0 >> LEVEL_SHIFT) & 0x1f) as u8
    }

    #[inline]
    pub fn ij(self) -> (u32, u32) {
        (
            ((self.0 >> IJ_BITS) & IJ_MASK) as u32,
            (self.0 & IJ_MASK) as u32,
        )
    }

    pub fn is_valid(self) -> bool {
        let (i, j) = self.ij();
        let level = self.level();
        level <= MAX_LEVEL
            && self.face() < NUM_FACES
            && (i as u64) < (1u64 << level)
            && (j as u64) < (1u64 << level)
    }

    pub fn parent(self) -> Option<Self> {
        let level = self.level();
        if level == 0 {
            return None;
        }
        let (i, j) = self.ij();
        Some(Self::pack(self.face(), level - 1, i >> 1, j >> 1))
    }

    /// The four children, in (i, j) order (0,0), (1,0), (1,1), (0,1).
    pub fn children(self) -> Option<[Self; 4]> {
        let level = self.level();
        if level >= MAX_LEVEL {
            return None;
        }
        let (i, j) = self.ij();
        let (ci, cj) = (i << 1, j << 1);
        let face = self.face();
        Some([
            Self::pack(face, level + 1, ci, cj),
            Self::pack(face, level + 1, ci + 1, cj),
            Self::pack(face, level + 1, ci + 1, cj + 1),
            Self::pack(face, level + 1, ci, cj + 1),
        ])
    }

    /// Whether `other` is this cell or one of its descendants.
    pub fn contains(self, other: CellId) -> bool {
        if self.face() != other.face() || other.level() < self.level() {
            return false;
        }
        let shift = other.level() - self.level();
        let (i, j) = self.ij();
        let (oi, oj) = other.ij();
        (oi >> shift) == i && (oj >> shift) == j
    }

    /// ST bounds as `[s_lo, s_hi, t_lo, t_hi]`.
    pub fn st_bounds(self) -> [f64; 4] {
        let side = (1u64 << self.level()) as f64;
        let (i, j) = self.ij();
        [
            i as f64 / side,
            (i + 1) as f64 / side,
            j as f64 / side,
            (j + 1) as f64 / side,
        ]
    }

    /// UV bounds as `[u_lo, u_hi, v_lo, v_hi]`.
    pub fn uv_bounds(self) -> [f64; 4] {
        let [s0, s1, t0, t1] = self.st_bounds();
        [st_to_uv(s0), st_to_uv(s1), st_to_uv(t0), st_to_uv(t1)]
    }

    /// Center of the cell in UV coordinates (the image of the ST center).
    pub fn center_uv(self) -> (f64, f64) {
        let [s0, s1, t0, t1] = self.st_bounds();
        (st_to_uv(0.5 * (s0 + s1)), st_to_uv(0.5 * (t0 + t1)))
    }

    /// Unit point at the center of the cell.
    pub fn to_point(self) -> Point {
        let (u, v) = self.center_uv();
        Point::from_glam(face_uv_to_3d(self.face(), u, v))
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (i, j) = self.ij();
        write!(f, "{}/{}/{},{}", self.face(), self.level(), i, j)
    }
}
