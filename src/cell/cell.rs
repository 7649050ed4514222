use super::projection::{face_uv_to_3d, point_to_face_uv};
use super::CellId;
use crate::Point;

/// A cube-map cell with its geometry decoded from a `CellId`.
///
/// Building one costs a handful of square roots, which is why
/// `IndexCellData` memoizes it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    id: CellId,
    face: u8,
    level: u8,
    /// `[u_lo, u_hi, v_lo, v_hi]`
    uv: [f64; 4],
}

impl Cell {
    pub fn from_cell_id(id: CellId) -> Self {
        Self {
            id,
            face: id.face(),
            level: id.level(),
            uv: id.uv_bounds(),
        }
    }

    #[inline]
    pub fn id(&self) -> CellId {
        self.id
    }

    #[inline]
    pub fn face(&self) -> u8 {
        self.face
    }

    #[inline]
    pub fn level(&self) -> u8 {
        self.level
    }

    #[inline]
    pub fn uv_bounds(&self) -> [f64; 4] {
        self.uv
    }

    /// Vertex `k` (mod 4) in counter-clockwise UV order starting at (u_lo, v_lo).
    pub fn vertex(&self, k: usize) -> Point {
        let [u0, u1, v0, v1] = self.uv;
        let (u, v) = match k % 4 {
            0 => (u0, v0),
            1 => (u1, v0),
            2 => (u1, v1),
            _ => (u0, v1),
        };
        Point::from_glam(face_uv_to_3d(self.face, u, v))
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.id.to_point()
    }

    /// Whether `p` projects into this cell's closed UV rectangle on its face.
    pub fn contains_point(&self, p: Point) -> bool {
        let (face, u, v) = point_to_face_uv(p.to_glam());
        let [u0, u1, v0, v1] = self.uv;
        face == self.face && u >= u0 && u <= u1 && v >= v0 && v <= v1
    }
}

impl From<CellId> for Cell {
    #[inline]
    fn from(id: CellId) -> Self {
        Self::from_cell_id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_cell_vertices() {
        let cell = Cell::from(CellId::from_face(4).unwrap());
        assert_eq!(cell.level(), 0);
        for (bound, expected) in cell.uv_bounds().into_iter().zip([-1.0, 1.0, -1.0, 1.0]) {
            assert!((bound - expected).abs() < 1e-15);
        }
        let inv_sqrt3 = 1.0 / 3f64.sqrt();
        for k in 0..4 {
            let v = cell.vertex(k);
            assert!((v.z - inv_sqrt3).abs() < 1e-15);
            assert!((v.x.abs() - inv_sqrt3).abs() < 1e-15);
        }
        assert_eq!(cell.vertex(0), cell.vertex(4));
    }

    #[test]
    fn test_contains_center_not_neighbor() {
        let parent = CellId::from_face_ij(1, 6, 20, 41).unwrap();
        let kids = parent.children().unwrap();
        let cell = Cell::from(kids[0]);
        assert!(cell.contains_point(cell.center()));
        assert!(!cell.contains_point(Cell::from(kids[2]).center()));
        assert!(Cell::from(parent).contains_point(cell.center()));
    }
}
