pub mod geometry;
pub mod points;
