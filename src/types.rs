//! Core point type for geometry on the unit sphere.

use bytemuck::{Pod, Zeroable};
use glam::DVec3;
use std::cmp::Ordering;

/// A point on the unit sphere, represented as a 3D vector of `f64`.
///
/// This type provides a small `#[repr(C)]` representation with a stable layout.
/// Points are assumed to be on (or near) the unit sphere; error bounds in this
/// crate assume inputs were normalized with `normalize`, but nothing here
/// renormalizes silently.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Cartesian axis, used to choose a numerically stable tangent frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Point {
    /// Create a new point.
    ///
    /// Note: This does NOT normalize the input.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create from any type implementing `PointLike`.
    #[inline]
    pub fn from_like<P: PointLike>(p: &P) -> Self {
        Self::new(p.x(), p.y(), p.z())
    }

    #[inline]
    pub fn to_glam(self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn from_glam(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    /// Unit point for a latitude/longitude given in degrees.
    pub fn from_lat_lng_degrees(lat: f64, lng: f64) -> Self {
        let (phi, theta) = (lat.to_radians(), lng.to_radians());
        let cos_phi = phi.cos();
        Self::new(theta.cos() * cos_phi, theta.sin() * cos_phi, phi.sin())
    }

    /// Latitude and longitude of this point in degrees.
    pub fn to_lat_lng_degrees(self) -> (f64, f64) {
        let lat = self.z.atan2((self.x * self.x + self.y * self.y).sqrt());
        let lng = self.y.atan2(self.x);
        (lat.to_degrees(), lng.to_degrees())
    }

    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.to_glam().dot(other.to_glam())
    }

    /// Cross product (not normalized).
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::from_glam(self.to_glam().cross(other.to_glam()))
    }

    #[inline]
    pub fn norm2(self) -> f64 {
        self.dot(self)
    }

    #[inline]
    pub fn norm(self) -> f64 {
        self.norm2().sqrt()
    }

    /// Normalize the vector. The zero vector is returned unchanged.
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.norm();
        if len > 0.0 {
            Self::new(self.x / len, self.y / len, self.z / len)
        } else {
            self
        }
    }

    /// Axis whose component has the smallest magnitude.
    ///
    /// Ties resolve towards the later axis (Z over Y over X).
    #[inline]
    pub fn smallest_component(self) -> Axis {
        let (ax, ay, az) = (self.x.abs(), self.y.abs(), self.z.abs());
        if ax < ay {
            if ax < az {
                Axis::X
            } else {
                Axis::Z
            }
        } else if ay < az {
            Axis::Y
        } else {
            Axis::Z
        }
    }

    /// Lexicographic comparison of the coordinates (x, then y, then z).
    ///
    /// Uses `total_cmp`, so NaN orders consistently and `-0.0 < 0.0`.
    #[inline]
    pub fn cmp_coords(&self, other: &Self) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
            .then_with(|| self.z.total_cmp(&other.z))
    }
}

impl std::ops::Neg for Point {
    type Output = Point;

    #[inline]
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y, -self.z)
    }
}

impl From<[f64; 3]> for Point {
    #[inline]
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Point> for [f64; 3] {
    #[inline]
    fn from(v: Point) -> Self {
        [v.x, v.y, v.z]
    }
}

impl From<DVec3> for Point {
    #[inline]
    fn from(v: DVec3) -> Self {
        Self::from_glam(v)
    }
}

impl From<Point> for DVec3 {
    #[inline]
    fn from(v: Point) -> DVec3 {
        v.to_glam()
    }
}

/// Trait for types that can be used as input points.
///
/// This allows zero-copy input from various math libraries.
pub trait PointLike {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn z(&self) -> f64;
}

impl PointLike for Point {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
    #[inline]
    fn z(&self) -> f64 {
        self.z
    }
}

impl PointLike for [f64; 3] {
    #[inline]
    fn x(&self) -> f64 {
        self[0]
    }
    #[inline]
    fn y(&self) -> f64 {
        self[1]
    }
    #[inline]
    fn z(&self) -> f64 {
        self[2]
    }
}

impl PointLike for (f64, f64, f64) {
    #[inline]
    fn x(&self) -> f64 {
        self.0
    }
    #[inline]
    fn y(&self) -> f64 {
        self.1
    }
    #[inline]
    fn z(&self) -> f64 {
        self.2
    }
}

impl PointLike for DVec3 {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
    #[inline]
    fn z(&self) -> f64 {
        self.z
    }
}
