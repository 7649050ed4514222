#![allow(dead_code)]

use s2_geocore::Point;

/// Angle in radians between two unit points.
pub fn angle(a: Point, b: Point) -> f64 {
    a.cross(b).norm().atan2(a.dot(b))
}

/// Point at fraction `t` along the great-circle arc from `a` to `b`.
pub fn interpolate(a: Point, b: Point, t: f64) -> Point {
    let theta = angle(a, b);
    let s = theta.sin();
    let (wa, wb) = (((1.0 - t) * theta).sin() / s, (t * theta).sin() / s);
    Point::from_glam(a.to_glam() * wa + b.to_glam() * wb).normalize()
}

/// Move `p` by `offset_rad` perpendicular to the arc `a -> b`.
///
/// Positive offsets move towards the left of the direction of travel.
pub fn offset_left(a: Point, b: Point, p: Point, offset_rad: f64) -> Point {
    let n = a.cross(b).normalize();
    Point::from_glam(p.to_glam() * offset_rad.cos() + n.to_glam() * offset_rad.sin()).normalize()
}
