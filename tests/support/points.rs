#![allow(dead_code)]

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use s2_geocore::Point;
use std::f64::consts::PI;

/// Generate random points uniformly distributed on the unit sphere.
pub fn random_sphere_points(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    random_sphere_points_with_rng(n, &mut rng)
}

pub fn random_sphere_points_with_rng<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Point> {
    (0..n).map(|_| random_sphere_point(rng)).collect()
}

pub fn random_sphere_point<R: Rng + ?Sized>(rng: &mut R) -> Point {
    let z: f64 = rng.gen_range(-1.0..1.0);
    let theta: f64 = rng.gen_range(0.0..2.0 * PI);
    let r = (1.0 - z * z).sqrt();
    Point::new(r * theta.cos(), r * theta.sin(), z).normalize()
}

/// Generate points uniformly distributed in a spherical cap around `center`.
pub fn cap_points<R: Rng + ?Sized>(
    center: Point,
    cap_radius_rad: f64,
    n: usize,
    rng: &mut R,
) -> Vec<Point> {
    let (u_axis, v_axis) = tangent_axes(center);
    let cos_theta_max = cap_radius_rad.cos();
    (0..n)
        .map(|_| {
            let u: f64 = rng.gen();
            let cos_theta = 1.0 - u * (1.0 - cos_theta_max);
            let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();
            let phi: f64 = rng.gen_range(0.0..2.0 * PI);
            let c = center.to_glam();
            let p = c * cos_theta
                + (u_axis.to_glam() * phi.cos() + v_axis.to_glam() * phi.sin()) * sin_theta;
            Point::from_glam(p).normalize()
        })
        .collect()
}

/// Random polyline of `n` vertices starting near `start`, with steps up to `max_step_rad`.
pub fn random_walk<R: Rng + ?Sized>(start: Point, n: usize, max_step_rad: f64, rng: &mut R) -> Vec<Point> {
    let mut vertices = Vec::with_capacity(n);
    let mut p = start;
    for _ in 0..n {
        vertices.push(p);
        let step = rng.gen_range(0.1 * max_step_rad..max_step_rad);
        p = cap_points(p, step, 1, rng)[0];
    }
    vertices
}

/// Two unit vectors orthogonal to `p` and to each other.
pub fn tangent_axes(p: Point) -> (Point, Point) {
    let helper = if p.x.abs() < 0.9 {
        Point::new(1.0, 0.0, 0.0)
    } else {
        Point::new(0.0, 1.0, 0.0)
    };
    let u = p.cross(helper).normalize();
    let v = p.cross(u).normalize();
    (u, v)
}
