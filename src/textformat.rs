//! Compact text descriptions of geometry, for tests and demos.
//!
//! Points are written `lat:lng` in degrees and separated by commas. Polygon
//! loops are separated by `;`. An index is written as three `#`-separated
//! sections (points, polylines, polygons) with shapes separated by `|`:
//!
//! ```text
//! 0:0 | 1:1 # 0:0, 0:1, 1:1 # 0:0, 0:3, 3:0; 1:1, 1:2, 2:1
//! ```
//!
//! All points of the first section go into one `PointVector`.

use crate::index::VecShapeIndex;
use crate::shape::{LaxPolygon, PointVector, Polyline};
use crate::{GeometryError, Point};

/// Parse a single `lat:lng` token.
pub fn parse_point(token: &str) -> Result<Point, GeometryError> {
    let token = token.trim();
    let invalid = || GeometryError::InvalidLatLng(token.to_string());
    let (lat, lng) = token.split_once(':').ok_or_else(invalid)?;
    let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
    let lng: f64 = lng.trim().parse().map_err(|_| invalid())?;
    if !lat.is_finite() || !lng.is_finite() || lat.abs() > 90.0 {
        return Err(invalid());
    }
    Ok(Point::from_lat_lng_degrees(lat, lng))
}

/// Parse a comma-separated list of points. Empty input gives no points.
pub fn parse_points(s: &str) -> Result<Vec<Point>, GeometryError> {
    s.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(parse_point)
        .collect()
}

pub fn make_point_vector(s: &str) -> Result<PointVector, GeometryError> {
    Ok(PointVector::new(parse_points(s)?))
}

/// Polyline from a point list. A single vertex is rejected.
pub fn make_polyline(s: &str) -> Result<Polyline, GeometryError> {
    let vertices = parse_points(s)?;
    if vertices.len() == 1 {
        return Err(GeometryError::InvalidShape(format!(
            "polyline with a single vertex: {:?}",
            s.trim()
        )));
    }
    Ok(Polyline::new(vertices))
}

/// Polygon from `;`-separated loops. Blank loops are skipped.
pub fn make_lax_polygon(s: &str) -> Result<LaxPolygon, GeometryError> {
    let loops = s
        .split(';')
        .filter(|l| !l.trim().is_empty())
        .map(parse_points)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(LaxPolygon::new(loops))
}

/// Build an index from `points # polylines # polygons`.
///
/// Shape ids are assigned in that order: the point vector (if any), then
/// each polyline, then each polygon.
pub fn make_index(s: &str) -> Result<VecShapeIndex, GeometryError> {
    let sections: Vec<&str> = s.split('#').collect();
    let [points, lines, polygons] = sections.as_slice() else {
        return Err(GeometryError::InvalidShape(format!(
            "expected 3 '#'-separated sections, found {}",
            sections.len()
        )));
    };

    let mut index = VecShapeIndex::new();

    let mut all_points = Vec::new();
    for group in shape_groups(points) {
        all_points.extend(parse_points(group)?);
    }
    if !all_points.is_empty() {
        index.add(Box::new(PointVector::new(all_points)));
    }
    for group in shape_groups(lines) {
        index.add(Box::new(make_polyline(group)?));
    }
    for group in shape_groups(polygons) {
        index.add(Box::new(make_lax_polygon(group)?));
    }
    Ok(index)
}

fn shape_groups(section: &str) -> impl Iterator<Item = &str> {
    section.split('|').map(str::trim).filter(|g| !g.is_empty())
}
