//! Planar distance helpers

use super::types::Point;

/// Euclidean distance between two points, in meters
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Mean distance of `points` to `reference`.
///
/// Returns `None` for an empty slice, the mean is undefined there.
pub fn average_distance(points: &[Point], reference: Point) -> Option<f64> {
    if points.is_empty() {
        return None;
    }
    let total: f64 = points.iter().map(|p| distance(*p, reference)).sum();
    Some(total / points.len() as f64)
}
