//! Pure helpers over ordered point sequences.
//!
//! Every function borrows its input and returns a fresh value; nothing here
//! keeps state between calls.

use crate::GeometryError;
use nalgebra::{Point2, Rotation2, Vector2};
use serde::{Deserialize, Serialize};

/// A 2D sample of a stroke.
pub type Point = Point2<f64>;

/// Axis-aligned bounds of a path.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingExtent {
    pub center: Point,
    pub width: f64,
    pub height: f64,
}

impl BoundingExtent {
    /// Larger of the two side lengths.
    #[inline]
    pub fn max_side(&self) -> f64 {
        self.width.max(self.height)
    }

    /// Smaller of the two side lengths.
    #[inline]
    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }
}

fn require_points(path: &[Point]) -> Result<(), GeometryError> {
    if path.is_empty() {
        return Err(GeometryError::DegeneratePath {
            points: 0,
            length: 0.0,
        });
    }
    Ok(())
}

/// Arithmetic mean of all points.
pub fn centroid(path: &[Point]) -> Result<Point, GeometryError> {
    require_points(path)?;
    let sum = path
        .iter()
        .fold(Vector2::<f64>::zeros(), |acc, p| acc + p.coords);
    Ok(Point::from(sum / path.len() as f64))
}

/// Bounding box center, width and height.
pub fn bounding_extent(path: &[Point]) -> Result<BoundingExtent, GeometryError> {
    require_points(path)?;

    let first = path[0];
    let (mut min_x, mut max_x) = (first.x, first.x);
    let (mut min_y, mut max_y) = (first.y, first.y);
    for p in &path[1..] {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }

    Ok(BoundingExtent {
        center: Point::new(0.5 * (min_x + max_x), 0.5 * (min_y + max_y)),
        width: max_x - min_x,
        height: max_y - min_y,
    })
}

/// Sum of consecutive point-to-point distances. Zero for fewer than two points.
pub fn arc_length(path: &[Point]) -> f64 {
    path.windows(2)
        .map(|w| nalgebra::distance(&w[0], &w[1]))
        .sum()
}

/// Mean Euclidean distance between index-paired points.
///
/// Both sequences must have the same, non-zero length; resample first when
/// they don't.
pub fn pointwise_distance(a: &[Point], b: &[Point]) -> Result<f64, GeometryError> {
    if a.len() != b.len() {
        return Err(GeometryError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    require_points(a)?;
    Ok(mean_paired_distance(a, b))
}

/// Unchecked variant for callers that already guarantee equal, non-zero lengths.
#[inline]
pub(crate) fn mean_paired_distance(a: &[Point], b: &[Point]) -> f64 {
    let total: f64 = a
        .iter()
        .zip(b)
        .map(|(p, q)| nalgebra::distance(p, q))
        .sum();
    total / a.len() as f64
}

/// Rotate every point by `theta` radians (counter-clockwise) about `center`.
pub fn rotate_about(path: &[Point], theta: f64, center: Point) -> Vec<Point> {
    let rot = Rotation2::new(theta);
    path.iter().map(|p| center + rot * (p - center)).collect()
}

/// Shift every point by `offset`.
pub fn translate_by(path: &[Point], offset: Vector2<f64>) -> Vec<Point> {
    path.iter().map(|p| p + offset).collect()
}

/// Linear interpolation `a + (b - a) * t`.
#[inline]
pub fn interpolate(a: Point, b: Point, t: f64) -> Point {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 2.0),
            Point::new(0.0, 2.0),
        ]
    }

    #[test]
    fn centroid_is_mean_of_points() {
        let c = centroid(&square()).expect("non-empty");
        assert_relative_eq!(c.x, 2.0);
        assert_relative_eq!(c.y, 1.0);
    }

    #[test]
    fn empty_path_has_no_centroid_or_extent() {
        assert!(matches!(
            centroid(&[]),
            Err(GeometryError::DegeneratePath { points: 0, .. })
        ));
        assert!(matches!(
            bounding_extent(&[]),
            Err(GeometryError::DegeneratePath { points: 0, .. })
        ));
    }

    #[test]
    fn bounding_extent_reports_center_and_sides() {
        let path = [
            Point::new(-1.0, 3.0),
            Point::new(5.0, -2.0),
            Point::new(2.0, 1.0),
        ];
        let ext = bounding_extent(&path).expect("extent");
        assert_relative_eq!(ext.width, 6.0);
        assert_relative_eq!(ext.height, 5.0);
        assert_relative_eq!(ext.center.x, 2.0);
        assert_relative_eq!(ext.center.y, 0.5);
        assert_relative_eq!(ext.max_side(), 6.0);
        assert_relative_eq!(ext.min_side(), 5.0);
    }

    #[test]
    fn arc_length_sums_segments() {
        assert_relative_eq!(arc_length(&square()), 10.0);
        assert_eq!(arc_length(&[Point::new(3.0, 3.0)]), 0.0);
        assert_eq!(arc_length(&[]), 0.0);
    }

    #[test]
    fn pointwise_distance_requires_equal_lengths() {
        let a = square();
        let b = &a[..3];
        assert_eq!(
            pointwise_distance(&a, b),
            Err(GeometryError::LengthMismatch { left: 4, right: 3 })
        );
    }

    #[test]
    fn pointwise_distance_is_mean_of_pairs() {
        let a = [Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        let b = [Point::new(3.0, 4.0), Point::new(1.0, 1.0)];
        assert_relative_eq!(pointwise_distance(&a, &b).expect("equal"), 2.5);
    }

    #[test]
    fn rotate_about_center_quarter_turn() {
        let rotated = rotate_about(&[Point::new(2.0, 1.0)], FRAC_PI_2, Point::new(1.0, 1.0));
        assert_relative_eq!(rotated[0].x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(rotated[0].y, 2.0, epsilon = 1e-12);
    }
}
