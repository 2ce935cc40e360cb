//! Vertex-list polygon with area, centroid, and bounds.
//!
//! The polygon is implicitly closed: the last vertex connects back to the
//! first. Vertex order defines the traversal, which fixes the sign of
//! [`Polygon::signed_area`].

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use super::bounds::BoundingBox;
use super::point::Point;
use crate::error::StampError;

/// An ordered list of vertices.
///
/// Transforms consume the polygon and return it with freshly computed
/// vertices. Clone first to keep the original.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Regular polygon with `sides` vertices on a circle of `radius` around
    /// `center`. The first vertex lies on the +x axis from the center and the
    /// rest follow counter-clockwise. Fewer than 3 sides gives the degenerate
    /// point or segment.
    pub fn regular(sides: usize, radius: f64, center: Point) -> Self {
        (0..sides)
            .map(|i| {
                let angle = TAU * i as f64 / sides as f64;
                let (sin, cos) = angle.sin_cos();
                center + Point::new(cos * radius, sin * radius)
            })
            .collect()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive vertex pairs including the closing edge.
    fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points
            .iter()
            .copied()
            .zip(self.points.iter().copied().cycle().skip(1))
    }

    /// Shoelace area, positive for counter-clockwise traversal.
    /// Zero for fewer than 3 vertices.
    pub fn signed_area(&self) -> f64 {
        if self.points.len() < 3 {
            return 0.0;
        }
        self.edges().map(|(a, b)| a.x * b.y - b.x * a.y).sum::<f64>() / 2.0
    }

    /// Enclosed area, never negative.
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Length of the closed boundary. Zero for fewer than 2 vertices.
    pub fn perimeter(&self) -> f64 {
        if self.points.len() < 2 {
            return 0.0;
        }
        self.edges().map(|(a, b)| a.distance_to(b)).sum()
    }

    /// Arithmetic mean of the vertices (not the area-weighted centroid).
    /// `(0, 0)` for an empty polygon.
    pub fn centroid(&self) -> Point {
        if self.points.is_empty() {
            return Point::ORIGIN;
        }
        let n = self.points.len() as f64;
        let sum = self.points.iter().fold(Point::ORIGIN, |acc, &p| acc + p);
        Point::new(sum.x / n, sum.y / n)
    }

    /// Tight axis-aligned bounds of the vertices.
    ///
    /// Returns `StampError::EmptyCollection` when there are no vertices.
    pub fn bounds(&self) -> Result<BoundingBox, StampError> {
        let (first, rest) = self
            .points
            .split_first()
            .ok_or_else(|| StampError::EmptyCollection("polygon has no vertices".into()))?;
        let (min, max) = rest.iter().fold((*first, *first), |(min, max), p| {
            (
                Point::new(min.x.min(p.x), min.y.min(p.y)),
                Point::new(max.x.max(p.x), max.y.max(p.y)),
            )
        });
        Ok(BoundingBox::from_corners(min, max))
    }

    /// Shifts every vertex by `(dx, dy)`.
    pub fn translate(self, dx: f64, dy: f64) -> Polygon {
        let offset = Point::new(dx, dy);
        self.points.into_iter().map(|p| p + offset).collect()
    }

    /// Rotates every vertex about the coordinate origin. For rotation in
    /// place, pass [`Polygon::centroid`] to [`Polygon::rotate_about`].
    pub fn rotate(self, angle: f64) -> Polygon {
        self.rotate_about(angle, Point::ORIGIN)
    }

    /// Rotates every vertex about `origin` by `angle` radians.
    pub fn rotate_about(self, angle: f64, origin: Point) -> Polygon {
        self.points
            .into_iter()
            .map(|p| p.rotate_about(angle, origin))
            .collect()
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}
