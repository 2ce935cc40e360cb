//! Axis-aligned bounding box.

use serde::Serialize;

use super::point::Point;

/// Axis-aligned box stored as its minimum and maximum corners.
///
/// Width and height are never negative: [`BoundingBox::new`] moves the
/// minimum corner when given a negative extent, so a box always covers the
/// same region no matter which corner it was described from. Containment is
/// tested against the stored corners, so a box built from a set of points
/// contains every one of them exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BoundingBox {
    min: Point,
    max: Point,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::from_corners(Point::new(x, y), Point::new(x + width, y + height))
    }

    /// Smallest box containing both corners.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    pub fn x(&self) -> f64 {
        self.min.x
    }

    pub fn y(&self) -> f64 {
        self.min.y
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn min(&self) -> Point {
        self.min
    }

    pub fn max(&self) -> Point {
        self.max
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    /// Inclusive containment test: points on any edge are inside.
    pub fn contains(&self, point: Point) -> bool {
        (self.min.x..=self.max.x).contains(&point.x) && (self.min.y..=self.max.y).contains(&point.y)
    }

    /// `(x, y, width, height)`.
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.x(), self.y(), self.width(), self.height())
    }
}
