//! A position with a heading, advanced turtle-style.

use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

use super::point::Point;

/// A position plus a direction in radians (0 = +x, counter-clockwise positive).
///
/// `advance` and `rotate` take the ray by value and return the moved ray, so
/// calls chain without aliasing:
///
/// ```
/// use stamp_core::geometry::{Point, Ray};
///
/// let p = Ray::new(0.0, 0.0, 0.0).advance(5.0).to_point();
/// assert_eq!(p, Point::new(5.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub x: f64,
    pub y: f64,
    pub direction: f64,
}

impl Ray {
    /// Creates a ray. `direction` is stored as given; only [`Ray::rotate`]
    /// normalizes it.
    pub fn new(x: f64, y: f64, direction: f64) -> Self {
        Self { x, y, direction }
    }

    /// Creates a ray at `origin` heading along `direction`.
    pub fn from_point(origin: Point, direction: f64) -> Self {
        Self::new(origin.x, origin.y, direction)
    }

    /// Snapshot of the current position.
    pub fn to_point(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Moves `distance` along the current direction. Negative distances move
    /// backward.
    pub fn advance(self, distance: f64) -> Ray {
        let (sin, cos) = self.direction.sin_cos();
        Ray {
            x: self.x + cos * distance,
            y: self.y + sin * distance,
            direction: self.direction,
        }
    }

    /// Turns by `angle` radians. The resulting direction lies in (-π, π].
    pub fn rotate(self, angle: f64) -> Ray {
        Ray {
            direction: normalize_angle(self.direction + angle),
            ..self
        }
    }
}

/// Wraps an angle into (-π, π].
fn normalize_angle(angle: f64) -> f64 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        PI
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
    }

    // -- Movement --

    #[test]
    fn advance_along_positive_x() {
        let p = Ray::new(0.0, 0.0, 0.0).advance(5.0).to_point();
        assert_eq!(p, Point::new(5.0, 0.0));
    }

    #[test]
    fn advance_then_turn_left_then_advance() {
        let p = Ray::new(0.0, 0.0, 0.0)
            .advance(5.0)
            .rotate(FRAC_PI_2)
            .advance(5.0)
            .to_point();
        assert!(approx_eq(p, Point::new(5.0, 5.0)), "got {p:?}");
    }

    #[test]
    fn negative_distance_moves_backward() {
        let p = Ray::new(1.0, 1.0, FRAC_PI_2).advance(-2.0).to_point();
        assert!(approx_eq(p, Point::new(1.0, -1.0)), "got {p:?}");
    }

    #[test]
    fn advance_keeps_direction() {
        let r = Ray::new(0.0, 0.0, 1.25).advance(3.0);
        assert_eq!(r.direction, 1.25);
    }

    #[test]
    fn from_point_copies_position() {
        let r = Ray::from_point(Point::new(2.0, 3.0), 0.5);
        assert_eq!(r.to_point(), Point::new(2.0, 3.0));
        assert_eq!(r.direction, 0.5);
    }

    // -- Rotation --

    #[test]
    fn rotate_adds_to_direction_within_range() {
        let r = Ray::new(0.0, 0.0, 0.25).rotate(0.5);
        assert!((r.direction - 0.75).abs() < EPSILON);
    }

    #[test]
    fn repeated_rotation_stays_bounded() {
        let mut r = Ray::default();
        for _ in 0..1000 {
            r = r.rotate(1.0);
        }
        assert!(r.direction > -PI && r.direction <= PI, "direction {}", r.direction);
    }

    #[test]
    fn half_turn_normalizes_to_positive_pi() {
        let r = Ray::default().rotate(PI);
        assert!((r.direction - PI).abs() < EPSILON);
        let r = Ray::default().rotate(-PI);
        assert!((r.direction - PI).abs() < EPSILON);
    }

    #[test]
    fn full_turn_returns_to_same_heading() {
        let start = Ray::new(0.0, 0.0, 0.3);
        let p = start.rotate(TAU).advance(1.0).to_point();
        let q = start.advance(1.0).to_point();
        assert!(approx_eq(p, q));
    }

    #[test]
    fn normalize_angle_examples() {
        assert!((normalize_angle(1.5 * PI) + FRAC_PI_2).abs() < EPSILON);
        assert!((normalize_angle(-FRAC_PI_2) + FRAC_PI_2).abs() < EPSILON);
        assert!((normalize_angle(TAU + 0.1) - 0.1).abs() < EPSILON);
    }
}
