//! 2D point with vector arithmetic and rotation.

use std::ops::{Add, Sub};

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A point in the plane. Operations return new points; nothing mutates in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The coordinate origin `(0, 0)`.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Rotates about the coordinate origin by `angle` radians, counter-clockwise.
    pub fn rotate(self, angle: f64) -> Point {
        self.rotate_about(angle, Point::ORIGIN)
    }

    /// Rotates about `origin` by `angle` radians, counter-clockwise.
    pub fn rotate_about(self, angle: f64, origin: Point) -> Point {
        let offset = DVec2::from(self - origin);
        origin + Point::from(DVec2::from_angle(angle).rotate(offset))
    }

    /// Linear interpolation: `t = 0` gives `self`, `t = 1` gives `other`.
    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point::from(DVec2::from(self).lerp(DVec2::from(other), t))
    }

    pub fn as_tuple(self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        p.as_tuple()
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        DVec2::new(p.x, p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
    }

    // -- Arithmetic --

    #[test]
    fn add_and_subtract_are_componentwise() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.5, -4.0);
        assert_eq!(a + b, Point::new(4.5, -2.0));
        assert_eq!(a - b, Point::new(-2.5, 6.0));
    }

    #[test]
    fn distance_of_3_4_5_triangle() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance_to(b) - 5.0).abs() < EPSILON);
    }

    // -- Rotation --

    #[test]
    fn rotate_quarter_turn_about_origin() {
        let p = Point::new(1.0, 0.0).rotate(FRAC_PI_2);
        assert!(approx_eq(p, Point::new(0.0, 1.0)), "got {p:?}");
    }

    #[test]
    fn rotate_about_arbitrary_origin() {
        let p = Point::new(2.0, 1.0).rotate_about(PI, Point::new(1.0, 1.0));
        assert!(approx_eq(p, Point::new(0.0, 1.0)), "got {p:?}");
    }

    #[test]
    fn rotate_leaves_source_untouched() {
        let p = Point::new(5.0, 5.0);
        let _ = p.rotate(1.0);
        assert_eq!(p, Point::new(5.0, 5.0));
    }

    #[test]
    fn rotating_the_origin_point_is_a_no_op() {
        let c = Point::new(3.0, -7.0);
        assert!(approx_eq(c.rotate_about(2.3, c), c));
    }

    // -- Conversions --

    #[test]
    fn tuple_and_dvec2_conversions() {
        let p = Point::from((1.5, -2.5));
        assert_eq!(p.as_tuple(), (1.5, -2.5));
        let t: (f64, f64) = p.into();
        assert_eq!(t, (1.5, -2.5));
        let v = DVec2::from(p);
        assert_eq!(Point::from(v), p);
    }

    #[test]
    fn lerp_midpoint() {
        let m = Point::new(0.0, 0.0).lerp(Point::new(4.0, -2.0), 0.5);
        assert!(approx_eq(m, Point::new(2.0, -1.0)));
    }

    #[test]
    fn json_uses_x_and_y_keys() {
        let v = serde_json::to_value(Point::new(1.0, 2.0)).unwrap();
        assert_eq!(v, serde_json::json!({"x": 1.0, "y": 2.0}));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn coord() -> impl Strategy<Value = f64> {
            -1e3_f64..1e3
        }

        proptest! {
            #[test]
            fn distance_is_symmetric_and_zero_on_self(
                ax in coord(), ay in coord(), bx in coord(), by in coord(),
            ) {
                let a = Point::new(ax, ay);
                let b = Point::new(bx, by);
                prop_assert_eq!(a.distance_to(b), b.distance_to(a));
                prop_assert_eq!(a.distance_to(a), 0.0);
                prop_assert!(a.distance_to(b) >= 0.0);
            }

            #[test]
            fn rotate_then_unrotate_returns_original(
                px in coord(), py in coord(), ox in coord(), oy in coord(),
                angle in -10.0_f64..10.0,
            ) {
                let p = Point::new(px, py);
                let origin = Point::new(ox, oy);
                let back = p.rotate_about(angle, origin).rotate_about(-angle, origin);
                prop_assert!((back.x - p.x).abs() < 1e-8, "x drifted: {} vs {}", back.x, p.x);
                prop_assert!((back.y - p.y).abs() < 1e-8, "y drifted: {} vs {}", back.y, p.y);
            }

            #[test]
            fn rotation_preserves_distance_to_origin(
                px in coord(), py in coord(), ox in coord(), oy in coord(),
                angle in -10.0_f64..10.0,
            ) {
                let p = Point::new(px, py);
                let origin = Point::new(ox, oy);
                let before = p.distance_to(origin);
                let after = p.rotate_about(angle, origin).distance_to(origin);
                prop_assert!((before - after).abs() < 1e-8);
            }
        }
    }
}
