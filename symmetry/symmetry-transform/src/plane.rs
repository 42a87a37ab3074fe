//! Mirror planes used to build reflections.

use nalgebra::{Point2, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An oriented mirror plane: every `p` with `normal · (p - point) = 0`.
///
/// `normal` is always unit length, so `normal · p = d()` holds on the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Plane {
    /// Any point lying on the plane.
    pub point: Vector3<f64>,
    /// Unit normal.
    pub normal: Vector3<f64>,
}

impl Plane {
    /// Builds a plane through `point`, normalizing `normal`.
    ///
    /// Returns `None` for a (near) zero normal.
    #[must_use]
    pub fn new(point: Vector3<f64>, normal: Vector3<f64>) -> Option<Self> {
        normal
            .try_normalize(f64::EPSILON)
            .map(|normal| Self { point, normal })
    }

    /// Plane through three points, oriented by `(b - a) × (c - a)`.
    ///
    /// Returns `None` if the points are collinear.
    #[must_use]
    pub fn from_points(a: Vector3<f64>, b: Vector3<f64>, c: Vector3<f64>) -> Option<Self> {
        Self::new(a, (b - a).cross(&(c - a)))
    }

    /// The vertical plane containing the planar line through `p1` and `p2`.
    ///
    /// Mirroring across it mirrors the `z = 0` plane across that line.
    /// Returns `None` if the two points coincide.
    #[must_use]
    pub fn through_line_2d(p1: Point2<f64>, p2: Point2<f64>) -> Option<Self> {
        let a = Vector3::new(p1.x, p1.y, 0.0);
        let b = Vector3::new(p2.x, p2.y, 0.0);
        Self::from_points(a, b, a + Vector3::z())
    }

    /// Signed distance of `point`, positive on the side `normal` faces.
    #[must_use]
    pub fn signed_distance(&self, point: Vector3<f64>) -> f64 {
        (point - self.point).dot(&self.normal)
    }

    /// Foot of the perpendicular from `point`.
    #[must_use]
    pub fn project(&self, point: Vector3<f64>) -> Vector3<f64> {
        point - self.normal * self.signed_distance(point)
    }

    /// Mirror image of `point`.
    #[must_use]
    pub fn reflect_point(&self, point: Vector3<f64>) -> Vector3<f64> {
        point - self.normal * (2.0 * self.signed_distance(point))
    }

    /// Offset `d` in `normal · p = d`.
    #[must_use]
    pub fn d(&self) -> f64 {
        self.point.dot(&self.normal)
    }
}
