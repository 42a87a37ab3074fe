//! Fundamental-domain polygons.
//!
//! A [`FundamentalDomain`] is a simple polygon, closed implicitly from the
//! last vertex back to the first, plus a designated centre used as the
//! default rotation pivot. The shape builders at the bottom of this module
//! produce the vertex lists of the construction table before the domain is
//! shifted into its tile.

// Shoelace sums over a handful of vertices
#![allow(clippy::cast_precision_loss)]

use nalgebra::{Point2, Vector2};
use symmetry_transform::Transform3D;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Area below which a polygon is treated as collapsed.
const AREA_EPSILON: f64 = 1e-12;

/// A fundamental-domain polygon with its rotation centre.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FundamentalDomain {
    points: Vec<Point2<f64>>,
    center: Point2<f64>,
}

impl FundamentalDomain {
    /// Creates a domain from its ordered vertices and centre.
    #[must_use]
    pub const fn new(points: Vec<Point2<f64>>, center: Point2<f64>) -> Self {
        Self { points, center }
    }

    /// Vertices in order (clockwise or counter-clockwise).
    #[must_use]
    pub fn points(&self) -> &[Point2<f64>] {
        &self.points
    }

    /// Designated centre of the domain's tile.
    ///
    /// This is the default rotation pivot and need not coincide with
    /// [`centroid`](Self::centroid).
    #[must_use]
    pub const fn center(&self) -> Point2<f64> {
        self.center
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the domain has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Edges as `(start, end)` pairs, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Point2<f64>, Point2<f64>)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Signed shoelace area: positive for counter-clockwise winding.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        self.edges()
            .map(|(a, b)| a.x.mul_add(b.y, -(b.x * a.y)))
            .sum::<f64>()
            / 2.0
    }

    /// Enclosed area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Area centroid, or the vertex mean if the polygon has collapsed.
    #[must_use]
    pub fn centroid(&self) -> Point2<f64> {
        if self.points.is_empty() {
            return Point2::origin();
        }

        let area = self.signed_area();
        if area.abs() < AREA_EPSILON {
            let sum: Vector2<f64> = self.points.iter().map(|p| p.coords).sum();
            return Point2::from(sum / self.points.len() as f64);
        }

        let weighted: Vector2<f64> = self
            .edges()
            .map(|(a, b)| {
                let cross = a.x.mul_add(b.y, -(b.x * a.y));
                (a.coords + b.coords) * cross
            })
            .sum();
        Point2::from(weighted / (6.0 * area))
    }

    /// Even-odd point-in-polygon test.
    ///
    /// Points exactly on an edge may fall either way.
    #[must_use]
    pub fn contains(&self, point: Point2<f64>) -> bool {
        let mut inside = false;
        for (a, b) in self.edges() {
            if (a.y > point.y) != (b.y > point.y) {
                let t = (point.y - a.y) / (b.y - a.y);
                let x = t.mul_add(b.x - a.x, a.x);
                if point.x < x {
                    inside = !inside;
                }
            }
        }
        inside
    }

    /// Image of this domain under a planar transform.
    #[must_use]
    pub fn transformed(&self, transform: &Transform3D) -> Self {
        Self {
            points: self
                .points
                .iter()
                .map(|p| transform.transform_point_2d(*p))
                .collect(),
            center: transform.transform_point_2d(self.center),
        }
    }
}

// =============================================================================
// Shape builders
// =============================================================================

pub(crate) const SQRT_3: f64 = 1.732_050_807_568_877_2;

fn shifted<const N: usize>(points: [[f64; 2]; N], offset: Vector2<f64>) -> [Point2<f64>; N] {
    points.map(|[x, y]| Point2::new(x + offset.x, y + offset.y))
}

/// Axis-aligned rectangle with its first corner at `offset`.
pub(crate) fn rectangle(width: f64, height: f64, offset: Vector2<f64>) -> [Point2<f64>; 4] {
    shifted(
        [[0.0, 0.0], [width, 0.0], [width, height], [0.0, height]],
        offset,
    )
}

/// Parallelogram spanned by `d1` then `d2`.
pub(crate) fn parallelogram(
    d1: Vector2<f64>,
    d2: Vector2<f64>,
    offset: Vector2<f64>,
) -> [Point2<f64>; 4] {
    let far = d1 + d2;
    shifted(
        [[0.0, 0.0], [d1.x, d1.y], [far.x, far.y], [d2.x, d2.y]],
        offset,
    )
}

/// Parallelogram spanned by half of `d2` then half of `d1`.
pub(crate) fn half_parallelogram(
    d1: Vector2<f64>,
    d2: Vector2<f64>,
    offset: Vector2<f64>,
) -> [Point2<f64>; 4] {
    let a = d2 / 2.0;
    let b = (d1 + d2) / 2.0;
    let c = d1 / 2.0;
    shifted([[0.0, 0.0], [a.x, a.y], [b.x, b.y], [c.x, c.y]], offset)
}

/// Triangle spanned by half of `d2` and half of the diagonal `d1 + d2`.
pub(crate) fn half_triangle(
    d1: Vector2<f64>,
    d2: Vector2<f64>,
    offset: Vector2<f64>,
) -> [Point2<f64>; 3] {
    let a = d2 / 2.0;
    let b = (d1 + d2) / 2.0;
    shifted([[0.0, 0.0], [a.x, a.y], [b.x, b.y]], offset)
}

/// 60° rhombus made of two equilateral triangles of side `hex_size / 2`.
pub(crate) fn rhombus(hex_size: f64, offset: Vector2<f64>) -> [Point2<f64>; 4] {
    let h = hex_size;
    let rise = h * SQRT_3 / 4.0;
    shifted(
        [[0.0, 0.0], [h / 4.0, rise], [h / 2.0, 0.0], [h / 4.0, -rise]],
        offset,
    )
}

/// Kite covering one sixth of a hexagon of width `hex_size`.
pub(crate) fn kite(hex_size: f64, offset: Vector2<f64>) -> [Point2<f64>; 4] {
    let h = hex_size;
    let rise = h * SQRT_3 / 4.0;
    shifted(
        [
            [0.0, 0.0],
            [0.0, rise],
            [h / 4.0, rise],
            [3.0 * h / 8.0, h * SQRT_3 / 8.0],
        ],
        offset,
    )
}

/// Equilateral triangle of side `hex_size / 2`.
pub(crate) fn equilateral_triangle(hex_size: f64, offset: Vector2<f64>) -> [Point2<f64>; 3] {
    let h = hex_size;
    shifted(
        [[0.0, 0.0], [h / 4.0, h * SQRT_3 / 4.0], [h / 2.0, 0.0]],
        offset,
    )
}

/// 30-60-90 triangle, one twelfth of a hexagon of width `hex_size`.
pub(crate) fn hex_right_triangle(hex_size: f64, offset: Vector2<f64>) -> [Point2<f64>; 3] {
    let h = hex_size;
    let rise = h * SQRT_3 / 4.0;
    shifted([[0.0, 0.0], [0.0, rise], [h / 4.0, rise]], offset)
}

/// Obtuse isosceles triangle on a base of `base_size` with apex at the
/// centroid of the equilateral triangle on that base.
pub(crate) fn isosceles_triangle(base_size: f64, offset: Vector2<f64>) -> [Point2<f64>; 3] {
    let b = base_size;
    shifted(
        [[0.0, 0.0], [b, 0.0], [b / 2.0, b * SQRT_3 / 6.0]],
        offset,
    )
}
