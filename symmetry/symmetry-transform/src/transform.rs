//! Homogeneous 4x4 transforms and their composition.

use std::ops::Mul;

use nalgebra::{Matrix3, Matrix4, Point2, Rotation3, Unit, Vector2, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{TransformError, TransformResult};
use crate::plane::Plane;

/// Below this linear determinant a transform is treated as singular.
const SINGULAR_EPSILON: f64 = 1e-12;

/// Ordered output of a symmetry generator.
pub type TransformSet = Vec<Transform3D>;

/// A 3D affine transformation represented as a 4x4 matrix.
///
/// Composition follows the column-vector convention: `a * b` (or
/// `a.compose(&b)`) applies `b` first and then `a`.
///
/// # Example
///
/// ```
/// use symmetry_transform::Transform3D;
/// use nalgebra::Vector3;
///
/// let translate = Transform3D::translation(1.0, 0.0, 0.0);
/// let scale = Transform3D::uniform_scale(2.0);
///
/// // Translate first, then scale
/// let combined = scale * translate;
/// let p = combined.transform_point(Vector3::zeros());
/// assert!((p.x - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Transform3D {
    matrix: Matrix4<f64>,
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform3D {
    /// Wraps a raw homogeneous matrix.
    #[must_use]
    pub const fn from_matrix(matrix: Matrix4<f64>) -> Self {
        Self { matrix }
    }

    /// The identity placement.
    #[must_use]
    pub fn identity() -> Self {
        Self::from_matrix(Matrix4::identity())
    }

    /// Translation by `(tx, ty, tz)`.
    #[must_use]
    pub fn translation(tx: f64, ty: f64, tz: f64) -> Self {
        Self::from_translation(Vector3::new(tx, ty, tz))
    }

    /// Translation by `offset`.
    #[must_use]
    pub fn from_translation(offset: Vector3<f64>) -> Self {
        Self::from_matrix(Matrix4::new_translation(&offset))
    }

    /// Translation within the `z = 0` plane.
    #[must_use]
    pub fn translation_2d(offset: Vector2<f64>) -> Self {
        Self::from_translation(offset.push(0.0))
    }

    /// Scale by `factor` on every axis.
    #[must_use]
    pub fn uniform_scale(factor: f64) -> Self {
        Self::from_matrix(Matrix4::new_scaling(factor))
    }

    /// Per-axis scale.
    #[must_use]
    pub fn scale(sx: f64, sy: f64, sz: f64) -> Self {
        Self::from_matrix(Matrix4::new_nonuniform_scaling(&Vector3::new(sx, sy, sz)))
    }

    /// Mirror across the `x = 0` plane (`x → -x`).
    #[must_use]
    pub fn mirror_x() -> Self {
        Self::scale(-1.0, 1.0, 1.0)
    }

    /// Mirror across the `y = 0` plane (`y → -y`).
    #[must_use]
    pub fn mirror_y() -> Self {
        Self::scale(1.0, -1.0, 1.0)
    }

    /// Right-handed rotation by `radians` about `axis` through the origin.
    ///
    /// A zero `axis` gives the identity.
    #[must_use]
    pub fn rotation_axis(axis: Vector3<f64>, radians: f64) -> Self {
        Unit::try_new(axis, f64::EPSILON).map_or_else(Self::identity, |axis| {
            Self::from_matrix(Rotation3::from_axis_angle(&axis, radians).to_homogeneous())
        })
    }

    /// Same as [`Self::rotation_axis`] with the angle in degrees.
    #[must_use]
    pub fn rotation_degrees(axis: Vector3<f64>, degrees: f64) -> Self {
        Self::rotation_axis(axis, degrees.to_radians())
    }

    /// Rotate about `axis` passing through `pivot`.
    ///
    /// Equivalent to `translate(pivot) * rotate(degrees, axis) * translate(-pivot)`.
    #[must_use]
    pub fn rotation_about(axis: Vector3<f64>, degrees: f64, pivot: Vector3<f64>) -> Self {
        Self::from_translation(pivot)
            * Self::rotation_degrees(axis, degrees)
            * Self::from_translation(-pivot)
    }

    /// Rotate within the `z = 0` plane about a 2D pivot, counter-clockwise.
    #[must_use]
    pub fn rotation_z_about(degrees: f64, pivot: Point2<f64>) -> Self {
        Self::rotation_about(Vector3::z(), degrees, Vector3::new(pivot.x, pivot.y, 0.0))
    }

    /// Shortest rotation taking the direction of `from` onto `to`.
    ///
    /// Zero inputs give the identity. Opposite directions give a half turn
    /// about an axis perpendicular to `from`.
    #[must_use]
    pub fn rotation_between(from: Vector3<f64>, to: Vector3<f64>) -> Self {
        let (Some(from), Some(to)) = (
            from.try_normalize(f64::EPSILON),
            to.try_normalize(f64::EPSILON),
        ) else {
            return Self::identity();
        };

        Rotation3::rotation_between(&from, &to).map_or_else(
            || {
                let axis = from
                    .cross(&Vector3::x())
                    .try_normalize(1e-6)
                    .unwrap_or_else(|| from.cross(&Vector3::y()));
                Self::rotation_axis(axis, std::f64::consts::PI)
            },
            |rotation| Self::from_matrix(rotation.to_homogeneous()),
        )
    }

    /// Orientation whose local `+Z` points along `forward` and whose local
    /// `+Y` is as close to `up` as possible.
    ///
    /// Returns identity for a zero `forward`. When `up` is parallel to
    /// `forward` the shortest rotation from `+Z` to `forward` is used.
    #[must_use]
    pub fn look_rotation(forward: Vector3<f64>, up: Vector3<f64>) -> Self {
        let Some(z_axis) = forward.try_normalize(f64::EPSILON) else {
            return Self::identity();
        };
        let Some(x_axis) = up.cross(&z_axis).try_normalize(f64::EPSILON) else {
            return Self::rotation_between(Vector3::z(), z_axis);
        };
        let y_axis = z_axis.cross(&x_axis);

        Self {
            matrix: Matrix3::from_columns(&[x_axis, y_axis, z_axis]).to_homogeneous(),
        }
    }

    /// Householder reflection across a plane.
    ///
    /// The linear part is `I - 2·n·nᵗ` and the translation is `2·d·n`, so
    /// every point on the plane is fixed.
    #[must_use]
    pub fn reflection(plane: &Plane) -> Self {
        let n = plane.normal;
        let linear = Matrix3::identity() - 2.0 * n * n.transpose();
        let mut matrix = linear.to_homogeneous();
        matrix
            .fixed_view_mut::<3, 1>(0, 3)
            .copy_from(&(2.0 * plane.d() * n));
        Self { matrix }
    }

    /// Reflection across the infinite 2D line through `p1` and `p2`.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::DegenerateReflection`] when the two points
    /// coincide, and [`TransformError::DegenerateNormal`] if the line is too
    /// short for a stable normal.
    pub fn reflection_2d(p1: Point2<f64>, p2: Point2<f64>) -> TransformResult<Self> {
        if p1 == p2 {
            return Err(TransformError::DegenerateReflection {
                p1: [p1.x, p1.y],
                p2: [p2.x, p2.y],
            });
        }
        let plane = Plane::through_line_2d(p1, p2).ok_or(TransformError::DegenerateNormal)?;
        Ok(Self::reflection(&plane))
    }

    /// The homogeneous matrix, column-vector convention.
    #[must_use]
    pub const fn matrix(&self) -> &Matrix4<f64> {
        &self.matrix
    }

    /// Compose with another transformation: the result applies `other`
    /// first, then `self`.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Reads left to right: apply `self`, then `other`.
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        other.compose(self)
    }

    /// The transform undoing `self`.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::NotInvertible`] if the linear part is
    /// (near) singular.
    pub fn inverse(&self) -> TransformResult<Self> {
        let linear = self.linear_part();
        let determinant = linear.determinant();
        if determinant.abs() < SINGULAR_EPSILON {
            return Err(TransformError::NotInvertible { determinant });
        }
        let inverse = linear
            .try_inverse()
            .ok_or(TransformError::NotInvertible { determinant })?;

        // Built from the 3x3 block so the bottom row stays exactly [0, 0, 0, 1]
        let mut matrix = inverse.to_homogeneous();
        matrix
            .fixed_view_mut::<3, 1>(0, 3)
            .copy_from(&(-(inverse * self.translation_part())));
        Ok(Self { matrix })
    }

    /// The upper-left 3x3 block (rotation, reflection and scale).
    #[must_use]
    pub fn linear_part(&self) -> Matrix3<f64> {
        self.matrix.fixed_view::<3, 3>(0, 0).into_owned()
    }

    /// The translation column.
    #[must_use]
    pub fn translation_part(&self) -> Vector3<f64> {
        self.matrix.fixed_view::<3, 1>(0, 3).into_owned()
    }

    /// Copy of this transform with its translation multiplied by `factor`.
    ///
    /// Equal to conjugating by a uniform scale: `S · self · S⁻¹`.
    #[must_use]
    pub fn with_scaled_translation(&self, factor: f64) -> Self {
        let mut matrix = self.matrix;
        matrix
            .fixed_view_mut::<3, 1>(0, 3)
            .copy_from(&(self.translation_part() * factor));
        Self { matrix }
    }

    /// Applies the full transform to a position.
    #[must_use]
    pub fn transform_point(&self, point: Vector3<f64>) -> Vector3<f64> {
        (self.matrix * point.push(1.0)).xyz()
    }

    /// Applies the transform to a point of the `z = 0` plane, dropping `z`.
    #[must_use]
    pub fn transform_point_2d(&self, point: Point2<f64>) -> Point2<f64> {
        Point2::from(self.transform_point(point.coords.push(0.0)).xy())
    }

    /// Applies only the linear part, for directions.
    #[must_use]
    pub fn transform_vector(&self, vector: Vector3<f64>) -> Vector3<f64> {
        self.linear_part() * vector
    }

    /// Check the bottom row is exactly `[0, 0, 0, 1]`.
    #[must_use]
    pub fn is_affine(&self) -> bool {
        let row = self.matrix.row(3);
        row[0] == 0.0 && row[1] == 0.0 && row[2] == 0.0 && row[3] == 1.0
    }

    /// Check the linear part is orthogonal (a rotation or reflection).
    #[must_use]
    pub fn is_isometry(&self, epsilon: f64) -> bool {
        let linear = self.linear_part();
        (linear.transpose() * linear - Matrix3::identity())
            .iter()
            .all(|v| v.abs() <= epsilon)
    }

    /// Element-wise comparison within `epsilon`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.matrix
            .iter()
            .zip(other.matrix.iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl Mul for Transform3D {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}

impl Mul<&Transform3D> for &Transform3D {
    type Output = Transform3D;

    fn mul(self, rhs: &Transform3D) -> Transform3D {
        self.compose(rhs)
    }
}
