//! Translation lattices.

use nalgebra::{Matrix2, Point2, Vector2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{WallpaperError, WallpaperResult};

/// Below this `|det(U, V)|` the basis is treated as degenerate.
const DEGENERATE_EPSILON: f64 = 1e-12;

/// Two vectors spanning the period lattice of a wallpaper group.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatticeBasis {
    /// First basis vector.
    pub u: Vector2<f64>,
    /// Second basis vector.
    pub v: Vector2<f64>,
}

impl LatticeBasis {
    /// Creates a basis, rejecting zero-length or parallel vectors.
    ///
    /// # Errors
    ///
    /// Returns [`WallpaperError::DegenerateLattice`] if `|det(u, v)|` is
    /// (near) zero or either vector is not finite.
    pub fn new(u: Vector2<f64>, v: Vector2<f64>) -> WallpaperResult<Self> {
        let basis = Self { u, v };
        let finite = u.iter().chain(v.iter()).all(|c| c.is_finite());
        if !finite || basis.determinant().abs() < DEGENERATE_EPSILON {
            return Err(WallpaperError::DegenerateLattice {
                u: [u.x, u.y],
                v: [v.x, v.y],
            });
        }
        Ok(basis)
    }

    /// Creates a basis from component-grouped storage: `x_components` holds
    /// `(Ux, Vx)` and `y_components` holds `(Uy, Vy)`.
    ///
    /// # Errors
    ///
    /// Same as [`LatticeBasis::new`].
    ///
    /// # Example
    ///
    /// ```
    /// use nalgebra::Vector2;
    /// use symmetry_wallpaper::LatticeBasis;
    ///
    /// let basis = LatticeBasis::from_transposed(
    ///     Vector2::new(1.0, 0.5),
    ///     Vector2::new(0.0, 2.0),
    /// ).unwrap();
    /// assert_eq!(basis.u, Vector2::new(1.0, 0.0));
    /// assert_eq!(basis.v, Vector2::new(0.5, 2.0));
    /// ```
    pub fn from_transposed(
        x_components: Vector2<f64>,
        y_components: Vector2<f64>,
    ) -> WallpaperResult<Self> {
        Self::new(
            Vector2::new(x_components.x, y_components.x),
            Vector2::new(x_components.y, y_components.y),
        )
    }

    /// Lattice point `i·U + j·V`.
    #[must_use]
    pub fn point(&self, i: i32, j: i32) -> Point2<f64> {
        Point2::from(self.u * f64::from(i) + self.v * f64::from(j))
    }

    /// Basis with every vector scaled component-wise by `spacing`.
    ///
    /// The result may be degenerate when a spacing component is zero.
    #[must_use]
    pub fn scaled(&self, spacing: Vector2<f64>) -> Self {
        Self {
            u: self.u.component_mul(&spacing),
            v: self.v.component_mul(&spacing),
        }
    }

    /// `det(U, V)`: the signed area of one lattice cell.
    #[must_use]
    pub fn determinant(&self) -> f64 {
        Matrix2::from_columns(&[self.u, self.v]).determinant()
    }

    /// Returns true if the vectors are (near) parallel or zero.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.determinant().abs() < DEGENERATE_EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn square_basis() {
        let basis = LatticeBasis::new(Vector2::new(2.0, 0.0), Vector2::new(0.0, 3.0));
        let Ok(basis) = basis else {
            panic!("square basis rejected");
        };
        assert_relative_eq!(basis.determinant(), 6.0, epsilon = 1e-12);
        assert_eq!(basis.point(1, 1), Point2::new(2.0, 3.0));
        assert_eq!(basis.point(-1, 2), Point2::new(-2.0, 6.0));
    }

    #[test]
    fn parallel_vectors_rejected() {
        let err = LatticeBasis::new(Vector2::new(1.0, 1.0), Vector2::new(-2.0, -2.0));
        assert!(matches!(err, Err(WallpaperError::DegenerateLattice { .. })));
    }

    #[test]
    fn zero_vector_rejected() {
        let err = LatticeBasis::new(Vector2::zeros(), Vector2::new(0.0, 1.0));
        assert!(err.is_err());
    }

    #[test]
    fn non_finite_rejected() {
        let err = LatticeBasis::new(Vector2::new(f64::NAN, 0.0), Vector2::new(0.0, 1.0));
        assert!(err.is_err());
    }

    #[test]
    fn transposed_matches_pairs() {
        // Hexagonal storage as (Ux, Vx), (Uy, Vy)
        let x = Vector2::new(0.75, 0.75);
        let y = Vector2::new(0.433, -0.433);
        let transposed = LatticeBasis::from_transposed(x, y);
        let direct = LatticeBasis::new(Vector2::new(0.75, 0.433), Vector2::new(0.75, -0.433));
        assert_eq!(transposed, direct);
    }

    #[test]
    fn scaled_is_component_wise() {
        let basis = LatticeBasis {
            u: Vector2::new(1.0, 1.0),
            v: Vector2::new(1.0, -1.0),
        };
        let scaled = basis.scaled(Vector2::new(2.0, 0.5));
        assert_eq!(scaled.u, Vector2::new(2.0, 0.5));
        assert_eq!(scaled.v, Vector2::new(2.0, -0.5));
        assert_relative_eq!(scaled.determinant(), basis.determinant(), epsilon = 1e-12);

        assert!(basis.scaled(Vector2::new(1.0, 0.0)).is_degenerate());
    }
}
