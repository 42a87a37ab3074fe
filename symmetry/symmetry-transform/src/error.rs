//! Error types for transform construction.

use thiserror::Error;

/// Result type for transform operations.
pub type TransformResult<T> = Result<T, TransformError>;

/// Errors that can occur while building or inverting a transform.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum TransformError {
    /// The two points defining a reflection line coincide.
    #[error("reflection line is degenerate: points {p1:?} and {p2:?} coincide")]
    DegenerateReflection {
        /// First point of the line.
        p1: [f64; 2],
        /// Second point of the line.
        p2: [f64; 2],
    },

    /// A plane normal collapsed to (near) zero length.
    #[error("plane normal has near-zero length")]
    DegenerateNormal,

    /// Matrix is not invertible.
    #[error("matrix is not invertible (linear determinant {determinant:e})")]
    NotInvertible {
        /// Determinant of the upper-left 3x3 block.
        determinant: f64,
    },
}

impl TransformError {
    /// Returns true if the error stems from structurally invalid input.
    #[must_use]
    pub const fn is_configuration_error(&self) -> bool {
        matches!(self, Self::DegenerateReflection { .. })
    }

    /// Returns true if the error is a data-dependent numeric degeneracy.
    #[must_use]
    pub const fn is_numeric_error(&self) -> bool {
        matches!(self, Self::DegenerateNormal | Self::NotInvertible { .. })
    }
}
