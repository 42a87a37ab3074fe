//! Error types for wallpaper-group construction and expansion.

use symmetry_transform::TransformError;
use thiserror::Error;

/// Result type for wallpaper operations.
pub type WallpaperResult<T> = Result<T, WallpaperError>;

/// Errors that can occur while building or expanding a wallpaper group.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum WallpaperError {
    /// A shape or placement parameter would produce a degenerate domain.
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The lattice basis vectors are zero-length or parallel.
    #[error("degenerate lattice basis: u = {u:?}, v = {v:?}")]
    DegenerateLattice {
        /// First basis vector.
        u: [f64; 2],
        /// Second basis vector.
        v: [f64; 2],
    },

    /// Per-axis spacing is not finite.
    #[error("invalid spacing ({x}, {y}): components must be finite")]
    InvalidSpacing {
        /// Spacing along the first lattice direction.
        x: f64,
        /// Spacing along the second lattice direction.
        y: f64,
    },

    /// A unit or final scale is not finite.
    #[error("invalid scale {0}: must be finite")]
    InvalidScale(f64),

    /// Repeat counts ask for more placements than can be stored.
    #[error("too many placements: {seeds} seeds x {repeat_x} x {repeat_y}")]
    TooManyPlacements {
        /// Seeds per lattice cell.
        seeds: usize,
        /// Repeats along the first lattice vector.
        repeat_x: usize,
        /// Repeats along the second lattice vector.
        repeat_y: usize,
    },

    /// A group id could not be parsed.
    #[error("unknown wallpaper group: {0:?}")]
    UnknownGroup(String),

    /// A transform could not be built or inverted.
    #[error(transparent)]
    Transform(#[from] TransformError),
}

impl WallpaperError {
    /// Returns true if the error stems from structurally invalid input.
    #[must_use]
    pub const fn is_configuration_error(&self) -> bool {
        match self {
            Self::InvalidParameter { .. }
            | Self::DegenerateLattice { .. }
            | Self::InvalidSpacing { .. }
            | Self::InvalidScale(_)
            | Self::TooManyPlacements { .. }
            | Self::UnknownGroup(_) => true,
            Self::Transform(err) => err.is_configuration_error(),
        }
    }

    /// Returns true if the error is a data-dependent numeric degeneracy,
    /// such as a singular seed transform during normalization.
    #[must_use]
    pub const fn is_numeric_error(&self) -> bool {
        match self {
            Self::Transform(err) => err.is_numeric_error(),
            _ => false,
        }
    }
}
