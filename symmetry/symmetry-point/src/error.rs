//! Error types for point-group generation.

use thiserror::Error;

/// Result type for point-group operations.
pub type PointGroupResult<T> = Result<T, PointGroupError>;

/// Errors that can occur during point-group generation.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum PointGroupError {
    /// The rotational order is zero.
    #[error("rotational order must be at least 1, got {0}")]
    InvalidOrder(usize),

    /// The placement radius is NaN or infinite.
    #[error("placement radius must be finite, got {0}")]
    InvalidRadius(f64),

    /// A family name could not be parsed.
    #[error("unknown point-group family: {0:?}")]
    UnknownFamily(String),
}

impl PointGroupError {
    /// Returns true if the error stems from structurally invalid input.
    ///
    /// Point-group generation has no data-dependent numeric failures, so
    /// every variant is a configuration error.
    #[must_use]
    pub const fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidOrder(_) | Self::InvalidRadius(_) | Self::UnknownFamily(_)
        )
    }

    /// Returns true if the error is a data-dependent numeric degeneracy.
    #[must_use]
    pub const fn is_numeric_error(&self) -> bool {
        !self.is_configuration_error()
    }
}
