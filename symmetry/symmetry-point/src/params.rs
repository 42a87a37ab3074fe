//! Point-group generation parameters.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{PointGroupError, PointGroupResult};
use crate::family::PointGroupFamily;

/// Configuration parameters for point-group generation.
///
/// # Examples
///
/// ```
/// use symmetry_point::{PointGroupFamily, PointGroupParams};
///
/// let params = PointGroupParams::new(PointGroupFamily::Dnh)
///     .with_order(6)
///     .with_radius(2.5);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointGroupParams {
    /// Which family of point group to generate.
    pub family: PointGroupFamily,

    /// Rotational fold `n` (ignored by polyhedral families). Must be at least 1.
    pub n: usize,

    /// Distance from the local origin to the circle or sphere of placement.
    ///
    /// Zero or negative radii are valid and degenerate to pure rotation
    /// about the local origin.
    pub radius: f64,
}

impl Default for PointGroupParams {
    fn default() -> Self {
        Self {
            family: PointGroupFamily::Cn,
            n: 3,
            radius: 1.0,
        }
    }
}

impl PointGroupParams {
    /// Creates parameters for the given family with default order and radius.
    #[must_use]
    pub fn new(family: PointGroupFamily) -> Self {
        Self {
            family,
            ..Default::default()
        }
    }

    /// Sets the rotational order.
    #[must_use]
    pub const fn with_order(mut self, n: usize) -> Self {
        self.n = n;
        self
    }

    /// Sets the placement radius.
    #[must_use]
    pub const fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Number of transforms these parameters generate.
    #[must_use]
    pub const fn expected_len(&self) -> usize {
        self.family.expected_len(self.n)
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`PointGroupError::InvalidOrder`] if `n == 0` and
    /// [`PointGroupError::InvalidRadius`] if the radius is not finite.
    pub fn validate(&self) -> PointGroupResult<()> {
        if self.n == 0 {
            return Err(PointGroupError::InvalidOrder(self.n));
        }
        if !self.radius.is_finite() {
            return Err(PointGroupError::InvalidRadius(self.radius));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_c3_unit_radius() {
        let params = PointGroupParams::default();
        assert_eq!(params.family, PointGroupFamily::Cn);
        assert_eq!(params.n, 3);
        assert!((params.radius - 1.0).abs() < f64::EPSILON);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn zero_order_rejected() {
        let params = PointGroupParams::new(PointGroupFamily::Dn).with_order(0);
        assert_eq!(params.validate(), Err(PointGroupError::InvalidOrder(0)));
    }

    #[test]
    fn zero_order_rejected_even_for_polyhedral() {
        let params = PointGroupParams::new(PointGroupFamily::Oh).with_order(0);
        assert!(params.validate().is_err());
    }

    #[test]
    fn non_finite_radius_rejected() {
        let params = PointGroupParams::default().with_radius(f64::NAN);
        assert!(matches!(
            params.validate(),
            Err(PointGroupError::InvalidRadius(_))
        ));
    }

    #[test]
    fn negative_radius_is_valid() {
        let params = PointGroupParams::default().with_radius(-2.0);
        assert!(params.validate().is_ok());
    }
}
