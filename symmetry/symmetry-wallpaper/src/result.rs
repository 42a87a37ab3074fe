//! Result type for wallpaper expansion.

use symmetry_transform::{Transform3D, TransformSet};

use crate::domain::FundamentalDomain;
use crate::group_id::WallpaperGroupId;

/// Output of a wallpaper expansion.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpansionResult {
    /// Normalized placements; the first entry is the identity.
    pub transforms: TransformSet,

    /// Fundamental domain of the group, for outlining.
    pub fundamental_domain: FundamentalDomain,

    /// Which group was expanded.
    pub group: WallpaperGroupId,
}

impl ExpansionResult {
    /// Number of placements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Returns true if nothing was placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Iterates over the placements in emission order.
    pub fn iter(&self) -> std::slice::Iter<'_, Transform3D> {
        self.transforms.iter()
    }
}

impl<'a> IntoIterator for &'a ExpansionResult {
    type Item = &'a Transform3D;
    type IntoIter = std::slice::Iter<'a, Transform3D>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Display for ExpansionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Wallpaper {}: {} placements, domain of {} vertices",
            self.group,
            self.transforms.len(),
            self.fundamental_domain.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point2;

    fn sample() -> ExpansionResult {
        ExpansionResult {
            transforms: vec![Transform3D::identity(), Transform3D::translation(1.0, 0.0, 0.0)],
            fundamental_domain: FundamentalDomain::new(
                vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), Point2::new(0.0, 1.0)],
                Point2::origin(),
            ),
            group: WallpaperGroupId::Pm,
        }
    }

    #[test]
    fn accessors() {
        let result = sample();
        assert_eq!(result.len(), 2);
        assert!(!result.is_empty());
        assert_eq!(result.iter().count(), 2);
        assert_eq!(result.iter().next(), Some(&Transform3D::identity()));
    }

    #[test]
    fn display() {
        let display = sample().to_string();
        assert!(display.contains("pm"));
        assert!(display.contains("2 placements"));
        assert!(display.contains("3 vertices"));
    }
}
