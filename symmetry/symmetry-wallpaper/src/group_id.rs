//! Wallpaper group identifiers.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::WallpaperError;

/// The 17 planar wallpaper groups, in crystallographic short notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WallpaperGroupId {
    /// Translations only.
    #[default]
    P1,
    /// Half-turns.
    P2,
    /// Three-fold rotations.
    P3,
    /// Four-fold rotations.
    P4,
    /// Six-fold rotations.
    P6,
    /// Parallel mirrors.
    Pm,
    /// Parallel glide reflections.
    Pg,
    /// Mirrors with glides between them.
    Cm,
    /// Perpendicular mirrors.
    Pmm,
    /// Mirrors in one direction, glides in the other.
    Pmg,
    /// Perpendicular glides.
    Pgg,
    /// Perpendicular mirrors on a centered lattice.
    Cmm,
    /// Three-fold rotations with all centres on mirrors.
    P3m1,
    /// Three-fold rotations with some centres off mirrors.
    P31m,
    /// Four-fold rotations with mirrors through every centre.
    P4m,
    /// Four-fold rotations with centres off mirrors.
    P4g,
    /// Six-fold rotations with mirrors.
    P6m,
}

/// Bravais lattice shape required by a wallpaper group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LatticeSystem {
    /// Arbitrary parallelogram.
    Oblique,
    /// Rectangle.
    Rectangular,
    /// Rhombus (rectangle with a centring point).
    CenteredRectangular,
    /// Square.
    Square,
    /// 120° rhombus.
    Hexagonal,
}

const LATTICE_NAMES: &[&str] = &["d1x", "d1y", "d2x", "d2y"];
const RECTANGLE_NAMES: &[&str] = &["width", "height"];
const HEX_NAMES: &[&str] = &["hex_size"];
const SQUARE_NAMES: &[&str] = &["square_size"];
const BASE_NAMES: &[&str] = &["base_size"];

impl WallpaperGroupId {
    /// All groups, in declaration order.
    pub const ALL: [Self; 17] = [
        Self::P1,
        Self::P2,
        Self::P3,
        Self::P4,
        Self::P6,
        Self::Pm,
        Self::Pg,
        Self::Cm,
        Self::Pmm,
        Self::Pmg,
        Self::Pgg,
        Self::Cmm,
        Self::P3m1,
        Self::P31m,
        Self::P4m,
        Self::P4g,
        Self::P6m,
    ];

    /// Returns the short name, e.g. `"p31m"`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::P1 => "p1",
            Self::P2 => "p2",
            Self::P3 => "p3",
            Self::P4 => "p4",
            Self::P6 => "p6",
            Self::Pm => "pm",
            Self::Pg => "pg",
            Self::Cm => "cm",
            Self::Pmm => "pmm",
            Self::Pmg => "pmg",
            Self::Pgg => "pgg",
            Self::Cmm => "cmm",
            Self::P3m1 => "p3m1",
            Self::P31m => "p31m",
            Self::P4m => "p4m",
            Self::P4g => "p4g",
            Self::P6m => "p6m",
        }
    }

    /// Names of the shape parameters this group reads, in order.
    ///
    /// Only the leading `degrees_of_freedom()` entries of a parameter
    /// vector are used; the rest are ignored.
    #[must_use]
    pub const fn parameter_names(&self) -> &'static [&'static str] {
        match self {
            Self::P1 | Self::P2 => LATTICE_NAMES,
            Self::Pm | Self::Pg | Self::Cm | Self::Pmm | Self::Pmg | Self::Pgg | Self::Cmm => {
                RECTANGLE_NAMES
            }
            Self::P3 | Self::P6 | Self::P3m1 | Self::P6m => HEX_NAMES,
            Self::P4 | Self::P4m | Self::P4g => SQUARE_NAMES,
            Self::P31m => BASE_NAMES,
        }
    }

    /// Number of free real shape parameters.
    #[must_use]
    pub const fn degrees_of_freedom(&self) -> usize {
        self.parameter_names().len()
    }

    /// Order of the point group, i.e. the number of cosets of the
    /// translation subgroup (identity included).
    #[must_use]
    pub const fn point_group_order(&self) -> usize {
        match self {
            Self::P1 => 1,
            Self::P2 | Self::Pm | Self::Pg | Self::Cm => 2,
            Self::P3 => 3,
            Self::P4 | Self::Pmm | Self::Pmg | Self::Pgg | Self::Cmm => 4,
            Self::P6 | Self::P3m1 | Self::P31m => 6,
            Self::P4m | Self::P4g => 8,
            Self::P6m => 12,
        }
    }

    /// Returns true if the group contains mirrors or glide reflections.
    #[must_use]
    pub const fn has_reflections(&self) -> bool {
        !matches!(
            self,
            Self::P1 | Self::P2 | Self::P3 | Self::P4 | Self::P6
        )
    }

    /// The lattice shape this group's translations form.
    #[must_use]
    pub const fn lattice_system(&self) -> LatticeSystem {
        match self {
            Self::P1 | Self::P2 => LatticeSystem::Oblique,
            Self::Pm | Self::Pg | Self::Pmm | Self::Pmg | Self::Pgg => LatticeSystem::Rectangular,
            Self::Cm | Self::Cmm => LatticeSystem::CenteredRectangular,
            Self::P4 | Self::P4m | Self::P4g => LatticeSystem::Square,
            Self::P3 | Self::P6 | Self::P3m1 | Self::P31m | Self::P6m => LatticeSystem::Hexagonal,
        }
    }
}

impl fmt::Display for WallpaperGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WallpaperGroupId {
    type Err = WallpaperError;

    /// Parses a short name, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| WallpaperError::UnknownGroup(trimmed.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_roundtrip() {
        for id in WallpaperGroupId::ALL {
            assert_eq!(id.name().parse::<WallpaperGroupId>(), Ok(id));
            assert_eq!(id.to_string(), id.name());
        }
        assert_eq!(" P4M ".parse::<WallpaperGroupId>(), Ok(WallpaperGroupId::P4m));
    }

    #[test]
    fn unknown_group_is_rejected() {
        assert_eq!(
            "p5".parse::<WallpaperGroupId>(),
            Err(WallpaperError::UnknownGroup("p5".to_owned()))
        );
    }

    #[test]
    fn degrees_of_freedom() {
        assert_eq!(WallpaperGroupId::P1.degrees_of_freedom(), 4);
        assert_eq!(WallpaperGroupId::P2.degrees_of_freedom(), 4);
        assert_eq!(WallpaperGroupId::Cmm.degrees_of_freedom(), 2);
        assert_eq!(WallpaperGroupId::P6m.degrees_of_freedom(), 1);
        assert_eq!(WallpaperGroupId::P31m.parameter_names(), &["base_size"]);
    }

    #[test]
    fn point_group_orders_sum() {
        // 1+2+3+4+6 + 2+2+2 + 4*4 + 6+6 + 8+8 + 12
        let total: usize = WallpaperGroupId::ALL
            .iter()
            .map(WallpaperGroupId::point_group_order)
            .sum();
        assert_eq!(total, 78);
    }

    #[test]
    fn reflection_groups() {
        let count = WallpaperGroupId::ALL
            .iter()
            .filter(|id| id.has_reflections())
            .count();
        assert_eq!(count, 12);
    }

    #[test]
    fn lattice_systems() {
        assert_eq!(WallpaperGroupId::P2.lattice_system(), LatticeSystem::Oblique);
        assert_eq!(
            WallpaperGroupId::Cm.lattice_system(),
            LatticeSystem::CenteredRectangular
        );
        assert_eq!(WallpaperGroupId::P4g.lattice_system(), LatticeSystem::Square);
        assert_eq!(WallpaperGroupId::P31m.lattice_system(), LatticeSystem::Hexagonal);
    }
}
