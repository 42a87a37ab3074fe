//! Point-group families.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::PointGroupError;
use crate::solids::PlatonicSolid;

/// The 14 families of finite 3D point groups, in Schoenflies notation.
///
/// The axial families (`Cn` .. `Dnd`) are parameterized by a rotational
/// order `n`; the polyhedral families ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PointGroupFamily {
    /// `n`-fold rotation about the up axis.
    #[default]
    Cn,
    /// `Cn` plus mirror planes containing the axis.
    Cnv,
    /// `Cn` plus a mirror plane perpendicular to the axis.
    Cnh,
    /// Improper rotations (rotation followed by reflection).
    Sn,
    /// `Cn` plus perpendicular two-fold axes.
    Dn,
    /// `Dn` plus a horizontal mirror.
    Dnh,
    /// `Dn` plus diagonal mirrors between the two-fold axes.
    Dnd,
    /// Chiral tetrahedral.
    T,
    /// Pyritohedral.
    Th,
    /// Full tetrahedral.
    Td,
    /// Chiral octahedral.
    O,
    /// Full octahedral.
    Oh,
    /// Chiral icosahedral.
    I,
    /// Full icosahedral.
    Ih,
}

impl PointGroupFamily {
    /// All families, in declaration order.
    pub const ALL: [Self; 14] = [
        Self::Cn,
        Self::Cnv,
        Self::Cnh,
        Self::Sn,
        Self::Dn,
        Self::Dnh,
        Self::Dnd,
        Self::T,
        Self::Th,
        Self::Td,
        Self::O,
        Self::Oh,
        Self::I,
        Self::Ih,
    ];

    /// Returns the Schoenflies name of this family.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Cn => "Cn",
            Self::Cnv => "Cnv",
            Self::Cnh => "Cnh",
            Self::Sn => "Sn",
            Self::Dn => "Dn",
            Self::Dnh => "Dnh",
            Self::Dnd => "Dnd",
            Self::T => "T",
            Self::Th => "Th",
            Self::Td => "Td",
            Self::O => "O",
            Self::Oh => "Oh",
            Self::I => "I",
            Self::Ih => "Ih",
        }
    }

    /// Returns true for the families built from a Platonic solid.
    #[must_use]
    pub const fn is_polyhedral(&self) -> bool {
        self.reference_solid().is_some()
    }

    /// Returns true if the rotational order `n` affects the output.
    #[must_use]
    pub const fn uses_order(&self) -> bool {
        !self.is_polyhedral()
    }

    /// The reference solid whose faces seed a polyhedral family.
    ///
    /// `Th` is seeded from the cube (24 face/vertex flags).
    #[must_use]
    pub const fn reference_solid(&self) -> Option<PlatonicSolid> {
        match self {
            Self::T | Self::Td => Some(PlatonicSolid::Tetrahedron),
            Self::Th => Some(PlatonicSolid::Cube),
            Self::O | Self::Oh => Some(PlatonicSolid::Octahedron),
            Self::I | Self::Ih => Some(PlatonicSolid::Icosahedron),
            Self::Cn | Self::Cnv | Self::Cnh | Self::Sn | Self::Dn | Self::Dnh | Self::Dnd => None,
        }
    }

    /// Number of transforms generated for order `n`.
    ///
    /// # Examples
    ///
    /// ```
    /// use symmetry_point::PointGroupFamily;
    ///
    /// assert_eq!(PointGroupFamily::Cnv.expected_len(5), 10);
    /// assert_eq!(PointGroupFamily::Oh.expected_len(5), 48);
    /// ```
    #[must_use]
    pub const fn expected_len(&self, n: usize) -> usize {
        match self {
            Self::Cn => n,
            Self::Cnv | Self::Cnh | Self::Sn | Self::Dn => 2 * n,
            Self::Dnh | Self::Dnd => 4 * n,
            Self::T => 12,
            Self::Th | Self::Td | Self::O => 24,
            Self::Oh => 48,
            Self::I => 60,
            Self::Ih => 120,
        }
    }
}

impl fmt::Display for PointGroupFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PointGroupFamily {
    type Err = PointGroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|family| family.name() == trimmed)
            .ok_or_else(|| PointGroupError::UnknownFamily(trimmed.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_roundtrip_through_from_str() {
        for family in PointGroupFamily::ALL {
            match family.name().parse::<PointGroupFamily>() {
                Ok(parsed) => assert_eq!(parsed, family),
                Err(err) => panic!("{} failed to parse: {err}", family.name()),
            }
            assert_eq!(family.to_string(), family.name());
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "C7x".parse::<PointGroupFamily>();
        assert_eq!(err, Err(PointGroupError::UnknownFamily("C7x".to_owned())));
    }

    #[test]
    fn polyhedral_families() {
        let polyhedral: Vec<_> = PointGroupFamily::ALL
            .into_iter()
            .filter(PointGroupFamily::is_polyhedral)
            .collect();
        assert_eq!(polyhedral.len(), 7);
        assert!(PointGroupFamily::Dnd.uses_order());
        assert!(!PointGroupFamily::Ih.uses_order());
    }

    #[test]
    fn closed_form_orders() {
        assert_eq!(PointGroupFamily::Cn.expected_len(6), 6);
        assert_eq!(PointGroupFamily::Dnh.expected_len(3), 12);
        assert_eq!(PointGroupFamily::T.expected_len(1), 12);
        assert_eq!(PointGroupFamily::Ih.expected_len(1), 120);
    }
}
