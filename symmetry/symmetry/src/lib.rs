//! Symmetry-group transform generation.
//!
//! This umbrella crate re-exports the symmetry-* crates and provides the
//! two entry points hosts call to lay out copies of an object:
//!
//! - [`generate_point_group`]: transforms for a finite 3D point group
//! - [`generate_wallpaper_group`]: a normalized planar tiling for one of
//!   the 17 wallpaper groups, plus its fundamental domain
//!
//! The library never installs a `tracing` subscriber; hosts do.
//!
//! # Quick Start
//!
//! ```
//! use symmetry::prelude::*;
//!
//! let ring = symmetry::generate_point_group(PointGroupFamily::Dnh, 6, 2.0).unwrap();
//! assert_eq!(ring.len(), 24);
//!
//! let tiling = symmetry::generate_wallpaper_group(
//!     WallpaperGroupId::P1,
//!     2,
//!     2,
//!     [2.0, 0.0, 0.0, 2.0],
//!     Vector2::zeros(),
//!     1.0,
//!     Vector2::new(1.0, 1.0),
//!     1.0,
//! )
//! .unwrap();
//! assert_eq!(tiling.transforms[0], Transform3D::identity());
//! ```
//!
//! # Module Organization
//!
//! - [`transform`] - 4x4 transform primitives and the composition convention
//! - [`point`] - Point-group families and Platonic reference solids
//! - [`wallpaper`] - Wallpaper groups, lattices and expansion

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

use nalgebra::Vector2;
use tracing::debug;

// =============================================================================
// Re-exports
// =============================================================================

/// Transform primitives: rotation, reflection, scale, translation.
pub use symmetry_transform as transform;

/// Finite 3D point groups.
pub use symmetry_point as point;

/// The 17 planar wallpaper groups.
pub use symmetry_wallpaper as wallpaper;

use symmetry_point::{PointGroupFamily, PointGroupParams, PointGroupResult};
use symmetry_transform::TransformSet;
use symmetry_wallpaper::{ExpansionResult, WallpaperGroupId, WallpaperParams, WallpaperResult};

// =============================================================================
// Entry points
// =============================================================================

/// Generates the transforms of a point group.
///
/// Shorthand for [`point::generate_point_group`] with
/// [`PointGroupParams`] built from the arguments.
///
/// # Errors
///
/// Returns an error if `n == 0` or `radius` is not finite.
pub fn generate_point_group(
    family: PointGroupFamily,
    n: usize,
    radius: f64,
) -> PointGroupResult<TransformSet> {
    let params = PointGroupParams::new(family)
        .with_order(n)
        .with_radius(radius);
    symmetry_point::generate_point_group(&params)
}

/// Builds and expands a wallpaper group on a unit tile.
///
/// `lattice_params` are the group's shape parameters (see
/// [`WallpaperGroupId::parameter_names`]). The object is first scaled by
/// `unit_scale` and moved by `unit_offset`, the lattice is scaled
/// component-wise by `spacing`, and the finished layout's translations are
/// multiplied by `final_scale`.
///
/// # Errors
///
/// Returns an error for non-finite inputs, degenerate shape parameters, or
/// a singular first placement (e.g. `unit_scale == 0`).
#[allow(clippy::too_many_arguments)]
pub fn generate_wallpaper_group(
    group: WallpaperGroupId,
    repeat_x: usize,
    repeat_y: usize,
    lattice_params: [f64; 4],
    unit_offset: Vector2<f64>,
    unit_scale: f64,
    spacing: Vector2<f64>,
    final_scale: f64,
) -> WallpaperResult<ExpansionResult> {
    let params = WallpaperParams::new(group)
        .with_tile_size(Vector2::new(1.0, 1.0))
        .with_repeats(repeat_x, repeat_y)
        .with_shape(lattice_params)
        .with_unit_offset(unit_offset)
        .with_unit_scale(unit_scale)
        .with_spacing(spacing)
        .with_final_scale(final_scale);

    debug!(group = %group, repeat_x, repeat_y, "Generating wallpaper group");
    symmetry_wallpaper::expand_wallpaper(&params)
}

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for symmetry generation.
///
/// # Usage
///
/// ```
/// use symmetry::prelude::*;
/// ```
pub mod prelude {
    pub use nalgebra::{Point2, Vector2, Vector3};

    // Transform
    pub use symmetry_transform::{Transform3D, TransformSet};

    // Point groups
    pub use symmetry_point::{PointGroupFamily, PointGroupParams};

    // Wallpaper groups
    pub use symmetry_wallpaper::{
        ExpansionResult, FundamentalDomain, LatticeBasis, PlanarLatticeGroup, WallpaperExpander,
        WallpaperGroupId, WallpaperParams,
    };
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prelude_imports() {
        use prelude::*;

        let params = WallpaperParams::preset(WallpaperGroupId::P3);
        assert_eq!(params.group.point_group_order(), 3);
        assert_eq!(Transform3D::default(), Transform3D::identity());
    }

    #[test]
    fn module_reexports() {
        let _ = transform::Transform3D::identity();
        let _ = point::PointGroupParams::default();
        let _ = wallpaper::WallpaperParams::default();
    }

    #[test]
    fn point_group_entry_point() {
        let transforms = generate_point_group(PointGroupFamily::Cnv, 4, 1.0);
        assert_eq!(transforms.map(|t| t.len()), Ok(8));
        assert!(generate_point_group(PointGroupFamily::Cn, 0, 1.0).is_err());
    }

    #[test]
    fn wallpaper_entry_point() {
        let result = generate_wallpaper_group(
            WallpaperGroupId::Pmm,
            2,
            3,
            [1.5, 1.0, 0.0, 0.0],
            Vector2::zeros(),
            1.0,
            Vector2::new(1.0, 1.0),
            1.0,
        );
        assert_eq!(result.map(|r| r.len()), Ok(24));
    }
}
