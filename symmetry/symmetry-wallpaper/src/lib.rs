//! The 17 planar wallpaper groups.
//!
//! This crate turns a wallpaper group and a handful of shape parameters
//! into a finite list of placements that tile the plane:
//!
//! - **[`PlanarLatticeGroup`]**: fundamental domain, lattice basis and
//!   coset representatives for one group
//! - **[`WallpaperExpander`]**: repeats every representative across the
//!   lattice and normalizes the result so the first placement is the
//!   identity
//! - **[`WallpaperParams`]**: preset layouts and builders tying the two
//!   together via [`expand_wallpaper`]
//!
//! All geometry lives in the `z = 0` plane; rotations are about `+Z`.
//!
//! # Example
//!
//! ```
//! use symmetry_wallpaper::{expand_wallpaper, WallpaperGroupId, WallpaperParams};
//!
//! let params = WallpaperParams::preset(WallpaperGroupId::P4g).with_repeats(3, 3);
//! let result = expand_wallpaper(&params).unwrap();
//!
//! assert_eq!(result.len(), 8 * 9);
//! assert_eq!(result.transforms[0], symmetry_transform::Transform3D::identity());
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod domain;
mod error;
mod expand;
mod group_id;
mod lattice;
mod params;
mod planar;
mod result;

pub use domain::FundamentalDomain;
pub use error::{WallpaperError, WallpaperResult};
pub use expand::{WallpaperExpander, expand_wallpaper, normalize};
pub use group_id::{LatticeSystem, WallpaperGroupId};
pub use lattice::LatticeBasis;
pub use params::WallpaperParams;
pub use planar::PlanarLatticeGroup;
pub use result::ExpansionResult;
