//! Finite 3D point-group generation.
//!
//! Produces the set of transforms that replicate an object under one of
//! the 14 point-group families:
//! - Axial families `Cn`, `Cnv`, `Cnh`, `Sn`, `Dn`, `Dnh`, `Dnd`
//! - Polyhedral families `T`, `Th`, `Td`, `O`, `Oh`, `I`, `Ih`
//!
//! # Frame
//!
//! `+Y` is the principal (up) axis and `+Z` the forward axis. Every
//! generated transform first pushes the object `radius` units along `-Z`,
//! then applies the group element.
//!
//! # Example
//!
//! ```
//! use symmetry_point::{generate_point_group, PointGroupFamily, PointGroupParams};
//!
//! let params = PointGroupParams::new(PointGroupFamily::Dn)
//!     .with_order(4)
//!     .with_radius(2.0);
//! let transforms = generate_point_group(&params).unwrap();
//! assert_eq!(transforms.len(), 8);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod family;
mod generate;
mod params;
pub mod solids;

pub use error::{PointGroupError, PointGroupResult};
pub use family::PointGroupFamily;
pub use generate::generate_point_group;
pub use params::PointGroupParams;
pub use solids::PlatonicSolid;
