//! Transform primitives for symmetry generation.
//!
//! This crate provides the 4x4 homogeneous transforms every symmetry
//! generator is built from:
//! - Translation and uniform / non-uniform scale
//! - Rotation about an arbitrary axis through an arbitrary pivot
//! - Householder reflection across a plane or a 2D line
//! - Look rotations that orient a local frame along a direction
//!
//! # Composition
//!
//! `a * b` applies `b` first, then `a` (column-vector convention). Every
//! generator in the workspace composes in this order.
//!
//! # Example
//!
//! ```
//! use symmetry_transform::Transform3D;
//! use nalgebra::Point2;
//!
//! let mirror = Transform3D::reflection_2d(Point2::new(0.0, 0.0), Point2::new(0.0, 1.0)).unwrap();
//! let p = mirror.transform_point_2d(Point2::new(2.0, 3.0));
//! assert!((p.x + 2.0).abs() < 1e-12);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod plane;
mod transform;

pub use error::{TransformError, TransformResult};
pub use plane::Plane;
pub use transform::{Transform3D, TransformSet};
