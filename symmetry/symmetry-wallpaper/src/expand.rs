//! Lattice expansion of a wallpaper group into a placement list.
//!
//! The expansion seeds one copy per coset representative, repeats each
//! seed across the lattice, then normalizes so the first placement is the
//! identity.

// Repeat counts are small; usize -> f64 is exact in practice
#![allow(clippy::cast_precision_loss)]

use nalgebra::Vector2;
use symmetry_transform::{Transform3D, TransformSet};
use tracing::{debug, info, warn};

use crate::error::{WallpaperError, WallpaperResult};
use crate::params::WallpaperParams;
use crate::planar::PlanarLatticeGroup;
use crate::result::ExpansionResult;

/// Expands a [`PlanarLatticeGroup`] across its lattice.
///
/// # Example
///
/// ```
/// use nalgebra::Vector2;
/// use symmetry_wallpaper::{PlanarLatticeGroup, WallpaperExpander, WallpaperGroupId};
///
/// let group = PlanarLatticeGroup::new(
///     WallpaperGroupId::P2,
///     Vector2::new(1.0, 1.0),
///     [2.0, 0.0, 0.0, 2.0],
/// ).unwrap();
/// let result = WallpaperExpander::new(group).with_repeats(3, 2).expand().unwrap();
/// assert_eq!(result.len(), 12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WallpaperExpander {
    group: PlanarLatticeGroup,
    repeat_x: usize,
    repeat_y: usize,
    spacing: Vector2<f64>,
    unit_offset: Vector2<f64>,
    unit_scale: f64,
    final_scale: f64,
}

impl WallpaperExpander {
    /// Expander for `group` with one repeat, unit spacing and scales, and
    /// no offset.
    #[must_use]
    pub fn new(group: PlanarLatticeGroup) -> Self {
        Self {
            group,
            repeat_x: 1,
            repeat_y: 1,
            spacing: Vector2::new(1.0, 1.0),
            unit_offset: Vector2::zeros(),
            unit_scale: 1.0,
            final_scale: 1.0,
        }
    }

    /// Expander configured from `params`, building the group first.
    ///
    /// # Errors
    ///
    /// Returns an error if `params` fails validation or the group cannot
    /// be built.
    pub fn from_params(params: &WallpaperParams) -> WallpaperResult<Self> {
        params.validate()?;
        Ok(Self::new(params.build_group()?)
            .with_repeats(params.repeat_x, params.repeat_y)
            .with_spacing(params.spacing)
            .with_unit_offset(params.unit_offset)
            .with_unit_scale(params.unit_scale)
            .with_final_scale(params.final_scale))
    }

    /// Sets the repeat counts along `U` and `V`.
    #[must_use]
    pub const fn with_repeats(mut self, repeat_x: usize, repeat_y: usize) -> Self {
        self.repeat_x = repeat_x;
        self.repeat_y = repeat_y;
        self
    }

    /// Sets the component-wise lattice spacing.
    #[must_use]
    pub const fn with_spacing(mut self, spacing: Vector2<f64>) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets the per-object offset.
    #[must_use]
    pub const fn with_unit_offset(mut self, unit_offset: Vector2<f64>) -> Self {
        self.unit_offset = unit_offset;
        self
    }

    /// Sets the per-object scale.
    #[must_use]
    pub const fn with_unit_scale(mut self, unit_scale: f64) -> Self {
        self.unit_scale = unit_scale;
        self
    }

    /// Sets the final layout scale.
    #[must_use]
    pub const fn with_final_scale(mut self, final_scale: f64) -> Self {
        self.final_scale = final_scale;
        self
    }

    /// The group being expanded.
    #[must_use]
    pub const fn group(&self) -> &PlanarLatticeGroup {
        &self.group
    }

    /// Placement of the object before any group element:
    /// `translate(unit_offset) * scale(unit_scale)`.
    #[must_use]
    pub fn unit_transform(&self) -> Transform3D {
        Transform3D::translation_2d(self.unit_offset)
            * Transform3D::uniform_scale(self.unit_scale)
    }

    /// Expands the group into a normalized placement list.
    ///
    /// For every representative `m` (identity first) the seed `m * unit`
    /// is emitted as `translate(j·V) * translate(i·U) * seed` for
    /// `j in 0..repeat_y`, `i in 0..repeat_x`, with `U` and `V` scaled by
    /// the spacing. The list is then normalized (see [`normalize`]) and
    /// every translation is multiplied by the final scale.
    ///
    /// A zero repeat count yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`WallpaperError::InvalidScale`] for a non-finite scale, and
    /// [`TransformError::NotInvertible`] wrapped in
    /// [`WallpaperError::Transform`] if the first placement is singular,
    /// e.g. for a zero unit scale. Returns
    /// [`WallpaperError::TooManyPlacements`] if the placement list cannot be
    /// allocated.
    ///
    /// [`TransformError::NotInvertible`]: symmetry_transform::TransformError::NotInvertible
    pub fn expand(&self) -> WallpaperResult<ExpansionResult> {
        for scale in [self.unit_scale, self.final_scale] {
            if !scale.is_finite() {
                return Err(WallpaperError::InvalidScale(scale));
            }
        }

        let id = self.group.id();
        let fundamental_domain = self.group.domain().clone();

        if self.repeat_x == 0 || self.repeat_y == 0 {
            warn!(
                group = %id,
                repeat_x = self.repeat_x,
                repeat_y = self.repeat_y,
                "Zero repeat count, nothing to place"
            );
            return Ok(ExpansionResult {
                transforms: Vec::new(),
                fundamental_domain,
                group: id,
            });
        }

        let lattice = self.group.basis().scaled(self.spacing);
        if lattice.is_degenerate() {
            warn!(
                group = %id,
                spacing = ?self.spacing,
                "Spacing collapses the lattice, copies will overlap"
            );
        }

        let unit = self.unit_transform();
        let seeds: TransformSet = self
            .group
            .all_reps()
            .iter()
            .map(|rep| rep * &unit)
            .collect();

        debug!(
            group = %id,
            seeds = seeds.len(),
            u = ?lattice.u,
            v = ?lattice.v,
            "Expanding seeds across lattice"
        );

        let too_many = || WallpaperError::TooManyPlacements {
            seeds: seeds.len(),
            repeat_x: self.repeat_x,
            repeat_y: self.repeat_y,
        };
        let count = placement_count(seeds.len(), self.repeat_x, self.repeat_y)
            .ok_or_else(too_many)?;
        let mut transforms = TransformSet::new();
        transforms
            .try_reserve_exact(count)
            .map_err(|_| too_many())?;
        for seed in &seeds {
            for j in 0..self.repeat_y {
                let row = Transform3D::translation_2d(lattice.v * j as f64);
                for i in 0..self.repeat_x {
                    let column = Transform3D::translation_2d(lattice.u * i as f64);
                    transforms.push(row * column * *seed);
                }
            }
        }

        normalize(&mut transforms)?;

        for t in &mut transforms {
            *t = t.with_scaled_translation(self.final_scale);
        }

        info!(group = %id, count = transforms.len(), "Wallpaper expanded");

        Ok(ExpansionResult {
            transforms,
            fundamental_domain,
            group: id,
        })
    }
}

/// `seeds · repeat_x · repeat_y`, or `None` on overflow.
pub(crate) const fn placement_count(seeds: usize, repeat_x: usize, repeat_y: usize) -> Option<usize> {
    match seeds.checked_mul(repeat_x) {
        Some(row) => row.checked_mul(repeat_y),
        None => None,
    }
}

/// Rewrites a placement list relative to its first entry.
///
/// Every entry `i ≥ 1` becomes `first⁻¹ * entry`, then the first entry is
/// set to exactly the identity. An empty list is left untouched.
///
/// # Errors
///
/// Returns an error if the first entry is not invertible; the list is
/// unchanged in that case.
pub fn normalize(transforms: &mut [Transform3D]) -> WallpaperResult<()> {
    let Some((first, rest)) = transforms.split_first_mut() else {
        return Ok(());
    };

    let inverse = first.inverse()?;
    for t in rest {
        *t = inverse * *t;
    }
    *first = Transform3D::identity();
    Ok(())
}

/// Builds the group described by `params` and expands it.
///
/// # Errors
///
/// Returns an error if `params` is invalid, the group cannot be built, or
/// normalization hits a singular first placement.
///
/// # Example
///
/// ```
/// use symmetry_wallpaper::{expand_wallpaper, WallpaperGroupId, WallpaperParams};
///
/// let params = WallpaperParams::preset(WallpaperGroupId::P6m).with_repeats(2, 2);
/// let result = expand_wallpaper(&params).unwrap();
/// assert_eq!(result.len(), 12 * 4);
/// ```
pub fn expand_wallpaper(params: &WallpaperParams) -> WallpaperResult<ExpansionResult> {
    WallpaperExpander::from_params(params)?.expand()
}
