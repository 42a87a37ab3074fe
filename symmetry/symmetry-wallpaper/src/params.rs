//! Wallpaper expansion parameters.

use nalgebra::Vector2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{WallpaperError, WallpaperResult};
use crate::expand::placement_count;
use crate::group_id::WallpaperGroupId;
use crate::planar::PlanarLatticeGroup;

/// Configuration for building and expanding a wallpaper group.
///
/// [`WallpaperParams::preset`] returns hand-tuned shape parameters and
/// offsets for each group that give a pleasing default layout for a unit
/// object; every field can then be overridden with the `with_*` builders.
///
/// # Examples
///
/// ```
/// use nalgebra::Vector2;
/// use symmetry_wallpaper::{WallpaperGroupId, WallpaperParams};
///
/// let params = WallpaperParams::preset(WallpaperGroupId::P4m)
///     .with_repeats(4, 4)
///     .with_spacing(Vector2::new(1.5, 1.5));
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WallpaperParams {
    /// Which wallpaper group to build.
    pub group: WallpaperGroupId,

    /// Copies along the first lattice vector. Zero yields no output.
    pub repeat_x: usize,

    /// Copies along the second lattice vector. Zero yields no output.
    pub repeat_y: usize,

    /// Nominal tile the fundamental domain is centred in.
    pub tile_size: Vector2<f64>,

    /// Group-specific shape parameters; see
    /// [`WallpaperGroupId::parameter_names`].
    pub shape: [f64; 4],

    /// Translation applied to the object before any group element.
    pub unit_offset: Vector2<f64>,

    /// Uniform scale applied to the object before the offset.
    pub unit_scale: f64,

    /// Component-wise scale of the lattice vectors.
    pub spacing: Vector2<f64>,

    /// Uniform scale of the finished layout.
    pub final_scale: f64,
}

impl Default for WallpaperParams {
    fn default() -> Self {
        Self::preset(WallpaperGroupId::default())
    }
}

impl WallpaperParams {
    /// Parameters for `group` with the default layout and a single repeat.
    #[must_use]
    pub fn new(group: WallpaperGroupId) -> Self {
        Self::preset(group)
    }

    /// Hand-tuned default layout for `group`.
    #[must_use]
    pub fn preset(group: WallpaperGroupId) -> Self {
        let base = Self {
            group,
            repeat_x: 1,
            repeat_y: 1,
            tile_size: Vector2::new(1.0, 1.0),
            shape: [0.0; 4],
            unit_offset: Vector2::zeros(),
            unit_scale: 1.0,
            spacing: Vector2::new(1.0, 1.0),
            final_scale: 1.0,
        };

        let (shape, offset) = match group {
            WallpaperGroupId::P1 => ([2.0, 0.0, 0.0, 2.0], [0.0, 0.0]),
            WallpaperGroupId::P2 => ([2.0, 0.0, 0.0, 2.0], [-2.5, 0.5]),
            WallpaperGroupId::P3 => ([3.0, 0.0, 0.0, 0.0], [-2.75, -1.8]),
            WallpaperGroupId::P4 => ([2.0, 0.0, 0.0, 0.0], [-2.5, -0.5]),
            WallpaperGroupId::P6 => ([4.0, 0.0, 0.0, 0.0], [-3.5, -2.232]),
            WallpaperGroupId::Pm | WallpaperGroupId::Pmm => ([2.0, 2.0, 0.0, 0.0], [-2.0, -1.0]),
            WallpaperGroupId::P3m1 => ([5.0, 0.0, 0.0, 0.0], [-4.25, -2.17]),
            WallpaperGroupId::P4m => ([4.0, 0.0, 0.0, 0.0], [-4.73, 4.0]),
            WallpaperGroupId::P6m => ([5.0, 0.0, 0.0, 0.0], [-4.02, -2.63]),
            WallpaperGroupId::Cm => ([1.0, 1.0, 0.0, 0.0], [-2.0, 0.0]),
            WallpaperGroupId::Pg => ([1.5, 1.5, 0.0, 0.0], [-1.5, 0.0]),
            WallpaperGroupId::Pmg | WallpaperGroupId::Pgg | WallpaperGroupId::Cmm => {
                ([1.5, 1.2, 0.0, 0.0], [0.0, 0.0])
            }
            WallpaperGroupId::P31m => ([3.0, 0.0, 0.0, 0.0], [-3.46, -1.41]),
            WallpaperGroupId::P4g => ([1.5, 0.0, 0.0, 0.0], [0.0, 0.0]),
        };
        let base = base
            .with_shape(shape)
            .with_unit_offset(Vector2::new(offset[0], offset[1]));

        match group {
            WallpaperGroupId::P3m1 => base.with_tile_size(Vector2::new(1.0, 0.0)),
            WallpaperGroupId::P4m => base
                .with_tile_size(Vector2::new(-3.26, -4.0))
                .with_spacing(Vector2::new(1.0, 2.0))
                .with_unit_scale(2.0),
            WallpaperGroupId::P6m => base.with_tile_size(Vector2::new(0.5, 1.0)),
            WallpaperGroupId::Cm => base.with_spacing(Vector2::new(2.0, 0.5)),
            _ => base,
        }
    }

    /// Sets the repeat counts along both lattice vectors.
    #[must_use]
    pub const fn with_repeats(mut self, repeat_x: usize, repeat_y: usize) -> Self {
        self.repeat_x = repeat_x;
        self.repeat_y = repeat_y;
        self
    }

    /// Sets the nominal tile size.
    #[must_use]
    pub const fn with_tile_size(mut self, tile_size: Vector2<f64>) -> Self {
        self.tile_size = tile_size;
        self
    }

    /// Sets the group-specific shape parameters.
    #[must_use]
    pub const fn with_shape(mut self, shape: [f64; 4]) -> Self {
        self.shape = shape;
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

    /// Sets the lattice spacing.
    #[must_use]
    pub const fn with_spacing(mut self, spacing: Vector2<f64>) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets the final layout scale.
    #[must_use]
    pub const fn with_final_scale(mut self, final_scale: f64) -> Self {
        self.final_scale = final_scale;
        self
    }

    /// Number of transforms these parameters expand to, or `None` if the
    /// count overflows `usize`.
    #[must_use]
    pub const fn expected_len(&self) -> Option<usize> {
        placement_count(self.group.point_group_order(), self.repeat_x, self.repeat_y)
    }

    /// Validates the placement fields.
    ///
    /// Shape parameters are checked when the group is built.
    ///
    /// # Errors
    ///
    /// Returns an error if an offset, scale or spacing is not finite, or if
    /// the repeat counts overflow the placement count.
    pub fn validate(&self) -> WallpaperResult<()> {
        if self.expected_len().is_none() {
            return Err(WallpaperError::TooManyPlacements {
                seeds: self.group.point_group_order(),
                repeat_x: self.repeat_x,
                repeat_y: self.repeat_y,
            });
        }
        for (name, value) in [
            ("unit_offset_x", self.unit_offset.x),
            ("unit_offset_y", self.unit_offset.y),
        ] {
            if !value.is_finite() {
                return Err(WallpaperError::InvalidParameter { name, value });
            }
        }
        if !self.spacing.x.is_finite() || !self.spacing.y.is_finite() {
            return Err(WallpaperError::InvalidSpacing {
                x: self.spacing.x,
                y: self.spacing.y,
            });
        }
        for scale in [self.unit_scale, self.final_scale] {
            if !scale.is_finite() {
                return Err(WallpaperError::InvalidScale(scale));
            }
        }
        Ok(())
    }

    /// Builds the planar lattice group described by these parameters.
    ///
    /// # Errors
    ///
    /// See [`PlanarLatticeGroup::new`].
    pub fn build_group(&self) -> WallpaperResult<PlanarLatticeGroup> {
        PlanarLatticeGroup::new(self.group, self.tile_size, self.shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_builds() {
        for id in WallpaperGroupId::ALL {
            let params = WallpaperParams::preset(id);
            assert_eq!(params.group, id);
            assert!(params.validate().is_ok(), "{id}");
            assert!(params.build_group().is_ok(), "{id}");
        }
    }

    #[test]
    fn preset_overrides() {
        let p4m = WallpaperParams::preset(WallpaperGroupId::P4m);
        assert_eq!(p4m.spacing, Vector2::new(1.0, 2.0));
        assert!((p4m.unit_scale - 2.0).abs() < f64::EPSILON);
        assert_eq!(p4m.unit_offset, Vector2::new(-4.73, 4.0));

        let p2 = WallpaperParams::preset(WallpaperGroupId::P2);
        assert_eq!(p2.shape, [2.0, 0.0, 0.0, 2.0]);
        assert_eq!(p2.tile_size, Vector2::new(1.0, 1.0));
    }

    #[test]
    fn default_is_p1() {
        let params = WallpaperParams::default();
        assert_eq!(params, WallpaperParams::new(WallpaperGroupId::P1));
        assert_eq!(params.expected_len(), Some(1));
    }

    #[test]
    fn builders_chain() {
        let params = WallpaperParams::new(WallpaperGroupId::Pgg)
            .with_repeats(3, 2)
            .with_final_scale(0.5);
        assert_eq!(params.expected_len(), Some(24));
        assert!((params.final_scale - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn overflowing_repeats_rejected() {
        let params = WallpaperParams::new(WallpaperGroupId::P6m).with_repeats(usize::MAX / 2, 3);
        assert_eq!(params.expected_len(), None);
        assert!(matches!(
            params.validate(),
            Err(WallpaperError::TooManyPlacements { seeds: 12, repeat_y: 3, .. })
        ));
    }

    #[test]
    fn non_finite_fields_rejected() {
        let base = WallpaperParams::default();
        assert!(matches!(
            base.with_spacing(Vector2::new(f64::NAN, 1.0)).validate(),
            Err(WallpaperError::InvalidSpacing { .. })
        ));
        assert!(matches!(
            base.with_final_scale(f64::INFINITY).validate(),
            Err(WallpaperError::InvalidScale(_))
        ));
        assert!(matches!(
            base.with_unit_offset(Vector2::new(0.0, f64::NAN)).validate(),
            Err(WallpaperError::InvalidParameter {
                name: "unit_offset_y",
                ..
            })
        ));
    }

    #[test]
    fn zero_scale_passes_validation() {
        // Collapsed scales are accepted here and surface during expansion
        let params = WallpaperParams::default().with_unit_scale(0.0);
        assert!(params.validate().is_ok());
    }
}
