//! Property-based tests for wallpaper groups and expansion.
//!
//! Run with: cargo test -p symmetry-wallpaper -- proptest

#![allow(clippy::unwrap_used)]
#![allow(clippy::cast_precision_loss)]

use nalgebra::Vector2;
use proptest::prelude::*;
use symmetry_transform::Transform3D;
use symmetry_wallpaper::{
    PlanarLatticeGroup, WallpaperExpander, WallpaperGroupId, WallpaperParams, expand_wallpaper,
};

// =============================================================================
// Strategies
// =============================================================================

fn arb_group() -> impl Strategy<Value = WallpaperGroupId> {
    prop::sample::select(WallpaperGroupId::ALL.to_vec())
}

/// Positive lengths; the oblique groups get a well-conditioned lattice.
fn arb_shape(id: WallpaperGroupId) -> BoxedStrategy<[f64; 4]> {
    match id {
        WallpaperGroupId::P1 | WallpaperGroupId::P2 => (
            0.5..3.0f64,
            -1.0..1.0f64,
            -1.0..1.0f64,
            0.5..3.0f64,
        )
            .prop_map(|(a, b, c, d)| [a, b, c, d])
            .prop_filter("lattice must not be near-parallel", |[a, b, c, d]| {
                (a * d - b * c).abs() > 0.1
            })
            .boxed(),
        _ => (0.2..5.0f64, 0.2..5.0f64)
            .prop_map(|(a, b)| [a, b, 0.0, 0.0])
            .boxed(),
    }
}

fn arb_group_and_shape() -> impl Strategy<Value = (WallpaperGroupId, [f64; 4])> {
    arb_group().prop_flat_map(|id| (Just(id), arb_shape(id)))
}

fn arb_vector2(range: std::ops::Range<f64>) -> impl Strategy<Value = Vector2<f64>> {
    prop::array::uniform2(range).prop_map(|[x, y]| Vector2::new(x, y))
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn coset_count_matches_order(
        (id, shape) in arb_group_and_shape(),
        tile in arb_vector2(-5.0..5.0),
    ) {
        let group = PlanarLatticeGroup::new(id, tile, shape).unwrap();
        prop_assert_eq!(group.coset_reps().len() + 1, id.point_group_order());
    }

    #[test]
    fn domain_area_times_order_is_cell_area(
        (id, shape) in arb_group_and_shape(),
        tile in arb_vector2(-5.0..5.0),
    ) {
        let group = PlanarLatticeGroup::new(id, tile, shape).unwrap();
        let tiled = group.domain().area() * id.point_group_order() as f64;
        let cell = group.basis().determinant().abs();
        prop_assert!((tiled - cell).abs() <= 1e-9 * cell.max(1.0));
    }

    #[test]
    fn reps_are_isometries(
        (id, shape) in arb_group_and_shape(),
        tile in arb_vector2(-5.0..5.0),
    ) {
        let group = PlanarLatticeGroup::new(id, tile, shape).unwrap();
        for rep in group.coset_reps() {
            prop_assert!(rep.is_isometry(1e-9));
        }
    }

    #[test]
    fn expansion_is_identity_first(
        (id, shape) in arb_group_and_shape(),
        repeat_x in 1usize..4,
        repeat_y in 1usize..4,
        offset in arb_vector2(-3.0..3.0),
        unit_scale in 0.25..4.0f64,
        spacing in arb_vector2(0.5..2.0),
        final_scale in -2.0..2.0f64,
    ) {
        let params = WallpaperParams::new(id)
            .with_shape(shape)
            .with_repeats(repeat_x, repeat_y)
            .with_unit_offset(offset)
            .with_unit_scale(unit_scale)
            .with_spacing(spacing)
            .with_final_scale(final_scale);
        let result = expand_wallpaper(&params).unwrap();

        prop_assert_eq!(Some(result.len()), params.expected_len());
        prop_assert_eq!(result.transforms[0], Transform3D::identity());
        for t in &result {
            prop_assert!(t.is_affine());
        }
    }

    #[test]
    fn translations_scale_with_final_scale(
        (id, shape) in arb_group_and_shape(),
        final_scale in 0.1..3.0f64,
    ) {
        let group = PlanarLatticeGroup::new(id, Vector2::new(1.0, 1.0), shape).unwrap();
        let expander = WallpaperExpander::new(group).with_repeats(2, 2);
        let base = expander.expand().unwrap();
        let scaled = expander.with_final_scale(final_scale).expand().unwrap();

        for (a, b) in base.iter().zip(scaled.iter()) {
            let expected = a.translation_part() * final_scale;
            prop_assert!((b.translation_part() - expected).norm() < 1e-9);
            prop_assert_eq!(a.linear_part(), b.linear_part());
        }
    }

    #[test]
    fn expansion_is_deterministic(id in arb_group(), repeats in 0usize..4) {
        let params = WallpaperParams::preset(id).with_repeats(repeats, repeats);
        prop_assert_eq!(expand_wallpaper(&params), expand_wallpaper(&params));
    }
}
