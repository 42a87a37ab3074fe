//! Planar lattice groups: fundamental domain, lattice basis and coset
//! representatives for each of the 17 wallpaper groups.
//!
//! Every group is built by one pure function from the nominal tile size
//! and its shape parameters. The domain is placed near the middle of the
//! tile, and the coset representatives are rotations about domain
//! vertices or centres and reflections across domain edges. Groups with a
//! larger point group chain their representatives multiplicatively from a
//! few generators.

use nalgebra::{Point2, Vector2};
use symmetry_transform::{Transform3D, TransformSet};
use tracing::debug;

use crate::domain::{self, FundamentalDomain, SQRT_3};
use crate::error::{WallpaperError, WallpaperResult};
use crate::group_id::WallpaperGroupId;
use crate::lattice::LatticeBasis;

/// A wallpaper group instance: its fundamental domain, translation lattice
/// and non-identity coset representatives.
///
/// # Example
///
/// ```
/// use nalgebra::Vector2;
/// use symmetry_wallpaper::{PlanarLatticeGroup, WallpaperGroupId};
///
/// let group = PlanarLatticeGroup::new(
///     WallpaperGroupId::P4m,
///     Vector2::new(1.0, 1.0),
///     [4.0, 0.0, 0.0, 0.0],
/// ).unwrap();
/// assert_eq!(group.coset_reps().len(), 7);
/// assert_eq!(group.domain().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PlanarLatticeGroup {
    id: WallpaperGroupId,
    domain: FundamentalDomain,
    basis: LatticeBasis,
    coset_reps: TransformSet,
}

impl PlanarLatticeGroup {
    /// Builds the group `id` for a nominal tile size and shape parameters.
    ///
    /// Only the first [`WallpaperGroupId::degrees_of_freedom`] entries of
    /// `params` are read; see [`WallpaperGroupId::parameter_names`].
    ///
    /// # Errors
    ///
    /// - [`WallpaperError::InvalidParameter`] if the tile size or a read
    ///   parameter is not finite, or a length parameter is zero
    /// - [`WallpaperError::DegenerateLattice`] if the `p1`/`p2` vectors are
    ///   parallel or zero
    pub fn new(
        id: WallpaperGroupId,
        tile_size: Vector2<f64>,
        params: [f64; 4],
    ) -> WallpaperResult<Self> {
        validate_shape(id, tile_size, &params)?;

        let [a, b, c, d] = params;
        let group = match id {
            WallpaperGroupId::P1 => p1(tile_size, Vector2::new(a, b), Vector2::new(c, d)),
            WallpaperGroupId::P2 => p2(tile_size, Vector2::new(a, b), Vector2::new(c, d)),
            WallpaperGroupId::P3 => p3(tile_size, a),
            WallpaperGroupId::P4 => p4(tile_size, a),
            WallpaperGroupId::P6 => p6(tile_size, a),
            WallpaperGroupId::Pm => pm(tile_size, a, b),
            WallpaperGroupId::Pg => pg(tile_size, a, b),
            WallpaperGroupId::Cm => cm(tile_size, a, b),
            WallpaperGroupId::Pmm => pmm(tile_size, a, b),
            WallpaperGroupId::Pmg => pmg(tile_size, a, b),
            WallpaperGroupId::Pgg => pgg(tile_size, a, b),
            WallpaperGroupId::Cmm => cmm(tile_size, a, b),
            WallpaperGroupId::P3m1 => p3m1(tile_size, a),
            WallpaperGroupId::P31m => p31m(tile_size, a),
            WallpaperGroupId::P4m => p4m(tile_size, a),
            WallpaperGroupId::P4g => p4g(tile_size, a),
            WallpaperGroupId::P6m => p6m(tile_size, a),
        }?;

        debug!(
            group = %id,
            coset_reps = group.coset_reps.len(),
            u = ?group.basis.u,
            v = ?group.basis.v,
            domain_area = group.domain.area(),
            "Built planar lattice group"
        );

        Ok(group)
    }

    /// Which group this is.
    #[must_use]
    pub const fn id(&self) -> WallpaperGroupId {
        self.id
    }

    /// The fundamental domain.
    #[must_use]
    pub const fn domain(&self) -> &FundamentalDomain {
        &self.domain
    }

    /// The translation lattice basis.
    #[must_use]
    pub const fn basis(&self) -> &LatticeBasis {
        &self.basis
    }

    /// Non-identity coset representatives, in construction order.
    #[must_use]
    pub fn coset_reps(&self) -> &[Transform3D] {
        &self.coset_reps
    }

    /// Coset representatives with the identity prepended.
    #[must_use]
    pub fn all_reps(&self) -> TransformSet {
        std::iter::once(Transform3D::identity())
            .chain(self.coset_reps.iter().copied())
            .collect()
    }

    /// Number of cosets, identity included.
    #[must_use]
    pub fn order(&self) -> usize {
        self.coset_reps.len() + 1
    }
}

fn validate_shape(
    id: WallpaperGroupId,
    tile_size: Vector2<f64>,
    params: &[f64; 4],
) -> WallpaperResult<()> {
    for (name, value) in [("tile_x", tile_size.x), ("tile_y", tile_size.y)] {
        if !value.is_finite() {
            return Err(WallpaperError::InvalidParameter { name, value });
        }
    }

    // Lattice components of p1/p2 may be zero; the basis check covers them
    let lengths = !matches!(id, WallpaperGroupId::P1 | WallpaperGroupId::P2);
    for (&name, &value) in id.parameter_names().iter().zip(params) {
        if !value.is_finite() || (lengths && value.abs() < f64::EPSILON) {
            return Err(WallpaperError::InvalidParameter { name, value });
        }
    }
    Ok(())
}

// =============================================================================
// Building blocks
// =============================================================================

fn assemble(
    id: WallpaperGroupId,
    points: &[Point2<f64>],
    center: Point2<f64>,
    basis: LatticeBasis,
    coset_reps: TransformSet,
) -> PlanarLatticeGroup {
    PlanarLatticeGroup {
        id,
        domain: FundamentalDomain::new(points.to_vec(), center),
        basis,
        coset_reps,
    }
}

fn rotate(degrees: f64, pivot: Point2<f64>) -> Transform3D {
    Transform3D::rotation_z_about(degrees, pivot)
}

fn reflect(a: Point2<f64>, b: Point2<f64>) -> WallpaperResult<Transform3D> {
    Transform3D::reflection_2d(a, b).map_err(WallpaperError::from)
}

/// Rotations by `step, 2·step, ..` about `pivot`, `count` of them.
fn rotations(step: f64, count: u32, pivot: Point2<f64>) -> TransformSet {
    (1..=count)
        .map(|k| rotate(step * f64::from(k), pivot))
        .collect()
}

fn tile_center(tile_size: Vector2<f64>) -> Vector2<f64> {
    tile_size / 2.0
}

/// `U = (3h/4, h√3/4)`, `V = (3h/4, -h√3/4)`.
fn hexagonal_basis(hex_size: f64) -> WallpaperResult<LatticeBasis> {
    let along = 3.0 * hex_size / 4.0;
    let across = hex_size * SQRT_3 / 4.0;
    LatticeBasis::from_transposed(Vector2::new(along, along), Vector2::new(across, -across))
}

fn square_basis(size: f64) -> WallpaperResult<LatticeBasis> {
    LatticeBasis::new(Vector2::new(size, 0.0), Vector2::new(0.0, size))
}

fn rectangular_basis(width: f64, height: f64) -> WallpaperResult<LatticeBasis> {
    LatticeBasis::new(Vector2::new(width, 0.0), Vector2::new(0.0, height))
}

// =============================================================================
// Oblique
// =============================================================================

fn p1(tile: Vector2<f64>, d1: Vector2<f64>, d2: Vector2<f64>) -> WallpaperResult<PlanarLatticeGroup> {
    let basis = LatticeBasis::new(d1, d2)?;
    let offset = tile_center(tile) - (d1 + d2) / 2.0;
    let points = domain::parallelogram(d1, d2, offset);
    let center = Point2::from((d1 + d2) / 2.0 + offset);

    Ok(assemble(WallpaperGroupId::P1, &points, center, basis, Vec::new()))
}

fn p2(tile: Vector2<f64>, d1: Vector2<f64>, d2: Vector2<f64>) -> WallpaperResult<PlanarLatticeGroup> {
    let basis = LatticeBasis::new(d1, d2 * 2.0)?;
    let offset = tile_center(tile) - (d1 + d2) / 2.0;
    let points = domain::parallelogram(d1, d2, offset);
    let center = Point2::from(d1 / 2.0 + offset);

    let reps = vec![rotate(180.0, center)];
    Ok(assemble(WallpaperGroupId::P2, &points, center, basis, reps))
}

// =============================================================================
// Rotation-only
// =============================================================================

fn p3(tile: Vector2<f64>, hex_size: f64) -> WallpaperResult<PlanarLatticeGroup> {
    let offset = tile_center(tile);
    let points = domain::rhombus(hex_size, offset);
    let center = Point2::from(offset);

    let reps = rotations(120.0, 2, center);
    Ok(assemble(WallpaperGroupId::P3, &points, center, hexagonal_basis(hex_size)?, reps))
}

fn p4(tile: Vector2<f64>, square_size: f64) -> WallpaperResult<PlanarLatticeGroup> {
    let offset = tile_center(tile);
    let points = domain::half_parallelogram(
        Vector2::new(square_size, 0.0),
        Vector2::new(0.0, square_size),
        offset,
    );
    let center = Point2::from(offset);

    let reps = rotations(90.0, 3, center);
    Ok(assemble(WallpaperGroupId::P4, &points, center, square_basis(square_size)?, reps))
}

fn p6(tile: Vector2<f64>, hex_size: f64) -> WallpaperResult<PlanarLatticeGroup> {
    let offset = tile_center(tile);
    let points = domain::kite(hex_size, offset);
    let center = Point2::from(offset);

    let reps = rotations(60.0, 5, center);
    Ok(assemble(WallpaperGroupId::P6, &points, center, hexagonal_basis(hex_size)?, reps))
}

// =============================================================================
// Rectangular and centred rectangular
// =============================================================================

fn pm(tile: Vector2<f64>, width: f64, height: f64) -> WallpaperResult<PlanarLatticeGroup> {
    let offset = tile_center(tile) - Vector2::new(width / 4.0, height / 2.0);
    let points = domain::rectangle(width / 2.0, height, offset);
    let center = Point2::from(tile_center(tile));

    let reps = vec![reflect(points[0], points[3])?];
    let basis = rectangular_basis(width, height)?;
    Ok(assemble(WallpaperGroupId::Pm, &points, center, basis, reps))
}

fn pg(tile: Vector2<f64>, width: f64, height: f64) -> WallpaperResult<PlanarLatticeGroup> {
    let offset = tile_center(tile) - Vector2::new(width, height) / 2.0;
    let points = domain::rectangle(width, height, offset);
    let center = Point2::from(tile_center(tile));

    // Glide: mirror in the vertical mid-line, then slide one domain height
    let mid_x = width / 2.0 + offset.x;
    let mirror = reflect(
        Point2::new(mid_x, offset.y),
        Point2::new(mid_x, height + offset.y),
    )?;
    let glide = Transform3D::translation(0.0, height, 0.0) * mirror;

    let basis = rectangular_basis(width, 2.0 * height)?;
    Ok(assemble(WallpaperGroupId::Pg, &points, center, basis, vec![glide]))
}

fn cm(tile: Vector2<f64>, width: f64, height: f64) -> WallpaperResult<PlanarLatticeGroup> {
    let offset = tile_center(tile) - Vector2::new(width, height) / 2.0;
    let points = domain::rectangle(width, height, offset);
    let center = Point2::from(tile_center(tile));

    let reps = vec![reflect(points[0], points[3])?];
    let basis = LatticeBasis::new(Vector2::new(width, height), Vector2::new(width, -height))?;
    Ok(assemble(WallpaperGroupId::Cm, &points, center, basis, reps))
}

fn pmm(tile: Vector2<f64>, width: f64, height: f64) -> WallpaperResult<PlanarLatticeGroup> {
    let offset = tile_center(tile) - Vector2::new(width, height) / 4.0;
    let points = domain::rectangle(width / 2.0, height / 2.0, offset);
    let center = Point2::from(tile_center(tile));

    let reps = vec![
        reflect(points[0], points[1])?,
        reflect(points[0], points[3])?,
        rotate(180.0, Point2::from(offset)),
    ];
    let basis = rectangular_basis(width, height)?;
    Ok(assemble(WallpaperGroupId::Pmm, &points, center, basis, reps))
}

/// Half-turn about the midpoint of the domain's bottom edge.
fn bottom_half_turn(width: f64, offset: Vector2<f64>) -> Transform3D {
    rotate(180.0, Point2::new(width / 2.0 + offset.x, offset.y))
}

fn pmg(tile: Vector2<f64>, width: f64, height: f64) -> WallpaperResult<PlanarLatticeGroup> {
    let offset = tile_center(tile) - Vector2::new(width, height) / 2.0;
    let points = domain::rectangle(width, height, offset);
    let center = Point2::from(tile_center(tile));

    let mirror = reflect(points[1], points[2])?;
    let half_turn = bottom_half_turn(width, offset);
    let reps = vec![mirror, half_turn, mirror * half_turn];

    let basis = rectangular_basis(2.0 * width, 2.0 * height)?;
    Ok(assemble(WallpaperGroupId::Pmg, &points, center, basis, reps))
}

fn pgg(tile: Vector2<f64>, width: f64, height: f64) -> WallpaperResult<PlanarLatticeGroup> {
    let offset = tile_center(tile) - Vector2::new(width, height) / 2.0;
    let points = domain::rectangle(width, height, offset);
    let center = Point2::from(tile_center(tile));

    let glide = Transform3D::translation(0.0, height, 0.0) * reflect(points[1], points[2])?;
    let half_turn = bottom_half_turn(width, offset);
    let reps = vec![glide, half_turn, glide * half_turn];

    let basis = rectangular_basis(2.0 * width, 2.0 * height)?;
    Ok(assemble(WallpaperGroupId::Pgg, &points, center, basis, reps))
}

fn cmm(tile: Vector2<f64>, width: f64, height: f64) -> WallpaperResult<PlanarLatticeGroup> {
    let offset = tile_center(tile) - Vector2::new(width, height) / 2.0;
    let points = domain::rectangle(width, height, offset);
    let center = Point2::from(tile_center(tile));

    let mirror = reflect(points[1], points[2])?;
    let half_turn = bottom_half_turn(width, offset);
    let reps = vec![mirror, half_turn, half_turn * mirror];

    let basis = LatticeBasis::new(
        Vector2::new(width, 2.0 * height),
        Vector2::new(width, -2.0 * height),
    )?;
    Ok(assemble(WallpaperGroupId::Cmm, &points, center, basis, reps))
}

// =============================================================================
// Hexagonal and square with mirrors
// =============================================================================

fn p3m1(tile: Vector2<f64>, hex_size: f64) -> WallpaperResult<PlanarLatticeGroup> {
    let offset = tile_center(tile);
    let points = domain::equilateral_triangle(hex_size, offset);
    let center = Point2::from(offset);

    let turns = rotations(120.0, 2, center);
    let mirror = reflect(points[2], points[0])?;
    let mut reps = turns.clone();
    reps.push(mirror);
    reps.extend(turns.iter().map(|r| r * &mirror));

    Ok(assemble(WallpaperGroupId::P3m1, &points, center, hexagonal_basis(hex_size)?, reps))
}

fn p31m(tile: Vector2<f64>, base_size: f64) -> WallpaperResult<PlanarLatticeGroup> {
    let offset = Vector2::new(tile.x / 2.0 - base_size / 2.0, tile.y / 2.0);
    let points = domain::isosceles_triangle(base_size, offset);
    let center = Point2::new(
        3.0 * base_size / 4.0 + offset.x,
        base_size * SQRT_3 / 4.0 + offset.y,
    );

    let turns = rotations(120.0, 2, points[2]);
    let mirror = reflect(points[1], center)?;
    let mut reps = turns.clone();
    reps.push(mirror);
    reps.extend(turns.iter().map(|r| &mirror * r));

    let basis = LatticeBasis::new(
        Vector2::new(base_size, 0.0),
        Vector2::new(base_size / 2.0, base_size * SQRT_3 / 2.0),
    )?;
    Ok(assemble(WallpaperGroupId::P31m, &points, center, basis, reps))
}

fn p4m(tile: Vector2<f64>, square_size: f64) -> WallpaperResult<PlanarLatticeGroup> {
    let offset = tile_center(tile);
    let points = domain::half_triangle(
        Vector2::new(square_size, 0.0),
        Vector2::new(0.0, square_size),
        offset,
    );
    let center = Point2::from(offset);

    let turns = rotations(90.0, 3, center);
    let mirror = reflect(points[1], points[2])?;
    let mut reps = turns.clone();
    reps.push(mirror);
    reps.extend(turns.iter().map(|r| r * &mirror));

    Ok(assemble(WallpaperGroupId::P4m, &points, center, square_basis(square_size)?, reps))
}

fn p4g(tile: Vector2<f64>, square_size: f64) -> WallpaperResult<PlanarLatticeGroup> {
    let offset = tile_center(tile) - Vector2::repeat(square_size / 2.0);
    let points = domain::rectangle(square_size, square_size, offset);
    let center = Point2::from(offset);

    let turns = rotations(90.0, 3, center);
    let mirror = reflect(points[2], points[3])?;
    let mut reps = turns.clone();
    reps.push(mirror);
    reps.extend(turns.iter().map(|r| &mirror * r));

    let span = 2.0 * square_size;
    let basis = LatticeBasis::new(Vector2::new(span, span), Vector2::new(span, -span))?;
    Ok(assemble(WallpaperGroupId::P4g, &points, center, basis, reps))
}

fn p6m(tile: Vector2<f64>, hex_size: f64) -> WallpaperResult<PlanarLatticeGroup> {
    let offset = tile_center(tile);
    let points = domain::hex_right_triangle(hex_size, offset);
    let center = Point2::from(offset);

    let turns = rotations(60.0, 5, center);
    let mirror = reflect(points[0], points[2])?;
    let mut reps = turns.clone();
    reps.push(mirror);
    reps.extend(turns.iter().map(|r| r * &mirror));

    Ok(assemble(WallpaperGroupId::P6m, &points, center, hexagonal_basis(hex_size)?, reps))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Matrix3;

    fn unit_tile() -> Vector2<f64> {
        Vector2::new(1.0, 1.0)
    }

    fn sample_params(id: WallpaperGroupId) -> [f64; 4] {
        match id.degrees_of_freedom() {
            4 => [2.0, 0.0, 0.8, 2.0],
            2 => [1.5, 1.2, 0.0, 0.0],
            _ => [3.0, 0.0, 0.0, 0.0],
        }
    }

    fn build(id: WallpaperGroupId) -> PlanarLatticeGroup {
        match PlanarLatticeGroup::new(id, unit_tile(), sample_params(id)) {
            Ok(group) => group,
            Err(err) => panic!("{id}: {err}"),
        }
    }

    fn contains_matrix(set: &[Matrix3<f64>], m: &Matrix3<f64>) -> bool {
        set.iter()
            .any(|s| s.iter().zip(m.iter()).all(|(a, b)| (a - b).abs() < 1e-9))
    }

    #[test]
    fn coset_counts_match_point_group_order() {
        for id in WallpaperGroupId::ALL {
            let group = build(id);
            assert_eq!(group.coset_reps().len(), id.point_group_order() - 1, "{id}");
            assert_eq!(group.order(), id.point_group_order());
            assert_eq!(group.id(), id);
        }
    }

    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn domain_tiles_one_lattice_cell() {
        for id in WallpaperGroupId::ALL {
            let group = build(id);
            let tiled = group.domain().area() * id.point_group_order() as f64;
            assert_relative_eq!(tiled, group.basis().determinant().abs(), epsilon = 1e-9);
        }
    }

    #[test]
    fn linear_parts_are_closed() {
        for id in WallpaperGroupId::ALL {
            let linear: Vec<Matrix3<f64>> = build(id)
                .all_reps()
                .iter()
                .map(Transform3D::linear_part)
                .collect();
            for a in &linear {
                for b in &linear {
                    assert!(contains_matrix(&linear, &(a * b)), "{id} is not closed");
                }
            }
        }
    }

    #[test]
    fn orientation_reversing_reps() {
        for id in WallpaperGroupId::ALL {
            let group = build(id);
            let reversing = group
                .all_reps()
                .iter()
                .filter(|t| t.linear_part().determinant() < 0.0)
                .count();
            let expected = if id.has_reflections() {
                id.point_group_order() / 2
            } else {
                0
            };
            assert_eq!(reversing, expected, "{id}");
        }
    }

    #[test]
    fn reps_are_planar_isometries() {
        for id in WallpaperGroupId::ALL {
            for rep in build(id).coset_reps() {
                assert!(rep.is_isometry(1e-9), "{id}");
                assert!(rep.is_affine());
                // z stays untouched
                assert_relative_eq!(rep.matrix()[(2, 2)], 1.0, epsilon = 1e-12);
                assert_relative_eq!(rep.translation_part().z, 0.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn p1_layout() {
        let group = build(WallpaperGroupId::P1);
        assert!(group.coset_reps().is_empty());
        assert_eq!(group.basis().u, Vector2::new(2.0, 0.0));
        assert_eq!(group.basis().v, Vector2::new(0.8, 2.0));

        // Parallelogram centred in the tile
        let center = group.domain().center();
        assert_relative_eq!(center.x, 0.5, epsilon = 1e-12);
        assert_relative_eq!(center.y, 0.5, epsilon = 1e-12);
        assert_relative_eq!(group.domain().centroid().x, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn p2_half_turn_about_edge_midpoint() {
        let group = build(WallpaperGroupId::P2);
        let center = group.domain().center();
        let first = group.domain().points()[0];
        let second = group.domain().points()[1];
        assert_relative_eq!(center.x, (first.x + second.x) / 2.0, epsilon = 1e-12);
        assert_relative_eq!(center.y, (first.y + second.y) / 2.0, epsilon = 1e-12);

        let turned = group.coset_reps()[0].transform_point_2d(first);
        assert_relative_eq!(turned.x, second.x, epsilon = 1e-12);
        assert_relative_eq!(turned.y, second.y, epsilon = 1e-12);
        assert_eq!(group.basis().v, Vector2::new(1.6, 4.0));
    }

    #[test]
    fn pmm_mirrors_fix_their_edges() {
        let group = build(WallpaperGroupId::Pmm);
        let pts = group.domain().points();
        for (rep, edge) in group.coset_reps()[..2].iter().zip([(0, 1), (0, 3)]) {
            for idx in [edge.0, edge.1] {
                let image = rep.transform_point_2d(pts[idx]);
                assert_relative_eq!(image.x, pts[idx].x, epsilon = 1e-12);
                assert_relative_eq!(image.y, pts[idx].y, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn pg_glide_has_no_fixed_points() {
        let group = build(WallpaperGroupId::Pg);
        let glide = group.coset_reps()[0];
        let sample = group.domain().centroid();
        let once = glide.transform_point_2d(sample);
        let twice = glide.transform_point_2d(once);

        // Applying a glide twice is a pure translation by 2·height = V
        assert_relative_eq!(twice.x, sample.x, epsilon = 1e-12);
        assert_relative_eq!(twice.y - sample.y, group.basis().v.y, epsilon = 1e-12);
        assert!((once - sample).norm() > 1e-6);
    }

    #[test]
    fn p31m_rotation_pivot_is_apex() {
        let group = build(WallpaperGroupId::P31m);
        let apex = group.domain().points()[2];
        for rep in &group.coset_reps()[..2] {
            let image = rep.transform_point_2d(apex);
            assert_relative_eq!(image.x, apex.x, epsilon = 1e-12);
            assert_relative_eq!(image.y, apex.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn hexagonal_groups_share_basis() {
        let p3 = build(WallpaperGroupId::P3);
        let p6m = build(WallpaperGroupId::P6m);
        assert_eq!(p3.basis(), p6m.basis());
        assert_relative_eq!(p3.basis().u.norm(), p3.basis().v.norm(), epsilon = 1e-12);
        assert_relative_eq!(p3.basis().u.angle(&p3.basis().v).to_degrees(), 60.0, epsilon = 1e-9);
    }

    #[test]
    fn all_reps_starts_with_identity() {
        let group = build(WallpaperGroupId::Cmm);
        let all = group.all_reps();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0], Transform3D::identity());
        assert_eq!(&all[1..], group.coset_reps());
    }

    #[test]
    fn zero_length_rejected() {
        let err = PlanarLatticeGroup::new(WallpaperGroupId::Pmm, unit_tile(), [0.0, 1.0, 0.0, 0.0]);
        assert_eq!(
            err,
            Err(WallpaperError::InvalidParameter {
                name: "width",
                value: 0.0
            })
        );
    }

    #[test]
    fn unused_parameters_are_ignored() {
        let a = PlanarLatticeGroup::new(WallpaperGroupId::P6, unit_tile(), [4.0, 0.0, 0.0, 0.0]);
        let b = PlanarLatticeGroup::new(WallpaperGroupId::P6, unit_tile(), [4.0, f64::NAN, 9.0, -1.0]);
        assert_eq!(a, b);
    }

    #[test]
    fn negative_length_is_accepted() {
        let group = PlanarLatticeGroup::new(WallpaperGroupId::P4, unit_tile(), [-2.0, 0.0, 0.0, 0.0]);
        assert!(group.is_ok());
    }

    #[test]
    fn non_finite_tile_rejected() {
        let err = PlanarLatticeGroup::new(
            WallpaperGroupId::P3,
            Vector2::new(f64::INFINITY, 1.0),
            [3.0, 0.0, 0.0, 0.0],
        );
        assert!(matches!(
            err,
            Err(WallpaperError::InvalidParameter { name: "tile_x", .. })
        ));
    }

    #[test]
    fn parallel_lattice_rejected() {
        let err = PlanarLatticeGroup::new(WallpaperGroupId::P1, unit_tile(), [1.0, 1.0, 2.0, 2.0]);
        assert!(matches!(err, Err(WallpaperError::DegenerateLattice { .. })));
    }
}
