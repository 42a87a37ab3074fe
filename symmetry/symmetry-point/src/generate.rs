//! Point-group transform generation.
//!
//! Every family is built by concatenating orbits of a few generators
//! (a rotation sequence, axis mirrors, a half-turn) rather than by closing
//! a group table. Polyhedral families orient one copy per face/vertex flag
//! of a reference solid.

// Orders are small; usize -> f64 is exact in practice
#![allow(clippy::cast_precision_loss)]

use nalgebra::Vector3;
use symmetry_transform::{Transform3D, TransformSet};
use tracing::{debug, info};

use crate::error::PointGroupResult;
use crate::family::PointGroupFamily;
use crate::params::PointGroupParams;
use crate::solids::{PlatonicSolid, centroid};

/// Generate the transforms of a finite point group.
///
/// Each transform first moves the object `radius` units back along the
/// local forward (`+Z`) axis, then applies the group element. The first
/// element is always the 0° rotation.
///
/// # Arguments
///
/// * `params` - Family, rotational order and placement radius
///
/// # Errors
///
/// Returns an error if `params` fails [`PointGroupParams::validate`].
///
/// # Example
///
/// ```
/// use symmetry_point::{generate_point_group, PointGroupFamily, PointGroupParams};
///
/// let params = PointGroupParams::new(PointGroupFamily::Cnv).with_order(5);
/// let transforms = generate_point_group(&params).unwrap();
/// assert_eq!(transforms.len(), 10);
/// ```
pub fn generate_point_group(params: &PointGroupParams) -> PointGroupResult<TransformSet> {
    params.validate()?;

    let PointGroupParams { family, n, radius } = *params;
    let step = 360.0 / n as f64;

    debug!(family = %family, n, radius, step, "Generating point group");

    let transforms = match family {
        PointGroupFamily::Cn => rotations(n, step, radius),
        PointGroupFamily::Cnv => {
            let base = rotations(n, step, radius);
            let mirrored = reflect_all(&base, &Transform3D::mirror_x());
            concat(base, mirrored)
        }
        PointGroupFamily::Cnh => {
            let base = rotations(n, step, radius);
            let mirrored = reflect_all(&base, &Transform3D::mirror_y());
            concat(base, mirrored)
        }
        PointGroupFamily::Sn => {
            let base = rotations(n, 2.0 * step, radius);
            let turned = rotate_all(&base, Vector3::y(), step);
            let improper = reflect_all(&turned, &Transform3D::mirror_y());
            concat(base, improper)
        }
        PointGroupFamily::Dn => {
            let base = rotations(n, step, radius);
            let flipped = rotate_all(&base, Vector3::z(), 180.0);
            concat(base, flipped)
        }
        PointGroupFamily::Dnh => {
            let base = rotations(n, step, radius);
            let vertical = reflect_all(&base, &Transform3D::mirror_x());
            let combined = concat(base, vertical);
            let horizontal = reflect_all(&combined, &Transform3D::mirror_y());
            concat(combined, horizontal)
        }
        PointGroupFamily::Dnd => {
            let base = rotations(n, step, radius);
            let vertical = reflect_all(&base, &Transform3D::mirror_x());
            let combined = concat(base, vertical);
            let horizontal = reflect_all(&combined, &Transform3D::mirror_y());
            let diagonal = rotate_all(&horizontal, Vector3::y(), step / 2.0);
            concat(combined, diagonal)
        }
        PointGroupFamily::T => polyhedral(PlatonicSolid::Tetrahedron, radius, false),
        PointGroupFamily::Th => polyhedral(PlatonicSolid::Cube, radius, false),
        PointGroupFamily::Td => polyhedral(PlatonicSolid::Tetrahedron, radius, true),
        PointGroupFamily::O => polyhedral(PlatonicSolid::Octahedron, radius, false),
        PointGroupFamily::Oh => polyhedral(PlatonicSolid::Octahedron, radius, true),
        PointGroupFamily::I => polyhedral(PlatonicSolid::Icosahedron, radius, false),
        PointGroupFamily::Ih => polyhedral(PlatonicSolid::Icosahedron, radius, true),
    };

    info!(
        family = %family,
        count = transforms.len(),
        "Point group generated"
    );

    Ok(transforms)
}

/// `n` copies spaced `step` degrees apart about the up axis, each pushed
/// `radius` units back along the forward axis first.
fn rotations(n: usize, step: f64, radius: f64) -> TransformSet {
    let placement = placement(radius);
    (0..n)
        .map(|i| Transform3D::rotation_degrees(Vector3::y(), step * i as f64) * placement)
        .collect()
}

fn placement(radius: f64) -> Transform3D {
    Transform3D::from_translation(-Vector3::z() * radius)
}

fn rotate_all(transforms: &[Transform3D], axis: Vector3<f64>, degrees: f64) -> TransformSet {
    let rotation = Transform3D::rotation_degrees(axis, degrees);
    transforms.iter().map(|m| rotation * *m).collect()
}

fn reflect_all(transforms: &[Transform3D], mirror: &Transform3D) -> TransformSet {
    transforms.iter().map(|m| mirror * m).collect()
}

fn concat(mut head: TransformSet, tail: TransformSet) -> TransformSet {
    head.extend(tail);
    head
}

/// One copy per face/vertex flag of the solid, oriented to look from the
/// face centre towards the vertex with the centre direction as up.
///
/// Every copy uses the same fixed `radius` offset regardless of the
/// vertex's position on the solid.
fn polyhedral(solid: PlatonicSolid, radius: f64, mirrored: bool) -> TransformSet {
    let placement = placement(radius);
    let faces = solid.faces(1.0);

    let flags: TransformSet = faces
        .iter()
        .flat_map(|face| {
            let center = centroid(face);
            face.iter()
                .map(move |vertex| Transform3D::look_rotation(vertex - center, center) * placement)
        })
        .collect();

    debug!(solid = ?solid, flags = flags.len(), mirrored, "Oriented polyhedral flags");

    if mirrored {
        let reflected = reflect_all(&flags, &Transform3D::mirror_x());
        concat(flags, reflected)
    } else {
        flags
    }
}
