//! Platonic reference solids.
//!
//! Each solid is centred on the origin and returned as a list of faces,
//! every face an ordered list of its vertices. Side lengths default to 1.

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One polygonal face of a solid.
pub type Face = Vec<Vector3<f64>>;

/// The five Platonic solids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PlatonicSolid {
    /// 4 triangular faces.
    Tetrahedron,
    /// 6 square faces.
    Cube,
    /// 8 triangular faces.
    Octahedron,
    /// 12 pentagonal faces.
    Dodecahedron,
    /// 20 triangular faces.
    Icosahedron,
}

impl PlatonicSolid {
    /// Faces of this solid scaled to the given edge length.
    #[must_use]
    pub fn faces(&self, side_length: f64) -> Vec<Face> {
        match self {
            Self::Tetrahedron => tetrahedron(side_length),
            Self::Cube => cube(side_length),
            Self::Octahedron => octahedron(side_length),
            Self::Dodecahedron => dodecahedron(side_length),
            Self::Icosahedron => icosahedron(side_length),
        }
    }

    /// Number of faces.
    #[must_use]
    pub const fn face_count(&self) -> usize {
        match self {
            Self::Tetrahedron => 4,
            Self::Cube => 6,
            Self::Octahedron => 8,
            Self::Dodecahedron => 12,
            Self::Icosahedron => 20,
        }
    }
}

/// Mean of a face's vertices.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn centroid(face: &[Vector3<f64>]) -> Vector3<f64> {
    if face.is_empty() {
        return Vector3::zeros();
    }
    face.iter().sum::<Vector3<f64>>() / face.len() as f64
}

/// Regular tetrahedron inscribed in alternate corners of a cube.
#[must_use]
pub fn tetrahedron(side_length: f64) -> Vec<Face> {
    let x = side_length / (2.0 * 2.0_f64.sqrt());
    let y = -x;

    let a = Vector3::new(x, x, x);
    let b = Vector3::new(y, y, x);
    let c = Vector3::new(y, x, y);
    let d = Vector3::new(x, y, y);

    vec![vec![a, b, c], vec![a, b, d], vec![a, c, d], vec![b, c, d]]
}

/// Axis-aligned cube.
#[must_use]
pub fn cube(side_length: f64) -> Vec<Face> {
    let x = 0.5 * side_length;
    let y = -x;

    let a = Vector3::new(y, y, y);
    let b = Vector3::new(x, y, y);
    let c = Vector3::new(y, x, y);
    let d = Vector3::new(y, y, x);
    let e = Vector3::new(x, x, y);
    let f = Vector3::new(x, y, x);
    let g = Vector3::new(y, x, x);
    let h = Vector3::new(x, x, x);

    vec![
        vec![a, b, e, c],
        vec![a, b, f, d],
        vec![a, c, g, d],
        vec![h, f, d, g],
        vec![h, e, b, f],
        vec![h, e, c, g],
    ]
}

/// Octahedron with vertices on the coordinate axes.
#[must_use]
pub fn octahedron(side_length: f64) -> Vec<Face> {
    let x = side_length / 2.0_f64.sqrt();
    let y = -x;

    let a = Vector3::new(x, 0.0, 0.0);
    let b = Vector3::new(0.0, x, 0.0);
    let c = Vector3::new(0.0, 0.0, x);
    let d = Vector3::new(y, 0.0, 0.0);
    let e = Vector3::new(0.0, y, 0.0);
    let f = Vector3::new(0.0, 0.0, y);

    vec![
        vec![b, a, c],
        vec![b, a, f],
        vec![b, c, d],
        vec![b, d, f],
        vec![e, f, d],
        vec![e, f, a],
        vec![e, c, a],
        vec![e, c, d],
    ]
}

/// Icosahedron built from three orthogonal golden rectangles.
#[must_use]
#[allow(clippy::many_single_char_names)]
pub fn icosahedron(side_length: f64) -> Vec<Face> {
    let half = side_length / 2.0;
    let x = half * f64::midpoint(1.0, 5.0_f64.sqrt());
    let y = -x;
    let z = half;
    let w = -half;

    let a = Vector3::new(x, z, 0.0);
    let b = Vector3::new(y, z, 0.0);
    let c = Vector3::new(x, w, 0.0);
    let d = Vector3::new(y, w, 0.0);
    let e = Vector3::new(z, 0.0, x);
    let f = Vector3::new(z, 0.0, y);
    let g = Vector3::new(w, 0.0, x);
    let h = Vector3::new(w, 0.0, y);
    let i = Vector3::new(0.0, x, z);
    let j = Vector3::new(0.0, y, z);
    let k = Vector3::new(0.0, x, w);
    let l = Vector3::new(0.0, y, w);

    vec![
        vec![a, i, e],
        vec![a, f, k],
        vec![c, e, j],
        vec![c, l, f],
        vec![b, g, i],
        vec![b, k, h],
        vec![d, j, g],
        vec![d, h, l],
        vec![a, k, i],
        vec![b, i, k],
        vec![c, j, l],
        vec![d, l, j],
        vec![e, c, a],
        vec![f, a, c],
        vec![g, b, d],
        vec![h, d, b],
        vec![i, g, e],
        vec![j, e, g],
        vec![k, f, h],
        vec![l, h, f],
    ]
}

/// Dodecahedron: cube corners plus three orthogonal golden rectangles.
#[must_use]
#[allow(clippy::many_single_char_names)]
pub fn dodecahedron(side_length: f64) -> Vec<Face> {
    let root5 = 5.0_f64.sqrt();
    let phi = f64::midpoint(1.0, root5);
    let phibar = (1.0 - root5) / 2.0;

    // Cube corner coordinate and golden-rectangle coordinates
    let x = side_length / (root5 - 1.0);
    let y = x * phi;
    let z = x * phibar;
    let s = -x;
    let t = -y;
    let w = -z;

    let a = Vector3::new(x, x, x);
    let b = Vector3::new(x, x, s);
    let c = Vector3::new(x, s, x);
    let d = Vector3::new(x, s, s);
    let e = Vector3::new(s, x, x);
    let f = Vector3::new(s, x, s);
    let g = Vector3::new(s, s, x);
    let h = Vector3::new(s, s, s);
    let i = Vector3::new(w, y, 0.0);
    let j = Vector3::new(z, y, 0.0);
    let k = Vector3::new(w, t, 0.0);
    let l = Vector3::new(z, t, 0.0);
    let m = Vector3::new(y, 0.0, w);
    let n = Vector3::new(y, 0.0, z);
    let o = Vector3::new(t, 0.0, w);
    let p = Vector3::new(t, 0.0, z);
    let q = Vector3::new(0.0, w, y);
    let r = Vector3::new(0.0, z, y);
    let u = Vector3::new(0.0, w, t);
    let v = Vector3::new(0.0, z, t);

    vec![
        vec![b, i, a, m, n],
        vec![e, j, f, p, o],
        vec![c, k, d, n, m],
        vec![h, l, g, o, p],
        vec![c, m, a, q, r],
        vec![b, n, d, v, u],
        vec![e, o, g, r, q],
        vec![h, p, f, u, v],
        vec![e, q, a, i, j],
        vec![c, r, g, l, k],
        vec![b, u, f, j, i],
        vec![h, v, d, k, l],
    ]
}
