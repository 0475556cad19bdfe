//! Midpoint subdivision.
//!
//! Each pass splits every triangle into four by inserting a vertex at the
//! midpoint of each edge:
//!
//! ```text
//!        v1
//!        *
//!       / \
//!      /   \
//!  m0 *-----* m1
//!    / \   / \
//!   /   \ /   \
//!  *-----*-----*
//! v0    m2     v2
//! ```
//!
//! Vertices are not shared between triangles: every input triangle emits its
//! own six vertices `[v0, v1, v2, m0, m1, m2]`, so a pass produces
//! `6 * triangle_count` vertices and `4 * triangle_count` triangles.

use crate::math::normalize_or_zero;
use crate::mesh::{MeshData, Vertex};
use crate::profiling::profile_function;

/// Upper bound applied by the generators to requested subdivision levels.
pub const MAX_SUBDIVISIONS: u32 = 6;

/// Local triangle pattern over `[v0, v1, v2, m0, m1, m2]`.
const SPLIT_PATTERN: [u32; 12] = [0, 3, 5, 3, 4, 5, 5, 4, 2, 3, 1, 4];

/// Interpolate halfway between two vertices.
///
/// Position and texture coordinate are averaged. Normal and tangent are
/// averaged and renormalized, since the mean of two unit vectors is shorter
/// than unit length.
pub fn midpoint(a: &Vertex, b: &Vertex) -> Vertex {
    let position = (a.position() + b.position()) * 0.5;
    let normal = normalize_or_zero((a.normal() + b.normal()) * 0.5);
    let tangent = normalize_or_zero((a.tangent() + b.tangent()) * 0.5);
    let uv = (a.uv() + b.uv()) * 0.5;
    Vertex::from_vectors(position, normal, tangent, uv)
}

/// Split every triangle of `mesh` into four.
pub fn subdivide(mesh: &MeshData) -> MeshData {
    profile_function!();

    let triangle_count = mesh.triangle_count();
    let mut out = MeshData::with_capacity(triangle_count * 6, triangle_count * 12);
    let vertices = mesh.vertices();

    for [i0, i1, i2] in mesh.triangles() {
        let v0 = vertices[i0 as usize];
        let v1 = vertices[i1 as usize];
        let v2 = vertices[i2 as usize];

        let base = out.push_vertex(v0);
        out.push_vertex(v1);
        out.push_vertex(v2);
        out.push_vertex(midpoint(&v0, &v1));
        out.push_vertex(midpoint(&v1, &v2));
        out.push_vertex(midpoint(&v0, &v2));

        for tri in SPLIT_PATTERN.chunks_exact(3) {
            out.push_triangle(base + tri[0], base + tri[1], base + tri[2]);
        }
    }

    match mesh.label() {
        Some(label) => out.with_label(label),
        None => out,
    }
}

/// Apply [`subdivide`] `levels` times.
///
/// No clamping is applied here; each pass multiplies the triangle count by
/// four.
pub fn subdivide_n(mesh: &MeshData, levels: u32) -> MeshData {
    let mut current = mesh.clone();
    for _ in 0..levels {
        current = subdivide(&current);
    }
    current
}

/// Clamp a requested subdivision level to [`MAX_SUBDIVISIONS`].
pub(crate) fn clamp_levels(requested: u32) -> u32 {
    if requested > MAX_SUBDIVISIONS {
        log::warn!(
            "Subdivision level {} clamped to {}",
            requested,
            MAX_SUBDIVISIONS
        );
    }
    requested.min(MAX_SUBDIVISIONS)
}
