use std::f32::consts::{PI, TAU};

use crate::math::{Vec3, normalize_or_zero, spherical_tangent, spherical_uv};
use crate::mesh::{MeshData, Vertex};
use crate::profiling::profile_function;

/// Generate a UV sphere mesh centered at the origin.
///
/// The vertex list is the north pole, then `stack_count` rings of
/// `slice_count + 1` vertices at colatitudes `φ = i·π/stack_count`
/// (`i = 1..=stack_count`), then the south pole. The extra vertex per ring
/// duplicates the seam at `θ = 0 = 2π` with `u = 1`. The last ring sits at
/// `φ = π` and carries the bottom row of texture coordinates.
///
/// Triangles: a fan from the north pole to the first ring, two triangles per
/// quad between consecutive rings, and a fan from the last ring to the south
/// pole.
///
/// # Arguments
///
/// * `radius` - Sphere radius
/// * `slice_count` - Number of longitudinal segments (at least 3)
/// * `stack_count` - Number of latitudinal rings (at least 2)
pub fn generate_sphere(radius: f32, slice_count: u32, stack_count: u32) -> MeshData {
    profile_function!();

    let ring_vertex_count = slice_count + 1;
    let mut mesh = MeshData::with_capacity(
        2 + (stack_count * ring_vertex_count) as usize,
        6 * (stack_count * slice_count) as usize,
    );

    mesh.push_vertex(Vertex::new(
        [0.0, radius, 0.0],
        [0.0, 1.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 0.0],
    ));

    for i in 1..=stack_count {
        let phi = i as f32 * PI / stack_count as f32;
        let (sin_phi, cos_phi) = phi.sin_cos();

        for j in 0..=slice_count {
            let theta = j as f32 * TAU / slice_count as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();

            let position = Vec3::new(sin_phi * cos_theta, cos_phi, sin_phi * sin_theta) * radius;
            mesh.push_vertex(Vertex::new(
                position.into(),
                normalize_or_zero(position).into(),
                spherical_tangent(theta).into(),
                spherical_uv(theta, phi),
            ));
        }
    }

    let south_pole = mesh.push_vertex(Vertex::new(
        [0.0, -radius, 0.0],
        [0.0, -1.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0],
    ));

    if stack_count > 0 {
        // North cap: rings start right after the pole vertex.
        for j in 1..=slice_count {
            mesh.push_triangle(0, j + 1, j);
        }

        let base = 1;
        for ring in 0..stack_count - 1 {
            let current = base + ring * ring_vertex_count;
            let next = current + ring_vertex_count;
            for j in 0..slice_count {
                mesh.push_triangle(current + j, current + j + 1, next + j);
                mesh.push_triangle(next + j, current + j + 1, next + j + 1);
            }
        }

        let last_ring = south_pole - ring_vertex_count;
        for j in 0..slice_count {
            mesh.push_triangle(south_pole, last_ring + j, last_ring + j + 1);
        }
    }

    log::debug!(
        "Generated sphere: {} vertices, {} indices",
        mesh.vertex_count(),
        mesh.index_count()
    );
    mesh.with_label("sphere")
}
