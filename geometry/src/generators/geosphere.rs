use crate::math::{Vec3, colatitude, longitude, normalize_or_zero, spherical_tangent, spherical_uv};
use crate::mesh::{MeshData, Vertex};
use crate::profiling::{profile_function, profile_scope};

use super::subdivide::{clamp_levels, subdivide_n};

const ICO_X: f32 = 0.525_731;
const ICO_Z: f32 = 0.850_651;

/// Icosahedron vertex positions (approximately unit length).
#[rustfmt::skip]
const ICOSAHEDRON_POSITIONS: [[f32; 3]; 12] = [
    [-ICO_X, 0.0, ICO_Z], [ICO_X, 0.0, ICO_Z],
    [-ICO_X, 0.0, -ICO_Z], [ICO_X, 0.0, -ICO_Z],
    [0.0, ICO_Z, ICO_X], [0.0, ICO_Z, -ICO_X],
    [0.0, -ICO_Z, ICO_X], [0.0, -ICO_Z, -ICO_X],
    [ICO_Z, ICO_X, 0.0], [-ICO_Z, ICO_X, 0.0],
    [ICO_Z, -ICO_X, 0.0], [-ICO_Z, -ICO_X, 0.0],
];

/// Icosahedron faces.
#[rustfmt::skip]
const ICOSAHEDRON_FACES: [[u32; 3]; 20] = [
    [1, 4, 0], [4, 9, 0], [4, 5, 9], [8, 5, 4], [1, 8, 4],
    [1, 10, 8], [10, 3, 8], [8, 3, 5], [3, 2, 5], [3, 7, 2],
    [3, 10, 7], [10, 6, 7], [6, 11, 7], [6, 0, 11], [6, 1, 0],
    [10, 1, 6], [11, 0, 9], [2, 11, 9], [5, 2, 9], [11, 2, 7],
];

fn icosahedron() -> MeshData {
    let vertices = ICOSAHEDRON_POSITIONS
        .iter()
        .map(|&position| Vertex {
            position,
            ..Vertex::default()
        })
        .collect();
    let indices = ICOSAHEDRON_FACES.iter().flatten().copied().collect();
    MeshData::from_parts(vertices, indices)
}

/// Generate a geodesic sphere: a subdivided icosahedron projected onto a sphere.
///
/// Subdivision runs on the flat icosahedron faces (clamped to
/// [`MAX_SUBDIVISIONS`](super::MAX_SUBDIVISIONS) passes); only afterwards is
/// every vertex pushed out to `radius`. Texture coordinates come from the
/// spherical angles of the projected position, and the tangent is the
/// longitudinal direction, as for [`generate_sphere`](super::generate_sphere).
///
/// Triangles are distributed evenly over the surface, unlike a UV sphere
/// whose triangles bunch up at the poles.
pub fn generate_geosphere(radius: f32, subdivisions: u32) -> MeshData {
    profile_function!();

    let levels = clamp_levels(subdivisions);
    let (vertices, indices) = subdivide_n(&icosahedron(), levels).into_parts();

    let projected = {
        profile_scope!("project_to_sphere");
        vertices
            .iter()
            .map(|vertex| project_to_sphere(vertex.position(), radius))
            .collect()
    };

    let mesh = MeshData::from_parts(projected, indices).with_label("geosphere");
    log::debug!(
        "Generated geosphere ({} subdivisions): {} vertices, {} indices",
        levels,
        mesh.vertex_count(),
        mesh.index_count()
    );
    mesh
}

fn project_to_sphere(chord_position: Vec3, radius: f32) -> Vertex {
    let normal = normalize_or_zero(chord_position);
    let position = normal * radius;

    let theta = longitude(&position);
    let phi = colatitude(&position, radius);

    Vertex::new(
        position.into(),
        normal.into(),
        spherical_tangent(theta).into(),
        spherical_uv(theta, phi),
    )
}
