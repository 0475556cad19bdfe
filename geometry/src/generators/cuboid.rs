use crate::mesh::{MeshData, Vertex};
use crate::profiling::profile_function;

use super::subdivide::{clamp_levels, subdivide_n};

/// Generate an axis-aligned box centered at the origin.
///
/// Each face is an independent quad (4 vertices, 2 triangles) carrying its
/// own normal, tangent and texture coordinates: 24 vertices and 36 indices
/// before subdivision. The mesh is then refined `subdivisions` times
/// (clamped to [`MAX_SUBDIVISIONS`](super::MAX_SUBDIVISIONS)).
///
/// # Arguments
///
/// * `width` - Extent along X
/// * `height` - Extent along Y
/// * `depth` - Extent along Z
/// * `subdivisions` - Number of midpoint subdivision passes
pub fn generate_box(width: f32, height: f32, depth: f32, subdivisions: u32) -> MeshData {
    profile_function!();

    let w = 0.5 * width;
    let h = 0.5 * height;
    let d = 0.5 * depth;

    let v = Vertex::new;
    #[rustfmt::skip]
    let vertices = vec![
        // Front (-Z)
        v([-w, -h, -d], [0.0, 0.0, -1.0], [1.0, 0.0, 0.0], [0.0, 1.0]),
        v([-w,  h, -d], [0.0, 0.0, -1.0], [1.0, 0.0, 0.0], [0.0, 0.0]),
        v([ w,  h, -d], [0.0, 0.0, -1.0], [1.0, 0.0, 0.0], [1.0, 0.0]),
        v([ w, -h, -d], [0.0, 0.0, -1.0], [1.0, 0.0, 0.0], [1.0, 1.0]),
        // Back (+Z)
        v([-w, -h,  d], [0.0, 0.0, 1.0], [-1.0, 0.0, 0.0], [1.0, 1.0]),
        v([ w, -h,  d], [0.0, 0.0, 1.0], [-1.0, 0.0, 0.0], [0.0, 1.0]),
        v([ w,  h,  d], [0.0, 0.0, 1.0], [-1.0, 0.0, 0.0], [0.0, 0.0]),
        v([-w,  h,  d], [0.0, 0.0, 1.0], [-1.0, 0.0, 0.0], [1.0, 0.0]),
        // Top (+Y)
        v([-w,  h, -d], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0]),
        v([-w,  h,  d], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0]),
        v([ w,  h,  d], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [1.0, 0.0]),
        v([ w,  h, -d], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0]),
        // Bottom (-Y)
        v([-w, -h, -d], [0.0, -1.0, 0.0], [-1.0, 0.0, 0.0], [1.0, 1.0]),
        v([ w, -h, -d], [0.0, -1.0, 0.0], [-1.0, 0.0, 0.0], [0.0, 1.0]),
        v([ w, -h,  d], [0.0, -1.0, 0.0], [-1.0, 0.0, 0.0], [0.0, 0.0]),
        v([-w, -h,  d], [0.0, -1.0, 0.0], [-1.0, 0.0, 0.0], [1.0, 0.0]),
        // Left (-X)
        v([-w, -h,  d], [-1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0]),
        v([-w,  h,  d], [-1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 0.0]),
        v([-w,  h, -d], [-1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [1.0, 0.0]),
        v([-w, -h, -d], [-1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [1.0, 1.0]),
        // Right (+X)
        v([ w, -h, -d], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0]),
        v([ w,  h, -d], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0]),
        v([ w,  h,  d], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0]),
        v([ w, -h,  d], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 1.0]),
    ];

    let indices = (0..6u32)
        .flat_map(|face| {
            let b = face * 4;
            [b, b + 1, b + 2, b, b + 2, b + 3]
        })
        .collect();

    let mesh = MeshData::from_parts(vertices, indices).with_label("box");
    let mesh = subdivide_n(&mesh, clamp_levels(subdivisions));

    log::debug!(
        "Generated box: {} vertices, {} indices",
        mesh.vertex_count(),
        mesh.index_count()
    );
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_box() {
        let mesh = generate_box(1.0, 2.0, 3.0, 0);
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.index_count(), 36);
        assert_eq!(mesh.label(), Some("box"));
        assert!(mesh.indices().iter().all(|&i| i < 24));
    }

    #[test]
    fn test_box_faces_point_outward() {
        let mesh = generate_box(2.0, 2.0, 2.0, 0);
        let v = mesh.vertices();
        for [a, b, c] in mesh.triangles() {
            let pa = v[a as usize].position();
            let pb = v[b as usize].position();
            let pc = v[c as usize].position();
            let center = (pa + pb + pc) / 3.0;
            let normal = v[a as usize].normal();
            assert!(normal.dot(&center) > 0.0);
            assert!((pb - pa).cross(&(pc - pa)).dot(&normal) > 0.0);
        }
    }

    #[test]
    fn test_box_extents() {
        let mesh = generate_box(2.0, 4.0, 6.0, 0);
        for vertex in mesh.vertices() {
            let [x, y, z] = vertex.position;
            assert_eq!(x.abs(), 1.0);
            assert_eq!(y.abs(), 2.0);
            assert_eq!(z.abs(), 3.0);
        }
    }

    #[test]
    fn test_box_tangents_orthogonal_to_normals() {
        let mesh = generate_box(1.0, 1.0, 1.0, 0);
        for vertex in mesh.vertices() {
            assert_eq!(vertex.normal().dot(&vertex.tangent()), 0.0);
        }
    }

    #[test]
    fn test_box_subdivision_is_clamped() {
        let clamped = generate_box(1.0, 1.0, 1.0, 7);
        assert_eq!(clamped.index_count(), 36 * 4usize.pow(6));
    }
}
