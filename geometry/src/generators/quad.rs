use crate::mesh::{MeshData, Vertex};
use crate::profiling::profile_function;

/// Generate a single axis-aligned quad in the XY plane.
///
/// `(x, y)` is the top-left corner and the quad extends `width` to the right
/// and `height` downwards, at constant `depth`. With coordinates given in
/// normalized device space, `generate_quad(-1.0, 1.0, 2.0, 2.0, 0.0)` covers
/// the whole screen, which is what post-processing passes draw.
///
/// Texture coordinates follow image convention: `(0, 0)` at the top-left
/// corner, `v` growing downwards.
pub fn generate_quad(x: f32, y: f32, width: f32, height: f32, depth: f32) -> MeshData {
    profile_function!();

    let normal = [0.0, 0.0, -1.0];
    let tangent = [1.0, 0.0, 0.0];

    let vertices = vec![
        Vertex::new([x, y - height, depth], normal, tangent, [0.0, 1.0]),
        Vertex::new([x, y, depth], normal, tangent, [0.0, 0.0]),
        Vertex::new([x + width, y, depth], normal, tangent, [1.0, 0.0]),
        Vertex::new([x + width, y - height, depth], normal, tangent, [1.0, 1.0]),
    ];
    let indices = vec![0, 1, 2, 0, 2, 3];

    MeshData::from_parts(vertices, indices).with_label("quad")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_fullscreen_quad() {
        let mesh = generate_quad(-1.0, 1.0, 2.0, 2.0, 0.0);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.indices(), &[0, 1, 2, 0, 2, 3]);
        assert_eq!(mesh.label(), Some("quad"));

        let positions: Vec<_> = mesh.vertices().iter().map(|v| v.position).collect();
        assert_eq!(
            positions,
            vec![
                [-1.0, -1.0, 0.0],
                [-1.0, 1.0, 0.0],
                [1.0, 1.0, 0.0],
                [1.0, -1.0, 0.0],
            ]
        );
    }

    #[test]
    fn test_quad_uv_corners() {
        let mesh = generate_quad(0.0, 0.0, 1.0, 1.0, 0.5);
        let uvs: Vec<_> = mesh.vertices().iter().map(|v| v.uv).collect();
        assert_eq!(uvs, vec![[0.0, 1.0], [0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]);
        assert!(mesh.vertices().iter().all(|v| v.position[2] == 0.5));
    }

    #[test]
    fn test_quad_winding_matches_normal() {
        let mesh = generate_quad(-0.5, 0.5, 1.0, 1.0, 0.0);
        let v = mesh.vertices();
        for [a, b, c] in mesh.triangles() {
            let pa = v[a as usize].position();
            let pb = v[b as usize].position();
            let pc = v[c as usize].position();
            let face = (pb - pa).cross(&(pc - pa));
            assert!(face.dot(&v[a as usize].normal()) > 0.0);
        }
    }
}
