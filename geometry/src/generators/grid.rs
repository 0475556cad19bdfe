use crate::mesh::{MeshData, Vertex};
use crate::profiling::profile_function;

/// Generate a flat grid in the XZ plane, centered at the origin.
///
/// The grid has `rows × cols` vertices spanning `width` along X and `depth`
/// along Z. Row 0 lies at `z = +depth/2` and column 0 at `x = -width/2`.
/// Texture coordinates stretch over the whole grid once. Every cell is split
/// into two triangles along the same diagonal.
///
/// A grid needs at least 2 rows and 2 columns to contain any triangles.
/// Fewer still produce the vertices (with the missing axis collapsed to the
/// starting edge) but no triangles.
///
/// # Arguments
///
/// * `width` - Extent along X
/// * `depth` - Extent along Z
/// * `rows` - Number of vertex rows (along Z)
/// * `cols` - Number of vertex columns (along X)
pub fn generate_grid(width: f32, depth: f32, rows: u32, cols: u32) -> MeshData {
    profile_function!();

    let cell_rows = rows.saturating_sub(1);
    let cell_cols = cols.saturating_sub(1);
    let mut mesh = MeshData::with_capacity(
        (rows * cols) as usize,
        6 * (cell_rows * cell_cols) as usize,
    );

    let half_width = 0.5 * width;
    let half_depth = 0.5 * depth;

    // Step divisors never drop below 1; a single row or column would
    // otherwise divide by zero.
    let row_steps = cell_rows.max(1) as f32;
    let col_steps = cell_cols.max(1) as f32;
    let dx = width / col_steps;
    let dz = depth / row_steps;

    for i in 0..rows {
        let z = half_depth - i as f32 * dz;
        for j in 0..cols {
            let x = -half_width + j as f32 * dx;
            mesh.push_vertex(Vertex::new(
                [x, 0.0, z],
                [0.0, 1.0, 0.0],
                [1.0, 0.0, 0.0],
                [j as f32 / col_steps, i as f32 / row_steps],
            ));
        }
    }

    for i in 0..cell_rows {
        for j in 0..cell_cols {
            let current = i * cols + j;
            let below = current + cols;
            mesh.push_triangle(current, current + 1, below);
            mesh.push_triangle(below, current + 1, below + 1);
        }
    }

    log::debug!(
        "Generated grid: {} vertices, {} indices",
        mesh.vertex_count(),
        mesh.index_count()
    );
    mesh.with_label("grid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_minimal_grid() {
        let mesh = generate_grid(2.0, 2.0, 2, 2);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.index_count(), 6);
        assert_eq!(mesh.label(), Some("grid"));

        let positions: Vec<_> = mesh.vertices().iter().map(|v| v.position).collect();
        assert_eq!(
            positions,
            vec![
                [-1.0, 0.0, 1.0],
                [1.0, 0.0, 1.0],
                [-1.0, 0.0, -1.0],
                [1.0, 0.0, -1.0],
            ]
        );
        assert_eq!(mesh.indices(), &[0, 1, 2, 2, 1, 3]);
    }

    #[test]
    fn test_grid_counts() {
        let mesh = generate_grid(10.0, 5.0, 4, 6);
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.triangle_count(), 3 * 5 * 2);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_grid_uvs_stretch_over_grid() {
        let mesh = generate_grid(3.0, 3.0, 3, 5);
        let v = mesh.vertices();
        assert_eq!(v[0].uv, [0.0, 0.0]);
        assert_eq!(v[4].uv, [1.0, 0.0]);
        assert_eq!(v[10].uv, [0.0, 1.0]);
        assert_eq!(v[14].uv, [1.0, 1.0]);
        assert_eq!(v[7].uv, [0.5, 0.5]);
    }

    #[test]
    fn test_grid_faces_up() {
        let mesh = generate_grid(4.0, 4.0, 3, 3);
        let v = mesh.vertices();
        for [a, b, c] in mesh.triangles() {
            let pa = v[a as usize].position();
            let pb = v[b as usize].position();
            let pc = v[c as usize].position();
            assert!((pb - pa).cross(&(pc - pa)).y > 0.0);
        }
        for vertex in v {
            assert_eq!(vertex.normal, [0.0, 1.0, 0.0]);
            assert_eq!(vertex.tangent, [1.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn test_degenerate_grids_have_no_triangles() {
        let single_row = generate_grid(2.0, 2.0, 1, 4);
        assert_eq!(single_row.vertex_count(), 4);
        assert_eq!(single_row.index_count(), 0);
        assert!(
            single_row
                .vertices()
                .iter()
                .all(|v| v.position.iter().all(|c| c.is_finite()))
        );

        let empty = generate_grid(2.0, 2.0, 0, 0);
        assert!(empty.is_empty());
        assert_eq!(empty.index_count(), 0);
    }
}
