use std::f32::consts::TAU;

use crate::math::{Vec3, normalize_or_zero};
use crate::mesh::{MeshData, Vertex};
use crate::profiling::{profile_function, profile_scope};

/// Which end of the cylinder a cap closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CapSide {
    Top,
    Bottom,
}

/// Generate a cylinder (or truncated cone) aligned with the Y axis.
///
/// The side wall is `stack_count + 1` rings from `y = -height/2` to
/// `y = +height/2`, with the radius interpolated linearly from
/// `bottom_radius` to `top_radius`. Each ring has `slice_count + 1`
/// vertices, duplicating the seam vertex. Side normals account for the
/// slant of the wall. Flat caps are appended after the side wall, top first.
///
/// # Arguments
///
/// * `bottom_radius` - Radius at `y = -height/2`
/// * `top_radius` - Radius at `y = +height/2`
/// * `height` - Extent along Y
/// * `slice_count` - Number of segments around the axis
/// * `stack_count` - Number of segments along the axis
pub fn generate_cylinder(
    bottom_radius: f32,
    top_radius: f32,
    height: f32,
    slice_count: u32,
    stack_count: u32,
) -> MeshData {
    profile_function!();

    let ring_vertex_count = slice_count + 1;
    let ring_count = stack_count + 1;
    let mut mesh = MeshData::with_capacity(
        (ring_count * ring_vertex_count + 2 * (ring_vertex_count + 1)) as usize,
        6 * (stack_count * slice_count + slice_count) as usize,
    );

    {
        profile_scope!("side_wall");

        // Step divisors never drop below 1, so zero stacks or slices give a
        // flat ring instead of NaN positions.
        let stack_steps = stack_count.max(1) as f32;
        let slice_steps = slice_count.max(1) as f32;
        let stack_height = height / stack_steps;
        let radius_step = (top_radius - bottom_radius) / stack_steps;
        let d_theta = TAU / slice_steps;
        let d_radius = bottom_radius - top_radius;

        for i in 0..ring_count {
            let y = -0.5 * height + i as f32 * stack_height;
            let r = bottom_radius + i as f32 * radius_step;

            for j in 0..=slice_count {
                let (s, c) = (j as f32 * d_theta).sin_cos();

                let tangent = Vec3::new(-s, 0.0, c);
                let bitangent = Vec3::new(d_radius * c, -height, d_radius * s);
                let normal = normalize_or_zero(tangent.cross(&bitangent));

                mesh.push_vertex(Vertex::new(
                    [r * c, y, r * s],
                    normal.into(),
                    tangent.into(),
                    [j as f32 / slice_steps, 1.0 - i as f32 / stack_steps],
                ));
            }
        }

        for i in 0..stack_count {
            let current = i * ring_vertex_count;
            let next = current + ring_vertex_count;
            for j in 0..slice_count {
                mesh.push_triangle(current + j, next + j, next + j + 1);
                mesh.push_triangle(current + j, next + j + 1, current + j + 1);
            }
        }
    }

    mesh.append(&build_cap(CapSide::Top, top_radius, height, slice_count));
    mesh.append(&build_cap(CapSide::Bottom, bottom_radius, height, slice_count));

    log::debug!(
        "Generated cylinder: {} vertices, {} indices",
        mesh.vertex_count(),
        mesh.index_count()
    );
    mesh.with_label("cylinder")
}

/// Build a flat disk closing one end of a cylinder.
///
/// Ring vertices get a straight up (or down) normal regardless of the wall
/// slant. Their texture coordinates map the ring's local XZ position into a
/// square around (0.5, 0.5), scaled by `1 / height` so the cap's texel
/// density stays close to the side wall's. The fan around the center vertex
/// is wound so both caps face away from the cylinder.
fn build_cap(side: CapSide, radius: f32, height: f32, slice_count: u32) -> MeshData {
    profile_scope!("cap");

    let (y, normal) = match side {
        CapSide::Top => (0.5 * height, [0.0, 1.0, 0.0]),
        CapSide::Bottom => (-0.5 * height, [0.0, -1.0, 0.0]),
    };
    let tangent = [1.0, 0.0, 0.0];
    let d_theta = TAU / slice_count.max(1) as f32;

    let mut mesh = MeshData::with_capacity(slice_count as usize + 2, 3 * slice_count as usize);
    for i in 0..=slice_count {
        let (s, c) = (i as f32 * d_theta).sin_cos();
        let x = radius * c;
        let z = radius * s;
        let uv = [x / height + 0.5, z / height + 0.5];
        mesh.push_vertex(Vertex::new([x, y, z], normal, tangent, uv));
    }

    let center = mesh.push_vertex(Vertex::new([0.0, y, 0.0], normal, tangent, [0.5, 0.5]));

    for i in 0..slice_count {
        match side {
            CapSide::Top => mesh.push_triangle(center, i + 1, i),
            CapSide::Bottom => mesh.push_triangle(center, i, i + 1),
        }
    }
    mesh
}
