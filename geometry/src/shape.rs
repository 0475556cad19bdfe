//! Declarative shape descriptors.
//!
//! A [`ShapeDesc`] names a generator together with its parameters, so a scene
//! can list the meshes it needs as data and build them later. With the
//! `serde` feature the descriptors can be read from RON or JSON:
//!
//! ```text
//! [
//!     Box(width: 1.0, height: 1.0, depth: 1.0, subdivisions: 2),
//!     Sphere(radius: 0.5, slice_count: 32, stack_count: 16),
//! ]
//! ```

use crate::generators::{
    generate_box, generate_cylinder, generate_geosphere, generate_grid, generate_quad,
    generate_sphere,
};
use crate::mesh::MeshData;

/// Parameters for one of the procedural generators.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShapeDesc {
    Box {
        width: f32,
        height: f32,
        depth: f32,
        subdivisions: u32,
    },
    Sphere {
        radius: f32,
        slice_count: u32,
        stack_count: u32,
    },
    Geosphere {
        radius: f32,
        subdivisions: u32,
    },
    Cylinder {
        bottom_radius: f32,
        top_radius: f32,
        height: f32,
        slice_count: u32,
        stack_count: u32,
    },
    Grid {
        width: f32,
        depth: f32,
        rows: u32,
        cols: u32,
    },
    Quad {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        depth: f32,
    },
}

impl ShapeDesc {
    /// Unit cube without subdivision.
    pub const UNIT_BOX: Self = Self::Box {
        width: 1.0,
        height: 1.0,
        depth: 1.0,
        subdivisions: 0,
    };

    /// Quad covering the whole screen in normalized device coordinates.
    pub const FULLSCREEN_QUAD: Self = Self::Quad {
        x: -1.0,
        y: 1.0,
        width: 2.0,
        height: 2.0,
        depth: 0.0,
    };

    /// Label attached to meshes built from this descriptor.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Box { .. } => "box",
            Self::Sphere { .. } => "sphere",
            Self::Geosphere { .. } => "geosphere",
            Self::Cylinder { .. } => "cylinder",
            Self::Grid { .. } => "grid",
            Self::Quad { .. } => "quad",
        }
    }

    /// Run the matching generator.
    pub fn build(&self) -> MeshData {
        let mesh = match *self {
            Self::Box {
                width,
                height,
                depth,
                subdivisions,
            } => generate_box(width, height, depth, subdivisions),
            Self::Sphere {
                radius,
                slice_count,
                stack_count,
            } => generate_sphere(radius, slice_count, stack_count),
            Self::Geosphere {
                radius,
                subdivisions,
            } => generate_geosphere(radius, subdivisions),
            Self::Cylinder {
                bottom_radius,
                top_radius,
                height,
                slice_count,
                stack_count,
            } => generate_cylinder(bottom_radius, top_radius, height, slice_count, stack_count),
            Self::Grid {
                width,
                depth,
                rows,
                cols,
            } => generate_grid(width, depth, rows, cols),
            Self::Quad {
                x,
                y,
                width,
                height,
                depth,
            } => generate_quad(x, y, width, height, depth),
        };
        mesh.with_label(self.name())
    }
}
