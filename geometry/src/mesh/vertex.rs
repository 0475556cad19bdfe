//! The vertex record produced by every generator.

use crate::math::{Vec2, Vec3};

/// A mesh vertex: position, normal, tangent and texture coordinate.
///
/// The record is `#[repr(C)]` and [`bytemuck::Pod`] so a vertex slice can be
/// copied into a GPU vertex buffer as-is (44 bytes per vertex, see
/// [`VertexLayout::position_normal_tangent_uv`](super::VertexLayout::position_normal_tangent_uv)).
///
/// Vertices have no identity beyond their attributes. Generators emit
/// duplicates on purpose at texture seams and along face boundaries.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Position in object space.
    pub position: [f32; 3],
    /// Unit surface normal.
    pub normal: [f32; 3],
    /// Unit tangent along the direction of increasing `u`.
    pub tangent: [f32; 3],
    /// Texture coordinate.
    pub uv: [f32; 2],
}

impl Vertex {
    /// Size of one vertex in bytes.
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// Create a vertex from its four attributes.
    pub fn new(position: [f32; 3], normal: [f32; 3], tangent: [f32; 3], uv: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            tangent,
            uv,
        }
    }

    /// Create a vertex from nalgebra vectors.
    pub fn from_vectors(position: Vec3, normal: Vec3, tangent: Vec3, uv: Vec2) -> Self {
        Self {
            position: position.into(),
            normal: normal.into(),
            tangent: tangent.into(),
            uv: uv.into(),
        }
    }

    /// Position as a nalgebra vector.
    pub fn position(&self) -> Vec3 {
        Vec3::from(self.position)
    }

    /// Normal as a nalgebra vector.
    pub fn normal(&self) -> Vec3 {
        Vec3::from(self.normal)
    }

    /// Tangent as a nalgebra vector.
    pub fn tangent(&self) -> Vec3 {
        Vec3::from(self.tangent)
    }

    /// Texture coordinate as a nalgebra vector.
    pub fn uv(&self) -> Vec2 {
        Vec2::from(self.uv)
    }
}
