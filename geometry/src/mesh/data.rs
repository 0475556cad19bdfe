//! Generated mesh data.
//!
//! This module provides:
//! - [`IndexFormat`] - Index data format (u16 or u32)
//! - [`MeshData`] - Vertex list plus triangle list produced by the generators

use std::sync::{Arc, OnceLock};

use crate::error::MeshError;

use super::layout::VertexLayout;
use super::vertex::Vertex;

/// Index format for indexed drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IndexFormat {
    /// 16-bit unsigned integers (max 65536 vertices).
    Uint16,
    /// 32-bit unsigned integers.
    #[default]
    Uint32,
}

impl IndexFormat {
    /// Get the size in bytes of each index.
    pub fn size(&self) -> usize {
        match self {
            Self::Uint16 => 2,
            Self::Uint32 => 4,
        }
    }
}

/// Number of distinct vertices a 16-bit index can address.
const U16_ADDRESSABLE: usize = u16::MAX as usize + 1;

/// A triangle mesh: vertices plus a flat triangle index list (stride 3).
///
/// Every generator returns a freshly built `MeshData` and keeps no reference
/// to it. Generated meshes uphold two invariants, checked by
/// [`validate`](Self::validate): the index count is a multiple of three and
/// every index is smaller than the vertex count.
///
/// A 16-bit copy of the indices is built the first time
/// [`indices_u16`](Self::indices_u16) is called and cached until the indices
/// change.
#[derive(Clone, Default)]
pub struct MeshData {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    indices_u16: OnceLock<Vec<u16>>,
    label: Option<String>,
}

impl MeshData {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mesh from vertex and index lists.
    pub fn from_parts(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self {
            vertices,
            indices,
            indices_u16: OnceLock::new(),
            label: None,
        }
    }

    /// Create an empty mesh with room for the given number of vertices and indices.
    pub fn with_capacity(vertex_capacity: usize, index_capacity: usize) -> Self {
        Self::from_parts(
            Vec::with_capacity(vertex_capacity),
            Vec::with_capacity(index_capacity),
        )
    }

    /// Set a debug label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Append a vertex, returning its index.
    pub fn push_vertex(&mut self, vertex: Vertex) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(vertex);
        index
    }

    /// Append one triangle.
    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
        self.indices_u16.take();
    }

    /// Append all vertices and triangles of `other`, rebasing its indices.
    pub fn append(&mut self, other: &MeshData) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.indices.extend(other.indices.iter().map(|&i| base + i));
        self.indices_u16.take();
    }

    /// Get the vertices.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Get the 32-bit triangle indices.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Get the triangle indices narrowed to 16 bits.
    ///
    /// The narrowing is a plain truncation: the caller must make sure the
    /// mesh has at most 65536 vertices (see
    /// [`try_indices_u16`](Self::try_indices_u16) for a checked variant).
    pub fn indices_u16(&self) -> &[u16] {
        self.indices_u16
            .get_or_init(|| self.indices.iter().map(|&i| i as u16).collect())
    }

    /// Get the 16-bit indices, failing if the vertex count does not fit.
    pub fn try_indices_u16(&self) -> Result<&[u16], MeshError> {
        if self.vertices.len() > U16_ADDRESSABLE {
            return Err(MeshError::IndexOverflow {
                vertex_count: self.vertices.len(),
            });
        }
        Ok(self.indices_u16())
    }

    /// The smallest index format able to address every vertex.
    pub fn preferred_index_format(&self) -> IndexFormat {
        if self.vertices.len() <= U16_ADDRESSABLE {
            IndexFormat::Uint16
        } else {
            IndexFormat::Uint32
        }
    }

    /// Take the vertex and index lists out of the mesh.
    pub fn into_parts(self) -> (Vec<Vertex>, Vec<u32>) {
        (self.vertices, self.indices)
    }

    /// Get the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of indices.
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Get the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if the mesh has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate over triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Get the debug label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Layout of the bytes returned by [`vertex_bytes`](Self::vertex_bytes).
    pub fn vertex_layout(&self) -> Arc<VertexLayout> {
        VertexLayout::position_normal_tangent_uv()
    }

    /// Raw interleaved vertex data, ready for a vertex buffer upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw 32-bit index data, ready for an index buffer upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Raw 16-bit index data (same precondition as [`indices_u16`](Self::indices_u16)).
    pub fn index_bytes_u16(&self) -> &[u8] {
        bytemuck::cast_slice(self.indices_u16())
    }

    /// Check the triangle list invariants.
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.indices.len() % 3 != 0 {
            return Err(MeshError::IndexCountNotTriangles {
                index_count: self.indices.len(),
            });
        }
        let vertex_count = self.vertices.len();
        if let Some((position, &index)) = self
            .indices
            .iter()
            .enumerate()
            .find(|&(_, &i)| i as usize >= vertex_count)
        {
            return Err(MeshError::IndexOutOfBounds {
                position,
                index,
                vertex_count,
            });
        }
        Ok(())
    }
}

impl std::fmt::Debug for MeshData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeshData")
            .field("label", &self.label)
            .field("vertex_count", &self.vertices.len())
            .field("index_count", &self.indices.len())
            .field("indices_u16_cached", &self.indices_u16.get().is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> MeshData {
        let mut mesh = MeshData::new();
        let a = mesh.push_vertex(Vertex::default());
        let b = mesh.push_vertex(Vertex::default());
        let c = mesh.push_vertex(Vertex::default());
        mesh.push_triangle(a, b, c);
        mesh
    }

    #[test]
    fn test_index_format_size() {
        assert_eq!(IndexFormat::Uint16.size(), 2);
        assert_eq!(IndexFormat::Uint32.size(), 4);
    }

    #[test]
    fn test_push_and_counts() {
        let mesh = triangle().with_label("tri");
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.index_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.label(), Some("tri"));
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_indices_u16_is_cached() {
        let mesh = triangle();
        let first = mesh.indices_u16().as_ptr();
        let second = mesh.indices_u16().as_ptr();
        assert_eq!(first, second);
        assert_eq!(mesh.indices_u16(), &[0, 1, 2]);
    }

    #[test]
    fn test_indices_u16_invalidated_on_push() {
        let mut mesh = triangle();
        assert_eq!(mesh.indices_u16().len(), 3);
        mesh.push_triangle(2, 1, 0);
        assert_eq!(mesh.indices_u16(), &[0, 1, 2, 2, 1, 0]);
    }

    #[test]
    fn test_indices_u16_truncates_unchecked() {
        let vertices = vec![Vertex::default(); U16_ADDRESSABLE + 1];
        let mesh = MeshData::from_parts(vertices, vec![0, 1, 65536]);
        assert_eq!(mesh.indices_u16(), &[0, 1, 0]);
        assert_eq!(
            mesh.try_indices_u16(),
            Err(MeshError::IndexOverflow {
                vertex_count: U16_ADDRESSABLE + 1
            })
        );
        assert_eq!(mesh.preferred_index_format(), IndexFormat::Uint32);
    }

    #[test]
    fn test_preferred_index_format_small_mesh() {
        assert_eq!(triangle().preferred_index_format(), IndexFormat::Uint16);
    }

    #[test]
    fn test_append_rebases_indices() {
        let mut mesh = triangle();
        mesh.append(&triangle());
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.indices(), &[0, 1, 2, 3, 4, 5]);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_byte_views() {
        let mesh = triangle();
        assert_eq!(mesh.vertex_bytes().len(), 3 * Vertex::SIZE);
        assert_eq!(mesh.index_bytes().len(), 3 * IndexFormat::Uint32.size());
        assert_eq!(mesh.index_bytes_u16().len(), 3 * IndexFormat::Uint16.size());
        assert_eq!(mesh.vertex_layout().stride as usize, Vertex::SIZE);
    }

    #[test]
    fn test_validate_reports_bad_indices() {
        let mesh = MeshData::from_parts(vec![Vertex::default(); 3], vec![0, 1]);
        assert_eq!(
            mesh.validate(),
            Err(MeshError::IndexCountNotTriangles { index_count: 2 })
        );

        let mesh = MeshData::from_parts(vec![Vertex::default(); 3], vec![0, 1, 3]);
        assert_eq!(
            mesh.validate(),
            Err(MeshError::IndexOutOfBounds {
                position: 2,
                index: 3,
                vertex_count: 3
            })
        );
    }

    #[test]
    fn test_mesh_data_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshData>();
    }

    #[test]
    fn test_triangles_iterator() {
        let mesh = MeshData::from_parts(vec![Vertex::default(); 4], vec![0, 1, 2, 2, 3, 0]);
        let tris: Vec<_> = mesh.triangles().collect();
        assert_eq!(tris, vec![[0, 1, 2], [2, 3, 0]]);
    }
}
