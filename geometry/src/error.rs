use std::fmt;

/// Errors reported by the checked [`MeshData`](crate::mesh::MeshData) accessors.
///
/// Generators never fail; these only surface when a caller asks for a
/// validated view of a mesh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// The mesh has more vertices than 16-bit indices can address.
    IndexOverflow {
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },
    /// The index list length is not a multiple of three.
    IndexCountNotTriangles {
        /// Number of indices in the mesh.
        index_count: usize,
    },
    /// An index references a vertex past the end of the vertex list.
    IndexOutOfBounds {
        /// Position of the offending entry in the index list.
        position: usize,
        /// The offending index value.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshError::IndexOverflow { vertex_count } => {
                write!(f, "{vertex_count} vertices do not fit 16-bit indices")
            }
            MeshError::IndexCountNotTriangles { index_count } => {
                write!(f, "index count {index_count} is not a multiple of 3")
            }
            MeshError::IndexOutOfBounds {
                position,
                index,
                vertex_count,
            } => write!(
                f,
                "index {index} at position {position} is out of bounds for {vertex_count} vertices"
            ),
        }
    }
}

impl std::error::Error for MeshError {}
