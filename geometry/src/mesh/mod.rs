//! CPU-side mesh types.
//!
//! - [`Vertex`] - Position, normal, tangent and texture coordinate record
//! - [`MeshData`] - Vertex list plus triangle index list
//! - [`VertexLayout`] - Byte layout of [`Vertex`] for GPU upload
//!
//! The generators in [`crate::generators`] produce [`MeshData`] values.

mod data;
mod layout;
mod vertex;

pub use data::{IndexFormat, MeshData};
pub use layout::{VertexAttribute, VertexAttributeFormat, VertexAttributeSemantic, VertexLayout};
pub use vertex::Vertex;
