//! Vertex layout description for uploading generated meshes.
//!
//! Generated meshes always use a single interleaved buffer of [`Vertex`]
//! records. The rendering layer reads this description to build its input
//! layout instead of hardcoding offsets.
//!
//! ```ignore
//! let layout = VertexLayout::position_normal_tangent_uv();
//! let tangent = layout.get_attribute(VertexAttributeSemantic::Tangent).unwrap();
//! assert_eq!(tangent.offset, 24);
//! ```

use std::sync::Arc;

use super::vertex::Vertex;

/// Semantic meaning of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttributeSemantic {
    /// Vertex position (float3).
    Position,
    /// Vertex normal (float3).
    Normal,
    /// Vertex tangent (float3).
    Tangent,
    /// Texture coordinates set 0 (float2).
    TexCoord0,
}

/// Format of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttributeFormat {
    /// Two 32-bit floats.
    Float2,
    /// Three 32-bit floats.
    Float3,
}

impl VertexAttributeFormat {
    /// Get the size in bytes of this format.
    pub fn size(&self) -> usize {
        match self {
            Self::Float2 => 8,
            Self::Float3 => 12,
        }
    }
}

/// A single vertex attribute description.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VertexAttribute {
    /// Semantic meaning of this attribute.
    pub semantic: VertexAttributeSemantic,
    /// Data format of this attribute.
    pub format: VertexAttributeFormat,
    /// Byte offset within the vertex.
    pub offset: u32,
}

impl VertexAttribute {
    /// Create a new vertex attribute.
    pub fn new(
        semantic: VertexAttributeSemantic,
        format: VertexAttributeFormat,
        offset: u32,
    ) -> Self {
        Self {
            semantic,
            format,
            offset,
        }
    }

    /// End of this attribute in bytes, relative to the start of the vertex.
    pub fn end(&self) -> u32 {
        self.offset + self.format.size() as u32
    }
}

/// Layout of one interleaved vertex buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VertexLayout {
    /// Stride in bytes between consecutive vertices.
    pub stride: u32,
    /// The vertex attributes.
    pub attributes: Vec<VertexAttribute>,
    /// Optional label for debugging.
    pub label: Option<String>,
}

impl VertexLayout {
    /// Create a new layout with the given stride and no attributes.
    pub fn new(stride: u32) -> Self {
        Self {
            stride,
            attributes: Vec::new(),
            label: None,
        }
    }

    /// Add a vertex attribute.
    pub fn with_attribute(mut self, attribute: VertexAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Set a debug label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Get an attribute by semantic.
    pub fn get_attribute(&self, semantic: VertexAttributeSemantic) -> Option<&VertexAttribute> {
        self.attributes
            .iter()
            .find(|attr| attr.semantic == semantic)
    }

    /// Check that every attribute lies inside the stride.
    pub fn validate(&self) -> Result<(), String> {
        for attr in &self.attributes {
            if attr.end() > self.stride {
                return Err(format!(
                    "Attribute {:?} ends at byte {} but stride is {}",
                    attr.semantic,
                    attr.end(),
                    self.stride
                ));
            }
        }
        Ok(())
    }

    /// Layout of [`Vertex`]: position, normal, tangent, texcoord (44 bytes).
    pub fn position_normal_tangent_uv() -> Arc<Self> {
        use VertexAttributeFormat::{Float2, Float3};
        use VertexAttributeSemantic::{Normal, Position, Tangent, TexCoord0};

        Arc::new(
            Self::new(Vertex::SIZE as u32)
                .with_attribute(VertexAttribute::new(Position, Float3, 0))
                .with_attribute(VertexAttribute::new(Normal, Float3, 12))
                .with_attribute(VertexAttribute::new(Tangent, Float3, 24))
                .with_attribute(VertexAttribute::new(TexCoord0, Float2, 36))
                .with_label("position_normal_tangent_uv"),
        )
    }
}
