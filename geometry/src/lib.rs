//! # Sandbox Geometry
//!
//! Procedural mesh generation shared by the rendering sandbox demos.
//!
//! The crate turns a handful of shape parameters into CPU-side vertex and
//! index lists ready for upload:
//!
//! ```
//! use sandbox_geometry::generators::generate_sphere;
//!
//! let sphere = generate_sphere(1.0, 32, 16);
//! assert_eq!(sphere.vertex_count(), 2 + 16 * 33);
//! let _bytes = sphere.vertex_bytes();
//! ```

pub mod error;
pub mod generators;
pub mod math;
pub mod mesh;
pub mod profiling;
pub mod shape;

pub use error::MeshError;
pub use mesh::{MeshData, Vertex};
pub use shape::ShapeDesc;

/// Geometry library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log the library version once at startup.
pub fn init() {
    log::info!("Sandbox Geometry v{} initialized", VERSION);
}
