//! Procedural mesh generators.
//!
//! Every generator is a pure function returning a fresh [`MeshData`](crate::mesh::MeshData):
//!
//! - [`generate_box`] - Axis-aligned box, optionally subdivided
//! - [`generate_sphere`] - UV sphere with duplicated seam vertices
//! - [`generate_geosphere`] - Subdivided icosahedron projected onto a sphere
//! - [`generate_cylinder`] - Cylinder or truncated cone with flat caps
//! - [`generate_grid`] - Flat grid in the XZ plane
//! - [`generate_quad`] - Single quad, e.g. a fullscreen triangle pair
//!
//! Triangles are wound so that `(b - a) × (c - a)` points along the surface
//! normal. Inputs are not validated: degenerate sizes or counts produce
//! degenerate geometry rather than errors.

mod cuboid;
mod cylinder;
mod geosphere;
mod grid;
mod quad;
mod sphere;
pub mod subdivide;

pub use cuboid::generate_box;
pub use cylinder::generate_cylinder;
pub use geosphere::generate_geosphere;
pub use grid::generate_grid;
pub use quad::generate_quad;
pub use sphere::generate_sphere;
pub use subdivide::{MAX_SUBDIVISIONS, midpoint, subdivide, subdivide_n};
