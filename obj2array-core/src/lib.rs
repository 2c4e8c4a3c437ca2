//! obj2array Core Library - OBJ mesh to flat triangle list conversion
//!
//! Reads vertex positions and triangle faces, recenters and rescales the mesh
//! to unit extent, applies a user transform and writes the triangles as
//! bracketed coordinate triples.

pub mod emit;
pub mod error;
pub mod geometry;
pub mod normalize;
pub mod obj;
pub mod pipeline;
pub mod transform;

// Re-export commonly used types
pub use error::{MeshError, MeshResult, Stage, StageError};
pub use geometry::{Face, Mesh, Vertex};
pub use pipeline::{convert, convert_str, Conversion};
pub use transform::{RotationState, Transform, TransformParams};
