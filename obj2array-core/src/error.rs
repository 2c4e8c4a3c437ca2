//! Error types for the mesh pipeline.

use std::fmt;

use thiserror::Error;

/// Result type for mesh pipeline operations.
pub type MeshResult<T> = Result<T, MeshError>;

/// Errors that abort a conversion run.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A `v` or `f` record has a missing or non-numeric field.
    #[error("line {line}: invalid `{tag}` record field {field:?}")]
    Parse {
        /// 1-based input line number.
        line: usize,
        /// Record tag (`v` or `f`).
        tag: String,
        /// The field text that failed to parse.
        field: String,
    },

    /// No vertices were read.
    #[error("mesh has no vertices")]
    EmptyMesh,

    /// All vertices collapse onto the normalization center.
    #[error("mesh is degenerate: extent is zero")]
    DegenerateMesh,

    /// A face refers to a vertex that does not exist.
    #[error("face {face}: vertex index {index} out of range (mesh has {vertex_count} vertices)")]
    Index {
        /// 0-based face ordinal.
        face: usize,
        /// The offending 0-based vertex index.
        index: i64,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },

    /// Reading the input or writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MeshError {
    /// Create a `Parse` error for the given record field.
    #[must_use]
    pub fn parse(line: usize, tag: &str, field: &str) -> Self {
        Self::Parse {
            line,
            tag: tag.to_string(),
            field: field.to_string(),
        }
    }
}

/// Pipeline stage, used to tag errors from [`crate::pipeline::convert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Parse,
    Normalize,
    Emit,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Parse => "reading mesh",
            Self::Normalize => "normalizing mesh",
            Self::Emit => "emitting triangles",
        })
    }
}

/// A [`MeshError`] tagged with the stage that raised it.
#[derive(Debug, Error)]
#[error("{stage}")]
pub struct StageError {
    pub stage: Stage,
    #[source]
    pub source: MeshError,
}

impl StageError {
    /// Adapter for `map_err` that tags an error with `stage`.
    pub fn at(stage: Stage) -> impl FnOnce(MeshError) -> Self {
        move |source| Self { stage, source }
    }
}
