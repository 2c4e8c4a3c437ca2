/// End-to-end conversion: parse, normalize, transform, emit
use std::io::BufRead;

use tracing::debug;

use crate::emit::render_triangles;
use crate::error::{Stage, StageError};
use crate::normalize::normalize;
use crate::obj::parse_obj;
use crate::transform::{Transform, TransformParams};

/// Result of a successful [`convert`].
#[derive(Debug, Clone)]
pub struct Conversion {
    /// The rendered triangle list.
    pub text: String,
    pub vertices: usize,
    pub triangles: usize,
}

/// Convert an OBJ stream into the rendered triangle list.
///
/// Nothing is returned unless every stage succeeds. Errors carry the stage
/// that failed.
pub fn convert<R: BufRead>(
    reader: R,
    params: &TransformParams,
) -> Result<Conversion, StageError> {
    let mesh = parse_obj(reader).map_err(StageError::at(Stage::Parse))?;
    let normalized = normalize(&mesh.vertices).map_err(StageError::at(Stage::Normalize))?;
    let vertices = Transform::new(params).apply_all(&normalized.vertices);
    let text =
        render_triangles(&vertices, &mesh.faces).map_err(StageError::at(Stage::Emit))?;

    debug!(triangles = mesh.faces.len(), "converted mesh");
    Ok(Conversion {
        text,
        vertices: mesh.vertices.len(),
        triangles: mesh.faces.len(),
    })
}

/// Convert OBJ text held in memory.
pub fn convert_str(input: &str, params: &TransformParams) -> Result<Conversion, StageError> {
    convert(input.as_bytes(), params)
}
