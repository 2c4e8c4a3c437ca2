/// Text output of transformed triangles as bracketed coordinate triples
use std::io::Write;

use crate::error::{MeshError, MeshResult};
use crate::geometry::{Face, Vertex};

/// Write one `[ [x,y,z], [x,y,z], [x,y,z] ]` line per face, in face order.
///
/// Every face but the last is followed by a comma. Coordinates use the
/// shortest representation that round-trips, so `1` prints as `1.0`.
pub fn write_triangles<W: Write>(
    writer: &mut W,
    vertices: &[Vertex],
    faces: &[Face],
) -> MeshResult<()> {
    for (ordinal, face) in faces.iter().enumerate() {
        let [a, b, c] = resolve_face(ordinal, face, vertices)?;
        write!(
            writer,
            "[ {}, {}, {} ]",
            format_vertex(a),
            format_vertex(b),
            format_vertex(c)
        )?;
        if ordinal + 1 < faces.len() {
            writeln!(writer, ",")?;
        } else {
            writeln!(writer)?;
        }
    }
    Ok(())
}

/// Render the triangle list into a string.
pub fn render_triangles(vertices: &[Vertex], faces: &[Face]) -> MeshResult<String> {
    let mut buffer = Vec::new();
    write_triangles(&mut buffer, vertices, faces)?;
    // Only ASCII is ever written.
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn resolve_face<'a>(
    ordinal: usize,
    face: &Face,
    vertices: &'a [Vertex],
) -> MeshResult<[&'a Vertex; 3]> {
    let lookup = |index: i64| {
        usize::try_from(index)
            .ok()
            .and_then(|i| vertices.get(i))
            .ok_or_else(|| MeshError::Index {
                face: ordinal,
                index,
                vertex_count: vertices.len(),
            })
    };
    let [a, b, c] = face.indices;
    Ok([lookup(a)?, lookup(b)?, lookup(c)?])
}

/// Shortest round-trip `Debug` formatting: `1.0`, `1e-7`, `NaN`, `inf`.
fn format_vertex(vertex: &Vertex) -> String {
    format!("[{:?},{:?},{:?}]", vertex.x, vertex.y, vertex.z)
}
