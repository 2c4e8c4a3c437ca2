/// Wavefront OBJ reader for vertex positions and triangle faces
use std::io::BufRead;
use std::num::IntErrorKind;

use nom::{
    bytes::complete::{take_till, take_while},
    sequence::preceded,
    IResult,
};
use tracing::{debug, trace};

use crate::error::{MeshError, MeshResult};
use crate::geometry::{Face, Mesh, Vertex};

/// A line split into its tag and first three fields. Missing fields are empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Record<'a> {
    tag: &'a str,
    fields: [&'a str; 3],
}

/// Parse an OBJ stream into a mesh
pub fn parse_obj<R: BufRead>(reader: R) -> MeshResult<Mesh> {
    let mut mesh = Mesh::new();

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        parse_line(&mut mesh, number + 1, &line)?;
    }

    debug!(
        vertices = mesh.vertices.len(),
        faces = mesh.faces.len(),
        "parsed OBJ input"
    );
    Ok(mesh)
}

/// Parse OBJ text held in memory
pub fn parse_obj_str(input: &str) -> MeshResult<Mesh> {
    parse_obj(input.as_bytes())
}

fn parse_line(mesh: &mut Mesh, line_number: usize, line: &str) -> MeshResult<()> {
    let line = line.trim().to_lowercase();
    let record = match parse_record(&line) {
        Ok((_, record)) => record,
        Err(_) => return Ok(()),
    };

    match record.tag {
        "v" => {
            let [x, y, z] = record.fields;
            mesh.add_vertex(Vertex::new(
                parse_coordinate(line_number, x)?,
                parse_coordinate(line_number, y)?,
                parse_coordinate(line_number, z)?,
            ));
        }
        "f" => {
            let [a, b, c] = record.fields;
            mesh.add_face(Face::new(
                parse_index(line_number, a)?,
                parse_index(line_number, b)?,
                parse_index(line_number, c)?,
            ));
        }
        tag => trace!(line = line_number, tag, "skipping record"),
    }

    Ok(())
}

fn parse_record(input: &str) -> IResult<&str, Record<'_>> {
    let (input, tag) = token(input)?;
    let (input, f1) = preceded(separator, token)(input)?;
    let (input, f2) = preceded(separator, token)(input)?;
    let (input, f3) = preceded(separator, token)(input)?;
    Ok((
        input,
        Record {
            tag,
            fields: [f1, f2, f3],
        },
    ))
}

fn token(input: &str) -> IResult<&str, &str> {
    take_till(char::is_whitespace)(input)
}

fn separator(input: &str) -> IResult<&str, &str> {
    take_while(char::is_whitespace)(input)
}

fn parse_coordinate(line_number: usize, field: &str) -> MeshResult<f64> {
    field
        .parse::<f64>()
        .map_err(|_| MeshError::parse(line_number, "v", field))
}

/// Convert a 1-based face index token to a 0-based index, dropping any
/// `/texture/normal` suffix.
///
/// Integers too large for `i64` saturate, so they fail as out-of-range
/// indices at emission rather than as malformed records.
fn parse_index(line_number: usize, field: &str) -> MeshResult<i64> {
    let index = field.split_once('/').map_or(field, |(index, _)| index);
    let index = match index.parse::<i64>() {
        Ok(index) => index,
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => return Err(MeshError::parse(line_number, "f", field)),
        },
    };
    Ok(index.saturating_sub(1))
}
