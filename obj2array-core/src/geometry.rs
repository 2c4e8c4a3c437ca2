/// Geometry primitives for the conversion pipeline
use nalgebra::Point3;

/// A vertex position
pub type Vertex = Point3<f64>;

/// A triangle face defined by three zero-based vertex indices
///
/// Indices are kept signed so that a bad input index (`0` or negative in the
/// 1-based source) survives parsing and is reported when the face is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    pub indices: [i64; 3],
}

impl Face {
    pub fn new(i0: i64, i1: i64, i2: i64) -> Self {
        Self {
            indices: [i0, i1, i2],
        }
    }
}

/// A mesh as read from the input: vertex positions plus triangle faces
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub faces: Vec<Face>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex(&mut self, vertex: Vertex) {
        self.vertices.push(vertex);
    }

    pub fn add_face(&mut self, face: Face) {
        self.faces.push(face);
    }

    /// Create a regular tetrahedron mesh for testing, with one face per side
    pub fn tetrahedron() -> Self {
        let mut mesh = Self::new();

        mesh.add_vertex(Vertex::new(1.0, 1.0, 1.0));
        mesh.add_vertex(Vertex::new(1.0, -1.0, -1.0));
        mesh.add_vertex(Vertex::new(-1.0, 1.0, -1.0));
        mesh.add_vertex(Vertex::new(-1.0, -1.0, 1.0));

        mesh.add_face(Face::new(0, 1, 2));
        mesh.add_face(Face::new(0, 3, 1));
        mesh.add_face(Face::new(0, 2, 3));
        mesh.add_face(Face::new(1, 3, 2));

        mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tetrahedron_counts() {
        let mesh = Mesh::tetrahedron();
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.faces.len(), 4);
        assert_eq!(mesh.faces[1], Face::new(0, 3, 1));
    }
}
