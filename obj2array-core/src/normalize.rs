//! Centering and unit-extent rescaling of vertex positions.
//!
//! Vertices are shifted by *half* the centroid, not the full centroid, and
//! then divided by the largest absolute coordinate. Output must keep the half
//! offset.

use nalgebra::{Point3, Vector3};
use tracing::debug;

use crate::error::{MeshError, MeshResult};
use crate::geometry::Vertex;

/// Output of [`normalize`].
#[derive(Debug, Clone)]
pub struct Normalized {
    /// Recentered vertices scaled so the largest coordinate magnitude is 1.
    pub vertices: Vec<Vertex>,
    /// Componentwise mean of the input vertices.
    pub centroid: Point3<f64>,
    /// Largest absolute coordinate after recentering.
    pub size: f64,
}

/// Recenter and rescale vertices to unit extent.
///
/// # Errors
///
/// `EmptyMesh` if `vertices` is empty, `DegenerateMesh` if every recentered
/// coordinate is zero.
pub fn normalize(vertices: &[Vertex]) -> MeshResult<Normalized> {
    let centroid = centroid(vertices)?;
    let recentered = recenter(vertices, &centroid);
    let size = size(&extent(&recentered)?);
    let vertices = rescale(&recentered, size)?;

    debug!(
        centroid = ?centroid.coords.as_slice(),
        size,
        "normalized mesh"
    );
    Ok(Normalized {
        vertices,
        centroid,
        size,
    })
}

/// Componentwise arithmetic mean of the vertices.
pub fn centroid(vertices: &[Vertex]) -> MeshResult<Point3<f64>> {
    if vertices.is_empty() {
        return Err(MeshError::EmptyMesh);
    }

    let sum = vertices
        .iter()
        .fold(Vector3::zeros(), |acc, v| acc + v.coords);
    Ok(Point3::from(sum / vertices.len() as f64))
}

/// Shift every vertex by half the centroid.
pub fn recenter(vertices: &[Vertex], centroid: &Point3<f64>) -> Vec<Vertex> {
    let offset = centroid.coords / 2.0;
    vertices.iter().map(|v| v - offset).collect()
}

/// Componentwise maximum absolute coordinate, seeded from the first vertex.
pub fn extent(vertices: &[Vertex]) -> MeshResult<Vector3<f64>> {
    let first = vertices.first().ok_or(MeshError::EmptyMesh)?;
    Ok(vertices.iter().fold(first.coords, |extent, v| {
        v.coords.zip_map(&extent, |axis, e| axis.abs().max(e))
    }))
}

/// Largest component of an extent.
pub fn size(extent: &Vector3<f64>) -> f64 {
    extent.x.max(extent.y).max(extent.z)
}

/// Divide every vertex by `size`.
pub fn rescale(vertices: &[Vertex], size: f64) -> MeshResult<Vec<Vertex>> {
    if size == 0.0 {
        return Err(MeshError::DegenerateMesh);
    }
    Ok(vertices.iter().map(|v| Point3::from(v.coords / size)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> Vec<Vertex> {
        vec![
            Vertex::new(2.0, 4.0, -6.0),
            Vertex::new(4.0, 0.0, 2.0),
            Vertex::new(0.0, -1.0, 1.0),
            Vertex::new(10.0, 3.0, 7.0),
        ]
    }

    #[test]
    fn test_centroid() {
        let c = centroid(&sample()).unwrap();
        assert_relative_eq!(c, Point3::new(4.0, 1.5, 1.0));
    }

    #[test]
    fn test_recenter_half_offset() {
        let vertices = sample();
        let c = centroid(&vertices).unwrap();
        let recentered = recenter(&vertices, &c);

        let before = vertices.iter().fold(Vector3::zeros(), |acc, v| acc + v.coords);
        let after = recentered
            .iter()
            .fold(Vector3::zeros(), |acc, v| acc + v.coords);
        let n = vertices.len() as f64;
        assert_relative_eq!(after, before - c.coords * n / 2.0, epsilon = 1e-12);
        assert_relative_eq!(recentered[0], Point3::new(0.0, 3.25, -6.5));
    }

    #[test]
    fn test_extent_uses_absolute_values() {
        let e = extent(&[
            Vertex::new(-3.0, 1.0, 0.5),
            Vertex::new(2.0, -4.0, 0.25),
        ])
        .unwrap();
        assert_eq!(e, Vector3::new(3.0, 4.0, 0.5));
        assert_eq!(size(&e), 4.0);
    }

    #[test]
    fn test_unit_extent() {
        let normalized = normalize(&sample()).unwrap();
        let max = normalized
            .vertices
            .iter()
            .flat_map(|v| v.coords.iter().copied())
            .fold(0.0_f64, |m, x| m.max(x.abs()));
        assert_relative_eq!(max, 1.0);
        assert_relative_eq!(normalized.size, 8.0);
    }

    #[test]
    fn test_centered_mesh_is_unchanged() {
        let mesh = crate::geometry::Mesh::tetrahedron();
        let normalized = normalize(&mesh.vertices).unwrap();
        assert_eq!(normalized.centroid, Point3::origin());
        assert_eq!(normalized.size, 1.0);
        assert_eq!(normalized.vertices, mesh.vertices);
    }

    #[test]
    fn test_empty_mesh() {
        assert!(matches!(normalize(&[]), Err(MeshError::EmptyMesh)));
    }

    #[test]
    fn test_single_point_is_degenerate() {
        // A lone point at the origin stays there after the half-centroid shift.
        let result = normalize(&[Vertex::origin()]);
        assert!(matches!(result, Err(MeshError::DegenerateMesh)));
    }

    #[test]
    fn test_coincident_points_are_not_degenerate() {
        // The half offset leaves coincident points away from the origin.
        let normalized = normalize(&[Vertex::new(2.0, 0.0, 0.0); 3]).unwrap();
        assert_relative_eq!(normalized.vertices[0], Point3::new(1.0, 0.0, 0.0));
    }
}
