/// Scale, rotation and translation applied to normalized vertices
use nalgebra::{Matrix3, Point3, Vector3};

use crate::geometry::Vertex;

/// Rotation angles around the three axes (in radians)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl RotationState {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}

/// Per-run transform parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformParams {
    pub scale: f64,
    pub rotation: RotationState,
    pub translation: Vector3<f64>,
}

impl Default for TransformParams {
    fn default() -> Self {
        Self {
            scale: 1.0,
            rotation: RotationState::zero(),
            translation: Vector3::zeros(),
        }
    }
}

/// Affine map `R * (v * scale) + t`, with `R` built once per run
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    scale: f64,
    rotation: Matrix3<f64>,
    translation: Vector3<f64>,
}

impl Transform {
    pub fn new(params: &TransformParams) -> Self {
        Self {
            scale: params.scale,
            rotation: Self::rotation_matrix(&params.rotation),
            translation: params.translation,
        }
    }

    /// Create a rotation matrix from a rotation state
    ///
    /// Rotates about x first, then y, then z (`Rz * Ry * Rx`).
    pub fn rotation_matrix(rotation: &RotationState) -> Matrix3<f64> {
        let (su, cu) = rotation.x.sin_cos();
        let (sv, cv) = rotation.y.sin_cos();
        let (sw, cw) = rotation.z.sin_cos();

        #[rustfmt::skip]
        let matrix = Matrix3::new(
            cv * cw, su * sv * cw - cu * sw, su * sw + cu * sv * cw,
            cv * sw, cu * cw + su * sv * sw, cu * sv * sw - su * cw,
            -sv,     su * cv,                cu * cv,
        );
        matrix
    }

    pub fn apply(&self, vertex: &Vertex) -> Vertex {
        let scaled = vertex.coords * self.scale;
        Point3::from(self.rotation * scaled + self.translation)
    }

    pub fn apply_all(&self, vertices: &[Vertex]) -> Vec<Vertex> {
        vertices.iter().map(|v| self.apply(v)).collect()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(&TransformParams::default())
    }
}
