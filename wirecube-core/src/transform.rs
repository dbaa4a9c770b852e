/// 3D transformation matrices and rotation speed
use nalgebra::{Matrix4, Vector3};

/// Angular velocity around three axes (radians per frame)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationSpeed {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RotationSpeed {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// True when every component lies in `[-limit, limit]`
    pub fn within(&self, limit: f32) -> bool {
        [self.x, self.y, self.z]
            .iter()
            .all(|v| (-limit..=limit).contains(v))
    }
}

impl Default for RotationSpeed {
    fn default() -> Self {
        Self::zero()
    }
}

/// Transform builder for 3D transformations.
///
/// The `rotate_*` helpers right-multiply: `rotate_x(m, a)` returns `m * Rx(a)`,
/// so the new rotation is applied in the model's local frame.
pub struct Transform;

impl Transform {
    pub fn rotate_x(matrix: &Matrix4<f32>, radians: f32) -> Matrix4<f32> {
        matrix * Matrix4::new_rotation(Vector3::new(radians, 0.0, 0.0))
    }

    pub fn rotate_y(matrix: &Matrix4<f32>, radians: f32) -> Matrix4<f32> {
        matrix * Matrix4::new_rotation(Vector3::new(0.0, radians, 0.0))
    }

    pub fn rotate_z(matrix: &Matrix4<f32>, radians: f32) -> Matrix4<f32> {
        matrix * Matrix4::new_rotation(Vector3::new(0.0, 0.0, radians))
    }

    /// Advance a model matrix by one frame of `speed`.
    ///
    /// Order is X, then Y, then Z. Rotations do not commute, so changing it
    /// changes the picture.
    pub fn spin(model: &mut Matrix4<f32>, speed: &RotationSpeed) {
        let rotated = Self::rotate_x(model, speed.x);
        let rotated = Self::rotate_y(&rotated, speed.y);
        *model = Self::rotate_z(&rotated, speed.z);
    }
}
