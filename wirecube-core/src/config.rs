/// Fixed scene parameters
use crate::projection::Camera;

/// Largest angular speed, in radians per frame, a poke can pick on any axis
pub const MAX_ROTATION_SPEED: f32 = 0.025;

/// Edge length of the rendered cube in model units
pub const CUBE_SIZE: f32 = 2.0;

/// Everything a host needs to set up the scene.
///
/// `Default` gives a 200x200 drawable and the standard camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    pub width: u32,
    pub height: u32,
    pub camera: Camera,
    pub cube_size: f32,
    pub max_rotation_speed: f32,
}

impl SceneConfig {
    /// Resize the drawable, keeping the camera aspect in step.
    ///
    /// Each side is at least one pixel.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width.max(1);
        self.height = height.max(1);
        self.camera.aspect = self.width as f32 / self.height as f32;
        self
    }

    pub fn with_camera(mut self, camera: Camera) -> Self {
        self.camera = camera;
        self
    }

    pub fn with_max_rotation_speed(mut self, max: f32) -> Self {
        self.max_rotation_speed = max.abs();
        self
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: 200,
            height: 200,
            camera: Camera::new(200, 200),
            cube_size: CUBE_SIZE,
            max_rotation_speed: MAX_ROTATION_SPEED,
        }
    }
}
