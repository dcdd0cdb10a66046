use glam::Vec3;

/// Initial camera state and speeds.
///
/// Angles are in degrees. Speeds are per millisecond of frame time: translation in
/// world units, rotation in degrees (also used for strafing).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraConfig {
    pub position: Vec3,
    pub up: Vec3,
    pub pitch: f32,
    pub yaw: f32,
    pub translation_speed: f32,
    pub rotation_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 3.0),
            up: Vec3::Y,
            pitch: 0.0,
            // 270° faces -Z.
            yaw: 270.0,
            translation_speed: 0.03,
            rotation_speed: 0.05,
        }
    }
}
