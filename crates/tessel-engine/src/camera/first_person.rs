use glam::{Mat4, Vec3};

use super::config::CameraConfig;

/// The eight relative camera mutations.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CameraMove {
    Forward,
    Back,
    Left,
    Right,
    PitchUp,
    PitchDown,
    YawLeft,
    YawRight,
}

/// Fly camera driven by pitch/yaw angles.
///
/// `view()` never recomputes; every mutator refreshes `front` and the view matrix
/// before returning. Pitch is not clamped (the view flips past ±90°) and yaw is
/// left unbounded.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    up: Vec3,
    front: Vec3,

    pitch: f32,
    yaw: f32,

    translation_speed: f32,
    rotation_speed: f32,

    view: Mat4,
}

impl Camera {
    pub fn new() -> Self {
        Self::with_config(CameraConfig::default())
    }

    pub fn with_config(config: CameraConfig) -> Self {
        let mut camera = Self {
            position: config.position,
            up: config.up,
            front: Vec3::NEG_Z,
            pitch: config.pitch,
            yaw: config.yaw,
            translation_speed: config.translation_speed,
            rotation_speed: config.rotation_speed,
            view: Mat4::IDENTITY,
        };
        camera.refresh_view();
        camera
    }

    /// Cached world → camera transform.
    pub fn view(&self) -> &Mat4 {
        &self.view
    }

    pub fn move_forward(&mut self, dt: f32) {
        self.position += self.translation_speed * dt * self.front;
        self.refresh_view();
    }

    pub fn move_back(&mut self, dt: f32) {
        self.position -= self.translation_speed * dt * self.front;
        self.refresh_view();
    }

    /// Strafes at `rotation_speed`, not `translation_speed`.
    pub fn move_left(&mut self, dt: f32) {
        self.position -= self.strafe_axis() * self.rotation_speed * dt;
        self.refresh_view();
    }

    /// Strafes at `rotation_speed`, not `translation_speed`.
    pub fn move_right(&mut self, dt: f32) {
        self.position += self.strafe_axis() * self.rotation_speed * dt;
        self.refresh_view();
    }

    pub fn pitch_up(&mut self, dt: f32) {
        self.pitch += self.rotation_speed * dt;
        self.refresh_view();
    }

    pub fn pitch_down(&mut self, dt: f32) {
        self.pitch -= self.rotation_speed * dt;
        self.refresh_view();
    }

    pub fn yaw_left(&mut self, dt: f32) {
        self.yaw -= self.rotation_speed * dt;
        self.refresh_view();
    }

    pub fn yaw_right(&mut self, dt: f32) {
        self.yaw += self.rotation_speed * dt;
        self.refresh_view();
    }

    /// Dispatches one of the eight mutators.
    pub fn apply(&mut self, movement: CameraMove, dt: f32) {
        match movement {
            CameraMove::Forward => self.move_forward(dt),
            CameraMove::Back => self.move_back(dt),
            CameraMove::Left => self.move_left(dt),
            CameraMove::Right => self.move_right(dt),
            CameraMove::PitchUp => self.pitch_up(dt),
            CameraMove::PitchDown => self.pitch_down(dt),
            CameraMove::YawLeft => self.yaw_left(dt),
            CameraMove::YawRight => self.yaw_right(dt),
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Degrees.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Degrees.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    fn strafe_axis(&self) -> Vec3 {
        self.front.cross(self.up).normalize()
    }

    fn refresh_view(&mut self) {
        self.front = front_from_angles(self.pitch, self.yaw);
        self.view = Mat4::look_at_rh(self.position, self.position + self.front, self.up);
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

/// Unit look direction for pitch/yaw in degrees.
fn front_from_angles(pitch: f32, yaw: f32) -> Vec3 {
    let (p, y) = (pitch.to_radians(), yaw.to_radians());
    Vec3::new(p.cos() * y.cos(), p.sin(), p.cos() * y.sin())
}
