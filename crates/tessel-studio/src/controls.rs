use tessel_engine::camera::{Camera, CameraMove};
use tessel_engine::input::{InputState, Key};

/// Held key → camera mutation.
pub const KEY_BINDINGS: [(Key, CameraMove); 8] = [
    (Key::W, CameraMove::Forward),
    (Key::S, CameraMove::Back),
    (Key::A, CameraMove::Left),
    (Key::D, CameraMove::Right),
    (Key::ArrowUp, CameraMove::PitchUp),
    (Key::ArrowDown, CameraMove::PitchDown),
    (Key::ArrowLeft, CameraMove::YawLeft),
    (Key::ArrowRight, CameraMove::YawRight),
];

pub const QUIT: Key = Key::Escape;

/// Applies every bound move whose key is held, each with the full frame delta.
pub fn drive_camera(camera: &mut Camera, input: &InputState, dt_ms: f32) {
    for (key, movement) in KEY_BINDINGS {
        if input.key_down(key) {
            camera.apply(movement, dt_ms);
        }
    }
}
