use crate::gl::Gl;
use crate::input::{InputFrame, InputState};
use crate::time::FrameTime;

/// Per-frame context passed to [`App::on_frame`](super::App::on_frame).
pub struct FrameCtx<'a> {
    pub gl: &'a Gl,
    pub input: &'a InputState,
    pub input_frame: &'a InputFrame,
    pub time: FrameTime,
    /// Framebuffer size in physical pixels.
    pub size: (u32, u32),
}

impl FrameCtx<'_> {
    /// Width over height; 1.0 while the framebuffer is empty.
    pub fn aspect_ratio(&self) -> f32 {
        let (w, h) = self.size;
        if w == 0 || h == 0 {
            1.0
        } else {
            w as f32 / h as f32
        }
    }
}
