use winit::event::WindowEvent;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application driven by [`Runtime`](crate::window::Runtime).
///
/// The app is built after the GL context is current and dropped before it, so it may
/// own GL wrappers directly.
pub trait App {
    /// Raw window events, after input state has been updated.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Framebuffer size in physical pixels. Called once after the app is built and on
    /// every non-empty resize; the viewport is already updated.
    fn on_resize(&mut self, width: u32, height: u32) {
        let _ = (width, height);
    }

    /// Called once per frame after the framebuffer was cleared and before buffers
    /// are swapped.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;
}
