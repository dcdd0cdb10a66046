//! OpenGL seam.
//!
//! Wrappers never call glow directly; they go through [`GlApi`], implemented for
//! `glow::Context` and, in tests, for an in-memory recorder. Handles are shared as
//! `Rc<dyn GlApi>`, which keeps every wrapper on the thread that owns the context.

mod api;
mod error;
#[cfg(not(target_arch = "wasm32"))]
mod native;

#[cfg(test)]
pub(crate) mod recording;

use std::rc::Rc;

pub use api::{GlApi, NO_RESOURCE, RawHandle, UniformLocation};
pub use error::{GlError, ResourceKind};

/// Shared handle to the current GL context.
pub type Gl = Rc<dyn GlApi>;

/// Clears color and depth of the default framebuffer.
pub fn clear_screen(gl: &dyn GlApi, color: [f32; 4]) {
    let [r, g, b, a] = color;
    gl.clear_color(r, g, b, a);
    gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
}

/// Logs vendor / renderer / version strings of the current context.
pub fn log_driver_info(gl: &dyn GlApi) {
    fn norm(value: String) -> String {
        let v = value.trim();
        if v.is_empty() { "<unknown>".to_string() } else { v.to_string() }
    }

    let vendor = norm(gl.get_string(glow::VENDOR));
    let renderer = norm(gl.get_string(glow::RENDERER));
    let version = norm(gl.get_string(glow::VERSION));
    let glsl = norm(gl.get_string(glow::SHADING_LANGUAGE_VERSION));

    log::info!("OpenGL vendor: {vendor}");
    log::info!("OpenGL renderer: {renderer}");
    log::info!("OpenGL version: {version} (GLSL {glsl})");
}
