//! Window, GL context and the frame loop.
//!
//! Owns the `winit` event loop and window, creates an OpenGL 3.3 core context with
//! `glutin`, and drives an [`App`](crate::core::App) once per frame.

mod context;
mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
