//! Tessel engine crate.
//!
//! Owned OpenGL object wrappers, shader programs, textures, a fly camera and the
//! window/context runtime that drives them.

pub mod camera;
pub mod gl;
pub mod mesh;
pub mod resource;
pub mod shader;
pub mod texture;

pub mod core;
pub mod input;
pub mod logging;
pub mod time;
pub mod window;
