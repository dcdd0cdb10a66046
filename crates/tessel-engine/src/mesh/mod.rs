//! Drawable meshes.
//!
//! Each mesh owns its vertex array, buffers, program and texture by value and writes
//! its own uniforms on every draw.

mod cube;
mod cube_data;

pub use cube::{Cube, CubeAssets};
pub use cube_data::{CUBE_VERTICES, CUBE_VERTEX_COUNT, CubeVertex};
