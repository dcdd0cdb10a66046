use std::path::Path;

use crate::gl::GlError;

/// Reads a UTF-8 shader source file.
pub fn read_shader_source(path: impl AsRef<Path>) -> Result<String, GlError> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|source| GlError::ShaderSource {
        path: path.to_path_buf(),
        source,
    })
}
