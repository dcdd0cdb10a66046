use std::fmt;
use std::path::PathBuf;

use crate::shader::StageKind;

/// Kind of driver object a wrapper failed to allocate.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ResourceKind {
    VertexArray,
    VertexBuffer,
    ElementBuffer,
    Texture,
    Shader(StageKind),
    Program,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::VertexArray => f.write_str("vertex array"),
            ResourceKind::VertexBuffer => f.write_str("vertex buffer"),
            ResourceKind::ElementBuffer => f.write_str("element buffer"),
            ResourceKind::Texture => f.write_str("texture"),
            ResourceKind::Shader(kind) => write!(f, "{kind} shader"),
            ResourceKind::Program => f.write_str("program"),
        }
    }
}

/// Failures raised while constructing or loading GPU-backed objects.
///
/// Each variant aborts construction of the object that raised it; the driver's
/// compile/link logs are emitted through `log` before the error is returned.
#[derive(Debug, thiserror::Error)]
pub enum GlError {
    #[error("driver failed to create {0}")]
    Creation(ResourceKind),

    #[error("{0} shader failed to compile")]
    Compile(StageKind),

    #[error("shader program failed to link")]
    Link,

    #[error("no data supplied for buffer upload")]
    NullData,

    #[error("unsupported shader stage kind 0x{0:04x}")]
    UnsupportedStageKind(u32),

    #[error("failed to open image {}", path.display())]
    ImageOpen {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to read shader source {}", path.display())]
    ShaderSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
