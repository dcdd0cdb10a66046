use std::fmt;

use crate::gl::{Gl, GlApi, GlError, NO_RESOURCE, RawHandle, ResourceKind};

/// Pipeline stage a shader object belongs to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum StageKind {
    Vertex,
    Fragment,
}

impl StageKind {
    /// `GLenum` passed to `glCreateShader`.
    pub const fn gl_enum(self) -> u32 {
        match self {
            StageKind::Vertex => glow::VERTEX_SHADER,
            StageKind::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl TryFrom<u32> for StageKind {
    type Error = GlError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        match raw {
            glow::VERTEX_SHADER => Ok(StageKind::Vertex),
            glow::FRAGMENT_SHADER => Ok(StageKind::Fragment),
            other => Err(GlError::UnsupportedStageKind(other)),
        }
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageKind::Vertex => f.write_str("vertex"),
            StageKind::Fragment => f.write_str("fragment"),
        }
    }
}

/// Owns the shader name; both typestates below wrap it.
struct ShaderObject {
    gl: Gl,
    handle: RawHandle,
    kind: StageKind,
}

impl Drop for ShaderObject {
    fn drop(&mut self) {
        log::debug!("releasing {} shader {}", self.kind, self.handle);
        self.gl.delete_shader(self.handle);
    }
}

/// Shader object that has not been compiled yet.
pub struct ShaderStage(ShaderObject);

/// Successfully compiled shader object, ready to attach to a program.
pub struct CompiledStage(ShaderObject);

impl ShaderStage {
    pub fn new(gl: Gl, kind: StageKind) -> Result<Self, GlError> {
        let handle = gl.create_shader(kind.gl_enum());
        if handle == NO_RESOURCE {
            return Err(GlError::Creation(ResourceKind::Shader(kind)));
        }
        log::debug!("created {kind} shader {handle}");
        Ok(Self(ShaderObject { gl, handle, kind }))
    }

    /// Like [`ShaderStage::new`] but takes a raw `GLenum`.
    ///
    /// Kinds other than vertex/fragment fail before the driver is called.
    pub fn from_raw_kind(gl: Gl, raw: u32) -> Result<Self, GlError> {
        let kind = StageKind::try_from(raw)?;
        Self::new(gl, kind)
    }

    /// Submits `source` and compiles it.
    ///
    /// On failure the driver's info log is written to the log at `error` level and
    /// the shader object is released; a stage never gets a second attempt.
    pub fn compile(self, source: &str) -> Result<CompiledStage, GlError> {
        let ShaderStage(obj) = self;
        let gl: &dyn GlApi = &*obj.gl;

        gl.shader_source(obj.handle, source);
        gl.compile_shader(obj.handle);

        if !gl.shader_compile_status(obj.handle) {
            let info = gl.shader_info_log(obj.handle);
            log::error!("{} shader compile log:\n{}", obj.kind, info.trim_end());
            return Err(GlError::Compile(obj.kind));
        }

        Ok(CompiledStage(obj))
    }

    pub fn kind(&self) -> StageKind {
        self.0.kind
    }

    pub fn handle(&self) -> RawHandle {
        self.0.handle
    }
}

impl CompiledStage {
    pub fn kind(&self) -> StageKind {
        self.0.kind
    }

    pub fn handle(&self) -> RawHandle {
        self.0.handle
    }
}

impl fmt::Debug for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShaderStage")
            .field("kind", &self.0.kind)
            .field("handle", &self.0.handle)
            .finish()
    }
}

impl fmt::Debug for CompiledStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledStage")
            .field("kind", &self.0.kind)
            .field("handle", &self.0.handle)
            .finish()
    }
}
