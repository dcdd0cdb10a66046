use std::path::Path;

use crate::gl::{Gl, GlError, RawHandle};

use super::program::{LinkedProgram, Program};
use super::source::read_shader_source;
use super::stage::{CompiledStage, ShaderStage, StageKind};
use super::uniform::UniformValue;

/// Linked program together with the two stages it was built from.
///
/// Construction runs compile(vertex) → compile(fragment) → link and stops at the
/// first failure, so a program is never linked from a stage that did not compile.
pub struct ShaderProgram {
    // Field order is drop order: the program goes before its stages.
    program: LinkedProgram,
    vertex: CompiledStage,
    fragment: CompiledStage,
}

impl ShaderProgram {
    /// Builds from in-memory GLSL sources.
    pub fn new(gl: Gl, vertex_src: &str, fragment_src: &str) -> Result<Self, GlError> {
        let program = Program::new(gl.clone())?;
        let vertex = ShaderStage::new(gl.clone(), StageKind::Vertex)?.compile(vertex_src)?;
        let fragment = ShaderStage::new(gl, StageKind::Fragment)?.compile(fragment_src)?;
        let program = program.link(&vertex, &fragment)?;

        log::debug!(
            "shader program {} ready (vertex {}, fragment {})",
            program.handle(),
            vertex.handle(),
            fragment.handle()
        );

        Ok(Self {
            program,
            vertex,
            fragment,
        })
    }

    /// Builds from two UTF-8 source files.
    pub fn from_files(
        gl: Gl,
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> Result<Self, GlError> {
        let vertex_src = read_shader_source(vertex_path)?;
        let fragment_src = read_shader_source(fragment_path)?;
        Self::new(gl, &vertex_src, &fragment_src)
    }

    /// Makes this the active program.
    pub fn use_program(&self) {
        self.program.use_program();
    }

    /// See [`LinkedProgram::set_uniform`]: precondition is that this program is in use,
    /// and unresolved names are ignored.
    pub fn set_uniform<V: UniformValue>(&self, name: &str, value: V) {
        self.program.set_uniform(name, value);
    }

    pub fn handle(&self) -> RawHandle {
        self.program.handle()
    }

    pub fn vertex_stage(&self) -> &CompiledStage {
        &self.vertex
    }

    pub fn fragment_stage(&self) -> &CompiledStage {
        &self.fragment
    }
}

impl std::fmt::Debug for ShaderProgram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShaderProgram")
            .field("program", &self.program)
            .field("vertex", &self.vertex)
            .field("fragment", &self.fragment)
            .finish()
    }
}
