//! Shader stages and programs.
//!
//! Build protocol: compile vertex stage → compile fragment stage → link. Compiling
//! consumes an uncompiled [`ShaderStage`] and linking consumes an unlinked
//! [`Program`], so a failed stage or a half-linked program can never be reused.
//! [`ShaderProgram`] runs the whole sequence and is the type renderers hold.

mod program;
mod shader_program;
mod source;
mod stage;
mod uniform;

pub use program::{LinkedProgram, Program};
pub use shader_program::ShaderProgram;
pub use source::read_shader_source;
pub use stage::{CompiledStage, ShaderStage, StageKind};
pub use uniform::UniformValue;
