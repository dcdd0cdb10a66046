use std::fmt;

use crate::gl::{Gl, GlApi, GlError, NO_RESOURCE, RawHandle, ResourceKind};

use super::stage::{CompiledStage, StageKind};
use super::uniform::UniformValue;

struct ProgramObject {
    gl: Gl,
    handle: RawHandle,
}

impl Drop for ProgramObject {
    fn drop(&mut self) {
        log::debug!("releasing program {}", self.handle);
        self.gl.delete_program(self.handle);
    }
}

/// Program object that has not been linked.
pub struct Program(ProgramObject);

/// Linked, executable program.
pub struct LinkedProgram(ProgramObject);

impl Program {
    pub fn new(gl: Gl) -> Result<Self, GlError> {
        let handle = gl.create_program();
        if handle == NO_RESOURCE {
            return Err(GlError::Creation(ResourceKind::Program));
        }
        log::debug!("created program {handle}");
        Ok(Self(ProgramObject { gl, handle }))
    }

    /// Attaches both stages and links.
    ///
    /// On failure the link log is written at `error` level and the program object is
    /// released. Stages of the wrong kind are rejected without calling the driver.
    pub fn link(
        self,
        vertex: &CompiledStage,
        fragment: &CompiledStage,
    ) -> Result<LinkedProgram, GlError> {
        let Program(obj) = self;

        if vertex.kind() != StageKind::Vertex || fragment.kind() != StageKind::Fragment {
            log::error!(
                "program {} expects (vertex, fragment) stages, got ({}, {})",
                obj.handle,
                vertex.kind(),
                fragment.kind()
            );
            return Err(GlError::Link);
        }

        let gl: &dyn GlApi = &*obj.gl;
        gl.attach_shader(obj.handle, vertex.handle());
        gl.attach_shader(obj.handle, fragment.handle());
        gl.link_program(obj.handle);

        if !gl.program_link_status(obj.handle) {
            let info = gl.program_info_log(obj.handle);
            log::error!("program link log:\n{}", info.trim_end());
            return Err(GlError::Link);
        }

        Ok(LinkedProgram(obj))
    }

    pub fn handle(&self) -> RawHandle {
        self.0.handle
    }
}

impl LinkedProgram {
    /// Makes this the active program for subsequent uniform writes and draws.
    pub fn use_program(&self) {
        self.0.gl.use_program(self.0.handle);
    }

    /// Writes a uniform by name.
    ///
    /// Precondition: this program is in use. The location is looked up on every call;
    /// a name the driver does not resolve (unknown or optimized out) is a no-op, as it
    /// is for the driver itself.
    pub fn set_uniform<V: UniformValue>(&self, name: &str, value: V) {
        let gl: &dyn GlApi = &*self.0.gl;
        match gl.uniform_location(self.0.handle, name) {
            Some(location) => value.write(gl, location),
            None => log::trace!("program {}: no active uniform `{name}`", self.0.handle),
        }
    }

    pub fn handle(&self) -> RawHandle {
        self.0.handle
    }
}

impl fmt::Debug for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Program").field(&self.0.handle).finish()
    }
}

impl fmt::Debug for LinkedProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LinkedProgram").field(&self.0.handle).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::gl::recording::{RecordingGl, UniformWrite};
    use crate::shader::{ShaderStage, test_sources};

    fn stages(rec: &Rc<RecordingGl>) -> (CompiledStage, CompiledStage) {
        let v = ShaderStage::new(rec.clone(), StageKind::Vertex)
            .unwrap()
            .compile(test_sources::VERTEX)
            .unwrap();
        let f = ShaderStage::new(rec.clone(), StageKind::Fragment)
            .unwrap()
            .compile(test_sources::FRAGMENT)
            .unwrap();
        (v, f)
    }

    #[test]
    fn refused_allocation_is_a_creation_error() {
        let rec = Rc::new(RecordingGl::new());
        rec.refuse_allocations(true);

        let err = Program::new(rec.clone()).unwrap_err();
        assert!(matches!(err, GlError::Creation(ResourceKind::Program)));
        assert!(!rec.called("delete_program"));
    }

    #[test]
    fn link_attaches_both_stages() {
        let rec = Rc::new(RecordingGl::new());
        let (v, f) = stages(&rec);
        let program = Program::new(rec.clone()).unwrap();
        let p = program.handle();

        let linked = program.link(&v, &f).unwrap();

        let calls = rec.calls();
        assert!(calls.contains(&format!("attach_shader {p} {}", v.handle())));
        assert!(calls.contains(&format!("attach_shader {p} {}", f.handle())));
        assert!(calls.contains(&format!("link_program {p}")));
        assert_eq!(linked.handle(), p);
    }

    #[test]
    fn link_failure_releases_program() {
        let rec = Rc::new(RecordingGl::new());
        let (v, f) = stages(&rec);
        let program = Program::new(rec.clone()).unwrap();
        let p = program.handle();
        rec.fail_next_links(true);

        let err = program.link(&v, &f).unwrap_err();

        assert!(matches!(err, GlError::Link));
        assert!(!rec.is_live(p));
        // Stages belong to the caller and survive a failed link.
        assert!(rec.is_live(v.handle()));
        assert!(rec.is_live(f.handle()));
    }

    #[test]
    fn swapped_stages_are_rejected_before_linking() {
        let rec = Rc::new(RecordingGl::new());
        let (v, f) = stages(&rec);
        let program = Program::new(rec.clone()).unwrap();

        let err = program.link(&f, &v).unwrap_err();

        assert!(matches!(err, GlError::Link));
        assert!(!rec.called("link_program"));
    }

    #[test]
    fn uniforms_resolve_by_name_each_call() {
        let rec = Rc::new(RecordingGl::new());
        let (v, f) = stages(&rec);
        let linked = Program::new(rec.clone()).unwrap().link(&v, &f).unwrap();
        linked.use_program();

        linked.set_uniform("brightness", 0.5f32);
        linked.set_uniform("brightness", 0.75f32);
        linked.set_uniform("mode", 3i32);

        assert_eq!(rec.call_count("uniform_location"), 3);
        assert_eq!(rec.uniform("brightness"), Some(UniformWrite::Float(vec![0.75])));
        assert_eq!(rec.uniform("mode"), Some(UniformWrite::Int(3)));
    }

    #[test]
    fn unknown_uniform_is_a_silent_no_op() {
        let rec = Rc::new(RecordingGl::new());
        let (v, f) = stages(&rec);
        let linked = Program::new(rec.clone()).unwrap().link(&v, &f).unwrap();
        rec.clear_calls();

        linked.set_uniform("does_not_exist", 1.0f32);

        assert_eq!(
            rec.calls(),
            vec![format!("uniform_location {} does_not_exist", linked.handle())]
        );
        assert_eq!(rec.uniform("does_not_exist"), None);
    }
}
