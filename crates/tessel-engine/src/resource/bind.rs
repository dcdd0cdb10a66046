use crate::gl::{GlApi, RawHandle};

/// Binding point a guard restores.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BindSlot {
    VertexArray,
    Buffer(u32),
    Texture2D,
}

impl BindSlot {
    /// `glGetIntegerv` query naming the object currently bound to this slot.
    fn query(self) -> u32 {
        match self {
            BindSlot::VertexArray => glow::VERTEX_ARRAY_BINDING,
            BindSlot::Buffer(glow::ELEMENT_ARRAY_BUFFER) => glow::ELEMENT_ARRAY_BUFFER_BINDING,
            BindSlot::Buffer(_) => glow::ARRAY_BUFFER_BINDING,
            BindSlot::Texture2D => glow::TEXTURE_BINDING_2D,
        }
    }

    pub(crate) fn bind(self, gl: &dyn GlApi, handle: RawHandle) {
        match self {
            BindSlot::VertexArray => gl.bind_vertex_array(handle),
            BindSlot::Buffer(target) => gl.bind_buffer(target, handle),
            BindSlot::Texture2D => gl.bind_texture(glow::TEXTURE_2D, handle),
        }
    }
}

/// Scoped binding: binds on creation and rebinds the previous object on drop.
///
/// Borrows the wrapper it was created from, so that resource cannot be dropped
/// while the guard is alive.
pub struct BindGuard<'a> {
    gl: &'a dyn GlApi,
    slot: BindSlot,
    previous: RawHandle,
}

impl<'a> BindGuard<'a> {
    pub(crate) fn new(gl: &'a dyn GlApi, slot: BindSlot, handle: RawHandle) -> Self {
        let previous = gl.get_parameter_i32(slot.query()) as RawHandle;
        slot.bind(gl, handle);
        Self {
            gl,
            slot,
            previous,
        }
    }

    /// Name that was bound before this guard and is restored on drop.
    pub fn previous(&self) -> RawHandle {
        self.previous
    }
}

impl Drop for BindGuard<'_> {
    fn drop(&mut self) {
        self.slot.bind(self.gl, self.previous);
    }
}
