use crate::gl::{Gl, GlError, NO_RESOURCE, RawHandle, ResourceKind};

use super::bind::{BindGuard, BindSlot};

/// Owned vertex array object.
pub struct VertexArray {
    gl: Gl,
    handle: RawHandle,
}

impl VertexArray {
    pub fn new(gl: Gl) -> Result<Self, GlError> {
        let handle = gl.create_vertex_array();
        if handle == NO_RESOURCE {
            return Err(GlError::Creation(ResourceKind::VertexArray));
        }
        log::debug!("created vertex array {handle}");
        Ok(Self { gl, handle })
    }

    /// Makes this the active vertex array. Attribute setup and draws issued
    /// afterwards record into / read from it.
    pub fn bind(&self) {
        self.gl.bind_vertex_array(self.handle);
    }

    /// Binds until the guard drops, then restores the previous vertex array.
    pub fn scoped_bind(&self) -> BindGuard<'_> {
        BindGuard::new(&*self.gl, BindSlot::VertexArray, self.handle)
    }

    /// Declares a float attribute of the currently bound array buffer.
    ///
    /// Precondition: this vertex array and the source buffer are bound.
    /// `stride` and `offset` are in bytes.
    pub fn attribute_f32(&self, index: u32, components: i32, stride: i32, offset: i32) {
        self.gl.vertex_attrib_pointer_f32(index, components, stride, offset);
        self.gl.enable_vertex_attrib_array(index);
    }

    /// Draws `count` vertices starting at `first`. Precondition: this array is bound.
    pub fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        self.gl.draw_arrays(mode, first, count);
    }

    pub fn handle(&self) -> RawHandle {
        self.handle
    }
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        log::debug!("releasing vertex array {}", self.handle);
        self.gl.delete_vertex_array(self.handle);
    }
}

impl std::fmt::Debug for VertexArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VertexArray").field("handle", &self.handle).finish()
    }
}
