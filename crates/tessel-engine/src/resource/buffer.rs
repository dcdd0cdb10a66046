use std::fmt;
use std::marker::PhantomData;

use bytemuck::Pod;

use crate::gl::{Gl, GlError, NO_RESOURCE, RawHandle, ResourceKind};

use super::bind::{BindGuard, BindSlot};

/// Binding target of a buffer type.
pub trait BufferTarget {
    const TARGET: u32;
    const KIND: ResourceKind;
}

/// `GL_ARRAY_BUFFER`: per-vertex attribute data.
#[derive(Debug)]
pub enum VertexTarget {}

/// `GL_ELEMENT_ARRAY_BUFFER`: index data.
#[derive(Debug)]
pub enum ElementTarget {}

impl BufferTarget for VertexTarget {
    const TARGET: u32 = glow::ARRAY_BUFFER;
    const KIND: ResourceKind = ResourceKind::VertexBuffer;
}

impl BufferTarget for ElementTarget {
    const TARGET: u32 = glow::ELEMENT_ARRAY_BUFFER;
    const KIND: ResourceKind = ResourceKind::ElementBuffer;
}

pub type VertexBuffer = Buffer<VertexTarget>;
pub type ElementBuffer = Buffer<ElementTarget>;

/// Owned buffer object bound to target `T`.
pub struct Buffer<T: BufferTarget> {
    gl: Gl,
    handle: RawHandle,
    /// Byte size of the last successful upload.
    size: Option<usize>,
    _target: PhantomData<T>,
}

impl<T: BufferTarget> Buffer<T> {
    pub fn new(gl: Gl) -> Result<Self, GlError> {
        let handle = gl.create_buffer();
        if handle == NO_RESOURCE {
            return Err(GlError::Creation(T::KIND));
        }
        log::debug!("created {} {handle}", T::KIND);
        Ok(Self {
            gl,
            handle,
            size: None,
            _target: PhantomData,
        })
    }

    pub fn bind(&self) {
        self.gl.bind_buffer(T::TARGET, self.handle);
    }

    /// Binds until the guard drops, then restores the previous buffer on this target.
    pub fn scoped_bind(&self) -> BindGuard<'_> {
        BindGuard::new(&*self.gl, BindSlot::Buffer(T::TARGET), self.handle)
    }

    /// Binds this buffer and replaces its contents with `data` (`STATIC_DRAW`).
    ///
    /// Empty input is rejected with [`GlError::NullData`] before any driver call.
    /// The buffer stays bound afterwards.
    pub fn load<V: Pod>(&mut self, data: &[V]) -> Result<(), GlError> {
        if data.is_empty() {
            return Err(GlError::NullData);
        }
        let bytes: &[u8] = bytemuck::cast_slice(data);

        self.bind();
        self.gl.buffer_data(T::TARGET, bytes, glow::STATIC_DRAW);
        self.size = Some(bytes.len());
        Ok(())
    }

    /// Binds this buffer and reads back the bytes of the last upload.
    ///
    /// Returns an empty vector if nothing has been loaded yet.
    pub fn read_back(&self) -> Vec<u8> {
        let Some(size) = self.size else {
            return Vec::new();
        };
        let mut out = vec![0u8; size];
        self.bind();
        self.gl.get_buffer_sub_data(T::TARGET, 0, &mut out);
        out
    }

    /// Byte size of the last upload, if any.
    pub fn size(&self) -> Option<usize> {
        self.size
    }

    pub fn handle(&self) -> RawHandle {
        self.handle
    }
}

impl<T: BufferTarget> Drop for Buffer<T> {
    fn drop(&mut self) {
        log::debug!("releasing {} {}", T::KIND, self.handle);
        self.gl.delete_buffer(self.handle);
    }
}

impl<T: BufferTarget> fmt::Debug for Buffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("target", &format_args!("{:#x}", T::TARGET))
            .field("handle", &self.handle)
            .field("size", &self.size)
            .finish()
    }
}
