use crate::gl::{Gl, GlApi, GlError, NO_RESOURCE, RawHandle, ResourceKind};

use super::bind::{BindGuard, BindSlot};

/// Owned 2D texture object (no storage or sampling state implied).
pub struct TextureHandle {
    gl: Gl,
    handle: RawHandle,
}

impl TextureHandle {
    pub fn new(gl: Gl) -> Result<Self, GlError> {
        let handle = gl.create_texture();
        if handle == NO_RESOURCE {
            return Err(GlError::Creation(ResourceKind::Texture));
        }
        log::debug!("created texture {handle}");
        Ok(Self { gl, handle })
    }

    /// Binds to `TEXTURE_2D` on the currently active texture unit.
    pub fn bind(&self) {
        self.gl.bind_texture(glow::TEXTURE_2D, self.handle);
    }

    pub fn scoped_bind(&self) -> BindGuard<'_> {
        BindGuard::new(&*self.gl, BindSlot::Texture2D, self.handle)
    }

    pub fn handle(&self) -> RawHandle {
        self.handle
    }

    pub(crate) fn gl(&self) -> &dyn GlApi {
        &*self.gl
    }
}

impl Drop for TextureHandle {
    fn drop(&mut self) {
        log::debug!("releasing texture {}", self.handle);
        self.gl.delete_texture(self.handle);
    }
}

impl std::fmt::Debug for TextureHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextureHandle").field("handle", &self.handle).finish()
    }
}
