use std::path::Path;

use crate::gl::{Gl, GlError, RawHandle};
use crate::resource::TextureHandle;

use super::loader::ImageLoader;

/// Sampled 2D texture with a full mipmap chain.
///
/// Sampling policy is fixed: `REPEAT` wrap on both axes, `LINEAR` min and mag filters.
#[derive(Debug)]
pub struct Texture {
    handle: TextureHandle,
    width: u32,
    height: u32,
    channels: u8,
    has_alpha: bool,
}

impl Texture {
    /// Decodes `path` and uploads it. `has_alpha` selects `RGBA` over `RGB`.
    pub fn new(gl: Gl, path: impl AsRef<Path>, has_alpha: bool) -> Result<Self, GlError> {
        let image = ImageLoader::open(path)?;
        Self::from_image(gl, image, has_alpha)
    }

    /// Uploads an already decoded image; the loader is consumed and its buffer freed
    /// once the upload returns.
    pub fn from_image(gl: Gl, mut image: ImageLoader, has_alpha: bool) -> Result<Self, GlError> {
        let handle = TextureHandle::new(gl)?;
        handle.bind();

        let gl = handle.gl();
        let target = glow::TEXTURE_2D;
        gl.tex_parameter_i32(target, glow::TEXTURE_WRAP_S, glow::REPEAT as i32);
        gl.tex_parameter_i32(target, glow::TEXTURE_WRAP_T, glow::REPEAT as i32);
        gl.tex_parameter_i32(target, glow::TEXTURE_MIN_FILTER, glow::LINEAR as i32);
        gl.tex_parameter_i32(target, glow::TEXTURE_MAG_FILTER, glow::LINEAR as i32);

        let (format, channels) = if has_alpha {
            (glow::RGBA, 4)
        } else {
            (glow::RGB, 3)
        };
        image.conform(channels);

        let (width, height) = (image.width(), image.height());
        // RGB rows are not 4-byte aligned in general. The GL default of 4 is put back below.
        gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 1);
        gl.tex_image_2d(
            target,
            0,
            format as i32,
            width as i32,
            height as i32,
            format,
            glow::UNSIGNED_BYTE,
            image.data(),
        );
        gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 4);
        gl.generate_mipmap(target);
        drop(image);

        log::debug!(
            "texture {} uploaded ({width}x{height}, {})",
            handle.handle(),
            if has_alpha { "rgba" } else { "rgb" }
        );

        Ok(Self {
            handle,
            width,
            height,
            channels,
            has_alpha,
        })
    }

    /// Binds on the currently active texture unit; unit selection is up to the caller.
    pub fn bind(&self) {
        self.handle.bind();
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn has_alpha(&self) -> bool {
        self.has_alpha
    }

    pub fn handle(&self) -> RawHandle {
        self.handle.handle()
    }
}
