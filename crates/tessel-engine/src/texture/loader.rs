use std::path::Path;

use image::{DynamicImage, ImageError, ImageReader};

use crate::gl::GlError;

/// Decoded image, bottom row first, 8 bits per channel.
///
/// Rows are flipped on load so the first row in [`data`](Self::data) is the bottom
/// of the picture, matching GL's texture origin. The native channel count (1–4) is
/// kept until [`conform`](Self::conform) is called.
#[derive(Debug)]
pub struct ImageLoader {
    image: DynamicImage,
}

impl ImageLoader {
    /// Decodes `path`. The format is sniffed from the file contents, so the extension
    /// does not matter. Missing files, unknown formats and corrupt data all map to
    /// [`GlError::ImageOpen`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GlError> {
        let path = path.as_ref();
        let decoded = decode(path).map_err(|source| GlError::ImageOpen {
            path: path.to_path_buf(),
            source,
        })?;
        let loader = Self::from_image(decoded);
        log::debug!(
            "decoded {} ({}x{}, {} channels)",
            path.display(),
            loader.width(),
            loader.height(),
            loader.channels()
        );
        Ok(loader)
    }

    /// Wraps an already decoded image, applying the same flip and 8-bit normalization
    /// as [`open`](Self::open).
    pub fn from_image(decoded: DynamicImage) -> Self {
        let flipped = decoded.flipv();
        let image = match flipped.color().channel_count() {
            1 => DynamicImage::ImageLuma8(flipped.into_luma8()),
            2 => DynamicImage::ImageLumaA8(flipped.into_luma_alpha8()),
            3 => DynamicImage::ImageRgb8(flipped.into_rgb8()),
            _ => DynamicImage::ImageRgba8(flipped.into_rgba8()),
        };
        Self { image }
    }

    /// Re-encodes the buffer to exactly `channels` (3 → RGB, anything else → RGBA).
    pub fn conform(&mut self, channels: u8) {
        if self.channels() == channels {
            return;
        }
        self.image = match channels {
            3 => DynamicImage::ImageRgb8(self.image.to_rgb8()),
            _ => DynamicImage::ImageRgba8(self.image.to_rgba8()),
        };
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn channels(&self) -> u8 {
        self.image.color().channel_count()
    }

    /// Tightly packed pixel rows, bottom row first.
    pub fn data(&self) -> &[u8] {
        self.image.as_bytes()
    }
}

fn decode(path: &Path) -> Result<DynamicImage, ImageError> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    reader.decode()
}
