//! Image decoding and sampled 2D textures.

pub(crate) mod loader;
mod sampled;

pub use loader::ImageLoader;
pub use sampled::Texture;
