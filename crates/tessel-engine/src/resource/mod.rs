//! Single-owner wrappers over driver handles.
//!
//! Each wrapper acquires its handle on construction and releases it exactly once in
//! `Drop`. Wrappers are move-only; there is no `Clone`.
//!
//! Binding is context-global state. Operations documented as "binds" leave the
//! resource bound afterwards; callers bind again before issuing dependent calls if
//! anything else may have been bound in between. [`BindGuard`] scopes a binding and
//! restores the previous one.

mod bind;
mod buffer;
mod texture_handle;
mod vertex_array;

pub use bind::{BindGuard, BindSlot};
pub use buffer::{Buffer, BufferTarget, ElementBuffer, ElementTarget, VertexBuffer, VertexTarget};
pub use texture_handle::TextureHandle;
pub use vertex_array::VertexArray;
