//! Contract between the runtime loop and applications.
//!
//! Applications implement [`App`]; the runtime hands them a [`FrameCtx`] once per
//! presented frame.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
