//! Frame timing.
//!
//! One [`FrameClock`] per render loop; `tick()` once per presented frame. Deltas are
//! reported in milliseconds because camera speeds are expressed per millisecond.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
