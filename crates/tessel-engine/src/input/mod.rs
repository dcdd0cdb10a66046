//! Keyboard input.
//!
//! The public types do not mention winit; `platform::winit` translates window events
//! into [`InputEvent`]s which [`InputState`] folds into held-key state.

mod frame;
pub mod platform;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{InputEvent, Key, KeyState};
