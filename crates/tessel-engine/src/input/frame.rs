use std::collections::HashSet;

use super::types::{InputEvent, Key};

/// Transitions seen since the last [`InputFrame::clear`].
///
/// [`InputState`](super::InputState) answers "is it held"; this answers "did it go
/// down this frame", which is what one-shot actions such as quitting want.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,

    pub keys_pressed: HashSet<Key>,
    pub keys_released: HashSet<Key>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.keys_pressed.clear();
        self.keys_released.clear();
    }

    pub fn pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }
}
