// Keyboard snapshot and tracker

use super::tracker::{EdgeTracker, Snapshot};
use std::collections::HashSet;
use winit::keyboard::KeyCode;

/// Set of physical keys held down at one polling instant
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardSnapshot {
    keys: HashSet<KeyCode>,
}

impl KeyboardSnapshot {
    /// Create a snapshot with no keys held
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a snapshot from a list of held keys
    pub fn from_keys(keys: impl IntoIterator<Item = KeyCode>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Return a copy of this snapshot with one more key held
    pub fn with_key(mut self, key: KeyCode) -> Self {
        self.keys.insert(key);
        self
    }

    /// Iterate over every held key (no particular order)
    pub fn keys(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.keys.iter().copied()
    }

    /// Number of held keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check if no key is held
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl Snapshot for KeyboardSnapshot {
    type Element = KeyCode;

    fn is_active(&self, key: KeyCode) -> bool {
        self.keys.contains(&key)
    }
}

/// Keyboard state for the current and previous tick
pub type KeyboardTracker = EdgeTracker<KeyboardSnapshot>;

impl KeyboardTracker {
    /// Iterate over the keys held on this tick
    pub fn pressed_keys(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.current().keys()
    }
}
