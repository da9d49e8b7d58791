// Mouse snapshot and tracker

use super::tracker::{EdgeTracker, Snapshot};
use glam::Vec2;
use std::collections::HashSet;
use winit::event::MouseButton;

/// Mouse buttons, cursor position and scroll wheels at one polling instant
///
/// Scroll values are running totals since the backend started, not
/// per-tick amounts. Their sign follows the platform.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointerSnapshot {
    buttons: HashSet<MouseButton>,
    position: Vec2,
    scroll: f32,
    horizontal_scroll: f32,
}

impl PointerSnapshot {
    /// Create a snapshot with no buttons held at the given position
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Return a copy of this snapshot with one more button held
    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.buttons.insert(button);
        self
    }

    /// Return a copy of this snapshot with the given scroll totals
    pub fn with_scroll(mut self, vertical: f32, horizontal: f32) -> Self {
        self.scroll = vertical;
        self.horizontal_scroll = horizontal;
        self
    }

    /// Cursor position in window coordinates
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Vertical scroll wheel total
    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    /// Horizontal scroll wheel total
    pub fn horizontal_scroll(&self) -> f32 {
        self.horizontal_scroll
    }

    /// Iterate over every held button (no particular order)
    pub fn buttons(&self) -> impl Iterator<Item = MouseButton> + '_ {
        self.buttons.iter().copied()
    }
}

impl Snapshot for PointerSnapshot {
    type Element = MouseButton;

    fn is_active(&self, button: MouseButton) -> bool {
        self.buttons.contains(&button)
    }

    fn baseline(&self) -> Self {
        Self {
            buttons: HashSet::new(),
            ..self.clone()
        }
    }
}

/// Mouse state for the current and previous tick
pub type PointerTracker = EdgeTracker<PointerSnapshot>;

impl PointerTracker {
    /// Current cursor position
    pub fn position(&self) -> Vec2 {
        self.current().position
    }

    /// How far the cursor moved since the previous tick
    pub fn position_delta(&self) -> Vec2 {
        self.current().position - self.previous().position
    }

    /// Check if the cursor moved since the previous tick
    pub fn was_moved(&self) -> bool {
        self.position_delta() != Vec2::ZERO
    }

    /// Current vertical scroll total
    pub fn scroll(&self) -> f32 {
        self.current().scroll
    }

    /// Vertical scroll since the previous tick
    pub fn scroll_delta(&self) -> f32 {
        self.current().scroll - self.previous().scroll
    }

    /// Horizontal scroll since the previous tick
    pub fn horizontal_scroll_delta(&self) -> f32 {
        self.current().horizontal_scroll - self.previous().horizontal_scroll
    }
}
