// Input backend fed by winit window events

use super::backend::{HapticActuator, InputBackend};
use super::controller::ControllerSnapshot;
use super::keyboard::KeyboardSnapshot;
use super::pointer::PointerSnapshot;
use glam::Vec2;
use std::collections::HashSet;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Pixel scroll (touchpads) is converted to wheel lines with this ratio
pub const PIXELS_PER_LINE: f32 = 20.0;

/// Builds keyboard and mouse snapshots from the window's event stream
///
/// Feed every `WindowEvent` to [`WinitBackend::handle_window_event`]; each
/// poll then returns the state accumulated so far. winit has no gamepad
/// support, so every controller slot reports disconnected and rumble
/// commands are only logged.
#[derive(Debug, Default)]
pub struct WinitBackend {
    keys: HashSet<KeyCode>,
    buttons: HashSet<MouseButton>,
    cursor: Vec2,
    /// Running wheel totals in lines (vertical, horizontal)
    scroll: Vec2,
}

impl WinitBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the accumulated state from a window event
    /// Returns true if the event was input this backend tracks
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                // Key repeats don't change the held state
                if event.repeat {
                    return true;
                }
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.key_changed(code, event.state == ElementState::Pressed);
                }
                true
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.button_changed(*button, *state == ElementState::Pressed);
                true
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(Vec2::new(position.x as f32, position.y as f32));
                true
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(x, y) => Vec2::new(*x, *y),
                    MouseScrollDelta::PixelDelta(pos) => {
                        Vec2::new(pos.x as f32, pos.y as f32) / PIXELS_PER_LINE
                    }
                };
                self.scrolled(lines);
                true
            }
            WindowEvent::Focused(false) => {
                self.release_all();
                true
            }
            _ => false,
        }
    }

    pub fn key_changed(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            self.keys.insert(key);
        } else {
            self.keys.remove(&key);
        }
    }

    pub fn button_changed(&mut self, button: MouseButton, pressed: bool) {
        if pressed {
            self.buttons.insert(button);
        } else {
            self.buttons.remove(&button);
        }
    }

    pub fn cursor_moved(&mut self, position: Vec2) {
        self.cursor = position;
    }

    /// Add wheel movement in lines (x = horizontal, y = vertical)
    pub fn scrolled(&mut self, lines: Vec2) {
        self.scroll += lines;
    }

    /// Release every key and button
    /// Releases that happen while the window is unfocused are never delivered
    pub fn release_all(&mut self) {
        self.keys.clear();
        self.buttons.clear();
    }
}

impl InputBackend for WinitBackend {
    fn poll_keyboard(&mut self) -> KeyboardSnapshot {
        KeyboardSnapshot::from_keys(self.keys.iter().copied())
    }

    fn poll_pointer(&mut self) -> PointerSnapshot {
        let mut snapshot =
            PointerSnapshot::new(self.cursor).with_scroll(self.scroll.y, self.scroll.x);
        for button in &self.buttons {
            snapshot = snapshot.with_button(*button);
        }
        snapshot
    }

    fn poll_controller(&mut self, _slot: usize) -> ControllerSnapshot {
        ControllerSnapshot::disconnected()
    }
}

impl HapticActuator for WinitBackend {
    fn set_motor_strength(&mut self, slot: usize, left: f32, right: f32) {
        log::debug!(
            "No rumble support: dropping motor command for slot {} ({}, {})",
            slot,
            left,
            right
        );
    }
}
