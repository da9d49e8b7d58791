// Desktop backend: winit window events for keyboard and mouse, gilrs for
// controllers and rumble

use super::backend::{HapticActuator, InputBackend};
use super::controller::ControllerSnapshot;
use super::gilrs_backend::GilrsBackend;
use super::keyboard::KeyboardSnapshot;
use super::pointer::PointerSnapshot;
use super::winit_backend::WinitBackend;
use log::{info, warn};
use winit::event::WindowEvent;

/// Everything a windowed desktop app needs in one backend
///
/// If gilrs cannot start, controllers report disconnected and rumble is
/// dropped, the same as with a bare [`WinitBackend`].
pub struct DesktopBackend {
    window: WinitBackend,
    gamepads: Option<GilrsBackend>,
}

impl DesktopBackend {
    pub fn new() -> Self {
        let gamepads = match GilrsBackend::new() {
            Ok(gamepads) => {
                info!("Gamepad support enabled");
                Some(gamepads)
            }
            Err(e) => {
                warn!("{}, controllers will report disconnected", e);
                None
            }
        };
        Self::from_parts(WinitBackend::new(), gamepads)
    }

    pub fn from_parts(window: WinitBackend, gamepads: Option<GilrsBackend>) -> Self {
        Self { window, gamepads }
    }

    /// Forward a window event to the keyboard/mouse side
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        self.window.handle_window_event(event)
    }

    pub fn window(&self) -> &WinitBackend {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut WinitBackend {
        &mut self.window
    }

    pub fn has_gamepads(&self) -> bool {
        self.gamepads.is_some()
    }
}

impl Default for DesktopBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBackend for DesktopBackend {
    fn begin_tick(&mut self) {
        self.window.begin_tick();
        if let Some(gamepads) = &mut self.gamepads {
            gamepads.begin_tick();
        }
    }

    fn poll_keyboard(&mut self) -> KeyboardSnapshot {
        self.window.poll_keyboard()
    }

    fn poll_pointer(&mut self) -> PointerSnapshot {
        self.window.poll_pointer()
    }

    fn poll_controller(&mut self, slot: usize) -> ControllerSnapshot {
        match &mut self.gamepads {
            Some(gamepads) => gamepads.poll_controller(slot),
            None => self.window.poll_controller(slot),
        }
    }
}

impl HapticActuator for DesktopBackend {
    fn set_motor_strength(&mut self, slot: usize, left: f32, right: f32) {
        match &mut self.gamepads {
            Some(gamepads) => gamepads.set_motor_strength(slot, left, right),
            None => self.window.set_motor_strength(slot, left, right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::manager::InputHub;
    use glam::Vec2;
    use std::time::Duration;
    use winit::keyboard::KeyCode;

    fn window_only() -> DesktopBackend {
        DesktopBackend::from_parts(WinitBackend::new(), None)
    }

    #[test]
    fn test_keyboard_and_pointer_come_from_window() {
        let mut backend = window_only();
        backend.window_mut().key_changed(KeyCode::KeyE, true);
        backend.window_mut().cursor_moved(Vec2::new(3.0, 4.0));

        assert!(backend.poll_keyboard().keys().any(|key| key == KeyCode::KeyE));
        assert_eq!(backend.poll_pointer().position(), Vec2::new(3.0, 4.0));
        assert!(!backend.has_gamepads());
    }

    #[test]
    fn test_without_gamepads_controllers_are_disconnected() {
        let mut backend = window_only();
        for slot in 0..4 {
            assert!(!backend.poll_controller(slot).is_connected());
        }
    }

    #[test]
    fn test_hub_rumble_without_gamepads() {
        let mut hub = InputHub::new(window_only());
        hub.backend_mut().handle_window_event(&WindowEvent::Focused(false));
        assert!(hub.vibrate(0, 0.5, Duration::from_millis(32)).is_ok());

        hub.advance(Duration::from_millis(16));
        hub.advance(Duration::from_millis(16));
        assert!(!hub.controller(0).unwrap().vibration().is_active());
    }
}
