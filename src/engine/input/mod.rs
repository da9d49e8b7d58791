// Input state tracking
//
// Samples the keyboard, mouse and up to four controllers once per tick and
// keeps the previous sample, so game code can ask both "is it down?" and
// "was it pressed this tick?". Controllers also own a rumble timer that
// switches the motors off on its own.
//
// ## Architecture
//
// - `tracker`: Generic previous/current snapshot pair with edge detection
// - `keyboard`, `pointer`, `controller`: Per-device snapshots and trackers
// - `vibration`: Self-expiring rumble countdown
// - `backend`: Traits the platform layer implements (polling, rumble)
// - `winit_backend`: Backend built from winit window events
// - `gilrs_backend`: Controller polling and rumble through gilrs
// - `desktop`: winit keyboard/mouse plus gilrs controllers in one backend
// - `manager`: `InputHub`, which polls every device each tick
//
// ## Usage Example
//
// ```rust
// use rusted_input::engine::input::{DesktopBackend, InputHub, GamepadButton};
//
// let mut input = InputHub::new(DesktopBackend::new());
//
// // In your event loop, forward window events to the backend
// input.backend_mut().handle_window_event(&event);
//
// // Once per tick, take a new sample
// input.advance(frame_time);
//
// if input.keyboard().just_pressed(KeyCode::Space) {
//     // Space went down this tick
// }
// if input.controller(0)?.just_pressed(GamepadButton::A) {
//     input.vibrate(0, 0.5, Duration::from_millis(200))?;
// }
// ```

pub mod backend;
pub mod controller;
pub mod desktop;
pub mod gilrs_backend;
pub mod keyboard;
pub mod manager;
pub mod pointer;
pub mod tracker;
pub mod vibration;
pub mod winit_backend;

#[cfg(test)]
pub(crate) mod mock;

// Re-export commonly used types
pub use backend::{HapticActuator, InputBackend};
pub use controller::{ControllerSnapshot, ControllerTracker, GamepadButton};
pub use desktop::DesktopBackend;
pub use gilrs_backend::GilrsBackend;
pub use keyboard::{KeyboardSnapshot, KeyboardTracker};
pub use manager::{InputHub, DEFAULT_CONTROLLER_SLOTS};
pub use pointer::{PointerSnapshot, PointerTracker};
pub use tracker::{EdgeTracker, Snapshot};
pub use vibration::{VibrationState, VibrationTimer};
pub use winit_backend::WinitBackend;

/// Input errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Invalid controller slot: {slot} (hub has {slots} slots)")]
    InvalidSlot { slot: usize, slots: usize },

    #[error("Gamepad support unavailable: {0}")]
    GamepadUnavailable(String),
}
