// Platform seams: where snapshots come from and where rumble goes

use super::controller::ControllerSnapshot;
use super::keyboard::KeyboardSnapshot;
use super::pointer::PointerSnapshot;

/// Source of raw device snapshots
///
/// Implementations must return a complete snapshot on every call without
/// blocking. A missing or unplugged device is reported as a neutral
/// (disconnected) snapshot, never as an error.
pub trait InputBackend {
    /// Called once per tick before any device is polled
    /// Backends that receive events from their own queue drain it here.
    fn begin_tick(&mut self) {}

    fn poll_keyboard(&mut self) -> KeyboardSnapshot;

    fn poll_pointer(&mut self) -> PointerSnapshot;

    /// Poll the controller in `slot` (0-based)
    fn poll_controller(&mut self, slot: usize) -> ControllerSnapshot;
}

/// Rumble motor output
pub trait HapticActuator {
    /// Set both rumble motors of the controller in `slot`
    ///
    /// Strengths are in 0.0..=1.0. Commands to a disconnected controller
    /// are silently dropped.
    fn set_motor_strength(&mut self, slot: usize, left: f32, right: f32);
}
