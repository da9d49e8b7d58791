// Scripted backend for unit tests
//
// Tests set the snapshots the next poll should return and inspect the motor
// commands the trackers issued.

use super::backend::{HapticActuator, InputBackend};
use super::controller::ControllerSnapshot;
use super::keyboard::KeyboardSnapshot;
use super::pointer::PointerSnapshot;

/// Records every motor command in order
#[derive(Debug, Default)]
pub struct MotorLog {
    pub commands: Vec<(usize, f32, f32)>,
}

impl HapticActuator for MotorLog {
    fn set_motor_strength(&mut self, slot: usize, left: f32, right: f32) {
        self.commands.push((slot, left, right));
    }
}

/// Backend that returns whatever the test put in its fields
#[derive(Debug, Default)]
pub struct ScriptedBackend {
    pub keyboard: KeyboardSnapshot,
    pub pointer: PointerSnapshot,
    /// Slots without an entry poll as disconnected
    pub controllers: Vec<ControllerSnapshot>,
    pub motors: MotorLog,
    /// Devices polled so far, in order ("keyboard", "pointer", "controller N")
    pub poll_order: Vec<String>,
    /// Number of `begin_tick` calls
    pub ticks_begun: usize,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InputBackend for ScriptedBackend {
    fn begin_tick(&mut self) {
        self.ticks_begun += 1;
        self.poll_order.clear();
    }

    fn poll_keyboard(&mut self) -> KeyboardSnapshot {
        self.poll_order.push("keyboard".to_string());
        self.keyboard.clone()
    }

    fn poll_pointer(&mut self) -> PointerSnapshot {
        self.poll_order.push("pointer".to_string());
        self.pointer.clone()
    }

    fn poll_controller(&mut self, slot: usize) -> ControllerSnapshot {
        self.poll_order.push(format!("controller {}", slot));
        self.controllers.get(slot).cloned().unwrap_or_default()
    }
}

impl HapticActuator for ScriptedBackend {
    fn set_motor_strength(&mut self, slot: usize, left: f32, right: f32) {
        self.motors.set_motor_strength(slot, left, right);
    }
}
