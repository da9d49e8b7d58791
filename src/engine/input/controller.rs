// Per-slot controller state: buttons, sticks, triggers and rumble

use super::backend::HapticActuator;
use super::tracker::{EdgeTracker, Snapshot};
use super::vibration::VibrationTimer;
use glam::Vec2;
use log::{debug, info, warn};
use std::collections::HashSet;
use std::time::Duration;

/// Digital buttons on a standard dual-stick controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamepadButton {
    // Face buttons (Xbox layout names)
    A,
    B,
    X,
    Y,

    // Directional pad
    DPadUp,
    DPadDown,
    DPadLeft,
    DPadRight,

    // Shoulders (digital, not the analog triggers)
    LeftShoulder,
    RightShoulder,

    // Stick clicks
    LeftStick,
    RightStick,

    // Meta
    Start,
    Back,
    Guide,
}

/// Raw state of one controller at a single polling instant
///
/// Stick components are kept in -1.0..=1.0 and triggers in 0.0..=1.0.
/// The default value is a disconnected controller with everything at rest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControllerSnapshot {
    buttons: HashSet<GamepadButton>,
    left_stick: Vec2,
    right_stick: Vec2,
    left_trigger: f32,
    right_trigger: f32,
    connected: bool,
}

impl ControllerSnapshot {
    /// A connected controller with nothing pressed and sticks centred
    pub fn connected() -> Self {
        Self {
            connected: true,
            ..Self::default()
        }
    }

    /// A controller that is not plugged in
    pub fn disconnected() -> Self {
        Self::default()
    }

    /// Return a copy of this snapshot with one more button held
    pub fn with_button(mut self, button: GamepadButton) -> Self {
        self.buttons.insert(button);
        self
    }

    /// Return a copy of this snapshot with the given stick positions
    pub fn with_sticks(mut self, left: Vec2, right: Vec2) -> Self {
        self.left_stick = left.clamp(Vec2::NEG_ONE, Vec2::ONE);
        self.right_stick = right.clamp(Vec2::NEG_ONE, Vec2::ONE);
        self
    }

    /// Return a copy of this snapshot with the given trigger pulls
    pub fn with_triggers(mut self, left: f32, right: f32) -> Self {
        self.left_trigger = left.clamp(0.0, 1.0);
        self.right_trigger = right.clamp(0.0, 1.0);
        self
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn left_stick(&self) -> Vec2 {
        self.left_stick
    }

    pub fn right_stick(&self) -> Vec2 {
        self.right_stick
    }

    pub fn left_trigger(&self) -> f32 {
        self.left_trigger
    }

    pub fn right_trigger(&self) -> f32 {
        self.right_trigger
    }

    /// Iterate over every held button (no particular order)
    pub fn buttons(&self) -> impl Iterator<Item = GamepadButton> + '_ {
        self.buttons.iter().copied()
    }
}

impl Snapshot for ControllerSnapshot {
    type Element = GamepadButton;

    fn is_active(&self, button: GamepadButton) -> bool {
        self.buttons.contains(&button)
    }
}

/// Input and rumble state for the controller in one slot
#[derive(Debug, Clone)]
pub struct ControllerTracker {
    /// Slot index (0-3 for the usual 4 controllers)
    slot: usize,

    /// Current and previous snapshot
    state: EdgeTracker<ControllerSnapshot>,

    /// Countdown that stops the rumble motors
    vibration: VibrationTimer,
}

impl ControllerTracker {
    /// Create a tracker for `slot` from its first poll
    pub fn new(slot: usize, initial: ControllerSnapshot) -> Self {
        let tracker = Self {
            slot,
            state: EdgeTracker::new(initial),
            vibration: VibrationTimer::new(),
        };

        // Already plugged in, so this is the connect edge too
        if tracker.just_connected() {
            info!("Controller {} connected", slot);
        }

        tracker
    }

    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Push a freshly polled snapshot
    pub fn advance(&mut self, next: ControllerSnapshot) {
        self.state.advance(next);

        if self.just_connected() {
            info!("Controller {} connected", self.slot);
        } else if self.just_disconnected() {
            info!("Controller {} disconnected", self.slot);
        }
    }

    /// Count down the rumble timer, stopping the motors when it runs out
    /// Call once per tick, after `advance`
    pub fn on_advance<H: HapticActuator + ?Sized>(&mut self, elapsed: Duration, haptics: &mut H) {
        if self.vibration.tick(elapsed) {
            debug!("Controller {} vibration expired", self.slot);
            haptics.set_motor_strength(self.slot, 0.0, 0.0);
        }
    }

    /// Snapshot from the latest poll
    pub fn current(&self) -> &ControllerSnapshot {
        self.state.current()
    }

    /// Snapshot from the poll before the latest one
    pub fn previous(&self) -> &ControllerSnapshot {
        self.state.previous()
    }

    pub fn is_connected(&self) -> bool {
        self.current().is_connected()
    }

    /// Check if the controller was plugged in since the previous tick
    pub fn just_connected(&self) -> bool {
        self.current().is_connected() && !self.previous().is_connected()
    }

    /// Check if the controller was unplugged since the previous tick
    pub fn just_disconnected(&self) -> bool {
        !self.current().is_connected() && self.previous().is_connected()
    }

    pub fn is_button_down(&self, button: GamepadButton) -> bool {
        self.state.is_down(button)
    }

    pub fn is_button_up(&self, button: GamepadButton) -> bool {
        self.state.is_up(button)
    }

    pub fn was_button_down(&self, button: GamepadButton) -> bool {
        self.state.was_down(button)
    }

    /// Check if a button went from up to down on this tick
    pub fn just_pressed(&self, button: GamepadButton) -> bool {
        self.state.just_pressed(button)
    }

    /// Check if a button went from down to up on this tick
    pub fn just_released(&self, button: GamepadButton) -> bool {
        self.state.just_released(button)
    }

    /// Raw left stick position, no dead zone applied
    pub fn left_stick(&self) -> Vec2 {
        self.current().left_stick()
    }

    /// Raw right stick position, no dead zone applied
    pub fn right_stick(&self) -> Vec2 {
        self.current().right_stick()
    }

    pub fn left_trigger(&self) -> f32 {
        self.current().left_trigger()
    }

    pub fn right_trigger(&self) -> f32 {
        self.current().right_trigger()
    }

    /// Rumble countdown for this controller
    pub fn vibration(&self) -> &VibrationTimer {
        &self.vibration
    }

    /// Run both motors at `strength` for `duration`
    ///
    /// Replaces any rumble already running. Strength is clamped to 0.0..=1.0.
    /// With a zero duration the timer stays idle, so the motors keep running
    /// until `stop_vibration` or the next `set_vibration`.
    pub fn set_vibration<H: HapticActuator + ?Sized>(
        &mut self,
        strength: f32,
        duration: Duration,
        haptics: &mut H,
    ) {
        let clamped = if strength.is_nan() {
            0.0
        } else {
            strength.clamp(0.0, 1.0)
        };
        if clamped != strength {
            warn!(
                "Controller {} vibration strength {} out of range, using {}",
                self.slot, strength, clamped
            );
        }

        debug!(
            "Controller {} vibrating at {} for {:?}",
            self.slot, clamped, duration
        );
        self.vibration.arm(clamped, duration);
        haptics.set_motor_strength(self.slot, clamped, clamped);
    }

    /// Stop both motors now
    ///
    /// A running countdown is left alone and sends one more (0, 0) when it
    /// runs out.
    pub fn stop_vibration<H: HapticActuator + ?Sized>(&mut self, haptics: &mut H) {
        self.vibration.motors_stopped();
        haptics.set_motor_strength(self.slot, 0.0, 0.0);
    }
}
