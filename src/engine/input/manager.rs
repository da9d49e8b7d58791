// Input hub - Polls every device once per tick and owns all trackers

use super::backend::{HapticActuator, InputBackend};
use super::controller::ControllerTracker;
use super::keyboard::KeyboardTracker;
use super::pointer::PointerTracker;
use super::InputError;
use log::info;
use std::time::Duration;

/// Number of controller slots a hub gets from [`InputHub::new`]
pub const DEFAULT_CONTROLLER_SLOTS: usize = 4;

/// Keyboard, mouse and controller state for the whole application
///
/// Create one at startup and call [`InputHub::advance`] once per tick. All
/// queries between two advances see the same pair of snapshots.
pub struct InputHub<B: InputBackend + HapticActuator> {
    /// Platform layer that produces snapshots and drives rumble motors
    backend: B,

    keyboard: KeyboardTracker,

    pointer: PointerTracker,

    /// One tracker per slot, index == slot number
    controllers: Vec<ControllerTracker>,
}

impl<B: InputBackend + HapticActuator> InputHub<B> {
    /// Create a hub with the default 4 controller slots
    pub fn new(backend: B) -> Self {
        Self::with_slots(backend, DEFAULT_CONTROLLER_SLOTS)
    }

    /// Create a hub with `slots` controller slots
    /// Every device is polled once so the first tick has real data
    pub fn with_slots(mut backend: B, slots: usize) -> Self {
        backend.begin_tick();
        let keyboard = KeyboardTracker::new(backend.poll_keyboard());
        let pointer = PointerTracker::new(backend.poll_pointer());

        let mut controllers = Vec::with_capacity(slots);
        for slot in 0..slots {
            controllers.push(ControllerTracker::new(slot, backend.poll_controller(slot)));
        }

        info!("Input hub created with {} controller slots", slots);

        Self {
            backend,
            keyboard,
            pointer,
            controllers,
        }
    }

    /// Poll every device and tick rumble timers
    ///
    /// Devices are handled in a fixed order: keyboard, pointer, then
    /// controllers by slot. Call once per tick with the time since the
    /// previous call.
    pub fn advance(&mut self, elapsed: Duration) {
        self.backend.begin_tick();

        let keyboard = self.backend.poll_keyboard();
        self.keyboard.advance(keyboard);

        let pointer = self.backend.poll_pointer();
        self.pointer.advance(pointer);

        for controller in &mut self.controllers {
            let snapshot = self.backend.poll_controller(controller.slot());
            controller.advance(snapshot);
            controller.on_advance(elapsed, &mut self.backend);
        }
    }

    /// Get keyboard state
    pub fn keyboard(&self) -> &KeyboardTracker {
        &self.keyboard
    }

    /// Get mouse state
    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    /// Get the controller in a specific slot
    pub fn controller(&self, slot: usize) -> Result<&ControllerTracker, InputError> {
        self.controllers.get(slot).ok_or(InputError::InvalidSlot {
            slot,
            slots: self.controllers.len(),
        })
    }

    /// Iterate over all controller slots in order
    pub fn controllers(&self) -> impl Iterator<Item = &ControllerTracker> {
        self.controllers.iter()
    }

    /// Rumble a controller at `strength` (0.0-1.0) for `duration`
    pub fn vibrate(
        &mut self,
        slot: usize,
        strength: f32,
        duration: Duration,
    ) -> Result<(), InputError> {
        let slots = self.controllers.len();
        let controller = self
            .controllers
            .get_mut(slot)
            .ok_or(InputError::InvalidSlot { slot, slots })?;
        controller.set_vibration(strength, duration, &mut self.backend);
        Ok(())
    }

    /// Stop a controller's rumble immediately
    pub fn stop_vibration(&mut self, slot: usize) -> Result<(), InputError> {
        let slots = self.controllers.len();
        let controller = self
            .controllers
            .get_mut(slot)
            .ok_or(InputError::InvalidSlot { slot, slots })?;
        controller.stop_vibration(&mut self.backend);
        Ok(())
    }

    /// Stop rumble on every slot (e.g. on pause or shutdown)
    pub fn stop_all_vibration(&mut self) {
        for controller in &mut self.controllers {
            controller.stop_vibration(&mut self.backend);
        }
    }

    /// Get the number of controller slots
    pub fn slot_count(&self) -> usize {
        self.controllers.len()
    }

    /// Get the platform backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Get mutable platform backend (to feed it window events)
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

impl<B: InputBackend + HapticActuator + Default> Default for InputHub<B> {
    fn default() -> Self {
        Self::new(B::default()) // Default to 4 controllers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::controller::{ControllerSnapshot, GamepadButton};
    use crate::engine::input::keyboard::KeyboardSnapshot;
    use crate::engine::input::mock::ScriptedBackend;
    use crate::engine::input::pointer::PointerSnapshot;
    use glam::Vec2;
    use winit::event::MouseButton;
    use winit::keyboard::KeyCode;

    const TICK: Duration = Duration::from_millis(16);

    #[test]
    fn test_hub_creation() {
        let hub = InputHub::new(ScriptedBackend::new());
        assert_eq!(hub.slot_count(), 4);
        assert!(hub.controller(0).is_ok());
        assert!(hub.controller(3).is_ok());
        assert!(hub.controller(4).is_err());
    }

    #[test]
    fn test_creation_polls_every_device_once() {
        let hub = InputHub::with_slots(ScriptedBackend::new(), 2);
        assert_eq!(
            hub.backend().poll_order,
            vec!["keyboard", "pointer", "controller 0", "controller 1"]
        );
    }

    #[test]
    fn test_advance_order_is_fixed() {
        let mut hub = InputHub::new(ScriptedBackend::new());
        hub.advance(TICK);

        assert_eq!(
            hub.backend().poll_order,
            vec![
                "keyboard",
                "pointer",
                "controller 0",
                "controller 1",
                "controller 2",
                "controller 3"
            ]
        );
    }

    #[test]
    fn test_backend_tick_begins_before_polls() {
        let mut hub = InputHub::with_slots(ScriptedBackend::new(), 1);
        assert_eq!(hub.backend().ticks_begun, 1);

        hub.advance(TICK);
        hub.advance(TICK);
        assert_eq!(hub.backend().ticks_begun, 3);
        // The mock clears its log on every begin_tick
        assert_eq!(hub.backend().poll_order.len(), 3);
    }

    #[test]
    fn test_first_poll_counts_as_press() {
        let mut backend = ScriptedBackend::new();
        backend.keyboard = KeyboardSnapshot::from_keys([KeyCode::Space]);
        let hub = InputHub::new(backend);

        assert!(hub.keyboard().just_pressed(KeyCode::Space));
        assert!(!hub.keyboard().was_down(KeyCode::Space));
    }

    #[test]
    fn test_advance_drives_all_devices() {
        let mut hub = InputHub::new(ScriptedBackend::new());

        hub.backend_mut().keyboard = KeyboardSnapshot::from_keys([KeyCode::KeyW]);
        hub.backend_mut().pointer =
            PointerSnapshot::new(Vec2::new(4.0, 2.0)).with_button(MouseButton::Left);
        hub.backend_mut().controllers = vec![
            ControllerSnapshot::disconnected(),
            ControllerSnapshot::connected().with_button(GamepadButton::Start),
        ];
        hub.advance(TICK);

        assert!(hub.keyboard().just_pressed(KeyCode::KeyW));
        assert!(hub.pointer().just_pressed(MouseButton::Left));
        assert_eq!(hub.pointer().position_delta(), Vec2::new(4.0, 2.0));
        assert!(!hub.controller(0).unwrap().is_connected());

        let pad = hub.controller(1).unwrap();
        assert!(pad.just_connected());
        assert!(pad.just_pressed(GamepadButton::Start));
    }

    #[test]
    fn test_disconnected_slots_report_neutral() {
        let mut hub = InputHub::new(ScriptedBackend::new());
        hub.advance(TICK);

        for pad in hub.controllers() {
            assert!(!pad.is_connected());
            assert!(!pad.is_button_down(GamepadButton::A));
            assert_eq!(pad.left_stick(), Vec2::ZERO);
            assert_eq!(pad.left_trigger(), 0.0);
        }
    }

    #[test]
    fn test_vibrate_invalid_slot() {
        let mut hub = InputHub::new(ScriptedBackend::new());
        let result = hub.vibrate(4, 1.0, Duration::from_millis(100));

        assert_eq!(result, Err(InputError::InvalidSlot { slot: 4, slots: 4 }));
        assert!(hub.backend().motors.commands.is_empty());
    }

    #[test]
    fn test_stop_vibration_invalid_slot() {
        let mut hub = InputHub::with_slots(ScriptedBackend::new(), 2);
        assert!(matches!(
            hub.stop_vibration(2),
            Err(InputError::InvalidSlot { slot: 2, slots: 2 })
        ));
    }

    #[test]
    fn test_vibration_expires_through_advance() {
        let mut hub = InputHub::new(ScriptedBackend::new());
        hub.vibrate(1, 0.75, Duration::from_millis(40)).unwrap();
        assert_eq!(hub.backend().motors.commands, vec![(1, 0.75, 0.75)]);

        hub.advance(TICK);
        hub.advance(TICK);
        assert!(hub.controller(1).unwrap().vibration().is_active());

        hub.advance(TICK);
        assert!(!hub.controller(1).unwrap().vibration().is_active());
        assert_eq!(
            hub.backend().motors.commands,
            vec![(1, 0.75, 0.75), (1, 0.0, 0.0)]
        );

        hub.advance(TICK);
        assert_eq!(hub.backend().motors.commands.len(), 2);
    }

    #[test]
    fn test_vibration_is_per_slot() {
        let mut hub = InputHub::new(ScriptedBackend::new());
        hub.vibrate(0, 1.0, Duration::from_millis(500)).unwrap();
        hub.vibrate(2, 0.5, Duration::from_millis(10)).unwrap();
        hub.advance(TICK);

        assert!(hub.controller(0).unwrap().vibration().is_active());
        assert!(!hub.controller(2).unwrap().vibration().is_active());
        assert_eq!(hub.backend().motors.commands.last(), Some(&(2, 0.0, 0.0)));
    }

    #[test]
    fn test_stop_all_vibration() {
        let mut hub = InputHub::with_slots(ScriptedBackend::new(), 3);
        hub.vibrate(0, 1.0, Duration::from_secs(1)).unwrap();
        hub.vibrate(2, 1.0, Duration::from_secs(1)).unwrap();
        hub.stop_all_vibration();

        assert!(hub.controllers().all(|pad| pad.vibration().strength() == 0.0));
        let stops: Vec<usize> = hub
            .backend()
            .motors
            .commands
            .iter()
            .filter(|(_, left, right)| *left == 0.0 && *right == 0.0)
            .map(|(slot, _, _)| *slot)
            .collect();
        assert_eq!(stops, vec![0, 1, 2]);

        // Running timers still send their own stop when they expire
        hub.advance(Duration::from_secs(1));
        let late = hub.backend().motors.commands.len();
        hub.advance(Duration::from_secs(1));
        assert_eq!(hub.backend().motors.commands.len(), late);
        assert!(hub.controllers().all(|pad| !pad.vibration().is_active()));
    }

    #[test]
    fn test_default_hub() {
        let hub: InputHub<ScriptedBackend> = InputHub::default();
        assert_eq!(hub.slot_count(), DEFAULT_CONTROLLER_SLOTS);
    }
}
