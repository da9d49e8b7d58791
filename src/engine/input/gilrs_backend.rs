// Controller backend on top of gilrs
//
// gilrs only updates gamepad state while its event queue is drained, so the
// hub's `begin_tick` pumps events before any slot is polled. Gamepads get the
// lowest free slot when they connect and give it back when they disconnect.

use super::backend::{HapticActuator, InputBackend};
use super::controller::{ControllerSnapshot, GamepadButton};
use super::keyboard::KeyboardSnapshot;
use super::pointer::PointerSnapshot;
use super::InputError;
use gilrs::ff::{BaseEffect, BaseEffectType, Effect, EffectBuilder, Repeat, Replay, Ticks};
use gilrs::{Axis, Button, Event, EventType, GamepadId, Gilrs};
use glam::Vec2;
use log::{debug, info, warn};
use std::collections::HashMap;

/// Length of one rumble cycle; the effect repeats until replaced or dropped
const RUMBLE_CYCLE_MS: u32 = 100;

/// Every gilrs button that has a [`GamepadButton`] counterpart
const MAPPED_BUTTONS: [Button; 15] = [
    Button::South,
    Button::East,
    Button::West,
    Button::North,
    Button::DPadUp,
    Button::DPadDown,
    Button::DPadLeft,
    Button::DPadRight,
    Button::LeftTrigger,
    Button::RightTrigger,
    Button::LeftThumb,
    Button::RightThumb,
    Button::Start,
    Button::Select,
    Button::Mode,
];

/// Translate a gilrs button into our button set
///
/// Face buttons are positional (South is A, West is X). The analog triggers
/// (`LeftTrigger2`/`RightTrigger2`) are read as trigger values, not buttons.
pub fn map_button(button: Button) -> Option<GamepadButton> {
    match button {
        Button::South => Some(GamepadButton::A),
        Button::East => Some(GamepadButton::B),
        Button::West => Some(GamepadButton::X),
        Button::North => Some(GamepadButton::Y),
        Button::DPadUp => Some(GamepadButton::DPadUp),
        Button::DPadDown => Some(GamepadButton::DPadDown),
        Button::DPadLeft => Some(GamepadButton::DPadLeft),
        Button::DPadRight => Some(GamepadButton::DPadRight),
        Button::LeftTrigger => Some(GamepadButton::LeftShoulder),
        Button::RightTrigger => Some(GamepadButton::RightShoulder),
        Button::LeftThumb => Some(GamepadButton::LeftStick),
        Button::RightThumb => Some(GamepadButton::RightStick),
        Button::Start => Some(GamepadButton::Start),
        Button::Select => Some(GamepadButton::Back),
        Button::Mode => Some(GamepadButton::Guide),
        _ => None,
    }
}

/// Build a connected snapshot from gamepad readings
///
/// `pressed` answers for digital buttons, `axis` for stick and Z axes and
/// `button_value` for analog button values. Some drivers report triggers as
/// the `LeftZ`/`RightZ` axes and others as `LeftTrigger2`/`RightTrigger2`
/// button values, so the larger of the two is used.
pub fn read_snapshot(
    pressed: impl Fn(Button) -> bool,
    axis: impl Fn(Axis) -> f32,
    button_value: impl Fn(Button) -> f32,
) -> ControllerSnapshot {
    let left_stick = Vec2::new(axis(Axis::LeftStickX), axis(Axis::LeftStickY));
    let right_stick = Vec2::new(axis(Axis::RightStickX), axis(Axis::RightStickY));
    let left_trigger = button_value(Button::LeftTrigger2).max(axis(Axis::LeftZ));
    let right_trigger = button_value(Button::RightTrigger2).max(axis(Axis::RightZ));

    let mut snapshot = ControllerSnapshot::connected()
        .with_sticks(left_stick, right_stick)
        .with_triggers(left_trigger, right_trigger);

    for button in MAPPED_BUTTONS {
        if pressed(button) {
            if let Some(mapped) = map_button(button) {
                snapshot = snapshot.with_button(mapped);
            }
        }
    }

    snapshot
}

/// Convert a 0.0..=1.0 motor strength to a force feedback magnitude
pub fn motor_magnitude(strength: f32) -> u16 {
    if strength.is_nan() {
        return 0;
    }
    (strength.clamp(0.0, 1.0) * u16::MAX as f32).round() as u16
}

/// Slot numbers handed out to devices in connection order
#[derive(Debug, Clone)]
pub struct SlotAssignment<T> {
    slots: Vec<Option<T>>,
}

impl<T> Default for SlotAssignment<T> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<T: Copy + PartialEq> SlotAssignment<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Give `id` the lowest free slot
    /// An id that already holds a slot keeps it.
    pub fn assign(&mut self, id: T) -> usize {
        if let Some(slot) = self.slot_of(id) {
            return slot;
        }

        match self.slots.iter().position(Option::is_none) {
            Some(slot) => {
                self.slots[slot] = Some(id);
                slot
            }
            None => {
                self.slots.push(Some(id));
                self.slots.len() - 1
            }
        }
    }

    /// Free the slot held by `id`, returning it
    pub fn release(&mut self, id: T) -> Option<usize> {
        let slot = self.slot_of(id)?;
        self.slots[slot] = None;
        Some(slot)
    }

    /// Device currently in `slot`
    pub fn get(&self, slot: usize) -> Option<T> {
        self.slots.get(slot).copied().flatten()
    }

    pub fn slot_of(&self, id: T) -> Option<usize> {
        self.slots.iter().position(|held| *held == Some(id))
    }
}

/// Controllers and rumble through gilrs
///
/// Keyboard and pointer polls return empty snapshots; combine it with a
/// window backend (see [`super::desktop::DesktopBackend`]) for those.
pub struct GilrsBackend {
    gilrs: Gilrs,
    slots: SlotAssignment<GamepadId>,
    /// Running rumble effect per slot; dropping an effect stops it
    rumble: HashMap<usize, Effect>,
}

impl GilrsBackend {
    /// Open the platform gamepad API and claim slots for connected pads
    pub fn new() -> Result<Self, InputError> {
        let gilrs = Gilrs::new().map_err(|e| {
            warn!("Failed to initialize gilrs: {}", e);
            InputError::GamepadUnavailable(e.to_string())
        })?;

        let mut slots = SlotAssignment::new();
        for (id, gamepad) in gilrs.gamepads() {
            let slot = slots.assign(id);
            info!("Gamepad '{}' assigned to slot {}", gamepad.name(), slot);
        }

        Ok(Self {
            gilrs,
            slots,
            rumble: HashMap::new(),
        })
    }

    /// Drain the gilrs event queue, updating slot assignments
    pub fn pump_events(&mut self) {
        while let Some(Event { id, event, .. }) = self.gilrs.next_event() {
            match event {
                EventType::Connected => {
                    let slot = self.slots.assign(id);
                    info!("Gamepad {:?} assigned to slot {}", id, slot);
                }
                EventType::Disconnected => {
                    if let Some(slot) = self.slots.release(id) {
                        self.rumble.remove(&slot);
                        info!("Gamepad {:?} left slot {}", id, slot);
                    }
                }
                _ => {}
            }
        }
    }

    fn start_rumble(
        &mut self,
        id: GamepadId,
        left: f32,
        right: f32,
    ) -> Result<Effect, gilrs::ff::Error> {
        let scheduling = Replay {
            play_for: Ticks::from_ms(RUMBLE_CYCLE_MS),
            ..Default::default()
        };

        let effect = EffectBuilder::new()
            .add_effect(BaseEffect {
                kind: BaseEffectType::Strong {
                    magnitude: motor_magnitude(left),
                },
                scheduling,
                ..Default::default()
            })
            .add_effect(BaseEffect {
                kind: BaseEffectType::Weak {
                    magnitude: motor_magnitude(right),
                },
                scheduling,
                ..Default::default()
            })
            .repeat(Repeat::Infinitely)
            .gamepads(&[id])
            .finish(&mut self.gilrs)?;

        effect.play()?;
        Ok(effect)
    }
}

impl InputBackend for GilrsBackend {
    fn begin_tick(&mut self) {
        self.pump_events();
    }

    fn poll_keyboard(&mut self) -> KeyboardSnapshot {
        KeyboardSnapshot::new()
    }

    fn poll_pointer(&mut self) -> PointerSnapshot {
        PointerSnapshot::default()
    }

    fn poll_controller(&mut self, slot: usize) -> ControllerSnapshot {
        let Some(id) = self.slots.get(slot) else {
            return ControllerSnapshot::disconnected();
        };

        match self.gilrs.connected_gamepad(id) {
            Some(gamepad) => read_snapshot(
                |button| gamepad.is_pressed(button),
                |axis| gamepad.value(axis),
                |button| gamepad.button_data(button).map_or(0.0, |data| data.value()),
            ),
            None => ControllerSnapshot::disconnected(),
        }
    }
}

impl HapticActuator for GilrsBackend {
    fn set_motor_strength(&mut self, slot: usize, left: f32, right: f32) {
        // Replacing or removing the old effect stops it
        self.rumble.remove(&slot);

        if left <= 0.0 && right <= 0.0 {
            return;
        }

        let Some(id) = self.slots.get(slot) else {
            debug!("No gamepad in slot {}, dropping rumble", slot);
            return;
        };
        let supported = self
            .gilrs
            .connected_gamepad(id)
            .map_or(false, |gamepad| gamepad.is_ff_supported());
        if !supported {
            debug!("Gamepad in slot {} has no force feedback", slot);
            return;
        }

        match self.start_rumble(id, left, right) {
            Ok(effect) => {
                self.rumble.insert(slot, effect);
            }
            Err(e) => warn!("Failed to start rumble on slot {}: {}", slot, e),
        }
    }
}
