// Self-expiring rumble timer for a single controller

use std::time::Duration;

/// Whether a controller's rumble motors should currently be running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VibrationState {
    /// No rumble pending
    Idle,
    /// Rumble running with time left on the timer
    Active,
}

/// Countdown for a rumble effect, driven by the caller's frame time
///
/// The timer only tracks time. Issuing motor commands is up to the owning
/// controller, which checks the return value of [`VibrationTimer::tick`].
/// Stopping the motors by hand does not touch the countdown, so a running
/// timer still reports its expiry later.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VibrationTimer {
    remaining: Duration,
    strength: f32,
}

impl VibrationTimer {
    /// Create an idle timer
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the countdown, replacing any running one
    /// A zero duration leaves the timer idle, so nothing will stop the motors
    pub fn arm(&mut self, strength: f32, duration: Duration) {
        self.remaining = duration;
        self.strength = strength;
    }

    /// Record that the motors were switched off; the countdown keeps going
    pub fn motors_stopped(&mut self) {
        self.strength = 0.0;
    }

    /// Advance the countdown by one frame
    /// Returns true only on the frame the timer runs out
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if self.remaining.is_zero() {
            return false;
        }

        self.remaining = self.remaining.saturating_sub(elapsed);
        if self.remaining.is_zero() {
            self.strength = 0.0;
            true
        } else {
            false
        }
    }

    /// Time left before the rumble stops on its own
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Strength last commanded to the motors (0.0 once stopped)
    pub fn strength(&self) -> f32 {
        self.strength
    }

    pub fn state(&self) -> VibrationState {
        if self.remaining.is_zero() {
            VibrationState::Idle
        } else {
            VibrationState::Active
        }
    }

    pub fn is_active(&self) -> bool {
        self.state() == VibrationState::Active
    }
}
