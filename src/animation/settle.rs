use std::f32::consts::TAU;

use super::signal::OnceSignal;

/// Total settle rotation: one full turn.
pub const SETTLE_TARGET: f32 = TAU;
/// Gain applied to the remaining fraction; keeps the ease-out visibly quick
/// at the start without ever overshooting the target.
pub const EASE_GAIN: f32 = 5.0;
/// Base angular speed, radians per tick.
pub const BASE_SPEED: f32 = 0.05;
/// Remaining rotation below which the completion signal fires.
pub const NOTIFY_EPSILON: f32 = 0.1;
/// Remaining rotation treated as arrived; the orientation snaps to rest.
pub const SNAP_EPSILON: f32 = 1e-3;

// The signal must always precede the terminal snap.
const _: () = assert!(NOTIFY_EPSILON > SNAP_EPSILON);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettlePhase {
    /// Still turning, completion not yet announced.
    Running,
    /// Completion announced, closing the last fraction of a radian.
    Finishing,
    /// Terminal. Progress sits exactly on the target and never moves again.
    Complete,
}

/// One-shot ease-out rotation that brings the globe from its load-time
/// orientation to rest over a single full turn.
///
/// Each tick advances progress by `(1 - progress/target) * gain * speed`,
/// which works out to just under 4% of the remaining arc, so progress is
/// strictly increasing and bounded by the target until the snap lands it
/// there exactly.
pub struct RotationSettler {
    progress: f32,
    phase: SettlePhase,
    signal: OnceSignal,
}

impl RotationSettler {
    pub fn new() -> Self {
        Self {
            progress: 0.0,
            phase: SettlePhase::Running,
            signal: OnceSignal::new(),
        }
    }

    pub fn phase(&self) -> SettlePhase {
        self.phase
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_complete(&self) -> bool {
        self.phase == SettlePhase::Complete
    }

    /// Subscribe to the "rotation finishing" notification, delivered at most
    /// once, strictly before the settler reaches its terminal phase.
    pub fn on_finishing(&mut self, f: impl FnOnce() + 'static) {
        self.signal.subscribe(f);
    }

    /// Advance one tick. Returns the yaw delta to apply to the model this
    /// frame, or `None` once the settle is complete.
    pub fn advance(&mut self) -> Option<f32> {
        if self.phase == SettlePhase::Complete {
            return None;
        }

        let remaining = SETTLE_TARGET - self.progress;
        if remaining <= SNAP_EPSILON {
            // Close enough: land exactly on the rest pose and freeze.
            self.progress = SETTLE_TARGET;
            self.phase = SettlePhase::Complete;
            return Some(remaining);
        }

        if self.phase == SettlePhase::Running && remaining < NOTIFY_EPSILON {
            self.phase = SettlePhase::Finishing;
            self.signal.fire();
        }

        let factor = (1.0 - self.progress / SETTLE_TARGET) * EASE_GAIN;
        let delta = factor * BASE_SPEED;
        self.progress += delta;
        Some(delta)
    }
}

impl Default for RotationSettler {
    fn default() -> Self {
        Self::new()
    }
}
