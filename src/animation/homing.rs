use nalgebra_glm as glm;

/// Distance divisor for the adaptive step factor.
pub const STEP_NORM: f32 = 200.0;
/// Step-factor floor so the tail of the return never stalls.
pub const STEP_FLOOR: f32 = 0.0015;
/// Distance to home below which the camera snaps onto the target.
pub const HOME_EPSILON: f32 = 0.02;

/// Squared length below which a vector has no usable direction.
const DEGENERATE: f32 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomingState {
    /// Not steering: either converged or the user is in control.
    Idle,
    /// Steering back toward the home position each tick.
    Returning,
}

/// Damped return-to-home camera motion.
///
/// While returning, each tick rotates the camera position a fraction of the
/// way toward the home position along a great-circle arc. The rotation axis
/// is the cross product of the toward-home direction and the negated current
/// position; the negated position stands in for the mirror point across the
/// origin, which keeps the arc on the camera's orbit sphere instead of
/// cutting through it. The step fraction shrinks with distance but is
/// floored, so the approach decays smoothly yet always lands within a
/// bounded number of ticks, finished off by an exact snap.
pub struct CameraHomer {
    state: HomingState,
}

impl CameraHomer {
    pub fn new() -> Self {
        Self {
            state: HomingState::Idle,
        }
    }

    pub fn state(&self) -> HomingState {
        self.state
    }

    pub fn is_returning(&self) -> bool {
        self.state == HomingState::Returning
    }

    /// User grabbed the globe: stop steering immediately.
    pub fn on_interaction_start(&mut self) {
        self.state = HomingState::Idle;
    }

    /// User let go: resume steering on the next tick.
    pub fn on_interaction_end(&mut self) {
        self.state = HomingState::Returning;
    }

    /// One homing step. No-op unless returning; on arrival snaps `position`
    /// exactly onto `home` and goes idle. Degenerate geometry (zero-length
    /// position or a toward-home direction parallel to the radial line)
    /// skips the step rather than produce a NaN axis.
    pub fn step(&mut self, position: &mut glm::Vec3, home: &glm::Vec3) {
        if self.state != HomingState::Returning {
            return;
        }

        let distance = glm::distance(home, position);
        if distance <= HOME_EPSILON {
            // Arrived: clear the residual floating error and stop.
            *position = *home;
            self.state = HomingState::Idle;
            return;
        }

        if position.norm_squared() <= DEGENERATE {
            return;
        }

        let direction = glm::normalize(&(home - *position));
        let radial = glm::normalize(position);
        let angle = glm::angle(&direction, &radial);

        let axis = glm::cross(&direction, &-*position);
        if axis.norm_squared() <= DEGENERATE {
            // Toward-home is collinear with the position (antipodal or
            // origin-crossing): no unique arc to follow this tick.
            return;
        }

        let step = (distance / STEP_NORM).max(STEP_FLOOR);
        *position = glm::rotate_vec3(position, angle * step, &axis);
    }
}

impl Default for CameraHomer {
    fn default() -> Self {
        Self::new()
    }
}
