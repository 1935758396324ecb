use log::info;
use nalgebra_glm as glm;

use crate::camera::{CameraState, OrbitControls};
use crate::model::GlobeModel;

use super::homing::{CameraHomer, HomingState};
use super::settle::RotationSettler;

/// Everything the renderer needs from one animation tick.
#[derive(Debug, Clone, Copy)]
pub struct FrameState {
    pub camera: CameraState,
    pub light_position: glm::Vec3,
}

/// Owns the camera and drives the two per-frame state machines.
///
/// The tick order is fixed: homing step, then the orbit controller's damped
/// update, then the light snaps to the camera, then the settle rotation.
/// Homing runs before anything the frame renders with, so a returning camera
/// never lags its own frame; the settle delta is applied to the model inside
/// the same tick for the same reason.
pub struct GlobeAnimator {
    camera: CameraState,
    home: Option<glm::Vec3>,
    light_position: glm::Vec3,
    settler: RotationSettler,
    homer: CameraHomer,
}

impl GlobeAnimator {
    pub fn new() -> Self {
        let camera = CameraState::default();
        Self {
            camera,
            home: None,
            light_position: camera.position,
            settler: RotationSettler::new(),
            homer: CameraHomer::new(),
        }
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn home(&self) -> Option<glm::Vec3> {
        self.home
    }

    pub fn settler(&self) -> &RotationSettler {
        &self.settler
    }

    pub fn homing_state(&self) -> HomingState {
        self.homer.state()
    }

    pub fn is_returning(&self) -> bool {
        self.homer.is_returning()
    }

    /// Record the current camera position as the return target. Called once,
    /// right after the globe is placed; homing is inert until then.
    pub fn capture_home(&mut self) {
        let p = self.camera.position;
        self.home = Some(p);
        info!("home position captured at ({:.2}, {:.2}, {:.2})", p.x, p.y, p.z);
    }

    /// Orbit drag began: homing yields immediately.
    pub fn on_interaction_start(&mut self) {
        self.homer.on_interaction_start();
    }

    /// Orbit drag ended: start returning on the next tick.
    pub fn on_interaction_end(&mut self) {
        self.homer.on_interaction_end();
    }

    /// Ask for the return-to-home animation (the reset-view control).
    pub fn request_return(&mut self) {
        self.homer.on_interaction_end();
    }

    /// Subscribe to the settle rotation's single-fire completion notice.
    pub fn on_settle_finishing(&mut self, f: impl FnOnce() + 'static) {
        self.settler.on_finishing(f);
    }

    /// One animation tick. The returned state is what this frame renders.
    pub fn tick(&mut self, orbit: &mut OrbitControls, globe: Option<&mut GlobeModel>) -> FrameState {
        // Homing first, so the returned frame reflects it with no lag.
        if let Some(home) = self.home {
            self.homer.step(&mut self.camera.position, &home);
        }

        // The orbit controller applies its damped pending rotation.
        orbit.update(&mut self.camera);

        // Headlight: illumination follows the camera.
        self.light_position = self.camera.position;

        // Settle rotation advances only once a globe exists.
        if let Some(globe) = globe {
            if let Some(delta) = self.settler.advance() {
                globe.apply_yaw(delta);
            }
        }

        FrameState {
            camera: self.camera,
            light_position: self.light_position,
        }
    }
}

impl Default for GlobeAnimator {
    fn default() -> Self {
        Self::new()
    }
}
