use std::f32::consts::{PI, TAU};

use nalgebra_glm as glm;

use super::state::CameraState;

/// Keeps the polar angle off the exact poles, where azimuth degenerates.
const POLAR_EPSILON: f32 = 1e-4;
/// Pending rotation smaller than this is treated as spent.
const REST_THRESHOLD: f32 = 1e-6;

/// Damped orbit input.
///
/// Drag deltas accumulate as pending yaw/pitch rotation; every tick `update`
/// applies a `damping_factor` fraction of the pending rotation to the camera
/// position (decomposed to spherical coordinates around the origin) and
/// decays the remainder, so motion eases out after the pointer stops or the
/// drag ends. Zoom is not handled; the orbit radius never changes.
pub struct OrbitControls {
    rotate_speed: f32,
    damping_factor: f32,
    dragging: bool,
    yaw_delta: f32,
    pitch_delta: f32,
}

impl OrbitControls {
    pub fn new(rotate_speed: f32, damping_factor: f32) -> Self {
        Self {
            rotate_speed,
            damping_factor,
            dragging: false,
            yaw_delta: 0.0,
            pitch_delta: 0.0,
        }
    }

    pub fn set_tuning(&mut self, rotate_speed: f32, damping_factor: f32) {
        self.rotate_speed = rotate_speed;
        self.damping_factor = damping_factor;
    }

    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Pointer moved by `dx`,`dy` pixels; `viewport_height` scales pixels to
    /// radians so a full-height drag is one turn times the rotate speed.
    pub fn apply_drag(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        if !self.dragging || viewport_height <= 0.0 {
            return;
        }
        let scale = TAU * self.rotate_speed / viewport_height;
        self.yaw_delta += dx * scale;
        self.pitch_delta += dy * scale;
    }

    /// Per-tick damped update. With no pending rotation this leaves the
    /// camera untouched, so autonomous animation ticks see exact positions.
    pub fn update(&mut self, camera: &mut CameraState) {
        if self.yaw_delta.abs() < REST_THRESHOLD && self.pitch_delta.abs() < REST_THRESHOLD {
            self.yaw_delta = 0.0;
            self.pitch_delta = 0.0;
            return;
        }

        let p = camera.position;
        let radius = glm::length(&p);
        if radius <= REST_THRESHOLD {
            return;
        }

        // Spherical decomposition, azimuth around +Y measured from +Z.
        let theta = p.x.atan2(p.z);
        let phi = (p.y / radius).clamp(-1.0, 1.0).acos();

        let theta = theta - self.yaw_delta * self.damping_factor;
        let phi = (phi - self.pitch_delta * self.damping_factor)
            .clamp(POLAR_EPSILON, PI - POLAR_EPSILON);

        camera.position = glm::vec3(
            radius * phi.sin() * theta.sin(),
            radius * phi.cos(),
            radius * phi.sin() * theta.cos(),
        );

        self.yaw_delta *= 1.0 - self.damping_factor;
        self.pitch_delta *= 1.0 - self.damping_factor;
    }
}
