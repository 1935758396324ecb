use nalgebra_glm as glm;

/// Perspective camera looking at the origin, Y-up.
#[derive(Debug, Clone, Copy)]
pub struct CameraState {
    pub position: glm::Vec3,
    pub fov_y_deg: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl CameraState {
    pub fn view(&self) -> glm::Mat4 {
        glm::look_at(
            &self.position,
            &glm::vec3(0.0, 0.0, 0.0),
            &glm::vec3(0.0, 1.0, 0.0),
        )
    }

    pub fn projection(&self, aspect: f32) -> glm::Mat4 {
        glm::perspective(aspect, self.fov_y_deg.to_radians(), self.z_near, self.z_far)
    }

    pub fn view_proj(&self, aspect: f32) -> glm::Mat4 {
        self.projection(aspect) * self.view()
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            position: glm::vec3(0.0, 0.0, 5.0),
            fov_y_deg: 75.0,
            z_near: 0.1,
            z_far: 1000.0,
        }
    }
}
