pub mod graticule;
pub mod sphere;

pub use graticule::build_graticule;
pub use sphere::build_sphere;

use crate::renderer::vertex::Vertex;

/// Globe radius in scene units.
pub const GLOBE_RADIUS: f32 = 2.8;
/// Yaw the globe is given when first placed, before the settle rotation.
pub const INITIAL_YAW: f32 = -1.0;
/// Longitude segments of the sphere mesh.
pub const SPHERE_SEGMENTS: u32 = 64;
/// Latitude rings of the sphere mesh.
pub const SPHERE_RINGS: u32 = 32;

/// The loaded globe: procedural sphere mesh plus its current yaw. The only
/// mutation after construction is the settle rotation's per-tick yaw delta.
pub struct GlobeModel {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    yaw: f32,
}

impl GlobeModel {
    pub fn new() -> Self {
        let (vertices, indices) = build_sphere(GLOBE_RADIUS, SPHERE_SEGMENTS, SPHERE_RINGS);
        Self {
            vertices,
            indices,
            yaw: INITIAL_YAW,
        }
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn apply_yaw(&mut self, delta: f32) {
        self.yaw += delta;
    }
}

impl Default for GlobeModel {
    fn default() -> Self {
        Self::new()
    }
}
