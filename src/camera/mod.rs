pub mod orbit;
pub mod state;

pub use orbit::OrbitControls;
pub use state::CameraState;
