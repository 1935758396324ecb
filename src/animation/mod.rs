// Per-frame animation core: the settle rotation played after load, the
// damped return-to-home camera motion, and the orchestrator that runs both.

pub mod animator;
pub mod homing;
pub mod settle;
pub mod signal;

pub use animator::{FrameState, GlobeAnimator};
pub use homing::{CameraHomer, HomingState};
pub use settle::{RotationSettler, SettlePhase};
pub use signal::OnceSignal;
