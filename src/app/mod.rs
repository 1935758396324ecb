pub mod app;
pub mod load;

pub use app::{App, EventResponse};
pub use load::LoadState;
