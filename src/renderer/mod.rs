pub mod render;
pub mod renderer;
pub mod vertex;
pub mod viewport;

pub use renderer::Renderer;
pub use viewport::{fit_square, square_viewport};
