use thiserror::Error;

/// Failures a globe instance can produce. Load errors end up in the status
/// overlay; the GPU and window variants only occur during startup.
#[derive(Debug, Error)]
pub enum GlobeError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("texture decode error: {0}")]
    Image(#[from] image::ImageError),

    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("download failed: HTTP {status} from {url}")]
    Download { url: String, status: u16 },

    #[error("window creation failed: {0}")]
    CreateWindow(#[from] winit::error::OsError),

    #[error("surface creation failed: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter: {0}")]
    RequestAdapter(#[from] wgpu::RequestAdapterError),

    #[error("device request failed: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
}
