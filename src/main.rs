use std::sync::Arc;

use anyhow::Result;
use log::{info, warn};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use globevis_rs::app::App;
use globevis_rs::error::GlobeError;

struct AppHandler {
    app: Option<App>,
    texture_source: Option<String>,
    rt: tokio::runtime::Runtime,
    init_error: Option<GlobeError>,
}

impl AppHandler {
    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<App, GlobeError> {
        let window_attrs = Window::default_attributes()
            .with_title("GlobeVis - Interactive Earth")
            .with_inner_size(winit::dpi::LogicalSize::new(1200.0, 800.0));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        self.rt
            .block_on(App::new(window, self.texture_source.clone()))
    }
}

impl ApplicationHandler for AppHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.app.is_none() {
            match self.init(event_loop) {
                Ok(app) => self.app = Some(app),
                Err(e) => {
                    self.init_error = Some(e);
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        if let Some(app) = &mut self.app {
            let response = app.handle_event(&event);
            if response.repaint {
                app.window.request_redraw();
            }
            if response.exit {
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(app) = &mut self.app {
            match app.render() {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    // Reconfigure at the current size and try again next frame
                    let size = app.window.inner_size();
                    app.resize(size);
                }
                Err(e) => warn!("render error: {e:?}"),
            }
            app.window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(app) = &self.app {
            app.save_settings();
        }
        info!("event loop exited");
    }
}

fn main() -> Result<()> {
    env_logger::init();

    // Optional texture path or URL as the only argument
    let args: Vec<String> = std::env::args().collect();
    let texture_source = if args.len() > 1 {
        Some(args[1].clone())
    } else {
        None
    };

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut handler = AppHandler {
        app: None,
        texture_source,
        rt: tokio::runtime::Runtime::new()?,
        init_error: None,
    };

    event_loop.run_app(&mut handler)?;

    if let Some(e) = handler.init_error {
        return Err(e.into());
    }
    Ok(())
}
