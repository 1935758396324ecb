use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};
use std::time::Instant;

use log::{error, info};
use winit::window::Window;

use crate::animation::GlobeAnimator;
use crate::camera::OrbitControls;
use crate::error::GlobeError;
use crate::model::{GLOBE_RADIUS, GlobeModel, build_graticule};
use crate::renderer::{Renderer, fit_square};
use crate::settings::Settings;
use crate::texture::{self, TextureLoadResult};
use crate::ui::{Ui, UiResponse};

use super::load::LoadState;

pub struct App {
    pub window: Arc<Window>,
    ui: Ui,
    renderer: Renderer,
    egui_state: egui_winit::State,
    egui_wants_pointer: bool,
    settings: Settings,
    orbit: OrbitControls,
    animator: GlobeAnimator,
    globe: Option<GlobeModel>,
    load_state: LoadState,
    texture_rx: Receiver<Result<TextureLoadResult, GlobeError>>,
    mouse_pressed: bool,
    last_mouse_pos: Option<(f64, f64)>,
    last_frame: Instant,
}

pub struct EventResponse {
    pub repaint: bool,
    pub exit: bool,
}

impl App {
    pub async fn new(
        window: Arc<Window>,
        texture_source: Option<String>,
    ) -> Result<Self, GlobeError> {
        let ui = Ui::new();
        let mut renderer = Renderer::new(&window).await?;

        let egui_ctx = renderer.egui_context();
        egui_ctx.options_mut(|options| {
            options.max_passes = std::num::NonZero::new(2).unwrap();
        });

        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::viewport::ViewportId::ROOT,
            &*window,
            None,
            None,
            None,
        );

        let settings = Settings::load();
        renderer.background_color = settings.display.background_color;

        let orbit = OrbitControls::new(
            settings.controls.rotate_speed,
            settings.controls.damping_factor,
        );

        let mut animator = GlobeAnimator::new();
        // The sole subscriber of the settle notification just logs it.
        animator.on_settle_finishing(|| info!("settle rotation finishing"));

        // Kick off the texture load; the result lands in the frame loop.
        let (tx, rx) = mpsc::channel();
        tokio::spawn(async move {
            let result = texture::load_with_fallback(texture_source).await;
            let _ = tx.send(result);
        });

        Ok(Self {
            window,
            ui,
            renderer,
            egui_state,
            egui_wants_pointer: false,
            settings,
            orbit,
            animator,
            globe: None,
            load_state: LoadState::Loading,
            texture_rx: rx,
            mouse_pressed: false,
            last_mouse_pos: None,
            last_frame: Instant::now(),
        })
    }

    pub fn handle_event(&mut self, event: &winit::event::WindowEvent) -> EventResponse {
        // Let egui handle the event first
        let egui_response = self.egui_state.on_window_event(&self.window, event);
        self.egui_wants_pointer = self.egui_state.egui_ctx().wants_pointer_input();

        if egui_response.consumed {
            return EventResponse {
                repaint: egui_response.repaint,
                exit: false,
            };
        }

        match event {
            winit::event::WindowEvent::CloseRequested => {
                return EventResponse {
                    repaint: false,
                    exit: true,
                };
            }
            winit::event::WindowEvent::KeyboardInput { event, .. } => {
                if event.logical_key
                    == winit::keyboard::Key::Named(winit::keyboard::NamedKey::Escape)
                {
                    return EventResponse {
                        repaint: false,
                        exit: true,
                    };
                }
            }
            winit::event::WindowEvent::Resized(size) => {
                self.renderer.resize(*size);
            }
            winit::event::WindowEvent::MouseInput { state, button, .. } => {
                if *button == winit::event::MouseButton::Left {
                    match state {
                        winit::event::ElementState::Pressed if !self.egui_wants_pointer => {
                            self.mouse_pressed = true;
                            self.orbit.begin_drag();
                            self.animator.on_interaction_start();
                        }
                        winit::event::ElementState::Released if self.mouse_pressed => {
                            self.mouse_pressed = false;
                            self.last_mouse_pos = None;
                            self.orbit.end_drag();
                            self.animator.on_interaction_end();
                        }
                        _ => {}
                    }
                }
            }
            winit::event::WindowEvent::CursorMoved { position, .. } => {
                if self.mouse_pressed {
                    if let Some(last_pos) = self.last_mouse_pos {
                        let delta_x = (position.x - last_pos.0) as f32;
                        let delta_y = (position.y - last_pos.1) as f32;
                        // Drag sensitivity tracks the globe's square viewport
                        let side = fit_square(
                            self.renderer.config.width as f32,
                            self.renderer.config.height as f32,
                        );
                        self.orbit.apply_drag(delta_x, delta_y, side);
                    }
                    self.last_mouse_pos = Some((position.x, position.y));
                }
            }
            _ => {}
        }

        EventResponse {
            repaint: false,
            exit: false,
        }
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        self.drain_texture_results();

        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        let raw_input = self.egui_state.take_egui_input(&self.window);
        let egui_ctx = self.renderer.egui_context();

        let mut ui_response = UiResponse::default();
        let full_output = egui_ctx.run(raw_input, |ctx| {
            ui_response = self.ui.show(ctx, &self.load_state, &mut self.settings, dt);
        });

        if ui_response.reset_view {
            self.animator.request_return();
        }
        if ui_response.controls_changed {
            self.orbit.set_tuning(
                self.settings.controls.rotate_speed,
                self.settings.controls.damping_factor,
            );
        }
        if ui_response.display_changed {
            self.renderer.background_color = self.settings.display.background_color;
            self.upload_graticule();
        }

        self.egui_state
            .handle_platform_output(&self.window, full_output.platform_output);

        // Advance the animation; the returned state is what this frame draws.
        let frame = self.animator.tick(&mut self.orbit, self.globe.as_mut());

        let paint_jobs = egui_ctx.tessellate(full_output.shapes, full_output.pixels_per_point);

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [
                self.window.inner_size().width,
                self.window.inner_size().height,
            ],
            pixels_per_point: self.window.scale_factor() as f32,
        };

        self.renderer.render(
            &frame,
            self.globe.as_ref(),
            self.settings.display.show_graticule,
            paint_jobs,
            full_output.textures_delta,
            screen_descriptor,
        )
    }

    pub fn resize(&mut self, size: winit::dpi::PhysicalSize<u32>) {
        self.renderer.resize(size);
    }

    pub fn save_settings(&self) {
        self.settings.save_all();
    }

    /// Apply finished texture loads. The load resolves exactly once; any
    /// result arriving after that is dropped without touching state.
    fn drain_texture_results(&mut self) {
        while let Ok(result) = self.texture_rx.try_recv() {
            if !self.load_state.is_loading() {
                continue;
            }
            match result {
                Ok(tex) => {
                    self.renderer.set_earth_texture(&tex.rgba, tex.width, tex.height);

                    let globe = GlobeModel::new();
                    self.renderer.upload_globe(&globe.vertices, &globe.indices);
                    self.globe = Some(globe);
                    self.upload_graticule();

                    // Home must be on record before the first homing tick
                    self.animator.capture_home();
                    self.load_state.resolve_ok();
                    info!("globe ready ({}x{} texture)", tex.width, tex.height);
                }
                Err(e) => {
                    if self.load_state.resolve_err(e.to_string()) {
                        error!("globe load failed: {e}");
                    }
                }
            }
        }
    }

    fn upload_graticule(&mut self) {
        let lines = build_graticule(
            GLOBE_RADIUS,
            self.settings.display.graticule_major_color,
            self.settings.display.graticule_minor_color,
        );
        self.renderer.upload_graticule(&lines);
    }
}
