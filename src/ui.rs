use crate::app::LoadState;
use crate::settings::{ControlSettings, DisplaySettings, Settings};

/// Overlay state: only what has to persist across frames.
pub struct Ui {
    fps: f32,
}

/// What the frame loop should act on after the overlay ran.
#[derive(Default)]
pub struct UiResponse {
    pub reset_view: bool,
    pub controls_changed: bool,
    pub display_changed: bool,
}

impl Ui {
    pub fn new() -> Self {
        Self { fps: 0.0 }
    }

    pub fn show(
        &mut self,
        ctx: &egui::Context,
        load: &LoadState,
        settings: &mut Settings,
        dt: f32,
    ) -> UiResponse {
        let mut response = UiResponse::default();

        if dt > 0.0 {
            let instant_fps = 1.0 / dt;
            self.fps = if self.fps == 0.0 {
                instant_fps
            } else {
                0.9 * self.fps + 0.1 * instant_fps
            };
        }

        // Top bar: load status plus window toggles
        egui::TopBottomPanel::top("status_bar").show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                match load {
                    LoadState::Loading => {
                        ui.spinner();
                        ui.label("Loading globe…");
                    }
                    LoadState::Failed(message) => {
                        ui.colored_label(
                            egui::Color32::RED,
                            format!("⚠ Load failed: {message}"),
                        );
                    }
                    LoadState::Ready => {
                        if ui.button("🏠 Reset View").clicked() {
                            response.reset_view = true;
                        }
                    }
                }

                ui.separator();

                if ui
                    .button(if settings.ui.show_settings {
                        "✅ Settings"
                    } else {
                        "⬜ Settings"
                    })
                    .clicked()
                {
                    settings.ui.show_settings = !settings.ui.show_settings;
                    settings.ui.save();
                }
            });
        });

        egui::Window::new("⚙ Settings")
            .default_width(300.0)
            .resizable(true)
            .open(&mut settings.ui.show_settings)
            .show(ctx, |ui| {
                let mut controls_changed = false;
                let mut display_changed = false;

                ui.label("Rotate Speed:");
                controls_changed |= ui
                    .add(egui::Slider::new(
                        &mut settings.controls.rotate_speed,
                        0.05..=1.0,
                    ))
                    .changed();

                ui.label("Damping Factor:");
                controls_changed |= ui
                    .add(egui::Slider::new(
                        &mut settings.controls.damping_factor,
                        0.005..=0.2,
                    ))
                    .changed();

                ui.separator();

                display_changed |= ui
                    .checkbox(&mut settings.display.show_graticule, "Show Graticule")
                    .changed();

                ui.label("Background:");
                display_changed |= ui
                    .color_edit_button_rgb(&mut settings.display.background_color)
                    .changed();

                ui.label("Graticule Major Lines:");
                display_changed |= ui
                    .color_edit_button_rgb(&mut settings.display.graticule_major_color)
                    .changed();

                ui.label("Graticule Minor Lines:");
                display_changed |= ui
                    .color_edit_button_rgb(&mut settings.display.graticule_minor_color)
                    .changed();

                ui.separator();

                if ui.button("Reset to Defaults").clicked() {
                    settings.controls = ControlSettings::default();
                    settings.display = DisplaySettings::default();
                    controls_changed = true;
                    display_changed = true;
                }

                if controls_changed {
                    settings.controls.save();
                }
                if display_changed {
                    settings.display.save();
                }

                response.controls_changed |= controls_changed;
                response.display_changed |= display_changed;
            });

        egui::Area::new(egui::Id::new("fps_overlay"))
            .anchor(egui::Align2::LEFT_BOTTOM, [8.0, -8.0])
            .show(ctx, |ui| {
                ui.label(format!("{:.0} fps", self.fps));
            });

        response
    }
}

impl Default for Ui {
    fn default() -> Self {
        Self::new()
    }
}
