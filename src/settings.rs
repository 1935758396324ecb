use crate::CONFY_APP_NAME;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlSettings {
    pub rotate_speed: f32,
    pub damping_factor: f32,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            rotate_speed: 0.2,
            damping_factor: 0.02,
        }
    }
}

impl ControlSettings {
    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "controls").unwrap_or_default()
    }

    pub fn save(&self) {
        let _ = confy::store(CONFY_APP_NAME, "controls", self);
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    pub background_color: [f32; 3],
    pub show_graticule: bool,
    pub graticule_major_color: [f32; 3],
    pub graticule_minor_color: [f32; 3],
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            background_color: [0.02, 0.02, 0.05],
            show_graticule: false,
            graticule_major_color: [0.9, 0.9, 0.9],
            graticule_minor_color: [0.45, 0.45, 0.45],
        }
    }
}

impl DisplaySettings {
    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "display").unwrap_or_default()
    }

    pub fn save(&self) {
        let _ = confy::store(CONFY_APP_NAME, "display", self);
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSettings {
    pub show_settings: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_settings: false,
        }
    }
}

impl UiSettings {
    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "ui").unwrap_or_default()
    }

    pub fn save(&self) {
        let _ = confy::store(CONFY_APP_NAME, "ui", self);
    }
}

// Aggregate struct for convenience
pub struct Settings {
    pub controls: ControlSettings,
    pub display: DisplaySettings,
    pub ui: UiSettings,
}

impl Settings {
    pub fn load() -> Self {
        Self {
            controls: ControlSettings::load(),
            display: DisplaySettings::load(),
            ui: UiSettings::load(),
        }
    }

    pub fn save_all(&self) {
        self.controls.save();
        self.display.save();
        self.ui.save();
    }
}
