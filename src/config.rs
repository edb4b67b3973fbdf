use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::warn;

use crate::ui::SurfaceConfig;

// Default configuration
pub const DEFAULT_THEME: &str = "dark";
pub const DEFAULT_FADE_SECS: f32 = 0.15;

/// Persisted dialog preferences.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DialogSettings {
    #[serde(default = "default_theme")]
    pub theme: String, // "dark" or "light"
    #[serde(default = "default_fade_secs")]
    pub fade_secs: f32,
    #[serde(default = "default_true")]
    pub dismiss_on_escape: bool,
    #[serde(default = "default_true")]
    pub dismiss_on_backdrop: bool,
}

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}

fn default_fade_secs() -> f32 {
    DEFAULT_FADE_SECS
}

fn default_true() -> bool {
    true
}

impl Default for DialogSettings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            fade_secs: DEFAULT_FADE_SECS,
            dismiss_on_escape: true,
            dismiss_on_backdrop: true,
        }
    }
}

impl DialogSettings {
    pub fn surface_config(&self) -> SurfaceConfig {
        SurfaceConfig {
            fade_secs: self.fade_secs.max(0.0),
            dismiss_on_escape: self.dismiss_on_escape,
            dismiss_on_backdrop: self.dismiss_on_backdrop,
        }
    }
}

pub fn settings_path() -> Option<PathBuf> {
    if let Some(proj) = ProjectDirs::from("com", "dialog-host", "dialog-host") {
        let dir = proj.config_dir();
        if let Err(e) = fs::create_dir_all(dir) {
            warn!("Failed to create config dir: {}", e);
            return None;
        }
        return Some(dir.join("settings.json"));
    }
    None
}

pub fn load_settings() -> Option<DialogSettings> {
    let path = settings_path()?;
    let content = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&content) {
        Ok(settings) => Some(settings),
        Err(e) => {
            warn!("Ignoring malformed settings: {}", e);
            None
        }
    }
}

pub fn save_settings(settings: &DialogSettings) -> std::io::Result<()> {
    if let Some(path) = settings_path() {
        let mut file = fs::File::create(path)?;
        let data = serde_json::to_string_pretty(settings)?;
        file.write_all(data.as_bytes())?;
    }
    Ok(())
}
