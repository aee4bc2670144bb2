//! Configuration types for VibeParse
//!
//! Defines:
//! - `Settings` - Global application settings (`config.toml`)
//! - `ApiSettings`, `FormSettings`, `PlayerSettings` - Per-section tables

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use vibeparse_core::{Depth, Proficiency};

/// Global application settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub form: FormSettings,

    #[serde(default)]
    pub player: PlayerSettings,
}

/// `[api]` - Backend connection
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Backend base URL; overridden by `--api-url` and `VIBEPARSE_API_URL`
    #[serde(default)]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds (unset = no timeout)
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl ApiSettings {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

/// `[form]` - Generation form defaults
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FormSettings {
    #[serde(default)]
    pub proficiency: Proficiency,

    #[serde(default)]
    pub depth: Depth,

    /// Pre-selected file type filters (e.g. `[".py", ".rs"]`)
    #[serde(default)]
    pub file_types: Vec<String>,

    #[serde(default = "default_true")]
    pub save_to_disk: bool,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            proficiency: Proficiency::default(),
            depth: Depth::default(),
            file_types: Vec::new(),
            save_to_disk: true,
        }
    }
}

/// `[player]` - Playback view
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerSettings {
    #[serde(default = "default_true")]
    pub show_line_numbers: bool,

    /// Seconds moved by one seek key press
    #[serde(default = "default_seek_step")]
    pub seek_step_secs: f64,

    /// Directory for Markdown exports (defaults to the working directory)
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            show_line_numbers: true,
            seek_step_secs: default_seek_step(),
            export_dir: None,
        }
    }
}

impl PlayerSettings {
    /// Seek step, guarded against zero/negative/NaN values
    pub fn seek_step(&self) -> f64 {
        if self.seek_step_secs.is_finite() && self.seek_step_secs > 0.0 {
            self.seek_step_secs
        } else {
            default_seek_step()
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_seek_step() -> f64 {
    5.0
}
