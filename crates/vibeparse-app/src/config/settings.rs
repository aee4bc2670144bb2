//! Settings loading and base URL resolution

use std::path::{Path, PathBuf};

use vibeparse_client::DEFAULT_BASE_URL;
use vibeparse_core::prelude::*;

use super::types::Settings;

const CONFIG_DIR: &str = "vibeparse";
const CONFIG_FILENAME: &str = "config.toml";

/// Environment variable overriding the configured backend URL
pub const API_URL_ENV_VAR: &str = "VIBEPARSE_API_URL";

/// `{config_dir}/vibeparse/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`
///
/// A missing file yields defaults silently; an unreadable or invalid file
/// yields defaults with a warning. Never fails.
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config file if none exists
pub fn init_config_file(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    let default_content = r#"# VibeParse Configuration

[api]
# Backend base URL (overridden by --api-url and VIBEPARSE_API_URL)
# base_url = "http://localhost:8000"
# Per-request timeout in seconds (unset = wait indefinitely)
# request_timeout_secs = 60

[form]
# beginner | intermediate | advanced
proficiency = "beginner"
# key-parts | full | line-by-line
depth = "key-parts"
# Pre-selected file type filters, e.g. [".py", ".rs"]
file_types = []
save_to_disk = true

[player]
show_line_numbers = true
# Seconds moved by one seek key press
seek_step_secs = 5.0
# Directory for Markdown exports (defaults to the working directory)
# export_dir = "~/vibeparse-exports"
"#;

    std::fs::write(path, default_content)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", path, e)))?;
    info!("Created default config at {:?}", path);
    Ok(())
}

/// Resolve the backend base URL
///
/// Precedence: CLI flag, then `VIBEPARSE_API_URL`, then `[api] base_url`,
/// then `http://localhost:8000`. Blank values are skipped.
pub fn resolve_base_url(cli: Option<&str>, settings: &Settings) -> String {
    let env = std::env::var(API_URL_ENV_VAR).ok();
    [
        cli.map(str::to_string),
        env,
        settings.api.base_url.clone(),
    ]
    .into_iter()
    .flatten()
    .map(|url| url.trim().to_string())
    .find(|url| !url.is_empty())
    .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

/// Directory Markdown exports are written to
pub fn export_dir(settings: &Settings) -> PathBuf {
    settings
        .player
        .export_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."))
}
