//! Configuration file parsing for VibeParse
//!
//! Supports `{config_dir}/vibeparse/config.toml` (or an explicit `--config`
//! path) and resolves the backend base URL from CLI, environment and file.

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, export_dir, init_config_file, load_settings, resolve_base_url,
    API_URL_ENV_VAR,
};
pub use types::*;
