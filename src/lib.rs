//! VibeParse
//!
//! Terminal client for the VibeParse script generator. This crate wires the
//! command line to the workspace crates; the state machine lives in
//! `vibeparse-app` and the interface in `vibeparse-tui`.

pub mod cli;
pub mod export;

use std::path::{Path, PathBuf};

use vibeparse_app::config::{
    default_config_path, init_config_file, load_settings, resolve_base_url, Settings,
};
use vibeparse_app::{AppState, Route};
use vibeparse_client::ApiClient;
use vibeparse_core::logging;
use vibeparse_core::prelude::*;

use cli::{Args, Command};

/// Application entry point
pub async fn run(args: Args) -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Log to file, the TUI owns stdout
    logging::init()?;

    let result = dispatch(args).await;
    match &result {
        Err(e) if e.is_recoverable() => warn!("Backend request failed: {}", e),
        Err(e) if e.is_fatal() => error!("Fatal error: {:?}", e),
        Err(e) => error!("Application error: {:?}", e),
        Ok(()) => {}
    }
    result
}

async fn dispatch(args: Args) -> Result<()> {
    if args.command == Some(Command::InitConfig) {
        let path = config_path(args.config)?;
        init_config_file(&path)?;
        eprintln!("Config file: {}", path.display());
        return Ok(());
    }

    let settings = load_config(args.config.as_deref())?;
    let base_url = resolve_base_url(args.api_url.as_deref(), &settings);
    info!("Backend: {}", base_url);
    let client = ApiClient::new(&base_url, settings.api.request_timeout())?;

    match args.command {
        Some(Command::Export { script_id, output }) => {
            export::run(&client, &script_id, output.as_deref()).await
        }
        Some(Command::InitConfig) | None => {
            let route = args
                .route
                .as_deref()
                .map(Route::parse)
                .unwrap_or(Route::Index);
            let state = AppState::new(settings, base_url);
            vibeparse_tui::run(state, route, client).await
        }
    }
}

fn config_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    explicit
        .or_else(default_config_path)
        .ok_or_else(|| Error::config("No config directory on this platform; pass --config"))
}

/// Settings from `--config` (which must exist) or the default location
pub fn load_config(explicit: Option<&Path>) -> Result<Settings> {
    match explicit {
        Some(path) if !path.exists() => Err(Error::ConfigNotFound {
            path: path.to_path_buf(),
        }),
        Some(path) => Ok(load_settings(path)),
        None => Ok(default_config_path()
            .map(|path| load_settings(&path))
            .unwrap_or_default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("nope.toml");
        assert!(matches!(
            load_config(Some(&missing)),
            Err(Error::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn test_explicit_config_is_loaded() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[api]\nbase_url = \"http://backend:9000\"\n").unwrap();

        let settings = load_config(Some(&path)).unwrap();
        assert_eq!(settings.api.base_url.as_deref(), Some("http://backend:9000"));
    }
}
