//! Player page handlers: script loading, navigation, TOC, audio, copy, export

use std::path::PathBuf;

use vibeparse_client::FetchOutcome;
use vibeparse_core::prelude::*;
use vibeparse_core::{HighlightCode, Script};

use crate::audio::MediaEvent;
use crate::config::export_dir;
use crate::player::{LoadState, LoadedPlayer, LOAD_FAILED_MESSAGE};
use crate::state::{AppState, ToastKind};

use super::{UpdateAction, UpdateResult};

/// Apply a script fetch result
///
/// Results for any script other than the one currently shown are stale and
/// dropped.
pub fn handle_script_fetched(
    state: &mut AppState,
    script_id: String,
    outcome: FetchOutcome<Script>,
) -> UpdateResult {
    let Some(page) = state.player_mut() else {
        debug!("Script {} arrived after leaving the player, ignoring", script_id);
        return UpdateResult::none();
    };
    if page.script_id != script_id || !page.is_loading() {
        debug!(
            "Discarding stale script response for {} (showing {})",
            script_id, page.script_id
        );
        return UpdateResult::none();
    }

    page.load = match outcome {
        FetchOutcome::Success(script) => match LoadedPlayer::new(script) {
            Some(player) => LoadState::Loaded(Box::new(player)),
            None => {
                warn!("Script {} has no scenes", script_id);
                LoadState::Failed(LOAD_FAILED_MESSAGE.to_string())
            }
        },
        failure => {
            let message = failure
                .failure_message(LOAD_FAILED_MESSAGE)
                .unwrap_or_else(|| LOAD_FAILED_MESSAGE.to_string());
            warn!("Failed to load script {}: {}", script_id, message);
            LoadState::Failed(message)
        }
    };
    UpdateResult::none()
}

fn loaded(state: &mut AppState) -> Option<&mut LoadedPlayer> {
    state.player_mut().and_then(|page| page.loaded_mut())
}

pub fn handle_next(state: &mut AppState) -> UpdateResult {
    if let Some(player) = loaded(state) {
        player.next();
    }
    UpdateResult::none()
}

pub fn handle_previous(state: &mut AppState) -> UpdateResult {
    if let Some(player) = loaded(state) {
        player.previous();
    }
    UpdateResult::none()
}

/// Jump to a scene and close the TOC
pub fn handle_jump(state: &mut AppState, idx: usize) -> UpdateResult {
    if let Some(player) = loaded(state) {
        if !player.jump(idx) {
            trace!("Jump to scene {} ignored", idx);
        }
        player.close_toc();
    }
    UpdateResult::none()
}

pub fn handle_toggle_toc(state: &mut AppState) -> UpdateResult {
    let pointers = state.pointers.clone();
    if let Some(player) = loaded(state) {
        if player.toc.is_some() {
            player.close_toc();
        } else {
            player.open_toc(&pointers);
        }
    }
    UpdateResult::none()
}

/// Copy the focused highlight's code to the clipboard
pub fn handle_copy(state: &mut AppState) -> UpdateResult {
    let Some(player) = loaded(state) else {
        return UpdateResult::none();
    };

    let (toast, action) = match player.focused() {
        Some(hl) => match &hl.code {
            HighlightCode::Source(code) => (
                (format!("Copied {} ({})", hl.file_path, hl.line_range()), ToastKind::Info),
                Some(UpdateAction::CopyToClipboard { text: code.clone() }),
            ),
            HighlightCode::Invalid(err) => {
                warn!("Copy refused: {}", err);
                (
                    ("Invalid code data, nothing to copy".to_string(), ToastKind::Error),
                    None,
                )
            }
        },
        None => (
            ("No code highlight to copy".to_string(), ToastKind::Error),
            None,
        ),
    };

    state.show_toast(toast.0, toast.1);
    match action {
        Some(action) => UpdateResult::action(action),
        None => UpdateResult::none(),
    }
}

pub fn handle_toggle_audio(state: &mut AppState) -> UpdateResult {
    if let Some(player) = loaded(state) {
        let playing = player.toggle_audio();
        debug!("Narration {}", if playing { "playing" } else { "paused" });
    }
    UpdateResult::none()
}

pub fn handle_seek(state: &mut AppState, delta: f64) -> UpdateResult {
    if let Some(player) = loaded(state) {
        player.seek_audio(delta);
    }
    UpdateResult::none()
}

/// Advance the narration clock
///
/// Reaching the end pauses the transport; it never changes the scene.
pub fn handle_audio_elapsed(state: &mut AppState, secs: f64) -> UpdateResult {
    if let Some(player) = loaded(state) {
        let scene = player.cursor.index();
        let ended = player
            .advance_audio(secs)
            .iter()
            .any(|d| d.event == MediaEvent::Ended);
        if ended {
            debug!("Narration for scene {} finished", scene + 1);
        }
    }
    UpdateResult::none()
}

/// Export the loaded script as `{export_dir}/{script_id}.md`
pub fn handle_export(state: &mut AppState) -> UpdateResult {
    let dir = export_dir(&state.settings);
    let Some(page) = state.player() else {
        return UpdateResult::none();
    };
    let Some(player) = page.loaded() else {
        return UpdateResult::none();
    };

    let path = dir.join(export_file_name(&page.script_id));
    UpdateResult::action(UpdateAction::ExportMarkdown {
        path,
        markdown: player.script.to_markdown(),
    })
}

pub fn handle_export_finished(state: &mut AppState, path: PathBuf) -> UpdateResult {
    info!("Exported script to {:?}", path);
    state.show_toast(format!("Exported to {}", path.display()), ToastKind::Info);
    UpdateResult::none()
}

pub fn handle_export_failed(state: &mut AppState, reason: String) -> UpdateResult {
    state.show_toast(format!("Export failed: {reason}"), ToastKind::Error);
    UpdateResult::none()
}

/// `{script_id}.md` with path separators and other unsafe characters replaced
pub fn export_file_name(script_id: &str) -> String {
    let stem: String = script_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let stem = if stem.is_empty() { "script".to_string() } else { stem };
    format!("{stem}.md")
}
