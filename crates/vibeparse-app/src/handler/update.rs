//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use crate::message::Message;
use crate::state::AppPhase;
use crate::state::AppState;

use super::{form, keys::handle_key, navigate, player, pointer, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Pointer(press) => pointer::handle_press(state, press),

        Message::Tick => {
            let now = Instant::now();
            let elapsed = now.saturating_duration_since(state.last_tick);
            state.last_tick = now;
            state.expire_toast(now);

            let playing = state
                .player()
                .and_then(|page| page.loaded())
                .is_some_and(|loaded| loaded.media.is_playing());
            if playing {
                UpdateResult::message(Message::AudioElapsed(elapsed.as_secs_f64()))
            } else {
                UpdateResult::none()
            }
        }

        Message::AudioElapsed(secs) => player::handle_audio_elapsed(state, secs),

        Message::Navigate(route) => navigate(state, route),

        Message::Dismiss(kind) => {
            pointer::dismiss(state, kind);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Backend Results
        // ─────────────────────────────────────────────────────────
        Message::ConfigFetched(outcome) => form::handle_config_fetched(state, outcome),
        Message::ScriptGenerated(outcome) => form::handle_script_generated(state, outcome),
        Message::ScriptFetched { script_id, outcome } => {
            player::handle_script_fetched(state, script_id, outcome)
        }

        // ─────────────────────────────────────────────────────────
        // Generation Form
        // ─────────────────────────────────────────────────────────
        Message::SubmitForm => form::handle_submit(state),
        Message::SelectTab(tab) => form::handle_select_tab(state, tab),
        Message::DropdownSelect(idx) => form::handle_dropdown_select(state, idx),

        // ─────────────────────────────────────────────────────────
        // Player
        // ─────────────────────────────────────────────────────────
        Message::NextScene => player::handle_next(state),
        Message::PreviousScene => player::handle_previous(state),
        Message::JumpToScene(idx) => player::handle_jump(state, idx),
        Message::ToggleToc => player::handle_toggle_toc(state),
        Message::CopyHighlight => player::handle_copy(state),
        Message::ToggleAudio => player::handle_toggle_audio(state),
        Message::SeekAudio(delta) => player::handle_seek(state, delta),
        Message::ExportScript => player::handle_export(state),
        Message::ExportFinished(path) => player::handle_export_finished(state, path),
        Message::ExportFailed(reason) => player::handle_export_failed(state, reason),
    }
}
