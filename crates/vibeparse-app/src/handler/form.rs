//! Generation form handlers: submit, tab selection and backend results

use vibeparse_client::FetchOutcome;
use vibeparse_core::prelude::*;
use vibeparse_core::{GenerateResponse, GithubTarget, ServerConfig};

use crate::form::{ConfigStatus, FieldErrors, FormTab, GENERATE_FAILED_MESSAGE};
use crate::message::Message;
use crate::router::Route;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Title and body of the notice shown for tabs that are not available yet
pub const COMING_SOON_TITLE: &str = "Coming soon";
pub const COMING_SOON_MESSAGE: &str =
    "Explaining recent changes is not available yet. Use the File tab for now.";

/// Validate and submit the form
///
/// Ignored while a request is in flight or when a non-File tab is active.
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    let Some(form) = state.form_mut() else {
        return UpdateResult::none();
    };

    if form.loading {
        debug!("Submit ignored: generation already in flight");
        return UpdateResult::none();
    }
    if form.tab != FormTab::File {
        return UpdateResult::none();
    }

    match form.validate() {
        Ok(request) => {
            form.loading = true;
            form.error = None;
            form.field_errors = FieldErrors::default();
            let source = GithubTarget::parse(&request.github_url);
            state.last_source = source;
            UpdateResult::action(UpdateAction::GenerateScript(request))
        }
        Err(errors) => {
            debug!("Form validation failed: {:?}", errors);
            form.error = None;
            form.field_errors = errors;
            UpdateResult::none()
        }
    }
}

/// Select a mode tab; unavailable tabs open a notice instead
pub fn handle_select_tab(state: &mut AppState, tab: FormTab) -> UpdateResult {
    let pointers = state.pointers.clone();
    let Some(form) = state.form_mut() else {
        return UpdateResult::none();
    };

    if tab.is_enabled() {
        form.tab = tab;
    } else {
        form.show_notice(COMING_SOON_TITLE, COMING_SOON_MESSAGE, &pointers);
    }
    UpdateResult::none()
}

pub fn handle_dropdown_select(state: &mut AppState, idx: usize) -> UpdateResult {
    if let Some(form) = state.form_mut() {
        form.select_dropdown_option(idx);
    }
    UpdateResult::none()
}

/// Apply the server config; any failure leaves mock mode off
pub fn handle_config_fetched(
    state: &mut AppState,
    outcome: FetchOutcome<ServerConfig>,
) -> UpdateResult {
    let Some(form) = state.form_mut() else {
        debug!("Config result arrived after leaving the form, ignoring");
        return UpdateResult::none();
    };

    match outcome {
        FetchOutcome::Success(config) => {
            info!("Server config: mock_llm_mode={}", config.mock_llm_mode);
            form.mock_mode = config.mock_llm_mode;
            form.config = ConfigStatus::Loaded;
        }
        other => {
            warn!("Could not fetch server config: {:?}", other);
            form.mock_mode = false;
            form.config = ConfigStatus::Unavailable;
        }
    }
    UpdateResult::none()
}

/// Navigate to the player on success, otherwise show the failure
pub fn handle_script_generated(
    state: &mut AppState,
    outcome: FetchOutcome<GenerateResponse>,
) -> UpdateResult {
    let Some(form) = state.form_mut() else {
        debug!("Generation result arrived after leaving the form, ignoring");
        return UpdateResult::none();
    };
    form.loading = false;

    match outcome {
        FetchOutcome::Success(response) if !response.script_id.trim().is_empty() => {
            info!("Script generated: {}", response.script_id);
            UpdateResult::message(Message::Navigate(Route::player(response.script_id)))
        }
        FetchOutcome::Success(_) => {
            warn!("Backend returned an empty script_id");
            form.error = Some(GENERATE_FAILED_MESSAGE.to_string());
            UpdateResult::none()
        }
        failure => {
            form.error = failure.failure_message(GENERATE_FAILED_MESSAGE);
            UpdateResult::none()
        }
    }
}
