//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per page and overlay
//! - `form`: Generation form submit and backend results
//! - `player`: Player page navigation, TOC, audio, copy and export
//! - `pointer`: Pointer press routing to overlay listeners

pub(crate) mod form;
pub(crate) mod keys;
pub(crate) mod player;
pub(crate) mod pointer;
pub(crate) mod update;


use std::path::PathBuf;

use vibeparse_core::GenerateRequest;

use crate::message::Message;
use crate::router::Route;
use crate::state::AppState;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// `GET /api/config`
    FetchConfig,

    /// `POST /api/generate-script`
    GenerateScript(GenerateRequest),

    /// `GET /api/scripts/{script_id}`
    FetchScript { script_id: String },

    /// Write text to the terminal clipboard (fire-and-forget)
    CopyToClipboard { text: String },

    /// Write a Markdown export to disk
    ExportMarkdown { path: PathBuf, markdown: String },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}

/// Switch to `route` and start whatever requests the new page needs
///
/// Used for the initial route at startup as well as in-app navigation.
pub fn navigate(state: &mut AppState, route: Route) -> UpdateResult {
    tracing::info!("Navigating to {}", route);
    state.enter_route(route);
    match &state.route {
        Route::Index => UpdateResult::action(UpdateAction::FetchConfig),
        Route::Player { script_id } => UpdateResult::action(UpdateAction::FetchScript {
            script_id: script_id.clone(),
        }),
    }
}
