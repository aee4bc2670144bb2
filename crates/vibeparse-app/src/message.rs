//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use vibeparse_client::FetchOutcome;
use vibeparse_core::{GenerateResponse, Script, ServerConfig};

use crate::input_key::{InputKey, PointerPress};
use crate::overlay::OverlayKind;
use crate::router::Route;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Primary mouse button pressed
    Pointer(PointerPress),

    /// Tick for periodic updates (audio clock, toast expiry)
    Tick,

    /// Audio clock advanced by this many seconds
    AudioElapsed(f64),

    /// Quit the application
    Quit,

    /// Replace the current page
    Navigate(Route),

    /// Close an overlay without any other effect
    Dismiss(OverlayKind),

    // ─────────────────────────────────────────────────────────
    // Backend Results
    // ─────────────────────────────────────────────────────────
    /// `GET /api/config` resolved
    ConfigFetched(FetchOutcome<ServerConfig>),

    /// `POST /api/generate-script` resolved
    ScriptGenerated(FetchOutcome<GenerateResponse>),

    /// `GET /api/scripts/{id}` resolved
    ScriptFetched {
        script_id: String,
        outcome: FetchOutcome<Script>,
    },

    // ─────────────────────────────────────────────────────────
    // Generation Form
    // ─────────────────────────────────────────────────────────
    /// Submit the form
    SubmitForm,
    /// Select a mode tab
    SelectTab(crate::form::FormTab),
    /// Pick option `n` of the open dropdown
    DropdownSelect(usize),

    // ─────────────────────────────────────────────────────────
    // Player
    // ─────────────────────────────────────────────────────────
    NextScene,
    PreviousScene,
    /// Jump to a scene and close the table of contents
    JumpToScene(usize),
    ToggleToc,
    /// Copy the focused highlight's code
    CopyHighlight,
    ToggleAudio,
    /// Seek relative to the current position, in seconds
    SeekAudio(f64),
    /// Write the loaded script as Markdown
    ExportScript,
    ExportFinished(PathBuf),
    ExportFailed(String),
}
