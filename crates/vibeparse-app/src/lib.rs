//! vibeparse-app - Application state and orchestration for VibeParse
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the generation form, the player page and its overlays, the
//! narration transport, configuration loading, and the background tasks that
//! talk to the backend.

pub mod actions;
pub mod audio;
pub mod clipboard;
pub mod config;
pub mod cursor;
pub mod form;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod overlay;
pub mod player;
pub mod process;
pub mod router;
pub mod signals;
pub mod state;
pub mod toc;

// Re-export primary types
pub use cursor::SceneCursor;
pub use handler::{navigate, UpdateAction, UpdateResult};
pub use input_key::{Area, InputKey, PointerPress};
pub use message::Message;
pub use router::Route;
pub use state::{AppPhase, AppState, Page};
