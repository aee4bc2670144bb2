//! vibeparse-tui - Terminal UI for VibeParse
//!
//! This crate provides the ratatui-based terminal interface. It drives the
//! state machine from vibeparse-app: terminal events in, rendered frames out.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
