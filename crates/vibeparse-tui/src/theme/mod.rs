//! Centralized theme for the VibeParse TUI.
//!
//! - `palette` holds raw color constants
//! - `styles` builds semantic styles from them

pub mod palette;
pub mod styles;
