//! Color palette.
//!
//! Named terminal colors only, so the UI follows the user's terminal theme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43);
pub const CODE_BG: Color = Color::Rgb(18, 21, 28);

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const CONTRAST_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;
pub const STATUS_BLUE: Color = Color::Blue;

// --- Effects ---
pub const SHADOW: Color = Color::Rgb(5, 6, 8);

// --- Syntax tokens ---
pub const SYNTAX_KEYWORD: Color = Color::Magenta;
pub const SYNTAX_STRING: Color = Color::Green;
pub const SYNTAX_COMMENT: Color = Color::DarkGray;
pub const SYNTAX_NUMBER: Color = Color::Yellow;
pub const SYNTAX_PUNCTUATION: Color = Color::Gray;
pub const SYNTAX_TEXT: Color = Color::White;
pub const LINE_NUMBER: Color = Color::DarkGray;
