//! Abstract input events, independent of terminal library.
//!
//! Keys and pointer presses are converted from crossterm events at the TUI
//! boundary, so the state machine in this crate never sees terminal types and
//! can be driven directly from tests.

/// Abstract input key event, independent of terminal library.
/// Converted from crossterm::event::KeyEvent at the TUI boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+a, Ctrl+c, etc.)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    // Action keys
    Enter,
    Esc,
    Tab,
    /// Shift+Tab (BackTab)
    BackTab,
    Backspace,
    Delete,

    /// Function key (F1-F12)
    F(u8),
}

impl InputKey {
    /// Printable character carried by this key, if any
    pub fn printable(&self) -> Option<char> {
        match self {
            InputKey::Char(c) if !c.is_control() => Some(*c),
            _ => None,
        }
    }
}

/// Primary-button press at a terminal cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerPress {
    pub column: u16,
    pub row: u16,
}

impl PointerPress {
    pub fn new(column: u16, row: u16) -> Self {
        Self { column, row }
    }
}

/// Screen rectangle in terminal cells
///
/// Mirrors ratatui's `Rect` without depending on it; the renderer records
/// where overlays were drawn so pointer presses can be hit-tested here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Area {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Area {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, press: PointerPress) -> bool {
        press.column >= self.x
            && press.column < self.x.saturating_add(self.width)
            && press.row >= self.y
            && press.row < self.y.saturating_add(self.height)
    }
}
