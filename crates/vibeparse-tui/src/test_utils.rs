//! Test utilities for TUI rendering verification
//!
//! Widgets and full frames are rendered into ratatui's `TestBackend`, so
//! tests can assert on buffer contents without a real terminal.

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};
use serde_json::json;

use vibeparse_app::config::Settings;
use vibeparse_app::handler::update;
use vibeparse_app::{navigate, AppState, Message, Route};
use vibeparse_client::FetchOutcome;
use vibeparse_core::Script;

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Wrapper around a `TestBackend` terminal
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame, e.g. with `render::view`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere on one row
    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        line_content(self.buffer(), line).contains(text)
    }

    /// Row of the first line containing `text`
    pub fn find_line(&self, text: &str) -> Option<u16> {
        let buffer = self.buffer();
        (0..buffer.area.height).find(|&y| line_content(buffer, y).contains(text))
    }

    /// All content as a string (for debugging failed assertions)
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        result.push_str(&line_content(buffer, y));
        result.push('\n');
    }
    result
}

fn line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(buffer.area.x + x, buffer.area.y + line)].symbol());
        }
    }
    result
}

/// State on the generation form
pub fn form_state() -> AppState {
    AppState::new(Settings::default(), "http://localhost:8000")
}

/// Three scenes; the middle one has a valid and an invalid highlight
pub fn test_script() -> Script {
    Script::from_value(json!({
        "scenes": [
            {"title": "Intro", "duration": 6, "content": "Welcome to the tour", "code_highlights": []},
            {"title": "Entry point", "duration": 10, "content": "Where it starts", "code_highlights": [
                {"file_path": "src/main.rs", "start_line": 3, "end_line": 5,
                 "description": "Program entry", "code": "fn main() {\n    run();\n}"},
                {"file_path": "src/lib.rs", "start_line": 1, "end_line": 1,
                 "description": "Broken block", "code": {"oops": true}}
            ]},
            {"title": "Wrap up", "duration": 4, "content": "Bye", "code_highlights": []}
        ],
        "skipped_files": ["assets/logo.png"]
    }))
    .expect("fixture script is valid")
}

/// State on a player page with [`test_script`] loaded at scene 0
pub fn player_state() -> AppState {
    let mut state = form_state();
    navigate(&mut state, Route::player("abc"));
    update(
        &mut state,
        Message::ScriptFetched {
            script_id: "abc".into(),
            outcome: FetchOutcome::Success(test_script()),
        },
    );
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_terminal_creation() {
        let term = TestTerminal::new();
        assert_eq!(term.area().width, TEST_WIDTH);
        assert_eq!(term.area().height, TEST_HEIGHT);
    }

    #[test]
    fn test_buffer_contains() {
        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("Hello World"), term.area());

        assert!(term.buffer_contains("Hello World"));
        assert!(!term.buffer_contains("Goodbye"));
        assert_eq!(term.find_line("Hello"), Some(0));
    }

    #[test]
    fn test_player_state_is_loaded() {
        let state = player_state();
        assert!(state.player().and_then(|p| p.loaded()).is_some());
    }
}
