//! Header bar: app title, current source and backend

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;
use vibeparse_core::GithubTarget;

use crate::theme::styles;

pub const APP_TITLE: &str = "VibeParse";

/// Main header, one row inside a glass container
pub struct MainHeader<'a> {
    api_base_url: &'a str,
    source: Option<&'a GithubTarget>,
}

impl<'a> MainHeader<'a> {
    pub fn new(api_base_url: &'a str) -> Self {
        Self {
            api_base_url,
            source: None,
        }
    }

    /// Repository the current script was generated from
    pub fn with_source(mut self, source: Option<&'a GithubTarget>) -> Self {
        self.source = source;
        self
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut spans = vec![Span::styled(format!(" {APP_TITLE}"), styles::accent_bold())];
        if let Some(source) = self.source {
            spans.push(Span::styled("  ·  ", styles::text_muted()));
            spans.push(Span::styled(source.to_string(), styles::text_primary()));
        }
        Paragraph::new(Line::from(spans)).render(inner, buf);

        // Backend on the right, only when it fits next to the title
        let source_width = self.source.map_or(0, |s| s.to_string().width() + 5);
        let used = (APP_TITLE.width() + 1 + source_width) as u16;
        let backend = format!("{} ", self.api_base_url);
        let backend_width = backend.width() as u16;
        if used + backend_width + 2 <= inner.width {
            let x = inner.x + inner.width - backend_width;
            buf.set_string(x, inner.y, backend, styles::text_muted());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_header_shows_title_and_backend() {
        let mut term = TestTerminal::with_size(60, 3);
        term.render_widget(MainHeader::new("http://localhost:8000"), term.area());

        assert!(term.line_contains(1, "VibeParse"));
        assert!(term.line_contains(1, "http://localhost:8000"));
    }

    #[test]
    fn test_header_shows_source() {
        let target = GithubTarget::parse("https://github.com/rust-lang/regex").unwrap();
        let mut term = TestTerminal::with_size(80, 3);
        term.render_widget(
            MainHeader::new("http://localhost:8000").with_source(Some(&target)),
            term.area(),
        );

        assert!(term.line_contains(1, "rust-lang/regex@main"));
    }

    #[test]
    fn test_backend_hidden_when_narrow() {
        let mut term = TestTerminal::with_size(24, 3);
        term.render_widget(MainHeader::new("http://localhost:8000"), term.area());

        assert!(term.line_contains(1, "VibeParse"));
        assert!(!term.buffer_contains("localhost"));
    }
}
