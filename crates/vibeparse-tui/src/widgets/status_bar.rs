//! Bottom line: toast when one is showing, key hints otherwise

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use vibeparse_app::player::LoadState;
use vibeparse_app::state::{Toast, ToastKind};
use vibeparse_app::{AppState, Page};

use crate::theme::styles;

const FORM_HINTS: &str = "Tab/↑↓ field · Enter submit · Ctrl+C quit";
const DROPDOWN_HINTS: &str = "↑↓ choose · Enter select · Esc cancel";
const NOTICE_HINTS: &str = "Enter/Esc close";
const LOADING_HINTS: &str = "Esc back · q quit";
const FAILED_HINTS: &str = "r retry · Esc back · q quit";
const TOC_HINTS: &str = "↑↓ select · Enter jump · Esc close";
const PLAYER_HINTS: &str =
    "←→ scene · t contents · Tab highlight · c copy · Space play · ,/. seek · e export · Esc back";

/// Key hints for whatever currently has input focus
pub fn key_hints(state: &AppState) -> &'static str {
    match &state.page {
        Page::Index(form) if form.notice.is_some() => NOTICE_HINTS,
        Page::Index(form) if form.dropdown.is_some() => DROPDOWN_HINTS,
        Page::Index(_) => FORM_HINTS,
        Page::Player(page) => match &page.load {
            LoadState::Loading => LOADING_HINTS,
            LoadState::Failed(_) => FAILED_HINTS,
            LoadState::Loaded(player) if player.toc.is_some() => TOC_HINTS,
            LoadState::Loaded(_) => PLAYER_HINTS,
        },
    }
}

pub struct StatusBar<'a> {
    toast: Option<&'a Toast>,
    hints: &'a str,
}

impl<'a> StatusBar<'a> {
    pub fn new(hints: &'a str) -> Self {
        Self { toast: None, hints }
    }

    pub fn toast(mut self, toast: Option<&'a Toast>) -> Self {
        self.toast = toast;
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = match self.toast {
            Some(toast) => {
                let (icon, style) = match toast.kind {
                    ToastKind::Info => ("✓", styles::status_green()),
                    ToastKind::Error => ("✗", styles::status_red()),
                };
                Line::from(vec![
                    Span::styled(format!(" {icon} "), style),
                    Span::styled(toast.text.clone(), style),
                ])
            }
            None => Line::styled(format!(" {}", self.hints), styles::text_muted()),
        };
        Paragraph::new(line).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{form_state, player_state, TestTerminal};
    use vibeparse_app::Message;

    #[test]
    fn test_hints_follow_page() {
        assert_eq!(key_hints(&form_state()), FORM_HINTS);

        let mut state = player_state();
        assert_eq!(key_hints(&state), PLAYER_HINTS);

        vibeparse_app::handler::update(&mut state, Message::ToggleToc);
        assert_eq!(key_hints(&state), TOC_HINTS);
    }

    #[test]
    fn test_toast_replaces_hints() {
        let mut state = form_state();
        state.show_toast("Exported to ./abc.md", ToastKind::Info);

        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(
            StatusBar::new(key_hints(&state)).toast(state.toast.as_ref()),
            term.area(),
        );

        assert!(term.buffer_contains("✓ Exported to ./abc.md"));
        assert!(!term.buffer_contains("Ctrl+C"));
    }

    #[test]
    fn test_hints_without_toast() {
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(StatusBar::new(FORM_HINTS), term.area());
        assert!(term.buffer_contains("Enter submit"));
    }
}
