//! Semantic style builders

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use vibeparse_core::syntax::TokenKind;

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn title() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

// --- Accent and status ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn status_yellow() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

pub fn status_green() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

// --- Borders ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

/// "Black on Cyan" for the focused entry of a list or the focused button
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Code ---
pub fn token(kind: TokenKind) -> Style {
    let fg = match kind {
        TokenKind::Keyword => palette::SYNTAX_KEYWORD,
        TokenKind::String => palette::SYNTAX_STRING,
        TokenKind::Comment => palette::SYNTAX_COMMENT,
        TokenKind::Number => palette::SYNTAX_NUMBER,
        TokenKind::Punctuation => palette::SYNTAX_PUNCTUATION,
        TokenKind::Text => palette::SYNTAX_TEXT,
    };
    let style = Style::default().fg(fg);
    match kind {
        TokenKind::Keyword => style.add_modifier(Modifier::BOLD),
        TokenKind::Comment => style.add_modifier(Modifier::ITALIC),
        _ => style,
    }
}

pub fn line_number() -> Style {
    Style::default().fg(palette::LINE_NUMBER)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}
