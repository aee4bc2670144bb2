//! Informational modal (e.g. the "coming soon" tab notice)

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;
use vibeparse_app::form::Notice;

use super::modal_overlay::{centered_rect, dim_background, render_shadow};
use crate::theme::styles;

const MAX_WIDTH: u16 = 50;
pub const DISMISS_HINT: &str = "Enter / Esc to close";

pub struct NoticeView<'a> {
    notice: &'a Notice,
}

impl<'a> NoticeView<'a> {
    pub fn new(notice: &'a Notice) -> Self {
        Self { notice }
    }

    pub fn popup(&self, area: Rect) -> Rect {
        let width = MAX_WIDTH.min(area.width.saturating_sub(4));
        let text_width = width.saturating_sub(2).max(1) as usize;
        let message_rows = self.notice.message.width().div_ceil(text_width).max(1) as u16;
        // Borders, message, blank row, hint
        centered_rect(width, message_rows + 4, area)
    }
}

impl Widget for NoticeView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);
        let popup = self.popup(area);
        render_shadow(buf, popup);
        Clear.render(popup, buf);

        let title = format!(" {} ", self.notice.title);
        let block = styles::modal_block(&title);
        let inner = block.inner(popup);
        block.render(popup, buf);

        let lines = vec![
            Line::styled(self.notice.message.clone(), styles::text_primary()),
            Line::default(),
            Line::styled(DISMISS_HINT, styles::text_muted()),
        ];
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
