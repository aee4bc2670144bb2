//! Scene body: title, prose and code highlights, scrolled vertically
//!
//! Prose is wrapped here rather than by `Paragraph` so the total height is
//! known before drawing and the scroll offset can be clamped.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use vibeparse_app::player::LoadedPlayer;
use vibeparse_core::script::OVERVIEW_CHAPTER;
use vibeparse_core::Language;

use super::code_block::CodeBlock;
use crate::theme::styles;

pub const NO_HIGHLIGHTS_MESSAGE: &str = "No code highlights for this scene.";

/// Indent of code and descriptions under a highlight heading
const INDENT: &str = "  ";

pub struct ScenePlayer<'a> {
    player: &'a LoadedPlayer,
    line_numbers: bool,
}

impl<'a> ScenePlayer<'a> {
    pub fn new(player: &'a LoadedPlayer) -> Self {
        Self {
            player,
            line_numbers: true,
        }
    }

    pub fn line_numbers(mut self, show: bool) -> Self {
        self.line_numbers = show;
        self
    }

    /// Every line of the scene body for a given text width
    pub fn content_lines(&self, width: u16) -> Vec<Line<'static>> {
        let scene = self.player.scene();
        let width = width.max(1) as usize;
        let mut lines = Vec::new();

        for row in wrap(&scene.title, width) {
            lines.push(Line::styled(row, styles::title()));
        }
        lines.push(Line::default());
        for row in wrap(&scene.content, width) {
            lines.push(Line::styled(row, styles::text_primary()));
        }
        lines.push(Line::default());

        if scene.code_highlights.is_empty() {
            lines.push(Line::styled(
                NO_HIGHLIGHTS_MESSAGE,
                styles::text_muted().add_modifier(Modifier::ITALIC),
            ));
            return lines;
        }

        let inner_width = width.saturating_sub(INDENT.len()).max(1);
        for (i, hl) in scene.code_highlights.iter().enumerate() {
            let focused = i == self.player.focused_highlight;
            let (marker, heading_style) = if focused {
                ("▸ ", styles::accent_bold())
            } else {
                (INDENT, styles::text_secondary())
            };
            lines.push(Line::from(vec![
                Span::styled(marker, heading_style),
                Span::styled(format!("{} ({})", hl.file_path, hl.line_range()), heading_style),
                Span::styled(
                    format!("  {}", Language::from_path(&hl.file_path).tag()),
                    styles::text_muted(),
                ),
            ]));

            for code_line in CodeBlock::new(hl).line_numbers(self.line_numbers).lines() {
                let mut spans = vec![Span::raw(INDENT)];
                spans.extend(code_line.spans);
                lines.push(Line::from(spans).style(code_line.style));
            }

            for row in wrap(&hl.description, inner_width) {
                lines.push(Line::styled(format!("{INDENT}{row}"), styles::text_secondary()));
            }
            lines.push(Line::default());
        }
        lines
    }

    /// Largest scroll offset that still fills `area`
    pub fn max_scroll(&self, area: Rect) -> u16 {
        let inner = Self::block(None).inner(area);
        let total = self.content_lines(inner.width).len();
        total.saturating_sub(inner.height as usize).min(u16::MAX as usize) as u16
    }

    fn block(chapter: Option<&str>) -> ratatui::widgets::Block<'static> {
        let block = styles::glass_block(true);
        match chapter {
            Some(title) => block.title(format!(" {title} ")),
            None => block,
        }
    }

    fn chapter_title(&self) -> &str {
        let index = self.player.cursor.index();
        self.player
            .chapters
            .iter()
            .find(|c| c.scenes.contains(&index))
            .map_or(OVERVIEW_CHAPTER, |c| c.title.as_str())
    }
}

impl Widget for ScenePlayer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Self::block(Some(self.chapter_title()));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let max = self.max_scroll(area);
        Paragraph::new(self.content_lines(inner.width))
            .scroll((self.player.scroll.min(max), 0))
            .render(inner, buf);
    }
}

/// Greedy word wrap by display width; words wider than `width` are split
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    for paragraph in text.lines() {
        let mut row = String::new();
        let mut row_width = 0;
        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let gap = usize::from(row_width > 0);
            if row_width + gap + word_width <= width {
                if gap == 1 {
                    row.push(' ');
                }
                row.push_str(word);
                row_width += gap + word_width;
                continue;
            }
            if row_width > 0 {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            for c in word.chars() {
                let w = c.width().unwrap_or(0);
                if row_width + w > width && row_width > 0 {
                    rows.push(std::mem::take(&mut row));
                    row_width = 0;
                }
                row.push(c);
                row_width += w;
            }
        }
        rows.push(row);
    }
    if rows.is_empty() {
        rows.push(String::new());
    }
    rows
}
