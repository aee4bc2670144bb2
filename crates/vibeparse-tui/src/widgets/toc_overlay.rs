//! Table-of-contents modal
//!
//! The popup scrolls so the selected scene stays visible; only the visible
//! scene rows are reported as click targets.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::Line,
    widgets::{Clear, Paragraph, Widget},
};
use vibeparse_app::overlay::HitTarget;
use vibeparse_app::toc::TocLine;

use super::modal_overlay::{centered_rect, dim_background, render_shadow, to_area};
use crate::theme::styles;

pub const TOC_TITLE: &str = " Table of Contents ";
const MAX_WIDTH: u16 = 64;
const SKIPPED_HEADING: &str = "Skipped files";

pub struct TocOverlayView<'a> {
    lines: &'a [TocLine],
    /// Highlighted scene
    selected: usize,
    /// Scene on screen behind the overlay
    current: usize,
}

impl<'a> TocOverlayView<'a> {
    pub fn new(lines: &'a [TocLine], selected: usize, current: usize) -> Self {
        Self {
            lines,
            selected,
            current,
        }
    }

    /// Popup rect inside the full screen `area`
    pub fn popup(&self, area: Rect) -> Rect {
        let height = (self.lines.len() as u16).saturating_add(2);
        centered_rect(
            MAX_WIDTH.min(area.width.saturating_sub(4)),
            height.min(area.height.saturating_sub(2)),
            area,
        )
    }

    fn inner(&self, area: Rect) -> Rect {
        styles::modal_block(TOC_TITLE).inner(self.popup(area))
    }

    /// First line shown, keeping the selected scene in view
    fn offset(&self, visible: usize) -> usize {
        let row = self
            .lines
            .iter()
            .position(|l| matches!(l, TocLine::Scene { index, .. } if *index == self.selected))
            .unwrap_or(0);
        if visible == 0 || row < visible {
            0
        } else {
            row + 1 - visible
        }
    }

    /// Clickable rows for the visible scenes
    pub fn hit_targets(&self, area: Rect) -> Vec<HitTarget> {
        let inner = self.inner(area);
        let visible = inner.height as usize;
        self.lines
            .iter()
            .enumerate()
            .skip(self.offset(visible))
            .take(visible)
            .enumerate()
            .filter_map(|(row, (_, line))| match line {
                TocLine::Scene { index, .. } => Some(HitTarget {
                    area: to_area(Rect::new(inner.x, inner.y + row as u16, inner.width, 1)),
                    index: *index,
                }),
                _ => None,
            })
            .collect()
    }

    fn render_line(&self, line: &TocLine) -> Line<'static> {
        match line {
            TocLine::Chapter(title) => Line::styled(title.clone(), styles::accent_bold()),
            TocLine::Scene { index, label } => {
                let marker = if *index == self.current { "● " } else { "  " };
                let text = format!("{marker}{label}");
                if *index == self.selected {
                    Line::styled(text, styles::focused_selected())
                } else {
                    Line::styled(text, styles::text_primary())
                }
            }
            TocLine::SkippedHeading => Line::styled(
                SKIPPED_HEADING,
                styles::status_yellow().add_modifier(Modifier::BOLD),
            ),
            TocLine::SkippedFile(path) => Line::styled(format!("  {path}"), styles::text_muted()),
        }
    }
}

impl Widget for TocOverlayView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);
        let popup = self.popup(area);
        render_shadow(buf, popup);
        Clear.render(popup, buf);

        let block = styles::modal_block(TOC_TITLE);
        let inner = block.inner(popup);
        block.render(popup, buf);

        let visible = inner.height as usize;
        let lines: Vec<Line> = self
            .lines
            .iter()
            .skip(self.offset(visible))
            .take(visible)
            .map(|line| self.render_line(line))
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_script, TestTerminal};
    use vibeparse_app::toc::toc_lines;

    fn lines() -> Vec<TocLine> {
        let script = test_script();
        toc_lines(&script, &script.chapters())
    }

    #[test]
    fn test_lists_chapters_scenes_and_skipped_files() {
        let lines = lines();
        let mut term = TestTerminal::new();
        term.render_widget(TocOverlayView::new(&lines, 0, 0), term.area());

        assert!(term.buffer_contains("Table of Contents"));
        assert!(term.buffer_contains("Overview"));
        assert!(term.buffer_contains("1. Intro"));
        assert!(term.buffer_contains("2. Entry point"));
        assert!(term.buffer_contains("3. Wrap up"));
        assert!(term.buffer_contains("Skipped files"));
        assert!(term.buffer_contains("assets/logo.png"));
    }

    #[test]
    fn test_hit_targets_cover_scene_rows() {
        let lines = lines();
        let view = TocOverlayView::new(&lines, 0, 0);
        let mut term = TestTerminal::new();
        let area = term.area();
        let targets = view.hit_targets(area);
        term.render_widget(view, area);

        let indices: Vec<usize> = targets.iter().map(|t| t.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        for target in &targets {
            let label = format!("{}. ", target.index + 1);
            assert!(term.line_contains(target.area.y, &label));
        }
    }

    #[test]
    fn test_selected_scene_scrolls_into_view() {
        let lines = lines();
        // Popup of 5 rows leaves 3 visible lines
        let area = Rect::new(0, 0, 60, 7);
        let view = TocOverlayView::new(&lines, 2, 0);
        let targets = view.hit_targets(area);

        assert!(targets.iter().any(|t| t.index == 2));
        assert!(!targets.iter().any(|t| t.index == 0));
    }
}
