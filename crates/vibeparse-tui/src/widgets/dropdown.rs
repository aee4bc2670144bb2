//! Option list for the proficiency and depth selectors

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Clear, Paragraph, Widget},
};
use vibeparse_app::form::{Dropdown, DropdownKind};
use vibeparse_app::overlay::HitTarget;

use super::modal_overlay::{centered_rect, render_shadow, to_area};
use crate::theme::styles;

const WIDTH: u16 = 32;

pub fn dropdown_title(kind: DropdownKind) -> &'static str {
    match kind {
        DropdownKind::Proficiency => " Proficiency ",
        DropdownKind::Depth => " Depth ",
    }
}

pub struct DropdownView<'a> {
    dropdown: &'a Dropdown,
    /// Option currently stored in the form
    chosen: usize,
}

impl<'a> DropdownView<'a> {
    pub fn new(dropdown: &'a Dropdown, chosen: usize) -> Self {
        Self { dropdown, chosen }
    }

    pub fn popup(&self, area: Rect) -> Rect {
        let height = self.dropdown.option_count() as u16 + 2;
        centered_rect(WIDTH, height, area)
    }

    pub fn hit_targets(&self, area: Rect) -> Vec<HitTarget> {
        let inner = styles::modal_block("").inner(self.popup(area));
        (0..self.dropdown.option_count())
            .filter(|&i| (i as u16) < inner.height)
            .map(|i| HitTarget {
                area: to_area(Rect::new(inner.x, inner.y + i as u16, inner.width, 1)),
                index: i,
            })
            .collect()
    }
}

impl Widget for DropdownView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = self.popup(area);
        render_shadow(buf, popup);
        Clear.render(popup, buf);

        let block = styles::modal_block(dropdown_title(self.dropdown.kind));
        let inner = block.inner(popup);
        block.render(popup, buf);

        let lines: Vec<Line> = self
            .dropdown
            .kind
            .options()
            .into_iter()
            .enumerate()
            .map(|(i, label)| {
                let check = if i == self.chosen { "✓ " } else { "  " };
                let style = if i == self.dropdown.highlighted {
                    styles::focused_selected()
                } else {
                    styles::text_primary()
                };
                Line::styled(format!("{check}{label}"), style)
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}
