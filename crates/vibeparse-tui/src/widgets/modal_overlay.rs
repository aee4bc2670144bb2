//! Shared modal helpers: centering, background dimming, drop shadow.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use vibeparse_app::Area;

use crate::theme::palette;

/// Terminal rect as a pointer hit area
pub fn to_area(rect: Rect) -> Area {
    Area::new(rect.x, rect.y, rect.width, rect.height)
}

/// Center a fixed-size rect within an area, clamped to the area
///
/// ```
/// use ratatui::layout::Rect;
/// use vibeparse_tui::widgets::modal_overlay::centered_rect;
///
/// let modal = centered_rect(40, 10, Rect::new(0, 0, 80, 24));
/// assert_eq!(modal, Rect::new(20, 7, 40, 10));
/// ```
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Dim every cell in `area` so the modal on top stands out
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let dim_style = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);

    for y in area.y..area.y.saturating_add(area.height) {
        for x in area.x..area.x.saturating_add(area.width) {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim_style);
            }
        }
    }
}

/// One-cell shadow along the right and bottom edges of `modal`
pub fn render_shadow(buf: &mut Buffer, modal: Rect) {
    let shadow_style = Style::default().fg(palette::SHADOW).bg(palette::SHADOW);
    let right_x = modal.x.saturating_add(modal.width);
    let bottom_y = modal.y.saturating_add(modal.height);

    let right = (modal.y.saturating_add(1)..=bottom_y).map(|y| (right_x, y));
    let bottom = (modal.x.saturating_add(1)..=right_x).map(|x| (x, bottom_y));
    for pos in right.chain(bottom) {
        if let Some(cell) = buf.cell_mut(pos) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 30, 8);
        assert_eq!(centered_rect(40, 10, area), area);
    }

    #[test]
    fn test_centered_rect_respects_offset() {
        let area = Rect::new(10, 5, 20, 10);
        assert_eq!(centered_rect(10, 4, area), Rect::new(15, 8, 10, 4));
    }

    #[test]
    fn test_shadow_stays_inside_buffer() {
        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);
        // Shadow would land at x = 10 / y = 5, outside the buffer
        render_shadow(&mut buf, area);
        render_shadow(&mut buf, Rect::new(2, 1, 4, 2));
        assert_eq!(buf[(6, 2)].bg, palette::SHADOW);
        assert_eq!(buf[(3, 3)].bg, palette::SHADOW);
    }

    #[test]
    fn test_dim_background_sets_muted_fg() {
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        dim_background(&mut buf, area);
        assert_eq!(buf[(3, 1)].fg, palette::TEXT_MUTED);
    }
}
