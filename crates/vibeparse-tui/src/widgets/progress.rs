//! Scene progress gauge

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{LineGauge, Widget},
};
use vibeparse_app::SceneCursor;

use crate::theme::{palette, styles};

/// "Scene i of N" followed by a line gauge at `(i) / N`
pub struct SceneProgress<'a> {
    cursor: &'a SceneCursor,
}

impl<'a> SceneProgress<'a> {
    pub fn new(cursor: &'a SceneCursor) -> Self {
        Self { cursor }
    }
}

impl Widget for SceneProgress<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        LineGauge::default()
            .ratio(self.cursor.progress())
            .label(format!(" {} ", self.cursor.label()))
            .style(styles::text_secondary())
            .filled_style(styles::accent())
            .unfilled_style(ratatui::style::Style::default().fg(palette::BORDER_DIM))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_label_shows_position() {
        let mut cursor = SceneCursor::new(5).unwrap();
        cursor.jump(1);

        let mut term = TestTerminal::with_size(40, 1);
        term.render_widget(SceneProgress::new(&cursor), term.area());
        assert!(term.buffer_contains("Scene 2 of 5"));
    }

    #[test]
    fn test_label_updates_on_last_scene() {
        let mut cursor = SceneCursor::new(2).unwrap();
        cursor.next();

        let mut term = TestTerminal::with_size(30, 1);
        term.render_widget(SceneProgress::new(&cursor), term.area());
        assert!(term.buffer_contains("Scene 2 of 2"));
        assert!(!term.buffer_contains("Scene 1"));
    }
}
