//! Narration transport bar

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{LineGauge, Widget},
};
use vibeparse_app::audio::AudioPlayer;

use crate::theme::{palette, styles};

const PLAYING_ICON: &str = "▶";
const PAUSED_ICON: &str = "❙❙";

pub struct AudioBar<'a> {
    audio: &'a AudioPlayer,
}

impl<'a> AudioBar<'a> {
    pub fn new(audio: &'a AudioPlayer) -> Self {
        Self { audio }
    }
}

impl Widget for AudioBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (icon, style) = if self.audio.playing {
            (PLAYING_ICON, styles::status_green())
        } else {
            (PAUSED_ICON, styles::text_secondary())
        };
        LineGauge::default()
            .ratio(self.audio.ratio())
            .label(format!(" {icon} {} ", self.audio.time_label()))
            .style(style)
            .filled_style(styles::accent())
            .unfilled_style(Style::default().fg(palette::BORDER_DIM))
            .render(area, buf);
    }
}
