//! Main render/view function (View in TEA pattern)


use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;
use vibeparse_app::form::{DropdownKind, GenerationForm};
use vibeparse_app::player::{LoadState, LoadedPlayer, PlayerPage};
use vibeparse_app::toc::toc_lines;
use vibeparse_app::{AppState, Page};
use vibeparse_core::{Depth, Proficiency};

use super::layout;
use crate::theme::{palette, styles};
use crate::widgets::modal_overlay::{centered_rect, to_area};
use crate::widgets::status_bar::key_hints;
use crate::widgets::{
    AudioBar, DropdownView, GenerationFormView, MainHeader, NoticeView, SceneProgress,
    ScenePlayer, StatusBar, TocOverlayView,
};

pub const LOADING_MESSAGE: &str = "Loading...";
const FAILED_HINT: &str = "Press r to retry or Esc to go back";
const FORM_MAX_WIDTH: u16 = 76;

/// Render the complete UI (View function in TEA)
///
/// Besides drawing, this records render-derived state: the scene body's
/// scroll limit and where each open overlay was drawn, so pointer presses
/// can be matched against it.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);
    let source = state.player().and_then(|page| page.source.as_ref());
    frame.render_widget(
        MainHeader::new(&state.api_base_url).with_source(source),
        areas.header,
    );

    let line_numbers = state.settings.player.show_line_numbers;
    match &mut state.page {
        Page::Index(form) => {
            let column = layout::form_column(areas.body, FORM_MAX_WIDTH);
            frame.render_widget(GenerationFormView::new(form), column);
        }
        Page::Player(page) => render_player(frame, areas.body, page, line_numbers),
    }

    frame.render_widget(
        StatusBar::new(key_hints(state)).toast(state.toast.as_ref()),
        areas.status,
    );

    // Overlays last so they sit above the status line too
    match &state.page {
        Page::Index(form) => render_form_overlays(frame, area, form),
        Page::Player(page) => {
            if let Some(player) = page.loaded() {
                render_toc(frame, area, player);
            }
        }
    }
}

fn render_player(frame: &mut Frame, body: Rect, page: &mut PlayerPage, line_numbers: bool) {
    match &mut page.load {
        LoadState::Loading => {
            let line = Line::styled(LOADING_MESSAGE, styles::text_secondary()).centered();
            frame.render_widget(Paragraph::new(line), centered_rect(body.width, 1, body));
        }
        LoadState::Failed(message) => {
            let lines = vec![
                Line::styled(message.clone(), styles::status_red()).centered(),
                Line::default(),
                Line::styled(FAILED_HINT, styles::text_muted()).centered(),
            ];
            frame.render_widget(
                Paragraph::new(lines).wrap(Wrap { trim: true }),
                centered_rect(body.width, 3, body),
            );
        }
        LoadState::Loaded(player) => {
            let areas = layout::player(body);
            let max = ScenePlayer::new(player)
                .line_numbers(line_numbers)
                .max_scroll(areas.scene);
            player.scroll_max = max;
            player.scroll = player.scroll.min(max);

            frame.render_widget(SceneProgress::new(&player.cursor), areas.progress);
            frame.render_widget(
                ScenePlayer::new(player).line_numbers(line_numbers),
                areas.scene,
            );
            frame.render_widget(AudioBar::new(&player.audio), areas.audio);
        }
    }
}

fn render_toc(frame: &mut Frame, area: Rect, player: &LoadedPlayer) {
    let Some(toc) = &player.toc else {
        return;
    };
    let lines = toc_lines(&player.script, &player.chapters);
    let view = TocOverlayView::new(&lines, toc.selected, player.cursor.index());
    toc.guard
        .set_layout(to_area(view.popup(area)), view.hit_targets(area));
    frame.render_widget(view, area);
}

fn render_form_overlays(frame: &mut Frame, area: Rect, form: &GenerationForm) {
    if let Some(dropdown) = &form.dropdown {
        let chosen = match dropdown.kind {
            DropdownKind::Proficiency => Proficiency::ALL
                .iter()
                .position(|p| *p == form.proficiency),
            DropdownKind::Depth => Depth::ALL.iter().position(|d| *d == form.depth),
        }
        .unwrap_or(0);
        let view = DropdownView::new(dropdown, chosen);
        dropdown
            .guard
            .set_layout(to_area(view.popup(area)), view.hit_targets(area));
        frame.render_widget(view, area);
    }

    if let Some(notice) = &form.notice {
        let view = NoticeView::new(notice);
        notice.guard.set_layout(to_area(view.popup(area)), Vec::new());
        frame.render_widget(view, area);
    }
}
