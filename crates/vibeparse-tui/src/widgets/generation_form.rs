//! Generation form page

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;
use vibeparse_app::form::{ConfigStatus, FormField, FormTab, GenerationForm, TextInput};

use crate::theme::{palette, styles};

pub const FORM_TITLE: &str = "Generate Code Explanation Script";
pub const SUBMIT_LABEL: &str = "Generate Script";
pub const SUBMITTING_LABEL: &str = "Generating...";
pub const MOCK_BANNER: &str = "Mock LLM mode: canned output, GitHub URL optional";
const CONFIG_PENDING: &str = "Checking backend configuration...";
const CONFIG_UNAVAILABLE: &str = "Backend configuration unavailable";
const URL_PLACEHOLDER: &str = "https://github.com/owner/repo";
const EMAIL_PLACEHOLDER: &str = "you@example.com";

/// Width of the label column for selector rows
const LABEL_WIDTH: u16 = 13;

pub struct GenerationFormView<'a> {
    form: &'a GenerationForm,
}

impl<'a> GenerationFormView<'a> {
    pub fn new(form: &'a GenerationForm) -> Self {
        Self { form }
    }

    fn focused(&self, field: FormField) -> bool {
        self.form.focus == field && self.form.dropdown.is_none() && self.form.notice.is_none()
    }

    fn status_line(&self) -> Line<'static> {
        match (self.form.config, self.form.mock_mode) {
            (_, true) => Line::styled(
                MOCK_BANNER,
                styles::status_yellow().add_modifier(Modifier::BOLD),
            ),
            (ConfigStatus::Pending, false) => Line::styled(CONFIG_PENDING, styles::text_muted()),
            (ConfigStatus::Unavailable, false) => {
                Line::styled(CONFIG_UNAVAILABLE, styles::text_muted())
            }
            (ConfigStatus::Loaded, false) => Line::default(),
        }
    }

    fn tabs_line(&self) -> Line<'static> {
        let focused = self.focused(FormField::Tabs);
        let mut spans = Vec::new();
        for tab in FormTab::ALL {
            let label = format!(" {} ", tab.label());
            let style = if tab == self.form.tab {
                if focused {
                    styles::focused_selected()
                } else {
                    styles::accent_bold().add_modifier(Modifier::UNDERLINED)
                }
            } else if tab.is_enabled() {
                styles::text_secondary()
            } else {
                styles::text_muted()
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }

    fn selector_line(&self, label: &str, value: &str, field: FormField) -> Line<'static> {
        let value_style = if self.focused(field) {
            styles::focused_selected()
        } else {
            styles::text_primary()
        };
        Line::from(vec![
            Span::styled(
                format!("{label:<width$}", width = LABEL_WIDTH as usize),
                styles::text_secondary(),
            ),
            Span::styled(format!(" {value} ▾ "), value_style),
        ])
    }

    /// Checkbox rows, flowed to fit `width`
    fn file_type_lines(&self, width: u16) -> Vec<Line<'static>> {
        let focused = self.focused(FormField::FileTypes);
        let avail = width.saturating_sub(LABEL_WIDTH).max(1) as usize;
        let mut lines = Vec::new();
        let mut spans = vec![Span::styled(
            format!("{:<width$}", "File Types", width = LABEL_WIDTH as usize),
            styles::text_secondary(),
        )];
        let mut used = 0;

        for (i, option) in self.form.file_types.iter().enumerate() {
            let item = format!(
                "[{}] {}",
                if option.checked { "x" } else { " " },
                option.extension
            );
            let item_width = item.width();
            if used > 0 && used + 2 + item_width > avail {
                lines.push(Line::from(std::mem::take(&mut spans)));
                spans.push(Span::raw(" ".repeat(LABEL_WIDTH as usize)));
                used = 0;
            }
            if used > 0 {
                spans.push(Span::raw("  "));
                used += 2;
            }
            let style = if focused && i == self.form.file_type_cursor {
                styles::focused_selected()
            } else if option.checked {
                styles::accent()
            } else {
                styles::text_primary()
            };
            spans.push(Span::styled(item, style));
            used += item_width;
        }
        lines.push(Line::from(spans));
        lines
    }

    fn submit_line(&self) -> Line<'static> {
        let label = if self.form.loading {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        };
        let style = if self.form.loading {
            styles::text_muted()
        } else if self.focused(FormField::Submit) {
            styles::focused_selected()
        } else {
            Style::default()
                .fg(palette::TEXT_PRIMARY)
                .bg(palette::POPUP_BG)
                .add_modifier(Modifier::BOLD)
        };
        Line::from(Span::styled(format!("  {label}  "), style)).centered()
    }
}

impl Widget for GenerationFormView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let file_type_lines = self.file_type_lines(area.width);
        let [title, status, tabs, _, url, url_error, proficiency, depth, file_types, _, email, email_error, submit, error] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(file_type_lines.len() as u16),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .areas(area);

        Paragraph::new(Line::styled(FORM_TITLE, styles::title())).render(title, buf);
        Paragraph::new(self.status_line()).render(status, buf);
        Paragraph::new(self.tabs_line()).render(tabs, buf);

        let url_label = if self.form.mock_mode {
            " GitHub URL (optional) "
        } else {
            " GitHub URL "
        };
        TextInputView::new(&self.form.github_url, url_label, URL_PLACEHOLDER)
            .focused(self.focused(FormField::GithubUrl))
            .invalid(self.form.field_errors.github_url.is_some())
            .render(url, buf);
        render_field_error(self.form.field_errors.github_url.as_deref(), url_error, buf);

        Paragraph::new(self.selector_line(
            "Proficiency",
            self.form.proficiency.label(),
            FormField::Proficiency,
        ))
        .render(proficiency, buf);
        Paragraph::new(self.selector_line("Depth", self.form.depth.label(), FormField::Depth))
            .render(depth, buf);
        Paragraph::new(file_type_lines).render(file_types, buf);

        TextInputView::new(&self.form.email, " Email (optional) ", EMAIL_PLACEHOLDER)
            .focused(self.focused(FormField::Email))
            .invalid(self.form.field_errors.email.is_some())
            .render(email, buf);
        render_field_error(self.form.field_errors.email.as_deref(), email_error, buf);

        Paragraph::new(self.submit_line()).render(submit, buf);

        if let Some(message) = &self.form.error {
            Paragraph::new(Line::styled(message.clone(), styles::status_red()))
                .wrap(Wrap { trim: true })
                .render(error, buf);
        }
    }
}

fn render_field_error(error: Option<&str>, area: Rect, buf: &mut Buffer) {
    if let Some(message) = error {
        Paragraph::new(Line::styled(format!(" {message}"), styles::status_red())).render(area, buf);
    }
}

/// Bordered single-line input; the cursor cell is drawn reversed when focused
pub struct TextInputView<'a> {
    input: &'a TextInput,
    label: &'a str,
    placeholder: &'a str,
    focused: bool,
    invalid: bool,
}

impl<'a> TextInputView<'a> {
    pub fn new(input: &'a TextInput, label: &'a str, placeholder: &'a str) -> Self {
        Self {
            input,
            label,
            placeholder,
            focused: false,
            invalid: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }
}

impl Widget for TextInputView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = styles::glass_block(self.focused).title(self.label);
        if self.invalid {
            block = block.border_style(styles::status_red());
        }
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.input.value().is_empty() && !self.focused {
            buf.set_string(inner.x, inner.y, self.placeholder, styles::text_muted());
            return;
        }

        let (visible, cursor_col) = visible_window(self.input, inner.width as usize);
        buf.set_stringn(
            inner.x,
            inner.y,
            &visible,
            inner.width as usize,
            styles::text_primary(),
        );
        if self.focused {
            if let Some(cell) = buf.cell_mut((inner.x + cursor_col as u16, inner.y)) {
                cell.set_style(Style::default().add_modifier(Modifier::REVERSED));
            }
        }
    }
}

/// Slice of the value that keeps the cursor on screen, and the cursor column
fn visible_window(input: &TextInput, width: usize) -> (String, usize) {
    let width = width.max(1);
    let start = input.cursor().saturating_sub(width - 1);
    let visible: String = input.value().chars().skip(start).take(width).collect();
    (visible, input.cursor() - start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{form_state, TestTerminal};

    #[test]
    fn test_visible_window_follows_cursor() {
        let input = TextInput::with_value("abcdefghij");
        assert_eq!(visible_window(&input, 4), ("hij".to_string(), 3));

        let mut input = TextInput::with_value("abcdefghij");
        input.move_home();
        assert_eq!(visible_window(&input, 4), ("abcd".to_string(), 0));
    }

    #[test]
    fn test_form_renders_fields() {
        let state = form_state();
        let mut term = TestTerminal::with_size(80, 22);
        term.render_widget(GenerationFormView::new(state.form().unwrap()), term.area());

        assert!(term.line_contains(0, FORM_TITLE));
        assert!(term.buffer_contains("File"));
        assert!(term.buffer_contains("Recent changes"));
        assert!(term.buffer_contains("GitHub URL"));
        assert!(term.buffer_contains("Proficiency"));
        assert!(term.buffer_contains("Beginner ▾"));
        assert!(term.buffer_contains("[ ] .py"));
        assert!(term.buffer_contains("[ ] .rs"));
        assert!(term.buffer_contains("Email (optional)"));
        assert!(term.buffer_contains(SUBMIT_LABEL));
        assert!(term.buffer_contains(CONFIG_PENDING));
    }

    #[test]
    fn test_mock_banner_and_optional_url() {
        let mut state = form_state();
        let form = state.form_mut().unwrap();
        form.config = ConfigStatus::Loaded;
        form.mock_mode = true;

        let mut term = TestTerminal::with_size(80, 22);
        term.render_widget(GenerationFormView::new(state.form().unwrap()), term.area());

        assert!(term.buffer_contains(MOCK_BANNER));
        assert!(term.buffer_contains("GitHub URL (optional)"));
    }

    #[test]
    fn test_inline_errors_and_request_error() {
        let mut state = form_state();
        let form = state.form_mut().unwrap();
        form.field_errors.github_url = Some("GitHub URL is required".into());
        form.error = Some("Repository not found".into());

        let mut term = TestTerminal::with_size(80, 22);
        term.render_widget(GenerationFormView::new(state.form().unwrap()), term.area());

        assert!(term.buffer_contains("GitHub URL is required"));
        assert!(term.buffer_contains("Repository not found"));
    }

    #[test]
    fn test_loading_changes_button() {
        let mut state = form_state();
        state.form_mut().unwrap().loading = true;

        let mut term = TestTerminal::with_size(80, 22);
        term.render_widget(GenerationFormView::new(state.form().unwrap()), term.area());

        assert!(term.buffer_contains(SUBMITTING_LABEL));
        assert!(!term.buffer_contains(SUBMIT_LABEL));
    }

    #[test]
    fn test_typed_url_is_shown() {
        let mut state = form_state();
        state.form_mut().unwrap().github_url = TextInput::with_value("https://github.com/x/y");

        let mut term = TestTerminal::with_size(80, 22);
        term.render_widget(GenerationFormView::new(state.form().unwrap()), term.area());

        assert!(term.buffer_contains("https://github.com/x/y"));
        assert!(!term.buffer_contains(URL_PLACEHOLDER));
    }
}
