//! Syntax-coloured code block with line numbers

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use vibeparse_core::{CodeHighlight, HighlightCode, Highlighter, InvalidCode, Language};

use crate::theme::{palette, styles};

const TAB: &str = "    ";

/// Placeholder shown instead of a highlight whose `code` was not a string
pub fn invalid_code_message(err: &InvalidCode) -> String {
    format!("Invalid code data (expected string, found {})", err.found)
}

/// One highlight's code, numbered from its `start_line`
pub struct CodeBlock<'a> {
    highlight: &'a CodeHighlight,
    line_numbers: bool,
}

impl<'a> CodeBlock<'a> {
    pub fn new(highlight: &'a CodeHighlight) -> Self {
        Self {
            highlight,
            line_numbers: true,
        }
    }

    pub fn line_numbers(mut self, show: bool) -> Self {
        self.line_numbers = show;
        self
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let code = match &self.highlight.code {
            HighlightCode::Source(code) => code,
            HighlightCode::Invalid(err) => {
                return vec![Line::styled(
                    invalid_code_message(err),
                    styles::status_red(),
                )];
            }
        };

        let language = Language::from_path(&self.highlight.file_path);
        let tokenized = Highlighter::highlight(language, code);
        let first = self.highlight.start_line.max(1) as usize;
        let gutter = (first + tokenized.len().saturating_sub(1)).to_string().len();

        tokenized
            .into_iter()
            .enumerate()
            .map(|(i, tokens)| {
                let mut spans = Vec::with_capacity(tokens.len() + 1);
                if self.line_numbers {
                    spans.push(Span::styled(
                        format!("{:>gutter$} │ ", first + i),
                        styles::line_number(),
                    ));
                }
                spans.extend(
                    tokens
                        .into_iter()
                        .map(|t| Span::styled(t.text.replace('\t', TAB), styles::token(t.kind))),
                );
                Line::from(spans)
            })
            .collect()
    }
}

impl Widget for CodeBlock<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines())
            .style(Style::default().bg(palette::CODE_BG))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_script, TestTerminal};

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_numbers_start_at_start_line() {
        let script = test_script();
        let hl = &script.scenes[1].code_highlights[0];
        let lines = CodeBlock::new(hl).lines();

        assert_eq!(lines.len(), 3);
        assert_eq!(line_text(&lines[0]), "3 │ fn main() {");
        assert_eq!(line_text(&lines[2]), "5 │ }");
    }

    #[test]
    fn test_line_numbers_can_be_hidden() {
        let script = test_script();
        let hl = &script.scenes[1].code_highlights[0];
        let lines = CodeBlock::new(hl).line_numbers(false).lines();
        assert_eq!(line_text(&lines[1]), "    run();");
    }

    #[test]
    fn test_gutter_width_follows_last_number() {
        let mut hl = test_script().scenes[1].code_highlights[0].clone();
        hl.start_line = 9;
        let lines = CodeBlock::new(&hl).lines();
        assert_eq!(line_text(&lines[0]), " 9 │ fn main() {");
        assert_eq!(line_text(&lines[2]), "11 │ }");
    }

    #[test]
    fn test_keyword_is_coloured() {
        let script = test_script();
        let hl = &script.scenes[1].code_highlights[0];
        let lines = CodeBlock::new(hl).lines();
        let fn_span = lines[0]
            .spans
            .iter()
            .find(|s| s.content == "fn")
            .expect("keyword span");
        assert_eq!(fn_span.style.fg, Some(palette::SYNTAX_KEYWORD));
    }

    #[test]
    fn test_invalid_code_renders_placeholder() {
        let script = test_script();
        let hl = &script.scenes[1].code_highlights[1];

        let mut term = TestTerminal::with_size(60, 3);
        term.render_widget(CodeBlock::new(hl), term.area());

        assert!(term.buffer_contains("Invalid code data (expected string, found object)"));
        assert_eq!(term.buffer()[(0, 0)].fg, palette::STATUS_RED);
    }
}
