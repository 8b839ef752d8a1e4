// ABOUTME: Code panel with Main Logic / Utilities / Configuration sub-tabs and copy feedback
// Python blocks are highlighted through syntect and converted from ANSI into ratatui text

use ansi_to_tui::IntoText;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
};

use crate::catalog::{CodeBlock, CODE_BADGES, CODE_FEATURES_NOTE};
use crate::widgets::syntax_highlighter::format_code_block;

const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);

pub struct CodeViewerComponent;

impl CodeViewerComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn lines(
        &self,
        active: CodeBlock,
        copy_label: &'static str,
        use_highlighting: bool,
    ) -> Vec<Line<'static>> {
        let mut lines = vec![
            Self::block_tabs(active),
            Self::badge_line(),
            Self::action_line(copy_label),
            Line::from(Span::styled("─".repeat(72), Style::default().fg(SUBDUED_BORDER))),
        ];

        lines.extend(Self::code_lines(active, use_highlighting));

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Code Features",
            Style::default().fg(CORNFLOWER_BLUE).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            CODE_FEATURES_NOTE,
            Style::default().fg(MUTED_GRAY),
        )));
        lines
    }

    fn block_tabs(active: CodeBlock) -> Line<'static> {
        let mut spans = Vec::new();
        for (idx, block) in CodeBlock::all().iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(SUBDUED_BORDER)));
            }
            if *block == active {
                spans.push(Span::styled(
                    format!("[{}]", block.title()),
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::styled(
                    format!(" {} ", block.title()),
                    Style::default().fg(MUTED_GRAY),
                ));
            }
        }
        Line::from(spans)
    }

    fn badge_line() -> Line<'static> {
        let mut spans = Vec::new();
        for badge in CODE_BADGES.iter() {
            spans.push(Span::styled(
                format!("[{}]", badge),
                Style::default().fg(CORNFLOWER_BLUE),
            ));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }

    fn action_line(copy_label: &'static str) -> Line<'static> {
        let copy_color = if copy_label == "Copy" { SOFT_WHITE } else { SELECTION_GREEN };
        Line::from(vec![
            Span::styled("c", Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
            Span::styled(format!(" {}  ", copy_label), Style::default().fg(copy_color)),
            Span::styled("d", Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
            Span::styled(" Download  ", Style::default().fg(MUTED_GRAY)),
            Span::styled("t", Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
            Span::styled(" Run Test", Style::default().fg(MUTED_GRAY)),
        ])
    }

    fn code_lines(active: CodeBlock, use_highlighting: bool) -> Vec<Line<'static>> {
        let display_text = format_code_block(active.source(), use_highlighting).join("\n");
        if !use_highlighting {
            return Text::raw(display_text).lines;
        }

        display_text
            .into_text()
            .unwrap_or_else(|_| Text::raw(display_text.clone()))
            .lines
    }
}

impl Default for CodeViewerComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::code::UTILITIES;
    use crate::components::lines_to_plain_text;

    #[test]
    fn test_active_block_is_marked_and_shown() {
        let text = lines_to_plain_text(&CodeViewerComponent::new().lines(
            CodeBlock::Utils,
            "Copy",
            false,
        ));
        assert!(text.starts_with(" Main Logic  │ [Utilities] │  Configuration"));
        let first_source_line = UTILITIES.lines().next().unwrap_or_default();
        assert!(text.contains(&format!("   1 │ {}", first_source_line)));
        assert!(text.contains(CODE_FEATURES_NOTE));
    }

    #[test]
    fn test_copy_label_is_rendered() {
        let text = lines_to_plain_text(&CodeViewerComponent::new().lines(
            CodeBlock::Main,
            "Copied!",
            false,
        ));
        assert!(text.contains("c Copied!  d Download  t Run Test"));
    }

    #[test]
    fn test_highlighted_lines_keep_text() {
        let lines = CodeViewerComponent::new().lines(CodeBlock::Config, "Copy", true);
        let text = lines_to_plain_text(&lines);
        assert!(text.contains("AML_CONFIG"));
        assert!(!text.contains("\x1b["));
    }
}
