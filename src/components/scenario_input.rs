// ABOUTME: Scenario input column: editable description, generate trigger, and example list

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::app::{AppState, Focus};
use crate::scenario::{ScenarioText, EXAMPLE_SCENARIOS, SCENARIO_PLACEHOLDER};

const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const DARK_BG: Color = Color::Rgb(25, 25, 35);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);

pub const TRIGGER_LABEL: &str = "Generate AML Scenario";
pub const TRIGGER_BUSY_LABEL: &str = "Generating Scenario...";

pub struct ScenarioInputComponent;

impl ScenarioInputComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(6),    // Scenario text
                Constraint::Length(3), // Trigger
                Constraint::Length(8), // Examples
            ])
            .split(area);

        self.render_editor(frame, layout[0], state);
        self.render_trigger(frame, layout[1], state);
        self.render_examples(frame, layout[2], state);
    }

    fn render_editor(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let focused = state.focus == Focus::Input && !state.help_visible;
        let border_color = if focused { GOLD } else { SUBDUED_BORDER };

        let block = Block::default()
            .title(" Describe Your AML Scenario ")
            .title_style(Style::default().fg(CORNFLOWER_BLUE).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(PANEL_BG));

        let editor = Paragraph::new(Self::editor_line(&state.scenario, focused))
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(editor, area);
    }

    /// Scenario text with a block cursor, or the placeholder when empty
    pub fn editor_line(scenario: &ScenarioText, show_cursor: bool) -> Line<'static> {
        let cursor_style = Style::default().fg(DARK_BG).bg(SOFT_WHITE);
        let text_style = Style::default().fg(SOFT_WHITE);

        if scenario.as_str().is_empty() {
            let mut spans = Vec::new();
            if show_cursor {
                spans.push(Span::styled(" ", cursor_style));
            }
            spans.push(Span::styled(
                SCENARIO_PLACEHOLDER,
                Style::default().fg(MUTED_GRAY).add_modifier(Modifier::ITALIC),
            ));
            return Line::from(spans);
        }

        if !show_cursor {
            return Line::from(Span::styled(scenario.as_str().to_string(), text_style));
        }

        let chars: Vec<char> = scenario.as_str().chars().collect();
        let cursor = scenario.cursor().min(chars.len());
        let before: String = chars[..cursor].iter().collect();
        let (at, after) = match chars.get(cursor) {
            Some(c) => (c.to_string(), chars[cursor + 1..].iter().collect::<String>()),
            None => (" ".to_string(), String::new()),
        };

        Line::from(vec![
            Span::styled(before, text_style),
            Span::styled(at, cursor_style),
            Span::styled(after, text_style),
        ])
    }

    pub fn trigger_label(state: &AppState) -> &'static str {
        if state.wizard.is_processing {
            TRIGGER_BUSY_LABEL
        } else {
            TRIGGER_LABEL
        }
    }

    fn render_trigger(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let enabled = state.can_generate();
        let (fg, border) = if enabled {
            (GOLD, SELECTION_GREEN)
        } else {
            (MUTED_GRAY, SUBDUED_BORDER)
        };

        let icon = if state.wizard.is_processing { "⟳ " } else { "⚡ " };
        let mut label_style = Style::default().fg(fg).add_modifier(Modifier::BOLD);
        if !enabled {
            label_style = Style::default().fg(fg).add_modifier(Modifier::DIM);
        }

        let trigger = Paragraph::new(Line::from(vec![
            Span::styled(icon, Style::default().fg(fg)),
            Span::styled(Self::trigger_label(state), label_style),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border))
                .style(Style::default().bg(PANEL_BG)),
        );
        frame.render_widget(trigger, area);
    }

    fn render_examples(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let mut lines = Vec::with_capacity(EXAMPLE_SCENARIOS.len());
        for (idx, example) in EXAMPLE_SCENARIOS.iter().enumerate() {
            let selected = state.scenario.as_str() == *example;
            let text_color = if selected { SELECTION_GREEN } else { SOFT_WHITE };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} ", idx + 1),
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                ),
                Span::styled(*example, Style::default().fg(text_color)),
            ]));
        }

        let examples = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" Example Scenarios ")
                    .title_style(Style::default().fg(CORNFLOWER_BLUE))
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(SUBDUED_BORDER))
                    .style(Style::default().bg(PANEL_BG)),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(examples, area);
    }
}

impl Default for ScenarioInputComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_empty_scenario_shows_placeholder() {
        let line = ScenarioInputComponent::editor_line(&ScenarioText::new(), false);
        assert_eq!(line_text(&line), SCENARIO_PLACEHOLDER);
    }

    #[test]
    fn test_cursor_splits_text_at_position() {
        let mut scenario = ScenarioText::from_text("wire");
        scenario.cursor_home();
        scenario.cursor_right();

        let line = ScenarioInputComponent::editor_line(&scenario, true);
        let parts: Vec<&str> = line.spans.iter().map(|span| span.content.as_ref()).collect();
        assert_eq!(parts, vec!["w", "i", "re"]);
    }

    #[test]
    fn test_cursor_at_end_adds_block() {
        let scenario = ScenarioText::from_text("wire");
        let line = ScenarioInputComponent::editor_line(&scenario, true);
        assert_eq!(line_text(&line), "wire ");
    }

    #[test]
    fn test_trigger_label_follows_processing() {
        let mut state = AppState::new();
        assert_eq!(ScenarioInputComponent::trigger_label(&state), TRIGGER_LABEL);
        state.wizard.is_processing = true;
        assert_eq!(ScenarioInputComponent::trigger_label(&state), TRIGGER_BUSY_LABEL);
    }
}
