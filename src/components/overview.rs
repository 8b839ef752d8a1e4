// ABOUTME: Overview panel echoing the scenario idea with the fixed complexity and risk assessment

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::catalog::{OVERVIEW_COMPLEXITY, OVERVIEW_EMPTY_HINT, OVERVIEW_RISK_LEVEL};

const GOLD: Color = Color::Rgb(255, 215, 0);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const WARNING_ORANGE: Color = Color::Rgb(255, 165, 0);
const ERROR_RED: Color = Color::Rgb(220, 80, 80);

pub struct OverviewComponent;

impl OverviewComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn lines(&self, scenario: &str) -> Vec<Line<'static>> {
        if scenario.trim().is_empty() {
            return vec![
                Line::from(""),
                Line::from(Span::styled(
                    OVERVIEW_EMPTY_HINT,
                    Style::default().fg(MUTED_GRAY).add_modifier(Modifier::ITALIC),
                )),
            ];
        }

        let label = Style::default().fg(MUTED_GRAY);
        vec![
            Line::from(Span::styled(
                "Your Scenario Idea:",
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(scenario.to_string(), Style::default().fg(SOFT_WHITE))),
            Line::from(""),
            Line::from(vec![
                Span::styled("Complexity:  ", label),
                Span::styled(OVERVIEW_COMPLEXITY, Style::default().fg(WARNING_ORANGE)),
            ]),
            Line::from(vec![
                Span::styled("Risk Level:  ", label),
                Span::styled(
                    OVERVIEW_RISK_LEVEL,
                    Style::default().fg(ERROR_RED).add_modifier(Modifier::BOLD),
                ),
            ]),
        ]
    }
}

impl Default for OverviewComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::lines_to_plain_text;

    #[test]
    fn test_blank_scenario_shows_hint() {
        let text = lines_to_plain_text(&OverviewComponent::new().lines("  "));
        assert!(text.contains(OVERVIEW_EMPTY_HINT));
        assert!(!text.contains("Your Scenario Idea:"));
    }

    #[test]
    fn test_scenario_is_echoed_with_assessment() {
        let text = lines_to_plain_text(&OverviewComponent::new().lines("Flag mule accounts"));
        assert!(text.contains("Your Scenario Idea:\nFlag mule accounts"));
        assert!(text.contains("Complexity:  Medium"));
        assert!(text.contains("Risk Level:  High"));
    }
}
