// ABOUTME: Enhancement recommendations and the three-phase implementation roadmap

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::catalog::{Level, RECOMMENDATIONS, ROADMAP};

const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const ERROR_RED: Color = Color::Rgb(220, 80, 80);
const WARNING_YELLOW: Color = Color::Rgb(220, 180, 80);

pub struct EnhancementsComponent;

impl EnhancementsComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let heading = Style::default().fg(CORNFLOWER_BLUE).add_modifier(Modifier::BOLD);
        let label = Style::default().fg(MUTED_GRAY);

        let mut lines = vec![Line::from(Span::styled("Enhancement Recommendations", heading))];

        for rec in RECOMMENDATIONS.iter() {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled(
                    rec.title,
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  ({})", rec.category), label),
            ]));
            lines.push(Line::from(Span::styled(rec.description, Style::default().fg(SOFT_WHITE))));
            lines.push(Line::from(vec![
                Span::styled("Priority: ", label),
                Span::styled(rec.priority.label(), Style::default().fg(level_color(rec.priority))),
                Span::styled("   Effort: ", label),
                Span::styled(rec.effort.label(), Style::default().fg(level_color(rec.effort))),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Impact: ", label),
                Span::styled(rec.impact, Style::default().fg(SELECTION_GREEN)),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Technologies: ", label),
                Span::styled(rec.technologies.join(", "), Style::default().fg(SOFT_WHITE)),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Implementation Roadmap", heading)));
        for phase in ROADMAP.iter() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<14}", phase.name),
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                ),
                Span::styled(phase.items.join(" • "), Style::default().fg(SOFT_WHITE)),
            ]));
        }

        lines
    }
}

fn level_color(level: Level) -> Color {
    match level {
        Level::High => ERROR_RED,
        Level::Medium => WARNING_YELLOW,
        Level::Low => SELECTION_GREEN,
    }
}

impl Default for EnhancementsComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::lines_to_plain_text;

    #[test]
    fn test_recommendations_and_roadmap() {
        let text = lines_to_plain_text(&EnhancementsComponent::new().lines());
        assert!(text.contains("Implement Real-time Processing  (Performance)"));
        assert!(text.contains("Priority: Medium   Effort: Low"));
        assert!(text.contains("Technologies: Scikit-learn, TensorFlow, XGBoost"));
        assert!(text.contains("Phase 2 (Q2)  Real-time Processing • Entity Resolution"));
    }
}
