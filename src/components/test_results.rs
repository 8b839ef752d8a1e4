// ABOUTME: Results panel with performance metrics, test cases, and detection rows with risk badges

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::catalog::{
    format_amount, RiskLevel, TestStatus, DETECTION_RESULTS, TEST_CASES, TEST_METRICS,
};

const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);
const ERROR_RED: Color = Color::Rgb(220, 80, 80);
const WARNING_YELLOW: Color = Color::Rgb(220, 180, 80);

pub struct TestResultsComponent;

impl TestResultsComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let heading = Style::default().fg(CORNFLOWER_BLUE).add_modifier(Modifier::BOLD);

        let mut lines = vec![Line::from(Span::styled("Performance Metrics", heading))];
        let mut metric_spans = Vec::new();
        for metric in TEST_METRICS.iter() {
            metric_spans.push(Span::styled(
                format!("{}: ", metric.label),
                Style::default().fg(MUTED_GRAY),
            ));
            metric_spans.push(Span::styled(
                format!("{:.1}%   ", metric.value),
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            ));
        }
        lines.push(Line::from(metric_spans));
        lines.push(Line::from(""));

        lines.push(Line::from(Span::styled("Test Cases", heading)));
        for case in TEST_CASES.iter() {
            let color = status_color(case.status);
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", case.status.icon()), Style::default().fg(color)),
                Span::styled(format!("{:<24}", case.name), Style::default().fg(SOFT_WHITE)),
                Span::styled(
                    format!("{:<9}", case.status.label()),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(case.details, Style::default().fg(MUTED_GRAY)),
            ]));
        }
        lines.push(Line::from(""));

        lines.push(Line::from(Span::styled("Detection Results", heading)));
        lines.push(Line::from(Span::styled(
            format!(
                "{:<11} {:<13} {:<6} {:<13} {:>4} {:>10}",
                "Account", "Risk", "Score", "Pattern", "Txns", "Total"
            ),
            Style::default().fg(CORNFLOWER_BLUE),
        )));
        lines.push(Line::from(Span::styled("─".repeat(62), Style::default().fg(SUBDUED_BORDER))));
        for row in DETECTION_RESULTS.iter() {
            let level = row.risk_level();
            lines.push(Line::from(vec![
                Span::styled(format!("{:<11} ", row.account_id), Style::default().fg(SOFT_WHITE)),
                Span::styled(
                    format!("{:<13} ", level.label()),
                    Style::default().fg(risk_color(level)).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(
                        "{:<6} {:<13} {:>4} {:>10}",
                        row.risk_score,
                        row.pattern,
                        row.transactions,
                        format_amount(row.total_amount)
                    ),
                    Style::default().fg(SOFT_WHITE),
                ),
            ]));
        }

        lines
    }
}

fn status_color(status: TestStatus) -> Color {
    match status {
        TestStatus::Passed => SELECTION_GREEN,
        TestStatus::Warning => WARNING_YELLOW,
        TestStatus::Failed => ERROR_RED,
    }
}

fn risk_color(level: RiskLevel) -> Color {
    match level {
        RiskLevel::High => ERROR_RED,
        RiskLevel::Medium => WARNING_YELLOW,
        RiskLevel::Low => SELECTION_GREEN,
    }
}

impl Default for TestResultsComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::lines_to_plain_text;

    #[test]
    fn test_metrics_are_listed() {
        let text = lines_to_plain_text(&TestResultsComponent::new().lines());
        assert!(text.contains("Accuracy: 94.2%"));
        assert!(text.contains("Precision: 89.6%"));
        assert!(text.contains("Recall: 91.3%"));
        assert!(text.contains("F1 Score: 90.4%"));
    }

    #[test]
    fn test_case_statuses() {
        let text = lines_to_plain_text(&TestResultsComponent::new().lines());
        assert_eq!(text.matches("PASSED").count(), 3);
        assert_eq!(text.matches("WARNING").count(), 1);
    }

    #[test]
    fn test_detection_rows_carry_risk_badge() {
        let text = lines_to_plain_text(&TestResultsComponent::new().lines());
        let velocity_row = text
            .lines()
            .find(|line| line.starts_with("ACC789012"))
            .unwrap_or_default();
        assert!(velocity_row.contains("Medium Risk"));
        assert!(velocity_row.contains("$145,000"));
        assert_eq!(text.matches("High Risk").count(), 2);
    }
}
