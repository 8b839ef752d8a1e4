// ABOUTME: Docs panel with documentation sections, compliance matrix, and documentation metrics
// The enhancement recommendations are appended below the docs, as on the Docs tab

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use super::EnhancementsComponent;
use crate::catalog::{COMPLIANCE_MATRIX, DOC_METRICS, DOC_SECTIONS};

const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);
const WARNING_YELLOW: Color = Color::Rgb(220, 180, 80);

pub struct DocumentationComponent {
    enhancements: EnhancementsComponent,
}

impl DocumentationComponent {
    pub fn new() -> Self {
        Self {
            enhancements: EnhancementsComponent::new(),
        }
    }

    /// Documentation only, without the recommendations
    pub fn doc_lines(&self) -> Vec<Line<'static>> {
        let heading = Style::default().fg(CORNFLOWER_BLUE).add_modifier(Modifier::BOLD);

        let mut lines = vec![Line::from(Span::styled("Documentation", heading))];
        for section in DOC_SECTIONS.iter() {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("✔ ", Style::default().fg(SELECTION_GREEN)),
                Span::styled(
                    section.title,
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  [{}]", section.status), Style::default().fg(MUTED_GRAY)),
            ]));
            lines.push(Line::from(Span::styled(
                section.content,
                Style::default().fg(SOFT_WHITE),
            )));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Compliance Matrix", heading)));
        lines.push(Line::from(Span::styled(
            format!("{:<22} {:<11} {:>8}", "Regulation", "Status", "Coverage"),
            Style::default().fg(CORNFLOWER_BLUE),
        )));
        lines.push(Line::from(Span::styled("─".repeat(43), Style::default().fg(SUBDUED_BORDER))));
        for row in COMPLIANCE_MATRIX.iter() {
            let status_color = if row.is_compliant() {
                SELECTION_GREEN
            } else {
                WARNING_YELLOW
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{:<22} ", row.regulation), Style::default().fg(SOFT_WHITE)),
                Span::styled(format!("{:<11} ", row.status), Style::default().fg(status_color)),
                Span::styled(format!("{:>8}", row.coverage), Style::default().fg(GOLD)),
            ]));
        }

        lines.push(Line::from(""));
        let mut metric_spans = Vec::new();
        for (label, value) in DOC_METRICS.iter() {
            metric_spans.push(Span::styled(format!("{}: ", label), Style::default().fg(MUTED_GRAY)));
            metric_spans.push(Span::styled(
                format!("{}   ", value),
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            ));
        }
        lines.push(Line::from(metric_spans));

        lines
    }

    /// Full Docs tab content
    pub fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = self.doc_lines();
        lines.push(Line::from(""));
        lines.extend(self.enhancements.lines());
        lines
    }
}

impl Default for DocumentationComponent {
    fn default() -> Self {
        Self::new()
    }
}
