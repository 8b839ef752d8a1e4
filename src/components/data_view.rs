// ABOUTME: Data panel listing the sample transactions with dataset badges and generation notes

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::catalog::{format_amount, DATASET_BADGES, DATA_GENERATION_NOTES, SAMPLE_TRANSACTIONS};

const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);

pub struct DataViewComponent;

impl DataViewComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    "Sample Transaction Data",
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                ),
                Span::styled("   [Regenerate] [Export CSV]", Style::default().fg(MUTED_GRAY)),
            ]),
            Self::badge_line(),
            Line::from(""),
            Line::from(Span::styled(
                format!(
                    "{:<8} {:>9}  {:<20} {:<11} {}",
                    "ID", "Amount", "Type", "Account", "Timestamp"
                ),
                Style::default().fg(CORNFLOWER_BLUE).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled("─".repeat(72), Style::default().fg(SUBDUED_BORDER))),
        ];

        for txn in SAMPLE_TRANSACTIONS.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<8} ", txn.id), Style::default().fg(SOFT_WHITE)),
                Span::styled(
                    format!("{:>9}  ", format_amount(txn.amount)),
                    Style::default().fg(GOLD),
                ),
                Span::styled(
                    format!("{:<20} {:<11} {}", txn.kind, txn.account, txn.timestamp),
                    Style::default().fg(SOFT_WHITE),
                ),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Data Generation Notes",
            Style::default().fg(CORNFLOWER_BLUE).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            DATA_GENERATION_NOTES,
            Style::default().fg(MUTED_GRAY),
        )));
        lines
    }

    fn badge_line() -> Line<'static> {
        let mut spans = Vec::new();
        for badge in DATASET_BADGES.iter() {
            spans.push(Span::styled(
                format!("[{}]", badge),
                Style::default().fg(CORNFLOWER_BLUE),
            ));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }
}

impl Default for DataViewComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::lines_to_plain_text;

    #[test]
    fn test_every_transaction_row_is_listed() {
        let text = lines_to_plain_text(&DataViewComponent::new().lines());
        for id in ["TXN001", "TXN002", "TXN003", "TXN004", "TXN005"] {
            assert!(text.contains(id), "missing {id}");
        }
        assert!(text.contains("$9,500"));
        assert!(text.contains("International Wire"));
    }

    #[test]
    fn test_badges_and_notes() {
        let text = lines_to_plain_text(&DataViewComponent::new().lines());
        assert!(text.contains("[5,000 transactions] [50 accounts] [30 days period]"));
        assert!(text.contains(DATA_GENERATION_NOTES));
    }
}
