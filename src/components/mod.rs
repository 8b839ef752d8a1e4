// ABOUTME: UI components for the AML Lab dashboard: wizard header, scenario input, result panels, help
// Result panels build plain ratatui lines so the CLI can print the same content

pub mod code_viewer;
pub mod data_view;
pub mod documentation;
pub mod enhancements;
pub mod help;
pub mod layout;
pub mod overview;
pub mod scenario_input;
pub mod test_results;
pub mod wizard_header;

pub use code_viewer::CodeViewerComponent;
pub use data_view::DataViewComponent;
pub use documentation::DocumentationComponent;
pub use enhancements::EnhancementsComponent;
pub use help::HelpComponent;
pub use layout::LayoutComponent;
pub use overview::OverviewComponent;
pub use scenario_input::ScenarioInputComponent;
pub use test_results::TestResultsComponent;
pub use wizard_header::WizardHeaderComponent;

use ratatui::text::Line;

/// Flatten rendered lines into plain text, one line per row
pub fn lines_to_plain_text(lines: &[Line<'_>]) -> String {
    lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::text::Span;

    #[test]
    fn test_plain_text_joins_spans_and_trims() {
        let lines = vec![
            Line::from(vec![Span::raw("Risk "), Span::raw("Level   ")]),
            Line::from(""),
            Line::from("High"),
        ];
        assert_eq!(lines_to_plain_text(&lines), "Risk Level\n\nHigh");
    }
}
