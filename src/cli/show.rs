// ABOUTME: CLI show and examples commands for printing static dashboard content
//
// show: print one result panel as the TUI renders it (text) or as structured data (JSON)
// examples: list the four example scenarios

use anyhow::{Context, Result};
use serde_json::{json, Value};

use super::{OutputFormat, ShowArgs};
use crate::catalog::{
    CodeBlock, Panel, CODE_BADGES, CODE_FEATURES_NOTE, COMPLIANCE_MATRIX, DATASET_BADGES,
    DATA_GENERATION_NOTES, DETECTION_RESULTS, DOC_METRICS, DOC_SECTIONS, OVERVIEW_COMPLEXITY,
    OVERVIEW_EMPTY_HINT, OVERVIEW_RISK_LEVEL, RECOMMENDATIONS, ROADMAP, SAMPLE_TRANSACTIONS,
    TEST_CASES, TEST_METRICS,
};
use crate::components::{
    lines_to_plain_text, CodeViewerComponent, DataViewComponent, DocumentationComponent,
    EnhancementsComponent, OverviewComponent, TestResultsComponent,
};
use crate::scenario::EXAMPLE_SCENARIOS;

pub fn execute(args: ShowArgs, format: OutputFormat) -> Result<()> {
    let scenario = args.scenario.as_deref().unwrap_or_default();
    println!("{}", render_panel(args.panel, args.block, scenario, format)?);
    Ok(())
}

pub fn examples(format: OutputFormat) -> Result<()> {
    println!("{}", render_examples(format)?);
    Ok(())
}

/// Panel content as printable text
pub fn render_panel(
    panel: Panel,
    block: CodeBlock,
    scenario: &str,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let lines = match panel {
                Panel::Overview => OverviewComponent::new().lines(scenario),
                Panel::Data => DataViewComponent::new().lines(),
                Panel::Code => CodeViewerComponent::new().lines(block, "Copy", false),
                Panel::Results => TestResultsComponent::new().lines(),
                Panel::Docs => DocumentationComponent::new().doc_lines(),
                Panel::Enhancements => EnhancementsComponent::new().lines(),
            };
            Ok(lines_to_plain_text(&lines))
        }
        OutputFormat::Json => serde_json::to_string_pretty(&panel_json(panel, block, scenario))
            .context("Failed to serialize panel"),
    }
}

fn panel_json(panel: Panel, block: CodeBlock, scenario: &str) -> Value {
    match panel {
        Panel::Overview => {
            let scenario = scenario.trim();
            if scenario.is_empty() {
                json!({ "scenario": null, "hint": OVERVIEW_EMPTY_HINT })
            } else {
                json!({
                    "scenario": scenario,
                    "complexity": OVERVIEW_COMPLEXITY,
                    "risk_level": OVERVIEW_RISK_LEVEL,
                })
            }
        }
        Panel::Data => json!({
            "badges": DATASET_BADGES,
            "transactions": SAMPLE_TRANSACTIONS,
            "notes": DATA_GENERATION_NOTES,
        }),
        Panel::Code => json!({
            "block": block,
            "title": block.title(),
            "badges": CODE_BADGES,
            "source": block.source(),
            "features": CODE_FEATURES_NOTE,
        }),
        Panel::Results => {
            let detections: Vec<Value> = DETECTION_RESULTS
                .iter()
                .map(|row| {
                    json!({
                        "account_id": row.account_id,
                        "risk_score": row.risk_score,
                        "risk_level": row.risk_level().label(),
                        "pattern": row.pattern,
                        "transactions": row.transactions,
                        "total_amount": row.total_amount,
                    })
                })
                .collect();
            json!({
                "metrics": TEST_METRICS,
                "test_cases": TEST_CASES,
                "detections": detections,
            })
        }
        Panel::Docs => {
            let metrics: Vec<Value> = DOC_METRICS
                .iter()
                .map(|(label, value)| json!({ "label": label, "value": value }))
                .collect();
            json!({
                "sections": DOC_SECTIONS,
                "compliance": COMPLIANCE_MATRIX,
                "metrics": metrics,
            })
        }
        Panel::Enhancements => json!({
            "recommendations": RECOMMENDATIONS,
            "roadmap": ROADMAP,
        }),
    }
}

pub fn render_examples(format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(EXAMPLE_SCENARIOS
            .iter()
            .enumerate()
            .map(|(idx, example)| format!("{}. {}", idx + 1, example))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&EXAMPLE_SCENARIOS).context("Failed to serialize examples")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::code::CONFIGURATION;

    #[test]
    fn test_code_json_carries_exact_source() {
        let output =
            render_panel(Panel::Code, CodeBlock::Config, "", OutputFormat::Json).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["block"], "config");
        assert_eq!(value["source"], CONFIGURATION);
    }

    #[test]
    fn test_results_json_includes_risk_level() {
        let output =
            render_panel(Panel::Results, CodeBlock::Main, "", OutputFormat::Json).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["detections"][1]["risk_level"], "Medium Risk");
        assert_eq!(value["metrics"][3]["value"], 90.4);
        assert_eq!(value["test_cases"][3]["status"], "warning");
    }

    #[test]
    fn test_overview_text_with_and_without_scenario() {
        let empty = render_panel(Panel::Overview, CodeBlock::Main, "", OutputFormat::Text).unwrap();
        assert!(empty.contains(OVERVIEW_EMPTY_HINT));

        let filled = render_panel(
            Panel::Overview,
            CodeBlock::Main,
            "Trade-based laundering",
            OutputFormat::Text,
        )
        .unwrap();
        assert!(filled.contains("Trade-based laundering"));
    }

    #[test]
    fn test_examples_text_is_numbered() {
        let text = render_examples(OutputFormat::Text).unwrap();
        assert_eq!(text.lines().count(), 4);
        assert!(text.starts_with("1. Detect unusual cash deposits"));
    }
}
