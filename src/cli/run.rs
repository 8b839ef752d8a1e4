// ABOUTME: CLI run command: drives one simulated scenario generation without the TUI
//
// Prints every state the controller publishes (text line or JSON object per state)
// and exits once the run completes.

use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::io::{self, Write};
use std::time::Duration;

use super::{OutputFormat, RunArgs};
use crate::config::AppConfig;
use crate::scenario::EXAMPLE_SCENARIOS;
use crate::wizard::{ProgressSchedule, RunOutcome, RunPhase, WizardController, WizardState, WizardStep};

/// JSON output structure for one observed state
#[derive(Debug, Serialize)]
pub struct StateRecord {
    pub step: WizardStep,
    pub step_index: usize,
    pub step_label: &'static str,
    pub phase: RunPhase,
    pub is_processing: bool,
    pub progress_percent: u8,
}

impl From<WizardState> for StateRecord {
    fn from(state: WizardState) -> Self {
        Self {
            step: state.current_step,
            step_index: state.current_step_index(),
            step_label: state.current_step.label(),
            phase: state.phase(),
            is_processing: state.is_processing,
            progress_percent: state.progress_percent,
        }
    }
}

pub async fn execute(args: RunArgs, format: OutputFormat, config: &AppConfig) -> Result<()> {
    let scenario = resolve_scenario(&args)?;

    let mut schedule = config.progress_schedule();
    if let Some(interval_ms) = args.interval_ms {
        if interval_ms == 0 {
            bail!("--interval-ms must be greater than zero");
        }
        schedule.interval = Duration::from_millis(interval_ms);
    }

    let mut stdout = io::stdout();
    match run_scenario(&mut stdout, &scenario, schedule, format).await? {
        RunOutcome::Completed => Ok(()),
        RunOutcome::Cancelled => bail!("Scenario run was cancelled"),
    }
}

fn resolve_scenario(args: &RunArgs) -> Result<String> {
    match (&args.scenario, args.example) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(number)) => EXAMPLE_SCENARIOS
            .get(usize::from(number).saturating_sub(1))
            .map(|example| (*example).to_string())
            .with_context(|| format!("No example scenario {}", number)),
        (None, None) => bail!("Provide --scenario or --example"),
    }
}

/// Start a run and write every published state until it finishes
pub async fn run_scenario<W: Write>(
    out: &mut W,
    scenario: &str,
    schedule: ProgressSchedule,
    format: OutputFormat,
) -> Result<RunOutcome> {
    let controller = WizardController::new(schedule);
    let mut rx = controller.subscribe();

    let handle = controller
        .start_run(scenario)
        .context("Failed to start scenario run")?;
    let run_id = handle.run_id();

    if format == OutputFormat::Text {
        writeln!(out, "Generating AML scenario (run {})", run_id)?;
    }

    loop {
        let state = *rx.borrow_and_update();
        write_state(out, format, state)?;
        if !state.is_processing {
            break;
        }
        if rx.changed().await.is_err() {
            break;
        }
    }

    let outcome = handle.wait().await;
    if format == OutputFormat::Text && outcome == RunOutcome::Completed {
        writeln!(
            out,
            "Scenario ready in {:.1}s",
            schedule.total_duration().as_secs_f64()
        )?;
    }
    out.flush()?;
    Ok(outcome)
}

fn write_state<W: Write>(out: &mut W, format: OutputFormat, state: WizardState) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(
                out,
                "[{}/{}] {:<16} {:>3}%  {}",
                state.current_step.number(),
                WizardStep::total(),
                state.current_step.label(),
                state.progress_percent,
                state.phase().name()
            )?;
        }
        OutputFormat::Json => {
            let record = StateRecord::from(state);
            writeln!(
                out,
                "{}",
                serde_json::to_string(&record).context("Failed to serialize state")?
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn output_lines(buffer: &[u8]) -> Vec<String> {
        String::from_utf8_lossy(buffer)
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_text_run_prints_each_state() {
        let mut buffer = Vec::new();
        let outcome = run_scenario(
            &mut buffer,
            EXAMPLE_SCENARIOS[0],
            ProgressSchedule::default(),
            OutputFormat::Text,
        )
        .await
        .unwrap();

        assert_eq!(outcome, RunOutcome::Completed);
        let lines = output_lines(&buffer);
        assert!(lines[0].starts_with("Generating AML scenario (run "));
        assert_eq!(
            lines[1..].to_vec(),
            vec![
                "[2/6] Data Generation    0%  Running",
                "[2/6] Data Generation   20%  Running",
                "[2/6] Data Generation   40%  Running",
                "[2/6] Data Generation   60%  Running",
                "[2/6] Data Generation   80%  Running",
                "[6/6] Enhancements     100%  Complete",
                "Scenario ready in 2.5s",
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_json_run_emits_one_object_per_state() {
        let mut buffer = Vec::new();
        run_scenario(
            &mut buffer,
            "Monitor wire velocity",
            ProgressSchedule::new(Duration::from_millis(100), 50),
            OutputFormat::Json,
        )
        .await
        .unwrap();

        let records: Vec<serde_json::Value> = output_lines(&buffer)
            .iter()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        let percents: Vec<u64> = records
            .iter()
            .map(|r| r["progress_percent"].as_u64().unwrap())
            .collect();
        assert_eq!(percents, vec![0, 50, 100]);
        assert_eq!(records[2]["step"], "enhance");
        assert_eq!(records[2]["phase"], "complete");
        assert_eq!(records[2]["is_processing"], false);
    }

    #[tokio::test]
    async fn test_blank_scenario_is_an_error() {
        let mut buffer = Vec::new();
        let err = run_scenario(&mut buffer, "  ", ProgressSchedule::default(), OutputFormat::Text)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to start scenario run"));
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_example_number_is_one_based() {
        let args = RunArgs {
            scenario: None,
            example: Some(2),
            interval_ms: None,
        };
        assert_eq!(resolve_scenario(&args).unwrap(), EXAMPLE_SCENARIOS[1]);
    }
}
