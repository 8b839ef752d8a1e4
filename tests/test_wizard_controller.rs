// ABOUTME: Behavioral tests for the wizard controller through its public API
// All tests run on paused tokio time so the schedule is deterministic

use aml_lab::wizard::{
    ProgressSchedule, RunOutcome, RunPhase, WizardController, WizardError, WizardState,
    WizardStep,
};
use pretty_assertions::assert_eq;
use std::time::Duration;
use tokio::time::Instant;

const SCENARIO: &str = "Identify structuring patterns in customer transactions";

/// Collect every state published until the run leaves the running phase
async fn observe_run(controller: &WizardController) -> Vec<WizardState> {
    let mut rx = controller.subscribe();
    let mut observed = vec![*rx.borrow_and_update()];
    while observed.last().is_some_and(|state| state.is_processing) {
        if rx.changed().await.is_err() {
            break;
        }
        observed.push(*rx.borrow_and_update());
    }
    observed
}

#[tokio::test(start_paused = true)]
async fn test_initial_state_is_idle_at_first_step() {
    let controller = WizardController::default();
    let state = controller.state();

    assert_eq!(state.current_step, WizardStep::Input);
    assert_eq!(state.current_step_index(), 0);
    assert!(!state.is_processing);
    assert_eq!(state.progress_percent, 0);
    assert_eq!(state.phase(), RunPhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_progress_is_monotonic_and_bounded() {
    let controller = WizardController::default();
    let handle = controller.start_run(SCENARIO).unwrap();

    let observed = observe_run(&controller).await;

    let percents: Vec<u8> = observed.iter().map(|s| s.progress_percent).collect();
    assert_eq!(percents, vec![0, 20, 40, 60, 80, 100]);
    assert!(percents.windows(2).all(|pair| pair[0] < pair[1]));

    for state in &observed[..observed.len() - 1] {
        assert!(state.is_processing);
        assert_eq!(state.current_step, WizardStep::Data);
    }

    let last = observed[observed.len() - 1];
    assert!(!last.is_processing);
    assert_eq!(last.current_step, WizardStep::Enhance);
    assert_eq!(last.current_step_index(), WizardStep::total() - 1);

    assert_eq!(handle.wait().await, RunOutcome::Completed);
}

#[tokio::test(start_paused = true)]
async fn test_run_takes_five_intervals() {
    let controller = WizardController::default();
    let started = Instant::now();

    let handle = controller.start_run(SCENARIO).unwrap();
    assert_eq!(handle.wait().await, RunOutcome::Completed);

    assert_eq!(started.elapsed(), Duration::from_millis(2500));
    assert_eq!(controller.state().phase(), RunPhase::Complete);
}

#[tokio::test(start_paused = true)]
async fn test_state_between_samples() {
    let controller = WizardController::default();
    let _handle = controller.start_run(SCENARIO).unwrap();

    tokio::time::sleep(Duration::from_millis(1250)).await;
    let state = controller.state();
    assert!(state.is_processing);
    assert_eq!(state.progress_percent, 40);

    tokio::time::sleep(Duration::from_millis(1000)).await;
    assert_eq!(controller.state().progress_percent, 80);
}

#[tokio::test(start_paused = true)]
async fn test_rejections_leave_state_untouched() {
    let controller = WizardController::default();

    assert_eq!(controller.start_run("").unwrap_err(), WizardError::EmptyScenario);
    assert_eq!(controller.state(), WizardState::new());

    let handle = controller.start_run(SCENARIO).unwrap();
    tokio::time::sleep(Duration::from_millis(600)).await;
    let during = controller.state();

    assert_eq!(controller.start_run(SCENARIO).unwrap_err(), WizardError::RunInProgress);
    assert_eq!(controller.state(), during);

    assert_eq!(handle.wait().await, RunOutcome::Completed);
}

#[tokio::test(start_paused = true)]
async fn test_second_run_after_completion_starts_over() {
    let controller = WizardController::default();
    controller.start_run(SCENARIO).unwrap().wait().await;
    assert_eq!(controller.state().phase(), RunPhase::Complete);

    let second = controller.start_run("Monitor high-risk geography transaction flows").unwrap();
    let state = controller.state();
    assert!(state.is_processing);
    assert_eq!(state.current_step, WizardStep::Data);
    assert_eq!(state.progress_percent, 0);

    assert_eq!(second.wait().await, RunOutcome::Completed);
    assert_eq!(controller.state().progress_percent, 100);
}

#[tokio::test(start_paused = true)]
async fn test_cancel_mid_run_returns_to_idle() {
    let controller = WizardController::default();
    let handle = controller.start_run(SCENARIO).unwrap();

    tokio::time::sleep(Duration::from_millis(1100)).await;
    handle.cancel();

    assert_eq!(handle.wait().await, RunOutcome::Cancelled);
    assert_eq!(controller.state(), WizardState::new());
    assert!(controller.start_run(SCENARIO).is_ok());
}

#[tokio::test(start_paused = true)]
async fn test_custom_schedule() {
    let controller = WizardController::new(ProgressSchedule::new(Duration::from_millis(100), 25));
    let started = Instant::now();
    controller.start_run(SCENARIO).unwrap();

    let percents: Vec<u8> = observe_run(&controller)
        .await
        .iter()
        .map(|s| s.progress_percent)
        .collect();

    assert_eq!(percents, vec![0, 25, 50, 75, 100]);
    assert_eq!(started.elapsed(), Duration::from_millis(400));
}
