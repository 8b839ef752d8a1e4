// ABOUTME: Wizard/progress controller that sequences steps over simulated time
// Owns the only mutable WizardState and publishes every change through a watch channel

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::error::WizardError;
use super::state::{ProgressSchedule, WizardState};

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    Cancelled,
}

/// Handle to one in-flight run
#[derive(Debug)]
pub struct RunHandle {
    run_id: Uuid,
    token: CancellationToken,
    task: JoinHandle<RunOutcome>,
}

impl RunHandle {
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Stop the run at its next suspend point; the controller returns to idle
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Wait for the run to end
    pub async fn wait(self) -> RunOutcome {
        match self.task.await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(run_id = %self.run_id, "Run task did not finish cleanly: {}", e);
                RunOutcome::Cancelled
            }
        }
    }
}

/// Sequences the fixed wizard steps and fakes progress for a single action.
///
/// `start_run` must be called from within a tokio runtime; the timer sequence
/// runs on a spawned task. Dropping the controller cancels any run in flight.
#[derive(Debug)]
pub struct WizardController {
    state_tx: Arc<watch::Sender<WizardState>>,
    schedule: ProgressSchedule,
    shutdown: CancellationToken,
}

impl WizardController {
    pub fn new(schedule: ProgressSchedule) -> Self {
        let (state_tx, _) = watch::channel(WizardState::new());
        Self {
            state_tx: Arc::new(state_tx),
            schedule,
            shutdown: CancellationToken::new(),
        }
    }

    /// Current snapshot
    pub fn state(&self) -> WizardState {
        *self.state_tx.borrow()
    }

    /// Receive a notification after every state mutation
    pub fn subscribe(&self) -> watch::Receiver<WizardState> {
        self.state_tx.subscribe()
    }

    /// Enter the running phase and spawn the timed progress sequence.
    ///
    /// Allowed from idle and from complete; rejected without touching the
    /// state when the scenario is blank or a run is already in progress.
    pub fn start_run(&self, scenario: &str) -> Result<RunHandle, WizardError> {
        if self.shutdown.is_cancelled() {
            return Err(WizardError::ShutDown);
        }

        if scenario.trim().is_empty() {
            debug!("Ignoring start request with empty scenario");
            return Err(WizardError::EmptyScenario);
        }

        let mut accepted = false;
        self.state_tx.send_if_modified(|state| {
            if state.is_processing {
                return false;
            }
            state.begin_run();
            accepted = true;
            true
        });

        if !accepted {
            debug!("Ignoring start request while a run is in progress");
            return Err(WizardError::RunInProgress);
        }

        let run_id = Uuid::new_v4();
        let token = self.shutdown.child_token();
        info!(
            %run_id,
            scenario_len = scenario.len(),
            interval_ms = u64::try_from(self.schedule.interval.as_millis()).unwrap_or(u64::MAX),
            "Starting simulated scenario run"
        );

        let task = tokio::spawn(drive_run(
            Arc::clone(&self.state_tx),
            self.schedule,
            token.clone(),
            run_id,
        ));

        Ok(RunHandle {
            run_id,
            token,
            task,
        })
    }

    /// Cancel any run in flight and refuse new ones
    pub fn shutdown(&self) {
        if !self.shutdown.is_cancelled() {
            info!("Shutting down wizard controller");
            self.shutdown.cancel();
        }
    }
}

impl Default for WizardController {
    fn default() -> Self {
        Self::new(ProgressSchedule::default())
    }
}

impl Drop for WizardController {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn drive_run(
    state_tx: Arc<watch::Sender<WizardState>>,
    schedule: ProgressSchedule,
    token: CancellationToken,
    run_id: Uuid,
) -> RunOutcome {
    // Sample 0 was published by start_run; every later sample waits one interval
    for percent in schedule.samples().into_iter().skip(1) {
        tokio::select! {
            biased;
            () = token.cancelled() => {
                state_tx.send_modify(WizardState::reset);
                info!(%run_id, "Scenario run cancelled");
                return RunOutcome::Cancelled;
            }
            () = tokio::time::sleep(schedule.interval) => {}
        }

        if percent >= 100 {
            state_tx.send_modify(WizardState::complete_run);
        } else {
            state_tx.send_modify(|state| state.progress_percent = percent);
        }
        debug!(%run_id, percent, "Progress advanced");
    }

    info!(%run_id, "Scenario run complete");
    RunOutcome::Completed
}
