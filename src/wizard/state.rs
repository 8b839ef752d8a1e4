// ABOUTME: Wizard state snapshot and the progress schedule that drives a run
// Snapshots are published to subscribers after every mutation

use serde::Serialize;
use std::time::Duration;

use super::step::WizardStep;

/// Default wait between two progress samples
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(500);

/// Default progress increment per sample
pub const DEFAULT_PROGRESS_INCREMENT: u8 = 20;

/// Coarse phase derived from a state snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunPhase {
    Idle,
    Running,
    Complete,
}

impl RunPhase {
    /// Get a human-readable name for the phase
    pub fn name(&self) -> &'static str {
        match self {
            RunPhase::Idle => "Idle",
            RunPhase::Running => "Running",
            RunPhase::Complete => "Complete",
        }
    }
}

/// Observable wizard state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WizardState {
    pub current_step: WizardStep,
    pub is_processing: bool,
    pub progress_percent: u8,
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            current_step: WizardStep::Input,
            is_processing: false,
            progress_percent: 0,
        }
    }

    /// Zero-based index of the current step, always in `[0, N-1]`
    pub fn current_step_index(&self) -> usize {
        self.current_step.index()
    }

    pub fn phase(&self) -> RunPhase {
        if self.is_processing {
            RunPhase::Running
        } else if self.current_step == WizardStep::last() {
            RunPhase::Complete
        } else {
            RunPhase::Idle
        }
    }

    /// A step is active once the wizard has reached it
    pub fn is_step_active(&self, step: WizardStep) -> bool {
        step <= self.current_step
    }

    pub fn is_step_current(&self, step: WizardStep) -> bool {
        step == self.current_step
    }

    pub(crate) fn begin_run(&mut self) {
        self.is_processing = true;
        self.current_step = WizardStep::first_run_step();
        self.progress_percent = 0;
    }

    pub(crate) fn complete_run(&mut self) {
        self.is_processing = false;
        self.current_step = WizardStep::last();
        self.progress_percent = 100;
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Timing of the simulated progress sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSchedule {
    pub interval: Duration,
    pub increment: u8,
}

impl ProgressSchedule {
    pub fn new(interval: Duration, increment: u8) -> Self {
        Self { interval, increment }
    }

    /// Whether the increment walks from 0 to exactly 100
    pub fn is_valid_increment(increment: u8) -> bool {
        increment > 0 && increment <= 100 && 100 % increment == 0
    }

    /// Every progress value a run visits, starting at 0 and ending at 100
    pub fn samples(&self) -> Vec<u8> {
        let step = if Self::is_valid_increment(self.increment) {
            self.increment
        } else {
            DEFAULT_PROGRESS_INCREMENT
        };
        (0..=100u8).step_by(usize::from(step)).collect()
    }

    /// Number of waits between the first and last sample
    pub fn interval_count(&self) -> u32 {
        u32::try_from(self.samples().len().saturating_sub(1)).unwrap_or(u32::MAX)
    }

    /// Deterministic wall time of a full run
    pub fn total_duration(&self) -> Duration {
        self.interval * self.interval_count()
    }
}

impl Default for ProgressSchedule {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL, DEFAULT_PROGRESS_INCREMENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_initial_state_is_idle() {
        let state = WizardState::new();
        assert_eq!(state.current_step_index(), 0);
        assert!(!state.is_processing);
        assert_eq!(state.phase(), RunPhase::Idle);
    }

    #[test]
    fn test_begin_and_complete_run() {
        let mut state = WizardState::new();
        state.begin_run();
        assert_eq!(state.current_step_index(), 1);
        assert_eq!(state.progress_percent, 0);
        assert_eq!(state.phase(), RunPhase::Running);

        state.complete_run();
        assert_eq!(state.current_step_index(), WizardStep::total() - 1);
        assert_eq!(state.progress_percent, 100);
        assert_eq!(state.phase(), RunPhase::Complete);
    }

    #[test]
    fn test_step_activity() {
        let mut state = WizardState::new();
        state.begin_run();
        assert!(state.is_step_active(WizardStep::Input));
        assert!(state.is_step_active(WizardStep::Data));
        assert!(state.is_step_current(WizardStep::Data));
        assert!(!state.is_step_active(WizardStep::Code));
    }

    #[test]
    fn test_default_schedule_samples() {
        let schedule = ProgressSchedule::default();
        assert_eq!(schedule.samples(), vec![0, 20, 40, 60, 80, 100]);
        assert_eq!(schedule.interval_count(), 5);
        assert_eq!(schedule.total_duration(), Duration::from_millis(2500));
    }

    #[test]
    fn test_increment_validation() {
        assert!(ProgressSchedule::is_valid_increment(20));
        assert!(ProgressSchedule::is_valid_increment(25));
        assert!(ProgressSchedule::is_valid_increment(100));
        assert!(!ProgressSchedule::is_valid_increment(0));
        assert!(!ProgressSchedule::is_valid_increment(30));
    }
}
