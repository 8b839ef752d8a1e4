// ABOUTME: Scenario generation wizard: step sequence, observable state, and the run controller

pub mod controller;
pub mod error;
pub mod state;
pub mod step;

pub use controller::{RunHandle, RunOutcome, WizardController};
pub use error::WizardError;
pub use state::{ProgressSchedule, RunPhase, WizardState};
pub use step::WizardStep;
