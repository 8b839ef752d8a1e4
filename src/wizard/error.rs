// ABOUTME: Errors returned when a wizard run cannot be started

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("scenario text is empty")]
    EmptyScenario,

    #[error("a scenario run is already in progress")]
    RunInProgress,

    #[error("wizard controller has been shut down")]
    ShutDown,
}
