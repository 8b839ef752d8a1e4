// ABOUTME: Fixed step sequence for the scenario generation wizard
// Each step has a stable id, a display label, and an ordinal position

use serde::Serialize;

/// Steps in the scenario generation wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    Input,
    Data,
    Code,
    Test,
    Docs,
    Enhance,
}

impl WizardStep {
    /// Get all steps in order
    pub fn all() -> &'static [WizardStep] {
        &[
            Self::Input,
            Self::Data,
            Self::Code,
            Self::Test,
            Self::Docs,
            Self::Enhance,
        ]
    }

    /// Get the total number of steps
    pub fn total() -> usize {
        Self::all().len()
    }

    /// The step a run enters when it starts
    pub fn first_run_step() -> Self {
        Self::Data
    }

    /// The terminal step a completed run lands on
    pub fn last() -> Self {
        Self::Enhance
    }

    /// Zero-based position in the sequence
    pub fn index(&self) -> usize {
        match self {
            Self::Input => 0,
            Self::Data => 1,
            Self::Code => 2,
            Self::Test => 3,
            Self::Docs => 4,
            Self::Enhance => 5,
        }
    }

    /// Get the step number (1-indexed for display)
    pub fn number(&self) -> usize {
        self.index() + 1
    }

    /// Look up a step by zero-based position
    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }

    /// Stable identifier
    pub fn id(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Data => "data",
            Self::Code => "code",
            Self::Test => "test",
            Self::Docs => "docs",
            Self::Enhance => "enhance",
        }
    }

    /// Get display label for this step
    pub fn label(&self) -> &'static str {
        match self {
            Self::Input => "Scenario Input",
            Self::Data => "Data Generation",
            Self::Code => "Python Code",
            Self::Test => "Testing",
            Self::Docs => "Documentation",
            Self::Enhance => "Enhancements",
        }
    }

    /// Single-glyph icon used by the step indicator
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Input => "✎",
            Self::Data => "▤",
            Self::Code => "⌘",
            Self::Test => "▶",
            Self::Docs => "☰",
            Self::Enhance => "↗",
        }
    }

    /// Get the next step, if any
    pub fn next(&self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Get the previous step, if any
    pub fn previous(&self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
