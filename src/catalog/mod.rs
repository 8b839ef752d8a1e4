// ABOUTME: Literal datasets rendered by the dashboard panels
// Nothing here is computed; every value is fixed demo content

pub mod code;
pub mod docs;
pub mod enhancements;
pub mod results;
pub mod transactions;

pub use code::{CodeBlock, CODE_BADGES, CODE_FEATURES_NOTE};
pub use docs::{ComplianceRow, DocSection, COMPLIANCE_MATRIX, DOC_METRICS, DOC_SECTIONS};
pub use enhancements::{Level, Recommendation, RoadmapPhase, RECOMMENDATIONS, ROADMAP};
pub use results::{
    DetectionResult, Metric, RiskLevel, TestCase, TestStatus, DETECTION_RESULTS, TEST_CASES,
    TEST_METRICS,
};
pub use transactions::{
    format_amount, Transaction, DATASET_BADGES, DATA_GENERATION_NOTES, SAMPLE_TRANSACTIONS,
};

pub const APP_TITLE: &str = "AI AML LAB";
pub const APP_SUBTITLE: &str = "Anti-Money Laundering Scenario Generator";
pub const APP_BADGE: &str = "Beta v1.0";

/// Fixed assessment shown on the overview panel
pub const OVERVIEW_COMPLEXITY: &str = "Medium";
pub const OVERVIEW_RISK_LEVEL: &str = "High";
pub const OVERVIEW_EMPTY_HINT: &str = "Provide your AML scenario idea to get started";

/// Panels that can be printed from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Panel {
    Overview,
    Data,
    Code,
    Results,
    Docs,
    Enhancements,
}
