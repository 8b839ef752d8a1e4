// ABOUTME: Static test metrics, test cases, and detection rows for the results panel

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metric {
    pub key: &'static str,
    pub label: &'static str,
    pub value: f64,
}

pub const TEST_METRICS: [Metric; 4] = [
    Metric {
        key: "accuracy",
        label: "Accuracy",
        value: 94.2,
    },
    Metric {
        key: "precision",
        label: "Precision",
        value: 89.6,
    },
    Metric {
        key: "recall",
        label: "Recall",
        value: 91.3,
    },
    Metric {
        key: "f1Score",
        label: "F1 Score",
        value: 90.4,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    Passed,
    Warning,
    Failed,
}

impl TestStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Passed => "PASSED",
            Self::Warning => "WARNING",
            Self::Failed => "FAILED",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Passed => "✔",
            Self::Warning => "⚠",
            Self::Failed => "✘",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TestCase {
    pub name: &'static str,
    pub status: TestStatus,
    pub details: &'static str,
}

pub const TEST_CASES: [TestCase; 4] = [
    TestCase {
        name: "Structuring Detection",
        status: TestStatus::Passed,
        details: "15/15 test cases passed",
    },
    TestCase {
        name: "False Positive Rate",
        status: TestStatus::Passed,
        details: "Below 5% threshold",
    },
    TestCase {
        name: "Performance Benchmark",
        status: TestStatus::Passed,
        details: "Processing 10k records/sec",
    },
    TestCase {
        name: "Edge Case Handling",
        status: TestStatus::Warning,
        details: "2 minor issues identified",
    },
];

/// Risk band derived from a detection score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            Self::High
        } else if score >= 60 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High Risk",
            Self::Medium => "Medium Risk",
            Self::Low => "Low Risk",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DetectionResult {
    pub account_id: &'static str,
    pub risk_score: u8,
    pub pattern: &'static str,
    pub transactions: u32,
    pub total_amount: u64,
}

impl DetectionResult {
    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_score(self.risk_score)
    }
}

pub const DETECTION_RESULTS: [DetectionResult; 3] = [
    DetectionResult {
        account_id: "ACC123456",
        risk_score: 95,
        pattern: "Structuring",
        transactions: 8,
        total_amount: 76_400,
    },
    DetectionResult {
        account_id: "ACC789012",
        risk_score: 78,
        pattern: "Velocity",
        transactions: 12,
        total_amount: 145_000,
    },
    DetectionResult {
        account_id: "ACC456789",
        risk_score: 88,
        pattern: "Cross-border",
        transactions: 5,
        total_amount: 89_000,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_thresholds() {
        assert_eq!(RiskLevel::from_score(100), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(80), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(79), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(60), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(59), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
    }

    #[test]
    fn test_detection_rows_risk_levels() {
        let levels: Vec<_> = DETECTION_RESULTS.iter().map(DetectionResult::risk_level).collect();
        assert_eq!(levels, [RiskLevel::High, RiskLevel::Medium, RiskLevel::High]);
    }

    #[test]
    fn test_metric_values() {
        let values: Vec<_> = TEST_METRICS.iter().map(|m| m.value).collect();
        assert_eq!(values, [94.2, 89.6, 91.3, 90.4]);
    }
}
