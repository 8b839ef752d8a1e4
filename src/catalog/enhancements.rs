// ABOUTME: Static enhancement recommendations and the implementation roadmap

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Level {
    High,
    Medium,
    Low,
}

impl Level {
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub category: &'static str,
    pub priority: Level,
    pub title: &'static str,
    pub description: &'static str,
    pub impact: &'static str,
    pub effort: Level,
    pub technologies: &'static [&'static str],
}

pub const RECOMMENDATIONS: [Recommendation; 4] = [
    Recommendation {
        category: "Performance",
        priority: Level::High,
        title: "Implement Real-time Processing",
        description: "Add streaming data processing capabilities for real-time transaction monitoring.",
        impact: "Reduce detection latency from hours to seconds",
        effort: Level::Medium,
        technologies: &["Apache Kafka", "Apache Flink"],
    },
    Recommendation {
        category: "Accuracy",
        priority: Level::High,
        title: "Machine Learning Enhancement",
        description: "Integrate advanced ML models for pattern recognition and anomaly detection.",
        impact: "Improve detection accuracy by 15-20%",
        effort: Level::High,
        technologies: &["Scikit-learn", "TensorFlow", "XGBoost"],
    },
    Recommendation {
        category: "Features",
        priority: Level::Medium,
        title: "Entity Resolution",
        description: "Add customer entity resolution to detect relationships across accounts.",
        impact: "Identify complex money laundering networks",
        effort: Level::Medium,
        technologies: &["Graph Databases", "Neo4j"],
    },
    Recommendation {
        category: "Compliance",
        priority: Level::Medium,
        title: "Regulatory Reporting",
        description: "Automated SAR/STR report generation with regulatory templates.",
        impact: "Reduce compliance workload by 60%",
        effort: Level::Low,
        technologies: &["Report Templates", "APIs"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoadmapPhase {
    pub name: &'static str,
    pub items: &'static [&'static str],
}

pub const ROADMAP: [RoadmapPhase; 3] = [
    RoadmapPhase {
        name: "Phase 1 (Q1)",
        items: &["Regulatory Reporting", "Performance Optimization"],
    },
    RoadmapPhase {
        name: "Phase 2 (Q2)",
        items: &["Real-time Processing", "Entity Resolution"],
    },
    RoadmapPhase {
        name: "Phase 3 (Q3)",
        items: &["Machine Learning Enhancement", "Advanced Analytics"],
    },
];
