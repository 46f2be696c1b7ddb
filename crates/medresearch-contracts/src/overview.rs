//! Read-only records shown on the Dashboard, Compliance, and Analytics screens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Dashboard ─────────────────────────────────────────────────────────────────

/// Direction of a stat card's change line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Positive,
    Negative,
    Neutral,
}

impl ChangeKind {
    /// Arrow shown before the change line.
    pub fn symbol(self) -> &'static str {
        match self {
            ChangeKind::Positive => "↑",
            ChangeKind::Negative => "↓",
            ChangeKind::Neutral => "→",
        }
    }
}

/// A headline number on the dashboard, e.g. "Active Cases: 15 (+3 this week)".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub change: String,
    pub change_kind: ChangeKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Document,
    Case,
    Alert,
}

impl ActivityKind {
    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::Document => "document",
            ActivityKind::Case => "case",
            ActivityKind::Alert => "alert",
        }
    }
}

/// One entry in the recent-activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    pub id: String,
    pub kind: ActivityKind,
    pub title: String,
    pub description: String,
    /// Relative time as displayed, e.g. "2 hours ago".
    pub timestamp: String,
    pub user: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// A delivered literature notification on the dashboard panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub timestamp: String,
    pub read: bool,
}

// ── Compliance ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceStatus {
    Compliant,
    Warning,
}

impl ComplianceStatus {
    pub fn label(self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "compliant",
            ComplianceStatus::Warning => "warning",
        }
    }
}

/// A protocol's standing against published guidelines, as last checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceRecord {
    pub id: String,
    pub protocol: String,
    pub status: ComplianceStatus,
    pub guidelines: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<String>,
    pub last_checked: DateTime<Utc>,
}

/// Result shape returned by a guideline-compliance evaluation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceCheck {
    pub compliant: bool,
    pub violated_guidelines: Vec<String>,
    pub remediation_steps: Vec<String>,
    /// 0.0–1.0.
    pub confidence: f32,
}

// ── Analytics ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsMetric {
    pub metric: String,
    pub value: String,
    /// Period-over-period change, e.g. "+15%".
    pub trend: String,
}
