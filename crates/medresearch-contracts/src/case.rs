//! Patient cases and the recommendations attached to them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::evidence::EvidenceLevel;

/// Where a case sits in its review lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    Active,
    Completed,
    Pending,
}

impl CaseStatus {
    pub fn label(self) -> &'static str {
        match self {
            CaseStatus::Active => "active",
            CaseStatus::Completed => "completed",
            CaseStatus::Pending => "pending",
        }
    }
}

/// A de-identified patient research case. `id` is unique within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientCase {
    pub id: String,
    pub patient_id: String,
    pub condition: String,
    pub age: u32,
    pub genetic_markers: Vec<String>,
    pub comorbidities: Vec<String>,
    /// User ids of the physicians on the case. Not checked against any roster.
    pub assigned_physicians: Vec<String>,
    pub status: CaseStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Certainty {
    Low,
    Moderate,
    High,
}

impl Certainty {
    pub fn label(self) -> &'static str {
        match self {
            Certainty::Low => "Low",
            Certainty::Moderate => "Moderate",
            Certainty::High => "High",
        }
    }
}

/// A treatment recommendation recorded against a case.
///
/// `case_id` is a bare reference; a recommendation whose case is gone simply
/// never shows up in any detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    pub case_id: String,
    pub recommendation: String,
    pub rationale: String,
    pub evidence_level: EvidenceLevel,
    pub certainty: Certainty,
    pub citations: Vec<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

/// A treatment option with its outcome and safety profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentProtocol {
    pub id: String,
    pub name: String,
    /// Response rate in percent, 0–100.
    pub effectiveness: u8,
    pub evidence_level: EvidenceLevel,
    pub side_effects: Vec<String>,
    pub contraindications: Vec<String>,
    pub citations: Vec<String>,
}
