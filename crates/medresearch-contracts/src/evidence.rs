//! Evidence grading shared by documents, protocols, and recommendations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DashError, DashResult};

/// Clinical-study rigor on a 1–4 scale, 1 being the strongest evidence.
///
/// Serialized as the bare number so records read the same on the wire as
/// they do in the literature (`"evidenceLevel": 1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum EvidenceLevel {
    Level1,
    Level2,
    Level3,
    Level4,
}

impl EvidenceLevel {
    /// Numeric rank, 1 (strongest) through 4.
    pub fn rank(self) -> u8 {
        match self {
            EvidenceLevel::Level1 => 1,
            EvidenceLevel::Level2 => 2,
            EvidenceLevel::Level3 => 3,
            EvidenceLevel::Level4 => 4,
        }
    }

    pub fn from_rank(value: u8) -> DashResult<Self> {
        match value {
            1 => Ok(EvidenceLevel::Level1),
            2 => Ok(EvidenceLevel::Level2),
            3 => Ok(EvidenceLevel::Level3),
            4 => Ok(EvidenceLevel::Level4),
            _ => Err(DashError::InvalidEvidenceLevel { value }),
        }
    }

    /// Display label, e.g. "Level 1 Evidence".
    pub fn label(self) -> String {
        format!("Level {} Evidence", self.rank())
    }
}

impl TryFrom<u8> for EvidenceLevel {
    type Error = DashError;

    fn try_from(value: u8) -> DashResult<Self> {
        Self::from_rank(value)
    }
}

impl From<EvidenceLevel> for u8 {
    fn from(level: EvidenceLevel) -> u8 {
        level.rank()
    }
}

impl fmt::Display for EvidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rank())
    }
}
