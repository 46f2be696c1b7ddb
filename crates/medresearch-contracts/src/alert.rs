//! Literature alert subscriptions.
//!
//! Alerts are the only records a user can create, pause, and delete during a
//! session. The mutation rules live in `medresearch-core`; this module only
//! defines the shapes.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DashError;

/// How often an alert digest is delivered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    #[default]
    Weekly,
    Monthly,
}

impl Frequency {
    pub const ALL: [Frequency; 3] = [Frequency::Daily, Frequency::Weekly, Frequency::Monthly];

    pub fn label(self) -> &'static str {
        match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Monthly => "Monthly",
        }
    }

    /// The next option in picker order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Frequency::Daily => Frequency::Weekly,
            Frequency::Weekly => Frequency::Monthly,
            Frequency::Monthly => Frequency::Daily,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Frequency::Daily => Frequency::Monthly,
            Frequency::Weekly => Frequency::Daily,
            Frequency::Monthly => Frequency::Weekly,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label().to_lowercase())
    }
}

impl FromStr for Frequency {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "monthly" => Ok(Frequency::Monthly),
            _ => Err(DashError::UnknownName {
                kind: "alert frequency",
                name: s.to_string(),
            }),
        }
    }
}

/// A saved literature search that is periodically re-run for its owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    /// Owning user id. Not checked against any user roster.
    pub user_id: String,
    pub title: String,
    /// Free-text search terms, e.g. "breast cancer, HER2, immunotherapy".
    pub query: String,
    pub specialty: String,
    pub frequency: Frequency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_sent: Option<DateTime<Utc>>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}
