//! Literature documents and the annotations users leave on them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::evidence::EvidenceLevel;

/// A paper in the research library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    /// Author list in byline order.
    pub authors: Vec<String>,
    pub uploaded_by: String,
    pub uploaded_at: DateTime<Utc>,
    pub tags: Vec<String>,
    pub evidence_level: EvidenceLevel,
    pub specialty: String,
    pub summary: String,
    pub key_findings: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Document {
    /// Authors joined for a byline, e.g. "Smith JA, Johnson MB".
    pub fn byline(&self) -> String {
        self.authors.join(", ")
    }
}

/// Half-open character offsets into a document body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A highlighted passage with a comment thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub id: String,
    pub document_id: String,
    pub user_id: String,
    pub user_name: String,
    /// The highlighted text.
    pub text: String,
    pub comment: String,
    pub position: TextRange,
    pub resolved: bool,
    pub created_at: DateTime<Utc>,
    /// Replies in the order they were posted.
    pub replies: Vec<AnnotationReply>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationReply {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}
