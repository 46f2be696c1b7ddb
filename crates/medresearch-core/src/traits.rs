//! Collaborator seams for the dashboard core.
//!
//! - `Catalog`: read-only entity store (cases, documents, alerts seed, …)
//! - `Authenticator`: credentials-verification service behind login
//!
//! Both are served by fixed sample data today. A production deployment swaps
//! in implementations backed by a document store and an identity provider
//! without touching the reducer.

use std::fmt;

use medresearch_contracts::{
    alert::Alert,
    case::{PatientCase, Recommendation, TreatmentProtocol},
    document::{Annotation, Document},
    error::DashResult,
    lookup::Lookup,
    overview::{ActivityItem, AnalyticsMetric, ComplianceRecord, Notification, StatCard},
    user::User,
};

use crate::session::Credentials;

/// The read side of the entity store.
///
/// Slices are returned in stored order, which is also display order.
pub trait Catalog: Send + Sync + fmt::Debug {
    fn cases(&self) -> &[PatientCase];

    fn documents(&self) -> &[Document];

    fn protocols(&self) -> &[TreatmentProtocol];

    fn recommendations(&self) -> &[Recommendation];

    fn annotations(&self) -> &[Annotation];

    /// The alerts a fresh session starts with. The session works on its own
    /// copy; the catalog is never mutated.
    fn seed_alerts(&self) -> Vec<Alert>;

    fn compliance_records(&self) -> &[ComplianceRecord];

    fn analytics(&self) -> &[AnalyticsMetric];

    fn dashboard_stats(&self) -> &[StatCard];

    fn recent_activity(&self) -> &[ActivityItem];

    fn notifications(&self) -> &[Notification];

    /// Full text of a document, if the store holds one.
    fn document_body(&self, document_id: &str) -> Option<&str>;

    fn find_case<'a>(&'a self, id: &'a str) -> Lookup<'a, PatientCase> {
        Lookup::find_by(self.cases(), id, |c| c.id.as_str())
    }

    fn find_document<'a>(&'a self, id: &'a str) -> Lookup<'a, Document> {
        Lookup::find_by(self.documents(), id, |d| d.id.as_str())
    }

    /// Recommendations recorded against `case_id`, in stored order.
    fn recommendations_for(&self, case_id: &str) -> Vec<&Recommendation> {
        self.recommendations()
            .iter()
            .filter(|r| r.case_id == case_id)
            .collect()
    }

    /// Annotations on `document_id`, in stored order.
    fn annotations_for(&self, document_id: &str) -> Vec<&Annotation> {
        self.annotations()
            .iter()
            .filter(|a| a.document_id == document_id)
            .collect()
    }
}

/// Verifies credentials and issues the user record for a new session.
pub trait Authenticator: Send + Sync {
    /// Return the authenticated user, or `DashError::AuthenticationFailed`.
    fn authenticate(&self, credentials: &Credentials) -> DashResult<User>;
}
