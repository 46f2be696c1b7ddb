//! In-memory `Catalog` over the fixed sample records.

use tracing::debug;

use medresearch_contracts::{
    alert::Alert,
    case::{PatientCase, Recommendation, TreatmentProtocol},
    document::{Annotation, Document},
    overview::{ActivityItem, AnalyticsMetric, ComplianceRecord, Notification, StatCard},
};
use medresearch_core::traits::Catalog;

use crate::mock_data;

/// Read-only catalog loaded once from `mock_data`.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    cases: Vec<PatientCase>,
    documents: Vec<Document>,
    protocols: Vec<TreatmentProtocol>,
    recommendations: Vec<Recommendation>,
    annotations: Vec<Annotation>,
    alerts: Vec<Alert>,
    compliance: Vec<ComplianceRecord>,
    analytics: Vec<AnalyticsMetric>,
    stats: Vec<StatCard>,
    activity: Vec<ActivityItem>,
    notifications: Vec<Notification>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        let catalog = Self {
            cases: mock_data::cases(),
            documents: mock_data::documents(),
            protocols: mock_data::protocols(),
            recommendations: mock_data::recommendations(),
            annotations: mock_data::annotations(),
            alerts: mock_data::alerts(),
            compliance: mock_data::compliance_records(),
            analytics: mock_data::analytics(),
            stats: mock_data::dashboard_stats(),
            activity: mock_data::recent_activity(),
            notifications: mock_data::notifications(),
        };
        debug!(
            cases = catalog.cases.len(),
            documents = catalog.documents.len(),
            alerts = catalog.alerts.len(),
            "sample catalog loaded"
        );
        catalog
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog for StaticCatalog {
    fn cases(&self) -> &[PatientCase] {
        &self.cases
    }

    fn documents(&self) -> &[Document] {
        &self.documents
    }

    fn protocols(&self) -> &[TreatmentProtocol] {
        &self.protocols
    }

    fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    fn seed_alerts(&self) -> Vec<Alert> {
        self.alerts.clone()
    }

    fn compliance_records(&self) -> &[ComplianceRecord] {
        &self.compliance
    }

    fn analytics(&self) -> &[AnalyticsMetric] {
        &self.analytics
    }

    fn dashboard_stats(&self) -> &[StatCard] {
        &self.stats
    }

    fn recent_activity(&self) -> &[ActivityItem] {
        &self.activity
    }

    fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    fn document_body(&self, document_id: &str) -> Option<&str> {
        match document_id {
            "DOC-001" => Some(mock_data::TRASTUZUMAB_TRIAL_BODY),
            _ => None,
        }
    }
}
