//! Screen resolution: which view to draw for the current state.
//!
//! `resolve` is a pure function of `AppState`. It is also where dangling
//! selections are caught: a selected id that the catalog does not hold falls
//! back to the section's list view.

use tracing::warn;

use medresearch_contracts::{
    alert::Alert,
    case::{PatientCase, Recommendation, TreatmentProtocol},
    document::{Annotation, Document},
    lookup::Lookup,
    overview::{ActivityItem, AnalyticsMetric, ComplianceRecord, Notification, StatCard},
};

use crate::{
    alerts::AlertDraft,
    navigation::{CaseTab, DetailTab, DocumentTab, Section},
    state::AppState,
};

/// Everything one frame of the active view needs, borrowed from the state.
#[derive(Debug)]
pub enum Screen<'a> {
    /// No session: only the login form is shown.
    Login,
    Dashboard {
        stats: &'a [StatCard],
        activity: &'a [ActivityItem],
        notifications: &'a [Notification],
    },
    CaseList {
        cases: &'a [PatientCase],
    },
    CaseDetail {
        case: &'a PatientCase,
        tab: CaseTab,
        recommendations: Vec<&'a Recommendation>,
        protocols: &'a [TreatmentProtocol],
    },
    Library {
        documents: &'a [Document],
    },
    DocumentViewer {
        document: &'a Document,
        tab: DocumentTab,
        body: Option<&'a str>,
        annotations: Vec<&'a Annotation>,
    },
    Alerts {
        alerts: &'a [Alert],
        form: Option<&'a AlertDraft>,
    },
    Compliance {
        records: &'a [ComplianceRecord],
    },
    Analytics {
        metrics: &'a [AnalyticsMetric],
    },
}

impl Screen<'_> {
    /// Whether this is a detail view (so `back` has somewhere to go).
    pub fn is_detail(&self) -> bool {
        matches!(self, Screen::CaseDetail { .. } | Screen::DocumentViewer { .. })
    }
}

/// Pick the screen for `state`.
pub fn resolve(state: &AppState) -> Screen<'_> {
    if !state.is_signed_in() {
        return Screen::Login;
    }

    let catalog = state.catalog();
    let navigation = state.navigation();
    let section = navigation.section();

    match section {
        Section::Dashboard => Screen::Dashboard {
            stats: catalog.dashboard_stats(),
            activity: catalog.recent_activity(),
            notifications: catalog.notifications(),
        },
        Section::Cases => {
            let list = Screen::CaseList {
                cases: catalog.cases(),
            };
            let Some(selection) = navigation.selection() else {
                return list;
            };
            let DetailTab::Case(tab) = selection.tab else {
                return list;
            };
            match catalog.find_case(&selection.item_id) {
                Lookup::Found(case) => Screen::CaseDetail {
                    case,
                    tab,
                    recommendations: catalog.recommendations_for(&case.id),
                    protocols: catalog.protocols(),
                },
                Lookup::Missing { id } => {
                    warn!(section = %section, item_id = %id, "selected case not found; showing list");
                    list
                }
            }
        }
        Section::Library => {
            let list = Screen::Library {
                documents: catalog.documents(),
            };
            let Some(selection) = navigation.selection() else {
                return list;
            };
            let DetailTab::Document(tab) = selection.tab else {
                return list;
            };
            match catalog.find_document(&selection.item_id) {
                Lookup::Found(document) => Screen::DocumentViewer {
                    document,
                    tab,
                    body: catalog.document_body(&document.id),
                    annotations: catalog.annotations_for(&document.id),
                },
                Lookup::Missing { id } => {
                    warn!(section = %section, item_id = %id, "selected document not found; showing list");
                    list
                }
            }
        }
        Section::Alerts => Screen::Alerts {
            alerts: state.alerts().alerts(),
            form: state.alert_form(),
        },
        Section::Compliance => Screen::Compliance {
            records: catalog.compliance_records(),
        },
        Section::Analytics => Screen::Analytics {
            metrics: catalog.analytics(),
        },
    }
}

// ── Document body ─────────────────────────────────────────────────────────────

/// One block of a document body as displayed by the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block<'a> {
    Heading(&'a str),
    Paragraph(&'a str),
}

const SECTION_HEADINGS: [&str; 3] = ["ABSTRACT", "INTRODUCTION", "METHODS"];

/// Split a document body into headings and paragraphs.
///
/// Blank lines are dropped. A line consisting only of a known section name
/// (e.g. `ABSTRACT`) is a heading; every other line is a paragraph.
pub fn body_blocks(body: &str) -> Vec<Block<'_>> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            if SECTION_HEADINGS.contains(&line) {
                Block::Heading(line)
            } else {
                Block::Paragraph(line)
            }
        })
        .collect()
}
