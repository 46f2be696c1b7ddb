//! # medresearch-core
//!
//! The view-state model of the MedResearch dashboard.
//!
//! ## Overview
//!
//! The shell holds one `AppState` and feeds it `Event`s through `reduce`.
//! The state combines:
//!
//! - the session (who is signed in, see [`session`])
//! - navigation (active section and drill-down, see [`navigation`])
//! - the session's mutable alerts slice (see [`alerts`])
//!
//! [`view::resolve`] turns a state into the `Screen` to draw. Records come
//! from a [`traits::Catalog`]; logins are checked by a
//! [`traits::Authenticator`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use medresearch_core::{session, state::{reduce, AppState, Event}, view};
//!
//! let state = AppState::new(catalog, Preferences::default());
//! let state = session::sign_in(state, &authenticator, &credentials).into_state();
//! let state = reduce(state, Event::ChangeSection(Section::Cases)).into_state();
//! let screen = view::resolve(&state);
//! ```

pub mod alerts;
pub mod navigation;
pub mod session;
pub mod state;
pub mod traits;
pub mod view;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};

    use medresearch_contracts::{
        alert::{Alert, Frequency},
        case::{CaseStatus, Certainty, PatientCase, Recommendation, TreatmentProtocol},
        document::{Annotation, Document},
        error::{DashError, DashResult},
        evidence::EvidenceLevel,
        overview::{ActivityItem, AnalyticsMetric, ComplianceRecord, Notification, StatCard},
        user::{Role, User},
    };

    use crate::{
        alerts::{AlertDraft, DraftField, Stamp},
        navigation::{CaseTab, DetailTab, DocumentTab, Section, SelectionPolicy},
        session::{self, Credentials, Session},
        state::{reduce, AppState, Event, Preferences, Transition},
        traits::{Authenticator, Catalog},
        view::{body_blocks, resolve, Block, Screen},
    };

    // ── Fixtures ──────────────────────────────────────────────────────────────

    #[derive(Debug)]
    struct FixtureCatalog {
        cases: Vec<PatientCase>,
        documents: Vec<Document>,
        recommendations: Vec<Recommendation>,
        alerts: Vec<Alert>,
    }

    fn case(id: &str) -> PatientCase {
        PatientCase {
            id: id.to_string(),
            patient_id: format!("PT-{}", id),
            condition: "Stage II Breast Cancer".to_string(),
            age: 45,
            genetic_markers: vec!["BRCA1+".to_string()],
            comorbidities: vec![],
            assigned_physicians: vec!["1".to_string()],
            status: CaseStatus::Active,
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 12, 15, 14, 20, 0).unwrap(),
        }
    }

    fn document(id: &str) -> Document {
        Document {
            id: id.to_string(),
            title: format!("Paper {}", id),
            doi: None,
            authors: vec!["Smith JA".to_string()],
            uploaded_by: "1".to_string(),
            uploaded_at: Utc.with_ymd_and_hms(2024, 12, 1, 14, 30, 0).unwrap(),
            tags: vec![],
            evidence_level: EvidenceLevel::Level1,
            specialty: "Oncology".to_string(),
            summary: "summary".to_string(),
            key_findings: vec![],
            url: None,
        }
    }

    fn recommendation(id: &str, case_id: &str) -> Recommendation {
        Recommendation {
            id: id.to_string(),
            case_id: case_id.to_string(),
            recommendation: "Initiate trastuzumab".to_string(),
            rationale: "RCT evidence".to_string(),
            evidence_level: EvidenceLevel::Level1,
            certainty: Certainty::High,
            citations: vec![],
            created_by: "1".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 12, 15, 14, 30, 0).unwrap(),
        }
    }

    fn alert(id: &str) -> Alert {
        Alert {
            id: id.to_string(),
            user_id: "1".to_string(),
            title: format!("{} title", id),
            query: "HER2".to_string(),
            specialty: "Oncology".to_string(),
            frequency: Frequency::Weekly,
            last_sent: None,
            active: true,
            created_at: Utc.with_ymd_and_hms(2024, 11, 1, 10, 0, 0).unwrap(),
        }
    }

    impl Catalog for FixtureCatalog {
        fn cases(&self) -> &[PatientCase] {
            &self.cases
        }
        fn documents(&self) -> &[Document] {
            &self.documents
        }
        fn protocols(&self) -> &[TreatmentProtocol] {
            &[]
        }
        fn recommendations(&self) -> &[Recommendation] {
            &self.recommendations
        }
        fn annotations(&self) -> &[Annotation] {
            &[]
        }
        fn seed_alerts(&self) -> Vec<Alert> {
            self.alerts.clone()
        }
        fn compliance_records(&self) -> &[ComplianceRecord] {
            &[]
        }
        fn analytics(&self) -> &[AnalyticsMetric] {
            &[]
        }
        fn dashboard_stats(&self) -> &[StatCard] {
            &[]
        }
        fn recent_activity(&self) -> &[ActivityItem] {
            &[]
        }
        fn notifications(&self) -> &[Notification] {
            &[]
        }
        fn document_body(&self, document_id: &str) -> Option<&str> {
            (document_id == "DOC-001").then_some("ABSTRACT\n\n    Background text.\nMETHODS\n    Trial design.")
        }
    }

    fn catalog() -> Arc<dyn Catalog> {
        Arc::new(FixtureCatalog {
            cases: vec![case("CASE-0001"), case("CASE-0002")],
            documents: vec![document("DOC-001"), document("DOC-002")],
            recommendations: vec![
                recommendation("REC-001", "CASE-0001"),
                recommendation("REC-002", "CASE-0002"),
                recommendation("REC-003", "CASE-0001"),
            ],
            alerts: vec![alert("ALERT-001"), alert("ALERT-002")],
        })
    }

    struct AcceptAll;

    impl Authenticator for AcceptAll {
        fn authenticate(&self, credentials: &Credentials) -> DashResult<User> {
            Ok(User {
                id: "1".to_string(),
                name: "Dr. Sarah Chen".to_string(),
                email: credentials.email.clone(),
                role: Role::Physician,
                specialty: "Oncology".to_string(),
                avatar: None,
            })
        }
    }

    struct RejectAll;

    impl Authenticator for RejectAll {
        fn authenticate(&self, _credentials: &Credentials) -> DashResult<User> {
            Err(DashError::AuthenticationFailed {
                reason: "unknown account".to_string(),
            })
        }
    }

    fn signed_in_with(preferences: Preferences) -> AppState {
        let state = AppState::new(catalog(), preferences);
        session::sign_in(state, &AcceptAll, &Credentials::new("chen@example.org", "pw")).into_state()
    }

    fn signed_in() -> AppState {
        signed_in_with(Preferences::default())
    }

    /// Apply events in order, asserting none is rejected.
    fn run(state: AppState, events: impl IntoIterator<Item = Event>) -> AppState {
        events.into_iter().fold(state, |state, event| {
            let t = reduce(state, event.clone());
            assert!(t.rejection().is_none(), "{:?} rejected: {:?}", event, t.rejection());
            t.into_state()
        })
    }

    fn alert_ids(state: &AppState) -> Vec<String> {
        state.alerts().alerts().iter().map(|a| a.id.clone()).collect()
    }

    fn stamp(id: &str) -> Stamp {
        Stamp::fixed(id, Utc.with_ymd_and_hms(2024, 12, 16, 9, 0, 0).unwrap())
    }

    // ── Session ───────────────────────────────────────────────────────────────

    #[test]
    fn test_signed_out_state_shows_login() {
        let state = AppState::new(catalog(), Preferences::default());
        assert!(matches!(resolve(&state), Screen::Login));
        assert!(state.current_user().is_none());
    }

    #[test]
    fn test_sign_in_lands_on_dashboard() {
        let state = signed_in();
        assert_eq!(state.current_user().map(|u| u.name.as_str()), Some("Dr. Sarah Chen"));
        assert_eq!(state.navigation().section(), Section::Dashboard);
        assert!(matches!(resolve(&state), Screen::Dashboard { .. }));
    }

    #[test]
    fn test_refused_login_leaves_state_signed_out() {
        let state = AppState::new(catalog(), Preferences::default());
        let t = session::sign_in(state, &RejectAll, &Credentials::new("x@example.org", "bad"));
        assert!(matches!(
            t.rejection(),
            Some(DashError::AuthenticationFailed { .. })
        ));
        assert!(!t.state().is_signed_in());
    }

    #[test]
    fn test_events_require_a_session() {
        let state = AppState::new(catalog(), Preferences::default());
        let t = reduce(state, Event::ChangeSection(Section::Cases));
        assert_eq!(t.rejection(), Some(&DashError::NotSignedIn));
        assert_eq!(t.state().navigation().section(), Section::Dashboard);
    }

    #[test]
    fn test_sign_out_resets_navigation_and_alerts() {
        let state = run(
            signed_in(),
            [
                Event::ChangeSection(Section::Alerts),
                Event::DeleteAlert("ALERT-001".to_string()),
                Event::OpenAlertForm,
                Event::SignedOut,
            ],
        );
        assert!(!state.is_signed_in());
        assert_eq!(state.navigation().section(), Section::Dashboard);
        assert_eq!(alert_ids(&state), vec!["ALERT-001", "ALERT-002"]);
        assert!(state.alert_form().is_none());
        assert!(matches!(resolve(&state), Screen::Login));
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let rendered = format!("{:?}", Credentials::new("a@b.c", "hunter2"));
        assert!(rendered.contains("a@b.c"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn test_sessions_get_distinct_ids() {
        let user = AcceptAll.authenticate(&Credentials::default()).unwrap();
        assert_ne!(Session::start(user.clone()).id, Session::start(user).id);
    }

    // ── Navigation through the reducer ────────────────────────────────────────

    #[test]
    fn test_reselecting_section_is_unchanged() {
        let state = run(signed_in(), [Event::ChangeSection(Section::Library)]);
        let t = reduce(state, Event::ChangeSection(Section::Library));
        assert!(matches!(t, Transition::Unchanged { .. }));
    }

    #[test]
    fn test_case_drill_down_renders_detail_with_matching_recommendations() {
        let state = run(
            signed_in(),
            [
                Event::ChangeSection(Section::Cases),
                Event::SelectItem("CASE-0001".to_string()),
            ],
        );
        match resolve(&state) {
            Screen::CaseDetail {
                case,
                tab,
                recommendations,
                ..
            } => {
                assert_eq!(case.id, "CASE-0001");
                assert_eq!(tab, CaseTab::Overview);
                let ids: Vec<&str> = recommendations.iter().map(|r| r.id.as_str()).collect();
                assert_eq!(ids, vec!["REC-001", "REC-003"], "stored order, matching case only");
            }
            other => panic!("expected case detail, got {:?}", other),
        }
    }

    #[test]
    fn test_back_returns_to_list_and_forgets_selection() {
        let state = run(
            signed_in(),
            [
                Event::ChangeSection(Section::Cases),
                Event::SelectItem("CASE-0001".to_string()),
                Event::Back,
            ],
        );
        assert!(state.navigation().selection().is_none());
        assert!(matches!(resolve(&state), Screen::CaseList { .. }));

        let state = run(state, [Event::ChangeSection(Section::Dashboard), Event::ChangeSection(Section::Cases)]);
        assert!(matches!(resolve(&state), Screen::CaseList { .. }), "not restored on re-entry");
    }

    #[test]
    fn test_dangling_case_id_falls_back_to_list() {
        let state = run(
            signed_in(),
            [
                Event::ChangeSection(Section::Cases),
                Event::SelectItem("CASE-9999".to_string()),
            ],
        );
        match resolve(&state) {
            Screen::CaseList { cases } => assert_eq!(cases.len(), 2),
            other => panic!("expected case list, got {:?}", other),
        }
    }

    #[test]
    fn test_dangling_id_counts_as_no_selection() {
        let state = run(signed_in(), [Event::ChangeSection(Section::Cases)]);

        let t = reduce(state, Event::SelectItem("CASE-9999".to_string()));
        assert!(matches!(t, Transition::Unchanged { .. }));
        assert!(t.state().navigation().selection().is_none());

        let t = reduce(t.into_state(), Event::SelectTab(DetailTab::Case(CaseTab::Protocols)));
        assert!(matches!(t, Transition::Unchanged { .. }));

        let t = reduce(t.into_state(), Event::Back);
        assert!(matches!(t, Transition::Unchanged { .. }));
        assert!(matches!(resolve(t.state()), Screen::CaseList { .. }));
    }

    #[test]
    fn test_dangling_document_id_is_ignored_in_library() {
        let state = run(signed_in(), [Event::ChangeSection(Section::Library)]);
        let t = reduce(state, Event::SelectItem("DOC-999".to_string()));
        assert!(matches!(t, Transition::Unchanged { .. }));
        assert!(matches!(resolve(t.state()), Screen::Library { .. }));
    }

    #[test]
    fn test_select_item_without_drill_down_still_rejected() {
        let t = reduce(signed_in(), Event::SelectItem("CASE-9999".to_string()));
        assert!(matches!(t.rejection(), Some(DashError::NoDrillDown { .. })));
    }

    #[test]
    fn test_persisted_selection_survives_section_round_trip() {
        let preferences = Preferences {
            selection_policy: SelectionPolicy::PersistPerSection,
            ..Preferences::default()
        };
        let state = run(
            signed_in_with(preferences),
            [
                Event::ChangeSection(Section::Library),
                Event::SelectItem("DOC-002".to_string()),
                Event::ChangeSection(Section::Alerts),
                Event::ChangeSection(Section::Library),
            ],
        );
        assert!(matches!(
            resolve(&state),
            Screen::DocumentViewer { document, .. } if document.id == "DOC-002"
        ));
    }

    #[test]
    fn test_document_viewer_switches_tabs() {
        let state = run(
            signed_in(),
            [
                Event::ChangeSection(Section::Library),
                Event::SelectItem("DOC-001".to_string()),
                Event::SelectTab(DetailTab::Document(DocumentTab::Annotations)),
            ],
        );
        match resolve(&state) {
            Screen::DocumentViewer { tab, body, annotations, .. } => {
                assert_eq!(tab, DocumentTab::Annotations);
                assert!(body.is_some());
                assert!(annotations.is_empty());
            }
            other => panic!("expected document viewer, got {:?}", other),
        }
    }

    #[test]
    fn test_selecting_in_alerts_is_rejected() {
        let state = run(signed_in(), [Event::ChangeSection(Section::Alerts)]);
        let t = reduce(state, Event::SelectItem("ALERT-001".to_string()));
        assert_eq!(
            t.rejection(),
            Some(&DashError::NoDrillDown {
                section: "alerts".to_string()
            })
        );
    }

    // ── Alerts through the reducer ────────────────────────────────────────────

    #[test]
    fn test_create_alert_scenario_prepends_new_alert() {
        let state = run(
            signed_in(),
            [Event::CreateAlert {
                draft: AlertDraft::new("X", "Y", "Oncology"),
                stamp: stamp("ALERT-NEW"),
            }],
        );
        assert_eq!(alert_ids(&state), vec!["ALERT-NEW", "ALERT-001", "ALERT-002"]);
        let created = &state.alerts().alerts()[0];
        assert!(created.active);
        assert_eq!(created.user_id, "1", "owned by the signed-in user");
    }

    #[test]
    fn test_invalid_create_is_rejected_without_change() {
        let state = signed_in();
        let t = reduce(
            state,
            Event::CreateAlert {
                draft: AlertDraft::new("X", "", "Oncology"),
                stamp: stamp("ALERT-NEW"),
            },
        );
        assert_eq!(t.rejection(), Some(&DashError::InvalidDraft { field: "query" }));
        assert_eq!(alert_ids(t.state()), vec!["ALERT-001", "ALERT-002"]);
    }

    #[test]
    fn test_form_submit_creates_and_closes() {
        let state = run(
            signed_in(),
            [
                Event::ChangeSection(Section::Alerts),
                Event::OpenAlertForm,
                Event::EditAlertDraft {
                    field: DraftField::Title,
                    value: "Neuro updates".to_string(),
                },
                Event::EditAlertDraft {
                    field: DraftField::Query,
                    value: "glioma".to_string(),
                },
                Event::EditAlertDraft {
                    field: DraftField::Specialty,
                    value: "Neurology".to_string(),
                },
                Event::SetAlertFrequency(Frequency::Daily),
                Event::SubmitAlertForm(stamp("ALERT-FORM")),
            ],
        );
        assert!(state.alert_form().is_none());
        let created = &state.alerts().alerts()[0];
        assert_eq!(created.id, "ALERT-FORM");
        assert_eq!(created.frequency, Frequency::Daily);
    }

    #[test]
    fn test_incomplete_form_submit_keeps_form_open() {
        let state = run(
            signed_in(),
            [Event::ChangeSection(Section::Alerts), Event::OpenAlertForm],
        );
        let t = reduce(state, Event::SubmitAlertForm(stamp("ALERT-X")));
        assert_eq!(t.rejection(), Some(&DashError::InvalidDraft { field: "title" }));
        assert!(t.state().alert_form().is_some());
        assert_eq!(t.state().alerts().len(), 2);
    }

    #[test]
    fn test_form_starts_with_preferred_frequency() {
        let preferences = Preferences {
            default_frequency: Frequency::Monthly,
            ..Preferences::default()
        };
        let state = run(
            signed_in_with(preferences),
            [Event::ChangeSection(Section::Alerts), Event::OpenAlertForm],
        );
        assert_eq!(state.alert_form().map(|d| d.frequency), Some(Frequency::Monthly));
    }

    #[test]
    fn test_form_only_opens_on_alerts_screen() {
        let t = reduce(signed_in(), Event::OpenAlertForm);
        assert!(matches!(t, Transition::Unchanged { .. }));
    }

    #[test]
    fn test_leaving_alerts_closes_form() {
        let state = run(
            signed_in(),
            [
                Event::ChangeSection(Section::Alerts),
                Event::OpenAlertForm,
                Event::ChangeSection(Section::Dashboard),
            ],
        );
        assert!(state.alert_form().is_none());
    }

    #[test]
    fn test_toggle_and_delete_unknown_ids_are_unchanged() {
        let state = signed_in();
        let t = reduce(state, Event::ToggleAlert("ALERT-404".to_string()));
        assert!(matches!(t, Transition::Unchanged { .. }));
        let t = reduce(t.into_state(), Event::DeleteAlert("ALERT-404".to_string()));
        assert!(matches!(t, Transition::Unchanged { .. }));
        assert_eq!(t.state().alerts().len(), 2);
    }

    #[test]
    fn test_alerts_persist_across_sections_within_a_session() {
        let state = run(
            signed_in(),
            [
                Event::ChangeSection(Section::Alerts),
                Event::ToggleAlert("ALERT-002".to_string()),
                Event::ChangeSection(Section::Dashboard),
                Event::ChangeSection(Section::Alerts),
            ],
        );
        assert_eq!(state.alerts().active_count(), 1);
    }

    // ── Document body ─────────────────────────────────────────────────────────

    #[test]
    fn test_body_blocks_split_headings_and_paragraphs() {
        let blocks = body_blocks("ABSTRACT\n\n    Background text.\nMETHODS\n    Trial design.");
        assert_eq!(
            blocks,
            vec![
                Block::Heading("ABSTRACT"),
                Block::Paragraph("Background text."),
                Block::Heading("METHODS"),
                Block::Paragraph("Trial design."),
            ]
        );
    }

    #[test]
    fn test_only_abstract_introduction_and_methods_are_headings() {
        let blocks = body_blocks("INTRODUCTION\nRESULTS\nDISCUSSION\nCONCLUSIONS");
        assert_eq!(
            blocks,
            vec![
                Block::Heading("INTRODUCTION"),
                Block::Paragraph("RESULTS"),
                Block::Paragraph("DISCUSSION"),
                Block::Paragraph("CONCLUSIONS"),
            ]
        );
    }
}
