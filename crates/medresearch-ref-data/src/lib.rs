//! # medresearch-ref-data
//!
//! Reference data for the MedResearch dashboard.
//!
//! Provides the two collaborators the core needs to run end to end:
//!
//! 1. **`StaticCatalog`**: cases, literature, protocols, alerts and the
//!    dashboard overview, loaded from `mock_data`.
//! 2. **`MockAuthenticator`**: a login that accepts any credentials and signs
//!    in as one fixed user.
//!
//! All data is hardcoded and fictional. No external systems are contacted.

pub mod auth;
pub mod catalog;
pub mod mock_data;

pub use auth::MockAuthenticator;
pub use catalog::StaticCatalog;

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, sync::Arc};

    use chrono::{TimeZone, Utc};
    use medresearch_contracts::{alert::Frequency, lookup::Lookup};
    use medresearch_core::{
        alerts::{AlertDraft, Stamp},
        navigation::{CaseTab, DetailTab, DocumentTab, Section},
        session::{sign_in, Credentials},
        state::{reduce, AppState, Event, Preferences},
        traits::Catalog,
        view::{body_blocks, resolve, Block, Screen},
    };

    use super::*;

    fn signed_in() -> AppState {
        let state = AppState::new(Arc::new(StaticCatalog::new()), Preferences::default());
        let creds = Credentials::new("anyone@example.org", "anything");
        sign_in(state, &MockAuthenticator::default(), &creds).into_state()
    }

    fn apply(state: AppState, events: Vec<Event>) -> AppState {
        events
            .into_iter()
            .fold(state, |state, event| reduce(state, event).into_state())
    }

    // ── Catalog integrity ────────────────────────────────────────────────────

    #[test]
    fn test_record_ids_are_unique() {
        let catalog = StaticCatalog::new();
        let case_ids: HashSet<_> = catalog.cases().iter().map(|c| c.id.as_str()).collect();
        let doc_ids: HashSet<_> = catalog.documents().iter().map(|d| d.id.as_str()).collect();
        let alert_ids: HashSet<_> = catalog.seed_alerts().into_iter().map(|a| a.id).collect();
        assert_eq!(case_ids.len(), catalog.cases().len());
        assert_eq!(doc_ids.len(), catalog.documents().len());
        assert_eq!(alert_ids.len(), 2);
    }

    #[test]
    fn test_cross_references_resolve() {
        let catalog = StaticCatalog::new();
        for rec in catalog.recommendations() {
            assert!(catalog.find_case(&rec.case_id).is_found(), "{}", rec.id);
        }
        for ann in catalog.annotations() {
            assert!(catalog.find_document(&ann.document_id).is_found(), "{}", ann.id);
        }
    }

    #[test]
    fn test_annotation_position_points_at_quoted_text() {
        let catalog = StaticCatalog::new();
        for ann in catalog.annotations() {
            let body = catalog.document_body(&ann.document_id).unwrap();
            assert_eq!(&body[ann.position.start..ann.position.end], ann.text);
        }
    }

    #[test]
    fn test_seed_alerts_match_sample_schedule() {
        let alerts = StaticCatalog::new().seed_alerts();
        assert_eq!(alerts[0].id, "ALERT-001");
        assert_eq!(alerts[0].frequency, Frequency::Weekly);
        assert_eq!(alerts[1].frequency, Frequency::Monthly);
        assert!(alerts.iter().all(|a| a.active));
    }

    #[test]
    fn test_only_first_document_has_full_text() {
        let catalog = StaticCatalog::new();
        assert!(catalog.document_body("DOC-001").is_some());
        assert!(catalog.document_body("DOC-002").is_none());
        assert!(matches!(catalog.find_document("DOC-999"), Lookup::Missing { id: "DOC-999" }));
    }

    #[test]
    fn test_trial_body_parses_into_sections() {
        let blocks = body_blocks(mock_data::TRASTUZUMAB_TRIAL_BODY);
        let headings: Vec<_> = blocks
            .iter()
            .filter_map(|b| match b {
                Block::Heading(h) => Some(*h),
                Block::Paragraph(_) => None,
            })
            .collect();
        assert_eq!(headings, vec!["ABSTRACT", "INTRODUCTION", "METHODS"]);
        assert!(matches!(blocks[1], Block::Paragraph(p) if p.starts_with("Background:")));
    }

    #[test]
    fn test_case_insights_cover_every_case() {
        for case in mock_data::cases() {
            assert!(!mock_data::case_insights(&case.id).is_empty(), "{}", case.id);
        }
        assert!(mock_data::case_insights("CASE-9999").is_empty());
    }

    // ── Authentication ───────────────────────────────────────────────────────

    #[test]
    fn test_mock_login_accepts_any_credentials() {
        let state = signed_in();
        assert_eq!(state.current_user().unwrap().name, "Dr. Sarah Chen");
        assert_eq!(state.alerts().len(), 2);
    }

    #[test]
    fn test_configured_user_replaces_demo_user() {
        let mut user = mock_data::demo_user();
        user.id = "7".to_string();
        user.name = "Dr. Test".to_string();
        let state = AppState::new(Arc::new(StaticCatalog::new()), Preferences::default());
        let state = sign_in(
            state,
            &MockAuthenticator::new(user),
            &Credentials::new("", ""),
        )
        .into_state();
        assert_eq!(state.current_user().unwrap().id, "7");
    }

    // ── End to end ───────────────────────────────────────────────────────────

    #[test]
    fn test_case_drill_down_shows_its_recommendations() {
        let state = apply(
            signed_in(),
            vec![
                Event::ChangeSection(Section::Cases),
                Event::SelectItem("CASE-0001".to_string()),
                Event::SelectTab(DetailTab::Case(CaseTab::Recommendations)),
            ],
        );
        match resolve(&state) {
            Screen::CaseDetail {
                case,
                tab,
                recommendations,
                protocols,
            } => {
                assert_eq!(case.condition, "Stage II Breast Cancer");
                assert_eq!(tab, CaseTab::Recommendations);
                assert_eq!(recommendations.len(), 1);
                assert_eq!(protocols.len(), 2);
            }
            other => panic!("expected case detail, got {:?}", other),
        }
    }

    #[test]
    fn test_document_viewer_carries_body_and_annotations() {
        let state = apply(
            signed_in(),
            vec![
                Event::ChangeSection(Section::Library),
                Event::SelectItem("DOC-001".to_string()),
                Event::SelectTab(DetailTab::Document(DocumentTab::Annotations)),
            ],
        );
        match resolve(&state) {
            Screen::DocumentViewer {
                document,
                tab,
                body,
                annotations,
            } => {
                assert_eq!(document.id, "DOC-001");
                assert_eq!(tab, DocumentTab::Annotations);
                assert!(body.is_some());
                assert_eq!(annotations.len(), 1);
            }
            other => panic!("expected document viewer, got {:?}", other),
        }
    }

    #[test]
    fn test_created_alert_is_listed_first_and_forgotten_on_sign_out() {
        let stamp = Stamp::fixed("ALERT-NEW", Utc.with_ymd_and_hms(2024, 12, 20, 9, 0, 0).unwrap());
        let draft = AlertDraft::new("Lung updates", "osimertinib", "Oncology");
        let state = apply(
            signed_in(),
            vec![
                Event::ChangeSection(Section::Alerts),
                Event::CreateAlert { draft, stamp },
            ],
        );
        assert_eq!(state.alerts().alerts()[0].id, "ALERT-NEW");
        assert_eq!(state.alerts().alerts()[0].user_id, "1");
        assert_eq!(state.alerts().len(), 3);

        let state = apply(state, vec![Event::SignedOut]);
        assert!(matches!(resolve(&state), Screen::Login));
        assert_eq!(state.alerts().len(), 2);
    }
}
