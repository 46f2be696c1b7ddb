//! The alerts slice: the only part of the entity store a session may mutate.
//!
//! Records are kept newest-first. All operations are synchronous and act on
//! the session's own copy of the seed data.

use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use medresearch_contracts::{
    alert::{Alert, Frequency},
    error::{DashError, DashResult},
    lookup::Lookup,
};

// ── Drafts ────────────────────────────────────────────────────────────────────

/// Editable fields of the create-alert form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Title,
    Query,
    Specialty,
    Frequency,
}

impl DraftField {
    /// Form order.
    pub const ALL: [DraftField; 4] = [
        DraftField::Title,
        DraftField::Query,
        DraftField::Specialty,
        DraftField::Frequency,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DraftField::Title => "Alert Title",
            DraftField::Query => "Search Query",
            DraftField::Specialty => "Specialty",
            DraftField::Frequency => "Frequency",
        }
    }

    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// An alert as typed into the form, before it has an id or owner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertDraft {
    pub title: String,
    pub query: String,
    pub specialty: String,
    pub frequency: Frequency,
}

impl AlertDraft {
    pub fn new(
        title: impl Into<String>,
        query: impl Into<String>,
        specialty: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            query: query.into(),
            specialty: specialty.into(),
            frequency: Frequency::default(),
        }
    }

    pub fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// Check that title, query, and specialty are present.
    ///
    /// Whitespace-only values count as empty. The first blank field in form
    /// order is reported.
    pub fn validate(&self) -> DashResult<()> {
        let required = [
            ("title", &self.title),
            ("query", &self.query),
            ("specialty", &self.specialty),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(DashError::InvalidDraft { field });
            }
        }
        Ok(())
    }

    /// Whether the submit action is enabled.
    pub fn is_submittable(&self) -> bool {
        self.validate().is_ok()
    }

    /// Text value of a field. The frequency field renders its label.
    pub fn value(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Query => &self.query,
            DraftField::Specialty => &self.specialty,
            DraftField::Frequency => self.frequency.label(),
        }
    }

    /// Overwrite a text field. Setting `DraftField::Frequency` parses the value
    /// and leaves the draft unchanged if it is not a known frequency.
    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Title => self.title = value,
            DraftField::Query => self.query = value,
            DraftField::Specialty => self.specialty = value,
            DraftField::Frequency => {
                if let Ok(frequency) = value.parse() {
                    self.frequency = frequency;
                }
            }
        }
    }
}

// ── Stamps ────────────────────────────────────────────────────────────────────

/// The id and creation time assigned to a new alert.
///
/// Produced by the caller so that applying an event stays deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    pub id: String,
    pub at: DateTime<Utc>,
}

impl Stamp {
    /// A fresh `ALERT-<uuid>` id stamped with the current time.
    pub fn fresh() -> Self {
        Self {
            id: format!("ALERT-{}", Uuid::new_v4().simple()),
            at: Utc::now(),
        }
    }

    pub fn fixed(id: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self { id: id.into(), at }
    }
}

// ── Store ─────────────────────────────────────────────────────────────────────

/// The session's mutable list of literature alerts, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertStore {
    alerts: Vec<Alert>,
}

impl AlertStore {
    /// Wrap `seed` as-is. The seed is assumed to already be newest-first.
    pub fn new(seed: Vec<Alert>) -> Self {
        Self { alerts: seed }
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.alerts.iter().filter(|a| a.active).count()
    }

    pub fn get<'a>(&'a self, id: &'a str) -> Lookup<'a, Alert> {
        Lookup::find_by(&self.alerts, id, |a| a.id.as_str())
    }

    /// Validate `draft` and prepend it as an active alert owned by `owner_id`.
    ///
    /// # Errors
    ///
    /// - `InvalidDraft` when title, query, or specialty is blank
    /// - `DuplicateId` when `stamp.id` is already in the store
    ///
    /// The store is untouched on error.
    pub fn create(&mut self, draft: AlertDraft, owner_id: &str, stamp: Stamp) -> DashResult<&Alert> {
        draft.validate()?;
        if self.get(&stamp.id).is_found() {
            return Err(DashError::DuplicateId { id: stamp.id });
        }

        let alert = Alert {
            id: stamp.id,
            user_id: owner_id.to_string(),
            title: draft.title.trim().to_string(),
            query: draft.query.trim().to_string(),
            specialty: draft.specialty.trim().to_string(),
            frequency: draft.frequency,
            last_sent: None,
            active: true,
            created_at: stamp.at,
        };

        info!(
            alert_id = %alert.id,
            owner_id = %owner_id,
            specialty = %alert.specialty,
            frequency = %alert.frequency,
            "alert created"
        );

        self.alerts.insert(0, alert);
        Ok(&self.alerts[0])
    }

    /// Flip the active flag of alert `id`. Returns false if no such alert.
    pub fn toggle_active(&mut self, id: &str) -> bool {
        match self.alerts.iter_mut().find(|a| a.id == id) {
            Some(alert) => {
                alert.active = !alert.active;
                info!(alert_id = %id, active = alert.active, "alert toggled");
                true
            }
            None => {
                warn!(alert_id = %id, "toggle ignored; no such alert");
                false
            }
        }
    }

    /// Remove alert `id`. Returns false if no such alert.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.alerts.len();
        self.alerts.retain(|a| a.id != id);
        let removed = self.alerts.len() != before;
        if removed {
            info!(alert_id = %id, "alert deleted");
        } else {
            warn!(alert_id = %id, "delete ignored; no such alert");
        }
        removed
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn seeded(id: &str, active: bool) -> Alert {
        Alert {
            id: id.to_string(),
            user_id: "1".to_string(),
            title: format!("{} title", id),
            query: "HER2".to_string(),
            specialty: "Oncology".to_string(),
            frequency: Frequency::Weekly,
            last_sent: None,
            active,
            created_at: Utc.with_ymd_and_hms(2024, 11, 1, 10, 0, 0).unwrap(),
        }
    }

    fn store() -> AlertStore {
        AlertStore::new(vec![seeded("ALERT-001", true), seeded("ALERT-002", true)])
    }

    fn stamp(id: &str) -> Stamp {
        Stamp::fixed(id, Utc.with_ymd_and_hms(2024, 12, 16, 9, 0, 0).unwrap())
    }

    fn ids(store: &AlertStore) -> Vec<&str> {
        store.alerts().iter().map(|a| a.id.as_str()).collect()
    }

    // ── create ────────────────────────────────────────────────────────────────

    #[test]
    fn test_create_prepends_active_alert() {
        let mut store = store();
        let created = store
            .create(AlertDraft::new("X", "Y", "Oncology"), "1", stamp("ALERT-NEW"))
            .unwrap();
        assert!(created.active);
        assert_eq!(created.frequency, Frequency::Weekly);
        assert_eq!(created.user_id, "1");

        assert_eq!(ids(&store), vec!["ALERT-NEW", "ALERT-001", "ALERT-002"]);
    }

    #[test]
    fn test_create_grows_store_by_exactly_one() {
        let mut store = store();
        for n in 0..5 {
            let before = store.len();
            let draft = AlertDraft::new(format!("t{}", n), "q", "Cardiology")
                .with_frequency(Frequency::Daily);
            store.create(draft, "2", stamp(&format!("ALERT-N{}", n))).unwrap();
            assert_eq!(store.len(), before + 1);
            assert_eq!(store.alerts()[0].id, format!("ALERT-N{}", n));
        }
    }

    #[test]
    fn test_create_rejects_each_blank_required_field() {
        let cases = [
            (AlertDraft::new("", "q", "Oncology"), "title"),
            (AlertDraft::new("t", "", "Oncology"), "query"),
            (AlertDraft::new("t", "q", ""), "specialty"),
            (AlertDraft::new("t", "   ", "Oncology"), "query"),
        ];
        for (draft, field) in cases {
            let mut store = store();
            let before = store.clone();
            let err = store.create(draft, "1", stamp("ALERT-BAD")).unwrap_err();
            assert_eq!(err, DashError::InvalidDraft { field });
            assert_eq!(store, before, "invalid draft must leave store unchanged");
        }
    }

    #[test]
    fn test_create_rejects_duplicate_id() {
        let mut store = store();
        let err = store
            .create(AlertDraft::new("t", "q", "Oncology"), "1", stamp("ALERT-001"))
            .unwrap_err();
        assert_eq!(err, DashError::DuplicateId { id: "ALERT-001".to_string() });
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_create_trims_text_fields() {
        let mut store = store();
        let created = store
            .create(AlertDraft::new("  Title ", " q ", " Neurology"), "1", stamp("ALERT-T"))
            .unwrap();
        assert_eq!(created.title, "Title");
        assert_eq!(created.specialty, "Neurology");
    }

    #[test]
    fn test_fresh_stamps_are_unique() {
        let a = Stamp::fresh();
        let b = Stamp::fresh();
        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with("ALERT-"));
    }

    // ── toggle / delete ───────────────────────────────────────────────────────

    #[test]
    fn test_toggle_twice_restores_flag() {
        let mut store = store();
        assert!(store.toggle_active("ALERT-002"));
        assert_eq!(store.get("ALERT-002").found().map(|a| a.active), Some(false));
        assert!(store.toggle_active("ALERT-002"));
        assert_eq!(store.get("ALERT-002").found().map(|a| a.active), Some(true));
    }

    #[test]
    fn test_toggle_unknown_id_is_a_no_op() {
        let mut store = store();
        let before = store.clone();
        assert!(!store.toggle_active("ALERT-404"));
        assert_eq!(store, before);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut store = store();
        assert!(store.delete("ALERT-001"));
        assert_eq!(ids(&store), vec!["ALERT-002"]);
        assert!(!store.delete("ALERT-001"), "second delete finds nothing");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_active_count_tracks_toggles() {
        let mut store = store();
        assert_eq!(store.active_count(), 2);
        store.toggle_active("ALERT-001");
        assert_eq!(store.active_count(), 1);
    }

    // ── drafts ────────────────────────────────────────────────────────────────

    #[test]
    fn test_draft_set_parses_frequency() {
        let mut draft = AlertDraft::default();
        draft.set(DraftField::Frequency, "monthly".to_string());
        assert_eq!(draft.frequency, Frequency::Monthly);
        draft.set(DraftField::Frequency, "hourly".to_string());
        assert_eq!(draft.frequency, Frequency::Monthly);
        assert_eq!(draft.value(DraftField::Frequency), "Monthly");
    }

    #[test]
    fn test_draft_field_order_wraps() {
        assert_eq!(DraftField::Frequency.next(), DraftField::Title);
        assert_eq!(DraftField::Title.prev(), DraftField::Frequency);
    }
}
