//! Application state and the reducer that advances it.
//!
//! Every user intent becomes an `Event`. `reduce` takes the current state by
//! value, applies one event, and reports the outcome:
//!
//!   AppState + Event → reduce → Applied | Unchanged | Rejected
//!
//! `reduce` performs no I/O. Anything impure (credential checks, fresh ids,
//! wall-clock time) is resolved by the caller and carried inside the event.

use std::sync::Arc;

use tracing::{debug, info, warn};

use medresearch_contracts::{
    alert::Frequency,
    error::{DashError, DashResult},
    lookup::Lookup,
    user::User,
};

use crate::{
    alerts::{AlertDraft, AlertStore, DraftField, Stamp},
    navigation::{DetailTab, Navigation, Section, SelectionPolicy},
    session::Session,
    traits::Catalog,
    view::resolve,
};

// ── Preferences ───────────────────────────────────────────────────────────────

/// Behavioural knobs fixed for the lifetime of an `AppState`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preferences {
    pub selection_policy: SelectionPolicy,
    /// Frequency a freshly opened create-alert form starts with.
    pub default_frequency: Frequency,
}

// ── State ─────────────────────────────────────────────────────────────────────

/// Everything the shell needs to render one frame.
#[derive(Debug, Clone)]
pub struct AppState {
    catalog: Arc<dyn Catalog>,
    preferences: Preferences,
    session: Option<Session>,
    navigation: Navigation,
    alerts: AlertStore,
    alert_form: Option<AlertDraft>,
}

impl AppState {
    /// A signed-out state over `catalog`, with the alerts slice seeded from it.
    pub fn new(catalog: Arc<dyn Catalog>, preferences: Preferences) -> Self {
        let alerts = AlertStore::new(catalog.seed_alerts());
        Self {
            navigation: Navigation::new(preferences.selection_policy),
            catalog,
            preferences,
            session: None,
            alerts,
            alert_form: None,
        }
    }

    pub fn catalog(&self) -> &dyn Catalog {
        self.catalog.as_ref()
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    pub fn alerts(&self) -> &AlertStore {
        &self.alerts
    }

    /// The create-alert form, when open.
    pub fn alert_form(&self) -> Option<&AlertDraft> {
        self.alert_form.as_ref()
    }

    fn require_user(&self) -> DashResult<&User> {
        self.current_user().ok_or(DashError::NotSignedIn)
    }

    /// Forget everything the session changed.
    fn reset_session_state(&mut self) {
        self.navigation.reset();
        self.alerts = AlertStore::new(self.catalog.seed_alerts());
        self.alert_form = None;
    }
}

// ── Events ────────────────────────────────────────────────────────────────────

/// A user intent, already resolved to plain data.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A login succeeded; install the session.
    SignedIn(Session),
    SignedOut,

    ChangeSection(Section),
    SelectItem(String),
    Back,
    SelectTab(DetailTab),

    OpenAlertForm,
    CancelAlertForm,
    EditAlertDraft { field: DraftField, value: String },
    SetAlertFrequency(Frequency),
    /// Create an alert from the open form and close it.
    SubmitAlertForm(Stamp),

    /// Create an alert without going through the form.
    CreateAlert { draft: AlertDraft, stamp: Stamp },
    ToggleAlert(String),
    DeleteAlert(String),
}

impl Event {
    fn name(&self) -> &'static str {
        match self {
            Event::SignedIn(_) => "signed-in",
            Event::SignedOut => "signed-out",
            Event::ChangeSection(_) => "change-section",
            Event::SelectItem(_) => "select-item",
            Event::Back => "back",
            Event::SelectTab(_) => "select-tab",
            Event::OpenAlertForm => "open-alert-form",
            Event::CancelAlertForm => "cancel-alert-form",
            Event::EditAlertDraft { .. } => "edit-alert-draft",
            Event::SetAlertFrequency(_) => "set-alert-frequency",
            Event::SubmitAlertForm(_) => "submit-alert-form",
            Event::CreateAlert { .. } => "create-alert",
            Event::ToggleAlert(_) => "toggle-alert",
            Event::DeleteAlert(_) => "delete-alert",
        }
    }
}

// ── Transitions ───────────────────────────────────────────────────────────────

/// The outcome of applying one event.
///
/// Every variant hands the state back so the caller can keep going:
/// - `Applied`   → the state changed
/// - `Unchanged` → the event was legal but had nothing to do
/// - `Rejected`  → the event was refused; `state` is exactly what went in
#[derive(Debug)]
pub enum Transition {
    Applied { state: AppState },
    Unchanged { state: AppState },
    Rejected { reason: DashError, state: AppState },
}

impl Transition {
    fn from_changed(changed: bool, state: AppState) -> Self {
        if changed {
            Transition::Applied { state }
        } else {
            Transition::Unchanged { state }
        }
    }

    pub fn state(&self) -> &AppState {
        match self {
            Transition::Applied { state }
            | Transition::Unchanged { state }
            | Transition::Rejected { state, .. } => state,
        }
    }

    pub fn into_state(self) -> AppState {
        match self {
            Transition::Applied { state }
            | Transition::Unchanged { state }
            | Transition::Rejected { state, .. } => state,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied { .. })
    }

    pub fn rejection(&self) -> Option<&DashError> {
        match self {
            Transition::Rejected { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

// ── Reducer ───────────────────────────────────────────────────────────────────

/// Apply `event` to `state`.
///
/// Every event except `SignedIn` requires a session and is rejected with
/// `NotSignedIn` otherwise.
pub fn reduce(mut state: AppState, event: Event) -> Transition {
    let name = event.name();

    if !matches!(event, Event::SignedIn(_)) && !state.is_signed_in() {
        warn!(event = name, "event rejected; no user signed in");
        return Transition::Rejected {
            reason: DashError::NotSignedIn,
            state,
        };
    }

    match apply(&mut state, event) {
        Ok(changed) => {
            debug!(event = name, changed, section = %state.navigation.section(), "event applied");
            Transition::from_changed(changed, state)
        }
        Err(reason) => {
            warn!(event = name, reason = %reason, "event rejected");
            Transition::Rejected { reason, state }
        }
    }
}

/// Mutate `state` for one event. On `Err` the state must be left untouched.
fn apply(state: &mut AppState, event: Event) -> DashResult<bool> {
    match event {
        Event::SignedIn(session) => {
            state.reset_session_state();
            state.session = Some(session);
            Ok(true)
        }
        Event::SignedOut => {
            if let Some(session) = state.session.take() {
                info!(session_id = %session.id.0, user_id = %session.user.id, "user signed out");
            }
            state.reset_session_state();
            Ok(true)
        }

        Event::ChangeSection(section) => {
            let changed = state.navigation.change_section(section);
            if changed {
                state.alert_form = None;
            }
            Ok(changed)
        }
        Event::SelectItem(id) => {
            let section = state.navigation.section();
            if section.has_drill_down() && !item_exists(state.catalog.as_ref(), section, &id) {
                warn!(section = %section, item_id = %id, "selected item not in catalog; ignored");
                return Ok(false);
            }
            state.navigation.select_item(&id)
        }
        Event::Back => {
            if !resolve(state).is_detail() {
                return Ok(false);
            }
            Ok(state.navigation.back())
        }
        Event::SelectTab(tab) => {
            if !resolve(state).is_detail() {
                return Ok(false);
            }
            Ok(state.navigation.select_tab(tab))
        }

        Event::OpenAlertForm => {
            if state.navigation.section() != Section::Alerts || state.alert_form.is_some() {
                return Ok(false);
            }
            state.alert_form = Some(AlertDraft {
                frequency: state.preferences.default_frequency,
                ..AlertDraft::default()
            });
            Ok(true)
        }
        Event::CancelAlertForm => Ok(state.alert_form.take().is_some()),
        Event::EditAlertDraft { field, value } => match state.alert_form.as_mut() {
            Some(draft) if draft.value(field) != value => {
                draft.set(field, value);
                Ok(true)
            }
            _ => Ok(false),
        },
        Event::SetAlertFrequency(frequency) => match state.alert_form.as_mut() {
            Some(draft) if draft.frequency != frequency => {
                draft.frequency = frequency;
                Ok(true)
            }
            _ => Ok(false),
        },
        Event::SubmitAlertForm(stamp) => {
            let Some(draft) = state.alert_form.clone() else {
                return Ok(false);
            };
            create_alert(state, draft, stamp)?;
            state.alert_form = None;
            Ok(true)
        }

        Event::CreateAlert { draft, stamp } => {
            create_alert(state, draft, stamp)?;
            Ok(true)
        }
        Event::ToggleAlert(id) => Ok(state.alerts.toggle_active(&id)),
        Event::DeleteAlert(id) => Ok(state.alerts.delete(&id)),
    }
}

/// Whether the catalog holds `id` for the detail view of `section`.
fn item_exists(catalog: &dyn Catalog, section: Section, id: &str) -> bool {
    match section {
        Section::Cases => matches!(catalog.find_case(id), Lookup::Found(_)),
        Section::Library => matches!(catalog.find_document(id), Lookup::Found(_)),
        _ => false,
    }
}

fn create_alert(state: &mut AppState, draft: AlertDraft, stamp: Stamp) -> DashResult<()> {
    let owner_id = state.require_user()?.id.clone();
    state.alerts.create(draft, &owner_id, stamp)?;
    Ok(())
}
