//! Shell state and key handling.
//!
//! `App` owns the dashboard `AppState` plus the bits that only the terminal
//! needs: the login form, the list cursor, and which alert-form field has
//! focus. Every key press is translated into at most one reducer `Event`.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use medresearch_config::DashboardConfig;
use medresearch_core::{
    alerts::{DraftField, Stamp},
    navigation::Section,
    session::{sign_in, Credentials},
    state::{reduce, AppState, Event, Transition},
    traits::Catalog,
    view::{resolve, Screen},
};
use medresearch_ref_data::{mock_data, MockAuthenticator};

/// Which login field receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub focus: LoginField,
}

impl LoginForm {
    fn new(email: &str) -> Self {
        Self {
            email: email.to_string(),
            password: String::new(),
            focus: LoginField::Email,
        }
    }
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct App {
    pub state: AppState,
    authenticator: MockAuthenticator,
    pub specialties: Vec<String>,
    pub login: LoginForm,
    /// Highlighted row in the active list screen.
    pub cursor: usize,
    /// Focused field of the open create-alert form.
    pub form_field: DraftField,
    /// Why the last intent was refused, until the next key press.
    pub status: Option<String>,
}

impl App {
    pub fn new(catalog: Arc<dyn Catalog>, config: &DashboardConfig) -> Self {
        let user = config
            .session
            .demo_user
            .clone()
            .unwrap_or_else(mock_data::demo_user);
        Self {
            state: AppState::new(catalog, config.preferences()),
            login: LoginForm::new(&user.email),
            authenticator: MockAuthenticator::new(user),
            specialties: config.alerts.specialties.clone(),
            cursor: 0,
            form_field: DraftField::Title,
            status: None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Control::Quit;
        }
        self.status = None;

        if !self.state.is_signed_in() {
            return self.handle_login_key(key);
        }
        if self.state.alert_form().is_some() {
            self.handle_form_key(key);
            return Control::Continue;
        }
        self.handle_shell_key(key)
    }

    // ── Login ────────────────────────────────────────────────────────────────

    fn handle_login_key(&mut self, key: KeyEvent) -> Control {
        let field = match self.login.focus {
            LoginField::Email => &mut self.login.email,
            LoginField::Password => &mut self.login.password,
        };
        match key.code {
            KeyCode::Esc => return Control::Quit,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.login.focus = match self.login.focus {
                    LoginField::Email => LoginField::Password,
                    LoginField::Password => LoginField::Email,
                };
            }
            KeyCode::Backspace => {
                field.pop();
            }
            KeyCode::Char(c) => field.push(c),
            KeyCode::Enter => self.sign_in(),
            _ => {}
        }
        Control::Continue
    }

    fn sign_in(&mut self) {
        let credentials = Credentials::new(self.login.email.trim(), self.login.password.as_str());
        let transition = sign_in(self.state.clone(), &self.authenticator, &credentials);
        self.settle(transition);
        if self.state.is_signed_in() {
            self.login.password.clear();
            self.login.focus = LoginField::Email;
            self.cursor = 0;
        }
    }

    // ── Main shell ───────────────────────────────────────────────────────────

    fn handle_shell_key(&mut self, key: KeyEvent) -> Control {
        match key.code {
            KeyCode::Char('q') => return Control::Quit,
            KeyCode::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                if self.dispatch(Event::ChangeSection(Section::ALL[index])) {
                    self.cursor = 0;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                let len = self.row_ids().len();
                if self.cursor + 1 < len {
                    self.cursor += 1;
                }
            }
            KeyCode::Enter => {
                if let Some(id) = self.drill_target() {
                    self.dispatch(Event::SelectItem(id));
                }
            }
            KeyCode::Esc | KeyCode::Backspace => {
                self.dispatch(Event::Back);
            }
            KeyCode::Right | KeyCode::Tab => self.cycle_tab(true),
            KeyCode::Left | KeyCode::BackTab => self.cycle_tab(false),
            KeyCode::Char('n') => {
                if self.dispatch(Event::OpenAlertForm) {
                    self.form_field = DraftField::Title;
                }
            }
            KeyCode::Char(' ') => {
                if let Some(id) = self.alert_under_cursor() {
                    self.dispatch(Event::ToggleAlert(id));
                }
            }
            KeyCode::Char('d') => {
                if let Some(id) = self.alert_under_cursor() {
                    if self.dispatch(Event::DeleteAlert(id)) {
                        let len = self.state.alerts().len();
                        self.cursor = self.cursor.min(len.saturating_sub(1));
                    }
                }
            }
            KeyCode::Char('L') => {
                self.dispatch(Event::SignedOut);
                self.cursor = 0;
            }
            _ => {}
        }
        Control::Continue
    }

    fn cycle_tab(&mut self, forward: bool) {
        let Some(tab) = self.state.navigation().selection().map(|s| s.tab) else {
            return;
        };
        if resolve(&self.state).is_detail() {
            self.dispatch(Event::SelectTab(tab.cycle(forward)));
        }
    }

    /// Ids of the rows in the active list screen, in display order.
    pub fn row_ids(&self) -> Vec<String> {
        match resolve(&self.state) {
            Screen::CaseList { cases } => cases.iter().map(|c| c.id.clone()).collect(),
            Screen::Library { documents } => documents.iter().map(|d| d.id.clone()).collect(),
            Screen::Alerts { alerts, .. } => alerts.iter().map(|a| a.id.clone()).collect(),
            _ => Vec::new(),
        }
    }

    fn drill_target(&self) -> Option<String> {
        if !self.state.navigation().section().has_drill_down() {
            return None;
        }
        if resolve(&self.state).is_detail() {
            return None;
        }
        self.row_ids().into_iter().nth(self.cursor)
    }

    fn alert_under_cursor(&self) -> Option<String> {
        if self.state.navigation().section() != Section::Alerts {
            return None;
        }
        self.row_ids().into_iter().nth(self.cursor)
    }

    // ── Create-alert form ────────────────────────────────────────────────────

    fn handle_form_key(&mut self, key: KeyEvent) {
        let Some(draft) = self.state.alert_form().cloned() else {
            return;
        };
        let field = self.form_field;
        match key.code {
            KeyCode::Esc => {
                self.dispatch(Event::CancelAlertForm);
            }
            KeyCode::Tab | KeyCode::Down => self.form_field = field.next(),
            KeyCode::BackTab | KeyCode::Up => self.form_field = field.prev(),
            KeyCode::Enter => {
                self.dispatch(Event::SubmitAlertForm(Stamp::fresh()));
                if self.state.alert_form().is_none() {
                    self.cursor = 0;
                }
            }
            KeyCode::Left | KeyCode::Right => {
                let forward = key.code == KeyCode::Right;
                match field {
                    DraftField::Specialty => {
                        if let Some(value) = self.pick_specialty(&draft.specialty, forward) {
                            self.dispatch(Event::EditAlertDraft { field, value });
                        }
                    }
                    DraftField::Frequency => {
                        let frequency = if forward {
                            draft.frequency.next()
                        } else {
                            draft.frequency.prev()
                        };
                        self.dispatch(Event::SetAlertFrequency(frequency));
                    }
                    DraftField::Title | DraftField::Query => {}
                }
            }
            KeyCode::Backspace => {
                if matches!(field, DraftField::Title | DraftField::Query) {
                    let mut value = draft.value(field).to_string();
                    value.pop();
                    self.dispatch(Event::EditAlertDraft { field, value });
                }
            }
            KeyCode::Char(c) => {
                if matches!(field, DraftField::Title | DraftField::Query) {
                    let value = format!("{}{}", draft.value(field), c);
                    self.dispatch(Event::EditAlertDraft { field, value });
                }
            }
            _ => {}
        }
    }

    /// The specialty after (or before) `current` in the configured list.
    fn pick_specialty(&self, current: &str, forward: bool) -> Option<String> {
        let len = self.specialties.len();
        if len == 0 {
            return None;
        }
        let next = match self.specialties.iter().position(|s| s == current) {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None if forward => 0,
            None => len - 1,
        };
        self.specialties.get(next).cloned()
    }

    // ── Reducer plumbing ─────────────────────────────────────────────────────

    /// Apply `event`; returns whether the state changed.
    fn dispatch(&mut self, event: Event) -> bool {
        let transition = reduce(self.state.clone(), event);
        self.settle(transition)
    }

    fn settle(&mut self, transition: Transition) -> bool {
        let applied = transition.is_applied();
        self.status = transition.rejection().map(|reason| reason.to_string());
        self.state = transition.into_state();
        applied
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
