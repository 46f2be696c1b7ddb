//! Scripted end-to-end walkthrough of the dashboard state machine.
//!
//! Each scenario drives the reducer with the same events the terminal UI
//! would send and prints what happened. A failed expectation is reported and
//! counted; the run continues so every scenario gets a chance to print.

use std::sync::Arc;

use medresearch_contracts::{error::DashError, lookup::Lookup, user::User};
use medresearch_core::{
    alerts::{AlertDraft, Stamp},
    navigation::Section,
    session::{sign_in, Credentials},
    state::{reduce, AppState, Event, Preferences, Transition},
    traits::Catalog,
    view::{resolve, Screen},
};
use medresearch_ref_data::MockAuthenticator;

/// Pass/fail tally for one run.
#[derive(Debug, Default)]
pub struct Tally {
    pub passed: usize,
    pub failed: usize,
}

impl Tally {
    fn check(&mut self, label: &str, ok: bool) {
        if ok {
            self.passed += 1;
            println!("    PASS  {}", label);
        } else {
            self.failed += 1;
            println!("    FAIL  {}", label);
        }
    }
}

/// Run every scenario against `catalog`, signing in as `user`.
pub fn run(catalog: Arc<dyn Catalog>, preferences: Preferences, user: User) -> Tally {
    let mut tally = Tally::default();
    let authenticator = MockAuthenticator::new(user);

    let fresh = || AppState::new(Arc::clone(&catalog), preferences);

    session_gate(fresh(), &authenticator, &mut tally);
    drill_down(signed_in(fresh(), &authenticator), &mut tally);
    dangling_selection(signed_in(fresh(), &authenticator), &mut tally);
    alert_lifecycle(signed_in(fresh(), &authenticator), &mut tally);
    sign_out_resets(signed_in(fresh(), &authenticator), &mut tally);

    println!(
        "Walkthrough finished: {} passed, {} failed.",
        tally.passed, tally.failed
    );
    println!();
    tally
}

fn signed_in(state: AppState, authenticator: &MockAuthenticator) -> AppState {
    sign_in(state, authenticator, &demo_credentials()).into_state()
}

fn demo_credentials() -> Credentials {
    Credentials::new("demo@medresearch.example", "demo")
}

/// Apply one event, print its outcome, and hand back the transition.
fn step(state: AppState, label: &str, event: Event) -> Transition {
    let transition = reduce(state, event);
    println!("  {:<44} → {}", label, outcome(&transition));
    transition
}

fn outcome(transition: &Transition) -> String {
    match transition {
        Transition::Applied { .. } => "Applied".to_string(),
        Transition::Unchanged { .. } => "Unchanged".to_string(),
        Transition::Rejected { reason, .. } => format!("Rejected ({})", reason),
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

fn session_gate(state: AppState, authenticator: &MockAuthenticator, tally: &mut Tally) {
    println!("=== Scenario 1: Session gate ===");
    println!();

    let t = step(state, "change section to cases (signed out)", Event::ChangeSection(Section::Cases));
    tally.check(
        "navigation is refused without a session",
        t.rejection() == Some(&DashError::NotSignedIn),
    );
    tally.check("login screen is shown", matches!(resolve(t.state()), Screen::Login));

    let t = sign_in(t.into_state(), authenticator, &demo_credentials());
    println!("  {:<44} → {}", "sign in", outcome(&t));
    let state = t.into_state();
    tally.check(
        "signed in user lands on the dashboard",
        matches!(resolve(&state), Screen::Dashboard { .. }),
    );
    if let Some(user) = state.current_user() {
        println!("  Signed in as: {} ({})", user.name, user.role.label());
    }
    println!();
}

fn drill_down(state: AppState, tally: &mut Tally) {
    println!("=== Scenario 2: Case drill-down ===");
    println!();

    let state = step(state, "change section to cases", Event::ChangeSection(Section::Cases)).into_state();
    let t = step(state, "change section to cases again", Event::ChangeSection(Section::Cases));
    tally.check("re-selecting the current section is a no-op", !t.is_applied());

    let t = step(t.into_state(), "select CASE-0001", Event::SelectItem("CASE-0001".to_string()));
    tally.check(
        "case detail is rendered",
        matches!(resolve(t.state()), Screen::CaseDetail { case, .. } if case.id == "CASE-0001"),
    );

    let t = step(t.into_state(), "back", Event::Back);
    tally.check(
        "back returns to the case list",
        t.state().navigation().selection().is_none(),
    );

    let t = step(t.into_state(), "back (nothing selected)", Event::Back);
    tally.check("back with no selection is unchanged", !t.is_applied());

    let state = step(t.into_state(), "select CASE-0002", Event::SelectItem("CASE-0002".to_string()))
        .into_state();
    let state = step(state, "change section to library", Event::ChangeSection(Section::Library))
        .into_state();
    let t = step(state, "change section to cases", Event::ChangeSection(Section::Cases));
    tally.check(
        "leaving the section forgot the drill-down",
        matches!(resolve(t.state()), Screen::CaseList { .. }),
    );

    let t = step(t.into_state(), "change section to dashboard", Event::ChangeSection(Section::Dashboard));
    let t = step(t.into_state(), "select DOC-001 while on dashboard", Event::SelectItem("DOC-001".to_string()));
    tally.check(
        "selection outside cases/library is refused",
        matches!(t.rejection(), Some(DashError::NoDrillDown { .. })),
    );
    println!();
}

fn dangling_selection(state: AppState, tally: &mut Tally) {
    println!("=== Scenario 3: Unknown case id ===");
    println!();

    let state = step(state, "change section to cases", Event::ChangeSection(Section::Cases)).into_state();
    let t = step(state, "select CASE-9999", Event::SelectItem("CASE-9999".to_string()));
    let missing = matches!(t.state().catalog().find_case("CASE-9999"), Lookup::Missing { .. });
    tally.check("catalog reports the id as missing", missing);
    tally.check("selecting it changes nothing", matches!(t, Transition::Unchanged { .. }));
    tally.check(
        "list view is rendered instead of a detail",
        matches!(resolve(t.state()), Screen::CaseList { cases } if cases.len() == t.state().catalog().cases().len()),
    );

    let t = step(t.into_state(), "back from the list view", Event::Back);
    tally.check("back has nothing to close", matches!(t, Transition::Unchanged { .. }));
    println!();
}

fn alert_lifecycle(state: AppState, tally: &mut Tally) {
    println!("=== Scenario 4: Literature alerts ===");
    println!();

    let state = step(state, "change section to alerts", Event::ChangeSection(Section::Alerts)).into_state();
    let before = state.alerts().len();
    println!("  Alerts before: {}", before);

    let t = step(
        state,
        "create alert with blank query",
        Event::CreateAlert {
            draft: AlertDraft::new("X", "   ", "Oncology"),
            stamp: Stamp::fresh(),
        },
    );
    tally.check(
        "invalid draft leaves the list unchanged",
        t.state().alerts().len() == before
            && matches!(t.rejection(), Some(DashError::InvalidDraft { field: "query" })),
    );

    let t = step(
        t.into_state(),
        "create alert X / Y / Oncology",
        Event::CreateAlert {
            draft: AlertDraft::new("X", "Y", "Oncology"),
            stamp: Stamp::fresh(),
        },
    );
    let state = t.into_state();
    let newest = state.alerts().alerts().first().cloned();
    tally.check(
        "new alert is first, active, and the list grew by one",
        state.alerts().len() == before + 1
            && newest.as_ref().is_some_and(|a| a.title == "X" && a.active),
    );
    let new_id = newest.map(|a| a.id).unwrap_or_default();
    println!("  New alert id: {}", new_id);

    let state = step(state, "toggle new alert", Event::ToggleAlert(new_id.clone())).into_state();
    let state = step(state, "toggle new alert again", Event::ToggleAlert(new_id.clone())).into_state();
    tally.check(
        "toggling twice restores the active flag",
        state.alerts().get(&new_id).found().is_some_and(|a| a.active),
    );

    let t = step(state, "toggle ALERT-404", Event::ToggleAlert("ALERT-404".to_string()));
    tally.check("toggling an unknown id is a no-op", !t.is_applied());

    let t = step(t.into_state(), "delete ALERT-002", Event::DeleteAlert("ALERT-002".to_string()));
    tally.check("deleting removes exactly one alert", t.state().alerts().len() == before);

    let t = step(t.into_state(), "delete ALERT-002 again", Event::DeleteAlert("ALERT-002".to_string()));
    tally.check("deleting an unknown id is a no-op", !t.is_applied());
    println!();
}

fn sign_out_resets(state: AppState, tally: &mut Tally) {
    println!("=== Scenario 5: Sign out ===");
    println!();

    let state = step(state, "change section to alerts", Event::ChangeSection(Section::Alerts)).into_state();
    let state = step(state, "delete ALERT-001", Event::DeleteAlert("ALERT-001".to_string())).into_state();
    let seed = state.catalog().seed_alerts().len();
    let t = step(state, "sign out", Event::SignedOut);
    let state = t.into_state();
    tally.check("login screen is shown", matches!(resolve(&state), Screen::Login));
    tally.check(
        "navigation is back on the dashboard",
        state.navigation().section() == Section::Dashboard,
    );
    tally.check("alerts are restored to the seed", state.alerts().len() == seed);
    println!();
}
