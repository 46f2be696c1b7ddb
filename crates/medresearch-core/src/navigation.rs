//! Navigation state: the active section plus per-section drill-down.
//!
//! ```text
//!   section ∈ {dashboard, cases, library, alerts, compliance, analytics}
//!
//!   list ──select_item(id)──▶ detail(id, tab) ──back()──▶ list
//!                               │  ▲
//!                               └──┘ select_tab / select_item(other id)
//! ```
//!
//! Only `cases` and `library` have a detail view. Selections are kept in one
//! map keyed by section; `SelectionPolicy` decides whether leaving a section
//! forgets its selection.

use std::{collections::HashMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::debug;

use medresearch_contracts::error::{DashError, DashResult};

// ── Section ───────────────────────────────────────────────────────────────────

/// One of the six top-level screens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Dashboard,
    Cases,
    Library,
    Alerts,
    Compliance,
    Analytics,
}

impl Section {
    /// Sidebar order.
    pub const ALL: [Section; 6] = [
        Section::Dashboard,
        Section::Cases,
        Section::Library,
        Section::Alerts,
        Section::Compliance,
        Section::Analytics,
    ];

    /// Stable lowercase key, as used in configuration and on the CLI.
    pub fn key(self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Cases => "cases",
            Section::Library => "library",
            Section::Alerts => "alerts",
            Section::Compliance => "compliance",
            Section::Analytics => "analytics",
        }
    }

    /// Sidebar label.
    pub fn label(self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Cases => "Cases",
            Section::Library => "Research Library",
            Section::Alerts => "Alerts",
            Section::Compliance => "Compliance",
            Section::Analytics => "Analytics",
        }
    }

    /// Header title and subtitle for the section's list screen.
    pub fn heading(self) -> (&'static str, &'static str) {
        match self {
            Section::Dashboard => ("Dashboard", "Welcome back! Here's your research overview"),
            Section::Cases => ("Patient Cases", "Manage and track patient research cases"),
            Section::Library => ("Research Library", "Browse and analyze medical literature"),
            Section::Alerts => (
                "Literature Alerts",
                "Monitor new publications and stay updated with latest research",
            ),
            Section::Compliance => (
                "Compliance Monitor",
                "Validate protocols against medical guidelines",
            ),
            Section::Analytics => ("Analytics", "Research insights and performance metrics"),
        }
    }

    /// Whether the section supports master/detail drill-down.
    pub fn has_drill_down(self) -> bool {
        matches!(self, Section::Cases | Section::Library)
    }

    /// The tab a freshly opened detail view starts on, if the section has one.
    pub fn default_tab(self) -> Option<DetailTab> {
        match self {
            Section::Cases => Some(DetailTab::Case(CaseTab::Overview)),
            Section::Library => Some(DetailTab::Document(DocumentTab::Content)),
            _ => None,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Section {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Section::ALL
            .into_iter()
            .find(|section| section.key() == wanted)
            .ok_or_else(|| DashError::UnknownName {
                kind: "section",
                name: s.to_string(),
            })
    }
}

// ── Detail tabs ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseTab {
    Overview,
    Recommendations,
    Protocols,
}

impl CaseTab {
    pub const ALL: [CaseTab; 3] = [CaseTab::Overview, CaseTab::Recommendations, CaseTab::Protocols];

    pub fn label(self) -> &'static str {
        match self {
            CaseTab::Overview => "Overview",
            CaseTab::Recommendations => "AI Recommendations",
            CaseTab::Protocols => "Treatment Protocols",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentTab {
    Content,
    Annotations,
}

impl DocumentTab {
    pub const ALL: [DocumentTab; 2] = [DocumentTab::Content, DocumentTab::Annotations];

    pub fn label(self) -> &'static str {
        match self {
            DocumentTab::Content => "Document",
            DocumentTab::Annotations => "Annotations",
        }
    }
}

/// The tab selector owned by an open detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetailTab {
    Case(CaseTab),
    Document(DocumentTab),
}

impl DetailTab {
    /// Position of this tab within its own tab bar.
    pub fn index(self) -> usize {
        match self {
            DetailTab::Case(t) => CaseTab::ALL.iter().position(|x| *x == t).unwrap_or(0),
            DetailTab::Document(t) => DocumentTab::ALL.iter().position(|x| *x == t).unwrap_or(0),
        }
    }

    /// The neighbouring tab in the same bar, wrapping around.
    pub fn cycle(self, forward: bool) -> Self {
        fn step(i: usize, len: usize, forward: bool) -> usize {
            if forward {
                (i + 1) % len
            } else {
                (i + len - 1) % len
            }
        }
        match self {
            DetailTab::Case(_) => {
                DetailTab::Case(CaseTab::ALL[step(self.index(), CaseTab::ALL.len(), forward)])
            }
            DetailTab::Document(_) => DetailTab::Document(
                DocumentTab::ALL[step(self.index(), DocumentTab::ALL.len(), forward)],
            ),
        }
    }

    fn same_bar(self, other: DetailTab) -> bool {
        matches!(
            (self, other),
            (DetailTab::Case(_), DetailTab::Case(_)) | (DetailTab::Document(_), DetailTab::Document(_))
        )
    }
}

// ── Selection ─────────────────────────────────────────────────────────────────

/// An open detail view: which record, and which of its tabs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub item_id: String,
    pub tab: DetailTab,
}

/// What happens to a section's drill-down when the user navigates away.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionPolicy {
    /// Leaving a section returns it to its list view.
    #[default]
    ResetOnLeave,
    /// Each section reopens on the detail it was showing.
    PersistPerSection,
}

// ── Navigation ────────────────────────────────────────────────────────────────

/// The navigation half of the application state.
///
/// Every mutator reports whether it changed anything so the reducer can tell
/// `Applied` from `Unchanged`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    section: Section,
    selections: HashMap<Section, Selection>,
    policy: SelectionPolicy,
}

impl Navigation {
    pub fn new(policy: SelectionPolicy) -> Self {
        Self {
            section: Section::Dashboard,
            selections: HashMap::new(),
            policy,
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// The open detail view in the active section, if any.
    pub fn selection(&self) -> Option<&Selection> {
        self.selections.get(&self.section)
    }

    /// The remembered selection of any section.
    pub fn selection_in(&self, section: Section) -> Option<&Selection> {
        self.selections.get(&section)
    }

    /// Switch to `section`.
    ///
    /// Re-selecting the active section is a no-op. Under
    /// `SelectionPolicy::ResetOnLeave` the section being left forgets its
    /// selection, so every section is entered on its list view.
    pub fn change_section(&mut self, section: Section) -> bool {
        if section == self.section {
            return false;
        }
        if self.policy == SelectionPolicy::ResetOnLeave {
            self.selections.remove(&self.section);
            self.selections.remove(&section);
        }
        debug!(from = %self.section, to = %section, "section changed");
        self.section = section;
        true
    }

    /// Open the detail view for `item_id` in the active section.
    ///
    /// The id is not checked here; the reducer drops ids the catalog does not
    /// hold. Selecting the id already shown keeps its current tab.
    pub fn select_item(&mut self, item_id: &str) -> DashResult<bool> {
        let Some(tab) = self.section.default_tab() else {
            return Err(DashError::NoDrillDown {
                section: self.section.key().to_string(),
            });
        };

        if self.selection().is_some_and(|s| s.item_id == item_id) {
            return Ok(false);
        }

        debug!(section = %self.section, item_id = %item_id, "item selected");
        self.selections.insert(
            self.section,
            Selection {
                item_id: item_id.to_string(),
                tab,
            },
        );
        Ok(true)
    }

    /// Close the active section's detail view. No-op on the list view.
    pub fn back(&mut self) -> bool {
        let closed = self.selections.remove(&self.section).is_some();
        if closed {
            debug!(section = %self.section, "returned to list");
        }
        closed
    }

    /// Switch the open detail view to `tab`.
    ///
    /// Ignored when nothing is open or `tab` belongs to the other kind of
    /// detail view.
    pub fn select_tab(&mut self, tab: DetailTab) -> bool {
        match self.selections.get_mut(&self.section) {
            Some(selection) if selection.tab.same_bar(tab) && selection.tab != tab => {
                selection.tab = tab;
                true
            }
            _ => false,
        }
    }

    /// Back to `dashboard` with nothing selected anywhere.
    pub fn reset(&mut self) {
        self.section = Section::Dashboard;
        self.selections.clear();
    }
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new(SelectionPolicy::default())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn on_cases(policy: SelectionPolicy) -> Navigation {
        let mut nav = Navigation::new(policy);
        nav.change_section(Section::Cases);
        nav
    }

    #[test]
    fn test_starts_on_dashboard_with_nothing_selected() {
        let nav = Navigation::default();
        assert_eq!(nav.section(), Section::Dashboard);
        assert!(nav.selection().is_none());
    }

    #[test]
    fn test_reselecting_a_section_is_idempotent() {
        for section in Section::ALL {
            let mut nav = Navigation::default();
            nav.change_section(section);
            let before = nav.clone();
            assert!(!nav.change_section(section));
            assert_eq!(nav, before, "re-selecting {} changed state", section);
        }
    }

    #[test]
    fn test_reselecting_current_section_keeps_open_detail() {
        let mut nav = on_cases(SelectionPolicy::ResetOnLeave);
        nav.select_item("CASE-0001").unwrap();
        nav.change_section(Section::Cases);
        assert_eq!(nav.selection().map(|s| s.item_id.as_str()), Some("CASE-0001"));
    }

    #[test]
    fn test_select_then_back_discards_selection() {
        let mut nav = on_cases(SelectionPolicy::ResetOnLeave);
        assert!(nav.select_item("CASE-0001").unwrap());
        assert_eq!(
            nav.selection(),
            Some(&Selection {
                item_id: "CASE-0001".to_string(),
                tab: DetailTab::Case(CaseTab::Overview),
            })
        );

        assert!(nav.back());
        assert!(nav.selection().is_none());
        assert!(nav.selection_in(Section::Cases).is_none());
    }

    #[test]
    fn test_back_on_list_view_is_a_no_op() {
        let mut nav = on_cases(SelectionPolicy::ResetOnLeave);
        assert!(!nav.back());
    }

    #[test]
    fn test_selecting_another_item_replaces_the_selection() {
        let mut nav = on_cases(SelectionPolicy::ResetOnLeave);
        nav.select_item("CASE-0001").unwrap();
        nav.select_tab(DetailTab::Case(CaseTab::Protocols));
        assert!(nav.select_item("CASE-0002").unwrap());

        let selection = nav.selection().unwrap();
        assert_eq!(selection.item_id, "CASE-0002");
        assert_eq!(selection.tab, DetailTab::Case(CaseTab::Overview));
    }

    #[test]
    fn test_selecting_shown_item_keeps_its_tab() {
        let mut nav = on_cases(SelectionPolicy::ResetOnLeave);
        nav.select_item("CASE-0001").unwrap();
        nav.select_tab(DetailTab::Case(CaseTab::Recommendations));
        assert!(!nav.select_item("CASE-0001").unwrap());
        assert_eq!(
            nav.selection().map(|s| s.tab),
            Some(DetailTab::Case(CaseTab::Recommendations))
        );
    }

    #[test]
    fn test_sections_without_detail_reject_selection() {
        for section in [Section::Dashboard, Section::Alerts, Section::Compliance, Section::Analytics] {
            let mut nav = Navigation::default();
            nav.change_section(section);
            assert_eq!(
                nav.select_item("anything"),
                Err(DashError::NoDrillDown {
                    section: section.key().to_string()
                })
            );
        }
    }

    #[test]
    fn test_reset_on_leave_forgets_selection() {
        let mut nav = on_cases(SelectionPolicy::ResetOnLeave);
        nav.select_item("CASE-0001").unwrap();
        nav.change_section(Section::Dashboard);
        nav.change_section(Section::Cases);
        assert!(nav.selection().is_none());
    }

    #[test]
    fn test_persist_policy_restores_selection() {
        let mut nav = on_cases(SelectionPolicy::PersistPerSection);
        nav.select_item("CASE-0003").unwrap();
        nav.change_section(Section::Library);
        nav.select_item("DOC-002").unwrap();
        nav.change_section(Section::Cases);

        assert_eq!(nav.selection().map(|s| s.item_id.as_str()), Some("CASE-0003"));
        assert_eq!(
            nav.selection_in(Section::Library).map(|s| s.item_id.as_str()),
            Some("DOC-002")
        );
    }

    #[test]
    fn test_tab_switch_requires_matching_detail_kind() {
        let mut nav = on_cases(SelectionPolicy::ResetOnLeave);
        assert!(!nav.select_tab(DetailTab::Case(CaseTab::Protocols)), "nothing open yet");

        nav.select_item("CASE-0001").unwrap();
        assert!(!nav.select_tab(DetailTab::Document(DocumentTab::Annotations)));
        assert!(nav.select_tab(DetailTab::Case(CaseTab::Protocols)));
        assert!(!nav.select_tab(DetailTab::Case(CaseTab::Protocols)), "already on it");
    }

    #[test]
    fn test_tab_cycle_wraps_within_its_bar() {
        let last = DetailTab::Case(CaseTab::Protocols);
        assert_eq!(last.cycle(true), DetailTab::Case(CaseTab::Overview));
        assert_eq!(
            DetailTab::Document(DocumentTab::Content).cycle(false),
            DetailTab::Document(DocumentTab::Annotations)
        );
    }

    #[test]
    fn test_reset_returns_to_dashboard() {
        let mut nav = on_cases(SelectionPolicy::PersistPerSection);
        nav.select_item("CASE-0001").unwrap();
        nav.reset();
        assert_eq!(nav.section(), Section::Dashboard);
        assert!(nav.selection_in(Section::Cases).is_none());
    }

    #[test]
    fn test_section_parses_from_its_key() {
        for section in Section::ALL {
            assert_eq!(section.key().parse::<Section>().unwrap(), section);
        }
        assert_eq!(
            "settings".parse::<Section>(),
            Err(DashError::UnknownName {
                kind: "section",
                name: "settings".to_string(),
            })
        );
    }
}
