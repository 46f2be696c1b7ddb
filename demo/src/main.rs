//! MedResearch dashboard: Demo CLI
//!
//! Drives the dashboard state core without a terminal UI: prints the
//! sections, runs a scripted walkthrough, dumps any section's screen as text,
//! or exports the sample catalog as JSON.
//!
//! Usage:
//!   cargo run -p medresearch-demo -- sections
//!   cargo run -p medresearch-demo -- walkthrough
//!   cargo run -p medresearch-demo -- show cases --select CASE-0001 --tab recommendations
//!   cargo run -p medresearch-demo -- --config dashboard.toml export

mod report;
mod walkthrough;

use std::{path::PathBuf, sync::Arc};

use clap::{Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use medresearch_config::DashboardConfig;
use medresearch_contracts::{
    alert::Alert,
    case::{PatientCase, Recommendation, TreatmentProtocol},
    document::{Annotation, Document},
    error::DashError,
    overview::{AnalyticsMetric, ComplianceRecord},
    user::User,
};
use medresearch_core::{
    navigation::{CaseTab, DetailTab, DocumentTab, Section},
    session::{sign_in, Credentials},
    state::{reduce, AppState, Event},
    traits::Catalog,
    view::resolve,
};
use medresearch_ref_data::{mock_data, MockAuthenticator, StaticCatalog};

// ── CLI definition ────────────────────────────────────────────────────────────

/// MedResearch: clinical research dashboard demo.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "MedResearch dashboard demo",
    long_about = "Drives the MedResearch dashboard state core against the sample catalog:\n\
                  section listing, a scripted walkthrough, per-screen text dumps, and JSON export."
)]
struct Cli {
    /// Dashboard configuration file (TOML).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the six sections in sidebar order.
    Sections,
    /// Run the scripted end-to-end scenarios and report pass/fail.
    Walkthrough,
    /// Sign in and print one section's screen.
    Show {
        /// dashboard, cases, library, alerts, compliance, or analytics.
        section: Section,
        /// Drill into this case or document id.
        #[arg(long, value_name = "ID")]
        select: Option<String>,
        /// Detail tab: overview, recommendations, protocols, content, annotations.
        #[arg(long, value_name = "TAB", requires = "select")]
        tab: Option<String>,
    },
    /// Print the sample catalog and seed alerts as JSON.
    Export,
}

#[derive(Debug, Error)]
enum DemoError {
    #[error(transparent)]
    Dash(#[from] DashError),

    #[error("failed to encode export: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("walkthrough reported {failed} failed check(s)")]
    Walkthrough { failed: usize },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Set RUST_LOG=debug to see every reducer transition.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), DemoError> {
    let config = DashboardConfig::load(cli.config.as_deref())?;
    let catalog: Arc<dyn Catalog> = Arc::new(StaticCatalog::new());
    let user = config
        .session
        .demo_user
        .clone()
        .unwrap_or_else(mock_data::demo_user);

    match cli.command {
        Command::Sections => {
            print_sections();
            Ok(())
        }
        Command::Walkthrough => {
            print_banner();
            let tally = walkthrough::run(catalog, config.preferences(), user);
            if tally.failed > 0 {
                return Err(DemoError::Walkthrough {
                    failed: tally.failed,
                });
            }
            Ok(())
        }
        Command::Show {
            section,
            select,
            tab,
        } => {
            let tab = tab.map(|name| parse_tab(section, &name)).transpose()?;
            let state = AppState::new(catalog, config.preferences());
            let state = show(state, user, section, select, tab);
            for line in report::render(section, &resolve(&state)) {
                println!("{}", line);
            }
            Ok(())
        }
        Command::Export => {
            println!("{}", export_json(catalog.as_ref())?);
            Ok(())
        }
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("MedResearch AI — Clinical Research Dashboard");
    println!("State Core Walkthrough");
    println!("============================================");
    println!();
    println!("Every interaction is one event applied by the reducer:");
    println!("  [1] Events other than sign-in require a session");
    println!("  [2] Navigation: change section, select item, back, select tab");
    println!("  [3] Alerts: create (validated), toggle, delete");
    println!("  [4] The active screen is resolved from state; unknown ids leave the list in place");
    println!();
}

fn print_sections() {
    for (i, section) in Section::ALL.iter().enumerate() {
        let (_, subtitle) = section.heading();
        println!(
            "{}  {:<11} {:<18} {}{}",
            i + 1,
            section.key(),
            section.label(),
            subtitle,
            if section.has_drill_down() { " [drill-down]" } else { "" }
        );
    }
}

/// Sign in as `user`, then navigate to `section` and optionally drill in.
///
/// Refused steps are reported on stderr and the walk continues from the
/// unchanged state.
fn show(
    state: AppState,
    user: User,
    section: Section,
    select: Option<String>,
    tab: Option<DetailTab>,
) -> AppState {
    let credentials = Credentials::new(user.email.clone(), "");
    let mut state = sign_in(state, &MockAuthenticator::new(user), &credentials).into_state();

    let mut events = vec![Event::ChangeSection(section)];
    events.extend(select.map(Event::SelectItem));
    events.extend(tab.map(Event::SelectTab));

    for event in events {
        let transition = reduce(state, event);
        if let Some(reason) = transition.rejection() {
            eprintln!("note: {}", reason);
        }
        state = transition.into_state();
    }
    state
}

/// Map a tab name to the detail tab it names within `section`.
fn parse_tab(section: Section, name: &str) -> Result<DetailTab, DashError> {
    let wanted = name.trim().to_ascii_lowercase();
    let found = match section {
        Section::Cases => [
            ("overview", CaseTab::Overview),
            ("recommendations", CaseTab::Recommendations),
            ("protocols", CaseTab::Protocols),
        ]
        .into_iter()
        .find(|(key, _)| *key == wanted)
        .map(|(_, tab)| DetailTab::Case(tab)),
        Section::Library => [
            ("content", DocumentTab::Content),
            ("annotations", DocumentTab::Annotations),
        ]
        .into_iter()
        .find(|(key, _)| *key == wanted)
        .map(|(_, tab)| DetailTab::Document(tab)),
        _ => {
            return Err(DashError::NoDrillDown {
                section: section.key().to_string(),
            })
        }
    };
    found.ok_or_else(|| DashError::UnknownName {
        kind: "tab",
        name: name.to_string(),
    })
}

/// Everything the catalog holds, as exported by `demo export`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Export<'a> {
    cases: &'a [PatientCase],
    documents: &'a [Document],
    protocols: &'a [TreatmentProtocol],
    recommendations: &'a [Recommendation],
    annotations: &'a [Annotation],
    alerts: Vec<Alert>,
    compliance_records: &'a [ComplianceRecord],
    analytics: &'a [AnalyticsMetric],
}

fn export_json(catalog: &dyn Catalog) -> Result<String, serde_json::Error> {
    let export = Export {
        cases: catalog.cases(),
        documents: catalog.documents(),
        protocols: catalog.protocols(),
        recommendations: catalog.recommendations(),
        annotations: catalog.annotations(),
        alerts: catalog.seed_alerts(),
        compliance_records: catalog.compliance_records(),
        analytics: catalog.analytics(),
    };
    serde_json::to_string_pretty(&export)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use medresearch_core::state::Preferences;
    use medresearch_core::view::Screen;

    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_show_parses_section_and_flags() {
        let cli = Cli::try_parse_from([
            "demo", "show", "cases", "--select", "CASE-0001", "--tab", "protocols",
        ])
        .unwrap();
        match cli.command {
            Command::Show {
                section,
                select,
                tab,
            } => {
                assert_eq!(section, Section::Cases);
                assert_eq!(select.as_deref(), Some("CASE-0001"));
                assert_eq!(tab.as_deref(), Some("protocols"));
            }
            _ => panic!("expected show"),
        }
    }

    #[test]
    fn test_unknown_section_is_a_usage_error() {
        assert!(Cli::try_parse_from(["demo", "show", "billing"]).is_err());
    }

    #[test]
    fn test_tab_names_resolve_per_section() {
        assert_eq!(
            parse_tab(Section::Cases, "Recommendations").unwrap(),
            DetailTab::Case(CaseTab::Recommendations)
        );
        assert_eq!(
            parse_tab(Section::Library, "annotations").unwrap(),
            DetailTab::Document(DocumentTab::Annotations)
        );
        assert!(matches!(
            parse_tab(Section::Cases, "annotations"),
            Err(DashError::UnknownName { kind: "tab", .. })
        ));
        assert!(matches!(
            parse_tab(Section::Alerts, "content"),
            Err(DashError::NoDrillDown { .. })
        ));
    }

    #[test]
    fn test_show_drills_into_requested_tab() {
        let state = AppState::new(Arc::new(StaticCatalog::new()), Preferences::default());
        let state = show(
            state,
            mock_data::demo_user(),
            Section::Library,
            Some("DOC-001".to_string()),
            Some(DetailTab::Document(DocumentTab::Annotations)),
        );
        assert!(matches!(
            resolve(&state),
            Screen::DocumentViewer { tab: DocumentTab::Annotations, .. }
        ));
    }

    #[test]
    fn test_export_uses_wire_field_names() {
        let json = export_json(&StaticCatalog::new()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["cases"].as_array().unwrap().len(), 3);
        assert_eq!(value["alerts"][0]["lastSent"], "2024-12-08T09:00:00Z");
        assert_eq!(value["documents"][0]["evidenceLevel"], 1);
        assert!(value["complianceRecords"][0].get("issues").is_none());
    }
}
