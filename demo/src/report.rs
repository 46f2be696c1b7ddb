//! Plain-text rendering of a resolved screen, for the `show` and
//! `walkthrough` subcommands.

use medresearch_core::{
    navigation::{CaseTab, DocumentTab, Section},
    view::{body_blocks, Block, Screen},
};
use medresearch_ref_data::mock_data;

const DATE: &str = "%Y-%m-%d";
const DATE_TIME: &str = "%Y-%m-%d %H:%M";

/// Render `screen` as indented text lines, headed by the section title.
pub fn render(section: Section, screen: &Screen<'_>) -> Vec<String> {
    let mut out = Vec::new();
    let (title, subtitle) = section.heading();

    match screen {
        Screen::Login => {
            out.push("Sign in to MedResearch AI".to_string());
            out.push("  (no active session)".to_string());
        }

        Screen::Dashboard {
            stats,
            activity,
            notifications,
        } => {
            header(&mut out, title, subtitle);
            for card in stats.iter() {
                out.push(format!(
                    "  {:<22} {:>6}   {} {}",
                    card.title,
                    card.value,
                    card.change_kind.symbol(),
                    card.change
                ));
            }
            out.push(String::new());
            out.push("  Recent Activity".to_string());
            for item in activity.iter() {
                out.push(format!(
                    "    [{}] {}: {} ({}, {})",
                    item.kind.label(),
                    item.title,
                    item.description,
                    item.user,
                    item.timestamp
                ));
            }
            let unread = notifications.iter().filter(|n| !n.read).count();
            out.push(String::new());
            out.push(format!("  Notifications ({} unread)", unread));
            for note in notifications.iter() {
                out.push(format!(
                    "    {} [{}] {}: {} ({})",
                    if note.read { " " } else { "*" },
                    note.priority.label(),
                    note.title,
                    note.description,
                    note.timestamp
                ));
            }
        }

        Screen::CaseList { cases } => {
            header(&mut out, title, subtitle);
            for case in cases.iter() {
                out.push(format!(
                    "  {}  {:<30} age {:<3} {:<9} markers: {}",
                    case.id,
                    case.condition,
                    case.age,
                    case.status.label(),
                    case.genetic_markers.join(", ")
                ));
            }
        }

        Screen::CaseDetail {
            case,
            tab,
            recommendations,
            protocols,
        } => {
            header(&mut out, &case.condition, &format!("{} · {}", case.id, case.patient_id));
            tab_bar(&mut out, CaseTab::ALL.iter().map(|t| (t.label(), t == tab)));
            match tab {
                CaseTab::Overview => {
                    out.push(format!("  Patient ID:    {}", case.patient_id));
                    out.push(format!("  Age:           {}", case.age));
                    out.push(format!("  Status:        {}", case.status.label()));
                    out.push(format!("  Markers:       {}", case.genetic_markers.join(", ")));
                    out.push(format!("  Comorbidities: {}", case.comorbidities.join(", ")));
                    out.push(format!("  Physicians:    {}", case.assigned_physicians.join(", ")));
                    out.push(format!("  Created:       {}", case.created_at.format(DATE_TIME)));
                    out.push(format!("  Updated:       {}", case.updated_at.format(DATE_TIME)));
                    out.push(String::new());
                    out.push("  Key Insights".to_string());
                    for insight in mock_data::case_insights(&case.id) {
                        out.push(format!("    - {}", insight));
                    }
                }
                CaseTab::Recommendations => {
                    if recommendations.is_empty() {
                        out.push("  No recommendations yet for this case.".to_string());
                    }
                    for rec in recommendations.iter() {
                        out.push(format!("  {}", rec.recommendation));
                        out.push(format!(
                            "    {} certainty · {}",
                            rec.certainty.label(),
                            rec.evidence_level.label()
                        ));
                        out.push(format!("    Rationale: {}", rec.rationale));
                        out.push(format!("    Citations: {}", rec.citations.join(", ")));
                    }
                }
                CaseTab::Protocols => {
                    for protocol in protocols.iter() {
                        out.push(format!(
                            "  {}  {}% effective · {}",
                            protocol.name,
                            protocol.effectiveness,
                            protocol.evidence_level.label()
                        ));
                        out.push(format!("    Side effects:      {}", protocol.side_effects.join(", ")));
                        out.push(format!(
                            "    Contraindications: {}",
                            protocol.contraindications.join(", ")
                        ));
                    }
                }
            }
        }

        Screen::Library { documents } => {
            header(&mut out, title, subtitle);
            for doc in documents.iter() {
                out.push(format!("  {}  {}", doc.id, doc.title));
                out.push(format!(
                    "    {} · {} · {}",
                    doc.byline(),
                    doc.specialty,
                    doc.evidence_level.label()
                ));
            }
        }

        Screen::DocumentViewer {
            document,
            tab,
            body,
            annotations,
        } => {
            header(&mut out, &document.title, &document.byline());
            tab_bar(
                &mut out,
                DocumentTab::ALL.iter().map(|t| (t.label(), t == tab)),
            );
            match tab {
                DocumentTab::Content => match body {
                    Some(body) => {
                        for block in body_blocks(body) {
                            match block {
                                Block::Heading(h) => {
                                    out.push(String::new());
                                    out.push(format!("  {}", h));
                                }
                                Block::Paragraph(p) => out.push(format!("    {}", p)),
                            }
                        }
                    }
                    None => {
                        out.push(format!("  Summary: {}", document.summary));
                        out.push("  Key findings:".to_string());
                        for finding in &document.key_findings {
                            out.push(format!("    - {}", finding));
                        }
                    }
                },
                DocumentTab::Annotations => {
                    out.push(format!("  Annotations ({})", annotations.len()));
                    if annotations.is_empty() {
                        out.push("  No annotations yet".to_string());
                    }
                    for ann in annotations.iter() {
                        out.push(format!(
                            "    {} ({}): {}",
                            ann.user_name,
                            ann.created_at.format(DATE_TIME),
                            ann.comment
                        ));
                        for reply in &ann.replies {
                            out.push(format!("      ↳ {}: {}", reply.user_name, reply.text));
                        }
                    }
                }
            }
        }

        Screen::Alerts { alerts, form } => {
            header(&mut out, title, subtitle);
            if let Some(draft) = form {
                out.push(format!(
                    "  [new alert] title={:?} query={:?} specialty={:?} frequency={} submittable={}",
                    draft.title,
                    draft.query,
                    draft.specialty,
                    draft.frequency,
                    draft.is_submittable()
                ));
            }
            for alert in alerts.iter() {
                let last_sent = alert
                    .last_sent
                    .map(|t| t.format(DATE).to_string())
                    .unwrap_or_else(|| "never".to_string());
                out.push(format!(
                    "  {} {:<10} {:<32} {}",
                    if alert.active { "●" } else { "○" },
                    alert.id,
                    alert.title,
                    if alert.active { "active" } else { "paused" }
                ));
                out.push(format!(
                    "      {} · \"{}\" · {} · last sent {} · created {}",
                    alert.specialty,
                    alert.query,
                    alert.frequency.label(),
                    last_sent,
                    alert.created_at.format(DATE)
                ));
            }
        }

        Screen::Compliance { records } => {
            header(&mut out, title, subtitle);
            for record in records.iter() {
                out.push(format!(
                    "  {:<32} {:<9} {}  checked {}",
                    record.protocol,
                    record.status.label(),
                    record.guidelines.join(", "),
                    record.last_checked.format(DATE_TIME)
                ));
                for issue in &record.issues {
                    out.push(format!("    ! {}", issue));
                }
            }
        }

        Screen::Analytics { metrics } => {
            header(&mut out, title, subtitle);
            for metric in metrics.iter() {
                out.push(format!("  {:<26} {:>8}  {}", metric.metric, metric.value, metric.trend));
            }
        }
    }

    out
}

fn header(out: &mut Vec<String>, title: &str, subtitle: &str) {
    out.push(title.to_string());
    out.push(format!("  {}", subtitle));
    out.push(String::new());
}

fn tab_bar<'a>(out: &mut Vec<String>, tabs: impl Iterator<Item = (&'a str, bool)>) {
    let labels: Vec<String> = tabs
        .map(|(label, active)| {
            if active {
                format!("[{}]", label)
            } else {
                format!(" {} ", label)
            }
        })
        .collect();
    out.push(format!("  {}", labels.join(" ")));
    out.push(String::new());
}
