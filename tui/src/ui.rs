//! Rendering.
//!
//! Layout once signed in:
//!   ┌─── header ─────────────────────────────────────────────────────────┐
//!   │  MedResearch AI   Patient Cases: Manage and track …   Dr. S. Chen │
//!   ├─── sidebar ──────┬─── active view ─────────────────────────────────┤
//!   │  1 Dashboard     │                                                 │
//!   │  2 Cases         │   list, detail with tab bar, or alert form      │
//!   │  …               │                                                 │
//!   ├──────────────────┴─────────────────────────────────────────────────┤
//!   │  footer (key bindings, last refusal)                               │
//!   └────────────────────────────────────────────────────────────────────┘

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Tabs, Wrap},
    Frame,
};

use medresearch_contracts::{
    alert::Alert,
    case::{PatientCase, Recommendation, TreatmentProtocol},
    document::{Annotation, Document},
    overview::{ChangeKind, ComplianceStatus, Priority},
};
use medresearch_core::{
    alerts::{AlertDraft, DraftField},
    navigation::{CaseTab, DocumentTab, Section},
    view::{self, body_blocks, resolve, Screen},
};
use medresearch_ref_data::mock_data;

use crate::app::{App, LoginField};

const ACCENT: Color = Color::Cyan;
const DATE: &str = "%Y-%m-%d";

pub fn draw(f: &mut Frame, app: &App) {
    let screen = resolve(&app.state);
    if let Screen::Login = screen {
        render_login(f, f.area(), app);
        return;
    }

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(8),    // sidebar + view
            Constraint::Length(3), // footer
        ])
        .split(f.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(30)])
        .split(outer[1]);

    render_header(f, outer[0], app, &screen);
    render_sidebar(f, body[0], app);
    render_view(f, body[1], app, &screen);
    render_footer(f, outer[2], app, &screen);
}

fn bordered(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

fn dim(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(Color::DarkGray))
}

fn bold(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().add_modifier(Modifier::BOLD))
}

/// Row marker and style for a list row under (or not under) the cursor.
fn cursor_style(selected: bool) -> (&'static str, Style) {
    if selected {
        (
            "▶ ",
            Style::default().fg(Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD),
        )
    } else {
        ("  ", Style::default())
    }
}

// ── Login ─────────────────────────────────────────────────────────────────────

fn render_login(f: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(12),
            Constraint::Min(0),
        ])
        .split(area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(rows[1]);

    let field_line = |label: &str, value: String, focused: bool| {
        let style = if focused {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        Line::from(vec![
            Span::styled(format!("  {:<10}", label), style),
            Span::raw(value),
            Span::styled(if focused { "█" } else { "" }, Style::default().fg(ACCENT)),
        ])
    };

    let mut lines = vec![
        Line::from(Span::styled(
            "MedResearch AI",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(dim("Clinical Research Dashboard")).alignment(Alignment::Center),
        Line::from(""),
        field_line(
            "Email",
            app.login.email.clone(),
            app.login.focus == LoginField::Email,
        ),
        field_line(
            "Password",
            "•".repeat(app.login.password.chars().count()),
            app.login.focus == LoginField::Password,
        ),
        Line::from(""),
        Line::from(vec![
            Span::styled("  [Tab] ", Style::default().fg(ACCENT)),
            Span::raw("Switch field  "),
            Span::styled("[Enter] ", Style::default().fg(ACCENT)),
            Span::raw("Sign in  "),
            Span::styled("[Esc] ", Style::default().fg(ACCENT)),
            Span::raw("Quit"),
        ]),
    ];
    if let Some(status) = &app.status {
        lines.push(Line::from(Span::styled(
            format!("  {}", status),
            Style::default().fg(Color::Red),
        )));
    }

    let panel = Paragraph::new(lines).block(bordered(" Sign in "));
    f.render_widget(panel, cols[1]);
}

// ── Chrome ────────────────────────────────────────────────────────────────────

fn render_header(f: &mut Frame, area: Rect, app: &App, screen: &Screen<'_>) {
    let (title, subtitle) = match screen {
        Screen::CaseDetail { case, .. } => (case.condition.clone(), case.id.clone()),
        Screen::DocumentViewer { document, .. } => {
            (document.title.clone(), document.byline())
        }
        _ => {
            let (title, subtitle) = app.state.navigation().section().heading();
            (title.to_string(), subtitle.to_string())
        }
    };
    let user = app
        .state
        .current_user()
        .map(|u| format!("{} · {}", u.name, u.role.label()))
        .unwrap_or_default();

    let line = Line::from(vec![
        Span::styled(
            "MedResearch AI   ",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        bold(title),
        dim(format!("  {}", subtitle)),
        Span::raw("   "),
        Span::styled(user, Style::default().fg(Color::Gray)),
    ]);
    f.render_widget(Paragraph::new(line).block(bordered("")), area);
}

fn render_sidebar(f: &mut Frame, area: Rect, app: &App) {
    let active = app.state.navigation().section();
    let items: Vec<ListItem> = Section::ALL
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let style = if *section == active {
                Style::default().fg(Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", i + 1), Style::default().fg(ACCENT)),
                Span::styled(format!("{:<18}", section.label()), style),
            ]))
        })
        .collect();
    f.render_widget(List::new(items).block(bordered(" Sections ")), area);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App, screen: &Screen<'_>) {
    let key = |k: &str| Span::styled(format!("[{}] ", k), Style::default().fg(ACCENT));
    let mut spans = vec![key("1-6"), Span::raw("Section  ")];

    match screen {
        Screen::CaseList { .. } | Screen::Library { .. } => {
            spans.extend([key("↑↓"), Span::raw("Move  "), key("Enter"), Span::raw("Open  ")]);
        }
        Screen::CaseDetail { .. } | Screen::DocumentViewer { .. } => {
            spans.extend([key("←→"), Span::raw("Tab  "), key("Esc"), Span::raw("Back  ")]);
        }
        Screen::Alerts { form: Some(_), .. } => {
            spans = vec![
                key("Tab"),
                Span::raw("Next field  "),
                key("←→"),
                Span::raw("Pick  "),
                key("Enter"),
                Span::raw("Create  "),
                key("Esc"),
                Span::raw("Cancel  "),
            ];
        }
        Screen::Alerts { form: None, .. } => {
            spans.extend([
                key("n"),
                Span::raw("New  "),
                key("Space"),
                Span::raw("Pause/resume  "),
                key("d"),
                Span::raw("Delete  "),
            ]);
        }
        _ => {}
    }
    if !matches!(screen, Screen::Alerts { form: Some(_), .. }) {
        spans.extend([key("L"), Span::raw("Logout  "), key("q"), Span::raw("Quit")]);
    }

    if let Some(status) = &app.status {
        spans.push(Span::styled(
            format!("   {}", status),
            Style::default().fg(Color::Red),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)).block(bordered("")), area);
}

// ── Views ─────────────────────────────────────────────────────────────────────

fn render_view(f: &mut Frame, area: Rect, app: &App, screen: &Screen<'_>) {
    match screen {
        Screen::Login => {}
        Screen::Dashboard {
            stats,
            activity,
            notifications,
        } => render_dashboard(f, area, stats, activity, notifications),
        Screen::CaseList { cases } => render_case_list(f, area, cases, app.cursor),
        Screen::CaseDetail {
            case,
            tab,
            recommendations,
            protocols,
        } => render_case_detail(f, area, case, *tab, recommendations, protocols),
        Screen::Library { documents } => render_library(f, area, documents, app.cursor),
        Screen::DocumentViewer {
            document,
            tab,
            body,
            annotations,
        } => render_document(f, area, document, *tab, *body, annotations),
        Screen::Alerts { alerts, form } => render_alerts(f, area, app, alerts, *form),
        Screen::Compliance { records } => {
            let mut lines = Vec::new();
            for record in records.iter() {
                let color = match record.status {
                    ComplianceStatus::Compliant => Color::Green,
                    ComplianceStatus::Warning => Color::Yellow,
                };
                lines.push(Line::from(vec![
                    bold(format!(" {:<34}", record.protocol)),
                    Span::styled(
                        format!("{:<10}", record.status.label()),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(record.guidelines.join(", ")),
                ]));
                lines.push(Line::from(dim(format!(
                    "   last checked {}",
                    record.last_checked.format("%Y-%m-%d %H:%M")
                ))));
                for issue in &record.issues {
                    lines.push(Line::from(Span::styled(
                        format!("   ! {}", issue),
                        Style::default().fg(Color::Yellow),
                    )));
                }
                lines.push(Line::from(""));
            }
            f.render_widget(
                Paragraph::new(lines).block(bordered(" Protocol Compliance ")),
                area,
            );
        }
        Screen::Analytics { metrics } => {
            let lines: Vec<Line> = metrics
                .iter()
                .map(|m| {
                    let color = if m.trend.starts_with('-') {
                        Color::Red
                    } else {
                        Color::Green
                    };
                    Line::from(vec![
                        Span::raw(format!(" {:<28}", m.metric)),
                        bold(format!("{:>8}  ", m.value)),
                        Span::styled(m.trend.clone(), Style::default().fg(color)),
                    ])
                })
                .collect();
            f.render_widget(Paragraph::new(lines).block(bordered(" Key Metrics ")), area);
        }
    }
}

fn render_dashboard(
    f: &mut Frame,
    area: Rect,
    stats: &[medresearch_contracts::overview::StatCard],
    activity: &[medresearch_contracts::overview::ActivityItem],
    notifications: &[medresearch_contracts::overview::Notification],
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(4)])
        .split(area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, stats.len().max(1) as u32); stats.len()])
        .split(rows[0]);
    for (card, slot) in stats.iter().zip(cards.iter()) {
        let color = match card.change_kind {
            ChangeKind::Positive => Color::Green,
            ChangeKind::Negative => Color::Red,
            ChangeKind::Neutral => Color::Gray,
        };
        let lines = vec![
            Line::from(bold(card.value.clone())),
            Line::from(Span::styled(
                format!("{} {}", card.change_kind.symbol(), card.change),
                Style::default().fg(color),
            )),
        ];
        let title = format!(" {} ", card.title);
        f.render_widget(Paragraph::new(lines).block(bordered(&title)), *slot);
    }

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    let activity_items: Vec<ListItem> = activity
        .iter()
        .map(|item| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        format!(" [{}] ", item.kind.label()),
                        Style::default().fg(ACCENT),
                    ),
                    bold(item.title.clone()),
                ]),
                Line::from(Span::raw(format!("   {}", item.description))),
                Line::from(dim(format!("   {} · {}", item.user, item.timestamp))),
            ])
        })
        .collect();
    f.render_widget(
        List::new(activity_items).block(bordered(" Recent Activity ")),
        panels[0],
    );

    let unread = notifications.iter().filter(|n| !n.read).count();
    let note_items: Vec<ListItem> = notifications
        .iter()
        .map(|note| {
            let color = match note.priority {
                Priority::High => Color::Red,
                Priority::Medium => Color::Yellow,
                Priority::Low => Color::Gray,
            };
            let marker = if note.read { "  " } else { "● " };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!(" {}", marker), Style::default().fg(ACCENT)),
                    Span::styled(note.title.clone(), Style::default().fg(color)),
                ]),
                Line::from(dim(format!("   {}", note.timestamp))),
            ])
        })
        .collect();
    let title = format!(" Notifications ({} unread) ", unread);
    f.render_widget(List::new(note_items).block(bordered(&title)), panels[1]);
}

fn render_case_list(f: &mut Frame, area: Rect, cases: &[PatientCase], cursor: usize) {
    let items: Vec<ListItem> = cases
        .iter()
        .enumerate()
        .map(|(i, case)| {
            let (marker, style) = cursor_style(i == cursor);
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(format!("{}  {}", case.id, case.condition), style),
                ]),
                Line::from(dim(format!(
                    "    {} · age {} · {} · {}",
                    case.patient_id,
                    case.age,
                    case.status.label(),
                    case.genetic_markers.join(", ")
                ))),
            ])
        })
        .collect();
    f.render_widget(List::new(items).block(bordered(" Cases ")), area);
}

fn tab_bar<'a>(labels: Vec<String>, index: usize) -> Tabs<'a> {
    Tabs::new(labels)
        .select(index)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::BOTTOM))
}

fn split_tabs(area: Rect) -> (Rect, Rect) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(area);
    (parts[0], parts[1])
}

fn render_case_detail(
    f: &mut Frame,
    area: Rect,
    case: &PatientCase,
    tab: CaseTab,
    recommendations: &[&Recommendation],
    protocols: &[TreatmentProtocol],
) {
    let outer = bordered(" Case Detail ");
    let inner = outer.inner(area);
    f.render_widget(outer, area);
    let (bar, content) = split_tabs(inner);

    let labels = CaseTab::ALL.iter().map(|t| t.label().to_string()).collect();
    let index = CaseTab::ALL.iter().position(|t| *t == tab).unwrap_or(0);
    f.render_widget(tab_bar(labels, index), bar);

    let mut lines: Vec<Line> = Vec::new();
    match tab {
        CaseTab::Overview => {
            let row = |label: &str, value: String| {
                Line::from(vec![dim(format!(" {:<16}", label)), Span::raw(value)])
            };
            lines.push(row("Patient ID", case.patient_id.clone()));
            lines.push(row("Age", case.age.to_string()));
            lines.push(row("Status", case.status.label().to_string()));
            lines.push(row("Genetic markers", case.genetic_markers.join(", ")));
            lines.push(row("Comorbidities", case.comorbidities.join(", ")));
            lines.push(row("Physicians", case.assigned_physicians.join(", ")));
            lines.push(row("Created", case.created_at.format(DATE).to_string()));
            lines.push(row("Updated", case.updated_at.format(DATE).to_string()));
            lines.push(Line::from(""));
            lines.push(Line::from(bold(" Key Insights")));
            for insight in mock_data::case_insights(&case.id) {
                lines.push(Line::from(format!("  • {}", insight)));
            }
        }
        CaseTab::Recommendations => {
            if recommendations.is_empty() {
                lines.push(Line::from(dim(" No recommendations yet for this case.")));
            }
            for rec in recommendations {
                lines.push(Line::from(bold(format!(" {}", rec.recommendation))));
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("   {} certainty", rec.certainty.label()),
                        Style::default().fg(Color::Green),
                    ),
                    dim(format!(" · {}", rec.evidence_level.label())),
                ]));
                lines.push(Line::from(format!("   {}", rec.rationale)));
                lines.push(Line::from(dim(format!("   Citations: {}", rec.citations.join(", ")))));
                lines.push(Line::from(""));
            }
        }
        CaseTab::Protocols => {
            for protocol in protocols {
                lines.push(Line::from(vec![
                    bold(format!(" {}", protocol.name)),
                    Span::styled(
                        format!("  {}% effective", protocol.effectiveness),
                        Style::default().fg(Color::Green),
                    ),
                    dim(format!(" · {}", protocol.evidence_level.label())),
                ]));
                lines.push(Line::from(format!(
                    "   Side effects: {}",
                    protocol.side_effects.join(", ")
                )));
                lines.push(Line::from(format!(
                    "   Contraindications: {}",
                    protocol.contraindications.join(", ")
                )));
                lines.push(Line::from(""));
            }
        }
    }
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), content);
}

fn render_library(f: &mut Frame, area: Rect, documents: &[Document], cursor: usize) {
    let items: Vec<ListItem> = documents
        .iter()
        .enumerate()
        .map(|(i, doc)| {
            let (marker, style) = cursor_style(i == cursor);
            ListItem::new(vec![
                Line::from(vec![Span::styled(marker, style), Span::styled(doc.title.clone(), style)]),
                Line::from(dim(format!(
                    "    {} · {} · {}",
                    doc.byline(),
                    doc.specialty,
                    doc.evidence_level.label()
                ))),
            ])
        })
        .collect();
    f.render_widget(List::new(items).block(bordered(" Documents ")), area);
}

fn render_document(
    f: &mut Frame,
    area: Rect,
    document: &Document,
    tab: DocumentTab,
    body: Option<&str>,
    annotations: &[&Annotation],
) {
    let outer = bordered(" Document Viewer ");
    let inner = outer.inner(area);
    f.render_widget(outer, area);
    let (bar, content) = split_tabs(inner);

    let labels = DocumentTab::ALL
        .iter()
        .map(|t| match t {
            DocumentTab::Annotations => format!("{} ({})", t.label(), annotations.len()),
            DocumentTab::Content => t.label().to_string(),
        })
        .collect();
    let index = DocumentTab::ALL.iter().position(|t| *t == tab).unwrap_or(0);
    f.render_widget(tab_bar(labels, index), bar);

    let mut lines: Vec<Line> = Vec::new();
    match tab {
        DocumentTab::Content => match body {
            Some(body) => {
                for block in body_blocks(body) {
                    match block {
                        view::Block::Heading(h) => {
                            lines.push(Line::from(""));
                            lines.push(Line::from(Span::styled(
                                format!(" {}", h),
                                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                            )));
                        }
                        view::Block::Paragraph(p) => lines.push(Line::from(format!(" {}", p))),
                    }
                }
            }
            None => {
                lines.push(Line::from(bold(" Summary")));
                lines.push(Line::from(format!(" {}", document.summary)));
                lines.push(Line::from(""));
                lines.push(Line::from(bold(" Key Findings")));
                for finding in &document.key_findings {
                    lines.push(Line::from(format!("  • {}", finding)));
                }
            }
        },
        DocumentTab::Annotations => {
            if annotations.is_empty() {
                lines.push(Line::from(bold(" No annotations yet")));
                lines.push(Line::from(dim(" Comments on passages of this document appear here.")));
            }
            for ann in annotations {
                lines.push(Line::from(vec![
                    bold(format!(" {}", ann.user_name)),
                    dim(format!("  {}", ann.created_at.format(DATE))),
                ]));
                lines.push(Line::from(dim(format!("   \"{}\"", ann.text))));
                lines.push(Line::from(format!("   {}", ann.comment)));
                for reply in &ann.replies {
                    lines.push(Line::from(format!("     ↳ {}: {}", reply.user_name, reply.text)));
                }
                lines.push(Line::from(""));
            }
        }
    }
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), content);
}

fn render_alerts(f: &mut Frame, area: Rect, app: &App, alerts: &[Alert], form: Option<&AlertDraft>) {
    let list_area = match form {
        Some(draft) => {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(8), Constraint::Min(3)])
                .split(area);
            render_alert_form(f, parts[0], app, draft);
            parts[1]
        }
        None => area,
    };

    let active = alerts.iter().filter(|a| a.active).count();
    let items: Vec<ListItem> = alerts
        .iter()
        .enumerate()
        .map(|(i, alert)| {
            let (marker, style) = cursor_style(i == app.cursor && form.is_none());
            let (state, color) = if alert.active {
                ("active", Color::Green)
            } else {
                ("paused", Color::Gray)
            };
            let last_sent = alert
                .last_sent
                .map(|t| t.format(DATE).to_string())
                .unwrap_or_else(|| "never".to_string());
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(alert.title.clone(), style),
                    Span::styled(format!("  {}", state), Style::default().fg(color)),
                ]),
                Line::from(dim(format!(
                    "    {} · \"{}\" · {} · last sent {} · created {}",
                    alert.specialty,
                    alert.query,
                    alert.frequency.label(),
                    last_sent,
                    alert.created_at.format(DATE)
                ))),
            ])
        })
        .collect();
    let title = format!(" Your Alerts ({} active of {}) ", active, alerts.len());
    f.render_widget(List::new(items).block(bordered(&title)), list_area);
}

fn render_alert_form(f: &mut Frame, area: Rect, app: &App, draft: &AlertDraft) {
    let mut lines: Vec<Line> = DraftField::ALL
        .iter()
        .map(|field| {
            let focused = *field == app.form_field;
            let label_style = if focused {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let value = match field {
                DraftField::Frequency => format!("◀ {} ▶", draft.frequency.label()),
                DraftField::Specialty if draft.specialty.is_empty() => {
                    "◀ select specialty ▶".to_string()
                }
                DraftField::Specialty => format!("◀ {} ▶", draft.specialty),
                DraftField::Title | DraftField::Query => {
                    let cursor = if focused { "█" } else { "" };
                    format!("{}{}", draft.value(*field), cursor)
                }
            };
            Line::from(vec![
                Span::styled(format!(" {:<14}", field.label()), label_style),
                Span::raw(value),
            ])
        })
        .collect();

    let (hint, color) = if draft.is_submittable() {
        ("[Enter] Create Alert", Color::Green)
    } else {
        ("Create Alert (fill in title, query, and specialty)", Color::DarkGray)
    };
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(format!(" {}", hint), Style::default().fg(color))));

    f.render_widget(Paragraph::new(lines).block(bordered(" Create New Alert ")), area);
}

// ── Tests ─────────────────────────────────────────────────────────────────────
