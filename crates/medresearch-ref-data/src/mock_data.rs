//! Fixed sample records for the MedResearch dashboard.
//!
//! All data in this module is hardcoded and fictional. No external systems are
//! contacted. This module stands in for the case registry, document store,
//! and alert service of a production deployment.

use chrono::{DateTime, TimeZone, Utc};

use medresearch_contracts::{
    alert::{Alert, Frequency},
    case::{CaseStatus, Certainty, PatientCase, Recommendation, TreatmentProtocol},
    document::{Annotation, AnnotationReply, Document, TextRange},
    evidence::EvidenceLevel,
    overview::{
        ActivityItem, ActivityKind, AnalyticsMetric, ChangeKind, ComplianceRecord,
        ComplianceStatus, Notification, Priority, StatCard,
    },
    user::{Role, User},
};

/// UTC timestamp from constant parts. Out-of-range parts yield the epoch.
fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ── Users ─────────────────────────────────────────────────────────────────────

/// The user the mocked login signs in as.
pub fn demo_user() -> User {
    User {
        id: "1".to_string(),
        name: "Dr. Sarah Chen".to_string(),
        email: "sarah.chen@medresearch.example".to_string(),
        role: Role::Physician,
        specialty: "Oncology".to_string(),
        avatar: None,
    }
}

// ── Cases ─────────────────────────────────────────────────────────────────────

pub fn cases() -> Vec<PatientCase> {
    vec![
        PatientCase {
            id: "CASE-0001".to_string(),
            patient_id: "PT-001".to_string(),
            condition: "Stage II Breast Cancer".to_string(),
            age: 45,
            genetic_markers: strings(&["BRCA1+"]),
            comorbidities: strings(&["Hypertension"]),
            assigned_physicians: strings(&["1", "2"]),
            status: CaseStatus::Active,
            created_at: at(2024, 1, 15, 8, 30),
            updated_at: at(2024, 12, 15, 14, 20),
        },
        PatientCase {
            id: "CASE-0002".to_string(),
            patient_id: "PT-002".to_string(),
            condition: "Acute Myocardial Infarction".to_string(),
            age: 62,
            genetic_markers: strings(&["CYP2C19*2"]),
            comorbidities: strings(&["Diabetes Type 2", "Chronic Kidney Disease"]),
            assigned_physicians: strings(&["2"]),
            status: CaseStatus::Active,
            created_at: at(2024, 12, 10, 10, 15),
            updated_at: at(2024, 12, 15, 9, 45),
        },
        PatientCase {
            id: "CASE-0003".to_string(),
            patient_id: "PT-003".to_string(),
            condition: "Non-Small Cell Lung Cancer".to_string(),
            age: 58,
            genetic_markers: strings(&["EGFR+"]),
            comorbidities: strings(&["COPD"]),
            assigned_physicians: strings(&["1"]),
            status: CaseStatus::Pending,
            created_at: at(2024, 12, 14, 16, 0),
            updated_at: at(2024, 12, 14, 16, 0),
        },
    ]
}

/// Static insight bullets shown on a case's overview tab.
pub fn case_insights(case_id: &str) -> Vec<&'static str> {
    match case_id {
        "CASE-0001" => vec![
            "Based on patient's BRCA1+ status and stage II diagnosis, aggressive treatment approach is recommended",
            "Age 45 with manageable comorbidities supports combination therapy eligibility",
            "Recent literature strongly supports HER2-targeted therapy for optimal outcomes",
        ],
        "CASE-0002" => vec![
            "CYP2C19*2 carrier status predicts reduced clopidogrel activation; consider alternative P2Y12 inhibitor",
            "Chronic kidney disease warrants renal dose adjustment of antithrombotic therapy",
        ],
        "CASE-0003" => vec![
            "EGFR+ status supports first-line osimertinib per recent real-world outcome data",
            "COPD comorbidity should be weighed when planning thoracic radiotherapy",
        ],
        _ => Vec::new(),
    }
}

pub fn recommendations() -> Vec<Recommendation> {
    vec![Recommendation {
        id: "REC-001".to_string(),
        case_id: "CASE-0001".to_string(),
        recommendation: "Initiate trastuzumab plus chemotherapy regimen".to_string(),
        rationale: "Based on RCT evidence showing 85% response rate in HER2-positive breast cancer \
                    with manageable side effect profile. Patient's BRCA1+ status and age support \
                    aggressive treatment approach."
            .to_string(),
        evidence_level: EvidenceLevel::Level1,
        certainty: Certainty::High,
        citations: strings(&["DOI:10.1056/NEJMoa2024406"]),
        created_by: "1".to_string(),
        created_at: at(2024, 12, 15, 14, 30),
    }]
}

pub fn protocols() -> Vec<TreatmentProtocol> {
    vec![
        TreatmentProtocol {
            id: "PROT-001".to_string(),
            name: "Trastuzumab + Chemotherapy".to_string(),
            effectiveness: 85,
            evidence_level: EvidenceLevel::Level1,
            side_effects: strings(&["Cardiotoxicity", "Fatigue", "Nausea", "Hair loss"]),
            contraindications: strings(&["Severe heart failure", "Uncontrolled hypertension"]),
            citations: strings(&["DOI-001", "DOI-002"]),
        },
        TreatmentProtocol {
            id: "PROT-002".to_string(),
            name: "Targeted HER2 Inhibitors".to_string(),
            effectiveness: 73,
            evidence_level: EvidenceLevel::Level2,
            side_effects: strings(&["Diarrhea", "Rash", "Fatigue"]),
            contraindications: strings(&["Severe hepatic impairment"]),
            citations: strings(&["DOI-003"]),
        },
    ]
}

// ── Library ───────────────────────────────────────────────────────────────────

pub fn documents() -> Vec<Document> {
    vec![
        Document {
            id: "DOC-001".to_string(),
            title: "Trastuzumab and Chemotherapy in HER2-Positive Breast Cancer: Updated Analysis"
                .to_string(),
            doi: Some("10.1056/NEJMoa2024406".to_string()),
            authors: strings(&["Smith JA", "Johnson MB", "Williams CC"]),
            uploaded_by: "1".to_string(),
            uploaded_at: at(2024, 12, 1, 14, 30),
            tags: strings(&["breast-cancer", "HER2", "trastuzumab", "chemotherapy"]),
            evidence_level: EvidenceLevel::Level1,
            specialty: "Oncology".to_string(),
            summary: "Large randomized controlled trial (N=1,200) demonstrates 85% response rate \
                      with trastuzumab plus chemotherapy in HER2-positive breast cancer patients, \
                      with manageable cardiotoxicity profile."
                .to_string(),
            key_findings: strings(&[
                "85% overall response rate in treatment group vs 62% in control",
                "Improved progression-free survival (HR 0.72, 95% CI 0.61-0.85)",
                "Cardiotoxicity occurred in 8% of patients, mostly reversible",
            ]),
            url: None,
        },
        Document {
            id: "DOC-002".to_string(),
            title: "Dual Antiplatelet Therapy Duration After PCI: Meta-Analysis of Recent Trials"
                .to_string(),
            doi: Some("10.1161/CIRCULATIONAHA.124.068234".to_string()),
            authors: strings(&["Rodriguez M", "Chen L", "Anderson KR"]),
            uploaded_by: "2".to_string(),
            uploaded_at: at(2024, 11, 28, 9, 15),
            tags: strings(&["PCI", "antiplatelet", "DAPT", "cardiology"]),
            evidence_level: EvidenceLevel::Level1,
            specialty: "Cardiology".to_string(),
            summary: "Meta-analysis of 15 RCTs (N=45,000) shows optimal DAPT duration of 6-12 \
                      months post-PCI balances ischemic and bleeding risks in most patients."
                .to_string(),
            key_findings: strings(&[
                "No significant difference in MACE between 6 vs 12 months DAPT",
                "Bleeding risk increases significantly after 12 months",
                "High-risk patients may benefit from extended therapy",
            ]),
            url: None,
        },
        Document {
            id: "DOC-003".to_string(),
            title: "EGFR Tyrosine Kinase Inhibitors in Advanced NSCLC: Real-World Outcomes"
                .to_string(),
            doi: Some("10.1200/JCO.2024.41.15.2456".to_string()),
            authors: strings(&["Park SH", "Kumar V", "Thompson A"]),
            uploaded_by: "1".to_string(),
            uploaded_at: at(2024, 12, 12, 11, 20),
            tags: strings(&["NSCLC", "EGFR", "TKI", "osimertinib"]),
            evidence_level: EvidenceLevel::Level2,
            specialty: "Oncology".to_string(),
            summary: "Real-world study of 2,500 EGFR-mutated NSCLC patients shows median overall \
                      survival of 28.5 months with first-line osimertinib."
                .to_string(),
            key_findings: strings(&[
                "Median OS 28.5 months with osimertinib vs 22.1 months with other TKIs",
                "Better tolerability profile with fewer dose reductions",
                "CNS progression significantly delayed",
            ]),
            url: None,
        },
    ]
}

/// Full text of the trastuzumab trial (DOC-001).
pub const TRASTUZUMAB_TRIAL_BODY: &str = "\
ABSTRACT

Background: HER2-positive breast cancer represents approximately 20% of all breast cancers and has historically been associated with poor prognosis. The introduction of trastuzumab has significantly improved outcomes in this patient population.

Methods: This randomized controlled trial enrolled 1,200 patients with HER2-positive breast cancer across 45 international centers. Patients were randomized to receive either trastuzumab plus chemotherapy (n=600) or chemotherapy alone (n=600). The primary endpoint was overall response rate, with secondary endpoints including progression-free survival and overall survival.

Results: The combination therapy group demonstrated an 85% overall response rate compared to 62% in the chemotherapy-alone group (p<0.001). Median progression-free survival was significantly improved in the combination group (18.5 months vs 12.3 months, HR 0.72, 95% CI 0.61-0.85). Cardiotoxicity was observed in 8% of patients receiving trastuzumab, with most cases being reversible upon drug discontinuation.

Conclusions: The addition of trastuzumab to standard chemotherapy significantly improves outcomes in HER2-positive breast cancer patients with an acceptable safety profile. These findings support the use of combination therapy as standard of care in this patient population.

INTRODUCTION

HER2-positive breast cancer is characterized by overexpression of the human epidermal growth factor receptor 2 protein, which occurs in approximately 15-20% of invasive breast cancers. This subtype was historically associated with aggressive tumor behavior and poor clinical outcomes. The development of HER2-targeted therapies, particularly trastuzumab, has revolutionized treatment approaches and significantly improved patient outcomes.

METHODS

Study Design: This was a multicenter, randomized, open-label phase III clinical trial conducted between January 2020 and December 2023. The study was approved by institutional review boards at all participating sites and conducted in accordance with the Declaration of Helsinki and Good Clinical Practice guidelines.

Patients: Eligible patients were adults (>=18 years) with histologically confirmed HER2-positive breast cancer (defined as IHC 3+ or FISH ratio >=2.0) with measurable disease according to RECIST criteria. Key exclusion criteria included prior HER2-targeted therapy, significant cardiac dysfunction (LVEF <50%), and uncontrolled comorbidities.
";

/// Reviewer annotations. Only the trastuzumab trial has been annotated.
pub fn annotations() -> Vec<Annotation> {
    vec![Annotation {
        id: "ANN-001".to_string(),
        document_id: "DOC-001".to_string(),
        user_id: "3".to_string(),
        user_name: "Dr. Emily Watson".to_string(),
        text: "Cardiotoxicity was observed in 8% of patients receiving trastuzumab".to_string(),
        comment: "Worth checking baseline LVEF criteria against our CASE-0001 patient, who has hypertension."
            .to_string(),
        position: TextRange { start: 914, end: 981 },
        resolved: false,
        created_at: at(2024, 12, 14, 16, 45),
        replies: vec![AnnotationReply {
            id: "ANN-001-R1".to_string(),
            user_id: "1".to_string(),
            user_name: "Dr. Sarah Chen".to_string(),
            text: "Agreed. Baseline echo ordered before the first cycle.".to_string(),
            created_at: at(2024, 12, 15, 8, 10),
        }],
    }]
}

// ── Alerts ────────────────────────────────────────────────────────────────────

/// The alerts every session starts with, newest first.
pub fn alerts() -> Vec<Alert> {
    vec![
        Alert {
            id: "ALERT-001".to_string(),
            user_id: "1".to_string(),
            title: "Oncology Literature Updates".to_string(),
            query: "breast cancer, HER2, immunotherapy".to_string(),
            specialty: "Oncology".to_string(),
            frequency: Frequency::Weekly,
            last_sent: Some(at(2024, 12, 8, 9, 0)),
            active: true,
            created_at: at(2024, 11, 1, 10, 0),
        },
        Alert {
            id: "ALERT-002".to_string(),
            user_id: "2".to_string(),
            title: "Cardiology Guidelines Updates".to_string(),
            query: "STEMI, PCI, antiplatelet".to_string(),
            specialty: "Cardiology".to_string(),
            frequency: Frequency::Monthly,
            last_sent: Some(at(2024, 12, 1, 9, 0)),
            active: true,
            created_at: at(2024, 10, 15, 14, 0),
        },
    ]
}

// ── Dashboard ─────────────────────────────────────────────────────────────────

pub fn dashboard_stats() -> Vec<StatCard> {
    let card = |title: &str, value: &str, change: &str, change_kind| StatCard {
        title: title.to_string(),
        value: value.to_string(),
        change: change.to_string(),
        change_kind,
    };
    vec![
        card("Active Cases", "15", "+3 this week", ChangeKind::Positive),
        card("Pending Reviews", "8", "+2 since yesterday", ChangeKind::Neutral),
        card("Documents Processed", "245", "+18 this month", ChangeKind::Positive),
        card("Success Rate", "94%", "+2% from last month", ChangeKind::Positive),
    ]
}

pub fn recent_activity() -> Vec<ActivityItem> {
    let item = |id: &str, kind, title: &str, description: &str, timestamp: &str, user: &str| {
        ActivityItem {
            id: id.to_string(),
            kind,
            title: title.to_string(),
            description: description.to_string(),
            timestamp: timestamp.to_string(),
            user: user.to_string(),
        }
    };
    vec![
        item(
            "1",
            ActivityKind::Document,
            "New Research Paper Added",
            "EGFR Tyrosine Kinase Inhibitors in Advanced NSCLC uploaded by Dr. Chen",
            "2 hours ago",
            "Dr. Sarah Chen",
        ),
        item(
            "2",
            ActivityKind::Case,
            "Case Updated",
            "CASE-0001 - Stage II Breast Cancer treatment plan revised",
            "4 hours ago",
            "Dr. Michael Rodriguez",
        ),
        item(
            "3",
            ActivityKind::Alert,
            "Literature Alert Triggered",
            "New HER2 trial results available for review",
            "6 hours ago",
            "System",
        ),
        item(
            "4",
            ActivityKind::Document,
            "Document Annotated",
            "New comments added to Trastuzumab efficacy study",
            "1 day ago",
            "Dr. Emily Watson",
        ),
    ]
}

pub fn notifications() -> Vec<Notification> {
    let note = |id: &str, title: &str, description: &str, priority, timestamp: &str, read| {
        Notification {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            priority,
            timestamp: timestamp.to_string(),
            read,
        }
    };
    vec![
        note(
            "1",
            "New HER2 Trial Results",
            "Phase III results showing improved outcomes with combination therapy",
            Priority::High,
            "2 hours ago",
            false,
        ),
        note(
            "2",
            "FDA Approval Update",
            "New indication approved for osimertinib in early-stage NSCLC",
            Priority::Medium,
            "1 day ago",
            false,
        ),
        note(
            "3",
            "Guideline Update",
            "NCCN breast cancer guidelines updated with new recommendations",
            Priority::Medium,
            "2 days ago",
            true,
        ),
    ]
}

// ── Compliance & analytics ────────────────────────────────────────────────────

pub fn compliance_records() -> Vec<ComplianceRecord> {
    vec![
        ComplianceRecord {
            id: "1".to_string(),
            protocol: "HER2+ Breast Cancer Treatment".to_string(),
            status: ComplianceStatus::Compliant,
            guidelines: strings(&["NCCN", "WHO"]),
            issues: Vec::new(),
            last_checked: at(2024, 12, 15, 14, 30),
        },
        ComplianceRecord {
            id: "2".to_string(),
            protocol: "STEMI Management Protocol".to_string(),
            status: ComplianceStatus::Warning,
            guidelines: strings(&["AHA/ACC"]),
            issues: strings(&["Dosage adjustment needed for renal impairment"]),
            last_checked: at(2024, 12, 15, 10, 15),
        },
    ]
}

pub fn analytics() -> Vec<AnalyticsMetric> {
    [
        ("Documents Processed", "245", "+15%"),
        ("Average Processing Time", "2.3min", "-12%"),
        ("Research Recommendations", "89", "+8%"),
        ("Compliance Score", "94%", "+2%"),
    ]
    .into_iter()
    .map(|(metric, value, trend)| AnalyticsMetric {
        metric: metric.to_string(),
        value: value.to_string(),
        trend: trend.to_string(),
    })
    .collect()
}
