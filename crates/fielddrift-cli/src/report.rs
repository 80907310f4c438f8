//! Text and JSON rendering of drift analyses
//!
//! Pure consumers of [`Analysis`]; nothing here feeds back into analysis.

use fielddrift_analyzer::{Analysis, ServiceAnalysis};
use fielddrift_registry::{DriftLevel, Field, FieldDefinition};
use serde::Serialize;

const EMPTY: &str = "—";

/// Serializable report of one field
#[derive(Debug, Serialize)]
pub struct FieldReport<'a> {
    /// Field id
    pub id: &'a str,

    /// Field label
    pub label: &'a str,

    /// Field-level summary
    pub description: &'a str,

    /// Drift analysis
    pub analysis: &'a Analysis<'a>,
}

impl<'a> FieldReport<'a> {
    /// Create report for an analyzed field
    #[must_use]
    pub fn new(field: &'a Field, analysis: &'a Analysis<'a>) -> Self {
        Self {
            id: &field.id,
            label: &field.label,
            description: &field.description,
            analysis,
        }
    }
}

/// One-line catalog listing entry
#[derive(Debug, Serialize)]
pub struct FieldSummary<'a> {
    /// Field id
    pub id: &'a str,

    /// Field label
    pub label: &'a str,

    /// Number of service definitions
    pub service_count: usize,
}

/// Overall drift of one field, for `check`
#[derive(Debug, Serialize)]
pub struct DriftSummary<'a> {
    /// Field id
    pub id: &'a str,

    /// Highest authored drift level
    pub overall_drift_level: DriftLevel,

    /// Key signal texts
    pub key_signals: Vec<String>,
}

/// Summary badge line: `3 services · High drift · 2 enum drift`
#[must_use]
pub fn summary_line(analysis: &Analysis<'_>) -> String {
    let mut parts = vec![
        format!("{} services", analysis.service_count),
        analysis.overall_drift_level.label().to_string(),
    ];
    parts.extend(analysis.key_signal_texts());
    parts.join(" · ")
}

/// Flags raised for one service, in display order
#[must_use]
pub fn service_flags(entry: &ServiceAnalysis<'_>) -> Vec<&'static str> {
    let mut flags = Vec::new();
    if entry.type_mismatch {
        flags.push("type mismatch");
    }
    if entry.enum_mismatch {
        flags.push("enum drift");
    }
    if entry.invariant_mismatch {
        flags.push("invariant differences");
    }
    flags
}

/// Per-service drift note: `Billing Service: Medium drift (enum drift)`
#[must_use]
pub fn service_note(entry: &ServiceAnalysis<'_>) -> String {
    let flags = service_flags(entry);
    let label = entry.service.drift_level.label();
    if flags.is_empty() {
        format!("{}: {label}", entry.service.name)
    } else {
        format!("{}: {label} ({})", entry.service.name, flags.join(", "))
    }
}

fn join_or_empty(values: &[String]) -> String {
    if values.is_empty() {
        EMPTY.to_string()
    } else {
        values.join(", ")
    }
}

fn push_definition(report: &mut String, description: &str, definition: &FieldDefinition) {
    let description = if description.is_empty() { EMPTY } else { description };
    report.push_str(&format!("  Description:    {description}\n"));
    report.push_str(&format!("  Type:           {}\n", definition.field_type));
    report.push_str(&format!("  Enums:          {}\n", join_or_empty(&definition.enums)));
    if definition.invariants.is_empty() {
        report.push_str(&format!("  Invariants:     {EMPTY}\n"));
    } else {
        report.push_str("  Invariants:\n");
        for invariant in &definition.invariants {
            report.push_str(&format!("    - {invariant}\n"));
        }
    }
    report.push_str(&format!(
        "  Example Values: {}\n",
        join_or_empty(&definition.examples)
    ));
}

/// Full text report: comparison columns followed by the mismatch summary
#[must_use]
pub fn render_text(field: &Field, analysis: &Analysis<'_>) -> String {
    let mut report = String::new();

    report.push_str(&format!("=== {} ===\n", field.label));
    if !field.description.is_empty() {
        report.push_str(&format!("{}\n", field.description));
    }
    report.push_str(&format!("\n{}\n", summary_line(analysis)));

    report.push_str("\n--- Canonical Definition (Reference) ---\n");
    push_definition(&mut report, &field.canonical.description, &field.canonical);

    for entry in &analysis.per_service_analysis {
        let service = entry.service;
        report.push_str(&format!(
            "\n--- {} ({}) ---\n",
            service.name,
            service.drift_level.label()
        ));
        if !service.role.is_empty() {
            report.push_str(&format!("  Role:           {}\n", service.role));
        }
        let description = if service.notes.is_empty() {
            &service.definition.description
        } else {
            &service.notes
        };
        push_definition(&mut report, description, &service.definition);
    }

    report.push_str("\n=== Mismatch Summary ===\n");
    report.push_str(&format!(
        "{} services compared for \"{}\".\n",
        analysis.service_count, field.label
    ));

    report.push_str("\nKey Signals\n");
    for signal in &analysis.key_signals {
        report.push_str(&format!("  - {signal}\n"));
    }

    report.push_str("\nPer-Service Drift Notes\n");
    for entry in &analysis.per_service_analysis {
        report.push_str(&format!("  - {}\n", service_note(entry)));
        if let Some(diff) = entry.enum_diff.as_ref().filter(|d| d.is_drifted()) {
            if !diff.added.is_empty() {
                report.push_str(&format!("      added:   {}\n", diff.added.join(", ")));
            }
            if !diff.missing.is_empty() {
                report.push_str(&format!("      missing: {}\n", diff.missing.join(", ")));
            }
        }
    }

    report
}
