//! Drift analyzer
//!
//! Compares every service definition of a [`Field`] against its canonical
//! definition and reduces the results into an [`Analysis`].

use crate::analysis::{Analysis, EnumDiff, MismatchCounts, ServiceAnalysis};
use crate::config::{AnalyzerConfig, InvariantPolicy};
use fielddrift_registry::{DriftLevel, Field, FieldDefinition, ServiceDefinition};
use indexmap::IndexSet;

/// Pure, stateless drift analyzer
///
/// Holds only its configuration; safe to share across threads and to call
/// concurrently.
#[derive(Debug, Clone, Copy, Default)]
pub struct DriftAnalyzer {
    config: AnalyzerConfig,
}

impl DriftAnalyzer {
    /// Create analyzer with configuration
    #[inline]
    #[must_use]
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze one field
    #[must_use]
    pub fn analyze<'a>(&self, field: &'a Field) -> Analysis<'a> {
        let canonical = &field.canonical;
        let mut counts = MismatchCounts::default();

        let per_service_analysis: Vec<ServiceAnalysis<'a>> = field
            .services
            .iter()
            .map(|service| {
                let entry = self.analyze_service(canonical, service);
                counts.type_mismatches += usize::from(entry.type_mismatch);
                counts.enum_drifts += usize::from(entry.enum_mismatch);
                counts.invariant_differences += usize::from(entry.invariant_mismatch);
                entry
            })
            .collect();

        let overall_drift_level = overall_drift_level(&field.services);

        tracing::debug!(
            "Analyzed field '{}': {} services, overall drift {}",
            field.id,
            per_service_analysis.len(),
            overall_drift_level
        );

        Analysis {
            service_count: field.services.len(),
            overall_drift_level,
            per_service_analysis,
            counts,
            key_signals: counts.key_signals(),
        }
    }

    /// Compare one service definition against the canonical definition
    #[must_use]
    pub fn analyze_service<'a>(
        &self,
        canonical: &FieldDefinition,
        service: &'a ServiceDefinition,
    ) -> ServiceAnalysis<'a> {
        let definition = &service.definition;
        let enum_diff = enum_diff(canonical, definition);

        ServiceAnalysis {
            service,
            type_mismatch: type_mismatch(canonical, definition),
            enum_mismatch: enum_diff.as_ref().is_some_and(EnumDiff::is_drifted),
            invariant_mismatch: invariant_mismatch(
                canonical,
                definition,
                self.config.invariant_policy,
            ),
            enum_diff,
        }
    }
}

/// Analyze a field with the default configuration
#[inline]
#[must_use]
pub fn analyze(field: &Field) -> Analysis<'_> {
    DriftAnalyzer::default().analyze(field)
}

/// Type names differ after trimming surrounding whitespace
#[inline]
#[must_use]
pub fn type_mismatch(canonical: &FieldDefinition, service: &FieldDefinition) -> bool {
    canonical.field_type.trim() != service.field_type.trim()
}

/// Set difference of enumerated values
///
/// Returns `None` when the canonical definition has no enumeration; the
/// service's values are then not checked at all.
#[must_use]
pub fn enum_diff(canonical: &FieldDefinition, service: &FieldDefinition) -> Option<EnumDiff> {
    if !canonical.has_enums() {
        return None;
    }

    let canonical_set: IndexSet<&str> = canonical.enums.iter().map(String::as_str).collect();
    let service_set: IndexSet<&str> = service.enums.iter().map(String::as_str).collect();

    let added = service_set
        .iter()
        .filter(|v| !canonical_set.contains(*v))
        .map(|v| (*v).to_string())
        .collect();
    let missing = canonical_set
        .iter()
        .filter(|v| !service_set.contains(*v))
        .map(|v| (*v).to_string())
        .collect();

    Some(EnumDiff { added, missing })
}

/// Invariant lists differ under the given policy
///
/// Comparison is exact: length, wording, whitespace and order all count.
#[must_use]
pub fn invariant_mismatch(
    canonical: &FieldDefinition,
    service: &FieldDefinition,
    policy: InvariantPolicy,
) -> bool {
    match policy {
        InvariantPolicy::SkipWhenEitherEmpty
            if canonical.invariants.is_empty() || service.invariants.is_empty() =>
        {
            false
        }
        _ => canonical.invariants != service.invariants,
    }
}

/// Highest authored drift level; `Low` for no services
#[must_use]
pub fn overall_drift_level(services: &[ServiceDefinition]) -> DriftLevel {
    services
        .iter()
        .map(|s| s.drift_level)
        .max()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(field_type: &str) -> FieldDefinition {
        FieldDefinition::new(field_type)
    }

    #[test]
    fn type_mismatch_ignores_surrounding_whitespace() {
        assert!(!type_mismatch(&def(" string "), &def("string")));
        assert!(!type_mismatch(&def("string\n"), &def("\tstring")));
    }

    #[test]
    fn type_mismatch_is_case_and_content_sensitive() {
        assert!(type_mismatch(&def("String"), &def("string")));
        assert!(type_mismatch(&def("string (enum)"), &def("string")));
        assert!(type_mismatch(&def("string  (enum)"), &def("string (enum)")));
    }

    #[test]
    fn enum_diff_skipped_without_canonical_enums() {
        let canonical = def("string");
        let service = def("string").with_enums(["A", "B"]);

        assert_eq!(enum_diff(&canonical, &service), None);
    }

    #[test]
    fn enum_diff_reports_added_and_missing() {
        let canonical = def("string (enum)").with_enums(["ACTIVE", "SUSPENDED", "CLOSED"]);
        let service = def("string (enum)").with_enums(["ACTIVE", "PAST_DUE", "CLOSED"]);

        let diff = enum_diff(&canonical, &service).unwrap();

        assert_eq!(diff.added, vec!["PAST_DUE"]);
        assert_eq!(diff.missing, vec!["SUSPENDED"]);
        assert!(diff.is_drifted());
    }

    #[test]
    fn enum_diff_ignores_order_and_multiplicity() {
        let canonical = def("e").with_enums(["A", "B", "C"]);
        let service = def("e").with_enums(["C", "A", "B", "A"]);

        let diff = enum_diff(&canonical, &service).unwrap();
        assert!(!diff.is_drifted());
    }

    #[test]
    fn enum_diff_service_without_enums_misses_everything() {
        let canonical = def("e").with_enums(["A", "B"]);
        let service = def("e");

        let diff = enum_diff(&canonical, &service).unwrap();
        assert_eq!(diff.missing, vec!["A", "B"]);
        assert!(diff.added.is_empty());
    }

    #[test]
    fn enum_diff_deduplicates_added_values() {
        let canonical = def("e").with_enums(["A"]);
        let service = def("e").with_enums(["A", "X", "X", "Y"]);

        let diff = enum_diff(&canonical, &service).unwrap();
        assert_eq!(diff.added, vec!["X", "Y"]);
    }

    #[test]
    fn invariant_mismatch_skips_when_either_side_empty() {
        let with = def("t").with_invariants(["rule"]);
        let without = def("t");
        let policy = InvariantPolicy::SkipWhenEitherEmpty;

        assert!(!invariant_mismatch(&with, &without, policy));
        assert!(!invariant_mismatch(&without, &with, policy));
        assert!(!invariant_mismatch(&without, &without, policy));
    }

    #[test]
    fn invariant_mismatch_strict_policy_reports_empty_side() {
        let with = def("t").with_invariants(["rule"]);
        let without = def("t");
        let policy = InvariantPolicy::Strict;

        assert!(invariant_mismatch(&with, &without, policy));
        assert!(invariant_mismatch(&without, &with, policy));
        assert!(!invariant_mismatch(&without, &without, policy));
    }

    #[test]
    fn invariant_mismatch_exact_sequence_comparison() {
        let canonical = def("t").with_invariants(["a", "b"]);
        let policy = InvariantPolicy::SkipWhenEitherEmpty;

        assert!(!invariant_mismatch(&canonical, &def("t").with_invariants(["a", "b"]), policy));
        assert!(invariant_mismatch(&canonical, &def("t").with_invariants(["b", "a"]), policy));
        assert!(invariant_mismatch(&canonical, &def("t").with_invariants(["a"]), policy));
        assert!(invariant_mismatch(&canonical, &def("t").with_invariants(["a", "b "]), policy));
    }

    #[test]
    fn overall_drift_level_is_maximum() {
        let services: Vec<_> = [DriftLevel::Low, DriftLevel::High, DriftLevel::Medium]
            .into_iter()
            .map(|level| ServiceDefinition::new("s", def("t")).with_drift_level(level))
            .collect();

        assert_eq!(overall_drift_level(&services), DriftLevel::High);
        assert_eq!(overall_drift_level(&[]), DriftLevel::Low);
    }
}
