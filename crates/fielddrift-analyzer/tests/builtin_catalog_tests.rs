//! End-to-end analysis of the bundled sample catalog.

use fielddrift_analyzer::{analyze, Analysis};
use fielddrift_registry::{DriftLevel, FieldRegistry};
use fielddrift_test_utils::builtin_registry;
use pretty_assertions::assert_eq;

fn analysis_of<'a>(registry: &'a FieldRegistry, id: &str) -> Analysis<'a> {
    analyze(registry.find_by_id(id).unwrap())
}

#[test]
fn account_status_billing_service_enum_drift() {
    let registry = builtin_registry();
    let analysis = analysis_of(&registry, "account_status");

    let billing = analysis.service("Billing Service").unwrap();
    assert!(billing.enum_mismatch);
    assert!(!billing.type_mismatch);

    let diff = billing.enum_diff.as_ref().unwrap();
    assert_eq!(diff.added, ["PAST_DUE"]);
    assert_eq!(diff.missing, ["SUSPENDED"]);
}

#[test]
fn account_status_summary() {
    let registry = builtin_registry();
    let analysis = analysis_of(&registry, "account_status");

    assert_eq!(analysis.service_count, 3);
    assert_eq!(analysis.overall_drift_level, DriftLevel::High);
    assert!(!analysis.service("Identity Service").unwrap().enum_mismatch);
    assert!(analysis.service("Customer Portal").unwrap().enum_mismatch);
    // Every service words its invariants differently from canonical.
    assert_eq!(
        analysis.key_signal_texts(),
        ["2 enum drift", "3 invariant difference"]
    );
}

#[test]
fn plan_tier_summary() {
    let registry = builtin_registry();
    let analysis = analysis_of(&registry, "plan_tier");

    let warehouse = analysis.service("Analytics Warehouse").unwrap();
    assert!(warehouse.type_mismatch);
    // Warehouse lists no enums, so every canonical value is missing.
    assert!(warehouse.enum_mismatch);
    assert_eq!(
        warehouse.enum_diff.as_ref().unwrap().missing,
        ["FREE", "STANDARD", "PREMIUM"]
    );

    assert!(analysis.service("Subscription Service").unwrap().enum_mismatch);
    assert!(!analysis.service("Catalog Service").unwrap().enum_mismatch);
    assert_eq!(
        analysis.key_signal_texts(),
        ["1 type mismatch", "2 enum drift", "3 invariant difference"]
    );
}

#[test]
fn event_timestamp_summary() {
    let registry = builtin_registry();
    let analysis = analysis_of(&registry, "event_timestamp");

    assert!(analysis
        .per_service_analysis
        .iter()
        .all(|entry| entry.enum_diff.is_none()));
    assert!(analysis.service("Analytics Warehouse").unwrap().type_mismatch);
    assert_eq!(
        analysis.key_signal_texts(),
        ["1 type mismatch", "3 invariant difference"]
    );
}

#[test]
fn every_builtin_field_reaches_high_drift() {
    let registry = builtin_registry();

    for field in registry.list() {
        assert_eq!(analyze(field).overall_drift_level, DriftLevel::High, "{}", field.id);
    }
}
