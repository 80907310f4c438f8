//! Testing utilities for the field drift workspace
//!
//! Shared fixtures and proptest strategies.

#![allow(missing_docs)]

use fielddrift_registry::{DriftLevel, Field, FieldDefinition, FieldRegistry, ServiceDefinition};
use proptest::prelude::*;

pub fn create_definition(field_type: &str, enums: &[&str], invariants: &[&str]) -> FieldDefinition {
    FieldDefinition::new(field_type)
        .with_enums(enums.iter().copied())
        .with_invariants(invariants.iter().copied())
}

pub fn create_service(
    name: &str,
    field_type: &str,
    enums: &[&str],
    invariants: &[&str],
    drift_level: DriftLevel,
) -> ServiceDefinition {
    ServiceDefinition::new(name, create_definition(field_type, enums, invariants))
        .with_drift_level(drift_level)
}

pub fn create_field(canonical: FieldDefinition, services: Vec<ServiceDefinition>) -> Field {
    let mut field = Field::new("test_field", canonical);
    field.services = services;
    field
}

pub fn create_field_without_services() -> Field {
    create_field(create_definition("string (enum)", &["A", "B"], &["rule"]), Vec::new())
}

/// Services named `svc-0`, `svc-1`, ... with the given drift levels and
/// definitions identical to `canonical`
pub fn create_aligned_services(
    canonical: &FieldDefinition,
    levels: &[DriftLevel],
) -> Vec<ServiceDefinition> {
    levels
        .iter()
        .enumerate()
        .map(|(i, level)| {
            ServiceDefinition::new(format!("svc-{i}"), canonical.clone()).with_drift_level(*level)
        })
        .collect()
}

pub fn builtin_registry() -> FieldRegistry {
    FieldRegistry::builtin().expect("bundled catalog must load")
}

pub fn drift_level_strategy() -> impl Strategy<Value = DriftLevel> {
    prop_oneof![
        Just(DriftLevel::Low),
        Just(DriftLevel::Medium),
        Just(DriftLevel::High),
    ]
}

pub fn definition_strategy() -> impl Strategy<Value = FieldDefinition> {
    (
        prop_oneof![Just("string"), Just("string (enum)"), Just("int"), Just(" string ")],
        prop::collection::vec("[A-D]", 0..4),
        prop::collection::vec("rule [a-c]", 0..3),
    )
        .prop_map(|(field_type, enums, invariants)| {
            FieldDefinition::new(field_type)
                .with_enums(enums)
                .with_invariants(invariants)
        })
}

pub fn service_strategy() -> impl Strategy<Value = ServiceDefinition> {
    (definition_strategy(), drift_level_strategy()).prop_map(|(definition, level)| {
        ServiceDefinition::new("generated", definition).with_drift_level(level)
    })
}

pub fn field_strategy() -> impl Strategy<Value = Field> {
    (
        definition_strategy(),
        prop::collection::vec(service_strategy(), 0..6),
    )
        .prop_map(|(canonical, mut services)| {
            for (i, service) in services.iter_mut().enumerate() {
                service.name = format!("svc-{i}");
            }
            create_field(canonical, services)
        })
}
