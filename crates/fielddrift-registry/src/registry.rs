//! Field registry with ordered id lookup
//!
//! Provides [`FieldRegistry`], the read-only catalog of fields consulted by
//! presentation layers before handing a [`Field`] to the analyzer.

use crate::catalog::{Catalog, BUILTIN_CATALOG};
use crate::error::{ParseError, RegistryResult, ValidationError};
use crate::field::Field;
use crate::parsers::{default_parsers, ParserRegistry};
use crate::validation::FieldValidator;
use indexmap::IndexMap;
use std::path::Path;

/// Ordered, validated catalog of fields
///
/// Fields are kept in registration order and indexed by id. Construction
/// validates every field; once built the registry is only read.
#[derive(Debug, Clone, Default)]
pub struct FieldRegistry {
    fields: IndexMap<String, Field>,
}

impl FieldRegistry {
    /// Create empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Build registry from fields, preserving their order
    ///
    /// # Errors
    /// Returns the first validation failure, including duplicate ids.
    pub fn from_fields(fields: impl IntoIterator<Item = Field>) -> Result<Self, ValidationError> {
        let mut registry = Self::new();
        for field in fields {
            registry.register(field)?;
        }
        Ok(registry)
    }

    /// Build registry from a parsed catalog document
    ///
    /// # Errors
    /// Returns the first validation failure.
    pub fn from_catalog(catalog: Catalog) -> Result<Self, ValidationError> {
        Self::from_fields(catalog.fields)
    }

    /// Load and validate a catalog file, picking the parser by extension
    ///
    /// # Errors
    /// Returns [`ParseError`] for unreadable or malformed files and
    /// [`ValidationError`] for rejected field data.
    pub fn load(path: impl AsRef<Path>) -> RegistryResult<Self> {
        Self::load_with(path, &default_parsers())
    }

    /// Load a catalog file using an explicit parser registry
    ///
    /// # Errors
    /// See [`FieldRegistry::load`].
    pub fn load_with(path: impl AsRef<Path>, parsers: &ParserRegistry) -> RegistryResult<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ParseError::io_error(path, e))?;
        let catalog = parsers.parse(&content, path)?;
        let registry = Self::from_catalog(catalog)?;

        tracing::info!(
            "Loaded {} fields from {}",
            registry.len(),
            path.display()
        );
        Ok(registry)
    }

    /// Registry holding the bundled sample catalog
    ///
    /// # Errors
    /// Only fails if the embedded catalog is malformed.
    pub fn builtin() -> RegistryResult<Self> {
        let catalog = default_parsers().parse(BUILTIN_CATALOG, Path::new("builtin/fields.yaml"))?;
        Ok(Self::from_catalog(catalog)?)
    }

    /// Register a field
    ///
    /// # Errors
    /// Returns error if the field is malformed or its id already exists.
    pub fn register(&mut self, field: Field) -> Result<(), ValidationError> {
        FieldValidator::new().validate(&field)?;

        if self.fields.contains_key(&field.id) {
            return Err(ValidationError::DuplicateField { id: field.id });
        }

        if field.services.is_empty() {
            tracing::warn!("Field '{}' has no service definitions", field.id);
        }
        tracing::debug!(
            "Registered field '{}' with {} services",
            field.id,
            field.services.len()
        );

        self.fields.insert(field.id.clone(), field);
        Ok(())
    }

    /// All fields in registration order
    pub fn list(&self) -> impl ExactSizeIterator<Item = &Field> + '_ {
        self.fields.values()
    }

    /// Exact-match lookup by id
    #[inline]
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Field> {
        self.fields.get(id)
    }

    /// Check if a field id exists
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.fields.contains_key(id)
    }

    /// Field ids in registration order
    pub fn ids(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.fields.keys().map(String::as_str)
    }

    /// Number of registered fields
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{FieldDefinition, ServiceDefinition};

    fn make_field(id: &str) -> Field {
        Field::new(id, FieldDefinition::new("string")).with_service(ServiceDefinition::new(
            "Service A",
            FieldDefinition::new("string"),
        ))
    }

    #[test]
    fn registry_preserves_registration_order() {
        let registry =
            FieldRegistry::from_fields(vec![make_field("b"), make_field("a"), make_field("c")])
                .unwrap();

        let ids: Vec<_> = registry.list().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
        assert_eq!(registry.ids().collect::<Vec<_>>(), ["b", "a", "c"]);
    }

    #[test]
    fn registry_find_by_id_exact() {
        let registry = FieldRegistry::from_fields(vec![make_field("plan_tier")]).unwrap();

        assert!(registry.find_by_id("plan_tier").is_some());
        assert!(registry.find_by_id("plan").is_none());
        assert!(registry.find_by_id("PLAN_TIER").is_none());
        assert!(registry.find_by_id(" plan_tier").is_none());
    }

    #[test]
    fn registry_rejects_duplicate_id() {
        let mut registry = FieldRegistry::new();
        registry.register(make_field("a")).unwrap();

        let result = registry.register(make_field("a"));

        assert!(matches!(result, Err(ValidationError::DuplicateField { id }) if id == "a"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn registry_rejects_invalid_field() {
        let result = FieldRegistry::from_fields(vec![Field::new("x", FieldDefinition::new(""))]);
        assert!(matches!(
            result,
            Err(ValidationError::BlankCanonicalType { .. })
        ));
    }

    #[test]
    fn empty_registry() {
        let registry = FieldRegistry::new();

        assert!(registry.is_empty());
        assert_eq!(registry.list().len(), 0);
        assert!(registry.find_by_id("anything").is_none());
    }

    #[test]
    fn builtin_registry_loads() {
        let registry = FieldRegistry::builtin().unwrap();

        assert_eq!(registry.len(), 3);
        assert!(registry.contains("account_status"));
        assert!(registry.contains("plan_tier"));
        assert!(registry.contains("event_timestamp"));
    }
}
