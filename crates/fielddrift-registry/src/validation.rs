//! Construction-time validation of field data
//!
//! Malformed catalog entries are rejected here so the analyzer never sees
//! absent or blank values.

use crate::error::ValidationError;
use crate::field::Field;
use std::collections::HashSet;

/// Validator for individual [`Field`] values
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldValidator;

impl FieldValidator {
    /// Create new validator instance
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Validate one field
    ///
    /// # Errors
    /// Returns the first rule the field violates.
    pub fn validate(&self, field: &Field) -> Result<(), ValidationError> {
        if field.id.trim().is_empty() {
            return Err(ValidationError::EmptyId);
        }

        if field.label.trim().is_empty() {
            return Err(ValidationError::EmptyLabel {
                field: field.id.clone(),
            });
        }

        if field.canonical.field_type.trim().is_empty() {
            return Err(ValidationError::BlankCanonicalType {
                field: field.id.clone(),
            });
        }

        let mut seen = HashSet::with_capacity(field.services.len());
        for (index, service) in field.services.iter().enumerate() {
            if service.name.trim().is_empty() {
                return Err(ValidationError::EmptyServiceName {
                    field: field.id.clone(),
                    index,
                });
            }

            if service.field_type().trim().is_empty() {
                return Err(ValidationError::BlankServiceType {
                    field: field.id.clone(),
                    service: service.name.clone(),
                });
            }

            if !seen.insert(service.name.as_str()) {
                return Err(ValidationError::DuplicateService {
                    field: field.id.clone(),
                    service: service.name.clone(),
                });
            }
        }

        Ok(())
    }
}
