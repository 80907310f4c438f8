//! Versioned catalog document
//!
//! A catalog is the on-disk form of the registry: a schema version plus the
//! ordered list of fields. The bundled sample catalog is embedded at
//! compile time.

use crate::error::ParseError;
use crate::field::Field;
use serde::{Deserialize, Serialize};

/// Catalog schema version understood by this build
pub const CATALOG_SCHEMA_VERSION: u32 = 1;

/// Bundled sample catalog (YAML)
pub const BUILTIN_CATALOG: &str = include_str!("../catalog/fields.yaml");

/// Catalog document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Schema version
    pub version: u32,

    /// Fields in registration order
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Catalog {
    /// Create catalog at the current schema version
    #[inline]
    #[must_use]
    pub fn new(fields: Vec<Field>) -> Self {
        Self {
            version: CATALOG_SCHEMA_VERSION,
            fields,
        }
    }

    /// Reject catalogs written for another schema version
    ///
    /// # Errors
    /// Returns [`ParseError::UnsupportedVersion`] on mismatch.
    pub fn check_version(&self) -> Result<(), ParseError> {
        if self.version == CATALOG_SCHEMA_VERSION {
            Ok(())
        } else {
            Err(ParseError::UnsupportedVersion {
                found: self.version,
                supported: CATALOG_SCHEMA_VERSION,
            })
        }
    }

    /// Number of fields
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the catalog has no fields
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_current_version() {
        let catalog = Catalog::new(Vec::new());
        assert_eq!(catalog.version, CATALOG_SCHEMA_VERSION);
        assert!(catalog.check_version().is_ok());
        assert!(catalog.is_empty());
    }

    #[test]
    fn rejects_other_version() {
        let catalog = Catalog {
            version: 2,
            fields: Vec::new(),
        };

        assert!(matches!(
            catalog.check_version(),
            Err(ParseError::UnsupportedVersion { found: 2, supported: 1 })
        ));
    }

    #[test]
    fn builtin_catalog_is_embedded() {
        assert!(BUILTIN_CATALOG.contains("account_status"));
        assert!(BUILTIN_CATALOG.contains("plan_tier"));
        assert!(BUILTIN_CATALOG.contains("event_timestamp"));
    }
}
