//! Field Drift Registry
//!
//! Read-only catalog of data fields, each with one canonical definition and
//! any number of service-specific definitions of the same field.
//!
//! # Overview
//!
//! The registry provides:
//! - **Field / FieldDefinition / ServiceDefinition**: the data model
//! - **FieldRegistry**: ordered lookup by field id
//! - **Catalog parsers**: YAML and JSON catalog files, schema-versioned
//! - **FieldValidator**: fail-fast rejection of malformed entries
//!
//! # Example
//!
//! ```rust
//! use fielddrift_registry::FieldRegistry;
//!
//! let registry = FieldRegistry::builtin().unwrap();
//!
//! for field in registry.list() {
//!     println!("{} ({} services)", field.label, field.services.len());
//! }
//!
//! let field = registry.find_by_id("account_status");
//! assert!(field.is_some());
//! ```

#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod field;
pub mod parsers;
pub mod registry;
pub mod validation;

// Re-exports
pub use catalog::{Catalog, BUILTIN_CATALOG, CATALOG_SCHEMA_VERSION};
pub use error::{ParseError, RegistryError, RegistryResult, ValidationError};
pub use field::{DriftLevel, Field, FieldDefinition, ServiceDefinition, UnknownDriftLevel};
pub use parsers::{CatalogParser, JsonCatalogParser, ParserRegistry, YamlCatalogParser};
pub use registry::FieldRegistry;
pub use validation::FieldValidator;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for registry operations
    pub use crate::{
        DriftLevel, Field, FieldDefinition, FieldRegistry, RegistryError, ServiceDefinition,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
