//! Field data model
//!
//! Provides [`Field`], its canonical [`FieldDefinition`], and the
//! per-service [`ServiceDefinition`] variants compared against it.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Authored drift classification of a service representation
///
/// Totally ordered: `Low < Medium < High`. The analyzer never derives
/// this value from mismatches; it only reads it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DriftLevel {
    /// Aligned or nearly aligned with the canonical definition
    #[default]
    Low,

    /// Partially diverged
    Medium,

    /// Substantially diverged
    High,
}

impl DriftLevel {
    /// Lowercase identifier (`low`, `medium`, `high`)
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Human-readable label (`Low drift`, ...)
    #[inline]
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low drift",
            Self::Medium => "Medium drift",
            Self::High => "High drift",
        }
    }
}

impl Display for DriftLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unrecognised drift level text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown drift level: '{0}' (expected low, medium or high)")]
pub struct UnknownDriftLevel(pub String);

impl FromStr for DriftLevel {
    type Err = UnknownDriftLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(UnknownDriftLevel(other.to_string())),
        }
    }
}

/// One representation of a field: canonical or service-scoped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Free-text description (informational)
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// Free-text type name, compared by trimmed string equality
    #[serde(rename = "type")]
    pub field_type: String,

    /// Enumerated values; empty means no enumeration constraint
    #[serde(default, deserialize_with = "null_as_default")]
    pub enums: Vec<String>,

    /// Ordered invariant statements
    #[serde(default, deserialize_with = "null_as_default")]
    pub invariants: Vec<String>,

    /// Example values (informational, never compared)
    #[serde(default, deserialize_with = "null_as_default")]
    pub examples: Vec<String>,
}

/// Treat an explicit null like an absent key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl FieldDefinition {
    /// Create definition with the given type and no constraints
    #[inline]
    #[must_use]
    pub fn new(field_type: impl Into<String>) -> Self {
        Self {
            description: String::new(),
            field_type: field_type.into(),
            enums: Vec::new(),
            invariants: Vec::new(),
            examples: Vec::new(),
        }
    }

    /// With description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// With enumerated values
    #[must_use]
    pub fn with_enums<I, S>(mut self, enums: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enums = enums.into_iter().map(Into::into).collect();
        self
    }

    /// With invariant statements
    #[must_use]
    pub fn with_invariants<I, S>(mut self, invariants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.invariants = invariants.into_iter().map(Into::into).collect();
        self
    }

    /// With example values
    #[must_use]
    pub fn with_examples<I, S>(mut self, examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.examples = examples.into_iter().map(Into::into).collect();
        self
    }

    /// Whether an enumeration constraint is present
    #[inline]
    #[must_use]
    pub fn has_enums(&self) -> bool {
        !self.enums.is_empty()
    }
}

/// Service-specific representation of a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawServiceDefinition")]
pub struct ServiceDefinition {
    /// Service name, unique within its field
    pub name: String,

    /// What the service does with the field
    pub role: String,

    /// The service's own definition of the field
    #[serde(flatten)]
    pub definition: FieldDefinition,

    /// Authored drift classification
    pub drift_level: DriftLevel,

    /// Free-text notes about the divergence
    pub notes: String,
}

// Flattening buffers scalars, so the definition keys are read inline here.
// Plain YAML scalars like `64` then reach `String` the same way as in the
// canonical definition.
#[derive(Deserialize)]
struct RawServiceDefinition {
    name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    role: String,
    #[serde(default, deserialize_with = "null_as_default")]
    description: String,
    #[serde(rename = "type")]
    field_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    enums: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    invariants: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    examples: Vec<String>,
    #[serde(default, alias = "driftLevel", deserialize_with = "null_as_default")]
    drift_level: DriftLevel,
    #[serde(default, deserialize_with = "null_as_default")]
    notes: String,
}

impl From<RawServiceDefinition> for ServiceDefinition {
    fn from(raw: RawServiceDefinition) -> Self {
        Self {
            name: raw.name,
            role: raw.role,
            definition: FieldDefinition {
                description: raw.description,
                field_type: raw.field_type,
                enums: raw.enums,
                invariants: raw.invariants,
                examples: raw.examples,
            },
            drift_level: raw.drift_level,
            notes: raw.notes,
        }
    }
}

impl ServiceDefinition {
    /// Create service definition
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, definition: FieldDefinition) -> Self {
        Self {
            name: name.into(),
            role: String::new(),
            definition,
            drift_level: DriftLevel::Low,
            notes: String::new(),
        }
    }

    /// With role
    #[inline]
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// With drift level
    #[inline]
    #[must_use]
    pub fn with_drift_level(mut self, drift_level: DriftLevel) -> Self {
        self.drift_level = drift_level;
        self
    }

    /// With notes
    #[inline]
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Type name of the service definition
    #[inline]
    #[must_use]
    pub fn field_type(&self) -> &str {
        &self.definition.field_type
    }
}

/// A data field with one canonical definition and its service variants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Unique lookup key
    pub id: String,

    /// Display name
    pub label: String,

    /// Field-level summary
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// Reference definition
    pub canonical: FieldDefinition,

    /// Service definitions in authored order
    #[serde(default, deserialize_with = "null_as_default")]
    pub services: Vec<ServiceDefinition>,
}

impl Field {
    /// Create field whose label equals its id
    #[must_use]
    pub fn new(id: impl Into<String>, canonical: FieldDefinition) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            description: String::new(),
            canonical,
            services: Vec::new(),
        }
    }

    /// With label
    #[inline]
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// With description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append a service definition
    #[inline]
    #[must_use]
    pub fn with_service(mut self, service: ServiceDefinition) -> Self {
        self.services.push(service);
        self
    }

    /// Look up a service by name
    #[must_use]
    pub fn service(&self, name: &str) -> Option<&ServiceDefinition> {
        self.services.iter().find(|s| s.name == name)
    }
}
