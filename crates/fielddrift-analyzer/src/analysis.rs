//! Analysis result types
//!
//! [`Analysis`] is the complete contract between the analyzer and any
//! rendering layer. It borrows the analyzed field and owns nothing else of
//! interest, so it is cheap to build per query and discard.

use fielddrift_registry::{DriftLevel, ServiceDefinition};
use serde::{Serialize, Serializer};
use std::fmt::{self, Display, Formatter};

/// Fallback signal text when no mismatch was counted
pub const NO_CRITICAL_MISMATCHES: &str = "No critical mismatches detected in sample";

/// Drift analysis of one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis<'a> {
    /// Number of service definitions analyzed
    pub service_count: usize,

    /// Highest authored drift level across services (`Low` if none)
    pub overall_drift_level: DriftLevel,

    /// Per-service results, in input order
    pub per_service_analysis: Vec<ServiceAnalysis<'a>>,

    /// Totals across services
    pub counts: MismatchCounts,

    /// Human-readable summary, in fixed order
    pub key_signals: Vec<KeySignal>,
}

impl Analysis<'_> {
    /// Key signals rendered as text
    #[must_use]
    pub fn key_signal_texts(&self) -> Vec<String> {
        self.key_signals.iter().map(ToString::to_string).collect()
    }

    /// Look up the analysis of a service by name
    #[must_use]
    pub fn service(&self, name: &str) -> Option<&ServiceAnalysis<'_>> {
        self.per_service_analysis
            .iter()
            .find(|entry| entry.service.name == name)
    }
}

/// Mismatch flags for one service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceAnalysis<'a> {
    /// The analyzed service definition
    pub service: &'a ServiceDefinition,

    /// Trimmed type strings differ
    pub type_mismatch: bool,

    /// Enumerated value sets differ
    pub enum_mismatch: bool,

    /// Invariant lists differ
    pub invariant_mismatch: bool,

    /// Value-level enum difference; `None` when the canonical definition has
    /// no enumeration
    pub enum_diff: Option<EnumDiff>,
}

impl ServiceAnalysis<'_> {
    /// Whether any of the three checks reported a mismatch
    #[inline]
    #[must_use]
    pub fn has_mismatch(&self) -> bool {
        self.type_mismatch || self.enum_mismatch || self.invariant_mismatch
    }
}

/// Enumerated values present on only one side
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EnumDiff {
    /// In the service, absent from canonical (service order)
    pub added: Vec<String>,

    /// In canonical, absent from the service (canonical order)
    pub missing: Vec<String>,
}

impl EnumDiff {
    /// Whether the two value sets differ
    #[inline]
    #[must_use]
    pub fn is_drifted(&self) -> bool {
        !self.added.is_empty() || !self.missing.is_empty()
    }
}

/// Number of services reporting each kind of mismatch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MismatchCounts {
    /// Services with a type mismatch
    pub type_mismatches: usize,

    /// Services with enum drift
    pub enum_drifts: usize,

    /// Services with invariant differences
    pub invariant_differences: usize,
}

impl MismatchCounts {
    /// Whether no mismatch of any kind was counted
    #[inline]
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.type_mismatches == 0 && self.enum_drifts == 0 && self.invariant_differences == 0
    }

    /// Derive key signals in fixed order: type, enum, invariant, fallback
    #[must_use]
    pub fn key_signals(&self) -> Vec<KeySignal> {
        let mut signals = Vec::with_capacity(3);
        if self.type_mismatches > 0 {
            signals.push(KeySignal::TypeMismatch(self.type_mismatches));
        }
        if self.enum_drifts > 0 {
            signals.push(KeySignal::EnumDrift(self.enum_drifts));
        }
        if self.invariant_differences > 0 {
            signals.push(KeySignal::InvariantDifference(self.invariant_differences));
        }
        if signals.is_empty() {
            signals.push(KeySignal::NoCriticalMismatches);
        }
        signals
    }
}

/// Short summary line about mismatches across services
///
/// Serialized as its display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeySignal {
    /// `"<n> type mismatch"`, `"<n> type mismatches"` for n > 1
    TypeMismatch(usize),

    /// `"<n> enum drift"`
    EnumDrift(usize),

    /// `"<n> invariant difference"`
    InvariantDifference(usize),

    /// No mismatch of any kind
    NoCriticalMismatches,
}

impl Display for KeySignal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch(n) if *n > 1 => write!(f, "{n} type mismatches"),
            Self::TypeMismatch(n) => write!(f, "{n} type mismatch"),
            // Enum and invariant counts keep the singular noun.
            Self::EnumDrift(n) => write!(f, "{n} enum drift"),
            Self::InvariantDifference(n) => write!(f, "{n} invariant difference"),
            Self::NoCriticalMismatches => f.write_str(NO_CRITICAL_MISMATCHES),
        }
    }
}

impl Serialize for KeySignal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
