//! Analyzer configuration

use serde::{Deserialize, Serialize};

/// How invariant lists are compared when one side has none
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvariantPolicy {
    /// Compare only when both canonical and service list at least one
    /// invariant. A canonical list against an empty service list reports
    /// no difference.
    #[default]
    SkipWhenEitherEmpty,

    /// Always compare; an empty list differs from a non-empty one.
    Strict,
}

/// Drift analyzer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Invariant comparison policy
    #[serde(default)]
    pub invariant_policy: InvariantPolicy,
}

impl AnalyzerConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With invariant policy
    #[inline]
    #[must_use]
    pub fn with_invariant_policy(mut self, policy: InvariantPolicy) -> Self {
        self.invariant_policy = policy;
        self
    }
}
