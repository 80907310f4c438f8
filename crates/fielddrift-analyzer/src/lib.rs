//! Field Drift Analyzer
//!
//! Pure comparison of a field's service definitions against its canonical
//! definition.
//!
//! # Checks
//!
//! For every service, independently:
//! - **type**: trimmed type strings differ
//! - **enum**: value sets differ (only when canonical enumerates values)
//! - **invariant**: invariant lists differ (by default only when both
//!   sides list invariants; see [`InvariantPolicy`])
//!
//! The overall drift level is the maximum of the services' authored levels.
//!
//! # Example
//!
//! ```rust
//! use fielddrift_analyzer::analyze;
//! use fielddrift_registry::FieldRegistry;
//!
//! let registry = FieldRegistry::builtin().unwrap();
//! let field = registry.find_by_id("account_status").unwrap();
//!
//! let analysis = analyze(field);
//! assert_eq!(analysis.service_count, 3);
//! assert!(analysis.service("Billing Service").unwrap().enum_mismatch);
//! ```

#![warn(missing_docs)]

pub mod analysis;
pub mod analyzer;
pub mod config;

// Re-exports
pub use analysis::{
    Analysis, EnumDiff, KeySignal, MismatchCounts, ServiceAnalysis, NO_CRITICAL_MISMATCHES,
};
pub use analyzer::{analyze, DriftAnalyzer};
pub use config::{AnalyzerConfig, InvariantPolicy};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for drift analysis
    pub use crate::{
        analyze, Analysis, AnalyzerConfig, DriftAnalyzer, InvariantPolicy, KeySignal,
        ServiceAnalysis,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
