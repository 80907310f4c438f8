//! CLI configuration resolved from parsed arguments

use clap::{ArgMatches, ValueEnum};
use fielddrift_analyzer::{AnalyzerConfig, InvariantPolicy};
use std::path::PathBuf;

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,

    /// Pretty-printed JSON
    Json,
}

/// Global options shared by every subcommand
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Catalog file; the bundled catalog when `None`
    pub catalog: Option<PathBuf>,

    /// Output format
    pub format: OutputFormat,

    /// Analyzer configuration
    pub analyzer: AnalyzerConfig,

    /// Debug logging requested
    pub verbose: bool,
}

impl CliConfig {
    /// Resolve configuration from top-level matches
    #[must_use]
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let policy = if matches.get_flag("strict-invariants") {
            InvariantPolicy::Strict
        } else {
            InvariantPolicy::SkipWhenEitherEmpty
        };

        Self {
            catalog: matches.get_one::<PathBuf>("catalog").cloned(),
            format: matches
                .get_one::<OutputFormat>("format")
                .copied()
                .unwrap_or_default(),
            analyzer: AnalyzerConfig::new().with_invariant_policy(policy),
            verbose: matches.get_flag("verbose"),
        }
    }

    /// Default log filter directive
    #[inline]
    #[must_use]
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
