//! Subcommand execution
//!
//! The presentation layer holds the registry and analyzer it was given and
//! invokes them on demand; there is no process-wide state.

use crate::config::{CliConfig, OutputFormat};
use crate::report::{render_text, DriftSummary, FieldReport, FieldSummary};
use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use fielddrift_analyzer::DriftAnalyzer;
use fielddrift_registry::{DriftLevel, FieldRegistry};
use std::io::Write;

/// Result of a successful run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Command completed
    Success,

    /// `check` found a field at or above the `--fail-on` level
    ThresholdReached,
}

impl Outcome {
    /// Process exit code
    #[inline]
    #[must_use]
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::ThresholdReached => 1,
        }
    }
}

/// Load the configured catalog, or the bundled one
///
/// # Errors
/// Returns the load error with the catalog path as context.
pub fn load_registry(config: &CliConfig) -> Result<FieldRegistry> {
    match &config.catalog {
        Some(path) => FieldRegistry::load(path)
            .with_context(|| format!("failed to load catalog {}", path.display())),
        None => FieldRegistry::builtin().context("failed to load bundled catalog"),
    }
}

/// Registry and analyzer bound to one output format
#[derive(Debug)]
pub struct App {
    registry: FieldRegistry,
    analyzer: DriftAnalyzer,
    format: OutputFormat,
}

impl App {
    /// Create app from its collaborators
    #[must_use]
    pub fn new(registry: FieldRegistry, analyzer: DriftAnalyzer, format: OutputFormat) -> Self {
        Self {
            registry,
            analyzer,
            format,
        }
    }

    /// Build app from resolved configuration
    ///
    /// # Errors
    /// Fails if the catalog cannot be loaded.
    pub fn from_config(config: &CliConfig) -> Result<Self> {
        let registry = load_registry(config)?;
        Ok(Self::new(
            registry,
            DriftAnalyzer::new(config.analyzer),
            config.format,
        ))
    }

    /// Dispatch a parsed subcommand
    ///
    /// # Errors
    /// Fails on unknown field ids and on output errors.
    pub fn run<W: Write>(&self, matches: &ArgMatches, out: &mut W) -> Result<Outcome> {
        match matches.subcommand() {
            Some(("list", _)) => self.list(out),
            Some(("show", args)) => {
                let id = args
                    .get_one::<String>("id")
                    .context("missing field id")?;
                self.show(id, out)
            }
            Some(("check", args)) => {
                let fail_on = args.get_one::<DriftLevel>("fail-on").copied();
                self.check(fail_on, out)
            }
            Some((other, _)) => bail!("unknown command: {other}"),
            None => bail!("no command given"),
        }
    }

    /// List catalog fields
    ///
    /// # Errors
    /// Fails on output errors.
    pub fn list<W: Write>(&self, out: &mut W) -> Result<Outcome> {
        if self.registry.is_empty() {
            tracing::warn!("Catalog contains no fields");
        }

        match self.format {
            OutputFormat::Text => {
                for field in self.registry.list() {
                    writeln!(
                        out,
                        "{:<24} {:<24} {} services",
                        field.id,
                        field.label,
                        field.services.len()
                    )?;
                }
            }
            OutputFormat::Json => {
                let summaries: Vec<_> = self
                    .registry
                    .list()
                    .map(|field| FieldSummary {
                        id: &field.id,
                        label: &field.label,
                        service_count: field.services.len(),
                    })
                    .collect();
                writeln!(out, "{}", serde_json::to_string_pretty(&summaries)?)?;
            }
        }
        Ok(Outcome::Success)
    }

    /// Show the analysis of one field
    ///
    /// # Errors
    /// Fails if no field has the given id.
    pub fn show<W: Write>(&self, id: &str, out: &mut W) -> Result<Outcome> {
        let Some(field) = self.registry.find_by_id(id) else {
            bail!("no field with id '{id}' in catalog");
        };
        let analysis = self.analyzer.analyze(field);

        match self.format {
            OutputFormat::Text => write!(out, "{}", render_text(field, &analysis))?,
            OutputFormat::Json => writeln!(
                out,
                "{}",
                serde_json::to_string_pretty(&FieldReport::new(field, &analysis))?
            )?,
        }
        Ok(Outcome::Success)
    }

    /// Summarize overall drift for every field
    ///
    /// # Errors
    /// Fails on output errors.
    pub fn check<W: Write>(&self, fail_on: Option<DriftLevel>, out: &mut W) -> Result<Outcome> {
        let summaries: Vec<_> = self
            .registry
            .list()
            .map(|field| {
                let analysis = self.analyzer.analyze(field);
                DriftSummary {
                    id: &field.id,
                    overall_drift_level: analysis.overall_drift_level,
                    key_signals: analysis.key_signal_texts(),
                }
            })
            .collect();

        match self.format {
            OutputFormat::Text => {
                for summary in &summaries {
                    writeln!(
                        out,
                        "{}: {} · {}",
                        summary.id,
                        summary.overall_drift_level.label(),
                        summary.key_signals.join(" · ")
                    )?;
                }
            }
            OutputFormat::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(&summaries)?)?;
            }
        }

        let reached = fail_on.is_some_and(|threshold| {
            summaries
                .iter()
                .any(|summary| summary.overall_drift_level >= threshold)
        });
        if reached {
            tracing::info!("Drift threshold reached");
            Ok(Outcome::ThresholdReached)
        } else {
            Ok(Outcome::Success)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fielddrift_registry::{Field, FieldDefinition, ServiceDefinition};

    fn app(format: OutputFormat) -> App {
        App::new(
            FieldRegistry::builtin().unwrap(),
            DriftAnalyzer::default(),
            format,
        )
    }

    fn output(run: impl FnOnce(&mut Vec<u8>) -> Result<Outcome>) -> (Outcome, String) {
        let mut buf = Vec::new();
        let outcome = run(&mut buf).unwrap();
        (outcome, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn list_prints_fields_in_order() {
        let app = app(OutputFormat::Text);
        let (outcome, text) = output(|out| app.list(out));

        assert_eq!(outcome, Outcome::Success);
        let ids: Vec<_> = text
            .lines()
            .filter_map(|line| line.split_whitespace().next())
            .collect();
        assert_eq!(ids, ["account_status", "plan_tier", "event_timestamp"]);
    }

    #[test]
    fn show_unknown_id_fails() {
        let app = app(OutputFormat::Text);
        let result = app.show("missing", &mut Vec::new());

        assert!(result.unwrap_err().to_string().contains("no field with id 'missing'"));
    }

    #[test]
    fn check_threshold() {
        let app = app(OutputFormat::Text);

        let (outcome, _) = output(|out| app.check(Some(DriftLevel::High), out));
        assert_eq!(outcome, Outcome::ThresholdReached);

        let (outcome, text) = output(|out| app.check(None, out));
        assert_eq!(outcome, Outcome::Success);
        assert!(text.contains("plan_tier: High drift · 1 type mismatch"));
    }

    #[test]
    fn check_below_threshold_succeeds() {
        let field = Field::new("calm", FieldDefinition::new("string")).with_service(
            ServiceDefinition::new("A", FieldDefinition::new("string"))
                .with_drift_level(DriftLevel::Medium),
        );
        let app = App::new(
            FieldRegistry::from_fields(vec![field]).unwrap(),
            DriftAnalyzer::default(),
            OutputFormat::Text,
        );

        let (outcome, _) = output(|out| app.check(Some(DriftLevel::High), out));
        assert_eq!(outcome, Outcome::Success);
        assert_eq!(outcome.exit_code(), 0);
    }

    #[test]
    fn list_json() {
        let app = app(OutputFormat::Json);
        let (_, text) = output(|out| app.list(out));

        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json[1]["id"], "plan_tier");
        assert_eq!(json[1]["service_count"], 3);
    }
}
