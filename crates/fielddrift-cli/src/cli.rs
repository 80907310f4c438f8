//! Command-line definition

use crate::config::OutputFormat;
use clap::{value_parser, Arg, ArgAction, Command};
use fielddrift_registry::DriftLevel;
use std::path::PathBuf;

/// Build the `field-drift` command
#[must_use]
pub fn build_cli() -> Command {
    Command::new("field-drift")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compare canonical field definitions against their service representations")
        .subcommand_required(true)
        .arg(
            Arg::new("catalog")
                .long("catalog")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Catalog file (.yaml, .yml or .json); defaults to the bundled sample"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .global(true)
                .default_value("text")
                .value_parser(value_parser!(OutputFormat))
                .help("Output format"),
        )
        .arg(
            Arg::new("strict-invariants")
                .long("strict-invariants")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Report invariant differences even when one side lists none"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
        .subcommand(Command::new("list").about("List catalog fields"))
        .subcommand(
            Command::new("show")
                .about("Show the drift analysis of one field")
                .arg(
                    Arg::new("id")
                        .required(true)
                        .help("Field id"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Analyze every field and summarize overall drift")
                .arg(
                    Arg::new("fail-on")
                        .long("fail-on")
                        .value_parser(value_parser!(DriftLevel))
                        .help("Exit non-zero when any field reaches this drift level"),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        build_cli().debug_assert();
    }

    #[test]
    fn show_requires_id() {
        let result = build_cli().try_get_matches_from(["field-drift", "show"]);
        assert!(result.is_err());
    }

    #[test]
    fn fail_on_parses_drift_level() {
        let matches = build_cli()
            .try_get_matches_from(["field-drift", "check", "--fail-on", "medium"])
            .unwrap();
        let (_, args) = matches.subcommand().unwrap();

        assert_eq!(
            args.get_one::<DriftLevel>("fail-on"),
            Some(&DriftLevel::Medium)
        );
    }

    #[test]
    fn fail_on_rejects_unknown_level() {
        let result =
            build_cli().try_get_matches_from(["field-drift", "check", "--fail-on", "severe"]);
        assert!(result.is_err());
    }
}
