//! Field Drift CLI
//!
//! Terminal front end over the registry and analyzer: lists catalog fields,
//! shows one field's comparison, and checks the whole catalog against a
//! drift threshold.

#![warn(missing_docs)]

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod report;

pub use app::{load_registry, App, Outcome};
pub use cli::build_cli;
pub use config::{CliConfig, OutputFormat};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
