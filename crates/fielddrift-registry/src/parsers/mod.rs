//! Catalog parsers for different file formats
//!
//! Provides parsing from external catalog files into [`Catalog`] documents:
//! - YAML via serde_yaml
//! - JSON via serde_json

use crate::catalog::Catalog;
use crate::error::ParseError;
use std::path::Path;

mod json;
mod yaml;

pub use json::JsonCatalogParser;
pub use yaml::YamlCatalogParser;

/// Parser trait for converting catalog source text into a [`Catalog`]
///
/// Implement this trait to add support for new file formats.
pub trait CatalogParser: Send + Sync + 'static {
    /// Parse content string into a catalog
    ///
    /// `origin` is only used for error reporting.
    ///
    /// # Errors
    /// Returns [`ParseError::SyntaxError`] on malformed input and
    /// [`ParseError::UnsupportedVersion`] on a schema mismatch.
    fn parse(&self, content: &str, origin: &Path) -> Result<Catalog, ParseError>;

    /// Check if this parser can handle the given path
    fn can_parse(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions().contains(&ext))
    }

    /// Supported file extensions (without dot)
    fn extensions(&self) -> &[&str];

    /// Parser priority (higher = tried first when multiple parsers match)
    fn priority(&self) -> i32 {
        0
    }
}

/// Parser registration keyed by file extension
pub struct ParserRegistry {
    parsers: Vec<Box<dyn CatalogParser>>,
}

impl Default for ParserRegistry {
    fn default() -> Self {
        default_parsers()
    }
}

impl std::fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParserRegistry")
            .field("parser_count", &self.parsers.len())
            .field("extensions", &self.all_extensions())
            .finish()
    }
}

impl ParserRegistry {
    /// Create empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            parsers: Vec::new(),
        }
    }

    /// Register a parser
    pub fn register<P: CatalogParser>(&mut self, parser: P) {
        self.parsers.push(Box::new(parser));
        // Sort by priority (higher first)
        self.parsers.sort_by_key(|p| std::cmp::Reverse(p.priority()));
    }

    /// Find parser for path
    #[must_use]
    pub fn find_for_path(&self, path: &Path) -> Option<&dyn CatalogParser> {
        self.parsers.iter().find(|p| p.can_parse(path)).map(|p| &**p)
    }

    /// Parse `content` with the parser matching `path`
    ///
    /// # Errors
    /// Returns [`ParseError::NoParserForExtension`] when no parser matches,
    /// otherwise whatever the selected parser reports.
    pub fn parse(&self, content: &str, path: &Path) -> Result<Catalog, ParseError> {
        let parser = self.find_for_path(path).ok_or_else(|| {
            ParseError::NoParserForExtension(
                path.extension()
                    .and_then(|e| e.to_str())
                    .unwrap_or_default()
                    .to_string(),
            )
        })?;
        parser.parse(content, path)
    }

    /// Get all registered extensions
    #[must_use]
    pub fn all_extensions(&self) -> Vec<&str> {
        self.parsers
            .iter()
            .flat_map(|p| p.extensions())
            .copied()
            .collect()
    }
}

/// Create default parser registry with built-in parsers
#[inline]
#[must_use]
pub fn default_parsers() -> ParserRegistry {
    let mut registry = ParserRegistry::new();
    registry.register(YamlCatalogParser);
    registry.register(JsonCatalogParser);
    registry
}
