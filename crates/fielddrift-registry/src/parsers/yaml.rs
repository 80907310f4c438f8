//! YAML catalog parser

use crate::catalog::Catalog;
use crate::error::ParseError;
use crate::parsers::CatalogParser;
use std::path::Path;

/// YAML parser
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlCatalogParser;

impl YamlCatalogParser {
    /// Create new YAML parser
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CatalogParser for YamlCatalogParser {
    fn parse(&self, content: &str, origin: &Path) -> Result<Catalog, ParseError> {
        if content.trim().is_empty() {
            return Err(ParseError::syntax_error(origin, "empty YAML document"));
        }

        let catalog: Catalog = serde_yaml::from_str(content)
            .map_err(|e| ParseError::syntax_error(origin, format!("YAML parse error: {e}")))?;

        catalog.check_version()?;
        Ok(catalog)
    }

    fn extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}
