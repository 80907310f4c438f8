//! JSON catalog parser

use crate::catalog::Catalog;
use crate::error::ParseError;
use crate::parsers::CatalogParser;
use std::path::Path;

/// JSON parser
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCatalogParser;

impl CatalogParser for JsonCatalogParser {
    fn parse(&self, content: &str, origin: &Path) -> Result<Catalog, ParseError> {
        let catalog: Catalog = serde_json::from_str(content).map_err(|e| {
            ParseError::syntax_error(
                origin,
                format!("JSON parse error at line {}, column {}: {e}", e.line(), e.column()),
            )
        })?;

        catalog.check_version()?;
        Ok(catalog)
    }

    fn extensions(&self) -> &[&str] {
        &["json"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::DriftLevel;

    #[test]
    fn json_parser_valid() {
        let content = r#"{
            "version": 1,
            "fields": [{
                "id": "account_status",
                "label": "account_status",
                "canonical": {"type": "string (enum)", "enums": ["ACTIVE", "CLOSED"]},
                "services": [
                    {"name": "Billing Service", "type": "string (enum)", "driftLevel": "medium"}
                ]
            }]
        }"#;

        let catalog = JsonCatalogParser.parse(content, Path::new("fields.json")).unwrap();

        assert_eq!(catalog.fields[0].services[0].drift_level, DriftLevel::Medium);
    }

    #[test]
    fn json_parser_invalid() {
        let result = JsonCatalogParser.parse("{not json", Path::new("fields.json"));
        assert!(matches!(result, Err(ParseError::SyntaxError { .. })));
    }

    #[test]
    fn json_parser_rejects_unknown_drift_level() {
        let content = r#"{
            "version": 1,
            "fields": [{
                "id": "x",
                "label": "x",
                "canonical": {"type": "string"},
                "services": [{"name": "A", "type": "string", "drift_level": "severe"}]
            }]
        }"#;

        let result = JsonCatalogParser.parse(content, Path::new("fields.json"));
        assert!(matches!(result, Err(ParseError::SyntaxError { .. })));
    }

    #[test]
    fn json_parser_extensions() {
        assert_eq!(JsonCatalogParser.extensions(), &["json"]);
    }
}
