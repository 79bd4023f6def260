use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Deserialize)]
struct SymbolConfig {
    mappings: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("empty phoneme key")]
    EmptyKey,
    #[error("phoneme key must be ASCII without whitespace: {0:?}")]
    InvalidKey(String),
    #[error("empty symbol for phoneme: {0}")]
    EmptyValue(String),
    #[error("cannot read table: {0}")]
    Io(String),
    #[error("symbol table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a sorted `BTreeMap<phoneme, symbol>`.
///
/// Anything other than a `[mappings]` table of string pairs is rejected by
/// deserialization, so a bare list never reaches validation.
pub fn parse_symbol_toml(toml_str: &str) -> Result<BTreeMap<String, String>, TableError> {
    let config: SymbolConfig =
        toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;
    validate_mappings(&config.mappings)?;
    Ok(config.mappings)
}

/// Check the shape of a phoneme mapping before it is adopted.
pub fn validate_mappings(mappings: &BTreeMap<String, String>) -> Result<(), TableError> {
    if mappings.is_empty() {
        return Err(TableError::Empty);
    }

    for (key, value) in mappings {
        if key.is_empty() {
            return Err(TableError::EmptyKey);
        }
        // Tokens come from a whitespace split, so such a key could never match.
        if !key.is_ascii() || key.chars().any(|c| c.is_ascii_whitespace()) {
            return Err(TableError::InvalidKey(key.clone()));
        }
        if value.is_empty() {
            return Err(TableError::EmptyValue(key.clone()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_toml() {
        let toml = r#"
[mappings]
K = "k"
AE1 = "ă1"
"#;
        let map = parse_symbol_toml(toml).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["K"], "k");
        assert_eq!(map["AE1"], "ă1");
    }

    #[test]
    fn parse_default_toml() {
        let map = parse_symbol_toml(super::super::DEFAULT_TOML).unwrap();
        assert_eq!(map.len(), 92);
    }

    #[test]
    fn error_empty_mappings() {
        let err = parse_symbol_toml("[mappings]\n").unwrap_err();
        assert_eq!(err, TableError::Empty);
    }

    #[test]
    fn error_list_instead_of_table() {
        let err = parse_symbol_toml(r#"mappings = ["k", "ă"]"#).unwrap_err();
        assert!(matches!(err, TableError::Parse(_)));
    }

    #[test]
    fn error_missing_mappings() {
        let err = parse_symbol_toml("K = \"k\"\n").unwrap_err();
        assert!(matches!(err, TableError::Parse(_)));
    }

    #[test]
    fn error_non_ascii_key() {
        let toml = "
[mappings]
\"ă\" = \"a\"
";
        let err = parse_symbol_toml(toml).unwrap_err();
        assert!(matches!(err, TableError::InvalidKey(_)));
    }

    #[test]
    fn error_key_with_space() {
        let toml = r#"
[mappings]
"A E" = "ă"
"#;
        let err = parse_symbol_toml(toml).unwrap_err();
        assert_eq!(err, TableError::InvalidKey("A E".into()));
    }

    #[test]
    fn error_empty_key() {
        let toml = r#"
[mappings]
"" = "ă"
"#;
        let err = parse_symbol_toml(toml).unwrap_err();
        assert_eq!(err, TableError::EmptyKey);
    }

    #[test]
    fn error_empty_value() {
        let toml = r#"
[mappings]
K = ""
"#;
        let err = parse_symbol_toml(toml).unwrap_err();
        assert_eq!(err, TableError::EmptyValue("K".into()));
    }

    #[test]
    fn error_non_string_value() {
        let toml = "
[mappings]
K = 1
";
        let err = parse_symbol_toml(toml).unwrap_err();
        assert!(matches!(err, TableError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_symbol_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, TableError::Parse(_)));
    }
}
