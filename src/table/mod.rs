//! ARPABET-to-SoundSpelling symbol table.
//!
//! The default table is embedded TOML; custom tables go through the same
//! parser and validation. A table is immutable once built: replacing it
//! means building a new one.

mod config;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

pub use config::{parse_symbol_toml, validate_mappings, TableError};

pub const DEFAULT_TOML: &str = include_str!("default_symbols.toml");

static GLOBAL: OnceLock<SymbolTable> = OnceLock::new();

/// Validated phoneme → symbol mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    mappings: BTreeMap<String, String>,
}

impl SymbolTable {
    /// Build a table from an explicit mapping, rejecting empty or malformed ones.
    pub fn new(mappings: BTreeMap<String, String>) -> Result<Self, TableError> {
        validate_mappings(&mappings)?;
        Ok(Self { mappings })
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, TableError> {
        let mappings = parse_symbol_toml(toml_str)?;
        Ok(Self { mappings })
    }

    pub fn from_toml_file(path: &Path) -> Result<Self, TableError> {
        let content = fs::read_to_string(path)
            .map_err(|e| TableError::Io(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// A freshly parsed copy of the embedded default table.
    pub fn default_table() -> Self {
        Self::from_toml_str(DEFAULT_TOML).expect("embedded symbol TOML must be valid")
    }

    /// Returns the embedded default table TOML content.
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Install a custom table as the process-wide one.
    ///
    /// Must run before the first `global()` call; once the global table
    /// exists (default or custom) this fails with `AlreadyInitialized`.
    pub fn init_custom(toml_content: String) -> Result<(), TableError> {
        let table = Self::from_toml_str(&toml_content)?;
        GLOBAL
            .set(table)
            .map_err(|_| TableError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static SymbolTable {
        GLOBAL.get_or_init(Self::default_table)
    }

    /// Exact, case-sensitive lookup of a single ARPABET token.
    pub fn get(&self, phoneme: &str) -> Option<&str> {
        self.mappings.get(phoneme).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.mappings.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize back to the `[mappings]` TOML layout.
    pub fn to_toml(&self) -> String {
        let mut table = toml::Table::new();
        let mappings = self
            .mappings
            .iter()
            .map(|(k, v)| (k.clone(), toml::Value::String(v.clone())))
            .collect::<toml::Table>();
        table.insert("mappings".to_string(), toml::Value::Table(mappings));
        table.to_string()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::default_table()
    }
}

impl TryFrom<BTreeMap<String, String>> for SymbolTable {
    type Error = TableError;

    fn try_from(mappings: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        Self::new(mappings)
    }
}
