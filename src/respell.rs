//! Conversion entrypoint: phoneme mapping, segmentation, stress rendering.

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::error::RespellError;
use crate::mapper::{map_phonemes, tokenize};
use crate::segment::syllabify;
use crate::stress::annotate;
use crate::table::SymbolTable;

/// Every intermediate value of one conversion, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionTrace {
    pub tokens: Vec<String>,
    pub mapped: String,
    pub fragments: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coda: Option<String>,
    pub segmented: String,
    pub respelled: String,
}

/// Converts ARPABET phoneme strings with a fixed symbol table.
///
/// Cloning is cheap; clones share the table.
#[derive(Debug, Clone)]
pub struct Respeller {
    table: Arc<SymbolTable>,
}

/// The embedded default table, parsed once and shared by every default respeller.
fn shared_default_table() -> Arc<SymbolTable> {
    static DEFAULT: OnceLock<Arc<SymbolTable>> = OnceLock::new();
    Arc::clone(DEFAULT.get_or_init(|| Arc::new(SymbolTable::default_table())))
}

impl Default for Respeller {
    fn default() -> Self {
        Self {
            table: shared_default_table(),
        }
    }
}

impl Respeller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(table: SymbolTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    /// Swap in a new table. The current one is kept if `mappings` is rejected.
    pub fn replace_table(&mut self, mappings: BTreeMap<String, String>) -> Result<(), RespellError> {
        let table = SymbolTable::new(mappings)?;
        debug!(mappings = table.len(), "symbol table replaced");
        self.table = Arc::new(table);
        Ok(())
    }

    pub fn replace_table_toml(&mut self, toml_str: &str) -> Result<(), RespellError> {
        let table = SymbolTable::from_toml_str(toml_str)?;
        debug!(mappings = table.len(), "symbol table replaced");
        self.table = Arc::new(table);
        Ok(())
    }

    /// Convert one whitespace-separated phoneme string to its respelling.
    pub fn convert(&self, phonemes: &str) -> Result<String, RespellError> {
        convert_with_table(&self.table, phonemes)
    }

    /// Same pipeline as [`Respeller::convert`], keeping every stage's output.
    pub fn explain(&self, phonemes: &str) -> Result<ConversionTrace, RespellError> {
        let _span = debug_span!("explain", phonemes).entered();
        let tokens = tokenize(phonemes)?;
        let mapped = map_phonemes(&self.table, &tokens)?;
        let segmentation = syllabify(&mapped)?;
        let respelled = annotate(&segmentation.segmented);
        Ok(ConversionTrace {
            tokens: tokens.into_iter().map(str::to_string).collect(),
            mapped,
            fragments: segmentation.fragments,
            coda: segmentation.coda,
            segmented: segmentation.segmented,
            respelled,
        })
    }
}

impl From<SymbolTable> for Respeller {
    fn from(table: SymbolTable) -> Self {
        Self::with_table(table)
    }
}

/// Convert with the process-wide default table.
pub fn convert(phonemes: &str) -> Result<String, RespellError> {
    convert_with_table(SymbolTable::global(), phonemes)
}

fn convert_with_table(table: &SymbolTable, phonemes: &str) -> Result<String, RespellError> {
    let _span = debug_span!("convert", phonemes).entered();
    let tokens = tokenize(phonemes)?;
    let mapped = map_phonemes(table, &tokens)?;
    let segmented = syllabify(&mapped)?.segmented;
    Ok(annotate(&segmented))
}
