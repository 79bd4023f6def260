use tracing::{debug, debug_span};

use crate::error::RespellError;
use crate::table::SymbolTable;

/// Split a phoneme string on whitespace runs, failing on blank input.
pub fn tokenize(phonemes: &str) -> Result<Vec<&str>, RespellError> {
    let tokens: Vec<&str> = phonemes.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(RespellError::EmptyInput);
    }
    Ok(tokens)
}

/// Concatenate the table symbols for `tokens`, in order, with no delimiter.
///
/// The first token missing from the table fails the whole call.
pub fn map_phonemes(table: &SymbolTable, tokens: &[&str]) -> Result<String, RespellError> {
    let _span = debug_span!("map_phonemes", tokens = tokens.len()).entered();
    if tokens.is_empty() {
        return Err(RespellError::EmptyInput);
    }

    let mut symbols = String::new();
    for &token in tokens {
        let symbol = table
            .get(token)
            .ok_or_else(|| RespellError::UnknownPhoneme(token.to_string()))?;
        symbols.push_str(symbol);
    }
    debug!(symbols = %symbols, "mapped");
    Ok(symbols)
}
