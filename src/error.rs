use crate::table::TableError;

/// Failure of a single conversion or table replacement.
///
/// Every stage returns these verbatim; nothing in the pipeline wraps,
/// retries or substitutes a default.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RespellError {
    #[error("phoneme string is empty")]
    EmptyInput,
    #[error("phoneme \"{0}\" was not found")]
    UnknownPhoneme(String),
    #[error("invalid symbol table: {0}")]
    InvalidTable(#[from] TableError),
}
