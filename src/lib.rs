//! ARPABET to SoundSpelling respelling.
//!
//! A conversion runs three stages over one whitespace-separated phoneme
//! string: symbol mapping ([`mapper`]), syllable segmentation ([`segment`])
//! and stress rendering ([`stress`]).
//!
//! ```
//! assert_eq!(arpa_respell::convert("B AH1 T ER0").unwrap(), "ˈBŬ-tur");
//! ```

pub mod catalog;
pub mod dictionary;
pub mod error;
pub mod mapper;
pub mod respell;
pub mod segment;
pub mod stress;
pub mod table;
pub mod trace_init;
pub mod unicode;

#[cfg(test)]
mod tests;

pub use error::RespellError;
pub use respell::{convert, ConversionTrace, Respeller};
pub use table::{SymbolTable, TableError};
