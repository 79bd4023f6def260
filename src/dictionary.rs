//! Batch conversion of a CMU-style pronunciation dictionary.
//!
//! Each record is `WORD<2+ whitespace>PHONEMES...`; output lines are
//! `WORD\tRESPELLING`. What happens to a bad record is the caller's choice.

use std::io::{BufRead, Write};

use serde::Serialize;
use tracing::{debug_span, info, warn};

use crate::error::RespellError;
use crate::respell::Respeller;

const COMMENT_PREFIX: &str = ";;;";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Log the record and keep going.
    #[default]
    Skip,
    /// Stop at the first bad record.
    Abort,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub converted: usize,
    pub skipped: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: not valid UTF-8 or no word/phoneme separator")]
    MalformedRecord { line: usize },
    #[error("line {line}: {word}: {source}")]
    Convert {
        line: usize,
        word: String,
        source: RespellError,
    },
}

/// Split a record into `(word, phonemes)` at the first run of two or more
/// whitespace characters.
pub fn parse_record(line: &str) -> Option<(&str, &str)> {
    let line = line.trim_end();
    let mut chars = line.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !c.is_whitespace() {
            continue;
        }
        let next_is_space = chars.peek().is_some_and(|&(_, n)| n.is_whitespace());
        if next_is_space {
            let word = &line[..i];
            let phonemes = line[i..].trim_start();
            if word.is_empty() || phonemes.is_empty() {
                return None;
            }
            return Some((word, phonemes));
        }
    }
    None
}

fn is_ignored(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX)
}

/// Stream `reader` through `respeller`, writing one output line per converted record.
pub fn convert_dictionary<R: BufRead, W: Write>(
    respeller: &Respeller,
    mut reader: R,
    mut writer: W,
    policy: FailurePolicy,
) -> Result<BatchSummary, DictionaryError> {
    let _span = debug_span!("convert_dictionary", ?policy).entered();
    let mut summary = BatchSummary::default();

    let mut buf = Vec::new();
    let mut line_no = 0;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        let Ok(line) = std::str::from_utf8(&buf) else {
            if policy == FailurePolicy::Abort {
                return Err(DictionaryError::MalformedRecord { line: line_no });
            }
            warn!(line = line_no, "skipping record that is not valid UTF-8");
            summary.skipped += 1;
            continue;
        };
        if is_ignored(line) {
            continue;
        }

        let Some((word, phonemes)) = parse_record(line) else {
            if policy == FailurePolicy::Abort {
                return Err(DictionaryError::MalformedRecord { line: line_no });
            }
            warn!(line = line_no, "skipping malformed record");
            summary.skipped += 1;
            continue;
        };

        match respeller.convert(phonemes) {
            Ok(respelled) => {
                writeln!(writer, "{word}\t{respelled}")?;
                summary.converted += 1;
            }
            Err(source) if policy == FailurePolicy::Abort => {
                return Err(DictionaryError::Convert {
                    line: line_no,
                    word: word.to_string(),
                    source,
                });
            }
            Err(e) => {
                warn!(line = line_no, word, error = %e, "skipping record");
                summary.skipped += 1;
            }
        }
    }

    writer.flush()?;
    info!(
        converted = summary.converted,
        skipped = summary.skipped,
        "dictionary converted"
    );
    Ok(summary)
}
