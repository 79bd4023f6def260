//! Syllable segmentation over a mapped symbol string.
//!
//! Two passes: split after every nucleus, then place a hyphen in front of
//! each later fragment's onset. A trailing fragment with no vowel of its own
//! is a coda and is glued back on untouched.

use tracing::{debug, debug_span};

use crate::catalog::{onsets, vowel_variants, Onset, BASE_VOWELS};
use crate::error::RespellError;
use crate::unicode::{contains_aligned, find_aligned, grapheme_count, insert_after_each};

pub const SYLLABLE_DELIMITER: char = '-';

/// Intermediate result of [`syllabify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation {
    /// Fragments as produced by nucleus splitting.
    pub fragments: Vec<String>,
    /// Trailing fragment excluded from onset placement.
    pub coda: Option<String>,
    /// Hyphen-delimited syllables.
    pub segmented: String,
}

/// Insert a space after every nucleus occurrence and split on whitespace.
///
/// Nuclei are applied in catalog order, so once the bare vowel has been
/// split off its stress digit, the stressed variant can no longer match.
pub fn split_nuclei(symbols: &str) -> Vec<String> {
    let mut spaced = symbols.to_string();
    for nucleus in vowel_variants() {
        if contains_aligned(&spaced, nucleus) {
            spaced = insert_after_each(&spaced, nucleus, " ");
        }
    }
    spaced.split_whitespace().map(str::to_string).collect()
}

fn has_nucleus(fragment: &str) -> bool {
    BASE_VOWELS.iter().any(|v| contains_aligned(fragment, v))
}

/// Byte offset where the onset of `fragment` begins, if any catalog entry matches.
fn onset_offset(fragment: &str) -> Option<usize> {
    for onset in onsets() {
        match onset {
            Onset::Glide(glide) => {
                if let Some(at) = find_aligned(fragment, glide) {
                    return Some(at);
                }
            }
            Onset::Cluster(cluster) => {
                for vowel in BASE_VOWELS {
                    if let Some(at) = find_aligned(fragment, &format!("{cluster}{vowel}")) {
                        return Some(at);
                    }
                }
            }
        }
    }
    None
}

fn mark_onset(fragment: &str) -> String {
    let at = onset_offset(fragment).unwrap_or(0);
    debug!(fragment, at, "onset");
    let mut marked = String::with_capacity(fragment.len() + 1);
    marked.push_str(&fragment[..at]);
    marked.push(SYLLABLE_DELIMITER);
    marked.push_str(&fragment[at..]);
    marked
}

/// Run both segmentation passes and keep the intermediate fragments.
pub fn syllabify(symbols: &str) -> Result<Segmentation, RespellError> {
    let symbols = symbols.trim();
    let _span = debug_span!("segment", graphemes = grapheme_count(symbols)).entered();
    if symbols.is_empty() {
        return Err(RespellError::EmptyInput);
    }

    let fragments = split_nuclei(symbols);
    debug!(?fragments, "nuclei split");

    let tail_is_coda = fragments.last().is_some_and(|f| !has_nucleus(f));
    let bound = if tail_is_coda {
        fragments.len() - 1
    } else {
        fragments.len()
    };
    let coda = if tail_is_coda && fragments.len() > 1 {
        fragments.last().cloned()
    } else {
        None
    };
    if let Some(coda) = &coda {
        debug!(coda = %coda, "absorbed coda");
    }

    let mut segmented = String::with_capacity(symbols.len() + fragments.len());
    for (i, fragment) in fragments.iter().enumerate() {
        if i == 0 || i >= bound {
            segmented.push_str(fragment);
        } else {
            segmented.push_str(&mark_onset(fragment));
        }
    }

    Ok(Segmentation {
        fragments,
        coda,
        segmented,
    })
}

/// Insert syllable boundaries into a mapped symbol string.
pub fn segment(symbols: &str) -> Result<String, RespellError> {
    syllabify(symbols).map(|s| s.segmented)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cat_is_one_syllable_with_coda() {
        let s = syllabify("kă1t").unwrap();
        assert_eq!(s.fragments, vec!["kă", "1t"]);
        assert_eq!(s.coda.as_deref(), Some("1t"));
        assert_eq!(s.segmented, "kă1t");
    }

    #[test]
    fn butter_splits_before_onset() {
        let s = syllabify("bŭ1tur").unwrap();
        assert_eq!(s.fragments, vec!["bŭ", "1tur"]);
        assert_eq!(s.coda, None);
        assert_eq!(s.segmented, "bŭ1-tur");
    }

    #[test]
    fn stress_digit_is_split_from_its_vowel() {
        assert_eq!(split_nuclei("rā1nkō2t"), vec!["rā", "1nkō", "2t"]);
        assert_eq!(segment("rā1nkō2t").unwrap(), "rā1n-kō2t");
    }

    #[test]
    fn combining_mark_vowels() {
        assert_eq!(
            split_nuclei("kŭmpyo\u{35E}o1tur"),
            vec!["kŭ", "mpyo\u{35E}o", "1tur"]
        );
        assert_eq!(
            segment("kŭmpyo\u{35E}o1tur").unwrap(),
            "kŭm-pyo\u{35E}o1-tur"
        );
    }

    #[test]
    fn short_oo_is_one_nucleus() {
        assert_eq!(split_nuclei("bo\u{35D}o1k"), vec!["bo\u{35D}o", "1k"]);
        assert_eq!(segment("bo\u{35D}o1k").unwrap(), "bo\u{35D}o1k");
    }

    #[test]
    fn glide_cluster_matches_free_standing() {
        assert_eq!(segment("rĕ1skyo\u{35E}o").unwrap(), "rĕ1s-kyo\u{35E}o");
    }

    #[test]
    fn longer_cluster_wins_by_catalog_order() {
        assert_eq!(segment("lŏ1ndrē").unwrap(), "lŏ1n-drē");
        assert_eq!(segment("ĕ1kstrŭ").unwrap(), "ĕ1k-strŭ");
    }

    #[test]
    fn digraph_before_singleton() {
        assert_eq!(segment("sĭ1ngur").unwrap(), "sĭ1-ngur");
        assert_eq!(segment("mĕ1nyo\u{35E}o").unwrap(), "mĕ1n-yo\u{35E}o");
    }

    #[test]
    fn bare_vowel_fragment_gets_boundary_at_start() {
        assert_eq!(segment("ŭ1ŭ").unwrap(), "ŭ-1ŭ");
        assert_eq!(segment("ō1āsĭs").unwrap(), "ō-1ā-sĭs");
    }

    #[test]
    fn monosyllables_have_no_hyphen() {
        for word in ["kă1t", "how1", "strĕ1ngkth", "ē", "kt"] {
            assert!(!segment(word).unwrap().contains('-'), "{word}");
        }
    }

    #[test]
    fn consonant_only_input_passes_through() {
        let s = syllabify("kt").unwrap();
        assert_eq!(s.fragments, vec!["kt"]);
        assert_eq!(s.coda, None);
        assert_eq!(s.segmented, "kt");
    }

    #[test]
    fn complex_trailing_cluster_is_not_resegmented() {
        // Known edge case: the absorbed coda never gets its own onset pass.
        let s = syllabify("tĕ1ksts").unwrap();
        assert_eq!(s.coda.as_deref(), Some("1ksts"));
        assert_eq!(s.segmented, "tĕ1ksts");
    }

    #[test]
    fn blank_input() {
        assert_eq!(segment(""), Err(RespellError::EmptyInput));
        assert_eq!(segment("  \t"), Err(RespellError::EmptyInput));
    }
}
