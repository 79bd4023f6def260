//! Grapheme-aware substring matching.
//!
//! SoundSpelling symbols carry combining marks (the double macron in `o͞o`,
//! the double breve in `o͝o`), so a plain byte search can match a base letter
//! that is really the first half of a larger cluster. Every match here must
//! start and end on an extended grapheme cluster boundary.

use unicode_segmentation::UnicodeSegmentation;

/// Byte offsets of every grapheme boundary in `s`, including `0` and `s.len()`.
pub fn grapheme_boundaries(s: &str) -> Vec<usize> {
    let mut boundaries: Vec<usize> = s.grapheme_indices(true).map(|(i, _)| i).collect();
    boundaries.push(s.len());
    boundaries
}

pub fn grapheme_count(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Byte offsets of the non-overlapping, left-to-right occurrences of `needle`
/// in `haystack` that sit on grapheme boundaries at both ends.
pub fn aligned_match_indices(haystack: &str, needle: &str) -> Vec<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return Vec::new();
    }
    let boundaries = grapheme_boundaries(haystack);
    let on_boundary = |i: usize| boundaries.binary_search(&i).is_ok();

    let mut found = Vec::new();
    let mut pos = 0;
    while let Some(offset) = haystack[pos..].find(needle) {
        let start = pos + offset;
        let end = start + needle.len();
        if on_boundary(start) && on_boundary(end) {
            found.push(start);
            pos = end;
        } else {
            // Misaligned hit: retry from the next char, an aligned one may overlap it.
            pos = start + haystack[start..].chars().next().map_or(1, char::len_utf8);
        }
        if pos >= haystack.len() {
            break;
        }
    }
    found
}

/// First grapheme-aligned occurrence of `needle`.
pub fn find_aligned(haystack: &str, needle: &str) -> Option<usize> {
    aligned_match_indices(haystack, needle).into_iter().next()
}

pub fn contains_aligned(haystack: &str, needle: &str) -> bool {
    find_aligned(haystack, needle).is_some()
}

/// Insert `marker` right after every grapheme-aligned occurrence of `needle`.
pub fn insert_after_each(haystack: &str, needle: &str, marker: &str) -> String {
    let indices = aligned_match_indices(haystack, needle);
    if indices.is_empty() {
        return haystack.to_string();
    }
    let mut out = String::with_capacity(haystack.len() + indices.len() * marker.len());
    let mut last = 0;
    for start in indices {
        let end = start + needle.len();
        out.push_str(&haystack[last..end]);
        out.push_str(marker);
        last = end;
    }
    out.push_str(&haystack[last..]);
    out
}
