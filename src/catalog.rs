//! Fixed, priority-ordered pattern catalogs used by the syllable segmenter.
//!
//! Order is significant everywhere: the first matching entry wins.

use std::sync::OnceLock;

/// Nucleus symbols in segmentation priority order.
pub const BASE_VOWELS: [&str; 14] = [
    "ŏ",
    "ē",
    "o\u{35E}o",
    "ĕ",
    "ĭ",
    "o\u{35D}o",
    "ŭ",
    "ă",
    "ā",
    "ī",
    "ō",
    "ow",
    "oy",
    "ur",
];

pub const STRESS_SUFFIXES: [&str; 3] = ["", "1", "2"];

/// Glide + rounded vowel clusters, matched anywhere in a fragment.
pub const GLIDE_ONSETS: [&str; 6] = [
    "pyo\u{35E}o",
    "byo\u{35E}o",
    "myo\u{35E}o",
    "fyo\u{35E}o",
    "kyo\u{35E}o",
    "hyo\u{35E}o",
];

/// Consonant onsets, matched only when a base vowel follows directly.
pub const CLUSTER_ONSETS: [&str; 52] = [
    "spl", "spr", "str", "skr", "skw", //
    "tw", "kw", "sw", //
    "pr", "br", "fr", "thr", "tr", "dr", "shr", "kr", "gr", //
    "pl", "bl", "fl", "kl", "gl", "sl", //
    "sp", "sm", "st", "sn", "sk", //
    "ch", "th", "dh", "sh", "zh", "ng", //
    "h", "p", "b", "t", "d", "k", "g", "j", "f", "v", "s", "z", "m", "n", "l", "r", "w", "y",
];

/// All 42 nucleus forms: bare vowels, then stress 1, then stress 2.
pub fn vowel_variants() -> &'static [String] {
    static VARIANTS: OnceLock<Vec<String>> = OnceLock::new();
    VARIANTS.get_or_init(|| {
        STRESS_SUFFIXES
            .iter()
            .flat_map(|suffix| BASE_VOWELS.iter().map(move |v| format!("{v}{suffix}")))
            .collect()
    })
}

/// Every onset in scan order: glide clusters first, then consonant clusters.
pub fn onsets() -> impl Iterator<Item = Onset> {
    GLIDE_ONSETS
        .iter()
        .map(|&s| Onset::Glide(s))
        .chain(CLUSTER_ONSETS.iter().map(|&s| Onset::Cluster(s)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Onset {
    /// Stands alone; already ends in its vowel.
    Glide(&'static str),
    /// Needs one of [`BASE_VOWELS`] directly after it.
    Cluster(&'static str),
}
