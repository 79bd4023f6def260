use tracing::debug_span;

use crate::segment::SYLLABLE_DELIMITER;

/// Marker placed in front of a primary-stressed syllable.
pub const PRIMARY_STRESS_MARKER: char = '\u{2C8}';

const PRIMARY: char = '1';
const SECONDARY: char = '2';

/// Rewrite one syllable according to the stress digit it carries.
///
/// `1` wins over `2`: a syllable holding both keeps its `2`.
pub fn annotate_syllable(syllable: &str) -> String {
    if syllable.contains(PRIMARY) {
        let bare = syllable.replace(PRIMARY, "");
        format!("{PRIMARY_STRESS_MARKER}{bare}").to_uppercase()
    } else if syllable.contains(SECONDARY) {
        syllable.replace(SECONDARY, "").to_uppercase()
    } else {
        syllable.to_string()
    }
}

/// Apply stress rendering to every syllable of a hyphen-delimited string.
pub fn annotate(syllables: &str) -> String {
    let _span = debug_span!(
        "annotate",
        syllables = syllables.matches(SYLLABLE_DELIMITER).count() + 1
    )
    .entered();
    let mut out = String::with_capacity(syllables.len() + 2);
    for (i, syllable) in syllables.split(SYLLABLE_DELIMITER).enumerate() {
        if i > 0 {
            out.push(SYLLABLE_DELIMITER);
        }
        out.push_str(&annotate_syllable(syllable));
    }
    out
}
