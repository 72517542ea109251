// Stress placeholders.
//
// The scanner writes an uppercase vowel for every orthographically accented
// vowel (and for a word-final `y`). This module decides whether those
// placeholders reach the caller or are folded into plain IPA vowels.

/// What to do with stress placeholders in the finished transcription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StressMarks {
    /// Return placeholders as written (`México` -> `mExiko`). This is the
    /// reference output.
    #[default]
    Keep,
    /// Replace placeholders with plain IPA vowels (`México` -> `mexiko`).
    Fold,
}

/// Plain IPA vowel for a stress placeholder.
fn plain_vowel(placeholder: char) -> Option<char> {
    match placeholder {
        'A' => Some('a'),
        'E' => Some('e'),
        'I' => Some('i'),
        'O' => Some('o'),
        'U' => Some('u'),
        'Y' => Some('i'),
        _ => None,
    }
}

/// Check whether a transcription character is a stress placeholder.
pub fn is_stress_marker(c: char) -> bool {
    plain_vowel(c).is_some()
}

/// Replace every stress placeholder with its plain vowel.
pub fn fold_stress_markers(transcription: &str) -> String {
    transcription
        .chars()
        .map(|c| plain_vowel(c).unwrap_or(c))
        .collect()
}

/// Character offsets of the stress placeholders in a transcription.
pub fn stress_marker_positions(transcription: &str) -> Vec<usize> {
    transcription
        .chars()
        .enumerate()
        .filter(|&(_, c)| is_stress_marker(c))
        .map(|(i, _)| i)
        .collect()
}

/// Apply the configured stress handling to a finished transcription.
pub(crate) fn finish(transcription: String, marks: StressMarks) -> String {
    match marks {
        StressMarks::Keep => transcription,
        StressMarks::Fold => fold_stress_markers(&transcription),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_all_placeholders() {
        assert_eq!(fold_stress_markers("AEIOUY"), "aeioui");
    }

    #[test]
    fn fold_leaves_ipa_untouched() {
        assert_eq!(fold_stress_markers("koɾaθOn"), "koɾaθon");
        assert_eq!(fold_stress_markers("ʎama"), "ʎama");
        assert_eq!(fold_stress_markers(""), "");
    }

    #[test]
    fn final_y_folds_to_i() {
        assert_eq!(fold_stress_markers("reY"), "rei");
    }

    #[test]
    fn positions_are_char_offsets() {
        // ɲ is two bytes in UTF-8 but one position.
        assert_eq!(stress_marker_positions("ɲandU"), vec![4]);
        assert_eq!(stress_marker_positions("mExiko"), vec![1]);
        assert!(stress_marker_positions("amiɣo").is_empty());
    }

    #[test]
    fn finish_respects_mode() {
        assert_eq!(finish("mExiko".to_string(), StressMarks::Keep), "mExiko");
        assert_eq!(finish("mExiko".to_string(), StressMarks::Fold), "mexiko");
    }

    #[test]
    fn keep_is_default() {
        assert_eq!(StressMarks::default(), StressMarks::Keep);
    }
}
