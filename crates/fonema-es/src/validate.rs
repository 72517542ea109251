// Input validation: runs before any scanning.

use fonema_core::character::contains_word_char;
use fonema_core::{Locale, TranscriptionError};
use tracing::debug;

/// Resolve the locale tag and check that the word has something to
/// transcribe. The locale is checked first.
pub fn validate(word: &str, locale_tag: &str) -> Result<Locale, TranscriptionError> {
    let locale = Locale::from_tag(locale_tag)?;
    check_word(word)?;
    Ok(locale)
}

/// Reject input with no Latin letter (empty, digits, punctuation only).
pub fn check_word(word: &str) -> Result<(), TranscriptionError> {
    if contains_word_char(word) {
        Ok(())
    } else {
        debug!(word, "rejected: no Latin letters");
        Err(TranscriptionError::InvalidWord(word.to_string()))
    }
}
