// Error type shared by every fonema front end.

/// Reasons a word cannot be transcribed.
///
/// These are the only failures. Once a word passes validation the transducer
/// always produces output, silently dropping characters it has no rule for.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranscriptionError {
    /// The locale tag is not one of the supported Spanish variants.
    #[error("unsupported locale: {0:?} (expected one of: es_ES, es_MX)")]
    UnsupportedLocale(String),

    /// The input contains no Latin letter, so there is nothing to transcribe.
    #[error("not a word: {0:?}")]
    InvalidWord(String),
}
