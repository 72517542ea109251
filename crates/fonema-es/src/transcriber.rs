// Transcriber: top-level entry point for Spanish IPA transcription.
//
// Holds the configured locale and stress handling and runs every word through
// validation, the scanner and the stress pass, in that order.

use fonema_core::character::lowercase_chars;
use fonema_core::{Locale, TranscriptionError};
use tracing::debug_span;

use crate::scanner::transduce;
use crate::stress::{self, StressMarks};
use crate::tokenizer::tokenize;
use crate::validate::{check_word, validate};

/// Configuration for a [`Transcriber`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TranscriberOptions {
    /// Regional variant used when no locale tag is given per call.
    pub locale: Locale,

    /// Whether stress placeholders are kept or folded into plain vowels.
    pub stress_marks: StressMarks,
}

/// Spanish grapheme-to-IPA transcriber.
///
/// Stateless apart from its options; safe to share between threads.
#[derive(Debug, Clone, Default)]
pub struct Transcriber {
    options: TranscriberOptions,
}

impl Transcriber {
    /// Create a transcriber with the given options.
    pub fn new(options: TranscriberOptions) -> Self {
        Self { options }
    }

    /// Create a transcriber for a locale tag (`es_ES` or `es_MX`) with
    /// default stress handling.
    pub fn for_tag(locale_tag: &str) -> Result<Self, TranscriptionError> {
        let locale = Locale::from_tag(locale_tag)?;
        Ok(Self::new(TranscriberOptions {
            locale,
            ..TranscriberOptions::default()
        }))
    }

    /// Return a reference to the current options.
    pub fn options(&self) -> &TranscriberOptions {
        &self.options
    }

    /// Change the locale used by [`Transcriber::transcribe`].
    pub fn set_locale(&mut self, locale: Locale) {
        self.options.locale = locale;
    }

    /// Change how stress placeholders are returned.
    pub fn set_stress_marks(&mut self, stress_marks: StressMarks) {
        self.options.stress_marks = stress_marks;
    }

    // =========================================================================
    // Word transcription
    // =========================================================================

    /// Transcribe one word with the configured locale.
    pub fn transcribe(&self, word: &str) -> Result<String, TranscriptionError> {
        check_word(word)?;
        Ok(self.run(word, self.options.locale))
    }

    /// Transcribe one word with an explicit locale tag, overriding the
    /// configured locale for this call.
    pub fn transcribe_with(&self, word: &str, locale_tag: &str) -> Result<String, TranscriptionError> {
        let locale = validate(word, locale_tag)?;
        Ok(self.run(word, locale))
    }

    fn run(&self, word: &str, locale: Locale) -> String {
        let _span = debug_span!("transcribe", word, %locale).entered();
        let letters = lowercase_chars(word);
        stress::finish(transduce(&letters, locale), self.options.stress_marks)
    }

    // =========================================================================
    // Running text
    // =========================================================================

    /// Transcribe every word in running text.
    ///
    /// Word tokens are replaced by their transcription. Whitespace,
    /// punctuation and numbers are copied unchanged, so the result lines up
    /// token for token with the input.
    pub fn transcribe_text(&self, text: &str) -> String {
        let _span = debug_span!("transcribe_text", chars = text.len()).entered();
        let mut out = String::with_capacity(text.len() * 2);
        for token in tokenize(text) {
            if token.is_word() && check_word(&token.text).is_ok() {
                out.push_str(&self.run(&token.text, self.options.locale));
            } else {
                out.push_str(&token.text);
            }
        }
        out
    }
}

/// Transcribe one word for a locale tag, keeping stress placeholders.
///
/// This is the reference behavior: `transcribe("México", "es_ES")` returns
/// `"mExiko"`.
pub fn transcribe(word: &str, locale_tag: &str) -> Result<String, TranscriptionError> {
    Transcriber::default().transcribe_with(word, locale_tag)
}
