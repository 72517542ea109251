//! Rule-based Spanish grapheme-to-IPA transcription.
//!
//! Converts a word in Spanish orthography into IPA for Castilian (`es_ES`)
//! or Mexican (`es_MX`) Spanish. Every symbol is derived from the current
//! letter, a four-letter window around it and the symbols already written;
//! there is no dictionary.
//!
//! ```
//! use fonema_es::transcribe;
//!
//! assert_eq!(transcribe("amigo", "es_ES").unwrap(), "amiɣo");
//! assert_eq!(transcribe("cielo", "es_MX").unwrap(), "sjelo");
//! ```
//!
//! Accented vowels come back as uppercase stress placeholders
//! (`México` -> `mExiko`) unless [`StressMarks::Fold`] is configured.

mod rules;
mod scanner;
pub mod stress;
pub mod tokenizer;
pub mod transcriber;
pub mod validate;

pub use fonema_core::{Locale, TranscriptionError};
pub use stress::{StressMarks, fold_stress_markers, stress_marker_positions};
pub use transcriber::{Transcriber, TranscriberOptions, transcribe};
