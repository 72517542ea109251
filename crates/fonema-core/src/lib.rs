// fonema-core: types shared by the transcription engine and its front ends.

pub mod character;
pub mod enums;
pub mod error;
pub mod locale;
pub mod token;

pub use error::TranscriptionError;
pub use locale::Locale;
