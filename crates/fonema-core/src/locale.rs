// Supported Spanish regional variants.

use std::fmt;
use std::str::FromStr;

use crate::error::TranscriptionError;

/// Regional pronunciation variant.
///
/// The set is closed: every locale-dependent rule in the engine matches on
/// this enum exhaustively, so adding a variant forces every table to be
/// extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// Castilian Spanish (Spain), with distinción: `z` and soft `c` are /θ/.
    #[default]
    Castilian,
    /// Mexican Spanish, with seseo: `z` and soft `c` are /s/.
    Mexican,
}

impl Locale {
    /// All supported locales, in tag order.
    pub const ALL: [Locale; 2] = [Locale::Castilian, Locale::Mexican];

    /// The locale tag as accepted by [`Locale::from_tag`].
    pub fn tag(self) -> &'static str {
        match self {
            Locale::Castilian => "es_ES",
            Locale::Mexican => "es_MX",
        }
    }

    /// Resolve a locale tag. Only the exact tags `es_ES` and `es_MX` are
    /// accepted.
    pub fn from_tag(tag: &str) -> Result<Self, TranscriptionError> {
        match tag {
            "es_ES" => Ok(Locale::Castilian),
            "es_MX" => Ok(Locale::Mexican),
            other => Err(TranscriptionError::UnsupportedLocale(other.to_string())),
        }
    }
}

impl FromStr for Locale {
    type Err = TranscriptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_tag(s)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
