// Character classification for Spanish text

// ---------------------------------------------------------------------------
// Word detection
// ---------------------------------------------------------------------------

/// Check whether a character counts as "Latin" for word validation.
///
/// The class is `[A-Za-z\u{C0}-\u{FF}]`: the Basic Latin letters plus the whole
/// Latin-1 Supplement letter block. The block also contains `×` (U+00D7) and
/// `÷` (U+00F7); they are accepted as well, so a bare `×` validates but
/// transcribes to an empty string.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphabetic() || ('\u{00C0}'..='\u{00FF}').contains(&c)
}

/// Check whether the text contains at least one character for which
/// [`is_word_char`] holds.
pub fn contains_word_char(text: &str) -> bool {
    text.chars().any(is_word_char)
}

// ---------------------------------------------------------------------------
// Character type classification
// ---------------------------------------------------------------------------

/// Character type classification used by the text tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    Unknown,
    Letter,
    Digit,
    Whitespace,
    Punctuation,
}

/// Returns the character type for a given character.
///
/// Letters are Basic Latin, Latin-1 and Latin Extended-A/B letters.
/// Combining diacritical marks count as letters so that a decomposed `é`
/// stays inside its word.
pub fn get_char_type(c: char) -> CharType {
    let cp = c as u32;
    if (0x41..=0x5A).contains(&cp)           // A-Z
        || (0x61..=0x7A).contains(&cp)       // a-z
        || (0xC0..=0xD6).contains(&cp)       // À-Ö
        || (0xD8..=0xF6).contains(&cp)       // Ø-ö
        || (0xF8..=0x024F).contains(&cp)     // ø-ɏ
        || (0x0300..=0x036F).contains(&cp)
    // Combining diacritical marks
    {
        return CharType::Letter;
    }
    if is_whitespace(c) {
        return CharType::Whitespace;
    }
    if is_punctuation_char(c) {
        return CharType::Punctuation;
    }
    if c.is_ascii_digit() {
        return CharType::Digit;
    }
    CharType::Unknown
}

/// Punctuation recognized in Spanish running text, including the inverted
/// opening marks and angle quotes.
fn is_punctuation_char(c: char) -> bool {
    matches!(
        c,
        '.' | ','
            | ';'
            | '-'
            | '!'
            | '?'
            | ':'
            | '\''
            | '"'
            | '('
            | ')'
            | '['
            | ']'
            | '{'
            | '}'
            | '/'
            | '&'
            | '\u{00A1}' // ¡
            | '\u{00BF}' // ¿
            | '\u{00AB}' // «
            | '\u{00BB}' // »
            | '\u{2018}' // LEFT SINGLE QUOTATION MARK
            | '\u{2019}' // RIGHT SINGLE QUOTATION MARK
            | '\u{201C}' // LEFT DOUBLE QUOTATION MARK
            | '\u{201D}' // RIGHT DOUBLE QUOTATION MARK
            | '\u{2013}' // EN DASH
            | '\u{2014}' // EM DASH
            | '\u{2026}' // HORIZONTAL ELLIPSIS
    )
}

/// Check whether a character is a whitespace character.
pub fn is_whitespace(c: char) -> bool {
    let cp = c as u32;
    (0x09..=0x0D).contains(&cp)
        || cp == 0x20
        || cp == 0x85
        || cp == 0xA0
        || cp == 0x1680
        || (0x2000..=0x200A).contains(&cp)
        || cp == 0x2028
        || cp == 0x2029
        || cp == 0x202F
        || cp == 0x205F
        || cp == 0x3000
}

// ---------------------------------------------------------------------------
// Case conversion
// ---------------------------------------------------------------------------

/// Lowercase a word into the character sequence the scanner walks.
///
/// Full Unicode lowercasing is applied to the whole string first, so a
/// character with a multi-character lowercase form (`İ`) contributes every
/// resulting code point.
pub fn lowercase_chars(word: &str) -> Vec<char> {
    word.to_lowercase().chars().collect()
}
