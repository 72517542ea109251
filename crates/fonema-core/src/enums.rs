// Shared enums

/// Token types for running-text tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// End of text.
    None,
    /// Word token: a maximal run of letters.
    Word,
    /// Punctuation token.
    Punctuation,
    /// Whitespace token.
    Whitespace,
    /// Digits and any character with no other class.
    Unknown,
}

impl TokenType {
    /// Stable name used by the bindings.
    pub fn name(self) -> &'static str {
        match self {
            TokenType::None => "None",
            TokenType::Word => "Word",
            TokenType::Punctuation => "Punctuation",
            TokenType::Whitespace => "Whitespace",
            TokenType::Unknown => "Unknown",
        }
    }
}
