// Tokenizer for running Spanish text.
//
// Splits text into words (maximal letter runs), whitespace runs, single
// punctuation marks, and everything else. Only word tokens are transcribed;
// the rest is copied through by `Transcriber::transcribe_text`.

use fonema_core::character::{CharType, get_char_type};
use fonema_core::enums::TokenType;
use fonema_core::token::Token;

/// Length of the word starting at the beginning of `text`.
///
/// An apostrophe between two letters stays inside the word ("O'Higgins").
/// A hyphen always ends it, so each part of a compound is scanned as its own
/// word with its own word-initial rules.
fn word_length(text: &[char]) -> usize {
    let mut wlen = 0;
    while wlen < text.len() {
        match get_char_type(text[wlen]) {
            CharType::Letter => wlen += 1,
            CharType::Punctuation if matches!(text[wlen], '\'' | '\u{2019}') => {
                let next_is_letter = text
                    .get(wlen + 1)
                    .is_some_and(|&c| get_char_type(c) == CharType::Letter);
                if wlen == 0 || !next_is_letter {
                    return wlen;
                }
                wlen += 1;
            }
            _ => return wlen,
        }
    }
    wlen
}

/// Length of the number starting at the beginning of `text`. A single `.` or
/// `,` between digits is part of the number ("1.500", "3,14").
fn number_length(text: &[char]) -> usize {
    let mut nlen = 0;
    while nlen < text.len() {
        match text[nlen] {
            c if c.is_ascii_digit() => nlen += 1,
            '.' | ',' if text.get(nlen + 1).is_some_and(char::is_ascii_digit) => nlen += 1,
            _ => return nlen,
        }
    }
    nlen
}

/// Find the next token starting at position `pos` in the text.
///
/// Returns `(TokenType, token_length)`. The caller advances `pos` by
/// `token_length` to process subsequent tokens. At the end of the text the
/// result is `(TokenType::None, 0)`.
pub fn next_token(text: &[char], pos: usize) -> (TokenType, usize) {
    let Some(slice) = text.get(pos..).filter(|s| !s.is_empty()) else {
        return (TokenType::None, 0);
    };

    match get_char_type(slice[0]) {
        CharType::Letter => (TokenType::Word, word_length(slice)),
        CharType::Digit => (TokenType::Unknown, number_length(slice)),
        CharType::Whitespace => {
            let len = slice
                .iter()
                .take_while(|&&c| get_char_type(c) == CharType::Whitespace)
                .count();
            (TokenType::Whitespace, len)
        }
        CharType::Punctuation => {
            if slice.starts_with(&['.', '.', '.']) {
                return (TokenType::Punctuation, 3);
            }
            (TokenType::Punctuation, 1)
        }
        CharType::Unknown => (TokenType::Unknown, 1),
    }
}

/// Split text into tokens, in order. Concatenating the token texts gives back
/// the input.
pub fn tokenize(text: &str) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut pos = 0;

    loop {
        let (token_type, len) = next_token(&chars, pos);
        if token_type == TokenType::None {
            break;
        }
        let token_text: String = chars[pos..pos + len].iter().collect();
        tokens.push(Token::new(token_type, token_text, pos));
        pos += len;
    }

    tokens
}
