// Spanish letter-to-sound tables.
//
// Three tiers are consulted in order by the scanner:
// 1. letters every Spanish speaker pronounces the same way (`invariant_symbol`)
// 2. letters whose sound depends on the regional variant (`localized_symbol`)
// 3. contextual letters, resolved by the rule chains in `scanner`
//
// Uppercase vowels in the output are stress placeholders for orthographically
// accented vowels. See `stress`.

use fonema_core::Locale;

// ---------------------------------------------------------------------------
// Letter sets used by the contextual rules
// ---------------------------------------------------------------------------

/// Letters before which `s` is voiced to [z].
pub(crate) const VOICING_AFTER_S: &[char] = &['l', 'm', 'n', 'b', 'd', 'g'];

/// Buffer symbols after which `b`/`v` stays a stop [b].
pub(crate) const NASALS_BEFORE_B: &[char] = &['m', 'n', '\u{0272}']; // ɲ

/// All vowels, plain and accented.
pub(crate) const VOWELS: &[char] = &[
    'a', 'e', 'i', 'o', 'u', '\u{00E1}', '\u{00E9}', '\u{00ED}', '\u{00F3}', '\u{00FA}',
];

/// Front vowels that soften `c` and `g`.
pub(crate) const FRONT_VOWELS: &[char] = &['e', 'i', '\u{00E9}', '\u{00ED}'];

/// Vowels after which `i` glides to [j].
pub(crate) const GLIDE_AFTER_I: &[char] =
    &['a', 'e', 'o', 'u', '\u{00E1}', '\u{00E9}', '\u{00F3}', '\u{00FA}'];

/// Vowels after which `u`/`ü` glides to [w].
pub(crate) const GLIDE_AFTER_U: &[char] =
    &['a', 'e', 'o', 'i', '\u{00E1}', '\u{00E9}', '\u{00F3}', '\u{00ED}'];

/// Vowels that keep `c` hard in an `nc` cluster.
pub(crate) const HARD_C_VOWELS: &[char] = &['a', 'o', 'u', '\u{00E1}', '\u{00F3}', '\u{00FA}'];

/// Letters before which `n` assimilates to [m].
pub(crate) const LABIALS_AFTER_N: &[char] = &['b', 'f', 'm', 'p', 'v'];

/// Word prefixes that keep the archaic `x` = [x] spelling.
pub(crate) const ARCHAIC_X_PREFIXES: &[&[char]] = &[
    &['m', 'e', 'x', 'i', 'c'],
    &['m', '\u{00E9}', 'x', 'i', 'c'],
];

/// One-based position of the `x` in [`ARCHAIC_X_PREFIXES`].
pub(crate) const ARCHAIC_X_POSITION: usize = 3;

// ---------------------------------------------------------------------------
// Invariant letters
// ---------------------------------------------------------------------------

/// Symbol for a letter that sounds the same in every supported variant.
///
/// `h` maps to the empty string: it is silent but still consumed.
pub(crate) fn invariant_symbol(letter: char) -> Option<&'static str> {
    let symbol = match letter {
        'a' => "a",
        '\u{00E1}' => "A", // á
        'e' => "e",
        '\u{00E9}' => "E", // é
        'f' => "f",
        'h' => "",
        '\u{00ED}' => "I", // í
        'j' => "x",
        'k' => "k",
        'm' => "m",
        '\u{00F1}' => "\u{0272}", // ñ -> ɲ
        'o' => "o",
        '\u{00F3}' => "O", // ó
        'p' => "p",
        'q' => "k",
        't' => "t",
        '\u{00FA}' => "U", // ú
        'w' => "w",
        _ => return None,
    };
    Some(symbol)
}

// ---------------------------------------------------------------------------
// Localized letters
// ---------------------------------------------------------------------------

/// Sounds that differ between the supported variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LocalizedSymbols {
    /// The letter `z`.
    pub z: &'static str,
    /// The letter `c` before a front vowel.
    pub soft_c: &'static str,
}

const CASTILIAN: LocalizedSymbols = LocalizedSymbols {
    z: "\u{03B8}",      // θ
    soft_c: "\u{03B8}", // θ
};

const MEXICAN: LocalizedSymbols = LocalizedSymbols { z: "s", soft_c: "s" };

impl LocalizedSymbols {
    pub(crate) fn for_locale(locale: Locale) -> &'static LocalizedSymbols {
        match locale {
            Locale::Castilian => &CASTILIAN,
            Locale::Mexican => &MEXICAN,
        }
    }
}

/// Symbol for a letter whose sound depends only on the locale.
pub(crate) fn localized_symbol(letter: char, symbols: &LocalizedSymbols) -> Option<&'static str> {
    match letter {
        'z' => Some(symbols.z),
        _ => None,
    }
}
