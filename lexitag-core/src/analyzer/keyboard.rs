//! Keyboard-layout transliteration between the Persian and Latin layouts.
//!
//! Catches text typed with the wrong layout active: "سشمشی" is what a user
//! gets when they type "salad" on a Persian keyboard, and vice versa.
//!
//! The two directions use independent tables. They are close to inverses but
//! not exact ones, so neither is derived from the other.

/// Persian character → Latin key at the same keyboard position.
#[inline]
pub const fn persian_to_latin(c: char) -> Option<char> {
    Some(match c {
        'ض' => 'q',
        'ص' => 'w',
        'ث' => 'e',
        'ق' => 'r',
        'ف' => 't',
        'غ' => 'y',
        'ع' => 'u',
        'ه' => 'i',
        'خ' => 'o',
        'ح' => 'p',
        'ش' => 'a',
        'س' => 's',
        'ی' => 'd',
        'ب' => 'f',
        'ل' => 'g',
        'ا' => 'h',
        'ت' => 'j',
        'ن' => 'k',
        'م' => 'l',
        'ظ' => 'z',
        'ط' => 'x',
        'ز' => 'c',
        'ر' => 'v',
        'ذ' => 'b',
        'د' => 'n',
        'پ' => 'm',
        'ژ' => '[',
        _ => return None,
    })
}

/// Latin key → Persian character at the same keyboard position.
///
/// `]`, `\` and space are identity entries on this layout and are handled
/// by pass-through.
#[inline]
pub const fn latin_to_persian(c: char) -> Option<char> {
    Some(match c {
        'q' => 'ض',
        'w' => 'ص',
        'e' => 'ث',
        'r' => 'ق',
        't' => 'ف',
        'y' => 'غ',
        'u' => 'ع',
        'i' => 'ه',
        'o' => 'خ',
        'p' => 'ح',
        'a' => 'ش',
        's' => 'س',
        'd' => 'ی',
        'f' => 'ب',
        'g' => 'ل',
        'h' => 'ا',
        'j' => 'ت',
        'k' => 'ن',
        'l' => 'م',
        'z' => 'ظ',
        'x' => 'ط',
        'c' => 'ز',
        'v' => 'ر',
        'b' => 'ذ',
        'n' => 'د',
        'm' => 'پ',
        '[' => 'ژ',
        _ => return None,
    })
}

/// Lowercases a single character, keeping it as-is when its lowercase form
/// is longer than one character. Preserves the output length.
#[inline]
fn lower_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Character-by-character keyboard-layout transliterator.
///
/// Both directions are total: every character is either mapped or copied
/// through, and the output has exactly as many characters as the input.
/// Empty or whitespace-only input is returned unchanged.
///
/// ```
/// use lexitag_core::analyzer::keyboard::KeyboardTransliterator;
///
/// let kb = KeyboardTransliterator;
/// assert_eq!(kb.to_persian("Salad"), "سشمشی");
/// assert_eq!(kb.to_latin("سشمشی"), "salad");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyboardTransliterator;

impl KeyboardTransliterator {
    /// Persian → Latin layout. Case-sensitive: Latin input passes through as typed.
    pub fn to_latin(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return text.to_owned();
        }
        text.chars()
            .map(|c| persian_to_latin(c).unwrap_or(c))
            .collect()
    }

    /// Latin → Persian layout. Lowercases the input first, so `"A"` and `"a"`
    /// map to the same key.
    pub fn to_persian(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return text.to_owned();
        }
        text.chars()
            .map(|c| {
                let c = lower_char(c);
                latin_to_persian(c).unwrap_or(c)
            })
            .collect()
    }
}
