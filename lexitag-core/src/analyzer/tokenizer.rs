//! Stop-word aware tokenizer.
//!
//! Second stage of the analysis pipeline: the input is normalized with
//! [`TextNormalizer`], split into words and filtered against two stop-word
//! lists (English, matched case-insensitively, and Persian, matched exactly).
//!
//! ```
//! use lexitag_core::analyzer::tokenizer::Tokenizer;
//!
//! let tokens = Tokenizer::default().tokenize("The Coffee-Shop of Paris");
//! assert_eq!(tokens.len(), 3);
//! assert!(tokens.contains("coffee"));
//! assert!(!tokens.contains("the"));
//! ```
//!
//! Tokens come back as a set; order is not significant. Use
//! [`Tokenizer::tokenize_with`] to stream tokens in input order without
//! collecting them.

use rustc_hash::FxHashSet;

use super::normalizer::TextNormalizer;

/// English stop words, compared ASCII case-insensitively.
///
/// "have been" contains a space and never matches a single token.
pub const LATIN_STOP_WORDS: &[&str] = &[
    "and", "is", "was", "were", "have been", "has", "have", "the", "a", "an", "of", "in", "to",
    "for", "on", "with", "at", "by", "from", "as", "it", "this", "that",
];

/// Persian stop words, compared exactly.
///
/// Normalization decomposes "آن" and splits off the madda, so that entry
/// never matches a normalized token.
pub const PERSIAN_STOP_WORDS: &[&str] = &[
    "و", "یا", "تا", "که", "را", "به", "از", "در", "برای", "با", "بی", "می", "این", "آن", "است",
    "هست", "دارد", "بود",
];

/// Returns `true` if `token` is in either stop-word list.
#[inline]
pub fn is_stop_word(token: &str) -> bool {
    LATIN_STOP_WORDS
        .iter()
        .any(|stop| stop.eq_ignore_ascii_case(token))
        || PERSIAN_STOP_WORDS.contains(&token)
}

#[inline(always)]
fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '-' | '_' | ',')
}

/// Normalizing word tokenizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer {
    normalizer: TextNormalizer,
}

impl Tokenizer {
    /// Creates a tokenizer that normalizes with `normalizer`.
    #[inline]
    pub const fn new(normalizer: TextNormalizer) -> Self {
        Self { normalizer }
    }

    /// Normalizes `text`, splits it on runs of whitespace, `-`, `_` or `,`
    /// and emits each non-stop-word token with its position.
    ///
    /// Positions count emitted tokens only, so they stay dense after
    /// stop-word removal. Duplicates are emitted every time they occur.
    pub fn tokenize_with<F>(&self, text: &str, mut emit: F)
    where
        F: FnMut(&str, u32),
    {
        let normalized = self.normalizer.normalize(text);
        let mut pos = 0u32;

        for word in normalized.split(is_separator) {
            let word = word.trim();
            if word.is_empty() || is_stop_word(word) {
                continue;
            }
            emit(word, pos);
            if pos == u32::MAX {
                return;
            }
            pos += 1;
        }
    }

    /// Tokenizes `text` into a deduplicated set.
    pub fn tokenize(&self, text: &str) -> FxHashSet<String> {
        let mut tokens = FxHashSet::default();
        self.tokenize_with(text, |word, _| {
            if !tokens.contains(word) {
                tokens.insert(word.to_owned());
            }
        });
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn collect(input: &str) -> Vec<(String, u32)> {
        let mut out = Vec::new();
        Tokenizer::default().tokenize_with(input, |text, pos| out.push((text.to_owned(), pos)));
        out
    }

    #[test]
    fn single_word() {
        let out = collect("hello");
        assert_eq!(out, vec![("hello".to_owned(), 0)]);
    }

    #[test]
    fn splits_on_separators() {
        let tokens = Tokenizer::default().tokenize("coffee-shop_paris,london  berlin");
        for word in ["coffee", "shop", "paris", "london", "berlin"] {
            assert!(tokens.contains(word), "missing {word}");
        }
        assert_eq!(tokens.len(), 5);
    }

    #[test]
    fn latin_stop_words_removed_case_insensitively() {
        let tokens = Tokenizer::default().tokenize("THE Cat And The Hat");
        assert_eq!(tokens.len(), 2);
        assert!(tokens.contains("cat"));
        assert!(tokens.contains("hat"));
    }

    #[test]
    fn persian_stop_words_removed() {
        let tokens = Tokenizer::default().tokenize("کتاب و قلم در خانه");
        assert_eq!(tokens.len(), 3);
        assert!(tokens.contains("کتاب"));
        assert!(!tokens.contains("و"));
        assert!(!tokens.contains("در"));
    }

    #[test]
    fn tokens_are_deduplicated() {
        let tokens = Tokenizer::default().tokenize("test test TEST");
        assert_eq!(tokens.len(), 1);
    }

    #[test]
    fn positions_skip_stop_words() {
        let out = collect("the quick brown fox");
        let positions: Vec<u32> = out.iter().map(|(_, p)| *p).collect();
        assert_eq!(positions, vec![0, 1, 2]);
        assert_eq!(out[0].0, "quick");
    }

    #[test]
    fn empty_and_whitespace_yield_nothing() {
        assert!(Tokenizer::default().tokenize("").is_empty());
        assert!(Tokenizer::default().tokenize(" \t\n").is_empty());
    }

    #[test]
    fn only_stop_words_yield_nothing() {
        assert!(Tokenizer::default().tokenize("the and of").is_empty());
    }

    #[test]
    fn tokenizer_is_reusable() {
        let t = Tokenizer::default();
        assert_eq!(t.tokenize("hello world").len(), 2);
        assert_eq!(t.tokenize("one two three").len(), 3);
    }

    #[test]
    fn stop_word_lookup() {
        assert!(is_stop_word("The"));
        assert!(is_stop_word("برای"));
        assert!(!is_stop_word("coffee"));
    }

    proptest! {
        #[test]
        fn never_returns_stop_words(
            words in proptest::collection::vec("[a-zA-Z]{1,6}|the|THE|And|of|است|به", 0..12),
        ) {
            let text = words.join(" ");
            for token in Tokenizer::default().tokenize(&text) {
                prop_assert!(!is_stop_word(&token), "stop word leaked: {}", token);
                prop_assert!(!LATIN_STOP_WORDS.iter().any(|s| s.eq_ignore_ascii_case(&token)));
            }
        }

        #[test]
        fn tokens_are_non_empty_and_trimmed(s in "\\PC{0,40}") {
            for token in Tokenizer::default().tokenize(&s) {
                prop_assert!(!token.is_empty());
                prop_assert_eq!(token.trim(), token.as_str());
            }
        }
    }
}
