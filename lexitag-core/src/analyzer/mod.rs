//! Text analysis pipeline.
//!
//! This module provides the text transforms that feed the derived token sets:
//! - **Normalizer**: Case and category folding
//! - **Tokenizer**: Splits normalized text into words, drops stop words
//! - **Keyboard**: Persian ⇄ Latin keyboard-layout transliteration
//! - **Phonetic**: Sound-alike dictation variants
//!
//! [`TextAnalyzer`] bundles them and implements the two expansions the
//! document builder uses.

pub mod keyboard;
pub mod normalizer;
pub mod phonetic;
pub mod tokenizer;

use lexitag_types::{Expansion, TagConfig, TokenSet};

pub use keyboard::KeyboardTransliterator;
pub use normalizer::{NormalizerConfig, TextNormalizer};
pub use phonetic::{PhoneticConfig, PhoneticVariantGenerator};
pub use tokenizer::Tokenizer;

/// All text transforms behind one handle.
///
/// Stateless and `Copy`; concurrent callers can share one or build their own.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextAnalyzer {
    /// Normalizer used for the normalized form.
    pub normalizer: TextNormalizer,
    /// Keyboard-layout transliterator.
    pub keyboard: KeyboardTransliterator,
    /// Phonetic variant generator.
    pub phonetic: PhoneticVariantGenerator,
}

impl TextAnalyzer {
    /// Builds an analyzer honoring `config`.
    pub fn from_config(config: &TagConfig) -> Self {
        Self {
            phonetic: PhoneticVariantGenerator::new(PhoneticConfig {
                max_variants: config.max_phonetic_variants,
            }),
            ..Self::default()
        }
    }

    /// Returns a tokenizer sharing this analyzer's normalizer.
    #[inline]
    pub fn tokenizer(&self) -> Tokenizer {
        Tokenizer::new(self.normalizer)
    }

    /// The three transliteration forms of `value`: Latin-keyboard,
    /// normalized, Persian-keyboard.
    pub fn transliteration_forms(&self, value: &str) -> [String; 3] {
        [
            self.keyboard.to_latin(value),
            self.normalizer.normalize(value),
            self.keyboard.to_persian(value),
        ]
    }

    /// Applies `expansion` to `value` and unions the result into `out`.
    pub fn expand_into(&self, expansion: Expansion, value: &str, out: &mut TokenSet) {
        match expansion {
            Expansion::Verbatim => {
                out.insert(value.to_owned());
            }
            Expansion::Transliteration => {
                out.extend(self.transliteration_forms(value));
            }
            Expansion::Keyword => {
                out.insert(value.to_owned());
                out.extend(self.transliteration_forms(value));
                self.phonetic.generate_into(value, out);
            }
        }
    }

    /// Applies `expansion` to `value` and returns the produced tokens.
    pub fn expand(&self, expansion: Expansion, value: &str) -> TokenSet {
        let mut out = TokenSet::default();
        self.expand_into(expansion, value, &mut out);
        out
    }
}
