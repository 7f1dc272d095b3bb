use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_normalization::UnicodeNormalization;

/// Configuration options for text normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// When disabled (the default), combining marks left over from canonical
    /// decomposition are treated like every other dropped character and split
    /// the word: "naïve" becomes "nai ve".
    ///
    /// When enabled they are removed in place, so "naïve" becomes "naive".
    pub strip_diacritics: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            strip_diacritics: false,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Keep,
    Mark,
    Drop,
}

#[inline]
fn classify(c: char) -> CharClass {
    match get_general_category(c) {
        GeneralCategory::UppercaseLetter
        | GeneralCategory::LowercaseLetter
        | GeneralCategory::TitlecaseLetter
        | GeneralCategory::ModifierLetter
        | GeneralCategory::OtherLetter
        | GeneralCategory::DecimalNumber => CharClass::Keep,
        GeneralCategory::NonspacingMark
        | GeneralCategory::SpacingMark
        | GeneralCategory::EnclosingMark => CharClass::Mark,
        _ => CharClass::Drop,
    }
}

/// Unicode-category based text normalizer.
///
/// Performs, in order:
/// - Locale-invariant lowercasing
/// - Canonical decomposition (NFD)
/// - Category folding: only letters (any subtype) and decimal digits survive,
///   everything else (marks, punctuation, symbols, whitespace variants) becomes
///   a separator
/// - Canonical recomposition (NFC)
/// - Joining the surviving chunks with a single ASCII space
///
/// Empty or whitespace-only input is returned unchanged. The transform is
/// pure and idempotent.
///
/// # Examples
///
/// ```
/// use lexitag_core::analyzer::normalizer::TextNormalizer;
///
/// let normalizer = TextNormalizer::default();
/// assert_eq!(normalizer.normalize("  Coffee,  SHOP! "), "coffee shop");
/// assert_eq!(normalizer.normalize("naïve"), "nai ve");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer {
    config: NormalizerConfig,
}

impl TextNormalizer {
    /// Creates a new normalizer with the specified configuration.
    pub const fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// Normalizes text into an existing String buffer.
    ///
    /// Clears the buffer before writing and reuses its capacity.
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();

        if input.trim().is_empty() {
            out.push_str(input);
            return;
        }

        let strip = self.config.strip_diacritics;
        let mut folded = String::with_capacity(input.len());

        for c in input.to_lowercase().nfd() {
            match classify(c) {
                CharClass::Keep => folded.push(c),
                CharClass::Mark if strip => {}
                CharClass::Mark | CharClass::Drop => folded.push(' '),
            }
        }

        let composed: String = folded.nfc().collect();

        out.reserve(composed.len());
        for chunk in composed.split(' ').filter(|chunk| !chunk.is_empty()) {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(chunk);
        }
    }

    /// Normalizes text and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }
}
