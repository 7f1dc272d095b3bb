//! Phonetic dictation variants.
//!
//! Several Persian letters are pronounced alike, so a word heard and typed by
//! ear may use any of them. For every character with a sound-alike class, each
//! member of the class is tried at that position; the variants of a word are
//! the Cartesian product over all positions.
//!
//! ## Cost
//!
//! Output size is the product of class sizes over the word, i.e. exponential
//! in the number of ambiguous positions ("سسس" alone has 27 variants). Source
//! words are short, but long or highly ambiguous values can spike memory and
//! CPU. [`PhoneticConfig::max_variants`] bounds the number of strings
//! generated; when the bound is hit the result is truncated and a warning is
//! logged.

use lexitag_types::TokenSet;
use smallvec::SmallVec;
use tracing::warn;

const SIN_GROUP: &[char] = &['س', 'ص', 'ث'];
const TE_GROUP: &[char] = &['ت', 'ط'];
const ZE_GROUP: &[char] = &['ز', 'ذ', 'ض', 'ظ'];
const HE_GROUP: &[char] = &['ح', 'ه'];
const QAF_GROUP: &[char] = &['ق', 'غ'];
const ALEF: &[char] = &['ا'];
const ALEF_MADDA: &[char] = &['آ'];

/// Returns the characters interchangeable with `c` in casual dictation.
///
/// Classes are defined per character and do not always contain `c` itself:
/// `آ` maps to `ا` only and `ا` to `آ` only. Characters with no class return
/// `None` and keep their original value.
#[inline]
pub const fn sound_alike_class(c: char) -> Option<&'static [char]> {
    match c {
        'س' | 'ص' | 'ث' => Some(SIN_GROUP),
        'ت' | 'ط' => Some(TE_GROUP),
        'ز' | 'ذ' | 'ض' | 'ظ' => Some(ZE_GROUP),
        'ح' | 'ه' => Some(HE_GROUP),
        'ق' | 'غ' => Some(QAF_GROUP),
        'آ' => Some(ALEF),
        'ا' => Some(ALEF_MADDA),
        _ => None,
    }
}

/// Configuration for [`PhoneticVariantGenerator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneticConfig {
    /// Maximum number of variants generated per word. `None` generates the
    /// full product.
    pub max_variants: Option<usize>,
}

impl Default for PhoneticConfig {
    fn default() -> Self {
        Self {
            max_variants: Some(lexitag_types::config::DEFAULT_MAX_PHONETIC_VARIANTS),
        }
    }
}

type Choices<'w> = SmallVec<[&'w [char]; 32]>;

/// Generates sound-alike spellings of a word.
///
/// ```
/// use lexitag_core::analyzer::phonetic::PhoneticVariantGenerator;
///
/// let variants = PhoneticVariantGenerator::default().generate_variants("سس");
/// assert_eq!(variants.len(), 9);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneticVariantGenerator {
    config: PhoneticConfig,
}

impl PhoneticVariantGenerator {
    /// Creates a generator with the given configuration.
    pub const fn new(config: PhoneticConfig) -> Self {
        Self { config }
    }

    /// A generator with no output bound.
    pub const fn unbounded() -> Self {
        Self::new(PhoneticConfig { max_variants: None })
    }

    /// Number of variants the full expansion of `word` produces, saturating
    /// at `u128::MAX`. Zero for empty or whitespace-only input.
    pub fn variant_count(word: &str) -> u128 {
        if word.trim().is_empty() {
            return 0;
        }
        word.chars()
            .map(|c| sound_alike_class(c).map_or(1, |class| class.len() as u128))
            .fold(1u128, u128::saturating_mul)
    }

    /// Returns every string reachable by substituting each character with a
    /// member of its sound-alike class.
    ///
    /// Empty or whitespace-only input yields an empty set, not the word itself.
    pub fn generate_variants(&self, word: &str) -> TokenSet {
        let mut out = TokenSet::default();
        self.generate_into(word, &mut out);
        out
    }

    /// Inserts the variants of `word` into `out` and returns how many new
    /// strings were added.
    ///
    /// Expansion is iterative: an odometer over per-position choice indices,
    /// rightmost position fastest. The bound counts generated strings, so an
    /// `out` that already holds some of them still receives at most
    /// `max_variants` attempts.
    pub fn generate_into(&self, word: &str, out: &mut TokenSet) -> usize {
        if word.trim().is_empty() {
            return 0;
        }

        let chars: SmallVec<[char; 32]> = word.chars().collect();
        let choices: Choices<'_> = chars
            .iter()
            .map(|c| sound_alike_class(*c).unwrap_or(core::slice::from_ref(c)))
            .collect();

        let mut cursor: SmallVec<[usize; 32]> = SmallVec::from_elem(0, choices.len());
        let mut buf = String::with_capacity(word.len());
        let mut generated = 0usize;
        let mut added = 0usize;

        loop {
            buf.clear();
            for (class, &k) in choices.iter().zip(cursor.iter()) {
                buf.push(class[k]);
            }
            if out.insert(buf.clone()) {
                added += 1;
            }
            generated += 1;

            if !advance(&mut cursor, &choices) {
                return added;
            }

            if let Some(limit) = self.config.max_variants {
                if generated >= limit {
                    warn!(
                        target: "lexitag::phonetic",
                        limit,
                        total = %Self::variant_count(word),
                        "phonetic expansion truncated"
                    );
                    return added;
                }
            }
        }
    }
}

/// Steps the odometer. Returns `false` once every combination has been seen.
#[inline]
fn advance(cursor: &mut [usize], choices: &[&[char]]) -> bool {
    for pos in (0..cursor.len()).rev() {
        cursor[pos] += 1;
        if cursor[pos] < choices[pos].len() {
            return true;
        }
        cursor[pos] = 0;
    }
    false
}
