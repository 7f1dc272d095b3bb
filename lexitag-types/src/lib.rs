//! Core types for the Lexitag search tagger.
//!
//! This crate holds the data that crosses the boundary of the tagging engine:
//!
//! - **`IndexRequest`**: the inbound document-construction request
//! - **`SearchableDocument`**: the fully populated record handed to an index store
//! - **`FieldKind` / `Expansion`**: the vocabulary of the per-field tagging policy
//! - **`TagConfig`**: tunables shared by the analyzer and the indexer
//!
//! Keeping these separate from `lexitag-core` lets index-store adapters depend on
//! the document shape without pulling in the analyzer.

#![warn(missing_docs)]

use core::fmt;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

pub use config::{ConfigError, TagConfig};

/// Language code → text, one entry per language a field is authored in.
///
/// A `BTreeMap` keeps serialization and iteration order stable across runs.
pub type LanguageTaggedText = BTreeMap<String, String>;

/// Deduplicated set of derived search tokens.
pub type TokenSet = FxHashSet<String>;

/// Default rank score applied when the caller does not supply one.
pub const DEFAULT_RANK_SCORE: f64 = 1.0;
/// Default view count.
pub const DEFAULT_VIEW_COUNT: u32 = 1;
/// Default like count.
pub const DEFAULT_LIKE_COUNT: u32 = 1;
/// Default user rating.
pub const DEFAULT_USER_RATING: f64 = 1.0;
/// Default search hit count.
pub const DEFAULT_SEARCH_HIT_COUNT: u32 = 0;
/// Default document version.
pub const DEFAULT_VERSION: u32 = 1;

/// The kind of input field a value was supplied through.
///
/// Each kind has a fixed fan-out into the derived token sets; see
/// `lexitag_core::document::policy` for the table.
///
/// `#[repr(u8)]` keeps the discriminant usable as a compact table index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum FieldKind {
    /// Per-language title.
    Title = 0,
    /// Per-language description.
    Description = 1,
    /// Per-language body content, stored verbatim.
    Content = 2,
    /// Classification category.
    Category = 3,
    /// Classification subcategory.
    Subcategory = 4,
    /// Caller-supplied keyword.
    Keyword = 5,
    /// Caller-supplied tag.
    Tag = 6,
    /// Caller-supplied transliteration tag, stored verbatim.
    TransliterationTag = 7,
    /// Synonym of the document subject.
    Synonym = 8,
    /// Geographic region label.
    Region = 9,
    /// Value of an open key→value metadata entry.
    Metadata = 10,
}

impl FieldKind {
    /// Every field kind, in discriminant order.
    pub const ALL: [FieldKind; 11] = [
        FieldKind::Title,
        FieldKind::Description,
        FieldKind::Content,
        FieldKind::Category,
        FieldKind::Subcategory,
        FieldKind::Keyword,
        FieldKind::Tag,
        FieldKind::TransliterationTag,
        FieldKind::Synonym,
        FieldKind::Region,
        FieldKind::Metadata,
    ];

    /// Stable lower-case name, used in logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            FieldKind::Title => "title",
            FieldKind::Description => "description",
            FieldKind::Content => "content",
            FieldKind::Category => "category",
            FieldKind::Subcategory => "subcategory",
            FieldKind::Keyword => "keyword",
            FieldKind::Tag => "tag",
            FieldKind::TransliterationTag => "transliteration_tag",
            FieldKind::Synonym => "synonym",
            FieldKind::Region => "region",
            FieldKind::Metadata => "metadata",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a contributing value is turned into tokens for one target set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expansion {
    /// Raw value, normalized form, both keyboard forms and every phonetic variant.
    Keyword,
    /// Latin-keyboard form, normalized form and Persian-keyboard form.
    Transliteration,
    /// The value itself, untouched.
    Verbatim,
}

/// The derived token sets of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagTarget {
    /// `SearchableDocument::keywords`
    Keywords,
    /// `SearchableDocument::tags`
    Tags,
    /// `SearchableDocument::transliteration_tags`
    TransliterationTags,
}

/// A fully populated document, ready for an index write.
///
/// Built once per indexing request and not mutated afterwards. Every derived
/// set (`keywords`, `tags`, `transliteration_tags`) has set semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchableDocument {
    /// Title per language.
    pub title: LanguageTaggedText,
    /// Body content per language.
    pub content: LanguageTaggedText,
    /// Description per language.
    pub description: LanguageTaggedText,
    /// Whether the document is live.
    pub is_active: bool,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time, if any.
    pub updated_at: Option<DateTime<Utc>>,
    /// Language code used when a query does not name one.
    pub default_language: String,
    /// Author identifier.
    pub author_id: Option<String>,
    /// Classification type.
    #[serde(rename = "type")]
    pub doc_type: String,
    /// Categories, verbatim.
    pub categories: TokenSet,
    /// Subcategories, verbatim.
    pub subcategories: TokenSet,
    /// Derived keyword tokens.
    pub keywords: TokenSet,
    /// Derived tag tokens.
    pub tags: TokenSet,
    /// Derived transliteration tokens.
    pub transliteration_tags: TokenSet,
    /// Synonyms, verbatim.
    pub synonyms: TokenSet,
    /// Static ranking boost.
    pub rank_score: f64,
    /// View counter.
    pub view_count: u32,
    /// Like counter.
    pub like_count: u32,
    /// Average user rating.
    pub user_rating: f64,
    /// Number of times the document was returned by a search.
    pub search_hit_count: u32,
    /// Document schema version.
    pub version: u32,
    /// System the document originates from.
    pub source_system: Option<String>,
    /// City name.
    pub city: Option<String>,
    /// State or province.
    pub state: Option<String>,
    /// Country.
    pub country: Option<String>,
    /// Latitude in degrees, `0.0` when unknown.
    pub latitude: f64,
    /// Longitude in degrees, `0.0` when unknown.
    pub longitude: f64,
    /// Featured documents get a ranking boost.
    pub is_featured: bool,
    /// Last view or update.
    pub last_interaction_at: DateTime<Utc>,
    /// Regions, verbatim.
    pub regions: TokenSet,
    /// Embedding vector; any length, including empty, is accepted.
    pub embedding: Vec<f32>,
    /// Open key→value metadata, e.g. `{"location": "Paris"}`.
    pub metadata: BTreeMap<String, String>,
}

impl SearchableDocument {
    /// Returns the derived set for `target`.
    #[inline]
    pub fn target(&self, target: TagTarget) -> &TokenSet {
        match target {
            TagTarget::Keywords => &self.keywords,
            TagTarget::Tags => &self.tags,
            TagTarget::TransliterationTags => &self.transliteration_tags,
        }
    }
}

/// Inbound document-construction request.
///
/// Every field is optional on the wire. Scalars left as `None` pick up the
/// documented defaults when the document is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexRequest {
    /// Title per language.
    pub title: LanguageTaggedText,
    /// Body content per language.
    pub content: LanguageTaggedText,
    /// Description per language.
    pub description: LanguageTaggedText,
    /// Defaults to `true`.
    pub is_active: Option<bool>,
    /// Defaults to the build time.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,
    /// Default language code.
    pub default_language: String,
    /// Author identifier.
    pub author_id: Option<String>,
    /// Classification type.
    #[serde(rename = "type")]
    pub doc_type: String,
    /// Categories.
    pub categories: Vec<String>,
    /// Subcategories.
    pub subcategories: Vec<String>,
    /// Explicit keywords.
    pub keywords: Vec<String>,
    /// Explicit tags.
    pub tags: Vec<String>,
    /// Explicit transliteration tags.
    pub transliteration_tags: Vec<String>,
    /// Synonyms.
    pub synonyms: Vec<String>,
    /// Defaults to [`DEFAULT_RANK_SCORE`].
    pub rank_score: Option<f64>,
    /// Defaults to [`DEFAULT_VIEW_COUNT`].
    pub view_count: Option<u32>,
    /// Defaults to [`DEFAULT_LIKE_COUNT`].
    pub like_count: Option<u32>,
    /// Defaults to [`DEFAULT_USER_RATING`].
    pub user_rating: Option<f64>,
    /// Defaults to [`DEFAULT_SEARCH_HIT_COUNT`].
    pub search_hit_count: Option<u32>,
    /// Defaults to [`DEFAULT_VERSION`].
    pub version: Option<u32>,
    /// Originating system.
    pub source_system: Option<String>,
    /// City name.
    pub city: Option<String>,
    /// State or province.
    pub state: Option<String>,
    /// Country.
    pub country: Option<String>,
    /// Defaults to `0.0`.
    pub latitude: Option<f64>,
    /// Defaults to `0.0`.
    pub longitude: Option<f64>,
    /// Featured flag.
    pub is_featured: bool,
    /// Defaults to the build time.
    pub last_interaction_at: Option<DateTime<Utc>>,
    /// Regions.
    pub regions: Vec<String>,
    /// Embedding vector from an external provider.
    pub embedding: Vec<f32>,
    /// Open metadata.
    pub metadata: BTreeMap<String, String>,
}

/// Failure reported at the index-write boundary.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// The index store rejected or failed the write.
    #[error("indexing failed: {detail}")]
    WriteFailed {
        /// Diagnostic detail from the store.
        detail: String,
    },
}

/// Configuration for the tagger and indexer.
pub mod config {
    use std::path::Path;

    use serde::{Deserialize, Serialize};

    /// Default upper bound on phonetic variants generated for a single value.
    pub const DEFAULT_MAX_PHONETIC_VARIANTS: usize = 65_536;

    /// Default index the document is written to.
    pub const DEFAULT_INDEX_NAME: &str = "searchable_documents";

    /// Errors that can occur while loading a [`TagConfig`].
    #[derive(Debug, thiserror::Error)]
    pub enum ConfigError {
        /// The config file could not be read.
        #[error("failed to read config: {0}")]
        Io(#[from] std::io::Error),
        /// The config file is not valid JSON for this schema.
        #[error("failed to parse config: {0}")]
        Parse(#[from] serde_json::Error),
        /// A value is out of range.
        #[error("invalid config: {reason}")]
        Invalid {
            /// What is wrong.
            reason: &'static str,
        },
    }

    /// Tagging and indexing options.
    ///
    /// # Example
    /// ```
    /// use lexitag_types::TagConfig;
    ///
    /// let config = TagConfig::from_json_str(r#"{ "max_phonetic_variants": 512 }"#).unwrap();
    /// assert_eq!(config.max_phonetic_variants, Some(512));
    /// assert_eq!(config.index_name, "searchable_documents");
    /// ```
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct TagConfig {
        /// Cap on distinct phonetic variants per value. `None` disables the cap,
        /// which exposes callers to the full exponential expansion.
        pub max_phonetic_variants: Option<usize>,
        /// Target index for writes.
        pub index_name: String,
        /// Ask the store to wait until the write is visible to searches.
        pub wait_for_refresh: bool,
    }

    impl Default for TagConfig {
        fn default() -> Self {
            Self {
                max_phonetic_variants: Some(DEFAULT_MAX_PHONETIC_VARIANTS),
                index_name: DEFAULT_INDEX_NAME.to_owned(),
                wait_for_refresh: true,
            }
        }
    }

    impl TagConfig {
        /// Parses and validates a JSON config. Missing keys take their defaults.
        pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
            let config: TagConfig = serde_json::from_str(json)?;
            config.validate()?;
            Ok(config)
        }

        /// Reads, parses and validates a JSON config file.
        pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
            let raw = std::fs::read_to_string(path)?;
            Self::from_json_str(&raw)
        }

        /// Checks value ranges.
        ///
        /// # Errors
        /// Returns `ConfigError::Invalid` for a zero variant cap or an empty index name.
        pub fn validate(&self) -> Result<(), ConfigError> {
            if self.max_phonetic_variants == Some(0) {
                return Err(ConfigError::Invalid {
                    reason: "max_phonetic_variants must be at least 1",
                });
            }
            if self.index_name.trim().is_empty() {
                return Err(ConfigError::Invalid {
                    reason: "index_name must not be empty",
                });
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_kind_size_is_1_byte() {
        assert_eq!(size_of::<FieldKind>(), 1);
    }

    #[test]
    fn field_kind_all_is_in_discriminant_order() {
        for (i, kind) in FieldKind::ALL.iter().enumerate() {
            assert_eq!(*kind as usize, i);
        }
    }

    #[test]
    fn field_kind_display() {
        assert_eq!(FieldKind::TransliterationTag.to_string(), "transliteration_tag");
        assert_eq!(FieldKind::Title.to_string(), "title");
    }

    #[test]
    fn request_deserializes_from_sparse_json() {
        let req: IndexRequest = serde_json::from_str(
            r#"{ "title": { "en": "Coffee Shop" }, "type": "place", "metadata": { "location": "Paris" } }"#,
        )
        .unwrap();

        assert_eq!(req.title.get("en").map(String::as_str), Some("Coffee Shop"));
        assert_eq!(req.doc_type, "place");
        assert!(req.content.is_empty());
        assert!(req.view_count.is_none());
        assert!(req.latitude.is_none());
        assert_eq!(req.metadata.get("location").map(String::as_str), Some("Paris"));
    }

    #[test]
    fn empty_request_is_valid_json() {
        let req: IndexRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req, IndexRequest::default());
    }

    #[test]
    fn default_config() {
        let config = TagConfig::default();
        assert_eq!(
            config.max_phonetic_variants,
            Some(config::DEFAULT_MAX_PHONETIC_VARIANTS)
        );
        assert_eq!(config.index_name, "searchable_documents");
        assert!(config.wait_for_refresh);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_rejects_zero_cap() {
        let err = TagConfig::from_json_str(r#"{ "max_phonetic_variants": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn config_accepts_unbounded() {
        let config = TagConfig::from_json_str(r#"{ "max_phonetic_variants": null }"#).unwrap();
        assert_eq!(config.max_phonetic_variants, None);
    }

    #[test]
    fn config_rejects_blank_index_name() {
        let err = TagConfig::from_json_str(r#"{ "index_name": "  " }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn config_parse_error() {
        let err = TagConfig::from_json_str("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn config_missing_file() {
        let err = TagConfig::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn index_error_display_carries_detail() {
        let err = IndexError::WriteFailed {
            detail: "shard unavailable".into(),
        };
        assert_eq!(err.to_string(), "indexing failed: shard unavailable");
    }
}
