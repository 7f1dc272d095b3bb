//! Single-use accumulator for [`SearchableDocument`].

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use lexitag_types::{
    FieldKind, LanguageTaggedText, SearchableDocument, TokenSet, DEFAULT_LIKE_COUNT,
    DEFAULT_RANK_SCORE, DEFAULT_SEARCH_HIT_COUNT, DEFAULT_USER_RATING, DEFAULT_VERSION,
    DEFAULT_VIEW_COUNT,
};
use tracing::debug;

use super::policy::policy_for;
use crate::analyzer::TextAnalyzer;

/// Builds one [`SearchableDocument`].
///
/// Every `with_*` call stores the value in its own field and, according to
/// [`policy_for`], unions its expansions into the derived sets. Nothing is
/// carried over between documents: [`build`](Self::build) consumes the builder.
///
/// # Example
///
/// ```
/// use lexitag_core::document::SearchableDocumentBuilder;
///
/// let mut builder = SearchableDocumentBuilder::new();
/// builder.with_title("en", "Coffee Shop").with_category(["cafe"]);
/// let doc = builder.build();
///
/// assert!(doc.keywords.contains("coffee shop"));
/// assert!(doc.tags.contains("cafe"));
/// ```
#[derive(Debug)]
pub struct SearchableDocumentBuilder {
    analyzer: TextAnalyzer,
    title: LanguageTaggedText,
    content: LanguageTaggedText,
    description: LanguageTaggedText,
    is_active: bool,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    default_language: String,
    author_id: Option<String>,
    doc_type: String,
    categories: TokenSet,
    subcategories: TokenSet,
    keywords: TokenSet,
    tags: TokenSet,
    transliteration_tags: TokenSet,
    synonyms: TokenSet,
    rank_score: f64,
    view_count: u32,
    like_count: u32,
    user_rating: f64,
    search_hit_count: u32,
    version: u32,
    source_system: Option<String>,
    city: Option<String>,
    state: Option<String>,
    country: Option<String>,
    latitude: f64,
    longitude: f64,
    is_featured: bool,
    last_interaction_at: Option<DateTime<Utc>>,
    regions: TokenSet,
    embedding: Vec<f32>,
    metadata: BTreeMap<String, String>,
}

impl Default for SearchableDocumentBuilder {
    fn default() -> Self {
        Self::with_analyzer(TextAnalyzer::default())
    }
}

impl SearchableDocumentBuilder {
    /// Creates a builder with the default analyzer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder that expands values with `analyzer`.
    pub fn with_analyzer(analyzer: TextAnalyzer) -> Self {
        Self {
            analyzer,
            title: LanguageTaggedText::new(),
            content: LanguageTaggedText::new(),
            description: LanguageTaggedText::new(),
            is_active: true,
            created_at: None,
            updated_at: None,
            default_language: String::new(),
            author_id: None,
            doc_type: String::new(),
            categories: TokenSet::default(),
            subcategories: TokenSet::default(),
            keywords: TokenSet::default(),
            tags: TokenSet::default(),
            transliteration_tags: TokenSet::default(),
            synonyms: TokenSet::default(),
            rank_score: DEFAULT_RANK_SCORE,
            view_count: DEFAULT_VIEW_COUNT,
            like_count: DEFAULT_LIKE_COUNT,
            user_rating: DEFAULT_USER_RATING,
            search_hit_count: DEFAULT_SEARCH_HIT_COUNT,
            version: DEFAULT_VERSION,
            source_system: None,
            city: None,
            state: None,
            country: None,
            latitude: 0.0,
            longitude: 0.0,
            is_featured: false,
            last_interaction_at: None,
            regions: TokenSet::default(),
            embedding: Vec::new(),
            metadata: BTreeMap::new(),
        }
    }

    /// Unions the expansions of `value` into every set `kind` feeds.
    fn contribute(&mut self, kind: FieldKind, value: &str) {
        let policy = policy_for(kind);
        if let Some(expansion) = policy.keywords {
            self.analyzer.expand_into(expansion, value, &mut self.keywords);
        }
        if let Some(expansion) = policy.tags {
            self.analyzer.expand_into(expansion, value, &mut self.tags);
        }
        if let Some(expansion) = policy.transliteration_tags {
            self.analyzer.expand_into(expansion, value, &mut self.transliteration_tags);
        }
    }

    /// Sets the title for `lang`. Feeds keywords, tags and transliteration tags.
    pub fn with_title(&mut self, lang: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        self.contribute(FieldKind::Title, &value);
        self.title.insert(lang.into(), value);
        self
    }

    /// Sets the content for `lang`. Stored verbatim only.
    pub fn with_content(&mut self, lang: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.content.insert(lang.into(), value.into());
        self
    }

    /// Sets the description for `lang`. Feeds keywords.
    pub fn with_description(
        &mut self,
        lang: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        let value = value.into();
        self.contribute(FieldKind::Description, &value);
        self.description.insert(lang.into(), value);
        self
    }

    /// Sets the classification type.
    pub fn with_type(&mut self, doc_type: impl Into<String>) -> &mut Self {
        self.doc_type = doc_type.into();
        self
    }

    /// Sets the author.
    pub fn with_author(&mut self, author_id: Option<String>) -> &mut Self {
        self.author_id = author_id;
        self
    }

    /// Sets the default language code.
    pub fn with_language(&mut self, default_language: impl Into<String>) -> &mut Self {
        self.default_language = default_language.into();
        self
    }

    /// Sets the active flag.
    pub fn with_active(&mut self, is_active: bool) -> &mut Self {
        self.is_active = is_active;
        self
    }

    /// Sets the creation time. Defaults to the build time.
    pub fn with_created_at(&mut self, created_at: DateTime<Utc>) -> &mut Self {
        self.created_at = Some(created_at);
        self
    }

    /// Sets the last update time.
    pub fn with_updated_at(&mut self, updated_at: Option<DateTime<Utc>>) -> &mut Self {
        self.updated_at = updated_at;
        self
    }

    /// Adds categories. Each feeds tags and keywords.
    pub fn with_category<I, S>(&mut self, categories: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for category in categories {
            let category = category.into();
            self.contribute(FieldKind::Category, &category);
            self.categories.insert(category);
        }
        self
    }

    /// Adds subcategories. Each feeds tags and keywords.
    pub fn with_subcategory<I, S>(&mut self, subcategories: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for subcategory in subcategories {
            let subcategory = subcategory.into();
            self.contribute(FieldKind::Subcategory, &subcategory);
            self.subcategories.insert(subcategory);
        }
        self
    }

    /// Adds explicit keywords with the full keyword expansion.
    pub fn with_keyword<I, S>(&mut self, keywords: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for keyword in keywords {
            self.contribute(FieldKind::Keyword, keyword.as_ref());
        }
        self
    }

    /// Adds explicit tags. Each feeds tags only.
    pub fn with_tag<I, S>(&mut self, tags: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for tag in tags {
            self.contribute(FieldKind::Tag, tag.as_ref());
        }
        self
    }

    /// Adds transliteration tags verbatim.
    pub fn with_transliteration_tags<I, S>(&mut self, tags: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for tag in tags {
            self.contribute(FieldKind::TransliterationTag, tag.as_ref());
        }
        self
    }

    /// Adds synonyms. Each feeds tags, transliteration tags and keywords.
    pub fn with_synonyms<I, S>(&mut self, synonyms: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for synonym in synonyms {
            let synonym = synonym.into();
            self.contribute(FieldKind::Synonym, &synonym);
            self.synonyms.insert(synonym);
        }
        self
    }

    /// Sets the coordinates.
    pub fn with_geo(&mut self, latitude: f64, longitude: f64) -> &mut Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    /// Sets city, state and country.
    pub fn with_location(
        &mut self,
        city: Option<String>,
        state: Option<String>,
        country: Option<String>,
    ) -> &mut Self {
        self.city = city;
        self.state = state;
        self.country = country;
        self
    }

    /// Adds regions. Each feeds tags.
    pub fn with_region<I, S>(&mut self, regions: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for region in regions {
            let region = region.into();
            self.contribute(FieldKind::Region, &region);
            self.regions.insert(region);
        }
        self
    }

    /// Sets a metadata entry. The value feeds tags and keywords.
    pub fn with_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        self.contribute(FieldKind::Metadata, &value);
        self.metadata.insert(key.into(), value);
        self
    }

    /// Attaches an embedding vector as-is.
    pub fn with_embedding(&mut self, embedding: Vec<f32>) -> &mut Self {
        self.embedding = embedding;
        self
    }

    /// Sets the featured flag.
    pub fn mark_as_featured(&mut self, is_featured: bool) -> &mut Self {
        self.is_featured = is_featured;
        self
    }

    /// Sets the last interaction time. Defaults to the build time.
    pub fn with_last_interaction(&mut self, time: DateTime<Utc>) -> &mut Self {
        self.last_interaction_at = Some(time);
        self
    }

    /// Sets the originating system.
    pub fn with_source_system(&mut self, system: Option<String>) -> &mut Self {
        self.source_system = system;
        self
    }

    /// Sets the rank score.
    pub fn with_rank_score(&mut self, score: f64) -> &mut Self {
        self.rank_score = score;
        self
    }

    /// Sets the document version.
    pub fn with_version(&mut self, version: u32) -> &mut Self {
        self.version = version;
        self
    }

    /// Sets views, likes, rating and search hits.
    pub fn with_metrics(&mut self, views: u32, likes: u32, rating: f64, hits: u32) -> &mut Self {
        self.view_count = views;
        self.like_count = likes;
        self.user_rating = rating;
        self.search_hit_count = hits;
        self
    }

    /// Finishes the document. Unset timestamps are filled with the current time.
    pub fn build(self) -> SearchableDocument {
        let now = Utc::now();

        debug!(
            target: "lexitag::builder",
            keywords = self.keywords.len(),
            tags = self.tags.len(),
            transliteration_tags = self.transliteration_tags.len(),
            "document built"
        );

        SearchableDocument {
            title: self.title,
            content: self.content,
            description: self.description,
            is_active: self.is_active,
            created_at: self.created_at.unwrap_or(now),
            updated_at: self.updated_at,
            default_language: self.default_language,
            author_id: self.author_id,
            doc_type: self.doc_type,
            categories: self.categories,
            subcategories: self.subcategories,
            keywords: self.keywords,
            tags: self.tags,
            transliteration_tags: self.transliteration_tags,
            synonyms: self.synonyms,
            rank_score: self.rank_score,
            view_count: self.view_count,
            like_count: self.like_count,
            user_rating: self.user_rating,
            search_hit_count: self.search_hit_count,
            version: self.version,
            source_system: self.source_system,
            city: self.city,
            state: self.state,
            country: self.country,
            latitude: self.latitude,
            longitude: self.longitude,
            is_featured: self.is_featured,
            last_interaction_at: self.last_interaction_at.unwrap_or(now),
            regions: self.regions,
            embedding: self.embedding,
            metadata: self.metadata,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forms(value: &str) -> [String; 3] {
        TextAnalyzer::default().transliteration_forms(value)
    }

    #[test]
    fn coffee_shop_title_only() {
        let mut b = SearchableDocumentBuilder::new();
        b.with_title("en", "Coffee Shop");
        let doc = b.build();

        for expected in ["Coffee Shop", "coffee shop", "زخببثث ساخح"] {
            assert!(doc.keywords.contains(expected), "keywords missing {expected}");
            assert!(doc.tags.contains(expected), "tags missing {expected}");
            assert!(doc.transliteration_tags.contains(expected));
        }
        assert_eq!(doc.tags.len(), 3);
        assert!(doc.content.is_empty());
        assert!(doc.description.is_empty());
        assert_eq!(doc.title.get("en").map(String::as_str), Some("Coffee Shop"));
    }

    #[test]
    fn content_feeds_no_derived_set() {
        let mut b = SearchableDocumentBuilder::new();
        b.with_content("en", "Long body text about espresso");
        let doc = b.build();

        assert!(doc.keywords.is_empty());
        assert!(doc.tags.is_empty());
        assert!(doc.transliteration_tags.is_empty());
        assert_eq!(doc.content.len(), 1);
    }

    #[test]
    fn description_feeds_keywords_only() {
        let mut b = SearchableDocumentBuilder::new();
        b.with_description("en", "Fresh Beans");
        let doc = b.build();

        assert!(doc.keywords.contains("Fresh Beans"));
        assert!(doc.keywords.contains("fresh beans"));
        assert!(doc.tags.is_empty());
        assert!(doc.transliteration_tags.is_empty());
    }

    #[test]
    fn metadata_feeds_tags_and_keywords_and_is_kept() {
        let mut b = SearchableDocumentBuilder::new();
        b.with_metadata("location", "Paris");
        let doc = b.build();

        for form in forms("Paris") {
            assert!(doc.tags.contains(&form));
            assert!(doc.keywords.contains(&form));
        }
        assert!(doc.transliteration_tags.is_empty());
        assert_eq!(doc.metadata.get("location").map(String::as_str), Some("Paris"));
    }

    #[test]
    fn synonyms_feed_everything() {
        let mut b = SearchableDocumentBuilder::new();
        b.with_synonyms(["Cafe"]);
        let doc = b.build();

        for form in forms("Cafe") {
            assert!(doc.tags.contains(&form));
            assert!(doc.transliteration_tags.contains(&form));
            assert!(doc.keywords.contains(&form));
        }
        assert!(doc.synonyms.contains("Cafe"));
    }

    #[test]
    fn tags_and_regions_feed_tags_only() {
        let mut b = SearchableDocumentBuilder::new();
        b.with_tag(["Latte"]).with_region(["Europe"]);
        let doc = b.build();

        assert!(doc.keywords.is_empty());
        assert!(doc.transliteration_tags.is_empty());
        assert!(doc.tags.contains("latte"));
        assert!(doc.tags.contains("europe"));
        assert!(doc.regions.contains("Europe"));
    }

    #[test]
    fn categories_are_kept_and_expanded() {
        let mut b = SearchableDocumentBuilder::new();
        b.with_category(["Food"]).with_subcategory(["Bakery"]);
        let doc = b.build();

        assert!(doc.categories.contains("Food"));
        assert!(doc.subcategories.contains("Bakery"));
        assert!(doc.tags.contains("food"));
        assert!(doc.keywords.contains("bakery"));
        assert!(doc.transliteration_tags.is_empty());
    }

    #[test]
    fn explicit_transliteration_tags_are_verbatim() {
        let mut b = SearchableDocumentBuilder::new();
        b.with_transliteration_tags(["Kafe!"]);
        let doc = b.build();

        assert_eq!(doc.transliteration_tags.len(), 1);
        assert!(doc.transliteration_tags.contains("Kafe!"));
    }

    #[test]
    fn explicit_keywords_include_phonetic_variants() {
        let mut b = SearchableDocumentBuilder::new();
        b.with_keyword(["سس"]);
        let doc = b.build();

        assert!(doc.keywords.contains("ثص"));
        assert!(doc.keywords.contains("ss"));
        assert!(doc.tags.is_empty());
    }

    #[test]
    fn derived_sets_deduplicate() {
        let mut b = SearchableDocumentBuilder::new();
        b.with_tag(["paris", "Paris", "PARIS"]);
        let doc = b.build();
        // "paris", "Paris", "PARIS" plus the shared normalized and Persian forms
        assert_eq!(doc.tags.len(), 4);
    }

    #[test]
    fn defaults_applied() {
        let before = Utc::now();
        let doc = SearchableDocumentBuilder::new().build();
        let after = Utc::now();

        assert_eq!(doc.view_count, 1);
        assert_eq!(doc.like_count, 1);
        assert_eq!(doc.user_rating, 1.0);
        assert_eq!(doc.search_hit_count, 0);
        assert_eq!(doc.rank_score, 1.0);
        assert_eq!(doc.version, 1);
        assert_eq!(doc.latitude, 0.0);
        assert_eq!(doc.longitude, 0.0);
        assert!(doc.is_active);
        assert!(!doc.is_featured);
        assert!(doc.last_interaction_at >= before && doc.last_interaction_at <= after);
        assert!(doc.created_at >= before && doc.created_at <= after);
    }

    #[test]
    fn explicit_scalars_win() {
        let ts = DateTime::parse_from_rfc3339("2024-05-01T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let mut b = SearchableDocumentBuilder::new();
        b.with_metrics(10, 2, 4.5, 7)
            .with_rank_score(2.5)
            .with_geo(48.85, 2.35)
            .with_last_interaction(ts)
            .with_created_at(ts)
            .mark_as_featured(true)
            .with_embedding(vec![0.1, 0.2]);
        let doc = b.build();

        assert_eq!(doc.view_count, 10);
        assert_eq!(doc.like_count, 2);
        assert_eq!(doc.user_rating, 4.5);
        assert_eq!(doc.search_hit_count, 7);
        assert_eq!(doc.rank_score, 2.5);
        assert_eq!(doc.latitude, 48.85);
        assert_eq!(doc.last_interaction_at, ts);
        assert_eq!(doc.created_at, ts);
        assert!(doc.is_featured);
        assert_eq!(doc.embedding, vec![0.1, 0.2]);
    }

    #[test]
    fn later_title_for_same_language_replaces_text_but_keeps_tokens() {
        let mut b = SearchableDocumentBuilder::new();
        b.with_title("en", "Tea").with_title("en", "Coffee");
        let doc = b.build();

        assert_eq!(doc.title.get("en").map(String::as_str), Some("Coffee"));
        assert!(doc.tags.contains("tea"));
        assert!(doc.tags.contains("coffee"));
    }
}
