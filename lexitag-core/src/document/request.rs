//! Request → document assembly.

use lexitag_types::{
    IndexRequest, SearchableDocument, TagConfig, DEFAULT_LIKE_COUNT, DEFAULT_RANK_SCORE,
    DEFAULT_SEARCH_HIT_COUNT, DEFAULT_USER_RATING, DEFAULT_VERSION, DEFAULT_VIEW_COUNT,
};

use super::builder::SearchableDocumentBuilder;
use crate::analyzer::TextAnalyzer;

/// Builds the document for `request`, applying defaults to every scalar the
/// caller left unset.
pub fn build_document(request: &IndexRequest, config: &TagConfig) -> SearchableDocument {
    let mut builder = SearchableDocumentBuilder::with_analyzer(TextAnalyzer::from_config(config));

    for (lang, title) in &request.title {
        builder.with_title(lang.as_str(), title.as_str());
    }
    for (lang, content) in &request.content {
        builder.with_content(lang.as_str(), content.as_str());
    }
    for (lang, description) in &request.description {
        builder.with_description(lang.as_str(), description.as_str());
    }

    builder
        .with_type(request.doc_type.as_str())
        .with_language(request.default_language.as_str())
        .with_active(request.is_active.unwrap_or(true))
        .with_updated_at(request.updated_at)
        .with_author(request.author_id.clone())
        .with_category(request.categories.iter().map(String::as_str))
        .with_subcategory(request.subcategories.iter().map(String::as_str))
        .with_keyword(&request.keywords)
        .with_tag(&request.tags)
        .with_transliteration_tags(&request.transliteration_tags)
        .with_synonyms(request.synonyms.iter().map(String::as_str))
        .with_geo(
            request.latitude.unwrap_or(0.0),
            request.longitude.unwrap_or(0.0),
        )
        .with_location(
            request.city.clone(),
            request.state.clone(),
            request.country.clone(),
        )
        .with_region(request.regions.iter().map(String::as_str))
        .with_embedding(request.embedding.clone())
        .with_source_system(request.source_system.clone())
        .mark_as_featured(request.is_featured)
        .with_rank_score(request.rank_score.unwrap_or(DEFAULT_RANK_SCORE))
        .with_version(request.version.unwrap_or(DEFAULT_VERSION))
        .with_metrics(
            request.view_count.unwrap_or(DEFAULT_VIEW_COUNT),
            request.like_count.unwrap_or(DEFAULT_LIKE_COUNT),
            request.user_rating.unwrap_or(DEFAULT_USER_RATING),
            request.search_hit_count.unwrap_or(DEFAULT_SEARCH_HIT_COUNT),
        );

    if let Some(created_at) = request.created_at {
        builder.with_created_at(created_at);
    }
    if let Some(last_interaction_at) = request.last_interaction_at {
        builder.with_last_interaction(last_interaction_at);
    }

    for (key, value) in &request.metadata {
        builder.with_metadata(key.as_str(), value.as_str());
    }

    builder.build()
}
