//! Lexitag: search-token generation for multilingual documents.
//!
//! Given language-tagged field values, builds a [`SearchableDocument`] whose
//! keyword, tag and transliteration-tag sets hold normalized forms,
//! keyboard-layout transliterations and phonetic dictation variants of the
//! input.
//!
//! ```
//! use lexitag_core::{build_document, IndexRequest, TagConfig};
//!
//! let mut request = IndexRequest::default();
//! request.title.insert("en".into(), "Coffee Shop".into());
//!
//! let doc = build_document(&request, &TagConfig::default());
//! assert!(doc.keywords.contains("coffee shop"));
//! assert!(doc.tags.contains("زخببثث ساخح"));
//! ```
//!
//! All transforms are pure and synchronous; the index write lives behind
//! [`sink::DocumentSink`].

pub mod analyzer;
pub mod document;
pub mod sink;

pub use analyzer::TextAnalyzer;
pub use document::{build_document, SearchableDocumentBuilder};
pub use lexitag_types::{
    Expansion, FieldKind, IndexError, IndexRequest, SearchableDocument, TagConfig, TagTarget,
    TokenSet,
};
pub use sink::{DocumentSink, Indexer, JsonLinesSink, MemorySink};
