//! Index-write boundary.
//!
//! The tagger does not talk to a search engine itself. A [`DocumentSink`]
//! receives each built document; whether the write retries or waits for
//! visibility is the sink's business. [`Indexer`] ties request handling
//! together: build, write, and surface failures as [`IndexError::WriteFailed`].

use std::error::Error as StdError;
use std::io::Write;

use lexitag_types::{IndexError, IndexRequest, SearchableDocument, TagConfig};
use serde::Serialize;
use tracing::{info, warn};

use crate::document::build_document;

/// Boxed diagnostic returned by a sink.
pub type SinkError = Box<dyn StdError + Send + Sync>;

/// External index store.
pub trait DocumentSink {
    /// Writes `document` to `index`. `wait_for_refresh` asks the store to
    /// return only once the document is searchable.
    fn write(
        &mut self,
        index: &str,
        document: &SearchableDocument,
        wait_for_refresh: bool,
    ) -> Result<(), SinkError>;
}

/// Collects documents in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    documents: Vec<(String, SearchableDocument)>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// `(index, document)` pairs in write order.
    pub fn documents(&self) -> &[(String, SearchableDocument)] {
        &self.documents
    }

    /// Number of documents written.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// `true` if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentSink for MemorySink {
    fn write(
        &mut self,
        index: &str,
        document: &SearchableDocument,
        _wait_for_refresh: bool,
    ) -> Result<(), SinkError> {
        self.documents.push((index.to_owned(), document.clone()));
        Ok(())
    }
}

#[derive(Serialize)]
struct JsonLine<'a> {
    index: &'a str,
    refresh: bool,
    document: &'a SearchableDocument,
}

/// Writes one JSON object per document, newline-delimited.
///
/// Each line carries the target index and refresh flag alongside the
/// document, so the stream can be replayed into a bulk endpoint.
#[derive(Debug)]
pub struct JsonLinesSink<W> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    /// Wraps `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the inner writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DocumentSink for JsonLinesSink<W> {
    fn write(
        &mut self,
        index: &str,
        document: &SearchableDocument,
        wait_for_refresh: bool,
    ) -> Result<(), SinkError> {
        let line = JsonLine {
            index,
            refresh: wait_for_refresh,
            document,
        };
        serde_json::to_writer(&mut self.writer, &line)?;
        self.writer.write_all(b"\n")?;
        if wait_for_refresh {
            self.writer.flush()?;
        }
        Ok(())
    }
}

/// Builds documents from requests and hands them to a sink.
#[derive(Debug)]
pub struct Indexer<S> {
    sink: S,
    config: TagConfig,
}

impl<S: DocumentSink> Indexer<S> {
    /// Creates an indexer writing to `sink`.
    pub fn new(sink: S, config: TagConfig) -> Self {
        Self { sink, config }
    }

    /// Active configuration.
    pub fn config(&self) -> &TagConfig {
        &self.config
    }

    /// The underlying sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the indexer and returns the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Builds the document for `request` and writes it.
    ///
    /// # Errors
    ///
    /// Returns `IndexError::WriteFailed` carrying the sink's diagnostic when
    /// the write fails.
    pub fn index(&mut self, request: &IndexRequest) -> Result<(), IndexError> {
        let document = build_document(request, &self.config);
        let index = self.config.index_name.as_str();

        match self
            .sink
            .write(index, &document, self.config.wait_for_refresh)
        {
            Ok(()) => {
                info!(
                    target: "lexitag::indexer",
                    index,
                    keywords = document.keywords.len(),
                    tags = document.tags.len(),
                    "document indexed"
                );
                Ok(())
            }
            Err(e) => {
                warn!(target: "lexitag::indexer", index, error = %e, "index write failed");
                Err(IndexError::WriteFailed {
                    detail: e.to_string(),
                })
            }
        }
    }
}
