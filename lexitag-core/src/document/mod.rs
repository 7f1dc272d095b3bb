//! Document assembly.
//!
//! - **Policy**: which derived sets each field kind feeds
//! - **Builder**: single-use accumulator producing a `SearchableDocument`
//! - **Request**: builds a document from an inbound `IndexRequest`

pub mod builder;
pub mod policy;
pub mod request;

pub use builder::SearchableDocumentBuilder;
pub use policy::{policy_for, FieldPolicy, POLICY};
pub use request::build_document;
