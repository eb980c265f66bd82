//! Entity document entity - an entity definition wrapped as a content document

use std::collections::BTreeSet;

/// Collection every entity model document is tagged with
pub const ENTITY_MODEL_COLLECTION: &str = "http://marklogic.com/entity-services/models";

/// Metadata attached to a content document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentMetadata {
    collections: BTreeSet<String>,
}

impl DocumentMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collections.insert(collection.into());
        self
    }

    pub fn collections(&self) -> impl Iterator<Item = &str> {
        self.collections.iter().map(String::as_str)
    }

    pub fn has_collection(&self, collection: &str) -> bool {
        self.collections.contains(collection)
    }
}

/// Content document derived from a file inside an entity definitions directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDocument {
    uri: String,
    body: String,
    metadata: DocumentMetadata,
}

impl EntityDocument {
    /// Build the document for `file_name`, tagged with `collection`.
    pub fn new(file_name: &str, body: impl Into<String>, collection: &str) -> Self {
        Self {
            uri: format!("/entities/{}", file_name),
            body: body.into(),
            metadata: DocumentMetadata::new().with_collection(collection),
        }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn metadata(&self) -> &DocumentMetadata {
        &self.metadata
    }
}
