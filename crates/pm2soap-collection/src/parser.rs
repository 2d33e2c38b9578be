//! Postman collection loader.

use crate::types::Collection;
use pm2soap_core::Result;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Loads a Postman collection document into typed records.
pub struct CollectionParser {
    collection: Collection,
}

impl CollectionParser {
    /// Load and parse a collection from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading collection from {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse a collection from JSON text.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let collection: Collection = serde_json::from_str(content)?;
        Ok(Self::with_collection(collection))
    }

    /// Convert an already-parsed JSON document.
    pub fn from_value(value: Value) -> Result<Self> {
        let collection: Collection = serde_json::from_value(value)?;
        Ok(Self::with_collection(collection))
    }

    fn with_collection(collection: Collection) -> Self {
        debug!(
            "Parsed collection '{}' with {} top-level items",
            collection.info.name,
            collection.item.len()
        );
        Self { collection }
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn into_collection(self) -> Collection {
        self.collection
    }
}
