//! JSON collection files.
//!
//! ```json
//! {
//!   "current_deck": "Japanese",
//!   "notes": [
//!     { "id": 1, "deck": "Japanese", "note_type": "Basic",
//!       "fields": [ { "name": "Front", "content": "猫" } ] }
//!   ]
//! }
//! ```
//!
//! Field declaration order is the array order.

use std::path::Path;

use hoverdict_core::{Record, StoreError};
use serde::Deserialize;
use tracing::info;

use crate::memory::MemoryStore;

#[derive(Debug, Deserialize)]
pub struct Collection {
    #[serde(default)]
    pub current_deck: String,
    #[serde(default)]
    pub notes: Vec<Record>,
}

impl Collection {
    pub fn from_json(text: &str) -> Result<Self, StoreError> {
        serde_json::from_str(text).map_err(|e| StoreError::Parse(e.to_string()))
    }

    pub fn into_store(self) -> Result<MemoryStore, StoreError> {
        MemoryStore::from_records(self.current_deck, self.notes)
    }
}

/// Read a collection file into a fresh [`MemoryStore`].
pub fn load(path: &Path) -> Result<MemoryStore, StoreError> {
    let text = std::fs::read_to_string(path)?;
    let store = Collection::from_json(&text)?.into_store()?;
    info!(path = %path.display(), notes = store.len(), deck = %store.current_deck(), "collection loaded");
    Ok(store)
}
