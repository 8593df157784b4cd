//! Test builders — ergonomic constructors for notes, stores, and services.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use std::collections::HashSet;
use std::sync::Mutex;

use hoverdict_core::{
    Config, DefinitionQuery, Field, LookupService, Query, Record, RecordId, RecordStore,
    StoreError,
};
use hoverdict_store::MemoryStore;

// ---------------------------------------------------------------------------
// NoteBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Record`] fixtures.
///
/// # Example
///
/// ```rust
/// let note = NoteBuilder::new(5)
///     .deck("Spanish")
///     .field("Front", "gato")
///     .field("Back", "cat")
///     .build();
/// ```
pub struct NoteBuilder {
    id: i64,
    deck: String,
    note_type: String,
    fields: Vec<Field>,
}

impl NoteBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            deck: "Default".to_string(),
            note_type: "Basic".to_string(),
            fields: Vec::new(),
        }
    }

    pub fn deck(mut self, deck: impl Into<String>) -> Self {
        self.deck = deck.into();
        self
    }

    pub fn note_type(mut self, note_type: impl Into<String>) -> Self {
        self.note_type = note_type.into();
        self
    }

    pub fn field(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.fields.push(Field::new(name, content));
        self
    }

    pub fn build(self) -> Record {
        Record {
            id: RecordId(self.id),
            deck: self.deck,
            note_type: self.note_type,
            fields: self.fields,
        }
    }
}

// ---------------------------------------------------------------------------
// Stores
// ---------------------------------------------------------------------------

/// Build a [`MemoryStore`] over `notes` with `deck` as the current deck.
pub fn store_of(deck: &str, notes: impl IntoIterator<Item = Record>) -> MemoryStore {
    MemoryStore::from_records(deck, notes).expect("fixture notes must have unique ids")
}

/// Store that deletes some notes right after `find` returns them, reproducing
/// a host edit racing the hover request.
pub struct VanishingStore {
    pub inner: MemoryStore,
    vanish: HashSet<RecordId>,
}

impl VanishingStore {
    pub fn new(inner: MemoryStore, vanish: &[i64]) -> Self {
        Self {
            inner,
            vanish: vanish.iter().copied().map(RecordId).collect(),
        }
    }
}

impl RecordStore for VanishingStore {
    fn find(&self, query: &Query) -> Result<Vec<RecordId>, StoreError> {
        let ids = self.inner.find(query)?;
        for id in &self.vanish {
            self.inner.remove(*id);
        }
        Ok(ids)
    }

    fn find_definition(&self, query: &DefinitionQuery) -> Result<Vec<RecordId>, StoreError> {
        self.inner.find_definition(query)
    }

    fn get(&self, id: RecordId) -> Result<Record, StoreError> {
        self.inner.get(id)
    }
}

/// Store that returns a fixed, unsorted id list and records every query.
pub struct RecordingStore {
    pub inner: MemoryStore,
    pub hits: Vec<RecordId>,
    pub queries: Mutex<Vec<Query>>,
}

impl RecordingStore {
    pub fn new(inner: MemoryStore, hits: &[i64]) -> Self {
        Self {
            inner,
            hits: hits.iter().copied().map(RecordId).collect(),
            queries: Mutex::new(Vec::new()),
        }
    }
}

impl RecordStore for RecordingStore {
    fn find(&self, query: &Query) -> Result<Vec<RecordId>, StoreError> {
        self.queries.lock().unwrap().push(query.clone());
        Ok(self.hits.clone())
    }

    fn find_definition(&self, query: &DefinitionQuery) -> Result<Vec<RecordId>, StoreError> {
        self.inner.find_definition(query)
    }

    fn get(&self, id: RecordId) -> Result<Record, StoreError> {
        self.inner.get(id)
    }
}

// ---------------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------------

/// Default config with `edit` applied.
pub fn config_with(edit: impl FnOnce(&mut Config)) -> Config {
    let mut cfg = Config::defaults();
    edit(&mut cfg);
    cfg
}

pub fn service<S: RecordStore>(store: S, edit: impl FnOnce(&mut Config)) -> LookupService<S> {
    LookupService::new(store, &config_with(edit))
}
