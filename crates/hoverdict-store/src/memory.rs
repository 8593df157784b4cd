//! In-memory [`RecordStore`] over a map of notes keyed by id.
//!
//! Reads take a shared lock, so any number of lookups can run in parallel
//! while the host occasionally edits notes or switches decks.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use hoverdict_core::{
    DeckScope, DefinitionQuery, Query, Record, RecordId, RecordStore, StoreError,
};
use tracing::trace;

use crate::pattern::{Anchor, TermPattern};

#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<BTreeMap<RecordId, Record>>,
    current_deck: RwLock<String>,
}

impl MemoryStore {
    pub fn new(current_deck: impl Into<String>) -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
            current_deck: RwLock::new(current_deck.into()),
        }
    }

    /// Build a store from notes, rejecting duplicate ids.
    pub fn from_records(
        current_deck: impl Into<String>,
        records: impl IntoIterator<Item = Record>,
    ) -> Result<Self, StoreError> {
        let store = Self::new(current_deck);
        {
            let mut map = store.records.write().unwrap_or_else(PoisonError::into_inner);
            for record in records {
                let id = record.id;
                if map.insert(id, record).is_some() {
                    return Err(StoreError::Parse(format!("duplicate note id {id}")));
                }
            }
        }
        Ok(store)
    }

    /// Insert or replace a note. Returns the previous version, if any.
    pub fn insert(&self, record: Record) -> Option<Record> {
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(record.id, record)
    }

    pub fn remove(&self, id: RecordId) -> Option<Record> {
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id)
    }

    pub fn set_current_deck(&self, deck: impl Into<String>) {
        *self.current_deck.write().unwrap_or_else(PoisonError::into_inner) = deck.into();
    }

    pub fn current_deck(&self) -> String {
        self.current_deck
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.records.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn resolve(&self, scope: &DeckScope) -> String {
        match scope {
            DeckScope::Current => self.current_deck(),
        }
    }
}

impl RecordStore for MemoryStore {
    fn find(&self, query: &Query) -> Result<Vec<RecordId>, StoreError> {
        let pattern = TermPattern::compile(&query.term, Anchor::Substring)?;
        let deck = self.resolve(&query.scope);
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);

        let ids: Vec<RecordId> = records
            .values()
            .filter(|r| r.id != query.excluded && r.deck == deck)
            .filter(|r| r.fields.iter().any(|f| pattern.is_match(&f.content)))
            .map(|r| r.id)
            .collect();
        trace!(term = %query.term, %deck, hits = ids.len(), "memory find");
        Ok(ids)
    }

    fn find_definition(&self, query: &DefinitionQuery) -> Result<Vec<RecordId>, StoreError> {
        let pattern = TermPattern::compile(&query.term, Anchor::Whole)?;
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);

        Ok(records
            .values()
            .filter(|r| r.note_type == query.note_type)
            .filter(|r| {
                r.field(&query.term_field)
                    .is_some_and(|content| pattern.is_match(content))
            })
            .map(|r| r.id)
            .collect())
    }

    fn get(&self, id: RecordId) -> Result<Record, StoreError> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
