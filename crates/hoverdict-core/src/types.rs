//! Core types for hoverdict-core.
//!
//! This module defines the data structures shared across the lookup pipeline:
//! the [`Record`] read from a store, its ordered [`Field`]s, and the
//! [`Query`] / [`DefinitionQuery`] value objects handed to a
//! [`RecordStore`](crate::store::RecordStore).

use serde::{Deserialize, Serialize};

/// Opaque, totally ordered record identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        RecordId(id)
    }
}

/// One named text attribute of a record. `content` may contain markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub content: String,
}

impl Field {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// A note owned by the record store.
///
/// `fields` is kept in declaration order; every store adapter must preserve
/// it, since rendering follows this order rather than sorting by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    /// Name of the deck the note lives in.
    pub deck: String,
    /// Name of the note type (model) the note was created from.
    pub note_type: String,
    pub fields: Vec<Field>,
}

impl Record {
    /// Content of the first field called `name`, if any.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.content.as_str())
    }
}

/// Deck scope of a snippet query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeckScope {
    /// The deck the host is currently reviewing; resolved by the store.
    Current,
}

impl DeckScope {
    pub fn as_token(&self) -> &'static str {
        match self {
            DeckScope::Current => "current",
        }
    }
}

impl std::fmt::Display for DeckScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_token())
    }
}

/// Snippet search: records in `scope` containing `term`, minus `excluded`.
///
/// Built by [`QueryBuilder`](crate::query::QueryBuilder) and consumed once by
/// the store. `term` is passed through unescaped; escaping belongs to the
/// store's own query language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub scope: DeckScope,
    pub term: String,
    pub excluded: RecordId,
}

/// Dictionary search: records of `note_type` whose `term_field` is `term`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionQuery {
    pub note_type: String,
    pub term_field: String,
    pub term: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
