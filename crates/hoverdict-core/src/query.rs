//! Query builder — turns a raw search term into the value objects a store consumes.
//!
//! The term is only trimmed. It is never escaped here: a store backed by a
//! textual query language escapes it in its own syntax.

use crate::types::{DeckScope, DefinitionQuery, Query, RecordId};

/// Builds [`Query`] and [`DefinitionQuery`] values.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryBuilder;

impl QueryBuilder {
    /// Snippet query scoped to the current deck, excluding the caller's own record.
    pub fn build(term: &str, exclude: RecordId) -> Query {
        Query {
            scope: DeckScope::Current,
            term: term.trim().to_string(),
            excluded: exclude,
        }
    }

    /// Dictionary query against `note_type`, matching `term_field` exactly.
    pub fn build_definition(term: &str, note_type: &str, term_field: &str) -> DefinitionQuery {
        DefinitionQuery {
            note_type: note_type.to_string(),
            term_field: term_field.to_string(),
            term: term.trim().to_string(),
        }
    }
}
