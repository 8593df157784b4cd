//! Lookup service — the single operation exposed to the host.
//!
//! ```text
//! term ──► QueryBuilder ──► RecordStore::find ──► sort ──► get ──► FieldFilter
//!                                                                     │
//!                         fragment ◄── SnippetRenderer ◄── ClozeRewriter
//! ```
//!
//! The service owns no mutable state. One value is built at startup from the
//! loaded [`Config`] and shared by reference with whatever dispatches calls.

use tracing::{debug, warn};

use crate::cloze;
use crate::config::{Config, DictionaryConfig, LookupConfig, Mode};
use crate::error::{LookupError, StoreError};
use crate::filter::FieldFilter;
use crate::query::QueryBuilder;
use crate::render;
use crate::store::RecordStore;
use crate::types::{Record, RecordId};

pub struct LookupService<S> {
    store: S,
    filter: FieldFilter,
    lookup: LookupConfig,
    dictionary: DictionaryConfig,
}

impl<S: RecordStore> LookupService<S> {
    pub fn new(store: S, config: &Config) -> Self {
        Self {
            store,
            filter: config.lookup.field_filter(),
            lookup: config.lookup.clone(),
            dictionary: config.dictionary.clone(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn mode(&self) -> Mode {
        self.dictionary.mode
    }

    /// Answer a hover request according to the configured [`Mode`].
    pub fn respond(&self, term: &str, current: RecordId) -> Result<String, LookupError> {
        match self.dictionary.mode {
            Mode::Snippets => self.lookup(term, current),
            Mode::Dictionary => self.define(term),
        }
    }

    /// Render every other note in the current deck that contains `term`.
    ///
    /// `current` is the note the host is showing; it never appears in the
    /// output. Records that vanish between `find` and `get` are skipped.
    pub fn lookup(&self, term: &str, current: RecordId) -> Result<String, LookupError> {
        let query = QueryBuilder::build(term, current);
        if query.term.is_empty() {
            debug!("empty term, skipping store query");
            return Ok(self.no_results());
        }

        let mut ids = self.store.find(&query)?;
        if ids.is_empty() {
            debug!(term = %query.term, "no matches");
            return Ok(self.no_results());
        }
        ids.sort_unstable();
        ids.dedup();

        let mut snippets = Vec::with_capacity(ids.len());
        for id in ids {
            // A store that ignores the exclusion must still not echo the caller.
            if id == current {
                continue;
            }
            match self.store.get(id) {
                Ok(record) => snippets.push(self.render_record(&record)),
                Err(StoreError::NotFound(id)) => {
                    warn!(%id, "matched record vanished before fetch, skipping");
                }
                Err(err) => return Err(err.into()),
            }
        }

        debug!(term = %query.term, snippets = snippets.len(), "lookup rendered");
        Ok(render::fragment(snippets))
    }

    /// Look `term` up in the dictionary note type and return its definition.
    ///
    /// The lowest matching id wins. Falls back to the configured no-entry text
    /// when nothing matches or the match has no definition field.
    pub fn define(&self, term: &str) -> Result<String, LookupError> {
        let query = QueryBuilder::build_definition(
            term,
            &self.dictionary.note_type,
            &self.dictionary.term_field,
        );
        if query.term.is_empty() {
            return Ok(self.dictionary.no_entry_text.clone());
        }

        let mut ids = self.store.find_definition(&query)?;
        ids.sort_unstable();

        for id in ids {
            match self.store.get(id) {
                Ok(record) => {
                    return Ok(record
                        .field(&self.dictionary.definition_field)
                        .map(str::to_string)
                        .unwrap_or_else(|| self.dictionary.no_entry_text.clone()));
                }
                Err(StoreError::NotFound(id)) => {
                    warn!(%id, "dictionary entry vanished before fetch, trying next");
                }
                Err(err) => return Err(err.into()),
            }
        }

        debug!(term = %query.term, "no dictionary entry");
        Ok(self.dictionary.no_entry_text.clone())
    }

    fn render_record(&self, record: &Record) -> String {
        render::snippet(
            self.filter
                .select(record)
                .into_iter()
                .map(cloze::rewrite),
        )
    }

    fn no_results(&self) -> String {
        if self.lookup.always_show_no_results {
            self.lookup.no_results_text.clone()
        } else {
            String::new()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
