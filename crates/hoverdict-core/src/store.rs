//! Store — the data-access seam between the lookup pipeline and wherever notes live.
//!
//! The core only ever reads through this trait. Adapters live in
//! `hoverdict-store`; tests provide their own.

use crate::error::StoreError;
use crate::types::{DefinitionQuery, Query, Record, RecordId};

/// Search and fetch operations over records.
///
/// Implementations must be safe to share between threads: concurrent lookups
/// read the same store without any locking in the core.
pub trait RecordStore: Send + Sync {
    /// Ids of records in the query's deck scope whose content contains the
    /// term, never including `query.excluded`. Order is unspecified.
    fn find(&self, query: &Query) -> Result<Vec<RecordId>, StoreError>;

    /// Ids of records of the given note type whose term field matches the
    /// whole term. Order is unspecified.
    fn find_definition(&self, query: &DefinitionQuery) -> Result<Vec<RecordId>, StoreError>;

    /// Fetch one record, with fields in declaration order.
    /// Fails with [`StoreError::NotFound`] when the id no longer resolves.
    fn get(&self, id: RecordId) -> Result<Record, StoreError>;
}

impl<S: RecordStore + ?Sized> RecordStore for std::sync::Arc<S> {
    fn find(&self, query: &Query) -> Result<Vec<RecordId>, StoreError> {
        (**self).find(query)
    }

    fn find_definition(&self, query: &DefinitionQuery) -> Result<Vec<RecordId>, StoreError> {
        (**self).find_definition(query)
    }

    fn get(&self, id: RecordId) -> Result<Record, StoreError> {
        (**self).get(id)
    }
}
