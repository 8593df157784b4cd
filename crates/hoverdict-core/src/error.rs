//! Error taxonomy for the lookup pipeline.
//!
//! A stale id ([`StoreError::NotFound`]) is absorbed by the lookup service and
//! never reaches the caller. Everything else surfaces once, without retry.

use crate::types::RecordId;

/// Failure reported by a [`RecordStore`](crate::store::RecordStore).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The id no longer resolves (the record vanished between find and get).
    #[error("record {0} not found")]
    NotFound(RecordId),
    /// The store rejected the query syntax.
    #[error("malformed query: {0}")]
    MalformedQuery(String),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("collection parse error: {0}")]
    Parse(String),
}

/// Failure that escapes [`LookupService`](crate::lookup::LookupService).
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("malformed query: {0}")]
    MalformedQuery(String),
    #[error("store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for LookupError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::MalformedQuery(msg) => LookupError::MalformedQuery(msg),
            other => LookupError::Store(other),
        }
    }
}
