//! Field filter — which fields of a record are eligible for rendering.

use crate::types::Record;
use std::collections::HashSet;

/// Set of field names excluded from rendering, matched by exact name.
///
/// Built once from configuration and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldFilter {
    excluded: HashSet<String>,
}

impl FieldFilter {
    pub fn new<I, S>(excluded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded: excluded.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded.contains(name)
    }

    /// Content of every non-excluded field, in the record's declaration order.
    pub fn select<'r>(&self, record: &'r Record) -> Vec<&'r str> {
        record
            .fields
            .iter()
            .filter(|f| !self.is_excluded(&f.name))
            .map(|f| f.content.as_str())
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
