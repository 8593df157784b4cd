//! hoverdict-store — record store adapters for hoverdict.
//!
//! Each adapter implements [`hoverdict_core::RecordStore`] and owns the
//! search-term syntax of its backend, including escaping.

pub mod collection;
pub mod memory;
pub mod pattern;

pub use collection::{load, Collection};
pub use memory::MemoryStore;
pub use pattern::{Anchor, TermPattern};
