//! hoverdict — mouseover dictionary for spaced-repetition notes.
//!
//! Hovering a word in the reviewer asks this crate for every other note in
//! the current deck that mentions it, rendered as a tooltip fragment. The
//! pipeline lives in `hoverdict-core`, store adapters in `hoverdict-store`;
//! this crate adds the host-facing boundary (CLI and HTTP endpoint).
//!
//! # Architecture
//!
//! ```text
//! overlay script ──► HTTP /lookup ──► LookupService ──► MemoryStore
//!                                          │
//!                                          └──► tooltip HTML
//! ```

pub mod server;

pub use hoverdict_core::{Config, LookupError, LookupService, Mode, RecordId};
pub use hoverdict_store::MemoryStore;
