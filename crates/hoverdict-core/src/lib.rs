//! hoverdict-core — mouseover dictionary core library.
//!
//! Given a term and the note the host is currently showing, finds the other
//! notes in the current deck that mention the term and renders them into a
//! tooltip fragment.
//!
//! # Architecture
//!
//! ```text
//! QueryBuilder ──► RecordStore ──► FieldFilter ──► cloze ──► render
//!        ▲                                                     │
//!        └──────────────── LookupService ◄─────────────────────┘
//! ```
//!
//! Everything here is synchronous and free of shared mutable state; the
//! store adapter decides how reads are made consistent.

pub mod cloze;
pub mod config;
pub mod error;
pub mod filter;
pub mod lookup;
pub mod query;
pub mod render;
pub mod store;
pub mod types;

pub use config::{Config, Mode};
pub use error::{LookupError, StoreError};
pub use filter::FieldFilter;
pub use lookup::LookupService;
pub use query::QueryBuilder;
pub use store::RecordStore;
pub use types::{DeckScope, DefinitionQuery, Field, Query, Record, RecordId};
