//! remed-search
//!
//! Full-text search across every catalog and the calculator registry. The
//! Tantivy index is built in RAM at startup from the in-process datasets; the
//! schema lives in `remed_core::schema`.

pub mod error;
pub mod index;
pub mod query;

pub use error::SearchError;
pub use index::build_index;
pub use query::{SearchResult, find_by_id, find_by_type, search};
