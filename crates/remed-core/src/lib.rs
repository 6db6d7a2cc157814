//! remed-core
//!
//! Pure domain types and the Tantivy search schema. No engine logic — this is
//! the shared vocabulary of the remed system.

pub mod error;
pub mod models;
pub mod schema;
