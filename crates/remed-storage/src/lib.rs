//! remed-storage
//!
//! Session persistence: the explicit [`session::SessionState`] value that the
//! presentation layer owns, saved to and loaded from a versioned JSON file
//! under the platform data directory. Last write wins; a missing or corrupt
//! file falls back to a fresh default state.

pub mod error;
pub mod session;
pub mod store;

pub use error::StorageError;
pub use session::{SessionState, Theme, View};
