//! remed-reference
//!
//! The static reference catalogs: abbreviations, terminology, lab values,
//! mnemonics, nutrition guidelines, and procedures. Pure data seeded at first
//! access, with case-insensitive substring search over each catalog's
//! descriptive fields.

pub mod abbreviations;
pub mod lab_values;
pub mod mnemonics;
pub mod nutrition;
pub mod procedures;
pub mod terminology;

/// True when `haystack` contains `needle` case-insensitively. An empty
/// needle matches everything.
pub(crate) fn matches(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Optional-field variant of [`matches`].
pub(crate) fn matches_opt(haystack: &Option<String>, needle: &str) -> bool {
    haystack.as_deref().is_some_and(|h| matches(h, needle))
}
