use tantivy::schema::{self, STORED, STRING, Schema, TEXT};

use crate::error::CoreError;

/// Field names used in the Tantivy index.
pub mod field {
    pub const ID: &str = "id";
    pub const DOC_TYPE: &str = "doc_type";
    pub const TITLE: &str = "title";
    pub const BODY: &str = "body";
    pub const CATEGORY: &str = "category";
}

/// Document types stored in the Tantivy index.
pub mod doc_type {
    pub const ABBREVIATION: &str = "abbreviation";
    pub const TERMINOLOGY: &str = "terminology";
    pub const LAB_VALUE: &str = "lab_value";
    pub const MNEMONIC: &str = "mnemonic";
    pub const NUTRITION: &str = "nutrition";
    pub const PROCEDURE: &str = "procedure";
    pub const CALCULATOR: &str = "calculator";
}

/// All known document types, in display order.
pub const ALL_DOC_TYPES: &[&str] = &[
    doc_type::ABBREVIATION,
    doc_type::TERMINOLOGY,
    doc_type::LAB_VALUE,
    doc_type::MNEMONIC,
    doc_type::NUTRITION,
    doc_type::PROCEDURE,
    doc_type::CALCULATOR,
];

/// Validate a document-type string against the known set, returning the
/// canonical constant.
pub fn parse_doc_type(s: &str) -> Result<&'static str, CoreError> {
    ALL_DOC_TYPES
        .iter()
        .find(|t| **t == s)
        .copied()
        .ok_or_else(|| CoreError::InvalidDocType(s.to_string()))
}

/// Build the Tantivy schema used by the remed index.
pub fn build_schema() -> Schema {
    let mut builder = Schema::builder();

    // Identifiers — stored and indexed as exact strings
    builder.add_text_field(field::ID, STRING | STORED);
    builder.add_text_field(field::DOC_TYPE, STRING | STORED);

    // Full-text searchable fields
    builder.add_text_field(field::TITLE, TEXT | STORED);
    builder.add_text_field(field::BODY, TEXT);

    // Filterable string field, also full-text searched
    builder.add_text_field(field::CATEGORY, TEXT | STORED);

    builder.build()
}

/// Resolve a field by name from the schema, returning the Tantivy `Field` handle.
///
/// # Panics
///
/// Panics if the field name does not exist in the schema. This is only called
/// with compile-time field name constants, so a panic indicates a schema
/// definition bug.
pub fn get_field(schema: &Schema, name: &str) -> schema::Field {
    schema
        .get_field(name)
        .unwrap_or_else(|_| panic!("field '{name}' not found in schema"))
}
