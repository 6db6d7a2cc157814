use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("tantivy error: {0}")]
    Tantivy(#[from] tantivy::TantivyError),

    #[error(transparent)]
    Core(#[from] remed_core::error::CoreError),

    #[error("query parse error: {0}")]
    QueryParse(String),

    #[error("document not found: {0}")]
    DocumentNotFound(String),
}
