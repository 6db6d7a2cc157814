use tantivy::collector::TopDocs;
use tantivy::query::{QueryParser, TermQuery};
use tantivy::schema::{IndexRecordOption, Value};
use tantivy::{Index, TantivyDocument, Term};

use remed_core::schema::{field, get_field, parse_doc_type};

use crate::error::SearchError;

/// A retrieved document from the index.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub id: String,
    pub doc_type: String,
    pub title: String,
    pub category: String,
    pub score: f32,
}

fn stored_text(doc: &TantivyDocument, field: tantivy::schema::Field) -> String {
    doc.get_first(field)
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}

fn to_result(doc: &TantivyDocument, schema: &tantivy::schema::Schema, score: f32) -> SearchResult {
    SearchResult {
        id: stored_text(doc, get_field(schema, field::ID)),
        doc_type: stored_text(doc, get_field(schema, field::DOC_TYPE)),
        title: stored_text(doc, get_field(schema, field::TITLE)),
        category: stored_text(doc, get_field(schema, field::CATEGORY)),
        score,
    }
}

/// Ranked full-text search across title, body, and category.
pub fn search(index: &Index, query_text: &str, limit: usize) -> Result<Vec<SearchResult>, SearchError> {
    let reader = index.reader()?;
    let searcher = reader.searcher();
    let schema = index.schema();

    let title_field = get_field(&schema, field::TITLE);
    let body_field = get_field(&schema, field::BODY);
    let category_field = get_field(&schema, field::CATEGORY);

    let query_parser = QueryParser::for_index(index, vec![title_field, body_field, category_field]);
    let query = query_parser
        .parse_query(query_text)
        .map_err(|e| SearchError::QueryParse(e.to_string()))?;

    let top_docs = searcher.search(&query, &TopDocs::with_limit(limit))?;

    let mut results = Vec::new();
    for (score, doc_address) in top_docs {
        let doc = searcher.doc::<TantivyDocument>(doc_address)?;
        results.push(to_result(&doc, &schema, score));
    }
    Ok(results)
}

/// Find all documents of a given type. Unknown types are rejected rather
/// than silently matching nothing.
pub fn find_by_type(
    index: &Index,
    doc_type: &str,
    limit: usize,
) -> Result<Vec<SearchResult>, SearchError> {
    let doc_type = parse_doc_type(doc_type)?;
    let reader = index.reader()?;
    let searcher = reader.searcher();
    let schema = index.schema();

    let doc_type_field = get_field(&schema, field::DOC_TYPE);
    let query = TermQuery::new(
        Term::from_field_text(doc_type_field, doc_type),
        IndexRecordOption::Basic,
    );

    let top_docs = searcher.search(&query, &TopDocs::with_limit(limit))?;

    let mut results = Vec::new();
    for (score, doc_address) in top_docs {
        let doc = searcher.doc::<TantivyDocument>(doc_address)?;
        results.push(to_result(&doc, &schema, score));
    }
    Ok(results)
}

/// Find a single document by ID.
pub fn find_by_id(index: &Index, id: &str) -> Result<Option<SearchResult>, SearchError> {
    let reader = index.reader()?;
    let searcher = reader.searcher();
    let schema = index.schema();

    let id_field = get_field(&schema, field::ID);
    let query = TermQuery::new(Term::from_field_text(id_field, id), IndexRecordOption::Basic);

    let top_docs = searcher.search(&query, &TopDocs::with_limit(1))?;

    match top_docs.first() {
        Some((score, doc_address)) => {
            let doc = searcher.doc::<TantivyDocument>(*doc_address)?;
            Ok(Some(to_result(&doc, &schema, *score)))
        }
        None => Ok(None),
    }
}
