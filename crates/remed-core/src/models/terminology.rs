use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A medical term with its definition and linguistic context.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TerminologyEntry {
    pub id: String,
    pub primary_term: String,
    pub definition: String,
    pub primary_abbr: Option<String>,
    pub variants: Vec<String>,
    pub category: String,
    pub example: Option<String>,
    pub etymology: Option<String>,
    pub notes: Option<String>,
}
