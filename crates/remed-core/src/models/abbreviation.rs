use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A medical abbreviation with its expansion and coding metadata.
///
/// The same abbreviation may appear in several records with different
/// expansions (e.g. "CA" for Cancer and for Calcium) — that ambiguity is part
/// of the catalog, not a defect.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Abbreviation {
    pub id: String,
    pub primary_abbr: String,
    pub variants: Vec<String>,
    pub full_form: String,
    pub description: String,
    pub category: String,
    pub snomed_ct_id: Option<String>,
    pub icd10_code: Option<String>,
    pub notes: Option<String>,
}
