use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A clinical procedure reference: what it is, when to do it, and how.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Procedure {
    pub id: String,
    pub name: String,
    pub keywords: Vec<String>,
    pub description: String,
    pub indications: Vec<String>,
    pub contraindications: Vec<String>,
    pub preparation: Vec<String>,
    pub procedure_steps: Vec<String>,
    pub post_procedure_care: Vec<String>,
    pub risks_complications: Vec<String>,
    pub alternatives: Vec<String>,
    pub patient_information: String,
}
