use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A low/high bound pair. Either side may be absent (one-sided ranges).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReferenceRange {
    pub low: Option<f64>,
    pub high: Option<f64>,
}

/// A laboratory test with its reference and critical ranges.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LabValue {
    pub id: String,
    pub test_name: String,
    pub short_name: Option<String>,
    pub category: String,
    pub unit: String,
    pub description: String,
    pub normal: ReferenceRange,
    pub critical: ReferenceRange,
    pub notes: Option<String>,
}
