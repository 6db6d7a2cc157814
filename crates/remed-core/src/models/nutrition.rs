use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A titled block within a nutrition guideline section.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NutritionSubsection {
    pub id: String,
    pub title: String,
    pub content: Vec<String>,
}

/// A section of the clinical nutrition guide.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NutritionGuideline {
    pub id: String,
    pub title: String,
    pub content: Vec<String>,
    pub subsections: Vec<NutritionSubsection>,
}
