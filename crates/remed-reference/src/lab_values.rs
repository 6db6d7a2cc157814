//! Normal laboratory reference values.
//!
//! Ranges are typical adult reference intervals; individual laboratories
//! publish their own, which take precedence.

use std::sync::LazyLock;

use remed_core::models::{LabValue, ReferenceRange};

use crate::{matches, matches_opt};

#[allow(clippy::too_many_arguments)]
fn lab(
    id: &str,
    test_name: &str,
    short_name: Option<&str>,
    category: &str,
    unit: &str,
    description: &str,
    normal: (Option<f64>, Option<f64>),
    critical: (Option<f64>, Option<f64>),
    notes: Option<&str>,
) -> LabValue {
    LabValue {
        id: id.to_string(),
        test_name: test_name.to_string(),
        short_name: short_name.map(str::to_string),
        category: category.to_string(),
        unit: unit.to_string(),
        description: description.to_string(),
        normal: ReferenceRange {
            low: normal.0,
            high: normal.1,
        },
        critical: ReferenceRange {
            low: critical.0,
            high: critical.1,
        },
        notes: notes.map(str::to_string),
    }
}

static LAB_VALUES: LazyLock<Vec<LabValue>> = LazyLock::new(|| {
    vec![
        lab(
            "lab_sodium",
            "Sodium, Serum",
            Some("Na"),
            "Electrolytes",
            "mEq/L",
            "The major extracellular cation, regulating water balance and neuromuscular function.",
            (Some(136.0), Some(145.0)),
            (Some(120.0), Some(160.0)),
            Some("Correct for hyperglycemia before interpreting hyponatremia."),
        ),
        lab(
            "lab_potassium",
            "Potassium, Serum",
            Some("K"),
            "Electrolytes",
            "mEq/L",
            "The major intracellular cation. Abnormal levels cause dangerous cardiac arrhythmias.",
            (Some(3.5), Some(5.0)),
            (Some(2.5), Some(6.5)),
            Some("Hemolyzed samples falsely elevate potassium."),
        ),
        lab(
            "lab_chloride",
            "Chloride, Serum",
            Some("Cl"),
            "Electrolytes",
            "mEq/L",
            "The major extracellular anion, used with sodium and bicarbonate to compute the anion gap.",
            (Some(98.0), Some(106.0)),
            (None, None),
            None,
        ),
        lab(
            "lab_bicarbonate",
            "Bicarbonate, Serum",
            Some("HCO3"),
            "Electrolytes",
            "mEq/L",
            "The main blood buffer. Low values indicate metabolic acidosis, high values metabolic alkalosis.",
            (Some(23.0), Some(28.0)),
            (Some(10.0), Some(40.0)),
            None,
        ),
        lab(
            "lab_bun",
            "Blood Urea Nitrogen",
            Some("BUN"),
            "Renal",
            "mg/dL",
            "Nitrogenous waste cleared by the kidneys. Rises with renal impairment, dehydration, and GI bleeding.",
            (Some(8.0), Some(20.0)),
            (None, Some(100.0)),
            Some("BUN/creatinine ratio >20:1 suggests a pre-renal cause."),
        ),
        lab(
            "lab_creatinine",
            "Creatinine, Serum",
            Some("Cr"),
            "Renal",
            "mg/dL",
            "A muscle metabolism byproduct cleared by glomerular filtration; the standard marker of renal function.",
            (Some(0.6), Some(1.2)),
            (None, Some(7.4)),
            Some("Range varies with muscle mass and sex (Female: 0.5-1.1, Male: 0.7-1.3)."),
        ),
        lab(
            "lab_glucose_fasting",
            "Glucose, Fasting Plasma",
            Some("FPG"),
            "Metabolic",
            "mg/dL",
            "Blood sugar after an overnight fast. Diagnostic threshold for diabetes is ≥126 mg/dL on two occasions.",
            (Some(70.0), Some(99.0)),
            (Some(40.0), Some(500.0)),
            Some("100-125 mg/dL indicates impaired fasting glucose (prediabetes)."),
        ),
        lab(
            "lab_hba1c",
            "Hemoglobin A1c",
            Some("HbA1c"),
            "Metabolic",
            "%",
            "Glycated hemoglobin, reflecting average glycemia over the preceding 2-3 months.",
            (Some(4.0), Some(5.6)),
            (None, None),
            Some("5.7-6.4% prediabetes; ≥6.5% diagnostic of diabetes."),
        ),
        lab(
            "lab_calcium_total",
            "Calcium, Total Serum",
            Some("Ca"),
            "Electrolytes",
            "mg/dL",
            "Total circulating calcium, roughly half protein-bound. Correct for albumin or measure ionized calcium in hypoalbuminemia.",
            (Some(8.5), Some(10.2)),
            (Some(6.0), Some(13.0)),
            None,
        ),
        lab(
            "lab_albumin",
            "Albumin, Serum",
            Some("Alb"),
            "Liver Function",
            "g/dL",
            "The most abundant plasma protein, synthesized by the liver. A marker of synthetic function and nutrition.",
            (Some(3.5), Some(5.0)),
            (None, None),
            None,
        ),
        lab(
            "lab_bilirubin_total",
            "Bilirubin, Total Serum",
            Some("TBili"),
            "Liver Function",
            "mg/dL",
            "The breakdown product of heme. Elevated in liver disease, biliary obstruction, and hemolysis.",
            (Some(0.3), Some(1.2)),
            (None, Some(15.0)),
            Some("Jaundice typically becomes visible above ~2.5-3 mg/dL."),
        ),
        lab(
            "lab_alt",
            "Alanine Aminotransferase, Serum",
            Some("ALT"),
            "Liver Function",
            "U/L",
            "A hepatocellular enzyme; the more liver-specific of the two transaminases.",
            (Some(7.0), Some(41.0)),
            (None, None),
            None,
        ),
        lab(
            "lab_ast",
            "Aspartate Aminotransferase, Serum",
            Some("AST"),
            "Liver Function",
            "U/L",
            "A transaminase found in liver, muscle, and heart. An AST:ALT ratio >2 suggests alcoholic liver disease.",
            (Some(12.0), Some(38.0)),
            (None, None),
            None,
        ),
        lab(
            "lab_hemoglobin",
            "Hemoglobin, Blood",
            Some("Hb"),
            "Hematology",
            "g/dL",
            "The oxygen-carrying protein of red cells. Defines anemia and polycythemia.",
            (Some(12.0), Some(17.5)),
            (Some(6.6), Some(20.0)),
            Some("Range varies by sex (Female: 12.0-15.5, Male: 13.5-17.5)."),
        ),
        lab(
            "lab_platelets",
            "Platelet Count",
            Some("Plt"),
            "Hematology",
            "x10^9/L",
            "Cell fragments essential to clotting. Low counts risk bleeding, high counts thrombosis.",
            (Some(150.0), Some(450.0)),
            (Some(20.0), Some(1000.0)),
            None,
        ),
        lab(
            "lab_wbc",
            "White Blood Cell Count",
            Some("WBC"),
            "Hematology",
            "x10^3/µL",
            "Total circulating leukocytes. Elevated in infection and inflammation; low counts risk sepsis.",
            (Some(4.5), Some(11.0)),
            (Some(1.0), Some(50.0)),
            None,
        ),
        lab(
            "lab_inr",
            "International Normalized Ratio",
            Some("INR"),
            "Coagulation",
            "",
            "Standardized prothrombin time ratio. Therapeutic targets depend on the anticoagulation indication.",
            (Some(0.8), Some(1.1)),
            (None, Some(5.0)),
            Some("Typical warfarin target 2.0-3.0 (2.5-3.5 for mechanical mitral valves)."),
        ),
        lab(
            "lab_tsh",
            "Thyroid Stimulating Hormone",
            Some("TSH"),
            "Endocrinology",
            "mIU/L",
            "The pituitary hormone regulating thyroid output; the best single screen for thyroid dysfunction.",
            (Some(0.4), Some(4.0)),
            (None, None),
            None,
        ),
        lab(
            "lab_troponin_t_hs",
            "Troponin T, High-Sensitivity",
            Some("hs-TnT"),
            "Cardiology",
            "ng/L",
            "A cardiac muscle protein released with myocardial injury; central to the diagnosis of infarction.",
            (None, Some(14.0)),
            (None, None),
            Some("Interpret serial values; a rise/fall pattern distinguishes acute injury from chronic elevation."),
        ),
        lab(
            "lab_lactate",
            "Lactate, Plasma",
            None,
            "Metabolic",
            "mmol/L",
            "A product of anaerobic metabolism. Elevated in shock, sepsis, and tissue hypoperfusion.",
            (Some(0.5), Some(2.2)),
            (None, Some(4.0)),
            Some("Levels ≥4 mmol/L in suspected sepsis warrant aggressive resuscitation."),
        ),
    ]
});

/// The full catalog, in display order.
pub fn all() -> &'static [LabValue] {
    &LAB_VALUES
}

/// Case-insensitive substring search over test name, short name, category,
/// and description.
pub fn search(term: &str) -> Vec<&'static LabValue> {
    let needle = term.trim().to_lowercase();
    LAB_VALUES
        .iter()
        .filter(|item| {
            needle.is_empty()
                || matches(&item.test_name, &needle)
                || matches_opt(&item.short_name, &needle)
                || matches(&item.category, &needle)
                || matches(&item.description, &needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_names_are_searchable() {
        let hits = search("hba1c");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "lab_hba1c");
    }

    #[test]
    fn ranges_are_ordered() {
        for lab in all() {
            if let (Some(low), Some(high)) = (lab.normal.low, lab.normal.high) {
                assert!(low < high, "{}: normal range inverted", lab.id);
            }
            if let (Some(low), Some(high)) = (lab.critical.low, lab.critical.high) {
                assert!(low < high, "{}: critical range inverted", lab.id);
            }
        }
    }
}
