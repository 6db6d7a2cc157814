//! Blood count calculators. Base unit for all counts is cells/µL.

use std::sync::LazyLock;

use crate::Calculator;
use crate::input::{InputDescriptor, InputMap, UnitMap, all_present, num};
use crate::result::{Details, Outcome, ResultUnit, Value};
use crate::units::{RBC_COUNT, WBC_COUNT, convert_to_base};

/// Absolute eosinophil count.
pub struct AbsoluteEosinophilCount;

impl Calculator for AbsoluteEosinophilCount {
    fn id(&self) -> &str {
        "aec"
    }

    fn name(&self) -> &str {
        "Absolute Eosinophil Count (AEC)"
    }

    fn keywords(&self) -> &[&str] {
        &[
            "aec",
            "absolute eosinophil count",
            "eosinophilia",
            "wbc",
            "hematology",
            "allergy",
        ]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::number("wbc", "Total WBC Count")
                    .with_min(0.0)
                    .with_units(&WBC_COUNT),
                InputDescriptor::number("eosinophils", "Eosinophils (%)")
                    .with_min(0.0)
                    .with_max(100.0)
                    .with_unit("%"),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "AEC"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::single("cells/µL")
    }

    fn details(&self) -> Details {
        Details::new()
            .formula("AEC = Total WBC (cells/µL) * (% Eosinophils) / 100")
            .description(
                "Calculates the absolute number of eosinophils, which can be elevated in allergic reactions, parasitic infections, and certain inflammatory conditions.",
            )
    }

    fn calculate(&self, inputs: &InputMap, units: &UnitMap) -> Outcome {
        if !all_present(inputs, &["wbc", "eosinophils"]) {
            return Outcome::Incomplete;
        }

        let wbc = convert_to_base("wbc", inputs, units, &WBC_COUNT);
        let pct = num(inputs, "eosinophils");
        let (Some(wbc), Some(pct)) = (wbc, pct) else {
            return Outcome::invalid("Invalid input.");
        };
        if wbc < 0.0 || pct < 0.0 {
            return Outcome::invalid("Invalid input.");
        }
        if pct > 100.0 {
            return Outcome::invalid("Eosinophils % cannot exceed 100.");
        }

        Outcome::number(wbc * (pct / 100.0))
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let aec = value.as_number()?;
        Some(if aec > 5000.0 {
            "Hypereosinophilia (>5000 cells/µL). Associated with Hypereosinophilic Syndrome and potential end-organ damage.".to_string()
        } else if aec > 1500.0 {
            "Marked Eosinophilia (1500-5000 cells/µL).".to_string()
        } else if aec >= 500.0 {
            "Mild to Moderate Eosinophilia (500-1499 cells/µL).".to_string()
        } else {
            "Normal Eosinophil Count (<500 cells/µL).".to_string()
        })
    }
}

/// Absolute lymphocyte count.
pub struct AbsoluteLymphocyteCount;

impl Calculator for AbsoluteLymphocyteCount {
    fn id(&self) -> &str {
        "alc"
    }

    fn name(&self) -> &str {
        "Absolute Lymphocyte Count (ALC)"
    }

    fn keywords(&self) -> &[&str] {
        &[
            "alc",
            "absolute lymphocyte count",
            "lymphocytopenia",
            "lymphocytosis",
            "wbc",
            "hematology",
        ]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::number("wbc", "Total WBC Count")
                    .with_min(0.0)
                    .with_units(&WBC_COUNT),
                InputDescriptor::number("lymphocytes", "Lymphocytes (%)")
                    .with_min(0.0)
                    .with_max(100.0)
                    .with_unit("%"),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "ALC"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::single("cells/µL")
    }

    fn details(&self) -> Details {
        Details::new()
            .formula("ALC = Total WBC (cells/µL) * (% Lymphocytes) / 100")
            .description(
                "Calculates the absolute number of lymphocytes, important for assessing immune status and diagnosing various hematologic and infectious diseases.",
            )
    }

    fn calculate(&self, inputs: &InputMap, units: &UnitMap) -> Outcome {
        if !all_present(inputs, &["wbc", "lymphocytes"]) {
            return Outcome::Incomplete;
        }

        let wbc = convert_to_base("wbc", inputs, units, &WBC_COUNT);
        let pct = num(inputs, "lymphocytes");
        let (Some(wbc), Some(pct)) = (wbc, pct) else {
            return Outcome::invalid("Invalid input.");
        };
        if wbc < 0.0 || pct < 0.0 {
            return Outcome::invalid("Invalid input.");
        }
        if pct > 100.0 {
            return Outcome::invalid("Lymphocytes % cannot exceed 100.");
        }

        Outcome::number(wbc * (pct / 100.0))
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let alc = value.as_number()?;
        Some(if alc > 4000.0 {
            "Lymphocytosis (>4000 cells/µL in adults). Consider viral infections, CLL, etc.".to_string()
        } else if alc < 1000.0 {
            "Lymphocytopenia (<1000 cells/µL in adults). Consider immunodeficiencies, steroid use, infections (e.g., HIV), etc.".to_string()
        } else {
            "Normal Lymphocyte Count (1000-4000 cells/µL in adults). Range can vary by age.".to_string()
        })
    }
}

/// Absolute neutrophil count, with optional band forms.
pub struct AbsoluteNeutrophilCount;

impl Calculator for AbsoluteNeutrophilCount {
    fn id(&self) -> &str {
        "anc"
    }

    fn name(&self) -> &str {
        "Absolute Neutrophil Count (ANC)"
    }

    fn keywords(&self) -> &[&str] {
        &["anc", "absolute neutrophil count", "neutropenia", "wbc", "hematology"]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::number("wbc", "Total WBC Count")
                    .with_min(0.0)
                    .with_units(&WBC_COUNT),
                InputDescriptor::number("neutrophils", "Neutrophils (%)")
                    .with_min(0.0)
                    .with_max(100.0)
                    .with_unit("%"),
                InputDescriptor::number("bands", "Bands (%) (optional)")
                    .with_min(0.0)
                    .with_max(100.0)
                    .with_unit("%")
                    .optional(),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "ANC"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::single("cells/µL")
    }

    fn details(&self) -> Details {
        Details::new()
            .formula("ANC = Total WBC (cells/µL) * (% Neutrophils + % Bands) / 100")
            .description(
                "Calculates the absolute number of neutrophils, crucial for assessing infection risk, especially in chemotherapy patients.",
            )
    }

    fn calculate(&self, inputs: &InputMap, units: &UnitMap) -> Outcome {
        if !all_present(inputs, &["wbc", "neutrophils"]) {
            return Outcome::Incomplete;
        }

        let wbc = convert_to_base("wbc", inputs, units, &WBC_COUNT);
        let neutrophils = num(inputs, "neutrophils");
        let bands = match crate::input::raw(inputs, "bands") {
            None => Some(0.0),
            Some(_) => num(inputs, "bands"),
        };

        let (Some(wbc), Some(neutrophils), Some(bands)) = (wbc, neutrophils, bands) else {
            return Outcome::invalid("Invalid input.");
        };
        if wbc < 0.0 || neutrophils < 0.0 || bands < 0.0 {
            return Outcome::invalid("Invalid input.");
        }
        if neutrophils + bands > 100.0 {
            return Outcome::invalid("Neutrophils + Bands cannot exceed 100%.");
        }

        Outcome::number(wbc * ((neutrophils + bands) / 100.0))
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let anc = value.as_number()?;
        Some(
            if anc < 500.0 {
                "Severe Neutropenia (<500 cells/µL). High risk of infection."
            } else if anc < 1000.0 {
                "Moderate Neutropenia (500-1000 cells/µL). Moderate risk of infection."
            } else if anc < 1500.0 {
                "Mild Neutropenia (1000-1500 cells/µL). Mild risk of infection."
            } else {
                "Normal Neutrophil Count (≥1500 cells/µL). Normal risk of infection."
            }
            .to_string(),
        )
    }
}

/// Absolute reticulocyte count.
pub struct AbsoluteReticulocyteCount;

impl Calculator for AbsoluteReticulocyteCount {
    fn id(&self) -> &str {
        "absReticulocyteCount"
    }

    fn name(&self) -> &str {
        "Absolute Reticulocyte Count"
    }

    fn keywords(&self) -> &[&str] {
        &["reticulocyte", "absolute", "count", "arc", "anemia", "hematology", "rbc"]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::number("reticulocytePct", "Reticulocyte Count")
                    .with_min(0.0)
                    .with_max(100.0)
                    .with_unit("%"),
                InputDescriptor::number("rbcCount", "Red Blood Cell (RBC) Count")
                    .with_min(0.0)
                    .with_units(&RBC_COUNT),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "Absolute Reticulocyte Count"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::single("cells/µL")
    }

    fn details(&self) -> Details {
        Details::new()
            .formula("ARC (cells/µL) = (Reticulocyte % / 100) * RBC Count (cells/µL)")
            .description(
                "Calculates the absolute number of reticulocytes in the blood, which is a better measure of red blood cell production than the percentage alone.",
            )
    }

    fn calculate(&self, inputs: &InputMap, units: &UnitMap) -> Outcome {
        if !all_present(inputs, &["reticulocytePct", "rbcCount"]) {
            return Outcome::Incomplete;
        }

        let pct = num(inputs, "reticulocytePct");
        let rbc = convert_to_base("rbcCount", inputs, units, &RBC_COUNT);
        let (Some(pct), Some(rbc)) = (pct, rbc) else {
            return Outcome::invalid("Invalid input or unit error.");
        };
        if pct < 0.0 || rbc < 0.0 {
            return Outcome::invalid("Invalid input or unit error.");
        }
        if pct > 100.0 {
            return Outcome::invalid("Reticulocyte % cannot be > 100.");
        }

        Outcome::number((pct / 100.0) * rbc)
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let arc = value.as_number()?;
        Some(if arc > 100_000.0 {
            format!(
                "High ARC ({arc:.0} cells/µL). Suggests bone marrow is responding to anemia (e.g., due to hemolysis or blood loss)."
            )
        } else if arc < 25_000.0 {
            format!(
                "Low ARC ({arc:.0} cells/µL). Suggests inadequate bone marrow response to anemia (e.g., aplastic anemia, bone marrow suppression, nutritional deficiency)."
            )
        } else {
            format!("Normal ARC ({arc:.0} cells/µL). (Normal range approx. 25,000-75,000 cells/µL).")
        })
    }
}

/// CSF white count corrected for a traumatic lumbar puncture.
pub struct CorrectedCsfWbc;

impl Calculator for CorrectedCsfWbc {
    fn id(&self) -> &str {
        "correctedCsfWbc"
    }

    fn name(&self) -> &str {
        "Corrected CSF WBC Count (Traumatic LP)"
    }

    fn keywords(&self) -> &[&str] {
        &[
            "csf",
            "wbc",
            "corrected",
            "traumatic tap",
            "lp",
            "lumbar puncture",
            "meningitis",
        ]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::number("csfWbc", "Observed CSF WBC Count")
                    .with_min(0.0)
                    .with_unit("cells/µL"),
                InputDescriptor::number("csfRbc", "Observed CSF RBC Count")
                    .with_min(0.0)
                    .with_unit("cells/µL"),
                InputDescriptor::number("bloodWbc", "Peripheral Blood WBC Count")
                    .with_min(0.0)
                    .with_units(&WBC_COUNT),
                InputDescriptor::number("bloodRbc", "Peripheral Blood RBC Count")
                    .with_min(0.0)
                    .with_units(&RBC_COUNT),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "Corrected CSF WBC Count"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::single("cells/µL")
    }

    fn details(&self) -> Details {
        Details::new()
            .formula("Corrected CSF WBC = Observed CSF WBC - (Blood WBC * [Observed CSF RBC / Blood RBC])")
            .description(
                "Estimates the true number of white blood cells (WBCs) in the cerebrospinal fluid (CSF) by correcting for contamination from peripheral blood during a traumatic lumbar puncture.",
            )
            .note(
                "A simpler rule of thumb often used is subtracting 1 WBC for every 500-1000 RBCs in the CSF, but the formula provided is more precise.",
            )
    }

    fn calculate(&self, inputs: &InputMap, units: &UnitMap) -> Outcome {
        if !all_present(inputs, &["csfWbc", "csfRbc", "bloodWbc", "bloodRbc"]) {
            return Outcome::Incomplete;
        }

        let blood_wbc = convert_to_base("bloodWbc", inputs, units, &WBC_COUNT);
        let blood_rbc = convert_to_base("bloodRbc", inputs, units, &RBC_COUNT);
        let (Some(blood_wbc), Some(blood_rbc)) = (blood_wbc, blood_rbc) else {
            return Outcome::invalid("Unit error.");
        };

        let csf_wbc = num(inputs, "csfWbc");
        let csf_rbc = num(inputs, "csfRbc");
        let (Some(csf_wbc), Some(csf_rbc)) = (csf_wbc, csf_rbc) else {
            return Outcome::invalid("Invalid input.");
        };
        if csf_wbc < 0.0 || csf_rbc < 0.0 || blood_wbc < 0.0 || blood_rbc < 0.0 {
            return Outcome::invalid("Invalid input.");
        }
        if blood_rbc == 0.0 {
            return Outcome::invalid("Peripheral RBC count cannot be zero.");
        }

        let predicted_wbc = blood_wbc * (csf_rbc / blood_rbc);
        Outcome::number((csf_wbc - predicted_wbc).max(0.0))
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let corrected = value.as_number()?;
        Some(format!(
            "Corrected CSF WBC count is approximately {corrected:.1} cells/µL. A value >5-10 cells/µL may suggest underlying pleocytosis (inflammation/infection), but results must be interpreted in the full clinical context."
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(pairs: &[(&str, &str)]) -> InputMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn aec_converts_wbc_to_cells_per_ul() {
        let inputs = entries(&[("wbc", "8"), ("eosinophils", "10")]);
        // 8 x10³/µL = 8000 cells/µL; 10% of that is 800.
        assert_eq!(
            AbsoluteEosinophilCount
                .calculate(&inputs, &UnitMap::new())
                .value()
                .unwrap()
                .as_number(),
            Some(800.0)
        );
    }

    #[test]
    fn aec_percentage_over_100_is_feedback() {
        let inputs = entries(&[("wbc", "8"), ("eosinophils", "120")]);
        let Outcome::Invalid { message } =
            AbsoluteEosinophilCount.calculate(&inputs, &UnitMap::new())
        else {
            panic!("expected feedback");
        };
        assert!(message.contains("cannot exceed 100"));
    }

    #[test]
    fn anc_defaults_blank_bands_to_zero() {
        let inputs = entries(&[("wbc", "6"), ("neutrophils", "50")]);
        assert_eq!(
            AbsoluteNeutrophilCount
                .calculate(&inputs, &UnitMap::new())
                .value()
                .unwrap()
                .as_number(),
            Some(3000.0)
        );
    }

    #[test]
    fn anc_neutrophils_plus_bands_capped() {
        let inputs = entries(&[("wbc", "6"), ("neutrophils", "80"), ("bands", "30")]);
        assert!(matches!(
            AbsoluteNeutrophilCount.calculate(&inputs, &UnitMap::new()),
            Outcome::Invalid { .. }
        ));
    }

    #[test]
    fn anc_severe_neutropenia_reading() {
        let inputs = entries(&[("wbc", "1"), ("neutrophils", "40")]);
        let outcome = AbsoluteNeutrophilCount.calculate(&inputs, &UnitMap::new());
        let text = AbsoluteNeutrophilCount
            .interpret(outcome.value().unwrap(), &inputs, &UnitMap::new())
            .unwrap();
        assert!(text.contains("Severe Neutropenia"));
    }

    #[test]
    fn arc_normal_range() {
        let inputs = entries(&[("reticulocytePct", "1"), ("rbcCount", "4.5")]);
        // 1% of 4.5 x10⁶/µL = 45,000 cells/µL
        let arc = AbsoluteReticulocyteCount
            .calculate(&inputs, &UnitMap::new())
            .value()
            .unwrap()
            .as_number()
            .unwrap();
        assert_eq!(arc, 45_000.0);
    }

    #[test]
    fn corrected_csf_wbc_floors_at_zero() {
        let inputs = entries(&[
            ("csfWbc", "2"),
            ("csfRbc", "10000"),
            ("bloodWbc", "10"),
            ("bloodRbc", "5"),
        ]);
        // Predicted contamination exceeds the observed count.
        assert_eq!(
            CorrectedCsfWbc
                .calculate(&inputs, &UnitMap::new())
                .value()
                .unwrap()
                .as_number(),
            Some(0.0)
        );
    }

    #[test]
    fn corrected_csf_wbc_zero_blood_rbc_is_feedback() {
        let inputs = entries(&[
            ("csfWbc", "10"),
            ("csfRbc", "100"),
            ("bloodWbc", "10"),
            ("bloodRbc", "0"),
        ]);
        let Outcome::Invalid { message } = CorrectedCsfWbc.calculate(&inputs, &UnitMap::new())
        else {
            panic!("expected feedback");
        };
        assert!(message.contains("cannot be zero"));
    }
}
