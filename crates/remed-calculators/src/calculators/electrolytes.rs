//! Electrolyte and acid-base calculators.

use std::sync::LazyLock;

use crate::Calculator;
use crate::input::{InputDescriptor, InputMap, UnitMap, all_present, num, raw};
use crate::result::{Details, Outcome, ResultUnit, Value};
use crate::units::{
    ALBUMIN, GENERIC_MEQ_L, GLUCOSE, SODIUM_MEQ_L, UnitOption, UnitTable, convert_to_base,
    selected_unit,
};

/// Total serum calcium. The correction formula branches on the selected unit
/// rather than normalizing, so the factor is only used for table membership.
static CALCIUM: LazyLock<UnitTable> = LazyLock::new(|| {
    UnitTable::new(
        "mg/dL",
        vec![
            UnitOption::new("mg/dL", "mg/dL", 1.0),
            UnitOption::new("mmol/L", "mmol/L", 1.0 / 0.25),
        ],
    )
});

/// Serum anion gap.
pub struct AnionGap;

impl Calculator for AnionGap {
    fn id(&self) -> &str {
        "anionGap"
    }

    fn name(&self) -> &str {
        "Anion Gap"
    }

    fn keywords(&self) -> &[&str] {
        &["anion gap", "acidosis", "metabolic acidosis", "electrolytes"]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::number("sodium", "Sodium (Na+)")
                    .with_min(0.0)
                    .with_units(&SODIUM_MEQ_L),
                InputDescriptor::number("chloride", "Chloride (Cl-)")
                    .with_min(0.0)
                    .with_units(&GENERIC_MEQ_L),
                InputDescriptor::number("bicarbonate", "Bicarbonate (HCO3-)")
                    .with_min(0.0)
                    .with_units(&GENERIC_MEQ_L),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "Anion Gap"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::single("mEq/L")
    }

    fn details(&self) -> Details {
        Details::new()
            .formula("Anion Gap = Na+ - (Cl- + HCO3-)")
            .note(
                "Normal range is typically 8-12 mEq/L (without K+) or 12-16 mEq/L (if K+ included). This calculator does not use K+.",
            )
    }

    fn calculate(&self, inputs: &InputMap, units: &UnitMap) -> Outcome {
        if !all_present(inputs, &["sodium", "chloride", "bicarbonate"]) {
            return Outcome::Incomplete;
        }

        let na = convert_to_base("sodium", inputs, units, &SODIUM_MEQ_L);
        let cl = convert_to_base("chloride", inputs, units, &GENERIC_MEQ_L);
        let hco3 = convert_to_base("bicarbonate", inputs, units, &GENERIC_MEQ_L);

        let (Some(na), Some(cl), Some(hco3)) = (na, cl, hco3) else {
            return Outcome::invalid("Input or unit error.");
        };
        if na < 0.0 || cl < 0.0 || hco3 < 0.0 {
            return Outcome::invalid("Values cannot be negative.");
        }

        Outcome::number(na - (cl + hco3))
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let gap = value.as_number()?;
        Some(if gap > 12.0 {
            format!(
                "Elevated Anion Gap ({gap:.1} mEq/L). Consider MUDPILES: Methanol, Uremia, DKA, Propylene glycol, Isoniazid/Iron, Lactic acidosis, Ethylene glycol, Salicylates. Albumin correction may be needed."
            )
        } else if gap < 8.0 {
            format!(
                "Low Anion Gap ({gap:.1} mEq/L). Consider hypoalbuminemia, paraproteinemia, bromide intoxication, or lab error."
            )
        } else {
            format!("Normal Anion Gap ({gap:.1} mEq/L). (Reference range typically 8-12 mEq/L).")
        })
    }
}

/// Anion gap corrected for hypoalbuminemia.
pub struct CorrectedAnionGap;

impl Calculator for CorrectedAnionGap {
    fn id(&self) -> &str {
        "correctedAnionGap"
    }

    fn name(&self) -> &str {
        "Corrected Anion Gap for Albumin"
    }

    fn keywords(&self) -> &[&str] {
        &["anion gap", "albumin correction", "acidosis", "hypoalbuminemia"]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::number("measuredAG", "Measured Anion Gap")
                    .with_min(0.0)
                    .with_unit("mEq/L"),
                InputDescriptor::number("serumAlbumin", "Serum Albumin")
                    .with_min(0.0)
                    .with_units(&ALBUMIN),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "Corrected Anion Gap"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::single("mEq/L")
    }

    fn details(&self) -> Details {
        Details::new()
            .formula(
                "Corrected AG = Measured AG + 2.5 * (Normal Albumin [~4.0 g/dL] - Measured Albumin [g/dL])",
            )
            .description(
                "Adjusts the anion gap for variations in serum albumin concentration, as hypoalbuminemia can falsely lower the anion gap.",
            )
    }

    fn calculate(&self, inputs: &InputMap, units: &UnitMap) -> Outcome {
        if !all_present(inputs, &["measuredAG", "serumAlbumin"]) {
            return Outcome::Incomplete;
        }

        let ag = num(inputs, "measuredAG");
        let alb = convert_to_base("serumAlbumin", inputs, units, &ALBUMIN);
        let (Some(ag), Some(alb)) = (ag, alb) else {
            return Outcome::invalid("Invalid input or unit error.");
        };
        if ag < 0.0 || alb < 0.0 {
            return Outcome::invalid("Invalid input or unit error.");
        }

        Outcome::number(ag + 2.5 * (4.0 - alb))
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let gap = value.as_number()?;
        Some(if gap > 12.0 {
            format!(
                "Corrected AG is {gap:.1} mEq/L. This is an ELEVATED anion gap, suggesting an underlying metabolic acidosis (MUDPILES)."
            )
        } else {
            format!("Corrected AG is {gap:.1} mEq/L. This is a NORMAL anion gap.")
        })
    }
}

/// Delta-delta gap for mixed acid-base disorders.
pub struct DeltaDeltaGap;

impl Calculator for DeltaDeltaGap {
    fn id(&self) -> &str {
        "deltaDeltaGap"
    }

    fn name(&self) -> &str {
        "Delta-Delta Gap"
    }

    fn keywords(&self) -> &[&str] {
        &[
            "delta gap",
            "delta delta",
            "anion gap",
            "metabolic acidosis",
            "mixed disorder",
        ]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::number("sodium", "Sodium (Na+)")
                    .with_min(0.0)
                    .with_units(&SODIUM_MEQ_L),
                InputDescriptor::number("chloride", "Chloride (Cl-)")
                    .with_min(0.0)
                    .with_units(&GENERIC_MEQ_L),
                InputDescriptor::number("bicarbonate", "Bicarbonate (HCO3-)")
                    .with_min(0.0)
                    .with_units(&GENERIC_MEQ_L),
                InputDescriptor::number("albumin", "Albumin (optional, for correction)")
                    .with_min(0.0)
                    .with_units(&ALBUMIN)
                    .optional(),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "Delta-Delta Gap Calculation"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::multi(&[
            ("anionGap", "mEq/L"),
            ("correctedAnionGap", "mEq/L"),
            ("deltaDelta", "mEq/L"),
        ])
    }

    fn details(&self) -> Details {
        Details::new()
            .formula(
                "1. Anion Gap = Na+ - (Cl- + HCO3-)\n2. Corrected AG = AG + 2.5 * (4 - Albumin)\n3. Delta AG = Corrected AG - 12\n4. Delta-Delta = Delta AG + Measured HCO3-",
            )
            .description(
                "The Delta-Delta gap is used in the setting of a high anion gap metabolic acidosis to determine if another acid-base disorder is present.",
            )
    }

    fn calculate(&self, inputs: &InputMap, units: &UnitMap) -> Outcome {
        if !all_present(inputs, &["sodium", "chloride", "bicarbonate"]) {
            return Outcome::Incomplete;
        }

        let na = convert_to_base("sodium", inputs, units, &SODIUM_MEQ_L);
        let cl = convert_to_base("chloride", inputs, units, &GENERIC_MEQ_L);
        let hco3 = convert_to_base("bicarbonate", inputs, units, &GENERIC_MEQ_L);
        let (Some(na), Some(cl), Some(hco3)) = (na, cl, hco3) else {
            return Outcome::invalid("Invalid electrolyte values.");
        };
        if na < 0.0 || cl < 0.0 || hco3 < 0.0 {
            return Outcome::invalid("Invalid electrolyte values.");
        }

        let measured_ag = na - (cl + hco3);
        let has_albumin = raw(inputs, "albumin").is_some();
        let corrected_ag = if has_albumin {
            let Some(alb) = convert_to_base("albumin", inputs, units, &ALBUMIN) else {
                return Outcome::invalid("Invalid albumin value.");
            };
            if alb < 0.0 {
                return Outcome::invalid("Invalid albumin value.");
            }
            measured_ag + 2.5 * (4.0 - alb)
        } else {
            measured_ag
        };

        let delta_delta = (corrected_ag - 12.0) + hco3;

        let mut pairs = vec![("anionGap", measured_ag)];
        if has_albumin {
            pairs.push(("correctedAnionGap", corrected_ag));
        }
        pairs.push(("deltaDelta", delta_delta));
        Outcome::multi(&pairs)
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let dd = value.get("deltaDelta")?;
        let reading = if dd > 28.0 {
            "This suggests a concurrent metabolic alkalosis."
        } else if dd < 23.0 {
            "This suggests a concurrent non-anion gap metabolic acidosis."
        } else {
            "This is consistent with a pure high anion gap metabolic acidosis."
        };
        Some(format!("Calculated Delta-Delta is {dd:.1}. {reading}"))
    }
}

/// Winter's formula for expected respiratory compensation.
pub struct WintersFormula;

impl Calculator for WintersFormula {
    fn id(&self) -> &str {
        "wintersFormula"
    }

    fn name(&self) -> &str {
        "Winter's Formula for Metabolic Acidosis"
    }

    fn keywords(&self) -> &[&str] {
        &[
            "winters formula",
            "acid-base",
            "metabolic acidosis",
            "pco2",
            "compensation",
            "abg",
        ]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::number("bicarbonate", "Serum Bicarbonate (HCO₃⁻)")
                    .with_min(0.0)
                    .with_units(&GENERIC_MEQ_L),
                InputDescriptor::number("pco2", "Actual PaCO₂ (from ABG)")
                    .with_min(0.0)
                    .with_unit("mmHg")
                    .optional(),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "Expected PaCO₂ Range"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::single("mmHg")
    }

    fn details(&self) -> Details {
        Details::new()
            .formula("Expected PaCO₂ = (1.5 × [HCO₃⁻]) + 8 ± 2")
            .description(
                "Winter's formula calculates the expected respiratory compensation (PaCO₂) for a given degree of metabolic acidosis. It helps determine if a concurrent respiratory disorder is present.",
            )
    }

    fn calculate(&self, inputs: &InputMap, units: &UnitMap) -> Outcome {
        if raw(inputs, "bicarbonate").is_none() {
            return Outcome::Incomplete;
        }

        let Some(hco3) = convert_to_base("bicarbonate", inputs, units, &GENERIC_MEQ_L) else {
            return Outcome::invalid("Invalid Bicarbonate value.");
        };
        if hco3 < 0.0 {
            return Outcome::invalid("Invalid Bicarbonate value.");
        }

        let expected = (1.5 * hco3) + 8.0;
        Outcome::text(format!("{:.1} - {:.1}", expected - 2.0, expected + 2.0))
    }

    fn interpret(&self, value: &Value, inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let range_text = value.as_text()?;
        if raw(inputs, "pco2").is_none() {
            return Some(
                "Enter the patient's Actual PaCO₂ to assess compensation status.".to_string(),
            );
        }

        let mut bounds = range_text.split(" - ").map(|s| s.parse::<f64>());
        let (Some(Ok(lower)), Some(Ok(upper))) = (bounds.next(), bounds.next()) else {
            return Some("Invalid input for PaCO₂.".to_string());
        };
        let Some(pco2) = num(inputs, "pco2") else {
            return Some("Invalid input for PaCO₂.".to_string());
        };

        Some(
            if pco2 > upper {
                "Actual PaCO₂ is higher than expected, suggesting a concurrent respiratory acidosis."
            } else if pco2 < lower {
                "Actual PaCO₂ is lower than expected, suggesting a concurrent respiratory alkalosis."
            } else {
                "Actual PaCO₂ is within the expected range, indicating appropriate respiratory compensation."
            }
            .to_string(),
        )
    }
}

/// Sodium corrected for hyperglycemia.
pub struct SodiumCorrectionHyperglycemia;

impl Calculator for SodiumCorrectionHyperglycemia {
    fn id(&self) -> &str {
        "sodiumCorrectionHyperglycemia"
    }

    fn name(&self) -> &str {
        "Sodium Correction in Hyperglycemia"
    }

    fn keywords(&self) -> &[&str] {
        &["sodium", "hyperglycemia", "dka", "hhs", "electrolytes", "correction"]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::number("measuredNa", "Measured Serum Sodium")
                    .with_min(0.0)
                    .with_units(&SODIUM_MEQ_L),
                InputDescriptor::number("glucose", "Serum Glucose")
                    .with_min(0.0)
                    .with_units(&GLUCOSE),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "Corrected Sodium"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::single("mEq/L")
    }

    fn details(&self) -> Details {
        Details::new()
            .formula("Corrected Na = Measured Na + [2.4 × ((Glucose in mg/dL - 100) / 100)]")
            .description(
                "Estimates the true serum sodium concentration in the presence of hyperglycemia, which can cause pseudohyponatremia by shifting water from the intracellular to the extracellular space.",
            )
            .note(
                "This calculator uses a correction factor of 2.4, which is supported by recent evidence. The classic correction factor was 1.6. The result provides an estimate of what the sodium level would be if the glucose were normal (100 mg/dL).",
            )
    }

    fn calculate(&self, inputs: &InputMap, units: &UnitMap) -> Outcome {
        if !all_present(inputs, &["measuredNa", "glucose"]) {
            return Outcome::Incomplete;
        }

        let na = convert_to_base("measuredNa", inputs, units, &SODIUM_MEQ_L);
        let glucose_mg_dl = convert_to_base("glucose", inputs, units, &GLUCOSE);
        let (Some(na), Some(glucose_mg_dl)) = (na, glucose_mg_dl) else {
            return Outcome::invalid("Invalid input or unit error.");
        };
        if na < 0.0 || glucose_mg_dl < 0.0 {
            return Outcome::invalid("Invalid input or unit error.");
        }

        if glucose_mg_dl <= 100.0 {
            return Outcome::number(na);
        }
        Outcome::number(na + 2.4 * ((glucose_mg_dl - 100.0) / 100.0))
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let na = value.as_number()?;
        Some(format!(
            "The corrected sodium is approximately {na:.1} mEq/L. This value should be used to assess the patient's true sodium status."
        ))
    }
}

/// Total calcium corrected for hypoalbuminemia.
pub struct CorrectedCalcium;

impl Calculator for CorrectedCalcium {
    fn id(&self) -> &str {
        "correctedCalcium"
    }

    fn name(&self) -> &str {
        "Corrected Calcium for Hypoalbuminemia"
    }

    fn keywords(&self) -> &[&str] {
        &["calcium", "corrected", "albumin", "hypoalbuminemia", "electrolytes"]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::number("measuredCa", "Measured Serum Calcium")
                    .with_min(0.0)
                    .with_units(&CALCIUM),
                InputDescriptor::number("albumin", "Serum Albumin")
                    .with_min(0.0)
                    .with_units(&ALBUMIN),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "Corrected Calcium"
    }

    fn result_unit(&self) -> ResultUnit {
        // The unit follows the calcium unit the user entered.
        ResultUnit::None
    }

    fn details(&self) -> Details {
        Details::new()
            .formula(
                "Conventional units (mg/dL): Corrected Ca = Measured Ca + 0.8 * (4.0 - Albumin g/dL)\nSI units (mmol/L): Corrected Ca = Measured Ca + 0.02 * (40 - Albumin g/L)",
            )
            .description(
                "This formula adjusts the total serum calcium concentration for abnormal levels of serum albumin. For every 1 g/dL decrease in serum albumin below 4.0 g/dL, the total serum calcium is adjusted upwards by 0.8 mg/dL.",
            )
    }

    fn calculate(&self, inputs: &InputMap, units: &UnitMap) -> Outcome {
        if !all_present(inputs, &["measuredCa", "albumin"]) {
            return Outcome::Incomplete;
        }

        // The measured calcium is used as entered; the formula itself is
        // unit-specific rather than normalized.
        let ca = num(inputs, "measuredCa");
        let albumin_g_dl = convert_to_base("albumin", inputs, units, &ALBUMIN);
        let (Some(ca), Some(albumin_g_dl)) = (ca, albumin_g_dl) else {
            return Outcome::invalid("Invalid input.");
        };
        if ca < 0.0 || albumin_g_dl < 0.0 {
            return Outcome::invalid("Invalid input.");
        }

        if selected_unit("measuredCa", units, &CALCIUM) == "mg/dL" {
            Outcome::number(ca + 0.8 * (4.0 - albumin_g_dl))
        } else {
            let albumin_g_l = albumin_g_dl * 10.0;
            Outcome::number(ca + 0.02 * (40.0 - albumin_g_l))
        }
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, units: &UnitMap) -> Option<String> {
        let corrected = value.as_number()?;
        let (unit, normal_range) = if selected_unit("measuredCa", units, &CALCIUM) == "mg/dL" {
            ("mg/dL", "8.5-10.2 mg/dL")
        } else {
            ("mmol/L", "2.1-2.6 mmol/L")
        };
        Some(format!(
            "Corrected Calcium: {corrected:.2} {unit}. Normal range is approximately {normal_range}. Clinical context is essential."
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
    fn anion_gap_elevated_at_16() {
        let inputs = entries(&[("sodium", "140"), ("chloride", "100"), ("bicarbonate", "24")]);
        let outcome = AnionGap.calculate(&inputs, &UnitMap::new());
        let value = outcome.value().unwrap();
        assert_eq!(value.as_number(), Some(16.0));
        let text = AnionGap.interpret(value, &inputs, &UnitMap::new()).unwrap();
        assert!(text.contains("Elevated Anion Gap"));
    }

    #[test]
    fn anion_gap_negative_sodium_is_feedback() {
        let inputs = entries(&[("sodium", "-5"), ("chloride", "100"), ("bicarbonate", "24")]);
        let Outcome::Invalid { message } = AnionGap.calculate(&inputs, &UnitMap::new()) else {
            panic!("expected feedback");
        };
        assert!(message.contains("negative"));
    }

    #[test]
    fn anion_gap_boundary_values_read_normal() {
        for (na, expected) in [("132", 8.0), ("136", 12.0)] {
            let inputs = entries(&[("sodium", na), ("chloride", "100"), ("bicarbonate", "24")]);
            let outcome = AnionGap.calculate(&inputs, &UnitMap::new());
            let value = outcome.value().unwrap();
            assert_eq!(value.as_number(), Some(expected));
            let text = AnionGap.interpret(value, &inputs, &UnitMap::new()).unwrap();
            assert!(text.contains("Normal Anion Gap"), "{expected} should be normal");
        }
    }

    #[test]
    fn delta_delta_without_albumin_omits_correction() {
        let inputs = entries(&[("sodium", "140"), ("chloride", "100"), ("bicarbonate", "10")]);
        let value = DeltaDeltaGap
            .calculate(&inputs, &UnitMap::new())
            .value()
            .cloned()
            .unwrap();
        assert_eq!(value.get("anionGap"), Some(30.0));
        assert_eq!(value.get("correctedAnionGap"), None);
        // (30 - 12) + 10
        assert_eq!(value.get("deltaDelta"), Some(28.0));
    }

    #[test]
    fn winters_formula_range_and_compensation() {
        let inputs = entries(&[("bicarbonate", "12"), ("pco2", "25")]);
        let outcome = WintersFormula.calculate(&inputs, &UnitMap::new());
        let value = outcome.value().unwrap();
        assert_eq!(value.as_text(), Some("24.0 - 28.0"));
        let text = WintersFormula
            .interpret(value, &inputs, &UnitMap::new())
            .unwrap();
        assert!(text.contains("within the expected range"));
    }

    #[test]
    fn winters_formula_prompts_for_missing_pco2() {
        let inputs = entries(&[("bicarbonate", "12")]);
        let outcome = WintersFormula.calculate(&inputs, &UnitMap::new());
        let text = WintersFormula
            .interpret(outcome.value().unwrap(), &inputs, &UnitMap::new())
            .unwrap();
        assert!(text.contains("Enter the patient's Actual PaCO₂"));
    }

    #[test]
    fn sodium_correction_below_threshold_is_identity() {
        let inputs = entries(&[("measuredNa", "130"), ("glucose", "90")]);
        assert_eq!(
            SodiumCorrectionHyperglycemia
                .calculate(&inputs, &UnitMap::new())
                .value()
                .unwrap()
                .as_number(),
            Some(130.0)
        );
    }

    #[test]
    fn sodium_correction_for_dka_glucose() {
        let inputs = entries(&[("measuredNa", "130"), ("glucose", "600")]);
        let na = SodiumCorrectionHyperglycemia
            .calculate(&inputs, &UnitMap::new())
            .value()
            .unwrap()
            .as_number()
            .unwrap();
        assert!((na - 142.0).abs() < 1e-9);
    }

    #[test]
    fn corrected_calcium_branches_on_selected_unit() {
        let inputs = entries(&[("measuredCa", "8.0"), ("albumin", "2.0")]);
        let conventional = CorrectedCalcium
            .calculate(&inputs, &UnitMap::new())
            .value()
            .unwrap()
            .as_number()
            .unwrap();
        assert!((conventional - 9.6).abs() < 1e-9);

        let inputs = entries(&[("measuredCa", "2.0"), ("albumin", "2.0")]);
        let units: UnitMap = [("measuredCa".to_string(), "mmol/L".to_string())].into();
        let si = CorrectedCalcium
            .calculate(&inputs, &units)
            .value()
            .unwrap()
            .as_number()
            .unwrap();
        // 2.0 + 0.02 * (40 - 20)
        assert!((si - 2.4).abs() < 1e-9);
        let text = CorrectedCalcium
            .interpret(&Value::Number(si), &inputs, &units)
            .unwrap();
        assert!(text.contains("mmol/L"));
    }
}
