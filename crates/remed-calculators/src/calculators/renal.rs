//! Renal function calculators.

use std::sync::LazyLock;

use crate::Calculator;
use crate::input::{InputDescriptor, InputMap, UnitMap, all_present, num, opt, raw};
use crate::result::{Details, Outcome, ResultUnit, Value};
use crate::units::{SERUM_CREATININE, SODIUM_MEQ_L, WEIGHT, convert_to_base};

fn sex_options() -> Vec<crate::input::SelectOption> {
    vec![opt("male", "Male"), opt("female", "Female")]
}

fn ckd_stage(egfr: f64) -> &'static str {
    if egfr >= 90.0 {
        "G1: Normal or high GFR (≥ 90)."
    } else if egfr >= 60.0 {
        "G2: Mildly decreased GFR (60-89)."
    } else if egfr >= 45.0 {
        "G3a: Mildly to moderately decreased GFR (45-59)."
    } else if egfr >= 30.0 {
        "G3b: Moderately to severely decreased GFR (30-44)."
    } else if egfr >= 15.0 {
        "G4: Severely decreased GFR (15-29)."
    } else {
        "G5: Kidney failure (< 15)."
    }
}

/// Cockcroft-Gault creatinine clearance.
pub struct CreatinineClearance;

impl Calculator for CreatinineClearance {
    fn id(&self) -> &str {
        "crcl"
    }

    fn name(&self) -> &str {
        "Creatinine Clearance (CrCl) - Cockcroft-Gault"
    }

    fn keywords(&self) -> &[&str] {
        &[
            "crcl",
            "creatinine clearance",
            "cockcroft gault",
            "renal function",
            "gfr",
            "kidney",
        ]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::number("age", "Age")
                    .with_min(0.0)
                    .with_step(1.0)
                    .with_unit("years"),
                InputDescriptor::number("weight", "Weight")
                    .with_min(0.0)
                    .with_step(0.1)
                    .with_units(&WEIGHT),
                InputDescriptor::number("serumCreatinine", "Serum Creatinine")
                    .with_min(0.0)
                    .with_step(0.01)
                    .with_units(&SERUM_CREATININE),
                InputDescriptor::select("gender", "Gender", "male", sex_options()),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "CrCl"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::single("mL/min")
    }

    fn details(&self) -> Details {
        Details::new()
            .formula(
                "CrCl (mL/min) = [(140 - Age) * Weight (kg) * (0.85 if Female)] / (72 * Serum Creatinine (mg/dL))",
            )
            .note("Cockcroft-Gault formula for estimating Creatinine Clearance. Ensure inputs are positive.")
    }

    fn calculate(&self, inputs: &InputMap, units: &UnitMap) -> Outcome {
        if !all_present(inputs, &["age", "weight", "serumCreatinine", "gender"]) {
            return Outcome::Incomplete;
        }
        let age = match num(inputs, "age") {
            Some(a) if a > 0.0 => a,
            _ => return Outcome::Incomplete,
        };

        let (Some(weight_kg), Some(scr_mg_dl)) = (
            convert_to_base("weight", inputs, units, &WEIGHT),
            convert_to_base("serumCreatinine", inputs, units, &SERUM_CREATININE),
        ) else {
            return Outcome::invalid("Input or unit error.");
        };
        if weight_kg <= 0.0 || scr_mg_dl <= 0.0 {
            return Outcome::invalid("Weight and Serum Creatinine must be positive.");
        }

        let mut crcl = ((140.0 - age) * weight_kg) / (72.0 * scr_mg_dl);
        if raw(inputs, "gender") == Some("female") {
            crcl *= 0.85;
        }
        Outcome::number(crcl.max(0.0))
    }
}

/// eGFR, CKD-EPI 2021 creatinine equation.
pub struct CkdEpi2021;

impl Calculator for CkdEpi2021 {
    fn id(&self) -> &str {
        "ckdEpi2021"
    }

    fn name(&self) -> &str {
        "eGFR (CKD-EPI 2021 Creatinine)"
    }

    fn keywords(&self) -> &[&str] {
        &[
            "egfr",
            "gfr",
            "ckd-epi",
            "ckd",
            "chronic kidney disease",
            "renal function",
            "creatinine",
            "2021",
        ]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::number("age", "Age").with_min(0.0).with_unit("years"),
                InputDescriptor::select("gender", "Sex", "male", sex_options()),
                InputDescriptor::number("serumCreatinine", "Serum Creatinine")
                    .with_min(0.0)
                    .with_units(&SERUM_CREATININE),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "eGFR"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::single("mL/min/1.73m²")
    }

    fn details(&self) -> Details {
        Details::new()
            .formula(
                "eGFR = 142 × min(SCr/κ, 1)^α × max(SCr/κ, 1)^-1.200 × 0.9938^Age × (1.012 if Female)",
            )
            .description(
                "Calculates estimated Glomerular Filtration Rate (eGFR) using the 2021 CKD-EPI Creatinine equation. This is the current standard for assessing kidney function.",
            )
            .note(
                "κ (kappa): 0.7 for females, 0.9 for males.\nα (alpha): -0.241 for females, -0.302 for males.\nSCr is serum creatinine in mg/dL.",
            )
    }

    fn calculate(&self, inputs: &InputMap, units: &UnitMap) -> Outcome {
        if !all_present(inputs, &["age", "gender", "serumCreatinine"]) {
            return Outcome::Incomplete;
        }

        let age = num(inputs, "age");
        let cr = convert_to_base("serumCreatinine", inputs, units, &SERUM_CREATININE);
        let (Some(age), Some(cr)) = (age, cr) else {
            return Outcome::invalid("Invalid input. Age and Creatinine must be positive.");
        };
        if cr <= 0.0 || age <= 0.0 {
            return Outcome::invalid("Invalid input. Age and Creatinine must be positive.");
        }

        let female = raw(inputs, "gender") == Some("female");
        let kappa = if female { 0.7 } else { 0.9 };
        let alpha = if female { -0.241 } else { -0.302 };
        let sex_factor = if female { 1.012 } else { 1.0 };

        let term1 = (cr / kappa).min(1.0);
        let term2 = (cr / kappa).max(1.0);

        let egfr =
            142.0 * term1.powf(alpha) * term2.powf(-1.200) * 0.9938_f64.powf(age) * sex_factor;
        Outcome::number(egfr)
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let egfr = value.as_number()?;
        Some(format!(
            "eGFR: {egfr:.1} mL/min/1.73m². CKD Stage: {} Albuminuria assessment is required for complete CKD staging.",
            ckd_stage(egfr)
        ))
    }
}

/// eGFR, classic 4-variable MDRD study equation.
pub struct MdrdEgfr;

impl Calculator for MdrdEgfr {
    fn id(&self) -> &str {
        "mdrdEgfr"
    }

    fn name(&self) -> &str {
        "eGFR (MDRD Study Equation)"
    }

    fn keywords(&self) -> &[&str] {
        &[
            "egfr",
            "gfr",
            "mdrd",
            "kidney",
            "renal function",
            "creatinine",
            "old",
        ]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::number("serumCreatinine", "Serum Creatinine")
                    .with_min(0.0)
                    .with_units(&SERUM_CREATININE),
                InputDescriptor::number("age", "Age").with_min(18.0).with_unit("years"),
                InputDescriptor::select("gender", "Sex", "male", sex_options()),
                InputDescriptor::select(
                    "race",
                    "Race (per original formula)",
                    "not_black",
                    vec![opt("not_black", "Not Black"), opt("black", "Black")],
                ),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "eGFR"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::single("mL/min/1.73m²")
    }

    fn details(&self) -> Details {
        Details::new()
            .formula("eGFR = 175 × (SerumCr)^-1.154 × (Age)^-0.203 × (0.742 if female) × (1.212 if Black)")
            .description(
                "Calculates estimated Glomerular Filtration Rate (eGFR) using the classic 4-variable MDRD Study equation.",
            )
            .note(
                "This is an older formula. The 2021 CKD-EPI creatinine equation is now the recommended standard as it does not include a race-based variable and has better accuracy.",
            )
    }

    fn calculate(&self, inputs: &InputMap, units: &UnitMap) -> Outcome {
        if !all_present(inputs, &["serumCreatinine", "age", "gender", "race"]) {
            return Outcome::Incomplete;
        }

        let age = num(inputs, "age");
        let cr = convert_to_base("serumCreatinine", inputs, units, &SERUM_CREATININE);
        let (Some(age), Some(cr)) = (age, cr) else {
            return Outcome::invalid("Invalid input. Age and Creatinine must be positive.");
        };
        if cr <= 0.0 || age <= 0.0 {
            return Outcome::invalid("Invalid input. Age and Creatinine must be positive.");
        }

        let mut egfr = 175.0 * cr.powf(-1.154) * age.powf(-0.203);
        if raw(inputs, "gender") == Some("female") {
            egfr *= 0.742;
        }
        if raw(inputs, "race") == Some("black") {
            egfr *= 1.212;
        }
        Outcome::number(egfr)
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let egfr = value.as_number()?;
        let stage = if egfr >= 90.0 {
            "G1: Normal or high GFR (≥ 90)."
        } else if egfr >= 60.0 {
            "G2: Mildly decreased GFR (60-89)."
        } else if egfr >= 30.0 {
            "G3a: Mildly to moderately decreased GFR (45-59), G3b: Moderately to severely decreased GFR (30-44). The MDRD is less accurate > 60."
        } else if egfr >= 15.0 {
            "G4: Severely decreased GFR (15-29)."
        } else {
            "G5: Kidney failure (< 15)."
        };
        Some(format!(
            "eGFR: {egfr:.1} mL/min/1.73m². CKD Stage: {stage} Albuminuria assessment is required for complete CKD staging."
        ))
    }
}

/// Fractional excretion of sodium.
pub struct FractionalExcretionSodium;

impl Calculator for FractionalExcretionSodium {
    fn id(&self) -> &str {
        "fena"
    }

    fn name(&self) -> &str {
        "Fractional Excretion of Sodium (FeNa)"
    }

    fn keywords(&self) -> &[&str] {
        &[
            "fena",
            "fractional excretion",
            "sodium",
            "aki",
            "acute kidney injury",
            "prerenal",
            "atn",
            "nephrology",
        ]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::number("serumNa", "Serum Sodium")
                    .with_min(0.0)
                    .with_units(&SODIUM_MEQ_L),
                InputDescriptor::number("urineNa", "Urine Sodium")
                    .with_min(0.0)
                    .with_units(&SODIUM_MEQ_L),
                InputDescriptor::number("serumCr", "Serum Creatinine")
                    .with_min(0.0)
                    .with_units(&SERUM_CREATININE),
                InputDescriptor::number("urineCr", "Urine Creatinine")
                    .with_min(0.0)
                    .with_units(&SERUM_CREATININE),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "FeNa"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::single("%")
    }

    fn details(&self) -> Details {
        Details::new()
            .formula(
                "FeNa (%) = [(Urine Na / Serum Na) / (Urine Cr / Serum Cr)] * 100\n= [(Urine Na * Serum Cr) / (Serum Na * Urine Cr)] * 100",
            )
            .description(
                "The Fractional Excretion of Sodium (FeNa) helps differentiate pre-renal acute kidney injury (AKI) from acute tubular necrosis (ATN).",
            )
            .note(
                "The accuracy of FeNa is diminished in patients on diuretic therapy. In these cases, the Fractional Excretion of Urea (FeUrea) may be a more reliable marker.",
            )
    }

    fn calculate(&self, inputs: &InputMap, units: &UnitMap) -> Outcome {
        if !all_present(inputs, &["serumNa", "urineNa", "serumCr", "urineCr"]) {
            return Outcome::Incomplete;
        }

        let s_na = convert_to_base("serumNa", inputs, units, &SODIUM_MEQ_L);
        let u_na = convert_to_base("urineNa", inputs, units, &SODIUM_MEQ_L);
        let s_cr = convert_to_base("serumCr", inputs, units, &SERUM_CREATININE);
        let u_cr = convert_to_base("urineCr", inputs, units, &SERUM_CREATININE);

        let (Some(s_na), Some(u_na), Some(s_cr), Some(u_cr)) = (s_na, u_na, s_cr, u_cr) else {
            return Outcome::invalid("Invalid input or unit error.");
        };
        if s_na < 0.0 || u_na < 0.0 || s_cr < 0.0 || u_cr < 0.0 {
            return Outcome::invalid("Invalid input or unit error.");
        }
        if s_na == 0.0 || u_cr == 0.0 {
            return Outcome::invalid("Serum Sodium and Urine Creatinine cannot be zero.");
        }

        Outcome::number((u_na / s_na) * (s_cr / u_cr) * 100.0)
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let fena = value.as_number()?;
        Some(if fena < 1.0 {
            format!(
                "FeNa < 1% ({fena:.2}%). Suggests a pre-renal cause of AKI (e.g., volume depletion). The kidneys are appropriately conserving sodium."
            )
        } else if fena > 2.0 {
            format!(
                "FeNa > 2% ({fena:.2}%). Suggests an intrinsic cause of AKI, most commonly Acute Tubular Necrosis (ATN). The kidneys are inappropriately wasting sodium."
            )
        } else {
            format!(
                "FeNa is between 1-2% ({fena:.2}%). This is an indeterminate result and requires further clinical correlation."
            )
        })
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
    fn cockcroft_gault_female_factor() {
        let base = entries(&[
            ("age", "60"),
            ("weight", "70"),
            ("serumCreatinine", "1.0"),
            ("gender", "male"),
        ]);
        let male = CreatinineClearance
            .calculate(&base, &UnitMap::new())
            .value()
            .unwrap()
            .as_number()
            .unwrap();
        // (140-60)*70 / 72 = 77.78
        assert!((male - 77.777).abs() < 0.01);

        let mut female = base.clone();
        female.insert("gender".into(), "female".into());
        let f = CreatinineClearance
            .calculate(&female, &UnitMap::new())
            .value()
            .unwrap()
            .as_number()
            .unwrap();
        assert!((f - male * 0.85).abs() < 1e-9);
    }

    #[test]
    fn crcl_accepts_umol_l_creatinine() {
        let inputs = entries(&[
            ("age", "60"),
            ("weight", "70"),
            ("serumCreatinine", "88.4"),
            ("gender", "male"),
        ]);
        let units: UnitMap = [("serumCreatinine".to_string(), "umol/L".to_string())].into();
        let crcl = CreatinineClearance
            .calculate(&inputs, &units)
            .value()
            .unwrap()
            .as_number()
            .unwrap();
        // 88.4 µmol/L is exactly 1.0 mg/dL
        assert!((crcl - 77.777).abs() < 0.01);
    }

    #[test]
    fn crcl_rejects_zero_creatinine() {
        let inputs = entries(&[
            ("age", "60"),
            ("weight", "70"),
            ("serumCreatinine", "0"),
            ("gender", "male"),
        ]);
        assert!(matches!(
            CreatinineClearance.calculate(&inputs, &UnitMap::new()),
            Outcome::Invalid { .. }
        ));
    }

    #[test]
    fn ckd_epi_normal_function_is_stage_g1() {
        let inputs = entries(&[("age", "30"), ("gender", "male"), ("serumCreatinine", "0.9")]);
        let outcome = CkdEpi2021.calculate(&inputs, &UnitMap::new());
        let egfr = outcome.value().unwrap().as_number().unwrap();
        // SCr/κ = 1: both power terms collapse to 1, leaving 142 * 0.9938^30
        assert!((egfr - 142.0 * 0.9938_f64.powf(30.0)).abs() < 1e-9);
        let text = CkdEpi2021
            .interpret(outcome.value().unwrap(), &inputs, &UnitMap::new())
            .unwrap();
        assert!(text.contains("G1"));
    }

    #[test]
    fn fena_prerenal_pattern() {
        let inputs = entries(&[
            ("serumNa", "140"),
            ("urineNa", "10"),
            ("serumCr", "2.0"),
            ("urineCr", "100"),
        ]);
        let fena = FractionalExcretionSodium
            .calculate(&inputs, &UnitMap::new())
            .value()
            .unwrap()
            .as_number()
            .unwrap();
        assert!((fena - 0.1428).abs() < 0.001);
    }

    #[test]
    fn fena_zero_denominator_is_feedback() {
        let inputs = entries(&[
            ("serumNa", "0"),
            ("urineNa", "10"),
            ("serumCr", "2.0"),
            ("urineCr", "100"),
        ]);
        assert!(matches!(
            FractionalExcretionSodium.calculate(&inputs, &UnitMap::new()),
            Outcome::Invalid { .. }
        ));
    }
}
