//! Cardiovascular risk and hemodynamics calculators.

use std::sync::LazyLock;

use crate::Calculator;
use crate::input::{InputDescriptor, InputMap, UnitMap, all_present, num, opt, sum_selects, yes_no};
use crate::result::{Details, Outcome, ResultUnit, Value};
use crate::units::{CHOLESTEROL, TRIGLYCERIDES, convert_to_base, selected_unit};

/// Mean arterial pressure.
pub struct MeanArterialPressure;

impl Calculator for MeanArterialPressure {
    fn id(&self) -> &str {
        "map"
    }

    fn name(&self) -> &str {
        "Mean Arterial Pressure (MAP)"
    }

    fn keywords(&self) -> &[&str] {
        &["map", "mean arterial pressure", "blood pressure", "hemodynamics"]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::number("sbp", "Systolic Blood Pressure (SBP)")
                    .with_min(0.0)
                    .with_unit("mmHg"),
                InputDescriptor::number("dbp", "Diastolic Blood Pressure (DBP)")
                    .with_min(0.0)
                    .with_unit("mmHg"),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "MAP"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::single("mmHg")
    }

    fn details(&self) -> Details {
        Details::new()
            .formula("MAP = ( (2 * Diastolic BP) + Systolic BP ) / 3")
            .note("Normal MAP is typically 70-100 mmHg.")
    }

    fn calculate(&self, inputs: &InputMap, _units: &UnitMap) -> Outcome {
        let (Some(sbp), Some(dbp)) = (num(inputs, "sbp"), num(inputs, "dbp")) else {
            return Outcome::Incomplete;
        };
        if sbp < 0.0 || dbp < 0.0 {
            return Outcome::Incomplete;
        }
        if sbp < dbp {
            return Outcome::invalid("SBP should be greater than or equal to DBP.");
        }

        Outcome::number(((2.0 * dbp) + sbp) / 3.0)
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let map = value.as_number()?;
        Some(if map < 65.0 {
            format!(
                "MAP: {map:.1} mmHg. Potentially low, indicating decreased organ perfusion. Target MAP is often >65 mmHg in critically ill patients."
            )
        } else if map > 100.0 {
            format!(
                "MAP: {map:.1} mmHg. Potentially high, could indicate increased cardiac workload or risk of hypertensive damage."
            )
        } else {
            format!("MAP: {map:.1} mmHg. Generally within normal limits (70-100 mmHg).")
        })
    }
}

/// CHA₂DS₂-VASc stroke risk in atrial fibrillation.
pub struct ChadsVasc;

impl Calculator for ChadsVasc {
    fn id(&self) -> &str {
        "chadsvasc"
    }

    fn name(&self) -> &str {
        "CHA₂DS₂-VASc Score for Stroke Risk in AFib"
    }

    fn keywords(&self) -> &[&str] {
        &[
            "chadsvasc",
            "stroke risk",
            "atrial fibrillation",
            "afib",
            "anticoagulation",
        ]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::select("chf", "Congestive Heart Failure history", "0", yes_no()),
                InputDescriptor::select("htn", "Hypertension history", "0", yes_no()),
                InputDescriptor::select(
                    "ageChadsvasc",
                    "Age",
                    "0",
                    vec![
                        opt("0", "< 65 years"),
                        opt("1", "65-74 years"),
                        opt("2", "≥ 75 years"),
                    ],
                ),
                InputDescriptor::select("diabetes", "Diabetes Mellitus history", "0", yes_no()),
                InputDescriptor::select(
                    "stroke",
                    "Prior Stroke/TIA/Thromboembolism",
                    "0",
                    vec![opt("0", "No"), opt("2", "Yes")],
                ),
                InputDescriptor::select(
                    "vascular",
                    "Vascular Disease (prior MI, PAD, or aortic plaque)",
                    "0",
                    yes_no(),
                ),
                InputDescriptor::select(
                    "genderChadsvasc",
                    "Sex Category (Female)",
                    "0",
                    vec![opt("0", "Male"), opt("1", "Female")],
                ),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "CHA₂DS₂-VASc Score"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::single("points")
    }

    fn details(&self) -> Details {
        Details::new()
            .description(
                "CHA₂DS₂-VASc score estimates stroke risk in patients with non-valvular atrial fibrillation.",
            )
            .note(
                "C: CHF(1), H: HTN(1), A₂: Age ≥75(2), D: Diabetes(1), S₂: Stroke/TIA/TE(2), V: Vascular disease(1), A: Age 65-74(1), Sc: Sex category (female)(1).",
            )
    }

    fn calculate(&self, inputs: &InputMap, _units: &UnitMap) -> Outcome {
        match sum_selects(
            inputs,
            &["chf", "htn", "ageChadsvasc", "diabetes", "stroke", "vascular", "genderChadsvasc"],
        ) {
            Some(total) => Outcome::number(total),
            None => Outcome::Incomplete,
        }
    }

    fn interpret(&self, value: &Value, inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let score = value.as_number()?;
        let female = num(inputs, "genderChadsvasc") == Some(1.0);

        let risk = if !female && score == 0.0 {
            "Low (Consider no antithrombotic therapy)"
        } else if female && score == 1.0 {
            "Low (Consider no antithrombotic therapy if sex is the only risk factor)"
        } else if (!female && score == 1.0) || (female && score == 2.0) {
            "Moderate (Consider oral anticoagulant)"
        } else if (!female && score >= 2.0) || (female && score >= 3.0) {
            "High (Oral anticoagulant recommended)"
        } else {
            "Oral anticoagulant generally recommended"
        };

        const STROKE_RISK_PERCENT: [&str; 10] = [
            "0.2%", "0.6%", "1.3%", "2.2%", "3.2%", "4.8%", "7.2%", "9.6%", "9.8%", "10.0%",
        ];
        let annual_risk = STROKE_RISK_PERCENT[(score as usize).min(STROKE_RISK_PERCENT.len() - 1)];

        Some(format!(
            "Score: {score}. Approx. Annual Stroke Risk: {annual_risk}. Recommendation: {risk}. Anticoagulation decisions should be individualized."
        ))
    }
}

/// HAS-BLED bleeding risk on anticoagulation.
pub struct HasBled;

impl Calculator for HasBled {
    fn id(&self) -> &str {
        "hasBled"
    }

    fn name(&self) -> &str {
        "HAS-BLED Bleeding Risk Score"
    }

    fn keywords(&self) -> &[&str] {
        &[
            "has-bled",
            "hasbled",
            "bleeding risk",
            "anticoagulation",
            "afib",
            "atrial fibrillation",
            "stroke",
        ]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            let item = |id: &str, label: &str| {
                InputDescriptor::select(id, label, "0", vec![opt("0", "No"), opt("1", "Yes (+1)")])
            };
            vec![
                item("htn", "Hypertension (uncontrolled, SBP > 160 mmHg)"),
                item("renal", "Abnormal Renal Function (dialysis, transplant, Cr > 2.26 mg/dL)"),
                item("liver", "Abnormal Liver Function (cirrhosis or significant LFTs)"),
                item("stroke", "History of Stroke"),
                item("bleeding", "Bleeding history or predisposition (e.g., anemia)"),
                item("inr", "Labile INRs (Time in Therapeutic Range < 60%)"),
                item("age", "Age > 65 years (\"Elderly\")"),
                item("drugs", "Concomitant Drugs (e.g., antiplatelets, NSAIDs)"),
                item("alcohol", "Alcohol Use (≥ 8 drinks/week)"),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "HAS-BLED Score"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::single("points")
    }

    fn details(&self) -> Details {
        Details::new()
            .description(
                "The HAS-BLED score estimates the 1-year risk of major bleeding for patients with atrial fibrillation on anticoagulation. It helps in assessing the risk-benefit of antithrombotic therapy.",
            )
            .note(
                "H: Hypertension, A: Abnormal renal/liver function (1 pt each), S: Stroke, B: Bleeding, L: Labile INR, E: Elderly (>65), D: Drugs/alcohol (1 pt each).",
            )
    }

    fn calculate(&self, inputs: &InputMap, _units: &UnitMap) -> Outcome {
        match sum_selects(
            inputs,
            &["htn", "renal", "liver", "stroke", "bleeding", "inr", "age", "drugs", "alcohol"],
        ) {
            Some(total) => Outcome::number(total),
            None => Outcome::Incomplete,
        }
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let score = value.as_number()?;
        const RISK_RATES: [&str; 6] = ["1.13%", "1.02%", "1.88%", "3.74%", "8.70%", "12.50%"];
        let annual_risk = RISK_RATES[(score as usize).min(5)];

        let guidance = if score >= 3.0 {
            "This indicates a high risk of bleeding. Caution and regular review are advised when prescribing antithrombotic therapy. The score is meant to encourage addressing modifiable risk factors, not necessarily withholding treatment."
        } else {
            "This indicates a low to moderate risk of bleeding. Anticoagulation is generally favored if indicated by stroke risk (e.g., CHA₂DS₂-VASc score)."
        };
        Some(format!(
            "Score: {score}. Estimated 1-year major bleeding risk is ~{annual_risk}. {guidance}"
        ))
    }
}

/// TIMI risk score for STEMI.
pub struct TimiStemi;

impl Calculator for TimiStemi {
    fn id(&self) -> &str {
        "timiStemi"
    }

    fn name(&self) -> &str {
        "TIMI Score for STEMI"
    }

    fn keywords(&self) -> &[&str] {
        &["timi", "stemi", "myocardial infarction", "heart attack", "cardiology", "risk"]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::select(
                    "age",
                    "Age",
                    "0",
                    vec![
                        opt("0", "< 65 years (+0)"),
                        opt("2", "65-74 years (+2)"),
                        opt("3", "≥ 75 years (+3)"),
                    ],
                ),
                InputDescriptor::select(
                    "historyDmHtAngina",
                    "History of Diabetes, HTN, or Angina",
                    "0",
                    vec![opt("0", "No"), opt("1", "Yes (+1)")],
                ),
                InputDescriptor::select(
                    "sbp",
                    "Systolic BP < 100 mmHg",
                    "0",
                    vec![opt("0", "No"), opt("3", "Yes (+3)")],
                ),
                InputDescriptor::select(
                    "hr",
                    "Heart Rate > 100 bpm",
                    "0",
                    vec![opt("0", "No"), opt("2", "Yes (+2)")],
                ),
                InputDescriptor::select(
                    "killip",
                    "Killip Class II-IV",
                    "0",
                    vec![opt("0", "No (Class I)"), opt("2", "Yes (+2)")],
                ),
                InputDescriptor::select(
                    "weight",
                    "Weight < 67 kg (150 lbs)",
                    "0",
                    vec![opt("0", "No"), opt("1", "Yes (+1)")],
                ),
                InputDescriptor::select(
                    "anteriorSte",
                    "Anterior ST Elevation or LBBB",
                    "0",
                    vec![opt("0", "No"), opt("1", "Yes (+1)")],
                ),
                InputDescriptor::select(
                    "timeToTx",
                    "Time to reperfusion > 4 hours",
                    "0",
                    vec![opt("0", "No"), opt("1", "Yes (+1)")],
                ),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "TIMI Score for STEMI"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::single("points")
    }

    fn details(&self) -> Details {
        Details::new().description(
            "The Thrombolysis in Myocardial Infarction (TIMI) risk score for ST-elevation MI (STEMI) is a simple tool for predicting 30-day mortality in patients presenting with STEMI.",
        )
    }

    fn calculate(&self, inputs: &InputMap, _units: &UnitMap) -> Outcome {
        match sum_selects(
            inputs,
            &[
                "age",
                "historyDmHtAngina",
                "sbp",
                "hr",
                "killip",
                "weight",
                "anteriorSte",
                "timeToTx",
            ],
        ) {
            Some(total) => Outcome::number(total),
            None => Outcome::Incomplete,
        }
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let score = value.as_number()?;
        const MORTALITY_RATES: [&str; 10] = [
            "0.8%", "1.6%", "2.2%", "4.4%", "7.3%", "12.4%", "16.1%", "23.4%", "26.8%", "35.9%",
        ];
        let mortality = MORTALITY_RATES[(score as usize).min(9)];
        Some(format!(
            "Score: {score}. Approximate 30-day mortality risk: {mortality}."
        ))
    }
}

/// Friedewald estimate of LDL cholesterol.
pub struct FriedewaldLdl;

impl Calculator for FriedewaldLdl {
    fn id(&self) -> &str {
        "friedewaldLDL"
    }

    fn name(&self) -> &str {
        "Friedewald Equation for LDL-C"
    }

    fn keywords(&self) -> &[&str] {
        &["friedewald", "ldl", "cholesterol", "lipids", "dyslipidemia", "cardiology"]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::number("totalChol", "Total Cholesterol")
                    .with_min(0.0)
                    .with_units(&CHOLESTEROL),
                InputDescriptor::number("hdlChol", "HDL Cholesterol")
                    .with_min(0.0)
                    .with_units(&CHOLESTEROL),
                InputDescriptor::number("triglycerides", "Triglycerides")
                    .with_min(0.0)
                    .with_units(&TRIGLYCERIDES),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "Estimated LDL-C"
    }

    fn result_unit(&self) -> ResultUnit {
        // The unit follows the entered cholesterol unit.
        ResultUnit::None
    }

    fn details(&self) -> Details {
        Details::new()
            .formula(
                "mg/dL: LDL-C = Total Cholesterol - HDL-C - (Triglycerides / 5)\nmmol/L: LDL-C = Total Cholesterol - HDL-C - (Triglycerides / 2.2)",
            )
            .description(
                "The Friedewald equation is a widely used formula for estimating Low-Density Lipoprotein (LDL) cholesterol.",
            )
            .note(
                "This formula is not valid and should not be used if Triglyceride levels are >400 mg/dL (>4.5 mmol/L) or in patients with dysbetalipoproteinemia.",
            )
    }

    fn calculate(&self, inputs: &InputMap, units: &UnitMap) -> Outcome {
        if !all_present(inputs, &["totalChol", "hdlChol", "triglycerides"]) {
            return Outcome::Incomplete;
        }

        let total = num(inputs, "totalChol");
        let hdl = num(inputs, "hdlChol");
        let tg = num(inputs, "triglycerides");
        let (Some(total), Some(hdl), Some(tg)) = (total, hdl, tg) else {
            return Outcome::invalid("Invalid input.");
        };
        if total < 0.0 || hdl < 0.0 || tg < 0.0 {
            return Outcome::invalid("Invalid input.");
        }

        // The formula branches on the triglycerides unit as entered; values
        // are not normalized to one convention.
        if selected_unit("triglycerides", units, &TRIGLYCERIDES) == "mg/dL" {
            if tg > 400.0 {
                return Outcome::invalid("Formula inaccurate when Triglycerides > 400 mg/dL.");
            }
            if total < hdl + (tg / 5.0) {
                return Outcome::invalid(
                    "LDL cannot be calculated, TC is too low relative to HDL and TG.",
                );
            }
            Outcome::number(total - hdl - (tg / 5.0))
        } else {
            let Some(tg_mg_dl) = convert_to_base("triglycerides", inputs, units, &TRIGLYCERIDES)
            else {
                return Outcome::invalid("Invalid input.");
            };
            if tg_mg_dl > 400.0 {
                return Outcome::invalid(
                    "Formula inaccurate when Triglycerides > 4.5 mmol/L (>400 mg/dL).",
                );
            }
            if total < hdl + (tg / 2.2) {
                return Outcome::invalid(
                    "LDL cannot be calculated, TC is too low relative to HDL and TG.",
                );
            }
            Outcome::number(total - hdl - (tg / 2.2))
        }
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, units: &UnitMap) -> Option<String> {
        let ldl = value.as_number()?;
        // The reading keys off the total-cholesterol unit selection.
        let text = if selected_unit("totalChol", units, &CHOLESTEROL) == "mg/dL" {
            let class = if ldl < 70.0 {
                "Very Low/Optimal (often a target for very high-risk patients)."
            } else if ldl < 100.0 {
                "Optimal/Near Optimal."
            } else if ldl < 130.0 {
                "Borderline High."
            } else if ldl < 160.0 {
                "High."
            } else if ldl < 190.0 {
                "Very High."
            } else {
                "Extremely High."
            };
            format!("Estimated LDL-C: {ldl:.1} mg/dL. {class}")
        } else {
            let class = if ldl < 1.8 {
                "Very Low/Optimal (often a target for very high-risk patients)."
            } else if ldl < 2.6 {
                "Optimal/Near Optimal."
            } else if ldl < 3.4 {
                "Borderline High."
            } else if ldl < 4.1 {
                "High."
            } else if ldl < 4.9 {
                "Very High."
            } else {
                "Extremely High."
            };
            format!("Estimated LDL-C: {ldl:.2} mmol/L. {class}")
        };
        Some(format!(
            "{text} Target levels depend on individual cardiovascular risk."
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
    fn map_reference_value() {
        let inputs = entries(&[("sbp", "120"), ("dbp", "80")]);
        let map = MeanArterialPressure
            .calculate(&inputs, &UnitMap::new())
            .value()
            .unwrap()
            .as_number()
            .unwrap();
        assert!((map - 93.333).abs() < 0.001);
    }

    #[test]
    fn map_rejects_inverted_pressures() {
        let inputs = entries(&[("sbp", "80"), ("dbp", "120")]);
        let Outcome::Invalid { message } = MeanArterialPressure.calculate(&inputs, &UnitMap::new())
        else {
            panic!("expected feedback");
        };
        assert!(message.contains("SBP"));
    }

    #[test]
    fn chadsvasc_female_sex_alone_reads_low() {
        let mut inputs = entries(&[
            ("chf", "0"),
            ("htn", "0"),
            ("ageChadsvasc", "0"),
            ("diabetes", "0"),
            ("stroke", "0"),
            ("vascular", "0"),
            ("genderChadsvasc", "1"),
        ]);
        let outcome = ChadsVasc.calculate(&inputs, &UnitMap::new());
        let value = outcome.value().cloned().unwrap();
        assert_eq!(value.as_number(), Some(1.0));
        let text = ChadsVasc.interpret(&value, &inputs, &UnitMap::new()).unwrap();
        assert!(text.contains("sex is the only risk factor"));

        inputs.insert("htn".into(), "1".into());
        let outcome = ChadsVasc.calculate(&inputs, &UnitMap::new());
        let text = ChadsVasc
            .interpret(outcome.value().unwrap(), &inputs, &UnitMap::new())
            .unwrap();
        assert!(text.contains("Moderate"));
    }

    #[test]
    fn has_bled_high_risk_at_three() {
        let mut inputs = entries(&[
            ("htn", "1"),
            ("renal", "1"),
            ("liver", "1"),
            ("stroke", "0"),
            ("bleeding", "0"),
            ("inr", "0"),
            ("age", "0"),
            ("drugs", "0"),
            ("alcohol", "0"),
        ]);
        let outcome = HasBled.calculate(&inputs, &UnitMap::new());
        let text = HasBled
            .interpret(outcome.value().unwrap(), &inputs, &UnitMap::new())
            .unwrap();
        assert!(text.contains("high risk of bleeding"));

        inputs.insert("liver".into(), "0".into());
        let outcome = HasBled.calculate(&inputs, &UnitMap::new());
        let text = HasBled
            .interpret(outcome.value().unwrap(), &inputs, &UnitMap::new())
            .unwrap();
        assert!(text.contains("low to moderate"));
    }

    #[test]
    fn timi_maximum_score_mortality() {
        let inputs = entries(&[
            ("age", "3"),
            ("historyDmHtAngina", "1"),
            ("sbp", "3"),
            ("hr", "2"),
            ("killip", "2"),
            ("weight", "1"),
            ("anteriorSte", "1"),
            ("timeToTx", "1"),
        ]);
        let outcome = TimiStemi.calculate(&inputs, &UnitMap::new());
        assert_eq!(outcome.value().unwrap().as_number(), Some(14.0));
        let text = TimiStemi
            .interpret(outcome.value().unwrap(), &inputs, &UnitMap::new())
            .unwrap();
        assert!(text.contains("35.9%"));
    }

    #[test]
    fn friedewald_conventional_units() {
        let inputs = entries(&[
            ("totalChol", "200"),
            ("hdlChol", "50"),
            ("triglycerides", "150"),
        ]);
        let ldl = FriedewaldLdl
            .calculate(&inputs, &UnitMap::new())
            .value()
            .unwrap()
            .as_number()
            .unwrap();
        assert_eq!(ldl, 120.0);
    }

    #[test]
    fn friedewald_rejects_high_triglycerides() {
        let inputs = entries(&[
            ("totalChol", "200"),
            ("hdlChol", "50"),
            ("triglycerides", "450"),
        ]);
        let Outcome::Invalid { message } = FriedewaldLdl.calculate(&inputs, &UnitMap::new()) else {
            panic!("expected feedback");
        };
        assert!(message.contains("400 mg/dL"));
    }

    #[test]
    fn friedewald_si_units_divide_by_2_2() {
        let inputs = entries(&[
            ("totalChol", "5.2"),
            ("hdlChol", "1.3"),
            ("triglycerides", "2.2"),
        ]);
        let units: UnitMap = [
            ("totalChol".to_string(), "mmol/L".to_string()),
            ("hdlChol".to_string(), "mmol/L".to_string()),
            ("triglycerides".to_string(), "mmol/L".to_string()),
        ]
        .into();
        let outcome = FriedewaldLdl.calculate(&inputs, &units);
        let ldl = outcome.value().unwrap().as_number().unwrap();
        assert!((ldl - 2.9).abs() < 1e-9);
        let text = FriedewaldLdl
            .interpret(outcome.value().unwrap(), &inputs, &units)
            .unwrap();
        assert!(text.contains("mmol/L"));
    }
}
