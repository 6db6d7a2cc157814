//! Respiratory and critical-care calculators.

use std::sync::LazyLock;

use crate::Calculator;
use crate::input::{
    InputDescriptor, InputMap, UnitMap, all_present, num, opt, raw, sum_selects, yes_no,
};
use crate::result::{Details, Outcome, ResultUnit, Value};
use crate::units::{BUN_UREA, convert_to_base};

/// Alveolar-arterial oxygen gradient.
pub struct AaGradient;

impl Calculator for AaGradient {
    fn id(&self) -> &str {
        "aaGradient"
    }

    fn name(&self) -> &str {
        "A-a Gradient (Alveolar-arterial)"
    }

    fn keywords(&self) -> &[&str] {
        &[
            "a-a gradient",
            "pao2",
            "alveolar",
            "arterial",
            "oxygen",
            "gas exchange",
            "hypoxemia",
        ]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::number("pao2", "PaO2 (from ABG)")
                    .with_min(0.0)
                    .with_unit("mmHg"),
                InputDescriptor::number("paco2", "PaCO2 (from ABG)")
                    .with_min(0.0)
                    .with_unit("mmHg"),
                InputDescriptor::number("fio2", "FiO2")
                    .with_min(21.0)
                    .with_max(100.0)
                    .with_unit("%"),
                InputDescriptor::number("age", "Patient Age")
                    .with_min(0.0)
                    .with_unit("years"),
                InputDescriptor::number("patm", "Atmospheric Pressure (optional)")
                    .with_min(0.0)
                    .with_unit("mmHg")
                    .optional(),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "A-a Gradient"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::multi(&[("aaGradient", "mmHg"), ("normalAaGradient", "mmHg")])
    }

    fn details(&self) -> Details {
        Details::new()
            .formula(
                "PAO2 = (FiO2/100 * (Patm - 47)) - (PaCO2 / 0.8)\nA-a Gradient = PAO2 - PaO2\nNormal A-a Gradient ≈ (Age / 4) + 4",
            )
            .description(
                "The Alveolar-arterial (A-a) gradient measures the difference between the oxygen concentration in the alveoli (PAO2) and arterial blood (PaO2). It is used to evaluate the cause of hypoxemia.",
            )
    }

    fn calculate(&self, inputs: &InputMap, _units: &UnitMap) -> Outcome {
        if !all_present(inputs, &["pao2", "paco2", "fio2", "age"]) {
            return Outcome::Incomplete;
        }

        let pao2 = num(inputs, "pao2");
        let paco2 = num(inputs, "paco2");
        let fio2 = num(inputs, "fio2");
        let age = num(inputs, "age");
        // Sea-level pressure when left blank.
        let patm = match raw(inputs, "patm") {
            None => Some(760.0),
            Some(_) => num(inputs, "patm"),
        };

        let (Some(pao2), Some(paco2), Some(fio2), Some(age), Some(patm)) =
            (pao2, paco2, fio2, age, patm)
        else {
            return Outcome::invalid("Invalid inputs. Ensure all values are non-negative.");
        };
        if pao2 < 0.0 || paco2 < 0.0 || fio2 < 0.0 || age < 0.0 || patm < 0.0 {
            return Outcome::invalid("Invalid inputs. Ensure all values are non-negative.");
        }

        let alveolar_po2 = (fio2 / 100.0 * (patm - 47.0)) - (paco2 / 0.8);
        let gradient = alveolar_po2 - pao2;
        let normal_for_age = (age / 4.0) + 4.0;

        Outcome::multi(&[("aaGradient", gradient), ("normalAaGradient", normal_for_age)])
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let gradient = value.get("aaGradient")?;
        let normal = value.get("normalAaGradient")?;
        let reading = if gradient > normal {
            "This is an ELEVATED gradient, suggesting a V/Q mismatch, diffusion impairment, or shunt as the cause of hypoxemia."
        } else {
            "This is a NORMAL gradient. If hypoxemia is present, consider causes like hypoventilation or low inspired FiO2."
        };
        Some(format!(
            "Calculated A-a Gradient is {gradient:.1} mmHg. The estimated normal for this age is {normal:.1} mmHg. {reading}"
        ))
    }
}

/// CURB-65 pneumonia severity.
pub struct Curb65;

impl Calculator for Curb65 {
    fn id(&self) -> &str {
        "curb65"
    }

    fn name(&self) -> &str {
        "CURB-65 Score for Pneumonia Severity"
    }

    fn keywords(&self) -> &[&str] {
        &["curb65", "pneumonia", "cap", "community acquired pneumonia", "severity"]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::select("confusion", "Confusion (new disorientation)", "0", yes_no()),
                InputDescriptor::number("bun", "Blood Urea Nitrogen/Urea")
                    .with_min(0.0)
                    .with_units(&BUN_UREA),
                InputDescriptor::select(
                    "respiratoryRate",
                    "Respiratory Rate ≥ 30/min",
                    "0",
                    vec![opt("0", "No (<30)"), opt("1", "Yes (≥30)")],
                ),
                InputDescriptor::select(
                    "bp",
                    "Low Blood Pressure (SBP <90 or DBP ≤60)",
                    "0",
                    yes_no(),
                ),
                InputDescriptor::select(
                    "ageCurb",
                    "Age ≥ 65 years",
                    "0",
                    vec![opt("0", "No (<65)"), opt("1", "Yes (≥65)")],
                ),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "CURB-65 Score"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::single("points")
    }

    fn details(&self) -> Details {
        Details::new()
            .description(
                "CURB-65 estimates mortality of community-acquired pneumonia to help determine inpatient vs. outpatient treatment.",
            )
            .note(
                "C: Confusion(1), U: BUN >19 mg/dL or Urea >7 mmol/L (1), R: Resp Rate ≥30(1), B: SBP<90 or DBP≤60(1), Age ≥65(1).",
            )
    }

    fn calculate(&self, inputs: &InputMap, units: &UnitMap) -> Outcome {
        let Some(mut score) =
            sum_selects(inputs, &["confusion", "respiratoryRate", "bp", "ageCurb"])
        else {
            return Outcome::Incomplete;
        };
        let Some(bun_raw) = num(inputs, "bun") else {
            return Outcome::Incomplete;
        };

        // The urea point comes from the converted value, not a selection.
        let Some(bun_mg_dl) = convert_to_base("bun", inputs, units, &BUN_UREA) else {
            return Outcome::invalid("BUN/Urea input error");
        };
        if bun_raw < 0.0 {
            return Outcome::invalid("BUN/Urea cannot be negative");
        }
        if bun_mg_dl > 19.0 {
            score += 1.0;
        }

        Outcome::number(score)
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let score = value.as_number()?;
        let (recommendation, mortality) = if score == 0.0 {
            ("Low severity. Consider home treatment.", "0.6-0.7%")
        } else if score == 1.0 {
            ("Low severity. Consider home treatment.", "2.7-3.2%")
        } else if score == 2.0 {
            ("Moderate severity. Consider hospital admission.", "6.8-13.0%")
        } else if score == 3.0 {
            ("Severe pneumonia. Hospitalize; consider ICU if score 4-5.", "14.0-17.0%")
        } else {
            (
                "Severe pneumonia. Urgent hospitalization; consider ICU.",
                "27.8-40.0% (score 4), 57% (score 5)",
            )
        };
        Some(format!(
            "Score: {score}. {recommendation} Approx. 30-day Mortality: {mortality}."
        ))
    }
}

/// Pneumonia Severity Index (PORT score).
pub struct PneumoniaSeverityIndex;

const PSI_FINDINGS: [(&str, f64); 18] = [
    ("nursingHome", 10.0),
    ("neoplastic", 30.0),
    ("liverDz", 20.0),
    ("chf", 10.0),
    ("cerebrovascular", 10.0),
    ("renalDz", 10.0),
    ("mentalStatus", 20.0),
    ("pulse", 10.0),
    ("respRate", 20.0),
    ("sbp", 20.0),
    ("temp", 15.0),
    ("ph", 30.0),
    ("bun", 20.0),
    ("sodium", 20.0),
    ("glucose", 10.0),
    ("hct", 10.0),
    ("paO2", 10.0),
    ("pleuralEffusion", 10.0),
];

impl Calculator for PneumoniaSeverityIndex {
    fn id(&self) -> &str {
        "psiScore"
    }

    fn name(&self) -> &str {
        "Pneumonia Severity Index (PSI)"
    }

    fn keywords(&self) -> &[&str] {
        &["psi", "pneumonia severity index", "cap", "community acquired pneumonia", "risk"]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            let finding = |id: &str, label: &str, points: u32| {
                InputDescriptor::select(
                    id,
                    label,
                    "0",
                    vec![opt("0", "No"), opt("1", &format!("Yes (+{points} pts)"))],
                )
            };
            vec![
                InputDescriptor::number("age", "Age").with_min(0.0).with_unit("years"),
                InputDescriptor::select(
                    "gender",
                    "Sex",
                    "male",
                    vec![opt("male", "Male"), opt("female", "Female")],
                ),
                finding("nursingHome", "Nursing Home Resident", 10),
                finding("neoplastic", "Neoplastic Disease", 30),
                finding("liverDz", "Liver Disease", 20),
                finding("chf", "Congestive Heart Failure", 10),
                finding("cerebrovascular", "Cerebrovascular Disease", 10),
                finding("renalDz", "Renal Disease", 10),
                finding("mentalStatus", "Altered Mental Status", 20),
                finding("pulse", "Pulse ≥ 125 bpm", 10),
                finding("respRate", "Respiratory Rate ≥ 30/min", 20),
                finding("sbp", "Systolic BP < 90 mmHg", 20),
                finding("temp", "Temperature <35°C or ≥40°C", 15),
                finding("ph", "Arterial pH < 7.35", 30),
                finding("bun", "BUN ≥ 30 mg/dL (11 mmol/L)", 20),
                finding("sodium", "Sodium < 130 mEq/L", 20),
                finding("glucose", "Glucose ≥ 250 mg/dL (14 mmol/L)", 10),
                finding("hct", "Hematocrit < 30%", 10),
                finding("paO2", "PaO₂ < 60 mmHg or O₂ Sat < 90%", 10),
                finding("pleuralEffusion", "Pleural Effusion", 10),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "PSI Score"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::single("points")
    }

    fn details(&self) -> Details {
        Details::new().description(
            "The Pneumonia Severity Index (PSI) is a clinical prediction rule that stratifies adults with community-acquired pneumonia (CAP) into risk classes to help guide decisions about site of care.",
        )
    }

    fn calculate(&self, inputs: &InputMap, _units: &UnitMap) -> Outcome {
        let age = match num(inputs, "age") {
            Some(a) if a >= 0.0 => a,
            _ => return Outcome::Incomplete,
        };

        let mut score = if raw(inputs, "gender") == Some("male") {
            age
        } else {
            (age - 10.0).max(0.0)
        };

        for (key, points) in PSI_FINDINGS {
            match num(inputs, key) {
                Some(v) => {
                    if v == 1.0 {
                        score += points;
                    }
                }
                None => return Outcome::Incomplete,
            }
        }

        Outcome::number(score)
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let score = value.as_number()?;
        let (class, mortality, recommendation) = if score <= 50.0 {
            ("I", "0.1%", "Outpatient care")
        } else if score <= 70.0 {
            ("II", "0.6%", "Outpatient care")
        } else if score <= 90.0 {
            ("III", "0.9-2.8%", "Outpatient care or brief inpatient admission")
        } else if score <= 130.0 {
            ("IV", "8.2-9.3%", "Inpatient admission")
        } else {
            ("V", "27-31.1%", "Inpatient admission (consider ICU)")
        };
        Some(format!(
            "Score: {score}. Risk Class: {class}. Approx. 30-day Mortality: {mortality}. Recommendation: {recommendation}."
        ))
    }
}

/// BODE index for COPD survival.
pub struct BodeIndex;

impl Calculator for BodeIndex {
    fn id(&self) -> &str {
        "bodeIndex"
    }

    fn name(&self) -> &str {
        "BODE Index for COPD Survival"
    }

    fn keywords(&self) -> &[&str] {
        &["bode", "copd", "survival", "pulmonology", "fev1", "dyspnea"]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::select(
                    "bmiBode",
                    "BMI",
                    "0",
                    vec![opt("0", "> 21 kg/m²"), opt("1", "≤ 21 kg/m²")],
                ),
                InputDescriptor::select(
                    "fev1",
                    "Post-Bronchodilator FEV1 (% predicted)",
                    "0",
                    vec![
                        opt("0", "≥ 65%"),
                        opt("1", "50% - 64%"),
                        opt("2", "36% - 49%"),
                        opt("3", "≤ 35%"),
                    ],
                ),
                InputDescriptor::select(
                    "mmrc",
                    "MMRC Dyspnea Scale",
                    "0",
                    vec![
                        opt("0", "Grade 0-1 (Only breathless with strenuous exercise)"),
                        opt("1", "Grade 2 (Short of breath when hurrying or walking up a slight hill)"),
                        opt(
                            "2",
                            "Grade 3 (Walks slower than people of the same age due to breathlessness or has to stop for breath when walking at own pace)",
                        ),
                        opt(
                            "3",
                            "Grade 4 (Too breathless to leave the house or breathless when dressing)",
                        ),
                    ],
                ),
                InputDescriptor::select(
                    "walkDist",
                    "6-Minute Walk Distance",
                    "0",
                    vec![
                        opt("0", "≥ 350 meters"),
                        opt("1", "250 - 349 meters"),
                        opt("2", "150 - 249 meters"),
                        opt("3", "≤ 149 meters"),
                    ],
                ),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "BODE Index Score"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::single("points")
    }

    fn details(&self) -> Details {
        Details::new()
            .description(
                "The BODE index is a multidimensional scoring system used to predict the risk of death from any cause in patients with Chronic Obstructive Pulmonary Disease (COPD).",
            )
            .note(
                "B: Body-mass index (BMI ≤21 = 1 pt)\nO: Airflow Obstruction (FEV1 % predicted)\nD: Dyspnea (MMRC scale)\nE: Exercise capacity (6-min walk distance)",
            )
    }

    fn calculate(&self, inputs: &InputMap, _units: &UnitMap) -> Outcome {
        match sum_selects(inputs, &["bmiBode", "fev1", "mmrc", "walkDist"]) {
            Some(total) => Outcome::number(total),
            None => Outcome::Incomplete,
        }
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let score = value.as_number()?;
        let survival = if score <= 2.0 {
            "80%"
        } else if score <= 4.0 {
            "67%"
        } else if score <= 6.0 {
            "57%"
        } else {
            "18%"
        };
        Some(format!(
            "Score: {score} points (Range 0-10). Approximate 4-year survival is {survival}."
        ))
    }
}

/// Quick SOFA bedside sepsis screen.
pub struct QSofa;

impl Calculator for QSofa {
    fn id(&self) -> &str {
        "qsofaScore"
    }

    fn name(&self) -> &str {
        "qSOFA Score (Quick SOFA)"
    }

    fn keywords(&self) -> &[&str] {
        &["qsofa", "quick sofa", "sepsis", "septic shock", "icu", "critical care"]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            let item = |id: &str, label: &str| {
                InputDescriptor::select(id, label, "0", vec![opt("0", "No"), opt("1", "Yes (+1)")])
            };
            vec![
                item("respRate", "Respiratory Rate ≥ 22/min"),
                item("mentalStatus", "Altered Mentation (GCS < 15)"),
                item("sbp", "Systolic Blood Pressure ≤ 100 mmHg"),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "qSOFA Score"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::single("points")
    }

    fn details(&self) -> Details {
        Details::new().description(
            "The quick Sequential (Sepsis-related) Organ Failure Assessment (qSOFA) is a bedside prompt that may identify patients with suspected infection who are at greater risk for a poor outcome outside the intensive care unit (ICU).",
        )
    }

    fn calculate(&self, inputs: &InputMap, _units: &UnitMap) -> Outcome {
        match sum_selects(inputs, &["respRate", "mentalStatus", "sbp"]) {
            Some(total) => Outcome::number(total),
            None => Outcome::Incomplete,
        }
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let score = value.as_number()?;
        Some(if score >= 2.0 {
            format!(
                "Score: {score}. Positive screen. Patients with suspected infection who are likely to have a prolonged ICU stay or to die in the hospital. Consider obtaining a full SOFA score and escalating care."
            )
        } else {
            format!("Score: {score}. Negative screen. Lower risk of poor outcome. Continue monitoring.")
        })
    }
}

/// Sequential Organ Failure Assessment.
pub struct Sofa;

impl Calculator for Sofa {
    fn id(&self) -> &str {
        "sofa"
    }

    fn name(&self) -> &str {
        "SOFA Score (Sequential Organ Failure Assessment)"
    }

    fn keywords(&self) -> &[&str] {
        &["sofa", "sepsis", "organ failure", "icu", "critical care"]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::select(
                    "pao2fio2",
                    "PaO2/FiO2 ratio (mmHg)",
                    "0",
                    vec![
                        opt("0", "≥400"),
                        opt("1", "<400"),
                        opt("2", "<300"),
                        opt("3", "<200 with respiratory support"),
                        opt("4", "<100 with respiratory support"),
                    ],
                ),
                InputDescriptor::select(
                    "plateletsSofa",
                    "Platelets (x10^3/µL)",
                    "0",
                    vec![
                        opt("0", "≥150"),
                        opt("1", "<150"),
                        opt("2", "<100"),
                        opt("3", "<50"),
                        opt("4", "<20"),
                    ],
                ),
                InputDescriptor::select(
                    "bilirubinSofa",
                    "Bilirubin (mg/dL)",
                    "0",
                    vec![
                        opt("0", "<1.2 (<20 µmol/L)"),
                        opt("1", "1.2-1.9 (20-32 µmol/L)"),
                        opt("2", "2.0-5.9 (33-101 µmol/L)"),
                        opt("3", "6.0-11.9 (102-204 µmol/L)"),
                        opt("4", ">12.0 (>204 µmol/L)"),
                    ],
                ),
                InputDescriptor::select(
                    "mapSofa",
                    "Mean Arterial Pressure (MAP) or Vasopressors",
                    "0",
                    vec![
                        opt("0", "MAP ≥70 mmHg"),
                        opt("1", "MAP <70 mmHg"),
                        opt("2", "Dopamine ≤5 µg/kg/min or Dobutamine (any dose)"),
                        opt(
                            "3",
                            "Dopamine >5 µg/kg/min OR Epinephrine ≤0.1 µg/kg/min OR Norepinephrine ≤0.1 µg/kg/min",
                        ),
                        opt(
                            "4",
                            "Dopamine >15 µg/kg/min OR Epinephrine >0.1 µg/kg/min OR Norepinephrine >0.1 µg/kg/min",
                        ),
                    ],
                ),
                InputDescriptor::select(
                    "gcsSofa",
                    "Glasgow Coma Scale (GCS)",
                    "0",
                    vec![
                        opt("0", "15"),
                        opt("1", "13-14"),
                        opt("2", "10-12"),
                        opt("3", "6-9"),
                        opt("4", "<6"),
                    ],
                ),
                InputDescriptor::select(
                    "creatinineSofa",
                    "Creatinine (mg/dL) or Urine Output",
                    "0",
                    vec![
                        opt("0", "<1.2 (<110 µmol/L)"),
                        opt("1", "1.2-1.9 (110-170 µmol/L)"),
                        opt("2", "2.0-3.4 (171-299 µmol/L)"),
                        opt("3", "3.5-4.9 (300-440 µmol/L) OR <500 mL/day"),
                        opt("4", ">5.0 (>440 µmol/L) OR <200 mL/day"),
                    ],
                ),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "SOFA Score"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::single("points")
    }

    fn details(&self) -> Details {
        Details::new().description(
            "The Sequential Organ Failure Assessment (SOFA) score is used to track a patient's status during their stay in an ICU. It assesses the function of six organ systems. A higher SOFA score is associated with increased mortality.",
        )
    }

    fn calculate(&self, inputs: &InputMap, _units: &UnitMap) -> Outcome {
        match sum_selects(
            inputs,
            &["pao2fio2", "plateletsSofa", "bilirubinSofa", "mapSofa", "gcsSofa", "creatinineSofa"],
        ) {
            Some(total) => Outcome::number(total),
            None => Outcome::Incomplete,
        }
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let score = value.as_number()?;
        Some(format!(
            "Total SOFA score: {score}. A score increase during the first 24-48h in ICU predicts a mortality rate of at least 50%. Baseline score of <9 predicts 33% mortality. Score >11 predicts 95% mortality."
        ))
    }
}

/// Epworth daytime sleepiness scale.
pub struct EpworthSleepiness;

impl Calculator for EpworthSleepiness {
    fn id(&self) -> &str {
        "epworthSleepinessScale"
    }

    fn name(&self) -> &str {
        "Epworth Sleepiness Scale (ESS)"
    }

    fn keywords(&self) -> &[&str] {
        &["epworth", "ess", "sleepiness", "daytime", "sleep apnea", "osa", "pulmonology"]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            let situations = [
                ("q1", "1. Sitting and reading"),
                ("q2", "2. Watching TV"),
                ("q3", "3. Sitting, inactive in a public place (e.g. a theater or a meeting)"),
                ("q4", "4. As a passenger in a car for an hour without a break"),
                ("q5", "5. Lying down to rest in the afternoon when circumstances permit"),
                ("q6", "6. Sitting and talking to someone"),
                ("q7", "7. Sitting quietly after a lunch without alcohol"),
                ("q8", "8. In a car, while stopped for a few minutes in traffic"),
            ];
            situations
                .into_iter()
                .map(|(id, label)| {
                    InputDescriptor::select(
                        id,
                        label,
                        "0",
                        vec![
                            opt("0", "0 - Would never doze"),
                            opt("1", "1 - Slight chance"),
                            opt("2", "2 - Moderate chance"),
                            opt("3", "3 - High chance"),
                        ],
                    )
                })
                .collect()
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "Epworth Sleepiness Score"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::single("points")
    }

    fn details(&self) -> Details {
        Details::new().description(
            "The Epworth Sleepiness Scale (ESS) is a questionnaire used to measure daytime sleepiness. The score can help identify potential sleep disorders like obstructive sleep apnea (OSA).",
        )
    }

    fn calculate(&self, inputs: &InputMap, _units: &UnitMap) -> Outcome {
        match sum_selects(inputs, &["q1", "q2", "q3", "q4", "q5", "q6", "q7", "q8"]) {
            Some(total) => Outcome::number(total),
            None => Outcome::Incomplete,
        }
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let score = value.as_number()?;
        Some(if score <= 10.0 {
            format!("Score: {score}. Normal level of daytime sleepiness.")
        } else if score <= 17.0 {
            format!(
                "Score: {score}. Moderate excessive daytime sleepiness. Further evaluation may be warranted."
            )
        } else {
            format!(
                "Score: {score}. Severe excessive daytime sleepiness. Seeking medical advice is recommended."
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
    fn aa_gradient_defaults_atmospheric_pressure() {
        let inputs = entries(&[
            ("pao2", "90"),
            ("paco2", "40"),
            ("fio2", "21"),
            ("age", "40"),
        ]);
        let value = AaGradient
            .calculate(&inputs, &UnitMap::new())
            .value()
            .cloned()
            .unwrap();
        // PAO2 = 0.21*(760-47) - 40/0.8 = 99.73; gradient = 9.73
        assert!((value.get("aaGradient").unwrap() - 9.73).abs() < 0.001);
        assert_eq!(value.get("normalAaGradient"), Some(14.0));
    }

    #[test]
    fn aa_gradient_elevated_reading() {
        let inputs = entries(&[
            ("pao2", "60"),
            ("paco2", "40"),
            ("fio2", "21"),
            ("age", "40"),
        ]);
        let outcome = AaGradient.calculate(&inputs, &UnitMap::new());
        let text = AaGradient
            .interpret(outcome.value().unwrap(), &inputs, &UnitMap::new())
            .unwrap();
        assert!(text.contains("ELEVATED"));
    }

    #[test]
    fn curb65_bun_point_comes_from_converted_value() {
        let base = entries(&[
            ("confusion", "0"),
            ("bun", "8"),
            ("respiratoryRate", "0"),
            ("bp", "0"),
            ("ageCurb", "0"),
        ]);
        // 8 mg/dL BUN: below threshold.
        assert_eq!(
            Curb65
                .calculate(&base, &UnitMap::new())
                .value()
                .unwrap()
                .as_number(),
            Some(0.0)
        );
        // 8 mmol/L urea converts to 22.4 mg/dL BUN: above threshold.
        let units: UnitMap = [("bun".to_string(), "mmol/L".to_string())].into();
        assert_eq!(
            Curb65.calculate(&base, &units).value().unwrap().as_number(),
            Some(1.0)
        );
    }

    #[test]
    fn psi_age_and_sex_points() {
        let mut inputs = entries(&[("age", "70"), ("gender", "male")]);
        for (key, _) in PSI_FINDINGS {
            inputs.insert(key.to_string(), "0".to_string());
        }
        assert_eq!(
            PneumoniaSeverityIndex
                .calculate(&inputs, &UnitMap::new())
                .value()
                .unwrap()
                .as_number(),
            Some(70.0)
        );
        inputs.insert("gender".into(), "female".into());
        inputs.insert("neoplastic".into(), "1".into());
        assert_eq!(
            PneumoniaSeverityIndex
                .calculate(&inputs, &UnitMap::new())
                .value()
                .unwrap()
                .as_number(),
            Some(90.0)
        );
    }

    #[test]
    fn qsofa_two_is_positive_screen() {
        let inputs = entries(&[("respRate", "1"), ("mentalStatus", "1"), ("sbp", "0")]);
        let outcome = QSofa.calculate(&inputs, &UnitMap::new());
        let text = QSofa
            .interpret(outcome.value().unwrap(), &inputs, &UnitMap::new())
            .unwrap();
        assert!(text.contains("Positive screen"));
    }

    #[test]
    fn epworth_moderate_band() {
        let inputs = entries(&[
            ("q1", "2"),
            ("q2", "2"),
            ("q3", "2"),
            ("q4", "2"),
            ("q5", "2"),
            ("q6", "1"),
            ("q7", "0"),
            ("q8", "0"),
        ]);
        let outcome = EpworthSleepiness.calculate(&inputs, &UnitMap::new());
        assert_eq!(outcome.value().unwrap().as_number(), Some(11.0));
        let text = EpworthSleepiness
            .interpret(outcome.value().unwrap(), &inputs, &UnitMap::new())
            .unwrap();
        assert!(text.contains("Moderate excessive"));
    }
}
