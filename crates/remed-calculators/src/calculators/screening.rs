//! Screening questionnaires and bedside assessment scales.

use std::sync::LazyLock;

use crate::Calculator;
use crate::input::{InputDescriptor, InputMap, UnitMap, opt, raw, sum_selects, yes_no};
use crate::result::{Details, Outcome, ResultUnit, Value};

/// ADAM questionnaire for androgen deficiency.
pub struct AdamScreener;

const ADAM_OTHER_QUESTIONS: [&str; 8] = ["q2", "q3", "q4", "q5", "q6", "q8", "q9", "q10"];

impl Calculator for AdamScreener {
    fn id(&self) -> &str {
        "adamScreener"
    }

    fn name(&self) -> &str {
        "ADAM Questionnaire for Androgen Deficiency"
    }

    fn keywords(&self) -> &[&str] {
        &["adam", "androgen deficiency", "hypogonadism", "testosterone", "male health"]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            let questions = [
                ("q1", "1. Do you have a decrease in libido (sex drive)?"),
                ("q2", "2. Do you have a lack of energy?"),
                ("q3", "3. Do you have a decrease in strength and/or endurance?"),
                ("q4", "4. Have you lost height?"),
                ("q5", "5. Have you noticed a decreased enjoyment of life?"),
                ("q6", "6. Are you sad and/or grumpy?"),
                ("q7", "7. Are your erections less strong?"),
                (
                    "q8",
                    "8. Have you noticed a recent deterioration in your ability to play sports?",
                ),
                ("q9", "9. Are you falling asleep after dinner?"),
                (
                    "q10",
                    "10. Has there been a recent deterioration in your work performance?",
                ),
            ];
            questions
                .into_iter()
                .map(|(id, label)| InputDescriptor::select(id, label, "0", yes_no()))
                .collect()
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "Screening Result"
    }

    fn details(&self) -> Details {
        Details::new().description(
            "The Androgen Deficiency in Aging Males (ADAM) questionnaire is a screening tool for symptoms of low testosterone levels (hypogonadism). It is not a diagnostic tool on its own.",
        )
    }

    fn calculate(&self, inputs: &InputMap, _units: &UnitMap) -> Outcome {
        let (Some(q1), Some(q7)) = (raw(inputs, "q1"), raw(inputs, "q7")) else {
            return Outcome::Incomplete;
        };

        let mut other_yes = 0;
        for key in ADAM_OTHER_QUESTIONS {
            match raw(inputs, key) {
                Some("1") => other_yes += 1,
                Some(_) => {}
                None => return Outcome::Incomplete,
            }
        }

        if q1 == "1" || q7 == "1" || other_yes >= 3 {
            Outcome::text("Positive")
        } else {
            Outcome::text("Negative")
        }
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let result = value.as_text()?;
        Some(
            if result == "Positive" {
                "Positive Screen. This suggests that symptoms consistent with androgen deficiency are present. Further evaluation with a morning total testosterone level is recommended."
            } else {
                "Negative Screen. Symptoms reported are less likely to be due to androgen deficiency. However, this does not rule it out if clinical suspicion is high."
            }
            .to_string(),
        )
    }
}

/// WHO AUDIT alcohol-use screening.
pub struct AuditScore;

impl Calculator for AuditScore {
    fn id(&self) -> &str {
        "audit"
    }

    fn name(&self) -> &str {
        "AUDIT Score (Alcohol Use Disorders Identification Test)"
    }

    fn keywords(&self) -> &[&str] {
        &["audit", "alcohol", "screening", "substance use"]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            let frequency = || {
                vec![
                    opt("0", "Never"),
                    opt("1", "Less than monthly"),
                    opt("2", "Monthly"),
                    opt("3", "Weekly"),
                    opt("4", "Daily or almost daily"),
                ]
            };
            let past_year = || {
                vec![
                    opt("0", "No"),
                    opt("2", "Yes, but not in the last year"),
                    opt("4", "Yes, during the last year"),
                ]
            };
            vec![
                InputDescriptor::select(
                    "q1",
                    "1. How often do you have a drink containing alcohol?",
                    "0",
                    vec![
                        opt("0", "Never"),
                        opt("1", "Monthly or less"),
                        opt("2", "2-4 times a month"),
                        opt("3", "2-3 times a week"),
                        opt("4", "4 or more times a week"),
                    ],
                ),
                InputDescriptor::select(
                    "q2",
                    "2. How many standard drinks containing alcohol do you have on a typical day when you are drinking?",
                    "0",
                    vec![
                        opt("0", "1 or 2"),
                        opt("1", "3 or 4"),
                        opt("2", "5 or 6"),
                        opt("3", "7 to 9"),
                        opt("4", "10 or more"),
                    ],
                ),
                InputDescriptor::select(
                    "q3",
                    "3. How often do you have six or more standard drinks on one occasion?",
                    "0",
                    frequency(),
                ),
                InputDescriptor::select(
                    "q4",
                    "4. How often during the last year have you found that you were not able to stop drinking once you had started?",
                    "0",
                    frequency(),
                ),
                InputDescriptor::select(
                    "q5",
                    "5. How often during the last year have you failed to do what was normally expected from you because of drinking?",
                    "0",
                    frequency(),
                ),
                InputDescriptor::select(
                    "q6",
                    "6. How often during the last year have you needed a first drink in the morning to get yourself going after a heavy drinking session?",
                    "0",
                    frequency(),
                ),
                InputDescriptor::select(
                    "q7",
                    "7. How often during the last year have you had a feeling of guilt or remorse after drinking?",
                    "0",
                    frequency(),
                ),
                InputDescriptor::select(
                    "q8",
                    "8. How often during the last year have you been unable to remember what happened the night before because you had been drinking?",
                    "0",
                    frequency(),
                ),
                InputDescriptor::select(
                    "q9",
                    "9. Have you or someone else been injured as a result of your drinking?",
                    "0",
                    past_year(),
                ),
                InputDescriptor::select(
                    "q10",
                    "10. Has a relative or friend or a doctor or another health worker been concerned about your drinking or suggested you cut down?",
                    "0",
                    past_year(),
                ),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "AUDIT Score"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::single("points")
    }

    fn details(&self) -> Details {
        Details::new().description(
            "The Alcohol Use Disorders Identification Test (AUDIT) is a 10-item questionnaire developed by the World Health Organization (WHO) to screen for hazardous and harmful alcohol use, and possible alcohol dependence.",
        )
    }

    fn calculate(&self, inputs: &InputMap, _units: &UnitMap) -> Outcome {
        match sum_selects(
            inputs,
            &["q1", "q2", "q3", "q4", "q5", "q6", "q7", "q8", "q9", "q10"],
        ) {
            Some(total) => Outcome::number(total),
            None => Outcome::Incomplete,
        }
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let score = value.as_number()?;
        Some(
            if score <= 7.0 {
                "Zone I (0-7 points): Low risk. Alcohol education."
            } else if score <= 15.0 {
                "Zone II (8-15 points): Hazardous use. Simple advice."
            } else if score <= 19.0 {
                "Zone III (16-19 points): Harmful use. Simple advice plus brief counseling and continued monitoring."
            } else {
                "Zone IV (20-40 points): Likely alcohol dependence. Referral to specialist for diagnostic evaluation and treatment."
            }
            .to_string(),
        )
    }
}

/// Geriatric Depression Scale, 15-item short form.
pub struct GdsShort;

/// Question ids paired with whether a "Yes" answer scores the point. The
/// remaining items are reverse-scored: a "No" earns the point.
const GDS_QUESTIONS: [(&str, bool); 15] = [
    ("q1", false),
    ("q2", true),
    ("q3", true),
    ("q4", true),
    ("q5", false),
    ("q6", true),
    ("q7", false),
    ("q8", true),
    ("q9", true),
    ("q10", true),
    ("q11", false),
    ("q12", true),
    ("q13", false),
    ("q14", true),
    ("q15", true),
];

impl Calculator for GdsShort {
    fn id(&self) -> &str {
        "gdsShort"
    }

    fn name(&self) -> &str {
        "Geriatric Depression Scale (GDS) - Short Form"
    }

    fn keywords(&self) -> &[&str] {
        &["gds", "geriatric depression", "depression", "screening", "elderly", "psychiatry"]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            let questions = [
                ("q1", "1. Are you basically satisfied with your life?", "1"),
                ("q2", "2. Have you dropped many of your activities and interests?", "0"),
                ("q3", "3. Do you feel that your life is empty?", "0"),
                ("q4", "4. Do you often get bored?", "0"),
                ("q5", "5. Are you in good spirits most of the time?", "1"),
                (
                    "q6",
                    "6. Are you afraid that something bad is going to happen to you?",
                    "0",
                ),
                ("q7", "7. Do you feel happy most of the time?", "1"),
                ("q8", "8. Do you often feel helpless?", "0"),
                (
                    "q9",
                    "9. Do you prefer to stay at home, rather than going out?",
                    "0",
                ),
                (
                    "q10",
                    "10. Do you feel you have more problems with memory than most?",
                    "0",
                ),
                ("q11", "11. Do you think it is wonderful to be alive now?", "1"),
                ("q12", "12. Do you feel pretty worthless the way you are now?", "0"),
                ("q13", "13. Do you feel full of energy?", "1"),
                ("q14", "14. Do you feel that your situation is hopeless?", "0"),
                (
                    "q15",
                    "15. Do you think that most people are better off than you are?",
                    "0",
                ),
            ];
            questions
                .into_iter()
                .map(|(id, label, default)| {
                    InputDescriptor::select(
                        id,
                        label,
                        default,
                        vec![opt("1", "Yes"), opt("0", "No")],
                    )
                })
                .collect()
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "GDS-15 Score"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::single("points")
    }

    fn details(&self) -> Details {
        Details::new()
            .description(
                "The Geriatric Depression Scale (GDS) Short Form is a 15-item screening tool for depression in older adults. A higher score indicates a greater likelihood of depression.",
            )
            .note(
                "One point is assigned for 'No' answers to questions 1, 5, 7, 11, 13, and for 'Yes' answers to all other questions.",
            )
    }

    fn calculate(&self, inputs: &InputMap, _units: &UnitMap) -> Outcome {
        let mut score = 0.0;
        for (id, score_on_yes) in GDS_QUESTIONS {
            let Some(answer) = raw(inputs, id) else {
                return Outcome::Incomplete;
            };
            if (score_on_yes && answer == "1") || (!score_on_yes && answer == "0") {
                score += 1.0;
            }
        }
        Outcome::number(score)
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let score = value.as_number()?;
        Some(if score <= 4.0 {
            format!("Score: {score}. Suggests depression is not likely (Normal range).")
        } else if score <= 8.0 {
            format!("Score: {score}. Suggests mild depression.")
        } else if score <= 11.0 {
            format!("Score: {score}. Suggests moderate depression.")
        } else {
            format!("Score: {score}. Suggests severe depression.")
        })
    }
}

/// CIWA-Ar alcohol withdrawal severity.
pub struct CiwaAr;

impl Calculator for CiwaAr {
    fn id(&self) -> &str {
        "ciwaAr"
    }

    fn name(&self) -> &str {
        "CIWA-Ar for Alcohol Withdrawal"
    }

    fn keywords(&self) -> &[&str] {
        &["ciwa", "alcohol withdrawal", "delirium tremens", "detox", "addiction"]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            let disturbance = |id: &str, label: &str, mild: &str| {
                InputDescriptor::select(
                    id,
                    label,
                    "0",
                    vec![
                        opt("0", "0 - None"),
                        opt("1", &format!("1 - {mild}")),
                        opt("2", "2 - Mild"),
                        opt("3", "3 - Moderate"),
                        opt("4", "4 - Moderate hallucinations"),
                        opt("5", "5 - Severe hallucinations"),
                        opt("6", "6 - Extremely severe hallucinations"),
                        opt("7", "7 - Continuous hallucinations"),
                    ],
                )
            };
            vec![
                InputDescriptor::select(
                    "nausea",
                    "Nausea and Vomiting",
                    "0",
                    vec![
                        opt("0", "0 - None"),
                        opt("1", "1 - Mild nausea with no vomiting"),
                        opt("4", "4 - Intermittent nausea with dry heaves"),
                        opt("7", "7 - Constant nausea, frequent dry heaves/vomiting"),
                    ],
                ),
                InputDescriptor::select(
                    "tremor",
                    "Tremor",
                    "0",
                    vec![
                        opt("0", "0 - No tremor"),
                        opt("1", "1 - Not visible, but can be felt"),
                        opt("4", "4 - Moderate, with arms extended"),
                        opt("7", "7 - Severe, even with arms not extended"),
                    ],
                ),
                InputDescriptor::select(
                    "sweats",
                    "Paroxysmal Sweats",
                    "0",
                    vec![
                        opt("0", "0 - No sweat"),
                        opt("1", "1 - Barely perceptible sweating"),
                        opt("4", "4 - Beads of sweat obvious on forehead"),
                        opt("7", "7 - Drenching sweats"),
                    ],
                ),
                InputDescriptor::select(
                    "anxiety",
                    "Anxiety",
                    "0",
                    vec![
                        opt("0", "0 - No anxiety"),
                        opt("1", "1 - Mildly anxious"),
                        opt("4", "4 - Moderately anxious or guarded"),
                        opt("7", "7 - Equivalent to acute panic state"),
                    ],
                ),
                InputDescriptor::select(
                    "agitation",
                    "Agitation",
                    "0",
                    vec![
                        opt("0", "0 - Normal activity"),
                        opt("1", "1 - Somewhat normal activity"),
                        opt("2", "2 - Moderately fidgety and restless"),
                        opt("4", "4 - Paces, or thrashes about"),
                        opt("7", "7 - Runs about, or is fighting"),
                    ],
                ),
                disturbance("tactile", "Tactile Disturbances", "Very mild itching, pins and needles"),
                disturbance("auditory", "Auditory Disturbances", "Very mild harshness or ability to frighten"),
                disturbance("visual", "Visual Disturbances", "Very mild sensitivity"),
                InputDescriptor::select(
                    "headache",
                    "Headache, Fullness in Head",
                    "0",
                    vec![
                        opt("0", "0 - Not present"),
                        opt("1", "1 - Very mild"),
                        opt("2", "2 - Mild"),
                        opt("3", "3 - Moderate"),
                        opt("4", "4 - Moderately severe"),
                        opt("5", "5 - Severe"),
                        opt("6", "6 - Very severe"),
                        opt("7", "7 - Extremely severe"),
                    ],
                ),
                InputDescriptor::select(
                    "orientation",
                    "Orientation and Clouding of Sensorium",
                    "0",
                    vec![
                        opt("0", "0 - Oriented and can do serial additions"),
                        opt("1", "1 - Cannot do serial additions"),
                        opt("2", "2 - Disoriented for date by no more than 2 calendar days"),
                        opt("3", "3 - Disoriented for date by more than 2 calendar days"),
                        opt("4", "4 - Disoriented for place and/or person"),
                    ],
                ),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "CIWA-Ar Score"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::single("points")
    }

    fn details(&self) -> Details {
        Details::new().description(
            "The Clinical Institute Withdrawal Assessment for Alcohol, Revised (CIWA-Ar) is a 10-item scale used to quantify the severity of alcohol withdrawal and to guide therapy.",
        )
    }

    fn calculate(&self, inputs: &InputMap, _units: &UnitMap) -> Outcome {
        match sum_selects(
            inputs,
            &[
                "nausea",
                "tremor",
                "sweats",
                "anxiety",
                "agitation",
                "tactile",
                "auditory",
                "visual",
                "headache",
                "orientation",
            ],
        ) {
            Some(total) => Outcome::number(total),
            None => Outcome::Incomplete,
        }
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let score = value.as_number()?;
        let (severity, recommendation) = if score <= 9.0 {
            (
                "Absent or minimal withdrawal",
                "No medication needed unless there's a history of severe withdrawal or seizures.",
            )
        } else if score <= 15.0 {
            (
                "Mild to moderate withdrawal",
                "Symptom-triggered medication is appropriate. Monitor closely.",
            )
        } else {
            (
                "Severe withdrawal",
                "Symptom-triggered medication required. High risk for delirium tremens. Consider scheduled medication regimen and intensive monitoring.",
            )
        };
        Some(format!(
            "Score: {score}. Severity: {severity}. Recommendation: {recommendation}"
        ))
    }
}

/// Centor score (with McIsaac modification) for strep pharyngitis.
pub struct CentorScore;

impl Calculator for CentorScore {
    fn id(&self) -> &str {
        "centorScore"
    }

    fn name(&self) -> &str {
        "Centor Score for Strep Pharyngitis"
    }

    fn keywords(&self) -> &[&str] {
        &["centor", "mcisaac", "strep", "pharyngitis", "sore throat", "tonsillitis"]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::select("exudate", "Tonsillar exudate or swelling", "0", yes_no()),
                InputDescriptor::select(
                    "nodes",
                    "Swollen, tender anterior cervical nodes",
                    "0",
                    yes_no(),
                ),
                InputDescriptor::select("fever", "Temperature > 38°C (100.4°F)", "0", yes_no()),
                InputDescriptor::select(
                    "cough",
                    "Absence of cough",
                    "0",
                    vec![opt("0", "No (Cough present)"), opt("1", "Yes (Cough absent)")],
                ),
                InputDescriptor::select(
                    "age",
                    "Age (McIsaac modification)",
                    "0",
                    vec![
                        opt("1", "3-14 years"),
                        opt("0", "15-44 years"),
                        opt("-1", "≥ 45 years"),
                    ],
                ),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "Centor Score"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::single("points")
    }

    fn details(&self) -> Details {
        Details::new()
            .description(
                "The Centor score (with McIsaac age-based modification) is a clinical decision rule for predicting the probability of Group A Streptococcus infection in patients with pharyngitis.",
            )
            .note(
                "C: Tonsillar exudates (+1)\nE: Swollen tender anterior cervical nodes (+1)\nN: No cough (+1)\nT: Temperature > 38°C (+1)\nOR: Age Modifier (3-14: +1, 15-44: 0, ≥45: -1)",
            )
    }

    fn calculate(&self, inputs: &InputMap, _units: &UnitMap) -> Outcome {
        match sum_selects(inputs, &["exudate", "nodes", "fever", "cough", "age"]) {
            Some(total) => Outcome::number(total),
            None => Outcome::Incomplete,
        }
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let score = value.as_number()?;
        let (risk, recommendation) = if score <= 0.0 {
            (
                "1-2.5%",
                "No antibiotic or throat culture necessary. Risk of strep is very low.",
            )
        } else if score == 1.0 {
            (
                "5-10%",
                "Throat culture or Rapid Antigen Detection Test (RADT) may be considered.",
            )
        } else if score == 2.0 {
            ("11-17%", "Perform throat culture or RADT. Treat with antibiotics if positive.")
        } else if score == 3.0 {
            (
                "28-35%",
                "Perform throat culture or RADT. Treat with antibiotics if positive. Some guidelines suggest empirical treatment.",
            )
        } else {
            ("51-53%", "Empiric antibiotics may be justified. RADT can still be useful.")
        };
        Some(format!(
            "Score: {score}. Risk of Group A Strep: {risk}. Recommendation: {recommendation}"
        ))
    }
}

/// Wells criteria for DVT probability.
pub struct WellsDvt;

impl Calculator for WellsDvt {
    fn id(&self) -> &str {
        "wellsDvt"
    }

    fn name(&self) -> &str {
        "Wells Score for DVT Probability"
    }

    fn keywords(&self) -> &[&str] {
        &["wells dvt", "deep vein thrombosis", "dvt", "pulmonary embolism", "vte"]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            let item = |id: &str, label: &str| InputDescriptor::select(id, label, "0", yes_no());
            vec![
                item("activeCancer", "Active cancer (treatment within 6 months, or palliative)"),
                item("paralysis", "Paralysis, paresis, or recent plaster immobilization of LE"),
                item("bedridden", "Recently bedridden >3 days or major surgery within 12 weeks"),
                item("tenderness", "Localized tenderness along deep venous system"),
                item("legSwelling", "Entire leg swollen"),
                item(
                    "calfSwelling",
                    "Calf swelling >3 cm compared to asymptomatic leg (measured 10cm below tibial tuberosity)",
                ),
                item("pittingEdema", "Pitting edema (confined to symptomatic leg)"),
                item("collateralVeins", "Collateral superficial veins (nonvaricose)"),
                item("previousDvt", "Previously documented DVT"),
                InputDescriptor::select(
                    "alternativeDiagnosis",
                    "Alternative diagnosis as likely or greater than DVT",
                    "0",
                    vec![opt("0", "No (+0 points)"), opt("-2", "Yes (-2 points)")],
                ),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "Wells Score for DVT"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::single("points")
    }

    fn details(&self) -> Details {
        Details::new().description(
            "Wells criteria for DVT. Each positive finding typically adds 1 point, unless specified (Alternative diagnosis: -2 points).",
        )
    }

    fn calculate(&self, inputs: &InputMap, _units: &UnitMap) -> Outcome {
        match sum_selects(
            inputs,
            &[
                "activeCancer",
                "paralysis",
                "bedridden",
                "tenderness",
                "legSwelling",
                "calfSwelling",
                "pittingEdema",
                "collateralVeins",
                "previousDvt",
                "alternativeDiagnosis",
            ],
        ) {
            Some(total) => Outcome::number(total),
            None => Outcome::Incomplete,
        }
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let score = value.as_number()?;
        let risk = if score >= 3.0 {
            "High probability (~75% with 2-level, ~53% with 3-level)"
        } else if score >= 1.0 {
            "Moderate probability (~17% with 2-level, ~17% with 3-level for score 1-2)"
        } else {
            "Low probability (~3% with 2-level, ~5% with 3-level for score <=0)"
        };
        Some(format!(
            "Score: {score}. DVT Probability: {risk}. Interpretation varies slightly by 2-level vs 3-level model. For low/moderate scores, D-dimer testing is often recommended."
        ))
    }
}

/// Apgar newborn assessment.
pub struct Apgar;

impl Calculator for Apgar {
    fn id(&self) -> &str {
        "apgar"
    }

    fn name(&self) -> &str {
        "Apgar Score"
    }

    fn keywords(&self) -> &[&str] {
        &["apgar", "newborn", "infant", "obstetrics", "pediatrics"]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::select(
                    "appearance",
                    "Appearance (Skin Color)",
                    "2",
                    vec![
                        opt("0", "Blue or pale all over (0 pts)"),
                        opt("1", "Body pink, extremities blue (Acrocyanosis) (1 pt)"),
                        opt("2", "Completely pink (2 pts)"),
                    ],
                ),
                InputDescriptor::select(
                    "pulse",
                    "Pulse (Heart Rate)",
                    "2",
                    vec![
                        opt("0", "Absent (0 pts)"),
                        opt("1", "< 100 bpm (1 pt)"),
                        opt("2", "≥ 100 bpm (2 pts)"),
                    ],
                ),
                InputDescriptor::select(
                    "grimace",
                    "Grimace (Reflex Irritability)",
                    "2",
                    vec![
                        opt("0", "No response (0 pts)"),
                        opt("1", "Grimace (1 pt)"),
                        opt("2", "Cries, coughs, or sneezes (2 pts)"),
                    ],
                ),
                InputDescriptor::select(
                    "activity",
                    "Activity (Muscle Tone)",
                    "2",
                    vec![
                        opt("0", "Limp (0 pts)"),
                        opt("1", "Some flexion of extremities (1 pt)"),
                        opt("2", "Active motion (2 pts)"),
                    ],
                ),
                InputDescriptor::select(
                    "respiration",
                    "Respiration (Breathing Effort)",
                    "2",
                    vec![
                        opt("0", "Absent (0 pts)"),
                        opt("1", "Slow, irregular, weak cry (1 pt)"),
                        opt("2", "Good, strong cry (2 pts)"),
                    ],
                ),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "Apgar Score"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::single("points")
    }

    fn details(&self) -> Details {
        Details::new().description(
            "The Apgar score is a quick assessment of a newborn's health immediately after birth, based on five criteria. It is typically assessed at 1 and 5 minutes after birth.",
        )
    }

    fn calculate(&self, inputs: &InputMap, _units: &UnitMap) -> Outcome {
        match sum_selects(
            inputs,
            &["appearance", "pulse", "grimace", "activity", "respiration"],
        ) {
            Some(total) => Outcome::number(total),
            None => Outcome::Incomplete,
        }
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let score = value.as_number()?;
        Some(if score >= 7.0 {
            format!("Score: {score}. Normal. Routine care.")
        } else if score >= 4.0 {
            format!(
                "Score: {score}. Moderately abnormal. Some resuscitation assistance may be needed (e.g., stimulation, oxygen)."
            )
        } else {
            format!("Score: {score}. Low. Immediate resuscitation required.")
        })
    }
}

/// Glasgow Coma Scale.
pub struct GlasgowComaScale;

impl Calculator for GlasgowComaScale {
    fn id(&self) -> &str {
        "gcs"
    }

    fn name(&self) -> &str {
        "Glasgow Coma Scale (GCS)"
    }

    fn keywords(&self) -> &[&str] {
        &["gcs", "glasgow coma scale", "consciousness", "neurology", "trauma"]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::select(
                    "eyeResponse",
                    "Eye Opening Response",
                    "4",
                    vec![
                        opt("4", "Eyes open spontaneously (4 pts)"),
                        opt("3", "Eyes open to verbal command (3 pts)"),
                        opt("2", "Eyes open to pain (2 pts)"),
                        opt("1", "No eye opening (1 pt)"),
                    ],
                ),
                InputDescriptor::select(
                    "verbalResponse",
                    "Verbal Response",
                    "5",
                    vec![
                        opt("5", "Oriented (5 pts)"),
                        opt("4", "Confused (4 pts)"),
                        opt("3", "Inappropriate words (3 pts)"),
                        opt("2", "Incomprehensible sounds (2 pts)"),
                        opt("1", "No verbal response (1 pt)"),
                    ],
                ),
                InputDescriptor::select(
                    "motorResponse",
                    "Motor Response",
                    "6",
                    vec![
                        opt("6", "Obeys commands (6 pts)"),
                        opt("5", "Localizes pain (5 pts)"),
                        opt("4", "Withdraws from pain (4 pts)"),
                        opt("3", "Flexion to pain (decorticate) (3 pts)"),
                        opt("2", "Extension to pain (decerebrate) (2 pts)"),
                        opt("1", "No motor response (1 pt)"),
                    ],
                ),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "GCS Score"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::single("points")
    }

    fn details(&self) -> Details {
        Details::new().description(
            "The Glasgow Coma Scale is used to objectively describe the extent of impaired consciousness in all types of acute medical and trauma patients. Sum of points from Eye, Verbal, and Motor responses.",
        )
    }

    fn calculate(&self, inputs: &InputMap, _units: &UnitMap) -> Outcome {
        match sum_selects(inputs, &["eyeResponse", "verbalResponse", "motorResponse"]) {
            Some(total) => Outcome::number(total),
            None => Outcome::Incomplete,
        }
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let score = value.as_number()?;
        Some(if score <= 8.0 {
            format!("Score: {score}. Severe head injury. (Typically ≤8)")
        } else if score <= 12.0 {
            format!("Score: {score}. Moderate head injury. (Typically 9-12)")
        } else {
            format!("Score: {score}. Mild head injury. (Typically 13-15)")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_inputs;

    fn entries(pairs: &[(&str, &str)]) -> InputMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn all_no(ids: &[&str]) -> InputMap {
        ids.iter()
            .map(|id| (id.to_string(), "0".to_string()))
            .collect()
    }

    #[test]
    fn adam_positive_on_q1_alone() {
        let mut inputs = all_no(&["q1", "q2", "q3", "q4", "q5", "q6", "q7", "q8", "q9", "q10"]);
        inputs.insert("q1".into(), "1".into());
        assert_eq!(
            AdamScreener
                .calculate(&inputs, &UnitMap::new())
                .value()
                .unwrap()
                .as_text(),
            Some("Positive")
        );
    }

    #[test]
    fn adam_positive_on_three_other_symptoms() {
        let mut inputs = all_no(&["q1", "q2", "q3", "q4", "q5", "q6", "q7", "q8", "q9", "q10"]);
        for q in ["q2", "q3", "q4"] {
            inputs.insert(q.into(), "1".into());
        }
        assert_eq!(
            AdamScreener
                .calculate(&inputs, &UnitMap::new())
                .value()
                .unwrap()
                .as_text(),
            Some("Positive")
        );
    }

    #[test]
    fn adam_two_other_symptoms_is_negative() {
        let mut inputs = all_no(&["q1", "q2", "q3", "q4", "q5", "q6", "q7", "q8", "q9", "q10"]);
        for q in ["q2", "q3"] {
            inputs.insert(q.into(), "1".into());
        }
        assert_eq!(
            AdamScreener
                .calculate(&inputs, &UnitMap::new())
                .value()
                .unwrap()
                .as_text(),
            Some("Negative")
        );
    }

    #[test]
    fn gds_defaults_score_zero() {
        // The default answers are the non-depressed responses throughout.
        let inputs = default_inputs(&GdsShort);
        assert_eq!(
            GdsShort
                .calculate(&inputs, &UnitMap::new())
                .value()
                .unwrap()
                .as_number(),
            Some(0.0)
        );
    }

    #[test]
    fn gds_reverse_scored_items() {
        let mut inputs = default_inputs(&GdsShort);
        // "No" to "Are you basically satisfied with your life?" scores a point.
        inputs.insert("q1".into(), "0".into());
        assert_eq!(
            GdsShort
                .calculate(&inputs, &UnitMap::new())
                .value()
                .unwrap()
                .as_number(),
            Some(1.0)
        );
    }

    #[test]
    fn centor_age_modifier_can_go_negative() {
        let inputs = entries(&[
            ("exudate", "0"),
            ("nodes", "0"),
            ("fever", "0"),
            ("cough", "0"),
            ("age", "-1"),
        ]);
        let outcome = CentorScore.calculate(&inputs, &UnitMap::new());
        assert_eq!(outcome.value().unwrap().as_number(), Some(-1.0));
        let text = CentorScore
            .interpret(outcome.value().unwrap(), &inputs, &UnitMap::new())
            .unwrap();
        assert!(text.contains("very low"));
    }

    #[test]
    fn wells_alternative_diagnosis_subtracts() {
        let mut inputs = all_no(&[
            "activeCancer",
            "paralysis",
            "bedridden",
            "tenderness",
            "legSwelling",
            "calfSwelling",
            "pittingEdema",
            "collateralVeins",
            "previousDvt",
            "alternativeDiagnosis",
        ]);
        inputs.insert("tenderness".into(), "1".into());
        inputs.insert("alternativeDiagnosis".into(), "-2".into());
        assert_eq!(
            WellsDvt
                .calculate(&inputs, &UnitMap::new())
                .value()
                .unwrap()
                .as_number(),
            Some(-1.0)
        );
    }

    #[test]
    fn apgar_defaults_are_normal() {
        let inputs = default_inputs(&Apgar);
        let outcome = Apgar.calculate(&inputs, &UnitMap::new());
        assert_eq!(outcome.value().unwrap().as_number(), Some(10.0));
        let text = Apgar
            .interpret(outcome.value().unwrap(), &inputs, &UnitMap::new())
            .unwrap();
        assert!(text.contains("Routine care"));
    }

    #[test]
    fn gcs_severe_band() {
        let inputs = entries(&[
            ("eyeResponse", "2"),
            ("verbalResponse", "2"),
            ("motorResponse", "4"),
        ]);
        let outcome = GlasgowComaScale.calculate(&inputs, &UnitMap::new());
        assert_eq!(outcome.value().unwrap().as_number(), Some(8.0));
        let text = GlasgowComaScale
            .interpret(outcome.value().unwrap(), &inputs, &UnitMap::new())
            .unwrap();
        assert!(text.contains("Severe"));
    }

    #[test]
    fn audit_zone_boundaries() {
        let mut inputs = all_no(&["q1", "q2", "q3", "q4", "q5", "q6", "q7", "q8", "q9", "q10"]);
        inputs.insert("q1".into(), "4".into());
        inputs.insert("q2".into(), "4".into());
        let outcome = AuditScore.calculate(&inputs, &UnitMap::new());
        assert_eq!(outcome.value().unwrap().as_number(), Some(8.0));
        let text = AuditScore
            .interpret(outcome.value().unwrap(), &inputs, &UnitMap::new())
            .unwrap();
        assert!(text.contains("Zone II"));
    }

    #[test]
    fn ciwa_severe_withdrawal() {
        let ids = [
            "nausea",
            "tremor",
            "sweats",
            "anxiety",
            "agitation",
            "tactile",
            "auditory",
            "visual",
            "headache",
            "orientation",
        ];
        let mut inputs = all_no(&ids);
        for id in ["nausea", "tremor", "sweats"] {
            inputs.insert(id.to_string(), "7".to_string());
        }
        let outcome = CiwaAr.calculate(&inputs, &UnitMap::new());
        assert_eq!(outcome.value().unwrap().as_number(), Some(21.0));
        let text = CiwaAr
            .interpret(outcome.value().unwrap(), &inputs, &UnitMap::new())
            .unwrap();
        assert!(text.contains("Severe withdrawal"));
    }
}
