//! Gastroenterology classifications and risk scores.

use std::sync::LazyLock;

use crate::Calculator;
use crate::input::{
    InputDescriptor, InputMap, UnitMap, all_present, num, opt, raw, sum_selects, yes_no,
};
use crate::result::{Details, Outcome, ResultUnit, Value};
use crate::units::{HEMOGLOBIN, convert_to_base};

/// Bristol stool form scale.
pub struct BristolStool;

impl Calculator for BristolStool {
    fn id(&self) -> &str {
        "bristolStool"
    }

    fn name(&self) -> &str {
        "Bristol Stool Scale"
    }

    fn keywords(&self) -> &[&str] {
        &[
            "bristol stool scale",
            "poop chart",
            "feces type",
            "gastroenterology",
            "bowel movement",
        ]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![InputDescriptor::select(
                "stoolType",
                "Stool Type",
                "4",
                vec![
                    opt("1", "Type 1: Separate hard lumps, like nuts (hard to pass)"),
                    opt("2", "Type 2: Sausage-shaped, but lumpy"),
                    opt("3", "Type 3: Like a sausage but with cracks on its surface"),
                    opt("4", "Type 4: Like a sausage or snake, smooth and soft"),
                    opt("5", "Type 5: Soft blobs with clear-cut edges (passed easily)"),
                    opt("6", "Type 6: Fluffy pieces with ragged edges, a mushy stool"),
                    opt("7", "Type 7: Watery, no solid pieces (entirely liquid)"),
                ],
            )]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "Bristol Stool Type"
    }

    fn details(&self) -> Details {
        Details::new().description(
            "The Bristol Stool Form Scale is a diagnostic medical tool designed to classify the form of human faeces into seven categories.",
        )
    }

    fn calculate(&self, inputs: &InputMap, _units: &UnitMap) -> Outcome {
        match num(inputs, "stoolType") {
            Some(stool_type) => Outcome::number(stool_type),
            None => Outcome::Incomplete,
        }
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let stool_type = value.as_number()?;
        let reading = match stool_type as i64 {
            1 => "Severe constipation",
            2 => "Mild constipation",
            3 | 4 => "Normal",
            5 => "Lacking fibre / Mild diarrhea",
            6 => "Mild diarrhea",
            7 => "Severe diarrhea",
            _ => return Some("Invalid type selected.".to_string()),
        };
        Some(format!("Type {stool_type}: {reading}"))
    }
}

/// Los Angeles classification of reflux esophagitis.
pub struct LaEsophagitis;

impl Calculator for LaEsophagitis {
    fn id(&self) -> &str {
        "laEsophagitis"
    }

    fn name(&self) -> &str {
        "Los Angeles (LA) Classification of Esophagitis"
    }

    fn keywords(&self) -> &[&str] {
        &["la classification", "esophagitis", "gerd", "endoscopy", "gastroenterology"]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![InputDescriptor::select(
                "laGrade",
                "LA Grade",
                "A",
                vec![
                    opt("A", "Grade A"),
                    opt("B", "Grade B"),
                    opt("C", "Grade C"),
                    opt("D", "Grade D"),
                    opt("N", "Normal (No breaks)"),
                ],
            )]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "LA Grade"
    }

    fn details(&self) -> Details {
        Details::new().description(
            "The Los Angeles (LA) classification system is widely used for grading reflux esophagitis based on endoscopic findings.",
        )
    }

    fn calculate(&self, inputs: &InputMap, _units: &UnitMap) -> Outcome {
        match raw(inputs, "laGrade") {
            Some(grade) => Outcome::text(grade),
            None => Outcome::Incomplete,
        }
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let grade = value.as_text()?;
        Some(
            match grade {
                "A" => "Grade A: One or more mucosal breaks no longer than 5 mm, that do not extend between the tops of two mucosal folds.",
                "B" => "Grade B: One or more mucosal breaks longer than 5 mm, that do not extend between the tops of two mucosal folds.",
                "C" => "Grade C: One or more mucosal breaks that are continuous between the tops of two or more mucosal folds but which involve less than 75% of the circumference.",
                "D" => "Grade D: One or more mucosal breaks which involve at least 75% of the esophageal circumference.",
                "N" => "Normal: No mucosal breaks observed.",
                _ => "Select a grade to see interpretation.",
            }
            .to_string(),
        )
    }
}

/// Montreal classification for inflammatory bowel disease.
pub struct MontrealIbd;

const CROHNS_FIELDS: [&str; 4] = ["crohnsAge", "crohnsLocation", "crohnsBehavior", "crohnsPerianal"];
const UC_FIELDS: [&str; 1] = ["ucExtent"];

impl Calculator for MontrealIbd {
    fn id(&self) -> &str {
        "montrealIBD"
    }

    fn name(&self) -> &str {
        "Montreal Classification for IBD"
    }

    fn keywords(&self) -> &[&str] {
        &[
            "montreal classification",
            "ibd",
            "crohns",
            "ulcerative colitis",
            "gastroenterology",
        ]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::select(
                    "ibdType",
                    "IBD Type",
                    "crohns",
                    vec![opt("crohns", "Crohn's Disease"), opt("uc", "Ulcerative Colitis")],
                ),
                InputDescriptor::select(
                    "crohnsAge",
                    "Age at Diagnosis (Crohn's)",
                    "A1",
                    vec![
                        opt("A1", "A1 (≤16 years)"),
                        opt("A2", "A2 (17-40 years)"),
                        opt("A3", "A3 (>40 years)"),
                    ],
                ),
                InputDescriptor::select(
                    "crohnsLocation",
                    "Location (Crohn's)",
                    "L1",
                    vec![
                        opt("L1", "L1 (Ileal)"),
                        opt("L2", "L2 (Colonic)"),
                        opt("L3", "L3 (Ileocolonic)"),
                        opt("L4", "L4 (Upper GI)"),
                    ],
                ),
                InputDescriptor::select(
                    "crohnsBehavior",
                    "Behavior (Crohn's)",
                    "B1",
                    vec![
                        opt("B1", "B1 (Non-stricturing, Non-penetrating)"),
                        opt("B2", "B2 (Stricturing)"),
                        opt("B3", "B3 (Penetrating)"),
                        opt("B1p", "B1p (Non-stricturing, Non-penetrating, Perianal)"),
                        opt("B2p", "B2p (Stricturing, Perianal)"),
                        opt("B3p", "B3p (Penetrating, Perianal)"),
                    ],
                ),
                InputDescriptor::select(
                    "crohnsPerianal",
                    "Perianal Disease Modifier (Crohn's)",
                    "no_p",
                    vec![
                        opt("no_p", "No Perianal Disease (\"p\" not added)"),
                        opt("p", "Perianal Disease Present (add \"p\" to B1/B2/B3)"),
                    ],
                ),
                InputDescriptor::select(
                    "ucExtent",
                    "Extent (Ulcerative Colitis)",
                    "E1",
                    vec![
                        opt("E1", "E1 (Proctitis)"),
                        opt("E2", "E2 (Left-sided/Distal)"),
                        opt("E3", "E3 (Extensive/Pancolitis)"),
                    ],
                ),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "Montreal Classification"
    }

    fn details(&self) -> Details {
        Details::new().description(
            "Montreal classification for IBD. Select IBD type first. For Crohn's Disease: A=Age at diagnosis, L=Location, B=Behavior (p=perianal modifier; if B1/B2/B3 selected and 'Perianal Disease Present' is chosen, 'p' is appended. Or select B1p/B2p/B3p directly). For Ulcerative Colitis: E=Extent. Ensure all relevant fields for the selected IBD type are chosen.",
        )
    }

    fn active_inputs(&self, inputs: &InputMap) -> Vec<&InputDescriptor> {
        let ibd_type = raw(inputs, "ibdType").unwrap_or("crohns");
        self.inputs()
            .iter()
            .filter(|input| {
                if CROHNS_FIELDS.contains(&input.id.as_str()) {
                    ibd_type == "crohns"
                } else if UC_FIELDS.contains(&input.id.as_str()) {
                    ibd_type == "uc"
                } else {
                    true
                }
            })
            .collect()
    }

    fn calculate(&self, inputs: &InputMap, _units: &UnitMap) -> Outcome {
        let Some(ibd_type) = raw(inputs, "ibdType") else {
            return Outcome::Incomplete;
        };

        match ibd_type {
            "crohns" => {
                if !all_present(inputs, &CROHNS_FIELDS) {
                    return Outcome::invalid("Please select all Crohn's parameters.");
                }
                let age = raw(inputs, "crohnsAge").unwrap_or_default();
                let location = raw(inputs, "crohnsLocation").unwrap_or_default();
                let behavior = raw(inputs, "crohnsBehavior").unwrap_or_default();
                let perianal = raw(inputs, "crohnsPerianal").unwrap_or_default();

                let behavior = if perianal == "p" && ["B1", "B2", "B3"].contains(&behavior) {
                    format!("{behavior}p")
                } else {
                    behavior.to_string()
                };
                Outcome::text(format!("Crohn's: {age}{location}{behavior}"))
            }
            "uc" => match raw(inputs, "ucExtent") {
                Some(extent) => Outcome::text(format!("UC: {extent}")),
                None => Outcome::invalid("Please select Ulcerative Colitis extent."),
            },
            _ => Outcome::Incomplete,
        }
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let classification = value.as_text()?;
        Some(format!(
            "Classification: {classification}. This string summarizes the disease characteristics based on the Montreal classification system."
        ))
    }
}

/// Prague C&M classification for Barrett's esophagus.
pub struct PragueBarretts;

impl Calculator for PragueBarretts {
    fn id(&self) -> &str {
        "pragueBarretts"
    }

    fn name(&self) -> &str {
        "Prague C&M Classification for Barrett's Esophagus"
    }

    fn keywords(&self) -> &[&str] {
        &["prague c&m", "barrett's esophagus", "endoscopy", "gastroenterology", "gerd"]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::number("pragueC", "Circumferential Extent (C)")
                    .with_min(0.0)
                    .with_step(0.1)
                    .with_unit("cm"),
                InputDescriptor::number("pragueM", "Maximal Extent (M)")
                    .with_min(0.0)
                    .with_step(0.1)
                    .with_unit("cm"),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "Prague Classification"
    }

    fn details(&self) -> Details {
        Details::new().description(
            "The Prague C&M criteria are used for endoscopic classification of Barrett's esophagus. 'C' refers to the circumferential extent of metaplasia in cm. 'M' refers to the maximal extent (length of the longest tongue) of metaplasia in cm.",
        )
    }

    fn calculate(&self, inputs: &InputMap, _units: &UnitMap) -> Outcome {
        let (Some(c), Some(m)) = (num(inputs, "pragueC"), num(inputs, "pragueM")) else {
            return Outcome::Incomplete;
        };
        if c < 0.0 || m < 0.0 {
            return Outcome::Incomplete;
        }
        if c > m {
            return Outcome::invalid("C value cannot be greater than M value.");
        }
        Outcome::text(format!("C{c}M{m}"))
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let classification = value.as_text()?;
        if !classification.starts_with('C') {
            return None;
        }
        Some(format!(
            "Classification: {classification}. This indicates the extent of Barrett's esophagus. For example, C2M5 means 2 cm of circumferential involvement and a maximal extent of 5 cm."
        ))
    }
}

/// Oakland score for acute lower GI bleeding.
pub struct OaklandScore;

impl Calculator for OaklandScore {
    fn id(&self) -> &str {
        "oaklandScore"
    }

    fn name(&self) -> &str {
        "Oakland Score (Acute Lower GI Bleeding)"
    }

    fn keywords(&self) -> &[&str] {
        &[
            "oakland score",
            "lgib",
            "lower gi bleed",
            "gastrointestinal bleeding",
            "prognosis",
        ]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::number("ageOakland", "Age").with_min(0.0).with_unit("years"),
                InputDescriptor::select(
                    "sexOakland",
                    "Sex",
                    "0",
                    vec![opt("0", "Female"), opt("1", "Male")],
                ),
                InputDescriptor::select("prevLgibOakland", "Previous Lower GI Bleed", "0", yes_no()),
                InputDescriptor::select(
                    "dreBloodOakland",
                    "Digital Rectal Exam: Blood",
                    "0",
                    vec![opt("0", "No blood / Not performed"), opt("1", "Blood on DRE")],
                ),
                InputDescriptor::number("hrOakland", "Heart Rate (bpm)")
                    .with_min(0.0)
                    .with_unit("bpm"),
                InputDescriptor::number("sbpOakland", "Systolic Blood Pressure (mmHg)")
                    .with_min(0.0)
                    .with_unit("mmHg"),
                InputDescriptor::number("hbOakland", "Hemoglobin")
                    .with_min(0.0)
                    .with_units(&HEMOGLOBIN),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "Oakland Score"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::single("points")
    }

    fn details(&self) -> Details {
        Details::new()
            .description("Oakland Score assesses risk in acute lower GI bleeding for safe discharge.")
            .note(
                "Points: Age (<60:0, 60-64:1, 65-69:2, 70-74:3, 75-79:4, ≥80:5), Sex (Male:+1), Prev LGIB (+1), DRE Blood (+1), HR ≥100bpm (+1), SBP <100mmHg (+2), Hb_g/dL (<10.0:3, 10.0-11.9:2, 12.0-12.9:1, ≥13.0:0).",
            )
    }

    fn calculate(&self, inputs: &InputMap, units: &UnitMap) -> Outcome {
        let fields = [
            "ageOakland",
            "sexOakland",
            "prevLgibOakland",
            "dreBloodOakland",
            "hrOakland",
            "sbpOakland",
            "hbOakland",
        ];
        if !all_present(inputs, &fields) {
            return Outcome::Incomplete;
        }

        let age = num(inputs, "ageOakland");
        let hr = num(inputs, "hrOakland");
        let sbp = num(inputs, "sbpOakland");
        let hb_g_dl = convert_to_base("hbOakland", inputs, units, &HEMOGLOBIN);
        let (Some(age), Some(hr), Some(sbp), Some(hb_g_dl)) = (age, hr, sbp, hb_g_dl) else {
            return Outcome::invalid("Input or unit error.");
        };
        if age < 0.0 || hr < 0.0 || sbp < 0.0 || hb_g_dl < 0.0 {
            return Outcome::invalid("Input or unit error.");
        }

        let mut score = if age < 60.0 {
            0.0
        } else if age <= 64.0 {
            1.0
        } else if age <= 69.0 {
            2.0
        } else if age <= 74.0 {
            3.0
        } else if age <= 79.0 {
            4.0
        } else {
            5.0
        };

        score += num(inputs, "sexOakland").unwrap_or_default();
        score += num(inputs, "prevLgibOakland").unwrap_or_default();
        score += num(inputs, "dreBloodOakland").unwrap_or_default();
        if hr >= 100.0 {
            score += 1.0;
        }
        if sbp < 100.0 {
            score += 2.0;
        }

        if hb_g_dl < 10.0 {
            score += 3.0;
        } else if hb_g_dl < 12.0 {
            score += 2.0;
        } else if hb_g_dl < 13.0 {
            score += 1.0;
        }

        Outcome::number(score)
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let score = value.as_number()?;
        let reading = if score <= 8.0 {
            "Low risk of adverse outcome. Safe hospital discharge for outpatient management may be considered if clinically appropriate (Probability of safe discharge >95% if score ≤ 8)."
        } else {
            "Higher risk of adverse outcome. Inpatient management and further investigation typically indicated."
        };
        Some(format!("Oakland Score: {score}. {reading}"))
    }
}

/// BISAP score for acute pancreatitis mortality.
pub struct BisapScore;

impl Calculator for BisapScore {
    fn id(&self) -> &str {
        "bisapScore"
    }

    fn name(&self) -> &str {
        "BISAP Score for Pancreatitis Mortality"
    }

    fn keywords(&self) -> &[&str] {
        &["bisap", "pancreatitis", "acute pancreatitis", "severity", "mortality"]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::select(
                    "bun",
                    "BUN > 25 mg/dL (or Urea > 8.9 mmol/L)",
                    "0",
                    yes_no(),
                ),
                InputDescriptor::select(
                    "mentalStatus",
                    "Impaired Mental Status (e.g., GCS < 15)",
                    "0",
                    yes_no(),
                ),
                InputDescriptor::select("sirs", "SIRS criteria met (≥2)", "0", yes_no()),
                InputDescriptor::select("age", "Age > 60 years", "0", yes_no()),
                InputDescriptor::select("pleuralEffusion", "Pleural Effusion on imaging", "0", yes_no()),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "BISAP Score"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::single("points")
    }

    fn details(&self) -> Details {
        Details::new()
            .description(
                "The Bedside Index of Severity in Acute Pancreatitis (BISAP) score is a simple tool to predict mortality risk in patients with acute pancreatitis within the first 24 hours of admission.",
            )
            .note(
                "B: BUN > 25 mg/dL\nI: Impaired Mental Status\nS: SIRS (≥2 criteria)\nA: Age > 60 years\nP: Pleural Effusion on imaging\nEach criterion present scores 1 point.",
            )
            .note(
                "SIRS is defined by having 2 or more of the following: Temp <36°C or >38°C; Heart Rate >90 bpm; Respiratory Rate >20/min or PaCO2 <32 mmHg; WBC <4,000/mm³, >12,000/mm³, or >10% bands.",
            )
    }

    fn calculate(&self, inputs: &InputMap, _units: &UnitMap) -> Outcome {
        match sum_selects(inputs, &["bun", "mentalStatus", "sirs", "age", "pleuralEffusion"]) {
            Some(total) => Outcome::number(total),
            None => Outcome::Incomplete,
        }
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let score = value.as_number()?;
        let mortality = match score as i64 {
            0 => "<1%",
            1 => "1.9%",
            2 => "3.6%",
            3 => "6.4%",
            4 => "9.5%",
            _ => "22%",
        };
        Some(format!(
            "Score: {score}. This corresponds to an approximate in-hospital mortality risk of {mortality}. A score ≥3 is associated with increased risk of severe pancreatitis and death."
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_inputs;
    use crate::evaluate::evaluate;

    fn entries(pairs: &[(&str, &str)]) -> InputMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn montreal_crohns_appends_perianal_modifier() {
        let inputs = entries(&[
            ("ibdType", "crohns"),
            ("crohnsAge", "A2"),
            ("crohnsLocation", "L3"),
            ("crohnsBehavior", "B1"),
            ("crohnsPerianal", "p"),
        ]);
        assert_eq!(
            MontrealIbd
                .calculate(&inputs, &UnitMap::new())
                .value()
                .unwrap()
                .as_text(),
            Some("Crohn's: A2L3B1p")
        );
    }

    #[test]
    fn montreal_uc_ignores_crohns_fields() {
        let inputs = entries(&[("ibdType", "uc"), ("ucExtent", "E2")]);
        assert_eq!(
            MontrealIbd
                .calculate(&inputs, &UnitMap::new())
                .value()
                .unwrap()
                .as_text(),
            Some("UC: E2")
        );
        // The UC branch exposes only the type selector and the extent field.
        let active = MontrealIbd.active_inputs(&inputs);
        assert_eq!(active.len(), 2);
    }

    #[test]
    fn montreal_evaluates_with_defaults() {
        let inputs = default_inputs(&MontrealIbd);
        let evaluation = evaluate(&MontrealIbd, &inputs, &UnitMap::new());
        assert_eq!(
            evaluation.outcome.value().and_then(Value::as_text),
            Some("Crohn's: A1L1B1")
        );
    }

    #[test]
    fn prague_rejects_c_above_m() {
        let inputs = entries(&[("pragueC", "5"), ("pragueM", "2")]);
        let Outcome::Invalid { message } = PragueBarretts.calculate(&inputs, &UnitMap::new())
        else {
            panic!("expected feedback");
        };
        assert!(message.contains("C value"));
    }

    #[test]
    fn prague_formats_code() {
        let inputs = entries(&[("pragueC", "2"), ("pragueM", "5")]);
        assert_eq!(
            PragueBarretts
                .calculate(&inputs, &UnitMap::new())
                .value()
                .unwrap()
                .as_text(),
            Some("C2M5")
        );
    }

    #[test]
    fn oakland_low_risk_discharge() {
        let inputs = entries(&[
            ("ageOakland", "45"),
            ("sexOakland", "0"),
            ("prevLgibOakland", "0"),
            ("dreBloodOakland", "0"),
            ("hrOakland", "80"),
            ("sbpOakland", "120"),
            ("hbOakland", "14"),
        ]);
        let outcome = OaklandScore.calculate(&inputs, &UnitMap::new());
        assert_eq!(outcome.value().unwrap().as_number(), Some(0.0));
        let text = OaklandScore
            .interpret(outcome.value().unwrap(), &inputs, &UnitMap::new())
            .unwrap();
        assert!(text.contains("Low risk"));
    }

    #[test]
    fn oakland_age_and_hemoglobin_bands() {
        let inputs = entries(&[
            ("ageOakland", "82"),
            ("sexOakland", "1"),
            ("prevLgibOakland", "1"),
            ("dreBloodOakland", "1"),
            ("hrOakland", "110"),
            ("sbpOakland", "95"),
            ("hbOakland", "9.5"),
        ]);
        // 5 + 1 + 1 + 1 + 1 + 2 + 3
        assert_eq!(
            OaklandScore
                .calculate(&inputs, &UnitMap::new())
                .value()
                .unwrap()
                .as_number(),
            Some(14.0)
        );
    }

    #[test]
    fn bristol_type_four_is_normal() {
        let inputs = entries(&[("stoolType", "4")]);
        let outcome = BristolStool.calculate(&inputs, &UnitMap::new());
        let text = BristolStool
            .interpret(outcome.value().unwrap(), &inputs, &UnitMap::new())
            .unwrap();
        assert_eq!(text, "Type 4: Normal");
    }

    #[test]
    fn bisap_score_three_mortality() {
        let inputs = entries(&[
            ("bun", "1"),
            ("mentalStatus", "1"),
            ("sirs", "1"),
            ("age", "0"),
            ("pleuralEffusion", "0"),
        ]);
        let outcome = BisapScore.calculate(&inputs, &UnitMap::new());
        let text = BisapScore
            .interpret(outcome.value().unwrap(), &inputs, &UnitMap::new())
            .unwrap();
        assert!(text.contains("6.4%"));
    }
}
