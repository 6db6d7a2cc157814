//! Liver disease severity and prognosis calculators.

use std::sync::LazyLock;

use crate::Calculator;
use crate::input::{InputDescriptor, InputMap, UnitMap, all_present, num, opt, sum_selects, yes_no};
use crate::result::{Details, Outcome, ResultUnit, Value};
use crate::units::{
    ALBUMIN, BILIRUBIN, ENZYME_ACTIVITY, PLATELETS, SERUM_CREATININE, SODIUM_MEQ_L, consts,
    convert_to_base,
};

/// Child-Pugh score for cirrhosis severity.
pub struct ChildPugh;

impl Calculator for ChildPugh {
    fn id(&self) -> &str {
        "childPugh"
    }

    fn name(&self) -> &str {
        "Child-Pugh Score for Liver Cirrhosis Severity"
    }

    fn keywords(&self) -> &[&str] {
        &["child pugh", "liver cirrhosis", "hepatic function", "prognosis"]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::select(
                    "bilirubin",
                    "Total Bilirubin",
                    "1",
                    vec![
                        opt("1", "< 2 mg/dL (< 34 µmol/L)"),
                        opt("2", "2-3 mg/dL (34-51 µmol/L)"),
                        opt("3", "> 3 mg/dL (> 51 µmol/L)"),
                    ],
                ),
                InputDescriptor::select(
                    "albumin",
                    "Serum Albumin",
                    "1",
                    vec![
                        opt("1", "> 3.5 g/dL (> 35 g/L)"),
                        opt("2", "2.8-3.5 g/dL (28-35 g/L)"),
                        opt("3", "< 2.8 g/dL (< 28 g/L)"),
                    ],
                ),
                InputDescriptor::select(
                    "inr",
                    "INR",
                    "1",
                    vec![opt("1", "< 1.7"), opt("2", "1.7-2.3"), opt("3", "> 2.3")],
                ),
                InputDescriptor::select(
                    "ascites",
                    "Ascites",
                    "1",
                    vec![
                        opt("1", "None"),
                        opt("2", "Slight/Suppressed with Diuretics"),
                        opt("3", "Moderate/Resistant to Diuretics"),
                    ],
                ),
                InputDescriptor::select(
                    "encephalopathy",
                    "Hepatic Encephalopathy",
                    "1",
                    vec![
                        opt("1", "None (Grade 0)"),
                        opt("2", "Grade 1-2 (Mild/Moderate)"),
                        opt("3", "Grade 3-4 (Severe)"),
                    ],
                ),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "Child-Pugh Score"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::single("points")
    }

    fn details(&self) -> Details {
        Details::new().description(
            "The Child-Pugh score (also Child-Turcotte-Pugh score) is used to assess the prognosis of chronic liver disease, mainly cirrhosis. It assigns points based on levels of bilirubin, albumin, INR, and the presence/severity of ascites and hepatic encephalopathy.",
        )
    }

    fn calculate(&self, inputs: &InputMap, _units: &UnitMap) -> Outcome {
        let Some(total) = sum_selects(
            inputs,
            &["bilirubin", "albumin", "inr", "ascites", "encephalopathy"],
        ) else {
            return Outcome::Incomplete;
        };
        // The supplied options cannot sum below 5; suppress rather than
        // report if a caller ever feeds an out-of-range selection.
        if total < 5.0 {
            return Outcome::Incomplete;
        }
        Outcome::number(total)
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let score = value.as_number()?;
        Some(
            if score <= 6.0 {
                "Class A (5-6 points): Well-compensated disease. 1-year survival: 100%, 2-year survival: 85%."
            } else if score <= 9.0 {
                "Class B (7-9 points): Significant functional compromise. 1-year survival: 81%, 2-year survival: 57%."
            } else {
                "Class C (10-15 points): Decompensated disease. 1-year survival: 45%, 2-year survival: 35%."
            }
            .to_string(),
        )
    }
}

/// MELD-Na score for end-stage liver disease.
pub struct MeldNa;

impl Calculator for MeldNa {
    fn id(&self) -> &str {
        "meldNa"
    }

    fn name(&self) -> &str {
        "MELD-Na Score"
    }

    fn keywords(&self) -> &[&str] {
        &[
            "meld-na",
            "meld na",
            "liver transplant",
            "end stage liver disease",
            "prognosis",
        ]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::number("bilirubinMeld", "Bilirubin")
                    .with_min(0.0)
                    .with_units(&BILIRUBIN),
                InputDescriptor::number("creatinineMeld", "Creatinine")
                    .with_min(0.0)
                    .with_units(&SERUM_CREATININE),
                InputDescriptor::number("inrMeld", "INR").with_min(0.0),
                InputDescriptor::number("sodiumMeld", "Sodium")
                    .with_min(0.0)
                    .with_units(&SODIUM_MEQ_L),
                InputDescriptor::select(
                    "dialysis",
                    "Dialysis at least twice in past week?",
                    "0",
                    yes_no(),
                ),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "MELD-Na Score"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::single("points")
    }

    fn details(&self) -> Details {
        Details::new()
            .formula(
                "MELD_initial = (0.957*ln(Cr) + 0.378*ln(Bili) + 1.120*ln(INR) + 0.643)*10\nMELD-Na (if MELD_initial > 11) = MELD_initial + 1.32*(137-Na) - [0.033*MELD_initial*(137-Na)]",
            )
            .note(
                "Na bounded 125-137 mEq/L for adjustment. Cr capped at 4.0 mg/dL (or set to 4.0 if dialysis/Cr>4). Bili/INR floored at 1.0. Final score 6-40.",
            )
    }

    fn calculate(&self, inputs: &InputMap, units: &UnitMap) -> Outcome {
        if !all_present(
            inputs,
            &["bilirubinMeld", "creatinineMeld", "inrMeld", "sodiumMeld", "dialysis"],
        ) {
            return Outcome::Incomplete;
        }

        let bili = convert_to_base("bilirubinMeld", inputs, units, &BILIRUBIN);
        let creat = convert_to_base("creatinineMeld", inputs, units, &SERUM_CREATININE);
        let inr = num(inputs, "inrMeld");
        let na = convert_to_base("sodiumMeld", inputs, units, &SODIUM_MEQ_L);

        let (Some(bili), Some(creat), Some(inr), Some(na)) = (bili, creat, inr, na) else {
            return Outcome::invalid("Input or unit error.");
        };
        if bili < 0.0 || creat < 0.0 || inr < 0.0 || na < 0.0 {
            return Outcome::invalid("Values cannot be negative.");
        }

        // Stage order matters: floor first, then cap creatinine.
        let bili = bili.max(1.0);
        let inr = inr.max(1.0);
        let mut creat = creat.max(1.0);
        if num(inputs, "dialysis") == Some(1.0) || creat > 4.0 {
            creat = 4.0;
        }

        let mut meld =
            ((0.957 * creat.ln()) + (0.378 * bili.ln()) + (1.120 * inr.ln()) + 0.643) * 10.0;

        if meld > 11.0 {
            let na_bounded = na.clamp(125.0, 137.0);
            meld = meld + (1.32 * (137.0 - na_bounded)) - (0.033 * meld * (137.0 - na_bounded));
        }

        Outcome::number(meld.round().clamp(6.0, 40.0))
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let score = value.as_number()?;
        let mortality = if score >= 40.0 {
            "~71.3%"
        } else if score >= 30.0 {
            "~52.6%"
        } else if score >= 20.0 {
            "~19.6%"
        } else if score >= 10.0 {
            "~6.0%"
        } else {
            "~1.9%"
        };
        Some(format!(
            "Score: {score}. Approximate 3-month mortality: {mortality}."
        ))
    }
}

/// FIB-4 index for liver fibrosis.
pub struct Fib4;

impl Calculator for Fib4 {
    fn id(&self) -> &str {
        "fib4"
    }

    fn name(&self) -> &str {
        "FIB-4 Index for Liver Fibrosis"
    }

    fn keywords(&self) -> &[&str] {
        &["fib-4", "fib4", "liver fibrosis", "nafld", "fatty liver", "cirrhosis"]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::number("ageFib4", "Age").with_min(0.0).with_unit("years"),
                InputDescriptor::number("ast", "AST")
                    .with_min(0.0)
                    .with_units(&ENZYME_ACTIVITY),
                InputDescriptor::number("plateletsFib4", "Platelets")
                    .with_min(0.0)
                    .with_units(&PLATELETS),
                InputDescriptor::number("alt", "ALT")
                    .with_min(0.0)
                    .with_units(&ENZYME_ACTIVITY),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "FIB-4 Index"
    }

    fn details(&self) -> Details {
        Details::new()
            .formula("FIB-4 Index = (Age [years] * AST [U/L]) / (Platelets [10^9/L] * √ALT [U/L])")
            .description("Used to estimate liver fibrosis in chronic liver diseases.")
    }

    fn calculate(&self, inputs: &InputMap, units: &UnitMap) -> Outcome {
        for field in ["ageFib4", "ast", "plateletsFib4", "alt"] {
            match num(inputs, field) {
                Some(v) if v >= 0.0 => {}
                _ => return Outcome::Incomplete,
            }
        }

        let age = num(inputs, "ageFib4").unwrap_or_default();
        let ast = convert_to_base("ast", inputs, units, &ENZYME_ACTIVITY);
        let plt = convert_to_base("plateletsFib4", inputs, units, &PLATELETS);
        let alt = convert_to_base("alt", inputs, units, &ENZYME_ACTIVITY);

        let (Some(ast), Some(plt), Some(alt)) = (ast, plt, alt) else {
            return Outcome::invalid("Input or unit error; Platelets and ALT must be > 0.");
        };
        if plt <= 0.0 || alt <= 0.0 {
            return Outcome::invalid("Input or unit error; Platelets and ALT must be > 0.");
        }

        Outcome::number((age * ast) / (plt * alt.sqrt()))
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let score = value.as_number()?;
        let reading = if score < 1.30 {
            "Low risk for advanced fibrosis (NPV ~90% for F3-F4). Consider repeating in 1-2 years."
        } else if score > 2.67 {
            "High risk for advanced fibrosis (PPV ~80% for F3-F4). Refer to specialist."
        } else {
            "Indeterminate risk. Further evaluation (e.g., elastography, biopsy) may be needed."
        };
        Some(format!("FIB-4 Score: {score:.2}. {reading}"))
    }
}

/// Lille model for steroid response in alcoholic hepatitis.
pub struct LilleModel;

impl Calculator for LilleModel {
    fn id(&self) -> &str {
        "lille"
    }

    fn name(&self) -> &str {
        "Lille Model for Alcoholic Hepatitis"
    }

    fn keywords(&self) -> &[&str] {
        &["lille", "alcoholic hepatitis", "corticosteroids", "liver"]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::number("ageLille", "Age (years)")
                    .with_min(0.0)
                    .with_unit("years"),
                InputDescriptor::number("albuminDay0", "Albumin Day 0")
                    .with_min(0.0)
                    .with_units(&ALBUMIN),
                InputDescriptor::number("bilirubinDay0", "Bilirubin Day 0")
                    .with_min(0.0)
                    .with_units(&BILIRUBIN),
                InputDescriptor::number("bilirubinDay7", "Bilirubin Day 7")
                    .with_min(0.0)
                    .with_units(&BILIRUBIN),
                InputDescriptor::number("prothrombinTime", "Prothrombin Time (seconds)")
                    .with_min(0.0)
                    .with_unit("seconds"),
                InputDescriptor::number("creatinineLille", "Renal Insufficiency (Creatinine)")
                    .with_min(0.0)
                    .with_units(&SERUM_CREATININE),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "Lille Score"
    }

    fn details(&self) -> Details {
        Details::new()
            .formula(
                "R = 3.19 - (0.101*Age) + (0.147*Alb_d0_g/L) + (0.0165*(Bili_d0_µmol/L - Bili_d7_µmol/L)) - (0.206*RenalInsuff) - (0.0065*Bili_d0_µmol/L) - (0.0096*PT_sec)\nLille score = e^(-R) / (1 + e^(-R))",
            )
            .note(
                "Renal insufficiency: Cr > 1.3 mg/dL (~115 µmol/L) = 1 point. Predicts 6-month mortality in severe alcoholic hepatitis treated with corticosteroids.",
            )
    }

    fn calculate(&self, inputs: &InputMap, units: &UnitMap) -> Outcome {
        let fields = [
            "ageLille",
            "albuminDay0",
            "bilirubinDay0",
            "bilirubinDay7",
            "prothrombinTime",
            "creatinineLille",
        ];
        for field in fields {
            match num(inputs, field) {
                Some(v) if v >= 0.0 => {}
                _ => return Outcome::Incomplete,
            }
        }

        let age = num(inputs, "ageLille").unwrap_or_default();
        let pt = num(inputs, "prothrombinTime").unwrap_or_default();

        let albumin_g_dl = convert_to_base("albuminDay0", inputs, units, &ALBUMIN);
        let bili_day0_mg_dl = convert_to_base("bilirubinDay0", inputs, units, &BILIRUBIN);
        let bili_day7_mg_dl = convert_to_base("bilirubinDay7", inputs, units, &BILIRUBIN);
        let creat_mg_dl = convert_to_base("creatinineLille", inputs, units, &SERUM_CREATININE);

        let (Some(albumin_g_dl), Some(bili_day0_mg_dl), Some(bili_day7_mg_dl), Some(creat_mg_dl)) =
            (albumin_g_dl, bili_day0_mg_dl, bili_day7_mg_dl, creat_mg_dl)
        else {
            return Outcome::invalid("Input or unit error.");
        };

        let albumin_g_l = albumin_g_dl * 10.0;
        let bili_day0_umol_l = bili_day0_mg_dl / consts::UMOL_L_TO_MG_DL_BILIRUBIN;
        let bili_day7_umol_l = bili_day7_mg_dl / consts::UMOL_L_TO_MG_DL_BILIRUBIN;
        let creat_umol_l = creat_mg_dl / consts::UMOL_L_TO_MG_DL_CREATININE;

        // Cr > 1.3 mg/dL (~115 µmol/L) counts as renal insufficiency.
        let renal_insufficiency = if creat_umol_l > 115.0 { 1.0 } else { 0.0 };

        let r = 3.19 - (0.101 * age)
            + (0.147 * albumin_g_l)
            + (0.0165 * (bili_day0_umol_l - bili_day7_umol_l))
            - (0.206 * renal_insufficiency)
            - (0.0065 * bili_day0_umol_l)
            - (0.0096 * pt);

        Outcome::number((-r).exp() / (1.0 + (-r).exp()))
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let score = value.as_number()?;
        Some(if score > 0.45 {
            format!(
                "Score: {score:.3}. High risk of 6-month mortality (~75%). Corticosteroids considered ineffective. Consider stopping."
            )
        } else if score > 0.16 {
            format!("Score: {score:.3}. Intermediate response. 6-month mortality ~25-50%.")
        } else {
            format!(
                "Score: {score:.3}. Complete response. Low risk of 6-month mortality (~15%). Continue corticosteroids."
            )
        })
    }
}

/// Maddrey's discriminant function for alcoholic hepatitis.
pub struct MaddreyDf;

impl Calculator for MaddreyDf {
    fn id(&self) -> &str {
        "maddreyDF"
    }

    fn name(&self) -> &str {
        "Maddrey's Discriminant Function (Alcoholic Hepatitis)"
    }

    fn keywords(&self) -> &[&str] {
        &[
            "maddrey",
            "mdf",
            "discriminant function",
            "alcoholic hepatitis",
            "liver",
            "steroids",
        ]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::number("prothrombinTime", "Patient Prothrombin Time")
                    .with_min(0.0)
                    .with_unit("seconds"),
                InputDescriptor::number("controlProthrombinTime", "Control Prothrombin Time")
                    .with_min(0.0)
                    .with_unit("seconds"),
                InputDescriptor::number("bilirubinMaddrey", "Total Bilirubin")
                    .with_min(0.0)
                    .with_units(&BILIRUBIN),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "Discriminant Function Score"
    }

    fn details(&self) -> Details {
        Details::new()
            .formula("MDF = 4.6 * (Patient's PT - Control PT) + Total Bilirubin (mg/dL)")
            .description(
                "Maddrey's Discriminant Function (MDF) is used to assess the severity and prognosis of alcoholic hepatitis and to determine the potential utility of corticosteroid treatment.",
            )
    }

    fn calculate(&self, inputs: &InputMap, units: &UnitMap) -> Outcome {
        if !all_present(
            inputs,
            &["prothrombinTime", "controlProthrombinTime", "bilirubinMaddrey"],
        ) {
            return Outcome::Incomplete;
        }

        let pt = num(inputs, "prothrombinTime");
        let control_pt = num(inputs, "controlProthrombinTime");
        let bili = convert_to_base("bilirubinMaddrey", inputs, units, &BILIRUBIN);
        let (Some(pt), Some(control_pt), Some(bili)) = (pt, control_pt, bili) else {
            return Outcome::invalid("Invalid input.");
        };
        if pt < 0.0 || control_pt < 0.0 || bili < 0.0 {
            return Outcome::invalid("Invalid input.");
        }

        Outcome::number(4.6 * (pt - control_pt) + bili)
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let score = value.as_number()?;
        Some(if score > 32.0 {
            format!(
                "Score: {score:.1}. This indicates severe alcoholic hepatitis with a high short-term mortality risk. Corticosteroid therapy is often considered."
            )
        } else {
            format!(
                "Score: {score:.1}. This indicates a better prognosis. Corticosteroids are generally not indicated."
            )
        })
    }
}

/// PLED score for liver events in primary sclerosing cholangitis.
pub struct PledScore;

impl Calculator for PledScore {
    fn id(&self) -> &str {
        "pledScore"
    }

    fn name(&self) -> &str {
        "PLED Score for PSC"
    }

    fn keywords(&self) -> &[&str] {
        &[
            "pled score",
            "psc",
            "primary sclerosing cholangitis",
            "liver events",
            "prognosis",
        ]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::number("agePled", "Age").with_min(0.0).with_unit("years"),
                InputDescriptor::number("bilirubinPled", "Total Bilirubin")
                    .with_min(0.0)
                    .with_units(&BILIRUBIN),
                InputDescriptor::number("albuminPled", "Serum Albumin")
                    .with_min(0.0)
                    .with_units(&ALBUMIN),
                InputDescriptor::number("plateletsPled", "Platelets")
                    .with_min(0.0)
                    .with_units(&PLATELETS),
                InputDescriptor::select(
                    "varicealBleedPled",
                    "History of Variceal Bleeding",
                    "0",
                    yes_no(),
                ),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "PLED Score"
    }

    fn details(&self) -> Details {
        Details::new()
            .formula(
                "PLED Score = 0.03*Age + 0.71*ln(Bili_mg/dL) - 1.16*ln(Alb_g/dL) - 0.29*ln(Plt_x10⁹/L) + 0.87(if variceal bleed history)",
            )
            .note(
                "Predicts liver events in Primary Sclerosing Cholangitis. Ensure values for log are positive.",
            )
    }

    fn calculate(&self, inputs: &InputMap, units: &UnitMap) -> Outcome {
        if !all_present(
            inputs,
            &["agePled", "bilirubinPled", "albuminPled", "plateletsPled", "varicealBleedPled"],
        ) {
            return Outcome::Incomplete;
        }

        let age = num(inputs, "agePled");
        let bili = convert_to_base("bilirubinPled", inputs, units, &BILIRUBIN);
        let alb = convert_to_base("albuminPled", inputs, units, &ALBUMIN);
        let plt = convert_to_base("plateletsPled", inputs, units, &PLATELETS);

        let (Some(age), Some(bili), Some(alb), Some(plt)) = (age, bili, alb, plt) else {
            return Outcome::invalid(
                "Input or unit error. Ensure Age is non-negative and Bilirubin, Albumin, Platelets are positive.",
            );
        };
        // Logarithm arguments must be positive; fold the violation into
        // feedback rather than letting a NaN surface.
        if age < 0.0 || bili <= 0.0 || alb <= 0.0 || plt <= 0.0 {
            return Outcome::invalid(
                "Input or unit error. Ensure Age is non-negative and Bilirubin, Albumin, Platelets are positive.",
            );
        }

        let mut score =
            (0.03 * age) + (0.71 * bili.ln()) - (1.16 * alb.ln()) - (0.29 * plt.ln());
        if num(inputs, "varicealBleedPled") == Some(1.0) {
            score += 0.87;
        }
        Outcome::number(score)
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let score = value.as_number()?;
        let risk = if score < -1.5 {
            "Low risk"
        } else if score <= 0.5 {
            "Medium risk"
        } else {
            "High risk"
        };
        Some(format!(
            "PLED Score: {score:.2}. Risk Category: {risk}. This score estimates the risk of liver-related events (e.g., variceal hemorrhage, ascites, encephalopathy, liver transplantation, or liver-related death)."
        ))
    }
}

/// Simplified autoimmune hepatitis score.
pub struct AihScore;

impl Calculator for AihScore {
    fn id(&self) -> &str {
        "aihScore"
    }

    fn name(&self) -> &str {
        "Autoimmune Hepatitis Score (Simplified)"
    }

    fn keywords(&self) -> &[&str] {
        &["aih", "autoimmune hepatitis", "liver", "hepatology", "autoantibody"]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::select(
                    "titers",
                    "ANA, SMA, or LKM-1 Titers",
                    "0",
                    vec![opt("0", "< 1:40"), opt("1", "≥ 1:40"), opt("2", "≥ 1:80")],
                ),
                InputDescriptor::select(
                    "igg",
                    "IgG Level",
                    "0",
                    vec![
                        opt("0", "Normal"),
                        opt("1", "> Upper Limit of Normal"),
                        opt("2", "> 1.10 x Upper Limit of Normal"),
                    ],
                ),
                InputDescriptor::select(
                    "histology",
                    "Liver Histology",
                    "0",
                    vec![
                        opt("0", "Atypical / Normal"),
                        opt("1", "Compatible with AIH (e.g., interface hepatitis)"),
                        opt("2", "Typical of AIH (e.g., + plasma cells)"),
                    ],
                ),
                InputDescriptor::select(
                    "viral",
                    "Absence of Viral Hepatitis",
                    "0",
                    vec![
                        opt("0", "No (Viral markers present)"),
                        opt("2", "Yes (Viral markers absent)"),
                    ],
                ),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "Simplified AIH Score"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::single("points")
    }

    fn details(&self) -> Details {
        Details::new()
            .description(
                "The simplified scoring system for the diagnosis of autoimmune hepatitis (AIH), proposed by the International Autoimmune Hepatitis Group (IAIHG). This score helps in diagnosing AIH but should be interpreted in the full clinical context.",
            )
            .note(
                "Hennes et al. Hepatology. 2008 Nov;48(5):1696. Simplified criteria for the diagnosis of autoimmune hepatitis.",
            )
    }

    fn calculate(&self, inputs: &InputMap, _units: &UnitMap) -> Outcome {
        match sum_selects(inputs, &["titers", "igg", "histology", "viral"]) {
            Some(total) => Outcome::number(total),
            None => Outcome::Incomplete,
        }
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let score = value.as_number()?;
        Some(if score >= 7.0 {
            format!("Score: {score}. Definite Autoimmune Hepatitis.")
        } else if score >= 6.0 {
            format!("Score: {score}. Probable Autoimmune Hepatitis.")
        } else {
            format!("Score: {score}. AIH is unlikely based on this score.")
        })
    }
}

/// Serum-ascites albumin gradient.
pub struct Saag;

impl Calculator for Saag {
    fn id(&self) -> &str {
        "saag"
    }

    fn name(&self) -> &str {
        "Serum-Ascites Albumin Gradient (SAAG)"
    }

    fn keywords(&self) -> &[&str] {
        &[
            "saag",
            "ascites",
            "serum ascites albumin gradient",
            "portal hypertension",
            "liver",
        ]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::number("serumAlbumin", "Serum Albumin")
                    .with_min(0.0)
                    .with_units(&ALBUMIN),
                InputDescriptor::number("ascitesAlbumin", "Ascites Fluid Albumin")
                    .with_min(0.0)
                    .with_units(&ALBUMIN),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "SAAG"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::single("g/dL")
    }

    fn details(&self) -> Details {
        Details::new()
            .formula("SAAG = Serum Albumin - Ascites Fluid Albumin")
            .description(
                "The Serum-Ascites Albumin Gradient is used to determine the cause of ascites.",
            )
    }

    fn calculate(&self, inputs: &InputMap, units: &UnitMap) -> Outcome {
        if !all_present(inputs, &["serumAlbumin", "ascitesAlbumin"]) {
            return Outcome::Incomplete;
        }

        let serum = convert_to_base("serumAlbumin", inputs, units, &ALBUMIN);
        let ascites = convert_to_base("ascitesAlbumin", inputs, units, &ALBUMIN);
        let (Some(serum), Some(ascites)) = (serum, ascites) else {
            return Outcome::invalid("Invalid input or unit error.");
        };
        if serum < 0.0 || ascites < 0.0 {
            return Outcome::invalid("Invalid input or unit error.");
        }

        Outcome::number(serum - ascites)
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let saag = value.as_number()?;
        Some(
            if saag >= 1.1 {
                "High Gradient (≥1.1 g/dL). Suggests portal hypertension is the cause. Common etiologies: cirrhosis, alcoholic hepatitis, heart failure, massive liver metastases."
            } else {
                "Low Gradient (<1.1 g/dL). Suggests non-portal hypertensive cause. Common etiologies: peritoneal carcinomatosis, peritoneal tuberculosis, pancreatitis, nephrotic syndrome."
            }
            .to_string(),
        )
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

    #[test]
    fn child_pugh_defaults_are_class_a() {
        let inputs = default_inputs(&ChildPugh);
        let outcome = ChildPugh.calculate(&inputs, &UnitMap::new());
        let value = outcome.value().unwrap();
        assert_eq!(value.as_number(), Some(5.0));
        let text = ChildPugh.interpret(value, &inputs, &UnitMap::new()).unwrap();
        assert!(text.contains("Class A"));
    }

    #[test]
    fn child_pugh_class_boundaries() {
        let cases = [(("2", "2"), "Class B"), (("3", "3"), "Class C")];
        for ((bili, alb), expected) in cases {
            let inputs = entries(&[
                ("bilirubin", bili),
                ("albumin", alb),
                ("inr", "2"),
                ("ascites", "2"),
                ("encephalopathy", "1"),
            ]);
            let outcome = ChildPugh.calculate(&inputs, &UnitMap::new());
            let text = ChildPugh
                .interpret(outcome.value().unwrap(), &inputs, &UnitMap::new())
                .unwrap();
            assert!(text.contains(expected));
        }
    }

    #[test]
    fn meld_na_floor_case_scores_six() {
        // Bili = Cr = INR = 1 makes every log term zero: 6.43 rounds to 6 and
        // the sodium term stays inactive.
        let inputs = entries(&[
            ("bilirubinMeld", "1"),
            ("creatinineMeld", "1"),
            ("inrMeld", "1"),
            ("sodiumMeld", "140"),
            ("dialysis", "0"),
        ]);
        assert_eq!(
            MeldNa
                .calculate(&inputs, &UnitMap::new())
                .value()
                .unwrap()
                .as_number(),
            Some(6.0)
        );
    }

    #[test]
    fn meld_na_is_clamped_to_forty() {
        let inputs = entries(&[
            ("bilirubinMeld", "50"),
            ("creatinineMeld", "9"),
            ("inrMeld", "12"),
            ("sodiumMeld", "110"),
            ("dialysis", "1"),
        ]);
        assert_eq!(
            MeldNa
                .calculate(&inputs, &UnitMap::new())
                .value()
                .unwrap()
                .as_number(),
            Some(40.0)
        );
    }

    #[test]
    fn meld_na_dialysis_forces_creatinine_cap() {
        let base = entries(&[
            ("bilirubinMeld", "3"),
            ("creatinineMeld", "2"),
            ("inrMeld", "2"),
            ("sodiumMeld", "135"),
            ("dialysis", "0"),
        ]);
        let without = MeldNa
            .calculate(&base, &UnitMap::new())
            .value()
            .unwrap()
            .as_number()
            .unwrap();
        let mut on_dialysis = base.clone();
        on_dialysis.insert("dialysis".into(), "1".into());
        let with = MeldNa
            .calculate(&on_dialysis, &UnitMap::new())
            .value()
            .unwrap()
            .as_number()
            .unwrap();
        assert!(with > without);
    }

    #[test]
    fn fib4_example_value() {
        let inputs = entries(&[
            ("ageFib4", "60"),
            ("ast", "40"),
            ("plateletsFib4", "200"),
            ("alt", "36"),
        ]);
        let score = Fib4
            .calculate(&inputs, &UnitMap::new())
            .value()
            .unwrap()
            .as_number()
            .unwrap();
        // (60*40) / (200*6) = 2.0
        assert!((score - 2.0).abs() < 1e-9);
    }

    #[test]
    fn fib4_zero_alt_is_feedback() {
        let inputs = entries(&[
            ("ageFib4", "60"),
            ("ast", "40"),
            ("plateletsFib4", "200"),
            ("alt", "0"),
        ]);
        assert!(matches!(
            Fib4.calculate(&inputs, &UnitMap::new()),
            Outcome::Invalid { .. }
        ));
    }

    #[test]
    fn maddrey_severe_threshold() {
        let inputs = entries(&[
            ("prothrombinTime", "20"),
            ("controlProthrombinTime", "12"),
            ("bilirubinMaddrey", "5"),
        ]);
        let outcome = MaddreyDf.calculate(&inputs, &UnitMap::new());
        let value = outcome.value().unwrap();
        assert!((value.as_number().unwrap() - 41.8).abs() < 1e-9);
        let text = MaddreyDf.interpret(value, &inputs, &UnitMap::new()).unwrap();
        assert!(text.contains("severe alcoholic hepatitis"));
    }

    #[test]
    fn pled_rejects_zero_platelets() {
        let inputs = entries(&[
            ("agePled", "50"),
            ("bilirubinPled", "2"),
            ("albuminPled", "3"),
            ("plateletsPled", "0"),
            ("varicealBleedPled", "0"),
        ]);
        assert!(matches!(
            PledScore.calculate(&inputs, &UnitMap::new()),
            Outcome::Invalid { .. }
        ));
    }

    #[test]
    fn saag_portal_hypertension_boundary() {
        let inputs = entries(&[("serumAlbumin", "3.0"), ("ascitesAlbumin", "1.9")]);
        let outcome = Saag.calculate(&inputs, &UnitMap::new());
        let value = outcome.value().unwrap();
        assert!((value.as_number().unwrap() - 1.1).abs() < 1e-9);
        let text = Saag.interpret(value, &inputs, &UnitMap::new()).unwrap();
        assert!(text.contains("High Gradient"));
    }

    #[test]
    fn lille_complete_response_example() {
        let inputs = entries(&[
            ("ageLille", "45"),
            ("albuminDay0", "3.0"),
            ("bilirubinDay0", "10"),
            ("bilirubinDay7", "4"),
            ("prothrombinTime", "18"),
            ("creatinineLille", "0.9"),
        ]);
        let score = LilleModel
            .calculate(&inputs, &UnitMap::new())
            .value()
            .unwrap()
            .as_number()
            .unwrap();
        assert!((0.0..=1.0).contains(&score));
        // Falling bilirubin and preserved renal function: a responder.
        assert!(score < 0.45);
    }
}
