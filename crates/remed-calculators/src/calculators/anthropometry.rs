//! Body habitus, energy expenditure, and growth calculators.

use std::sync::LazyLock;

use crate::Calculator;
use crate::input::{InputDescriptor, InputMap, UnitMap, all_present, num, opt, raw};
use crate::result::{Details, Outcome, ResultUnit, Value};
use crate::units::{HEIGHT, WEIGHT, consts, convert_to_base};

fn sex_options() -> Vec<crate::input::SelectOption> {
    vec![opt("male", "Male"), opt("female", "Female")]
}

/// Devine ideal body weight, in kg, for a height already validated > 60 in.
fn devine_ibw(height_inches: f64, sex: &str) -> f64 {
    let base = if sex == "female" { 45.5 } else { 50.0 };
    (base + 2.3 * (height_inches - 60.0)).max(0.0)
}

/// Body Mass Index.
pub struct BodyMassIndex;

impl Calculator for BodyMassIndex {
    fn id(&self) -> &str {
        "bmi"
    }

    fn name(&self) -> &str {
        "Body Mass Index (BMI)"
    }

    fn keywords(&self) -> &[&str] {
        &["bmi", "body mass index", "obesity", "weight status"]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::number("weight", "Weight")
                    .with_min(0.0)
                    .with_step(0.1)
                    .with_units(&WEIGHT),
                InputDescriptor::number("height", "Height")
                    .with_min(0.0)
                    .with_step(0.1)
                    .with_units(&HEIGHT),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "BMI"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::single("kg/m²")
    }

    fn details(&self) -> Details {
        Details::new()
            .formula("BMI = weight (kg) / (height (m))^2")
            .description(
                "Body Mass Index is a measure of body fat based on an individual's weight and height.",
            )
    }

    fn calculate(&self, inputs: &InputMap, units: &UnitMap) -> Outcome {
        let (Some(weight), Some(height)) = (num(inputs, "weight"), num(inputs, "height")) else {
            return Outcome::Incomplete;
        };
        if weight <= 0.0 || height <= 0.0 {
            return Outcome::Incomplete;
        }

        let (Some(weight_kg), Some(height_cm)) = (
            convert_to_base("weight", inputs, units, &WEIGHT),
            convert_to_base("height", inputs, units, &HEIGHT),
        ) else {
            return Outcome::invalid("Input or unit error.");
        };

        let height_m = height_cm * consts::CM_TO_METER;
        Outcome::number(weight_kg / (height_m * height_m))
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let bmi = value.as_number()?;
        Some(
            if bmi < 18.5 {
                "Underweight (< 18.5 kg/m²)"
            } else if bmi < 25.0 {
                "Normal weight (18.5 - 24.9 kg/m²)"
            } else if bmi < 30.0 {
                "Overweight (25 - 29.9 kg/m²)"
            } else if bmi < 35.0 {
                "Obesity Class I (30 - 34.9 kg/m²)"
            } else if bmi < 40.0 {
                "Obesity Class II (35 - 39.9 kg/m²)"
            } else {
                "Obesity Class III (≥ 40 kg/m²)"
            }
            .to_string(),
        )
    }
}

/// Ideal Body Weight, Devine formula.
pub struct IdealBodyWeight;

impl Calculator for IdealBodyWeight {
    fn id(&self) -> &str {
        "ibw"
    }

    fn name(&self) -> &str {
        "Ideal Body Weight (IBW) - Devine"
    }

    fn keywords(&self) -> &[&str] {
        &["ibw", "ideal body weight", "devine", "weight"]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::number("height", "Height")
                    .with_min(0.0)
                    .with_step(0.1)
                    .with_units(&HEIGHT),
                InputDescriptor::select("gender", "Gender", "male", sex_options()),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "IBW"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::single("kg")
    }

    fn details(&self) -> Details {
        Details::new()
            .formula(
                "Male: 50kg + 2.3kg for each inch over 5 feet.\nFemale: 45.5kg + 2.3kg for each inch over 5 feet.",
            )
            .note(
                "Ideal Body Weight using the Devine formula. This formula is most accurate for heights above 5 feet (152.4 cm).",
            )
    }

    fn calculate(&self, inputs: &InputMap, units: &UnitMap) -> Outcome {
        let Some(height) = num(inputs, "height") else {
            return Outcome::Incomplete;
        };
        let Some(sex) = raw(inputs, "gender") else {
            return Outcome::Incomplete;
        };
        if height <= 0.0 {
            return Outcome::Incomplete;
        }

        let Some(height_cm) = convert_to_base("height", inputs, units, &HEIGHT) else {
            return Outcome::invalid("Input or unit error.");
        };

        let height_inches = height_cm / consts::INCH_TO_CM;
        if height_inches <= 60.0 {
            return Outcome::invalid("Height should be > 5 feet (152.4 cm) for Devine formula.");
        }

        Outcome::number(devine_ibw(height_inches, sex))
    }
}

/// Adjusted Body Weight for dosing in obesity.
pub struct AdjustedBodyWeight;

impl Calculator for AdjustedBodyWeight {
    fn id(&self) -> &str {
        "adjbw"
    }

    fn name(&self) -> &str {
        "Adjusted Body Weight (AdjBW)"
    }

    fn keywords(&self) -> &[&str] {
        &["adjbw", "adjusted body weight", "dosing weight", "obesity"]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::number("actualWeight", "Actual Weight")
                    .with_min(0.0)
                    .with_step(0.1)
                    .with_units(&WEIGHT),
                InputDescriptor::number("height", "Height")
                    .with_min(0.0)
                    .with_step(0.1)
                    .with_units(&HEIGHT),
                InputDescriptor::select("gender", "Gender", "male", sex_options()),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "AdjBW"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::single("kg")
    }

    fn details(&self) -> Details {
        Details::new()
            .formula("AdjBW = IBW + 0.4 * (Actual Weight - IBW)")
            .note(
                "If Actual Weight ≤ IBW, then AdjBW = Actual Weight. IBW is calculated using Devine formula.",
            )
    }

    fn calculate(&self, inputs: &InputMap, units: &UnitMap) -> Outcome {
        let (Some(actual), Some(height)) = (num(inputs, "actualWeight"), num(inputs, "height"))
        else {
            return Outcome::Incomplete;
        };
        let Some(sex) = raw(inputs, "gender") else {
            return Outcome::Incomplete;
        };
        if actual <= 0.0 || height <= 0.0 {
            return Outcome::Incomplete;
        }

        let (Some(actual_kg), Some(height_cm)) = (
            convert_to_base("actualWeight", inputs, units, &WEIGHT),
            convert_to_base("height", inputs, units, &HEIGHT),
        ) else {
            return Outcome::invalid("Input or unit error.");
        };

        let height_inches = height_cm / consts::INCH_TO_CM;
        if height_inches <= 60.0 {
            return Outcome::invalid(
                "Height should be > 5 feet for IBW calculation, which is needed for AdjBW.",
            );
        }

        let ibw = devine_ibw(height_inches, sex);
        if actual_kg > ibw {
            Outcome::number(ibw + 0.4 * (actual_kg - ibw))
        } else {
            Outcome::number(actual_kg)
        }
    }
}

/// Body Surface Area, Du Bois formula.
pub struct BodySurfaceArea;

impl Calculator for BodySurfaceArea {
    fn id(&self) -> &str {
        "bsaDuBois"
    }

    fn name(&self) -> &str {
        "Body Surface Area (BSA) - Du Bois"
    }

    fn keywords(&self) -> &[&str] {
        &["bsa", "body surface area", "du bois", "chemotherapy", "dosing"]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::number("weight", "Weight")
                    .with_min(0.0)
                    .with_units(&WEIGHT),
                InputDescriptor::number("height", "Height")
                    .with_min(0.0)
                    .with_units(&HEIGHT),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "Body Surface Area"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::single("m²")
    }

    fn details(&self) -> Details {
        Details::new()
            .formula("BSA (m²) = 0.007184 × Weight(kg)^0.425 × Height(cm)^0.725")
            .description(
                "Calculates the Body Surface Area (BSA) using the Du Bois formula. BSA is commonly used for chemotherapy dosing and other medication calculations.",
            )
    }

    fn calculate(&self, inputs: &InputMap, units: &UnitMap) -> Outcome {
        if !all_present(inputs, &["weight", "height"]) {
            return Outcome::Incomplete;
        }

        let (Some(weight_kg), Some(height_cm)) = (
            convert_to_base("weight", inputs, units, &WEIGHT),
            convert_to_base("height", inputs, units, &HEIGHT),
        ) else {
            return Outcome::invalid("Invalid input. Weight and Height must be positive.");
        };
        if weight_kg <= 0.0 || height_cm <= 0.0 {
            return Outcome::invalid("Invalid input. Weight and Height must be positive.");
        }

        Outcome::number(0.007184 * weight_kg.powf(0.425) * height_cm.powf(0.725))
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let bsa = value.as_number()?;
        Some(format!(
            "Calculated Body Surface Area is {bsa:.2} m². Average BSA for an adult is typically 1.7-1.9 m²."
        ))
    }
}

/// Basal metabolic rate and total daily energy expenditure, Mifflin-St Jeor.
pub struct BmrTdee;

impl Calculator for BmrTdee {
    fn id(&self) -> &str {
        "bmrTdee"
    }

    fn name(&self) -> &str {
        "BMR & TDEE (Mifflin-St Jeor)"
    }

    fn keywords(&self) -> &[&str] {
        &[
            "bmr",
            "tdee",
            "calories",
            "energy expenditure",
            "mifflin",
            "diet",
            "nutrition",
        ]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::number("age", "Age")
                    .with_min(0.0)
                    .with_step(1.0)
                    .with_unit("years"),
                InputDescriptor::select("gender", "Gender", "male", sex_options()),
                InputDescriptor::number("height", "Height")
                    .with_min(0.0)
                    .with_step(0.1)
                    .with_units(&HEIGHT),
                InputDescriptor::number("weight", "Weight")
                    .with_min(0.0)
                    .with_step(0.1)
                    .with_units(&WEIGHT),
                InputDescriptor::select(
                    "activityLevel",
                    "Activity Level",
                    "1.2",
                    vec![
                        opt("1.2", "Sedentary (little or no exercise)"),
                        opt("1.375", "Lightly active (light exercise/sports 1-3 days/week)"),
                        opt("1.55", "Moderately active (moderate exercise/sports 3-5 days/week)"),
                        opt("1.725", "Very active (hard exercise/sports 6-7 days a week)"),
                        opt(
                            "1.9",
                            "Super active (very hard exercise/sports & physical job or 2x training)",
                        ),
                    ],
                ),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "Caloric Needs"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::multi(&[("bmr", "kcal/day"), ("tdee", "kcal/day")])
    }

    fn details(&self) -> Details {
        Details::new()
            .formula(
                "Mifflin-St Jeor Equation:\nMen: BMR = (10 * W) + (6.25 * H) - (5 * A) + 5\nWomen: BMR = (10 * W) + (6.25 * H) - (5 * A) - 161\n(W=weight in kg, H=height in cm, A=age in years)\nTDEE = BMR * Activity Factor",
            )
            .description(
                "Basal Metabolic Rate (BMR) is the number of calories your body needs to accomplish its most basic (basal) life-sustaining functions. Total Daily Energy Expenditure (TDEE) is an estimation of how many calories you burn per day when exercise is taken into account.",
            )
            .note("Sedentary: BMR x 1.2")
            .note("Lightly active: BMR x 1.375")
            .note("Moderately active: BMR x 1.55")
            .note("Very active: BMR x 1.725")
            .note("Super active: BMR x 1.9")
    }

    fn calculate(&self, inputs: &InputMap, units: &UnitMap) -> Outcome {
        if !all_present(inputs, &["age", "gender", "height", "weight", "activityLevel"]) {
            return Outcome::Incomplete;
        }

        let age = num(inputs, "age");
        let weight_kg = convert_to_base("weight", inputs, units, &WEIGHT);
        let height_cm = convert_to_base("height", inputs, units, &HEIGHT);
        let activity_factor = num(inputs, "activityLevel");

        let (Some(age), Some(weight_kg), Some(height_cm), Some(activity_factor)) =
            (age, weight_kg, height_cm, activity_factor)
        else {
            return Outcome::invalid(
                "Invalid inputs. Ensure all values are positive and correctly entered.",
            );
        };
        if age <= 0.0 || weight_kg <= 0.0 || height_cm <= 0.0 {
            return Outcome::invalid(
                "Invalid inputs. Ensure all values are positive and correctly entered.",
            );
        }

        let bmr = if raw(inputs, "gender") == Some("male") {
            (10.0 * weight_kg) + (6.25 * height_cm) - (5.0 * age) + 5.0
        } else {
            (10.0 * weight_kg) + (6.25 * height_cm) - (5.0 * age) - 161.0
        }
        .max(0.0);
        let tdee = bmr * activity_factor;

        Outcome::multi(&[("bmr", bmr), ("tdee", tdee)])
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let tdee = value.get("tdee")?;
        Some(format!(
            "Your estimated TDEE is {tdee:.0} kcal/day. For weight maintenance, aim for this amount. For weight loss (approx. 0.25-0.5 kg/week or 0.5-1 lb/week), consider a deficit of 250-500 kcal/day from TDEE. For weight gain, consider a surplus of 250-500 kcal/day. These are general estimates. Consult a healthcare professional or registered dietitian for personalized advice."
        ))
    }
}

/// Macronutrient gram targets from a calorie budget and a ratio profile.
pub struct MacronutrientRatio;

const CUSTOM_PCT_FIELDS: [&str; 3] = ["customCarbPct", "customProteinPct", "customFatPct"];

impl Calculator for MacronutrientRatio {
    fn id(&self) -> &str {
        "macroRatio"
    }

    fn name(&self) -> &str {
        "Macronutrient Ratio Calculator"
    }

    fn keywords(&self) -> &[&str] {
        &[
            "macros",
            "macronutrients",
            "protein",
            "carbs",
            "fats",
            "diet",
            "nutrition",
        ]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::number("totalCalories", "Total Daily Calories")
                    .with_min(0.0)
                    .with_unit("kcal"),
                InputDescriptor::select(
                    "ratioProfile",
                    "Desired Ratio Profile (C/P/F)",
                    "balanced",
                    vec![
                        opt("balanced", "Balanced (40/30/30)"),
                        opt("lowcarb", "Lower Carb (30/40/30)"),
                        opt("highprotein", "Higher Protein (30/40/30)"),
                        opt("keto", "Ketogenic-Like (5/25/70)"),
                        opt("custom", "Custom Input Below"),
                    ],
                ),
                InputDescriptor::number("customCarbPct", "Custom Carb %")
                    .with_min(0.0)
                    .with_max(100.0)
                    .with_unit("%"),
                InputDescriptor::number("customProteinPct", "Custom Protein %")
                    .with_min(0.0)
                    .with_max(100.0)
                    .with_unit("%"),
                InputDescriptor::number("customFatPct", "Custom Fat %")
                    .with_min(0.0)
                    .with_max(100.0)
                    .with_unit("%"),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "Macronutrient Targets"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::multi(&[
            ("carbohydrates", "g/day"),
            ("protein", "g/day"),
            ("fat", "g/day"),
        ])
    }

    fn details(&self) -> Details {
        Details::new()
            .formula("Carbohydrates: 4 kcal/gram\nProtein: 4 kcal/gram\nFat: 9 kcal/gram")
            .description(
                "Calculates target grams for carbohydrates, protein, and fat based on total daily calorie intake and desired distribution. These are general targets. Adjust based on individual needs, goals, dietary preferences, and consult a professional.",
            )
            .note(
                "If 'Custom Input' is selected, ensure the sum of carbohydrate, protein, and fat percentages equals 100.",
            )
    }

    fn active_inputs(&self, inputs: &InputMap) -> Vec<&InputDescriptor> {
        let custom = raw(inputs, "ratioProfile") == Some("custom");
        self.inputs()
            .iter()
            .filter(|input| custom || !CUSTOM_PCT_FIELDS.contains(&input.id.as_str()))
            .collect()
    }

    fn calculate(&self, inputs: &InputMap, _units: &UnitMap) -> Outcome {
        let calories = match num(inputs, "totalCalories") {
            Some(c) if c > 0.0 => c,
            _ => return Outcome::invalid("Please enter valid total daily calories > 0."),
        };

        let (carb_pct, protein_pct, fat_pct) = if raw(inputs, "ratioProfile") == Some("custom") {
            let c = num(inputs, "customCarbPct");
            let p = num(inputs, "customProteinPct");
            let f = num(inputs, "customFatPct");
            let (Some(c), Some(p), Some(f)) = (c, p, f) else {
                return Outcome::invalid(
                    "Please fill all custom percentage fields with non-negative values.",
                );
            };
            if c < 0.0 || p < 0.0 || f < 0.0 {
                return Outcome::invalid(
                    "Please fill all custom percentage fields with non-negative values.",
                );
            }
            if (c + p + f).round() != 100.0 {
                return Outcome::invalid("Custom percentages must sum to 100.");
            }
            (c / 100.0, p / 100.0, f / 100.0)
        } else {
            match raw(inputs, "ratioProfile") {
                Some("lowcarb") | Some("highprotein") => (0.30, 0.40, 0.30),
                Some("keto") => (0.05, 0.25, 0.70),
                _ => (0.40, 0.30, 0.30),
            }
        };

        Outcome::multi(&[
            ("carbohydrates", (calories * carb_pct) / 4.0),
            ("protein", (calories * protein_pct) / 4.0),
            ("fat", (calories * fat_pct) / 9.0),
        ])
    }

    fn interpret(&self, value: &Value, inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let carbs = value.get("carbohydrates")?;
        let protein = value.get("protein")?;
        let fat = value.get("fat")?;
        let calories = raw(inputs, "totalCalories").unwrap_or("your target");
        Some(format!(
            "For a daily intake of {calories} kcal, your macronutrient targets are approximately: Carbohydrates {carbs:.0}g, Protein {protein:.0}g, Fat {fat:.0}g. Individual needs may vary."
        ))
    }
}

/// Mid-parental (Tanner) target height prediction.
pub struct TargetHeight;

impl Calculator for TargetHeight {
    fn id(&self) -> &str {
        "targetHeight"
    }

    fn name(&self) -> &str {
        "Target Height Prediction (Mid-Parental)"
    }

    fn keywords(&self) -> &[&str] {
        &[
            "target height",
            "mid-parental height",
            "pediatrics",
            "growth",
            "height prediction",
            "tanner",
        ]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::select(
                    "childGender",
                    "Child's Sex",
                    "boy",
                    vec![opt("boy", "Boy"), opt("girl", "Girl")],
                ),
                InputDescriptor::number("fatherHeight", "Father's Height")
                    .with_min(0.0)
                    .with_units(&HEIGHT),
                InputDescriptor::number("motherHeight", "Mother's Height")
                    .with_min(0.0)
                    .with_units(&HEIGHT),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "Predicted Target Height"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::multi(&[("cm", "cm"), ("inches", "inches")])
    }

    fn details(&self) -> Details {
        Details::new()
            .formula(
                "Boy: ((Mother's Height + 13cm) + Father's Height) / 2\nGirl: (Mother's Height + (Father's Height - 13cm)) / 2",
            )
            .description(
                "The Tanner method estimates a child's potential adult height based on the heights of their parents (mid-parental height).",
            )
            .note(
                "This is an estimation. Most children will reach an adult height within 8.5 cm (about 3.3 inches) of this target height. Genetic potential, nutrition, and overall health all influence final adult height.",
            )
    }

    fn calculate(&self, inputs: &InputMap, units: &UnitMap) -> Outcome {
        if !all_present(inputs, &["childGender", "fatherHeight", "motherHeight"]) {
            return Outcome::Incomplete;
        }

        let (Some(father_cm), Some(mother_cm)) = (
            convert_to_base("fatherHeight", inputs, units, &HEIGHT),
            convert_to_base("motherHeight", inputs, units, &HEIGHT),
        ) else {
            return Outcome::invalid("Invalid height inputs.");
        };
        if father_cm <= 0.0 || mother_cm <= 0.0 {
            return Outcome::invalid("Invalid height inputs.");
        }

        let target_cm = if raw(inputs, "childGender") == Some("boy") {
            (father_cm + (mother_cm + 13.0)) / 2.0
        } else {
            ((father_cm - 13.0) + mother_cm) / 2.0
        };

        Outcome::multi(&[("cm", target_cm), ("inches", target_cm / consts::INCH_TO_CM)])
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let cm = value.get("cm")?;
        let total_inches = value.get("inches")?;
        let feet = (total_inches / 12.0).floor() as i64;
        let inches = (total_inches % 12.0).round() as i64;
        Some(format!(
            "Predicted adult height is {cm:.1} cm (approximately {feet}'{inches}\")."
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputMap;

    fn entries(pairs: &[(&str, &str)]) -> InputMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn bmi_normal_weight_boundary() {
        let inputs = entries(&[("weight", "68.5"), ("height", "175")]);
        let outcome = BodyMassIndex.calculate(&inputs, &UnitMap::new());
        let Outcome::Value { value } = &outcome else {
            panic!("expected a value, got {outcome:?}");
        };
        let bmi = value.as_number().unwrap();
        assert!((bmi - 22.37).abs() < 0.01);
        let text = BodyMassIndex
            .interpret(value, &inputs, &UnitMap::new())
            .unwrap();
        assert!(text.contains("Normal weight"));
    }

    #[test]
    fn bmi_is_deterministic() {
        let inputs = entries(&[("weight", "70"), ("height", "175")]);
        let a = BodyMassIndex.calculate(&inputs, &UnitMap::new());
        let b = BodyMassIndex.calculate(&inputs, &UnitMap::new());
        assert_eq!(a, b);
        assert!((a.value().unwrap().as_number().unwrap() - 22.857142857142858).abs() < 1e-12);
    }

    #[test]
    fn bmi_missing_height_suppresses_result() {
        let inputs = entries(&[("weight", "70")]);
        assert_eq!(
            BodyMassIndex.calculate(&inputs, &UnitMap::new()),
            Outcome::Incomplete
        );
    }

    #[test]
    fn bmi_converts_pounds_and_inches() {
        let inputs = entries(&[("weight", "154.324"), ("height", "68.898")]);
        let units: UnitMap = [
            ("weight".to_string(), "lbs".to_string()),
            ("height".to_string(), "in".to_string()),
        ]
        .into();
        let bmi = BodyMassIndex
            .calculate(&inputs, &units)
            .value()
            .unwrap()
            .as_number()
            .unwrap();
        // 70 kg / 1.75 m²
        assert!((bmi - 22.857).abs() < 0.01);
    }

    #[test]
    fn ibw_rejects_short_stature() {
        let inputs = entries(&[("height", "150"), ("gender", "male")]);
        let outcome = IdealBodyWeight.calculate(&inputs, &UnitMap::new());
        assert!(matches!(outcome, Outcome::Invalid { .. }));
    }

    #[test]
    fn adjbw_returns_actual_weight_when_below_ibw() {
        let inputs = entries(&[("actualWeight", "60"), ("height", "180"), ("gender", "male")]);
        let adjbw = AdjustedBodyWeight
            .calculate(&inputs, &UnitMap::new())
            .value()
            .unwrap()
            .as_number()
            .unwrap();
        assert_eq!(adjbw, 60.0);
    }

    #[test]
    fn bmr_tdee_male_example() {
        let inputs = entries(&[
            ("age", "30"),
            ("gender", "male"),
            ("height", "175"),
            ("weight", "70"),
            ("activityLevel", "1.2"),
        ]);
        let outcome = BmrTdee.calculate(&inputs, &UnitMap::new());
        let value = outcome.value().unwrap();
        // (10*70) + (6.25*175) - (5*30) + 5 = 1648.75
        assert!((value.get("bmr").unwrap() - 1648.75).abs() < 1e-9);
        assert!((value.get("tdee").unwrap() - 1978.5).abs() < 1e-9);
    }

    #[test]
    fn macro_ratio_custom_must_sum_to_100() {
        let inputs = entries(&[
            ("totalCalories", "2000"),
            ("ratioProfile", "custom"),
            ("customCarbPct", "40"),
            ("customProteinPct", "30"),
            ("customFatPct", "20"),
        ]);
        let outcome = MacronutrientRatio.calculate(&inputs, &UnitMap::new());
        let Outcome::Invalid { message } = outcome else {
            panic!("expected feedback");
        };
        assert!(message.contains("sum to 100"));
    }

    #[test]
    fn macro_ratio_balanced_profile() {
        let inputs = entries(&[("totalCalories", "2000"), ("ratioProfile", "balanced")]);
        let value = MacronutrientRatio
            .calculate(&inputs, &UnitMap::new())
            .value()
            .cloned()
            .unwrap();
        assert_eq!(value.get("carbohydrates"), Some(200.0));
        assert_eq!(value.get("protein"), Some(150.0));
        assert!((value.get("fat").unwrap() - 66.666).abs() < 0.001);
    }

    #[test]
    fn macro_ratio_hides_custom_fields_for_presets() {
        let inputs = entries(&[("totalCalories", "2000"), ("ratioProfile", "balanced")]);
        let active = MacronutrientRatio.active_inputs(&inputs);
        assert_eq!(active.len(), 2);
        let inputs = entries(&[("totalCalories", "2000"), ("ratioProfile", "custom")]);
        assert_eq!(MacronutrientRatio.active_inputs(&inputs).len(), 5);
    }

    #[test]
    fn target_height_boy() {
        let inputs = entries(&[
            ("childGender", "boy"),
            ("fatherHeight", "180"),
            ("motherHeight", "165"),
        ]);
        let value = TargetHeight
            .calculate(&inputs, &UnitMap::new())
            .value()
            .cloned()
            .unwrap();
        assert_eq!(value.get("cm"), Some(179.0));
    }
}
