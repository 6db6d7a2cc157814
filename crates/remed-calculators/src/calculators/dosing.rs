//! Dosing and emergency calculators.

use std::sync::LazyLock;

use crate::Calculator;
use crate::input::{InputDescriptor, InputMap, UnitMap, all_present, num, opt, raw};
use crate::result::{Details, Outcome, ResultUnit, Value};
use crate::units::{WEIGHT, convert_to_base};

/// Total daily oral morphine milligram equivalents.
pub struct MorphineMilligramEquivalents;

const OPIOID_FACTORS: [(&str, f64); 6] = [
    ("morphine", 1.0),
    ("oxycodone", 1.5),
    ("hydrocodone", 1.0),
    ("hydromorphone", 4.0),
    ("codeine", 0.15),
    ("tramadol", 0.1),
];

impl Calculator for MorphineMilligramEquivalents {
    fn id(&self) -> &str {
        "mme"
    }

    fn name(&self) -> &str {
        "Oral Morphine Milligram Equivalents (MME) Calculator"
    }

    fn keywords(&self) -> &[&str] {
        &["mme", "morphine equivalents", "opioid", "pain management", "conversion"]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::select(
                    "opioidType",
                    "Opioid (Oral)",
                    "morphine",
                    vec![
                        opt("morphine", "Morphine"),
                        opt("oxycodone", "Oxycodone"),
                        opt("hydrocodone", "Hydrocodone"),
                        opt("hydromorphone", "Hydromorphone (Oral)"),
                        opt("codeine", "Codeine"),
                        opt("tramadol", "Tramadol"),
                    ],
                ),
                InputDescriptor::number("dosePerAdmin", "Dose per Administration")
                    .with_min(0.0)
                    .with_unit("mg"),
                InputDescriptor::number("frequencyPerDay", "Administrations per Day")
                    .with_min(0.0)
                    .with_unit("times/day"),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "Total Daily MME"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::single("MME/day")
    }

    fn details(&self) -> Details {
        Details::new()
            .description(
                "Calculates total daily Morphine Milligram Equivalents (MME) for common ORAL opioids. This tool is for estimation and general guidance. Clinical judgment is paramount.",
            )
            .note(
                "Conversion factors used: Morphine: 1, Oxycodone: 1.5, Hydrocodone: 1, Hydromorphone (Oral): 4, Codeine: 0.15, Tramadol: 0.1.",
            )
            .note(
                "Conversion factors are based on typical equianalgesic tables; individual responses vary. Does not cover IV, transdermal, or other routes directly.",
            )
    }

    fn calculate(&self, inputs: &InputMap, _units: &UnitMap) -> Outcome {
        let Some(opioid) = raw(inputs, "opioidType") else {
            return Outcome::Incomplete;
        };
        let (Some(dose), Some(frequency)) =
            (num(inputs, "dosePerAdmin"), num(inputs, "frequencyPerDay"))
        else {
            return Outcome::Incomplete;
        };
        if dose < 0.0 || frequency < 0.0 {
            return Outcome::Incomplete;
        }

        let Some((_, factor)) = OPIOID_FACTORS.iter().find(|(name, _)| *name == opioid) else {
            return Outcome::invalid("Unknown opioid type for conversion.");
        };

        Outcome::number(dose * frequency * factor)
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let mme = value.as_number()?;
        Some(if mme >= 90.0 {
            format!(
                "Total: {mme:.1} MME/day. High risk. Exercise extreme caution, consider specialist consultation, naloxone. Avoid concurrent benzodiazepines."
            )
        } else if mme >= 50.0 {
            format!(
                "Total: {mme:.1} MME/day. Increased risk of overdose. Use caution, reassess pain and function, consider non-opioid therapies. Avoid dose escalation above this level without careful reassessment."
            )
        } else if mme >= 20.0 {
            format!("Total: {mme:.1} MME/day. Use caution when increasing dosage.")
        } else {
            format!(
                "Total: {mme:.1} MME/day. Lower risk, but still monitor for adverse effects and therapeutic benefit."
            )
        })
    }
}

/// Parkland formula for burn fluid resuscitation.
pub struct ParklandFormula;

impl Calculator for ParklandFormula {
    fn id(&self) -> &str {
        "parklandFormula"
    }

    fn name(&self) -> &str {
        "Parkland Formula for Burn Resuscitation"
    }

    fn keywords(&self) -> &[&str] {
        &["parkland", "burns", "fluid resuscitation", "emergency", "trauma"]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::number("weight", "Patient Weight")
                    .with_min(0.0)
                    .with_units(&WEIGHT),
                InputDescriptor::number("tbsa", "Total Body Surface Area (TBSA) of Burn")
                    .with_min(0.0)
                    .with_max(100.0)
                    .with_unit("%"),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "Fluid Resuscitation Plan (Lactated Ringers)"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::multi(&[
            ("totalFluid24h", "mL"),
            ("first8hTotal", "mL"),
            ("first8hRate", "mL/hr"),
            ("next16hTotal", "mL"),
            ("next16hRate", "mL/hr"),
        ])
    }

    fn details(&self) -> Details {
        Details::new()
            .formula("Total Fluid (24h) = 4 mL × Weight(kg) × TBSA(%)")
            .description(
                "The Parkland formula is used to estimate the amount of intravenous fluid (typically Lactated Ringers) required for the resuscitation of a burn patient over the first 24 hours.",
            )
            .note(
                "1. Give the first half of the total fluid over the first 8 hours from the time of the burn.\n2. Give the second half of the total fluid over the next 16 hours.",
            )
    }

    fn calculate(&self, inputs: &InputMap, units: &UnitMap) -> Outcome {
        if !all_present(inputs, &["weight", "tbsa"]) {
            return Outcome::Incomplete;
        }

        let weight_kg = convert_to_base("weight", inputs, units, &WEIGHT);
        let tbsa = num(inputs, "tbsa");
        let (Some(weight_kg), Some(tbsa)) = (weight_kg, tbsa) else {
            return Outcome::invalid(
                "Invalid input. Weight must be positive and TBSA must be non-negative.",
            );
        };
        if weight_kg <= 0.0 || tbsa < 0.0 {
            return Outcome::invalid(
                "Invalid input. Weight must be positive and TBSA must be non-negative.",
            );
        }
        if tbsa > 100.0 {
            return Outcome::invalid("TBSA cannot be greater than 100%.");
        }

        let total = 4.0 * weight_kg * tbsa;
        let half = total / 2.0;
        Outcome::multi(&[
            ("totalFluid24h", total),
            ("first8hTotal", half),
            ("first8hRate", half / 8.0),
            ("next16hTotal", half),
            ("next16hRate", half / 16.0),
        ])
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let total = value.get("totalFluid24h")?;
        let first_total = value.get("first8hTotal")?;
        let first_rate = value.get("first8hRate")?;
        let next_total = value.get("next16hTotal")?;
        let next_rate = value.get("next16hRate")?;
        Some(format!(
            "Total fluid in first 24h: {total:.0} mL.\nFirst 8 hours: Infuse {first_total:.0} mL at a rate of {first_rate:.0} mL/hr.\nNext 16 hours: Infuse {next_total:.0} mL at a rate of {next_rate:.0} mL/hr.\nThis is a guideline; resuscitation must be titrated to clinical endpoints (e.g., urine output)."
        ))
    }
}

/// Cole formula for pediatric endotracheal tube size.
pub struct EttSizePediatric;

impl Calculator for EttSizePediatric {
    fn id(&self) -> &str {
        "ettSizePediatric"
    }

    fn name(&self) -> &str {
        "Endotracheal Tube (ETT) Size for Children"
    }

    fn keywords(&self) -> &[&str] {
        &[
            "ett",
            "endotracheal tube",
            "intubation",
            "pediatrics",
            "anesthesia",
            "emergency",
            "cole formula",
        ]
    }

    fn inputs(&self) -> &[InputDescriptor] {
        static INPUTS: LazyLock<Vec<InputDescriptor>> = LazyLock::new(|| {
            vec![
                InputDescriptor::number("age", "Age (1-8 years)")
                    .with_min(1.0)
                    .with_max(8.0)
                    .with_unit("years"),
            ]
        });
        &INPUTS
    }

    fn result_label(&self) -> &str {
        "Estimated ETT Size"
    }

    fn result_unit(&self) -> ResultUnit {
        ResultUnit::multi(&[("uncuffed", "mm ID"), ("cuffed", "mm ID")])
    }

    fn details(&self) -> Details {
        Details::new()
            .formula(
                "Uncuffed Tube Size (mm) = (Age in years / 4) + 4\nCuffed Tube Size (mm) = (Age in years / 4) + 3.5",
            )
            .description(
                "This calculator uses the Cole formula to estimate the appropriate endotracheal tube (ETT) size for children between 1 and 8 years old.",
            )
            .note(
                "This is only an estimate. Clinical judgment is essential. Always have ETT sizes 0.5mm smaller and 0.5mm larger than the calculated size readily available.",
            )
    }

    fn calculate(&self, inputs: &InputMap, _units: &UnitMap) -> Outcome {
        let Some(age) = num(inputs, "age") else {
            return Outcome::Incomplete;
        };
        if !(1.0..=8.0).contains(&age) {
            return Outcome::invalid("Age must be between 1 and 8 years for this formula.");
        }

        Outcome::multi(&[("uncuffed", (age / 4.0) + 4.0), ("cuffed", (age / 4.0) + 3.5)])
    }

    fn interpret(&self, value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        let uncuffed = value.get("uncuffed")?;
        let cuffed = value.get("cuffed")?;
        Some(format!(
            "Estimated uncuffed ETT size is {uncuffed:.2} mm. Estimated cuffed ETT size is {cuffed:.2} mm."
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
    fn mme_oxycodone_factor() {
        let inputs = entries(&[
            ("opioidType", "oxycodone"),
            ("dosePerAdmin", "10"),
            ("frequencyPerDay", "4"),
        ]);
        let outcome = MorphineMilligramEquivalents.calculate(&inputs, &UnitMap::new());
        assert_eq!(outcome.value().unwrap().as_number(), Some(60.0));
        let text = MorphineMilligramEquivalents
            .interpret(outcome.value().unwrap(), &inputs, &UnitMap::new())
            .unwrap();
        assert!(text.contains("Increased risk of overdose"));
    }

    #[test]
    fn mme_unknown_opioid_is_feedback() {
        let inputs = entries(&[
            ("opioidType", "fentanyl"),
            ("dosePerAdmin", "10"),
            ("frequencyPerDay", "4"),
        ]);
        assert!(matches!(
            MorphineMilligramEquivalents.calculate(&inputs, &UnitMap::new()),
            Outcome::Invalid { .. }
        ));
    }

    #[test]
    fn parkland_splits_fluid_across_24_hours() {
        let inputs = entries(&[("weight", "70"), ("tbsa", "30")]);
        let value = ParklandFormula
            .calculate(&inputs, &UnitMap::new())
            .value()
            .cloned()
            .unwrap();
        assert_eq!(value.get("totalFluid24h"), Some(8400.0));
        assert_eq!(value.get("first8hTotal"), Some(4200.0));
        assert_eq!(value.get("first8hRate"), Some(525.0));
        assert_eq!(value.get("next16hRate"), Some(262.5));
    }

    #[test]
    fn parkland_rejects_tbsa_over_100() {
        let inputs = entries(&[("weight", "70"), ("tbsa", "110")]);
        let Outcome::Invalid { message } = ParklandFormula.calculate(&inputs, &UnitMap::new())
        else {
            panic!("expected feedback");
        };
        assert!(message.contains("100%"));
    }

    #[test]
    fn ett_cole_formula_at_age_four() {
        let inputs = entries(&[("age", "4")]);
        let value = EttSizePediatric
            .calculate(&inputs, &UnitMap::new())
            .value()
            .cloned()
            .unwrap();
        assert_eq!(value.get("uncuffed"), Some(5.0));
        assert_eq!(value.get("cuffed"), Some(4.5));
    }

    #[test]
    fn ett_out_of_range_age_is_feedback() {
        let inputs = entries(&[("age", "12")]);
        assert!(matches!(
            EttSizePediatric.calculate(&inputs, &UnitMap::new()),
            Outcome::Invalid { .. }
        ));
    }
}
