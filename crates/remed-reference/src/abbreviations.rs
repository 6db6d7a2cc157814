//! The medical abbreviation catalog.
//!
//! Ambiguous abbreviations appear once per meaning ("CA" is both Cancer and
//! Calcium); the duplication documents the ambiguity and must not be
//! collapsed.

use std::sync::LazyLock;

use remed_core::models::Abbreviation;

use crate::{matches, matches_opt};

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    primary_abbr: &str,
    variants: &[&str],
    full_form: &str,
    description: &str,
    category: &str,
    snomed_ct_id: Option<&str>,
    icd10_code: Option<&str>,
    notes: Option<&str>,
) -> Abbreviation {
    Abbreviation {
        id: id.to_string(),
        primary_abbr: primary_abbr.to_string(),
        variants: variants.iter().map(|v| v.to_string()).collect(),
        full_form: full_form.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        snomed_ct_id: snomed_ct_id.map(str::to_string),
        icd10_code: icd10_code.map(str::to_string),
        notes: notes.map(str::to_string),
    }
}

static ABBREVIATIONS: LazyLock<Vec<Abbreviation>> = LazyLock::new(|| {
    vec![
        entry(
            "arterial-blood-gases",
            "ABG",
            &[],
            "Arterial blood gases",
            "A blood test that measures the acidity (pH) and the levels of oxygen and carbon dioxide in the blood from an artery.",
            "Laboratory",
            Some("271329004"),
            Some("R79.81"),
            Some("Used to detect lung diseases, monitor treatment for lung conditions, and check for severe kidney or metabolic problems."),
        ),
        entry(
            "angiotensin-converting-enzyme",
            "ACE",
            &[],
            "Angiotensin converting enzyme",
            "An enzyme that narrows blood vessels. Drugs called ACE inhibitors block this enzyme and are used to treat high blood pressure, heart failure, and diabetes-related kidney disease.",
            "Pharmacology",
            Some("73586001"),
            Some("I10"),
            Some("ACE inhibitors are a very common class of cardiovascular medication."),
        ),
        entry(
            "anterior-cruciate-ligament",
            "ACL",
            &[],
            "Anterior cruciate ligament",
            "A key ligament in the center of the knee that helps stabilize it. An ACL tear is a common sports injury.",
            "Anatomy & Orthopedics",
            Some("362074003"),
            Some("S83.53"),
            None,
        ),
        entry(
            "attention-deficit-hyperactivity-disorder",
            "ADHD",
            &[],
            "Attention deficit hyperactivity disorder",
            "A neurodevelopmental disorder characterized by persistent patterns of inattention, hyperactivity, and impulsivity.",
            "Psychiatry",
            Some("406506008"),
            Some("F90.9"),
            None,
        ),
        entry(
            "atrial-fibrillation",
            "AFIB",
            &["AF"],
            "Atrial fibrillation",
            "An irregular and often rapid heart rate (arrhythmia) that can increase the risk of stroke, heart failure, and other heart-related complications.",
            "Cardiology",
            Some("49436004"),
            Some("I48.91"),
            None,
        ),
        entry(
            "acute-kidney-injury",
            "AKI",
            &["ARF"],
            "Acute kidney injury",
            "A sudden episode of kidney failure or kidney damage that happens within a few hours or a few days.",
            "Nephrology",
            Some("14669001"),
            Some("N17.9"),
            Some("Previously called acute renal failure (ARF)."),
        ),
        entry(
            "alanine-aminotransferase",
            "ALT",
            &["SGPT"],
            "Alanine aminotransferase",
            "An enzyme found mostly in the liver. Elevated blood levels are a marker of hepatocellular injury.",
            "Laboratory",
            Some("56935002"),
            Some("R74.01"),
            None,
        ),
        entry(
            "aspartate-aminotransferase",
            "AST",
            &["SGOT"],
            "Aspartate aminotransferase",
            "An enzyme found in the liver, heart, and muscle. Elevated levels can indicate liver damage, but are less liver-specific than ALT.",
            "Laboratory",
            Some("45896001"),
            Some("R74.01"),
            None,
        ),
        entry(
            "blood-urea-nitrogen",
            "BUN",
            &[],
            "Blood urea nitrogen",
            "A blood test that measures the amount of nitrogen from the waste product urea. Used to assess kidney function and hydration.",
            "Laboratory",
            Some("105011006"),
            Some("R94.4"),
            None,
        ),
        entry(
            "cancer",
            "CA",
            &[],
            "Cancer",
            "A general term for a large group of diseases characterized by the uncontrolled growth and spread of abnormal cells.",
            "Oncology",
            Some("363346000"),
            Some("C80.1"),
            Some("Ambiguous abbreviation. Can also stand for 'Calcium'."),
        ),
        entry(
            "calcium",
            "CA",
            &["Ca"],
            "Calcium",
            "A mineral essential for life. A blood calcium test measures the level of calcium in the blood.",
            "Laboratory & Endocrinology",
            Some("104245008"),
            None,
            Some("Ambiguous abbreviation. Can also stand for 'Cancer'."),
        ),
        entry(
            "coronary-artery-bypass-graft",
            "CABG",
            &[],
            "Coronary artery bypass graft",
            "A surgical procedure that restores blood flow to the heart muscle by diverting blood around a blocked coronary artery.",
            "Cardiothoracic Surgery",
            Some("232717009"),
            Some("Z95.1"),
            Some("Commonly pronounced 'cabbage'."),
        ),
        entry(
            "complete-blood-count",
            "CBC",
            &["FBC"],
            "Complete blood count",
            "A blood test panel that evaluates the cells circulating in blood: red cells, white cells, and platelets.",
            "Laboratory",
            Some("26604007"),
            None,
            None,
        ),
        entry(
            "congestive-heart-failure",
            "CHF",
            &["HF"],
            "Congestive heart failure",
            "A chronic condition in which the heart does not pump blood as well as it should, leading to fluid buildup.",
            "Cardiology",
            Some("42343007"),
            Some("I50.9"),
            None,
        ),
        entry(
            "chronic-kidney-disease",
            "CKD",
            &["CRF"],
            "Chronic kidney disease",
            "The gradual loss of kidney function over months to years, staged by eGFR and albuminuria.",
            "Nephrology",
            Some("709044004"),
            Some("N18.9"),
            None,
        ),
        entry(
            "chronic-obstructive-pulmonary-disease",
            "COPD",
            &["COAD"],
            "Chronic obstructive pulmonary disease",
            "A chronic inflammatory lung disease that causes obstructed airflow from the lungs, most often due to smoking.",
            "Pulmonology",
            Some("13645005"),
            Some("J44.9"),
            None,
        ),
        entry(
            "cerebrospinal-fluid",
            "CSF",
            &[],
            "Cerebrospinal fluid",
            "The clear fluid surrounding the brain and spinal cord. Sampled via lumbar puncture to diagnose infections, bleeding, and other neurologic disease.",
            "Neurology",
            Some("65216001"),
            None,
            None,
        ),
        entry(
            "cerebrovascular-accident",
            "CVA",
            &[],
            "Cerebrovascular accident",
            "The medical term for a stroke: an interruption of blood supply to part of the brain.",
            "Neurology",
            Some("230690007"),
            Some("I63.9"),
            Some("'Brain attack' is sometimes used to stress urgency, in parallel with 'heart attack'."),
        ),
        entry(
            "deep-vein-thrombosis",
            "DVT",
            &[],
            "Deep vein thrombosis",
            "A blood clot in a deep vein, usually in the legs. Can break loose and cause a pulmonary embolism.",
            "Vascular Medicine",
            Some("128053003"),
            Some("I82.40"),
            None,
        ),
        entry(
            "diabetic-ketoacidosis",
            "DKA",
            &[],
            "Diabetic ketoacidosis",
            "A serious, acute complication of diabetes in which the body produces excess blood acids (ketones).",
            "Endocrinology",
            Some("420422005"),
            Some("E10.10"),
            None,
        ),
        entry(
            "electrocardiogram",
            "ECG",
            &["EKG"],
            "Electrocardiogram",
            "A recording of the electrical activity of the heart, used to detect arrhythmias, ischemia, and other cardiac conditions.",
            "Cardiology",
            Some("29303009"),
            None,
            Some("'EKG' follows the German spelling and remains common in North America."),
        ),
        entry(
            "estimated-glomerular-filtration-rate",
            "eGFR",
            &["GFR"],
            "Estimated glomerular filtration rate",
            "A calculated estimate of how well the kidneys filter blood, derived from serum creatinine, age, and sex.",
            "Nephrology",
            Some("80274001"),
            None,
            None,
        ),
        entry(
            "gastroesophageal-reflux-disease",
            "GERD",
            &["GORD"],
            "Gastroesophageal reflux disease",
            "A chronic condition where stomach acid frequently flows back into the esophagus, irritating its lining.",
            "Gastroenterology",
            Some("235595009"),
            Some("K21.9"),
            None,
        ),
        entry(
            "international-normalized-ratio",
            "INR",
            &[],
            "International normalized ratio",
            "A standardized measure of how long blood takes to clot, used to monitor warfarin therapy and liver function.",
            "Laboratory",
            Some("165581004"),
            None,
            None,
        ),
        entry(
            "myocardial-infarction",
            "MI",
            &["AMI"],
            "Myocardial infarction",
            "A heart attack: death of heart muscle due to prolonged lack of blood supply.",
            "Cardiology",
            Some("22298006"),
            Some("I21.9"),
            None,
        ),
        entry(
            "nil-per-os",
            "NPO",
            &["NBM"],
            "Nil per os (nothing by mouth)",
            "An instruction to withhold all food and fluids from a patient, typically before a procedure or surgery.",
            "General",
            None,
            None,
            Some("From the Latin 'nil per os'."),
        ),
        entry(
            "pulmonary-embolism",
            "PE",
            &[],
            "Pulmonary embolism",
            "A sudden blockage of a lung artery, usually by a blood clot that traveled from a leg vein.",
            "Pulmonology",
            Some("59282003"),
            Some("I26.99"),
            Some("Ambiguous abbreviation. Can also stand for 'Physical Examination' or 'Pleural Effusion' depending on context."),
        ),
        entry(
            "transient-ischemic-attack",
            "TIA",
            &[],
            "Transient ischemic attack",
            "A brief episode of stroke-like symptoms that resolves without permanent damage; a warning sign for future stroke.",
            "Neurology",
            Some("266257000"),
            Some("G45.9"),
            Some("Colloquially called a 'mini-stroke'."),
        ),
        entry(
            "urinary-tract-infection",
            "UTI",
            &[],
            "Urinary tract infection",
            "An infection in any part of the urinary system: kidneys, ureters, bladder, or urethra.",
            "Infectious Disease",
            Some("68566005"),
            Some("N39.0"),
            None,
        ),
        entry(
            "white-blood-cell",
            "WBC",
            &[],
            "White blood cell",
            "The immune cells of the blood. A WBC count is a standard part of the complete blood count.",
            "Laboratory",
            Some("52501007"),
            None,
            None,
        ),
    ]
});

/// The full catalog, in display order.
pub fn all() -> &'static [Abbreviation] {
    &ABBREVIATIONS
}

/// Case-insensitive substring search over abbreviation, full form,
/// description, category, notes, and variants.
pub fn search(term: &str) -> Vec<&'static Abbreviation> {
    let needle = term.trim().to_lowercase();
    ABBREVIATIONS
        .iter()
        .filter(|item| {
            needle.is_empty()
                || matches(&item.primary_abbr, &needle)
                || matches(&item.full_form, &needle)
                || matches(&item.description, &needle)
                || matches(&item.category, &needle)
                || matches_opt(&item.notes, &needle)
                || item.variants.iter().any(|v| matches(v, &needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambiguous_abbreviations_are_kept_distinct() {
        let hits = search("ca");
        let ca: Vec<_> = hits.iter().filter(|a| a.primary_abbr == "CA").collect();
        assert_eq!(ca.len(), 2);
        let forms: Vec<&str> = ca.iter().map(|a| a.full_form.as_str()).collect();
        assert!(forms.contains(&"Cancer"));
        assert!(forms.contains(&"Calcium"));
    }

    #[test]
    fn search_covers_variants() {
        let hits = search("ekg");
        assert!(hits.iter().any(|a| a.primary_abbr == "ECG"));
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<&str> = all().iter().map(|a| a.id.as_str()).collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }
}
