//! The mnemonic catalog.

use std::sync::LazyLock;

use remed_core::models::Mnemonic;

use crate::matches;

fn mnemonic(id: &str, mnemonic: &str, stands_for: &str, topic: &str, category: &str) -> Mnemonic {
    Mnemonic {
        id: id.to_string(),
        mnemonic: mnemonic.to_string(),
        stands_for: stands_for.to_string(),
        topic: topic.to_string(),
        category: category.to_string(),
    }
}

static MNEMONICS: LazyLock<Vec<Mnemonic>> = LazyLock::new(|| {
    vec![
        mnemonic(
            "mnemonic_mudpiles",
            "MUDPILES",
            "Methanol, Uremia, Diabetic Ketoacidosis, Propylene glycol, Iron/Isoniazid, Lactic acidosis, Ethylene glycol, Salicylates.",
            "Causes of High Anion Gap Metabolic Acidosis (HAGMA)",
            "Acid-Base / Nephrology",
        ),
        mnemonic(
            "mnemonic_sigecaps",
            "SIGECAPS",
            "Sleep (decreased), Interest (decreased anhedonia), Guilt (worthlessness), Energy (decreased fatigue), Concentration (decreased), Appetite (decreased/increased), Psychomotor (agitation/retardation), Suicidal Ideation.",
            "Symptoms of Major Depressive Episode (MDE)",
            "Psychiatry",
        ),
        mnemonic(
            "mnemonic_ooottafvgsh",
            "Oh Oh Oh To Touch And Feel Very Good Velvet, Such Heaven",
            "Olfactory (I), Optic (II), Oculomotor (III), Trochlear (IV), Trigeminal (V), Abducens (VI), Facial (VII), Vestibulocochlear (VIII), Glossopharyngeal (IX), Vagus (X), Spinal Accessory (XI), Hypoglossal (XII).",
            "Cranial Nerves Order and Name",
            "Neurology / Anatomy",
        ),
        mnemonic(
            "mnemonic_cran_nerve_type",
            "Some Say Marry Money But My Brother Says Big Brains Matter More",
            "Sensory/Motor/Both status for Cranial Nerves I-XII. (S)ensory, (M)otor, (B)oth.",
            "Cranial Nerves Type (Sensory/Motor/Both)",
            "Neurology / Anatomy",
        ),
        mnemonic(
            "mnemonic_apgar",
            "APGAR",
            "Appearance (skin color), Pulse (heart rate), Grimace (reflex irritability), Activity (muscle tone), Respiration (breathing effort).",
            "APGAR Score Components for Newborn Assessment",
            "Pediatrics / Obstetrics",
        ),
        mnemonic(
            "mnemonic_causes_pancreatitis",
            "I GET SMASHED",
            "Idiopathic, Gallstones, Ethanol, Trauma, Steroids, Mumps/Malignancy, Autoimmune, Scorpion sting/Spider bite, Hypercalcemia/Hypertriglyceridemia, ERCP, Drugs.",
            "Causes of Acute Pancreatitis",
            "Gastroenterology",
        ),
        mnemonic(
            "mnemonic_5ps_compartment",
            "The 5 P's",
            "Pain (out of proportion), Pallor, Paresthesia, Pulselessness, Paralysis.",
            "Signs and Symptoms of Acute Compartment Syndrome",
            "Orthopedics / Surgery",
        ),
        mnemonic(
            "mnemonic_lead_poisoning",
            "LEAD",
            "Lead lines on gingivae and on metaphyses of long bones, Encephalopathy and Erythrocyte stippling, Abdominal colic and Anemia (microcytic, hypochromic), Drops (wrist and foot drop).",
            "Features of Lead Poisoning",
            "Toxicology / Pediatrics",
        ),
        mnemonic(
            "mnemonic_curb65_pneumonia",
            "CURB-65",
            "Confusion, Urea (>7 mmol/L or BUN >19 mg/dL), Respiratory rate (≥30/min), Blood pressure (SBP <90 mmHg or DBP ≤60 mmHg), Age (≥65 years).",
            "Severity Score for Community-Acquired Pneumonia",
            "Pulmonology / Infectious Disease",
        ),
        mnemonic(
            "mnemonic_abcde_melanoma",
            "ABCDE",
            "Asymmetry, Border irregularity, Color variegation, Diameter (>6 mm), Evolving (changes over time).",
            "Features of Melanoma Suspicion",
            "Dermatology / Oncology",
        ),
    ]
});

/// The full catalog, in display order.
pub fn all() -> &'static [Mnemonic] {
    &MNEMONICS
}

/// Case-insensitive substring search over mnemonic, expansion, topic, and
/// category.
pub fn search(term: &str) -> Vec<&'static Mnemonic> {
    let needle = term.trim().to_lowercase();
    MNEMONICS
        .iter()
        .filter(|item| {
            needle.is_empty()
                || matches(&item.mnemonic, &needle)
                || matches(&item.stands_for, &needle)
                || matches(&item.topic, &needle)
                || matches(&item.category, &needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_search_finds_mudpiles() {
        let hits = search("anion gap");
        assert!(hits.iter().any(|m| m.mnemonic == "MUDPILES"));
    }
}
