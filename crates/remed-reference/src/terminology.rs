//! The medical terminology catalog.

use std::sync::LazyLock;

use remed_core::models::TerminologyEntry;

use crate::{matches, matches_opt};

#[allow(clippy::too_many_arguments)]
fn term(
    id: &str,
    primary_term: &str,
    definition: &str,
    primary_abbr: Option<&str>,
    variants: &[&str],
    category: &str,
    example: Option<&str>,
    etymology: Option<&str>,
    notes: Option<&str>,
) -> TerminologyEntry {
    TerminologyEntry {
        id: id.to_string(),
        primary_term: primary_term.to_string(),
        definition: definition.to_string(),
        primary_abbr: primary_abbr.map(str::to_string),
        variants: variants.iter().map(|v| v.to_string()).collect(),
        category: category.to_string(),
        example: example.map(str::to_string),
        etymology: etymology.map(str::to_string),
        notes: notes.map(str::to_string),
    }
}

static TERMS: LazyLock<Vec<TerminologyEntry>> = LazyLock::new(|| {
    vec![
        term(
            "term_ascites",
            "Ascites",
            "Abnormal accumulation of fluid in the peritoneal cavity, most commonly due to cirrhosis with portal hypertension.",
            None,
            &[],
            "Gastroenterology / Hepatology",
            Some("The patient presented with tense ascites requiring paracentesis."),
            Some("From Greek 'askos', a wineskin or bag."),
            Some("The serum-ascites albumin gradient (SAAG) helps distinguish portal hypertensive from other causes."),
        ),
        term(
            "term_bradycardia",
            "Bradycardia",
            "A resting heart rate below 60 beats per minute. May be physiologic in athletes or pathologic with conduction disease.",
            None,
            &["Bradyarrhythmia"],
            "Cardiology",
            Some("Symptomatic bradycardia with syncope is an indication for pacing."),
            Some("From Greek 'bradys' (slow) and 'kardia' (heart)."),
            None,
        ),
        term(
            "term_cachexia",
            "Cachexia",
            "A complex syndrome of involuntary weight loss, muscle wasting, and anorexia associated with chronic disease such as cancer, heart failure, or COPD.",
            None,
            &[],
            "General / Oncology",
            Some("Cancer cachexia is not reversed by nutritional supplementation alone."),
            Some("From Greek 'kakos' (bad) and 'hexis' (condition)."),
            None,
        ),
        term(
            "term_dyspnea",
            "Dyspnea",
            "The subjective sensation of breathlessness or difficult breathing, out of proportion to the level of exertion.",
            Some("SOB"),
            &["Dyspnoea", "Shortness of breath"],
            "Pulmonology",
            Some("Paroxysmal nocturnal dyspnea suggests left-sided heart failure."),
            Some("From Greek 'dys' (difficult) and 'pnoia' (breathing)."),
            None,
        ),
        term(
            "term_hematemesis",
            "Hematemesis",
            "Vomiting of blood, indicating bleeding proximal to the ligament of Treitz. Fresh red blood or 'coffee-ground' material.",
            None,
            &["Haematemesis"],
            "Gastroenterology",
            Some("Hematemesis with hemodynamic instability mandates urgent endoscopy."),
            Some("From Greek 'haima' (blood) and 'emesis' (vomiting)."),
            None,
        ),
        term(
            "term_iatrogenic",
            "Iatrogenic",
            "An illness or adverse effect caused by medical examination or treatment itself.",
            None,
            &[],
            "General",
            Some("The pneumothorax was iatrogenic, following central line placement."),
            Some("From Greek 'iatros' (physician) and '-genic' (produced by)."),
            None,
        ),
        term(
            "term_idiopathic",
            "Idiopathic",
            "Arising spontaneously or from an unknown cause, after known causes have been excluded.",
            None,
            &[],
            "General",
            Some("Idiopathic pulmonary fibrosis is a diagnosis of exclusion."),
            Some("From Greek 'idios' (one's own) and 'pathos' (suffering)."),
            None,
        ),
        term(
            "term_melena",
            "Melena",
            "Black, tarry, foul-smelling stools from digested blood, usually indicating upper gastrointestinal bleeding.",
            None,
            &["Melaena"],
            "Gastroenterology",
            Some("Melena can follow as little as 50 mL of upper GI blood loss."),
            Some("From Greek 'melas' (black)."),
            Some("Iron and bismuth can darken stool and mimic melena."),
        ),
        term(
            "term_oliguria",
            "Oliguria",
            "Urine output below roughly 400-500 mL per day in an adult (or <0.5 mL/kg/hr), a cardinal sign of acute kidney injury.",
            None,
            &[],
            "Nephrology",
            Some("Persistent oliguria despite fluid resuscitation suggests intrinsic renal injury."),
            Some("From Greek 'oligos' (few, little) and 'ouron' (urine)."),
            None,
        ),
        term(
            "term_pruritus",
            "Pruritus",
            "The sensation of itching. Generalized pruritus without rash can signal cholestasis, uremia, or hematologic malignancy.",
            None,
            &[],
            "Dermatology / General",
            Some("Cholestatic pruritus is classically worse at night and on the palms and soles."),
            Some("From Latin 'prurire' (to itch)."),
            None,
        ),
        term(
            "term_syncope",
            "Syncope",
            "A transient loss of consciousness from global cerebral hypoperfusion, with rapid onset and spontaneous complete recovery.",
            None,
            &["Fainting"],
            "Cardiology / Neurology",
            Some("Exertional syncope warrants evaluation for structural heart disease."),
            Some("From Greek 'synkope' (a cutting short)."),
            None,
        ),
        term(
            "term_tachypnea",
            "Tachypnea",
            "An abnormally rapid respiratory rate, above about 20 breaths per minute in a resting adult.",
            None,
            &["Tachypnoea"],
            "Pulmonology",
            Some("Quiet tachypnea may be the only early sign of sepsis or metabolic acidosis."),
            Some("From Greek 'tachys' (swift) and 'pnoia' (breathing)."),
            None,
        ),
    ]
});

/// The full catalog, sorted by primary term.
pub fn all() -> &'static [TerminologyEntry] {
    &TERMS
}

/// Case-insensitive substring search over every descriptive field, sorted by
/// primary term.
pub fn search(term: &str) -> Vec<&'static TerminologyEntry> {
    let needle = term.trim().to_lowercase();
    let mut hits: Vec<&'static TerminologyEntry> = TERMS
        .iter()
        .filter(|item| {
            needle.is_empty()
                || matches(&item.primary_term, &needle)
                || matches(&item.definition, &needle)
                || matches_opt(&item.primary_abbr, &needle)
                || item.variants.iter().any(|v| matches(v, &needle))
                || matches(&item.category, &needle)
                || matches_opt(&item.example, &needle)
                || matches_opt(&item.etymology, &needle)
                || matches_opt(&item.notes, &needle)
        })
        .collect();
    hits.sort_by(|a, b| a.primary_term.cmp(&b.primary_term));
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_are_sorted_by_term() {
        let hits = search("");
        let terms: Vec<&str> = hits.iter().map(|t| t.primary_term.as_str()).collect();
        let mut sorted = terms.clone();
        sorted.sort();
        assert_eq!(terms, sorted);
    }

    #[test]
    fn variant_spellings_are_searchable() {
        let hits = search("haematemesis");
        assert!(hits.iter().any(|t| t.id == "term_hematemesis"));
    }
}
