//! The procedure reference catalog.

use std::sync::LazyLock;

use remed_core::models::Procedure;

use crate::matches;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

static PROCEDURES: LazyLock<Vec<Procedure>> = LazyLock::new(|| {
    vec![
        Procedure {
            id: "proc_egd".to_string(),
            name: "Upper Endoscopy (EGD - Esophagogastroduodenoscopy)".to_string(),
            keywords: strings(&[
                "egd",
                "upper endoscopy",
                "gastroscopy",
                "esophagoscopy",
                "duodenoscopy",
                "gastroenterology",
            ]),
            description: "A procedure to visually examine the esophagus, stomach, and duodenum using a thin, flexible tube with a light and camera (endoscope).".to_string(),
            indications: strings(&[
                "Investigating symptoms like persistent heartburn, nausea, vomiting, abdominal pain, difficulty swallowing, or GI bleeding.",
                "Diagnosing conditions like GERD, ulcers, inflammation, tumors, or celiac disease.",
                "Performing biopsies to test for H. pylori, cancer, or other conditions.",
                "Therapeutic interventions like stretching narrowed areas (dilatation), removing polyps, or stopping bleeding.",
            ]),
            contraindications: strings(&[
                "Patient refusal.",
                "Severe cardiorespiratory instability.",
                "Uncooperative patient (unless general anesthesia is used).",
                "Perforated viscus (absolute, unless for therapeutic attempt to close perforation).",
                "Severe coagulopathy or thrombocytopenia if biopsy or therapeutic intervention is anticipated (relative).",
            ]),
            preparation: strings(&[
                "Fasting: No food for at least 6-8 hours before the procedure.",
                "Fluids: Clear liquids may be allowed up to 2-4 hours before, then NPO.",
                "Medications: Inform your doctor about all medications, especially blood thinners, diabetes medications, and NSAIDs. Adjustments may be needed.",
                "Arrange for a ride home, as sedation is typically used.",
            ]),
            procedure_steps: strings(&[
                "Sedation is administered (usually IV).",
                "Throat may be numbed with a spray.",
                "Patient lies on left side.",
                "Endoscope passed through mouth into esophagus, stomach, and duodenum.",
                "Air introduced for better visualization.",
                "Examination performed, biopsies/interventions as needed.",
                "Typically 15-30 minutes.",
            ]),
            post_procedure_care: strings(&[
                "Monitoring in recovery area (1-2 hours).",
                "Possible bloating or mild sore throat.",
                "Resume normal diet once fully awake, unless instructed otherwise.",
                "No driving or important decisions for the rest of the day due to sedation.",
            ]),
            risks_complications: strings(&[
                "Bleeding (especially with biopsies/polypectomy).",
                "Infection.",
                "Perforation (rare).",
                "Reaction to sedation.",
                "Aspiration.",
                "Persistent pain.",
            ]),
            alternatives: strings(&[
                "Barium swallow or upper GI series.",
                "Capsule endoscopy.",
                "CT scan or MRI.",
                "Non-invasive H. pylori tests.",
            ]),
            patient_information: "An EGD is a common and generally safe procedure. Follow preparation instructions carefully. Discuss concerns with your doctor.".to_string(),
        },
        Procedure {
            id: "proc_colonoscopy".to_string(),
            name: "Colonoscopy".to_string(),
            keywords: strings(&[
                "colonoscopy",
                "lower endoscopy",
                "colon cancer screening",
                "gastroenterology",
                "polyps",
            ]),
            description: "A procedure to examine the entire length of the colon (large intestine) and rectum using a colonoscope, a flexible tube with a light and camera.".to_string(),
            indications: strings(&[
                "Screening for colorectal cancer and polyps (recommended starting at age 45 for average-risk individuals).",
                "Investigating symptoms like changes in bowel habits, rectal bleeding, abdominal pain, or unexplained weight loss.",
                "Diagnosing inflammatory bowel disease.",
                "Surveillance for patients with a history of polyps or colorectal cancer.",
                "Therapeutic interventions like polyp removal.",
            ]),
            contraindications: strings(&[
                "Patient refusal.",
                "Documented or suspected colonic perforation.",
                "Fulminant colitis or toxic megacolon.",
                "Severe, unstable cardiopulmonary disease.",
                "Inadequate bowel preparation.",
            ]),
            preparation: strings(&[
                "Bowel Cleansing: Crucial for a clear view. Follow prescribed bowel prep instructions exactly.",
                "Diet: Clear liquid diet the day before. Avoid red/purple liquids.",
                "Fasting: NPO for several hours before.",
                "Medications: Inform doctor about all medications, especially blood thinners, iron, diabetes meds.",
                "Arrange for a ride home.",
            ]),
            procedure_steps: strings(&[
                "Sedation administered (usually IV).",
                "Patient lies on left side.",
                "Colonoscope inserted into rectum and advanced through colon to cecum.",
                "Air/CO2 used to inflate colon.",
                "Examination during withdrawal. Polyps removed/biopsies taken as needed.",
                "Typically 20-60 minutes.",
            ]),
            post_procedure_care: strings(&[
                "Monitoring in recovery area.",
                "Possible bloating or gas pains.",
                "Light spotting of blood if biopsies/polypectomy.",
                "Resume normal diet as tolerated, unless instructed otherwise.",
                "No driving for the rest of the day.",
            ]),
            risks_complications: strings(&[
                "Bleeding (especially with polypectomy).",
                "Perforation (rare).",
                "Reaction to sedation.",
                "Infection (rare).",
                "Post-polypectomy syndrome.",
            ]),
            alternatives: strings(&[
                "Flexible sigmoidoscopy.",
                "CT colonography (Virtual Colonoscopy).",
                "Fecal Immunochemical Test (FIT) / Stool DNA test.",
                "Barium enema.",
            ]),
            patient_information: "Colonoscopy is effective for cancer prevention/diagnosis. Bowel prep is critical. Discuss concerns with your doctor.".to_string(),
        },
        Procedure {
            id: "proc_lumbar_puncture".to_string(),
            name: "Lumbar Puncture (Spinal Tap)".to_string(),
            keywords: strings(&[
                "lumbar puncture",
                "lp",
                "spinal tap",
                "csf",
                "meningitis",
                "neurology",
            ]),
            description: "A procedure to collect cerebrospinal fluid (CSF) from the lumbar subarachnoid space using a thin needle inserted between two lower-back vertebrae.".to_string(),
            indications: strings(&[
                "Suspected central nervous system infection (meningitis, encephalitis).",
                "Suspected subarachnoid hemorrhage with a negative CT scan.",
                "Diagnosis of inflammatory and demyelinating conditions (e.g., Guillain-Barré, multiple sclerosis).",
                "Measurement of opening pressure (e.g., idiopathic intracranial hypertension).",
                "Intrathecal administration of medications or contrast.",
            ]),
            contraindications: strings(&[
                "Signs of raised intracranial pressure with risk of herniation (obtain imaging first when in doubt).",
                "Skin infection at the puncture site.",
                "Severe coagulopathy or thrombocytopenia.",
                "Suspected spinal epidural abscess.",
            ]),
            preparation: strings(&[
                "Explain the procedure and obtain informed consent.",
                "Review coagulation status and anticoagulant medications.",
                "Position the patient: lateral decubitus with knees to chest, or sitting and leaning forward.",
                "Identify the L3-L4 or L4-L5 interspace at the level of the iliac crests.",
            ]),
            procedure_steps: strings(&[
                "Sterile preparation and draping of the site.",
                "Local anesthetic infiltration.",
                "Spinal needle advanced through the interspace until CSF flows.",
                "Opening pressure measured when indicated (lateral position).",
                "CSF collected into sequential numbered tubes.",
                "Needle withdrawn and a small dressing applied.",
            ]),
            post_procedure_care: strings(&[
                "Brief period of rest; routine activity can usually resume the same day.",
                "Encourage oral fluids.",
                "Simple analgesia for headache or back soreness.",
                "Advise to report severe or persistent headache, fever, or leg weakness.",
            ]),
            risks_complications: strings(&[
                "Post-dural puncture headache (common, usually self-limited).",
                "Back pain at the site.",
                "Bleeding (spinal hematoma is rare).",
                "Infection (rare).",
                "Cerebral herniation (rare; risk minimized by pre-procedure assessment).",
            ]),
            alternatives: strings(&[
                "Neuroimaging (CT/MRI) where it can answer the clinical question.",
                "Fluoroscopy-guided puncture after failed bedside attempts.",
                "Empiric treatment in selected emergencies when LP must be delayed.",
            ]),
            patient_information: "A lumbar puncture samples the fluid around the spinal cord. The needle is inserted well below where the spinal cord ends, so cord injury is very unlikely. Headache afterward is the most common side effect.".to_string(),
        },
    ]
});

/// The full catalog, in display order.
pub fn all() -> &'static [Procedure] {
    &PROCEDURES
}

/// Case-insensitive substring search over name, description, keywords, and
/// indications.
pub fn search(term: &str) -> Vec<&'static Procedure> {
    let needle = term.trim().to_lowercase();
    PROCEDURES
        .iter()
        .filter(|item| {
            needle.is_empty()
                || matches(&item.name, &needle)
                || matches(&item.description, &needle)
                || item.keywords.iter().any(|k| matches(k, &needle))
                || item.indications.iter().any(|i| matches(i, &needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_search_finds_colonoscopy() {
        let hits = search("polyps");
        assert!(hits.iter().any(|p| p.id == "proc_colonoscopy"));
    }

    #[test]
    fn every_procedure_is_fully_described() {
        for proc in all() {
            assert!(!proc.indications.is_empty(), "{}", proc.id);
            assert!(!proc.procedure_steps.is_empty(), "{}", proc.id);
            assert!(!proc.risks_complications.is_empty(), "{}", proc.id);
        }
    }
}
