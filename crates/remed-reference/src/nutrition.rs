//! The clinical nutrition guide.

use std::sync::LazyLock;

use remed_core::models::{NutritionGuideline, NutritionSubsection};

use crate::matches;

fn section(id: &str, title: &str, content: &[&str], subsections: Vec<NutritionSubsection>) -> NutritionGuideline {
    NutritionGuideline {
        id: id.to_string(),
        title: title.to_string(),
        content: content.iter().map(|c| c.to_string()).collect(),
        subsections,
    }
}

fn subsection(id: &str, title: &str, content: &[&str]) -> NutritionSubsection {
    NutritionSubsection {
        id: id.to_string(),
        title: title.to_string(),
        content: content.iter().map(|c| c.to_string()).collect(),
    }
}

static GUIDELINES: LazyLock<Vec<NutritionGuideline>> = LazyLock::new(|| {
    vec![
        section(
            "introduction_nutrition",
            "Introduction to Nutritional Principles",
            &[
                "Diligent attention to patients' nutritional needs can have a major positive impact on medical outcomes. This is particularly true in GI and liver disease. Nutritional management often involves determining estimated caloric and protein needs, assessing nutritional status, and developing a suitable plan.",
                "This guide provides an overview of nutritional principles, assessment, and support based on common clinical knowledge. It is intended for educational and informational purposes only.",
            ],
            vec![],
        ),
        section(
            "basic_nutritional_concepts",
            "Basic Nutritional Concepts",
            &[
                "Understanding the fundamentals of energy, macronutrients, and micronutrients is essential for proper nutritional management.",
            ],
            vec![
                subsection(
                    "energy_stores_metabolism",
                    "Energy Stores & Metabolism",
                    &[
                        "The body's major fuel reserve is triglyceride (TG) in adipose tissue. Glycogen provides a smaller, more readily available energy source.",
                        "Total Daily Energy Expenditure (TEE) has three components: Resting Energy Expenditure (REE, ~70% of TEE), the energy expenditure of physical activity (~20%), and the thermic effect of feeding (~10%).",
                        "In acutely ill, hospitalized patients, physical activity energy is often ignored, and the thermic effect of feeding is built into predictive equations.",
                        "REE can be estimated using formulas or measured by indirect calorimetry (gold standard, but not always practical). Metabolic stress increases REE; hypocaloric feeding without illness can decrease it by 10-15%.",
                    ],
                ),
                subsection(
                    "energy_estimation_formulas",
                    "Energy Estimation Formulas",
                    &[
                        "Harris-Benedict (kcal/day): Men: 66 + (13.7 * W) + (5 * H) - (6.8 * A); Women: 665 + (9.6 * W) + (1.8 * H) - (4.7 * A).",
                        "Mifflin-St Jeor (kcal/day), often preferred for healthy individuals: Men: (10 * W) + (6.25 * H) - (5 * A) + 5; Women: (10 * W) + (6.25 * H) - (5 * A) - 161.",
                        "W = weight in kg, H = height in cm, A = age in years.",
                        "A simple weight-based rule of thumb for hospitalized patients is 25-30 kcal/kg/day.",
                    ],
                ),
                subsection(
                    "macronutrients",
                    "Macronutrients",
                    &[
                        "Carbohydrates provide 4 kcal/g and are the preferred fuel for brain and red cells; a minimum of ~100-150 g/day spares protein.",
                        "Protein provides 4 kcal/g. Healthy adults need ~0.8 g/kg/day; catabolic illness raises requirements to 1.2-2.0 g/kg/day.",
                        "Fat provides 9 kcal/g. Essential fatty acid deficiency is prevented by supplying 2-4% of calories as linoleic acid.",
                    ],
                ),
            ],
        ),
        section(
            "nutritional_assessment",
            "Nutritional Assessment",
            &[
                "No single test defines nutritional status; assessment integrates history, examination, anthropometrics, and selected laboratory values.",
            ],
            vec![
                subsection(
                    "screening_tools",
                    "Screening & History",
                    &[
                        "Unintentional loss of >10% of body weight in 6 months is clinically significant and predicts complications.",
                        "Ask about intake changes, GI symptoms lasting more than two weeks, and functional capacity.",
                        "BMI below 18.5 kg/m² suggests undernutrition; below 16 kg/m² indicates severe undernutrition.",
                    ],
                ),
                subsection(
                    "laboratory_markers",
                    "Laboratory Markers",
                    &[
                        "Albumin has a long half-life (~20 days) and falls with inflammation, making it a poor marker of short-term nutrition; it remains a useful prognostic indicator.",
                        "Prealbumin (half-life ~2 days) responds faster to feeding but shares the same inflammation caveat.",
                        "Check micronutrients (zinc, folate, B12, vitamin D) in prolonged inadequate intake, malabsorption, or after bariatric surgery.",
                    ],
                ),
            ],
        ),
        section(
            "nutrition_support",
            "Nutrition Support",
            &[
                "When oral intake is inadequate, nutrition support follows a simple hierarchy: fortify oral intake first, then enteral tube feeding, reserving parenteral nutrition for a non-functioning or inaccessible gut.",
            ],
            vec![
                subsection(
                    "enteral_nutrition",
                    "Enteral Nutrition",
                    &[
                        "If the gut works, use it. Enteral feeding maintains mucosal integrity and carries fewer infectious complications than parenteral nutrition.",
                        "Start within 24-48 hours in critically ill patients who cannot eat.",
                        "Gastric residual volumes need not be checked routinely; elevate the head of the bed to reduce aspiration risk.",
                    ],
                ),
                subsection(
                    "parenteral_nutrition",
                    "Parenteral Nutrition",
                    &[
                        "Reserve parenteral nutrition for prolonged gut failure (obstruction, high-output fistula, severe malabsorption).",
                        "In a previously well-nourished patient, waiting 5-7 days before starting is reasonable.",
                        "Monitor for hyperglycemia, electrolyte shifts, and catheter-related bloodstream infection.",
                    ],
                ),
                subsection(
                    "refeeding_syndrome",
                    "Refeeding Syndrome",
                    &[
                        "Refeeding a severely malnourished patient shifts phosphate, potassium, and magnesium intracellularly and can be fatal.",
                        "Identify at-risk patients (minimal intake >5 days, alcohol use disorder, anorexia nervosa), start at ~50% of goal calories, supplement thiamine, and replete electrolytes before and during feeding.",
                    ],
                ),
            ],
        ),
    ]
});

/// The full guide, in reading order.
pub fn all() -> &'static [NutritionGuideline] {
    &GUIDELINES
}

/// Case-insensitive substring search over titles and paragraph content,
/// including subsections.
pub fn search(term: &str) -> Vec<&'static NutritionGuideline> {
    let needle = term.trim().to_lowercase();
    GUIDELINES
        .iter()
        .filter(|section| {
            needle.is_empty()
                || matches(&section.title, &needle)
                || section.content.iter().any(|c| matches(c, &needle))
                || section.subsections.iter().any(|sub| {
                    matches(&sub.title, &needle) || sub.content.iter().any(|c| matches(c, &needle))
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subsection_content_is_searchable() {
        let hits = search("refeeding");
        assert!(hits.iter().any(|g| g.id == "nutrition_support"));
    }
}
