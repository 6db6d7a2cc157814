//! remed-calculators
//!
//! The unit-normalizing calculation engine: clinical scoring and conversion
//! calculators as pure, stateless definitions. Each calculator declares its
//! input fields (with optional unit tables), a `calculate` over the raw
//! value/unit maps, and a threshold-lookup interpretation of the result.

pub mod calculators;
pub mod defaults;
pub mod error;
pub mod evaluate;
pub mod input;
pub mod result;
pub mod units;

use error::CalculatorError;
use input::{InputDescriptor, InputMap, UnitMap};
use result::{Details, Outcome, ResultUnit, Value};

/// Trait implemented by each clinical calculator.
///
/// Implementations are pure and synchronous: `calculate` and `interpret` must
/// not perform I/O, must not panic for any well-typed input, and must fold
/// out-of-domain conditions into [`Outcome::Invalid`].
pub trait Calculator: Send + Sync {
    /// Stable identifier (e.g. "bmi", "meldNa"). Also the persistence key for
    /// the calculator's saved input state.
    fn id(&self) -> &str;

    /// Human-readable name (e.g. "Body Mass Index (BMI)").
    fn name(&self) -> &str;

    /// Lower-case search keywords.
    fn keywords(&self) -> &[&str];

    /// The ordered input fields.
    fn inputs(&self) -> &[InputDescriptor];

    /// Label shown next to the result.
    fn result_label(&self) -> &str;

    /// Display unit(s) of the result.
    fn result_unit(&self) -> ResultUnit {
        ResultUnit::None
    }

    /// Static reference material (formula text, notes). Display-only.
    fn details(&self) -> Details {
        Details::new()
    }

    /// Run the calculation against the raw inputs and unit selections.
    fn calculate(&self, inputs: &InputMap, units: &UnitMap) -> Outcome;

    /// Human-readable guidance for a valid result, built by threshold lookup.
    /// A few calculators read the inputs or unit selections to branch on
    /// context (sex, unit convention).
    fn interpret(&self, _value: &Value, _inputs: &InputMap, _units: &UnitMap) -> Option<String> {
        None
    }

    /// The inputs that are active given the current values. Most calculators
    /// use every input; a few expose different fields depending on a sibling
    /// selection. Both rendering and the completeness gate consume this.
    fn active_inputs(&self, _inputs: &InputMap) -> Vec<&InputDescriptor> {
        self.inputs().iter().collect()
    }
}

/// Return all registered calculators.
pub fn all_calculators() -> Vec<Box<dyn Calculator>> {
    use calculators::*;

    vec![
        // Anthropometry & nutrition
        Box::new(anthropometry::BodyMassIndex),
        Box::new(anthropometry::IdealBodyWeight),
        Box::new(anthropometry::AdjustedBodyWeight),
        Box::new(anthropometry::BodySurfaceArea),
        Box::new(anthropometry::BmrTdee),
        Box::new(anthropometry::MacronutrientRatio),
        Box::new(anthropometry::TargetHeight),
        // Renal
        Box::new(renal::CreatinineClearance),
        Box::new(renal::CkdEpi2021),
        Box::new(renal::MdrdEgfr),
        Box::new(renal::FractionalExcretionSodium),
        // Electrolytes & acid-base
        Box::new(electrolytes::AnionGap),
        Box::new(electrolytes::CorrectedAnionGap),
        Box::new(electrolytes::DeltaDeltaGap),
        Box::new(electrolytes::WintersFormula),
        Box::new(electrolytes::SodiumCorrectionHyperglycemia),
        Box::new(electrolytes::CorrectedCalcium),
        // Hepatology
        Box::new(hepatology::ChildPugh),
        Box::new(hepatology::MeldNa),
        Box::new(hepatology::Fib4),
        Box::new(hepatology::LilleModel),
        Box::new(hepatology::MaddreyDf),
        Box::new(hepatology::PledScore),
        Box::new(hepatology::AihScore),
        Box::new(hepatology::Saag),
        // Hematology
        Box::new(hematology::AbsoluteEosinophilCount),
        Box::new(hematology::AbsoluteLymphocyteCount),
        Box::new(hematology::AbsoluteNeutrophilCount),
        Box::new(hematology::AbsoluteReticulocyteCount),
        Box::new(hematology::CorrectedCsfWbc),
        // Cardiology
        Box::new(cardiology::MeanArterialPressure),
        Box::new(cardiology::ChadsVasc),
        Box::new(cardiology::HasBled),
        Box::new(cardiology::TimiStemi),
        Box::new(cardiology::FriedewaldLdl),
        // Pulmonology & critical care
        Box::new(pulmonology::AaGradient),
        Box::new(pulmonology::Curb65),
        Box::new(pulmonology::PneumoniaSeverityIndex),
        Box::new(pulmonology::BodeIndex),
        Box::new(pulmonology::QSofa),
        Box::new(pulmonology::Sofa),
        Box::new(pulmonology::EpworthSleepiness),
        // Gastroenterology
        Box::new(gastroenterology::BristolStool),
        Box::new(gastroenterology::LaEsophagitis),
        Box::new(gastroenterology::MontrealIbd),
        Box::new(gastroenterology::PragueBarretts),
        Box::new(gastroenterology::OaklandScore),
        Box::new(gastroenterology::BisapScore),
        // Screening & assessment
        Box::new(screening::AdamScreener),
        Box::new(screening::AuditScore),
        Box::new(screening::GdsShort),
        Box::new(screening::CiwaAr),
        Box::new(screening::CentorScore),
        Box::new(screening::WellsDvt),
        Box::new(screening::Apgar),
        Box::new(screening::GlasgowComaScale),
        // Dosing & emergency
        Box::new(dosing::MorphineMilligramEquivalents),
        Box::new(dosing::ParklandFormula),
        Box::new(dosing::EttSizePediatric),
    ]
}

/// Look up a calculator by ID.
pub fn calculator(id: &str) -> Option<Box<dyn Calculator>> {
    all_calculators().into_iter().find(|c| c.id() == id)
}

/// Look up a calculator by ID, erroring on unknown ids.
pub fn require_calculator(id: &str) -> Result<Box<dyn Calculator>, CalculatorError> {
    calculator(id).ok_or_else(|| CalculatorError::UnknownCalculator(id.to_string()))
}

/// Case-insensitive substring search over names and keywords, sorted by name.
pub fn search_calculators(query: &str) -> Vec<Box<dyn Calculator>> {
    let needle = query.trim().to_lowercase();
    let mut matches: Vec<Box<dyn Calculator>> = all_calculators()
        .into_iter()
        .filter(|c| {
            needle.is_empty()
                || c.name().to_lowercase().contains(&needle)
                || c.keywords().iter().any(|k| k.contains(&needle))
        })
        .collect();
    matches.sort_by(|a, b| a.name().cmp(b.name()));
    matches
}
